//! Terminal styling for reports.

pub mod theme;

pub use theme::{should_use_colors, AuditTheme};
