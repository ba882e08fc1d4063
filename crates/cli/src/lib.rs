//! CLI components for the `summarize` binary

pub mod config;
pub mod format;
pub mod progress;

pub use config::{AppConfig, ConfigLoader, ConfigSource};
pub use format::format_numbered_list;
pub use progress::{format_progress_line, report_progress, report_progress_to, ProgressType};
