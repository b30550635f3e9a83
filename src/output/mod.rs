//! Console output module.
//!
//! Provides:
//! - Styled console messages
//! - Progress spinners
//! - Scan statistics reporting

pub mod console;
pub mod progress;
pub mod stats;

pub use console::{
    print_banner, print_config_summary, print_error, print_info, print_success, print_warning,
};
pub use progress::create_spinner;
pub use stats::print_scan_stats;
