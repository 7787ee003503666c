//! CLI command implementations
//!
//! Commands that need pinmux reports take any `ReportSource`; `main`
//! builds a debugfs source from the command line.

pub mod analyze;
pub mod export;
pub mod functions;
mod list;
pub mod resolve;

pub use list::{list_controllers, list_gpio_controllers};
