//! rpinmux-debugfs - Linux pinctrl debugfs report source
//!
//! Pin controller drivers publish their state under
//! `/sys/kernel/debug/pinctrl/<device>/`. This crate reads the two reports
//! rpinmux needs from such a directory:
//!
//! ```bash
//! cat /sys/kernel/debug/pinctrl/2430000.pinmux/pinmux-functions
//! cat /sys/kernel/debug/pinctrl/2430000.pinmux/pinmux-pins
//! ```
//!
//! # System Requirements
//!
//! - debugfs mounted at `/sys/kernel/debug`
//! - Root access (debugfs is normally readable by root only)

pub mod error;
pub mod source;

// Re-exports
pub use error::{DebugfsError, Result};
pub use source::{
    list_pinctrl_devices, DebugfsSource, DEFAULT_PINMUX_DEVICE, DEFAULT_PINMUX_DIR,
    PINCTRL_DEBUGFS_ROOT,
};
