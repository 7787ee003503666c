//! Error types for debugfs report access

use std::io;

use rpinmux_core::ReportKind;
use thiserror::Error;

/// Linux pinctrl debugfs errors
#[derive(Debug, Error)]
pub enum DebugfsError {
    /// A report file could not be read
    #[error("Failed to read {kind} report '{path}': {source}")]
    ReportRead {
        kind: ReportKind,
        path: String,
        #[source]
        source: io::Error,
    },

    /// The pinctrl debugfs root could not be listed
    #[error("Failed to list pinctrl devices in '{path}': {source}")]
    ListFailed {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// Result type for debugfs operations
pub type Result<T> = std::result::Result<T, DebugfsError>;
