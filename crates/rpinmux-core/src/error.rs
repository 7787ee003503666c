//! Error types for rpinmux-core

use thiserror::Error;

use crate::report::ReportKind;

/// Details about a grammar violation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// The report holds no text at all
    #[error("report is empty")]
    EmptyInput,
    /// A `groups =` line was seen before any `function:` header
    #[error("group list has no owning function")]
    DanglingGroups,
    /// A `function:` header with nothing after the keyword
    #[error("function header without a name")]
    MissingFunctionName,
    /// The digits captured for a pin index do not fit a pin number
    #[error("invalid pin index '{0}'")]
    InvalidPinIndex(String),
}

/// Core error type
///
/// Every variant is recoverable by the caller. Unknown GPIO controllers and
/// pins that no function claims are not errors and never show up here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A report could not be obtained from its source
    #[error("{report} report unavailable: {reason}")]
    SourceUnavailable {
        /// Which report was requested
        report: ReportKind,
        /// Human readable cause (missing file, permission denied, ...)
        reason: String,
    },

    /// Report text violates the grammar beyond what is tolerated
    #[error("{report} line {line}: {kind}")]
    Parse {
        /// Report being parsed
        report: ReportKind,
        /// 1-based line number (0 when the whole input is at fault)
        line: usize,
        /// What went wrong
        kind: ParseErrorKind,
    },

    /// The same pin index is described twice in the pin report
    #[error("pin {pin} defined twice (lines {first_line} and {line})")]
    DuplicateEntry {
        /// Pin index that was repeated
        pin: u32,
        /// Line of the first definition
        first_line: usize,
        /// Line of the repeated definition
        line: usize,
    },
}

impl Error {
    /// Returns true when the only problem is that the report was empty
    pub fn is_empty_report(&self) -> bool {
        matches!(
            self,
            Self::Parse {
                kind: ParseErrorKind::EmptyInput,
                ..
            }
        )
    }
}

/// Result type alias using the core Error type
pub type Result<T> = core::result::Result<T, Error>;
