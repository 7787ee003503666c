//! Pinmux report sources and parsers
//!
//! A pinctrl driver exports two reports:
//!
//! - `pinmux-functions`: every mux function and the pin groups it can claim
//! - `pinmux-pins`: every physical pin with its mux owner and GPIO owner
//!
//! Both are line oriented and both parsers skip lines they do not
//! recognise, since the kernel is free to interleave unrelated diagnostics.
//!
//! Getting the text is the job of a [`ReportSource`]. The debugfs backend
//! lives in its own crate; [`MemorySource`] covers tests and reports
//! captured elsewhere.

use core::fmt;
use std::collections::HashMap;

use crate::error::{Error, Result};

pub mod functions;
pub mod pins;

/// The two reports a pinctrl device exports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportKind {
    /// Function to pin-group table
    PinmuxFunctions,
    /// Per-pin ownership table
    PinmuxPins,
}

impl ReportKind {
    /// Both report kinds
    pub const ALL: [ReportKind; 2] = [ReportKind::PinmuxFunctions, ReportKind::PinmuxPins];

    /// File name of the report inside a pinctrl debugfs directory
    pub fn file_name(self) -> &'static str {
        match self {
            Self::PinmuxFunctions => "pinmux-functions",
            Self::PinmuxPins => "pinmux-pins",
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

/// Supplies the raw text of a pinmux report
///
/// An empty report is a valid answer (a freshly reset controller may have
/// nothing to say). A report that cannot be obtained at all must come back
/// as [`Error::SourceUnavailable`].
pub trait ReportSource {
    /// Fetch the text of one report
    fn read_report(&self, kind: ReportKind) -> Result<String>;
}

impl<S: ReportSource + ?Sized> ReportSource for &S {
    fn read_report(&self, kind: ReportKind) -> Result<String> {
        (**self).read_report(kind)
    }
}

/// Report source backed by strings held in memory
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    reports: HashMap<ReportKind, String>,
}

impl MemorySource {
    /// Create a source with no reports
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) the text for one report
    pub fn with_report(mut self, kind: ReportKind, text: impl Into<String>) -> Self {
        self.reports.insert(kind, text.into());
        self
    }
}

impl ReportSource for MemorySource {
    fn read_report(&self, kind: ReportKind) -> Result<String> {
        self.reports
            .get(&kind)
            .cloned()
            .ok_or_else(|| Error::SourceUnavailable {
                report: kind,
                reason: "no report loaded".into(),
            })
    }
}
