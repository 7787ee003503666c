//! `pinmux-functions` report parsing
//!
//! The report lists every mux function followed by the pin groups it can
//! claim:
//!
//! ```text
//! function: i2c1,
//!     groups = gen1_i2c_scl_pc5 gen1_i2c_sda_pc6
//! function: rsvd0,
//!     groups =
//! ```
//!
//! Group tokens are word runs on any line containing `groups =`, minus the
//! literal words `function` and `groups`. Lines matching neither form are
//! skipped.

use once_cell::sync::Lazy;
use regex::Regex;

use super::ReportKind;
use crate::error::{Error, ParseErrorKind, Result};

/// Keyword that opens a function header line
const FUNCTION_HEADER: &str = "function:";

/// Marker of a group list line
const GROUPS_MARKER: &str = "groups =";

/// Words that can appear on a group list line but are not group names
const RESERVED_WORDS: [&str; 2] = ["function", "groups"];

static GROUP_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\w+").expect("valid group token pattern"));

/// One mux function and the pin groups attributed to it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinFunction {
    /// Function name as printed in the header (trailing comma removed)
    pub name: String,
    /// Group names in report order, duplicates kept
    pub groups: Vec<String>,
}

impl PinFunction {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            groups: Vec::new(),
        }
    }

    /// Check whether this function claims the given group name
    pub fn claims(&self, group: &str) -> bool {
        self.groups.iter().any(|g| g == group)
    }
}

/// Function name to pin-group table
///
/// Functions iterate in the order they first appear in the report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PinFunctionTable {
    functions: Vec<PinFunction>,
}

impl PinFunctionTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of functions
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    /// Check if the table has no functions
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Iterate over functions in report order
    pub fn iter(&self) -> impl Iterator<Item = &PinFunction> {
        self.functions.iter()
    }

    /// Look up a function by name
    pub fn get(&self, name: &str) -> Option<&PinFunction> {
        self.functions.iter().find(|f| f.name == name)
    }

    /// Groups claimed by a function, if the function exists
    pub fn groups(&self, name: &str) -> Option<&[String]> {
        self.get(name).map(|f| f.groups.as_slice())
    }

    /// Start (or restart) a function and return its slot
    fn begin(&mut self, name: &str) -> usize {
        if let Some(pos) = self.functions.iter().position(|f| f.name == name) {
            log::warn!(
                "function '{}' listed more than once, discarding {} earlier group(s)",
                name,
                self.functions[pos].groups.len()
            );
            self.functions[pos].groups.clear();
            pos
        } else {
            self.functions.push(PinFunction::new(name));
            self.functions.len() - 1
        }
    }
}

impl<'a> IntoIterator for &'a PinFunctionTable {
    type Item = &'a PinFunction;
    type IntoIter = core::slice::Iter<'a, PinFunction>;

    fn into_iter(self) -> Self::IntoIter {
        self.functions.iter()
    }
}

/// Line scanner state
#[derive(Debug, Clone, Copy)]
enum State {
    /// No function header seen yet
    SeekingHeader,
    /// Group lines go to the function in this slot
    CollectingGroups(usize),
}

/// Parse the text of a `pinmux-functions` report
///
/// # Errors
///
/// Returns [`Error::Parse`] if the text is empty, if a group list appears
/// before any function header, or if a header carries no name.
pub fn parse_functions(text: &str) -> Result<PinFunctionTable> {
    let report = ReportKind::PinmuxFunctions;

    if text.trim().is_empty() {
        return Err(Error::Parse {
            report,
            line: 0,
            kind: ParseErrorKind::EmptyInput,
        });
    }

    let mut table = PinFunctionTable::new();
    let mut state = State::SeekingHeader;

    for (idx, line) in text.lines().enumerate() {
        let line_no = idx + 1;

        if let Some(rest) = line.strip_prefix(FUNCTION_HEADER) {
            let name = rest
                .split_whitespace()
                .next()
                .map(|token| token.strip_suffix(',').unwrap_or(token))
                .filter(|name| !name.is_empty())
                .ok_or(Error::Parse {
                    report,
                    line: line_no,
                    kind: ParseErrorKind::MissingFunctionName,
                })?;
            state = State::CollectingGroups(table.begin(name));
        } else if line.contains(GROUPS_MARKER) {
            let State::CollectingGroups(slot) = state else {
                return Err(Error::Parse {
                    report,
                    line: line_no,
                    kind: ParseErrorKind::DanglingGroups,
                });
            };
            let groups = &mut table.functions[slot].groups;
            groups.extend(
                GROUP_TOKEN
                    .find_iter(line)
                    .map(|m| m.as_str())
                    .filter(|token| !RESERVED_WORDS.contains(token))
                    .map(str::to_string),
            );
        } else {
            log::trace!("{}:{}: skipping '{}'", report, line_no, line);
        }
    }

    log::debug!("Parsed {} pinmux functions", table.len());
    Ok(table)
}
