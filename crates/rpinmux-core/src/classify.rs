//! Pin to mux function classification

use crate::report::functions::PinFunctionTable;

/// Function name reported for pins that no function claims
pub const UNASSIGNED: &str = "UNASSIGNED";

/// Find the function whose group list names this pin
///
/// Functions are tried in report order and the first one listing
/// `pin_name` wins. Returns [`UNASSIGNED`] when none does.
pub fn classify<'a>(pin_name: &str, functions: &'a PinFunctionTable) -> &'a str {
    functions
        .iter()
        .find(|function| function.claims(pin_name))
        .map_or(UNASSIGNED, |function| function.name.as_str())
}
