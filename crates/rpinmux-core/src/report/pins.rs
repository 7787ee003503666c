//! `pinmux-pins` report parsing
//!
//! One line per physical pin:
//!
//! ```text
//! pin 5 (soc_gpio05): (MUX gpio) tegra-gpio-aon: gpio5
//! pin 6 (uart3_tx_pw0): (MUX 3110000.serial) (GPIO UNCLAIMED)
//! ```
//!
//! Everything after the mux owner is kept, trimmed, as the GPIO owner.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

use super::ReportKind;
use crate::error::{Error, ParseErrorKind, Result};

static PIN_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^pin (\d+) \((.*?)\): \(MUX (.*?)\) (.*)").expect("valid pin line pattern")
});

/// Ownership of one physical pin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinRecord {
    /// Pin (pad) name
    pub name: String,
    /// Device holding the mux, or the driver's "unclaimed" marker
    pub mux_owner: String,
    /// GPIO owner field, or the driver's "unclaimed" marker
    pub gpio_owner: String,
}

/// Pin index to [`PinRecord`] table, iterated in ascending pin order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PinTable {
    pins: BTreeMap<u32, PinRecord>,
}

impl PinTable {
    /// Number of pins
    pub fn len(&self) -> usize {
        self.pins.len()
    }

    /// Check if the table has no pins
    pub fn is_empty(&self) -> bool {
        self.pins.is_empty()
    }

    /// Look up a pin by index
    pub fn get(&self, pin: u32) -> Option<&PinRecord> {
        self.pins.get(&pin)
    }

    /// Iterate over `(index, record)` in ascending pin order
    pub fn iter(&self) -> impl Iterator<Item = (u32, &PinRecord)> {
        self.pins.iter().map(|(pin, record)| (*pin, record))
    }
}

/// Parse the text of a `pinmux-pins` report
///
/// Empty text gives an empty table.
///
/// # Errors
///
/// - [`Error::DuplicateEntry`] if a pin index appears twice
/// - [`Error::Parse`] if a pin index does not convert to a number
pub fn parse_pins(text: &str) -> Result<PinTable> {
    let report = ReportKind::PinmuxPins;
    // Each entry keeps the line it was read from for duplicate reporting
    let mut seen: BTreeMap<u32, (usize, PinRecord)> = BTreeMap::new();

    for (idx, line) in text.lines().enumerate() {
        let line_no = idx + 1;

        let Some(caps) = PIN_LINE.captures(line) else {
            log::trace!("{}:{}: skipping '{}'", report, line_no, line);
            continue;
        };

        let digits = &caps[1];
        let pin: u32 = digits.parse().map_err(|_| Error::Parse {
            report,
            line: line_no,
            kind: ParseErrorKind::InvalidPinIndex(digits.to_string()),
        })?;

        match seen.entry(pin) {
            Entry::Occupied(first) => {
                return Err(Error::DuplicateEntry {
                    pin,
                    first_line: first.get().0,
                    line: line_no,
                });
            }
            Entry::Vacant(slot) => {
                slot.insert((
                    line_no,
                    PinRecord {
                        name: caps[2].to_string(),
                        mux_owner: caps[3].to_string(),
                        gpio_owner: caps[4].trim().to_string(),
                    },
                ));
            }
        }
    }

    let pins: BTreeMap<u32, PinRecord> =
        seen.into_iter().map(|(pin, (_, record))| (pin, record)).collect();
    log::debug!("Parsed {} pins", pins.len());
    Ok(PinTable { pins })
}

#[cfg(test)]
mod tests {
    use super::*;

    const REPORT: &str = "\
Pinmux settings per pin
Format: pin (name): mux_owner gpio_owner hog?
pin 6 (uart3_tx_pw0): (MUX 3110000.serial) (GPIO UNCLAIMED)
pin 5 (soc_gpio05): (MUX gpio) tegra-gpio-aon: gpio5
pin 0 (pex_l0_rst_n_pa0): (MUX UNCLAIMED)   (GPIO UNCLAIMED)
";

    #[test]
    fn test_parse_pins() {
        let table = parse_pins(REPORT).unwrap();
        assert_eq!(table.len(), 3);

        let soc = table.get(5).unwrap();
        assert_eq!(soc.name, "soc_gpio05");
        assert_eq!(soc.mux_owner, "gpio");
        assert_eq!(soc.gpio_owner, "tegra-gpio-aon: gpio5");

        let pex = table.get(0).unwrap();
        assert_eq!(pex.mux_owner, "UNCLAIMED");
        assert_eq!(pex.gpio_owner, "(GPIO UNCLAIMED)");
    }

    #[test]
    fn test_iteration_is_ascending() {
        let table = parse_pins(REPORT).unwrap();
        let order: Vec<u32> = table.iter().map(|(pin, _)| pin).collect();
        assert_eq!(order, [0, 5, 6]);
    }

    #[test]
    fn test_empty_report_is_empty_table() {
        assert!(parse_pins("").unwrap().is_empty());
    }

    #[test]
    fn test_non_matching_lines_skipped() {
        let text = "pin x (bad): (MUX a) b\n  pin 1 (indented): (MUX a) b\npin 2 (ok): (MUX a) b\n";
        let table = parse_pins(text).unwrap();
        assert_eq!(table.len(), 1);
        assert!(table.get(2).is_some());
    }

    #[test]
    fn test_duplicate_pin_rejected() {
        let text = "pin 3 (a): (MUX x) y\npin 4 (b): (MUX x) y\npin 3 (c): (MUX x) y\n";
        assert_eq!(
            parse_pins(text).unwrap_err(),
            Error::DuplicateEntry {
                pin: 3,
                first_line: 1,
                line: 3,
            }
        );
    }

    #[test]
    fn test_oversized_pin_index_rejected() {
        let err = parse_pins("pin 99999999999 (a): (MUX x) y\n").unwrap_err();
        assert_eq!(
            err,
            Error::Parse {
                report: ReportKind::PinmuxPins,
                line: 1,
                kind: ParseErrorKind::InvalidPinIndex("99999999999".into()),
            }
        );
    }

    #[test]
    fn test_non_ascii_digits_rejected() {
        // \d matches any Unicode decimal digit, which u32 parsing refuses
        let err = parse_pins("pin \u{0663} (a): (MUX x) y\n").unwrap_err();
        assert!(matches!(
            err,
            Error::Parse {
                kind: ParseErrorKind::InvalidPinIndex(_),
                ..
            }
        ));
    }
}
