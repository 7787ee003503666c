//! Per-pin descriptor assembly
//!
//! Joins the pin table with the function table, resolves GPIO register
//! addresses for lines owned by a Tegra GPIO controller and attaches a
//! heuristic note where one applies.

mod heuristics;

use once_cell::sync::Lazy;
use regex::Regex;

pub use heuristics::{annotate, HeuristicNote, NoteRule};

use crate::classify::classify;
use crate::error::Result;
use crate::gpio::{resolve, GpioAddressSet, GpioController};
use crate::report::functions::{parse_functions, PinFunctionTable};
use crate::report::pins::{parse_pins, PinRecord, PinTable};
use crate::report::{ReportKind, ReportSource};

/// Owner column marker for lines held by a Tegra GPIO controller
const GPIO_OWNER_MARKER: &str = "tegra-gpio";
/// Owner column marker for the always-on controller
const AON_MARKER: &str = "aon";

static GPIO_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+").expect("valid gpio number pattern"));

/// Everything known about one physical pin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinDescriptor {
    /// Pin index
    pub pin: u32,
    /// Name and owners from the pin report
    pub record: PinRecord,
    /// Owning mux function, or [`UNASSIGNED`](crate::classify::UNASSIGNED)
    pub function: String,
    /// Register addresses when the pin is in GPIO mode
    pub gpio: Option<GpioAddressSet>,
    /// Heuristic annotation, if a rule matched
    pub note: Option<HeuristicNote>,
}

/// Extract the GPIO number and controller from a pin's GPIO owner field
///
/// Returns `None` when the owner is not a Tegra GPIO controller or when
/// the owner text has no usable number.
pub fn gpio_line(gpio_owner: &str) -> Option<(u32, GpioController)> {
    if !gpio_owner.contains(GPIO_OWNER_MARKER) {
        return None;
    }

    let controller = if gpio_owner.contains(AON_MARKER) {
        GpioController::Aon
    } else {
        GpioController::Primary
    };

    let Some(digits) = GPIO_NUMBER.find(gpio_owner) else {
        log::warn!("GPIO owner '{}' carries no line number", gpio_owner);
        return None;
    };

    match digits.as_str().parse::<u32>() {
        Ok(gpio) => Some((gpio, controller)),
        Err(_) => {
            log::warn!(
                "GPIO owner '{}' has an invalid line number '{}'",
                gpio_owner,
                digits.as_str()
            );
            None
        }
    }
}

/// Build one descriptor per pin, in ascending pin order
pub fn build_descriptors(pins: &PinTable, functions: &PinFunctionTable) -> Vec<PinDescriptor> {
    pins.iter()
        .map(|(pin, record)| {
            let function = classify(&record.name, functions);
            let gpio =
                gpio_line(&record.gpio_owner).map(|(line, controller)| resolve(line, controller));
            let note = annotate(&record.name, function);

            PinDescriptor {
                pin,
                record: record.clone(),
                function: function.to_string(),
                gpio,
                note,
            }
        })
        .collect()
}

/// Read and parse both reports from a source
///
/// A function report that is present but empty is taken as an empty table.
pub fn load_tables<S: ReportSource + ?Sized>(source: &S) -> Result<(PinTable, PinFunctionTable)> {
    let pins = parse_pins(&source.read_report(ReportKind::PinmuxPins)?)?;

    let functions = match parse_functions(&source.read_report(ReportKind::PinmuxFunctions)?) {
        Ok(table) => table,
        Err(e) if e.is_empty_report() => {
            log::warn!(
                "{} report is empty, no pin will resolve to a function",
                ReportKind::PinmuxFunctions
            );
            PinFunctionTable::new()
        }
        Err(e) => return Err(e),
    };

    Ok((pins, functions))
}

/// Run the whole pipeline against a report source
pub fn analyze<S: ReportSource + ?Sized>(source: &S) -> Result<Vec<PinDescriptor>> {
    let (pins, functions) = load_tables(source)?;
    let descriptors = build_descriptors(&pins, &functions);

    log::info!(
        "Analyzed {} pins against {} functions ({} in GPIO mode)",
        descriptors.len(),
        functions.len(),
        descriptors.iter().filter(|d| d.gpio.is_some()).count()
    );

    Ok(descriptors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::UNASSIGNED;
    use crate::error::Error;
    use crate::gpio::TEGRA_GPIO_AON_BASE;
    use crate::report::MemorySource;

    const FUNCTIONS: &str = "\
function: uart3,
\tgroups = uart3_tx_pw0 uart3_rx_pw1
function: i2c8,
\tgroups = cam_i2c_scl_pp2
";

    const PINS: &str = "\
pin 5 (soc_gpio05): (MUX gpio) tegra-gpio-aon: gpio5
pin 1 (uart3_tx_pw0): (MUX 3110000.serial) (GPIO UNCLAIMED)
pin 130 (gen1_i2c_scl_pc5): (MUX gpio) tegra-gpio: 2200000.gpio:18
pin 7 (cam_i2c_scl_pp2): (MUX 31e0000.i2c) (GPIO UNCLAIMED)
";

    fn source() -> MemorySource {
        MemorySource::new()
            .with_report(ReportKind::PinmuxFunctions, FUNCTIONS)
            .with_report(ReportKind::PinmuxPins, PINS)
    }

    #[test]
    fn test_soc_gpio_on_aon_controller() {
        let pins = parse_pins("pin 5 (soc_gpio05): (MUX gpio) tegra-gpio-aon: gpio5\n").unwrap();
        let descriptors = build_descriptors(&pins, &PinFunctionTable::new());

        assert_eq!(descriptors.len(), 1);
        let d = &descriptors[0];
        assert_eq!(d.pin, 5);
        assert_eq!(d.function, UNASSIGNED);

        let gpio = d.gpio.unwrap();
        assert_eq!(gpio.controller, GpioController::Aon);
        assert_eq!(gpio.gpio, 5);
        assert_eq!(gpio.cnf, TEGRA_GPIO_AON_BASE + 0x0C0);

        let note = d.note.unwrap();
        assert_eq!(note.rule, NoteRule::SocGpio);
        assert_eq!(note.text, "General purpose SOC GPIO");
    }

    #[test]
    fn test_analyze_orders_by_pin() {
        let descriptors = analyze(&source()).unwrap();
        let order: Vec<u32> = descriptors.iter().map(|d| d.pin).collect();
        assert_eq!(order, [1, 5, 7, 130]);
    }

    #[test]
    fn test_analyze_resolves_functions_and_notes() {
        let descriptors = analyze(&source()).unwrap();

        let uart = &descriptors[0];
        assert_eq!(uart.function, "uart3");
        assert_eq!(uart.gpio, None);
        assert_eq!(uart.note.map(|n| n.rule), Some(NoteRule::Uart));

        let cam = &descriptors[2];
        assert_eq!(cam.function, "i2c8");
        assert_eq!(cam.note.map(|n| n.rule), Some(NoteRule::Camera));
    }

    #[test]
    fn test_first_number_in_owner_is_the_gpio() {
        let descriptors = analyze(&source()).unwrap();
        let gen1 = descriptors.iter().find(|d| d.pin == 130).unwrap();
        let gpio = gen1.gpio.unwrap();
        assert_eq!(gpio.controller, GpioController::Primary);
        assert_eq!(gpio.gpio, 2_200_000);
        assert_eq!(gen1.note, None);
    }

    #[test]
    fn test_gpio_line() {
        assert_eq!(gpio_line("tegra-gpio: gpio16"), Some((16, GpioController::Primary)));
        assert_eq!(gpio_line("tegra-gpio-aon: gpio3"), Some((3, GpioController::Aon)));
        assert_eq!(gpio_line("(GPIO UNCLAIMED)"), None);
        assert_eq!(gpio_line("pca953x: gpio3"), None);
        assert_eq!(gpio_line("tegra-gpio"), None);
        assert_eq!(gpio_line("tegra-gpio: 99999999999"), None);
    }

    #[test]
    fn test_empty_function_report_tolerated() {
        let source = MemorySource::new()
            .with_report(ReportKind::PinmuxFunctions, "")
            .with_report(ReportKind::PinmuxPins, PINS);
        let descriptors = analyze(&source).unwrap();
        assert!(descriptors.iter().all(|d| d.function == UNASSIGNED));
    }

    #[test]
    fn test_missing_report_is_source_unavailable() {
        let source = MemorySource::new().with_report(ReportKind::PinmuxPins, PINS);
        assert!(matches!(
            analyze(&source),
            Err(Error::SourceUnavailable {
                report: ReportKind::PinmuxFunctions,
                ..
            })
        ));
    }

    #[test]
    fn test_parse_errors_propagate() {
        let source = MemorySource::new()
            .with_report(ReportKind::PinmuxFunctions, FUNCTIONS)
            .with_report(ReportKind::PinmuxPins, "pin 1 (a): (MUX x) y\npin 1 (b): (MUX x) y\n");
        assert!(matches!(analyze(&source), Err(Error::DuplicateEntry { pin: 1, .. })));
    }
}
