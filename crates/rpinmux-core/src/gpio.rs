//! Tegra GPIO controller register addressing
//!
//! Each controller splits its lines into banks of eight. Every bank owns a
//! 4 KiB register window starting at `base + bank * 0x1000`, and the
//! per-bank control registers sit at fixed offsets inside that window.
//!
//! | Register | Offset  | Purpose        |
//! |----------|---------|----------------|
//! | CNF      | `0x0C0` | Configuration  |
//! | OE       | `0x0D0` | Output enable  |
//! | OUT      | `0x0E0` | Output value   |
//! | IN       | `0x100` | Input value    |
//!
//! Everything here is address arithmetic. No register is ever mapped or
//! read.

use core::fmt;

use serde::{Serialize, Serializer};

/// GPIO lines per bank
pub const GPIO_LINES_PER_BANK: u32 = 8;
/// Distance between two bank register windows
pub const GPIO_BANK_STRIDE: u64 = 0x1000;

/// Main GPIO controller base address
pub const TEGRA_GPIO_BASE: u64 = 0x0220_0000;
/// Always-on GPIO controller base address
pub const TEGRA_GPIO_AON_BASE: u64 = 0x0C2F_0000;

/// Configuration register offset
pub const GPIO_REG_CNF: u64 = 0x0C0;
/// Output enable register offset
pub const GPIO_REG_OE: u64 = 0x0D0;
/// Output value register offset
pub const GPIO_REG_OUT: u64 = 0x0E0;
/// Input value register offset
pub const GPIO_REG_IN: u64 = 0x100;

/// A GPIO controller with a known register base
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum GpioController {
    /// Main SoC GPIO controller (`tegra-gpio`)
    #[serde(rename = "tegra-gpio")]
    Primary,
    /// Always-on domain GPIO controller (`tegra-gpio-aon`)
    #[serde(rename = "tegra-gpio-aon")]
    Aon,
}

impl GpioController {
    /// Every known controller
    pub const ALL: [GpioController; 2] = [GpioController::Primary, GpioController::Aon];

    /// Driver name as it appears in the pin report's owner column
    pub fn name(self) -> &'static str {
        match self {
            Self::Primary => "tegra-gpio",
            Self::Aon => "tegra-gpio-aon",
        }
    }

    /// Physical base address of the controller's register block
    pub fn base_address(self) -> u64 {
        match self {
            Self::Primary => TEGRA_GPIO_BASE,
            Self::Aon => TEGRA_GPIO_AON_BASE,
        }
    }

    /// Look up a controller by driver name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }
}

impl fmt::Display for GpioController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-bank control registers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GpioRegister {
    /// Pin configuration
    Cnf,
    /// Output enable
    Oe,
    /// Output value
    Out,
    /// Input value
    In,
}

impl GpioRegister {
    /// Registers in address order
    pub const ALL: [GpioRegister; 4] = [
        GpioRegister::Cnf,
        GpioRegister::Oe,
        GpioRegister::Out,
        GpioRegister::In,
    ];

    /// Offset from the bank base
    pub fn offset(self) -> u64 {
        match self {
            Self::Cnf => GPIO_REG_CNF,
            Self::Oe => GPIO_REG_OE,
            Self::Out => GPIO_REG_OUT,
            Self::In => GPIO_REG_IN,
        }
    }

    /// Short register name
    pub fn name(self) -> &'static str {
        match self {
            Self::Cnf => "CNF",
            Self::Oe => "OE",
            Self::Out => "OUT",
            Self::In => "IN",
        }
    }
}

impl fmt::Display for GpioRegister {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Bank position and register addresses of one GPIO line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GpioAddressSet {
    /// Owning controller
    pub controller: GpioController,
    /// Controller-relative GPIO number
    pub gpio: u32,
    /// Bank index
    pub bank: u32,
    /// Bit within the bank
    pub bit: u8,
    /// CNF register address
    #[serde(serialize_with = "serialize_hex")]
    pub cnf: u64,
    /// OE register address
    #[serde(serialize_with = "serialize_hex")]
    pub oe: u64,
    /// OUT register address
    #[serde(serialize_with = "serialize_hex")]
    pub out: u64,
    /// IN register address
    #[serde(rename = "in", serialize_with = "serialize_hex")]
    pub input: u64,
}

impl GpioAddressSet {
    /// Absolute address of one register
    pub fn address(&self, reg: GpioRegister) -> u64 {
        match reg {
            GpioRegister::Cnf => self.cnf,
            GpioRegister::Oe => self.oe,
            GpioRegister::Out => self.out,
            GpioRegister::In => self.input,
        }
    }

    /// All four registers with their addresses, in address order
    pub fn registers(&self) -> [(GpioRegister, u64); 4] {
        GpioRegister::ALL.map(|reg| (reg, self.address(reg)))
    }

    /// Current value of a register: always `None`
    ///
    /// Register contents are never read from hardware. Only addresses are
    /// reported.
    pub fn read_value(&self, reg: GpioRegister) -> Option<u32> {
        log::trace!(
            "refusing to read {} at 0x{:08X} ({} gpio {})",
            reg,
            self.address(reg),
            self.controller,
            self.gpio
        );
        None
    }
}

/// Serialize an address as a `0x`-prefixed hex string
fn serialize_hex<S>(addr: &u64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format!("0x{:08X}", addr))
}

/// Compute bank, bit and register addresses for a GPIO line
pub fn resolve(gpio: u32, controller: GpioController) -> GpioAddressSet {
    let bank = gpio / GPIO_LINES_PER_BANK;
    let bit = (gpio % GPIO_LINES_PER_BANK) as u8;
    let bank_base = controller.base_address() + u64::from(bank) * GPIO_BANK_STRIDE;

    GpioAddressSet {
        controller,
        gpio,
        bank,
        bit,
        cnf: bank_base + GPIO_REG_CNF,
        oe: bank_base + GPIO_REG_OE,
        out: bank_base + GPIO_REG_OUT,
        input: bank_base + GPIO_REG_IN,
    }
}

/// Like [`resolve`], with the controller given by driver name
///
/// Returns `None` for a controller this tool has no base address for.
pub fn resolve_by_name(gpio: u32, controller: &str) -> Option<GpioAddressSet> {
    GpioController::from_name(controller).map(|c| resolve(gpio, c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_primary() {
        let regs = resolve(16, GpioController::Primary);
        assert_eq!(regs.bank, 2);
        assert_eq!(regs.bit, 0);
        assert_eq!(regs.cnf, 0x0220_20C0);
        assert_eq!(regs.oe, 0x0220_20D0);
        assert_eq!(regs.out, 0x0220_20E0);
        assert_eq!(regs.input, 0x0220_2100);
    }

    #[test]
    fn test_resolve_aon() {
        let regs = resolve(3, GpioController::Aon);
        assert_eq!(regs.bank, 0);
        assert_eq!(regs.bit, 3);
        assert_eq!(regs.cnf, 0x0C2F_00C0);
        assert_eq!(regs.oe, 0x0C2F_00D0);
        assert_eq!(regs.out, 0x0C2F_00E0);
        assert_eq!(regs.input, 0x0C2F_0100);
    }

    #[test]
    fn test_resolve_is_pure() {
        for gpio in [0, 7, 8, 255, u32::MAX] {
            for controller in GpioController::ALL {
                assert_eq!(resolve(gpio, controller), resolve(gpio, controller));
            }
        }
    }

    #[test]
    fn test_resolve_max_index_does_not_overflow() {
        let regs = resolve(u32::MAX, GpioController::Aon);
        assert_eq!(regs.bank, u32::MAX / 8);
        assert_eq!(regs.bit, 7);
        assert_eq!(
            regs.input,
            TEGRA_GPIO_AON_BASE + u64::from(u32::MAX / 8) * 0x1000 + 0x100
        );
    }

    #[test]
    fn test_resolve_by_name() {
        assert_eq!(
            resolve_by_name(16, "tegra-gpio"),
            Some(resolve(16, GpioController::Primary))
        );
        assert_eq!(
            resolve_by_name(3, "tegra-gpio-aon"),
            Some(resolve(3, GpioController::Aon))
        );
        assert_eq!(resolve_by_name(3, "pca953x"), None);
        assert_eq!(resolve_by_name(u32::MAX, ""), None);
    }

    #[test]
    fn test_registers_in_address_order() {
        let regs = resolve(9, GpioController::Primary);
        let addrs: Vec<u64> = regs.registers().iter().map(|(_, a)| *a).collect();
        assert_eq!(addrs, [0x0220_10C0, 0x0220_10D0, 0x0220_10E0, 0x0220_1100]);
    }

    #[test]
    fn test_register_values_never_read() {
        let regs = resolve(16, GpioController::Primary);
        for reg in GpioRegister::ALL {
            assert_eq!(regs.read_value(reg), None);
        }
    }
}
