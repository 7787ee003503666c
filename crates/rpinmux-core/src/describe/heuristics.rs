//! Best-effort pin annotations
//!
//! These guesses come from naming conventions of Tegra pads and pinmux
//! functions. They are documentation aids only and are kept in their own
//! type so a renderer can tell them apart from parsed facts.

use core::fmt;

use serde::Serialize;

/// A rule that can annotate a pin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum NoteRule {
    /// Pin name contains `usb_vbus`
    UsbVbus,
    /// Pin name contains `dp_aux`
    DpAux,
    /// Pin name starts with `soc_gpio`
    SocGpio,
    /// Pin name starts with `cam`
    Camera,
    /// Function contains `i2c`
    I2c,
    /// Function contains `uart`
    Uart,
    /// Function contains `spi`
    Spi,
    /// Function contains `sdmmc`
    Sdmmc,
}

impl NoteRule {
    /// Rules in evaluation order. Pin name rules come before function rules.
    pub const ORDERED: [NoteRule; 8] = [
        NoteRule::UsbVbus,
        NoteRule::DpAux,
        NoteRule::SocGpio,
        NoteRule::Camera,
        NoteRule::I2c,
        NoteRule::Uart,
        NoteRule::Spi,
        NoteRule::Sdmmc,
    ];

    /// Check the rule against a pin name and its resolved function
    pub fn matches(self, pin_name: &str, function: &str) -> bool {
        match self {
            Self::UsbVbus => pin_name.contains("usb_vbus"),
            Self::DpAux => pin_name.contains("dp_aux"),
            Self::SocGpio => pin_name.starts_with("soc_gpio"),
            Self::Camera => pin_name.starts_with("cam"),
            Self::I2c => function.contains("i2c"),
            Self::Uart => function.contains("uart"),
            Self::Spi => function.contains("spi"),
            Self::Sdmmc => function.contains("sdmmc"),
        }
    }

    /// Annotation text produced by this rule
    pub fn text(self) -> &'static str {
        match self {
            Self::UsbVbus => "USB power switch enable",
            Self::DpAux => "DisplayPort AUX Hotplug detect",
            Self::SocGpio => "General purpose SOC GPIO",
            Self::Camera => "Camera I2C or control pin",
            Self::I2c => "I2C bus line",
            Self::Uart => "UART communication",
            Self::Spi => "SPI bus pin",
            Self::Sdmmc => "SD/MMC controller pin",
        }
    }
}

/// Heuristic annotation attached to a pin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeuristicNote {
    /// Rule that produced the note
    pub rule: NoteRule,
    /// Human readable guess
    pub text: &'static str,
}

impl fmt::Display for HeuristicNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text)
    }
}

/// Annotate a pin with the first rule that matches, if any
pub fn annotate(pin_name: &str, function: &str) -> Option<HeuristicNote> {
    NoteRule::ORDERED
        .into_iter()
        .find(|rule| rule.matches(pin_name, function))
        .map(|rule| HeuristicNote {
            rule,
            text: rule.text(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::UNASSIGNED;

    fn rule_for(pin_name: &str, function: &str) -> Option<NoteRule> {
        annotate(pin_name, function).map(|note| note.rule)
    }

    #[test]
    fn test_name_rules() {
        assert_eq!(rule_for("usb_vbus_en0_pz1", UNASSIGNED), Some(NoteRule::UsbVbus));
        assert_eq!(rule_for("dp_aux_ch0_hpd_pm0", UNASSIGNED), Some(NoteRule::DpAux));
        assert_eq!(rule_for("soc_gpio05_pq5", UNASSIGNED), Some(NoteRule::SocGpio));
        assert_eq!(rule_for("cam_i2c_scl_pp2", UNASSIGNED), Some(NoteRule::Camera));
    }

    #[test]
    fn test_function_rules() {
        assert_eq!(rule_for("gen1_i2c_scl_pc5", "i2c1"), Some(NoteRule::I2c));
        assert_eq!(rule_for("uart3_tx_pw0", "uart3"), Some(NoteRule::Uart));
        assert_eq!(rule_for("spi1_sck_pz3", "spi1"), Some(NoteRule::Spi));
        assert_eq!(rule_for("sdmmc1_clk_pj0", "sdmmc1"), Some(NoteRule::Sdmmc));
    }

    #[test]
    fn test_name_rules_take_precedence() {
        // camera pads usually resolve to an I2C function
        assert_eq!(rule_for("cam_i2c_sda_pp3", "i2c3"), Some(NoteRule::Camera));
        assert_eq!(rule_for("soc_gpio12_ph0", "uartb"), Some(NoteRule::SocGpio));
    }

    #[test]
    fn test_prefix_rules_need_prefix() {
        assert_eq!(rule_for("gp_soc_gpio", UNASSIGNED), None);
        assert_eq!(rule_for("dcam_clk", UNASSIGNED), None);
    }

    #[test]
    fn test_no_match() {
        assert_eq!(annotate("pex_l0_rst_n_pa0", "pe0"), None);
        assert_eq!(annotate("anything", UNASSIGNED), None);
    }

    #[test]
    fn test_note_text() {
        let note = annotate("soc_gpio05", UNASSIGNED).unwrap();
        assert_eq!(note.to_string(), "General purpose SOC GPIO");
    }
}
