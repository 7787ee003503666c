//! Report source reading a pinctrl device directory in debugfs

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};
use rpinmux_core::{ReportKind, ReportSource};

use crate::error::{DebugfsError, Result};

/// Debugfs root holding one directory per pinctrl device
pub const PINCTRL_DEBUGFS_ROOT: &str = "/sys/kernel/debug/pinctrl";

/// Pinmux device of the Tegra194 (Xavier NX) main pin controller
pub const DEFAULT_PINMUX_DEVICE: &str = "2430000.pinmux";

/// Full path of [`DEFAULT_PINMUX_DEVICE`] under [`PINCTRL_DEBUGFS_ROOT`]
pub const DEFAULT_PINMUX_DIR: &str = "/sys/kernel/debug/pinctrl/2430000.pinmux";

/// Reads pinmux reports from a pinctrl device directory
///
/// Each report can be redirected to a separate file, which allows
/// analysing reports captured on another machine.
///
/// # Example
///
/// ```no_run
/// use rpinmux_debugfs::DebugfsSource;
/// use rpinmux_core::analyze;
///
/// let source = DebugfsSource::default();
/// for pin in analyze(&source)? {
///     println!("{} {}", pin.record.name, pin.function);
/// }
/// # Ok::<(), rpinmux_core::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct DebugfsSource {
    /// Pinctrl device directory
    dir: PathBuf,
    /// Per-report file overrides
    overrides: HashMap<ReportKind, PathBuf>,
}

impl DebugfsSource {
    /// Read reports from the given pinctrl device directory
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            overrides: HashMap::new(),
        }
    }

    /// Read one report from `path` instead of the device directory
    pub fn with_override(mut self, kind: ReportKind, path: impl Into<PathBuf>) -> Self {
        self.overrides.insert(kind, path.into());
        self
    }

    /// Pinctrl device directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File a report is read from
    pub fn report_path(&self, kind: ReportKind) -> PathBuf {
        self.overrides
            .get(&kind)
            .cloned()
            .unwrap_or_else(|| self.dir.join(kind.file_name()))
    }

    /// Read a report, trimmed of surrounding whitespace
    ///
    /// An existing but empty file gives an empty string.
    pub fn read(&self, kind: ReportKind) -> Result<String> {
        let path = self.report_path(kind);
        let content = fs::read_to_string(&path).map_err(|e| DebugfsError::ReportRead {
            kind,
            path: path.display().to_string(),
            source: e,
        })?;

        debug!("Read {} bytes of {} from {}", content.len(), kind, path.display());
        Ok(content.trim().to_string())
    }
}

impl Default for DebugfsSource {
    fn default() -> Self {
        Self::new(DEFAULT_PINMUX_DIR)
    }
}

impl ReportSource for DebugfsSource {
    fn read_report(&self, kind: ReportKind) -> rpinmux_core::Result<String> {
        self.read(kind)
            .map_err(|e| rpinmux_core::Error::SourceUnavailable {
                report: kind,
                reason: e.to_string(),
            })
    }
}

/// List pinctrl devices that export a pin ownership report
///
/// Returns directory names under `root` (normally
/// [`PINCTRL_DEBUGFS_ROOT`]) in sorted order.
pub fn list_pinctrl_devices(root: impl AsRef<Path>) -> Result<Vec<String>> {
    let root = root.as_ref();
    let list_err = |e| DebugfsError::ListFailed {
        path: root.display().to_string(),
        source: e,
    };

    let mut devices = Vec::new();
    for entry in fs::read_dir(root).map_err(list_err)? {
        let entry = entry.map_err(list_err)?;
        let path = entry.path();
        if path.join(ReportKind::PinmuxPins.file_name()).is_file() {
            devices.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    devices.sort();

    info!("Found {} pinctrl device(s) in {}", devices.len(), root.display());
    Ok(devices)
}
