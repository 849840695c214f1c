//! Device identity configuration
//!
//! Resolved once at startup and handed to discovery. Precedence, highest
//! first: `--pid`, `DS4_PAIR_PID`, config file, built-in default.
//!
//! ```toml
//! # ~/.config/ds4-pair/config.toml
//! product_id = 0x05C4
//! ```

use std::path::{Path, PathBuf};

use ds4_transport::{is_dualshock4_pid, model_name, DEFAULT_PID, VENDOR_ID};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::PairError;

/// Environment variable overriding the product ID
pub const PID_ENV_VAR: &str = "DS4_PAIR_PID";

/// Which USB device to open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceConfig {
    pub vendor_id: u16,
    pub product_id: u16,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            vendor_id: VENDOR_ID,
            product_id: DEFAULT_PID,
        }
    }
}

/// On-disk config file contents
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// USB product ID of the controller revision
    pub product_id: Option<u16>,
}

impl ConfigFile {
    /// Default config path (~/.config/ds4-pair/config.toml)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("ds4-pair").join("config.toml"))
    }

    /// Load config from a file
    pub fn load(path: &Path) -> Result<Self, PairError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| PairError::Config(format!("{}: {}", path.display(), e)))?;
        toml::from_str(&contents)
            .map_err(|e| PairError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Load an explicitly named file, or the default file if it exists
    pub fn load_or_default(explicit: Option<&Path>) -> Result<Self, PairError> {
        match explicit {
            Some(path) => Self::load(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::load(&path),
                _ => Ok(Self::default()),
            },
        }
    }
}

impl DeviceConfig {
    /// Combine the configuration sources, highest precedence first
    pub fn resolve(
        pid_flag: Option<u16>,
        pid_env: Option<&str>,
        file: &ConfigFile,
    ) -> Result<Self, PairError> {
        let from_env = pid_env
            .map(|v| {
                parse_pid(v).map_err(|e| PairError::Config(format!("{PID_ENV_VAR}: {e}")))
            })
            .transpose()?;

        let product_id = pid_flag
            .or(from_env)
            .or(file.product_id)
            .unwrap_or(DEFAULT_PID);

        if !is_dualshock4_pid(product_id) {
            warn!(
                "Product ID {:04x} is not a known DualShock 4; continuing anyway",
                product_id
            );
        }
        let config = Self {
            vendor_id: VENDOR_ID,
            product_id,
        };
        debug!(
            "Using {:04x}:{:04x} ({})",
            config.vendor_id,
            config.product_id,
            model_name(product_id)
        );
        Ok(config)
    }
}

/// Parse a USB product ID written in hex, with or without `0x`
pub fn parse_pid(text: &str) -> Result<u16, String> {
    let text = text.trim();
    let digits = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text);
    if digits.is_empty() || digits.len() > 4 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(format!("invalid product ID {text:?}: expected up to 4 hex digits"));
    }
    u16::from_str_radix(digits, 16).map_err(|e| format!("invalid product ID {text:?}: {e}"))
}
