//! Common types for transport layer

use std::ffi::CString;
use std::fmt;

/// Device identification information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportDeviceInfo {
    /// USB Vendor ID
    pub vid: u16,
    /// USB Product ID
    pub pid: u16,
    /// Device path or identifier (transport-specific)
    pub device_path: String,
    /// Serial number if available
    pub serial: Option<String>,
    /// Product name if available
    pub product_name: Option<String>,
    /// USB interface number, -1 when the backend cannot tell
    pub interface_number: i32,
}

impl fmt::Display for TransportDeviceInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({:04x}:{:04x}) at {}",
            self.product_name
                .as_deref()
                .unwrap_or(crate::device_registry::model_name(self.pid)),
            self.vid,
            self.pid,
            self.device_path
        )
    }
}

/// A device found during discovery, not yet opened
#[derive(Debug, Clone)]
pub struct DiscoveredDevice {
    pub info: TransportDeviceInfo,
    /// Raw OS path handed back to hidapi on open
    pub path: CString,
}
