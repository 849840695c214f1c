//! Transport abstraction layer for DualShock 4 feature report exchanges
//!
//! The pairing protocol lives one layer up. This crate only knows how to
//! locate a controller by vendor/product ID, open it, and carry HID class
//! control transfers to and from it.

pub mod control;
pub mod device_registry;
pub mod error;
pub mod types;

mod discovery;
mod hid_usb;

pub use control::{hid_request, report_value, request_type, ControlSetup, Direction, ReportType};
pub use device_registry::{
    is_dualshock4_pid, model_name, DEFAULT_PID, DUALSHOCK4_PIDS, PID_DS4_V1, PID_DS4_V2,
    PID_WIRELESS_ADAPTOR, VENDOR_ID,
};
pub use discovery::{DeviceDiscovery, HidDiscovery};
pub use error::TransportError;
pub use hid_usb::HidUsbTransport;
pub use types::{DiscoveredDevice, TransportDeviceInfo};

use async_trait::async_trait;

/// The core transport trait - one USB control transfer per call
///
/// Each call resolves exactly once, with the full data stage or an error.
/// Callers issue one transfer at a time and await it before the next.
#[async_trait]
pub trait ControlTransfer: Send + Sync {
    /// Device-to-host transfer
    ///
    /// # Arguments
    /// * `setup` - Setup packet (direction bit must be IN)
    /// * `length` - wLength; the returned buffer has exactly this many bytes
    async fn control_in(&self, setup: ControlSetup, length: usize)
        -> Result<Vec<u8>, TransportError>;

    /// Host-to-device transfer
    ///
    /// # Arguments
    /// * `setup` - Setup packet (direction bit must be OUT)
    /// * `data` - Data stage payload
    async fn control_out(&self, setup: ControlSetup, data: &[u8]) -> Result<(), TransportError>;

    /// Get device information
    fn device_info(&self) -> &TransportDeviceInfo;

    /// Release the device handle. Further transfers fail with
    /// `TransportError::Closed`; closing twice is a no-op.
    async fn close(&self) -> Result<(), TransportError>;
}
