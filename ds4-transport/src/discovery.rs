//! Device discovery for DualShock 4 controllers

use async_trait::async_trait;
use hidapi::HidApi;
use tracing::{debug, info};

use crate::error::TransportError;
use crate::hid_usb::HidUsbTransport;
use crate::types::{DiscoveredDevice, TransportDeviceInfo};
use crate::ControlTransfer;

/// Device discovery abstraction
#[async_trait]
pub trait DeviceDiscovery: Send + Sync {
    /// Transport type produced by `open_device`
    type Transport: ControlTransfer;

    /// List currently available devices
    async fn list_devices(&self) -> Result<Vec<DiscoveredDevice>, TransportError>;

    /// Open a specific device
    async fn open_device(&self, device: &DiscoveredDevice)
        -> Result<Self::Transport, TransportError>;

    /// Open the first matching device
    async fn open_first(&self) -> Result<Self::Transport, TransportError>;
}

/// HID device discovery restricted to one vendor/product pair
pub struct HidDiscovery {
    vid: u16,
    pid: u16,
}

impl HidDiscovery {
    pub fn new(vid: u16, pid: u16) -> Self {
        Self { vid, pid }
    }

    fn not_found(&self) -> TransportError {
        TransportError::DeviceNotFound {
            vid: self.vid,
            pid: self.pid,
        }
    }

    fn device_info(device_info: &hidapi::DeviceInfo) -> TransportDeviceInfo {
        TransportDeviceInfo {
            vid: device_info.vendor_id(),
            pid: device_info.product_id(),
            device_path: device_info.path().to_string_lossy().into_owned(),
            serial: device_info.serial_number().map(str::to_owned),
            product_name: device_info.product_string().map(str::to_owned),
            interface_number: device_info.interface_number(),
        }
    }
}

#[async_trait]
impl DeviceDiscovery for HidDiscovery {
    type Transport = HidUsbTransport;

    async fn list_devices(&self) -> Result<Vec<DiscoveredDevice>, TransportError> {
        let api = HidApi::new()?;
        let mut devices: Vec<DiscoveredDevice> = api
            .device_list()
            .filter(|d| d.vendor_id() == self.vid && d.product_id() == self.pid)
            .map(|d| DiscoveredDevice {
                info: Self::device_info(d),
                path: d.path().to_owned(),
            })
            .collect();

        // hidraw can report one node per interface; keep the lowest interface
        devices.sort_by_key(|d| d.info.interface_number);
        debug!(
            "Found {} device(s) matching {:04x}:{:04x}",
            devices.len(),
            self.vid,
            self.pid
        );
        Ok(devices)
    }

    async fn open_device(
        &self,
        device: &DiscoveredDevice,
    ) -> Result<HidUsbTransport, TransportError> {
        let api = HidApi::new()?;
        let hid = api.open_path(&device.path)?;
        info!("Opened {}", device.info);
        Ok(HidUsbTransport::new(hid, device.info.clone()))
    }

    async fn open_first(&self) -> Result<HidUsbTransport, TransportError> {
        let devices = self.list_devices().await?;
        let first = devices.first().ok_or_else(|| self.not_found())?;
        self.open_device(first).await
    }
}
