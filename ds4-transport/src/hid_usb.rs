//! HID transport for a controller connected by USB cable
//!
//! hidapi does not expose raw control transfers. Feature reports are the one
//! class request it does expose, and `get_feature_report` /
//! `send_feature_report` are issued by the kernel as exactly the
//! class/interface GET_REPORT and SET_REPORT transfers a setup packet
//! describes. Any other request is refused.

use std::sync::Arc;

use async_trait::async_trait;
use hidapi::HidDevice;
use parking_lot::Mutex;
use tracing::{debug, info};

use crate::control::{hid_request, ControlSetup, Direction, ReportType};
use crate::error::TransportError;
use crate::types::TransportDeviceInfo;
use crate::ControlTransfer;

/// Transport over an opened hidraw/hidapi device handle
pub struct HidUsbTransport {
    /// `None` once closed; dropping the `HidDevice` releases the OS handle
    device: Arc<Mutex<Option<HidDevice>>>,
    info: TransportDeviceInfo,
}

impl HidUsbTransport {
    pub fn new(device: HidDevice, info: TransportDeviceInfo) -> Self {
        Self {
            device: Arc::new(Mutex::new(Some(device))),
            info,
        }
    }
}

/// Check that `setup` is a feature report request hidapi can carry and
/// return its report ID
fn feature_report_id(setup: &ControlSetup, direction: Direction) -> Result<u8, TransportError> {
    let expected_request = match direction {
        Direction::In => hid_request::GET_REPORT,
        Direction::Out => hid_request::SET_REPORT,
    };
    if setup.direction() != direction
        || !setup.is_class_interface()
        || setup.request != expected_request
        || setup.report_type() != Some(ReportType::Feature)
    {
        return Err(TransportError::Unsupported(setup.to_string()));
    }
    Ok(setup.report_id())
}

#[async_trait]
impl ControlTransfer for HidUsbTransport {
    async fn control_in(
        &self,
        setup: ControlSetup,
        length: usize,
    ) -> Result<Vec<u8>, TransportError> {
        let report_id = feature_report_id(&setup, Direction::In)?;
        if length == 0 {
            return Err(TransportError::Unsupported(format!(
                "{setup} with zero-length data stage"
            )));
        }
        debug!("Control IN {} ({} bytes)", setup, length);

        let device = Arc::clone(&self.device);
        let buf = tokio::task::spawn_blocking(move || -> Result<Vec<u8>, TransportError> {
            let guard = device.lock();
            let dev = guard.as_ref().ok_or(TransportError::Closed)?;
            let mut buf = vec![0u8; length];
            buf[0] = report_id;
            let read = dev.get_feature_report(&mut buf)?;
            buf.truncate(read);
            Ok(buf)
        })
        .await??;

        if buf.len() != length {
            return Err(TransportError::ShortTransfer {
                expected: length,
                actual: buf.len(),
            });
        }
        debug!("Control IN complete: {:02X?}", buf);
        Ok(buf)
    }

    async fn control_out(&self, setup: ControlSetup, data: &[u8]) -> Result<(), TransportError> {
        let report_id = feature_report_id(&setup, Direction::Out)?;
        // hidapi takes the report ID from the first payload byte, not wValue
        if data.first() != Some(&report_id) {
            return Err(TransportError::Unsupported(format!(
                "{setup} with payload not starting with report ID 0x{report_id:02X}"
            )));
        }
        debug!("Control OUT {}: {:02X?}", setup, data);

        let device = Arc::clone(&self.device);
        let payload = data.to_vec();
        tokio::task::spawn_blocking(move || -> Result<(), TransportError> {
            let guard = device.lock();
            let dev = guard.as_ref().ok_or(TransportError::Closed)?;
            dev.send_feature_report(&payload)?;
            Ok(())
        })
        .await??;
        Ok(())
    }

    fn device_info(&self) -> &TransportDeviceInfo {
        &self.info
    }

    async fn close(&self) -> Result<(), TransportError> {
        match self.device.lock().take() {
            Some(dev) => {
                drop(dev);
                info!("Closed {}", self.info);
            }
            None => debug!("Close requested on already closed {}", self.info),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::request_type;

    #[test]
    fn test_feature_get_accepted() {
        let id = feature_report_id(&ControlSetup::get_feature(0x12), Direction::In).unwrap();
        assert_eq!(id, 0x12);
    }

    #[test]
    fn test_feature_set_accepted() {
        let id = feature_report_id(&ControlSetup::set_feature(0x13), Direction::Out).unwrap();
        assert_eq!(id, 0x13);
    }

    #[test]
    fn test_direction_mismatch_rejected() {
        let err = feature_report_id(&ControlSetup::set_feature(0x13), Direction::In);
        assert!(matches!(err, Err(TransportError::Unsupported(_))));
    }

    #[test]
    fn test_input_report_rejected() {
        let setup = ControlSetup::new(
            request_type::CLASS_INTERFACE_IN,
            hid_request::GET_REPORT,
            0x0112,
            0,
        );
        assert!(matches!(
            feature_report_id(&setup, Direction::In),
            Err(TransportError::Unsupported(_))
        ));
    }

    #[test]
    fn test_standard_request_rejected() {
        let setup = ControlSetup::new(request_type::DIR_IN, 0x06, 0x0100, 0);
        assert!(feature_report_id(&setup, Direction::In).is_err());
    }
}
