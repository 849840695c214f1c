//! In-memory DualShock 4 that answers the pairing reports

#![allow(dead_code)]

use async_trait::async_trait;
use ds4_transport::{ControlSetup, ControlTransfer, TransportDeviceInfo, TransportError};
use parking_lot::Mutex;

/// One recorded control transfer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transfer {
    In { setup: ControlSetup, length: usize },
    Out { setup: ControlSetup, data: Vec<u8> },
}

#[derive(Debug, Default)]
struct State {
    controller_wire: [u8; 6],
    host_wire: [u8; 6],
    fail_reads: bool,
    fail_writes: bool,
    ignore_writes: bool,
    truncate_reads: Option<usize>,
    fail_close: bool,
    closed: bool,
    close_calls: usize,
    transfers: Vec<Transfer>,
}

pub struct FakeController {
    state: Mutex<State>,
    info: TransportDeviceInfo,
}

impl FakeController {
    /// Controller A1:A2:A3:A4:A5:A6 paired with 06:05:04:03:02:01
    pub fn new() -> Self {
        Self {
            state: Mutex::new(State {
                controller_wire: [0xA6, 0xA5, 0xA4, 0xA3, 0xA2, 0xA1],
                host_wire: [0x01, 0x02, 0x03, 0x04, 0x05, 0x06],
                ..State::default()
            }),
            info: TransportDeviceInfo {
                vid: 0x054C,
                pid: 0x09CC,
                device_path: "fake".into(),
                serial: None,
                product_name: Some("Wireless Controller".into()),
                interface_number: 3,
            },
        }
    }

    pub fn failing_reads(self) -> Self {
        self.state.lock().fail_reads = true;
        self
    }

    pub fn failing_writes(self) -> Self {
        self.state.lock().fail_writes = true;
        self
    }

    pub fn ignoring_writes(self) -> Self {
        self.state.lock().ignore_writes = true;
        self
    }

    pub fn truncating_reads(self, len: usize) -> Self {
        self.state.lock().truncate_reads = Some(len);
        self
    }

    pub fn failing_close(self) -> Self {
        self.state.lock().fail_close = true;
        self
    }

    pub fn host_wire(&self) -> [u8; 6] {
        self.state.lock().host_wire
    }

    pub fn close_calls(&self) -> usize {
        self.state.lock().close_calls
    }

    pub fn transfers(&self) -> Vec<Transfer> {
        self.state.lock().transfers.clone()
    }
}

#[async_trait]
impl ControlTransfer for FakeController {
    async fn control_in(
        &self,
        setup: ControlSetup,
        length: usize,
    ) -> Result<Vec<u8>, TransportError> {
        let mut state = self.state.lock();
        if state.closed {
            return Err(TransportError::Closed);
        }
        state.transfers.push(Transfer::In { setup, length });
        if state.fail_reads {
            return Err(TransportError::HidError("hid_get_feature_report: Broken pipe".into()));
        }

        let mut buf = vec![0x12];
        buf.extend_from_slice(&state.controller_wire);
        buf.extend_from_slice(&[0x08, 0x25, 0x00]);
        buf.extend_from_slice(&state.host_wire);
        if let Some(len) = state.truncate_reads {
            buf.truncate(len);
        }
        Ok(buf)
    }

    async fn control_out(&self, setup: ControlSetup, data: &[u8]) -> Result<(), TransportError> {
        let mut state = self.state.lock();
        if state.closed {
            return Err(TransportError::Closed);
        }
        state.transfers.push(Transfer::Out {
            setup,
            data: data.to_vec(),
        });
        if state.fail_writes {
            return Err(TransportError::Disconnected(
                "ioctl (SFEATURE): No such device".into(),
            ));
        }
        if !state.ignore_writes && data.len() > 6 && data[0] == 0x13 {
            state.host_wire.copy_from_slice(&data[1..7]);
        }
        Ok(())
    }

    fn device_info(&self) -> &TransportDeviceInfo {
        &self.info
    }

    async fn close(&self) -> Result<(), TransportError> {
        let mut state = self.state.lock();
        state.close_calls += 1;
        state.closed = true;
        if state.fail_close {
            return Err(TransportError::HidError("close failed".into()));
        }
        Ok(())
    }
}
