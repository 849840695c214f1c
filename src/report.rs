//! DualShock 4 pairing feature reports
//!
//! Report 0x12 (read, 16 bytes):
//!
//! ```text
//! [0]      report ID
//! [1..=6]  controller Bluetooth address, wire order
//! [7..=9]  unused here
//! [10..=15] paired host address, wire order
//! ```
//!
//! Report 0x13 (write, 23 bytes):
//!
//! ```text
//! [0]       report ID
//! [1..=6]   new host address, wire order
//! [7..=22]  fixed trailer
//! ```

use ds4_transport::ControlSetup;
use thiserror::Error;

use crate::address::{BdAddr, ADDRESS_LEN};

/// Feature report read back from the controller
pub const READ_REPORT_ID: u8 = 0x12;
/// Feature report that stores a new paired host
pub const WRITE_REPORT_ID: u8 = 0x13;

/// Length of report 0x12 including the report ID byte
pub const READ_REPORT_LEN: usize = 16;

/// Offset of the controller's own address in report 0x12
pub const CONTROLLER_ADDR_OFFSET: usize = 1;
/// Offset of the paired host address in report 0x12
pub const PAIRED_HOST_OFFSET: usize = 10;

/// Opaque bytes the controller expects after the address in report 0x13.
/// Sent verbatim; never recomputed.
pub const WRITE_REPORT_TRAILER: [u8; 16] = [
    0x56, 0xE8, 0x81, 0x38, 0x08, 0x06, 0x51, 0x41, 0xC0, 0x7F, 0x12, 0xAA, 0xD9, 0x66, 0x3C, 0xCE,
];

/// Length of report 0x13 including the report ID byte
pub const WRITE_REPORT_LEN: usize = 1 + ADDRESS_LEN + WRITE_REPORT_TRAILER.len();

/// Errors decoding a report buffer
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReportError {
    #[error("report 0x{report_id:02X} too short: expected {expected} bytes, got {actual}")]
    TooShort {
        report_id: u8,
        expected: usize,
        actual: usize,
    },
}

/// Setup packet for reading report 0x12
pub const fn read_setup() -> ControlSetup {
    ControlSetup::get_feature(READ_REPORT_ID)
}

/// Setup packet for writing report 0x13
pub const fn write_setup() -> ControlSetup {
    ControlSetup::set_feature(WRITE_REPORT_ID)
}

/// Decoded contents of report 0x12
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairingReport {
    /// The controller's own Bluetooth address
    pub controller: BdAddr,
    /// Address of the host the controller will connect to
    pub paired_host: BdAddr,
}

impl PairingReport {
    /// Decode a report 0x12 buffer. Byte 0 and bytes 7..=9 are ignored.
    pub fn from_bytes(buf: &[u8]) -> Result<Self, ReportError> {
        if buf.len() < READ_REPORT_LEN {
            return Err(ReportError::TooShort {
                report_id: READ_REPORT_ID,
                expected: READ_REPORT_LEN,
                actual: buf.len(),
            });
        }
        Ok(Self {
            controller: BdAddr::from_wire(wire_field(buf, CONTROLLER_ADDR_OFFSET)),
            paired_host: BdAddr::from_wire(wire_field(buf, PAIRED_HOST_OFFSET)),
        })
    }
}

fn wire_field(buf: &[u8], offset: usize) -> [u8; ADDRESS_LEN] {
    let mut field = [0u8; ADDRESS_LEN];
    field.copy_from_slice(&buf[offset..offset + ADDRESS_LEN]);
    field
}

/// Assemble report 0x13 for a wire-order host address
pub fn build_write_report(wire: &[u8; ADDRESS_LEN]) -> [u8; WRITE_REPORT_LEN] {
    let mut buf = [0u8; WRITE_REPORT_LEN];
    buf[0] = WRITE_REPORT_ID;
    buf[1..1 + ADDRESS_LEN].copy_from_slice(wire);
    buf[1 + ADDRESS_LEN..].copy_from_slice(&WRITE_REPORT_TRAILER);
    buf
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address;

    fn sample_read_report() -> [u8; READ_REPORT_LEN] {
        [
            0x12, // report ID
            0xA6, 0xA5, 0xA4, 0xA3, 0xA2, 0xA1, // controller, wire order
            0x08, 0x25, 0x00, // unused
            0x01, 0x02, 0x03, 0x04, 0x05, 0x06, // paired host, wire order
        ]
    }

    #[test]
    fn test_decode_paired_host() {
        let report = PairingReport::from_bytes(&sample_read_report()).unwrap();
        assert_eq!(report.paired_host.to_string(), "06:05:04:03:02:01");
    }

    #[test]
    fn test_decode_controller_address() {
        let report = PairingReport::from_bytes(&sample_read_report()).unwrap();
        assert_eq!(report.controller.to_string(), "A1:A2:A3:A4:A5:A6");
    }

    #[test]
    fn test_decode_ignores_opaque_bytes() {
        let mut buf = sample_read_report();
        buf[0] = 0xFF;
        buf[7] = 0xFF;
        buf[8] = 0xFF;
        buf[9] = 0xFF;
        assert_eq!(
            PairingReport::from_bytes(&buf).unwrap(),
            PairingReport::from_bytes(&sample_read_report()).unwrap()
        );
    }

    #[test]
    fn test_decode_rejects_short_buffer() {
        let buf = sample_read_report();
        assert_eq!(
            PairingReport::from_bytes(&buf[..15]),
            Err(ReportError::TooShort {
                report_id: 0x12,
                expected: 16,
                actual: 15
            })
        );
    }

    #[test]
    fn test_build_write_report() {
        let wire = [0x55, 0x44, 0x33, 0x22, 0x11, 0x00];
        let buf = build_write_report(&wire);
        assert_eq!(buf.len(), 23);
        assert_eq!(buf[0], 0x13);
        assert_eq!(&buf[1..7], &wire);
        assert_eq!(
            &buf[7..],
            &[
                0x56, 0xE8, 0x81, 0x38, 0x08, 0x06, 0x51, 0x41, 0xC0, 0x7F, 0x12, 0xAA, 0xD9,
                0x66, 0x3C, 0xCE
            ]
        );
    }

    #[test]
    fn test_written_address_reads_back() {
        let wire = address::parse("00:11:22:33:44:55").unwrap();
        let written = build_write_report(&wire);
        // A controller echoes the stored wire bytes at offset 10 of report 0x12
        let mut readback = [0u8; READ_REPORT_LEN];
        readback[0] = READ_REPORT_ID;
        readback[PAIRED_HOST_OFFSET..].copy_from_slice(&written[1..7]);
        let report = PairingReport::from_bytes(&readback).unwrap();
        assert_eq!(report.paired_host.to_string(), "00:11:22:33:44:55");
    }

    #[test]
    fn test_setups() {
        assert_eq!(read_setup().request_type, 0xA1);
        assert_eq!(read_setup().request, 0x01);
        assert_eq!(read_setup().value, 0x0312);
        assert_eq!(write_setup().request_type, 0x21);
        assert_eq!(write_setup().request, 0x09);
        assert_eq!(write_setup().value, 0x0313);
        assert_eq!(write_setup().index, 0);
    }
}
