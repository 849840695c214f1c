//! Pairing protocol client
//!
//! Issues the two feature report exchanges against an open controller handle.
//! One transfer is in flight at a time; a failed transfer is returned as-is
//! and never retried.

use ds4_transport::ControlTransfer;
use tracing::{debug, info};

use crate::address::{self, ADDRESS_LEN};
use crate::error::PairError;
use crate::report::{self, PairingReport, READ_REPORT_LEN};

/// Addresses read from the controller, formatted for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairingInfo {
    /// The controller's own Bluetooth address ("UID")
    pub controller_id: String,
    /// Address of the host the controller is paired with
    pub paired_address: String,
}

impl From<PairingReport> for PairingInfo {
    fn from(report: PairingReport) -> Self {
        Self {
            controller_id: address::format(&report.controller.octets()),
            paired_address: address::format(&report.paired_host.octets()),
        }
    }
}

/// Protocol client over any control transfer backend
pub struct PairingClient<'a, T: ControlTransfer + ?Sized> {
    transport: &'a T,
}

impl<'a, T: ControlTransfer + ?Sized> PairingClient<'a, T> {
    pub fn new(transport: &'a T) -> Self {
        Self { transport }
    }

    /// Get the underlying transport
    pub fn transport(&self) -> &T {
        self.transport
    }

    /// Read report 0x12 and decode both addresses
    pub async fn read_report(&self) -> Result<PairingReport, PairError> {
        let setup = report::read_setup();
        let buf = self.transport.control_in(setup, READ_REPORT_LEN).await?;
        debug!("Report 0x{:02X}: {:02X?}", report::READ_REPORT_ID, buf);
        Ok(PairingReport::from_bytes(&buf)?)
    }

    /// Read the controller's own address and its paired host address
    pub async fn read_paired_address(&self) -> Result<PairingInfo, PairError> {
        self.read_report().await.map(PairingInfo::from)
    }

    /// Overwrite the paired host address with `wire` (wire order, as
    /// returned by [`address::parse`]). No read-back is done.
    pub async fn write_paired_address(&self, wire: &[u8; ADDRESS_LEN]) -> Result<(), PairError> {
        let buf = report::build_write_report(wire);
        self.transport
            .control_out(report::write_setup(), &buf)
            .await?;
        let mut canonical = *wire;
        canonical.reverse();
        info!("Paired host address written: {}", address::format(&canonical));
        Ok(())
    }

    /// Write, then read report 0x12 back and compare the stored host address
    pub async fn write_and_verify(&self, wire: &[u8; ADDRESS_LEN]) -> Result<PairingInfo, PairError> {
        self.write_paired_address(wire).await?;
        let report = self.read_report().await?;
        let stored = report.paired_host.to_wire();
        if stored != *wire {
            let mut expected = *wire;
            expected.reverse();
            return Err(PairError::VerifyMismatch {
                expected: address::format(&expected),
                actual: report.paired_host.to_string(),
            });
        }
        Ok(report.into())
    }
}
