//! One invocation against one device handle
//!
//! The handle is closed exactly once after the action, whether it
//! succeeded or not.

use ds4_transport::ControlTransfer;
use tracing::{info, warn};

use crate::address::{self, ADDRESS_LEN};
use crate::client::{PairingClient, PairingInfo};
use crate::error::PairError;

/// What to do with the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Read the controller and paired host addresses
    Read,
    /// Store a new paired host address (wire order)
    Write {
        wire: [u8; ADDRESS_LEN],
        verify: bool,
    },
}

/// Result of a successful action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Read(PairingInfo),
    /// Canonical form of the address now stored
    Written(String),
}

/// Run `action` and close `transport` afterwards
///
/// An action error takes precedence over a close error; the close error is
/// then only logged.
pub async fn execute<T: ControlTransfer + ?Sized>(
    transport: &T,
    action: Action,
) -> Result<Outcome, PairError> {
    info!("{:?} on {}", action, transport.device_info());
    let result = perform(transport, action).await;
    let closed = transport.close().await;
    match (result, closed) {
        (Ok(outcome), Ok(())) => Ok(outcome),
        (Ok(_), Err(e)) => Err(e.into()),
        (Err(e), Ok(())) => Err(e),
        (Err(e), Err(close_err)) => {
            warn!("Failed to close device after error: {}", close_err);
            Err(e)
        }
    }
}

async fn perform<T: ControlTransfer + ?Sized>(
    transport: &T,
    action: Action,
) -> Result<Outcome, PairError> {
    let client = PairingClient::new(transport);
    match action {
        Action::Read => client.read_paired_address().await.map(Outcome::Read),
        Action::Write { wire, verify } => {
            if verify {
                let info = client.write_and_verify(&wire).await?;
                Ok(Outcome::Written(info.paired_address))
            } else {
                client.write_paired_address(&wire).await?;
                let mut canonical = wire;
                canonical.reverse();
                Ok(Outcome::Written(address::format(&canonical)))
            }
        }
    }
}
