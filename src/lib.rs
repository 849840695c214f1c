//! DualShock 4 paired host address tool
//!
//! Reads and overrides the Bluetooth address of the host a DualShock 4
//! controller pairs with, using feature reports 0x12 (read) and 0x13 (write)
//! over USB.

pub mod address;
pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod report;
pub mod session;

pub use address::{AddressError, BdAddr};
pub use client::{PairingClient, PairingInfo};
pub use config::{ConfigFile, DeviceConfig};
pub use error::PairError;
pub use report::{PairingReport, ReportError};
pub use session::{execute, Action, Outcome};
