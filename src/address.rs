//! Bluetooth device address codec
//!
//! Addresses are written by people in canonical order (`AA:BB:CC:DD:EE:FF`,
//! most significant byte first) and stored by the controller in wire order,
//! which is the same six bytes reversed.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Number of bytes in a Bluetooth device address
pub const ADDRESS_LEN: usize = 6;

/// Separators accepted between hex groups on input
const SEPARATORS: [char; 2] = [':', '-'];

/// Errors from parsing an address string
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    #[error("invalid address {input:?}: expected 12 hex digits, got {digits}")]
    Length { input: String, digits: usize },

    #[error("invalid address {input:?}: {group:?} is not a hex byte")]
    NotHex { input: String, group: String },
}

/// Parse an address string into wire-order bytes
///
/// `:` and `-` are stripped wherever they appear; what remains must be
/// exactly 12 hex digits.
pub fn parse(text: &str) -> Result<[u8; ADDRESS_LEN], AddressError> {
    let mut wire = BdAddr::from_str(text)?.0;
    wire.reverse();
    Ok(wire)
}

/// Format six bytes as `XX:XX:XX:XX:XX:XX`, in the order given
pub fn format(bytes: &[u8; ADDRESS_LEN]) -> String {
    bytes
        .iter()
        .map(|b| format!("{b:02X}"))
        .collect::<Vec<_>>()
        .join(":")
}

/// A Bluetooth device address held in canonical order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BdAddr([u8; ADDRESS_LEN]);

impl BdAddr {
    /// Build from wire-order bytes
    pub fn from_wire(wire: [u8; ADDRESS_LEN]) -> Self {
        let mut canonical = wire;
        canonical.reverse();
        Self(canonical)
    }

    /// Bytes in canonical (display) order
    pub fn octets(&self) -> [u8; ADDRESS_LEN] {
        self.0
    }

    /// Bytes in wire order
    pub fn to_wire(&self) -> [u8; ADDRESS_LEN] {
        let mut wire = self.0;
        wire.reverse();
        wire
    }
}

impl FromStr for BdAddr {
    type Err = AddressError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let digits: String = text.chars().filter(|c| !SEPARATORS.contains(c)).collect();
        // Count chars, not bytes, so multibyte input reports a sensible length
        let count = digits.chars().count();
        if count != ADDRESS_LEN * 2 {
            return Err(AddressError::Length {
                input: text.to_owned(),
                digits: count,
            });
        }

        let mut octets = [0u8; ADDRESS_LEN];
        for (i, octet) in octets.iter_mut().enumerate() {
            // All chars are single-byte here or the hex check below fails first
            let group = digits.get(i * 2..i * 2 + 2).unwrap_or_default();
            if group.len() != 2 || !group.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Err(AddressError::NotHex {
                    input: text.to_owned(),
                    group: group.to_owned(),
                });
            }
            *octet = u8::from_str_radix(group, 16).map_err(|_| AddressError::NotHex {
                input: text.to_owned(),
                group: group.to_owned(),
            })?;
        }
        Ok(Self(octets))
    }
}

impl fmt::Display for BdAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format(&self.0))
    }
}
