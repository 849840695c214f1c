//! Device registry - known DualShock 4 USB identities
//!
//! Only Sony's vendor ID is ever matched. The product ID differs between
//! hardware revisions and is selected by configuration.

/// Sony Interactive Entertainment vendor ID
pub const VENDOR_ID: u16 = 0x054C;

/// DualShock 4 first revision (CUH-ZCT1)
pub const PID_DS4_V1: u16 = 0x05C4;

/// DualShock 4 second revision (CUH-ZCT2)
pub const PID_DS4_V2: u16 = 0x09CC;

/// Sony USB wireless adaptor, which answers the same pairing reports
pub const PID_WIRELESS_ADAPTOR: u16 = 0x0BA0;

/// Product ID used when nothing else is configured
pub const DEFAULT_PID: u16 = PID_DS4_V2;

/// Known product IDs that speak the DualShock 4 pairing reports
pub const DUALSHOCK4_PIDS: &[u16] = &[PID_DS4_V1, PID_DS4_V2, PID_WIRELESS_ADAPTOR];

/// Check if PID belongs to a known DualShock 4 variant
#[inline]
pub fn is_dualshock4_pid(pid: u16) -> bool {
    DUALSHOCK4_PIDS.contains(&pid)
}

/// Human-readable model name for a product ID
pub fn model_name(pid: u16) -> &'static str {
    match pid {
        PID_DS4_V1 => "DualShock 4 (CUH-ZCT1)",
        PID_DS4_V2 => "DualShock 4 (CUH-ZCT2)",
        PID_WIRELESS_ADAPTOR => "DualShock 4 USB Wireless Adaptor",
        _ => "Unknown device",
    }
}
