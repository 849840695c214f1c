//! USB control transfer setup packets for HID class requests

use std::fmt;

/// bmRequestType bit fields (USB 2.0 spec, table 9-2)
pub mod request_type {
    pub const DIR_OUT: u8 = 0x00;
    pub const DIR_IN: u8 = 0x80;
    pub const DIR_MASK: u8 = 0x80;

    pub const TYPE_CLASS: u8 = 0x20;
    pub const TYPE_VENDOR: u8 = 0x40;
    pub const TYPE_MASK: u8 = 0x60;

    pub const RECIPIENT_INTERFACE: u8 = 0x01;
    pub const RECIPIENT_MASK: u8 = 0x1F;

    /// Device-to-host, class request, addressed to an interface (0xA1)
    pub const CLASS_INTERFACE_IN: u8 = DIR_IN | TYPE_CLASS | RECIPIENT_INTERFACE;
    /// Host-to-device, class request, addressed to an interface (0x21)
    pub const CLASS_INTERFACE_OUT: u8 = DIR_OUT | TYPE_CLASS | RECIPIENT_INTERFACE;
}

/// HID class-specific requests (HID 1.11, section 7.2)
pub mod hid_request {
    pub const GET_REPORT: u8 = 0x01;
    pub const SET_REPORT: u8 = 0x09;

    /// Get human-readable name for request byte
    pub fn name(request: u8) -> &'static str {
        match request {
            GET_REPORT => "GET_REPORT",
            SET_REPORT => "SET_REPORT",
            _ => "UNKNOWN",
        }
    }
}

/// HID report types, carried in the high byte of wValue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ReportType {
    Input = 1,
    Output = 2,
    Feature = 3,
}

impl ReportType {
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::Input),
            2 => Some(Self::Output),
            3 => Some(Self::Feature),
            _ => None,
        }
    }
}

/// Direction of the data stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    In,
    Out,
}

/// The fields of a USB setup packet, minus wLength which comes from the
/// buffer handed to the transfer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlSetup {
    pub request_type: u8,
    pub request: u8,
    pub value: u16,
    pub index: u16,
}

impl ControlSetup {
    pub const fn new(request_type: u8, request: u8, value: u16, index: u16) -> Self {
        Self {
            request_type,
            request,
            value,
            index,
        }
    }

    /// Class/interface GET_REPORT for a feature report on interface 0
    pub const fn get_feature(report_id: u8) -> Self {
        Self::new(
            request_type::CLASS_INTERFACE_IN,
            hid_request::GET_REPORT,
            report_value(ReportType::Feature, report_id),
            0,
        )
    }

    /// Class/interface SET_REPORT for a feature report on interface 0
    pub const fn set_feature(report_id: u8) -> Self {
        Self::new(
            request_type::CLASS_INTERFACE_OUT,
            hid_request::SET_REPORT,
            report_value(ReportType::Feature, report_id),
            0,
        )
    }

    pub fn direction(&self) -> Direction {
        if self.request_type & request_type::DIR_MASK == request_type::DIR_IN {
            Direction::In
        } else {
            Direction::Out
        }
    }

    /// True for class requests addressed to an interface
    pub fn is_class_interface(&self) -> bool {
        self.request_type & request_type::TYPE_MASK == request_type::TYPE_CLASS
            && self.request_type & request_type::RECIPIENT_MASK
                == request_type::RECIPIENT_INTERFACE
    }

    /// Report type from the high byte of wValue
    pub fn report_type(&self) -> Option<ReportType> {
        ReportType::from_u8((self.value >> 8) as u8)
    }

    /// Report ID from the low byte of wValue
    pub fn report_id(&self) -> u8 {
        (self.value & 0xFF) as u8
    }
}

impl fmt::Display for ControlSetup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "bmRequestType=0x{:02X} {} wValue=0x{:04X} wIndex={}",
            self.request_type,
            hid_request::name(self.request),
            self.value,
            self.index
        )
    }
}

/// wValue for GET_REPORT/SET_REPORT: report type high, report ID low
pub const fn report_value(report_type: ReportType, report_id: u8) -> u16 {
    ((report_type as u16) << 8) | report_id as u16
}
