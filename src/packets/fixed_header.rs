use std::fmt::Display;

use crate::{
    consts::MAX_SINGLE_BYTE_REMAINING_LEN,
    error::MqttError,
    packets::enums::{PacketType, QosLevel},
};

/// ### MQTT Fixed Header
/// Each MQTT Control Packet starts with a fixed header.
///
/// | Bit    | 7-4                      | 3   | 2-1 | 0      |
/// |--------|--------------------------|-----|-----|--------|
/// | byte 1 | MQTT Control Packet type | DUP | QoS | RETAIN |
/// | byte 2 | Remaining Length                               |
///
/// Only the single byte form of the Remaining Length is read here. A byte with
/// bit 7 set announces a multi-byte length, see [`FixedHeader::has_continuation_bit`].
///
/// [(MQTT 3.1.1) Fixed Header](http://docs.oasis-open.org/mqtt/mqtt/v3.1.1/errata01/os/mqtt-v3.1.1-errata01-os-complete.html#_Toc442180841)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedHeader {
    flags: u8,
    remaining_len: u8,
}

impl FixedHeader {
    pub fn from_bytes(data: &[u8]) -> Result<Self, MqttError> {
        let mut iter = data.iter();

        let flags = *iter
            .next()
            .ok_or(MqttError::RequiredByteMissing("Missing Fixed header byte"))?;
        let remaining_len = *iter
            .next()
            .ok_or(MqttError::RequiredByteMissing("Missing Remaining Length byte"))?;

        Ok(Self {
            flags,
            remaining_len,
        })
    }

    pub fn as_byte(&self) -> u8 {
        self.flags
    }

    pub fn get_packet_type(&self) -> Result<PacketType, MqttError> {
        let data = (self.flags & 0xF0) >> 4;
        PacketType::try_from(data)
    }
    pub fn get_dup(&self) -> bool {
        (self.flags & 0x08) >> 3 == 1
    }
    pub fn get_qos(&self) -> Result<QosLevel, MqttError> {
        let data = (self.flags & 0x06) >> 1; // get bits 2-1
        QosLevel::try_from(data)
    }
    pub fn get_retain(&self) -> bool {
        self.flags & 0x01 == 1
    }
    pub fn get_remaining_len(&self) -> u8 {
        self.remaining_len
    }

    /// True when the Remaining Length byte does not fit the single byte encoding.
    pub fn has_continuation_bit(&self) -> bool {
        self.remaining_len > MAX_SINGLE_BYTE_REMAINING_LEN
    }
}

impl Display for FixedHeader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.get_packet_type() {
            Ok(packet_type) => write!(f, "{}", packet_type)?,
            Err(_) => write!(f, "RESERVED")?,
        }

        match self.get_qos() {
            Ok(qos) => write!(
                f,
                " (dup: {}, qos: {}, retain: {})",
                self.get_dup(),
                qos as u8,
                self.get_retain()
            ),
            Err(_) => write!(
                f,
                " (dup: {}, qos: invalid, retain: {})",
                self.get_dup(),
                self.get_retain()
            ),
        }
    }
}
