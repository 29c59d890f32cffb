use crate::{
    consts::{MQTT_HEADER_LEN, TOPIC_LEN_FIELD_SIZE},
    error::MqttError,
};
use std::mem::size_of;

/// Convert 2 bytes in big-endian order into a u16
pub fn unpack_u16<'a, I>(iter: &mut I) -> Result<u16, MqttError>
where
    I: Iterator<Item = &'a u8>,
{
    let bytes: [u8; size_of::<u16>()] = iter
        .take(size_of::<u16>())
        .copied()
        .collect::<Vec<u8>>()
        .try_into()
        .map_err(|_| MqttError::RequiredByteMissing("Missing u16 byte"))?;

    Ok(u16::from_be_bytes(bytes))
}

/// Read the topic length prefix that follows the fixed header of a PUBLISH packet.
///
/// Fails with [`MqttError::OutOfRange`] when the packet ends before the prefix does.
pub fn unpack_topic_len(packet: &[u8]) -> Result<usize, MqttError> {
    let required = MQTT_HEADER_LEN + TOPIC_LEN_FIELD_SIZE;
    if packet.len() < required {
        return Err(MqttError::OutOfRange {
            required,
            available: packet.len(),
        });
    }

    let mut iter = packet[MQTT_HEADER_LEN..].iter();

    Ok(usize::from(unpack_u16(&mut iter)?))
}
