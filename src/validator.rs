use bytes::Bytes;

use crate::{
    consts::{MQTT_HEADER_LEN, TOPIC_LEN_FIELD_SIZE},
    error::MqttError,
    packets::utils::unpack_topic_len,
};

/// Outcome of comparing a packet's declared Remaining Length with the length of
/// its topic field and payload.
///
/// A mismatch is a normal result (`matches == false`), not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemainingLengthCheck {
    /// Number of bytes in the whole packet, fixed header included.
    pub packet_len: usize,
    /// Topic length the body was split with.
    pub topic_len: usize,
    /// Value of the Remaining Length byte (`packet[1]`).
    pub declared_remaining_len: usize,
    /// Bytes left after the fixed header and the topic field.
    pub computed_payload_len: usize,
    /// Length prefix + topic + payload.
    pub computed_remaining_len: usize,
    pub matches: bool,
    pub topic: Bytes,
    pub payload: Bytes,
}

impl RemainingLengthCheck {
    /// Packet size implied by the declared Remaining Length.
    pub fn expected_packet_len(&self) -> usize {
        MQTT_HEADER_LEN + self.declared_remaining_len
    }

    /// Computed minus declared Remaining Length. Positive when the header undercounts.
    pub fn discrepancy(&self) -> isize {
        self.computed_remaining_len as isize - self.declared_remaining_len as isize
    }
}

/// Split `packet` as `[control, remaining_len, topic_len(2), topic, payload]` using
/// the given `topic_len` and check the declared Remaining Length against it.
///
/// # Errors
/// - [`MqttError::OutOfRange`] when the fixed header, the length prefix and
///   `topic_len` topic bytes do not fit in `packet`.
pub fn validate_remaining_length(
    packet: &[u8],
    topic_len: usize,
) -> Result<RemainingLengthCheck, MqttError> {
    let topic_start = MQTT_HEADER_LEN + TOPIC_LEN_FIELD_SIZE;
    let payload_start = topic_start
        .checked_add(topic_len)
        .ok_or(MqttError::OutOfRange {
            required: usize::MAX,
            available: packet.len(),
        })?;

    if payload_start > packet.len() {
        return Err(MqttError::OutOfRange {
            required: payload_start,
            available: packet.len(),
        });
    }

    let declared_remaining_len = usize::from(packet[1]);
    let computed_payload_len = packet.len() - payload_start;
    let computed_remaining_len = TOPIC_LEN_FIELD_SIZE + topic_len + computed_payload_len;

    Ok(RemainingLengthCheck {
        packet_len: packet.len(),
        topic_len,
        declared_remaining_len,
        computed_payload_len,
        computed_remaining_len,
        matches: computed_remaining_len == declared_remaining_len,
        topic: Bytes::copy_from_slice(&packet[topic_start..payload_start]),
        payload: Bytes::copy_from_slice(&packet[payload_start..]),
    })
}

/// Same as [`validate_remaining_length`], taking the topic length from the
/// packet's own big-endian prefix.
pub fn validate_declared_topic(packet: &[u8]) -> Result<RemainingLengthCheck, MqttError> {
    let topic_len = unpack_topic_len(packet)?;

    validate_remaining_length(packet, topic_len)
}
