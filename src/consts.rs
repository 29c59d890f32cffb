/// HEADER length in bytes, control byte plus a single byte Remaining Length.
pub const MQTT_HEADER_LEN: usize = 2;

/// Size of the big-endian length prefix in front of the PUBLISH topic name.
pub const TOPIC_LEN_FIELD_SIZE: usize = 2;

/// Largest Remaining Length a single byte can encode. Bit 7 is the continuation bit.
pub const MAX_SINGLE_BYTE_REMAINING_LEN: u8 = 127;
