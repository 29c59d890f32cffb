use std::fmt::Display;

use crate::error::MqttError;

/// ### MQTT Control Packet type
/// Represented as a 4-bit unsigned value in bits 7-4 of the control byte.
/// Value 0 is reserved and never a valid packet type.
#[repr(u8)]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
pub enum PacketType {
    /// | Name | Value | Direction of flow | Description |
    /// | :--: |:----: |:-----:            | :---------: |
    /// | CONNECT | 1 | Client to Server | Client request to connect to server |
    Connect = 1,
    /// | CONNACK | 2 | Server to Client | Connect acknowledgment |
    Connack = 2,
    /// | PUBLISH | 3 | Client to Server or Server to Client | Publish message |
    Publish = 3,
    /// | PUBACK | 4 | Client to Server or Server to Client | Publish acknowledgment |
    Puback = 4,
    /// | PUBREC | 5 | Client to Server or Server to Client | Publish received (assured delivery part 1) |
    Pubrec = 5,
    /// | PUBREL | 6 | Client to Server or Server to Client | Publish release (assured delivery part 2) |
    Pubrel = 6,
    /// | PUBCOMP | 7 | Client to Server or Server to Client | Publish complete (assured delivery part 3) |
    Pubcomp = 7,
    /// | SUBSCRIBE | 8 | Client to Server | Client subscribe request |
    Subscribe = 8,
    /// | SUBACK | 9 | Server to Client | Subscribe acknowledgment |
    Suback = 9,
    /// | UNSUBSCRIBE | 10 | Client to Server | Unsubscribe request |
    Unsubscribe = 10,
    /// | UNSUBACK | 11 | Server to Client | Unsubscribe acknowledgment |
    Unsuback = 11,
    /// | PINGREQ | 12 | Client to Server | PING request |
    PingReq = 12,
    /// | PINGRESP | 13 | Server to Client | PING response |
    PingResp = 13,
    /// | DISCONNECT | 14 | Client to Server | Client is disconnecting |
    Disconnect = 14,
    /// MQTT v5 only. Reserved in MQTT v3.1.1.
    ///
    /// | AUTH | 15 | Client to Server or Server to Client | Authentication exchange |
    Auth = 15,
}

impl TryFrom<u8> for PacketType {
    type Error = MqttError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        let packet_type = match value {
            1 => Self::Connect,
            2 => Self::Connack,
            3 => Self::Publish,
            4 => Self::Puback,
            5 => Self::Pubrec,
            6 => Self::Pubrel,
            7 => Self::Pubcomp,
            8 => Self::Subscribe,
            9 => Self::Suback,
            10 => Self::Unsubscribe,
            11 => Self::Unsuback,
            12 => Self::PingReq,
            13 => Self::PingResp,
            14 => Self::Disconnect,
            15 => Self::Auth,
            _ => {
                return Err(MqttError::Convertion(
                    value.to_string(),
                    "PacketType".into(),
                ))
            }
        };

        Ok(packet_type)
    }
}

impl Display for PacketType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Connect => "CONNECT",
            Self::Connack => "CONNACK",
            Self::Publish => "PUBLISH",
            Self::Puback => "PUBACK",
            Self::Pubrec => "PUBREC",
            Self::Pubrel => "PUBREL",
            Self::Pubcomp => "PUBCOMP",
            Self::Subscribe => "SUBSCRIBE",
            Self::Suback => "SUBACK",
            Self::Unsubscribe => "UNSUBSCRIBE",
            Self::Unsuback => "UNSUBACK",
            Self::PingReq => "PINGREQ",
            Self::PingResp => "PINGRESP",
            Self::Disconnect => "DISCONNECT",
            Self::Auth => "AUTH",
        };

        write!(f, "{}", name)
    }
}

/// ### Quality of Service levels
///
/// Carried in bits 2-1 of a PUBLISH control byte. The value 3 is reserved.
#[repr(u8)]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
pub enum QosLevel {
    /// #### QoS 0: At most once delivery
    AtMostOnce = 0,
    /// #### QoS 1: At least once delivery
    AtLeastOnce = 1,
    /// #### QoS 2: Exactly once delivery
    ExactlyOnce = 2,
}

impl TryFrom<u8> for QosLevel {
    type Error = MqttError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::AtMostOnce),
            1 => Ok(Self::AtLeastOnce),
            2 => Ok(Self::ExactlyOnce),
            _ => Err(MqttError::Convertion(value.to_string(), "QosLevel".into())),
        }
    }
}
