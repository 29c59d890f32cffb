use thiserror::Error;

#[derive(Debug, Error)]
pub enum MqttError {
    #[error("Packet is too short: need {required} bytes, have {available}")]
    OutOfRange { required: usize, available: usize },

    #[error("Packet is missing a required byte: {0}")]
    RequiredByteMissing(&'static str),

    #[error("Failed to convert to `{0}` to `{1}`.")]
    Convertion(String, String),

    #[error("Invalid hex input: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("Io Error: {0}")]
    Io(#[from] std::io::Error),
}
