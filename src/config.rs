use std::path::PathBuf;

use bytes::Bytes;
use clap::Parser;

use crate::{
    error::MqttError,
    validator::{validate_declared_topic, validate_remaining_length, RemainingLengthCheck},
};

/// Exit status for a completed check.
pub const EXIT_OK: u8 = 0;
/// Exit status for a length mismatch under `--strict`.
pub const EXIT_MISMATCH: u8 = 1;
/// Exit status when the packet could not be read or checked.
pub const EXIT_ERROR: u8 = 2;

/// PUBLISH to "test/topic" with payload "Hello, World!".
///
/// The Remaining Length byte says 24 while the body is 25 bytes (13 byte payload, not 12),
/// so a check of this packet reports a mismatch.
pub const SAMPLE_PUBLISH: [u8; 27] = [
    0x30, 0x18, // PUBLISH, remaining length = 24
    0x00, 0x0A, // topic length = 10
    0x74, 0x65, 0x73, 0x74, 0x2F, 0x74, 0x6F, 0x70, 0x69, 0x63, // "test/topic"
    0x48, 0x65, 0x6C, 0x6C, 0x6F, 0x2C, 0x20, 0x57, 0x6F, 0x72, 0x6C, 0x64, 0x21, // "Hello, World!"
];

#[derive(Parser, Debug)]
#[command(name = "mqtt-frame-check")]
#[command(about = "Check the Remaining Length of an MQTT PUBLISH packet")]
#[command(version)]
pub struct Args {
    /// Packet as hex, e.g. "30 18 00 0a ..." or "0x30,0x18,..."
    #[arg(short = 'x', long, conflicts_with = "file")]
    pub hex: Option<String>,

    /// Read the raw packet bytes from a file
    #[arg(short = 'f', long)]
    pub file: Option<PathBuf>,

    /// Topic length; defaults to the packet's own length prefix
    #[arg(short = 't', long)]
    pub topic_len: Option<usize>,

    /// Exit with status 1 when the lengths do not match
    #[arg(short = 's', long)]
    pub strict: bool,

    /// Enable debug logging
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

/// Where the packet bytes came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PacketSource {
    Hex,
    File(PathBuf),
    Sample,
}

#[derive(Debug)]
pub struct Config {
    pub packet: Bytes,
    pub source: PacketSource,
    pub topic_len: Option<usize>,
    pub strict: bool,
    pub verbose: bool,
}

impl Config {
    pub fn from_args(args: Args) -> Result<Self, MqttError> {
        let (packet, source) = match (args.hex, args.file) {
            (Some(hex), _) => (Bytes::from(parse_hex(&hex)?), PacketSource::Hex),
            (None, Some(path)) => {
                let data = std::fs::read(&path)?;
                (Bytes::from(data), PacketSource::File(path))
            }
            (None, None) => (
                Bytes::from_static(&SAMPLE_PUBLISH),
                PacketSource::Sample,
            ),
        };

        Ok(Self {
            packet,
            source,
            topic_len: args.topic_len,
            strict: args.strict,
            verbose: args.verbose,
        })
    }

    /// Run the Remaining Length check with `--topic-len` or the packet's own prefix.
    pub fn check(&self) -> Result<RemainingLengthCheck, MqttError> {
        match self.topic_len {
            Some(topic_len) => validate_remaining_length(&self.packet, topic_len),
            None => validate_declared_topic(&self.packet),
        }
    }
}

/// Map a check result to the process exit status.
pub fn exit_status(result: &Result<RemainingLengthCheck, MqttError>, strict: bool) -> u8 {
    match result {
        Ok(check) if check.matches || !strict => EXIT_OK,
        Ok(_) => EXIT_MISMATCH,
        Err(_) => EXIT_ERROR,
    }
}

/// Decode a hex dump. Whitespace, `,` and `:` separate bytes and each group may
/// carry a `0x` prefix.
pub fn parse_hex(input: &str) -> Result<Vec<u8>, MqttError> {
    let digits: String = input
        .split(|c: char| c.is_whitespace() || c == ',' || c == ':')
        .map(|group| {
            group
                .strip_prefix("0x")
                .or_else(|| group.strip_prefix("0X"))
                .unwrap_or(group)
        })
        .collect();

    Ok(hex::decode(digits)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_for(argv: &[&str]) -> u8 {
        let mut full = vec!["mqtt-frame-check"];
        full.extend_from_slice(argv);

        let args = Args::try_parse_from(full).expect("Failed to parse args");
        let config = Config::from_args(args).expect("Failed to build config");

        exit_status(&config.check(), config.strict)
    }

    fn args(hex: Option<&str>, file: Option<PathBuf>) -> Args {
        Args {
            hex: hex.map(String::from),
            file,
            topic_len: None,
            strict: false,
            verbose: false,
        }
    }

    #[test]
    fn test_parse_hex_plain() {
        assert_eq!(parse_hex("3018000a").unwrap(), vec![0x30, 0x18, 0x00, 0x0A]);
    }

    #[test]
    fn test_parse_hex_separated() {
        let expected = vec![0x30, 0x18, 0x00, 0x0A];

        assert_eq!(parse_hex("30 18 00 0A").unwrap(), expected);
        assert_eq!(parse_hex("0x30, 0x18, 0x00, 0x0A").unwrap(), expected);
        assert_eq!(parse_hex("30:18:00:0a\n").unwrap(), expected);
    }

    #[test]
    fn test_parse_hex_invalid() {
        match parse_hex("30 1") {
            Err(MqttError::Hex(_)) => {}
            other => panic!("Expected Hex error, got {:?}", other),
        }

        parse_hex("zz").expect_err("Not hex digits");
    }

    #[test]
    fn test_default_is_sample() {
        let config = Config::from_args(args(None, None)).unwrap();

        assert_eq!(config.source, PacketSource::Sample);
        assert_eq!(&config.packet[..], &SAMPLE_PUBLISH[..]);
    }

    #[test]
    fn test_hex_source() {
        let config = Config::from_args(args(Some("30 02 00 00"), None)).unwrap();

        assert_eq!(config.source, PacketSource::Hex);
        assert_eq!(&config.packet[..], &[0x30, 0x02, 0x00, 0x00]);
    }

    #[test]
    fn test_file_source() {
        let path = std::env::temp_dir().join(format!(
            "mqtt_frame_check_{}.bin",
            std::process::id()
        ));
        std::fs::write(&path, SAMPLE_PUBLISH).expect("Failed to write fixture");

        let config = Config::from_args(args(None, Some(path.clone()))).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.source, PacketSource::File(path));
        assert_eq!(config.packet.len(), 27);
    }

    #[test]
    fn test_missing_file() {
        let path = PathBuf::from("/nonexistent/mqtt_frame_check.bin");

        match Config::from_args(args(None, Some(path))) {
            Err(MqttError::Io(_)) => {}
            other => panic!("Expected Io error, got {:?}", other),
        }
    }

    #[test]
    fn test_cli_parse() {
        let args = Args::try_parse_from([
            "mqtt-frame-check",
            "--hex",
            "3018",
            "--topic-len",
            "10",
            "--strict",
        ])
        .expect("Failed to parse args");

        assert_eq!(args.hex.as_deref(), Some("3018"));
        assert_eq!(args.topic_len, Some(10));
        assert!(args.strict);
        assert!(!args.verbose);
    }

    #[test]
    fn test_cli_hex_conflicts_with_file() {
        Args::try_parse_from(["mqtt-frame-check", "--hex", "30", "--file", "packet.bin"])
            .expect_err("hex and file are exclusive");
    }

    #[test]
    fn test_sample_without_strict_succeeds() {
        assert_eq!(status_for(&[]), EXIT_OK);
    }

    #[test]
    fn test_sample_with_strict_fails() {
        assert_eq!(status_for(&["--strict"]), EXIT_MISMATCH);
    }

    #[test]
    fn test_matching_packet_with_strict_succeeds() {
        // remaining length 0x19 = 25 matches the 25 byte body
        let hex = "30 19 00 0a 74 65 73 74 2f 74 6f 70 69 63 \
                   48 65 6c 6c 6f 2c 20 57 6f 72 6c 64 21";

        assert_eq!(status_for(&["--strict", "--hex", hex]), EXIT_OK);
    }

    #[test]
    fn test_short_packet_is_an_error() {
        assert_eq!(status_for(&["--hex", "30 19 00 0a 74"]), EXIT_ERROR);
        assert_eq!(status_for(&["--strict", "--hex", "30 19 00 0a 74"]), EXIT_ERROR);
    }

    #[test]
    fn test_topic_len_override() {
        let args = Args::try_parse_from(["mqtt-frame-check", "--topic-len", "0"]).unwrap();
        let config = Config::from_args(args).unwrap();

        let check = config.check().unwrap();

        assert_eq!(check.topic_len, 0);
        assert_eq!(check.computed_payload_len, SAMPLE_PUBLISH.len() - 4);
    }

    #[test]
    fn test_verbose_flag_reaches_config() {
        let args = Args::try_parse_from(["mqtt-frame-check", "-v"]).unwrap();

        assert!(Config::from_args(args).unwrap().verbose);
    }
}
