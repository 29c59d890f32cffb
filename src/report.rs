use std::fmt::Display;

use crate::{
    consts::MQTT_HEADER_LEN, packets::fixed_header::FixedHeader,
    validator::RemainingLengthCheck,
};

/// Human readable rendering of a [`RemainingLengthCheck`], one fact per line.
pub struct Report<'a> {
    pub header: Option<&'a FixedHeader>,
    pub check: &'a RemainingLengthCheck,
}

impl<'a> Report<'a> {
    pub fn new(header: Option<&'a FixedHeader>, check: &'a RemainingLengthCheck) -> Self {
        Self { header, check }
    }
}

impl Display for Report<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let check = self.check;

        if let Some(header) = self.header {
            writeln!(f, "Control byte: {:#04x} {}", header.as_byte(), header)?;
            if header.has_continuation_bit() {
                writeln!(
                    f,
                    "Warning: Remaining length byte {:#04x} has the continuation bit set",
                    header.get_remaining_len()
                )?;
            }
        }

        writeln!(f, "Total packet length: {}", check.packet_len)?;
        writeln!(f, "Header bytes: {}", MQTT_HEADER_LEN)?;
        writeln!(f, "Remaining length field: {}", check.declared_remaining_len)?;
        writeln!(f, "Expected packet size: {}", check.expected_packet_len())?;
        writeln!(f, "Topic: {}", latin1(&check.topic))?;
        writeln!(f, "Payload bytes: {}", check.computed_payload_len)?;
        writeln!(f, "Payload: {}", latin1(&check.payload))?;
        writeln!(
            f,
            "Expected remaining length: {}",
            check.computed_remaining_len
        )?;
        writeln!(f, "Actual remaining length: {}", check.declared_remaining_len)?;
        write!(f, "Match: {}", check.matches)
    }
}

/// One char per byte (Latin-1), so every byte stays visible, UTF-8 or not.
fn latin1(data: &[u8]) -> String {
    data.iter().map(|&b| char::from(b)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::validate_remaining_length;

    use crate::config::SAMPLE_PUBLISH as SAMPLE;

    #[test]
    fn test_report_sample() {
        let header = FixedHeader::from_bytes(&SAMPLE).unwrap();
        let check = validate_remaining_length(&SAMPLE, 10).unwrap();

        let text = Report::new(Some(&header), &check).to_string();

        let expected = "\
Control byte: 0x30 PUBLISH (dup: false, qos: 0, retain: false)
Total packet length: 27
Header bytes: 2
Remaining length field: 24
Expected packet size: 26
Topic: test/topic
Payload bytes: 13
Payload: Hello, World!
Expected remaining length: 25
Actual remaining length: 24
Match: false";

        assert_eq!(text, expected);
    }

    #[test]
    fn test_report_without_header() {
        let check = validate_remaining_length(&SAMPLE, 10).unwrap();

        let text = Report::new(None, &check).to_string();

        assert!(text.starts_with("Total packet length: 27\n"));
        assert!(text.ends_with("Match: false"));
    }

    #[test]
    fn test_latin1_keeps_every_byte() {
        assert_eq!(latin1(b"Hi"), "Hi");
        assert_eq!(latin1(&[0x48, 0xE9, 0x80]), "H\u{E9}\u{80}");
        assert_eq!(latin1(&[0xC3, 0xA9]).chars().count(), 2);
    }

    #[test]
    fn test_report_continuation_warning() {
        let packet = [0x30, 0x82, 0x00, 0x00, 0xFF];
        let header = FixedHeader::from_bytes(&packet).unwrap();
        let check = validate_remaining_length(&packet, 0).unwrap();

        let text = Report::new(Some(&header), &check).to_string();

        assert!(text.contains("continuation bit set"));
        // 0xFF is shown as its Latin-1 char, not a replacement char
        assert!(text.contains("Payload: \u{FF}\n"));
    }
}
