//! Remaining Length checks for MQTT PUBLISH packets.
//!
//! [`validate_remaining_length`] splits a packet into fixed header, topic field
//! and payload and compares the declared Remaining Length with what is actually
//! there. [`Report`] renders the result for people.

pub mod config;
pub mod consts;
pub mod error;
pub mod packets;
pub mod report;
pub mod validator;

pub use error::MqttError;
pub use packets::fixed_header::FixedHeader;
pub use report::Report;
pub use validator::{validate_declared_topic, validate_remaining_length, RemainingLengthCheck};
