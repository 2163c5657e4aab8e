//! kafka-wire: byte-exact codec for the Kafka binary wire protocol, with a
//! minimal single-connection client built on it.

pub mod client;
pub mod config;
pub mod error;
pub mod protocol;
pub mod types;

pub use client::Client;
pub use config::ClientConfig;
pub use error::{Result, WireError};
pub use protocol::{ApiRequest, Decodable, Encodable, RequestHeader, ResponseHeader};
pub use types::{RawTaggedField, Uuid};
