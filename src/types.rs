//! Core types shared across the codec.

use serde::Serialize;

/// Raw 16-byte UUID as it appears on the wire.
pub type Uuid = [u8; 16];

/// A tagged field this implementation does not understand.
///
/// Kept byte-for-byte so a decoded message can be re-emitted without dropping
/// extensions added by newer protocol versions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RawTaggedField {
    pub tag: u32,
    pub data: Vec<u8>,
}

impl RawTaggedField {
    pub fn new(tag: u32, data: impl Into<Vec<u8>>) -> Self {
        Self {
            tag,
            data: data.into(),
        }
    }
}
