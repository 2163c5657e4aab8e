//! Request and response headers.
//!
//! Request header v0: api_key, api_version, correlation_id.
//! v1 adds a nullable (non-compact) client_id, v2 adds tagged fields.
//! Response header v0: correlation_id; v1 adds tagged fields.

use crate::error::{Result, WireError};
use crate::protocol::primitive::{read_int16, read_int32, write_int16, write_int32};
use crate::protocol::strings::{read_nullable_string, write_nullable_string};
use crate::protocol::tagged::{read_unknown_tagged_fields, write_unknown_tagged_fields};
use crate::types::RawTaggedField;
use bytes::{Buf, BufMut};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestHeader {
    pub api_key: i16,
    pub api_version: i16,
    pub correlation_id: i32,
    /// Written from header v1 on.
    pub client_id: Option<String>,
    /// Written from header v2 on.
    pub tagged_fields: Vec<RawTaggedField>,
}

impl RequestHeader {
    pub fn new(api_key: i16, api_version: i16, correlation_id: i32) -> Self {
        Self {
            api_key,
            api_version,
            correlation_id,
            client_id: None,
            tagged_fields: Vec::new(),
        }
    }

    pub fn with_client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }

    pub fn write<B: BufMut>(&self, dst: &mut B, header_version: i16) -> Result<()> {
        check_version("request", header_version, 2)?;
        write_int16(dst, self.api_key)?;
        write_int16(dst, self.api_version)?;
        write_int32(dst, self.correlation_id)?;
        if header_version >= 1 {
            write_nullable_string(dst, self.client_id.as_deref(), false)?;
        }
        if header_version >= 2 {
            write_unknown_tagged_fields(dst, &self.tagged_fields)?;
        }
        Ok(())
    }

    pub fn read<B: Buf>(src: &mut B, header_version: i16) -> Result<Self> {
        check_version("request", header_version, 2)?;
        let mut header = Self::new(read_int16(src)?, read_int16(src)?, read_int32(src)?);
        if header_version >= 1 {
            header.client_id = read_nullable_string(src, false)?;
        }
        if header_version >= 2 {
            header.tagged_fields = read_unknown_tagged_fields(src)?;
        }
        Ok(header)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseHeader {
    pub correlation_id: i32,
    /// Present from header v1 on.
    pub tagged_fields: Vec<RawTaggedField>,
}

impl ResponseHeader {
    pub fn new(correlation_id: i32) -> Self {
        Self {
            correlation_id,
            tagged_fields: Vec::new(),
        }
    }

    pub fn write<B: BufMut>(&self, dst: &mut B, header_version: i16) -> Result<()> {
        check_version("response", header_version, 1)?;
        write_int32(dst, self.correlation_id)?;
        if header_version >= 1 {
            write_unknown_tagged_fields(dst, &self.tagged_fields)?;
        }
        Ok(())
    }

    pub fn read<B: Buf>(src: &mut B, header_version: i16) -> Result<Self> {
        check_version("response", header_version, 1)?;
        let mut header = Self::new(read_int32(src)?);
        if header_version >= 1 {
            header.tagged_fields = read_unknown_tagged_fields(src)?;
        }
        Ok(header)
    }
}

fn check_version(kind: &'static str, version: i16, max: i16) -> Result<()> {
    if !(0..=max).contains(&version) {
        return Err(WireError::UnsupportedHeaderVersion { kind, version });
    }
    Ok(())
}
