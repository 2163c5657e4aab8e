//! ApiVersions (key 18): capability negotiation.

use crate::error::Result;
use crate::protocol::array::{read_array, write_array};
use crate::protocol::frame::{ApiRequest, Decodable, Encodable};
use crate::protocol::primitive::{read_int16, read_int32, write_int16, write_int32};
use crate::protocol::strings::{read_string, write_string};
use crate::protocol::tagged::{read_unknown_tagged_fields, write_unknown_tagged_fields};
use crate::types::RawTaggedField;
use bytes::{Buf, BufMut};
use serde::Serialize;

pub const API_VERSIONS_KEY: i16 = 18;

/// v0 carries no fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiVersionsRequestV0;

impl Encodable for ApiVersionsRequestV0 {
    fn encode<B: BufMut>(&self, _dst: &mut B) -> Result<()> {
        Ok(())
    }
}

impl Decodable for ApiVersionsRequestV0 {
    fn decode<B: Buf>(_src: &mut B) -> Result<Self> {
        Ok(Self)
    }
}

impl ApiRequest for ApiVersionsRequestV0 {
    const API_KEY: i16 = API_VERSIONS_KEY;
    const API_VERSION: i16 = 0;
    const REQUEST_HEADER_VERSION: i16 = 1;
    const RESPONSE_HEADER_VERSION: i16 = 0;

    type Response = ApiVersionsResponseV0;
}

/// Supported version range for one API key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ApiVersionV0 {
    pub api_key: i16,
    pub min_version: i16,
    pub max_version: i16,
}

impl Encodable for ApiVersionV0 {
    fn encode<B: BufMut>(&self, dst: &mut B) -> Result<()> {
        write_int16(dst, self.api_key)?;
        write_int16(dst, self.min_version)?;
        write_int16(dst, self.max_version)
    }
}

impl Decodable for ApiVersionV0 {
    fn decode<B: Buf>(src: &mut B) -> Result<Self> {
        Ok(Self {
            api_key: read_int16(src)?,
            min_version: read_int16(src)?,
            max_version: read_int16(src)?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ApiVersionsResponseV0 {
    pub error_code: i16,
    pub api_keys: Vec<ApiVersionV0>,
}

impl Encodable for ApiVersionsResponseV0 {
    fn encode<B: BufMut>(&self, dst: &mut B) -> Result<()> {
        write_int16(dst, self.error_code)?;
        write_array(dst, &self.api_keys, false, |dst, k| k.encode(dst))
    }
}

impl Decodable for ApiVersionsResponseV0 {
    fn decode<B: Buf>(src: &mut B) -> Result<Self> {
        Ok(Self {
            error_code: read_int16(src)?,
            api_keys: read_array(src, false, ApiVersionV0::decode)?,
        })
    }
}

/// First flexible version: compact strings and tagged fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiVersionsRequestV3 {
    pub client_software_name: String,
    pub client_software_version: String,
    pub tagged_fields: Vec<RawTaggedField>,
}

impl Encodable for ApiVersionsRequestV3 {
    fn encode<B: BufMut>(&self, dst: &mut B) -> Result<()> {
        write_string(dst, &self.client_software_name, true)?;
        write_string(dst, &self.client_software_version, true)?;
        write_unknown_tagged_fields(dst, &self.tagged_fields)
    }
}

impl Decodable for ApiVersionsRequestV3 {
    fn decode<B: Buf>(src: &mut B) -> Result<Self> {
        Ok(Self {
            client_software_name: read_string(src, true)?,
            client_software_version: read_string(src, true)?,
            tagged_fields: read_unknown_tagged_fields(src)?,
        })
    }
}

impl ApiRequest for ApiVersionsRequestV3 {
    const API_KEY: i16 = API_VERSIONS_KEY;
    const API_VERSION: i16 = 3;
    const REQUEST_HEADER_VERSION: i16 = 2;
    // ApiVersions responses keep header v0 so old clients can parse them
    const RESPONSE_HEADER_VERSION: i16 = 0;

    type Response = ApiVersionsResponseV3;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ApiVersionV3 {
    pub api_key: i16,
    pub min_version: i16,
    pub max_version: i16,
    pub tagged_fields: Vec<RawTaggedField>,
}

impl Encodable for ApiVersionV3 {
    fn encode<B: BufMut>(&self, dst: &mut B) -> Result<()> {
        write_int16(dst, self.api_key)?;
        write_int16(dst, self.min_version)?;
        write_int16(dst, self.max_version)?;
        write_unknown_tagged_fields(dst, &self.tagged_fields)
    }
}

impl Decodable for ApiVersionV3 {
    fn decode<B: Buf>(src: &mut B) -> Result<Self> {
        Ok(Self {
            api_key: read_int16(src)?,
            min_version: read_int16(src)?,
            max_version: read_int16(src)?,
            tagged_fields: read_unknown_tagged_fields(src)?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ApiVersionsResponseV3 {
    pub error_code: i16,
    pub api_keys: Vec<ApiVersionV3>,
    pub throttle_time_ms: i32,
    pub tagged_fields: Vec<RawTaggedField>,
}

impl Encodable for ApiVersionsResponseV3 {
    fn encode<B: BufMut>(&self, dst: &mut B) -> Result<()> {
        write_int16(dst, self.error_code)?;
        write_array(dst, &self.api_keys, true, |dst, k| k.encode(dst))?;
        write_int32(dst, self.throttle_time_ms)?;
        write_unknown_tagged_fields(dst, &self.tagged_fields)
    }
}

impl Decodable for ApiVersionsResponseV3 {
    fn decode<B: Buf>(src: &mut B) -> Result<Self> {
        Ok(Self {
            error_code: read_int16(src)?,
            api_keys: read_array(src, true, ApiVersionV3::decode)?,
            throttle_time_ms: read_int32(src)?,
            tagged_fields: read_unknown_tagged_fields(src)?,
        })
    }
}
