//! Fetch (key 1) v0.

use crate::error::Result;
use crate::protocol::array::{read_array, write_array};
use crate::protocol::frame::{ApiRequest, Decodable, Encodable};
use crate::protocol::primitive::{
    read_int16, read_int32, read_int64, write_int16, write_int32, write_int64,
};
use crate::protocol::strings::{read_nullable_bytes, read_string, write_nullable_bytes, write_string};
use bytes::{Buf, BufMut};
use serde::Serialize;

pub const FETCH_KEY: i16 = 1;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FetchPartitionV0 {
    pub partition: i32,
    pub fetch_offset: i64,
    pub partition_max_bytes: i32,
}

impl Encodable for FetchPartitionV0 {
    fn encode<B: BufMut>(&self, dst: &mut B) -> Result<()> {
        write_int32(dst, self.partition)?;
        write_int64(dst, self.fetch_offset)?;
        write_int32(dst, self.partition_max_bytes)
    }
}

impl Decodable for FetchPartitionV0 {
    fn decode<B: Buf>(src: &mut B) -> Result<Self> {
        Ok(Self {
            partition: read_int32(src)?,
            fetch_offset: read_int64(src)?,
            partition_max_bytes: read_int32(src)?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FetchTopicV0 {
    pub topic: String,
    pub partitions: Vec<FetchPartitionV0>,
}

impl Encodable for FetchTopicV0 {
    fn encode<B: BufMut>(&self, dst: &mut B) -> Result<()> {
        write_string(dst, &self.topic, false)?;
        write_array(dst, &self.partitions, false, |dst, p| p.encode(dst))
    }
}

impl Decodable for FetchTopicV0 {
    fn decode<B: Buf>(src: &mut B) -> Result<Self> {
        Ok(Self {
            topic: read_string(src, false)?,
            partitions: read_array(src, false, FetchPartitionV0::decode)?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FetchRequestV0 {
    /// -1 for consumers.
    pub replica_id: i32,
    pub max_wait_ms: i32,
    pub min_bytes: i32,
    pub topics: Vec<FetchTopicV0>,
}

impl Encodable for FetchRequestV0 {
    fn encode<B: BufMut>(&self, dst: &mut B) -> Result<()> {
        write_int32(dst, self.replica_id)?;
        write_int32(dst, self.max_wait_ms)?;
        write_int32(dst, self.min_bytes)?;
        write_array(dst, &self.topics, false, |dst, t| t.encode(dst))
    }
}

impl Decodable for FetchRequestV0 {
    fn decode<B: Buf>(src: &mut B) -> Result<Self> {
        Ok(Self {
            replica_id: read_int32(src)?,
            max_wait_ms: read_int32(src)?,
            min_bytes: read_int32(src)?,
            topics: read_array(src, false, FetchTopicV0::decode)?,
        })
    }
}

impl ApiRequest for FetchRequestV0 {
    const API_KEY: i16 = FETCH_KEY;
    const API_VERSION: i16 = 0;
    const REQUEST_HEADER_VERSION: i16 = 1;
    const RESPONSE_HEADER_VERSION: i16 = 0;

    type Response = FetchResponseV0;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FetchResponsePartitionV0 {
    pub partition_index: i32,
    pub error_code: i16,
    pub high_watermark: i64,
    /// Raw record set; decoding record batches is left to the caller.
    pub records: Option<Vec<u8>>,
}

impl Encodable for FetchResponsePartitionV0 {
    fn encode<B: BufMut>(&self, dst: &mut B) -> Result<()> {
        write_int32(dst, self.partition_index)?;
        write_int16(dst, self.error_code)?;
        write_int64(dst, self.high_watermark)?;
        write_nullable_bytes(dst, self.records.as_deref(), false)
    }
}

impl Decodable for FetchResponsePartitionV0 {
    fn decode<B: Buf>(src: &mut B) -> Result<Self> {
        Ok(Self {
            partition_index: read_int32(src)?,
            error_code: read_int16(src)?,
            high_watermark: read_int64(src)?,
            records: read_nullable_bytes(src, false)?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FetchResponseTopicV0 {
    pub topic: String,
    pub partitions: Vec<FetchResponsePartitionV0>,
}

impl Encodable for FetchResponseTopicV0 {
    fn encode<B: BufMut>(&self, dst: &mut B) -> Result<()> {
        write_string(dst, &self.topic, false)?;
        write_array(dst, &self.partitions, false, |dst, p| p.encode(dst))
    }
}

impl Decodable for FetchResponseTopicV0 {
    fn decode<B: Buf>(src: &mut B) -> Result<Self> {
        Ok(Self {
            topic: read_string(src, false)?,
            partitions: read_array(src, false, FetchResponsePartitionV0::decode)?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FetchResponseV0 {
    pub responses: Vec<FetchResponseTopicV0>,
}

impl Encodable for FetchResponseV0 {
    fn encode<B: BufMut>(&self, dst: &mut B) -> Result<()> {
        write_array(dst, &self.responses, false, |dst, r| r.encode(dst))
    }
}

impl Decodable for FetchResponseV0 {
    fn decode<B: Buf>(src: &mut B) -> Result<Self> {
        Ok(Self {
            responses: read_array(src, false, FetchResponseTopicV0::decode)?,
        })
    }
}
