//! Length-prefixed framing and the message traits it is built on.
//!
//! Frame: int32 (BE) length + body. Request body: request header + payload.
//! Response body: response header + payload.

use crate::error::{Result, WireError};
use crate::protocol::header::{RequestHeader, ResponseHeader};
use bytes::{Buf, BufMut, BytesMut};

pub const LENGTH_PREFIX_BYTES: usize = 4;
pub const DEFAULT_MAX_FRAME_LEN: usize = 100 * 1024 * 1024;

/// A message payload that can be appended to a buffer.
pub trait Encodable {
    fn encode<B: BufMut>(&self, dst: &mut B) -> Result<()>;
}

/// A message payload that can be read back, consuming exactly its own bytes.
pub trait Decodable: Sized {
    fn decode<B: Buf>(src: &mut B) -> Result<Self>;
}

/// A request schema at one fixed API version, tied to its response schema.
pub trait ApiRequest: Encodable {
    const API_KEY: i16;
    const API_VERSION: i16;
    const REQUEST_HEADER_VERSION: i16;
    const RESPONSE_HEADER_VERSION: i16;

    type Response: Decodable;

    fn header(correlation_id: i32, client_id: Option<&str>) -> RequestHeader {
        RequestHeader {
            client_id: client_id.map(str::to_owned),
            ..RequestHeader::new(Self::API_KEY, Self::API_VERSION, correlation_id)
        }
    }
}

/// Write `write_body` behind a placeholder length, then backpatch the length.
fn encode_framed<F>(write_body: F) -> Result<BytesMut>
where
    F: FnOnce(&mut BytesMut) -> Result<()>,
{
    let mut dst = BytesMut::new();
    dst.put_i32(0); // message_size, filled in below
    write_body(&mut dst)?;
    let size = dst.len() - LENGTH_PREFIX_BYTES;
    let declared = i32::try_from(size).map_err(|_| WireError::FrameTooLarge {
        size,
        max: i32::MAX as usize,
    })?;
    dst[..LENGTH_PREFIX_BYTES].copy_from_slice(&declared.to_be_bytes());
    Ok(dst)
}

/// Serialize a full request frame: length, header, payload.
pub fn encode_request<M: Encodable>(
    header: &RequestHeader,
    header_version: i16,
    message: &M,
) -> Result<BytesMut> {
    encode_framed(|dst| {
        header.write(dst, header_version)?;
        message.encode(dst)
    })
}

/// Serialize a full response frame: length, header, payload.
pub fn encode_response<M: Encodable>(
    header: &ResponseHeader,
    header_version: i16,
    message: &M,
) -> Result<BytesMut> {
    encode_framed(|dst| {
        header.write(dst, header_version)?;
        message.encode(dst)
    })
}

/// Validate a declared frame length against `max_frame_len`.
pub fn check_frame_len(declared: i32, max_frame_len: usize) -> Result<usize> {
    if declared <= 0 {
        return Err(WireError::InvalidFrameSize(declared));
    }
    let size = declared as usize;
    if size > max_frame_len {
        return Err(WireError::FrameTooLarge {
            size,
            max: max_frame_len,
        });
    }
    Ok(size)
}

/// Split one complete frame body off the front of `src`.
///
/// Returns `None` until the whole frame has arrived; the length prefix is only
/// consumed together with its body.
pub fn decode_frame(src: &mut BytesMut, max_frame_len: usize) -> Result<Option<BytesMut>> {
    if src.len() < LENGTH_PREFIX_BYTES {
        return Ok(None);
    }
    let declared = i32::from_be_bytes([src[0], src[1], src[2], src[3]]);
    let len = check_frame_len(declared, max_frame_len)?;
    if src.len() < LENGTH_PREFIX_BYTES + len {
        return Ok(None);
    }
    src.advance(LENGTH_PREFIX_BYTES);
    Ok(Some(src.split_to(len)))
}

/// Decode a response body (frame prefix already stripped) and match its correlation id.
pub fn decode_response<M: Decodable, B: Buf>(
    body: &mut B,
    header_version: i16,
    expected_correlation_id: i32,
) -> Result<(ResponseHeader, M)> {
    let header = ResponseHeader::read(body, header_version)?;
    if header.correlation_id != expected_correlation_id {
        return Err(WireError::CorrelationMismatch {
            expected: expected_correlation_id,
            actual: header.correlation_id,
        });
    }
    let message = M::decode(body)?;
    if body.has_remaining() {
        tracing::debug!(
            correlation_id = header.correlation_id,
            trailing = body.remaining(),
            "response has trailing bytes"
        );
    }
    Ok((header, message))
}
