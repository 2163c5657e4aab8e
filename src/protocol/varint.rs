//! Unsigned base-128 varint (Kafka UNSIGNED_VARINT).
//!
//! 7 payload bits per byte, least-significant group first, high bit set on every
//! byte but the last. The domain is `[0, 2^31 - 1]`, so at most 5 bytes.

use crate::error::{Result, WireError};
use crate::protocol::primitive::ensure_remaining;
use bytes::{Buf, BufMut};

pub const UNSIGNED_VARINT_MAX: u32 = i32::MAX as u32;
const MAX_VARINT_BYTES: usize = 5;
const PAYLOAD_MASK: u8 = 0x7f;
const CONTINUATION_BIT: u8 = 0x80;

/// Encode `value`, which must lie in `[0, 2^31 - 1]`.
pub fn write_unsigned_varint<B, V>(dst: &mut B, value: V) -> Result<()>
where
    B: BufMut,
    V: Copy + Into<i128>,
{
    let wide: i128 = value.into();
    if wide < 0 || wide > UNSIGNED_VARINT_MAX as i128 {
        return Err(WireError::out_of_range("UNSIGNED_VARINT", wide));
    }
    let mut u = wide as u32;
    while u > PAYLOAD_MASK as u32 {
        dst.put_u8((u as u8 & PAYLOAD_MASK) | CONTINUATION_BIT);
        u >>= 7;
    }
    dst.put_u8(u as u8);
    Ok(())
}

pub fn read_unsigned_varint<B: Buf>(src: &mut B) -> Result<u32> {
    let mut result: u64 = 0;
    for i in 0..MAX_VARINT_BYTES {
        ensure_remaining(src, 1)?;
        let b = src.get_u8();
        result |= ((b & PAYLOAD_MASK) as u64) << (7 * i);
        if b & CONTINUATION_BIT == 0 {
            if result > UNSIGNED_VARINT_MAX as u64 {
                return Err(WireError::MalformedVarint("value exceeds 31 bits"));
            }
            return Ok(result as u32);
        }
    }
    Err(WireError::MalformedVarint(
        "most significant bit in 5th byte is set",
    ))
}

/// Number of bytes `value` occupies once encoded.
pub fn unsigned_varint_size(value: u32) -> usize {
    let mut size = 1;
    let mut u = value >> 7;
    while u > 0 {
        size += 1;
        u >>= 7;
    }
    size
}
