//! Nullable strings and byte blobs.
//!
//! Strings: non-compact INT16 length (-1 = null, max 32767) or compact
//! UNSIGNED_VARINT of `length + 1` (0 = null). Bytes use the 32-bit array
//! length convention and carry no UTF-8 validation.

use crate::error::{Result, WireError};
use crate::protocol::array::{
    checked_length, len_i64, read_array_length, write_array_length, ARRAY_MAX_LEN,
};
use crate::protocol::primitive::{read_exact, read_int16, write_int16};
use crate::protocol::varint::{read_unsigned_varint, write_unsigned_varint};
use bytes::{Buf, BufMut};

const STRING_MAX_LEN: i64 = i16::MAX as i64;

/// Decoded string length with the compact shift undone; -1 means null.
pub fn read_string_length<B: Buf>(src: &mut B, compact: bool) -> Result<i64> {
    let length = if compact {
        read_unsigned_varint(src)? as i64 - 1
    } else {
        read_int16(src)? as i64
    };
    if !(-1..=STRING_MAX_LEN).contains(&length) {
        return Err(WireError::InvalidLength {
            kind: "string",
            length,
        });
    }
    Ok(length)
}

pub fn write_string_length<B: BufMut>(dst: &mut B, length: i64, compact: bool) -> Result<()> {
    if !(-1..=STRING_MAX_LEN).contains(&length) {
        return Err(WireError::out_of_range("STRING_LENGTH", length));
    }
    if compact {
        write_unsigned_varint(dst, length + 1)
    } else {
        write_int16(dst, length)
    }
}

pub fn read_nullable_string<B: Buf>(src: &mut B, compact: bool) -> Result<Option<String>> {
    let length = read_string_length(src, compact)?;
    match checked_length("string", length, STRING_MAX_LEN)? {
        None => Ok(None),
        Some(len) => Ok(Some(String::from_utf8(read_exact(src, len)?)?)),
    }
}

pub fn read_string<B: Buf>(src: &mut B, compact: bool) -> Result<String> {
    read_nullable_string(src, compact)?.ok_or(WireError::UnexpectedNull("string"))
}

pub fn write_nullable_string<B: BufMut>(
    dst: &mut B,
    value: Option<&str>,
    compact: bool,
) -> Result<()> {
    match value {
        None => write_string_length(dst, -1, compact),
        Some(s) => {
            let bytes = s.as_bytes();
            write_string_length(dst, len_i64(bytes.len()), compact)?;
            dst.put_slice(bytes);
            Ok(())
        }
    }
}

pub fn write_string<B: BufMut>(dst: &mut B, value: &str, compact: bool) -> Result<()> {
    write_nullable_string(dst, Some(value), compact)
}

pub fn read_nullable_bytes<B: Buf>(src: &mut B, compact: bool) -> Result<Option<Vec<u8>>> {
    let length = read_array_length(src, compact)?;
    match checked_length("bytes", length, ARRAY_MAX_LEN)? {
        None => Ok(None),
        Some(len) => Ok(Some(read_exact(src, len)?)),
    }
}

pub fn read_bytes<B: Buf>(src: &mut B, compact: bool) -> Result<Vec<u8>> {
    read_nullable_bytes(src, compact)?.ok_or(WireError::UnexpectedNull("bytes"))
}

pub fn write_nullable_bytes<B: BufMut>(
    dst: &mut B,
    value: Option<&[u8]>,
    compact: bool,
) -> Result<()> {
    match value {
        None => write_array_length(dst, -1, compact),
        Some(b) => {
            write_array_length(dst, len_i64(b.len()), compact)?;
            dst.put_slice(b);
            Ok(())
        }
    }
}

pub fn write_bytes<B: BufMut>(dst: &mut B, value: &[u8], compact: bool) -> Result<()> {
    write_nullable_bytes(dst, Some(value), compact)
}
