//! Nullable arrays and the shared 32-bit length convention.
//!
//! Non-compact: INT32 length, -1 is null. Compact: UNSIGNED_VARINT of
//! `length + 1`, 0 is null. Bytes blobs and the tagged field list reuse
//! `read_array_length` / `write_array_length`.

use crate::error::{Result, WireError};
use crate::protocol::primitive::{read_int32, write_int32};
use crate::protocol::varint::{read_unsigned_varint, write_unsigned_varint};
use bytes::{Buf, BufMut};

pub(crate) const ARRAY_MAX_LEN: i64 = i32::MAX as i64;

pub(crate) fn len_i64(len: usize) -> i64 {
    i64::try_from(len).unwrap_or(i64::MAX)
}

/// Initial capacity for `len` decoded elements of `T`.
///
/// The declared length is untrusted, so the reservation never exceeds the
/// number of input bytes still remaining.
pub(crate) fn capacity_hint<T>(len: usize, remaining: usize) -> usize {
    len.min(remaining / std::mem::size_of::<T>().max(1))
}

/// Map a decoded length onto `None` (null) or a usable element count.
pub(crate) fn checked_length(kind: &'static str, length: i64, max: i64) -> Result<Option<usize>> {
    match length {
        -1 => Ok(None),
        l if (0..=max).contains(&l) => Ok(Some(l as usize)),
        l => Err(WireError::InvalidLength { kind, length: l }),
    }
}

/// Decoded length with the compact shift undone; -1 means null.
pub fn read_array_length<B: Buf>(src: &mut B, compact: bool) -> Result<i64> {
    // signed intermediate: a stored 0 becomes -1
    if compact {
        Ok(read_unsigned_varint(src)? as i64 - 1)
    } else {
        Ok(read_int32(src)? as i64)
    }
}

pub fn write_array_length<B: BufMut>(dst: &mut B, length: i64, compact: bool) -> Result<()> {
    if !(-1..=ARRAY_MAX_LEN).contains(&length) {
        return Err(WireError::out_of_range("ARRAY_LENGTH", length));
    }
    if compact {
        write_unsigned_varint(dst, length + 1)
    } else {
        write_int32(dst, length)
    }
}

/// Read a nullable array, calling `read_element` once per declared element.
pub fn read_nullable_array<B, T, F>(
    src: &mut B,
    compact: bool,
    mut read_element: F,
) -> Result<Option<Vec<T>>>
where
    B: Buf,
    F: FnMut(&mut B) -> Result<T>,
{
    let length = read_array_length(src, compact)?;
    let Some(len) = checked_length("array", length, ARRAY_MAX_LEN)? else {
        return Ok(None);
    };
    let mut elements = Vec::with_capacity(capacity_hint::<T>(len, src.remaining()));
    for _ in 0..len {
        elements.push(read_element(src)?);
    }
    Ok(Some(elements))
}

pub fn read_array<B, T, F>(src: &mut B, compact: bool, read_element: F) -> Result<Vec<T>>
where
    B: Buf,
    F: FnMut(&mut B) -> Result<T>,
{
    read_nullable_array(src, compact, read_element)?.ok_or(WireError::UnexpectedNull("array"))
}

/// Write a nullable array, calling `write_element` for each element in order.
pub fn write_nullable_array<B, T, F>(
    dst: &mut B,
    array: Option<&[T]>,
    compact: bool,
    mut write_element: F,
) -> Result<()>
where
    B: BufMut,
    F: FnMut(&mut B, &T) -> Result<()>,
{
    let Some(array) = array else {
        return write_array_length(dst, -1, compact);
    };
    write_array_length(dst, len_i64(array.len()), compact)?;
    for element in array {
        write_element(dst, element)?;
    }
    Ok(())
}

pub fn write_array<B, T, F>(dst: &mut B, array: &[T], compact: bool, write_element: F) -> Result<()>
where
    B: BufMut,
    F: FnMut(&mut B, &T) -> Result<()>,
{
    write_nullable_array(dst, Some(array), compact, write_element)
}
