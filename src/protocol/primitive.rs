//! Fixed-width big-endian primitives: int8/16/32/64, uint16, float64, boolean, uuid.
//!
//! Writers accept any primitive integer and range-check it against the wire
//! width, so `write_int16(dst, 40_000i32)` fails instead of truncating.
//! Readers check `remaining()` first and never consume a partial value.

use crate::error::{Result, WireError};
use crate::types::Uuid;
use bytes::{Buf, BufMut};

const UUID_LEN: usize = 16;
const UUID_ZERO: Uuid = [0u8; UUID_LEN];

/// Fail with `Underflow` unless `src` holds at least `needed` bytes.
pub(crate) fn ensure_remaining<B: Buf>(src: &B, needed: usize) -> Result<()> {
    let remaining = src.remaining();
    if remaining < needed {
        return Err(WireError::Underflow { needed, remaining });
    }
    Ok(())
}

/// Read exactly `len` raw bytes.
pub fn read_exact<B: Buf>(src: &mut B, len: usize) -> Result<Vec<u8>> {
    ensure_remaining(src, len)?;
    let mut out = vec![0u8; len];
    src.copy_to_slice(&mut out);
    Ok(out)
}

fn narrow<T, V>(value: V, ty: &'static str) -> Result<T>
where
    V: Copy + Into<i128>,
    T: TryFrom<V>,
{
    T::try_from(value).map_err(|_| WireError::out_of_range(ty, value))
}

pub fn read_int8<B: Buf>(src: &mut B) -> Result<i8> {
    ensure_remaining(src, 1)?;
    Ok(src.get_i8())
}

pub fn write_int8<B, V>(dst: &mut B, value: V) -> Result<()>
where
    B: BufMut,
    V: Copy + Into<i128>,
    i8: TryFrom<V>,
{
    dst.put_i8(narrow(value, "INT8")?);
    Ok(())
}

/// Any non-zero byte reads as `true`.
pub fn read_boolean<B: Buf>(src: &mut B) -> Result<bool> {
    Ok(read_int8(src)? != 0)
}

pub fn write_boolean<B: BufMut>(dst: &mut B, value: bool) -> Result<()> {
    write_int8(dst, value as i8)
}

pub fn read_int16<B: Buf>(src: &mut B) -> Result<i16> {
    ensure_remaining(src, 2)?;
    Ok(src.get_i16())
}

pub fn write_int16<B, V>(dst: &mut B, value: V) -> Result<()>
where
    B: BufMut,
    V: Copy + Into<i128>,
    i16: TryFrom<V>,
{
    dst.put_i16(narrow(value, "INT16")?);
    Ok(())
}

pub fn read_int32<B: Buf>(src: &mut B) -> Result<i32> {
    ensure_remaining(src, 4)?;
    Ok(src.get_i32())
}

pub fn write_int32<B, V>(dst: &mut B, value: V) -> Result<()>
where
    B: BufMut,
    V: Copy + Into<i128>,
    i32: TryFrom<V>,
{
    dst.put_i32(narrow(value, "INT32")?);
    Ok(())
}

pub fn read_int64<B: Buf>(src: &mut B) -> Result<i64> {
    ensure_remaining(src, 8)?;
    Ok(src.get_i64())
}

pub fn write_int64<B, V>(dst: &mut B, value: V) -> Result<()>
where
    B: BufMut,
    V: Copy + Into<i128>,
    i64: TryFrom<V>,
{
    dst.put_i64(narrow(value, "INT64")?);
    Ok(())
}

/// The only unsigned fixed-width type on the wire.
pub fn read_uint16<B: Buf>(src: &mut B) -> Result<u16> {
    ensure_remaining(src, 2)?;
    Ok(src.get_u16())
}

pub fn write_uint16<B, V>(dst: &mut B, value: V) -> Result<()>
where
    B: BufMut,
    V: Copy + Into<i128>,
    u16: TryFrom<V>,
{
    dst.put_u16(narrow(value, "UINT16")?);
    Ok(())
}

/// IEEE-754 double, 8 bytes big-endian. Every bit pattern is valid.
pub fn read_float64<B: Buf>(src: &mut B) -> Result<f64> {
    ensure_remaining(src, 8)?;
    Ok(src.get_f64())
}

pub fn write_float64<B: BufMut>(dst: &mut B, value: f64) {
    dst.put_f64(value);
}

/// Read 16 raw bytes; the all-zero UUID decodes as `None`.
pub fn read_uuid<B: Buf>(src: &mut B) -> Result<Option<Uuid>> {
    ensure_remaining(src, UUID_LEN)?;
    let mut value = UUID_ZERO;
    src.copy_to_slice(&mut value);
    if value == UUID_ZERO {
        Ok(None)
    } else {
        Ok(Some(value))
    }
}

/// `None` is written as the all-zero UUID.
pub fn write_uuid<B: BufMut>(dst: &mut B, value: Option<&Uuid>) {
    dst.put_slice(value.unwrap_or(&UUID_ZERO));
}
