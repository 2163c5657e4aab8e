//! Unknown tagged fields: the trailer of every flexible-version struct.
//!
//! Entry: UNSIGNED_VARINT tag, UNSIGNED_VARINT size, `size` raw bytes.
//!
//! The list itself is never null, yet its count goes through the compact
//! array-length helpers, which shift by one to reserve 0 for null. Writing
//! `count - 1` and adding 1 back on read cancels that shift, so the stored
//! varint equals the count and an empty list is the single byte `00`.

use crate::error::Result;
use crate::protocol::array::{
    capacity_hint, len_i64, read_array_length, write_array_length,
};
use crate::protocol::primitive::read_exact;
use crate::protocol::varint::{read_unsigned_varint, write_unsigned_varint};
use crate::types::RawTaggedField;
use bytes::{Buf, BufMut};

impl RawTaggedField {
    pub fn read<B: Buf>(src: &mut B) -> Result<Self> {
        let tag = read_unsigned_varint(src)?;
        let size = read_unsigned_varint(src)?;
        let data = read_exact(src, size as usize)?;
        Ok(Self { tag, data })
    }

    pub fn write<B: BufMut>(&self, dst: &mut B) -> Result<()> {
        write_unsigned_varint(dst, self.tag)?;
        write_unsigned_varint(dst, len_i64(self.data.len()))?;
        dst.put_slice(&self.data);
        Ok(())
    }
}

pub fn read_unknown_tagged_fields<B: Buf>(src: &mut B) -> Result<Vec<RawTaggedField>> {
    let count = read_array_length(src, true)? + 1;
    let capacity = capacity_hint::<RawTaggedField>(count as usize, src.remaining());
    let mut fields = Vec::with_capacity(capacity);
    for _ in 0..count {
        fields.push(RawTaggedField::read(src)?);
    }
    Ok(fields)
}

pub fn write_unknown_tagged_fields<B: BufMut>(
    dst: &mut B,
    fields: &[RawTaggedField],
) -> Result<()> {
    write_array_length(dst, len_i64(fields.len()) - 1, true)?;
    for field in fields {
        field.write(dst)?;
    }
    Ok(())
}
