//! Kafka binary wire protocol codec.
//!
//! Big-endian throughout. Readers take any `bytes::Buf` and advance it by
//! exactly the bytes they consume; writers append to any `bytes::BufMut`.
//! Compact vs. non-compact encoding is chosen per field by the caller.

pub mod array;
pub mod frame;
pub mod header;
pub mod messages;
pub mod primitive;
pub mod strings;
pub mod tagged;
pub mod varint;
pub mod visualize;

pub use array::{
    read_array, read_array_length, read_nullable_array, write_array, write_array_length,
    write_nullable_array,
};
pub use frame::{
    check_frame_len, decode_frame, decode_response, encode_request, encode_response, ApiRequest,
    Decodable, Encodable, DEFAULT_MAX_FRAME_LEN, LENGTH_PREFIX_BYTES,
};
pub use header::{RequestHeader, ResponseHeader};
pub use primitive::{
    read_boolean, read_exact, read_float64, read_int16, read_int32, read_int64, read_int8,
    read_uint16, read_uuid, write_boolean, write_float64, write_int16, write_int32, write_int64,
    write_int8, write_uint16, write_uuid,
};
pub use strings::{
    read_bytes, read_nullable_bytes, read_nullable_string, read_string, read_string_length,
    write_bytes, write_nullable_bytes, write_nullable_string, write_string, write_string_length,
};
pub use tagged::{read_unknown_tagged_fields, write_unknown_tagged_fields};
pub use varint::{
    read_unsigned_varint, unsigned_varint_size, write_unsigned_varint, UNSIGNED_VARINT_MAX,
};
