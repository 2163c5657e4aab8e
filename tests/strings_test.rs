//! Strings and byte blobs in both length conventions.

use kafka_wire::protocol::{
    read_bytes, read_nullable_bytes, read_nullable_string, read_string, write_bytes,
    write_nullable_bytes, write_nullable_string, write_string, write_unsigned_varint,
};
use kafka_wire::WireError;

fn string_bytes(value: Option<&str>, compact: bool) -> Vec<u8> {
    let mut buf = Vec::<u8>::new();
    write_nullable_string(&mut buf, value, compact).unwrap();
    buf
}

#[test]
fn nullable_string_round_trip_both_modes() {
    let values = [None, Some(""), Some("hello"), Some("ünïcödé ✓")];
    for compact in [false, true] {
        for value in values {
            let buf = string_bytes(value, compact);
            let mut src = &buf[..];
            let decoded = read_nullable_string(&mut src, compact).unwrap();
            assert_eq!(decoded.as_deref(), value, "compact={}", compact);
            assert!(src.is_empty());
        }
    }
}

#[test]
fn string_length_layout() {
    assert_eq!(string_bytes(None, false), vec![0xff, 0xff]);
    assert_eq!(string_bytes(None, true), vec![0x00]);
    assert_eq!(string_bytes(Some(""), false), vec![0x00, 0x00]);
    assert_eq!(string_bytes(Some(""), true), vec![0x01]);
    assert_eq!(string_bytes(Some("abc"), false), b"\x00\x03abc".to_vec());
    assert_eq!(string_bytes(Some("abc"), true), b"\x04abc".to_vec());
}

#[test]
fn longest_string_fits_and_one_more_does_not() {
    let longest = "a".repeat(32_767);
    for compact in [false, true] {
        let buf = string_bytes(Some(longest.as_str()), compact);
        assert_eq!(read_string(&mut &buf[..], compact).unwrap(), longest);

        let too_long = "a".repeat(32_768);
        let mut buf = Vec::<u8>::new();
        let err = write_string(&mut buf, &too_long, compact).unwrap_err();
        assert!(matches!(err, WireError::OutOfRange { value: 32_768, .. }));
        assert!(buf.is_empty());
    }
}

#[test]
fn decoded_string_length_outside_domain_is_invalid() {
    let mut src: &[u8] = &[0xff, 0xfe];
    assert!(matches!(
        read_nullable_string(&mut src, false).unwrap_err(),
        WireError::InvalidLength { kind: "string", length: -2 }
    ));

    // compact 32769 un-shifts to 32768
    let mut buf = Vec::<u8>::new();
    write_unsigned_varint(&mut buf, 32_769u32).unwrap();
    assert!(matches!(
        read_nullable_string(&mut &buf[..], true).unwrap_err(),
        WireError::InvalidLength { kind: "string", length: 32_768 }
    ));
}

#[test]
fn non_nullable_string_rejects_null() {
    for compact in [false, true] {
        let buf = string_bytes(None, compact);
        assert!(matches!(
            read_string(&mut &buf[..], compact).unwrap_err(),
            WireError::UnexpectedNull("string")
        ));
    }
}

#[test]
fn short_string_payload_underflows() {
    let mut src: &[u8] = &[0x00, 0x05, b'a', b'b'];
    assert!(matches!(
        read_string(&mut src, false).unwrap_err(),
        WireError::Underflow { needed: 5, remaining: 2 }
    ));
}

#[test]
fn invalid_utf8_is_rejected() {
    let mut src: &[u8] = &[0x00, 0x02, 0xff, 0xfe];
    assert!(matches!(
        read_string(&mut src, false).unwrap_err(),
        WireError::InvalidUtf8(_)
    ));
}

#[test]
fn nullable_bytes_round_trip_both_modes() {
    let values: [Option<&[u8]>; 4] = [
        None,
        Some(&b""[..]),
        Some(&b"records"[..]),
        Some(&[0xffu8, 0x00, 0xfe][..]),
    ];
    for compact in [false, true] {
        for value in values {
            let mut buf = Vec::<u8>::new();
            write_nullable_bytes(&mut buf, value, compact).unwrap();
            let mut src = &buf[..];
            assert_eq!(read_nullable_bytes(&mut src, compact).unwrap().as_deref(), value);
            assert!(src.is_empty());
        }
    }
}

#[test]
fn bytes_use_32_bit_length() {
    let mut buf = Vec::<u8>::new();
    write_nullable_bytes(&mut buf, None, false).unwrap();
    assert_eq!(buf, vec![0xff, 0xff, 0xff, 0xff]);

    let mut buf = Vec::<u8>::new();
    write_bytes(&mut buf, b"xy", false).unwrap();
    assert_eq!(buf, vec![0x00, 0x00, 0x00, 0x02, b'x', b'y']);

    let mut buf = Vec::<u8>::new();
    write_bytes(&mut buf, b"xy", true).unwrap();
    assert_eq!(buf, vec![0x03, b'x', b'y']);

    // longer than any string may be
    let blob = vec![7u8; 40_000];
    let mut buf = Vec::<u8>::new();
    write_bytes(&mut buf, &blob, true).unwrap();
    assert_eq!(read_bytes(&mut &buf[..], true).unwrap(), blob);
}

#[test]
fn bytes_errors() {
    let mut null = Vec::<u8>::new();
    write_nullable_bytes(&mut null, None, true).unwrap();
    assert!(matches!(
        read_bytes(&mut &null[..], true).unwrap_err(),
        WireError::UnexpectedNull("bytes")
    ));

    let mut src: &[u8] = &[0xff, 0xff, 0xff, 0xfe];
    assert!(matches!(
        read_nullable_bytes(&mut src, false).unwrap_err(),
        WireError::InvalidLength { kind: "bytes", length: -2 }
    ));

    let mut src: &[u8] = &[0x00, 0x00, 0x00, 0x04, 0x01];
    assert!(matches!(
        read_bytes(&mut src, false).unwrap_err(),
        WireError::Underflow { needed: 4, remaining: 1 }
    ));
}
