//! Human-readable renderings of encoded bytes, for logs and debugging.

use std::fmt::Write;

/// `[0x00, 0x0a, 0xff]` -> `"00 0a ff"`.
pub fn hex_dump(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 3);
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{:02x}", b);
    }
    out
}

/// Split each byte into continuation bit and payload: `0xac` -> `"[1|0101100]"`.
pub fn varint_bits(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("[{}|{:07b}]", b >> 7, b & 0x7f))
        .collect::<Vec<_>>()
        .join(" ")
}
