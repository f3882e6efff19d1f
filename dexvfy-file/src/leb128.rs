//! LEB128 as used by DEX: at most five bytes, 32-bit results.

use crate::error::ParseError;

const MAX_BYTES: usize = 5;

/// Decode an unsigned LEB128 value from `data` starting at `offset`.
/// Returns (value, bytes_consumed).
pub fn decode_uleb128(data: &[u8], offset: usize) -> Result<(u32, usize), ParseError> {
    let mut result: u32 = 0;
    let mut pos = offset;

    for i in 0..MAX_BYTES {
        let Some(&byte) = data.get(pos) else {
            return Err(ParseError::InvalidLeb128(offset));
        };
        pos += 1;

        result |= ((byte & 0x7f) as u32).wrapping_shl(7 * i as u32);
        if byte & 0x80 == 0 {
            return Ok((result, pos - offset));
        }
    }
    Err(ParseError::InvalidLeb128(offset))
}

/// Decode a signed LEB128 value from `data` starting at `offset`.
/// Returns (value, bytes_consumed).
pub fn decode_sleb128(data: &[u8], offset: usize) -> Result<(i32, usize), ParseError> {
    let mut result: u32 = 0;
    let mut shift = 0u32;
    let mut pos = offset;

    loop {
        if pos - offset == MAX_BYTES {
            return Err(ParseError::InvalidLeb128(offset));
        }
        let Some(&byte) = data.get(pos) else {
            return Err(ParseError::InvalidLeb128(offset));
        };
        pos += 1;

        result |= ((byte & 0x7f) as u32).wrapping_shl(shift);
        shift += 7;
        if byte & 0x80 == 0 {
            // Sign extend
            if shift < 32 && (byte & 0x40) != 0 {
                result |= !0u32 << shift;
            }
            return Ok((result as i32, pos - offset));
        }
    }
}

/// Append the unsigned LEB128 encoding of `value` to `out`.
pub fn encode_uleb128(mut value: u32, out: &mut Vec<u8>) {
    loop {
        let byte = (value & 0x7f) as u8;
        value >>= 7;
        if value == 0 {
            out.push(byte);
            return;
        }
        out.push(byte | 0x80);
    }
}

/// Append the signed LEB128 encoding of `value` to `out`.
pub fn encode_sleb128(mut value: i32, out: &mut Vec<u8>) {
    loop {
        let byte = (value & 0x7f) as u8;
        value >>= 7;
        let done = (value == 0 && byte & 0x40 == 0) || (value == -1 && byte & 0x40 != 0);
        if done {
            out.push(byte);
            return;
        }
        out.push(byte | 0x80);
    }
}
