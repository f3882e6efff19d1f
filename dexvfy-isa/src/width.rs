//! Instruction width lookup.
//!
//! Most instructions have a width fixed by their format. The three payload
//! pseudo-instructions (switch tables and array data) share the `nop` opcode
//! byte, are identified by their whole first code unit, and carry their own
//! length in a small header.

use crate::opcode::{NOP, lookup, opcode_of};

/// First code unit of a `packed-switch` payload.
pub const PACKED_SWITCH_SIGNATURE: u16 = 0x0100;
/// First code unit of a `sparse-switch` payload.
pub const SPARSE_SWITCH_SIGNATURE: u16 = 0x0200;
/// First code unit of a `fill-array-data` payload.
pub const FILL_ARRAY_DATA_SIGNATURE: u16 = 0x0300;

/// Computes the width, in code units, of the instruction at the start of a
/// code slice.
///
/// `code` is never empty; it starts at the instruction and runs to the end of
/// the method. A return value of `0` means the encoding is not recognized.
/// Implementations must not assume the whole instruction fits in `code`.
pub trait WidthLookup {
    fn width(&self, code: &[u16]) -> usize;
}

/// Any `Fn(u16) -> usize` keyed on the first code unit is a width lookup.
impl<F> WidthLookup for F
where
    F: Fn(u16) -> usize,
{
    fn width(&self, code: &[u16]) -> usize {
        self(code[0])
    }
}

/// Width lookup for the standard Dalvik instruction set, including the
/// payload pseudo-instructions.
#[derive(Clone, Copy, Debug, Default)]
pub struct DalvikWidths;

impl WidthLookup for DalvikWidths {
    fn width(&self, code: &[u16]) -> usize {
        if let Some(width) = payload_width(code) {
            return width;
        }
        lookup(opcode_of(code[0])).map_or(0, |info| info.size())
    }
}

/// Width of a payload pseudo-instruction, or `None` if `code` does not start
/// with a payload signature.
///
/// Arithmetic is done in 64 bits so an absurd header produces an absurd width
/// instead of wrapping. When the header itself is cut short, the header
/// length is returned so the caller sees the payload overrun the buffer.
pub fn payload_width(code: &[u16]) -> Option<usize> {
    let first = *code.first()?;
    if opcode_of(first) != NOP {
        return None;
    }
    let unit = |i: usize| code.get(i).copied().map(u64::from);
    let width = match first {
        PACKED_SWITCH_SIGNATURE => match unit(1) {
            Some(size) => 4 + size * 2,
            None => 4,
        },
        SPARSE_SWITCH_SIGNATURE => match unit(1) {
            Some(size) => 2 + size * 4,
            None => 2,
        },
        FILL_ARRAY_DATA_SIGNATURE => match (unit(1), unit(2), unit(3)) {
            (Some(element_width), Some(lo), Some(hi)) => {
                let size = lo | (hi << 16);
                4 + (element_width * size).div_ceil(2)
            }
            _ => 4,
        },
        _ => return None,
    };
    Some(usize::try_from(width).unwrap_or(usize::MAX))
}
