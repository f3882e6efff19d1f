//! Dalvik instruction set tables.
//!
//! This crate provides opcode definitions, instruction formats, and the
//! width lookup used to find instruction boundaries in a method's code units.

mod format;
pub mod opcode;
mod width;

pub use format::Format;
pub use opcode::{OpcodeInfo, lookup, opcode_count, opcode_of, opcode_table};
pub use width::{
    DalvikWidths, FILL_ARRAY_DATA_SIGNATURE, PACKED_SWITCH_SIGNATURE, SPARSE_SWITCH_SIGNATURE,
    WidthLookup, payload_width,
};
