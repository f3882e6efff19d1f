use crate::catch::CatchHandlers;
use crate::error::ParseError;

/// One try range from a `code_item`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TryItem {
    /// First code unit covered.
    pub start_addr: u32,
    /// Number of code units covered.
    pub insn_count: u32,
    /// Byte offset of the handler group within the handler list.
    pub handler_off: u32,
}

impl TryItem {
    /// Exclusive end address. Computed wide so hostile counts cannot wrap.
    pub fn end_addr(&self) -> u64 {
        self.start_addr as u64 + self.insn_count as u64
    }
}

/// A parsed `code_item`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeItem {
    pub registers_size: u16,
    pub ins_size: u16,
    pub outs_size: u16,
    pub debug_info_off: u32,
    /// Method body in 16-bit code units.
    pub insns: Vec<u16>,
    pub tries: Vec<TryItem>,
    /// Raw `encoded_catch_handler_list`, empty when there are no tries.
    pub handlers: Vec<u8>,
}

const HEADER_SIZE: usize = 16;
const TRY_ITEM_SIZE: usize = 8;

struct Reader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn take(&mut self, len: usize, what: &'static str) -> Result<&'a [u8], ParseError> {
        let end = self
            .pos
            .checked_add(len)
            .filter(|&end| end <= self.data.len())
            .ok_or(ParseError::Truncated {
                what,
                offset: self.pos,
            })?;
        let bytes = &self.data[self.pos..end];
        self.pos = end;
        Ok(bytes)
    }

    fn u16(&mut self, what: &'static str) -> Result<u16, ParseError> {
        let b = self.take(2, what)?;
        Ok(u16::from_le_bytes([b[0], b[1]]))
    }

    fn u32(&mut self, what: &'static str) -> Result<u32, ParseError> {
        let b = self.take(4, what)?;
        Ok(u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
    }
}

impl CodeItem {
    /// Parse a `code_item` at the given byte offset.
    pub fn parse(data: &[u8], offset: usize) -> Result<Self, ParseError> {
        if offset > data.len() {
            return Err(ParseError::OffsetOutOfBounds(offset, data.len()));
        }
        if data.len() - offset < HEADER_SIZE {
            return Err(ParseError::Truncated {
                what: "code_item header",
                offset,
            });
        }
        let mut r = Reader { data, pos: offset };

        let registers_size = r.u16("registers_size")?;
        let ins_size = r.u16("ins_size")?;
        let outs_size = r.u16("outs_size")?;
        let tries_size = r.u16("tries_size")?;
        let debug_info_off = r.u32("debug_info_off")?;
        let insns_size = r.u32("insns_size")? as usize;

        let raw = r.take(insns_size.saturating_mul(2), "insns")?;
        let insns = raw
            .chunks_exact(2)
            .map(|c| u16::from_le_bytes([c[0], c[1]]))
            .collect();

        if tries_size == 0 {
            return Ok(Self {
                registers_size,
                ins_size,
                outs_size,
                debug_info_off,
                insns,
                tries: Vec::new(),
                handlers: Vec::new(),
            });
        }

        if insns_size % 2 != 0 {
            r.take(2, "padding")?;
        }

        let raw = r.take(tries_size as usize * TRY_ITEM_SIZE, "try_items")?;
        let tries = raw
            .chunks_exact(TRY_ITEM_SIZE)
            .map(|c| TryItem {
                start_addr: u32::from_le_bytes([c[0], c[1], c[2], c[3]]),
                insn_count: u16::from_le_bytes([c[4], c[5]]) as u32,
                handler_off: u16::from_le_bytes([c[6], c[7]]) as u32,
            })
            .collect();

        let start = r.pos;
        let len = handler_list_len(&data[start..])?;
        let handlers = data[start..start + len].to_vec();

        log::trace!(
            "code_item at {offset:#x}: {insns_size} code units, {tries_size} tries, {len} handler bytes"
        );

        Ok(Self {
            registers_size,
            ins_size,
            outs_size,
            debug_info_off,
            insns,
            tries,
            handlers,
        })
    }

    /// Borrowed view of the handler list.
    pub fn catch_handlers(&self) -> CatchHandlers<'_> {
        CatchHandlers::new(&self.handlers)
    }
}

/// Walk an `encoded_catch_handler_list` and return its length in bytes.
fn handler_list_len(data: &[u8]) -> Result<usize, ParseError> {
    let list = CatchHandlers::new(data);
    if data.is_empty() {
        return Err(ParseError::Truncated {
            what: "encoded_catch_handler_list",
            offset: 0,
        });
    }
    let mut offset = list.first_handler_offset()?;
    for _ in 0..list.list_size()? {
        let mut iter = list.iter_at(offset)?;
        for handler in iter.by_ref() {
            handler?;
        }
        offset = iter.end_offset();
    }
    Ok(offset)
}
