//! The encoded catch handler stream.
//!
//! A `code_item` stores its handlers once, as an `encoded_catch_handler_list`:
//! a ULEB128 group count followed by the groups back to back. Try items refer
//! to a group by its byte offset from the start of the list, so several try
//! ranges can share one group.
//!
//! Each group starts with a SLEB128 `size`. `|size|` typed handlers follow as
//! `(type_idx, addr)` ULEB128 pairs; a non-positive `size` means a catch-all
//! address comes after them.

use crate::error::ParseError;
use crate::leb128::{decode_sleb128, decode_uleb128};

/// One handler entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatchHandler {
    /// Exception type index, `None` for a catch-all.
    pub type_idx: Option<u32>,
    /// Handler entry point, in code units.
    pub address: u32,
}

/// Borrowed view of an `encoded_catch_handler_list`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CatchHandlers<'a> {
    data: &'a [u8],
}

impl<'a> CatchHandlers<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data }
    }

    /// Raw bytes of the list.
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Number of handler groups. An absent list has zero groups.
    pub fn list_size(&self) -> Result<u32, ParseError> {
        if self.data.is_empty() {
            return Ok(0);
        }
        decode_uleb128(self.data, 0).map(|(size, _)| size)
    }

    /// Offset of the first group, just past the group count.
    pub fn first_handler_offset(&self) -> Result<usize, ParseError> {
        if self.data.is_empty() {
            return Ok(0);
        }
        decode_uleb128(self.data, 0).map(|(_, consumed)| consumed)
    }

    /// Start iterating the group at `offset`.
    pub fn iter_at(&self, offset: usize) -> Result<CatchHandlerIterator<'a>, ParseError> {
        CatchHandlerIterator::new(self.data, offset)
    }
}

/// Iterates the handlers of a single group.
///
/// Once the iterator has returned `None`, [`end_offset`](Self::end_offset) is
/// the offset of the next group in the list.
#[derive(Debug, Clone)]
pub struct CatchHandlerIterator<'a> {
    data: &'a [u8],
    pos: usize,
    typed_remaining: u32,
    catch_all: bool,
}

impl<'a> CatchHandlerIterator<'a> {
    pub fn new(data: &'a [u8], offset: usize) -> Result<Self, ParseError> {
        let (size, consumed) = decode_sleb128(data, offset)?;
        Ok(Self {
            data,
            pos: offset + consumed,
            typed_remaining: size.unsigned_abs(),
            catch_all: size <= 0,
        })
    }

    /// Offset just past the handlers consumed so far.
    pub fn end_offset(&self) -> usize {
        self.pos
    }

    fn uleb(&mut self) -> Result<u32, ParseError> {
        let (value, consumed) = decode_uleb128(self.data, self.pos)?;
        self.pos += consumed;
        Ok(value)
    }

    fn next_handler(&mut self) -> Result<Option<CatchHandler>, ParseError> {
        if self.typed_remaining > 0 {
            let type_idx = self.uleb()?;
            let address = self.uleb()?;
            self.typed_remaining -= 1;
            return Ok(Some(CatchHandler {
                type_idx: Some(type_idx),
                address,
            }));
        }
        if self.catch_all {
            let address = self.uleb()?;
            self.catch_all = false;
            return Ok(Some(CatchHandler {
                type_idx: None,
                address,
            }));
        }
        Ok(None)
    }
}

impl Iterator for CatchHandlerIterator<'_> {
    type Item = Result<CatchHandler, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_handler() {
            Ok(handler) => handler.map(Ok),
            Err(e) => {
                self.typed_remaining = 0;
                self.catch_all = false;
                Some(Err(e))
            }
        }
    }
}
