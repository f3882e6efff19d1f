//! `code_item` builder (writer).

use crate::catch::CatchHandler;
use crate::code::{CodeItem, TryItem};
use crate::leb128::{encode_sleb128, encode_uleb128};

/// Opaque handle for a handler group being built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandlerGroupHandle(pub(crate) u32);

#[derive(Debug, Clone, PartialEq, Eq)]
struct HandlerGroup {
    typed: Vec<(u32, u32)>,
    catch_all: Option<u32>,
}

/// Builds a [`CodeItem`] and its DEX encoding.
///
/// Handler groups are stored once and may be shared by several try ranges;
/// adding an identical group twice returns the existing handle.
#[derive(Debug, Clone, Default)]
pub struct CodeItemBuilder {
    registers_size: u16,
    ins_size: u16,
    outs_size: u16,
    insns: Vec<u16>,
    tries: Vec<(u32, u32, HandlerGroupHandle)>,
    groups: Vec<HandlerGroup>,
}

impl CodeItemBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn registers(&mut self, registers: u16, ins: u16, outs: u16) -> &mut Self {
        self.registers_size = registers;
        self.ins_size = ins;
        self.outs_size = outs;
        self
    }

    /// Append raw code units.
    pub fn insns(&mut self, units: &[u16]) -> &mut Self {
        self.insns.extend_from_slice(units);
        self
    }

    /// Add a handler group. Typed handlers come first in the encoding, followed
    /// by the optional catch-all. A group needs at least one handler.
    pub fn handler_group(&mut self, handlers: &[CatchHandler]) -> HandlerGroupHandle {
        debug_assert!(!handlers.is_empty(), "empty handler group");
        let group = HandlerGroup {
            typed: handlers
                .iter()
                .filter_map(|h| h.type_idx.map(|t| (t, h.address)))
                .collect(),
            catch_all: handlers
                .iter()
                .find(|h| h.type_idx.is_none())
                .map(|h| h.address),
        };
        if let Some(i) = self.groups.iter().position(|g| *g == group) {
            return HandlerGroupHandle(i as u32);
        }
        self.groups.push(group);
        HandlerGroupHandle(self.groups.len() as u32 - 1)
    }

    /// Add a try range covering `insn_count` code units from `start_addr`.
    pub fn try_range(
        &mut self,
        start_addr: u32,
        insn_count: u32,
        group: HandlerGroupHandle,
    ) -> &mut Self {
        self.tries.push((start_addr, insn_count, group));
        self
    }

    /// Encode the handler list, returning it with each group's byte offset.
    fn encode_handlers(&self) -> (Vec<u8>, Vec<u32>) {
        if self.tries.is_empty() {
            return (Vec::new(), Vec::new());
        }
        let mut out = Vec::new();
        let mut offsets = Vec::with_capacity(self.groups.len());
        encode_uleb128(self.groups.len() as u32, &mut out);
        for group in &self.groups {
            offsets.push(out.len() as u32);
            let count = group.typed.len() as i32;
            let size = if group.catch_all.is_some() { -count } else { count };
            encode_sleb128(size, &mut out);
            for &(type_idx, address) in &group.typed {
                encode_uleb128(type_idx, &mut out);
                encode_uleb128(address, &mut out);
            }
            if let Some(address) = group.catch_all {
                encode_uleb128(address, &mut out);
            }
        }
        (out, offsets)
    }

    /// Build the in-memory code item.
    pub fn build(&self) -> CodeItem {
        let (handlers, offsets) = self.encode_handlers();
        let tries = self
            .tries
            .iter()
            .map(|&(start_addr, insn_count, group)| TryItem {
                start_addr,
                insn_count,
                handler_off: offsets[group.0 as usize],
            })
            .collect();
        CodeItem {
            registers_size: self.registers_size,
            ins_size: self.ins_size,
            outs_size: self.outs_size,
            debug_info_off: 0,
            insns: self.insns.clone(),
            tries,
            handlers,
        }
    }

    /// Encode as a DEX `code_item`.
    ///
    /// The `try_item` layout narrows `insn_count` and `handler_off` to 16 bits;
    /// debug builds panic if either does not fit.
    pub fn encode(&self) -> Vec<u8> {
        let item = self.build();
        let mut out = Vec::new();
        out.extend_from_slice(&item.registers_size.to_le_bytes());
        out.extend_from_slice(&item.ins_size.to_le_bytes());
        out.extend_from_slice(&item.outs_size.to_le_bytes());
        out.extend_from_slice(&(item.tries.len() as u16).to_le_bytes());
        out.extend_from_slice(&item.debug_info_off.to_le_bytes());
        out.extend_from_slice(&(item.insns.len() as u32).to_le_bytes());
        for unit in &item.insns {
            out.extend_from_slice(&unit.to_le_bytes());
        }
        if item.tries.is_empty() {
            return out;
        }
        if item.insns.len() % 2 != 0 {
            out.extend_from_slice(&[0, 0]);
        }
        for t in &item.tries {
            debug_assert!(
                t.insn_count <= u16::MAX as u32,
                "try insn_count {:#x} does not fit in 16 bits",
                t.insn_count
            );
            debug_assert!(
                t.handler_off <= u16::MAX as u32,
                "handler offset {:#x} does not fit in 16 bits",
                t.handler_off
            );
            out.extend_from_slice(&t.start_addr.to_le_bytes());
            out.extend_from_slice(&(t.insn_count as u16).to_le_bytes());
            out.extend_from_slice(&(t.handler_off as u16).to_le_bytes());
        }
        out.extend_from_slice(&item.handlers);
        out
    }
}
