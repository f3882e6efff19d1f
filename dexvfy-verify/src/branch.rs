use dexvfy_isa::opcode::{GOTO, GOTO_16, GOTO_32, IF_EQ, IF_LEZ};
use dexvfy_isa::opcode_of;

/// Decoded relative branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BranchTarget {
    /// Offset in code units from the branch instruction's own address.
    pub offset: i32,
    /// `if-*` branches may fall through; `goto` variants never do.
    pub conditional: bool,
}

impl BranchTarget {
    /// Absolute target for a branch at `addr`, or `None` if it lands before
    /// address 0.
    pub fn absolute(&self, addr: usize) -> Option<usize> {
        let target = addr as i64 + self.offset as i64;
        usize::try_from(target).ok()
    }
}

/// Decode the branch at `addr`.
///
/// Returns `None` when the instruction is not a `goto` or `if-*`, which is an
/// ordinary answer rather than an error. Widths are assumed to have been
/// validated already; an instruction cut off by the end of `insns` also
/// yields `None`.
pub fn branch_target(insns: &[u16], addr: usize) -> Option<BranchTarget> {
    let code = insns.get(addr..)?;
    let first = *code.first()?;
    let unit = |i: usize| code.get(i).copied();

    let (offset, conditional) = match opcode_of(first) {
        // goto +AA: offset in the high byte
        GOTO => (((first as i16) >> 8) as i32, false),
        GOTO_16 => (unit(1)? as i16 as i32, false),
        GOTO_32 => {
            let lo = unit(1)? as u32;
            let hi = unit(2)? as u32;
            ((lo | (hi << 16)) as i32, false)
        }
        IF_EQ..=IF_LEZ => (unit(1)? as i16 as i32, true),
        _ => return None,
    };
    Some(BranchTarget {
        offset,
        conditional,
    })
}
