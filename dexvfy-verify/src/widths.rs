use dexvfy_isa::opcode::NEW_INSTANCE;
use dexvfy_isa::{WidthLookup, opcode_of};

use crate::{DiagnosticSink, InsnFlags, MAX_INSN_WIDTH, MethodCode, VerifyError};

/// Record the width of every instruction in `code`.
///
/// A single forward scan from address 0: each instruction's width is looked
/// up and stored at its first code unit, and the scan jumps to the next
/// instruction. Continuation units and payload bodies keep a width of zero,
/// so `flags` should start out zeroed.
///
/// Rejects unrecognized encodings, widths that do not fit the width field,
/// and a last instruction that runs past the end of the code. Returns the
/// number of `new-instance` instructions on success.
///
/// # Panics
///
/// If `flags` was not sized for `code.insns`.
pub fn compute_code_widths<W: WidthLookup + ?Sized>(
    code: &MethodCode<'_>,
    lookup: &W,
    flags: &mut InsnFlags,
    sink: &dyn DiagnosticSink,
) -> Result<usize, VerifyError> {
    let insns = code.insns;
    assert_eq!(flags.len(), insns.len(), "flags sized for another method");

    let mut new_instance_count = 0;
    let mut addr = 0;
    while addr < insns.len() {
        let unit = insns[addr];
        let width = lookup.width(&insns[addr..]);
        if width == 0 {
            return Err(code.reject(sink, VerifyError::InvalidOpcode { addr, unit }));
        }
        if width > MAX_INSN_WIDTH {
            return Err(code.reject(sink, VerifyError::WidthOverflow { addr, width }));
        }
        if opcode_of(unit) == NEW_INSTANCE {
            new_instance_count += 1;
        }

        flags.set_width(addr, width as u16);
        addr += width;
    }

    if addr != insns.len() {
        return Err(code.reject(
            sink,
            VerifyError::TruncatedInstruction {
                end: addr,
                len: insns.len(),
            },
        ));
    }

    log::trace!(
        "widths: {} code units, {new_instance_count} new-instance",
        insns.len()
    );
    Ok(new_instance_count)
}
