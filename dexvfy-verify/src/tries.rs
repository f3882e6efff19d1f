use crate::{DiagnosticSink, InsnFlags, MethodCode, VerifyError};

/// Mark instructions covered by try ranges and the entry points of their
/// handlers.
///
/// Requires widths from [`compute_code_widths`](crate::compute_code_widths)
/// to already be in `flags`. Each try range must be non-empty, lie inside the
/// code and start on an instruction; every instruction it covers gets
/// [`IN_TRY`](crate::InsnFlag::IN_TRY). Handler groups are then walked once
/// each, in list order, and every handler address must start an instruction;
/// those get [`BRANCH_TARGET`](crate::InsnFlag::BRANCH_TARGET).
///
/// On `Err` the try and branch-target marks in `flags` are meaningless.
///
/// # Panics
///
/// If `flags` was not sized for `code.insns`.
pub fn set_try_flags(
    code: &MethodCode<'_>,
    flags: &mut InsnFlags,
    sink: &dyn DiagnosticSink,
) -> Result<(), VerifyError> {
    if code.tries.is_empty() {
        return Ok(());
    }
    let len = code.insns.len();
    assert_eq!(flags.len(), len, "flags sized for another method");

    for t in code.tries {
        let start = t.start_addr;
        let end = t.end_addr();

        if start as u64 >= end {
            return Err(code.reject(sink, VerifyError::InvertedRange { start, end, len }));
        }
        if start as u64 >= len as u64 || end > len as u64 {
            return Err(code.reject(sink, VerifyError::RangeOutOfBounds { start, end, len }));
        }
        if !flags.is_insn_start(start as usize) {
            return Err(code.reject(sink, VerifyError::MisalignedTryStart { start }));
        }

        let end = end as usize;
        let mut addr = start as usize;
        while addr < end {
            let width = flags.width(addr);
            debug_assert_ne!(width, 0, "no instruction at {addr:#x} inside try range");
            if width == 0 {
                break;
            }
            flags.set_in_try(addr, true);
            addr += width;
        }
    }

    let handlers = code.handlers;
    let malformed = |e| code.reject(sink, VerifyError::MalformedHandlers(e));
    let groups = handlers.list_size().map_err(malformed)?;
    let mut offset = handlers.first_handler_offset().map_err(malformed)?;
    for _ in 0..groups {
        let mut iter = handlers.iter_at(offset).map_err(malformed)?;
        for handler in iter.by_ref() {
            let addr = handler.map_err(malformed)?.address;
            if !flags.is_insn_start(addr as usize) {
                return Err(code.reject(sink, VerifyError::BadHandlerTarget { addr }));
            }
            flags.set_branch_target(addr as usize, true);
        }
        offset = iter.end_offset();
    }

    log::trace!(
        "try flags: {} ranges, {groups} handler groups",
        code.tries.len()
    );
    Ok(())
}
