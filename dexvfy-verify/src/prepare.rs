use dexvfy_isa::WidthLookup;

use crate::{
    DiagnosticSink, InsnFlags, MethodCode, VerifyError, compute_code_widths, set_try_flags,
};

/// Result of the structural pre-pass over one method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prepared {
    /// Widths plus try and handler marks, ready for dataflow verification.
    pub flags: InsnFlags,
    /// Number of `new-instance` instructions in the method.
    pub new_instance_count: usize,
}

/// Run the width scan and then try-range validation on a fresh flags array.
pub fn prepare_method<W: WidthLookup + ?Sized>(
    code: &MethodCode<'_>,
    lookup: &W,
    sink: &dyn DiagnosticSink,
) -> Result<Prepared, VerifyError> {
    let mut flags = InsnFlags::new(code.insns.len());
    let new_instance_count = compute_code_widths(code, lookup, &mut flags, sink)?;
    set_try_flags(code, &mut flags, sink)?;
    if let Some(method) = code.method {
        log::debug!("prepared {method}: {} code units", code.insns.len());
    }
    Ok(Prepared {
        flags,
        new_instance_count,
    })
}
