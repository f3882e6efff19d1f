//! Text rendering of a prepared method.

use std::fmt::Write;

use dexvfy_isa::{
    FILL_ARRAY_DATA_SIGNATURE, PACKED_SWITCH_SIGNATURE, SPARSE_SWITCH_SIGNATURE, lookup,
    opcode_of,
};
use dexvfy_verify::{MethodCode, Prepared, branch_target};

fn mnemonic(unit: u16) -> &'static str {
    match unit {
        PACKED_SWITCH_SIGNATURE => "packed-switch-payload",
        SPARSE_SWITCH_SIGNATURE => "sparse-switch-payload",
        FILL_ARRAY_DATA_SIGNATURE => "fill-array-data-payload",
        _ => lookup(opcode_of(unit)).map_or("<unknown>", |info| info.mnemonic()),
    }
}

/// One line per instruction: address, width, `T` (in try), `B` (branch
/// target), mnemonic and, for branches, the decoded target.
pub fn render(code: &MethodCode<'_>, prepared: &Prepared) -> String {
    let mut out = String::new();
    if let Some(method) = code.method {
        let _ = writeln!(out, ".method {method}");
    }
    let flags = &prepared.flags;
    for (addr, width) in flags.insn_starts() {
        let t = if flags.in_try(addr) { 'T' } else { ' ' };
        let b = if flags.is_branch_target(addr) { 'B' } else { ' ' };
        let _ = write!(
            out,
            "    {addr:#06x}  w={width:<3} {t}{b}  {}",
            mnemonic(code.insns[addr])
        );
        if let Some(branch) = branch_target(code.insns, addr) {
            let kind = if branch.conditional { "cond" } else { "goto" };
            match branch.absolute(addr) {
                Some(target) => {
                    let _ = write!(out, "  {kind} {:+} -> {target:#06x}", branch.offset);
                }
                None => {
                    let _ = write!(out, "  {kind} {:+} -> <before start>", branch.offset);
                }
            }
        }
        out.push('\n');
    }
    let _ = writeln!(out, "    # new-instance: {}", prepared.new_instance_count);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use dexvfy_isa::DalvikWidths;
    use dexvfy_verify::{LogSink, prepare_method};

    #[test]
    fn renders_branch_and_payload() {
        // goto +1 ; return-void ; sparse-switch payload with no entries
        let insns = [0x0128, 0x000e, SPARSE_SWITCH_SIGNATURE, 0];
        let code = MethodCode::new(&insns);
        let prepared = prepare_method(&code, &DalvikWidths, &LogSink::default()).unwrap();
        let text = render(&code, &prepared);
        assert!(text.contains("goto  goto +1 -> 0x0001"), "{text}");
        assert!(text.contains("return-void"), "{text}");
        assert!(text.contains("sparse-switch-payload"), "{text}");
        assert!(text.contains("# new-instance: 0"), "{text}");
    }
}
