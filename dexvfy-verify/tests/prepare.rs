mod common;

use common::*;
use dexvfy_file::{CatchHandler, CodeItem, CodeItemBuilder};
use dexvfy_isa::DalvikWidths;
use dexvfy_verify::{
    ErrorKind, InsnFlags, MethodCode, classify_const, compute_code_widths, prepare_method,
    set_try_flags,
};

fn sample() -> CodeItem {
    let mut b = CodeItemBuilder::new();
    b.registers(2, 0, 0).insns(&concat(&[
        new_instance(0, 4),
        const16(1, 300),
        goto(2),
        nop(),
        return_void(),
    ]));
    let g = b.handler_group(&[CatchHandler {
        type_idx: None,
        address: 5,
    }]);
    b.try_range(0, 4, g);
    b.build()
}

#[test]
fn prepare_runs_both_passes() {
    let item = sample();
    let id = method_id();
    let code = MethodCode::from_code_item(&item).with_method(&id);
    let sink = RecordingSink::default();
    let prepared = prepare_method(&code, &DalvikWidths, &sink).unwrap();

    assert_eq!(prepared.new_instance_count, 1);
    assert_eq!(
        prepared.flags.insn_starts().collect::<Vec<_>>(),
        vec![(0, 2), (2, 2), (4, 1), (5, 1), (6, 1)]
    );
    assert!(prepared.flags.in_try(0));
    assert!(prepared.flags.in_try(2));
    assert!(!prepared.flags.in_try(4));
    assert!(prepared.flags.is_branch_target(5));
    assert_eq!(sink.failure_count(), 0);
}

#[test]
fn prepare_matches_manual_passes() {
    let item = sample();
    let code = MethodCode::from_code_item(&item);
    let sink = RecordingSink::default();

    let mut flags = InsnFlags::new(item.insns.len());
    let count = compute_code_widths(&code, &DalvikWidths, &mut flags, &sink).unwrap();
    set_try_flags(&code, &mut flags, &sink).unwrap();

    let prepared = prepare_method(&code, &DalvikWidths, &sink).unwrap();
    assert_eq!(prepared.flags, flags);
    assert_eq!(prepared.new_instance_count, count);
}

#[test]
fn rerun_on_reset_flags_is_identical() {
    let item = sample();
    let code = MethodCode::from_code_item(&item);
    let sink = RecordingSink::default();
    let mut flags = InsnFlags::new(item.insns.len());
    compute_code_widths(&code, &DalvikWidths, &mut flags, &sink).unwrap();
    set_try_flags(&code, &mut flags, &sink).unwrap();
    let first = flags.clone();

    flags.reset();
    compute_code_widths(&code, &DalvikWidths, &mut flags, &sink).unwrap();
    set_try_flags(&code, &mut flags, &sink).unwrap();
    assert_eq!(first, flags);
}

#[test]
fn width_failure_skips_try_validation() {
    let mut item = sample();
    item.insns.pop();
    item.insns.pop();
    item.insns.push(0x00ff);
    let sink = RecordingSink::default();
    let err = prepare_method(&MethodCode::from_code_item(&item), &DalvikWidths, &sink)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidOpcode);
    assert_eq!(sink.failure_count(), 1);
}

#[test]
fn try_failure_is_reported_once() {
    let mut item = sample();
    item.tries[0].start_addr = 1;
    let sink = RecordingSink::default();
    let err = prepare_method(&MethodCode::from_code_item(&item), &DalvikWidths, &sink)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MisalignedTryStart);
    assert_eq!(sink.failure_count(), 1);
}

#[test]
fn error_messages_carry_context() {
    let err = dexvfy_verify::VerifyError::TruncatedInstruction { end: 5, len: 4 };
    assert_eq!(err.to_string(), "code ends at 0x5 instead of 0x4");
    let err = dexvfy_verify::VerifyError::BadHandlerTarget { addr: 7 };
    assert!(err.to_string().contains("0x7"));
}

#[test]
fn constants_from_const16_literal() {
    // the literal in `sample` classifies as a positive short
    let item = sample();
    let literal = item.insns[3] as i16 as i32;
    assert_eq!(literal, 300);
    assert_eq!(
        classify_const(literal),
        dexvfy_verify::ConstCategory::PosShort
    );
}
