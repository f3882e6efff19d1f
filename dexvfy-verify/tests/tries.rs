mod common;

use common::*;
use dexvfy_file::{CatchHandler, CatchHandlers, CodeItem, CodeItemBuilder, TryItem};
use dexvfy_isa::DalvikWidths;
use dexvfy_verify::{
    ErrorKind, InsnFlags, MethodCode, VerifyError, compute_code_widths, set_try_flags,
};

fn catch_all(address: u32) -> CatchHandler {
    CatchHandler {
        type_idx: None,
        address,
    }
}

fn typed(type_idx: u32, address: u32) -> CatchHandler {
    CatchHandler {
        type_idx: Some(type_idx),
        address,
    }
}

/// 0: const/16 (2), 2: nop (1), 3: const (3), 6: goto/16 (2), 8: return-void (1)
fn body() -> Vec<u16> {
    concat(&[
        const16(0, 7),
        nop(),
        const32(1, 5),
        goto16(-6),
        return_void(),
    ])
}

fn widths(item: &CodeItem) -> InsnFlags {
    let mut flags = InsnFlags::new(item.insns.len());
    compute_code_widths(
        &MethodCode::from_code_item(item),
        &DalvikWidths,
        &mut flags,
        &RecordingSink::default(),
    )
    .unwrap();
    flags
}

fn run(item: &CodeItem) -> (Result<(), VerifyError>, InsnFlags, RecordingSink) {
    let mut flags = widths(item);
    let sink = RecordingSink::default();
    let result = set_try_flags(&MethodCode::from_code_item(item), &mut flags, &sink);
    (result, flags, sink)
}

fn single_try(start: u32, count: u32, handler: u32) -> CodeItem {
    let mut b = CodeItemBuilder::new();
    b.insns(&body());
    let g = b.handler_group(&[catch_all(handler)]);
    b.try_range(start, count, g);
    b.build()
}

#[test]
fn no_tries_leaves_flags_untouched() {
    let mut b = CodeItemBuilder::new();
    b.insns(&body());
    let item = b.build();
    let before = widths(&item);
    let (result, after, sink) = run(&item);
    assert_eq!(result, Ok(()));
    assert_eq!(before, after);
    assert_eq!(sink.failure_count(), 0);
}

#[test]
fn marks_instruction_starts_in_range() {
    // covers 2..8: nop, const, goto/16
    let item = single_try(2, 6, 8);
    let (result, flags, _) = run(&item);
    assert_eq!(result, Ok(()));

    let in_try: Vec<_> = (0..item.insns.len()).filter(|&a| flags.in_try(a)).collect();
    assert_eq!(in_try, vec![2, 3, 6]);
    assert!(flags.is_branch_target(8));
    assert!(!flags.is_branch_target(2));
}

#[test]
fn range_may_end_mid_instruction() {
    // covers 3..5, ending inside `const`
    let item = single_try(3, 2, 0);
    let (result, flags, _) = run(&item);
    assert_eq!(result, Ok(()));
    assert!(flags.in_try(3));
    assert!(!flags.in_try(6));
    assert!(flags.is_branch_target(0));
}

#[test]
fn range_covering_whole_method() {
    let item = single_try(0, 9, 8);
    let (result, flags, _) = run(&item);
    assert_eq!(result, Ok(()));
    for (addr, _) in flags.insn_starts() {
        assert!(flags.in_try(addr), "{addr}");
    }
}

#[test]
fn empty_range_is_inverted() {
    let item = single_try(2, 0, 8);
    let (result, _, sink) = run(&item);
    assert_eq!(
        result,
        Err(VerifyError::InvertedRange {
            start: 2,
            end: 2,
            len: 9
        })
    );
    assert_eq!(sink.failure_count(), 1);
}

#[test]
fn end_one_past_code_is_out_of_bounds() {
    let item = single_try(8, 2, 8);
    let (result, _, sink) = run(&item);
    assert_eq!(
        result,
        Err(VerifyError::RangeOutOfBounds {
            start: 8,
            end: 10,
            len: 9
        })
    );
    assert_eq!(sink.failure_count(), 1);
}

#[test]
fn start_past_code_is_out_of_bounds() {
    let item = single_try(9, 1, 8);
    let (result, _, _) = run(&item);
    assert_eq!(result.unwrap_err().kind(), ErrorKind::RangeOutOfBounds);
}

#[test]
fn huge_count_does_not_wrap() {
    let insns = body();
    let tries = [TryItem {
        start_addr: 2,
        insn_count: u32::MAX,
        handler_off: 0,
    }];
    let mut flags = InsnFlags::new(insns.len());
    let sink = RecordingSink::default();
    let code = MethodCode::new(&insns).with_tries(&tries, CatchHandlers::default());
    compute_code_widths(&code, &DalvikWidths, &mut flags, &sink).unwrap();
    let err = set_try_flags(&code, &mut flags, &sink).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::RangeOutOfBounds);
}

#[test]
fn try_starting_mid_instruction() {
    let item = single_try(4, 2, 8);
    let (result, _, sink) = run(&item);
    assert_eq!(result, Err(VerifyError::MisalignedTryStart { start: 4 }));
    assert_eq!(sink.failure_count(), 1);
}

#[test]
fn handler_mid_instruction() {
    let item = single_try(0, 2, 7);
    let (result, _, sink) = run(&item);
    assert_eq!(result, Err(VerifyError::BadHandlerTarget { addr: 7 }));
    assert_eq!(sink.failure_count(), 1);
}

#[test]
fn handler_past_end_of_code() {
    let item = single_try(0, 2, 500);
    let (result, _, _) = run(&item);
    assert_eq!(result, Err(VerifyError::BadHandlerTarget { addr: 500 }));
}

#[test]
fn typed_and_catch_all_handlers_are_targets() {
    let mut b = CodeItemBuilder::new();
    b.insns(&body());
    let g = b.handler_group(&[typed(1, 2), typed(2, 6), catch_all(8)]);
    b.try_range(0, 2, g);
    let item = b.build();
    let (result, flags, _) = run(&item);
    assert_eq!(result, Ok(()));
    let targets: Vec<_> = (0..item.insns.len())
        .filter(|&a| flags.is_branch_target(a))
        .collect();
    assert_eq!(targets, vec![2, 6, 8]);
}

#[test]
fn shared_group_is_validated_once() {
    let mut b = CodeItemBuilder::new();
    b.insns(&body());
    let shared = b.handler_group(&[catch_all(8)]);
    b.try_range(0, 2, shared).try_range(3, 3, shared);
    let item = b.build();
    assert_eq!(item.catch_handlers().list_size().unwrap(), 1);

    let (result, flags, _) = run(&item);
    assert_eq!(result, Ok(()));
    assert!(flags.in_try(0));
    assert!(!flags.in_try(2));
    assert!(flags.in_try(3));
    assert!(flags.is_branch_target(8));
}

#[test]
fn bad_handler_in_later_group() {
    let mut b = CodeItemBuilder::new();
    b.insns(&body());
    let good = b.handler_group(&[catch_all(8)]);
    let bad = b.handler_group(&[typed(4, 1)]);
    b.try_range(0, 2, good).try_range(2, 1, bad);
    let (result, _, _) = run(&b.build());
    assert_eq!(result, Err(VerifyError::BadHandlerTarget { addr: 1 }));
}

#[test]
fn first_failing_range_wins() {
    let mut b = CodeItemBuilder::new();
    b.insns(&body());
    let g = b.handler_group(&[catch_all(8)]);
    b.try_range(0, 2, g).try_range(4, 1, g).try_range(5, 0, g);
    let (result, _, sink) = run(&b.build());
    assert_eq!(result.unwrap_err().kind(), ErrorKind::MisalignedTryStart);
    assert_eq!(sink.failure_count(), 1);
}

#[test]
fn unreadable_handler_list() {
    let insns = body();
    let tries = [TryItem {
        start_addr: 0,
        insn_count: 2,
        handler_off: 1,
    }];
    // one group whose typed pair is cut off
    let raw = [0x01, 0x01, 0x05];
    let mut flags = InsnFlags::new(insns.len());
    let sink = RecordingSink::default();
    let code = MethodCode::new(&insns).with_tries(&tries, CatchHandlers::new(&raw));
    compute_code_widths(&code, &DalvikWidths, &mut flags, &sink).unwrap();
    let err = set_try_flags(&code, &mut flags, &sink).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedHandlers);
    assert_eq!(sink.failure_count(), 1);
}

#[test]
fn parsed_code_item_roundtrip() {
    let mut b = CodeItemBuilder::new();
    b.insns(&body());
    let g = b.handler_group(&[typed(3, 2), catch_all(8)]);
    b.try_range(0, 6, g);
    let parsed = CodeItem::parse(&b.encode(), 0).unwrap();
    let (result, flags, _) = run(&parsed);
    assert_eq!(result, Ok(()));
    assert!(flags.in_try(3));
    assert!(flags.is_branch_target(2));
    assert!(flags.is_branch_target(8));
}

#[test]
fn revalidation_is_deterministic() {
    let item = single_try(2, 6, 8);
    let (_, first, _) = run(&item);
    let (_, second, _) = run(&item);
    assert_eq!(first, second);
}
