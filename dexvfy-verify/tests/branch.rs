mod common;

use common::*;
use dexvfy_isa::opcode;
use dexvfy_verify::{BranchTarget, branch_target};

fn unconditional(offset: i32) -> Option<BranchTarget> {
    Some(BranchTarget {
        offset,
        conditional: false,
    })
}

fn conditional(offset: i32) -> Option<BranchTarget> {
    Some(BranchTarget {
        offset,
        conditional: true,
    })
}

#[test]
fn goto_short_form() {
    assert_eq!(branch_target(&goto(-5), 0), unconditional(-5));
    assert_eq!(branch_target(&goto(127), 0), unconditional(127));
    assert_eq!(branch_target(&goto(-128), 0), unconditional(-128));
}

#[test]
fn goto_16() {
    assert_eq!(branch_target(&goto16(-5), 0), unconditional(-5));
    assert_eq!(branch_target(&goto16(i16::MAX), 0), unconditional(32767));
    assert_eq!(branch_target(&goto16(i16::MIN), 0), unconditional(-32768));
}

#[test]
fn goto_32_assembles_low_then_high() {
    assert_eq!(branch_target(&goto32(0x12345), 0), unconditional(0x12345));
    assert_eq!(branch_target(&goto32(-70000), 0), unconditional(-70000));
    assert_eq!(
        branch_target(&[opcode::GOTO_32 as u16, 0x0001, 0x8000], 0),
        unconditional(i32::MIN + 1)
    );
}

#[test]
fn if_compare_family() {
    for op in opcode::IF_EQ..=opcode::IF_LE {
        assert_eq!(branch_target(&if_test(op, 1, 2, 10), 0), conditional(10));
        assert_eq!(branch_target(&if_test(op, 1, 2, -3), 0), conditional(-3));
    }
}

#[test]
fn if_zero_family() {
    for op in opcode::IF_EQZ..=opcode::IF_LEZ {
        assert_eq!(branch_target(&if_testz(op, 200, 10), 0), conditional(10));
    }
}

#[test]
fn decodes_at_address() {
    let insns = concat(&[const16(0, 0), if_testz(opcode::IF_NEZ, 0, -2), return_void()]);
    let branch = branch_target(&insns, 2).unwrap();
    assert_eq!(branch, BranchTarget { offset: -2, conditional: true });
    assert_eq!(branch.absolute(2), Some(0));
}

#[test]
fn non_branches() {
    assert_eq!(branch_target(&return_void(), 0), None);
    assert_eq!(branch_target(&const16(0, 0x28), 0), None);
    assert_eq!(branch_target(&[opcode::PACKED_SWITCH as u16, 0, 0], 0), None);
    assert_eq!(branch_target(&[0x00ff], 0), None);
}

#[test]
fn truncated_or_out_of_range() {
    assert_eq!(branch_target(&[opcode::GOTO_32 as u16, 1], 0), None);
    assert_eq!(branch_target(&[opcode::IF_EQ as u16], 0), None);
    assert_eq!(branch_target(&goto(1), 1), None);
    assert_eq!(branch_target(&goto(1), 10), None);
}

#[test]
fn absolute_target() {
    let back = BranchTarget {
        offset: -4,
        conditional: false,
    };
    assert_eq!(back.absolute(10), Some(6));
    assert_eq!(back.absolute(3), None);
    let forward = BranchTarget {
        offset: 7,
        conditional: true,
    };
    assert_eq!(forward.absolute(1), Some(8));
}
