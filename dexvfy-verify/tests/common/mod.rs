#![allow(dead_code)]

use std::cell::RefCell;

use dexvfy_file::MethodId;
use dexvfy_isa::opcode;
use dexvfy_verify::{DiagnosticSink, VerifyError};

/// Sink that keeps every report for inspection.
#[derive(Default)]
pub struct RecordingSink {
    pub failures: RefCell<Vec<(Option<MethodId>, VerifyError)>>,
    pub unresolved: RefCell<Vec<(String, MethodId)>>,
}

impl RecordingSink {
    pub fn failure_count(&self) -> usize {
        self.failures.borrow().len()
    }

    pub fn last_failure(&self) -> Option<VerifyError> {
        self.failures.borrow().last().map(|(_, e)| e.clone())
    }
}

impl DiagnosticSink for RecordingSink {
    fn verify_failure(&self, method: Option<&MethodId>, error: &VerifyError) {
        self.failures
            .borrow_mut()
            .push((method.cloned(), error.clone()));
    }

    fn unresolved_class(&self, missing_descriptor: &str, method: &MethodId) {
        self.unresolved
            .borrow_mut()
            .push((missing_descriptor.to_owned(), method.clone()));
    }
}

pub fn method_id() -> MethodId {
    MethodId::new("Lcom/example/Foo;", "bar", "(I)V")
}

// Small encoders for hand-built method bodies.

pub fn op(opcode: u8, high: u8) -> u16 {
    ((high as u16) << 8) | opcode as u16
}

pub fn nop() -> Vec<u16> {
    vec![op(opcode::NOP, 0)]
}

pub fn return_void() -> Vec<u16> {
    vec![op(opcode::RETURN_VOID, 0)]
}

/// const/16 vAA, #+BBBB
pub fn const16(reg: u8, value: i16) -> Vec<u16> {
    vec![op(opcode::CONST_16, reg), value as u16]
}

/// const vAA, #+BBBBBBBB
pub fn const32(reg: u8, value: i32) -> Vec<u16> {
    let v = value as u32;
    vec![op(opcode::CONST, reg), v as u16, (v >> 16) as u16]
}

/// new-instance vAA, type@BBBB
pub fn new_instance(reg: u8, type_idx: u16) -> Vec<u16> {
    vec![op(opcode::NEW_INSTANCE, reg), type_idx]
}

pub fn goto(offset: i8) -> Vec<u16> {
    vec![op(opcode::GOTO, offset as u8)]
}

pub fn goto16(offset: i16) -> Vec<u16> {
    vec![op(opcode::GOTO_16, 0), offset as u16]
}

pub fn goto32(offset: i32) -> Vec<u16> {
    let v = offset as u32;
    vec![op(opcode::GOTO_32, 0), v as u16, (v >> 16) as u16]
}

/// if-test vA, vB, +CCCC
pub fn if_test(opcode: u8, a: u8, b: u8, offset: i16) -> Vec<u16> {
    vec![op(opcode, (b << 4) | (a & 0xf)), offset as u16]
}

/// if-testz vAA, +BBBB
pub fn if_testz(opcode: u8, a: u8, offset: i16) -> Vec<u16> {
    vec![op(opcode, a), offset as u16]
}

pub fn concat(parts: &[Vec<u16>]) -> Vec<u16> {
    parts.concat()
}
