//! Structural pre-pass of a Dalvik bytecode verifier.
//!
//! Before dataflow verification can start, a method's code units have to be
//! split into instructions and its exception table checked against those
//! boundaries. This crate provides those passes and the small decoding
//! services the dataflow pass leans on:
//!
//! - [`compute_code_widths`] records the width of every instruction.
//! - [`set_try_flags`] validates try ranges and handler entry points.
//! - [`branch_target`] decodes the relative offset of a branch.
//! - [`classify_const`] maps a 32-bit literal to its narrowest category.
//!
//! All per-address results live in an [`InsnFlags`] array owned by the caller.
//! The two batch passes must run in that order; [`prepare_method`] does both.
//!
//! ```
//! use dexvfy_isa::DalvikWidths;
//! use dexvfy_verify::{LogSink, MethodCode, VerifyMode, prepare_method};
//!
//! // const/4 v0, #0 ; return-void
//! let insns = [0x0012, 0x000e];
//! let code = MethodCode::new(&insns);
//! let sink = LogSink::new(VerifyMode::Runtime);
//! let prepared = prepare_method(&code, &DalvikWidths, &sink).unwrap();
//! assert_eq!(prepared.flags.width(0), 1);
//! assert_eq!(prepared.flags.width(1), 1);
//! ```

mod branch;
mod code;
mod constant;
mod diag;
mod error;
mod flags;
mod prepare;
mod tries;
mod widths;

pub use branch::{BranchTarget, branch_target};
pub use code::MethodCode;
pub use constant::{ConstCategory, classify_const};
pub use diag::{DiagnosticSink, LogSink, VerifyMode};
pub use error::{ErrorKind, VerifyError};
pub use flags::{InsnFlag, InsnFlags, MAX_INSN_WIDTH};
pub use prepare::{Prepared, prepare_method};
pub use tries::set_try_flags;
pub use widths::compute_code_widths;
