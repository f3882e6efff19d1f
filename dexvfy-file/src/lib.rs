//! Method-level pieces of the DEX container format.
//!
//! Only what a verifier needs from a method is modelled here: the `code_item`
//! (code units, try ranges and the shared catch handler stream) and the
//! method's identity for diagnostics.

pub mod builder;
pub mod catch;
pub mod code;
pub mod error;
pub mod leb128;
pub mod method;

pub use builder::CodeItemBuilder;
pub use catch::{CatchHandler, CatchHandlerIterator, CatchHandlers};
pub use code::{CodeItem, TryItem};
pub use error::{ParseError, Result};
pub use method::{MethodId, descriptor_to_dot};
