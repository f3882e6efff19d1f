use dexvfy_file::{CatchHandlers, CodeItem, MethodId, TryItem};

use crate::{DiagnosticSink, VerifyError};

/// Read-only view of the method being verified.
#[derive(Debug, Clone, Copy)]
pub struct MethodCode<'a> {
    /// Method body in code units.
    pub insns: &'a [u16],
    pub tries: &'a [TryItem],
    pub handlers: CatchHandlers<'a>,
    /// Identity used in diagnostics, if known.
    pub method: Option<&'a MethodId>,
}

impl<'a> MethodCode<'a> {
    /// Code without an exception table.
    pub fn new(insns: &'a [u16]) -> Self {
        Self {
            insns,
            tries: &[],
            handlers: CatchHandlers::default(),
            method: None,
        }
    }

    pub fn from_code_item(item: &'a CodeItem) -> Self {
        Self {
            insns: &item.insns,
            tries: &item.tries,
            handlers: item.catch_handlers(),
            method: None,
        }
    }

    pub fn with_tries(mut self, tries: &'a [TryItem], handlers: CatchHandlers<'a>) -> Self {
        self.tries = tries;
        self.handlers = handlers;
        self
    }

    pub fn with_method(mut self, method: &'a MethodId) -> Self {
        self.method = Some(method);
        self
    }

    /// Report `error` for this method and hand it back for returning.
    pub(crate) fn reject(&self, sink: &dyn DiagnosticSink, error: VerifyError) -> VerifyError {
        sink.verify_failure(self.method, &error);
        error
    }
}
