//! Diagnostic reporting.

use dexvfy_file::{MethodId, descriptor_to_dot};

use crate::VerifyError;

/// How the verifier is being run. Fixed when the sink is built.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VerifyMode {
    /// Verification at class load time; failures are worth a warning.
    #[default]
    Runtime,
    /// Ahead-of-time pre-verification; failures are expected and stay quiet.
    Optimizing,
}

/// Receives one report per rejection. Reporting never aborts verification.
pub trait DiagnosticSink {
    /// A structural check failed for `method`.
    fn verify_failure(&self, method: Option<&MethodId>, error: &VerifyError);

    /// A class referenced from `method` could not be resolved.
    fn unresolved_class(&self, missing_descriptor: &str, method: &MethodId);
}

/// Sink that writes to the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink {
    mode: VerifyMode,
}

impl LogSink {
    pub fn new(mode: VerifyMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> VerifyMode {
        self.mode
    }
}

impl DiagnosticSink for LogSink {
    fn verify_failure(&self, method: Option<&MethodId>, error: &VerifyError) {
        if self.mode == VerifyMode::Optimizing {
            return;
        }
        log::warn!("VFY: {error}");
        if let Some(method) = method {
            log::warn!("VFY:  rejected {method}");
        }
    }

    fn unresolved_class(&self, missing_descriptor: &str, method: &MethodId) {
        if self.mode == VerifyMode::Optimizing {
            return;
        }
        log::error!(
            "Could not find class '{}', referenced from method {}.{}",
            descriptor_to_dot(missing_descriptor),
            descriptor_to_dot(&method.class_descriptor),
            method.name
        );
    }
}
