//! Warnings for constructs the block schema cannot represent.

use std::fmt;

use crate::syntax::NodeKind;

/// One degraded or dropped construct.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Kind of the node that was degraded.
    pub kind: NodeKind,
    /// Human-readable description of the fallback taken.
    pub message: String,
}

impl Diagnostic {
    #[must_use]
    pub fn new(kind: NodeKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

/// Receiver for render diagnostics. Must not fail.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}
