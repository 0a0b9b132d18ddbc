//! Render error types.

/// Fatal rendering error.
///
/// Constructs the block schema cannot represent are degraded, not reported
/// here. This error only signals input outside the node catalogue.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum RenderError {
    /// Markdown construct with no [`SyntaxNode`](crate::SyntaxNode) kind.
    #[error("unsupported node kind: {kind}")]
    UnsupportedNodeKind {
        /// Name of the offending construct.
        kind: String,
    },
}
