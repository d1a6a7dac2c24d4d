use thiserror::Error;

/// Failure modes a tool can report to the dispatcher.
///
/// The distinction drives the envelope text: validation messages are emitted
/// verbatim, execution failures are prefixed with `Erreur:` at the boundary.
#[derive(Debug, Error)]
pub enum ToolError {
    /// A required argument is missing or empty; no external call was made.
    #[error("{0}")]
    InvalidArguments(String),
    /// The upstream call or a later step failed.
    #[error("{0}")]
    Failed(String),
}
