use thiserror::Error;

/// Errors raised while constructing an [`Editor`](super::Editor).
///
/// Every operation on a constructed editor is total, so this is the only
/// failure the core can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EditorError {
    /// The initial caret offset lies past the end of the initial text.
    #[error("invalid initial position: offset {offset} exceeds text length {len}")]
    InvalidInitialPosition { offset: usize, len: usize },
}
