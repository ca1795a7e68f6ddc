use thiserror::Error;

/// What kind of disallowed markup was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForbiddenKind {
    RawMarkup,
    Image,
}

impl std::fmt::Display for ForbiddenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ForbiddenKind::RawMarkup => write!(f, "raw HTML"),
            ForbiddenKind::Image => write!(f, "an image"),
        }
    }
}

/// Failure of a whole-comment translation.
///
/// All variants abort the translation with no partial output; the caller
/// decides whether one comment's failure aborts the run. Unknown command
/// names are not errors, they degrade to literal text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslationError {
    #[error("comment contains {kind}, which is not allowed (top-level block {block})")]
    ForbiddenConstruct { kind: ForbiddenKind, block: usize },

    #[error("\\{command} may only be given once per comment (top-level block {block})")]
    DuplicateCommand { command: String, block: usize },

    #[error("invalid arguments for \\{command}: {reason} (top-level block {block})")]
    InvalidArguments {
        command: String,
        reason: String,
        block: usize,
    },
}
