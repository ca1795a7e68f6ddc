//! marginalia-engine: the comment translation engine.
//!
//! Takes the lightly structured prose of a documentation comment (parsed
//! into a generic markup tree by `pulldown-cmark`) and produces a validated,
//! strongly typed documentation AST: a brief, an ordered sequence of typed
//! sections, and entity-level metadata. Which inline/list section names
//! exist is a caller decision, see [`CommandVocabulary`].

pub mod error;
pub mod linker;
pub mod markup;
pub mod model;
pub mod translate;
pub mod vocabulary;

pub use error::{ForbiddenKind, TranslationError};
pub use linker::{LinkWarning, Linker, resolve_links};
pub use markup::parse_markup;
pub use model::*;
pub use translate::{translate, translate_comment};
pub use vocabulary::{CommandVocabulary, SectionCommand};
