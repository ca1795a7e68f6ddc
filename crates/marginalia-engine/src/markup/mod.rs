pub mod reader;
pub mod types;

pub use reader::parse_markup;
pub use types::{Block, Inline};
