/// A top-level or nested block node of the generic markup tree.
///
/// This is the engine's input shape: whatever the markup parser produced,
/// folded into an owned tree. The forbidden kinds ([`Block::HtmlBlock`],
/// [`Inline::Html`], [`Inline::Image`]) are representable on purpose so the
/// guard can reject them with a precise error instead of the adapter silently
/// dropping them.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Paragraph(Vec<Inline>),
    /// An ordered or unordered list; each item is itself a block sequence.
    List {
        ordered: bool,
        items: Vec<Vec<Block>>,
    },
    BlockQuote(Vec<Block>),
    CodeBlock {
        language: Option<String>,
        text: String,
    },
    Heading {
        level: u8,
        content: Vec<Inline>,
    },
    ThematicBreak,
    /// Raw block-level HTML. Forbidden in documentation comments.
    HtmlBlock(String),
}

/// An inline leaf or span of the generic markup tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Inline {
    Text(String),
    Code(String),
    Emphasis(Vec<Inline>),
    Strong(Vec<Inline>),
    SoftBreak,
    HardBreak,
    /// A link exactly as authored; classification into internal/external
    /// happens during translation, not here.
    Link {
        destination: String,
        title: String,
        content: Vec<Inline>,
    },
    /// Raw inline HTML. Forbidden in documentation comments.
    Html(String),
    /// An image. Forbidden in documentation comments.
    Image {
        destination: String,
        title: String,
        content: Vec<Inline>,
    },
}
