use serde::Serialize;

/// The translated documentation of a single comment.
///
/// Produced once by [`crate::translate`] and immutable afterwards; renderers
/// and linkers only read it. `sections` never contains a [`Section::Brief`]
/// entry, the brief lives in its own slot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TranslatedAst {
    pub brief: Option<Section>,
    pub sections: Vec<Section>,
    pub metadata: Metadata,
}

/// One documentation section. The kind is fixed at creation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Section {
    /// The one-paragraph (or `\brief`-accumulated) summary.
    Brief { content: Vec<ContentBlock> },
    /// Free-form body content with no command attached.
    Details { content: Vec<ContentBlock> },
    /// A named free-form section opened by a single command occurrence.
    Inline {
        name: String,
        content: Vec<ContentBlock>,
    },
    /// A named section accumulating items across repeated occurrences of the
    /// same command.
    List { name: String, items: Vec<ListItem> },
}

impl Section {
    pub fn name(&self) -> Option<&str> {
        match self {
            Section::Brief { .. } | Section::Details { .. } => None,
            Section::Inline { name, .. } | Section::List { name, .. } => Some(name),
        }
    }
}

/// One term/description entry of a list section.
///
/// `term` is `None` when the command carried no separator. The description is
/// block-granular: plain blocks that follow the command without an
/// intervening command are appended as further paragraphs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListItem {
    pub term: Option<Vec<InlineNode>>,
    pub description: Vec<ContentBlock>,
}

/// Validated entity-level attributes collected from metadata commands.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Metadata {
    pub exclude: Option<ExcludeMode>,
    pub unique_name: Option<String>,
    pub synopsis: Option<String>,
    pub group: Option<GroupSpec>,
    pub module: Option<String>,
    pub output_section: Option<String>,
}

/// What `\exclude` hides from the generated documentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ExcludeMode {
    /// The whole entity.
    Entity,
    /// The link target only.
    Target,
    /// The return type of a function.
    ReturnType,
}

/// Parsed `\group` argument.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupSpec {
    pub name: String,
    pub heading: Option<String>,
    /// `None` when the raw name carried a leading `-`, otherwise the name.
    pub output_section: Option<String>,
}

/// A block of translated section content. Mirrors the generic markup block
/// minus the forbidden kinds, with links classified.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ContentBlock {
    Paragraph(Vec<InlineNode>),
    UnorderedList(Vec<Vec<ContentBlock>>),
    OrderedList(Vec<Vec<ContentBlock>>),
    BlockQuote(Vec<ContentBlock>),
    CodeBlock {
        language: Option<String>,
        text: String,
    },
    Heading {
        level: u8,
        content: Vec<InlineNode>,
    },
    ThematicBreak,
}

/// Translated inline content.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum InlineNode {
    Text(String),
    Code(String),
    Emphasis(Vec<InlineNode>),
    Strong(Vec<InlineNode>),
    SoftBreak,
    HardBreak,
    Link(Link),
}

/// A classified link.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Link {
    /// An absolute URL, kept verbatim.
    External {
        url: String,
        title: Option<String>,
        content: Vec<InlineNode>,
    },
    /// A reference to another documented entity, resolved by name in a later
    /// pass.
    Internal {
        title: Option<String>,
        content: Vec<InlineNode>,
        resolution: Resolution,
    },
}

/// Resolution state of an internal link.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Resolution {
    /// The target name as authored; an empty name means the author gave the
    /// linker nothing to work with, which consumers may warn about.
    Unresolved(String),
    Resolved { id: EntityId, url: String },
}

/// Opaque identifier of a documented entity in the host system's model.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct EntityId(pub String);
