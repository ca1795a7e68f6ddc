use std::collections::BTreeSet;

/// Section-opening role of a recognized command name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionCommand {
    /// Opens a named free-form section; every occurrence opens a new one.
    Inline,
    /// Opens (or extends) a named key/value list section.
    List,
}

/// The caller-supplied table of section-opening command names.
///
/// The engine hard-codes only `brief`, `details` and the metadata commands;
/// which inline and list section names exist is decided by the surrounding
/// system and passed in here. Names not in the table (and not built in) are
/// literal text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandVocabulary {
    inline_sections: BTreeSet<String>,
    list_sections: BTreeSet<String>,
}

/// Command names with fixed, built-in meaning that the vocabulary may not
/// redefine.
pub const RESERVED_COMMANDS: &[&str] = &[
    "brief",
    "details",
    "exclude",
    "unique_name",
    "synopsis",
    "group",
    "module",
    "output_section",
];

impl CommandVocabulary {
    /// A vocabulary with no section names at all. Only the built-in commands
    /// are recognized.
    pub fn empty() -> Self {
        Self {
            inline_sections: BTreeSet::new(),
            list_sections: BTreeSet::new(),
        }
    }

    pub fn with_inline_section(mut self, name: impl Into<String>) -> Self {
        self.inline_sections.insert(name.into());
        self
    }

    pub fn with_list_section(mut self, name: impl Into<String>) -> Self {
        self.list_sections.insert(name.into());
        self
    }

    /// Looks a name up in the table. List names win if a name was registered
    /// as both; the config layer rejects that case up front.
    pub fn kind_of(&self, name: &str) -> Option<SectionCommand> {
        if self.list_sections.contains(name) {
            Some(SectionCommand::List)
        } else if self.inline_sections.contains(name) {
            Some(SectionCommand::Inline)
        } else {
            None
        }
    }

    pub fn inline_sections(&self) -> impl Iterator<Item = &str> {
        self.inline_sections.iter().map(String::as_str)
    }

    pub fn list_sections(&self) -> impl Iterator<Item = &str> {
        self.list_sections.iter().map(String::as_str)
    }

    pub fn is_reserved(name: &str) -> bool {
        RESERVED_COMMANDS.contains(&name)
    }
}

impl Default for CommandVocabulary {
    /// The conventional vocabulary for documenting C++-style declarations.
    fn default() -> Self {
        let mut vocabulary = Self::empty();
        for name in [
            "requires",
            "effects",
            "synchronization",
            "postconditions",
            "preconditions",
            "throws",
            "complexity",
            "remarks",
            "error_conditions",
            "notes",
        ] {
            vocabulary = vocabulary.with_inline_section(name);
        }
        vocabulary.with_list_section("returns").with_list_section("see")
    }
}
