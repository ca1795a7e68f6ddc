//! Loads the command vocabulary from a TOML file.
//!
//! The engine treats the set of inline-section and list-section names as
//! caller input; this crate is the file-backed way to supply it:
//!
//! ```toml
//! [sections]
//! inline = ["effects", "notes"]
//! list = ["returns", "see"]
//! ```

use marginalia_engine::CommandVocabulary;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid section name `{name}`: {reason}")]
    InvalidSectionName { name: String, reason: String },
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub sections: Sections,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Sections {
    #[serde(default)]
    pub inline: Vec<String>,
    #[serde(default)]
    pub list: Vec<String>,
}

impl Config {
    /// Loads a config file, `Ok(None)` if it does not exist.
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        Ok(Some(config))
    }

    /// Validates the declared names and builds the vocabulary the engine
    /// consumes. Built-in command names cannot be redeclared, and a name may
    /// only have one kind.
    pub fn into_vocabulary(self) -> Result<CommandVocabulary, ConfigError> {
        let mut vocabulary = CommandVocabulary::empty();
        for name in &self.sections.inline {
            validate_name(name)?;
            if self.sections.list.contains(name) {
                return Err(ConfigError::InvalidSectionName {
                    name: name.clone(),
                    reason: "declared as both an inline and a list section".into(),
                });
            }
            vocabulary = vocabulary.with_inline_section(name);
        }
        for name in &self.sections.list {
            validate_name(name)?;
            vocabulary = vocabulary.with_list_section(name);
        }
        Ok(vocabulary)
    }
}

fn validate_name(name: &str) -> Result<(), ConfigError> {
    if name.is_empty() {
        return Err(ConfigError::InvalidSectionName {
            name: name.to_string(),
            reason: "section names may not be empty".into(),
        });
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        return Err(ConfigError::InvalidSectionName {
            name: name.to_string(),
            reason: "section names are identifiers: ASCII letters, digits and `_`".into(),
        });
    }
    if CommandVocabulary::is_reserved(name) {
        return Err(ConfigError::InvalidSectionName {
            name: name.to_string(),
            reason: "this name is a built-in command".into(),
        });
    }
    Ok(())
}
