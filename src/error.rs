use std::fmt;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecipeError {
    #[error("Format error on line {line}: {reason}: {content:?}")]
    Format {
        line: usize,
        content: String,
        reason: FormatIssue,
    },

    #[error("Index {index} is out of range for {len} recipe(s)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Recipes cannot be reloaded or deleted from inside a change subscriber")]
    Reentrant,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("Project not initialized. Run 'recipes init' first.")]
    NotInitialized,
}

/// What made a line of a recipes file unacceptable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatIssue {
    /// An ingredient line split into this many fields instead of three.
    FieldCount(usize),
    /// Data before the first section marker.
    NoSection,
    /// Ingredient or instruction data before any recipe name.
    NoRecipe,
    /// A value that would not survive a save/load cycle.
    NotEncodable,
}

impl fmt::Display for FormatIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatIssue::FieldCount(n) => {
                write!(f, "expected 3 ';'-separated ingredient fields, found {}", n)
            }
            FormatIssue::NoSection => write!(f, "data outside of any section"),
            FormatIssue::NoRecipe => write!(f, "section data before any recipe name"),
            FormatIssue::NotEncodable => write!(f, "value cannot be written as a single line"),
        }
    }
}

impl RecipeError {
    pub fn is_format(&self) -> bool {
        matches!(self, RecipeError::Format { .. })
    }
}

pub type Result<T> = std::result::Result<T, RecipeError>;
