//! Error types for prompt generation.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArchitectError {
    /// A required input field was empty when generation was triggered.
    #[error("missing input: {0} is empty - paste the text and generate again")]
    MissingInput(&'static str),

    /// The template skeleton references slots with no bound value.
    #[error("template references unbound variable(s): {}", .keys.join(", "))]
    MissingVariables { keys: Vec<String> },

    /// The configured chunk ceiling cannot be used.
    #[error("invalid chunk limit {0}: must be greater than zero")]
    InvalidLimit(usize),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
