//! Error types for loading and parsing INI sources.

/// Top-level error type for inibind.
#[derive(Debug, thiserror::Error)]
pub enum IniError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("malformed line {line}: expected key=value, found '{content}'")]
    MalformedLine { line: usize, content: String },

    #[error("duplicate section [{name}] at line {line}")]
    DuplicateSection { name: String, line: usize },

    #[error("field '{key}' at line {line} appears outside any section")]
    FieldOutsideSection { line: usize, key: String },

    #[error("unterminated section header at line {line}: '{content}'")]
    UnterminatedSection { line: usize, content: String },
}

impl IniError {
    /// The 1-based source line the error refers to, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            IniError::Io(_) => None,
            IniError::MalformedLine { line, .. }
            | IniError::DuplicateSection { line, .. }
            | IniError::FieldOutsideSection { line, .. }
            | IniError::UnterminatedSection { line, .. } => Some(*line),
        }
    }
}

pub type Result<T> = std::result::Result<T, IniError>;
