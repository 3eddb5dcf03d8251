use miette::Diagnostic;
use thiserror::Error;

/// Main error type for sandbrush operations
#[derive(Error, Diagnostic, Debug)]
pub enum SandbrushError {
    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(sandbrush::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    /// Invalid composition-time parameters.
    #[error("Config error: {message}")]
    #[diagnostic(code(sandbrush::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    /// Colour channel outside `[0, 255]`.
    #[error("Range error: {message}")]
    #[diagnostic(code(sandbrush::range))]
    Range {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(sandbrush::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },
}

impl SandbrushError {
    /// Shorthand for a config error without help text.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            help: None,
        }
    }

    /// Whether this is a composition-time config error.
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config { .. })
    }

    /// Whether this is a colour range error.
    pub fn is_range(&self) -> bool {
        matches!(self, Self::Range { .. })
    }
}

pub type Result<T> = std::result::Result<T, SandbrushError>;
