use miette::Diagnostic;
use thiserror::Error;

use crate::parser::ThreadCountError;

/// Main error type for tartan operations
#[derive(Error, Diagnostic, Debug)]
pub enum TartanError {
    #[error("IO error: {0}")]
    #[diagnostic(code(tartan::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(tartan::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    /// A catalog source is missing or malformed.
    #[error("Failed to load {source_name}: {message}")]
    #[diagnostic(code(tartan::load))]
    Load {
        source_name: String,
        message: String,
        #[help]
        help: Option<String>,
    },

    /// A thread count could not be parsed.
    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(#[from] ThreadCountError),

    /// Requested or computed raster dimensions are invalid.
    #[error("Dimension error: {message}")]
    #[diagnostic(code(tartan::dimension))]
    Dimension {
        message: String,
        #[help]
        help: Option<String>,
    },

    /// A sett names a colour code the weaver's catalog does not have.
    #[error("Colour {code:?} is not in the colour catalog")]
    #[diagnostic(code(tartan::render::missing_colour))]
    MissingColour { code: String },

    #[error("Encode error: {message}")]
    #[diagnostic(code(tartan::encode))]
    Encode { message: String },

    /// Bad `tartan.yaml` or command-line input.
    #[error("Config error: {message}")]
    #[diagnostic(code(tartan::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },
}

impl TartanError {
    pub(crate) fn load(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Load {
            source_name: source_name.into(),
            message: message.into(),
            help: None,
        }
    }

    pub(crate) fn dimension(message: impl Into<String>) -> Self {
        Self::Dimension {
            message: message.into(),
            help: None,
        }
    }

    /// True for failures scoped to a single render (parse or dimension).
    pub fn is_render_error(&self) -> bool {
        matches!(
            self,
            Self::Parse(_) | Self::Dimension { .. } | Self::MissingColour { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, TartanError>;
