use std::fmt::Display;

use thiserror::Error;

use crate::registry::all_lexers;

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
}

impl Error {
    pub fn new(error_impl: ErrorImpl) -> Self {
        Error {
            internal_error: error_impl,
        }
    }

    pub fn kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::LexerNotFound { .. } => "LexerNotFound",
            ErrorImpl::NoLexerForFilename { .. } => "NoLexerForFilename",
            ErrorImpl::NoLexerForMimetype { .. } => "NoLexerForMimetype",
            ErrorImpl::Io { .. } => "Io",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::LexerNotFound { name } => ErrorTip::Suggestion(format!(
                "No lexer registered under `{}`, available: {}",
                name,
                known_aliases()
            )),
            ErrorImpl::NoLexerForFilename { filename } => ErrorTip::Suggestion(format!(
                "No lexer handles `{}`, pass one with --lexer",
                filename
            )),
            ErrorImpl::NoLexerForMimetype { mimetype } => {
                ErrorTip::Suggestion(format!("No lexer handles mimetype `{}`", mimetype))
            }
            ErrorImpl::Io { .. } => ErrorTip::None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.internal_error)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.internal_error)
    }
}

impl From<ErrorImpl> for Error {
    fn from(error_impl: ErrorImpl) -> Self {
        Error::new(error_impl)
    }
}

fn known_aliases() -> String {
    all_lexers()
        .iter()
        .flat_map(|lexer| lexer.aliases.iter().copied())
        .collect::<Vec<_>>()
        .join(", ")
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("no lexer found for name {name:?}")]
    LexerNotFound { name: String },
    #[error("no lexer found for file {filename:?}")]
    NoLexerForFilename { filename: String },
    #[error("no lexer found for mimetype {mimetype:?}")]
    NoLexerForMimetype { mimetype: String },
    #[error("could not read {path:?}: {message}")]
    Io { path: String, message: String },
}
