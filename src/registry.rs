//! Lexer lookup by name, alias, filename or mimetype.

use std::path::Path;

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::{lexer::Lexer, tokens::Token},
};

#[derive(Debug, PartialEq, Eq)]
pub struct LexerInfo {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    /// Glob patterns, only `*.ext` and exact names are understood.
    pub filenames: &'static [&'static str],
    pub mimetypes: &'static [&'static str],
}

impl LexerInfo {
    pub fn lexer<'a>(&self, source: &'a str) -> Lexer<'a> {
        Lexer::new(source)
    }

    pub fn tokenize<'a>(&self, source: &'a str) -> Vec<Token<'a>> {
        self.lexer(source).collect()
    }

    fn answers_to(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
            || self.aliases.iter().any(|alias| alias.eq_ignore_ascii_case(name))
    }

    fn handles_file(&self, file_name: &str) -> bool {
        self.filenames.iter().any(|pattern| match pattern.strip_prefix('*') {
            Some(suffix) => file_name.len() > suffix.len() && file_name.ends_with(suffix),
            None => file_name == *pattern,
        })
    }
}

pub static TONY: LexerInfo = LexerInfo {
    name: "Tony",
    aliases: &["tony"],
    filenames: &["*.tony"],
    mimetypes: &["text/x-tony"],
};

static LEXERS: [&LexerInfo; 1] = [&TONY];

pub fn all_lexers() -> &'static [&'static LexerInfo] {
    &LEXERS
}

pub fn get_lexer_by_name(name: &str) -> Result<&'static LexerInfo, Error> {
    let name = name.trim();
    log::debug!("looking up lexer {:?}", name);

    all_lexers()
        .iter()
        .copied()
        .find(|lexer| lexer.answers_to(name))
        .ok_or_else(|| {
            Error::new(ErrorImpl::LexerNotFound {
                name: name.to_string(),
            })
        })
}

pub fn get_lexer_for_filename(path: &Path) -> Result<&'static LexerInfo, Error> {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    log::debug!("looking up lexer for file {:?}", file_name);

    all_lexers()
        .iter()
        .copied()
        .find(|lexer| lexer.handles_file(&file_name))
        .ok_or_else(|| {
            Error::new(ErrorImpl::NoLexerForFilename {
                filename: path.to_string_lossy().into_owned(),
            })
        })
}

pub fn get_lexer_for_mimetype(mimetype: &str) -> Result<&'static LexerInfo, Error> {
    // Parameters such as `; charset=utf-8` do not change the lexer.
    let essence = mimetype.split(';').next().unwrap_or_default().trim();
    log::debug!("looking up lexer for mimetype {:?}", essence);

    all_lexers()
        .iter()
        .copied()
        .find(|lexer| {
            lexer
                .mimetypes
                .iter()
                .any(|known| known.eq_ignore_ascii_case(essence))
        })
        .ok_or_else(|| {
            Error::new(ErrorImpl::NoLexerForMimetype {
                mimetype: mimetype.to_string(),
            })
        })
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::lexer::tokens::TokenKind;

    #[test]
    fn test_get_lexer_by_name() {
        assert_eq!(get_lexer_by_name("tony").unwrap().name, "Tony");
        assert_eq!(get_lexer_by_name("Tony").unwrap().name, "Tony");
        assert_eq!(get_lexer_by_name(" TONY ").unwrap().name, "Tony");
    }

    #[test]
    fn test_unknown_lexer_name() {
        let error = get_lexer_by_name("yaml").unwrap_err();

        assert_eq!(error.get_error_name(), "LexerNotFound");
        assert_eq!(
            error.kind(),
            &ErrorImpl::LexerNotFound {
                name: "yaml".to_string()
            }
        );
    }

    #[test]
    fn test_get_lexer_for_filename() {
        assert_eq!(get_lexer_for_filename(Path::new("config.tony")).unwrap(), &TONY);
        assert_eq!(get_lexer_for_filename(Path::new("/etc/app/base.tony")).unwrap(), &TONY);

        let error = get_lexer_for_filename(Path::new("config.yaml")).unwrap_err();
        assert_eq!(error.get_error_name(), "NoLexerForFilename");

        // The extension alone is not a file name.
        assert!(get_lexer_for_filename(Path::new(".tony")).is_err());
    }

    #[test]
    fn test_get_lexer_for_mimetype() {
        assert_eq!(get_lexer_for_mimetype("text/x-tony").unwrap(), &TONY);
        assert_eq!(get_lexer_for_mimetype("text/x-tony; charset=utf-8").unwrap(), &TONY);

        let error = get_lexer_for_mimetype("application/yaml").unwrap_err();
        assert_eq!(error.get_error_name(), "NoLexerForMimetype");
    }

    #[test]
    fn test_registered_lexer_tokenizes() {
        let lexer = get_lexer_by_name("tony").unwrap();
        let tokens = lexer.tokenize("!tag");

        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Keyword);
        assert_eq!(tokens[0].value, "!tag");
    }
}
