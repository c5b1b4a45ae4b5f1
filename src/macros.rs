//! Utility macros for the lexer.
//!
//! This module defines helper macros used by the tokenizer:
//!
//! - `MK_TOKEN!` - Creates a Token instance over a slice of the source
//! - `MK_RULE!` - Creates a rule for a mode's rule table
//!
//! These macros reduce boilerplate in the rule tables and the driver.

/// Creates a Token instance covering `$start..$end` of `$source`.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$source` - The full input being tokenized
/// * `$start` - Byte offset the token starts at
/// * `$end` - Byte offset one past the token's last byte
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Name, source, 0, 3);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $source:expr, $start:expr, $end:expr) => {{
        let start: usize = $start;
        let end: usize = $end;
        $crate::lexer::tokens::Token {
            kind: $kind,
            value: &$source[start..end],
            span: $crate::Span { start, end },
        }
    }};
}

/// Creates a rule that emits one token kind for the whole match, or one
/// kind per capture group when given a bracketed list.
///
/// The returned rule can be refined with its builder methods (`push`,
/// `pop`, `guard`, `followed_by`).
///
/// # Example
///
/// ```ignore
/// MK_RULE!(r"#.*", TokenKind::Comment)
/// MK_RULE!(r"([:,-])(\s+)", [TokenKind::Punctuation, TokenKind::PlainText])
/// MK_RULE!(r#"""#, TokenKind::String).push(Mode::DoubleString)
/// ```
#[macro_export]
macro_rules! MK_RULE {
    ($pattern:literal, [$($kind:expr),+ $(,)?]) => {
        $crate::lexer::lexer::RegexPattern::new(
            $pattern,
            $crate::lexer::lexer::Emit::Groups(&[$($kind),+]),
        )
    };
    ($pattern:literal, $kind:expr) => {
        $crate::lexer::lexer::RegexPattern::new(
            $pattern,
            $crate::lexer::lexer::Emit::Whole($kind),
        )
    };
}
