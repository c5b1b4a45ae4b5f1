use lazy_static::lazy_static;

use crate::MK_RULE;

use super::{
    lexer::{Guard, Mode, RegexPattern},
    tokens::TokenKind,
};

// Rule order is significant: the first rule that matches wins, even when a
// later rule would match more text.

lazy_static! {
    pub static ref ROOT_RULES: Vec<RegexPattern> = vec![
        MK_RULE!(r"---[ \t]*", TokenKind::CommentSpecial).guard(Guard::LineStart).followed_by(ends_line),
        MK_RULE!(r"#.*?(?:TODO|FIXME|XXX|NOTE).*", TokenKind::CommentSpecial),
        MK_RULE!(r"#.*", TokenKind::Comment),
        MK_RULE!(r"([ \t]*)(<<:)", [TokenKind::PlainText, TokenKind::Operator]).guard(Guard::AfterIndent),
        MK_RULE!(r"![a-zA-Z0-9_./+=~@$%^&-]+(?::[a-zA-Z0-9_./+=~@$%^&-]+)*", TokenKind::Keyword).followed_by(ends_plain_tag),
        MK_RULE!(r"![a-zA-Z0-9_./+=~@$%^&-]+(?::[a-zA-Z0-9_./+=~@$%^&-]+)*\(", TokenKind::Keyword).push(Mode::TagArgs),
        MK_RULE!(r"\$\[[^\]]+\]", TokenKind::VariableName),
        MK_RULE!(r"\.\[[^\]]+\]", TokenKind::VariableName),
        MK_RULE!(r"([ \t]*)(\|[+-]?)([ \t]*)", [TokenKind::PlainText, TokenKind::Punctuation, TokenKind::PlainText])
            .guard(Guard::AfterIndent)
            .followed_by(ends_line)
            .push(Mode::BlockLiteral),
        MK_RULE!(r#"""#, TokenKind::String).push(Mode::DoubleString),
        MK_RULE!(r"'(?:[^'\\]|\\.)*'", TokenKind::String),
        MK_RULE!(r"-?0[xX][0-9a-fA-F]+", TokenKind::NumberHex),
        MK_RULE!(r"-?0[oO][0-7]+", TokenKind::NumberOctal),
        MK_RULE!(r"-?[0-9]+\.[0-9]+", TokenKind::NumberFloat),
        MK_RULE!(r"-?[0-9]+", TokenKind::NumberInteger),
        MK_RULE!(r"(?:true|false|null)\b", TokenKind::KeywordConstant).guard(Guard::WordStart),
        MK_RULE!(r"[\[\]{}]", TokenKind::Punctuation),
        MK_RULE!(r"([:,-])(\s+)", [TokenKind::Punctuation, TokenKind::PlainText]),
        MK_RULE!(r"\s+", TokenKind::PlainText),
        MK_RULE!(r#"[^\s\[\]{}:,!$.#"'-]+"#, TokenKind::Name),
    ];

    pub static ref TAG_ARGS_RULES: Vec<RegexPattern> = vec![
        MK_RULE!(r#"""#, TokenKind::String).push(Mode::DoubleString),
        MK_RULE!(r"'(?:[^'\\]|\\.)*'", TokenKind::String),
        MK_RULE!(r"-?0[xX][0-9a-fA-F]+", TokenKind::NumberHex),
        MK_RULE!(r"-?0[oO][0-7]+", TokenKind::NumberOctal),
        MK_RULE!(r"-?[0-9]+\.[0-9]+", TokenKind::NumberFloat),
        MK_RULE!(r"-?[0-9]+", TokenKind::NumberInteger),
        MK_RULE!(r"(?:true|false|null)\b", TokenKind::KeywordConstant).guard(Guard::WordStart),
        MK_RULE!(r"[a-zA-Z0-9_.:/+=~@$%^&*-]+", TokenKind::Name),
        MK_RULE!(r",", TokenKind::Punctuation),
        MK_RULE!(r"\)", TokenKind::Keyword).pop(),
        MK_RULE!(r"\s+", TokenKind::PlainText),
    ];

    pub static ref DOUBLE_STRING_RULES: Vec<RegexPattern> = vec![
        MK_RULE!(r#"\\[\\"nrtbf]"#, TokenKind::StringEscape),
        MK_RULE!(r"\$\[[^\]]+\]", TokenKind::VariableName),
        MK_RULE!(r#"""#, TokenKind::String).pop(),
        MK_RULE!(r#"[^\\"$]+"#, TokenKind::String),
    ];

    pub static ref BLOCK_LITERAL_RULES: Vec<RegexPattern> = vec![
        MK_RULE!(r"[^\S\r\n]+[^\r\n]*", TokenKind::String).guard(Guard::LineStart),
        MK_RULE!(r"\r?\n", TokenKind::PlainText),
        // Leaves the unindented line for the enclosing mode.
        MK_RULE!(r"", TokenKind::PlainText).guard(Guard::LineStart).followed_by(starts_unindented).pop(),
    ];
}

pub fn rules_for(mode: Mode) -> &'static [RegexPattern] {
    match mode {
        Mode::Root => ROOT_RULES.as_slice(),
        Mode::TagArgs => TAG_ARGS_RULES.as_slice(),
        Mode::DoubleString => DOUBLE_STRING_RULES.as_slice(),
        Mode::BlockLiteral => BLOCK_LITERAL_RULES.as_slice(),
    }
}

fn ends_line(next: Option<char>) -> bool {
    matches!(next, None | Some('\n') | Some('\r'))
}

/// A plain tag is one not followed by `(`, which would open an argument list.
fn ends_plain_tag(next: Option<char>) -> bool {
    match next {
        None => true,
        Some(c) => c.is_whitespace() || matches!(c, ':' | '[' | '{' | ','),
    }
}

/// Agrees with `\s` in the content rule: both use Unicode `White_Space`.
fn starts_unindented(next: Option<char>) -> bool {
    matches!(next, Some(c) if !c.is_whitespace())
}
