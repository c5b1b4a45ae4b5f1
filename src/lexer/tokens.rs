use std::fmt::Display;

use crate::Span;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Comment,
    CommentSpecial, // document separators, TODO/FIXME/XXX/NOTE comments

    Operator, // <<:

    Keyword,         // tags and their closing paren
    KeywordConstant, // true, false, null

    VariableName, // $[...] and .[...]

    Punctuation,

    String,
    StringEscape,

    NumberInteger,
    NumberFloat,
    NumberHex,
    NumberOctal,

    Name,
    PlainText,
}

/// The coarse family a [`TokenKind`] belongs to.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenCategory {
    Comment,
    Operator,
    Keyword,
    Name,
    Punctuation,
    String,
    Number,
    Text,
}

impl TokenKind {
    pub const ALL: [TokenKind; 15] = [
        TokenKind::Comment,
        TokenKind::CommentSpecial,
        TokenKind::Operator,
        TokenKind::Keyword,
        TokenKind::KeywordConstant,
        TokenKind::VariableName,
        TokenKind::Punctuation,
        TokenKind::String,
        TokenKind::StringEscape,
        TokenKind::NumberInteger,
        TokenKind::NumberFloat,
        TokenKind::NumberHex,
        TokenKind::NumberOctal,
        TokenKind::Name,
        TokenKind::PlainText,
    ];

    pub fn category(&self) -> TokenCategory {
        match self {
            TokenKind::Comment | TokenKind::CommentSpecial => TokenCategory::Comment,
            TokenKind::Operator => TokenCategory::Operator,
            TokenKind::Keyword | TokenKind::KeywordConstant => TokenCategory::Keyword,
            TokenKind::VariableName | TokenKind::Name => TokenCategory::Name,
            TokenKind::Punctuation => TokenCategory::Punctuation,
            TokenKind::String | TokenKind::StringEscape => TokenCategory::String,
            TokenKind::NumberInteger
            | TokenKind::NumberFloat
            | TokenKind::NumberHex
            | TokenKind::NumberOctal => TokenCategory::Number,
            TokenKind::PlainText => TokenCategory::Text,
        }
    }

    /// Dotted name of the kind, most general part first.
    pub fn qualified_name(&self) -> &'static str {
        match self {
            TokenKind::Comment => "Token.Comment",
            TokenKind::CommentSpecial => "Token.Comment.Special",
            TokenKind::Operator => "Token.Operator",
            TokenKind::Keyword => "Token.Keyword",
            TokenKind::KeywordConstant => "Token.Keyword.Constant",
            TokenKind::VariableName => "Token.Name.Variable",
            TokenKind::Punctuation => "Token.Punctuation",
            TokenKind::String => "Token.Literal.String",
            TokenKind::StringEscape => "Token.Literal.String.Escape",
            TokenKind::NumberInteger => "Token.Literal.Number.Integer",
            TokenKind::NumberFloat => "Token.Literal.Number.Float",
            TokenKind::NumberHex => "Token.Literal.Number.Hex",
            TokenKind::NumberOctal => "Token.Literal.Number.Oct",
            TokenKind::Name => "Token.Name",
            TokenKind::PlainText => "Token.Text",
        }
    }

    pub fn is_number(&self) -> bool {
        self.category() == TokenCategory::Number
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub value: &'a str,
    pub span: Span,
}

impl Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\t{:?}", self.kind.qualified_name(), self.value)
    }
}

impl<'a> Token<'a> {
    pub fn len(&self) -> usize {
        self.span.len()
    }

    pub fn is_empty(&self) -> bool {
        self.span.is_empty()
    }

    fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }

    pub fn debug(&self) {
        if self.is_one_of_many(&[TokenKind::PlainText, TokenKind::Punctuation]) {
            println!("{} ()", self.kind);
        } else {
            println!("{} ({})", self.kind, self.value);
        }
    }
}

/// Merges neighbouring tokens of the same kind into one token.
///
/// Only tokens whose spans touch are merged, so the output still covers
/// exactly the same input as the tokens handed in.
pub fn coalesce<'a>(source: &'a str, tokens: impl IntoIterator<Item = Token<'a>>) -> Vec<Token<'a>> {
    let mut merged: Vec<Token<'a>> = vec![];

    for token in tokens {
        match merged.last_mut() {
            Some(last) if last.kind == token.kind && last.span.end == token.span.start => {
                last.span.end = token.span.end;
                last.value = &source[last.span.start..last.span.end];
            }
            _ => merged.push(token),
        }
    }

    merged
}
