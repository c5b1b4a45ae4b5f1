use std::{collections::VecDeque, fmt::Display};

use regex::Regex;

use crate::MK_TOKEN;

use super::{
    rules::rules_for,
    tokens::{Token, TokenKind},
};

/// Checks the character right after a match. `None` means end of input.
pub type Lookahead = fn(Option<char>) -> bool;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Mode {
    Root,
    TagArgs,
    DoubleString,
    BlockLiteral,
}

impl Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Root => write!(f, "root"),
            Mode::TagArgs => write!(f, "tag-args"),
            Mode::DoubleString => write!(f, "double-string"),
            Mode::BlockLiteral => write!(f, "block-literal"),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Emit {
    Whole(TokenKind),
    /// One kind per capture group, in group order. Empty groups emit nothing.
    Groups(&'static [TokenKind]),
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Transition {
    Stay,
    Push(Mode),
    Pop,
}

/// Context a rule needs from the text before the scan offset.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Guard {
    Anywhere,
    /// Offset 0 or right after a `\n`.
    LineStart,
    /// Only spaces and tabs between the last line break and the offset.
    AfterIndent,
    /// The previous character is not a word character.
    WordStart,
}

#[derive(Clone)]
pub struct RegexPattern {
    regex: Regex,
    emit: Emit,
    transition: Transition,
    guard: Guard,
    followed_by: Option<Lookahead>,
}

impl RegexPattern {
    pub fn new(pattern: &str, emit: Emit) -> RegexPattern {
        RegexPattern {
            regex: Regex::new(&format!("\\A(?:{})", pattern)).unwrap(),
            emit,
            transition: Transition::Stay,
            guard: Guard::Anywhere,
            followed_by: None,
        }
    }

    pub fn push(mut self, mode: Mode) -> Self {
        self.transition = Transition::Push(mode);
        self
    }

    pub fn pop(mut self) -> Self {
        self.transition = Transition::Pop;
        self
    }

    pub fn guard(mut self, guard: Guard) -> Self {
        self.guard = guard;
        self
    }

    pub fn followed_by(mut self, lookahead: Lookahead) -> Self {
        self.followed_by = Some(lookahead);
        self
    }

    pub fn transition(&self) -> Transition {
        self.transition
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

/// Lazy tokenizer over a single input.
///
/// Every `Lexer` owns its mode stack and cursor, so two lexers never share
/// state. Iterating yields tokens that cover the whole input in order.
#[derive(Clone)]
pub struct Lexer<'a> {
    source: &'a str,
    pos: usize,
    modes: Vec<Mode>,
    pending: VecDeque<Token<'a>>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Lexer<'a> {
        Lexer {
            source,
            pos: 0,
            modes: vec![Mode::Root],
            pending: VecDeque::new(),
        }
    }

    pub fn mode(&self) -> Mode {
        self.modes.last().copied().unwrap_or(Mode::Root)
    }

    pub fn depth(&self) -> usize {
        self.modes.len()
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn remainder(&self) -> &'a str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn push(&mut self, kind: TokenKind, start: usize, end: usize) {
        if start < end {
            self.pending.push_back(MK_TOKEN!(kind, self.source, start, end));
        }
    }

    fn push_mode(&mut self, mode: Mode) {
        log::trace!("push {} -> {} at {}", self.mode(), mode, self.pos);
        self.modes.push(mode);
    }

    fn pop_mode(&mut self) {
        if self.modes.len() > 1 {
            let left = self.modes.pop();
            log::trace!("pop {:?} -> {} at {}", left, self.mode(), self.pos);
        }
    }

    fn guard_holds(&self, guard: Guard) -> bool {
        let before = &self.source[..self.pos];

        match guard {
            Guard::Anywhere => true,
            Guard::LineStart => before.is_empty() || before.ends_with('\n'),
            Guard::AfterIndent => {
                // Only the indentation is walked, never the whole line.
                let indent = before.bytes().rev().take_while(|b| *b == b' ' || *b == b'\t').count();
                let line = &before[..before.len() - indent];
                line.is_empty() || line.ends_with('\n')
            }
            Guard::WordStart => match before.chars().next_back() {
                Some(c) => !(c.is_alphanumeric() || c == '_'),
                None => true,
            },
        }
    }

    /// Tries the current mode's rules in order and applies the first that
    /// matches. Returns false when none did.
    fn apply_first_rule(&mut self) -> bool {
        let remaining = self.remainder();

        for pattern in rules_for(self.mode()).iter() {
            if !self.guard_holds(pattern.guard) {
                continue;
            }

            let Some(captures) = pattern.regex.captures(remaining) else {
                continue;
            };
            let len = captures.get(0).map_or(0, |m| m.end());

            if let Some(lookahead) = pattern.followed_by {
                if !lookahead(remaining[len..].chars().next()) {
                    continue;
                }
            }

            // An empty match only counts when it leaves a mode; otherwise it
            // would not make progress.
            if len == 0 && !(pattern.transition == Transition::Pop && self.modes.len() > 1) {
                continue;
            }

            let start = self.pos;
            match pattern.emit {
                Emit::Whole(kind) => self.push(kind, start, start + len),
                Emit::Groups(kinds) => {
                    for (i, kind) in kinds.iter().enumerate() {
                        if let Some(group) = captures.get(i + 1) {
                            self.push(*kind, start + group.start(), start + group.end());
                        }
                    }
                }
            }

            self.advance_n(len);

            match pattern.transition {
                Transition::Stay => {}
                Transition::Push(mode) => self.push_mode(mode),
                Transition::Pop => self.pop_mode(),
            }

            return true;
        }

        false
    }

    fn fallback(&mut self) {
        if let Some(ch) = self.at() {
            log::debug!("no {} rule matched {:?} at {}", self.mode(), ch, self.pos);

            let start = self.pos;
            self.push(TokenKind::PlainText, start, start + ch.len_utf8());
            self.advance_n(ch.len_utf8());
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Some(token);
            }

            if self.at_eof() {
                return None;
            }

            if !self.apply_first_rule() {
                self.fallback();
            }
        }
    }
}

pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    Lexer::new(source).collect()
}
