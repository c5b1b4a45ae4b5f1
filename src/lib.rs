#![allow(clippy::module_inception)]

pub mod errors;
pub mod lexer;
pub mod macros;
pub mod registry;

extern crate regex;

/// Byte range `start..end` into the tokenized input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// Walks forward through a source, keeping the 1-based line and column of
/// the current byte offset. Columns count chars, not bytes.
///
/// Visiting offsets in increasing order costs one pass over the source.
#[derive(Debug, Clone)]
pub struct LineCursor<'a> {
    source: &'a str,
    offset: usize,
    line: usize,
    column: usize,
}

impl<'a> LineCursor<'a> {
    pub fn new(source: &'a str) -> Self {
        LineCursor {
            source,
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    /// Moves to byte `position` and returns its line and column.
    ///
    /// Seeking backwards restarts from the top. Positions past the end stop
    /// at the end.
    pub fn seek(&mut self, position: usize) -> (usize, usize) {
        if position < self.offset {
            *self = LineCursor::new(self.source);
        }

        let position = position.min(self.source.len());
        if let Some(skipped) = self.source.get(self.offset..position) {
            for c in skipped.chars() {
                if c == '\n' {
                    self.line += 1;
                    self.column = 1;
                } else {
                    self.column += 1;
                }
            }
            self.offset = position;
        }

        (self.line, self.column)
    }
}
