//! Lexical analysis for Tony documents.
//!
//! This module contains the tokenizer that turns Tony source into a stream
//! of highlighting tokens. It handles:
//!
//! - Per-mode regex rule tables, tried in order, first match wins
//! - An explicit mode stack for tag arguments, double-quoted strings and
//!   block literals
//! - Tags, merge keys, interpolation and path references, numerals
//! - Falling back to one-character plain text so every input is covered

pub mod lexer;
pub mod rules;
pub mod tokens;
