//! Error types and error handling for the lexer crate.
//!
//! Tokenization itself never fails: unmatched input degrades to plain
//! text. The errors defined here cover everything around it:
//!
//! - Looking up a lexer by name, filename or mimetype
//! - Reading input for the command line tool
//! - Error names and suggestions for display

pub mod errors;
