//! Parsing of starting word lists

use crate::io::error::{IoResultExt, Result, invalid_candidate};
use crate::word::alphabet::Word;
use std::path::Path;

/// Parse one word: decimal, or hexadecimal with a `0x` prefix
///
/// # Errors
///
/// Returns `InvalidCandidate` if the token is not an unsigned integer
pub fn parse_word(token: &str) -> Result<Word> {
    let parsed = match token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
    {
        Some(hex) => Word::from_str_radix(hex, 16),
        None => token.parse(),
    };
    parsed.map_err(|error| invalid_candidate(&format!("cannot read word '{token}': {error}")))
}

/// Parse words separated by whitespace and/or commas
///
/// # Errors
///
/// Returns `InvalidCandidate` on the first unreadable token
pub fn parse_word_list(text: &str) -> Result<Vec<Word>> {
    text.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(parse_word)
        .collect()
}

/// Read a word list from a file
///
/// # Errors
///
/// Returns a file system error if the file cannot be read and
/// `InvalidCandidate` if it holds an unreadable token
pub fn read_word_file(path: &Path) -> Result<Vec<Word>> {
    let text = std::fs::read_to_string(path).at_path(path, "read word list")?;
    parse_word_list(&text)
}
