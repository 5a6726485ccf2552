// Whitespace and punctuation tokenizer

use sinhala_core::character::{is_punctuation, is_sentence_terminator};

use super::Tokenizer;

/// Sentences end at `.`, `?` or `!`. Tokens are whitespace-separated words
/// with leading and trailing punctuation detached, one token per
/// punctuation character.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleTokenizer;

impl SimpleTokenizer {
    pub fn new() -> Self {
        Self
    }
}

impl Tokenizer for SimpleTokenizer {
    fn split_sentences(&self, text: &str) -> Vec<String> {
        text.split(is_sentence_terminator)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }

    fn tokenize(&self, sentence: &str) -> Vec<String> {
        let mut tokens = Vec::new();
        for chunk in sentence.split_whitespace() {
            let core = chunk.trim_start_matches(is_punctuation);
            for c in chunk[..chunk.len() - core.len()].chars() {
                tokens.push(c.to_string());
            }
            let word = core.trim_end_matches(is_punctuation);
            if !word.is_empty() {
                tokens.push(word.to_string());
            }
            for c in core[word.len()..].chars() {
                tokens.push(c.to_string());
            }
        }
        tokens
    }
}
