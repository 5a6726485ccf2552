// Character classification and normalization for Sinhala text

/// First code point of the Sinhala Unicode block.
pub const SINHALA_BLOCK_START: char = '\u{0D80}';

/// Last code point of the Sinhala Unicode block.
pub const SINHALA_BLOCK_END: char = '\u{0DFF}';

/// Characters that end a sentence.
pub const SENTENCE_TERMINATORS: &[char] = &['.', '?', '!'];

/// Terminator appended to a sentence before tagging.
pub const DEFAULT_TERMINATOR: char = '.';

/// Check whether a character belongs to the Sinhala Unicode block.
pub fn is_sinhala(c: char) -> bool {
    (SINHALA_BLOCK_START..=SINHALA_BLOCK_END).contains(&c)
}

/// Check whether a character ends a sentence.
pub fn is_sentence_terminator(c: char) -> bool {
    SENTENCE_TERMINATORS.contains(&c)
}

/// Check whether a character is punctuation that the tokenizer detaches from
/// words.
pub fn is_punctuation(c: char) -> bool {
    matches!(
        c,
        '.' | ','
            | ';'
            | ':'
            | '!'
            | '?'
            | '\''
            | '"'
            | '('
            | ')'
            | '['
            | ']'
            | '{'
            | '}'
            | '\u{2018}' // LEFT SINGLE QUOTATION MARK
            | '\u{2019}' // RIGHT SINGLE QUOTATION MARK
            | '\u{201C}' // LEFT DOUBLE QUOTATION MARK
            | '\u{201D}' // RIGHT DOUBLE QUOTATION MARK
            | '\u{2026}' // HORIZONTAL ELLIPSIS
            | '\u{0DF4}' // SINHALA PUNCTUATION KUNDDALIYA
    )
}

/// Normalize a dictionary entry: lowercase it and drop every character that
/// is not in the Sinhala block.
///
/// Zero-width joiners and non-joiners (used in conjunct spelling) are outside
/// the block and are removed as well, so two spellings of a conjunct that
/// differ only in joiners normalize to the same entry.
pub fn normalize_word(word: &str) -> String {
    word.chars()
        .flat_map(char::to_lowercase)
        .filter(|&c| is_sinhala(c))
        .collect()
}

/// Number of Unicode scalar values in `word`.
pub fn char_len(word: &str) -> usize {
    word.chars().count()
}

/// Return the first `n` characters of `word` (the whole word when shorter).
pub fn char_prefix(word: &str, n: usize) -> &str {
    match word.char_indices().nth(n) {
        Some((idx, _)) => &word[..idx],
        None => word,
    }
}
