// Dictionary-first stemmer with single suffix stripping

use hashbrown::HashMap;
use sinhala_core::character::char_len;

/// A stripped word must keep more than this many characters, otherwise the
/// original word is returned.
pub const MIN_STEM_CHARS: usize = 2;

/// Reduces a surface word to its base.
///
/// A lightweight view over a [`crate::Lexicon`]'s stem table and suffix
/// rules; create one with [`crate::Lexicon::stemmer`].
#[derive(Debug, Clone, Copy)]
pub struct Stemmer<'a> {
    stems: &'a HashMap<String, String>,
    suffix_rules: &'a [String],
}

impl<'a> Stemmer<'a> {
    pub fn new(stems: &'a HashMap<String, String>, suffix_rules: &'a [String]) -> Self {
        Self {
            stems,
            suffix_rules,
        }
    }

    /// Stem a word.
    ///
    /// 1. A stem table entry wins outright.
    /// 2. Otherwise the first suffix rule (in list order) that the word ends
    ///    with is stripped. At most one suffix is removed.
    /// 3. The stripped form is kept only if it has more than
    ///    [`MIN_STEM_CHARS`] characters.
    pub fn stem<'w>(&self, word: &'w str) -> &'w str
    where
        'a: 'w,
    {
        if let Some(stem) = self.stems.get(word) {
            return stem.as_str();
        }
        let stripped = self
            .suffix_rules
            .iter()
            .find(|suffix| !suffix.is_empty() && word.ends_with(suffix.as_str()))
            .map(|suffix| &word[..word.len() - suffix.len()]);
        match stripped {
            Some(rest) if char_len(rest) > MIN_STEM_CHARS => rest,
            _ => word,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn stem_table_takes_precedence() {
        let mut stems = HashMap::new();
        stems.insert("ගෙදරට".to_string(), "ගෙදර".to_string());
        let suffixes = rules(&["රට"]);
        let stemmer = Stemmer::new(&stems, &suffixes);
        // "රට" would also strip to "ගෙද"
        assert_eq!(stemmer.stem("ගෙදරට"), "ගෙදර");
    }

    #[test]
    fn first_matching_suffix_wins() {
        let stems = HashMap::new();
        let suffixes = rules(&["වලට", "ට"]);
        let stemmer = Stemmer::new(&stems, &suffixes);
        assert_eq!(stemmer.stem("පොත්වලට"), "පොත්");
        let reversed = rules(&["ට", "වලට"]);
        let stemmer = Stemmer::new(&stems, &reversed);
        assert_eq!(stemmer.stem("පොත්වලට"), "පොත්වල");
    }

    #[test]
    fn only_one_suffix_is_removed() {
        let stems = HashMap::new();
        let suffixes = rules(&["ට", "ල"]);
        let stemmer = Stemmer::new(&stems, &suffixes);
        // After stripping "ට" the remainder ends with "ල" but is kept.
        assert_eq!(stemmer.stem("පොත්වලට"), "පොත්වල");
    }

    #[test]
    fn short_remainder_keeps_original() {
        let stems = HashMap::new();
        let suffixes = rules(&["ට"]);
        let stemmer = Stemmer::new(&stems, &suffixes);
        // "ගමට" -> "ගම" has only two characters.
        assert_eq!(stemmer.stem("ගමට"), "ගමට");
        // "වැවට" -> "වැව" has three.
        assert_eq!(stemmer.stem("වැවට"), "වැව");
    }

    #[test]
    fn no_rule_returns_word() {
        let stems = HashMap::new();
        let suffixes = rules(&["ට", ""]);
        let stemmer = Stemmer::new(&stems, &suffixes);
        assert_eq!(stemmer.stem("ගෙදර"), "ගෙදර");
        assert_eq!(stemmer.stem(""), "");
    }
}
