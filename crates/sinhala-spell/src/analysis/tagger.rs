// Rule-based part-of-speech tagger

use std::path::Path;

use hashbrown::HashMap;
use sinhala_core::character::{char_len, is_punctuation, is_sentence_terminator};
use sinhala_core::tagset::{
    TAG_COMMON_NOUN, TAG_FINITE_VERB, TAG_FULL_STOP, TAG_NUMBER, TAG_PRONOUN, TAG_PUNCTUATION,
};
use sinhala_core::token::TaggedToken;

use super::Tagger;
use crate::error::ResourceError;

/// Personal pronouns tagged as subjects.
pub const PRONOUNS: &[&str] = &[
    "මම", "අපි", "ඔයා", "ඔබ", "ඔබලා", "ඔහු", "ඇය", "ඔවුන්", "ඔවුහු", "එයා", "එයාලා", "මා",
];

/// Endings of finite verb forms.
pub const VERB_ENDINGS: &[&str] = &[
    "න්නෙමි", "න්නෙමු", "න්නේය", "නවා", "වා", "මි", "මු", "යි", "හි", "හු", "ති",
];

/// Tags words by table lookup, falling back to built-in rules:
/// pronoun list, punctuation, digits, verb endings, then common noun.
#[derive(Debug, Clone, Default)]
pub struct LexiconTagger {
    table: HashMap<String, String>,
}

impl LexiconTagger {
    /// A tagger using only the built-in rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a `word<TAB>tag` lexicon. Malformed lines are skipped with a
    /// warning since the lexicon only refines the built-in rules.
    pub fn from_text(text: &str, name: &str) -> Self {
        let mut table = HashMap::new();
        for (idx, line) in text.trim_start_matches('\u{FEFF}').lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            match line.split_once('\t') {
                Some((word, tag)) if !word.trim().is_empty() && !tag.trim().is_empty() => {
                    table.insert(word.trim().to_string(), tag.trim().to_string());
                }
                _ => log::warn!("{name}:{}: skipping line, expected 'word<TAB>tag'", idx + 1),
            }
        }
        Self { table }
    }

    /// Load a POS lexicon file.
    pub fn load(path: &Path) -> Result<Self, ResourceError> {
        let text = std::fs::read_to_string(path).map_err(|source| ResourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let tagger = Self::from_text(&text, &path.display().to_string());
        log::debug!("loaded POS lexicon: {} entries", tagger.len());
        Ok(tagger)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Tag a single token.
    pub fn tag_word(&self, word: &str) -> &str {
        if let Some(tag) = self.table.get(word) {
            return tag;
        }
        if PRONOUNS.contains(&word) {
            return TAG_PRONOUN;
        }
        if !word.is_empty() && word.chars().all(is_punctuation) {
            return if word.chars().all(is_sentence_terminator) {
                TAG_FULL_STOP
            } else {
                TAG_PUNCTUATION
            };
        }
        if !word.is_empty() && word.chars().all(|c| c.is_numeric() || c == '.' || c == ',') {
            return TAG_NUMBER;
        }
        let len = char_len(word);
        if VERB_ENDINGS
            .iter()
            .any(|e| word.ends_with(e) && len > char_len(e))
        {
            return TAG_FINITE_VERB;
        }
        TAG_COMMON_NOUN
    }
}

impl Tagger for LexiconTagger {
    fn predict(&self, sentences: &[Vec<String>]) -> Vec<Vec<TaggedToken>> {
        sentences
            .iter()
            .map(|tokens| {
                tokens
                    .iter()
                    .map(|t| TaggedToken::new(t.as_str(), self.tag_word(t)))
                    .collect()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_rules() {
        let t = LexiconTagger::new();
        assert_eq!(t.tag_word("මම"), "PRP");
        assert_eq!(t.tag_word("අපි"), "PRP");
        assert_eq!(t.tag_word("."), "FS");
        assert_eq!(t.tag_word("?"), "FS");
        assert_eq!(t.tag_word(","), "PUNC");
        assert_eq!(t.tag_word("2024"), "NUM");
        assert_eq!(t.tag_word("යනයි"), "VFM");
        assert_eq!(t.tag_word("යනවා"), "VFM");
        assert_eq!(t.tag_word("ගෙදර"), "NNC");
    }

    #[test]
    fn bare_ending_is_not_a_verb() {
        let t = LexiconTagger::new();
        assert_eq!(t.tag_word("මි"), "NNC");
    }

    #[test]
    fn table_overrides_rules() {
        let t = LexiconTagger::from_text("ගෙදර\tNNP\nමම\tNNC\n", "test");
        assert_eq!(t.len(), 2);
        assert_eq!(t.tag_word("ගෙදර"), "NNP");
        assert_eq!(t.tag_word("මම"), "NNC");
    }

    #[test]
    fn malformed_lines_are_skipped() {
        let t = LexiconTagger::from_text("ගෙදර NNP\n\nපොත\tNNC\n\tVFM\n", "test");
        assert_eq!(t.len(), 1);
        assert_eq!(t.tag_word("පොත"), "NNC");
    }

    #[test]
    fn predict_keeps_shape() {
        let t = LexiconTagger::new();
        let input = vec![
            vec!["මම".to_string(), "ගෙදර".to_string(), "යමි".to_string(), ".".to_string()],
            vec![],
        ];
        let out = t.predict(&input);
        assert_eq!(out.len(), 2);
        assert!(out[1].is_empty());
        let tags: Vec<&str> = out[0].iter().map(|t| t.tag.as_str()).collect();
        assert_eq!(tags, ["PRP", "NNC", "VFM", "FS"]);
    }

    #[test]
    fn load_missing_file() {
        let err = LexiconTagger::load(Path::new("/nonexistent/pos.txt")).unwrap_err();
        assert!(matches!(err, ResourceError::Io { .. }));
    }
}
