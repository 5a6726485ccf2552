// Token types exchanged with the tokenizer, tagger and morphological splitter

use serde::{Deserialize, Serialize};

use crate::tagset;

/// A token with its part-of-speech tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedToken {
    pub text: String,
    pub tag: String,
}

impl TaggedToken {
    pub fn new(text: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tag: tag.into(),
        }
    }

    pub fn is_pronoun(&self) -> bool {
        tagset::is_pronoun_tag(&self.tag)
    }

    pub fn is_verb(&self) -> bool {
        tagset::is_verb_tag(&self.tag)
    }
}

impl From<(String, String)> for TaggedToken {
    fn from((text, tag): (String, String)) -> Self {
        Self { text, tag }
    }
}

impl From<(&str, &str)> for TaggedToken {
    fn from((text, tag): (&str, &str)) -> Self {
        Self::new(text, tag)
    }
}

/// Result of splitting a word into a base and a trailing affix.
///
/// A word the splitter cannot decompose is its own base with an empty affix
/// (see [`MorphSplit::unsplit`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MorphSplit {
    pub base: String,
    pub affix: String,
}

impl MorphSplit {
    pub fn new(base: impl Into<String>, affix: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            affix: affix.into(),
        }
    }

    /// The split used when no affix was recognized.
    pub fn unsplit(word: &str) -> Self {
        Self::new(word, "")
    }

    /// Rebuild a word from this base and a different affix.
    pub fn with_affix(&self, affix: &str) -> String {
        let mut word = String::with_capacity(self.base.len() + affix.len());
        word.push_str(&self.base);
        word.push_str(affix);
        word
    }
}
