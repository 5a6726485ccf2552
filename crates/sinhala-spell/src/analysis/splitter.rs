// Verb affix splitter

use sinhala_core::token::MorphSplit;

use super::Splitter;

/// Verb endings recognized by default, longest first so that a longer
/// ending is never shadowed by one of its own suffixes.
pub const DEFAULT_VERB_AFFIXES: &[&str] = &[
    "න්නෙමු", "න්නෙමි", "න්නේය", "නවා", "මු", "මි", "යි", "හි", "හු", "ති", "ත්",
];

/// Splits a word at the first listed affix it ends with, provided a
/// non-empty base remains.
#[derive(Debug, Clone)]
pub struct AffixSplitter {
    affixes: Vec<String>,
}

impl AffixSplitter {
    /// Affixes are tried in the given order.
    pub fn new<I, S>(affixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            affixes: affixes
                .into_iter()
                .map(Into::into)
                .filter(|a: &String| !a.is_empty())
                .collect(),
        }
    }
}

impl Default for AffixSplitter {
    fn default() -> Self {
        Self::new(DEFAULT_VERB_AFFIXES.iter().copied())
    }
}

impl Splitter for AffixSplitter {
    fn split(&self, word: &str) -> Option<MorphSplit> {
        self.affixes.iter().find_map(|affix| {
            word.strip_suffix(affix.as_str())
                .filter(|base| !base.is_empty())
                .map(|base| MorphSplit::new(base, affix.as_str()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_common_endings() {
        let s = AffixSplitter::default();
        assert_eq!(s.split("යනයි"), Some(MorphSplit::new("යන", "යි")));
        assert_eq!(s.split("යමු"), Some(MorphSplit::new("ය", "මු")));
        assert_eq!(s.split("කන්නෙමි"), Some(MorphSplit::new("ක", "න්නෙමි")));
    }

    #[test]
    fn base_must_not_be_empty() {
        let s = AffixSplitter::default();
        assert_eq!(s.split("මි"), None);
    }

    #[test]
    fn unknown_ending_is_not_split() {
        let s = AffixSplitter::default();
        assert_eq!(s.split("ගෙදර"), None);
        assert_eq!(s.split(""), None);
    }

    #[test]
    fn order_decides_between_overlapping_affixes() {
        let s = AffixSplitter::new(["මි", "න්නෙමි"]);
        assert_eq!(s.split("කන්නෙමි"), Some(MorphSplit::new("කන්නෙ", "මි")));
    }
}
