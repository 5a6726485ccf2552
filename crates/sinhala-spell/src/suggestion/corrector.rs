// Correction engine: ranks dictionary words as corrections for a word

use sinhala_core::candidate::Candidate;
use sinhala_core::character::char_prefix;

use crate::config::ScoringWeights;
use crate::lexicon::Lexicon;
use crate::phonetic::PhoneticEncoder;
use crate::similarity::{edit_similarity, ratio, sequence_ratio, token_sort_key, token_sort_ratio};
use crate::suggestion::ranking::TopCandidates;
use crate::suggestion::variations::PrefixVariations;

/// Number of leading characters compared by the prefix metric.
const PREFIX_CHARS: usize = 3;

/// The prefix metric is halved before weighting.
const PREFIX_FACTOR: f64 = 0.5;

/// Everything the fuzzy metrics need about one side of a comparison.
#[derive(Debug, Clone)]
struct ScoringKey {
    stem: String,
    stem_chars: Vec<char>,
    phonetic: Vec<char>,
    head: Vec<char>,
    token_key: Vec<char>,
}

impl ScoringKey {
    fn new(word: &str, lexicon: &Lexicon, encoder: &PhoneticEncoder) -> Self {
        let stem = lexicon.stemmer().stem(word);
        Self {
            stem: stem.to_string(),
            stem_chars: stem.chars().collect(),
            phonetic: encoder.encode_chars(stem),
            head: char_prefix(word, PREFIX_CHARS).chars().collect(),
            token_key: token_sort_key(stem),
        }
    }
}

/// Finds and ranks corrections for out-of-vocabulary words.
///
/// Dictionary-side keys (stems, phonetic keys, prefixes) are computed once
/// when the lexicon is installed; a lookup only computes keys for the input
/// word's variations.
#[derive(Debug, Clone)]
pub struct Corrector {
    lexicon: Lexicon,
    encoder: PhoneticEncoder,
    variations: PrefixVariations,
    weights: ScoringWeights,
    index: Vec<ScoringKey>,
}

impl Corrector {
    /// Create a corrector with the default phonetic table and prefix
    /// variations.
    pub fn new(lexicon: Lexicon, weights: ScoringWeights) -> Self {
        Self::with_components(
            lexicon,
            PhoneticEncoder::default(),
            PrefixVariations::default(),
            weights,
        )
    }

    pub fn with_components(
        lexicon: Lexicon,
        encoder: PhoneticEncoder,
        variations: PrefixVariations,
        weights: ScoringWeights,
    ) -> Self {
        let index = build_index(&lexicon, &encoder);
        Self {
            lexicon,
            encoder,
            variations,
            weights,
            index,
        }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Replace the lexical resources and rebuild the dictionary index.
    pub fn set_lexicon(&mut self, lexicon: Lexicon) {
        self.index = build_index(&lexicon, &self.encoder);
        self.lexicon = lexicon;
    }

    pub fn set_weights(&mut self, weights: ScoringWeights) {
        self.weights = weights;
    }

    /// Whether `word` is accepted as is (stopword or dictionary word).
    pub fn is_correct(&self, word: &str) -> bool {
        !self.lexicon.dictionary().is_empty() && self.lexicon.is_known(word)
    }

    /// Rank corrections for `word`, best first, at most `limit` of them.
    ///
    /// A stopword or dictionary word yields itself with full confidence. So
    /// does the first prefix variation found in the dictionary, and the
    /// word's stem if it is a dictionary word. Otherwise every dictionary
    /// word is scored against every variation and those scoring at least
    /// `threshold` are kept. Equal scores keep dictionary order.
    pub fn find_corrections(&self, word: &str, limit: usize, threshold: f64) -> Vec<Candidate> {
        let dictionary = self.lexicon.dictionary();
        if limit == 0 || dictionary.is_empty() {
            return Vec::new();
        }
        if self.lexicon.is_known(word) {
            log::trace!("accepted as known word: {word}");
            return vec![Candidate::exact(word)];
        }

        let variations = self.variations.generate(word);
        if let Some(v) = variations.iter().find(|v| dictionary.contains(v)) {
            log::trace!("accepted prefix variation {v} for {word}");
            return vec![Candidate::exact(v.as_str())];
        }

        let stem = self.lexicon.stemmer().stem(word);
        if dictionary.contains(stem) {
            log::trace!("accepted stem {stem} for {word}");
            return vec![Candidate::exact(stem)];
        }

        let keys: Vec<ScoringKey> = variations
            .iter()
            .map(|v| ScoringKey::new(v, &self.lexicon, &self.encoder))
            .collect();

        let mut top = TopCandidates::new(limit);
        for (position, (entry, candidate)) in self.index.iter().zip(dictionary.iter()).enumerate() {
            let best = keys
                .iter()
                .map(|key| self.score(key, entry))
                .fold(f64::NEG_INFINITY, f64::max);
            if best >= threshold {
                top.offer(best, position, candidate);
            }
        }

        top.into_sorted()
            .into_iter()
            .map(|(w, score)| Candidate::new(w, score))
            .collect()
    }

    /// The highest ranked correction, if any.
    pub fn best_correction(&self, word: &str, threshold: f64) -> Option<Candidate> {
        self.find_corrections(word, 1, threshold).into_iter().next()
    }

    /// Replace every whitespace-separated word by its best correction; words
    /// without one are kept. Output words are joined by single spaces.
    pub fn auto_correct(&self, text: &str, threshold: f64) -> String {
        text.split_whitespace()
            .map(|word| match self.best_correction(word, threshold) {
                Some(c) => c.word,
                None => word.to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Candidates for each distinct word of `text` that is not already
    /// correct and has at least one candidate, in order of first occurrence.
    pub fn spell_check(
        &self,
        text: &str,
        limit: usize,
        threshold: f64,
    ) -> Vec<(String, Vec<Candidate>)> {
        let mut out: Vec<(String, Vec<Candidate>)> = Vec::new();
        for word in text.split_whitespace() {
            if self.is_correct(word) || out.iter().any(|(w, _)| w == word) {
                continue;
            }
            let candidates = self.find_corrections(word, limit, threshold);
            if !candidates.is_empty() {
                out.push((word.to_string(), candidates));
            }
        }
        out
    }

    fn score(&self, a: &ScoringKey, b: &ScoringKey) -> f64 {
        let w = &self.weights;
        w.phonetic * ratio(&a.phonetic, &b.phonetic)
            + w.string * edit_similarity(&a.stem, &b.stem)
            + w.token_order * token_sort_ratio(&a.token_key, &b.token_key)
            + w.sequence * sequence_ratio(&a.stem_chars, &b.stem_chars)
            + w.prefix * ratio(&a.head, &b.head) * PREFIX_FACTOR
    }
}

fn build_index(lexicon: &Lexicon, encoder: &PhoneticEncoder) -> Vec<ScoringKey> {
    lexicon
        .dictionary()
        .iter()
        .map(|w| ScoringKey::new(w, lexicon, encoder))
        .collect()
}
