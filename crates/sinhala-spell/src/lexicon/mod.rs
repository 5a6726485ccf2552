// Lexical resources: dictionary, stopwords, suffix rules and stem table.
//
// Built once, read-only afterwards. A reload builds a complete new
// `Lexicon` and swaps it in (see `SinhalaHandle::reload`).

pub mod loader;

use std::path::Path;

use hashbrown::{HashMap, HashSet};
use sinhala_core::character::normalize_word;

use crate::config::ResourceConfig;
use crate::error::ResourceError;
use crate::stemmer::Stemmer;

/// The set of correctly spelled words.
///
/// Entries are normalized (lowercased, restricted to the Sinhala block) and
/// unique. Iteration follows insertion order, first occurrence wins, so
/// candidate ranking is reproducible across loads of the same file.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Vec<String>,
    index: HashSet<String>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a dictionary from raw entries. Entries that normalize to the
    /// empty string are dropped.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dict = Self::new();
        for w in words {
            dict.insert(w.as_ref());
        }
        dict
    }

    /// Insert a raw entry. Returns `false` if it was empty after
    /// normalization or already present.
    fn insert(&mut self, raw: &str) -> bool {
        let word = normalize_word(raw);
        if word.is_empty() || self.index.contains(&word) {
            return false;
        }
        self.index.insert(word.clone());
        self.words.push(word);
        true
    }

    pub fn contains(&self, word: &str) -> bool {
        self.index.contains(word)
    }

    /// Words in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Text of each resource, for building a [`Lexicon`] without touching the
/// filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconSources<'a> {
    pub dictionary: &'a str,
    pub stopwords: &'a str,
    pub suffixes: &'a str,
    pub stem_dictionary: &'a str,
}

/// All lexical resources used by the correction engine.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    dictionary: Dictionary,
    stopwords: HashSet<String>,
    suffix_rules: Vec<String>,
    stems: HashMap<String, String>,
}

impl Lexicon {
    pub fn new(
        dictionary: Dictionary,
        stopwords: HashSet<String>,
        suffix_rules: Vec<String>,
        stems: HashMap<String, String>,
    ) -> Self {
        Self {
            dictionary,
            stopwords,
            suffix_rules,
            stems,
        }
    }

    pub fn builder() -> LexiconBuilder {
        LexiconBuilder::default()
    }

    /// Load every resource named in `config`. Any missing or malformed file
    /// is an error.
    pub fn load(config: &ResourceConfig) -> Result<Self, ResourceError> {
        let dictionary = read_resource(&config.dictionary_path)?;
        let stopwords = read_resource(&config.stopwords_path)?;
        let suffixes = read_resource(&config.suffixes_path)?;
        let stem_dictionary = read_resource(&config.stem_dictionary_path)?;
        let lexicon = Self::from_sources_named(
            &LexiconSources {
                dictionary: &dictionary,
                stopwords: &stopwords,
                suffixes: &suffixes,
                stem_dictionary: &stem_dictionary,
            },
            &display_name(&config.dictionary_path),
            &display_name(&config.stem_dictionary_path),
        )?;
        log::debug!(
            "loaded lexicon: {} words, {} stopwords, {} suffix rules, {} stems",
            lexicon.dictionary.len(),
            lexicon.stopwords.len(),
            lexicon.suffix_rules.len(),
            lexicon.stems.len()
        );
        Ok(lexicon)
    }

    /// Build a lexicon from in-memory resource text.
    pub fn from_sources(sources: &LexiconSources<'_>) -> Result<Self, ResourceError> {
        Self::from_sources_named(sources, "dictionary", "stem dictionary")
    }

    fn from_sources_named(
        sources: &LexiconSources<'_>,
        dictionary_name: &str,
        stems_name: &str,
    ) -> Result<Self, ResourceError> {
        let words = loader::parse_word_list(sources.dictionary, dictionary_name)?;
        let stems = loader::parse_tab_table(sources.stem_dictionary, stems_name, "word<TAB>stem")?;
        Ok(Self {
            dictionary: Dictionary::from_words(words),
            stopwords: loader::parse_lines(sources.stopwords).into_iter().collect(),
            suffix_rules: loader::parse_lines(sources.suffixes),
            stems,
        })
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    /// Whether `word` needs no correction: a stopword or a dictionary word.
    pub fn is_known(&self, word: &str) -> bool {
        self.is_stopword(word) || self.dictionary.contains(word)
    }

    pub fn suffix_rules(&self) -> &[String] {
        &self.suffix_rules
    }

    pub fn stems(&self) -> &HashMap<String, String> {
        &self.stems
    }

    /// A stemmer over this lexicon's stem table and suffix rules.
    pub fn stemmer(&self) -> Stemmer<'_> {
        Stemmer::new(&self.stems, &self.suffix_rules)
    }
}

fn read_resource(path: &Path) -> Result<String, ResourceError> {
    std::fs::read_to_string(path).map_err(|source| ResourceError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Incremental construction of a [`Lexicon`].
#[derive(Debug, Default)]
pub struct LexiconBuilder {
    words: Vec<String>,
    stopwords: HashSet<String>,
    suffix_rules: Vec<String>,
    stems: HashMap<String, String>,
}

impl LexiconBuilder {
    pub fn words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.words.extend(words.into_iter().map(Into::into));
        self
    }

    pub fn stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stopwords.extend(words.into_iter().map(Into::into));
        self
    }

    /// Append suffix rules; earlier rules take precedence.
    pub fn suffixes<I, S>(mut self, suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.suffix_rules.extend(suffixes.into_iter().map(Into::into));
        self
    }

    pub fn stem(mut self, word: impl Into<String>, stem: impl Into<String>) -> Self {
        self.stems.insert(word.into(), stem.into());
        self
    }

    pub fn build(self) -> Lexicon {
        Lexicon::new(
            Dictionary::from_words(self.words),
            self.stopwords,
            self.suffix_rules,
            self.stems,
        )
    }
}
