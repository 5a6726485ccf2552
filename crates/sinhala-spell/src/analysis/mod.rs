// Linguistic collaborators used by the grammar engine and text pipeline.
//
// The engines only see the traits below. The implementations in this module
// are rule based and deterministic; a statistical tagger or a trained
// morphological splitter can be plugged in through the same traits.

pub mod splitter;
pub mod tagger;
pub mod tokenizer;

pub use splitter::AffixSplitter;
pub use tagger::LexiconTagger;
pub use tokenizer::SimpleTokenizer;

use sinhala_core::token::{MorphSplit, TaggedToken};

/// Splits text into sentences and sentences into tokens.
pub trait Tokenizer: Send + Sync {
    /// Split text into sentences. Terminators are not part of the returned
    /// sentences and empty sentences are dropped.
    fn split_sentences(&self, text: &str) -> Vec<String>;

    /// Split one sentence into word and punctuation tokens.
    fn tokenize(&self, sentence: &str) -> Vec<String>;
}

/// Part-of-speech tagger.
pub trait Tagger: Send + Sync {
    /// Tag a batch of tokenized sentences. The output has one tagged
    /// sentence per input sentence, one token per input token.
    fn predict(&self, sentences: &[Vec<String>]) -> Vec<Vec<TaggedToken>>;
}

/// Morphological splitter separating a verb into base and affix.
pub trait Splitter: Send + Sync {
    /// `None` when the word has no recognizable affix.
    fn split(&self, word: &str) -> Option<MorphSplit>;
}
