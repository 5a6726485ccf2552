// sinhala-core: shared types for the Sinhala spelling and grammar tools.
//
// Nothing in this crate touches the filesystem; it holds the vocabulary
// (characters, tags, tokens, candidates, grammar reports) that the engine
// crate and the command-line tools exchange.

pub mod candidate;
pub mod character;
pub mod grammar_report;
pub mod tagset;
pub mod token;
