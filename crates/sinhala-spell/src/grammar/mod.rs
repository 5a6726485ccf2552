// Subject-verb agreement checking over subject-object-verb clauses
//
// A sentence moves through RECEIVED -> TAGGED -> ORDER_CHECKED ->
// AGREEMENT_CHECKED and ends as a `GrammarOutcome`: correct, corrected, or
// rejected at one of the earlier stages.
//
//   - `order`: clause order validation and verb slot selection
//   - `agreement`: subject -> required verb suffix table
//   - `checker`: the state machine over the analysis collaborators

pub mod agreement;
pub mod checker;
pub mod order;

pub use agreement::SuffixTable;
pub use checker::SovGrammarChecker;

use serde::{Deserialize, Serialize};
use sinhala_core::grammar_report::GrammarReport;

/// Trait for grammar checkers.
pub trait GrammarChecker {
    /// Check one sentence and report its outcome.
    fn check(&self, sentence: &str) -> GrammarReport;
}

/// Which token of a tagged sentence is taken as the verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerbSlot {
    /// The last non-punctuation token, i.e. the word before the terminator.
    #[default]
    LastWord,
    /// Always the third token.
    Third,
    /// The first token with a verb tag.
    FirstVerb,
}

/// Options of the grammar engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GrammarOptions {
    /// Reject clauses whose second token is not tagged as an object
    /// (common noun, verbal noun or adjective).
    pub strict_object_check: bool,
    pub verb_slot: VerbSlot,
}
