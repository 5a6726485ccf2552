// Clause order validation

use sinhala_core::character::is_punctuation;
use sinhala_core::grammar_report::Rejection;
use sinhala_core::tagset::{is_object_tag, is_punctuation_tag};
use sinhala_core::token::TaggedToken;

use super::{GrammarOptions, VerbSlot};

/// Minimum number of tokens, terminator included, of a checkable sentence.
pub const MIN_TOKENS: usize = 3;

/// Position of the subject in an SOV clause.
pub const SUBJECT_INDEX: usize = 0;

/// Position of the object in an SOV clause.
pub const OBJECT_INDEX: usize = 1;

fn is_punctuation_token(token: &TaggedToken) -> bool {
    is_punctuation_tag(&token.tag)
        || (!token.text.is_empty() && token.text.chars().all(is_punctuation))
}

/// Index of the verb slot under `slot`, if the sentence has one.
pub fn verb_index(tokens: &[TaggedToken], slot: VerbSlot) -> Option<usize> {
    match slot {
        VerbSlot::LastWord => tokens.iter().rposition(|t| !is_punctuation_token(t)),
        VerbSlot::Third => (tokens.len() > 2).then_some(2),
        VerbSlot::FirstVerb => tokens.iter().position(TaggedToken::is_verb),
    }
}

/// Validate clause order and return the index of the verb.
///
/// The subject must be tagged as a pronoun and the verb slot as a verb.
/// The object slot is only enforced with `strict_object_check`.
pub fn check_order(tokens: &[TaggedToken], options: &GrammarOptions) -> Result<usize, Rejection> {
    if tokens.len() < MIN_TOKENS {
        return Err(Rejection::TooShort);
    }
    if !tokens[SUBJECT_INDEX].is_pronoun() {
        return Err(Rejection::NotSovOrder);
    }
    let verb = verb_index(tokens, options.verb_slot)
        .filter(|&i| i > SUBJECT_INDEX && tokens[i].is_verb())
        .ok_or(Rejection::NotSovOrder)?;
    if options.strict_object_check && !is_object_tag(&tokens[OBJECT_INDEX].tag) {
        return Err(Rejection::NotSovOrder);
    }
    Ok(verb)
}
