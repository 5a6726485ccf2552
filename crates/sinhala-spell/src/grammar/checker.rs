// SovGrammarChecker: subject-verb agreement over tagged SOV clauses.
//
// Tagging goes through the `Tokenizer` and `Tagger` traits and verb splitting
// through `Splitter`, so the checker itself is pure rule logic.

use sinhala_core::character::{DEFAULT_TERMINATOR, is_sentence_terminator};
use sinhala_core::grammar_report::{AgreementError, GrammarOutcome, GrammarReport, Rejection};
use sinhala_core::token::{MorphSplit, TaggedToken};

use super::agreement::SuffixTable;
use super::order::check_order;
use super::{GrammarChecker, GrammarOptions};
use crate::analysis::{
    AffixSplitter, LexiconTagger, SimpleTokenizer, Splitter, Tagger, Tokenizer,
};

/// Grammar checker for simple subject-object-verb sentences.
pub struct SovGrammarChecker {
    tokenizer: Box<dyn Tokenizer>,
    tagger: Box<dyn Tagger>,
    splitter: Box<dyn Splitter>,
    suffixes: SuffixTable,
    options: GrammarOptions,
}

impl SovGrammarChecker {
    pub fn new(
        tokenizer: Box<dyn Tokenizer>,
        tagger: Box<dyn Tagger>,
        splitter: Box<dyn Splitter>,
        options: GrammarOptions,
    ) -> Self {
        Self {
            tokenizer,
            tagger,
            splitter,
            suffixes: SuffixTable::default(),
            options,
        }
    }

    /// A checker built from the rule-based collaborators.
    pub fn rule_based(tagger: LexiconTagger, options: GrammarOptions) -> Self {
        Self::new(
            Box::new(SimpleTokenizer::new()),
            Box::new(tagger),
            Box::new(AffixSplitter::default()),
            options,
        )
    }

    pub fn with_suffix_table(mut self, suffixes: SuffixTable) -> Self {
        self.suffixes = suffixes;
        self
    }

    pub fn options(&self) -> &GrammarOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: GrammarOptions) {
        self.options = options;
    }

    pub fn set_tagger(&mut self, tagger: Box<dyn Tagger>) {
        self.tagger = tagger;
    }

    /// Split `text` into sentences, tokenize each with a terminator appended
    /// and tag them all in one batch.
    pub fn tag_text(&self, text: &str) -> Vec<Vec<TaggedToken>> {
        let tokenized: Vec<Vec<String>> = self
            .tokenizer
            .split_sentences(text)
            .iter()
            .map(|s| self.tokenizer.tokenize(&format!("{s}{DEFAULT_TERMINATOR}")))
            .collect();
        if tokenized.is_empty() {
            return Vec::new();
        }
        self.tagger.predict(&tokenized)
    }

    fn check_agreement(&self, tokens: &[TaggedToken], verb_idx: usize) -> GrammarOutcome {
        let Some(subject) = tokens.iter().find(|t| t.is_pronoun()) else {
            return GrammarOutcome::Rejected(Rejection::MissingSubjectOrVerb);
        };
        let verb = &tokens[verb_idx].text;
        let Some(required) = self.suffixes.required_suffix(&subject.text) else {
            log::debug!("AGREEMENT_CHECKED: no rule for subject {}", subject.text);
            return GrammarOutcome::Correct;
        };
        let split = self
            .splitter
            .split(verb)
            .unwrap_or_else(|| MorphSplit::unsplit(verb));
        if split.affix == required {
            log::debug!("AGREEMENT_CHECKED: {verb} agrees with {}", subject.text);
            return GrammarOutcome::Correct;
        }

        let corrected_verb = split.with_affix(required);
        let corrected_sentence = tokens
            .iter()
            .enumerate()
            .filter(|(i, t)| !(i + 1 == tokens.len() && is_terminator_token(t)))
            .map(|(i, t)| {
                if i == verb_idx {
                    corrected_verb.as_str()
                } else {
                    t.text.as_str()
                }
            })
            .collect::<Vec<_>>()
            .join(" ");
        log::debug!("AGREEMENT_CHECKED: {verb} corrected to {corrected_verb}");
        GrammarOutcome::Corrected {
            error: AgreementError {
                subject: subject.text.clone(),
                verb: verb.clone(),
                verb_base: split.base,
                affix: split.affix,
                required_suffix: required.to_string(),
                corrected_verb,
            },
            corrected_sentence,
        }
    }
}

fn is_terminator_token(token: &TaggedToken) -> bool {
    !token.text.is_empty() && token.text.chars().all(is_sentence_terminator)
}

impl GrammarChecker for SovGrammarChecker {
    fn check(&self, sentence: &str) -> GrammarReport {
        log::debug!("RECEIVED: {sentence}");
        let Some(tokens) = self
            .tag_text(sentence)
            .into_iter()
            .next()
            .filter(|t| !t.is_empty())
        else {
            log::debug!("REJECTED at RECEIVED: no tags");
            return GrammarReport::rejected(sentence, Rejection::UnableToAnalyze);
        };
        log::debug!("TAGGED: {} tokens", tokens.len());

        let verb_idx = match check_order(&tokens, &self.options) {
            Ok(i) => i,
            Err(rejection) => {
                log::debug!("REJECTED at TAGGED: {rejection}");
                return GrammarReport::rejected(sentence, rejection);
            }
        };
        log::debug!("ORDER_CHECKED: verb '{}'", tokens[verb_idx].text);

        GrammarReport::new(sentence, self.check_agreement(&tokens, verb_idx))
    }
}
