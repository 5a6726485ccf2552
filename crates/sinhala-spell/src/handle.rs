// SinhalaHandle: top-level integration point.
//
// Owns the correction engine, the grammar checker and all options, and
// provides one API for correction, spell checking, grammar checking and the
// full text pipeline.
//
// Design notes:
// - The pipeline is a borrowed view (`TextProcessor`) created per call.
// - Reloading takes `&mut self`. New resources are loaded completely before
//   anything is replaced, so a failed reload leaves the handle unchanged.

use sinhala_core::candidate::Candidate;
use sinhala_core::grammar_report::GrammarReport;

use crate::analysis::{LexiconTagger, Splitter, Tagger, Tokenizer};
use crate::config::{CorrectionOptions, ResourceConfig, ScoringWeights, SinhalaConfig};
use crate::error::SinhalaError;
use crate::grammar::{GrammarChecker, GrammarOptions, SovGrammarChecker};
use crate::lexicon::Lexicon;
use crate::pipeline::{ProcessOutcome, TextProcessor};
use crate::suggestion::Corrector;

/// Top-level handle owning every engine.
pub struct SinhalaHandle {
    corrector: Corrector,
    checker: SovGrammarChecker,
    correction: CorrectionOptions,
}

impl SinhalaHandle {
    /// Load all resources named in `config` and apply its options.
    pub fn from_config(config: &SinhalaConfig) -> Result<Self, SinhalaError> {
        config.correction.validate()?;
        let lexicon = Lexicon::load(&config.resources)?;
        let tagger = load_tagger(&config.resources)?;
        Ok(Self::assemble(
            lexicon,
            SovGrammarChecker::rule_based(tagger, config.grammar),
            config.correction,
        ))
    }

    /// Load resources with default options.
    pub fn from_resources(resources: &ResourceConfig) -> Result<Self, SinhalaError> {
        Self::from_config(&SinhalaConfig::new(resources.clone()))
    }

    /// A handle over an in-memory lexicon with the rule-based collaborators
    /// and default options.
    pub fn from_lexicon(lexicon: Lexicon) -> Self {
        Self::assemble(
            lexicon,
            SovGrammarChecker::rule_based(LexiconTagger::new(), GrammarOptions::default()),
            CorrectionOptions::default(),
        )
    }

    /// A handle using custom analysis collaborators.
    pub fn with_analysis(
        lexicon: Lexicon,
        tokenizer: Box<dyn Tokenizer>,
        tagger: Box<dyn Tagger>,
        splitter: Box<dyn Splitter>,
    ) -> Self {
        Self::assemble(
            lexicon,
            SovGrammarChecker::new(tokenizer, tagger, splitter, GrammarOptions::default()),
            CorrectionOptions::default(),
        )
    }

    fn assemble(
        lexicon: Lexicon,
        checker: SovGrammarChecker,
        correction: CorrectionOptions,
    ) -> Self {
        Self {
            corrector: Corrector::new(lexicon, correction.weights),
            checker,
            correction,
        }
    }

    /// Replace the lexical resources and the tagger built from them.
    ///
    /// Without a POS lexicon the tagger falls back to the built-in rules,
    /// matching [`SinhalaHandle::from_resources`]. On error the current
    /// resources stay in place.
    pub fn reload(&mut self, resources: &ResourceConfig) -> Result<(), SinhalaError> {
        let lexicon = Lexicon::load(resources)?;
        let tagger = load_tagger(resources)?;
        self.corrector.set_lexicon(lexicon);
        self.checker.set_tagger(Box::new(tagger));
        log::debug!("reloaded resources");
        Ok(())
    }

    pub fn lexicon(&self) -> &Lexicon {
        self.corrector.lexicon()
    }

    pub fn correction_options(&self) -> &CorrectionOptions {
        &self.correction
    }

    pub fn grammar_options(&self) -> &GrammarOptions {
        self.checker.options()
    }

    // -- Option setters --

    pub fn set_limit(&mut self, limit: usize) {
        self.correction.limit = limit;
    }

    /// Set the fuzzy score threshold, validated to lie in `[0, 100]`.
    pub fn set_threshold(&mut self, threshold: f64) -> Result<(), SinhalaError> {
        let options = CorrectionOptions {
            threshold,
            ..self.correction
        };
        options.validate()?;
        self.correction = options;
        Ok(())
    }

    pub fn set_weights(&mut self, weights: ScoringWeights) -> Result<(), SinhalaError> {
        weights.validate()?;
        self.correction.weights = weights;
        self.corrector.set_weights(weights);
        Ok(())
    }

    pub fn set_grammar_options(&mut self, options: GrammarOptions) {
        self.checker.set_options(options);
    }

    // -- Operations --

    /// Whether `word` needs no correction.
    pub fn is_correct(&self, word: &str) -> bool {
        self.corrector.is_correct(word)
    }

    /// Ranked corrections for `word` using the configured limit and
    /// threshold.
    pub fn find_corrections(&self, word: &str) -> Vec<Candidate> {
        self.corrector
            .find_corrections(word, self.correction.limit, self.correction.threshold)
    }

    pub fn auto_correct(&self, text: &str) -> String {
        self.corrector.auto_correct(text, self.correction.threshold)
    }

    pub fn spell_check(&self, text: &str) -> Vec<(String, Vec<Candidate>)> {
        self.corrector
            .spell_check(text, self.correction.limit, self.correction.threshold)
    }

    pub fn check_grammar(&self, sentence: &str) -> GrammarReport {
        self.checker.check(sentence)
    }

    pub fn process_text(&self, text: &str) -> ProcessOutcome {
        TextProcessor::new(&self.corrector, &self.checker, self.correction.threshold).process(text)
    }
}

fn load_tagger(resources: &ResourceConfig) -> Result<LexiconTagger, SinhalaError> {
    Ok(match &resources.pos_lexicon_path {
        Some(path) => LexiconTagger::load(path)?,
        None => LexiconTagger::new(),
    })
}
