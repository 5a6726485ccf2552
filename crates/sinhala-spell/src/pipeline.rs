// Text pipeline: spelling correction followed by grammar checking.
//
// The detected subject and verb of every sentence are protected from
// spelling correction so the grammar engine sees them as written.

use hashbrown::HashSet;
use serde::{Deserialize, Serialize};
use sinhala_core::character::{is_punctuation, is_sentence_terminator};
use sinhala_core::grammar_report::{GrammarReport, Rejection};

use crate::grammar::{GrammarChecker, SovGrammarChecker};
use crate::suggestion::Corrector;

/// Minimum number of whitespace-separated words of a processable input.
pub const MIN_WORDS: usize = 3;

/// Result of processing a whole input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ProcessOutcome {
    /// The input could not be processed at all.
    Rejected(Rejection),
    /// Spelling was corrected and every sentence was grammar checked.
    Checked {
        corrected_text: String,
        reports: Vec<GrammarReport>,
    },
}

impl ProcessOutcome {
    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            ProcessOutcome::Rejected(r) => Some(*r),
            ProcessOutcome::Checked { .. } => None,
        }
    }

    pub fn corrected_text(&self) -> Option<&str> {
        match self {
            ProcessOutcome::Checked { corrected_text, .. } => Some(corrected_text),
            ProcessOutcome::Rejected(_) => None,
        }
    }

    pub fn reports(&self) -> &[GrammarReport] {
        match self {
            ProcessOutcome::Checked { reports, .. } => reports,
            ProcessOutcome::Rejected(_) => &[],
        }
    }
}

/// Runs the correction engine and the grammar engine over an input.
///
/// A borrowed view; [`crate::SinhalaHandle::process_text`] creates one per
/// call.
#[derive(Clone, Copy)]
pub struct TextProcessor<'a> {
    corrector: &'a Corrector,
    checker: &'a SovGrammarChecker,
    threshold: f64,
}

impl<'a> TextProcessor<'a> {
    pub fn new(corrector: &'a Corrector, checker: &'a SovGrammarChecker, threshold: f64) -> Self {
        Self {
            corrector,
            checker,
            threshold,
        }
    }

    pub fn process(&self, text: &str) -> ProcessOutcome {
        let words: Vec<&str> = text.split_whitespace().collect();
        if words.len() < MIN_WORDS {
            return ProcessOutcome::Rejected(Rejection::TooShort);
        }

        let tagged = self.checker.tag_text(text);
        if tagged.first().is_none_or(Vec::is_empty) {
            return ProcessOutcome::Rejected(Rejection::UnableToAnalyze);
        }

        let mut protected: HashSet<&str> = HashSet::new();
        for (idx, sentence) in tagged.iter().enumerate() {
            let subject = sentence.iter().find(|t| t.is_pronoun());
            let verb = sentence.iter().find(|t| t.is_verb());
            if idx == 0 && (subject.is_none() || verb.is_none()) {
                return ProcessOutcome::Rejected(Rejection::MissingSubjectOrVerb);
            }
            protected.extend(subject.into_iter().chain(verb).map(|t| t.text.as_str()));
        }
        log::debug!("protected words: {protected:?}");

        let corrected_text = words
            .iter()
            .map(|w| self.correct_word(w, &protected))
            .collect::<Vec<_>>()
            .join(" ");
        log::debug!("corrected text: {corrected_text}");

        let reports = corrected_text
            .split(is_sentence_terminator)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| self.checker.check(s))
            .collect();

        ProcessOutcome::Checked {
            corrected_text,
            reports,
        }
    }

    /// Correct each terminator-separated piece of `word` on its own, keeping
    /// the terminators in place.
    fn correct_word(&self, word: &str, protected: &HashSet<&str>) -> String {
        let mut out = String::with_capacity(word.len());
        let mut rest = word;
        while !rest.is_empty() {
            let end = rest.find(is_sentence_terminator).unwrap_or(rest.len());
            let (piece, tail) = rest.split_at(end);
            out.push_str(&self.correct_piece(piece, protected));
            let run = tail
                .find(|c: char| !is_sentence_terminator(c))
                .unwrap_or(tail.len());
            out.push_str(&tail[..run]);
            rest = &tail[run..];
        }
        out
    }

    /// Correct the word inside `piece`, keeping surrounding punctuation.
    fn correct_piece(&self, piece: &str, protected: &HashSet<&str>) -> String {
        let core = piece.trim_matches(is_punctuation);
        if core.is_empty() || protected.contains(core) {
            return piece.to_string();
        }
        let start = piece.len() - piece.trim_start_matches(is_punctuation).len();
        let end = start + core.len();
        let replacement = match self.corrector.best_correction(core, self.threshold) {
            Some(c) => c.word,
            None => core.to_string(),
        };
        format!("{}{replacement}{}", &piece[..start], &piece[end..])
    }
}
