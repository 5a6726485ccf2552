// Grammar check results: terminal outcomes of the SOV agreement check.
//
// Linguistic problems are values, not errors. A sentence either passes,
// gets a corrected verb, or is rejected with a fixed human-readable reason.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Why a sentence could not be checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rejection {
    /// Fewer than three tokens (or words).
    TooShort,
    /// The tagger produced no tags.
    UnableToAnalyze,
    /// Token 0 is not a pronoun or the verb slot is not a verb.
    NotSovOrder,
    /// No pronoun or no verb could be identified.
    MissingSubjectOrVerb,
}

impl Rejection {
    /// Human-readable reason.
    pub fn message(&self) -> &'static str {
        match self {
            Rejection::TooShort => {
                "Sentence too short. Please provide a sentence with Subject, Object, and Verb."
            }
            Rejection::UnableToAnalyze => "Unable to analyze the sentence.",
            Rejection::NotSovOrder => "Sentence does not follow SOV order.",
            Rejection::MissingSubjectOrVerb => "Sentence lacks a clear subject or verb.",
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// A subject-verb agreement violation and its repair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgreementError {
    pub subject: String,
    pub verb: String,
    pub verb_base: String,
    pub affix: String,
    pub required_suffix: String,
    pub corrected_verb: String,
}

impl AgreementError {
    /// Diagnostic naming the verb, its base and affix, and the suffix the
    /// subject requires.
    pub fn diagnostic(&self) -> String {
        format!(
            "Grammar error: Verb '{}' (base: {}, affix: {}) should end with '{}' when subject is '{}'",
            self.verb, self.verb_base, self.affix, self.required_suffix, self.subject
        )
    }
}

/// Terminal outcome of checking one sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GrammarOutcome {
    /// No rule applies, or the verb already agrees with the subject.
    Correct,
    /// The verb was repaired.
    Corrected {
        error: AgreementError,
        corrected_sentence: String,
    },
    /// The sentence could not be checked.
    Rejected(Rejection),
}

impl GrammarOutcome {
    pub fn is_correct(&self) -> bool {
        matches!(self, GrammarOutcome::Correct)
    }

    pub fn is_corrected(&self) -> bool {
        matches!(self, GrammarOutcome::Corrected { .. })
    }

    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            GrammarOutcome::Rejected(r) => Some(*r),
            _ => None,
        }
    }
}

impl fmt::Display for GrammarOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GrammarOutcome::Correct => f.write_str("The sentence is grammatically correct."),
            GrammarOutcome::Corrected {
                error,
                corrected_sentence,
            } => write!(
                f,
                "{}\nSuggested correction: {}",
                error.diagnostic(),
                corrected_sentence
            ),
            GrammarOutcome::Rejected(r) => f.write_str(r.message()),
        }
    }
}

/// Grammar outcome for one sentence, together with the sentence checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrammarReport {
    pub sentence: String,
    pub outcome: GrammarOutcome,
}

impl GrammarReport {
    pub fn new(sentence: impl Into<String>, outcome: GrammarOutcome) -> Self {
        Self {
            sentence: sentence.into(),
            outcome,
        }
    }

    pub fn rejected(sentence: impl Into<String>, rejection: Rejection) -> Self {
        Self::new(sentence, GrammarOutcome::Rejected(rejection))
    }

    /// The repaired verb, if the outcome is a correction.
    pub fn corrected_verb(&self) -> Option<&str> {
        match &self.outcome {
            GrammarOutcome::Corrected { error, .. } => Some(&error.corrected_verb),
            _ => None,
        }
    }

    /// The repaired sentence, if the outcome is a correction.
    pub fn corrected_sentence(&self) -> Option<&str> {
        match &self.outcome {
            GrammarOutcome::Corrected {
                corrected_sentence, ..
            } => Some(corrected_sentence),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_error() -> AgreementError {
        AgreementError {
            subject: "මම".to_string(),
            verb: "යනයි".to_string(),
            verb_base: "යන".to_string(),
            affix: "යි".to_string(),
            required_suffix: "මි".to_string(),
            corrected_verb: "යනමි".to_string(),
        }
    }

    #[test]
    fn too_short_message_prefix() {
        assert!(Rejection::TooShort.to_string().starts_with("Sentence too short."));
    }

    #[test]
    fn diagnostic_names_every_part() {
        let d = sample_error().diagnostic();
        assert!(d.contains("'යනයි'"));
        assert!(d.contains("base: යන"));
        assert!(d.contains("affix: යි"));
        assert!(d.contains("'මි'"));
        assert!(d.contains("'මම'"));
    }

    #[test]
    fn corrected_outcome_display() {
        let outcome = GrammarOutcome::Corrected {
            error: sample_error(),
            corrected_sentence: "මම ගෙදර යනමි".to_string(),
        };
        let text = outcome.to_string();
        assert!(text.starts_with("Grammar error:"));
        assert!(text.ends_with("Suggested correction: මම ගෙදර යනමි"));
        assert!(outcome.is_corrected());
        assert_eq!(outcome.rejection(), None);
    }

    #[test]
    fn report_accessors() {
        let report = GrammarReport::new(
            "මම ගෙදර යනයි",
            GrammarOutcome::Corrected {
                error: sample_error(),
                corrected_sentence: "මම ගෙදර යනමි".to_string(),
            },
        );
        assert_eq!(report.corrected_verb(), Some("යනමි"));
        assert_eq!(report.corrected_sentence(), Some("මම ගෙදර යනමි"));

        let rejected = GrammarReport::rejected("මම", Rejection::TooShort);
        assert_eq!(rejected.corrected_verb(), None);
        assert_eq!(rejected.outcome.rejection(), Some(Rejection::TooShort));
        assert_eq!(
            GrammarOutcome::Correct.to_string(),
            "The sentence is grammatically correct."
        );
    }
}
