//! End-to-end tests over the fixture resources in `tests/data`.
//!
//! Run: cargo test -p sinhala-spell --test end_to_end

use std::path::PathBuf;

use sinhala_core::candidate::Candidate;
use sinhala_core::grammar_report::{GrammarReport, Rejection};
use sinhala_spell::config::CONFIG_FILE;
use sinhala_spell::{SinhalaConfig, SinhalaHandle};

fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data")
}

fn create_handle() -> SinhalaHandle {
    let config = SinhalaConfig::from_json_file(data_dir().join(CONFIG_FILE))
        .unwrap_or_else(|e| panic!("failed to read fixture config: {e}"));
    SinhalaHandle::from_config(&config)
        .unwrap_or_else(|e| panic!("failed to create SinhalaHandle: {e}"))
}

fn load_golden(filename: &str) -> Vec<GrammarReport> {
    let path = data_dir().join(filename);
    let contents = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read golden file {}: {}", path.display(), e));
    serde_json::from_str(&contents)
        .unwrap_or_else(|e| panic!("failed to parse golden file {}: {}", path.display(), e))
}

// ---------------------------------------------------------------------------
// Correction
// ---------------------------------------------------------------------------

#[test]
fn config_options_are_applied() {
    let handle = create_handle();
    assert_eq!(handle.correction_options().limit, 3);
    assert_eq!(handle.lexicon().dictionary().len(), 9);
}

#[test]
fn known_words_are_accepted() {
    let handle = create_handle();
    for word in ["ගෙදර", "පාසල", "සහ", "හා"] {
        assert_eq!(handle.find_corrections(word), [Candidate::exact(word)], "{word}");
    }
}

#[test]
fn unlabelled_rows_are_not_words() {
    let handle = create_handle();
    assert!(!handle.is_correct("ගදර"));
}

#[test]
fn stem_table_and_suffix_rules() {
    let handle = create_handle();
    assert_eq!(handle.find_corrections("පොත්වලට"), [Candidate::exact("පොත")]);
    assert_eq!(
        handle.find_corrections("ගුරුවරයාගේ"),
        [Candidate::exact("ගුරුවරයා")]
    );
    assert_eq!(handle.find_corrections("වැවට"), [Candidate::exact("වැව")]);
}

#[test]
fn prefix_variation() {
    let handle = create_handle();
    assert_eq!(handle.find_corrections("අදරය"), [Candidate::exact("ආදරය")]);
}

#[test]
fn fuzzy_candidates_are_well_formed() {
    let handle = create_handle();
    let threshold = handle.correction_options().threshold;
    let candidates = handle.find_corrections("ගෙදරු");
    assert_eq!(candidates.first().map(|c| c.word.as_str()), Some("ගෙදර"));
    assert!(candidates.len() <= 3);
    for pair in candidates.windows(2) {
        assert!(pair[0].score >= pair[1].score);
        assert_ne!(pair[0].word, pair[1].word);
    }
    for c in &candidates {
        assert!((threshold..=100.0).contains(&c.score), "{c:?}");
    }
}

#[test]
fn auto_correct_and_idempotence() {
    let handle = create_handle();
    let once = handle.auto_correct("මම ගෙදරු  යනවා");
    assert_eq!(once, "මම ගෙදර යනවා");
    assert_eq!(handle.auto_correct(&once), once);
}

#[test]
fn spell_check_reports_misspellings() {
    let handle = create_handle();
    let report = handle.spell_check("ගෙදරු සහ පාසල");
    assert_eq!(report.len(), 1);
    assert_eq!(report[0].0, "ගෙදරු");
    assert_eq!(report[0].1[0].word, "ගෙදර");
}

// ---------------------------------------------------------------------------
// Grammar
// ---------------------------------------------------------------------------

#[test]
fn grammar_matches_golden() {
    let handle = create_handle();
    for expected in load_golden("grammar_cases.json") {
        let got = handle.check_grammar(&expected.sentence);
        assert_eq!(got, expected, "sentence: {:?}", expected.sentence);
    }
}

#[test]
fn corrected_report_renders_diagnostic() {
    let handle = create_handle();
    let text = handle.check_grammar("මම ගෙදර යනයි").outcome.to_string();
    assert_eq!(
        text,
        "Grammar error: Verb 'යනයි' (base: යන, affix: යි) should end with 'මි' when subject is 'මම'\n\
         Suggested correction: මම ගෙදර යනමි"
    );
}

// ---------------------------------------------------------------------------
// Pipeline
// ---------------------------------------------------------------------------

#[test]
fn process_text_end_to_end() {
    let handle = create_handle();
    let outcome = handle.process_text("මම ගෙදරු යනයි");
    assert_eq!(outcome.corrected_text(), Some("මම ගෙදර යනයි"));
    let reports = outcome.reports();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].corrected_verb(), Some("යනමි"));
}

#[test]
fn process_text_rejects_short_input() {
    let handle = create_handle();
    let outcome = handle.process_text("මම යමි");
    assert_eq!(outcome.rejection(), Some(Rejection::TooShort));
    assert!(
        Rejection::TooShort
            .to_string()
            .starts_with("Sentence too short.")
    );
}

#[test]
fn process_text_multiple_sentences() {
    let handle = create_handle();
    let outcome = handle.process_text("මම පාසල යනයි. අපි ගෙදර යමු.");
    let reports = outcome.reports();
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0].corrected_verb(), Some("යනමි"));
    assert!(reports[1].outcome.is_correct());
}
