// Parsers for the lexical resource file formats.
//
// Each parser works on already-read text so that resources can be embedded
// or built in tests; `name` is only used in error messages.

use csv::{ReaderBuilder, Trim};
use hashbrown::HashMap;

use crate::error::ResourceError;

/// Column holding the word in the labelled word list.
pub const WORD_COLUMN: &str = "word";
/// Column holding the correctness label in the labelled word list.
pub const LABEL_COLUMN: &str = "label";

/// Strip a UTF-8 byte order mark, which some editors add to Sinhala text
/// files.
fn strip_bom(text: &str) -> &str {
    text.strip_prefix('\u{FEFF}').unwrap_or(text)
}

/// Whether a label cell marks the word as correctly spelled.
fn is_correct_label(label: &str) -> Result<bool, String> {
    match label {
        "1" | "1.0" | "true" | "TRUE" | "True" => Ok(true),
        "0" | "0.0" | "false" | "FALSE" | "False" => Ok(false),
        other => Err(format!("unrecognized label '{other}'")),
    }
}

/// Parse a delimited word list with a header row containing `word` and
/// `label` columns. Returns the words whose label is 1, in file order.
///
/// The delimiter is a tab if the header line contains one, otherwise a
/// comma. Quoting follows RFC 4180.
pub fn parse_word_list(text: &str, name: &str) -> Result<Vec<String>, ResourceError> {
    let text = strip_bom(text);
    let header_line = text.lines().find(|l| !l.trim().is_empty());
    let Some(header_line) = header_line else {
        return Err(ResourceError::MissingHeader {
            name: name.to_string(),
        });
    };
    let delimiter = if header_line.contains('\t') { b'\t' } else { b',' };

    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .trim(Trim::All)
        .flexible(true)
        .from_reader(text.as_bytes());

    let columns: Vec<String> = reader
        .headers()
        .map_err(|e| csv_error(name, e))?
        .iter()
        .map(str::to_lowercase)
        .collect();
    let find = |column: &'static str| {
        columns
            .iter()
            .position(|c| c == column)
            .ok_or_else(|| ResourceError::MissingColumn {
                name: name.to_string(),
                column,
            })
    };
    let word_idx = find(WORD_COLUMN)?;
    let label_idx = find(LABEL_COLUMN)?;

    let mut words = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| csv_error(name, e))?;
        let malformed = |reason: String| ResourceError::Malformed {
            name: name.to_string(),
            line: record.position().map_or(0, |p| p.line() as usize),
            reason,
        };
        let (Some(word), Some(label)) = (record.get(word_idx), record.get(label_idx)) else {
            return Err(malformed(format!(
                "expected at least {} columns, found {}",
                word_idx.max(label_idx) + 1,
                record.len()
            )));
        };
        if is_correct_label(label).map_err(malformed)? {
            words.push(word.to_string());
        }
    }
    Ok(words)
}

fn csv_error(name: &str, err: csv::Error) -> ResourceError {
    ResourceError::Malformed {
        name: name.to_string(),
        line: err.position().map_or(0, |p| p.line() as usize),
        reason: err.to_string(),
    }
}

/// Parse a newline-delimited list, trimming entries and skipping blank lines.
/// Order is preserved.
pub fn parse_lines(text: &str) -> Vec<String> {
    strip_bom(text)
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse a tab-delimited two-column table (`key<TAB>value`).
///
/// Blank lines are skipped. A later line for the same key replaces an
/// earlier one.
pub fn parse_tab_table(
    text: &str,
    name: &str,
    shape: &str,
) -> Result<HashMap<String, String>, ResourceError> {
    let mut table = HashMap::new();
    for (idx, line) in strip_bom(text).lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let mut fields = line.split('\t');
        match (fields.next(), fields.next(), fields.next()) {
            (Some(key), Some(value), None) if !key.trim().is_empty() && !value.trim().is_empty() => {
                table.insert(key.trim().to_string(), value.trim().to_string());
            }
            _ => {
                return Err(ResourceError::Malformed {
                    name: name.to_string(),
                    line: idx + 1,
                    reason: format!("expected '{shape}'"),
                });
            }
        }
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_list_keeps_label_one() {
        let text = "word,label\nගෙදර,1\nගදර,0\nයමි,1\n";
        let words = parse_word_list(text, "dictionary.csv").unwrap();
        assert_eq!(words, ["ගෙදර", "යමි"]);
    }

    #[test]
    fn word_list_tab_delimited_any_column_order() {
        let text = "id\tlabel\tword\n1\t1\tගෙදර\n2\t1.0\tවැව\n";
        let words = parse_word_list(text, "dictionary.tsv").unwrap();
        assert_eq!(words, ["ගෙදර", "වැව"]);
    }

    #[test]
    fn word_list_strips_bom_and_quotes() {
        let text = "\u{FEFF}\"word\",\"label\"\n\"ගෙදර\",\"1\"\n";
        let words = parse_word_list(text, "dictionary.csv").unwrap();
        assert_eq!(words, ["ගෙදර"]);
    }

    #[test]
    fn word_list_quoted_delimiter_stays_in_cell() {
        let text = "word,label\n\"ගෙදර,x\",1\nපාසල,1\n";
        let words = parse_word_list(text, "dictionary.csv").unwrap();
        assert_eq!(words, ["ගෙදර,x", "පාසල"]);
    }

    #[test]
    fn word_list_unescapes_doubled_quotes() {
        let text = "word,label\n\"ගෙ\"\"දර\",1\n";
        let words = parse_word_list(text, "dictionary.csv").unwrap();
        assert_eq!(words, ["ගෙ\"දර"]);
    }

    #[test]
    fn word_list_bad_label_reports_line() {
        let err = parse_word_list("word,label\nගෙදර,1\nවැව,maybe\n", "dictionary.csv")
            .unwrap_err();
        match err {
            ResourceError::Malformed { line, reason, .. } => {
                assert_eq!(line, 3);
                assert_eq!(reason, "unrecognized label 'maybe'");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn word_list_without_header() {
        let err = parse_word_list("\n\n", "dictionary.csv").unwrap_err();
        assert!(matches!(err, ResourceError::MissingHeader { .. }));
    }

    #[test]
    fn word_list_missing_label_column() {
        let err = parse_word_list("word,frequency\nගෙදර,3\n", "dictionary.csv").unwrap_err();
        assert!(matches!(
            err,
            ResourceError::MissingColumn { column: "label", .. }
        ));
    }

    #[test]
    fn word_list_short_row_reports_line() {
        let err = parse_word_list("word,label\nගෙදර,1\nවැව\n", "dictionary.csv").unwrap_err();
        match err {
            ResourceError::Malformed { line, .. } => assert_eq!(line, 3),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn word_list_bad_label() {
        let err = parse_word_list("word,label\nගෙදර,yes\n", "dictionary.csv").unwrap_err();
        assert!(err.to_string().contains("unrecognized label 'yes'"));
    }

    #[test]
    fn lines_trim_and_skip_blank() {
        assert_eq!(parse_lines("ද\n\n  ත් \r\nට\n"), ["ද", "ත්", "ට"]);
        assert!(parse_lines("").is_empty());
    }

    #[test]
    fn tab_table_parses_pairs() {
        let table = parse_tab_table("ගෙදරට\tගෙදර\n\nවැවට\tවැව\n", "stems", "word<TAB>stem").unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("ගෙදරට").map(String::as_str), Some("ගෙදර"));
    }

    #[test]
    fn tab_table_rejects_missing_tab() {
        let err = parse_tab_table("ගෙදරට ගෙදර\n", "stems", "word<TAB>stem").unwrap_err();
        match err {
            ResourceError::Malformed { line, reason, .. } => {
                assert_eq!(line, 1);
                assert_eq!(reason, "expected 'word<TAB>stem'");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn tab_table_rejects_extra_columns() {
        assert!(parse_tab_table("a\tb\tc\n", "stems", "word<TAB>stem").is_err());
    }
}
