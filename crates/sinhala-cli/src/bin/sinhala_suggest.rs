// sinhala-suggest: Rank spelling corrections for words.
//
// Usage:
//   sinhala-suggest [-d DATA_DIR] [-c CONFIG] [OPTIONS] [WORD...]
//
// Options:
//   -d, --data-dir DIR     Directory containing the resource files
//   -c, --config FILE      JSON configuration file
//   -n, --limit N          Maximum number of candidates
//   -t, --threshold X      Minimum fuzzy score (0-100)
//       --json             Print one JSON object per word
//   -h, --help             Print help

use std::io::{self, Write};

use sinhala_spell::SinhalaHandle;

fn main() {
    sinhala_cli::init_logging();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (common, args) =
        sinhala_cli::parse_common_args(&args).unwrap_or_else(|e| sinhala_cli::fatal(&e));

    if sinhala_cli::wants_help(&args) {
        println!("sinhala-suggest: Rank spelling corrections for words.");
        println!();
        println!("Usage: sinhala-suggest [-d DATA_DIR] [-c CONFIG] [OPTIONS] [WORD...]");
        println!();
        println!("If WORD arguments are given, suggests for each word.");
        println!("Otherwise reads words from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  -d, --data-dir DIR   Directory containing the resource files");
        println!("  -c, --config FILE    JSON configuration file");
        println!("  -n, --limit N        Maximum number of candidates");
        println!("  -t, --threshold X    Minimum fuzzy score (0-100)");
        println!("      --json           Print one JSON object per word");
        println!("  -h, --help           Print this help");
        return;
    }

    let mut limit: Option<usize> = None;
    let mut threshold: Option<f64> = None;
    let mut rest: Vec<String> = Vec::new();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-n" | "--limit" => {
                let value = iter
                    .next()
                    .unwrap_or_else(|| sinhala_cli::fatal("--limit requires a value"));
                limit = Some(
                    value
                        .parse()
                        .unwrap_or_else(|_| sinhala_cli::fatal("invalid number for --limit")),
                );
            }
            "-t" | "--threshold" => {
                let value = iter
                    .next()
                    .unwrap_or_else(|| sinhala_cli::fatal("--threshold requires a value"));
                threshold = Some(
                    value
                        .parse()
                        .unwrap_or_else(|_| sinhala_cli::fatal("invalid number for --threshold")),
                );
            }
            _ => rest.push(arg.clone()),
        }
    }

    let rest = sinhala_cli::positional(&rest).unwrap_or_else(|e| sinhala_cli::fatal(&e));
    let mut handle = sinhala_cli::load_handle(&common).unwrap_or_else(|e| sinhala_cli::fatal(&e));
    if let Some(limit) = limit {
        handle.set_limit(limit);
    }
    if let Some(threshold) = threshold {
        handle
            .set_threshold(threshold)
            .unwrap_or_else(|e| sinhala_cli::fatal(&e.to_string()));
    }

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    for word in sinhala_cli::inputs(rest, false) {
        suggest_word(&word, &handle, common.json, &mut out);
    }
}

fn suggest_word(word: &str, handle: &SinhalaHandle, json: bool, out: &mut impl Write) {
    let correct = handle.is_correct(word);
    let candidates = if correct {
        Vec::new()
    } else {
        handle.find_corrections(word)
    };
    if json {
        let value = serde_json::json!({
            "word": word,
            "correct": correct,
            "candidates": candidates,
        });
        let _ = writeln!(out, "{value}");
    } else if correct {
        let _ = writeln!(out, "{word} (correct)");
    } else if candidates.is_empty() {
        let _ = writeln!(out, "{word}: (no suggestions)");
    } else {
        let _ = writeln!(out, "{word}:");
        for c in &candidates {
            let _ = writeln!(out, "  {} ({:.1})", c.word, c.score);
        }
    }
}
