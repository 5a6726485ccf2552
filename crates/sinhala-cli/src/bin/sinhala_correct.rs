// sinhala-correct: Auto-correct spelling line by line.
//
// Each input line is printed with every word replaced by its best
// correction. With --report, misspelled words and their candidates are
// listed instead.
//
// Usage:
//   sinhala-correct [-d DATA_DIR] [-c CONFIG] [--report] [--json] [TEXT...]

use std::io::{self, Write};

fn main() {
    sinhala_cli::init_logging();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (common, args) =
        sinhala_cli::parse_common_args(&args).unwrap_or_else(|e| sinhala_cli::fatal(&e));

    if sinhala_cli::wants_help(&args) {
        println!("sinhala-correct: Auto-correct spelling line by line.");
        println!();
        println!("Usage: sinhala-correct [-d DATA_DIR] [-c CONFIG] [--report] [--json] [TEXT...]");
        println!();
        println!("If TEXT arguments are given, they are corrected as one line.");
        println!("Otherwise reads lines from stdin.");
        println!();
        println!("Options:");
        println!("  -d, --data-dir DIR   Directory containing the resource files");
        println!("  -c, --config FILE    JSON configuration file");
        println!("      --report         List misspelled words and their candidates");
        println!("      --json           Print JSON instead of text");
        println!("  -h, --help           Print this help");
        return;
    }

    let report = args.iter().any(|a| a == "--report");
    let rest: Vec<String> = args.into_iter().filter(|a| a != "--report").collect();
    let rest = sinhala_cli::positional(&rest).unwrap_or_else(|e| sinhala_cli::fatal(&e));
    let handle = sinhala_cli::load_handle(&common).unwrap_or_else(|e| sinhala_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    for line in sinhala_cli::inputs(rest, true) {
        if report {
            let misspelled = handle.spell_check(&line);
            if common.json {
                let entries: Vec<_> = misspelled
                    .iter()
                    .map(|(word, candidates)| {
                        serde_json::json!({ "word": word, "candidates": candidates })
                    })
                    .collect();
                let _ = writeln!(out, "{}", serde_json::Value::Array(entries));
            } else {
                for (word, candidates) in &misspelled {
                    let list: Vec<&str> = candidates.iter().map(|c| c.word.as_str()).collect();
                    let _ = writeln!(out, "{word}: {}", list.join(", "));
                }
            }
        } else {
            let corrected = handle.auto_correct(&line);
            if common.json {
                let value = serde_json::json!({ "input": line, "corrected": corrected });
                let _ = writeln!(out, "{value}");
            } else {
                let _ = writeln!(out, "{corrected}");
            }
        }
    }
}
