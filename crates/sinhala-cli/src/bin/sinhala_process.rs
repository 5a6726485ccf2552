// sinhala-process: Spelling correction followed by grammar checking.
//
// Prints the spelling-corrected text and one grammar result per sentence.
//
// Usage:
//   sinhala-process [-d DATA_DIR] [-c CONFIG] [--json] [TEXT...]

use std::io::{self, Write};

use sinhala_spell::ProcessOutcome;

fn main() {
    sinhala_cli::init_logging();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (common, args) =
        sinhala_cli::parse_common_args(&args).unwrap_or_else(|e| sinhala_cli::fatal(&e));

    if sinhala_cli::wants_help(&args) {
        println!("sinhala-process: Correct spelling, then check grammar.");
        println!();
        println!("Usage: sinhala-process [-d DATA_DIR] [-c CONFIG] [--json] [TEXT...]");
        println!();
        println!("If TEXT arguments are given, they are processed as one input.");
        println!("Otherwise each stdin line is processed separately.");
        println!();
        println!("Options:");
        println!("  -d, --data-dir DIR   Directory containing the resource files");
        println!("  -c, --config FILE    JSON configuration file");
        println!("      --json           Print one JSON result per input");
        println!("  -h, --help           Print this help");
        return;
    }

    let rest = sinhala_cli::positional(&args).unwrap_or_else(|e| sinhala_cli::fatal(&e));
    let handle = sinhala_cli::load_handle(&common).unwrap_or_else(|e| sinhala_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    for text in sinhala_cli::inputs(rest, true) {
        let outcome = handle.process_text(&text);
        if common.json {
            match serde_json::to_string(&outcome) {
                Ok(json) => {
                    let _ = writeln!(out, "{json}");
                }
                Err(e) => sinhala_cli::fatal(&e.to_string()),
            }
            continue;
        }
        match outcome {
            ProcessOutcome::Rejected(rejection) => {
                let _ = writeln!(out, "{rejection}");
            }
            ProcessOutcome::Checked {
                corrected_text,
                reports,
            } => {
                let _ = writeln!(out, "Corrected text: {corrected_text}");
                for report in &reports {
                    let _ = writeln!(out, "{}", report.sentence);
                    let _ = writeln!(out, "  {}", report.outcome.to_string().replace('\n', "\n  "));
                }
            }
        }
    }
}
