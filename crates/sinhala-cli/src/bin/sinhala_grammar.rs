// sinhala-grammar: Check subject-verb agreement sentence by sentence.
//
// Usage:
//   sinhala-grammar [-d DATA_DIR] [-c CONFIG] [--strict] [--verb-slot SLOT] [--json] [SENTENCE...]

use std::io::{self, Write};

use sinhala_spell::grammar::{GrammarOptions, VerbSlot};

fn parse_verb_slot(value: &str) -> VerbSlot {
    match value {
        "last" | "last_word" => VerbSlot::LastWord,
        "third" => VerbSlot::Third,
        "first_verb" => VerbSlot::FirstVerb,
        other => sinhala_cli::fatal(&format!("unknown verb slot: {other}")),
    }
}

fn main() {
    sinhala_cli::init_logging();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (common, args) =
        sinhala_cli::parse_common_args(&args).unwrap_or_else(|e| sinhala_cli::fatal(&e));

    if sinhala_cli::wants_help(&args) {
        println!("sinhala-grammar: Check subject-verb agreement.");
        println!();
        println!("Usage: sinhala-grammar [-d DATA_DIR] [-c CONFIG] [OPTIONS] [SENTENCE...]");
        println!();
        println!("If SENTENCE arguments are given, they are checked as one sentence.");
        println!("Otherwise reads sentences from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  -d, --data-dir DIR     Directory containing the resource files");
        println!("  -c, --config FILE      JSON configuration file");
        println!("      --strict           Require an object after the subject");
        println!("      --verb-slot SLOT   last_word (default), third or first_verb");
        println!("      --json             Print one JSON report per sentence");
        println!("  -h, --help             Print this help");
        return;
    }

    let mut strict = false;
    let mut verb_slot: Option<VerbSlot> = None;
    let mut rest: Vec<String> = Vec::new();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--strict" => strict = true,
            "--verb-slot" => {
                let value = iter
                    .next()
                    .unwrap_or_else(|| sinhala_cli::fatal("--verb-slot requires a value"));
                verb_slot = Some(parse_verb_slot(value));
            }
            _ => rest.push(arg.clone()),
        }
    }

    let rest = sinhala_cli::positional(&rest).unwrap_or_else(|e| sinhala_cli::fatal(&e));
    let mut handle = sinhala_cli::load_handle(&common).unwrap_or_else(|e| sinhala_cli::fatal(&e));
    let configured = *handle.grammar_options();
    handle.set_grammar_options(GrammarOptions {
        strict_object_check: strict || configured.strict_object_check,
        verb_slot: verb_slot.unwrap_or(configured.verb_slot),
    });

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    for sentence in sinhala_cli::inputs(rest, true) {
        let report = handle.check_grammar(&sentence);
        if common.json {
            match serde_json::to_string(&report) {
                Ok(json) => {
                    let _ = writeln!(out, "{json}");
                }
                Err(e) => sinhala_cli::fatal(&e.to_string()),
            }
        } else {
            let _ = writeln!(out, "{}", report.sentence);
            let _ = writeln!(out, "  {}", report.outcome.to_string().replace('\n', "\n  "));
        }
    }
}
