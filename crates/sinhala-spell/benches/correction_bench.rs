// Criterion benchmarks for sinhala-spell.
//
// The dictionary is generated from a fixed syllable inventory, so no data
// files are needed.
//
// Run:
//   cargo bench -p sinhala-spell

use criterion::{Criterion, criterion_group, criterion_main};
use sinhala_spell::{Lexicon, SinhalaHandle};

const SYLLABLES: &[&str] = &[
    "ක", "ගෙ", "ද", "ර", "පා", "ස", "ල", "පො", "ත", "ම", "නි", "වැ", "යා", "හු", "සි",
];

/// Every three-syllable combination, in a fixed order.
fn generated_words() -> Vec<String> {
    let mut words = Vec::new();
    for a in SYLLABLES {
        for b in SYLLABLES {
            for c in SYLLABLES {
                words.push(format!("{a}{b}{c}"));
            }
        }
    }
    words
}

fn create_handle() -> SinhalaHandle {
    let lexicon = Lexicon::builder()
        .words(generated_words())
        .stopwords(["සහ", "ද", "හා"])
        .suffixes(["වලට", "ට", "ගේ"])
        .build();
    SinhalaHandle::from_lexicon(lexicon)
}

fn bench_find_corrections(c: &mut Criterion) {
    let handle = create_handle();
    c.bench_function("find_corrections (known word)", |b| {
        b.iter(|| handle.find_corrections(std::hint::black_box("ගෙදර")))
    });
    c.bench_function("find_corrections (fuzzy)", |b| {
        b.iter(|| handle.find_corrections(std::hint::black_box("ගෙදරු")))
    });
}

fn bench_process_text(c: &mut Criterion) {
    let handle = create_handle();
    c.bench_function("process_text", |b| {
        b.iter(|| handle.process_text(std::hint::black_box("මම ගෙදරු යනයි")))
    });
}

criterion_group!(benches, bench_find_corrections, bench_process_text);
criterion_main!(benches);
