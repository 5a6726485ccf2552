// sinhala-spell: spelling correction and SOV agreement checking for Sinhala.
//
// Layout:
//   - `lexicon`: dictionary, stopwords, suffix rules and stem table
//   - `phonetic`, `stemmer`, `similarity`: leaf helpers used for scoring
//   - `suggestion`: prefix variations, top-K ranking and the correction engine
//   - `analysis`: tokenizer / tagger / splitter capability traits and the
//     rule-based implementations shipped with the crate
//   - `grammar`: subject-verb agreement over subject-object-verb clauses
//   - `pipeline`: spelling then grammar over a whole input
//   - `handle`: owns everything above behind one API

pub mod analysis;
pub mod config;
pub mod error;
pub mod grammar;
pub mod handle;
pub mod lexicon;
pub mod phonetic;
pub mod pipeline;
pub mod similarity;
pub mod stemmer;
pub mod suggestion;

pub use config::{CorrectionOptions, ResourceConfig, ScoringWeights, SinhalaConfig};
pub use error::{ConfigError, ResourceError, SinhalaError};
pub use handle::SinhalaHandle;
pub use lexicon::{Dictionary, Lexicon, LexiconBuilder};
pub use pipeline::ProcessOutcome;
