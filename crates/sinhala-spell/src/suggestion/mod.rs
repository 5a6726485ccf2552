// Spelling correction
//
// Architecture:
//   - `variations`: orthographic prefix variants of the input word
//   - `ranking`: bounded top-K selection with deterministic tie-breaking
//   - `corrector`: fast accept, variant accept, stem accept, then weighted
//     fuzzy scoring against every dictionary word

pub mod corrector;
pub mod ranking;
pub mod variations;

pub use corrector::Corrector;
pub use ranking::TopCandidates;
pub use variations::PrefixVariations;
