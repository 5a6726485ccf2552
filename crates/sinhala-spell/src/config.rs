// Configuration: resource file locations and engine options.
//
// Everything is passed explicitly into constructors; there is no global
// configuration. A JSON file can carry the resource paths together with
// optional `correction` and `grammar` sections.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::grammar::GrammarOptions;

/// Default file name of the labelled word list.
pub const DICTIONARY_FILE: &str = "dictionary.csv";
/// Default file name of the stopword list.
pub const STOPWORDS_FILE: &str = "stopwords.txt";
/// Default file name of the suffix rule list.
pub const SUFFIXES_FILE: &str = "suffixes.txt";
/// Default file name of the word-stem table.
pub const STEM_DICTIONARY_FILE: &str = "stem_dictionary.txt";
/// Default file name of the optional part-of-speech lexicon.
pub const POS_LEXICON_FILE: &str = "pos_lexicon.txt";
/// Default file name of a configuration file inside a data directory.
pub const CONFIG_FILE: &str = "sinhala-spell.json";

/// Locations of the lexical resources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceConfig {
    pub dictionary_path: PathBuf,
    pub stopwords_path: PathBuf,
    pub suffixes_path: PathBuf,
    pub stem_dictionary_path: PathBuf,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pos_lexicon_path: Option<PathBuf>,
}

impl ResourceConfig {
    /// Resource paths using the default file names inside `dir`.
    ///
    /// The POS lexicon is only included when the file exists, since it is
    /// optional.
    pub fn from_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        let pos = dir.join(POS_LEXICON_FILE);
        Self {
            dictionary_path: dir.join(DICTIONARY_FILE),
            stopwords_path: dir.join(STOPWORDS_FILE),
            suffixes_path: dir.join(SUFFIXES_FILE),
            stem_dictionary_path: dir.join(STEM_DICTIONARY_FILE),
            pos_lexicon_path: pos.is_file().then_some(pos),
        }
    }

    /// Make every relative path relative to `base` instead of the working
    /// directory.
    pub fn resolve_against(mut self, base: &Path) -> Self {
        let resolve = |p: &mut PathBuf| {
            if p.is_relative() {
                *p = base.join(&*p);
            }
        };
        resolve(&mut self.dictionary_path);
        resolve(&mut self.stopwords_path);
        resolve(&mut self.suffixes_path);
        resolve(&mut self.stem_dictionary_path);
        if let Some(p) = self.pos_lexicon_path.as_mut() {
            resolve(p);
        }
        self
    }

    /// The required resource files that do not exist.
    pub fn missing_files(&self) -> Vec<&Path> {
        [
            &self.dictionary_path,
            &self.stopwords_path,
            &self.suffixes_path,
            &self.stem_dictionary_path,
        ]
        .into_iter()
        .map(PathBuf::as_path)
        .filter(|p| !p.is_file())
        .collect()
    }
}

/// Weights of the fuzzy similarity metrics.
///
/// Each metric is a percentage in `[0, 100]`; the combined score is the
/// weighted sum. The prefix metric is already halved before weighting, so
/// with the default weights an identical stem scores 92.5.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    pub phonetic: f64,
    pub string: f64,
    pub token_order: f64,
    pub sequence: f64,
    pub prefix: f64,
}

impl ScoringWeights {
    pub fn sum(&self) -> f64 {
        self.phonetic + self.string + self.token_order + self.sequence + self.prefix
    }

    /// Reject negative weights and weight sets summing to more than 1.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let all = [
            ("phonetic", self.phonetic),
            ("string", self.string),
            ("token_order", self.token_order),
            ("sequence", self.sequence),
            ("prefix", self.prefix),
        ];
        if let Some((name, w)) = all.iter().find(|(_, w)| !w.is_finite() || *w < 0.0) {
            return Err(ConfigError::InvalidWeights(format!(
                "{name} weight {w} must be a non-negative number"
            )));
        }
        // The default weights do not sum to exactly 1.0 in f64.
        if self.sum() > 1.0 + 1e-9 {
            return Err(ConfigError::InvalidWeights(format!(
                "weights sum to {}, more than 1",
                self.sum()
            )));
        }
        Ok(())
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            phonetic: 0.25,
            string: 0.20,
            token_order: 0.15,
            sequence: 0.25,
            prefix: 0.15,
        }
    }
}

/// Options of the correction engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorrectionOptions {
    /// Maximum number of candidates returned.
    pub limit: usize,
    /// Minimum combined score for a fuzzy candidate.
    pub threshold: f64,
    pub weights: ScoringWeights,
}

impl CorrectionOptions {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=100.0).contains(&self.threshold) {
            return Err(ConfigError::InvalidThreshold(self.threshold));
        }
        self.weights.validate()
    }
}

impl Default for CorrectionOptions {
    fn default() -> Self {
        Self {
            limit: 5,
            threshold: 70.0,
            weights: ScoringWeights::default(),
        }
    }
}

/// Complete configuration: resource paths plus engine options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SinhalaConfig {
    #[serde(flatten)]
    pub resources: ResourceConfig,
    #[serde(default)]
    pub correction: CorrectionOptions,
    #[serde(default)]
    pub grammar: GrammarOptions,
}

impl SinhalaConfig {
    /// Configuration with default options for the given resources.
    pub fn new(resources: ResourceConfig) -> Self {
        Self {
            resources,
            correction: CorrectionOptions::default(),
            grammar: GrammarOptions::default(),
        }
    }

    /// Read a JSON configuration file. Relative resource paths are resolved
    /// against the directory containing the file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: SinhalaConfig =
            serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        if let Some(base) = path.parent() {
            config.resources = config.resources.resolve_against(base);
        }
        config.correction.validate()?;
        log::debug!("loaded configuration from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::VerbSlot;

    #[test]
    fn default_weights_are_valid() {
        let w = ScoringWeights::default();
        assert!(w.validate().is_ok());
        assert!((w.sum() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn overweight_is_rejected() {
        let w = ScoringWeights {
            phonetic: 0.5,
            ..Default::default()
        };
        assert!(matches!(w.validate(), Err(ConfigError::InvalidWeights(_))));
    }

    #[test]
    fn negative_weight_is_rejected() {
        let w = ScoringWeights {
            prefix: -0.1,
            ..Default::default()
        };
        assert!(matches!(w.validate(), Err(ConfigError::InvalidWeights(_))));
    }

    #[test]
    fn threshold_out_of_range() {
        let opts = CorrectionOptions {
            threshold: 120.0,
            ..Default::default()
        };
        assert!(matches!(
            opts.validate(),
            Err(ConfigError::InvalidThreshold(_))
        ));
    }

    #[test]
    fn from_dir_uses_default_names() {
        let cfg = ResourceConfig::from_dir("/data");
        assert_eq!(cfg.dictionary_path, PathBuf::from("/data/dictionary.csv"));
        assert_eq!(cfg.stem_dictionary_path, PathBuf::from("/data/stem_dictionary.txt"));
        assert_eq!(cfg.pos_lexicon_path, None);
    }

    #[test]
    fn resolve_keeps_absolute_paths() {
        let cfg = ResourceConfig {
            dictionary_path: PathBuf::from("/abs/dict.csv"),
            stopwords_path: PathBuf::from("stop.txt"),
            suffixes_path: PathBuf::from("suffixes.txt"),
            stem_dictionary_path: PathBuf::from("stems.txt"),
            pos_lexicon_path: Some(PathBuf::from("tags.txt")),
        }
        .resolve_against(Path::new("/base"));
        assert_eq!(cfg.dictionary_path, PathBuf::from("/abs/dict.csv"));
        assert_eq!(cfg.stopwords_path, PathBuf::from("/base/stop.txt"));
        assert_eq!(cfg.pos_lexicon_path, Some(PathBuf::from("/base/tags.txt")));
    }

    #[test]
    fn parse_json_with_sections() {
        let json = r#"{
            "dictionary_path": "dictionary.csv",
            "stopwords_path": "stopwords.txt",
            "suffixes_path": "suffixes.txt",
            "stem_dictionary_path": "stem_dictionary.txt",
            "correction": { "limit": 3 },
            "grammar": { "strict_object_check": true, "verb_slot": "first_verb" }
        }"#;
        let cfg: SinhalaConfig = serde_json::from_str(json).unwrap();
        assert_eq!(cfg.correction.limit, 3);
        assert_eq!(cfg.correction.threshold, 70.0);
        assert!(cfg.grammar.strict_object_check);
        assert_eq!(cfg.grammar.verb_slot, VerbSlot::FirstVerb);
        assert_eq!(cfg.resources.pos_lexicon_path, None);
    }

    #[test]
    fn parse_json_file_resolves_paths() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(
            &path,
            r#"{"dictionary_path":"d.csv","stopwords_path":"s.txt",
                "suffixes_path":"x.txt","stem_dictionary_path":"t.txt"}"#,
        )
        .unwrap();
        let cfg = SinhalaConfig::from_json_file(&path).unwrap();
        assert_eq!(cfg.resources.dictionary_path, dir.path().join("d.csv"));
        assert_eq!(cfg.correction, CorrectionOptions::default());
    }

    #[test]
    fn missing_config_file_is_io_error() {
        let err = SinhalaConfig::from_json_file("/nonexistent/sinhala-spell.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn missing_files_lists_required_only() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(DICTIONARY_FILE), "word,label\n").unwrap();
        let cfg = ResourceConfig::from_dir(dir.path());
        let missing = cfg.missing_files();
        assert_eq!(missing.len(), 3);
        assert!(!missing.contains(&dir.path().join(DICTIONARY_FILE).as_path()));
    }
}
