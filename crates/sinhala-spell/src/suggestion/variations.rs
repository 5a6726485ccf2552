// Orthographic prefix variations (long/short vowel spellings of a word start)

/// Default prefix alternations: a word starting with the short vowel may be
/// a misspelling of the long-vowel form.
const DEFAULT_RULES: &[(&str, &[&str])] = &[
    ("අ", &["ආ", "අ"]),
    ("අද", &["ආද", "අද"]),
    ("අන", &["ආන", "අන"]),
];

/// Map from a prefix to the prefixes considered spelling variants of it.
#[derive(Debug, Clone)]
pub struct PrefixVariations {
    rules: Vec<(String, Vec<String>)>,
}

impl PrefixVariations {
    /// Build from `(prefix, alternates)` pairs. Rule order is kept and
    /// determines the order of generated variations.
    pub fn new<I, P, A, S>(rules: I) -> Self
    where
        I: IntoIterator<Item = (P, A)>,
        P: Into<String>,
        A: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            rules: rules
                .into_iter()
                .map(|(p, alts)| (p.into(), alts.into_iter().map(Into::into).collect()))
                .collect(),
        }
    }

    /// No variations at all; only the word itself is generated.
    pub fn none() -> Self {
        Self { rules: Vec::new() }
    }

    /// The word itself followed by every distinct variation: for each prefix
    /// the word starts with, each alternate prefix replaces it while the
    /// remainder stays fixed.
    pub fn generate(&self, word: &str) -> Vec<String> {
        let mut out = vec![word.to_string()];
        for (prefix, alternates) in &self.rules {
            let Some(rest) = word.strip_prefix(prefix.as_str()) else {
                continue;
            };
            for alt in alternates.iter().filter(|a| *a != prefix) {
                let variation = format!("{alt}{rest}");
                if !out.contains(&variation) {
                    out.push(variation);
                }
            }
        }
        out
    }
}

impl Default for PrefixVariations {
    fn default() -> Self {
        Self::new(
            DEFAULT_RULES
                .iter()
                .map(|(p, alts)| (*p, alts.iter().copied())),
        )
    }
}
