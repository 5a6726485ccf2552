// Subject -> verb suffix agreement table

use hashbrown::HashMap;

/// Default agreement rules: first person singular and plural.
pub const DEFAULT_RULES: &[(&str, &str)] = &[("මම", "මි"), ("අපි", "මු")];

/// Maps a subject to the suffix its verb must carry.
///
/// Subjects without an entry impose no constraint.
#[derive(Debug, Clone)]
pub struct SuffixTable {
    rules: HashMap<String, String>,
}

impl SuffixTable {
    pub fn new<I, S, T>(rules: I) -> Self
    where
        I: IntoIterator<Item = (S, T)>,
        S: Into<String>,
        T: Into<String>,
    {
        Self {
            rules: rules
                .into_iter()
                .map(|(s, t)| (s.into(), t.into()))
                .collect(),
        }
    }

    /// The suffix required after `subject`, or `None` if no rule applies.
    pub fn required_suffix(&self, subject: &str) -> Option<&str> {
        self.rules.get(subject).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for SuffixTable {
    fn default() -> Self {
        Self::new(DEFAULT_RULES.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_person_rules() {
        let t = SuffixTable::default();
        assert_eq!(t.required_suffix("මම"), Some("මි"));
        assert_eq!(t.required_suffix("අපි"), Some("මු"));
        assert_eq!(t.len(), 2);
    }

    #[test]
    fn other_subjects_have_no_rule() {
        let t = SuffixTable::default();
        assert_eq!(t.required_suffix("ඔහු"), None);
        assert_eq!(t.required_suffix("ඇය"), None);
        assert_eq!(t.required_suffix(""), None);
    }

    #[test]
    fn custom_rules() {
        let t = SuffixTable::new([("ඔහු", "යි")]);
        assert_eq!(t.required_suffix("ඔහු"), Some("යි"));
        assert_eq!(t.required_suffix("මම"), None);
    }
}
