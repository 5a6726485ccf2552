// Phonetic keys: collapse Sinhala consonant variants into sound classes

use hashbrown::HashMap;

/// Default consonant classes. Aspirated and retroflex variants share the
/// class of their plain consonant.
const DEFAULT_CLASSES: &[(char, char)] = &[
    ('ක', 'k'),
    ('ඛ', 'k'),
    ('ග', 'g'),
    ('ඝ', 'g'),
    ('ච', 'c'),
    ('ජ', 'j'),
    ('ඣ', 'j'),
    ('ට', 't'),
    ('ඨ', 't'),
    ('ඩ', 'd'),
    ('ඪ', 'd'),
    ('ත', 't'),
    ('ද', 'd'),
    ('ධ', 'd'),
    ('ප', 'p'),
    ('බ', 'b'),
    ('භ', 'b'),
    ('ම', 'm'),
    ('න', 'n'),
    ('ණ', 'n'),
    ('ල', 'l'),
    ('ළ', 'l'),
    ('ර', 'r'),
    ('ඍ', 'r'),
    ('ව', 'v'),
    ('ශ', 's'),
    ('ෂ', 's'),
    ('ස', 's'),
    ('හ', 'h'),
];

/// Character-to-class transliteration used for phonetic similarity.
#[derive(Debug, Clone)]
pub struct PhoneticEncoder {
    classes: HashMap<char, char>,
}

impl PhoneticEncoder {
    /// An encoder with a custom class table.
    pub fn with_classes(classes: impl IntoIterator<Item = (char, char)>) -> Self {
        Self {
            classes: classes.into_iter().collect(),
        }
    }

    /// Encode a word as a sequence of characters: mapped characters become
    /// their class, everything else is kept verbatim.
    pub fn encode_chars(&self, word: &str) -> Vec<char> {
        word.chars()
            .map(|c| self.classes.get(&c).copied().unwrap_or(c))
            .collect()
    }

    /// Encode a word into its phonetic key.
    pub fn encode(&self, word: &str) -> String {
        self.encode_chars(word).into_iter().collect()
    }
}

impl Default for PhoneticEncoder {
    fn default() -> Self {
        Self::with_classes(DEFAULT_CLASSES.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_share_a_key() {
        let enc = PhoneticEncoder::default();
        // dental and retroflex n
        assert_eq!(enc.encode("නම"), enc.encode("ණම"));
        // plain and aspirated d
        assert_eq!(enc.encode("දර"), enc.encode("ධර"));
    }

    #[test]
    fn unmapped_characters_pass_through() {
        let enc = PhoneticEncoder::default();
        assert_eq!(enc.encode("ගෙදර"), "gෙdr");
        assert_eq!(enc.encode("abc"), "abc");
    }

    #[test]
    fn empty_word() {
        assert_eq!(PhoneticEncoder::default().encode(""), "");
    }

    #[test]
    fn custom_classes() {
        let enc = PhoneticEncoder::with_classes([('අ', 'a'), ('ආ', 'a')]);
        assert_eq!(enc.encode("අම"), enc.encode("ආම"));
        assert_eq!(enc.encode("අම"), "aම");
    }
}
