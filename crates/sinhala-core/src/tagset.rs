// Part-of-speech tagset used by the tagger interface and the grammar engine.
//
// Tags follow the UCSC Sinhala tagset naming. Only a handful of classes
// matter to the grammar engine; the rest pass through untouched.

/// Personal pronoun. The grammar engine treats it as the subject class.
pub const TAG_PRONOUN: &str = "PRP";
/// Common noun.
pub const TAG_COMMON_NOUN: &str = "NNC";
/// Noun in a compound verb ("වැඩ" in "වැඩ කරමි").
pub const TAG_COMPOUND_VERB_NOUN: &str = "NCV";
/// Adjective.
pub const TAG_ADJECTIVE: &str = "JJ";
/// Finite main verb.
pub const TAG_FINITE_VERB: &str = "VFM";
/// Verb participle.
pub const TAG_VERB_PARTICIPLE: &str = "VP";
/// Number.
pub const TAG_NUMBER: &str = "NUM";
/// Sentence-final punctuation.
pub const TAG_FULL_STOP: &str = "FS";
/// Any other punctuation.
pub const TAG_PUNCTUATION: &str = "PUNC";

/// Prefix shared by every verb tag (`VFM`, `VP`, `VNF`, ...).
pub const VERB_TAG_PREFIX: char = 'V';

/// Tags accepted in the object slot of an SOV clause.
pub const OBJECT_TAGS: &[&str] = &[TAG_COMMON_NOUN, TAG_COMPOUND_VERB_NOUN, TAG_ADJECTIVE];

/// Check whether a tag marks punctuation.
pub fn is_punctuation_tag(tag: &str) -> bool {
    tag == TAG_FULL_STOP || tag == TAG_PUNCTUATION
}

/// Check whether a tag is the subject (pronoun) class.
pub fn is_pronoun_tag(tag: &str) -> bool {
    tag == TAG_PRONOUN
}

/// Check whether a tag belongs to the verb class.
pub fn is_verb_tag(tag: &str) -> bool {
    tag.starts_with(VERB_TAG_PREFIX)
}

/// Check whether a tag may fill the object slot of an SOV clause.
pub fn is_object_tag(tag: &str) -> bool {
    OBJECT_TAGS.contains(&tag)
}
