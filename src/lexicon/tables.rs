//! Built-in word tables.
//!
//! Keys are lowercase and free of apostrophes unless the entry is itself a
//! contraction.

use crate::grammar::tense::Tense;

/// Pronouns and possessives mapped to their subject particle.
///
/// Possessive forms collapse onto the plain particle ("my house" becomes
/// "mi home").
pub(crate) const PRONOUNS: &[(&str, &str)] = &[
    ("i", "mi"),
    ("me", "mi"),
    ("my", "mi"),
    ("mine", "mi"),
    ("you", "yu"),
    ("your", "yu"),
    ("yours", "yu"),
    ("he", "he"),
    ("him", "he"),
    ("his", "he"),
    ("she", "she"),
    ("her", "she"),
    ("hers", "she"),
    ("it", "it"),
    ("its", "it"),
    ("we", "we"),
    ("us", "we"),
    ("our", "we"),
    ("ours", "we"),
    ("they", "de"),
    ("them", "de"),
    ("their", "de"),
    ("theirs", "de"),
];

pub(crate) const AUXILIARIES: &[&str] = &[
    "do", "does", "did", "am", "is", "are", "was", "were", "have", "has", "had", "will", "would",
    "can", "could", "shall", "should", "may", "might", "must",
];

/// Negation markers. Both the contracted and the apostrophe-free spelling are
/// listed; lookups are made with apostrophes removed.
pub(crate) const NEGATIONS: &[&str] = &[
    "not", "n't", "dont", "don't", "doesnt", "doesn't", "didnt", "didn't", "wont", "won't", "cant",
    "can't", "cannot", "isnt", "isn't", "arent", "aren't", "wasnt", "wasn't", "werent", "weren't",
    "havent", "haven't", "hasnt", "hasn't", "hadnt", "hadn't", "no",
];

pub(crate) const TIME_WORDS: &[(&str, Tense)] = &[
    ("yesterday", Tense::Past),
    ("ago", Tense::Past),
    ("last", Tense::Past),
    ("tomorrow", Tense::Future),
    ("later", Tense::Future),
    ("soon", Tense::Future),
    ("today", Tense::Present),
    ("now", Tense::Present),
];

pub(crate) const VERBS: &[(&str, &str)] = &[
    ("eat", "eat"),
    ("go", "go"),
    ("come", "come"),
    ("see", "see"),
    ("give", "give"),
    ("take", "take"),
    ("make", "make"),
    ("do", "do"),
    ("say", "say"),
    ("know", "know"),
    ("think", "think"),
    ("want", "want"),
    ("like", "like"),
    ("need", "need"),
    ("have", "have"),
    ("be", "be"),
];

/// Nouns are rendered as short descriptive compounds.
pub(crate) const NOUNS: &[(&str, &str)] = &[
    ("house", "home"),
    ("home", "home"),
    ("restaurant", "food place"),
    ("school", "learn place"),
    ("hospital", "heal place"),
    ("office", "work place"),
    ("store", "buy place"),
    ("shop", "buy place"),
    ("car", "move tool"),
    ("phone", "talk tool"),
    ("computer", "think box"),
];

pub(crate) const ADJECTIVES: &[(&str, &str)] = &[
    ("big", "big"),
    ("small", "small"),
    ("good", "good"),
    ("bad", "bad"),
    ("new", "new"),
    ("old", "old"),
    ("happy", "happy"),
    ("sad", "sad"),
    ("hot", "hot"),
    ("cold", "cold"),
];

/// Articles have no counterpart in the target language.
pub(crate) const DROP_WORDS: &[&str] = &["a", "an", "the"];
