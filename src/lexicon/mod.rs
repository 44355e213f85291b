//! Lexicon tables used by the translation pipeline.
//!
//! A [`LexiconSet`] bundles every word table the pipeline consults: the
//! pronoun map, the auxiliary-verb and negation sets, the time-word map, the
//! verb, noun and adjective maps, and the set of words that are dropped
//! outright. The built-in set is compiled into the crate and constructed once
//! per process; it is never mutated afterwards.
//!
//! # Examples
//!
//! ```
//! use easyspeak::lexicon::LexiconSet;
//!
//! let lexicon = LexiconSet::builtin();
//! assert_eq!(lexicon.pronoun("i"), Some("mi"));
//! assert!(lexicon.is_auxiliary("did"));
//! assert_eq!(lexicon.noun("restaurant").unwrap().join(" "), "food place");
//! ```

mod tables;

use std::fmt;
use std::sync::{Arc, LazyLock};

use ahash::{AHashMap, AHashSet};
use serde::{Deserialize, Serialize};

use crate::grammar::tense::Tense;

static BUILTIN_LEXICON: LazyLock<Arc<LexiconSet>> = LazyLock::new(|| Arc::new(LexiconSet::new()));

/// The table a word was found in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WordClass {
    Pronoun,
    Auxiliary,
    Negation,
    TimeWord,
    Verb,
    Noun,
    Adjective,
    DropWord,
}

impl WordClass {
    /// All classes in lookup-report order.
    pub const ALL: [WordClass; 8] = [
        WordClass::Pronoun,
        WordClass::Auxiliary,
        WordClass::Negation,
        WordClass::TimeWord,
        WordClass::Verb,
        WordClass::Noun,
        WordClass::Adjective,
        WordClass::DropWord,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            WordClass::Pronoun => "pronoun",
            WordClass::Auxiliary => "auxiliary",
            WordClass::Negation => "negation",
            WordClass::TimeWord => "time_word",
            WordClass::Verb => "verb",
            WordClass::Noun => "noun",
            WordClass::Adjective => "adjective",
            WordClass::DropWord => "drop_word",
        }
    }
}

impl fmt::Display for WordClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One table membership for a word, with the translation the table gives it
/// (if the table is a map rather than a set).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    pub class: WordClass,
    pub translation: Option<String>,
}

/// Immutable collection of the lexicon tables.
#[derive(Clone, Debug)]
pub struct LexiconSet {
    pronouns: AHashMap<String, String>,
    auxiliaries: AHashSet<String>,
    negations: AHashSet<String>,
    time_words: AHashMap<String, Tense>,
    verbs: AHashMap<String, String>,
    nouns: AHashMap<String, Vec<String>>,
    adjectives: AHashMap<String, String>,
    drop_words: AHashSet<String>,
    /// The translated pronoun forms; a sentence starting with one of these
    /// has a recognised subject.
    subject_particles: AHashSet<String>,
}

impl LexiconSet {
    fn new() -> Self {
        let pronouns: AHashMap<String, String> = owned_map(tables::PRONOUNS);
        let subject_particles = pronouns.values().cloned().collect();

        LexiconSet {
            pronouns,
            auxiliaries: owned_set(tables::AUXILIARIES),
            negations: owned_set(tables::NEGATIONS),
            time_words: tables::TIME_WORDS
                .iter()
                .map(|&(word, tense)| (word.to_string(), tense))
                .collect(),
            verbs: owned_map(tables::VERBS),
            nouns: tables::NOUNS
                .iter()
                .map(|&(word, phrase)| {
                    let parts = phrase.split_whitespace().map(str::to_string).collect();
                    (word.to_string(), parts)
                })
                .collect(),
            adjectives: owned_map(tables::ADJECTIVES),
            drop_words: owned_set(tables::DROP_WORDS),
            subject_particles,
        }
    }

    /// The process-wide built-in lexicon.
    pub fn builtin() -> Arc<LexiconSet> {
        Arc::clone(&BUILTIN_LEXICON)
    }

    pub fn pronoun(&self, word: &str) -> Option<&str> {
        self.pronouns.get(word).map(String::as_str)
    }

    pub fn is_auxiliary(&self, word: &str) -> bool {
        self.auxiliaries.contains(word)
    }

    pub fn is_negation(&self, word: &str) -> bool {
        self.negations.contains(word)
    }

    /// The tense hinted at by a time word such as "yesterday" or "soon".
    pub fn time_word(&self, word: &str) -> Option<Tense> {
        self.time_words.get(word).copied()
    }

    pub fn verb(&self, word: &str) -> Option<&str> {
        self.verbs.get(word).map(String::as_str)
    }

    /// The noun translation, already split into its output tokens.
    pub fn noun(&self, word: &str) -> Option<&[String]> {
        self.nouns.get(word).map(Vec::as_slice)
    }

    pub fn adjective(&self, word: &str) -> Option<&str> {
        self.adjectives.get(word).map(String::as_str)
    }

    pub fn is_drop_word(&self, word: &str) -> bool {
        self.drop_words.contains(word)
    }

    /// The words removed before substitution (articles).
    pub fn drop_words(&self) -> &AHashSet<String> {
        &self.drop_words
    }

    /// Check whether a translated token is one of the pronoun particles.
    pub fn is_subject_particle(&self, token: &str) -> bool {
        self.subject_particles.contains(token)
    }

    /// Every table the word belongs to, in [`WordClass::ALL`] order.
    pub fn classify(&self, word: &str) -> Vec<WordEntry> {
        let word = word.trim().to_lowercase();
        let word = word.as_str();

        WordClass::ALL
            .iter()
            .filter_map(|&class| {
                let hit = match class {
                    WordClass::Pronoun => self.pronoun(word).map(|t| Some(t.to_string())),
                    WordClass::Auxiliary => self.is_auxiliary(word).then_some(None),
                    WordClass::Negation => self.is_negation(word).then_some(None),
                    WordClass::TimeWord => self
                        .time_word(word)
                        .map(|tense| Some(tense.particle().to_string())),
                    WordClass::Verb => self.verb(word).map(|t| Some(t.to_string())),
                    WordClass::Noun => self.noun(word).map(|parts| Some(parts.join(" "))),
                    WordClass::Adjective => self.adjective(word).map(|t| Some(t.to_string())),
                    WordClass::DropWord => self.is_drop_word(word).then_some(None),
                };
                hit.map(|translation| WordEntry { class, translation })
            })
            .collect()
    }

    /// Number of entries in each table.
    pub fn table_sizes(&self) -> Vec<(WordClass, usize)> {
        WordClass::ALL
            .iter()
            .map(|&class| {
                let size = match class {
                    WordClass::Pronoun => self.pronouns.len(),
                    WordClass::Auxiliary => self.auxiliaries.len(),
                    WordClass::Negation => self.negations.len(),
                    WordClass::TimeWord => self.time_words.len(),
                    WordClass::Verb => self.verbs.len(),
                    WordClass::Noun => self.nouns.len(),
                    WordClass::Adjective => self.adjectives.len(),
                    WordClass::DropWord => self.drop_words.len(),
                };
                (class, size)
            })
            .collect()
    }
}

impl Default for LexiconSet {
    fn default() -> Self {
        LexiconSet::builtin().as_ref().clone()
    }
}

fn owned_map(entries: &[(&str, &str)]) -> AHashMap<String, String> {
    entries
        .iter()
        .map(|&(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn owned_set(entries: &[&str]) -> AHashSet<String> {
    entries.iter().map(|&s| s.to_string()).collect()
}
