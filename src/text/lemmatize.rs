//! Morphological lemmatization.
//!
//! Lemmatization reduces an inflected word to its dictionary base form:
//! "cats" → "cat", "geese" → "goose", and, as a verb, "running" → "run".
//! Unlike stemming, the result is always a real lexicon entry (or the input
//! unchanged).
//!
//! [`WordNetLemmatizer`] implements WordNet's *morphy* lookup:
//!
//! 1. If the word is in the part-of-speech exception list, the answer comes
//!    from that list.
//! 2. Otherwise suffix detachment rules are applied; candidates present in
//!    the lexicon (the word itself included) are kept.
//! 3. If nothing matched, rules are applied again to the detached forms
//!    until a match is found or no rule applies.
//!
//! The shortest matching candidate wins; with no match the word is returned
//! unchanged.
//!
//! # Examples
//!
//! ```
//! use noisetext::text::lemmatize::{Lemmatizer, Pos, WordNetLemmatizer};
//!
//! let lemmatizer = WordNetLemmatizer::bundled();
//! assert_eq!(lemmatizer.lemmatize("cats"), "cat");
//! assert_eq!(lemmatizer.lemmatize("geese"), "goose");
//! assert_eq!(lemmatizer.lemmatize_pos("running", Pos::Verb), "run");
//! assert_eq!(lemmatizer.lemmatize_pos("ran", Pos::Verb), "run");
//! ```
//!
//! # References
//!
//! Miller, G.A. (1995). "WordNet: A Lexical Database for English."
//! Communications of the ACM, 38(11), 39-41.

use crate::error::{NoiseTextError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::io;
use std::path::Path;

/// Part of speech used to select lexicon, exceptions and detachment rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pos {
    /// Noun (the default, as in most lemmatizer front ends).
    #[default]
    Noun,
    /// Verb.
    Verb,
    /// Adjective (satellites included).
    Adjective,
    /// Adverb.
    Adverb,
}

impl Pos {
    /// All parts of speech, in WordNet file order.
    pub const ALL: [Pos; 4] = [Pos::Noun, Pos::Verb, Pos::Adjective, Pos::Adverb];

    /// WordNet database file suffix (`index.<suffix>`, `<suffix>.exc`).
    #[must_use]
    pub fn file_suffix(self) -> &'static str {
        match self {
            Pos::Noun => "noun",
            Pos::Verb => "verb",
            Pos::Adjective => "adj",
            Pos::Adverb => "adv",
        }
    }

    fn index(self) -> usize {
        match self {
            Pos::Noun => 0,
            Pos::Verb => 1,
            Pos::Adjective => 2,
            Pos::Adverb => 3,
        }
    }

    /// Suffix detachment rules as `(suffix, replacement)` pairs.
    fn substitutions(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Pos::Noun => &[
                ("s", ""),
                ("ses", "s"),
                ("ves", "f"),
                ("xes", "x"),
                ("zes", "z"),
                ("ches", "ch"),
                ("shes", "sh"),
                ("men", "man"),
                ("ies", "y"),
            ],
            Pos::Verb => &[
                ("s", ""),
                ("ies", "y"),
                ("es", "e"),
                ("es", ""),
                ("ed", "e"),
                ("ed", ""),
                ("ing", "e"),
                ("ing", ""),
            ],
            Pos::Adjective => &[("er", ""), ("est", ""), ("er", "e"), ("est", "e")],
            Pos::Adverb => &[],
        }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.file_suffix())
    }
}

/// Lemma lists and exception lists for the four parts of speech.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    lemmas: [HashSet<String>; 4],
    exceptions: [HashMap<String, Vec<String>>; 4],
}

impl Lexicon {
    /// Create an empty lexicon.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The compact English lexicon compiled into the crate.
    #[must_use]
    pub fn bundled() -> Self {
        let mut lexicon = Self::new();
        lexicon.parse_index(Pos::Noun, include_str!("data/index.noun"));
        lexicon.parse_index(Pos::Verb, include_str!("data/index.verb"));
        lexicon.parse_index(Pos::Adjective, include_str!("data/index.adj"));
        lexicon.parse_index(Pos::Adverb, include_str!("data/index.adv"));
        lexicon.parse_exceptions(Pos::Noun, include_str!("data/noun.exc"));
        lexicon.parse_exceptions(Pos::Verb, include_str!("data/verb.exc"));
        lexicon.parse_exceptions(Pos::Adjective, include_str!("data/adj.exc"));
        lexicon
    }

    /// Load a WordNet database directory.
    ///
    /// Every `index.{noun,verb,adj,adv}` file is required; the `.exc` files
    /// are optional (WordNet ships no adverb exceptions in some releases).
    ///
    /// # Errors
    ///
    /// Returns [`NoiseTextError::ResourceUnavailable`] naming the first
    /// missing index file, or an exception file that exists but cannot be
    /// read. Missing exception files are allowed.
    pub fn from_wordnet_dir(dir: &Path) -> Result<Self> {
        let mut lexicon = Self::new();

        for pos in Pos::ALL {
            let index_name = format!("index.{}", pos.file_suffix());
            let index_path = dir.join(&index_name);
            let contents = std::fs::read_to_string(&index_path).map_err(|_| {
                NoiseTextError::resource_unavailable(&format!("wordnet/{index_name}"), &index_path)
            })?;
            lexicon.parse_index(pos, &contents);

            let exc_name = format!("{}.exc", pos.file_suffix());
            let exc_path = dir.join(&exc_name);
            match std::fs::read_to_string(&exc_path) {
                Ok(contents) => lexicon.parse_exceptions(pos, &contents),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    log::debug!("no {exc_name} in {}", dir.display());
                }
                Err(_) => {
                    return Err(NoiseTextError::resource_unavailable(
                        &format!("wordnet/{exc_name}"),
                        &exc_path,
                    ));
                }
            }
        }

        log::debug!(
            "loaded WordNet lexicon from {}: {} nouns, {} verbs, {} adjectives, {} adverbs",
            dir.display(),
            lexicon.lemma_count(Pos::Noun),
            lexicon.lemma_count(Pos::Verb),
            lexicon.lemma_count(Pos::Adjective),
            lexicon.lemma_count(Pos::Adverb),
        );
        Ok(lexicon)
    }

    /// Read lemmas from WordNet `index.*` content.
    ///
    /// License lines start with a space; the lemma is the first field of
    /// every other line. A plain one-word-per-line list parses the same way.
    pub fn parse_index(&mut self, pos: Pos, contents: &str) {
        let lemmas = &mut self.lemmas[pos.index()];
        for line in contents.lines() {
            if line.starts_with(' ') || line.starts_with('#') {
                continue;
            }
            if let Some(lemma) = line.split_whitespace().next() {
                lemmas.insert(lemma.to_lowercase());
            }
        }
    }

    /// Read `inflected base [base ...]` lines from WordNet `*.exc` content.
    pub fn parse_exceptions(&mut self, pos: Pos, contents: &str) {
        let exceptions = &mut self.exceptions[pos.index()];
        for line in contents.lines() {
            if line.starts_with('#') {
                continue;
            }
            let mut fields = line.split_whitespace();
            if let Some(inflected) = fields.next() {
                let bases: Vec<String> = fields.map(str::to_lowercase).collect();
                if !bases.is_empty() {
                    exceptions
                        .entry(inflected.to_lowercase())
                        .or_default()
                        .extend(bases);
                }
            }
        }
    }

    /// Add one lemma.
    pub fn insert_lemma(&mut self, pos: Pos, lemma: &str) {
        self.lemmas[pos.index()].insert(lemma.to_lowercase());
    }

    /// Add one exception mapping.
    pub fn insert_exception(&mut self, pos: Pos, inflected: &str, base: &str) {
        self.exceptions[pos.index()]
            .entry(inflected.to_lowercase())
            .or_default()
            .push(base.to_lowercase());
    }

    /// Whether `word` is a lemma for `pos`.
    #[must_use]
    pub fn contains(&self, pos: Pos, word: &str) -> bool {
        self.lemmas[pos.index()].contains(word)
    }

    /// Exception bases recorded for `word`.
    #[must_use]
    pub fn exceptions(&self, pos: Pos, word: &str) -> Option<&[String]> {
        self.exceptions[pos.index()].get(word).map(Vec::as_slice)
    }

    /// Number of lemmas for `pos`.
    #[must_use]
    pub fn lemma_count(&self, pos: Pos) -> usize {
        self.lemmas[pos.index()].len()
    }

    /// Number of exception entries for `pos`.
    #[must_use]
    pub fn exception_count(&self, pos: Pos) -> usize {
        self.exceptions[pos.index()].len()
    }
}

/// Trait for lemmatizers.
pub trait Lemmatizer {
    /// Lemmatize `word` as the given part of speech.
    fn lemmatize_pos(&self, word: &str, pos: Pos) -> String;

    /// Lemmatize `word` as a noun.
    fn lemmatize(&self, word: &str) -> String {
        self.lemmatize_pos(word, Pos::Noun)
    }

    /// Lemmatize every token as the given part of speech.
    fn lemmatize_tokens<S: AsRef<str>>(&self, tokens: &[S], pos: Pos) -> Vec<String> {
        tokens
            .iter()
            .map(|token| self.lemmatize_pos(token.as_ref(), pos))
            .collect()
    }
}

/// WordNet morphy lemmatizer over a [`Lexicon`].
#[derive(Debug, Clone, Default)]
pub struct WordNetLemmatizer {
    lexicon: Lexicon,
}

impl WordNetLemmatizer {
    /// Create a lemmatizer over an existing lexicon.
    #[must_use]
    pub fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    /// Lemmatizer over the bundled English lexicon.
    #[must_use]
    pub fn bundled() -> Self {
        Self::new(Lexicon::bundled())
    }

    /// Lemmatizer over a WordNet database directory.
    ///
    /// # Errors
    ///
    /// See [`Lexicon::from_wordnet_dir`].
    pub fn from_wordnet_dir(dir: &Path) -> Result<Self> {
        Ok(Self::new(Lexicon::from_wordnet_dir(dir)?))
    }

    /// The underlying lexicon.
    #[must_use]
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// All base forms morphy finds for `form`, in discovery order.
    #[must_use]
    pub fn morphy(&self, form: &str, pos: Pos) -> Vec<String> {
        if let Some(bases) = self.lexicon.exceptions(pos, form) {
            let candidates = std::iter::once(form.to_string()).chain(bases.iter().cloned());
            return self.known_forms(candidates, pos);
        }

        let mut forms = Self::detach(std::iter::once(form.to_string()), pos);
        let results = self.known_forms(
            std::iter::once(form.to_string()).chain(forms.iter().cloned()),
            pos,
        );
        if !results.is_empty() {
            return results;
        }

        while !forms.is_empty() {
            forms = Self::detach(forms.into_iter(), pos);
            let results = self.known_forms(forms.iter().cloned(), pos);
            if !results.is_empty() {
                return results;
            }
        }

        Vec::new()
    }

    /// Apply every matching detachment rule to every form.
    fn detach(forms: impl Iterator<Item = String>, pos: Pos) -> Vec<String> {
        let rules = pos.substitutions();
        forms
            .flat_map(|form| {
                rules.iter().filter_map(move |(suffix, replacement)| {
                    form.strip_suffix(suffix)
                        .map(|stem| format!("{stem}{replacement}"))
                })
            })
            .collect()
    }

    /// Keep forms present in the lexicon, deduplicated, order preserved.
    fn known_forms(&self, forms: impl Iterator<Item = String>, pos: Pos) -> Vec<String> {
        let mut seen = HashSet::new();
        forms
            .filter(|form| self.lexicon.contains(pos, form) && seen.insert(form.clone()))
            .collect()
    }
}

impl Lemmatizer for WordNetLemmatizer {
    fn lemmatize_pos(&self, word: &str, pos: Pos) -> String {
        // first shortest, as min-by-length would pick
        let mut best: Option<String> = None;
        for lemma in self.morphy(word, pos) {
            if best.as_ref().map_or(true, |b| lemma.len() < b.len()) {
                best = Some(lemma);
            }
        }
        best.unwrap_or_else(|| word.to_string())
    }
}

#[cfg(test)]
#[path = "lemmatize_tests.rs"]
mod tests;
