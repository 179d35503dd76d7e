//! Tokenization for text preprocessing.
//!
//! - [`SentenceTokenizer`]: abbreviation-aware sentence splitting
//! - [`TreebankWordTokenizer`]: Penn Treebank conventions for one sentence
//!   (punctuation split off, contractions split, sentence-final period split)
//! - [`WordTokenizer`]: sentences first, then Treebank words; the usual entry
//!   point, also available as [`word_tokenize`]
//!
//! All tokenizers implement the [`Tokenizer`] trait.
//!
//! # Examples
//!
//! ```
//! use noisetext::text::tokenize::word_tokenize;
//!
//! let tokens = word_tokenize("They don't stop. Mr. Smith's cats ran!");
//! assert_eq!(
//!     tokens,
//!     vec!["They", "do", "n't", "stop", ".", "Mr.", "Smith", "'s", "cats", "ran", "!"]
//! );
//! ```

use crate::error::Result;
use crate::text::Tokenizer;

/// Sentence tokenizer using punctuation and a list of common abbreviations.
///
/// A `.`, `?` or `!` ends a sentence when it is followed by whitespace and
/// an uppercase letter (or the end of the text), unless the word before a
/// period is a known abbreviation.
///
/// ```
/// use noisetext::text::tokenize::SentenceTokenizer;
///
/// let tokenizer = SentenceTokenizer::new();
/// let sentences = tokenizer.split("Hello world. How are you? I'm fine!");
/// assert_eq!(sentences, vec!["Hello world.", "How are you?", "I'm fine!"]);
/// ```
#[derive(Debug, Clone)]
pub struct SentenceTokenizer {
    /// Abbreviations (lowercase, without the final period) that don't end sentences
    abbreviations: Vec<&'static str>,
}

impl Default for SentenceTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentenceTokenizer {
    /// Create a sentence tokenizer with the default English abbreviations.
    #[must_use]
    pub fn new() -> Self {
        Self {
            abbreviations: vec![
                "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "vs", "etc", "inc", "ltd", "corp",
                "st", "ave", "blvd", "rd", "dept", "gov", "gen", "col", "lt", "sgt", "rev", "hon",
                "pres", "jan", "feb", "mar", "apr", "jun", "jul", "aug", "sep", "oct", "nov",
                "dec", "i.e", "e.g", "cf", "al", "vol", "no", "fig", "pp", "ph.d", "m.d", "u.s",
            ],
        }
    }

    /// Split text into trimmed, non-empty sentences.
    #[must_use]
    pub fn split(&self, text: &str) -> Vec<String> {
        let chars: Vec<(usize, char)> = text.char_indices().collect();
        let mut sentences = Vec::new();
        let mut sentence_start = 0;

        for (i, &(byte_idx, c)) in chars.iter().enumerate() {
            if !matches!(c, '.' | '?' | '!') {
                continue;
            }

            let is_end = match chars.get(i + 1) {
                None => true,
                Some(&(_, next)) if next.is_whitespace() => chars[i + 1..]
                    .iter()
                    .find(|(_, ch)| !ch.is_whitespace())
                    .map_or(true, |&(_, ch)| ch.is_uppercase()),
                Some(_) => false,
            };
            if !is_end {
                continue;
            }

            let end = byte_idx + c.len_utf8();
            if c == '.' && self.is_abbreviation(&text[sentence_start..byte_idx]) {
                continue;
            }

            push_trimmed(&mut sentences, &text[sentence_start..end]);
            sentence_start = end;
        }

        push_trimmed(&mut sentences, &text[sentence_start..]);
        sentences
    }

    fn is_abbreviation(&self, before_period: &str) -> bool {
        let last_word = before_period.split_whitespace().last().unwrap_or("");
        let lower = last_word.to_lowercase();
        self.abbreviations.contains(&lower.as_str())
    }
}

fn push_trimmed(sentences: &mut Vec<String>, candidate: &str) {
    let trimmed = candidate.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
}

/// Brackets and quotes peeled off the front of a chunk.
const OPENERS: &[char] = &['(', '[', '{', '<', '"', '\u{201C}', '\u{00AB}', '`'];

/// Brackets and quotes peeled off the end of a chunk.
const CLOSERS: &[char] = &[')', ']', '}', '>', '"', '\u{201D}', '\u{00BB}'];

/// Characters that always become their own token.
const ALWAYS_SPLIT: &[char] = &[
    ';', '@', '#', '$', '%', '&', '?', '!', '(', ')', '[', ']', '{', '}', '<', '>', '"',
    '\u{201C}', '\u{201D}', '\u{00AB}', '\u{00BB}',
];

/// Clitics split off the end of a word (matched case-insensitively).
const CLITICS: &[&str] = &["n't", "'ll", "'re", "'ve", "'s", "'m", "'d"];

/// Whole words split into two tokens at the given byte offset.
const SPLIT_WORDS: &[(&str, usize)] = &[
    ("cannot", 3),
    ("d'ye", 1),
    ("gimme", 3),
    ("gonna", 3),
    ("gotta", 3),
    ("lemme", 3),
    ("more'n", 4),
    ("wanna", 3),
    ("'tis", 2),
    ("'twas", 2),
];

fn quote_token(c: char, opening: bool) -> String {
    match c {
        '"' if opening => "``".to_string(),
        '"' => "''".to_string(),
        other => other.to_string(),
    }
}

/// Penn Treebank style word tokenizer for a single sentence.
///
/// ```
/// use noisetext::text::{Tokenizer, tokenize::TreebankWordTokenizer};
///
/// let tokenizer = TreebankWordTokenizer::new();
/// let tokens = tokenizer.tokenize("\"Hello,\" she said (twice).").expect("tokenize");
/// assert_eq!(tokens, vec!["``", "Hello", ",", "''", "she", "said", "(", "twice", ")", "."]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TreebankWordTokenizer;

impl TreebankWordTokenizer {
    /// Create a new Treebank word tokenizer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Tokenize one whitespace-delimited chunk.
    fn split_chunk(chunk: &str, sentence_final: bool, out: &mut Vec<String>) {
        let chars: Vec<char> = chunk.chars().collect();
        let mut start = 0;
        let mut end = chars.len();

        while start < end {
            let c = chars[start];
            let rest: String = chars[start..end].iter().collect();
            let leading_quote = c == '\'' && end - start > 1 && !is_split_word_or_clitic(&rest);
            if OPENERS.contains(&c) || leading_quote {
                out.push(quote_token(c, true));
                start += 1;
            } else {
                break;
            }
        }

        let mut trailing = Vec::new();
        let mut only_closers = true;
        while start < end {
            let c = chars[end - 1];
            if end - start >= 3 && chars[end - 3..end] == ['.', '.', '.'] {
                trailing.push("...".to_string());
                end -= 3;
                only_closers = false;
            } else if CLOSERS.contains(&c) {
                trailing.push(quote_token(c, false));
                end -= 1;
            } else if matches!(c, ',' | ':' | ';' | '?' | '!') {
                trailing.push(c.to_string());
                end -= 1;
                only_closers = false;
            } else if c == '\'' && end - start > 1 && chars[end - 2] != '\'' {
                trailing.push("'".to_string());
                end -= 1;
                only_closers = false;
            } else if c == '.'
                && sentence_final
                && only_closers
                && end - start > 1
                && chars[end - 2] != '.'
            {
                trailing.push(".".to_string());
                end -= 1;
                only_closers = false;
            } else {
                break;
            }
        }

        Self::split_core(&chars[start..end], out);
        out.extend(trailing.into_iter().rev());
    }

    /// Split inner punctuation out of the remaining core of a chunk.
    fn split_core(chars: &[char], out: &mut Vec<String>) {
        let mut word = String::new();
        let mut i = 0;

        while i < chars.len() {
            let c = chars[i];
            let next = chars.get(i + 1).copied();

            if ALWAYS_SPLIT.contains(&c) {
                let opening = word.is_empty();
                flush_word(&mut word, out);
                out.push(quote_token(c, opening));
            } else if matches!(c, ',' | ':') && !next.is_some_and(|n| n.is_ascii_digit()) {
                flush_word(&mut word, out);
                out.push(c.to_string());
            } else if c == '-' && next == Some('-') {
                flush_word(&mut word, out);
                out.push("--".to_string());
                i += 1;
            } else if c == '.' && chars.get(i + 1..i + 3) == Some(&['.', '.'][..]) {
                flush_word(&mut word, out);
                out.push("...".to_string());
                i += 2;
            } else {
                word.push(c);
            }
            i += 1;
        }

        flush_word(&mut word, out);
    }
}

fn is_split_word_or_clitic(word: &str) -> bool {
    SPLIT_WORDS.iter().any(|(w, _)| word.eq_ignore_ascii_case(w))
        || CLITICS.iter().any(|c| word.eq_ignore_ascii_case(c))
}

/// Push `word` (with contractions split off) and clear it.
fn flush_word(word: &mut String, out: &mut Vec<String>) {
    if word.is_empty() {
        return;
    }
    split_contractions(word, out);
    word.clear();
}

fn split_contractions(word: &str, out: &mut Vec<String>) {
    for &(whole, at) in SPLIT_WORDS {
        if word.eq_ignore_ascii_case(whole) {
            out.push(word[..at].to_string());
            out.push(word[at..].to_string());
            return;
        }
    }

    for clitic in CLITICS {
        let n = clitic.len();
        if word.len() <= n || !word.is_char_boundary(word.len() - n) {
            continue;
        }
        let (stem, suffix) = word.split_at(word.len() - n);
        if suffix.eq_ignore_ascii_case(clitic) && !stem.ends_with('\'') {
            out.push(stem.to_string());
            out.push(suffix.to_string());
            return;
        }
    }

    out.push(word.to_string());
}

impl Tokenizer for TreebankWordTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        let mut tokens = Vec::new();
        self.tokenize_into(text, &mut tokens);
        Ok(tokens)
    }
}

impl TreebankWordTokenizer {
    /// Append the tokens of one sentence to `out`.
    pub fn tokenize_into(&self, sentence: &str, out: &mut Vec<String>) {
        let chunks: Vec<&str> = sentence.split_whitespace().collect();
        for (i, chunk) in chunks.iter().enumerate() {
            Self::split_chunk(chunk, i + 1 == chunks.len(), out);
        }
    }
}

/// Sentence split followed by Treebank word tokenization of each sentence.
///
/// ```
/// use noisetext::text::{Tokenizer, tokenize::WordTokenizer};
///
/// let tokenizer = WordTokenizer::new();
/// let tokens = tokenizer.tokenize("Good film. Bad ending.").expect("tokenize");
/// assert_eq!(tokens, vec!["Good", "film", ".", "Bad", "ending", "."]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct WordTokenizer {
    sentences: SentenceTokenizer,
    treebank: TreebankWordTokenizer,
}

impl WordTokenizer {
    /// Create a word tokenizer with default sentence rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Split `text` into word tokens. Never fails.
    #[must_use]
    pub fn words(&self, text: &str) -> Vec<String> {
        let mut tokens = Vec::new();
        for sentence in self.sentences.split(text) {
            self.treebank.tokenize_into(&sentence, &mut tokens);
        }
        tokens
    }
}

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        Ok(self.words(text))
    }
}

/// Tokenize `text` into words with the default [`WordTokenizer`].
#[must_use]
pub fn word_tokenize(text: &str) -> Vec<String> {
    WordTokenizer::new().words(text)
}

#[cfg(test)]
mod tests;
