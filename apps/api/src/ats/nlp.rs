//! Lightweight text normalization for keyword matching.
//!
//! Tokenization, a small suffix-stripping lemmatizer, phrase detection over
//! the lemma stream and abbreviation expansion. No dictionaries or models:
//! the same input always yields the same terms.

use std::collections::{HashMap, HashSet};

use regex::Regex;

use crate::ats::lexicon::{COMMON_PHRASES, NOISE_TERMS, STOPWORDS, SYNONYMS};
use crate::ats::vector::{vectorize, TermVector};
use crate::errors::AtsError;

/// Letters first, then letters, digits and `+ - # .` so "c++" and "node.js" survive.
const TOKEN_PATTERN: &str = r"[a-z][a-z0-9+\-#.]*";

/// Sentences containing one of these mark hard requirements.
const REQUIRED_FLAGS: &[&str] = &["must", "required", "need to", "at least"];
/// Sentences containing one of these mark nice-to-haves.
const PREFERRED_FLAGS: &[&str] = &["preferred", "nice to have", "plus"];

pub const REQUIRED_WEIGHT: f64 = 1.6;
pub const PREFERRED_WEIGHT: f64 = 1.2;
pub const BASE_WEIGHT: f64 = 1.0;

/// Normalized view of one piece of text.
#[derive(Debug, Clone, Default)]
pub struct NlpDoc {
    pub tokens: Vec<String>,
    pub lemmas: Vec<String>,
    pub phrases: Vec<String>,
    /// Tokens contributed by synonym expansion, in the order they were seen.
    pub expansions: Vec<String>,
    pub vector: TermVector,
}

impl NlpDoc {
    /// Distinct terms in first-appearance order: tokens and their lemmas,
    /// then phrases, then expansion tokens.
    pub fn terms(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let interleaved = self
            .tokens
            .iter()
            .zip(&self.lemmas)
            .flat_map(|(token, lemma)| [token.as_str(), lemma.as_str()]);

        interleaved
            .chain(self.phrases.iter().map(String::as_str))
            .chain(self.expansions.iter().map(String::as_str))
            .filter(|term| seen.insert(*term))
            .collect()
    }
}

/// Per-term importance derived from requirement language in a job description.
#[derive(Debug, Clone, Default)]
pub struct TermWeights(HashMap<String, f64>);

impl TermWeights {
    pub fn weight(&self, term: &str) -> f64 {
        self.0.get(term).copied().unwrap_or(BASE_WEIGHT)
    }
}

/// Compiled tokenizer plus the lookup sets built from the static tables.
pub struct TextNormalizer {
    token_re: Regex,
    stopwords: HashSet<&'static str>,
    noise: HashSet<&'static str>,
    /// `(canonical phrase, lemmatized form)` in table order.
    phrase_keys: Vec<(&'static str, String)>,
    synonyms: HashMap<&'static str, &'static str>,
}

impl TextNormalizer {
    pub fn new() -> Result<Self, AtsError> {
        let phrase_keys = COMMON_PHRASES
            .iter()
            .map(|&phrase| {
                let key = phrase
                    .split_whitespace()
                    .map(lemmatize)
                    .collect::<Vec<_>>()
                    .join(" ");
                (phrase, key)
            })
            .collect();

        Ok(Self {
            token_re: Regex::new(TOKEN_PATTERN)?,
            stopwords: STOPWORDS.iter().copied().collect(),
            noise: NOISE_TERMS.iter().copied().collect(),
            phrase_keys,
            synonyms: SYNONYMS.iter().copied().collect(),
        })
    }

    /// Lowercase tokens with stopwords removed. Trailing periods are
    /// sentence punctuation, not part of the token.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let lower = text.to_lowercase();
        self.token_re
            .find_iter(&lower)
            .map(|m| m.as_str().trim_end_matches('.'))
            .filter(|token| !token.is_empty() && !self.stopwords.contains(token))
            .map(str::to_string)
            .collect()
    }

    /// Known phrases found as substrings of the space-joined lemma stream,
    /// so "microservices-based" still yields "microservices".
    pub fn extract_phrases(&self, lemmas: &[String]) -> Vec<String> {
        let joined = lemmas.join(" ");
        self.phrase_keys
            .iter()
            .filter(|(_, key)| joined.contains(key.as_str()))
            .map(|(phrase, _)| phrase.to_string())
            .collect()
    }

    /// Tokens appended for every abbreviation or alias present.
    pub fn expand_synonyms(&self, tokens: &[String]) -> Vec<String> {
        tokens
            .iter()
            .filter_map(|token| self.synonyms.get(token.as_str()))
            .flat_map(|expansion| expansion.split_whitespace().map(str::to_string))
            .collect()
    }

    pub fn process(&self, text: &str) -> NlpDoc {
        let tokens = self.tokenize(text);
        let lemmas: Vec<String> = tokens.iter().map(|t| lemmatize(t)).collect();
        let phrases = self.extract_phrases(&lemmas);
        let expansions = self.expand_synonyms(&tokens);

        let expanded: Vec<String> = tokens.iter().chain(&expansions).cloned().collect();
        let vector = vectorize(&lemmas, &phrases, &expanded);

        NlpDoc {
            tokens,
            lemmas,
            phrases,
            expansions,
            vector,
        }
    }

    /// Drops short terms, stopwords and noise verbs, keeping first-seen order.
    pub fn filter_signal_terms<'a, I>(&self, terms: I) -> Vec<&'a str>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut seen = HashSet::new();
        terms
            .into_iter()
            .filter(|term| term.chars().count() >= 3)
            .filter(|term| !self.stopwords.contains(term) && !self.noise.contains(term))
            .filter(|term| seen.insert(*term))
            .collect()
    }

    /// Weights job-description terms by the strongest requirement language
    /// of any sentence they appear in.
    pub fn importance_weights(&self, jd_text: &str) -> TermWeights {
        let lower = jd_text.to_lowercase();
        let mut weights: HashMap<String, f64> = HashMap::new();

        for sentence in lower.split(['.', '!', '?', '\n']) {
            if sentence.trim().is_empty() {
                continue;
            }

            let multiplier = if REQUIRED_FLAGS.iter().any(|f| sentence.contains(f)) {
                REQUIRED_WEIGHT
            } else if PREFERRED_FLAGS.iter().any(|f| sentence.contains(f)) {
                PREFERRED_WEIGHT
            } else {
                BASE_WEIGHT
            };

            let doc = self.process(sentence);
            for term in doc.terms() {
                let entry = weights.entry(term.to_string()).or_insert(BASE_WEIGHT);
                *entry = entry.max(multiplier);
            }
        }

        TermWeights(weights)
    }
}

/// Ordered suffix-stripping rules. Tokens of three characters or fewer are
/// returned unchanged.
pub fn lemmatize(token: &str) -> String {
    let len = token.len();
    if len <= 3 {
        return token.to_string();
    }

    if token.ends_with("ies") && len > 4 {
        return format!("{}y", &token[..len - 3]);
    }
    if token.ends_with("sses") {
        return token[..len - 2].to_string();
    }
    if token.ends_with("es") {
        return token[..len - 2].to_string();
    }
    if token.ends_with('s') && !token.ends_with("ss") {
        return token[..len - 1].to_string();
    }
    if token.ends_with("ing") && len > 5 {
        return token[..len - 3].to_string();
    }
    if token.ends_with("ed") && len > 4 {
        return token[..len - 2].to_string();
    }
    token.to_string()
}
