//! Compiled regexes and bullet-level classifiers shared by the scorers and
//! analyzers.

use std::collections::HashSet;

use regex::Regex;

use crate::ats::lexicon::{all_action_verbs, FILLER_PHRASES};
use crate::ats::nlp::lemmatize;
use crate::errors::AtsError;

const QUANTIFICATION: &str = r"(?i)\b(\d+[%+]?|\$[\d,.]+[KMB]?|[\d,.]+[KMB]?\+?)\b";
const EMAIL: &str = r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}";
const PHONE: &str = r"[\d\-()+\s]{10,}";
const ROLE_TERM: &str =
    r"(?i)\b(engineer|developer|manager|analyst|specialist|expert|lead|senior|junior)\b";
const YEARS_OF_EXPERIENCE: &str = r"(?i)\b(\d+)\+?\s*(years?|yrs?)\b";

pub struct Patterns {
    quantification: Regex,
    email: Regex,
    phone: Regex,
    role_term: Regex,
    years: Regex,
    action_verbs: HashSet<&'static str>,
    action_verb_lemmas: HashSet<String>,
}

impl Patterns {
    pub fn new() -> Result<Self, AtsError> {
        Ok(Self {
            quantification: Regex::new(QUANTIFICATION)?,
            email: Regex::new(EMAIL)?,
            phone: Regex::new(PHONE)?,
            role_term: Regex::new(ROLE_TERM)?,
            years: Regex::new(YEARS_OF_EXPERIENCE)?,
            action_verbs: all_action_verbs().collect(),
            action_verb_lemmas: all_action_verbs().map(lemmatize).collect(),
        })
    }

    /// Numbers, percentages, currency amounts or K/M/B magnitudes.
    pub fn is_quantified(&self, text: &str) -> bool {
        self.quantification.is_match(text)
    }

    pub fn is_valid_email(&self, email: &str) -> bool {
        self.email.is_match(email)
    }

    pub fn looks_like_phone(&self, phone: &str) -> bool {
        self.phone.is_match(phone)
    }

    pub fn mentions_role(&self, text: &str) -> bool {
        self.role_term.is_match(text)
    }

    pub fn mentions_years(&self, text: &str) -> bool {
        self.years.is_match(text)
    }

    /// Whether `word` (any case) is a table verb, or an inflected verb form
    /// (`-ed`, `-s`) sharing a lemma with one. `-ing` words are usually
    /// nouns at the start of a bullet ("Training materials") and only count
    /// when listed verbatim.
    pub fn is_action_verb(&self, word: &str) -> bool {
        let word = word.to_lowercase();
        if self.action_verbs.contains(word.as_str()) {
            return true;
        }
        let inflected = word.ends_with("ed") || (word.ends_with('s') && !word.ends_with("ss"));
        inflected && self.action_verb_lemmas.contains(&lemmatize(&word))
    }

    /// Bullet opens with an action verb. Edge punctuation on the first word
    /// is ignored ("Led," counts).
    pub fn leads_with_action_verb(&self, bullet: &str) -> bool {
        bullet
            .split_whitespace()
            .next()
            .map(|word| word.trim_matches(|c: char| !c.is_alphanumeric()))
            .is_some_and(|word| !word.is_empty() && self.is_action_verb(word))
    }

    /// First filler phrase found in the bullet, in table order.
    pub fn filler_phrase(&self, bullet: &str) -> Option<&'static str> {
        let lower = bullet.to_lowercase();
        FILLER_PHRASES.iter().copied().find(|f| lower.contains(f))
    }

    /// Table verbs that occur verbatim among `terms`, in table order.
    pub fn verbs_used(&self, terms: &HashSet<&str>) -> Vec<&'static str> {
        all_action_verbs()
            .filter(|verb| terms.contains(verb))
            .collect()
    }
}
