//! Job match: weighted keyword coverage of a job description by a resume.
//!
//! Algorithm:
//! 1. Normalize both texts and keep only signal terms (no stopwords, no
//!    low-value verbs, nothing shorter than three characters)
//! 2. Weight job terms by the requirement language of their sentences
//!    (required = 1.6, preferred = 1.2, otherwise 1.0)
//! 3. coverage = matched weight / total weight
//! 4. phrase bonus = 0.05 per shared known phrase, at most 0.2
//! 5. score = round((0.6 × coverage + 0.3 × cosine + bonus) × 100), clamped

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::ats::nlp::TextNormalizer;

const COVERAGE_WEIGHT: f64 = 0.6;
const COSINE_WEIGHT: f64 = 0.3;
const PHRASE_BONUS_STEP: f64 = 0.05;
const PHRASE_BONUS_CAP: f64 = 0.2;

pub const MATCHED_CAP: usize = 20;
pub const MISSING_CAP: usize = 15;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobMatch {
    pub score: u32,
    pub coverage: f64,
    pub cosine: f64,
    pub phrase_bonus: f64,
    /// Job terms found in the resume, most important first.
    pub matched_keywords: Vec<String>,
    /// Job terms absent from the resume, most important first.
    pub missing_keywords: Vec<String>,
}

pub fn match_job(resume_text: &str, job_description: &str, normalizer: &TextNormalizer) -> JobMatch {
    let resume_doc = normalizer.process(resume_text);
    let jd_doc = normalizer.process(job_description);

    let resume_terms: HashSet<&str> = normalizer
        .filter_signal_terms(resume_doc.terms())
        .into_iter()
        .collect();
    let jd_terms = normalizer.filter_signal_terms(jd_doc.terms());

    let weights = normalizer.importance_weights(job_description);

    let total_weight = match jd_terms.iter().map(|t| weights.weight(t)).sum::<f64>() {
        w if w > 0.0 => w,
        _ => 1.0,
    };
    let matched_weight: f64 = jd_terms
        .iter()
        .filter(|t| resume_terms.contains(*t))
        .map(|t| weights.weight(t))
        .sum();
    let coverage = matched_weight / total_weight;

    let shared_phrases = jd_doc
        .phrases
        .iter()
        .filter(|p| resume_terms.contains(p.as_str()))
        .count();
    let phrase_bonus = (PHRASE_BONUS_STEP * shared_phrases as f64).min(PHRASE_BONUS_CAP);

    let cosine = resume_doc.vector.cosine_similarity(&jd_doc.vector);

    let raw = COVERAGE_WEIGHT * coverage + COSINE_WEIGHT * cosine + phrase_bonus;
    let score = (raw * 100.0).round().clamp(0.0, 100.0) as u32;

    // Phrases already pass the signal filter; chaining keeps any that did not.
    let mut seen = HashSet::new();
    let candidates: Vec<&str> = jd_terms
        .iter()
        .copied()
        .chain(jd_doc.phrases.iter().map(String::as_str))
        .filter(|t| seen.insert(*t))
        .collect();

    let (mut matched, mut missing): (Vec<&str>, Vec<&str>) = candidates
        .into_iter()
        .partition(|t| resume_terms.contains(t));

    // Stable sort keeps first-appearance order among equal weights.
    matched.sort_by(|a, b| weights.weight(b).total_cmp(&weights.weight(a)));
    missing.sort_by(|a, b| weights.weight(b).total_cmp(&weights.weight(a)));

    JobMatch {
        score,
        coverage,
        cosine,
        phrase_bonus,
        matched_keywords: matched.into_iter().take(MATCHED_CAP).map(str::to_string).collect(),
        missing_keywords: missing.into_iter().take(MISSING_CAP).map(str::to_string).collect(),
    }
}
