//! Term-frequency vectors and cosine similarity.

use std::collections::BTreeMap;

/// Sparse term-frequency vector. Ordered so iteration is deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermVector(BTreeMap<String, u32>);

impl TermVector {
    pub fn from_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut counts = BTreeMap::new();
        for term in terms {
            *counts.entry(term.as_ref().to_string()).or_insert(0) += 1;
        }
        Self(counts)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn count(&self, term: &str) -> u32 {
        self.0.get(term).copied().unwrap_or(0)
    }

    fn norm_squared(&self) -> f64 {
        self.0.values().map(|&c| f64::from(c) * f64::from(c)).sum()
    }

    /// Dot product over shared keys divided by the product of the norms.
    /// Returns 0.0 when either side is empty; the result is within [0, 1].
    pub fn cosine_similarity(&self, other: &TermVector) -> f64 {
        if self.is_empty() || other.is_empty() {
            return 0.0;
        }

        let dot: f64 = self
            .0
            .iter()
            .map(|(term, &c)| f64::from(c) * f64::from(other.count(term)))
            .sum();

        // sqrt(a² · b²) rather than sqrt(a²) · sqrt(b²): exact for v · v
        let denominator = (self.norm_squared() * other.norm_squared()).sqrt();
        if denominator == 0.0 {
            return 0.0;
        }
        (dot / denominator).clamp(0.0, 1.0)
    }
}

/// Builds the document vector from lemmas, detected phrases and the
/// synonym-expanded token stream.
pub fn vectorize(lemmas: &[String], phrases: &[String], expansions: &[String]) -> TermVector {
    TermVector::from_terms(lemmas.iter().chain(phrases).chain(expansions))
}
