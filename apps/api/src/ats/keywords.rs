//! Keyword inventory of the whole resume.

use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Serialize};

use crate::ats::format::round_to;
use crate::ats::lexicon::{COMMONLY_EXPECTED_KEYWORDS, SOFT_SKILL_KEYWORDS, TECHNICAL_KEYWORDS};
use crate::ats::nlp::TextNormalizer;
use crate::ats::patterns::Patterns;
use crate::models::resume::ResumeDocument;

const TECHNICAL_CAP: usize = 15;
const SOFT_SKILL_CAP: usize = 10;
const ACTION_VERB_CAP: usize = 15;
const MISSING_COMMON_CAP: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordReport {
    pub total_keywords: usize,
    pub technical_keywords: Vec<String>,
    pub soft_skill_keywords: Vec<String>,
    pub action_verbs_used: Vec<String>,
    pub missing_common_keywords: Vec<String>,
    /// Distinct keywords per hundred tokens.
    pub keyword_density: f64,
}

pub fn analyze_keywords(
    resume: &ResumeDocument,
    normalizer: &TextNormalizer,
    patterns: &Patterns,
) -> KeywordReport {
    let doc = normalizer.process(&resume.full_text());
    let terms: HashSet<&str> = doc.terms().into_iter().collect();

    let present = |vocabulary: &[&'static str]| -> Vec<&'static str> {
        vocabulary
            .iter()
            .copied()
            .filter(|kw| terms.contains(kw))
            .collect()
    };

    let technical = present(TECHNICAL_KEYWORDS);
    let soft = present(SOFT_SKILL_KEYWORDS);
    let verbs = patterns.verbs_used(&terms);
    let missing: Vec<&str> = COMMONLY_EXPECTED_KEYWORDS
        .iter()
        .copied()
        .filter(|kw| !terms.contains(kw))
        .collect();

    let distinct: BTreeSet<&str> = technical
        .iter()
        .chain(&soft)
        .chain(&verbs)
        .copied()
        .collect();
    let total_keywords = distinct.len();

    let token_count = doc.tokens.len();
    let density = if token_count > 0 {
        total_keywords as f64 / token_count as f64 * 100.0
    } else {
        0.0
    };

    KeywordReport {
        total_keywords,
        technical_keywords: capped(&technical, TECHNICAL_CAP),
        soft_skill_keywords: capped(&soft, SOFT_SKILL_CAP),
        action_verbs_used: capped(&verbs, ACTION_VERB_CAP),
        missing_common_keywords: capped(&missing, MISSING_COMMON_CAP),
        keyword_density: round_to(density, 2),
    }
}

fn capped(words: &[&str], cap: usize) -> Vec<String> {
    words.iter().take(cap).map(|w| w.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{Experience, SkillGroup};

    fn analyze(resume: &ResumeDocument) -> KeywordReport {
        analyze_keywords(
            resume,
            &TextNormalizer::new().unwrap(),
            &Patterns::new().unwrap(),
        )
    }

    #[test]
    fn test_empty_resume_reports_all_common_missing() {
        let report = analyze(&ResumeDocument::default());
        assert_eq!(report.total_keywords, 0);
        assert_eq!(report.keyword_density, 0.0);
        assert_eq!(
            report.missing_common_keywords,
            vec!["results", "team", "project", "business", "customer"]
        );
    }

    #[test]
    fn test_detects_technical_soft_and_verbs() {
        let resume = ResumeDocument {
            summary: Some("Python engineer focused on team leadership and client results".into()),
            experience: vec![Experience {
                bullets: vec!["Increased Kafka throughput on AWS by 35%".to_string()],
                ..Default::default()
            }],
            skills: vec![SkillGroup {
                category: Some("Tools".to_string()),
                items: vec!["Docker".to_string(), "k8s".to_string()],
            }],
            ..Default::default()
        };
        let report = analyze(&resume);
        for kw in ["python", "aws", "docker", "kafka", "kubernetes"] {
            assert!(
                report.technical_keywords.contains(&kw.to_string()),
                "missing {kw} in {:?}",
                report.technical_keywords
            );
        }
        assert_eq!(report.soft_skill_keywords, vec!["leadership"]);
        assert_eq!(report.action_verbs_used, vec!["increased"]);
        assert_eq!(report.missing_common_keywords, vec!["project", "business", "customer"]);
        assert!(report.keyword_density > 0.0);
    }

    #[test]
    fn test_total_keywords_counts_distinct_before_caps() {
        let items: Vec<String> = TECHNICAL_KEYWORDS.iter().map(|k| k.to_string()).collect();
        let resume = ResumeDocument {
            skills: vec![SkillGroup {
                category: None,
                items,
            }],
            ..Default::default()
        };
        let report = analyze(&resume);
        assert_eq!(report.technical_keywords.len(), 15);
        assert!(report.total_keywords > 15);
    }

    #[test]
    fn test_soft_skills_capped_at_ten() {
        let resume = ResumeDocument {
            skills: vec![SkillGroup {
                category: Some("Soft Skills".to_string()),
                items: SOFT_SKILL_KEYWORDS.iter().map(|k| k.to_string()).collect(),
            }],
            ..Default::default()
        };
        let report = analyze(&resume);
        assert!(SOFT_SKILL_KEYWORDS.len() > 10);
        assert_eq!(report.soft_skill_keywords, &SOFT_SKILL_KEYWORDS[..10]);
    }

    #[test]
    fn test_action_verbs_capped_at_fifteen() {
        let verbs: Vec<&str> = crate::ats::lexicon::all_action_verbs().take(25).collect();
        let resume = ResumeDocument {
            summary: Some(verbs.join(" ")),
            ..Default::default()
        };
        let report = analyze(&resume);
        assert_eq!(report.action_verbs_used, &verbs[..15]);
    }
}
