//! Bullet-level content quality across all experience entries.

use serde::{Deserialize, Serialize};

use crate::ats::format::round_to;
use crate::ats::patterns::Patterns;
use crate::models::resume::ResumeDocument;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentQualityReport {
    pub quantified_achievements: usize,
    pub total_bullet_points: usize,
    /// Percentage, 0–100.
    pub quantification_rate: f64,
    /// Mean words per bullet.
    pub average_bullet_length: f64,
    /// Fraction, 0–1.
    pub action_verb_usage_rate: f64,
    pub filler_word_count: usize,
    pub issues: Vec<String>,
}

pub fn analyze_content_quality(resume: &ResumeDocument, patterns: &Patterns) -> ContentQualityReport {
    let mut total = 0usize;
    let mut quantified = 0usize;
    let mut action_led = 0usize;
    let mut filler = 0usize;
    let mut word_total = 0usize;

    for bullet in resume.bullets() {
        total += 1;
        word_total += bullet.split_whitespace().count();

        if patterns.is_quantified(bullet) {
            quantified += 1;
        }
        if patterns.leads_with_action_verb(bullet) {
            action_led += 1;
        }
        if patterns.filler_phrase(bullet).is_some() {
            filler += 1;
        }
    }

    let (quant_rate, action_rate, avg_words) = if total > 0 {
        let n = total as f64;
        (
            quantified as f64 / n * 100.0,
            action_led as f64 / n,
            word_total as f64 / n,
        )
    } else {
        (0.0, 0.0, 0.0)
    };

    let mut issues = Vec::new();
    if quant_rate < 30.0 {
        issues.push("Add more quantified achievements (numbers, percentages, metrics)".to_string());
    }
    if action_rate < 0.5 {
        issues.push("Start more bullets with strong action verbs".to_string());
    }
    if filler > 2 {
        issues.push(format!(
            "Remove weak phrases like 'responsible for' ({filler} found)"
        ));
    }
    if avg_words < 8.0 {
        issues.push("Bullet points lack detail - expand with specific achievements".to_string());
    } else if avg_words > 35.0 {
        issues.push("Some bullets are too long - split or condense".to_string());
    }

    ContentQualityReport {
        quantified_achievements: quantified,
        total_bullet_points: total,
        quantification_rate: round_to(quant_rate, 1),
        average_bullet_length: round_to(avg_words, 1),
        action_verb_usage_rate: round_to(action_rate, 2),
        filler_word_count: filler,
        issues,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::Experience;

    fn resume_with(bullets: &[&str]) -> ResumeDocument {
        ResumeDocument {
            experience: vec![Experience {
                bullets: bullets.iter().map(|b| b.to_string()).collect(),
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_caching_bullet_counts_as_quantified_and_action_led() {
        let p = Patterns::new().unwrap();
        let report = analyze_content_quality(
            &resume_with(&["Increased throughput by 35% using caching"]),
            &p,
        );
        assert_eq!(report.total_bullet_points, 1);
        assert_eq!(report.quantified_achievements, 1);
        assert_eq!(report.quantification_rate, 100.0);
        assert_eq!(report.action_verb_usage_rate, 1.0);
    }

    #[test]
    fn test_no_bullets_yields_zero_rates() {
        let p = Patterns::new().unwrap();
        let report = analyze_content_quality(&ResumeDocument::default(), &p);
        assert_eq!(report.total_bullet_points, 0);
        assert_eq!(report.quantification_rate, 0.0);
        assert_eq!(report.average_bullet_length, 0.0);
        assert_eq!(report.issues.len(), 3);
    }

    #[test]
    fn test_filler_phrases_counted_once_per_bullet() {
        let p = Patterns::new().unwrap();
        let report = analyze_content_quality(
            &resume_with(&[
                "Responsible for deployments and worked on monitoring dashboards daily",
                "Worked on the payments backend for the checkout team members",
                "Helped with onboarding new hires into the platform organization",
            ]),
            &p,
        );
        assert_eq!(report.filler_word_count, 3);
        assert!(report
            .issues
            .contains(&"Remove weak phrases like 'responsible for' (3 found)".to_string()));
    }

    #[test]
    fn test_rates_are_rounded() {
        let p = Patterns::new().unwrap();
        let report = analyze_content_quality(
            &resume_with(&[
                "Built a 3 node cluster for the analytics platform team",
                "Designed the schema for the reporting warehouse and its loaders",
                "Maintained legacy services through the migration period smoothly",
            ]),
            &p,
        );
        assert_eq!(report.quantification_rate, 33.3);
        assert_eq!(report.action_verb_usage_rate, 1.0);
        assert!(report.issues.is_empty());
    }
}
