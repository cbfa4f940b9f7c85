//! Structure and length checks over the whole document.

use serde::{Deserialize, Serialize};

use crate::models::resume::{is_present, ResumeDocument};

const WORDS_PER_PAGE: f64 = 450.0;
const MIN_CORE_SECTIONS: usize = 4;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatReport {
    pub has_clear_sections: bool,
    /// 0–100; higher means bullet lengths vary less.
    pub bullet_point_consistency: f64,
    pub length_appropriate: bool,
    pub estimated_pages: f64,
    pub issues: Vec<String>,
}

pub fn analyze_format(resume: &ResumeDocument) -> FormatReport {
    let mut issues = Vec::new();

    let has_experience = !resume.experience.is_empty();
    let has_skills = !resume.skills.is_empty();
    let core_sections = [
        is_present(&resume.personal_info.name),
        is_present(&resume.summary),
        has_experience,
        !resume.education.is_empty(),
        has_skills,
    ];
    let has_clear_sections =
        core_sections.iter().filter(|present| **present).count() >= MIN_CORE_SECTIONS;

    if !has_experience {
        issues.push("Missing experience section".to_string());
    }
    if !has_skills {
        issues.push("Missing skills section".to_string());
    }

    let lengths: Vec<f64> = resume.bullets().map(|b| b.chars().count() as f64).collect();
    let mut consistency = 100.0;
    if !lengths.is_empty() {
        let n = lengths.len() as f64;
        let mean = lengths.iter().sum::<f64>() / n;
        let variance = lengths.iter().map(|l| (l - mean).powi(2)).sum::<f64>() / n;
        consistency = (100.0 - variance / 100.0).clamp(0.0, 100.0);

        if mean < 30.0 {
            issues.push("Bullet points are too short - add more detail".to_string());
        } else if mean > 200.0 {
            issues.push("Bullet points are too long - be more concise".to_string());
        }
    }

    let words = resume.full_text().split_whitespace().count();
    let pages = words as f64 / WORDS_PER_PAGE;
    let length_appropriate = (0.8..=2.2).contains(&pages);

    if pages < 0.6 {
        issues.push("Resume appears too short - add more content".to_string());
    } else if pages > 2.5 {
        issues.push("Resume may be too long - aim for 1-2 pages".to_string());
    }

    FormatReport {
        has_clear_sections,
        bullet_point_consistency: round_to(consistency, 1),
        length_appropriate,
        estimated_pages: round_to(pages, 1),
        issues,
    }
}

pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{Education, Experience, PersonalInfo, SkillGroup};

    fn words(n: usize) -> String {
        vec!["word"; n].join(" ")
    }

    #[test]
    fn test_empty_resume_has_structure_issues() {
        let report = analyze_format(&ResumeDocument::default());
        assert!(!report.has_clear_sections);
        assert_eq!(report.bullet_point_consistency, 100.0);
        assert!(!report.length_appropriate);
        assert_eq!(report.estimated_pages, 0.0);
        assert_eq!(
            report.issues,
            vec![
                "Missing experience section",
                "Missing skills section",
                "Resume appears too short - add more content",
            ]
        );
    }

    #[test]
    fn test_four_core_sections_are_clear() {
        let resume = ResumeDocument {
            personal_info: PersonalInfo {
                name: Some("Linus".to_string()),
                ..Default::default()
            },
            experience: vec![Experience::default()],
            education: vec![Education::default()],
            skills: vec![SkillGroup::default()],
            ..Default::default()
        };
        assert!(analyze_format(&resume).has_clear_sections);
    }

    #[test]
    fn test_uniform_bullets_are_fully_consistent() {
        let bullet = "Reduced build times by 40% with remote caching".to_string();
        let resume = ResumeDocument {
            experience: vec![Experience {
                bullets: vec![bullet.clone(), bullet.clone(), bullet],
                ..Default::default()
            }],
            ..Default::default()
        };
        let report = analyze_format(&resume);
        assert_eq!(report.bullet_point_consistency, 100.0);
        assert!(!report.issues.iter().any(|i| i.contains("Bullet points")));
    }

    #[test]
    fn test_varied_bullets_lower_consistency() {
        // lengths 10 and 210 → variance 10_000 → consistency 0
        let resume = ResumeDocument {
            experience: vec![Experience {
                bullets: vec!["a".repeat(10), "b".repeat(210)],
                ..Default::default()
            }],
            ..Default::default()
        };
        assert_eq!(analyze_format(&resume).bullet_point_consistency, 0.0);
    }

    #[test]
    fn test_short_bullets_flagged() {
        let resume = ResumeDocument {
            experience: vec![Experience {
                bullets: vec!["Fixed bugs".to_string()],
                ..Default::default()
            }],
            ..Default::default()
        };
        let report = analyze_format(&resume);
        assert!(report
            .issues
            .contains(&"Bullet points are too short - add more detail".to_string()));
    }

    #[test]
    fn test_page_estimate_bands() {
        let one_page = ResumeDocument {
            summary: Some(words(450)),
            ..Default::default()
        };
        let report = analyze_format(&one_page);
        assert_eq!(report.estimated_pages, 1.0);
        assert!(report.length_appropriate);

        let long = ResumeDocument {
            summary: Some(words(1200)),
            ..Default::default()
        };
        let report = analyze_format(&long);
        assert!(!report.length_appropriate);
        assert!(report
            .issues
            .contains(&"Resume may be too long - aim for 1-2 pages".to_string()));
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(1.26, 1), 1.3);
        assert_eq!(round_to(0.456, 2), 0.46);
    }
}
