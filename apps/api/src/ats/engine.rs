//! ATS engine: runs every scorer and analyzer and blends them into one report.
//!
//! Built once at startup (compiled patterns, lookup sets) and shared by
//! reference. `analyze` has no side effects and never fails.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ats::content::{analyze_content_quality, ContentQualityReport};
use crate::ats::format::{analyze_format, FormatReport};
use crate::ats::job_match::match_job;
use crate::ats::keywords::{analyze_keywords, KeywordReport};
use crate::ats::nlp::TextNormalizer;
use crate::ats::patterns::Patterns;
use crate::ats::sections::{score_section, SectionKind, SectionReport};
use crate::errors::AtsError;
use crate::models::resume::ResumeDocument;

const TOP_ISSUES_CAP: usize = 8;
const TOP_SUGGESTIONS_CAP: usize = 8;
const STRENGTHS_CAP: usize = 5;

/// Share of the final score taken by the job match when a description is given.
const JOB_MATCH_BLEND: f64 = 0.3;

const GRADE_TABLE: &[(u32, &str)] = &[
    (95, "A+"),
    (90, "A"),
    (85, "A-"),
    (80, "B+"),
    (75, "B"),
    (70, "B-"),
    (65, "C+"),
    (60, "C"),
    (55, "C-"),
    (50, "D"),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtsReport {
    pub overall_score: u32,
    pub grade: String,
    pub section_scores: Vec<SectionReport>,
    pub keyword_analysis: KeywordReport,
    pub format_analysis: FormatReport,
    pub content_quality: ContentQualityReport,
    pub top_issues: Vec<String>,
    pub top_suggestions: Vec<String>,
    pub strengths: Vec<String>,
    pub job_match_score: Option<u32>,
    pub matched_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
}

pub struct AtsEngine {
    normalizer: TextNormalizer,
    patterns: Patterns,
}

impl AtsEngine {
    pub fn new() -> Result<Self, AtsError> {
        Ok(Self {
            normalizer: TextNormalizer::new()?,
            patterns: Patterns::new()?,
        })
    }

    /// Scores a resume, optionally against a job description. Only an empty
    /// job description is treated as absent; any other text is blended in.
    pub fn analyze(&self, resume: &ResumeDocument, job_description: Option<&str>) -> AtsReport {
        let sections: Vec<SectionReport> = SectionKind::ALL
            .iter()
            .map(|&kind| score_section(kind, resume, &self.patterns))
            .collect();

        let weighted: f64 = sections.iter().map(|s| f64::from(s.score) * s.weight).sum();
        let total_weight: f64 = sections.iter().map(|s| s.weight).sum();
        let base = if total_weight > 0.0 {
            weighted / total_weight
        } else {
            0.0
        };

        let keyword_analysis = analyze_keywords(resume, &self.normalizer, &self.patterns);
        let format_analysis = analyze_format(resume);
        let content_quality = analyze_content_quality(resume, &self.patterns);

        let adjustment = score_adjustment(&content_quality, &format_analysis);
        let mut overall_score = (base + f64::from(adjustment)).clamp(0.0, 100.0) as u32;

        debug!(
            base,
            adjustment,
            overall_score,
            "section scoring complete"
        );

        let mut job_match_score = None;
        let mut matched_keywords = Vec::new();
        let mut missing_keywords = Vec::new();

        if let Some(jd) = job_description.filter(|jd| !jd.is_empty()) {
            let job = match_job(&resume.full_text(), jd, &self.normalizer);
            debug!(
                score = job.score,
                coverage = job.coverage,
                cosine = job.cosine,
                "job match complete"
            );
            overall_score = blend_job_match(overall_score, job.score);
            job_match_score = Some(job.score);
            matched_keywords = job.matched_keywords;
            missing_keywords = job.missing_keywords;
        }

        let top_issues = sections
            .iter()
            .flat_map(|s| &s.issues)
            .chain(&format_analysis.issues)
            .chain(&content_quality.issues)
            .take(TOP_ISSUES_CAP)
            .cloned()
            .collect();
        let top_suggestions = sections
            .iter()
            .flat_map(|s| &s.suggestions)
            .take(TOP_SUGGESTIONS_CAP)
            .cloned()
            .collect();
        let strengths = sections
            .iter()
            .flat_map(|s| &s.highlights)
            .take(STRENGTHS_CAP)
            .cloned()
            .collect();

        AtsReport {
            overall_score,
            grade: score_to_grade(overall_score).to_string(),
            section_scores: sections,
            keyword_analysis,
            format_analysis,
            content_quality,
            top_issues,
            top_suggestions,
            strengths,
            job_match_score,
            matched_keywords,
            missing_keywords,
        }
    }
}

/// Bonus for quantified, verb-led bullets; penalty for filler and format issues.
fn score_adjustment(content: &ContentQualityReport, format: &FormatReport) -> i32 {
    let mut adjustment = 0;

    if content.quantification_rate > 50.0 {
        adjustment += 5;
    } else if content.quantification_rate > 30.0 {
        adjustment += 3;
    }

    if content.action_verb_usage_rate > 0.7 {
        adjustment += 3;
    } else if content.action_verb_usage_rate > 0.5 {
        adjustment += 2;
    }

    if content.filler_word_count > 3 {
        adjustment -= 5;
    } else if content.filler_word_count > 1 {
        adjustment -= 2;
    }

    adjustment - 2 * format.issues.len() as i32
}

fn blend_job_match(overall: u32, job_match: u32) -> u32 {
    let blended =
        f64::from(overall) * (1.0 - JOB_MATCH_BLEND) + f64::from(job_match) * JOB_MATCH_BLEND;
    blended.round().clamp(0.0, 100.0) as u32
}

pub fn score_to_grade(score: u32) -> &'static str {
    GRADE_TABLE
        .iter()
        .find(|(floor, _)| score >= *floor)
        .map(|(_, grade)| *grade)
        .unwrap_or("F")
}
