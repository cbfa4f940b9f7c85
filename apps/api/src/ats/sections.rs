//! Section scorers. One pure function per resume section, each with a fixed
//! 100-point budget and a fixed weight in the overall score.

use serde::{Deserialize, Serialize};

use crate::ats::lexicon::{
    DATED_EMAIL_DOMAINS, DEGREE_TYPES, MAINSTREAM_EMAIL_DOMAINS, SECTION_WEIGHTS,
    SKILL_SECTION_SOFT, SKILL_SECTION_TECHNICAL,
};
use crate::ats::patterns::Patterns;
use crate::models::resume::{is_present, ResumeDocument};

const EXPERIENCE_MISSING_SCORE: u32 = 20;
const EDUCATION_MISSING_SCORE: u32 = 30;
const SKILLS_MISSING_SCORE: u32 = 20;
const PROJECTS_MISSING_SCORE: u32 = 50;

const EXPERIENCE_ISSUES_PER_ENTRY: usize = 2;
const EXPERIENCE_ISSUE_CAP: usize = 5;
const EXPERIENCE_SUGGESTION_CAP: usize = 4;

const LONG_SKILL_CHARS: usize = 30;
const SUBSTANTIVE_TEXT_CHARS: usize = 20;

// ────────────────────────────────────────────────────────────────────────────
// Output model
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionReport {
    pub name: String,
    pub score: u32,
    pub weight: f64,
    pub issues: Vec<String>,
    pub suggestions: Vec<String>,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    PersonalInfo,
    Summary,
    Experience,
    Education,
    Skills,
    Projects,
}

impl SectionKind {
    /// Scoring order; also the order of sections in the report.
    pub const ALL: [SectionKind; 6] = [
        SectionKind::PersonalInfo,
        SectionKind::Summary,
        SectionKind::Experience,
        SectionKind::Education,
        SectionKind::Skills,
        SectionKind::Projects,
    ];

    pub fn key(self) -> &'static str {
        match self {
            SectionKind::PersonalInfo => "personal_info",
            SectionKind::Summary => "summary",
            SectionKind::Experience => "experience",
            SectionKind::Education => "education",
            SectionKind::Skills => "skills",
            SectionKind::Projects => "projects",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SectionKind::PersonalInfo => "Contact Information",
            SectionKind::Summary => "Professional Summary",
            SectionKind::Experience => "Work Experience",
            SectionKind::Education => "Education",
            SectionKind::Skills => "Skills",
            SectionKind::Projects => "Projects",
        }
    }

    pub fn weight(self) -> f64 {
        SECTION_WEIGHTS
            .iter()
            .find(|(key, _)| *key == self.key())
            .map(|(_, w)| *w)
            .unwrap_or(0.0)
    }

    fn scorer(self) -> SectionScorer {
        match self {
            SectionKind::PersonalInfo => score_contact,
            SectionKind::Summary => score_summary,
            SectionKind::Experience => score_experience,
            SectionKind::Education => score_education,
            SectionKind::Skills => score_skills,
            SectionKind::Projects => score_projects,
        }
    }
}

type SectionScorer = fn(&ResumeDocument, &Patterns, &mut SectionDraft);

/// Scores one section of the resume.
pub fn score_section(kind: SectionKind, resume: &ResumeDocument, patterns: &Patterns) -> SectionReport {
    let mut draft = SectionDraft::default();
    (kind.scorer())(resume, patterns, &mut draft);
    draft.finish(kind)
}

/// Accumulates points and notes while a scorer runs.
#[derive(Debug, Default)]
struct SectionDraft {
    score: u32,
    issues: Vec<String>,
    suggestions: Vec<String>,
    highlights: Vec<String>,
}

impl SectionDraft {
    fn add(&mut self, points: u32) {
        self.score += points;
    }

    /// Replaces the point total (used by the missing-section fallbacks).
    fn set(&mut self, score: u32) {
        self.score = score;
    }

    fn issue(&mut self, text: impl Into<String>) {
        self.issues.push(text.into());
    }

    fn suggest(&mut self, text: impl Into<String>) {
        self.suggestions.push(text.into());
    }

    fn highlight(&mut self, text: impl Into<String>) {
        self.highlights.push(text.into());
    }

    fn finish(self, kind: SectionKind) -> SectionReport {
        SectionReport {
            name: kind.label().to_string(),
            score: self.score.min(100),
            weight: kind.weight(),
            issues: self.issues,
            suggestions: self.suggestions,
            highlights: self.highlights,
        }
    }
}

/// Picks the points for the first band whose threshold `rate` reaches.
fn rate_band(rate: f64, bands: &[(f64, u32)], fallback: u32) -> u32 {
    bands
        .iter()
        .find(|(threshold, _)| rate >= *threshold)
        .map(|(_, points)| *points)
        .unwrap_or(fallback)
}

fn ratio(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Contact information
// ────────────────────────────────────────────────────────────────────────────

fn score_contact(resume: &ResumeDocument, patterns: &Patterns, d: &mut SectionDraft) {
    let info = &resume.personal_info;

    let name_len = info.name.as_deref().map(|n| n.trim().chars().count()).unwrap_or(0);
    if name_len > 1 {
        d.add(25);
        d.highlight("Name is clearly provided");
    } else {
        d.issue("Missing or incomplete name");
    }

    match info.email.as_deref().filter(|e| patterns.is_valid_email(e)) {
        Some(email) => {
            d.add(25);
            let email = email.to_lowercase();
            if MAINSTREAM_EMAIL_DOMAINS.iter().any(|dom| email.contains(dom)) {
                d.highlight("Professional email address provided");
            } else if DATED_EMAIL_DOMAINS.iter().any(|dom| email.contains(dom)) {
                d.suggest("Consider using a more modern email provider (Gmail, Outlook)");
            }
        }
        None => {
            d.issue("Missing or invalid email address");
            d.suggest("Add a professional email address");
        }
    }

    if info.phone.as_deref().is_some_and(|p| patterns.looks_like_phone(p)) {
        d.add(20);
    } else {
        d.issue("Missing phone number");
        d.suggest("Include a phone number for recruiter contact");
    }

    if info.location.as_deref().is_some_and(|l| l.trim().chars().count() > 2) {
        d.add(10);
    } else {
        d.suggest("Add location (City, State) for local job matching");
    }

    if is_present(&info.linkedin) {
        d.add(10);
        d.highlight("LinkedIn profile included");
    } else {
        d.suggest("Add LinkedIn profile URL to increase credibility");
    }

    let has_github = is_present(&info.github);
    let has_website = is_present(&info.website);
    if has_github || has_website {
        d.add(10);
        if has_github {
            d.highlight("GitHub profile showcases technical work");
        }
        if has_website {
            d.highlight("Personal website/portfolio included");
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Professional summary
// ────────────────────────────────────────────────────────────────────────────

fn score_summary(resume: &ResumeDocument, patterns: &Patterns, d: &mut SectionDraft) {
    let summary = resume.summary.as_deref().unwrap_or("");
    if summary.trim().is_empty() {
        d.set(0);
        d.issue("Missing professional summary");
        d.suggest(
            "Add a 2-3 sentence professional summary highlighting your key qualifications",
        );
        return;
    }

    let words = summary.split_whitespace().count();
    match words {
        30..=75 => {
            d.add(40);
            d.highlight("Summary length is optimal for ATS parsing");
        }
        20..=29 | 76..=100 => {
            d.add(30);
            d.suggest("Aim for 30-75 words in your summary");
        }
        0..=19 => {
            d.add(15);
            d.issue("Summary is too short");
            d.suggest("Expand your summary to include key skills and experience highlights");
        }
        _ => {
            d.add(20);
            d.issue("Summary is too long");
            d.suggest("Condense summary to 30-75 words for better ATS compatibility");
        }
    }

    if patterns.mentions_role(summary) {
        d.add(25);
    } else {
        d.suggest("Include your job title or role in the summary");
    }

    if patterns.mentions_years(summary) {
        d.add(20);
        d.highlight("Years of experience mentioned");
    } else {
        d.suggest("Mention your years of experience (e.g., '5+ years')");
    }

    if patterns.is_quantified(summary) {
        d.add(15);
        d.highlight("Summary includes quantified achievements");
    } else {
        d.suggest("Add a key achievement with numbers to your summary");
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Work experience
// ────────────────────────────────────────────────────────────────────────────

fn score_experience(resume: &ResumeDocument, patterns: &Patterns, d: &mut SectionDraft) {
    let experiences = &resume.experience;
    if experiences.is_empty() {
        d.set(EXPERIENCE_MISSING_SCORE);
        d.issue("No work experience listed");
        d.suggest("Add relevant work experience, internships, or volunteer work");
        return;
    }

    let count = experiences.len();
    match count {
        3..=5 => {
            d.add(20);
            d.highlight(format!("{count} relevant positions listed"));
        }
        0..=2 => {
            d.add(10);
            d.suggest("Consider adding more relevant experience if available");
        }
        _ => {
            d.add(15);
            d.suggest("Focus on most recent 5 positions to keep resume concise");
        }
    }

    let mut total_bullets = 0usize;
    let mut quantified = 0usize;
    let mut action_led = 0usize;

    for (i, exp) in experiences.iter().enumerate() {
        let n = i + 1;
        let mut entry_issues = Vec::new();

        if !is_present(&exp.company) || !is_present(&exp.position) {
            entry_issues.push(format!("Experience {n}: Missing company or position"));
        }
        if !is_present(&exp.start_date) {
            entry_issues.push(format!("Experience {n}: Missing start date"));
        }

        let bullets = &exp.bullets;
        total_bullets += bullets.len();
        if bullets.len() < 2 {
            entry_issues.push(format!("Experience {n}: Add more bullet points (aim for 3-5)"));
        } else if bullets.len() > 6 {
            entry_issues.push(format!(
                "Experience {n}: Too many bullets - focus on top 4-5 achievements"
            ));
        }

        for bullet in bullets {
            if patterns.is_quantified(bullet) {
                quantified += 1;
            }
            if patterns.leads_with_action_verb(bullet) {
                action_led += 1;
            }
            if let Some(filler) = patterns.filler_phrase(bullet) {
                entry_issues.push(format!("Avoid weak phrase: '{filler}'"));
            }
        }

        d.issues
            .extend(entry_issues.into_iter().take(EXPERIENCE_ISSUES_PER_ENTRY));
    }

    if total_bullets > 0 {
        let quant_rate = ratio(quantified, total_bullets);
        let action_rate = ratio(action_led, total_bullets);

        let quant_points = rate_band(quant_rate, &[(0.5, 30), (0.3, 20)], 10);
        d.add(quant_points);
        if quant_points == 30 {
            d.highlight(format!(
                "{}% of bullets have quantified results",
                (quant_rate * 100.0) as u32
            ));
        } else if quant_points == 10 {
            d.suggest("Add numbers and metrics to more bullet points (aim for 50%+)");
        }

        let action_points = rate_band(action_rate, &[(0.7, 25), (0.5, 18)], 10);
        d.add(action_points);
        if action_points == 25 {
            d.highlight("Strong use of action verbs");
        } else if action_points == 10 {
            d.suggest("Start each bullet with a strong action verb (Led, Built, Achieved)");
        }

        let avg_bullets = total_bullets as f64 / count as f64;
        let bullet_points = if (3.0..=5.0).contains(&avg_bullets) {
            25
        } else if (2.0..3.0).contains(&avg_bullets) || (avg_bullets > 5.0 && avg_bullets <= 6.0) {
            18
        } else {
            10
        };
        d.add(bullet_points);
    }

    d.issues.truncate(EXPERIENCE_ISSUE_CAP);
    d.suggestions.truncate(EXPERIENCE_SUGGESTION_CAP);
}

// ────────────────────────────────────────────────────────────────────────────
// Education
// ────────────────────────────────────────────────────────────────────────────

fn score_education(resume: &ResumeDocument, _patterns: &Patterns, d: &mut SectionDraft) {
    let Some(primary) = resume.education.first() else {
        d.set(EDUCATION_MISSING_SCORE);
        d.issue("No education listed");
        d.suggest("Add your educational background");
        return;
    };

    if primary.institution.as_deref().is_some_and(|i| i.trim().chars().count() > 2) {
        d.add(30);
    } else {
        d.issue("Missing institution name");
    }

    match primary.degree.as_deref().filter(|deg| !deg.trim().is_empty()) {
        Some(degree) => {
            d.add(30);
            let degree = degree.to_lowercase();
            if DEGREE_TYPES.iter().any(|t| degree.contains(t)) {
                d.highlight("Degree type clearly specified");
            }
        }
        None => d.issue("Missing degree information"),
    }

    if is_present(&primary.field) {
        d.add(15);
    } else {
        d.suggest("Include your field of study/major");
    }

    if is_present(&primary.start_date) || is_present(&primary.end_date) {
        d.add(15);
    } else {
        d.suggest("Add graduation date or expected graduation");
    }

    if let Some(raw_gpa) = primary.gpa.as_deref() {
        if let Some(gpa) = parse_gpa(raw_gpa) {
            if gpa >= 3.5 {
                d.add(5);
                d.highlight(format!("Strong GPA: {}", raw_gpa.trim()));
            } else if gpa < 3.0 {
                d.suggest("Consider omitting GPA below 3.0");
            }
        }
    }

    if !primary.highlights.is_empty() {
        d.add(5);
        d.highlight("Academic achievements/honors included");
    }
}

/// Leading number of a GPA string such as "3.8", "3.8/4.0" or "3.8 GPA".
/// Anything unparsable yields `None` and the GPA notes are skipped.
fn parse_gpa(raw: &str) -> Option<f64> {
    raw.split(|c: char| c == '/' || c.is_whitespace())
        .find(|part| !part.is_empty())?
        .parse::<f64>()
        .ok()
        .filter(|gpa| gpa.is_finite())
}

// ────────────────────────────────────────────────────────────────────────────
// Skills
// ────────────────────────────────────────────────────────────────────────────

fn score_skills(resume: &ResumeDocument, _patterns: &Patterns, d: &mut SectionDraft) {
    let skills = &resume.skills;
    if skills.is_empty() {
        d.set(SKILLS_MISSING_SCORE);
        d.issue("No skills section found");
        d.suggest("Add a skills section with technical and soft skills");
        return;
    }

    let categories = skills.iter().filter(|g| is_present(&g.category)).count();
    let total_items: usize = skills.iter().map(|g| g.items.len()).sum();

    match categories {
        3.. => {
            d.add(30);
            d.highlight("Skills well-organized into categories");
        }
        2 => d.add(20),
        _ => {
            d.add(10);
            d.suggest("Organize skills into categories (Technical, Soft Skills, Tools)");
        }
    }

    match total_items {
        10..=25 => {
            d.add(30);
            d.highlight(format!("{total_items} relevant skills listed"));
        }
        5..=9 => {
            d.add(20);
            d.suggest("Consider adding more relevant skills");
        }
        26.. => {
            d.add(20);
            d.suggest("Focus on most relevant skills (aim for 15-20)");
        }
        _ => {
            d.add(10);
            d.issue("Very few skills listed");
        }
    }

    let skills_text = skills
        .iter()
        .map(|g| g.items.join(" "))
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();
    let has_technical = SKILL_SECTION_TECHNICAL.iter().any(|kw| skills_text.contains(kw));
    let has_soft = SKILL_SECTION_SOFT.iter().any(|kw| skills_text.contains(kw));

    match (has_technical, has_soft) {
        (true, true) => {
            d.add(20);
            d.highlight("Good balance of technical and soft skills");
        }
        (true, false) => {
            d.add(15);
            d.suggest("Consider adding soft skills (Leadership, Communication)");
        }
        (false, true) => {
            d.add(10);
            d.suggest("Add more technical/hard skills relevant to your field");
        }
        (false, false) => {}
    }

    let long_items = skills
        .iter()
        .flat_map(|g| &g.items)
        .filter(|item| item.chars().count() > LONG_SKILL_CHARS)
        .count();
    match long_items {
        0 => d.add(20),
        1..=3 => d.add(15),
        _ => {
            d.add(10);
            d.suggest("Keep skill names concise (avoid long descriptions)");
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Projects
// ────────────────────────────────────────────────────────────────────────────

fn score_projects(resume: &ResumeDocument, _patterns: &Patterns, d: &mut SectionDraft) {
    let projects = &resume.projects;
    if projects.is_empty() {
        // Optional section: neutral score, no issue
        d.set(PROJECTS_MISSING_SCORE);
        d.suggest("Consider adding a projects section to showcase hands-on work");
        return;
    }

    let count = projects.len();
    match count {
        2..=4 => {
            d.add(30);
            d.highlight(format!("{count} projects showcase practical experience"));
        }
        1 => {
            d.add(20);
            d.suggest("Add 1-2 more projects if available");
        }
        _ => {
            d.add(25);
            d.suggest("Focus on your top 3-4 most impressive projects");
        }
    }

    let with_tech = projects.iter().filter(|p| !p.technologies.is_empty()).count();
    let with_description = projects
        .iter()
        .filter(|p| {
            p.highlights
                .iter()
                .map(String::as_str)
                .chain(p.description.as_deref())
                .any(|text| text.chars().count() > SUBSTANTIVE_TEXT_CHARS)
        })
        .count();
    let with_link = projects.iter().filter(|p| is_present(&p.link)).count();

    let tech_points = rate_band(ratio(with_tech, count), &[(0.8, 25), (0.5, 18)], 10);
    d.add(tech_points);
    if tech_points == 25 {
        d.highlight("Technologies clearly listed for projects");
    } else if tech_points == 10 {
        d.suggest("List technologies used for each project");
    }

    let desc_points = rate_band(ratio(with_description, count), &[(0.8, 25), (0.5, 18)], 10);
    d.add(desc_points);
    if desc_points == 10 {
        d.suggest("Add descriptions explaining project purpose and your role");
    }

    let link_rate = ratio(with_link, count);
    if link_rate >= 0.5 {
        d.add(20);
        d.highlight("Project links provided for verification");
    } else if link_rate > 0.0 {
        d.add(12);
    } else {
        d.add(5);
        d.suggest("Add links to live projects or GitHub repositories");
    }
}
