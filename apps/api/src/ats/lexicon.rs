//! Static vocabularies used by the ATS engine.
//!
//! Order matters wherever a table is iterated (phrases, fillers, verbs): it
//! fixes the order of reported keywords and issue lines.

/// Function words and resume filler removed during tokenization.
pub const STOPWORDS: &[&str] = &[
    "the", "and", "for", "are", "but", "not", "you", "all", "can", "had", "her", "was",
    "one", "our", "out", "has", "have", "been", "were", "will", "with", "this", "that",
    "from", "they", "what", "about", "which", "when", "make", "like", "time", "very",
    "just", "know", "take", "into", "year", "your", "good", "some", "them", "would",
    "there", "their", "should", "work", "also", "more", "other", "than", "then", "these",
    "could", "may", "might", "must", "need", "require", "preferred", "strong", "role",
    "experience", "skills", "responsibilities", "job", "candidate", "least", "minimum",
    "including", "across", "within", "per", "in", "on", "off", "onto", "ensure",
    "ensuring", "ability", "abilities", "capability", "capabilities", "prioritize",
    "prioritise", "prioritizing", "prioritising", "focus", "focusing",
];

/// Low-signal job-description verbs and adjectives dropped before matching.
pub const NOISE_TERMS: &[&str] = &[
    "support", "supporting", "deliver", "delivering", "delivery", "drive", "driving",
    "collaborate", "collaborating", "collaboration", "partner", "partnering",
    "responsible", "responsibility", "responsibilities", "manage", "managed", "managing",
    "lead", "leading", "led", "help", "helping", "assist", "assisting", "assistants",
    "working", "passion", "passionate", "great", "excellent", "best", "success",
];

/// Known multi-word terms.
pub const COMMON_PHRASES: &[&str] = &[
    "machine learning",
    "deep learning",
    "data science",
    "data engineering",
    "data analysis",
    "project management",
    "product management",
    "people management",
    "natural language processing",
    "computer vision",
    "continuous integration",
    "continuous delivery",
    "continuous deployment",
    "micro services",
    "microservices",
    "cloud computing",
    "customer success",
    "user experience",
    "user interface",
    "business intelligence",
    "quality assurance",
];

/// Abbreviation and alias expansions: `(token, expansion)`.
pub const SYNONYMS: &[(&str, &str)] = &[
    ("ml", "machine learning"),
    ("ai", "artificial intelligence"),
    ("nlp", "natural language processing"),
    ("cv", "computer vision"),
    ("pm", "project management"),
    ("po", "product owner"),
    ("fe", "frontend"),
    ("be", "backend"),
    ("fullstack", "full stack"),
    ("full-stack", "full stack"),
    ("javascript", "js"),
    ("typescript", "ts"),
    ("postgres", "postgresql"),
    ("mongo", "mongodb"),
    ("k8s", "kubernetes"),
    ("ci", "continuous integration"),
    ("cd", "continuous delivery"),
    ("ux", "user experience"),
    ("ui", "user interface"),
    ("bi", "business intelligence"),
];

/// Action verbs grouped by the kind of impact they signal.
pub const ACTION_VERBS: &[(&str, &[&str])] = &[
    (
        "leadership",
        &[
            "led", "managed", "directed", "supervised", "coordinated", "oversaw", "headed",
            "guided", "mentored", "trained", "coached", "delegated", "spearheaded",
            "championed", "pioneered", "orchestrated",
        ],
    ),
    (
        "achievement",
        &[
            "achieved", "accomplished", "attained", "exceeded", "surpassed", "delivered",
            "earned", "completed", "succeeded", "won", "secured", "captured",
        ],
    ),
    (
        "creation",
        &[
            "created", "developed", "designed", "built", "established", "founded",
            "initiated", "launched", "introduced", "originated", "produced", "generated",
        ],
    ),
    (
        "improvement",
        &[
            "improved", "enhanced", "increased", "boosted", "accelerated", "optimized",
            "streamlined", "upgraded", "maximized", "strengthened", "advanced", "elevated",
        ],
    ),
    (
        "analysis",
        &[
            "analyzed", "evaluated", "assessed", "researched", "investigated", "examined",
            "identified", "discovered", "diagnosed", "audited", "reviewed", "surveyed",
        ],
    ),
    (
        "communication",
        &[
            "presented", "communicated", "negotiated", "persuaded", "influenced",
            "collaborated", "partnered", "liaised", "facilitated", "mediated", "advocated",
            "promoted",
        ],
    ),
    (
        "technical",
        &[
            "implemented", "engineered", "programmed", "automated", "integrated",
            "configured", "deployed", "architected", "debugged", "refactored", "migrated",
            "maintained",
        ],
    ),
];

/// Weak phrases that dilute a bullet.
pub const FILLER_PHRASES: &[&str] = &[
    "responsible for",
    "duties included",
    "worked on",
    "helped with",
    "assisted with",
    "participated in",
    "involved in",
    "tasked with",
];

/// Whole-document technical vocabulary.
pub const TECHNICAL_KEYWORDS: &[&str] = &[
    "python", "java", "javascript", "typescript", "react", "angular", "vue", "node",
    "django", "flask", "spring", "aws", "azure", "gcp", "docker", "kubernetes",
    "terraform", "sql", "nosql", "mongodb", "postgresql", "redis", "kafka", "rabbitmq",
    "graphql", "rest", "api", "microservices", "ci", "cd", "devops", "agile", "scrum",
    "git", "linux", "machine", "learning", "data", "analytics", "tableau", "excel",
    "powerbi",
];

/// Whole-document soft-skill vocabulary.
pub const SOFT_SKILL_KEYWORDS: &[&str] = &[
    "leadership", "communication", "teamwork", "collaboration", "analytical", "problem",
    "solving", "strategic", "planning", "management", "mentoring", "negotiation",
    "presentation", "organization", "adaptability", "creativity",
];

/// Keywords most recruiters expect to see somewhere in a resume.
pub const COMMONLY_EXPECTED_KEYWORDS: &[&str] =
    &["results", "team", "project", "business", "customer", "client"];

/// Substrings in the skills section that count as hard skills.
pub const SKILL_SECTION_TECHNICAL: &[&str] = &[
    "python", "java", "javascript", "sql", "react", "aws", "docker", "kubernetes", "git",
    "api", "database", "cloud", "linux", "agile",
];

/// Substrings in the skills section that count as soft skills.
pub const SKILL_SECTION_SOFT: &[&str] = &[
    "leadership",
    "communication",
    "teamwork",
    "problem-solving",
    "analytical",
    "project management",
    "collaboration",
];

/// Degree keywords that mark a clearly specified degree type.
pub const DEGREE_TYPES: &[&str] = &["bachelor", "master", "phd", "doctor", "mba", "associate"];

pub const MAINSTREAM_EMAIL_DOMAINS: &[&str] =
    &["gmail.com", "outlook.com", "yahoo.com", "icloud.com"];

pub const DATED_EMAIL_DOMAINS: &[&str] = &["hotmail.com", "aol.com"];

/// Fixed contribution of each section to the weighted base score.
pub const SECTION_WEIGHTS: &[(&str, f64)] = &[
    ("personal_info", 0.10),
    ("summary", 0.10),
    ("experience", 0.35),
    ("education", 0.15),
    ("skills", 0.20),
    ("projects", 0.10),
];

/// Every action verb in table order.
pub fn all_action_verbs() -> impl Iterator<Item = &'static str> {
    ACTION_VERBS.iter().flat_map(|(_, verbs)| verbs.iter().copied())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_section_weights_sum_to_one() {
        let total: f64 = SECTION_WEIGHTS.iter().map(|(_, w)| w).sum();
        assert!((total - 1.0).abs() < 1e-9, "total was {total}");
    }

    #[test]
    fn test_action_verbs_are_unique_and_lowercase() {
        let verbs: Vec<&str> = all_action_verbs().collect();
        let unique: HashSet<&str> = verbs.iter().copied().collect();
        assert_eq!(verbs.len(), unique.len());
        assert!(verbs.iter().all(|v| v.chars().all(|c| c.is_ascii_lowercase())));
        assert!(verbs.len() >= 80);
    }

    #[test]
    fn test_stopwords_have_no_duplicates() {
        let unique: HashSet<&str> = STOPWORDS.iter().copied().collect();
        assert_eq!(unique.len(), STOPWORDS.len());
    }

    #[test]
    fn test_synonym_keys_are_lowercase() {
        assert!(SYNONYMS
            .iter()
            .all(|(k, v)| *k == k.to_lowercase() && *v == v.to_lowercase()));
    }
}
