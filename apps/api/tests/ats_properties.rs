use ats_api::ats::vector::TermVector;
use ats_api::ats::{score_to_grade, AtsEngine, AtsReport};
use ats_api::models::resume::{PersonalInfo, ResumeDocument};
use serde_json::json;

fn engine() -> AtsEngine {
    AtsEngine::new().expect("engine builds")
}

fn strong_resume() -> ResumeDocument {
    serde_json::from_value(json!({
        "personalInfo": {
            "name": "Ada Lovelace",
            "title": "Senior Software Engineer",
            "email": "ada@gmail.com",
            "phone": "+1 (555) 123-4567",
            "location": "London, UK",
            "linkedin": "linkedin.com/in/ada",
            "github": "github.com/ada"
        },
        "summary": "Senior backend engineer with 8+ years building distributed payment \
            systems in Python and Go. Led teams of 6 engineers, cut infrastructure cost \
            by 30% and shipped APIs that serve millions of customers across three regions \
            with strong reliability and clear communication.",
        "experience": [
            {
                "company": "Acme Payments",
                "position": "Senior Software Engineer",
                "startDate": "2020-01",
                "current": true,
                "bullets": [
                    "Increased checkout throughput by 35% using caching in Redis and Python",
                    "Led a team of 6 engineers delivering the ledger migration to AWS on time",
                    "Reduced p99 latency from 800ms to 120ms by redesigning the queue consumers",
                    "Designed the fraud scoring service processing 2M transactions per day"
                ]
            },
            {
                "company": "Globex",
                "position": "Software Engineer",
                "startDate": "2016-06",
                "endDate": "2019-12",
                "description": [
                    "Built a Docker based CI pipeline that cut release time by 50% overall",
                    "Automated 120 manual runbooks with Python tooling for the operations team",
                    "Migrated 40 services to Kubernetes with zero customer facing downtime"
                ]
            },
            {
                "company": "Initech",
                "position": "Junior Developer",
                "startDate": "2014-01",
                "endDate": "2016-05",
                "bullets": [
                    "Developed reporting dashboards in React used by 300 internal analysts",
                    "Optimized SQL queries reducing nightly batch runtime by 4 hours total",
                    "Implemented unit testing practices raising coverage to 85% across repos"
                ]
            }
        ],
        "education": [{
            "institution": "University of London",
            "degree": "Bachelor of Science",
            "field": "Computer Science",
            "endDate": "2013",
            "gpa": "3.8/4.0",
            "highlights": ["Graduated with honours"]
        }],
        "skills": [
            {"category": "Languages", "items": ["Python", "Go", "SQL", "JavaScript"]},
            {"category": "Cloud", "items": ["AWS", "Docker", "Kubernetes", "Terraform"]},
            {"category": "Soft Skills", "items": ["Leadership", "Communication", "Mentoring"]}
        ],
        "projects": [
            {
                "name": "ledger-rs",
                "description": "Double-entry ledger library with audit trails",
                "technologies": ["Rust", "PostgreSQL"],
                "link": "github.com/ada/ledger-rs"
            },
            {
                "name": "queue-viz",
                "description": "Realtime visualizer for message queue backlogs",
                "technologies": ["TypeScript", "React"],
                "link": "github.com/ada/queue-viz"
            }
        ]
    }))
    .expect("fixture deserializes")
}

fn section<'a>(report: &'a AtsReport, name: &str) -> &'a ats_api::ats::SectionReport {
    report
        .section_scores
        .iter()
        .find(|s| s.name == name)
        .unwrap_or_else(|| panic!("no section named {name}"))
}

#[test]
fn test_scores_are_bounded() {
    let engine = engine();
    let resumes = [ResumeDocument::default(), strong_resume()];
    for resume in &resumes {
        for jd in [None, Some("Python and AWS required"), Some("")] {
            let report = engine.analyze(resume, jd);
            assert!(report.overall_score <= 100);
            for s in &report.section_scores {
                assert!(s.score <= 100, "{} scored {}", s.name, s.score);
            }
            if let Some(m) = report.job_match_score {
                assert!(m <= 100);
            }
        }
    }
}

#[test]
fn test_grade_boundaries() {
    assert_eq!(score_to_grade(95), "A+");
    assert_eq!(score_to_grade(94), "A");
    assert_eq!(score_to_grade(50), "D");
    assert_eq!(score_to_grade(49), "F");
}

#[test]
fn test_cosine_of_self_and_empty() {
    let v = TermVector::from_terms(["rust", "kafka", "rust"]);
    assert_eq!(v.cosine_similarity(&v), 1.0);
    assert_eq!(v.cosine_similarity(&TermVector::default()), 0.0);
}

#[test]
fn test_name_only_resume_uses_fallbacks() {
    let resume = ResumeDocument {
        personal_info: PersonalInfo {
            name: Some("Ada Lovelace".to_string()),
            ..Default::default()
        },
        ..Default::default()
    };
    let report = engine().analyze(&resume, None);

    assert_eq!(section(&report, "Contact Information").score, 25);
    assert_eq!(section(&report, "Professional Summary").score, 0);
    assert_eq!(section(&report, "Work Experience").score, 20);
    assert_eq!(section(&report, "Education").score, 30);
    assert_eq!(section(&report, "Skills").score, 20);
    assert_eq!(section(&report, "Projects").score, 50);

    assert!(!section(&report, "Work Experience").issues.is_empty());
    assert!(!section(&report, "Skills").issues.is_empty());
    assert!(!report.top_issues.is_empty());
    assert_eq!(report.grade, "F");
    assert!(report.job_match_score.is_none());
}

#[test]
fn test_strong_resume_grades_well() {
    let report = engine().analyze(&strong_resume(), None);
    assert!(report.overall_score >= 80, "overall {}", report.overall_score);
    assert!(report.strengths.len() <= 5);
    assert!(report
        .keyword_analysis
        .technical_keywords
        .contains(&"python".to_string()));
}

#[test]
fn test_missing_required_keyword_lowers_job_match() {
    let engine = engine();
    let jd = "5+ years of Python and AWS required. Docker is a plus.";
    let mut python_only = ResumeDocument::default();
    python_only.summary = Some("Python developer building data tools".to_string());
    let mut python_aws = python_only.clone();
    python_aws.summary = Some("Python developer building data tools on AWS".to_string());

    let low = engine.analyze(&python_only, Some(jd));
    let high = engine.analyze(&python_aws, Some(jd));

    assert!(low.job_match_score < high.job_match_score);
    let aws = low.missing_keywords.iter().position(|k| k == "aws");
    let docker = low.missing_keywords.iter().position(|k| k == "docker");
    assert!(aws.is_some() && docker.is_some());
    assert!(aws < docker, "{:?}", low.missing_keywords);
}

#[test]
fn test_caching_bullet_is_quantified_and_action_led() {
    let resume: ResumeDocument = serde_json::from_value(json!({
        "experience": [{"bullets": ["Increased throughput by 35% using caching"]}]
    }))
    .unwrap();
    let report = engine().analyze(&resume, None);
    assert_eq!(report.content_quality.quantified_achievements, 1);
    assert_eq!(report.content_quality.action_verb_usage_rate, 1.0);
}

#[test]
fn test_identical_input_serializes_identically() {
    let engine = engine();
    let resume = strong_resume();
    let jd = Some("Kubernetes and Python required; Terraform preferred.");
    let first = serde_json::to_vec(&engine.analyze(&resume, jd)).unwrap();
    let second = serde_json::to_vec(&engine.analyze(&resume, jd)).unwrap();
    assert_eq!(first, second);
}
