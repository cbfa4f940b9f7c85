// ATS scoring engine.
// Implements: section scoring, keyword inventory, format and content checks, job matching.
// Scoring is pure and CPU-bound; handlers run it inside tokio::task::spawn_blocking.

pub mod content;
pub mod engine;
pub mod format;
pub mod handlers;
pub mod job_match;
pub mod keywords;
pub mod lexicon;
pub mod nlp;
pub mod patterns;
pub mod sections;
pub mod vector;

// Re-export the public API consumed by handlers and integration tests.
pub use engine::{score_to_grade, AtsEngine, AtsReport};
pub use job_match::{match_job, JobMatch};
pub use sections::{SectionKind, SectionReport};
