use std::sync::Arc;
use std::time::Instant;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::ats::engine::{AtsEngine, AtsReport};
use crate::errors::AppError;
use crate::models::resume::ResumeDocument;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    pub resume_data: ResumeDocument,
    #[serde(default)]
    pub job_description: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    pub success: bool,
    #[serde(flatten)]
    pub report: AtsReport,
    pub analysis_time_ms: u64,
}

/// POST /api/v1/ats/analyze
pub async fn handle_analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, axum::extract::rejection::JsonRejection>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let Json(req) = payload?;

    let max_chars = state.config.max_job_description_chars;
    if let Some(jd) = &req.job_description {
        let chars = jd.chars().count();
        if chars > max_chars {
            return Err(AppError::Validation(format!(
                "jobDescription is {chars} characters; the limit is {max_chars}"
            )));
        }
    }

    let started = Instant::now();
    let engine: Arc<AtsEngine> = Arc::clone(&state.engine);
    let report = tokio::task::spawn_blocking(move || {
        engine.analyze(&req.resume_data, req.job_description.as_deref())
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in ATS analysis: {e}")))?;
    let analysis_time_ms = started.elapsed().as_millis() as u64;

    info!(
        overall_score = report.overall_score,
        grade = %report.grade,
        job_match = ?report.job_match_score,
        analysis_time_ms,
        "ATS analysis complete"
    );

    Ok(Json(AnalyzeResponse {
        success: true,
        report,
        analysis_time_ms,
    }))
}
