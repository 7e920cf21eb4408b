//! Axum route handlers for the ATS API.

use axum::{
    extract::{rejection::JsonRejection, Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::ats::enhancer::enhance;
use crate::ats::scoring::{score, MatchResult};
use crate::errors::AppError;
use crate::state::AppState;

/// Minimum JD length in characters.
pub const MIN_JD_CHARS: usize = 10;
/// Minimum resume text length in characters for JSON endpoints.
pub const MIN_RESUME_CHARS: usize = 20;

const INVALID_INPUT: &str = "Invalid input";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRequest {
    #[serde(default)]
    pub resume_text: String,
    #[serde(default)]
    pub jd: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    pub score: u32,
    pub missing_keywords: Vec<String>,
    pub resume_text: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhanceRequest {
    #[serde(default)]
    pub resume_text: String,
    #[serde(default)]
    pub missing_keywords: Vec<String>,
    #[serde(default)]
    pub jd: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhanceResponse {
    pub updated_resume: String,
    pub new_score: u32,
    pub still_missing: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/ats/analyze
///
/// Multipart form: `resume` (file) and `jd` (text). Extracts the resume text,
/// scores it against the JD and echoes the extracted text back.
pub async fn handle_analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let mut jd: Option<String> = None;
    let mut upload: Option<(String, Bytes)> = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some("jd") => jd = Some(field.text().await?),
            Some("resume") => {
                let filename = field.file_name().unwrap_or_default().to_owned();
                upload = Some((filename, field.bytes().await?));
            }
            _ => {}
        }
    }

    let jd = jd
        .filter(|jd| has_min_chars(jd, MIN_JD_CHARS))
        .ok_or_else(|| AppError::Validation("JD too short".to_string()))?;
    let (filename, bytes) = upload.ok_or_else(|| {
        AppError::Validation("Resume file is required (pdf, docx, or txt)".to_string())
    })?;

    let resume_text = state.extractor.extract_text(&filename, bytes).await?;
    let result = score(&resume_text, &jd);

    info!(
        filename = %filename,
        score = result.score,
        missing = result.missing_keywords.len(),
        "Analyzed uploaded resume"
    );

    Ok(Json(AnalyzeResponse {
        score: result.score,
        missing_keywords: result.missing_keywords,
        resume_text,
    }))
}

/// POST /api/v1/ats/score
///
/// Scores already-extracted resume text against a JD.
pub async fn handle_score(
    payload: Result<Json<ScoreRequest>, JsonRejection>,
) -> Result<Json<MatchResult>, AppError> {
    let Json(request) = payload.map_err(invalid_body)?;
    if !has_min_chars(&request.resume_text, MIN_RESUME_CHARS)
        || !has_min_chars(&request.jd, MIN_JD_CHARS)
    {
        return Err(AppError::Validation(INVALID_INPUT.to_string()));
    }

    Ok(Json(score(&request.resume_text, &request.jd)))
}

/// POST /api/v1/ats/enhance
///
/// Weaves missing keywords into the resume and re-scores it against the JD
/// (an absent JD scores 0).
pub async fn handle_enhance(
    payload: Result<Json<EnhanceRequest>, JsonRejection>,
) -> Result<Json<EnhanceResponse>, AppError> {
    let Json(request) = payload.map_err(invalid_body)?;
    if !has_min_chars(&request.resume_text, MIN_RESUME_CHARS) {
        return Err(AppError::Validation(INVALID_INPUT.to_string()));
    }

    let result = enhance(&request.resume_text, &request.missing_keywords, &request.jd);

    info!(
        keywords = request.missing_keywords.len(),
        new_score = result.new_score,
        still_missing = result.still_missing.len(),
        "Enhanced resume"
    );

    Ok(Json(EnhanceResponse {
        updated_resume: result.updated_text,
        new_score: result.new_score,
        still_missing: result.still_missing,
    }))
}

/// Malformed or mistyped JSON bodies get the same answer as failed length checks.
fn invalid_body(rejection: JsonRejection) -> AppError {
    debug!(status = %rejection.status(), reason = %rejection.body_text(), "Rejected JSON body");
    AppError::Validation(INVALID_INPUT.to_string())
}

fn has_min_chars(text: &str, min: usize) -> bool {
    text.chars().count() >= min
}
