//! Axum route handlers for the Analysis API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Serialize;

use crate::analysis::prompts;
use crate::analysis::swot::{extract_swot, SwotProfile};
use crate::errors::AppError;
use crate::intake::extract_resume_text;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    pub swot: SwotProfile,
    pub analysis: String,
}

/// Fields collected from the resume upload multipart form.
#[derive(Debug, Default)]
struct ResumeUpload {
    file_bytes: Option<bytes::Bytes>,
    content_type: Option<String>,
    filename: Option<String>,
    name: String,
    email: String,
    experience: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analysis/profile
///
/// Analyzes a manually entered SWOT profile. All four fields must be
/// non-blank before the analysis runs.
pub async fn handle_analyze_profile(
    State(state): State<AppState>,
    Json(swot): Json<SwotProfile>,
) -> Result<Json<AnalysisResponse>, AppError> {
    if !swot.is_complete() {
        return Err(AppError::Validation(
            "All four SWOT fields must be filled in before analyzing".to_string(),
        ));
    }

    let prompt = prompts::profile_analysis_prompt(
        &swot.strengths,
        &swot.weaknesses,
        &swot.opportunities,
        &swot.threats,
    );

    let analysis = state.llm.generate_text(&prompt).await?;

    tracing::info!("Profile analysis complete ({} chars)", analysis.len());

    Ok(Json(AnalysisResponse { swot, analysis }))
}

/// POST /api/v1/analysis/resume
///
/// Multipart resume upload: extracts text, asks the LLM for a SWOT-shaped
/// career analysis, then heuristically recovers the SWOT fields from the
/// narrative for structured redisplay.
pub async fn handle_analyze_resume(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<AnalysisResponse>, AppError> {
    let upload = read_resume_upload(multipart).await?;

    if upload.name.trim().is_empty() || upload.email.trim().is_empty() {
        return Err(AppError::Validation(
            "name and email are required alongside the resume file".to_string(),
        ));
    }
    let file_bytes = upload.file_bytes.ok_or_else(|| {
        AppError::Validation("A resume file is required in the 'file' field".to_string())
    })?;

    let resume_text = extract_resume_text(
        &file_bytes,
        upload.content_type.as_deref(),
        upload.filename.as_deref(),
    )?;

    let prompt = prompts::resume_analysis_prompt(
        &resume_text,
        &upload.name,
        &upload.email,
        upload.experience.as_deref(),
    );

    let analysis = state.llm.generate_text(&prompt).await?;
    let swot = extract_swot(&analysis);

    tracing::info!(
        "Resume analysis complete for {} ({} resume chars)",
        upload.name,
        resume_text.len()
    );

    Ok(Json(AnalysisResponse { swot, analysis }))
}

/// Drains the multipart stream into a `ResumeUpload`. Unknown fields are
/// ignored so client form additions stay non-breaking.
async fn read_resume_upload(mut multipart: Multipart) -> Result<ResumeUpload, AppError> {
    let mut upload = ResumeUpload::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        let Some(field_name) = field.name().map(str::to_string) else {
            continue;
        };

        match field_name.as_str() {
            "file" => {
                upload.content_type = field.content_type().map(str::to_string);
                upload.filename = field.file_name().map(str::to_string);
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
                upload.file_bytes = Some(bytes);
            }
            "name" => upload.name = read_text_field(field).await?,
            "email" => upload.email = read_text_field(field).await?,
            "experience" => upload.experience = Some(read_text_field(field).await?),
            _ => {}
        }
    }

    Ok(upload)
}

async fn read_text_field(field: axum::extract::multipart::Field<'_>) -> Result<String, AppError> {
    field
        .text()
        .await
        .map_err(|e| AppError::Validation(format!("Failed to read form field: {e}")))
}
