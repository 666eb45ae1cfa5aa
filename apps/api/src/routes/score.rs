use axum::{extract::Multipart, Json};

use crate::errors::AppError;
use crate::extract::extract_text;
use crate::models::{ResumeRecord, ScoreResult};
use crate::scoring::{structured, text};

/// POST /api/score
///
/// Scoring itself is total, so the only failure mode is a body that does not
/// deserialize (axum rejects that before we run).
pub async fn handle_score(Json(record): Json<ResumeRecord>) -> Json<ScoreResult> {
    Json(structured::score(&record))
}

/// POST /api/score-file
///
/// Takes the first multipart field that carries a filename, extracts its
/// text, and runs the text scorer. Everything that can fail here is a 400.
pub async fn handle_score_file(
    mut multipart: Multipart,
) -> Result<Json<ScoreResult>, AppError> {
    let mut upload: Option<(String, Vec<u8>)> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Malformed multipart body: {e}")))?
    {
        let Some(filename) = field.file_name().map(str::to_string) else {
            continue; // plain form field, not a file
        };
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(format!("Failed to read upload: {e}")))?;
        upload = Some((filename, data.to_vec()));
        break;
    }

    let (filename, content) = upload.ok_or(AppError::MissingFilename)?;
    if filename.is_empty() {
        return Err(AppError::MissingFilename);
    }
    if content.is_empty() {
        return Err(AppError::EmptyUpload);
    }

    tracing::debug!("scoring upload {filename:?} ({} bytes)", content.len());
    let extracted = extract_text(&filename, &content)?;
    Ok(Json(text::score_from_text(&extracted)))
}
