// src/web/handlers.rs
use rocket::form::Form;
use rocket::fs::TempFile;
use rocket::serde::json::Json;
use rocket::State;
use tracing::{error, info};

use crate::pipeline::{JobTrendPipeline, RunInput, Shell};
use crate::web::types::{
    AnalyzeForm, DataResponse, StandardErrorResponse, TextResponse, TrendInsightsData,
};

// 10MB upload limit, matching what a profile PDF reasonably needs.
const MAX_PDF_SIZE: u64 = 10 * 1024 * 1024;

pub async fn analyze_handler(
    mut upload: Form<AnalyzeForm<'_>>,
    pipeline: &State<JobTrendPipeline>,
) -> Result<Json<DataResponse<TrendInsightsData>>, Json<StandardErrorResponse>> {
    let location = upload.location.trim().to_string();

    if location.is_empty() {
        return Err(Json(StandardErrorResponse::new(
            "Please enter a location.".to_string(),
            "MISSING_LOCATION".to_string(),
            vec!["Provide a location slug such as 'new-york'".to_string()],
        )));
    }

    let profile_pdf = match upload.profile_pdf.as_mut() {
        Some(file) if file.len() > 0 => Some(read_profile_upload(file).await?),
        _ => None,
    };

    info!(
        "Analyze run requested: location='{}', profile_pdf={}",
        location,
        profile_pdf.is_some()
    );

    let mut shell = Shell::new(pipeline.inner().clone());
    let report = shell
        .trigger(&RunInput {
            location,
            profile_pdf,
        })
        .await;

    Ok(Json(DataResponse::success(
        "Job trend analysis completed".to_string(),
        TrendInsightsData::from(report),
    )))
}

async fn read_profile_upload(
    file: &mut TempFile<'_>,
) -> Result<Vec<u8>, Json<StandardErrorResponse>> {
    if !file.content_type().map_or(false, |ct| ct.is_pdf()) {
        let received_type = file
            .content_type()
            .map(|ct| ct.to_string())
            .unwrap_or_else(|| "unknown".to_string());

        return Err(Json(StandardErrorResponse::new(
            format!("Only PDF profiles are supported. Received: {}", received_type),
            "INVALID_FORMAT".to_string(),
            vec!["Upload a PDF file (.pdf)".to_string()],
        )));
    }

    if file.len() > MAX_PDF_SIZE {
        return Err(Json(StandardErrorResponse::new(
            "File size exceeds 10MB limit".to_string(),
            "FILE_TOO_LARGE".to_string(),
            vec!["Use a smaller profile PDF (max 10MB)".to_string()],
        )));
    }

    // Spool the upload to disk just long enough to pull the bytes into
    // memory; the temp file is removed before the pipeline runs.
    let temp_path = std::env::temp_dir().join(format!("jobpulse_upload_{}", uuid::Uuid::new_v4()));

    if let Err(e) = file.persist_to(&temp_path).await {
        error!("Failed to save uploaded file: {}", e);
        return Err(Json(StandardErrorResponse::new(
            "Failed to process uploaded file".to_string(),
            "FILE_SAVE_ERROR".to_string(),
            vec!["Try uploading the file again".to_string()],
        )));
    }

    let bytes = tokio::fs::read(&temp_path).await;
    let _ = tokio::fs::remove_file(&temp_path).await;

    bytes.map_err(|e| {
        error!("Failed to read uploaded file: {}", e);
        Json(StandardErrorResponse::new(
            "Failed to process uploaded file".to_string(),
            "FILE_READ_ERROR".to_string(),
            vec!["Try uploading the file again".to_string()],
        ))
    })
}

pub async fn health_handler() -> Json<TextResponse> {
    Json(TextResponse::success(
        "JobPulse analysis service is running".to_string(),
    ))
}
