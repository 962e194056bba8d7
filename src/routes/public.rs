use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    Json,
};
use std::path::Path as StdPath;
use tokio::fs;
use validator::Validate;

use crate::dto::candidate_dto::{ApplicationStatusResponse, SubmitApplicationResponse};
use crate::error::{Error, Result};
use crate::services::candidate_service::NewApplication;
use crate::utils::validation::is_valid_national_id;
use crate::AppState;

#[derive(Debug, Validate)]
struct ApplicationForm {
    #[validate(length(min = 1))]
    full_name: String,
    #[validate(email)]
    email: String,
    #[validate(length(min = 1))]
    position_applied: String,
}

async fn save_resume_file(filename: &str, data: &bytes::Bytes) -> Result<String> {
    let ext = StdPath::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_else(|| "bin".to_string());

    let allowed_exts = ["pdf", "doc", "docx", "txt", "rtf", "jpg", "jpeg", "png", "webp"];
    if !allowed_exts.contains(&ext.as_str()) {
        return Err(Error::BadRequest(format!(
            "File type .{} is not allowed",
            ext
        )));
    }

    if ext == "pdf" && !data.starts_with(b"%PDF") {
        return Err(Error::BadRequest("Invalid PDF file content".into()));
    }
    if (ext == "jpg" || ext == "jpeg") && !data.starts_with(&[0xFF, 0xD8]) {
        return Err(Error::BadRequest("Invalid JPEG file content".into()));
    }
    if ext == "png" && !data.starts_with(&[0x89, 0x50, 0x4E, 0x47]) {
        return Err(Error::BadRequest("Invalid PNG file content".into()));
    }

    let upload_dir = format!("{}/resumes", crate::config::get_config().uploads_dir);
    fs::create_dir_all(&upload_dir)
        .await
        .map_err(|e| Error::Internal(e.to_string()))?;

    let file_id = uuid::Uuid::new_v4();
    let safe_filename = format!("{}.{}", file_id, ext);
    let file_path = format!("{}/{}", upload_dir, safe_filename);

    fs::write(&file_path, data).await.map_err(|e| {
        tracing::error!("Failed to write resume file: {}", e);
        Error::Internal(format!("Failed to save file: {}", e))
    })?;

    Ok(file_path)
}

pub async fn submit_application(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl axum::response::IntoResponse> {
    let mut full_name = String::new();
    let mut email = String::new();
    let mut phone = None;
    let mut national_id = None;
    let mut position_applied = String::new();
    let mut years_experience = None;
    let mut education = None;
    let mut resume_url = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        tracing::error!("Failed to read multipart field: {}", e);
        Error::BadRequest(e.to_string())
    })? {
        let field_name = field.name().unwrap_or_default().to_string();

        match field_name.as_str() {
            "full_name" => full_name = field.text().await.unwrap_or_default(),
            "email" => email = field.text().await.unwrap_or_default(),
            "phone" => phone = Some(field.text().await.unwrap_or_default()),
            "national_id" => {
                let value = field.text().await.unwrap_or_default();
                if !value.is_empty() {
                    national_id = Some(value);
                }
            }
            "position_applied" => position_applied = field.text().await.unwrap_or_default(),
            "years_experience" => {
                let raw = field.text().await.unwrap_or_default();
                if let Ok(years) = raw.parse::<i32>() {
                    years_experience = Some(years);
                }
            }
            "education" => education = Some(field.text().await.unwrap_or_default()),
            "resume" => {
                let filename = field.file_name().unwrap_or("resume.bin").to_string();
                let data = field.bytes().await.map_err(|e| {
                    tracing::error!("Failed to read resume bytes: {}", e);
                    Error::BadRequest("Failed to read file upload".into())
                })?;
                if !data.is_empty() {
                    resume_url = Some(save_resume_file(&filename, &data).await?);
                }
            }
            _ => {}
        }
    }

    let form = ApplicationForm {
        full_name: full_name.clone(),
        email: email.clone(),
        position_applied: position_applied.clone(),
    };
    form.validate()?;
    if let Some(ref id) = national_id {
        if !is_valid_national_id(id) {
            return Err(Error::BadRequest("Invalid national id format".into()));
        }
    }

    let candidate = state
        .candidate_service
        .create_application(NewApplication {
            full_name,
            email,
            phone,
            national_id,
            position_applied,
            years_experience,
            education,
            resume_url,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(SubmitApplicationResponse {
            id: candidate.id,
            tracking_token: candidate.tracking_token,
            status: candidate.status,
        }),
    ))
}

pub async fn get_application_status(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> Result<impl axum::response::IntoResponse> {
    let candidate = state
        .candidate_service
        .get_by_tracking_token(&token)
        .await?
        .ok_or_else(|| Error::NotFound("Application not found".into()))?;
    Ok(Json(ApplicationStatusResponse::from(candidate)))
}
