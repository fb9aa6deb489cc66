//! Axum route handlers for resume import/export. The service keeps no resume
//! state; callers send their current record and get the updated one back.

use axum::{
    body::Bytes,
    extract::{multipart::MultipartError, Multipart, Path},
    http::header,
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::models::resume::ResumeRecord;
use crate::resume::aggregate::aggregate;
use crate::resume::document::{
    parse_combined, parse_section, to_combined_json, DocumentError, ImportedResume, Section,
    SectionSummary,
};

const EXPORT_FILE_NAME: &str = "combined_resume.json";

#[derive(Debug, Serialize)]
pub struct ImportResponse {
    pub resume: ResumeRecord,
    pub sections: Vec<Section>,
    pub summary: SectionSummary,
}

impl From<ImportedResume> for ImportResponse {
    fn from(imported: ImportedResume) -> Self {
        let summary = SectionSummary::of(&imported.resume);
        Self {
            resume: imported.resume,
            sections: imported.sections,
            summary,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ResumeTextResponse {
    pub text: String,
}

/// POST /api/v1/resume/import
pub async fn handle_import(body: Bytes) -> Result<Json<ImportResponse>, AppError> {
    let imported = parse_combined(&body)?;
    info!(sections = ?imported.sections, "Imported combined resume");
    Ok(Json(imported.into()))
}

/// POST /api/v1/resume/import/:section
///
/// The response record carries only the uploaded section.
pub async fn handle_import_section(
    Path(section): Path<String>,
    body: Bytes,
) -> Result<Json<ImportResponse>, AppError> {
    let section: Section = section
        .parse()
        .map_err(|e: DocumentError| AppError::NotFound(e.to_string()))?;
    let imported = parse_section(section, &body)?;
    info!(%section, "Imported resume section");
    Ok(Json(imported.into()))
}

/// POST /api/v1/resume/upload
///
/// Multipart form. Optional `resume` field holds the caller's current record;
/// a `combined` file and/or per-section files (`personal`, `experience`,
/// `education`, `projects`) replace the matching sections of it. Section files
/// are applied after the combined file.
pub async fn handle_upload(mut multipart: Multipart) -> Result<Json<ImportResponse>, AppError> {
    let mut resume = ResumeRecord::default();
    let mut combined: Option<Bytes> = None;
    let mut section_files: Vec<(Section, Bytes)> = Vec::new();

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };
        let data = field.bytes().await.map_err(multipart_error)?;

        match name.as_str() {
            "resume" => resume = serde_json::from_slice(&data).map_err(DocumentError::from)?,
            "combined" => combined = Some(data),
            other => match other.parse::<Section>() {
                Ok(section) => section_files.push((section, data)),
                Err(_) => warn!(field = other, "Ignoring unknown upload field"),
            },
        }
    }

    if combined.is_none() && section_files.is_empty() {
        return Err(AppError::Validation(
            "Upload a combined resume file or at least one section file".to_string(),
        ));
    }

    let mut uploaded: Vec<Section> = Vec::new();

    if let Some(raw) = combined {
        let imported = parse_combined(&raw)?;
        resume.replace_sections(imported.resume, &imported.sections);
        uploaded.extend(imported.sections);
    }

    for (section, raw) in section_files {
        let imported = parse_section(section, &raw)?;
        resume.replace_sections(imported.resume, &imported.sections);
        if !uploaded.contains(&section) {
            uploaded.push(section);
        }
    }

    info!(sections = ?uploaded, "Resume upload applied");

    Ok(Json(
        ImportedResume {
            resume,
            sections: uploaded,
        }
        .into(),
    ))
}

/// POST /api/v1/resume/export
///
/// Returns the combined document as a downloadable JSON file.
pub async fn handle_export(
    Json(resume): Json<ResumeRecord>,
) -> Result<impl IntoResponse, AppError> {
    let body = to_combined_json(&resume).map_err(|e| AppError::Internal(e.into()))?;
    let disposition = format!("attachment; filename=\"{EXPORT_FILE_NAME}\"");

    Ok((
        [
            (header::CONTENT_TYPE, "application/json".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    ))
}

/// POST /api/v1/resume/text
///
/// Read-only preview of the text the scorer sees.
pub async fn handle_resume_text(Json(resume): Json<ResumeRecord>) -> Json<ResumeTextResponse> {
    Json(ResumeTextResponse {
        text: aggregate(&resume),
    })
}

/// POST /api/v1/resume/summary
pub async fn handle_summary(Json(resume): Json<ResumeRecord>) -> Json<SectionSummary> {
    Json(SectionSummary::of(&resume))
}

fn multipart_error(e: MultipartError) -> AppError {
    AppError::Validation(format!("Invalid multipart upload: {e}"))
}
