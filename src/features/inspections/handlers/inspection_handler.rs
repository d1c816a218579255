use std::sync::Arc;

use axum::{extract::State, Json};
use tracing::debug;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppMultipart;
use crate::features::inspections::dtos::{InspectionFormDto, MessageResponseDto};
use crate::features::inspections::models::{Attachment, SubmissionForm};
use crate::features::inspections::services::InspectionService;
use crate::shared::constants::{FIELD_ATTACHMENTS, MSG_EMAIL_SENT};
use crate::shared::types::ApiResponse;

/// Submit an inspection form
///
/// Accepts multipart/form-data with the site metadata, one
/// `checklistAnswers[<section>-<item>]` field per answered item and up to 5
/// images under `attachments`. The form is emailed to the operator mailbox.
#[utoipa::path(
    post,
    path = "/api/sendEmail",
    tag = "inspections",
    request_body(
        content = InspectionFormDto,
        content_type = "multipart/form-data",
        description = "Inspection form with checklist answers and image attachments",
    ),
    responses(
        (status = 200, description = "Email sent", body = MessageResponseDto),
        (status = 400, description = "Missing fields, invalid email or attachment policy violation", body = MessageResponseDto),
        (status = 405, description = "Method not allowed", body = MessageResponseDto),
        (status = 500, description = "Form could not be processed or email could not be sent", body = MessageResponseDto)
    )
)]
pub async fn send_inspection(
    State(service): State<Arc<InspectionService>>,
    AppMultipart(mut multipart): AppMultipart,
) -> Result<Json<ApiResponse<()>>> {
    let mut form = SubmissionForm::default();

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        debug!("Failed to read multipart field: {}", e);
        AppError::MalformedRequest(format!("Failed to read multipart data: {}", e))
    })? {
        let field_name = field.name().unwrap_or("").to_string();

        if field_name == FIELD_ATTACHMENTS {
            let content_type = field
                .content_type()
                .map(|s| s.to_string())
                .unwrap_or_else(|| "application/octet-stream".to_string());

            let file_name = field.file_name().map(|s| s.to_string()).unwrap_or_default();

            let data = field.bytes().await.map_err(|e| {
                debug!("Failed to read attachment bytes: {}", e);
                AppError::MalformedRequest(format!("Failed to read file data: {}", e))
            })?;

            // An empty file input is still posted as a part with no name and no bytes
            if file_name.is_empty() && data.is_empty() {
                debug!("Skipping empty attachment part");
                continue;
            }

            let filename = if file_name.is_empty() {
                format!("adjunto-{}", form.attachments.len() + 1)
            } else {
                file_name
            };

            form.attachments.push(Attachment {
                filename,
                content: data.to_vec(),
                content_type,
            });
        } else if field.file_name().is_some() {
            debug!("Ignoring file under unexpected field: {}", field_name);
        } else {
            let value = field.text().await.map_err(|e| {
                AppError::MalformedRequest(format!("Failed to read field {}: {}", field_name, e))
            })?;
            form.push_field(field_name, value);
        }
    }

    service.submit(form).await?;

    Ok(Json(ApiResponse::success(None, MSG_EMAIL_SENT)))
}

/// Any method other than POST on the submission endpoint
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
