use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::features::checklist::dtos::ChecklistCatalogDto;
use crate::features::checklist::services::ChecklistService;
use crate::shared::types::ApiResponse;

/// Get the inspection checklist catalog
///
/// The form builds its sections and answer fields from this catalog, so the
/// labels in the emailed report always match what the inspector answered.
#[utoipa::path(
    get,
    path = "/api/checklist",
    responses(
        (status = 200, description = "Checklist catalog", body = ApiResponse<ChecklistCatalogDto>),
    ),
    tag = "checklist"
)]
pub async fn get_checklist(
    State(service): State<Arc<ChecklistService>>,
) -> Result<Json<ApiResponse<ChecklistCatalogDto>>> {
    let catalog = ChecklistCatalogDto::from(service.catalog());
    Ok(Json(ApiResponse::success(Some(catalog), "OK")))
}
