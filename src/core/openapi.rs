use utoipa::{Modify, OpenApi};

use crate::features::checklist::{dtos as checklist_dtos, handlers as checklist_handlers};
use crate::features::checklist::models::AnswerValue;
use crate::features::inspections::{dtos as inspections_dtos, handlers as inspections_handlers};
use crate::shared::types::ApiResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Inspections
        inspections_handlers::inspection_handler::send_inspection,
        // Checklist
        checklist_handlers::checklist_handler::get_checklist,
    ),
    components(
        schemas(
            // Inspections
            inspections_dtos::InspectionFormDto,
            inspections_dtos::MessageResponseDto,
            // Checklist
            AnswerValue,
            checklist_dtos::ChecklistCatalogDto,
            checklist_dtos::ChecklistSectionDto,
            checklist_dtos::ChecklistItemDto,
            ApiResponse<checklist_dtos::ChecklistCatalogDto>,
        )
    ),
    tags(
        (name = "inspections", description = "Scaffolding inspection form submission"),
        (name = "checklist", description = "Inspection checklist catalog"),
    ),
    info(
        title = "Inspección de Andamios API",
        version = "0.1.0",
        description = "Recepción de formularios de inspección de andamios",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
