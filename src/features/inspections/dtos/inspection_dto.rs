use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Inspection form for OpenAPI documentation
/// Note: This struct is for Swagger UI documentation only.
/// The actual handler reads the multipart stream directly.
#[derive(Debug, Deserialize, ToSchema)]
#[allow(dead_code)]
pub struct InspectionFormDto {
    #[schema(example = "Constructora Sur")]
    pub cliente: String,
    #[schema(example = "Edificio Norte")]
    pub obra: String,
    #[schema(example = "Av. Matta 1200, Santiago")]
    pub direccion: String,
    #[schema(example = "2024-05-02")]
    pub fecha: String,
    /// ESTANDAR, FRONT or MULTIFRONT
    #[schema(example = "MULTIFRONT")]
    pub sistema: Option<String>,
    pub administrador: Option<String>,
    #[serde(rename = "profesionalTerreno")]
    pub profesional_terreno: Option<String>,
    pub prevencion: Option<String>,
    pub bodega: Option<String>,
    /// Sender address, also used as Reply-To
    #[schema(example = "inspector@obra.cl")]
    pub email: String,
    /// One field per answered item, named `checklistAnswers[<section>-<item>]`,
    /// value SI, NO or NO APLICA
    #[serde(rename = "checklistAnswers[0-0]")]
    #[schema(example = "SI")]
    pub checklist_answer: Option<String>,
    /// Image file (jpeg, png, gif, 5MB max); repeat the field for up to 5 images
    #[schema(format = Binary, content_media_type = "application/octet-stream")]
    pub attachments: Option<String>,
}

/// Body returned by the submission endpoint
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponseDto {
    pub success: bool,
    #[schema(example = "Correo enviado exitosamente")]
    pub message: String,
    /// Underlying failure detail on processing and transport errors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
