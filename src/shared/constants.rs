// =============================================================================
// FORM FIELDS
// =============================================================================

pub const FIELD_CLIENTE: &str = "cliente";
pub const FIELD_OBRA: &str = "obra";
pub const FIELD_DIRECCION: &str = "direccion";
pub const FIELD_FECHA: &str = "fecha";
pub const FIELD_SISTEMA: &str = "sistema";
pub const FIELD_ADMINISTRADOR: &str = "administrador";
pub const FIELD_PROFESIONAL_TERRENO: &str = "profesionalTerreno";
pub const FIELD_PREVENCION: &str = "prevencion";
pub const FIELD_BODEGA: &str = "bodega";
pub const FIELD_EMAIL: &str = "email";

/// Multipart field name shared by every uploaded image
pub const FIELD_ATTACHMENTS: &str = "attachments";

/// Fields that must be present and non-blank, in the order they are reported
pub const REQUIRED_FIELDS: &[&str] = &[
    FIELD_CLIENTE,
    FIELD_OBRA,
    FIELD_DIRECCION,
    FIELD_FECHA,
    FIELD_EMAIL,
];

// =============================================================================
// ATTACHMENT POLICY
// =============================================================================

pub const MAX_ATTACHMENTS: usize = 5;

/// Maximum size of a single attachment (5MB)
pub const MAX_ATTACHMENT_SIZE: usize = 5 * 1024 * 1024;

pub const ALLOWED_ATTACHMENT_MIME_TYPES: &[&str] = &["image/jpeg", "image/png", "image/gif"];

pub fn is_attachment_mime_type_allowed(content_type: &str) -> bool {
    ALLOWED_ATTACHMENT_MIME_TYPES.contains(&content_type)
}

// =============================================================================
// RESPONSE MESSAGES
// =============================================================================

pub const MSG_EMAIL_SENT: &str = "Correo enviado exitosamente";
pub const MSG_METHOD_NOT_ALLOWED: &str = "Método no permitido";
pub const MSG_MALFORMED_REQUEST: &str = "Error al procesar el formulario";
pub const MSG_SEND_FAILED: &str = "Error al enviar el correo";
pub const MSG_INVALID_EMAIL: &str = "Email inválido.";
pub const MSG_MISSING_FIELDS_PREFIX: &str = "Faltan campos requeridos: ";

pub const DEFAULT_MAIL_SUBJECT: &str = "Nuevo Formulario de Inspección";

pub fn too_many_attachments_message() -> String {
    format!("Puedes adjuntar hasta {} imágenes.", MAX_ATTACHMENTS)
}

pub fn invalid_image_message(file_name: &str) -> String {
    format!("El archivo {} no es una imagen válida.", file_name)
}

pub fn attachment_too_large_message(file_name: &str) -> String {
    format!(
        "El archivo {} excede el tamaño máximo permitido ({}MB).",
        file_name,
        MAX_ATTACHMENT_SIZE / 1024 / 1024
    )
}
