use chrono::NaiveDate;
use serde::Serialize;
use validator::Validate;

use crate::features::inspections::models::Attachment;
use crate::modules::mail::parse_mailbox;
use crate::shared::constants::{
    FIELD_ADMINISTRADOR, FIELD_BODEGA, FIELD_CLIENTE, FIELD_DIRECCION, FIELD_EMAIL, FIELD_FECHA,
    FIELD_OBRA, FIELD_PREVENCION, FIELD_PROFESIONAL_TERRENO, FIELD_SISTEMA, MSG_INVALID_EMAIL,
    REQUIRED_FIELDS,
};
use crate::shared::validation::EMAIL_REGEX;

/// Raw multipart submission: text fields in arrival order plus every file
/// received under the attachments field
#[derive(Debug, Default, Clone)]
pub struct SubmissionForm {
    pub fields: Vec<(String, String)>,
    pub attachments: Vec<Attachment>,
}

impl SubmissionForm {
    pub fn push_field(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.push((name.into(), value.into()));
    }

    /// Last non-blank value submitted under `name`, trimmed
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .rev()
            .filter(|(key, _)| key == name)
            .map(|(_, value)| value.trim())
            .find(|value| !value.is_empty())
    }

    /// Required field names that are absent or blank, in reporting order
    pub fn missing_required(&self) -> Vec<&'static str> {
        REQUIRED_FIELDS
            .iter()
            .copied()
            .filter(|name| self.field(name).is_none())
            .collect()
    }

    /// `(name, value)` pairs in arrival order
    pub fn field_pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Scalar metadata of one inspection
#[derive(Debug, Clone, Serialize, Validate)]
pub struct Submission {
    pub cliente: String,
    pub obra: String,
    pub direccion: String,
    pub fecha: String,
    pub sistema: String,
    pub administrador: String,
    pub profesional_terreno: String,
    pub prevencion: String,
    pub bodega: String,
    #[validate(regex(path = *EMAIL_REGEX, message = "Email inválido."))]
    pub email: String,
}

impl Submission {
    pub fn from_form(form: &SubmissionForm) -> Self {
        let get = |name: &str| form.field(name).unwrap_or_default().to_string();

        Self {
            cliente: get(FIELD_CLIENTE),
            obra: get(FIELD_OBRA),
            direccion: get(FIELD_DIRECCION),
            fecha: get(FIELD_FECHA),
            sistema: get(FIELD_SISTEMA),
            administrador: get(FIELD_ADMINISTRADOR),
            profesional_terreno: get(FIELD_PROFESIONAL_TERRENO),
            prevencion: get(FIELD_PREVENCION),
            bodega: get(FIELD_BODEGA),
            email: get(FIELD_EMAIL),
        }
    }

    /// Sender address check, mapped to the user-facing message. The address
    /// must also be usable as the message's From mailbox.
    pub fn validate_email(&self) -> Result<(), &'static str> {
        self.validate().map_err(|_| MSG_INVALID_EMAIL)?;
        parse_mailbox(&self.email).map_err(|_| MSG_INVALID_EMAIL)?;
        Ok(())
    }

    /// Inspection date as shown in the email: `YYYY-MM-DD` becomes
    /// `DD-MM-YYYY`, anything else is kept verbatim
    pub fn display_date(&self) -> String {
        NaiveDate::parse_from_str(&self.fecha, "%Y-%m-%d")
            .map(|date| date.format("%d-%m-%Y").to_string())
            .unwrap_or_else(|_| self.fecha.clone())
    }
}
