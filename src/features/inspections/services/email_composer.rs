use minijinja::context;

use crate::core::error::{AppError, Result};
use crate::features::checklist::services::ChecklistRow;
use crate::features::inspections::models::{Attachment, Submission};
use crate::modules::mail::OutboundEmail;
use crate::shared::templates::{
    render_template, INSPECTION_HTML_TEMPLATE, INSPECTION_TEXT_TEMPLATE,
};

/// Renders inspection emails addressed to the fixed operator mailbox
pub struct EmailComposer {
    recipient: String,
    subject: String,
}

impl EmailComposer {
    pub fn new(recipient: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            recipient: recipient.into(),
            subject: subject.into(),
        }
    }

    pub fn compose(
        &self,
        submission: &Submission,
        rows: &[ChecklistRow],
        attachments: Vec<Attachment>,
    ) -> Result<OutboundEmail> {
        let attachment_names: Vec<&str> =
            attachments.iter().map(|a| a.filename.as_str()).collect();

        let ctx = context! {
            cliente => &submission.cliente,
            obra => &submission.obra,
            direccion => &submission.direccion,
            fecha => submission.display_date(),
            sistema => &submission.sistema,
            administrador => &submission.administrador,
            profesional_terreno => &submission.profesional_terreno,
            prevencion => &submission.prevencion,
            bodega => &submission.bodega,
            email => &submission.email,
            rows => rows,
            attachments => attachment_names,
        };

        let text_body = render_template(INSPECTION_TEXT_TEMPLATE, ctx.clone())
            .map_err(|e| AppError::Internal(e.to_string()))?;
        let html_body = render_template(INSPECTION_HTML_TEMPLATE, ctx)
            .map_err(|e| AppError::Internal(e.to_string()))?;

        Ok(OutboundEmail {
            from: submission.email.clone(),
            reply_to: Some(submission.email.clone()),
            to: self.recipient.clone(),
            subject: self.subject.clone(),
            text_body,
            html_body,
            attachments: attachments.into_iter().map(Into::into).collect(),
        })
    }
}
