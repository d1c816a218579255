use std::sync::Arc;

use tracing::{debug, info};

use crate::core::error::{AppError, Result};
use crate::features::checklist::services::ChecklistService;
use crate::features::inspections::models::{Attachment, Submission, SubmissionForm};
use crate::features::inspections::services::EmailComposer;
use crate::modules::mail::MailTransport;
use crate::shared::constants::{
    attachment_too_large_message, invalid_image_message, is_attachment_mime_type_allowed,
    too_many_attachments_message, MAX_ATTACHMENTS, MAX_ATTACHMENT_SIZE,
    MSG_MISSING_FIELDS_PREFIX,
};

/// Turns one parsed inspection form into exactly one outbound email
pub struct InspectionService {
    checklist: Arc<ChecklistService>,
    composer: EmailComposer,
    mailer: Arc<dyn MailTransport>,
}

impl InspectionService {
    pub fn new(
        checklist: Arc<ChecklistService>,
        composer: EmailComposer,
        mailer: Arc<dyn MailTransport>,
    ) -> Self {
        Self {
            checklist,
            composer,
            mailer,
        }
    }

    /// Validate, render and dispatch a submission.
    ///
    /// Every validation failure returns before anything is sent. The send is
    /// attempted once.
    pub async fn submit(&self, form: SubmissionForm) -> Result<()> {
        let missing = form.missing_required();
        if !missing.is_empty() {
            return Err(AppError::Validation(format!(
                "{}{}",
                MSG_MISSING_FIELDS_PREFIX,
                missing.join(", ")
            )));
        }

        let submission = Submission::from_form(&form);
        submission
            .validate_email()
            .map_err(|msg| AppError::Validation(msg.to_string()))?;

        Self::check_attachments(&form.attachments)?;

        let answers = self.checklist.extract_answers(form.field_pairs());
        let rows = self.checklist.render_rows(&answers);

        debug!(
            "Inspection validated: obra={}, answers={}, attachments={}",
            submission.obra,
            rows.len(),
            form.attachments.len()
        );

        let email = self
            .composer
            .compose(&submission, &rows, form.attachments)?;

        self.mailer
            .send(email)
            .await
            .map_err(|e| AppError::Transport(e.to_string()))?;

        info!(
            "Inspection email sent: cliente={}, obra={}, from={}",
            submission.cliente, submission.obra, submission.email
        );

        Ok(())
    }

    fn check_attachments(attachments: &[Attachment]) -> Result<()> {
        if attachments.len() > MAX_ATTACHMENTS {
            return Err(AppError::Validation(too_many_attachments_message()));
        }

        for attachment in attachments {
            if !is_attachment_mime_type_allowed(&attachment.content_type) {
                return Err(AppError::Validation(invalid_image_message(
                    &attachment.filename,
                )));
            }
            if attachment.size() > MAX_ATTACHMENT_SIZE {
                return Err(AppError::Validation(attachment_too_large_message(
                    &attachment.filename,
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::checklist::models::{ChecklistCatalog, UNKNOWN_SECTION};
    use crate::shared::test_helpers::{image, valid_form, RecordingMailer};

    fn service(mailer: Arc<RecordingMailer>) -> InspectionService {
        InspectionService::new(
            Arc::new(ChecklistService::new(Arc::new(
                ChecklistCatalog::scaffolding_inspection(),
            ))),
            EmailComposer::new("operador@example.com", "Nuevo Formulario de Inspección"),
            mailer,
        )
    }

    fn validation_message(result: Result<()>) -> String {
        match result {
            Err(AppError::Validation(msg)) => msg,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_submit_sends_one_email() {
        let mailer = Arc::new(RecordingMailer::default());
        let mut form = valid_form();
        form.push_field("checklistAnswers[1-2]", "NO");
        form.attachments.push(image("foto.png", "image/png", 16));

        service(mailer.clone()).submit(form).await.unwrap();

        let sent = mailer.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to, "operador@example.com");
        assert_eq!(sent[0].attachments.len(), 1);
        assert!(sent[0]
            .text_body
            .contains("¿Horizontales y cabezales instalados correctamente?: NO"));
    }

    #[tokio::test]
    async fn test_submit_missing_fields_does_not_send() {
        let mailer = Arc::new(RecordingMailer::default());
        let mut form = SubmissionForm::default();
        form.push_field("obra", "Edificio Norte");
        form.push_field("fecha", "2024-05-02");

        let msg = validation_message(service(mailer.clone()).submit(form).await);
        assert_eq!(msg, "Faltan campos requeridos: cliente, direccion, email");
        assert!(mailer.sent().is_empty());
    }

    #[tokio::test]
    async fn test_submit_invalid_email_does_not_send() {
        let mailer = Arc::new(RecordingMailer::default());
        let mut form = valid_form();
        form.push_field("email", "ana en obra.cl");

        let msg = validation_message(service(mailer.clone()).submit(form).await);
        assert_eq!(msg, "Email inválido.");
        assert!(mailer.sent().is_empty());
    }

    #[tokio::test]
    async fn test_submit_attachment_limits() {
        let mailer = Arc::new(RecordingMailer::default());
        let service = service(mailer.clone());

        let mut form = valid_form();
        for i in 0..6 {
            form.attachments
                .push(image(&format!("foto{}.jpg", i), "image/jpeg", 8));
        }
        let msg = validation_message(service.submit(form).await);
        assert_eq!(msg, "Puedes adjuntar hasta 5 imágenes.");

        let mut form = valid_form();
        form.attachments.push(image("plano.pdf", "application/pdf", 8));
        let msg = validation_message(service.submit(form).await);
        assert_eq!(msg, "El archivo plano.pdf no es una imagen válida.");

        let mut form = valid_form();
        form.attachments
            .push(image("grande.gif", "image/gif", MAX_ATTACHMENT_SIZE + 1));
        let msg = validation_message(service.submit(form).await);
        assert_eq!(
            msg,
            "El archivo grande.gif excede el tamaño máximo permitido (5MB)."
        );

        assert!(mailer.sent().is_empty());
    }

    #[tokio::test]
    async fn test_submit_five_attachments_accepted() {
        let mailer = Arc::new(RecordingMailer::default());
        let mut form = valid_form();
        for i in 0..MAX_ATTACHMENTS {
            form.attachments
                .push(image(&format!("foto{}.png", i), "image/png", 8));
        }

        service(mailer.clone()).submit(form).await.unwrap();
        assert_eq!(mailer.sent()[0].attachments.len(), MAX_ATTACHMENTS);
    }

    #[tokio::test]
    async fn test_submit_out_of_range_key_still_sends() {
        let mailer = Arc::new(RecordingMailer::default());
        let mut form = valid_form();
        form.push_field("checklistAnswers[99-0]", "SI");
        form.push_field("checklistAnswers[0-0]", "NO APLICA");

        service(mailer.clone()).submit(form).await.unwrap();

        let sent = mailer.sent();
        assert_eq!(sent.len(), 1);
        assert!(sent[0].text_body.contains(UNKNOWN_SECTION));
        assert!(sent[0]
            .text_body
            .contains("¿Superficie de terreno es estable y nivelada?: NO APLICA"));
    }

    #[tokio::test]
    async fn test_submit_unrecognized_answer_still_sends() {
        let mailer = Arc::new(RecordingMailer::default());
        let mut form = valid_form();
        form.push_field("checklistAnswers[1-0]", "TAL VEZ");

        service(mailer.clone()).submit(form).await.unwrap();

        let sent = mailer.sent();
        assert_eq!(sent.len(), 1);
        assert!(sent[0]
            .html_body
            .contains("<td>¿Niveladores sobre placas de madera?</td><td>TAL VEZ</td>"));
    }

    #[tokio::test]
    async fn test_submit_transport_failure() {
        let mailer = Arc::new(RecordingMailer::failing("535 authentication failed"));

        let result = service(mailer.clone()).submit(valid_form()).await;
        match result {
            Err(AppError::Transport(detail)) => {
                assert!(detail.contains("535 authentication failed"))
            }
            other => panic!("expected transport error, got {:?}", other),
        }
        assert!(mailer.sent().is_empty());
    }
}
