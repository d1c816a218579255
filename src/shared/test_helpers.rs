use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum_test::TestServer;

use crate::features::checklist::{self, ChecklistCatalog, ChecklistService};
use crate::features::inspections::{self, models::Attachment, models::SubmissionForm};
use crate::features::inspections::{EmailComposer, InspectionService};
use crate::modules::mail::{MailError, MailTransport, OutboundEmail};
use crate::shared::constants::DEFAULT_MAIL_SUBJECT;

pub const TEST_RECIPIENT: &str = "operador@example.com";

/// Mail transport double that records what it was asked to send, or fails
/// every send with a fixed SMTP error
#[derive(Default)]
pub struct RecordingMailer {
    sent: Mutex<Vec<OutboundEmail>>,
    failure: Option<String>,
}

impl RecordingMailer {
    pub fn failing(reason: &str) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            failure: Some(reason.to_string()),
        }
    }

    pub fn sent(&self) -> Vec<OutboundEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl MailTransport for RecordingMailer {
    async fn send(&self, email: OutboundEmail) -> Result<(), MailError> {
        if let Some(reason) = &self.failure {
            return Err(MailError::Smtp(reason.clone()));
        }
        self.sent.lock().unwrap().push(email);
        Ok(())
    }
}

/// Form with every scalar field filled in and no checklist answers
pub fn valid_form() -> SubmissionForm {
    let mut form = SubmissionForm::default();
    form.push_field("cliente", "Constructora Sur");
    form.push_field("obra", "Edificio Norte");
    form.push_field("direccion", "Av. Matta 1200, Santiago");
    form.push_field("fecha", "2024-05-02");
    form.push_field("sistema", "FRONT");
    form.push_field("administrador", "Luis Pérez");
    form.push_field("profesionalTerreno", "Pedro Soto");
    form.push_field("prevencion", "Camila Rojas");
    form.push_field("bodega", "Bodega Central");
    form.push_field("email", "inspector@obra.cl");
    form
}

pub fn image(filename: &str, content_type: &str, size: usize) -> Attachment {
    Attachment {
        filename: filename.to_string(),
        content: vec![0u8; size],
        content_type: content_type.to_string(),
    }
}

/// Application router wired to the given mail transport
pub fn test_app(mailer: Arc<dyn MailTransport>, max_body_size: usize) -> Router {
    let checklist_service = Arc::new(ChecklistService::new(Arc::new(
        ChecklistCatalog::scaffolding_inspection(),
    )));
    let inspection_service = Arc::new(InspectionService::new(
        Arc::clone(&checklist_service),
        EmailComposer::new(TEST_RECIPIENT, DEFAULT_MAIL_SUBJECT),
        mailer,
    ));

    Router::new()
        .merge(checklist::routes(checklist_service))
        .merge(inspections::routes(inspection_service, max_body_size))
}

pub fn test_server(mailer: Arc<dyn MailTransport>) -> TestServer {
    TestServer::new(test_app(mailer, 26 * 1024 * 1024)).unwrap()
}
