//! SMTP mail transport
//!
//! Sends composed inspection emails through an authenticated SMTP relay
//! (implicit TLS). Uses lettre's pooled async transport on the tokio runtime.

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::{Attachment, Mailbox, MultiPart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::{debug, info};

use crate::core::config::MailConfig;
use crate::modules::mail::message::{MailError, MailTransport, OutboundEmail};

pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    host: String,
}

impl SmtpMailer {
    pub fn new(config: &MailConfig) -> Result<Self, MailError> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)
            .map_err(|e| MailError::Smtp(format!("Invalid SMTP relay: {}", e)))?
            .port(config.smtp_port)
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .timeout(Some(config.timeout))
            .build();

        Ok(Self {
            transport,
            host: config.smtp_host.clone(),
        })
    }

    /// Open a connection to the relay and check it answers
    pub async fn test_connection(&self) -> Result<bool, MailError> {
        self.transport
            .test_connection()
            .await
            .map_err(|e| MailError::Smtp(e.to_string()))
    }

    pub fn host(&self) -> &str {
        &self.host
    }
}

/// Parse an address the way the SMTP message builder will
pub fn parse_mailbox(address: &str) -> Result<Mailbox, MailError> {
    address.parse::<Mailbox>().map_err(|e| MailError::Address {
        address: address.to_string(),
        reason: e.to_string(),
    })
}

/// Build a multipart/mixed message: text + HTML alternative, then one part
/// per attachment
pub fn build_message(email: OutboundEmail) -> Result<Message, MailError> {
    let mut builder = Message::builder()
        .from(parse_mailbox(&email.from)?)
        .to(parse_mailbox(&email.to)?)
        .subject(email.subject);

    if let Some(reply_to) = email.reply_to.as_deref() {
        builder = builder.reply_to(parse_mailbox(reply_to)?);
    }

    let mut body = MultiPart::mixed().multipart(MultiPart::alternative_plain_html(
        email.text_body,
        email.html_body,
    ));

    for attachment in email.attachments {
        let content_type = ContentType::parse(&attachment.content_type).map_err(|e| {
            MailError::Build(format!(
                "Invalid content type '{}' for {}: {}",
                attachment.content_type, attachment.filename, e
            ))
        })?;
        body = body.singlepart(
            Attachment::new(attachment.filename).body(attachment.content, content_type),
        );
    }

    builder
        .multipart(body)
        .map_err(|e| MailError::Build(e.to_string()))
}

#[async_trait]
impl MailTransport for SmtpMailer {
    async fn send(&self, email: OutboundEmail) -> Result<(), MailError> {
        let to = email.to.clone();
        let attachment_count = email.attachments.len();
        let message = build_message(email)?;

        debug!("Sending email via {} to {}", self.host, to);

        let response = self
            .transport
            .send(message)
            .await
            .map_err(|e| MailError::Smtp(e.to_string()))?;

        info!(
            "Email accepted by {}: to={}, attachments={}, code={}",
            self.host,
            to,
            attachment_count,
            response.code()
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::mail::message::MailAttachment;

    fn email() -> OutboundEmail {
        OutboundEmail {
            from: "inspector@obra.cl".to_string(),
            reply_to: Some("inspector@obra.cl".to_string()),
            to: "operador@example.com".to_string(),
            subject: "Nuevo Formulario de Inspeccion".to_string(),
            text_body: "Cliente: Constructora Sur".to_string(),
            html_body: "<p>Cliente: Constructora Sur</p>".to_string(),
            attachments: vec![MailAttachment {
                filename: "foto.png".to_string(),
                content: vec![0x89, 0x50, 0x4e, 0x47],
                content_type: "image/png".to_string(),
            }],
        }
    }

    #[test]
    fn test_build_message_includes_headers_and_attachment() {
        let message = build_message(email()).unwrap();
        let raw = String::from_utf8_lossy(&message.formatted()).to_string();

        assert!(raw.contains("From: inspector@obra.cl"));
        assert!(raw.contains("To: operador@example.com"));
        assert!(raw.contains("Reply-To: inspector@obra.cl"));
        assert!(raw.contains("multipart/alternative"));
        assert!(raw.contains("filename=\"foto.png\""));
        assert!(raw.contains("image/png"));
    }

    #[test]
    fn test_build_message_rejects_bad_sender() {
        let mut email = email();
        email.from = "not an address".to_string();

        let result = build_message(email);
        assert!(matches!(result, Err(MailError::Address { .. })));
    }

    #[test]
    fn test_build_message_rejects_bad_content_type() {
        let mut email = email();
        email.attachments[0].content_type = "not a mime".to_string();

        let result = build_message(email);
        assert!(matches!(result, Err(MailError::Build(_))));
    }
}
