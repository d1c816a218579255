use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MailError {
    #[error("Invalid address '{address}': {reason}")]
    Address { address: String, reason: String },

    #[error("Failed to build message: {0}")]
    Build(String),

    #[error("SMTP error: {0}")]
    Smtp(String),
}

/// File carried by an outbound email
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailAttachment {
    pub filename: String,
    pub content: Vec<u8>,
    pub content_type: String,
}

/// Fully composed email, independent of the transport
#[derive(Debug, Clone)]
pub struct OutboundEmail {
    pub from: String,
    pub reply_to: Option<String>,
    pub to: String,
    pub subject: String,
    pub text_body: String,
    pub html_body: String,
    pub attachments: Vec<MailAttachment>,
}

/// Capability that delivers one composed email
#[async_trait]
pub trait MailTransport: Send + Sync {
    async fn send(&self, email: OutboundEmail) -> Result<(), MailError>;
}
