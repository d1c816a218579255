//! Outbound mail
//!
//! `MailTransport` is the seam the submission processor sends through;
//! `SmtpMailer` is the production implementation.

mod message;
mod smtp_mailer;

#[cfg(test)]
pub use message::MailError;
pub use message::{MailAttachment, MailTransport, OutboundEmail};
pub use smtp_mailer::{parse_mailbox, SmtpMailer};
