use crate::modules::mail::MailAttachment;

/// Image uploaded with a submission, held fully in memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub filename: String,
    pub content: Vec<u8>,
    pub content_type: String,
}

impl Attachment {
    pub fn size(&self) -> usize {
        self.content.len()
    }
}

impl From<Attachment> for MailAttachment {
    fn from(attachment: Attachment) -> Self {
        MailAttachment {
            filename: attachment.filename,
            content: attachment.content,
            content_type: attachment.content_type,
        }
    }
}
