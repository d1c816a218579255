mod attachment;
mod submission;

pub use attachment::Attachment;
pub use submission::{Submission, SubmissionForm};
