mod email_composer;
mod inspection_service;

pub use email_composer::EmailComposer;
pub use inspection_service::InspectionService;
