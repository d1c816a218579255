mod checklist_service;

pub use checklist_service::{ChecklistRow, ChecklistService};
