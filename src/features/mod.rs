pub mod checklist;
pub mod inspections;
