mod answer;
mod catalog;

pub use answer::{parse_checklist_key, AnswerValue, ChecklistAnswer};
pub use catalog::ChecklistCatalog;
#[cfg(test)]
pub use catalog::{UNKNOWN_ITEM, UNKNOWN_SECTION};
