use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, warn};

use crate::features::checklist::models::{
    parse_checklist_key, AnswerValue, ChecklistAnswer, ChecklistCatalog,
};

/// One rendered checklist line, ready for the email templates
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChecklistRow {
    pub section_index: usize,
    pub item_index: usize,
    pub section: String,
    pub item: String,
    pub answer: String,
}

/// Reconstructs checklist answers from flattened form fields and resolves
/// them against the shared catalog
pub struct ChecklistService {
    catalog: Arc<ChecklistCatalog>,
}

impl ChecklistService {
    pub fn new(catalog: Arc<ChecklistCatalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &ChecklistCatalog {
        &self.catalog
    }

    /// Collect answers from `(name, value)` form fields.
    ///
    /// Fields that are not checklist keys are skipped. Order follows the
    /// first occurrence of each `(section, item)` pair; a repeated pair
    /// overwrites the earlier value. Unrecognized answer values and indices
    /// outside the catalog are kept and logged, never rejected.
    pub fn extract_answers<'a, I>(&self, fields: I) -> Vec<ChecklistAnswer>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut answers: Vec<ChecklistAnswer> = Vec::new();

        for (name, raw) in fields {
            let Some((section_index, item_index)) = parse_checklist_key(name) else {
                continue;
            };

            let value = match raw.parse::<AnswerValue>() {
                Ok(answer) => answer.as_str().to_string(),
                Err(()) => {
                    warn!("Unrecognized checklist answer in {}: {:?}", name, raw);
                    raw.trim().to_string()
                }
            };

            if section_index >= self.catalog.sections.len()
                || item_index >= self.catalog.sections[section_index].items.len()
            {
                warn!(
                    "Checklist answer outside catalog: section={}, item={}",
                    section_index, item_index
                );
            }

            match answers
                .iter_mut()
                .find(|a| a.section_index == section_index && a.item_index == item_index)
            {
                Some(existing) => {
                    debug!("Overwriting checklist answer {}", name);
                    existing.value = value;
                }
                None => answers.push(ChecklistAnswer {
                    section_index,
                    item_index,
                    value,
                }),
            }
        }

        answers
    }

    /// Resolve answers to labelled rows, keeping answer order
    pub fn render_rows(&self, answers: &[ChecklistAnswer]) -> Vec<ChecklistRow> {
        answers
            .iter()
            .map(|a| {
                let labels = self.catalog.resolve(a.section_index, a.item_index);
                ChecklistRow {
                    section_index: a.section_index,
                    item_index: a.item_index,
                    section: labels.section.to_string(),
                    item: labels.item.to_string(),
                    answer: a.value.clone(),
                }
            })
            .collect()
    }
}
