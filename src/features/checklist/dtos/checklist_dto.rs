use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::checklist::models::{AnswerValue, ChecklistCatalog};

/// Checklist catalog as served to the form collector
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistCatalogDto {
    pub sections: Vec<ChecklistSectionDto>,
    /// Accepted answer values, in display order
    pub answer_options: Vec<AnswerValue>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistSectionDto {
    pub index: usize,
    pub title: String,
    pub items: Vec<ChecklistItemDto>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistItemDto {
    pub index: usize,
    pub prompt: String,
    /// Multipart field name the answer must be submitted under
    #[schema(example = "checklistAnswers[0-3]")]
    pub field_name: String,
}

impl From<&ChecklistCatalog> for ChecklistCatalogDto {
    fn from(catalog: &ChecklistCatalog) -> Self {
        let sections = catalog
            .sections
            .iter()
            .enumerate()
            .map(|(section_index, section)| ChecklistSectionDto {
                index: section_index,
                title: section.title.clone(),
                items: section
                    .items
                    .iter()
                    .enumerate()
                    .map(|(item_index, prompt)| ChecklistItemDto {
                        index: item_index,
                        prompt: prompt.clone(),
                        field_name: format!("checklistAnswers[{}-{}]", section_index, item_index),
                    })
                    .collect(),
            })
            .collect();

        Self {
            sections,
            answer_options: AnswerValue::ALL.to_vec(),
        }
    }
}
