use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::validation::CHECKLIST_KEY_REGEX;

/// Tri-state answer to a checklist item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum AnswerValue {
    #[serde(rename = "SI")]
    Si,
    #[serde(rename = "NO")]
    No,
    #[serde(rename = "NO APLICA")]
    NoAplica,
}

impl AnswerValue {
    pub const ALL: [AnswerValue; 3] = [AnswerValue::Si, AnswerValue::No, AnswerValue::NoAplica];

    pub fn as_str(&self) -> &'static str {
        match self {
            AnswerValue::Si => "SI",
            AnswerValue::No => "NO",
            AnswerValue::NoAplica => "NO APLICA",
        }
    }
}

impl fmt::Display for AnswerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnswerValue {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "SI" => Ok(AnswerValue::Si),
            "NO" => Ok(AnswerValue::No),
            "NO APLICA" => Ok(AnswerValue::NoAplica),
            _ => Err(()),
        }
    }
}

/// One answered checklist entry, addressed by zero-based indices.
///
/// `value` is the canonical answer text when it is one of the accepted
/// values, otherwise the submitted text trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistAnswer {
    pub section_index: usize,
    pub item_index: usize,
    pub value: String,
}

/// Parse a flattened `checklistAnswers[<section>-<item>]` field name.
///
/// Returns `None` for keys that are not checklist answers. Indices that do not
/// fit in `usize` saturate so they resolve as out of range.
pub fn parse_checklist_key(key: &str) -> Option<(usize, usize)> {
    let caps = CHECKLIST_KEY_REGEX.captures(key)?;
    let section = caps[1].parse::<usize>().unwrap_or(usize::MAX);
    let item = caps[2].parse::<usize>().unwrap_or(usize::MAX);
    Some((section, item))
}
