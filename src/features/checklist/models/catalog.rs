//! Static inspection checklist catalog
//!
//! Translates the numeric `(section, item)` indices carried by the form back
//! into the human-readable section titles and item prompts.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Label used when a section index is outside the catalog
pub const UNKNOWN_SECTION: &str = "Sección desconocida";

/// Label used when an item index is outside its section
pub const UNKNOWN_ITEM: &str = "Ítem desconocido";

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read checklist file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid checklist file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Checklist must contain at least one section")]
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistSection {
    pub title: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistCatalog {
    pub sections: Vec<ChecklistSection>,
}

/// Section title and item prompt for one answered checklist entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLabels<'a> {
    pub section: &'a str,
    pub item: &'a str,
}

impl ChecklistCatalog {
    /// Load a catalog from a JSON file of the form
    /// `{"sections": [{"title": "...", "items": ["..."]}]}`
    pub fn from_json_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        let catalog: ChecklistCatalog = serde_json::from_str(&content)?;

        if catalog.sections.is_empty() {
            return Err(CatalogError::Empty);
        }

        Ok(catalog)
    }

    /// Resolve indices to labels, falling back to placeholders when out of range
    pub fn resolve(&self, section_index: usize, item_index: usize) -> ResolvedLabels<'_> {
        match self.sections.get(section_index) {
            Some(section) => ResolvedLabels {
                section: &section.title,
                item: section
                    .items
                    .get(item_index)
                    .map(String::as_str)
                    .unwrap_or(UNKNOWN_ITEM),
            },
            None => ResolvedLabels {
                section: UNKNOWN_SECTION,
                item: UNKNOWN_ITEM,
            },
        }
    }

    pub fn item_count(&self) -> usize {
        self.sections.iter().map(|s| s.items.len()).sum()
    }

    /// Scaffolding inspection checklist used by the field form
    pub fn scaffolding_inspection() -> Self {
        fn section(title: &str, items: &[&str]) -> ChecklistSection {
            ChecklistSection {
                title: title.to_string(),
                items: items.iter().map(|s| s.to_string()).collect(),
            }
        }

        Self {
            sections: vec![
                section(
                    "PUESTA EN SERVICIO",
                    &[
                        "¿Superficie de terreno es estable y nivelada?",
                        "¿Se revisó material por obra antes del montaje?",
                        "¿Existe mano de obra calificada?",
                        "¿Existe señalización preventiva en los andamios?",
                        "¿Existe fijación al terreno o a la edificación?",
                        "¿La estructura de andamio presenta movimientos?",
                        "¿Existen líneas de vida instaladas no autorizadas?",
                        "¿Montaje acorde a planos enviados?",
                        "¿Andamio es acorde al uso que se solicitó por obra?",
                    ],
                ),
                section(
                    "ESTRUCTURA ANDAMIO MULTIFRONT",
                    &[
                        "¿Niveladores sobre placas de madera?",
                        "¿Andamio se encuentra correctamente nivelado?",
                        "¿Horizontales y cabezales instalados correctamente?",
                        "¿Diagonales se encuentran instaladas correctamente?",
                        "¿Rodapiés multifront instalados correctamente?",
                        "¿Consolas y/o ménsulas instaladas correctamente?",
                        "¿Accesorios adicionales instalados correctamente?",
                        "¿Vigas simples o reticuladas instaladas correctamente?",
                        "¿Arriostres de acuerdo a planos?",
                    ],
                ),
                section(
                    "ESTRUCTURA ANDAMIO FRONT",
                    &[
                        "¿Niveladores sobre placas de madera?",
                        "¿Andamio se encuentra correctamente nivelado?",
                        "¿Marcos instalados correctamente?",
                        "¿Barras horizontales instaladas correctamente?",
                        "¿Rodapiés front instalados correctamente?",
                        "¿Diagonales instaladas correctamente?",
                        "¿Amplia plataformas instaladas correctamente?",
                        "¿Traba cabezal baranda instalados correctamente?",
                        "¿Accesorios adicionales instalados correctamente?",
                        "¿Arriostres de acuerdo a planos?",
                    ],
                ),
                section(
                    "PLATAFORMAS Y TABLONES",
                    &[
                        "¿Plataformas con escala instaladas correctamente?",
                        "¿Tablones instalados correctamente?",
                        "¿Tablones usados correctamente sin traslape?",
                        "¿Plataformas y tablones sin imperfecciones ni dañados?",
                        "¿Plataformas libres de residuos y otros?",
                    ],
                ),
                section(
                    "ANDAMIO FRONT EN VOLADO",
                    &[
                        "¿Montaje acorde a planos enviados?",
                        "¿Instalación de escuadras según lo recomendado?",
                        "¿Escuadra para voladizo instalada correctamente?",
                        "¿Vigas para voladizo instaladas correctamente?",
                        "¿Nivelador para voladizo instalados correctamente?",
                    ],
                ),
            ],
        }
    }
}

impl Default for ChecklistCatalog {
    fn default() -> Self {
        Self::scaffolding_inspection()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_scaffolding_catalog_shape() {
        let catalog = ChecklistCatalog::scaffolding_inspection();
        assert_eq!(catalog.sections.len(), 5);
        assert_eq!(catalog.sections[0].title, "PUESTA EN SERVICIO");
        assert_eq!(catalog.sections[2].items.len(), 10);
        assert_eq!(catalog.item_count(), 38);
    }

    #[test]
    fn test_resolve_in_range() {
        let catalog = ChecklistCatalog::scaffolding_inspection();
        let labels = catalog.resolve(1, 2);
        assert_eq!(labels.section, "ESTRUCTURA ANDAMIO MULTIFRONT");
        assert_eq!(
            labels.item,
            "¿Horizontales y cabezales instalados correctamente?"
        );
    }

    #[test]
    fn test_resolve_out_of_range_uses_placeholders() {
        let catalog = ChecklistCatalog::scaffolding_inspection();

        let labels = catalog.resolve(99, 0);
        assert_eq!(labels.section, UNKNOWN_SECTION);
        assert_eq!(labels.item, UNKNOWN_ITEM);

        // Known section, unknown item keeps the real title
        let labels = catalog.resolve(3, 42);
        assert_eq!(labels.section, "PLATAFORMAS Y TABLONES");
        assert_eq!(labels.item, UNKNOWN_ITEM);
    }

    #[test]
    fn test_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"sections":[{{"title":"ACCESOS","items":["¿Escalas fijadas?"]}}]}}"#
        )
        .unwrap();

        let catalog = ChecklistCatalog::from_json_file(file.path()).unwrap();
        assert_eq!(catalog.sections.len(), 1);
        assert_eq!(catalog.resolve(0, 0).item, "¿Escalas fijadas?");
    }

    #[test]
    fn test_from_json_file_rejects_empty_catalog() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"sections":[]}}"#).unwrap();

        let result = ChecklistCatalog::from_json_file(file.path());
        assert!(matches!(result, Err(CatalogError::Empty)));
    }

    #[test]
    fn test_from_json_file_rejects_malformed_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "sections: []").unwrap();

        let result = ChecklistCatalog::from_json_file(file.path());
        assert!(matches!(result, Err(CatalogError::Parse(_))));
    }
}
