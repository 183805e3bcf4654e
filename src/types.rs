use serde::{Deserialize, Serialize};

/// Raw OSCAL catalog document as returned by the remote source
pub type RawCatalog = serde_json::Value;

/// One flattened row per security control
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlRecord {
    pub id: String,
    pub title: String,
    pub category: String,
    pub family: String,
    pub description: String,
    pub guidance: String,
    pub parameters: String,
    pub related: String,
}

impl ControlRecord {
    /// List entry shown in the control list: `"{id} - {title}"`.
    pub fn list_entry(&self) -> String {
        format!("{} - {}", self.id, self.title)
    }

    /// Full detail-panel text for one control.
    pub fn detail(&self) -> String {
        format!(
            "🔹 {}\nID: {}\nCategory: {}\nFamily: {}\n\n{}\n\n{}\n\nParameters:\n{}\n\nRelated: {}",
            self.title,
            self.id,
            self.category,
            self.family,
            self.description,
            self.guidance,
            self.parameters,
            self.related,
        )
    }
}

/// Immutable result of one catalog load: the flattened, id-sorted controls
/// plus the distinct category labels for selector population.
///
/// Built once per fetch and treated as read-only afterwards; filtering only
/// derives views over `controls`.
#[derive(Debug, Clone)]
pub struct CatalogSnapshot {
    pub controls: Vec<ControlRecord>,
    pub categories: Vec<String>,
}

impl CatalogSnapshot {
    pub fn find(&self, id: &str) -> Option<&ControlRecord> {
        self.controls.iter().find(|record| record.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }
}
