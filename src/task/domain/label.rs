//! Task labels and the default catalog.

use serde::{Deserialize, Serialize};

/// A task label from the label catalog.
///
/// Labels are picked from the catalog, not freely created; only the name
/// ever crosses the wire, the id and colour are client-side concerns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    /// Catalog identifier.
    pub id: String,
    /// Display name; the only part transmitted to the backend.
    pub name: String,
    /// Swatch colour as a hex string.
    pub color: String,
}

impl Label {
    fn from_parts(id: &str, name: &str, color: &str) -> Self {
        Self {
            id: id.to_owned(),
            name: name.to_owned(),
            color: color.to_owned(),
        }
    }

    /// The fixed default label catalog.
    #[must_use]
    pub fn default_catalog() -> Vec<Self> {
        vec![
            Self::from_parts("1", "Bug", "#eb5757"),
            Self::from_parts("2", "Feature", "#bb87fc"),
            Self::from_parts("3", "Improvement", "#4ea7fc"),
            Self::from_parts("4", "No Label", "#999999"),
        ]
    }

    /// Whether this is the "No Label" placeholder.
    #[must_use]
    pub fn is_no_label(&self) -> bool {
        self.name == "No Label"
    }
}

/// The "No Label" placeholder, selected by default.
impl Default for Label {
    fn default() -> Self {
        Self::from_parts("4", "No Label", "#999999")
    }
}
