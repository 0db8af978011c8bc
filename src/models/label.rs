//! Label-related data models.
//!
//! Labels are value objects: a card carries full copies, not references, so
//! renaming a catalog entry never rewrites stored cards.

use serde::{Deserialize, Serialize};

/// A named, colored tag attachable to cards. Identity is `id`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Label {
    pub id: String,
    pub name: String,
    pub color: String,
}

impl Label {
    pub fn new(id: impl Into<String>, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color: color.into(),
        }
    }
}

/// Drop labels whose id already appeared earlier in the list.
pub fn dedup_labels(labels: Vec<Label>) -> Vec<Label> {
    let mut kept: Vec<Label> = Vec::with_capacity(labels.len());
    for label in labels {
        if !kept.iter().any(|existing| existing.id == label.id) {
            kept.push(label);
        }
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dedup_keeps_first_occurrence() {
        let labels = vec![
            Label::new("a", "First", "#000"),
            Label::new("b", "Other", "#111"),
            Label::new("a", "Second", "#222"),
        ];
        let kept = dedup_labels(labels);
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].name, "First");
        assert_eq!(kept[1].id, "b");
    }
}
