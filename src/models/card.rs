use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::{dedup_labels, new_id, Label};

pub type CardId = String;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: CardId,
    pub title: String,
    pub description: String,
    pub labels: Vec<Label>,
    pub due_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

impl Card {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            title: title.into(),
            description: description.into(),
            labels: Vec::new(),
            due_date: None,
            created_at: Utc::now(),
        }
    }

    pub fn has_label(&self, label_id: &str) -> bool {
        self.labels.iter().any(|label| label.id == label_id)
    }

    /// Return a copy with the patch's fields merged in. `id` and `created_at`
    /// are not patchable.
    pub fn patched(&self, patch: &CardPatch) -> Self {
        let mut next = self.clone();
        if let Some(title) = &patch.title {
            next.title = title.clone();
        }
        if let Some(description) = &patch.description {
            next.description = description.clone();
        }
        if let Some(labels) = &patch.labels {
            next.labels = dedup_labels(labels.clone());
        }
        if let Some(due_date) = patch.due_date {
            next.due_date = due_date;
        }
        next
    }
}

/// Partial card update. Absent fields are left untouched; for `due_date`,
/// `Some(None)` (JSON `null`) clears the date.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<Label>>,
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub due_date: Option<Option<NaiveDate>>,
}

impl CardPatch {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn labels(mut self, labels: Vec<Label>) -> Self {
        self.labels = Some(labels);
        self
    }

    pub fn due_date(mut self, due_date: Option<NaiveDate>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.labels.is_none()
            && self.due_date.is_none()
    }
}

// A present key (even `null`) becomes `Some(..)`; a missing key falls back to
// the field default of `None`.
fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<Option<NaiveDate>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<NaiveDate>::deserialize(deserializer).map(Some)
}
