use serde::{Deserialize, Serialize};

use super::{new_id, CardId};

pub type ColumnId = String;

/// An ordered list of cards. `card_ids` order is the display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    pub card_ids: Vec<CardId>,
}

impl Column {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            title: title.into(),
            card_ids: Vec::new(),
        }
    }

    pub fn contains(&self, card_id: &str) -> bool {
        self.card_ids.iter().any(|id| id == card_id)
    }

    pub fn position(&self, card_id: &str) -> Option<usize> {
        self.card_ids.iter().position(|id| id == card_id)
    }
}
