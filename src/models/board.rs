use std::collections::{BTreeMap, HashSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{dedup_labels, Card, CardId, Column, ColumnId};

pub type BoardId = String;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    pub id: BoardId,
    pub title: String,
    pub columns: Vec<Column>,
    pub cards: BTreeMap<CardId, Card>,
    pub created_at: DateTime<Utc>,
}

/// Counts shown in the board header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardSummary {
    pub column_count: usize,
    pub card_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntegrityIssue {
    /// A column references a card id missing from `cards`.
    DanglingCardId { column_id: ColumnId, card_id: CardId },
    /// A card id is listed more than once across all columns.
    DuplicateCardId { column_id: ColumnId, card_id: CardId },
    /// A card no column references. Unreachable but harmless.
    OrphanedCard { card_id: CardId },
    DuplicateLabel { card_id: CardId, label_id: String },
}

impl Board {
    pub fn column(&self, column_id: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.id == column_id)
    }

    pub fn card(&self, card_id: &str) -> Option<&Card> {
        self.cards.get(card_id)
    }

    /// The column whose `card_ids` currently holds `card_id`.
    pub fn column_of(&self, card_id: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.contains(card_id))
    }

    pub fn summary(&self) -> BoardSummary {
        BoardSummary {
            column_count: self.columns.len(),
            card_count: self.cards.len(),
        }
    }

    pub fn integrity_issues(&self) -> Vec<IntegrityIssue> {
        let mut issues = Vec::new();
        let mut seen: HashSet<&str> = HashSet::new();

        for column in &self.columns {
            for card_id in &column.card_ids {
                if !self.cards.contains_key(card_id) {
                    issues.push(IntegrityIssue::DanglingCardId {
                        column_id: column.id.clone(),
                        card_id: card_id.clone(),
                    });
                } else if !seen.insert(card_id.as_str()) {
                    issues.push(IntegrityIssue::DuplicateCardId {
                        column_id: column.id.clone(),
                        card_id: card_id.clone(),
                    });
                }
            }
        }

        for (card_id, card) in &self.cards {
            if !seen.contains(card_id.as_str()) {
                issues.push(IntegrityIssue::OrphanedCard {
                    card_id: card_id.clone(),
                });
            }
            let mut label_ids: HashSet<&str> = HashSet::new();
            for label in &card.labels {
                if !label_ids.insert(label.id.as_str()) {
                    issues.push(IntegrityIssue::DuplicateLabel {
                        card_id: card_id.clone(),
                        label_id: label.id.clone(),
                    });
                }
            }
        }

        issues
    }

    /// Copy with dangling and repeated card references dropped (first
    /// occurrence wins) and duplicate labels removed. Orphaned cards stay.
    pub fn repaired(&self) -> Board {
        let mut seen: HashSet<CardId> = HashSet::new();
        let columns = self
            .columns
            .iter()
            .map(|column| Column {
                card_ids: column
                    .card_ids
                    .iter()
                    .filter(|id| self.cards.contains_key(*id) && seen.insert((*id).clone()))
                    .cloned()
                    .collect(),
                ..column.clone()
            })
            .collect();

        let cards = self
            .cards
            .iter()
            .map(|(id, card)| {
                let card = Card {
                    labels: dedup_labels(card.labels.clone()),
                    ..card.clone()
                };
                (id.clone(), card)
            })
            .collect();

        Board {
            columns,
            cards,
            ..self.clone()
        }
    }
}
