//! Pure board edits.
//!
//! Every function borrows the current board and returns a new one; the input
//! is never touched. An edit that references an id the board does not have
//! returns a clone equal to the input, so callers can compare with `==` to
//! decide whether to re-render or persist.

use std::collections::BTreeMap;

use chrono::Utc;

use crate::models::{new_id, Board, Card, CardPatch, Column, Label};

pub const DEFAULT_COLUMNS: [&str; 3] = ["To Do", "In Progress", "Done"];

/// New board with the default To Do / In Progress / Done columns.
pub fn create_board(title: &str) -> Board {
    Board {
        id: new_id(),
        title: title.to_string(),
        columns: DEFAULT_COLUMNS.iter().copied().map(Column::new).collect(),
        cards: BTreeMap::new(),
        created_at: Utc::now(),
    }
}

pub fn rename_board(board: &Board, title: &str) -> Board {
    Board {
        title: title.to_string(),
        ..board.clone()
    }
}

/// Append an empty column at the end of the board.
pub fn add_column(board: &Board, title: &str) -> Board {
    let mut columns = board.columns.clone();
    columns.push(Column::new(title));
    Board {
        columns,
        ..board.clone()
    }
}

pub fn rename_column(board: &Board, column_id: &str, title: &str) -> Board {
    let columns = board
        .columns
        .iter()
        .map(|column| {
            if column.id == column_id {
                Column {
                    title: title.to_string(),
                    ..column.clone()
                }
            } else {
                column.clone()
            }
        })
        .collect();
    Board {
        columns,
        ..board.clone()
    }
}

/// Remove a column together with every card it holds.
pub fn delete_column(board: &Board, column_id: &str) -> Board {
    let Some(doomed) = board.column(column_id) else {
        return board.clone();
    };

    let mut cards = board.cards.clone();
    for card_id in &doomed.card_ids {
        cards.remove(card_id);
    }

    Board {
        columns: board
            .columns
            .iter()
            .filter(|column| column.id != column_id)
            .cloned()
            .collect(),
        cards,
        ..board.clone()
    }
}

/// Create a card at the bottom of `column_id`.
///
/// An unknown column leaves the board unchanged; the card is not created, so
/// no unreachable card can be left behind.
pub fn add_card(board: &Board, column_id: &str, title: &str, description: Option<&str>) -> Board {
    if board.column(column_id).is_none() {
        return board.clone();
    }

    let card = Card::new(title, description.unwrap_or_default());
    let columns = board
        .columns
        .iter()
        .map(|column| {
            if column.id == column_id {
                let mut card_ids = column.card_ids.clone();
                card_ids.push(card.id.clone());
                Column {
                    card_ids,
                    ..column.clone()
                }
            } else {
                column.clone()
            }
        })
        .collect();

    let mut cards = board.cards.clone();
    cards.insert(card.id.clone(), card);

    Board {
        columns,
        cards,
        ..board.clone()
    }
}

pub fn update_card(board: &Board, card_id: &str, patch: &CardPatch) -> Board {
    let Some(existing) = board.cards.get(card_id) else {
        return board.clone();
    };

    let mut cards = board.cards.clone();
    cards.insert(card_id.to_string(), existing.patched(patch));
    Board {
        cards,
        ..board.clone()
    }
}

/// Remove a card from the mapping and from whichever column lists it.
pub fn delete_card(board: &Board, card_id: &str) -> Board {
    let mut cards = board.cards.clone();
    cards.remove(card_id);

    let columns = board
        .columns
        .iter()
        .map(|column| Column {
            card_ids: column
                .card_ids
                .iter()
                .filter(|id| *id != card_id)
                .cloned()
                .collect(),
            ..column.clone()
        })
        .collect();

    Board {
        columns,
        cards,
        ..board.clone()
    }
}

/// Move `card_id` from one column to `new_index` of another (or the same)
/// column.
///
/// The index is read against the target list with the card already removed
/// and is clamped to its length. Nothing happens unless the card currently
/// sits in `from_column_id` and `to_column_id` exists.
pub fn move_card(
    board: &Board,
    card_id: &str,
    from_column_id: &str,
    to_column_id: &str,
    new_index: usize,
) -> Board {
    let source_holds_card = board
        .column(from_column_id)
        .is_some_and(|column| column.contains(card_id));
    if !source_holds_card || board.column(to_column_id).is_none() {
        return board.clone();
    }

    let columns = board
        .columns
        .iter()
        .map(|column| {
            let is_source = column.id == from_column_id;
            let is_target = column.id == to_column_id;
            if !is_source && !is_target {
                return column.clone();
            }

            let mut card_ids: Vec<String> = if is_source {
                column
                    .card_ids
                    .iter()
                    .filter(|id| *id != card_id)
                    .cloned()
                    .collect()
            } else {
                column.card_ids.clone()
            };

            if is_target {
                let index = new_index.min(card_ids.len());
                card_ids.insert(index, card_id.to_string());
            }

            Column {
                card_ids,
                ..column.clone()
            }
        })
        .collect();

    Board {
        columns,
        ..board.clone()
    }
}

/// Attach `label` if the card lacks a label with its id, otherwise detach it.
pub fn toggle_label(board: &Board, card_id: &str, label: &Label) -> Board {
    let Some(card) = board.cards.get(card_id) else {
        return board.clone();
    };

    let labels = if card.has_label(&label.id) {
        card.labels
            .iter()
            .filter(|existing| existing.id != label.id)
            .cloned()
            .collect()
    } else {
        let mut labels = card.labels.clone();
        labels.push(label.clone());
        labels
    };

    update_card(board, card_id, &CardPatch::default().labels(labels))
}

/// Move one element from `from` to `to`, shifting everything in between by
/// one. Out-of-range `from` returns the list unchanged; `to` is clamped.
pub fn array_move<T: Clone>(items: &[T], from: usize, to: usize) -> Vec<T> {
    let mut moved = items.to_vec();
    if from >= moved.len() {
        return moved;
    }
    let item = moved.remove(from);
    let to = to.min(moved.len());
    moved.insert(to, item);
    moved
}
