//! Drag-and-drop reconciliation.
//!
//! Cross-column placement happens on drag-over so the card follows the
//! pointer across column boundaries. Same-column ordering is only settled on
//! drag-end.

use serde::{Deserialize, Serialize};

use crate::models::{Board, Card, Column};

use super::mutations::{array_move, move_card};

/// Gesture phases as reported by the UI's drag framework. `over_id` names
/// either a column or a card; ids are globally unique so it is resolved
/// against the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum DragEvent {
    #[serde(rename_all = "camelCase")]
    Start { active_id: String },
    #[serde(rename_all = "camelCase")]
    Over {
        active_id: String,
        over_id: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    End {
        active_id: String,
        over_id: Option<String>,
    },
}

/// Transient state of one gesture: the card shown in the drag overlay.
#[derive(Debug, Clone, Default)]
pub struct DragSession {
    active: Option<Card>,
}

impl DragSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_card(&self) -> Option<&Card> {
        self.active.as_ref()
    }

    /// Dispatch one event. `Some(board)` is the replacement board to render
    /// and persist; `None` means the board is unchanged.
    pub fn handle(&mut self, board: &Board, event: &DragEvent) -> Option<Board> {
        match event {
            DragEvent::Start { active_id } => {
                self.start(board, active_id);
                None
            }
            DragEvent::Over { active_id, over_id } => {
                self.over(board, active_id, over_id.as_deref())
            }
            DragEvent::End { active_id, over_id } => {
                self.end(board, active_id, over_id.as_deref())
            }
        }
    }

    pub fn start(&mut self, board: &Board, active_id: &str) {
        self.active = board.card(active_id).cloned();
    }

    pub fn over(&self, board: &Board, active_id: &str, over_id: Option<&str>) -> Option<Board> {
        let over_id = over_id?;
        let active_column = board.column_of(active_id)?;

        // Hovering a column body moves the card to its end.
        if let Some(over_column) = board.column(over_id) {
            if over_column.id == active_column.id {
                return None;
            }
            return Some(move_card(
                board,
                active_id,
                &active_column.id,
                &over_column.id,
                over_column.card_ids.len(),
            ));
        }

        let over_column = board.column_of(over_id)?;
        if over_column.id == active_column.id {
            return None;
        }
        let over_index = over_column.position(over_id)?;
        Some(move_card(
            board,
            active_id,
            &active_column.id,
            &over_column.id,
            over_index,
        ))
    }

    pub fn end(&mut self, board: &Board, active_id: &str, over_id: Option<&str>) -> Option<Board> {
        self.active = None;

        let over_id = over_id?;
        if over_id == active_id {
            return None;
        }

        let column = board.column_of(active_id)?;
        let new_index = column.position(over_id)?;
        let old_index = column.position(active_id)?;
        if old_index == new_index {
            return None;
        }

        let card_ids = array_move(&column.card_ids, old_index, new_index);
        let column_id = column.id.clone();
        let columns = board
            .columns
            .iter()
            .map(|candidate| {
                if candidate.id == column_id {
                    Column {
                        card_ids: card_ids.clone(),
                        ..candidate.clone()
                    }
                } else {
                    candidate.clone()
                }
            })
            .collect();

        Some(Board {
            columns,
            ..board.clone()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::mutations::create_board;

    // A: [c1, c2, c3], B: [c4], C: []
    fn fixture() -> Board {
        let mut board = create_board("Drag");
        for (column, id) in board.columns.iter_mut().zip(["A", "B", "C"]) {
            column.id = id.into();
        }
        for (column, card) in [(0, "c1"), (0, "c2"), (0, "c3"), (1, "c4")] {
            let mut entry = Card::new(card, "");
            entry.id = card.into();
            board.columns[column].card_ids.push(card.into());
            board.cards.insert(card.into(), entry);
        }
        board
    }

    fn ids(board: &Board, column_id: &str) -> Vec<String> {
        board.column(column_id).unwrap().card_ids.clone()
    }

    #[test]
    fn start_tracks_active_card() {
        let board = fixture();
        let mut session = DragSession::new();
        assert!(session.handle(&board, &DragEvent::Start { active_id: "c2".into() }).is_none());
        assert_eq!(session.active_card().map(|c| c.id.as_str()), Some("c2"));
    }

    #[test]
    fn start_on_unknown_card_tracks_nothing() {
        let mut session = DragSession::new();
        session.start(&fixture(), "ghost");
        assert!(session.active_card().is_none());
    }

    #[test]
    fn end_clears_active_card() {
        let board = fixture();
        let mut session = DragSession::new();
        session.start(&board, "c1");
        session.end(&board, "c1", None);
        assert!(session.active_card().is_none());
    }

    #[test]
    fn over_other_column_appends() {
        let board = fixture();
        let next = DragSession::new().over(&board, "c1", Some("B")).unwrap();
        assert_eq!(ids(&next, "A"), vec!["c2", "c3"]);
        assert_eq!(ids(&next, "B"), vec!["c4", "c1"]);
    }

    #[test]
    fn over_empty_column_appends() {
        let next = DragSession::new().over(&fixture(), "c4", Some("C")).unwrap();
        assert!(ids(&next, "B").is_empty());
        assert_eq!(ids(&next, "C"), vec!["c4"]);
    }

    #[test]
    fn over_card_in_other_column_takes_its_index() {
        let next = DragSession::new().over(&fixture(), "c4", Some("c2")).unwrap();
        assert_eq!(ids(&next, "A"), vec!["c1", "c4", "c2", "c3"]);
        assert!(ids(&next, "B").is_empty());
    }

    #[test]
    fn over_own_column_or_sibling_is_noop() {
        let board = fixture();
        let session = DragSession::new();
        assert!(session.over(&board, "c1", Some("A")).is_none());
        assert!(session.over(&board, "c1", Some("c3")).is_none());
        assert!(session.over(&board, "c1", None).is_none());
    }

    #[test]
    fn over_aborts_when_active_card_has_no_column() {
        let board = fixture();
        assert!(DragSession::new().over(&board, "ghost", Some("B")).is_none());
    }

    #[test]
    fn end_reorders_within_column() {
        let board = fixture();
        let next = DragSession::new().end(&board, "c2", Some("c1")).unwrap();
        assert_eq!(ids(&next, "A"), vec!["c2", "c1", "c3"]);
    }

    #[test]
    fn end_onto_last_position() {
        let next = DragSession::new().end(&fixture(), "c1", Some("c3")).unwrap();
        assert_eq!(ids(&next, "A"), vec!["c2", "c3", "c1"]);
    }

    #[test]
    fn end_over_self_or_nothing_is_noop() {
        let board = fixture();
        let mut session = DragSession::new();
        assert!(session.end(&board, "c2", Some("c2")).is_none());
        assert!(session.end(&board, "c2", None).is_none());
    }

    #[test]
    fn end_over_own_column_area_is_noop() {
        assert!(DragSession::new().end(&fixture(), "c2", Some("A")).is_none());
    }

    #[test]
    fn end_after_cross_column_over_settles_order() {
        let board = fixture();
        let mut session = DragSession::new();
        session.start(&board, "c1");
        let moved = session.over(&board, "c1", Some("c4")).unwrap();
        assert_eq!(ids(&moved, "B"), vec!["c1", "c4"]);

        // The pointer was released over c4, now a sibling: settle the order.
        let settled = session.end(&moved, "c1", Some("c4")).unwrap();
        assert_eq!(ids(&settled, "B"), vec!["c4", "c1"]);
        assert_eq!(ids(&settled, "A"), vec!["c2", "c3"]);
        assert!(settled.integrity_issues().is_empty());
    }

    #[test]
    fn end_over_card_in_other_column_is_noop() {
        assert!(DragSession::new().end(&fixture(), "c1", Some("c4")).is_none());
    }

    #[test]
    fn draining_a_column_leaves_it_empty() {
        let mut board = fixture();
        let session = DragSession::new();
        for card in ["c1", "c2", "c3"] {
            board = session.over(&board, card, Some("C")).unwrap();
        }
        assert!(ids(&board, "A").is_empty());
        assert_eq!(ids(&board, "C"), vec!["c1", "c2", "c3"]);
        assert!(board.integrity_issues().is_empty());
    }

    #[test]
    fn handle_dispatches_over_and_end() {
        let board = fixture();
        let mut session = DragSession::new();
        session.handle(&board, &DragEvent::Start { active_id: "c3".into() });

        let over = DragEvent::Over {
            active_id: "c3".into(),
            over_id: Some("c4".into()),
        };
        let moved = session.handle(&board, &over).unwrap();
        assert_eq!(ids(&moved, "B"), vec!["c3", "c4"]);
        assert!(session.active_card().is_some());

        let end = DragEvent::End {
            active_id: "c3".into(),
            over_id: Some("c4".into()),
        };
        let settled = session.handle(&moved, &end).unwrap();
        assert_eq!(ids(&settled, "B"), vec!["c4", "c3"]);
        assert!(session.active_card().is_none());
    }

    #[test]
    fn handle_without_target_changes_nothing() {
        let board = fixture();
        let mut session = DragSession::new();
        let over = DragEvent::Over {
            active_id: "c1".into(),
            over_id: None,
        };
        let end = DragEvent::End {
            active_id: "c1".into(),
            over_id: None,
        };
        assert!(session.handle(&board, &over).is_none());
        assert!(session.handle(&board, &end).is_none());
    }

    #[test]
    fn events_deserialize_from_ui_payloads() {
        let event: DragEvent =
            serde_json::from_str(r#"{"type":"over","activeId":"c1","overId":"B"}"#).unwrap();
        assert_eq!(
            event,
            DragEvent::Over {
                active_id: "c1".into(),
                over_id: Some("B".into())
            }
        );
    }
}
