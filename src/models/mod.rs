pub mod board;
pub mod card;
pub mod column;
pub mod label;

use uuid::Uuid;

pub use board::{Board, BoardId, BoardSummary, IntegrityIssue};
pub use card::{Card, CardId, CardPatch};
pub use column::{Column, ColumnId};
pub use label::{dedup_labels, Label};

/// Fresh opaque id for boards, columns and cards.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}
