use std::collections::BTreeMap;

use chrono::Utc;

use crate::{
    board::mutations::create_board,
    labels::catalog_label,
    models::{new_id, Board, Card, Column},
};

pub const SAMPLE_BOARD_TITLE: &str = "My First Board";

// (title, description, label ids, column index)
const SAMPLE_CARDS: [(&str, &str, &[&str], usize); 4] = [
    (
        "Set up project repo",
        "Initialize the repository with Next.js and Tailwind.",
        &["l2"],
        0,
    ),
    (
        "Design database schema",
        "Define the data models for boards, lists, and cards.",
        &["l5"],
        0,
    ),
    (
        "Build drag-and-drop UI",
        "Implement card reordering with dnd-kit.",
        &["l6", "l2"],
        1,
    ),
    (
        "Fix card deletion bug",
        "Cards not removing from column after delete.",
        &["l1"],
        2,
    ),
];

/// First-run board: four columns and a handful of labelled sample cards.
pub fn sample_board() -> Board {
    let mut columns: Vec<Column> = ["To Do", "In Progress", "Review", "Done"]
        .into_iter()
        .map(Column::new)
        .collect();
    let mut cards = BTreeMap::new();

    for (title, description, label_ids, column_index) in SAMPLE_CARDS {
        let mut card = Card::new(title, description);
        card.labels = label_ids.iter().filter_map(|id| catalog_label(id)).collect();
        columns[column_index].card_ids.push(card.id.clone());
        cards.insert(card.id.clone(), card);
    }

    Board {
        id: new_id(),
        title: SAMPLE_BOARD_TITLE.to_string(),
        columns,
        cards,
        created_at: Utc::now(),
    }
}

/// First-run board without sample cards.
pub fn empty_default_board() -> Board {
    create_board(SAMPLE_BOARD_TITLE)
}
