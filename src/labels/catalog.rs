//! The fixed label catalog offered by the card editor.

use crate::models::Label;

const CATALOG: [(&str, &str, &str); 6] = [
    ("l1", "Bug", "#ef4444"),
    ("l2", "Feature", "#22c55e"),
    ("l3", "Urgent", "#f97316"),
    ("l4", "Design", "#a855f7"),
    ("l5", "Backend", "#3b82f6"),
    ("l6", "Frontend", "#06b6d4"),
];

/// Catalog labels in display order.
pub fn label_catalog() -> Vec<Label> {
    CATALOG
        .iter()
        .map(|(id, name, color)| Label::new(*id, *name, *color))
        .collect()
}

/// Look up a catalog label by id.
pub fn catalog_label(id: &str) -> Option<Label> {
    CATALOG
        .iter()
        .find(|(label_id, _, _)| *label_id == id)
        .map(|(id, name, color)| Label::new(*id, *name, *color))
}
