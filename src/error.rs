use thiserror::Error;

#[derive(Debug, Error)]
pub enum KanbanError {
    #[error("title must not be empty")]
    EmptyTitle,

    #[error("board {0} not found")]
    BoardNotFound(String),

    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

pub type KanbanResult<T> = Result<T, KanbanError>;

/// Trimmed title, or `EmptyTitle` when nothing is left.
pub fn require_title(title: &str) -> KanbanResult<&str> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        Err(KanbanError::EmptyTitle)
    } else {
        Ok(trimmed)
    }
}
