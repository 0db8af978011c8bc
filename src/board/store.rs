use crate::{
    error::{require_title, KanbanError, KanbanResult},
    log_debug, log_error, log_info, log_warn,
    models::{Board, BoardId, Card, CardPatch, Label},
    storage::BoardRepository,
};

use super::{
    drag::{DragEvent, DragSession},
    mutations,
};

const ENABLE_LOGS: bool = true;

/// Owns the board collection and the active-board selection. Every change
/// is written through to the repository before it becomes visible.
pub struct BoardStore<R> {
    repository: R,
    boards: Vec<Board>,
    active_board_id: Option<BoardId>,
    drag: DragSession,
}

impl<R: BoardRepository> BoardStore<R> {
    /// Load the collection; the first board starts out active.
    pub fn open(repository: R) -> KanbanResult<Self> {
        let boards = repository.load()?;
        let active_board_id = boards.first().map(|board| board.id.clone());
        log_info!("Loaded {} board(s)", boards.len());
        Ok(Self {
            repository,
            boards,
            active_board_id,
            drag: DragSession::new(),
        })
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    pub fn board(&self, board_id: &str) -> Option<&Board> {
        self.boards.iter().find(|board| board.id == board_id)
    }

    pub fn active_board_id(&self) -> Option<&str> {
        self.active_board_id.as_deref()
    }

    pub fn active_board(&self) -> Option<&Board> {
        self.active_board_id
            .as_deref()
            .and_then(|board_id| self.board(board_id))
    }

    /// Returns false, leaving the selection alone, for an unknown id.
    pub fn select_board(&mut self, board_id: &str) -> bool {
        if self.board(board_id).is_none() {
            return false;
        }
        self.active_board_id = Some(board_id.to_string());
        true
    }

    /// Create, append and activate a new board.
    pub fn create_board(&mut self, title: &str) -> KanbanResult<Board> {
        let title = require_title(title)?;
        let board = mutations::create_board(title);

        let mut next = self.boards.clone();
        next.push(board.clone());
        self.commit(next)?;
        self.active_board_id = Some(board.id.clone());

        log_info!("Created board {} ({})", board.title, board.id);
        Ok(board)
    }

    /// Remove a board. If it was active, the first remaining board takes
    /// over. Returns false for an unknown id.
    pub fn delete_board(&mut self, board_id: &str) -> KanbanResult<bool> {
        if self.board(board_id).is_none() {
            return Ok(false);
        }

        let next: Vec<Board> = self
            .boards
            .iter()
            .filter(|board| board.id != board_id)
            .cloned()
            .collect();
        self.commit(next)?;

        if self.active_board_id.as_deref() == Some(board_id) {
            self.active_board_id = self.boards.first().map(|board| board.id.clone());
        }

        log_info!("Deleted board {board_id}");
        Ok(true)
    }

    /// Replace the stored board that has `board.id`. Dangling and repeated
    /// card references are dropped before the board is stored.
    pub fn update_board(&mut self, board: Board) -> KanbanResult<Board> {
        let board_id = board.id.clone();
        let repaired = board.repaired();
        if repaired != board {
            log_warn!(
                "Repaired board {board_id} before storing: {:?}",
                board.integrity_issues()
            );
        }
        self.apply(&board_id, move |_| repaired)
    }

    pub fn rename_board(&mut self, board_id: &str, title: &str) -> KanbanResult<Board> {
        let title = require_title(title)?;
        self.apply(board_id, |board| mutations::rename_board(board, title))
    }

    pub fn add_column(&mut self, board_id: &str, title: &str) -> KanbanResult<Board> {
        let title = require_title(title)?;
        self.apply(board_id, |board| mutations::add_column(board, title))
    }

    pub fn rename_column(
        &mut self,
        board_id: &str,
        column_id: &str,
        title: &str,
    ) -> KanbanResult<Board> {
        let title = require_title(title)?;
        self.apply(board_id, |board| {
            mutations::rename_column(board, column_id, title)
        })
    }

    pub fn delete_column(&mut self, board_id: &str, column_id: &str) -> KanbanResult<Board> {
        self.apply(board_id, |board| mutations::delete_column(board, column_id))
    }

    pub fn add_card(
        &mut self,
        board_id: &str,
        column_id: &str,
        title: &str,
        description: Option<&str>,
    ) -> KanbanResult<Board> {
        let title = require_title(title)?;
        self.apply(board_id, |board| {
            mutations::add_card(board, column_id, title, description)
        })
    }

    /// A patched title is trimmed and must not be blank.
    pub fn update_card(
        &mut self,
        board_id: &str,
        card_id: &str,
        patch: &CardPatch,
    ) -> KanbanResult<Board> {
        let mut patch = patch.clone();
        if let Some(title) = patch.title.take() {
            patch.title = Some(require_title(&title)?.to_string());
        }
        if patch.is_empty() {
            return self.board(board_id).cloned().ok_or_else(|| not_found(board_id));
        }
        self.apply(board_id, |board| mutations::update_card(board, card_id, &patch))
    }

    pub fn delete_card(&mut self, board_id: &str, card_id: &str) -> KanbanResult<Board> {
        self.apply(board_id, |board| mutations::delete_card(board, card_id))
    }

    pub fn move_card(
        &mut self,
        board_id: &str,
        card_id: &str,
        from_column_id: &str,
        to_column_id: &str,
        new_index: usize,
    ) -> KanbanResult<Board> {
        self.apply(board_id, |board| {
            mutations::move_card(board, card_id, from_column_id, to_column_id, new_index)
        })
    }

    pub fn toggle_label(
        &mut self,
        board_id: &str,
        card_id: &str,
        label: &Label,
    ) -> KanbanResult<Board> {
        self.apply(board_id, |board| mutations::toggle_label(board, card_id, label))
    }

    /// The card currently shown in the drag overlay.
    pub fn dragged_card(&self) -> Option<&Card> {
        self.drag.active_card()
    }

    pub fn drag_start(&mut self, board_id: &str, card_id: &str) -> KanbanResult<Option<Card>> {
        self.handle_drag(
            board_id,
            &DragEvent::Start {
                active_id: card_id.to_string(),
            },
        )?;
        Ok(self.drag.active_card().cloned())
    }

    pub fn drag_over(
        &mut self,
        board_id: &str,
        active_id: &str,
        over_id: Option<&str>,
    ) -> KanbanResult<Board> {
        self.handle_drag(
            board_id,
            &DragEvent::Over {
                active_id: active_id.to_string(),
                over_id: over_id.map(String::from),
            },
        )
    }

    pub fn drag_end(
        &mut self,
        board_id: &str,
        active_id: &str,
        over_id: Option<&str>,
    ) -> KanbanResult<Board> {
        self.handle_drag(
            board_id,
            &DragEvent::End {
                active_id: active_id.to_string(),
                over_id: over_id.map(String::from),
            },
        )
    }

    /// Feed one gesture event to the drag session and write through any
    /// board it produces. An unknown board leaves the session untouched.
    pub fn handle_drag(&mut self, board_id: &str, event: &DragEvent) -> KanbanResult<Board> {
        let mut drag = std::mem::take(&mut self.drag);
        let result = self.apply(board_id, |board| {
            drag.handle(board, event)
                .unwrap_or_else(|| board.clone())
        });
        self.drag = drag;
        result
    }

    /// Run `edit` against one board and write the result through when it
    /// differs. Returns the board as it now stands.
    fn apply<F>(&mut self, board_id: &str, edit: F) -> KanbanResult<Board>
    where
        F: FnOnce(&Board) -> Board,
    {
        let index = self
            .boards
            .iter()
            .position(|board| board.id == board_id)
            .ok_or_else(|| not_found(board_id))?;

        let current = &self.boards[index];
        let updated = edit(current);
        if &updated == current {
            log_debug!("Edit on board {board_id} changed nothing; skipping save");
            return Ok(updated);
        }

        let mut next = self.boards.clone();
        next[index] = updated.clone();
        self.commit(next)?;
        Ok(updated)
    }

    /// Persist first so memory never runs ahead of storage.
    fn commit(&mut self, next: Vec<Board>) -> KanbanResult<()> {
        if let Err(err) = self.repository.save(&next) {
            log_error!("Failed to save boards: {err:#}");
            return Err(err.into());
        }
        self.boards = next;
        Ok(())
    }
}

fn not_found(board_id: &str) -> KanbanError {
    KanbanError::BoardNotFound(board_id.to_string())
}
