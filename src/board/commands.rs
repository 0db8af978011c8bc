use tauri::State;

use crate::{
    board::DragEvent,
    error::KanbanResult,
    models::{Board, BoardSummary, Card, CardPatch, Label},
    AppBoardStore, AppState,
};

fn with_store<T>(
    state: &State<'_, AppState>,
    f: impl FnOnce(&mut AppBoardStore) -> KanbanResult<T>,
) -> Result<T, String> {
    let mut store = state
        .boards
        .lock()
        .map_err(|_| "board store lock poisoned".to_string())?;
    f(&mut store).map_err(|e| e.to_string())
}

#[tauri::command]
pub fn list_boards(state: State<'_, AppState>) -> Result<Vec<Board>, String> {
    with_store(&state, |store| Ok(store.boards().to_vec()))
}

#[tauri::command]
pub fn get_active_board(state: State<'_, AppState>) -> Result<Option<Board>, String> {
    with_store(&state, |store| Ok(store.active_board().cloned()))
}

#[tauri::command]
pub fn get_board_summary(
    state: State<'_, AppState>,
    board_id: String,
) -> Result<Option<BoardSummary>, String> {
    with_store(&state, |store| Ok(store.board(&board_id).map(Board::summary)))
}

/// Returns the newly active board, or `None` when the id is unknown.
#[tauri::command]
pub fn select_board(state: State<'_, AppState>, board_id: String) -> Result<Option<Board>, String> {
    with_store(&state, |store| {
        if store.select_board(&board_id) {
            Ok(store.active_board().cloned())
        } else {
            Ok(None)
        }
    })
}

#[tauri::command]
pub fn create_board(state: State<'_, AppState>, title: String) -> Result<Board, String> {
    with_store(&state, |store| store.create_board(&title))
}

#[tauri::command]
pub fn delete_board(state: State<'_, AppState>, board_id: String) -> Result<bool, String> {
    with_store(&state, |store| store.delete_board(&board_id))
}

#[tauri::command]
pub fn rename_board(
    state: State<'_, AppState>,
    board_id: String,
    title: String,
) -> Result<Board, String> {
    with_store(&state, |store| store.rename_board(&board_id, &title))
}

#[tauri::command]
pub fn add_column(
    state: State<'_, AppState>,
    board_id: String,
    title: String,
) -> Result<Board, String> {
    with_store(&state, |store| store.add_column(&board_id, &title))
}

#[tauri::command]
pub fn rename_column(
    state: State<'_, AppState>,
    board_id: String,
    column_id: String,
    title: String,
) -> Result<Board, String> {
    with_store(&state, |store| {
        store.rename_column(&board_id, &column_id, &title)
    })
}

#[tauri::command]
pub fn delete_column(
    state: State<'_, AppState>,
    board_id: String,
    column_id: String,
) -> Result<Board, String> {
    with_store(&state, |store| store.delete_column(&board_id, &column_id))
}

#[tauri::command]
pub fn add_card(
    state: State<'_, AppState>,
    board_id: String,
    column_id: String,
    title: String,
    description: Option<String>,
) -> Result<Board, String> {
    with_store(&state, |store| {
        store.add_card(&board_id, &column_id, &title, description.as_deref())
    })
}

#[tauri::command]
pub fn update_card(
    state: State<'_, AppState>,
    board_id: String,
    card_id: String,
    patch: CardPatch,
) -> Result<Board, String> {
    with_store(&state, |store| store.update_card(&board_id, &card_id, &patch))
}

#[tauri::command]
pub fn delete_card(
    state: State<'_, AppState>,
    board_id: String,
    card_id: String,
) -> Result<Board, String> {
    with_store(&state, |store| store.delete_card(&board_id, &card_id))
}

#[tauri::command]
pub fn move_card(
    state: State<'_, AppState>,
    board_id: String,
    card_id: String,
    from_column_id: String,
    to_column_id: String,
    new_index: usize,
) -> Result<Board, String> {
    with_store(&state, |store| {
        store.move_card(&board_id, &card_id, &from_column_id, &to_column_id, new_index)
    })
}

#[tauri::command]
pub fn toggle_label(
    state: State<'_, AppState>,
    board_id: String,
    card_id: String,
    label: Label,
) -> Result<Board, String> {
    with_store(&state, |store| store.toggle_label(&board_id, &card_id, &label))
}

#[tauri::command]
pub fn drag_start(
    state: State<'_, AppState>,
    board_id: String,
    active_id: String,
) -> Result<Option<Card>, String> {
    with_store(&state, |store| store.drag_start(&board_id, &active_id))
}

#[tauri::command]
pub fn drag_over(
    state: State<'_, AppState>,
    board_id: String,
    active_id: String,
    over_id: Option<String>,
) -> Result<Board, String> {
    with_store(&state, |store| {
        store.drag_over(&board_id, &active_id, over_id.as_deref())
    })
}

#[tauri::command]
pub fn drag_end(
    state: State<'_, AppState>,
    board_id: String,
    active_id: String,
    over_id: Option<String>,
) -> Result<Board, String> {
    with_store(&state, |store| {
        store.drag_end(&board_id, &active_id, over_id.as_deref())
    })
}

/// One gesture event in the UI's `{ type, activeId, overId }` shape.
#[tauri::command]
pub fn drag_event(
    state: State<'_, AppState>,
    board_id: String,
    event: DragEvent,
) -> Result<Board, String> {
    with_store(&state, |store| store.handle_drag(&board_id, &event))
}
