pub mod board;
pub mod db;
pub mod error;
pub mod labels;
pub mod models;
pub mod settings;
pub mod storage;
pub mod utils;

pub use board::{BoardStore, DragEvent, DragSession};
pub use db::Database;
pub use error::{KanbanError, KanbanResult};
pub use models::{Board, Card, CardPatch, Column, Label};
pub use settings::{KanbanSettings, SettingsStore};
pub use storage::{BoardRepository, KeyValueStore, LocalBoardRepository, MemoryStore};

#[cfg(feature = "desktop")]
pub use desktop::run;

#[cfg(feature = "desktop")]
pub(crate) use desktop::{AppBoardStore, AppState};

#[cfg(feature = "desktop")]
mod desktop {
    use std::sync::Mutex;

    use log::info;
    use tauri::{Manager, State};

    use crate::{
        board::commands::{
            add_card, add_column, create_board, delete_board, delete_card, delete_column,
            drag_end, drag_event, drag_over, drag_start, get_active_board, get_board_summary,
            list_boards, move_card, rename_board, rename_column, select_board, toggle_label,
            update_card,
        },
        db::Database,
        labels::commands::get_label_catalog,
        settings::{KanbanSettings, SettingsStore},
        storage::LocalBoardRepository,
        utils::init_logging,
        BoardStore,
    };

    pub(crate) type AppBoardStore = BoardStore<LocalBoardRepository<Database>>;

    pub(crate) struct AppState {
        pub(crate) boards: Mutex<AppBoardStore>,
        pub(crate) settings: SettingsStore,
    }

    #[tauri::command]
    fn get_settings(state: State<AppState>) -> Result<KanbanSettings, String> {
        Ok(state.settings.get())
    }

    /// Stored for the next launch; the open board store keeps its key.
    #[tauri::command]
    fn set_settings(settings: KanbanSettings, state: State<AppState>) -> Result<(), String> {
        state
            .settings
            .update(settings)
            .map_err(|e| e.to_string())
    }

    #[cfg_attr(mobile, tauri::mobile_entry_point)]
    pub fn run() {
        init_logging();

        log::info!("Kanban starting up...");

        tauri::Builder::default()
            .setup(|app| {
                let result = (|| -> anyhow::Result<()> {
                    let app_data_dir = app.path().app_data_dir()?;

                    let settings_store = SettingsStore::new(app_data_dir.join("settings.json"))?;
                    let settings = settings_store.get();

                    let database = Database::new(app_data_dir.join("kanban.db"))?;
                    let store = BoardStore::open(settings.repository(database))?;
                    info!(
                        "Opened {} board(s) under key {}",
                        store.boards().len(),
                        settings.storage_key
                    );

                    app.manage(AppState {
                        boards: Mutex::new(store),
                        settings: settings_store,
                    });

                    Ok(())
                })();

                result.map_err(|err| err.into())
            })
            .invoke_handler(tauri::generate_handler![
                list_boards,
                get_active_board,
                get_board_summary,
                select_board,
                create_board,
                delete_board,
                rename_board,
                add_column,
                rename_column,
                delete_column,
                add_card,
                update_card,
                delete_card,
                move_card,
                toggle_label,
                drag_start,
                drag_over,
                drag_end,
                drag_event,
                get_label_catalog,
                get_settings,
                set_settings,
            ])
            .run(tauri::generate_context!())
            .expect("error while running tauri application");
    }
}
