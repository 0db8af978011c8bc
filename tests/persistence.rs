use chrono::NaiveDate;
use kanban_lib::{
    labels::catalog_label,
    storage::{sample_board, DEFAULT_STORAGE_KEY},
    BoardRepository, BoardStore, CardPatch, Database, KanbanError, KanbanSettings, KeyValueStore,
    LocalBoardRepository,
};
use tempfile::TempDir;

fn open_database(dir: &TempDir) -> Database {
    Database::new(dir.path().join("kanban.db")).unwrap()
}

#[test]
fn first_launch_seeds_sample_board_in_sqlite() {
    let dir = TempDir::new().unwrap();
    let database = open_database(&dir);

    let store = BoardStore::open(LocalBoardRepository::new(database)).unwrap();
    assert_eq!(store.boards().len(), 1);
    let seeded = store.active_board().unwrap().clone();
    assert_eq!(seeded.columns.len(), sample_board().columns.len());

    let raw = store.repository().store().get(DEFAULT_STORAGE_KEY).unwrap();
    assert!(raw.is_some_and(|raw| raw.contains(&seeded.id)));
}

#[test]
fn edits_survive_a_restart() {
    let dir = TempDir::new().unwrap();

    let (board_id, card_id) = {
        let mut store = BoardStore::open(LocalBoardRepository::new(open_database(&dir))).unwrap();
        let board = store.create_board("  Release  ").unwrap();
        let todo = board.columns[0].id.clone();

        let board = store.add_card(&board.id, &todo, "Ship it", Some("v1")).unwrap();
        let card_id = board.columns[0].card_ids[0].clone();
        store
            .toggle_label(&board.id, &card_id, &catalog_label("l3").unwrap())
            .unwrap();
        store
            .update_card(
                &board.id,
                &card_id,
                &CardPatch::default()
                    .description("v1.0")
                    .due_date(NaiveDate::from_ymd_opt(2026, 12, 4)),
            )
            .unwrap();
        (board.id, card_id)
    };

    let store = BoardStore::open(LocalBoardRepository::new(open_database(&dir))).unwrap();
    assert_eq!(store.boards().len(), 2);
    let board = store.board(&board_id).unwrap();
    assert_eq!(board.title, "Release");
    let card = &board.cards[&card_id];
    assert_eq!(card.description, "v1.0");
    assert_eq!(card.due_date, NaiveDate::from_ymd_opt(2026, 12, 4));
    assert!(card.has_label("l3"));
    assert!(board.integrity_issues().is_empty());
}

#[test]
fn unreadable_payload_is_backed_up_and_replaced() {
    let dir = TempDir::new().unwrap();
    let database = open_database(&dir);
    database.set_value(DEFAULT_STORAGE_KEY, "{not json").unwrap();

    let repository = LocalBoardRepository::new(database);
    let boards = repository.load().unwrap();
    assert_eq!(boards.len(), 1);

    let backup = repository.store().get(&repository.corrupt_key()).unwrap();
    assert_eq!(backup.as_deref(), Some("{not json"));

    let stored = repository.load().unwrap();
    assert_eq!(stored, boards);
}

#[test]
fn settings_pick_key_and_seed() {
    let dir = TempDir::new().unwrap();
    let settings = KanbanSettings {
        storage_key: "work-boards".into(),
        seed_sample_board: false,
    };

    let repository = settings.repository(open_database(&dir));
    let boards = repository.load().unwrap();
    assert!(boards[0].cards.is_empty());

    let database = repository.store();
    assert!(database.get_value("work-boards").unwrap().is_some());
    assert!(database.get_value(DEFAULT_STORAGE_KEY).unwrap().is_none());
}

#[test]
fn rejected_edit_leaves_storage_untouched() {
    let dir = TempDir::new().unwrap();
    let mut store = BoardStore::open(LocalBoardRepository::new(open_database(&dir))).unwrap();
    let before = store.repository().store().get(DEFAULT_STORAGE_KEY).unwrap();
    let board_id = store.active_board_id().unwrap().to_string();

    assert!(matches!(
        store.rename_board(&board_id, "   "),
        Err(KanbanError::EmptyTitle)
    ));
    assert!(matches!(
        store.add_column("missing", "Later"),
        Err(KanbanError::BoardNotFound(_))
    ));

    let after = store.repository().store().get(DEFAULT_STORAGE_KEY).unwrap();
    assert_eq!(before, after);
}

#[test]
fn deleting_every_board_persists_an_empty_collection() {
    let dir = TempDir::new().unwrap();
    {
        let mut store = BoardStore::open(LocalBoardRepository::new(open_database(&dir))).unwrap();
        let board_id = store.active_board_id().unwrap().to_string();
        assert!(store.delete_board(&board_id).unwrap());
        assert!(store.active_board().is_none());
    }

    let store = BoardStore::open(LocalBoardRepository::new(open_database(&dir))).unwrap();
    assert!(store.boards().is_empty());
}
