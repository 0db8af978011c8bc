use anyhow::{Context, Result};

use crate::{
    log_info, log_warn,
    models::Board,
    storage::{seed, KeyValueStore},
};

const ENABLE_LOGS: bool = true;

pub const DEFAULT_STORAGE_KEY: &str = "kanban-boards";
const CORRUPT_SUFFIX: &str = ".corrupt";

/// Load and save the full board collection. The shell depends on this
/// trait, never on a concrete store.
pub trait BoardRepository {
    fn load(&self) -> Result<Vec<Board>>;
    fn save(&self, boards: &[Board]) -> Result<()>;
}

/// Boards stored as one JSON array under a fixed key.
pub struct LocalBoardRepository<S> {
    store: S,
    key: String,
    seed_sample_board: bool,
}

impl<S: KeyValueStore> LocalBoardRepository<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            key: DEFAULT_STORAGE_KEY.to_string(),
            seed_sample_board: true,
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// Seed an empty three-column board instead of the sample cards.
    pub fn with_sample_board(mut self, enabled: bool) -> Self {
        self.seed_sample_board = enabled;
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Key holding the last payload that could not be decoded.
    pub fn corrupt_key(&self) -> String {
        format!("{}{}", self.key, CORRUPT_SUFFIX)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn seed(&self) -> Result<Vec<Board>> {
        let board = if self.seed_sample_board {
            seed::sample_board()
        } else {
            seed::empty_default_board()
        };
        let boards = vec![board];
        self.save(&boards).context("failed to persist seeded board")?;
        Ok(boards)
    }
}

impl<S: KeyValueStore> BoardRepository for LocalBoardRepository<S> {
    /// Missing or empty storage seeds a default board. A payload that does
    /// not decode is set aside under [`Self::corrupt_key`] and replaced by a
    /// fresh default board.
    fn load(&self) -> Result<Vec<Board>> {
        let raw = self
            .store
            .get(&self.key)
            .with_context(|| format!("failed to read {}", self.key))?;

        let raw = match raw {
            Some(raw) if !raw.is_empty() => raw,
            _ => {
                log_info!("No stored boards under {}; seeding default board", self.key);
                return self.seed();
            }
        };

        let boards: Vec<Board> = match serde_json::from_str(&raw) {
            Ok(boards) => boards,
            Err(err) => {
                log_warn!(
                    "Stored boards under {} are unreadable ({err}); moved to {} and reseeding",
                    self.key,
                    self.corrupt_key()
                );
                self.store
                    .set(&self.corrupt_key(), &raw)
                    .context("failed to back up unreadable boards")?;
                return self.seed();
            }
        };

        Ok(boards
            .into_iter()
            .map(|board| {
                let repaired = board.repaired();
                if repaired != board {
                    log_warn!(
                        "Repaired board {} on load: {:?}",
                        board.id,
                        board.integrity_issues()
                    );
                }
                repaired
            })
            .collect())
    }

    fn save(&self, boards: &[Board]) -> Result<()> {
        let serialized = serde_json::to_string(boards).context("failed to serialize boards")?;
        self.store
            .set(&self.key, &serialized)
            .with_context(|| format!("failed to write {}", self.key))
    }
}
