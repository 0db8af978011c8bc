use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::PathBuf,
    sync::RwLock,
};

use crate::{
    log_warn,
    storage::{KeyValueStore, LocalBoardRepository, DEFAULT_STORAGE_KEY},
};

const ENABLE_LOGS: bool = true;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct KanbanSettings {
    /// Key the board collection is stored under.
    pub storage_key: String,
    /// First run seeds the sample board instead of an empty one.
    pub seed_sample_board: bool,
}

impl Default for KanbanSettings {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.into(),
            seed_sample_board: true,
        }
    }
}

impl KanbanSettings {
    /// Board repository over `store` configured from these settings.
    pub fn repository<S: KeyValueStore>(&self, store: S) -> LocalBoardRepository<S> {
        LocalBoardRepository::new(store)
            .with_key(self.storage_key.clone())
            .with_sample_board(self.seed_sample_board)
    }
}

pub struct SettingsStore {
    path: PathBuf,
    data: RwLock<KanbanSettings>,
}

impl SettingsStore {
    /// Read `path` if it exists. An unreadable file yields defaults.
    pub fn new(path: PathBuf) -> Result<Self> {
        let data = if path.exists() {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read settings from {}", path.display()))?;
            serde_json::from_str(&contents).unwrap_or_else(|err| {
                log_warn!("Ignoring malformed settings in {}: {err}", path.display());
                KanbanSettings::default()
            })
        } else {
            KanbanSettings::default()
        };

        Ok(Self {
            path,
            data: RwLock::new(data),
        })
    }

    pub fn get(&self) -> KanbanSettings {
        match self.data.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn update(&self, settings: KanbanSettings) -> Result<()> {
        let mut guard = self
            .data
            .write()
            .map_err(|_| anyhow!("settings lock poisoned"))?;
        self.persist(&settings)?;
        *guard = settings;
        Ok(())
    }

    fn persist(&self, data: &KanbanSettings) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let serialized = serde_json::to_string_pretty(data)?;
        fs::write(&self.path, serialized)
            .with_context(|| format!("Failed to write settings to {}", self.path.display()))
    }
}
