//! Save Slots
//!
//! Fixed-capacity named save slots over a single JSON file. Reads are
//! forgiving: a missing or corrupt file is treated as three empty slots
//! and logged, never surfaced as an error. Writes are last-write-wins per
//! slot with no transactional guarantee beyond that.

use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::game::state::LifeState;

/// Number of save slots.
pub const SAVE_SLOTS: usize = 3;

/// Save file format version (increment when the format changes).
const SAVE_VERSION: u32 = 1;

/// Errors a save-file write can hit. Reads never fail; they degrade to
/// empty slots.
#[derive(Debug, Error)]
pub enum SaveError {
    /// Filesystem failure.
    #[error("save io: {0}")]
    Io(#[from] std::io::Error),
    /// Serialization failure.
    #[error("save encoding: {0}")]
    Encode(#[from] serde_json::Error),
}

/// One occupied save slot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SaveSlot {
    /// Character name at save time.
    pub name: String,
    /// Character age at save time.
    pub age: u32,
    /// When the slot was written.
    pub timestamp: DateTime<Utc>,
    /// The full snapshot.
    pub state: LifeState,
}

/// Listing entry for one slot, occupied or not.
#[derive(Clone, Debug, PartialEq)]
pub struct SlotSummary {
    /// Character name.
    pub name: String,
    /// Character age.
    pub age: u32,
    /// When the slot was written.
    pub timestamp: DateTime<Utc>,
}

#[derive(Serialize, Deserialize)]
struct SaveFile {
    version: u32,
    slots: Vec<Option<SaveSlot>>,
}

impl SaveFile {
    fn empty() -> Self {
        Self {
            version: SAVE_VERSION,
            slots: (0..SAVE_SLOTS).map(|_| None).collect(),
        }
    }
}

/// Store managing the save-slot file.
pub struct SaveStore {
    path: PathBuf,
}

impl SaveStore {
    /// Create a store backed by the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Summaries of all slots, in slot order. `None` means empty.
    pub fn list(&self) -> [Option<SlotSummary>; SAVE_SLOTS] {
        let file = self.load_file();
        let mut out: [Option<SlotSummary>; SAVE_SLOTS] = [None, None, None];
        for (index, slot) in file.slots.iter().take(SAVE_SLOTS).enumerate() {
            out[index] = slot.as_ref().map(|s| SlotSummary {
                name: s.name.clone(),
                age: s.age,
                timestamp: s.timestamp,
            });
        }
        out
    }

    /// Read the snapshot in a slot. `None` for empty, out-of-range, or
    /// unreadable slots.
    pub fn read(&self, slot: usize) -> Option<LifeState> {
        let file = self.load_file();
        file.slots.into_iter().nth(slot).flatten().map(|s| s.state)
    }

    /// Write a snapshot into a slot, overwriting whatever was there.
    /// Out-of-range slots are a no-op.
    pub fn write(&self, slot: usize, state: &LifeState) -> Result<(), SaveError> {
        if slot >= SAVE_SLOTS {
            return Ok(());
        }
        let mut file = self.load_file();
        file.slots[slot] = Some(SaveSlot {
            name: state.name.clone(),
            age: state.age,
            timestamp: Utc::now(),
            state: state.clone(),
        });
        self.store_file(&file)
    }

    /// Empty a slot. Out-of-range slots are a no-op.
    pub fn erase(&self, slot: usize) -> Result<(), SaveError> {
        if slot >= SAVE_SLOTS {
            return Ok(());
        }
        let mut file = self.load_file();
        file.slots[slot] = None;
        self.store_file(&file)
    }

    fn load_file(&self) -> SaveFile {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(_) => return SaveFile::empty(),
        };
        match serde_json::from_str::<SaveFile>(&raw) {
            Ok(mut file) => {
                file.slots.resize_with(SAVE_SLOTS, || None);
                file
            }
            Err(err) => {
                warn!(path = %self.path.display(), %err, "unreadable save file, treating all slots as empty");
                SaveFile::empty()
            }
        }
    }

    fn store_file(&self, file: &SaveFile) -> Result<(), SaveError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let raw = serde_json::to_string_pretty(file)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
