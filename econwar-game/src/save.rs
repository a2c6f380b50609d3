//! Save-game envelope and the host storage boundary.
//!
//! The engine serializes to and from strings; where those strings live
//! (browser storage, disk, memory) is the host's concern via [`GameStorage`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::state::GameState;

/// Envelope version recorded with every save. Loads accept any version and
/// rely on serde defaults for forward gaps.
pub const SAVE_VERSION: &str = "1.0.0";

/// What actually gets persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveData {
    pub game_state: GameState,
    /// Host-supplied wall-clock milliseconds; the engine never reads clocks.
    pub timestamp: u64,
    pub version: String,
}

/// Summary of a save without loading the full state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaveInfo {
    pub timestamp: u64,
    pub turn: u32,
}

/// Host-provided persistence for a single save slot.
pub trait GameStorage {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Persist the serialized save payload.
    ///
    /// # Errors
    ///
    /// Returns an error when the payload cannot be written.
    fn write_save(&self, payload: &str) -> Result<(), Self::Error>;

    /// Read the persisted payload, if any.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing store cannot be read.
    fn read_save(&self) -> Result<Option<String>, Self::Error>;

    /// Remove the persisted save.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing store cannot be written.
    fn clear_save(&self) -> Result<(), Self::Error>;
}

#[derive(Debug, Error)]
pub enum SaveError<E: std::error::Error> {
    #[error("could not encode or decode save data: {0}")]
    Codec(#[from] serde_json::Error),
    #[error("storage failed: {0}")]
    Storage(E),
}

/// Serialize the state into the save envelope and persist it.
///
/// # Errors
///
/// Returns [`SaveError::Codec`] when serialization fails and
/// [`SaveError::Storage`] when the host store rejects the write.
pub fn save_game<S: GameStorage>(
    storage: &S,
    gs: &GameState,
    timestamp: u64,
) -> Result<(), SaveError<S::Error>> {
    let data = SaveData {
        game_state: gs.clone(),
        timestamp,
        version: SAVE_VERSION.to_string(),
    };
    let payload = serde_json::to_string(&data)?;
    storage.write_save(&payload).map_err(SaveError::Storage)
}

/// Load the saved game state, or `None` when no save exists.
///
/// # Errors
///
/// Returns [`SaveError::Codec`] for corrupt payloads and
/// [`SaveError::Storage`] when the host store cannot be read.
pub fn load_game<S: GameStorage>(storage: &S) -> Result<Option<GameState>, SaveError<S::Error>> {
    let Some(payload) = storage.read_save().map_err(SaveError::Storage)? else {
        return Ok(None);
    };
    let data: SaveData = serde_json::from_str(&payload)?;
    Ok(Some(data.game_state))
}

/// Peek at the saved game's timestamp and turn. Any failure reads as "no
/// usable save".
#[must_use]
pub fn save_info<S: GameStorage>(storage: &S) -> Option<SaveInfo> {
    let payload = storage.read_save().ok()??;
    let data: SaveData = serde_json::from_str(&payload).ok()?;
    Some(SaveInfo {
        timestamp: data.timestamp,
        turn: data.game_state.turn,
    })
}

/// Whether a save slot is occupied. Storage failures read as "no save".
#[must_use]
pub fn has_saved_game<S: GameStorage>(storage: &S) -> bool {
    matches!(storage.read_save(), Ok(Some(_)))
}

/// Delete the persisted save, if any.
///
/// # Errors
///
/// Returns [`SaveError::Storage`] when the host store rejects the write.
pub fn delete_saved_game<S: GameStorage>(storage: &S) -> Result<(), SaveError<S::Error>> {
    storage.clear_save().map_err(SaveError::Storage)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::GameSettings;
    use crate::state::FactionId;
    use std::cell::RefCell;
    use std::convert::Infallible;

    #[derive(Default)]
    struct MemoryStorage {
        slot: RefCell<Option<String>>,
    }

    impl GameStorage for MemoryStorage {
        type Error = Infallible;

        fn write_save(&self, payload: &str) -> Result<(), Self::Error> {
            *self.slot.borrow_mut() = Some(payload.to_string());
            Ok(())
        }

        fn read_save(&self) -> Result<Option<String>, Self::Error> {
            Ok(self.slot.borrow().clone())
        }

        fn clear_save(&self) -> Result<(), Self::Error> {
            *self.slot.borrow_mut() = None;
            Ok(())
        }
    }

    #[test]
    fn save_then_load_restores_the_state() {
        let storage = MemoryStorage::default();
        let gs = GameState::new_game(FactionId::Business, GameSettings::default(), 77);

        assert!(!has_saved_game(&storage));
        save_game(&storage, &gs, 1_700_000_000_000).unwrap();
        assert!(has_saved_game(&storage));

        let loaded = load_game(&storage).unwrap().unwrap();
        assert_eq!(loaded, gs);

        let info = save_info(&storage).unwrap();
        assert_eq!(info.turn, 1);
        assert_eq!(info.timestamp, 1_700_000_000_000);
    }

    #[test]
    fn empty_slot_loads_as_none() {
        let storage = MemoryStorage::default();
        assert_eq!(load_game(&storage).unwrap(), None);
        assert_eq!(save_info(&storage), None);
    }

    #[test]
    fn corrupt_payload_is_a_codec_error() {
        let storage = MemoryStorage::default();
        storage.write_save("{not json").unwrap();
        assert!(matches!(load_game(&storage), Err(SaveError::Codec(_))));
        assert_eq!(save_info(&storage), None);
    }

    #[test]
    fn delete_clears_the_slot() {
        let storage = MemoryStorage::default();
        let gs = GameState::default();
        save_game(&storage, &gs, 1).unwrap();
        delete_saved_game(&storage).unwrap();
        assert!(!has_saved_game(&storage));
    }

    #[test]
    fn envelope_records_the_version() {
        let storage = MemoryStorage::default();
        save_game(&storage, &GameState::default(), 5).unwrap();
        let payload = storage.read_save().unwrap().unwrap();
        let data: SaveData = serde_json::from_str(&payload).unwrap();
        assert_eq!(data.version, SAVE_VERSION);
    }
}
