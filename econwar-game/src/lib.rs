//! Econwar Game Engine
//!
//! Platform-agnostic core logic for the Econwar turn-based economic strategy
//! game. This crate provides all game mechanics without UI or
//! platform-specific dependencies: hosts supply storage and audio through
//! traits and drive the session loop themselves.

pub mod achievements;
pub mod actions;
pub mod ai;
pub mod audio;
pub mod constants;
pub mod events;
pub mod indicators;
pub mod numbers;
pub mod rng;
pub mod save;
pub mod session;
pub mod settings;
pub mod state;
pub mod turn;
pub mod victory;

// Re-export commonly used types
pub use achievements::{
    ACHIEVEMENT_CATALOG, AchievementCategory, AchievementId, AchievementObserver, AchievementSpec,
    AchievementTracker, SilentObserver,
};
pub use actions::{ALL_ACTION_IDS, ActionCategory, ActionId, ActionSpec, catalog, is_available};
pub use ai::{AiPlayer, MemoryEntry, PersonalityProfile, PersonalityType, create_ai_players};
pub use audio::{AudioSink, MusicTrack, NullAudio, SoundCue, SoundSettings};
pub use events::{
    ActiveEvent, EVENT_CATALOG, EventChoice, EventDeltas, EventId, EventTemplate,
    process_round_events, resolve_choice,
};
pub use indicators::derive_indicators;
pub use rng::{CountingRng, RngBundle};
pub use save::{GameStorage, SAVE_VERSION, SaveData, SaveError, SaveInfo};
pub use session::GameSession;
pub use settings::{
    AiSpeed, Difficulty, DifficultyMods, GameLength, GameSettings, SettingsOverlay, SettingsStore,
    StartingResources, load_settings,
};
pub use state::{
    Business, EconomicIndicators, FactionId, GamePhase, GameState, Government, Hero, Household,
    Rarity, exp_to_next_level, level,
};
pub use turn::{TurnError, advance, apply_action, force_advance};
pub use victory::{check_victory, faction_score, final_standings, is_player_victory};

/// Main game engine binding host-provided storage and audio to sessions.
pub struct GameEngine<S, A>
where
    S: GameStorage,
    A: AudioSink,
{
    storage: S,
    audio: A,
}

impl<S, A> GameEngine<S, A>
where
    S: GameStorage,
    A: AudioSink,
{
    /// Create a new game engine with the provided storage and audio sink.
    pub const fn new(storage: S, audio: A) -> Self {
        Self { storage, audio }
    }

    /// Push sound preferences down to the audio sink.
    pub fn apply_sound_settings(&self, settings: &SoundSettings) {
        self.audio.configure(settings);
    }

    /// Start a fresh session for the chosen faction.
    pub fn create_session(
        &self,
        player: FactionId,
        settings: GameSettings,
        seed: u64,
    ) -> GameSession {
        self.audio.start_music(MusicTrack::Game);
        GameSession::new(player, settings, seed)
    }

    /// Persist the session's state.
    ///
    /// # Errors
    ///
    /// Returns an error if the state cannot be encoded or written.
    pub fn save_session(
        &self,
        session: &GameSession,
        timestamp: u64,
    ) -> Result<(), SaveError<S::Error>> {
        save::save_game(&self.storage, session.state(), timestamp)?;
        self.audio.play(SoundCue::Notification);
        Ok(())
    }

    /// Resume the persisted session, if one exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the save cannot be read or decoded.
    pub fn load_session(&self) -> Result<Option<GameSession>, anyhow::Error> {
        let state = save::load_game(&self.storage).map_err(anyhow::Error::from)?;
        Ok(state.map(GameSession::resume))
    }

    /// Whether a saved game is waiting to be resumed.
    #[must_use]
    pub fn has_saved_game(&self) -> bool {
        save::has_saved_game(&self.storage)
    }

    /// Timestamp and turn of the persisted save, if readable.
    #[must_use]
    pub fn save_info(&self) -> Option<SaveInfo> {
        save::save_info(&self.storage)
    }

    /// Delete the persisted save.
    ///
    /// # Errors
    ///
    /// Returns an error if the save cannot be removed.
    pub fn delete_save(&self) -> Result<(), SaveError<S::Error>> {
        save::delete_saved_game(&self.storage)
    }

    /// Play the ending fanfare matching the announced result.
    pub fn announce_result(&self, gs: &GameState) {
        let Some(winner) = gs.winner.as_deref() else {
            return;
        };
        if is_player_victory(winner) {
            self.audio.play(SoundCue::Victory);
            self.audio.start_music(MusicTrack::Victory);
        } else {
            self.audio.play(SoundCue::Defeat);
            self.audio.start_music(MusicTrack::Defeat);
        }
    }
}
