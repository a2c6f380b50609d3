//! Game settings, difficulty tables, and the host-facing settings store.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of rounds a full game runs before the final ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GameLength {
    Short,
    #[default]
    Standard,
    Long,
}

impl GameLength {
    /// Round count for this length setting.
    #[must_use]
    pub const fn turns(self) -> u32 {
        match self {
            Self::Short => 15,
            Self::Standard => 30,
            Self::Long => 45,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

/// Score and threshold multipliers attached to a difficulty level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifficultyMods {
    /// Multiplier applied to the human faction's final-ranking score.
    pub player_bonus: f64,
    /// Multiplier applied to the human faction's early-victory thresholds.
    pub victory_requirement: f64,
}

impl Difficulty {
    #[must_use]
    pub const fn mods(self) -> DifficultyMods {
        match self {
            Self::Easy => DifficultyMods {
                player_bonus: 1.5,
                victory_requirement: 0.8,
            },
            Self::Normal => DifficultyMods {
                player_bonus: 1.0,
                victory_requirement: 1.0,
            },
            Self::Hard => DifficultyMods {
                player_bonus: 0.8,
                victory_requirement: 1.2,
            },
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Normal => "normal",
            Self::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "easy" => Ok(Self::Easy),
            "normal" => Ok(Self::Normal),
            "hard" => Ok(Self::Hard),
            _ => Err(()),
        }
    }
}

/// Multiplier applied to every faction's starting resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StartingResources {
    Half,
    #[default]
    Standard,
    Plentiful,
}

impl StartingResources {
    #[must_use]
    pub const fn multiplier(self) -> f64 {
        match self {
            Self::Half => 0.5,
            Self::Standard => 1.0,
            Self::Plentiful => 1.5,
        }
    }
}

/// Presentation pacing for AI turns. Not a correctness knob; the engine only
/// reports the delay, the host schedules with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AiSpeed {
    Slow,
    #[default]
    Normal,
    Fast,
    Instant,
}

impl AiSpeed {
    /// Suggested delay before an AI decision fires, in milliseconds.
    #[must_use]
    pub const fn delay_ms(self) -> u32 {
        match self {
            Self::Slow => 2_000,
            Self::Normal => 1_500,
            Self::Fast => 500,
            Self::Instant => 0,
        }
    }
}

/// Complete game configuration chosen at setup time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct GameSettings {
    #[serde(default)]
    pub game_length: GameLength,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub starting_resources: StartingResources,
    #[serde(default)]
    pub ai_speed: AiSpeed,
}

impl GameSettings {
    /// Merge a persisted partial overlay over these settings.
    #[must_use]
    pub fn with_overlay(self, overlay: &SettingsOverlay) -> Self {
        Self {
            game_length: overlay.game_length.unwrap_or(self.game_length),
            difficulty: overlay.difficulty.unwrap_or(self.difficulty),
            starting_resources: overlay
                .starting_resources
                .unwrap_or(self.starting_resources),
            ai_speed: overlay.ai_speed.unwrap_or(self.ai_speed),
        }
    }
}

/// Partial settings payload as persisted by hosts. Unknown or missing fields
/// fall back to defaults on load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SettingsOverlay {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game_length: Option<GameLength>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starting_resources: Option<StartingResources>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_speed: Option<AiSpeed>,
}

/// Host-provided settings persistence.
pub trait SettingsStore {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load the persisted partial settings, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the persisted payload cannot be read or parsed.
    fn load_overlay(&self) -> Result<Option<SettingsOverlay>, Self::Error>;

    /// Persist the full settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload cannot be written.
    fn save_settings(&self, settings: &GameSettings) -> Result<(), Self::Error>;
}

/// Load settings from a store, merging any persisted partial over defaults.
/// Store failures fall back to defaults; gameplay never requires persistence.
pub fn load_settings<S: SettingsStore>(store: &S) -> GameSettings {
    match store.load_overlay() {
        Ok(Some(overlay)) => GameSettings::default().with_overlay(&overlay),
        Ok(None) | Err(_) => GameSettings::default(),
    }
}
