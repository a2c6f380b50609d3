//! Audio boundary. The engine emits cues; producing actual sound is the
//! host's job through [`AudioSink`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// One-shot sound effects the engine can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SoundCue {
    Click,
    Success,
    Error,
    Achievement,
    Victory,
    Defeat,
    Money,
    Notification,
}

impl SoundCue {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::Success => "success",
            Self::Error => "error",
            Self::Achievement => "achievement",
            Self::Victory => "victory",
            Self::Defeat => "defeat",
            Self::Money => "money",
            Self::Notification => "notification",
        }
    }
}

impl fmt::Display for SoundCue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Background music slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MusicTrack {
    Menu,
    Game,
    Victory,
    Defeat,
}

/// Persisted audio preferences. Hosts store these next to game settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SoundSettings {
    pub enabled: bool,
    /// Master volume in [0, 1].
    pub volume: f64,
    pub music_enabled: bool,
}

impl Default for SoundSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            volume: 0.5,
            music_enabled: true,
        }
    }
}

/// Host-provided audio output. The engine signals intent; producing sound
/// and honoring the configured preferences is the implementation's job.
pub trait AudioSink {
    /// Apply persisted preferences. Called before playback begins and again
    /// whenever the host changes them.
    fn configure(&self, settings: &SoundSettings);
    fn play(&self, cue: SoundCue);
    fn start_music(&self, track: MusicTrack);
    fn stop_music(&self);
}

/// Silent sink for headless hosts and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn configure(&self, _settings: &SoundSettings) {}
    fn play(&self, _cue: SoundCue) {}
    fn start_music(&self, _track: MusicTrack) {}
    fn stop_music(&self) {}
}
