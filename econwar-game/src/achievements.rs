//! Achievements: the catalog, state predicates, and an incremental tracker
//! that notifies a host observer as unlocks happen.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::events::EventId;
use crate::settings::{AiSpeed, Difficulty, StartingResources};
use crate::state::{FactionId, GameState, Rarity};
use crate::victory::is_player_victory;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AchievementId {
    FirstVictory,
    QuickVictory,
    PerfectVictory,
    Millionaire,
    MarketDominator,
    BelovedGovernment,
    CrisisSurvivor,
    SpeedDemon,
    HardmodeChampion,
    Minimalist,
}

impl AchievementId {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FirstVictory => "first_victory",
            Self::QuickVictory => "quick_victory",
            Self::PerfectVictory => "perfect_victory",
            Self::Millionaire => "millionaire",
            Self::MarketDominator => "market_dominator",
            Self::BelovedGovernment => "beloved_government",
            Self::CrisisSurvivor => "crisis_survivor",
            Self::SpeedDemon => "speed_demon",
            Self::HardmodeChampion => "hardmode_champion",
            Self::Minimalist => "minimalist",
        }
    }
}

impl fmt::Display for AchievementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AchievementId {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ACHIEVEMENT_CATALOG
            .iter()
            .map(|spec| spec.id)
            .find(|id| id.as_str() == s)
            .ok_or(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AchievementCategory {
    Victory,
    Economic,
    Survival,
    Special,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AchievementSpec {
    pub id: AchievementId,
    pub name: &'static str,
    pub description: &'static str,
    pub category: AchievementCategory,
    pub points: u32,
    pub rarity: Rarity,
}

pub const ACHIEVEMENT_CATALOG: &[AchievementSpec] = &[
    AchievementSpec {
        id: AchievementId::FirstVictory,
        name: "First Victory",
        description: "Win a game",
        category: AchievementCategory::Victory,
        points: 100,
        rarity: Rarity::Common,
    },
    AchievementSpec {
        id: AchievementId::QuickVictory,
        name: "Lightning Victory",
        description: "Win within 15 turns",
        category: AchievementCategory::Victory,
        points: 300,
        rarity: Rarity::Epic,
    },
    AchievementSpec {
        id: AchievementId::PerfectVictory,
        name: "Perfect Victory",
        description: "Win with every indicator in great shape",
        category: AchievementCategory::Victory,
        points: 500,
        rarity: Rarity::Legendary,
    },
    AchievementSpec {
        id: AchievementId::Millionaire,
        name: "Millionaire",
        description: "Reach 1,000,000 in household assets",
        category: AchievementCategory::Economic,
        points: 200,
        rarity: Rarity::Rare,
    },
    AchievementSpec {
        id: AchievementId::MarketDominator,
        name: "Market Dominator",
        description: "Reach 90% market share as the business",
        category: AchievementCategory::Economic,
        points: 250,
        rarity: Rarity::Epic,
    },
    AchievementSpec {
        id: AchievementId::BelovedGovernment,
        name: "Beloved Government",
        description: "Reach 95% trust as the government",
        category: AchievementCategory::Economic,
        points: 250,
        rarity: Rarity::Epic,
    },
    AchievementSpec {
        id: AchievementId::CrisisSurvivor,
        name: "Crisis Survivor",
        description: "Win while an economic crisis is raging",
        category: AchievementCategory::Survival,
        points: 300,
        rarity: Rarity::Epic,
    },
    AchievementSpec {
        id: AchievementId::SpeedDemon,
        name: "Speed Demon",
        description: "Win with instant AI speed",
        category: AchievementCategory::Special,
        points: 150,
        rarity: Rarity::Rare,
    },
    AchievementSpec {
        id: AchievementId::HardmodeChampion,
        name: "Hard-mode Champion",
        description: "Win on hard difficulty",
        category: AchievementCategory::Special,
        points: 400,
        rarity: Rarity::Epic,
    },
    AchievementSpec {
        id: AchievementId::Minimalist,
        name: "Minimalist",
        description: "Win after starting with half resources",
        category: AchievementCategory::Special,
        points: 300,
        rarity: Rarity::Epic,
    },
];

/// Look up a catalog entry.
#[must_use]
pub fn spec(id: AchievementId) -> &'static AchievementSpec {
    // The catalog covers every AchievementId variant.
    ACHIEVEMENT_CATALOG
        .iter()
        .find(|s| s.id == id)
        .unwrap_or(&ACHIEVEMENT_CATALOG[0])
}

/// Whether the state currently satisfies an achievement's requirement.
#[must_use]
pub fn is_earned(gs: &GameState, id: AchievementId) -> bool {
    let won = gs
        .winner
        .as_deref()
        .is_some_and(is_player_victory);
    match id {
        AchievementId::FirstVictory => won,
        AchievementId::QuickVictory => won && gs.turn <= 15,
        AchievementId::PerfectVictory => {
            won && gs.indicators.gdp >= 80.0
                && gs.indicators.unemployment <= 10.0
                && gs.indicators.stock_market >= 80.0
        }
        AchievementId::Millionaire => {
            gs.player_faction == Some(FactionId::Household)
                && gs.household.money + gs.household.investments >= 1_000_000
        }
        AchievementId::MarketDominator => {
            gs.player_faction == Some(FactionId::Business) && gs.business.market_share >= 90
        }
        AchievementId::BelovedGovernment => {
            gs.player_faction == Some(FactionId::Government) && gs.government.trust_rating >= 95
        }
        AchievementId::CrisisSurvivor => {
            won && gs
                .active_events
                .iter()
                .any(|e| e.id == EventId::EconomicCrisis)
        }
        AchievementId::SpeedDemon => won && gs.settings.ai_speed == AiSpeed::Instant,
        AchievementId::HardmodeChampion => won && gs.settings.difficulty == Difficulty::Hard,
        AchievementId::Minimalist => {
            won && gs.settings.starting_resources == StartingResources::Half
        }
    }
}

/// Host callback fired once per unlock.
pub trait AchievementObserver {
    fn on_unlock(&self, spec: &AchievementSpec);
}

/// No-op observer for headless hosts and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentObserver;

impl AchievementObserver for SilentObserver {
    fn on_unlock(&self, _spec: &AchievementSpec) {}
}

/// Incremental unlock tracker. Each scan reports only achievements that
/// became satisfied since the last one.
#[derive(Debug, Clone, Default)]
pub struct AchievementTracker {
    unlocked: HashSet<AchievementId>,
}

impl AchievementTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the tracker with previously persisted unlocks.
    #[must_use]
    pub fn with_unlocked(ids: impl IntoIterator<Item = AchievementId>) -> Self {
        Self {
            unlocked: ids.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn is_unlocked(&self, id: AchievementId) -> bool {
        self.unlocked.contains(&id)
    }

    /// Total points across unlocked achievements.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.unlocked.iter().map(|&id| spec(id).points).sum()
    }

    /// All unlocked ids, for persistence.
    #[must_use]
    pub fn unlocked(&self) -> Vec<AchievementId> {
        self.unlocked.iter().copied().collect()
    }

    /// Evaluate the state against the catalog, record new unlocks and
    /// notify the observer. Returns the freshly unlocked ids in catalog
    /// order.
    pub fn scan<O: AchievementObserver>(
        &mut self,
        gs: &GameState,
        observer: &O,
    ) -> Vec<AchievementId> {
        let mut fresh = Vec::new();
        for entry in ACHIEVEMENT_CATALOG {
            if self.unlocked.contains(&entry.id) || !is_earned(gs, entry.id) {
                continue;
            }
            self.unlocked.insert(entry.id);
            observer.on_unlock(entry);
            fresh.push(entry.id);
        }
        fresh
    }
}
