//! Authoritative game state: faction records, indicators, and lifecycle.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ai::PersonalityType;
use crate::constants::{
    BUSINESS_MAX_ACTIONS, BUSINESS_START_BRAND, BUSINESS_START_CAPITAL, BUSINESS_START_EMPLOYEES,
    BUSINESS_START_MARKET_SHARE, BUSINESS_START_PRODUCTIVITY, BUSINESS_START_TECHNOLOGY,
    GOVERNMENT_MAX_ACTIONS, GOVERNMENT_START_BUDGET, GOVERNMENT_START_INFRASTRUCTURE,
    GOVERNMENT_START_TRUST, GOVERNMENT_START_WELFARE, HOUSEHOLD_MAX_ACTIONS,
    HOUSEHOLD_START_FAMILY_SIZE, HOUSEHOLD_START_HAPPINESS, HOUSEHOLD_START_INVESTMENTS,
    HOUSEHOLD_START_MONEY, HOUSEHOLD_START_SKILLS, LEVEL_STEP, START_REPUTATION,
};
use crate::events::ActiveEvent;
use crate::numbers::{clamp_reputation, floor_f64_to_i64, i64_to_f64};
use crate::settings::GameSettings;

/// One of the three competing economic factions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FactionId {
    #[default]
    Household,
    Business,
    Government,
}

impl FactionId {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Household => "household",
            Self::Business => "business",
            Self::Government => "government",
        }
    }

    /// Human-readable faction name for log lines.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Household => "Household",
            Self::Business => "Business",
            Self::Government => "Government",
        }
    }

    /// Next faction in the fixed cyclic turn order.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Household => Self::Business,
            Self::Business => Self::Government,
            Self::Government => Self::Household,
        }
    }

    /// All factions in turn order.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Household, Self::Business, Self::Government]
    }
}

impl fmt::Display for FactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FactionId {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "household" => Ok(Self::Household),
            "business" => Ok(Self::Business),
            "government" => Ok(Self::Government),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GamePhase {
    #[default]
    Setup,
    Playing,
    Ended,
}

/// Shared rarity scale for heroes and achievements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    #[default]
    Common,
    Rare,
    Epic,
    Legendary,
}

/// Named figurehead attached to a faction. Carried state only; hero bonuses
/// are surfaced to hosts, never applied by the engine itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    pub id: String,
    pub name: String,
    pub specialty: String,
    pub bonus: i32,
    #[serde(default)]
    pub rarity: Rarity,
}

/// Derived macroeconomic indicators, recomputed once per completed round.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EconomicIndicators {
    pub gdp: f64,
    pub inflation: f64,
    pub unemployment: f64,
    pub stock_market: f64,
}

impl Default for EconomicIndicators {
    fn default() -> Self {
        Self {
            gdp: 100.0,
            inflation: 2.5,
            unemployment: 8.0,
            stock_market: 100.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Household {
    pub money: i64,
    pub happiness: i32,
    pub family_size: i32,
    pub skills: i32,
    pub investments: i64,
    pub heroes: Vec<Hero>,
    pub max_actions: u8,
    pub actions_used: u8,
    pub reputation: i32,
    pub is_player: bool,
    pub ai_personality: PersonalityType,
}

impl Default for Household {
    fn default() -> Self {
        Self {
            money: HOUSEHOLD_START_MONEY,
            happiness: HOUSEHOLD_START_HAPPINESS,
            family_size: HOUSEHOLD_START_FAMILY_SIZE,
            skills: HOUSEHOLD_START_SKILLS,
            investments: HOUSEHOLD_START_INVESTMENTS,
            heroes: vec![Hero {
                id: "h1".to_string(),
                name: "Head of Household".to_string(),
                specialty: "investing".to_string(),
                bonus: 10,
                rarity: Rarity::Common,
            }],
            max_actions: HOUSEHOLD_MAX_ACTIONS,
            actions_used: 0,
            reputation: START_REPUTATION,
            is_player: false,
            ai_personality: PersonalityType::Balanced,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Business {
    pub capital: i64,
    pub employees: i32,
    pub market_share: i32,
    pub brand_recognition: i32,
    pub productivity: i32,
    pub technology: i32,
    pub heroes: Vec<Hero>,
    pub max_actions: u8,
    pub actions_used: u8,
    pub reputation: i32,
    pub is_player: bool,
    pub ai_personality: PersonalityType,
}

impl Default for Business {
    fn default() -> Self {
        Self {
            capital: BUSINESS_START_CAPITAL,
            employees: BUSINESS_START_EMPLOYEES,
            market_share: BUSINESS_START_MARKET_SHARE,
            brand_recognition: BUSINESS_START_BRAND,
            productivity: BUSINESS_START_PRODUCTIVITY,
            technology: BUSINESS_START_TECHNOLOGY,
            heroes: vec![Hero {
                id: "b1".to_string(),
                name: "Chairwoman".to_string(),
                specialty: "management".to_string(),
                bonus: 15,
                rarity: Rarity::Common,
            }],
            max_actions: BUSINESS_MAX_ACTIONS,
            actions_used: 0,
            reputation: START_REPUTATION,
            is_player: false,
            ai_personality: PersonalityType::Aggressive,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Government {
    pub budget: i64,
    pub trust_rating: i32,
    pub infrastructure: i32,
    pub welfare: i32,
    pub heroes: Vec<Hero>,
    pub max_actions: u8,
    pub actions_used: u8,
    pub reputation: i32,
    pub is_player: bool,
    pub ai_personality: PersonalityType,
}

impl Default for Government {
    fn default() -> Self {
        Self {
            budget: GOVERNMENT_START_BUDGET,
            trust_rating: GOVERNMENT_START_TRUST,
            infrastructure: GOVERNMENT_START_INFRASTRUCTURE,
            welfare: GOVERNMENT_START_WELFARE,
            heroes: vec![Hero {
                id: "g1".to_string(),
                name: "Administrator".to_string(),
                specialty: "policy".to_string(),
                bonus: 12,
                rarity: Rarity::Common,
            }],
            max_actions: GOVERNMENT_MAX_ACTIONS,
            actions_used: 0,
            reputation: START_REPUTATION,
            is_player: false,
            ai_personality: PersonalityType::Conservative,
        }
    }
}

/// Root aggregate. Every state transition replaces the whole value; no
/// component keeps a back-reference into a previous snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub turn: u32,
    pub current_player: FactionId,
    pub player_faction: Option<FactionId>,
    pub household: Household,
    pub business: Business,
    pub government: Government,
    pub active_events: Vec<ActiveEvent>,
    pub game_log: Vec<String>,
    pub indicators: EconomicIndicators,
    pub winner: Option<String>,
    pub phase: GamePhase,
    pub settings: GameSettings,
    pub seed: u64,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            turn: 1,
            current_player: FactionId::Household,
            player_faction: None,
            household: Household::default(),
            business: Business::default(),
            government: Government::default(),
            active_events: Vec::new(),
            game_log: vec!["The game is ready.".to_string()],
            indicators: EconomicIndicators::default(),
            winner: None,
            phase: GamePhase::Setup,
            settings: GameSettings::default(),
            seed: 0,
        }
    }
}

impl GameState {
    /// Start a fresh game for the chosen faction with the given settings.
    /// The player's faction acts first.
    #[must_use]
    pub fn new_game(player: FactionId, settings: GameSettings, seed: u64) -> Self {
        let mult = settings.starting_resources.multiplier();
        let mut state = Self {
            turn: 1,
            current_player: player,
            player_faction: Some(player),
            phase: GamePhase::Playing,
            settings,
            seed,
            game_log: Vec::new(),
            ..Self::default()
        };

        state.household.is_player = player == FactionId::Household;
        state.business.is_player = player == FactionId::Business;
        state.government.is_player = player == FactionId::Government;
        state.household.money = scale_currency(state.household.money, mult);
        state.household.investments = scale_currency(state.household.investments, mult);
        state.business.capital = scale_currency(state.business.capital, mult);
        state.government.budget = scale_currency(state.government.budget, mult);

        state.push_log(format!(
            "You take charge of the {}. Your turn begins the game.",
            player.as_str()
        ));
        state.push_log(format!(
            "Settings: {} turns, {} difficulty.",
            settings.game_length.turns(),
            settings.difficulty
        ));
        state
    }

    /// Append a narrative entry to the game log.
    pub fn push_log(&mut self, entry: impl Into<String>) {
        self.game_log.push(entry.into());
    }

    /// Remaining and consumed action budget for a faction.
    #[must_use]
    pub const fn actions_used(&self, faction: FactionId) -> u8 {
        match faction {
            FactionId::Household => self.household.actions_used,
            FactionId::Business => self.business.actions_used,
            FactionId::Government => self.government.actions_used,
        }
    }

    #[must_use]
    pub const fn max_actions(&self, faction: FactionId) -> u8 {
        match faction {
            FactionId::Household => self.household.max_actions,
            FactionId::Business => self.business.max_actions,
            FactionId::Government => self.government.max_actions,
        }
    }

    /// Whether the faction has any action budget left this turn.
    #[must_use]
    pub const fn has_budget(&self, faction: FactionId) -> bool {
        self.actions_used(faction) < self.max_actions(faction)
    }

    pub(crate) const fn consume_action(&mut self, faction: FactionId) {
        match faction {
            FactionId::Household => self.household.actions_used += 1,
            FactionId::Business => self.business.actions_used += 1,
            FactionId::Government => self.government.actions_used += 1,
        }
    }

    pub(crate) const fn reset_action_budgets(&mut self) {
        self.household.actions_used = 0;
        self.business.actions_used = 0;
        self.government.actions_used = 0;
    }

    #[must_use]
    pub const fn reputation(&self, faction: FactionId) -> i32 {
        match faction {
            FactionId::Household => self.household.reputation,
            FactionId::Business => self.business.reputation,
            FactionId::Government => self.government.reputation,
        }
    }

    /// Grant reputation experience to a faction, capped at the maximum.
    pub fn award_experience(&mut self, faction: FactionId, exp: i32) {
        let rep = match faction {
            FactionId::Household => &mut self.household.reputation,
            FactionId::Business => &mut self.business.reputation,
            FactionId::Government => &mut self.government.reputation,
        };
        *rep = clamp_reputation(i64::from(*rep) + i64::from(exp));
    }

    /// The faction's spendable primary currency.
    #[must_use]
    pub const fn liquid_resource(&self, faction: FactionId) -> i64 {
        match faction {
            FactionId::Household => self.household.money,
            FactionId::Business => self.business.capital,
            FactionId::Government => self.government.budget,
        }
    }

    #[must_use]
    pub const fn personality(&self, faction: FactionId) -> PersonalityType {
        match faction {
            FactionId::Household => self.household.ai_personality,
            FactionId::Business => self.business.ai_personality,
            FactionId::Government => self.government.ai_personality,
        }
    }

    /// True once a winner has been announced.
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.winner.is_some()
    }
}

fn scale_currency(value: i64, multiplier: f64) -> i64 {
    floor_f64_to_i64(i64_to_f64(value) * multiplier)
}

/// Reputation level: 100 points per level, starting at level 1.
#[must_use]
pub const fn level(reputation: i32) -> i32 {
    reputation / LEVEL_STEP + 1
}

/// Experience remaining until the next level boundary.
#[must_use]
pub const fn exp_to_next_level(reputation: i32) -> i32 {
    level(reputation) * LEVEL_STEP - reputation
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::StartingResources;

    #[test]
    fn level_formula_points() {
        assert_eq!(level(0), 1);
        assert_eq!(level(250), 3);
        assert_eq!(level(999), 10);
        assert_eq!(exp_to_next_level(250), 50);
        assert_eq!(exp_to_next_level(0), 100);
    }

    #[test]
    fn faction_order_is_cyclic() {
        assert_eq!(FactionId::Household.next(), FactionId::Business);
        assert_eq!(FactionId::Business.next(), FactionId::Government);
        assert_eq!(FactionId::Government.next(), FactionId::Household);
        assert_eq!("business".parse::<FactionId>(), Ok(FactionId::Business));
        assert!("bank".parse::<FactionId>().is_err());
    }

    #[test]
    fn new_game_marks_player_and_scales_resources() {
        let settings = GameSettings {
            starting_resources: StartingResources::Half,
            ..GameSettings::default()
        };
        let state = GameState::new_game(FactionId::Business, settings, 11);

        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.current_player, FactionId::Business);
        assert_eq!(state.player_faction, Some(FactionId::Business));
        assert!(state.business.is_player);
        assert!(!state.household.is_player);
        assert_eq!(state.household.money, 2_500);
        assert_eq!(state.household.investments, 500);
        assert_eq!(state.business.capital, 25_000);
        assert_eq!(state.government.budget, 50_000);
        assert_eq!(state.seed, 11);
        assert!(!state.game_log.is_empty());
    }

    #[test]
    fn experience_awards_cap_at_maximum() {
        let mut state = GameState::default();
        state.household.reputation = 990;
        state.award_experience(FactionId::Household, 50);
        assert_eq!(state.household.reputation, 1_000);
        state.award_experience(FactionId::Household, -2_000);
        assert_eq!(state.household.reputation, 0);
    }

    #[test]
    fn budget_helpers_track_consumption() {
        let mut state = GameState::default();
        assert!(state.has_budget(FactionId::Household));
        state.consume_action(FactionId::Household);
        state.consume_action(FactionId::Household);
        assert!(!state.has_budget(FactionId::Household));
        state.reset_action_budgets();
        assert_eq!(state.actions_used(FactionId::Household), 0);
    }

    #[test]
    fn state_roundtrips_through_json() {
        let state = GameState::new_game(FactionId::Household, GameSettings::default(), 5);
        let json = serde_json::to_string(&state).unwrap();
        let parsed: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, state);
    }
}
