//! Personality-driven AI opponents.
//!
//! Each AI faction carries a personality profile, a mood that drifts with
//! its fortunes, and a short decision memory. Scoring starts from a flat
//! baseline, layers situational bonuses, then personality and crisis
//! adjustments; the final pick runs through a per-personality policy.

use rand::Rng;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;

use crate::actions::{self, ActionId};
use crate::constants::{
    AI_AGGRESSIVE_COST_FLOOR, AI_BASE_PRIORITY, AI_CHAOTIC_RANDOM_CHANCE, AI_CHAOTIC_SPAWN_CHANCE,
    AI_CRISIS_EMERGENCY_BONUS, AI_CRISIS_FREE_ACTION_BONUS, AI_CRISIS_GDP,
    AI_CRISIS_UNEMPLOYMENT, AI_CRISIS_WELFARE_BONUS, AI_MEMORY_CAPACITY, AI_MOOD_CRISIS_DROP,
    AI_MOOD_DROP, AI_MOOD_GDP_FLOOR, AI_MOOD_LIFT, AI_MOOD_MAX, AI_MOOD_MIN,
    AI_MOOD_UNEMPLOYMENT_CEIL, AI_MOOD_WEIGHT, AI_PLANNING_BASELINE, AI_PLANNING_WEIGHT,
    AI_RISK_COST_THRESHOLD, AI_RISK_WEIGHT, AI_SAFE_SPEND_BUSINESS, AI_SAFE_SPEND_GOVERNMENT,
    AI_SAFE_SPEND_HOUSEHOLD,
};
use crate::numbers::{floor_f64_to_i64, i64_to_f64};
use crate::rng::RngBundle;
use crate::state::{FactionId, GameState};

/// The four AI temperaments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PersonalityType {
    Conservative,
    Aggressive,
    #[default]
    Balanced,
    Chaotic,
}

/// Static tuning attached to a personality.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PersonalityProfile {
    pub name: &'static str,
    pub description: &'static str,
    /// 0-1; appetite for expensive actions.
    pub risk_tolerance: f64,
    /// 1-5; preference for long-horizon actions.
    pub planning_horizon: f64,
    /// 0-1; how readily strategy shifts with circumstances.
    pub adaptability: f64,
    /// 0-1; unpredictability of the final pick.
    pub randomness: f64,
}

impl PersonalityType {
    #[must_use]
    pub const fn profile(self) -> PersonalityProfile {
        match self {
            Self::Conservative => PersonalityProfile {
                name: "Defensive",
                description: "Prefers safe plays and avoids crises",
                risk_tolerance: 0.2,
                planning_horizon: 4.0,
                adaptability: 0.6,
                randomness: 0.1,
            },
            Self::Aggressive => PersonalityProfile {
                name: "Offensive",
                description: "Chases high risk and high reward",
                risk_tolerance: 0.8,
                planning_horizon: 2.0,
                adaptability: 0.8,
                randomness: 0.3,
            },
            Self::Balanced => PersonalityProfile {
                name: "Balanced",
                description: "Reads the situation and grows steadily",
                risk_tolerance: 0.5,
                planning_horizon: 3.0,
                adaptability: 0.9,
                randomness: 0.2,
            },
            Self::Chaotic => PersonalityProfile {
                name: "Wildcard",
                description: "Keeps everyone guessing",
                risk_tolerance: 0.6,
                planning_horizon: 1.0,
                adaptability: 0.7,
                randomness: 0.6,
            },
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Conservative => "conservative",
            Self::Aggressive => "aggressive",
            Self::Balanced => "balanced",
            Self::Chaotic => "chaotic",
        }
    }
}

impl fmt::Display for PersonalityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PersonalityType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "conservative" => Ok(Self::Conservative),
            "aggressive" => Ok(Self::Aggressive),
            "balanced" => Ok(Self::Balanced),
            "chaotic" => Ok(Self::Chaotic),
            _ => Err(()),
        }
    }
}

/// One remembered decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryEntry {
    pub turn: u32,
    pub action: ActionId,
}

/// A single AI-controlled faction.
#[derive(Debug, Clone)]
pub struct AiPlayer {
    faction: FactionId,
    personality: PersonalityType,
    mood: f64,
    memory: SmallVec<[MemoryEntry; 10]>,
}

impl AiPlayer {
    #[must_use]
    pub fn new(faction: FactionId, personality: PersonalityType) -> Self {
        Self {
            faction,
            personality,
            mood: 0.0,
            memory: SmallVec::new(),
        }
    }

    #[must_use]
    pub const fn faction(&self) -> FactionId {
        self.faction
    }

    #[must_use]
    pub const fn personality(&self) -> PersonalityType {
        self.personality
    }

    /// Current mood in [-0.5, 0.5]. Positive moods favor bolder picks.
    #[must_use]
    pub const fn mood(&self) -> f64 {
        self.mood
    }

    /// The last decisions, oldest first.
    #[must_use]
    pub fn memory(&self) -> &[MemoryEntry] {
        &self.memory
    }

    /// Choose the next action, or `None` when nothing is available.
    ///
    /// Mood drifts first, then every available catalog action is scored and
    /// the personality's selection policy picks one. The decision is
    /// recorded in memory.
    pub fn decide(&mut self, gs: &GameState, rngs: &RngBundle) -> Option<ActionId> {
        self.update_mood(gs);

        let scored: Vec<(ActionId, f64)> = actions::catalog(self.faction)
            .iter()
            .filter(|spec| actions::is_available(gs, spec.id))
            .map(|spec| (spec.id, self.evaluate(gs, spec.id)))
            .collect();
        if scored.is_empty() {
            return None;
        }

        let pick = match self.personality {
            PersonalityType::Chaotic => Self::chaotic_pick(&scored, rngs),
            PersonalityType::Conservative => self.conservative_pick(&scored, gs),
            PersonalityType::Aggressive => Self::aggressive_pick(&scored),
            PersonalityType::Balanced => self.balanced_pick(&scored, gs),
        };

        if self.memory.len() >= AI_MEMORY_CAPACITY {
            self.memory.remove(0);
        }
        self.memory.push(MemoryEntry {
            turn: gs.turn,
            action: pick,
        });
        Some(pick)
    }

    fn update_mood(&mut self, gs: &GameState) {
        match self.faction {
            FactionId::Household => {
                if gs.household.money > 10_000 {
                    self.mood += AI_MOOD_LIFT;
                }
                if gs.household.happiness < 40 {
                    self.mood -= AI_MOOD_DROP;
                }
            }
            FactionId::Business => {
                if gs.business.market_share > 30 {
                    self.mood += AI_MOOD_LIFT;
                }
                if gs.business.capital < 20_000 {
                    self.mood -= AI_MOOD_DROP;
                }
            }
            FactionId::Government => {
                if gs.government.trust_rating > 70 {
                    self.mood += AI_MOOD_LIFT;
                }
                if gs.government.budget < 30_000 {
                    self.mood -= AI_MOOD_DROP;
                }
            }
        }

        if gs.indicators.gdp < AI_MOOD_GDP_FLOOR {
            self.mood -= AI_MOOD_CRISIS_DROP;
        }
        if gs.indicators.unemployment > AI_MOOD_UNEMPLOYMENT_CEIL {
            self.mood -= AI_MOOD_CRISIS_DROP;
        }
        self.mood = self.mood.clamp(AI_MOOD_MIN, AI_MOOD_MAX);
    }

    /// Score one action for the current situation.
    #[must_use]
    pub fn evaluate(&self, gs: &GameState, id: ActionId) -> f64 {
        let mut priority = AI_BASE_PRIORITY + situational_bonus(gs, id);
        priority = self.adjust_for_personality(priority, id);
        adjust_for_crisis(priority, gs, self.faction, id)
    }

    fn adjust_for_personality(&self, mut priority: f64, id: ActionId) -> f64 {
        let profile = self.personality.profile();
        let spec = id.spec();

        if spec.cost > AI_RISK_COST_THRESHOLD {
            priority += (profile.risk_tolerance - 0.5) * AI_RISK_WEIGHT;
        }
        if is_long_horizon(id) {
            priority += (profile.planning_horizon - AI_PLANNING_BASELINE) * AI_PLANNING_WEIGHT;
        }
        priority += self.mood * AI_MOOD_WEIGHT;

        priority.max(0.0)
    }

    fn chaotic_pick(scored: &[(ActionId, f64)], rngs: &RngBundle) -> ActionId {
        let mut rng = rngs.ai();
        if rng.gen_bool(AI_CHAOTIC_RANDOM_CHANCE) {
            let index = rng.gen_range(0..scored.len());
            return scored[index].0;
        }
        Self::best(scored)
    }

    fn conservative_pick(&self, scored: &[(ActionId, f64)], gs: &GameState) -> ActionId {
        let limit = safe_spending_limit(gs, self.faction);
        let safe: Vec<(ActionId, f64)> = scored
            .iter()
            .copied()
            .filter(|(id, _)| id.spec().cost <= limit)
            .collect();
        if !safe.is_empty() {
            return Self::best(&safe);
        }
        // Nothing affordable within the limit; fall back to the cheapest.
        scored
            .iter()
            .copied()
            .fold(scored[0], |acc, item| {
                if item.0.spec().cost < acc.0.spec().cost {
                    item
                } else {
                    acc
                }
            })
            .0
    }

    fn aggressive_pick(scored: &[(ActionId, f64)]) -> ActionId {
        let expensive: Vec<(ActionId, f64)> = scored
            .iter()
            .copied()
            .filter(|(id, _)| id.spec().cost > AI_AGGRESSIVE_COST_FLOOR)
            .collect();
        if !expensive.is_empty() {
            return Self::best(&expensive);
        }
        Self::best(scored)
    }

    fn balanced_pick(&self, scored: &[(ActionId, f64)], gs: &GameState) -> ActionId {
        if in_faction_crisis(gs, self.faction) {
            self.conservative_pick(scored, gs)
        } else {
            Self::best(scored)
        }
    }

    /// Highest-priority entry; the earliest wins ties.
    fn best(scored: &[(ActionId, f64)]) -> ActionId {
        scored
            .iter()
            .copied()
            .fold(scored[0], |acc, item| if item.1 > acc.1 { item } else { acc })
            .0
    }
}

fn situational_bonus(gs: &GameState, id: ActionId) -> f64 {
    let mut bonus = 0.0;
    match id {
        ActionId::WorkOvertime => {
            if gs.household.money < 3_000 {
                bonus += 30.0;
            }
            if gs.household.happiness < 50 {
                bonus -= 20.0;
            }
        }
        ActionId::InvestStocks => {
            if gs.household.money > 10_000 {
                bonus += 25.0;
            }
            if gs.indicators.stock_market > 80.0 {
                bonus += 15.0;
            }
        }
        ActionId::LiquidateInvestments => {
            if gs.household.money < 2_000 {
                bonus += 40.0;
            }
        }
        ActionId::FamilyTime => {
            if gs.household.happiness < 60 {
                bonus += 35.0;
            }
        }
        ActionId::SkillTraining => {
            if gs.household.skills < 70 {
                bonus += 20.0;
            }
            if gs.business.technology > 70 {
                bonus += 10.0;
            }
        }
        ActionId::HireEmployees => {
            if gs.business.employees < 30 {
                bonus += 25.0;
            }
            if gs.business.capital > 20_000 {
                bonus += 15.0;
            }
        }
        ActionId::MarketingCampaign => {
            if gs.business.market_share < 40 {
                bonus += 30.0;
            }
            if gs.business.brand_recognition < 50 {
                bonus += 20.0;
            }
        }
        ActionId::RdInvestment => {
            if gs.business.technology < 60 {
                bonus += 35.0;
            }
            if gs.turn > 15 {
                bonus += 15.0;
            }
        }
        ActionId::ExpandProduction => {
            if gs.business.market_share > 30 && gs.business.capital > 50_000 {
                bonus += 40.0;
            }
        }
        ActionId::DividendPayment => {
            if gs.business.capital > 30_000 && gs.business.brand_recognition < 70 {
                bonus += 20.0;
            }
        }
        ActionId::CollectTaxes => {
            if gs.government.budget < 50_000 {
                bonus += 40.0;
            }
            if gs.government.trust_rating > 70 {
                bonus += 10.0;
            }
        }
        ActionId::WelfareProgram => {
            if gs.household.happiness < 50 {
                bonus += 30.0;
            }
            if gs.government.trust_rating < 60 {
                bonus += 25.0;
            }
        }
        ActionId::InfrastructureInvestment => {
            if gs.government.infrastructure < 70 {
                bonus += 35.0;
            }
            if gs.turn < 20 {
                bonus += 15.0;
            }
        }
        ActionId::BusinessSupport => {
            if gs.business.capital < 30_000 {
                bonus += 25.0;
            }
            if gs.indicators.unemployment > 15.0 {
                bonus += 20.0;
            }
        }
        ActionId::EmergencyFund => {
            if gs.government.budget < 20_000 {
                bonus += 50.0;
            }
        }
        _ => {}
    }
    bonus
}

fn adjust_for_crisis(mut priority: f64, gs: &GameState, faction: FactionId, id: ActionId) -> f64 {
    let crisis =
        gs.indicators.gdp < AI_CRISIS_GDP || gs.indicators.unemployment > AI_CRISIS_UNEMPLOYMENT;
    if crisis {
        if id.spec().cost == 0 {
            priority += AI_CRISIS_FREE_ACTION_BONUS;
        }
        if faction == FactionId::Government && id == ActionId::WelfareProgram {
            priority += AI_CRISIS_WELFARE_BONUS;
        }
        if id.as_str().contains("emergency") {
            priority += AI_CRISIS_EMERGENCY_BONUS;
        }
    }
    priority
}

fn is_long_horizon(id: ActionId) -> bool {
    let s = id.as_str();
    s.contains("invest") || s.contains("research") || s.contains("infrastructure")
}

fn safe_spending_limit(gs: &GameState, faction: FactionId) -> i64 {
    let (resource, ratio) = match faction {
        FactionId::Household => (gs.household.money, AI_SAFE_SPEND_HOUSEHOLD),
        FactionId::Business => (gs.business.capital, AI_SAFE_SPEND_BUSINESS),
        FactionId::Government => (gs.government.budget, AI_SAFE_SPEND_GOVERNMENT),
    };
    floor_f64_to_i64(i64_to_f64(resource) * ratio)
}

fn in_faction_crisis(gs: &GameState, faction: FactionId) -> bool {
    match faction {
        FactionId::Household => gs.household.money < 3_000 || gs.household.happiness < 30,
        FactionId::Business => gs.business.capital < 20_000 || gs.business.market_share < 10,
        FactionId::Government => gs.government.budget < 30_000 || gs.government.trust_rating < 30,
    }
}

/// Build AI players for every faction the human did not pick. Personality is
/// drawn from the AI stream: a small chance of a wildcard, otherwise uniform
/// over the three stable temperaments.
#[must_use]
pub fn create_ai_players(player_faction: FactionId, rngs: &RngBundle) -> Vec<AiPlayer> {
    let stable = [
        PersonalityType::Conservative,
        PersonalityType::Aggressive,
        PersonalityType::Balanced,
    ];
    FactionId::all()
        .into_iter()
        .filter(|&f| f != player_faction)
        .map(|faction| {
            let mut rng = rngs.ai();
            let personality = if rng.gen_bool(AI_CHAOTIC_SPAWN_CHANCE) {
                PersonalityType::Chaotic
            } else {
                stable[rng.gen_range(0..stable.len())]
            };
            AiPlayer::new(faction, personality)
        })
        .collect()
}
