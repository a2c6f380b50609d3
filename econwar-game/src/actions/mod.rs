//! The action catalog: identifiers, static metadata, availability rules and
//! effect dispatch.
//!
//! Every faction turn is a sequence of catalog actions. Metadata (cost,
//! level gate, experience) lives in the per-faction catalogs below; the
//! numeric effects live in the faction submodules.

mod business;
mod government;
mod household;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::{
    ACTION_GDP_CAP, EMERGENCY_FUND_BUDGET_CEILING, LIQUIDATE_MIN_INVESTMENTS, UNEMPLOYMENT_MIN,
};
use crate::state::{FactionId, GameState, level};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionCategory {
    Production,
    Consumption,
    Investment,
    Social,
    Upgrade,
}

impl ActionCategory {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Production => "production",
            Self::Consumption => "consumption",
            Self::Investment => "investment",
            Self::Social => "social",
            Self::Upgrade => "upgrade",
        }
    }
}

/// Stable identifier for every action in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActionId {
    // Household
    WorkOvertime,
    BuyGoods,
    LuxuryConsumption,
    ApplyJob,
    FreelanceWork,
    InvestStocks,
    LiquidateInvestments,
    FamilyTime,
    SkillTraining,
    StartBusiness,
    // Business
    HireEmployees,
    ProduceGoods,
    PremiumProducts,
    MarketingCampaign,
    RdInvestment,
    ExpandProduction,
    DividendPayment,
    // Government
    CollectTaxes,
    WelfareProgram,
    InfrastructureInvestment,
    BusinessSupport,
    EmergencyFund,
    EconomicStimulus,
}

impl ActionId {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::WorkOvertime => "work-overtime",
            Self::BuyGoods => "buy-goods",
            Self::LuxuryConsumption => "luxury-consumption",
            Self::ApplyJob => "apply-job",
            Self::FreelanceWork => "freelance-work",
            Self::InvestStocks => "invest-stocks",
            Self::LiquidateInvestments => "liquidate-investments",
            Self::FamilyTime => "family-time",
            Self::SkillTraining => "skill-training",
            Self::StartBusiness => "start-business",
            Self::HireEmployees => "hire-employees",
            Self::ProduceGoods => "produce-goods",
            Self::PremiumProducts => "premium-products",
            Self::MarketingCampaign => "marketing-campaign",
            Self::RdInvestment => "rd-investment",
            Self::ExpandProduction => "expand-production",
            Self::DividendPayment => "dividend-payment",
            Self::CollectTaxes => "collect-taxes",
            Self::WelfareProgram => "welfare-program",
            Self::InfrastructureInvestment => "infrastructure-investment",
            Self::BusinessSupport => "business-support",
            Self::EmergencyFund => "emergency-fund",
            Self::EconomicStimulus => "economic-stimulus",
        }
    }

    /// The faction that may perform this action.
    #[must_use]
    pub const fn faction(self) -> FactionId {
        match self {
            Self::WorkOvertime
            | Self::BuyGoods
            | Self::LuxuryConsumption
            | Self::ApplyJob
            | Self::FreelanceWork
            | Self::InvestStocks
            | Self::LiquidateInvestments
            | Self::FamilyTime
            | Self::SkillTraining
            | Self::StartBusiness => FactionId::Household,
            Self::HireEmployees
            | Self::ProduceGoods
            | Self::PremiumProducts
            | Self::MarketingCampaign
            | Self::RdInvestment
            | Self::ExpandProduction
            | Self::DividendPayment => FactionId::Business,
            Self::CollectTaxes
            | Self::WelfareProgram
            | Self::InfrastructureInvestment
            | Self::BusinessSupport
            | Self::EmergencyFund
            | Self::EconomicStimulus => FactionId::Government,
        }
    }

    /// Static metadata for this action.
    #[must_use]
    pub fn spec(self) -> &'static ActionSpec {
        catalog(self.faction())
            .iter()
            .find(|s| s.id == self)
            .unwrap_or(&HOUSEHOLD_ACTIONS[0])
    }
}

impl fmt::Display for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActionId {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_ACTION_IDS
            .iter()
            .copied()
            .find(|id| id.as_str() == s)
            .ok_or(())
    }
}

pub const ALL_ACTION_IDS: [ActionId; 23] = [
    ActionId::WorkOvertime,
    ActionId::BuyGoods,
    ActionId::LuxuryConsumption,
    ActionId::ApplyJob,
    ActionId::FreelanceWork,
    ActionId::InvestStocks,
    ActionId::LiquidateInvestments,
    ActionId::FamilyTime,
    ActionId::SkillTraining,
    ActionId::StartBusiness,
    ActionId::HireEmployees,
    ActionId::ProduceGoods,
    ActionId::PremiumProducts,
    ActionId::MarketingCampaign,
    ActionId::RdInvestment,
    ActionId::ExpandProduction,
    ActionId::DividendPayment,
    ActionId::CollectTaxes,
    ActionId::WelfareProgram,
    ActionId::InfrastructureInvestment,
    ActionId::BusinessSupport,
    ActionId::EmergencyFund,
    ActionId::EconomicStimulus,
];

/// Static per-action metadata. Effects are code, not data; see the faction
/// submodules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionSpec {
    pub id: ActionId,
    pub name: &'static str,
    pub description: &'static str,
    pub category: ActionCategory,
    /// Upfront cost in the faction's liquid currency. Zero-cost actions may
    /// still carry their own preconditions.
    pub cost: i64,
    /// Minimum reputation level; 1 means always unlocked.
    pub required_level: i32,
    /// Reputation experience granted on execution.
    pub experience: i32,
}

const HOUSEHOLD_ACTIONS: &[ActionSpec] = &[
    ActionSpec {
        id: ActionId::WorkOvertime,
        name: "Work Overtime",
        description: "Extra income at the cost of happiness.",
        category: ActionCategory::Production,
        cost: 0,
        required_level: 1,
        experience: 5,
    },
    ActionSpec {
        id: ActionId::BuyGoods,
        name: "Buy Goods",
        description: "Buy everyday goods, feeding business revenue.",
        category: ActionCategory::Consumption,
        cost: 1_200,
        required_level: 1,
        experience: 3,
    },
    ActionSpec {
        id: ActionId::LuxuryConsumption,
        name: "Luxury Consumption",
        description: "Splurge on premium goods for a big happiness boost.",
        category: ActionCategory::Consumption,
        cost: 3_000,
        required_level: 2,
        experience: 8,
    },
    ActionSpec {
        id: ActionId::ApplyJob,
        name: "Apply for a Job",
        description: "Land salaried work backed by your skills.",
        category: ActionCategory::Social,
        cost: 500,
        required_level: 1,
        experience: 10,
    },
    ActionSpec {
        id: ActionId::FreelanceWork,
        name: "Freelance Work",
        description: "Independent gigs that pay and sharpen skills.",
        category: ActionCategory::Production,
        cost: 0,
        required_level: 2,
        experience: 8,
    },
    ActionSpec {
        id: ActionId::InvestStocks,
        name: "Invest in Stocks",
        description: "Convert cash into investment assets.",
        category: ActionCategory::Investment,
        cost: 2_000,
        required_level: 1,
        experience: 6,
    },
    ActionSpec {
        id: ActionId::LiquidateInvestments,
        name: "Liquidate Investments",
        description: "Cash out most of the investment portfolio.",
        category: ActionCategory::Investment,
        cost: 0,
        required_level: 1,
        experience: 4,
    },
    ActionSpec {
        id: ActionId::FamilyTime,
        name: "Family Time",
        description: "Spend time together; happiness rises.",
        category: ActionCategory::Social,
        cost: 0,
        required_level: 1,
        experience: 5,
    },
    ActionSpec {
        id: ActionId::SkillTraining,
        name: "Skill Training",
        description: "Pay for education to raise skills.",
        category: ActionCategory::Upgrade,
        cost: 1_500,
        required_level: 1,
        experience: 12,
    },
    ActionSpec {
        id: ActionId::StartBusiness,
        name: "Start a Business",
        description: "Open a small venture for side income.",
        category: ActionCategory::Investment,
        cost: 5_000,
        required_level: 3,
        experience: 20,
    },
];

const BUSINESS_ACTIONS: &[ActionSpec] = &[
    ActionSpec {
        id: ActionId::HireEmployees,
        name: "Hire Employees",
        description: "Grow the workforce and productivity.",
        category: ActionCategory::Production,
        cost: 3_000,
        required_level: 1,
        experience: 8,
    },
    ActionSpec {
        id: ActionId::ProduceGoods,
        name: "Produce Goods",
        description: "Mass-produce consumer goods for sale.",
        category: ActionCategory::Production,
        cost: 4_000,
        required_level: 1,
        experience: 10,
    },
    ActionSpec {
        id: ActionId::PremiumProducts,
        name: "Premium Products",
        description: "Launch a high-margin premium line.",
        category: ActionCategory::Production,
        cost: 8_000,
        required_level: 2,
        experience: 15,
    },
    ActionSpec {
        id: ActionId::MarketingCampaign,
        name: "Marketing Campaign",
        description: "Advertise for brand recognition and share.",
        category: ActionCategory::Social,
        cost: 5_000,
        required_level: 1,
        experience: 10,
    },
    ActionSpec {
        id: ActionId::RdInvestment,
        name: "R&D Investment",
        description: "Fund research to push technology forward.",
        category: ActionCategory::Upgrade,
        cost: 8_000,
        required_level: 1,
        experience: 12,
    },
    ActionSpec {
        id: ActionId::ExpandProduction,
        name: "Expand Production",
        description: "Scale up facilities for immediate returns.",
        category: ActionCategory::Investment,
        cost: 10_000,
        required_level: 1,
        experience: 15,
    },
    ActionSpec {
        id: ActionId::DividendPayment,
        name: "Dividend Payment",
        description: "Pay shareholders and polish the brand.",
        category: ActionCategory::Social,
        cost: 5_000,
        required_level: 1,
        experience: 8,
    },
];

const GOVERNMENT_ACTIONS: &[ActionSpec] = &[
    ActionSpec {
        id: ActionId::CollectTaxes,
        name: "Collect Taxes",
        description: "Levy taxes on households and businesses.",
        category: ActionCategory::Production,
        cost: 0,
        required_level: 1,
        experience: 5,
    },
    ActionSpec {
        id: ActionId::WelfareProgram,
        name: "Welfare Program",
        description: "Fund welfare to lift trust and happiness.",
        category: ActionCategory::Social,
        cost: 5_000,
        required_level: 1,
        experience: 10,
    },
    ActionSpec {
        id: ActionId::InfrastructureInvestment,
        name: "Infrastructure Investment",
        description: "Build roads and networks; industry benefits.",
        category: ActionCategory::Investment,
        cost: 15_000,
        required_level: 1,
        experience: 15,
    },
    ActionSpec {
        id: ActionId::BusinessSupport,
        name: "Business Support",
        description: "Subsidize industry to stimulate the economy.",
        category: ActionCategory::Social,
        cost: 8_000,
        required_level: 1,
        experience: 12,
    },
    ActionSpec {
        id: ActionId::EmergencyFund,
        name: "Emergency Fund",
        description: "Issue bonds for emergency liquidity.",
        category: ActionCategory::Production,
        cost: 0,
        required_level: 1,
        experience: 8,
    },
    ActionSpec {
        id: ActionId::EconomicStimulus,
        name: "Economic Stimulus",
        description: "Pump money into every sector at once.",
        category: ActionCategory::Investment,
        cost: 12_000,
        required_level: 2,
        experience: 18,
    },
];

/// The catalog of actions a faction can take.
#[must_use]
pub const fn catalog(faction: FactionId) -> &'static [ActionSpec] {
    match faction {
        FactionId::Household => HOUSEHOLD_ACTIONS,
        FactionId::Business => BUSINESS_ACTIONS,
        FactionId::Government => GOVERNMENT_ACTIONS,
    }
}

/// Whether the action can legally be performed right now: budget remaining,
/// level gate met, and cost or special precondition satisfied.
#[must_use]
pub fn is_available(gs: &GameState, id: ActionId) -> bool {
    let faction = id.faction();
    let spec = id.spec();
    if !gs.has_budget(faction) {
        return false;
    }
    if level(gs.reputation(faction)) < spec.required_level {
        return false;
    }
    match id {
        ActionId::LiquidateInvestments => gs.household.investments >= LIQUIDATE_MIN_INVESTMENTS,
        ActionId::EmergencyFund => gs.government.budget < EMERGENCY_FUND_BUDGET_CEILING,
        _ => gs.liquid_resource(faction) >= spec.cost,
    }
}

/// Apply the action's effects, consume one action slot and award experience.
/// Callers validate availability first; see the turn controller.
#[must_use]
pub fn execute(gs: &GameState, id: ActionId) -> GameState {
    let faction = id.faction();
    let mut next = match faction {
        FactionId::Household => household::apply(gs, id),
        FactionId::Business => business::apply(gs, id),
        FactionId::Government => government::apply(gs, id),
    };
    next.consume_action(faction);
    next.award_experience(faction, id.spec().experience);
    next
}

/// Nudge GDP up toward the action-driven ceiling.
pub(crate) fn bump_gdp(gs: &mut GameState, delta: f64) {
    gs.indicators.gdp = ACTION_GDP_CAP.min(gs.indicators.gdp + delta);
}

/// Nudge unemployment down, never below zero.
pub(crate) fn cut_unemployment(gs: &mut GameState, delta: f64) {
    gs.indicators.unemployment = UNEMPLOYMENT_MIN.max(gs.indicators.unemployment - delta);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::GameState;

    #[test]
    fn ids_roundtrip_through_strings() {
        for id in ALL_ACTION_IDS {
            assert_eq!(id.as_str().parse::<ActionId>(), Ok(id));
            assert_eq!(id.spec().id, id);
        }
        assert!("print-money".parse::<ActionId>().is_err());
    }

    #[test]
    fn catalogs_are_partitioned_by_faction() {
        for faction in FactionId::all() {
            for spec in catalog(faction) {
                assert_eq!(spec.id.faction(), faction);
            }
        }
        assert_eq!(
            catalog(FactionId::Household).len()
                + catalog(FactionId::Business).len()
                + catalog(FactionId::Government).len(),
            ALL_ACTION_IDS.len()
        );
    }

    #[test]
    fn availability_enforces_cost_and_level() {
        let mut gs = GameState::default();
        assert!(is_available(&gs, ActionId::WorkOvertime));
        assert!(is_available(&gs, ActionId::BuyGoods));

        gs.household.money = 100;
        assert!(!is_available(&gs, ActionId::BuyGoods));
        assert!(is_available(&gs, ActionId::WorkOvertime));

        // Freelance work needs level 2 regardless of money.
        assert!(!is_available(&gs, ActionId::FreelanceWork));
        gs.household.reputation = 150;
        assert!(is_available(&gs, ActionId::FreelanceWork));
    }

    #[test]
    fn availability_enforces_special_preconditions() {
        let mut gs = GameState::default();
        assert!(is_available(&gs, ActionId::LiquidateInvestments));
        gs.household.investments = 999;
        assert!(!is_available(&gs, ActionId::LiquidateInvestments));

        assert!(!is_available(&gs, ActionId::EmergencyFund));
        gs.government.budget = 29_999;
        assert!(is_available(&gs, ActionId::EmergencyFund));
    }

    #[test]
    fn availability_respects_action_budget() {
        let mut gs = GameState::default();
        gs.household.actions_used = gs.household.max_actions;
        assert!(!is_available(&gs, ActionId::FamilyTime));
    }

    #[test]
    fn execute_consumes_slot_and_awards_experience() {
        let gs = GameState::default();
        let next = execute(&gs, ActionId::FamilyTime);
        assert_eq!(next.household.actions_used, 1);
        assert_eq!(next.household.reputation, gs.household.reputation + 5);
        assert_eq!(next.household.happiness, 85);
        assert!(next.game_log.len() > gs.game_log.len());
    }
}
