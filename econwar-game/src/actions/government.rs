//! Government action effects.

use super::{ActionId, bump_gdp, cut_unemployment};
use crate::numbers::{clamp_currency, clamp_pct};
use crate::state::GameState;

pub(super) fn apply(gs: &GameState, id: ActionId) -> GameState {
    let mut next = gs.clone();
    match id {
        ActionId::CollectTaxes => {
            let household_tax = gs.household.money / 10;
            let business_tax = gs.business.capital / 20;
            next.government.budget += household_tax + business_tax;
            next.government.trust_rating = clamp_pct(i64::from(gs.government.trust_rating) - 3);
            next.household.money -= household_tax;
            next.household.happiness = clamp_pct(i64::from(gs.household.happiness) - 5);
            next.business.capital -= business_tax;
            next.push_log(format!(
                "[Government] Collected taxes: {household_tax} from household, {business_tax} from business (trust -3)"
            ));
        }
        ActionId::WelfareProgram => {
            next.government.budget -= 5_000;
            next.government.welfare = clamp_pct(i64::from(gs.government.welfare) + 10);
            next.government.trust_rating = clamp_pct(i64::from(gs.government.trust_rating) + 8);
            next.household.money += 2_000;
            next.household.happiness = clamp_pct(i64::from(gs.household.happiness) + 10);
            next.push_log(
                "[Government] Welfare program spent 5,000, sending 2,000 to household (trust +8)",
            );
        }
        ActionId::InfrastructureInvestment => {
            next.government.budget -= 15_000;
            next.government.infrastructure = clamp_pct(i64::from(gs.government.infrastructure) + 12);
            next.business.productivity = clamp_pct(i64::from(gs.business.productivity) + 8);
            bump_gdp(&mut next, 3.0);
            next.push_log(
                "[Government] Infrastructure spend of 15,000: business productivity +8, infrastructure +12, GDP +3",
            );
        }
        ActionId::BusinessSupport => {
            next.government.budget -= 8_000;
            next.government.trust_rating = clamp_pct(i64::from(gs.government.trust_rating) + 5);
            next.business.capital += 6_000;
            next.business.technology = clamp_pct(i64::from(gs.business.technology) + 5);
            next.push_log(
                "[Government] Spent 8,000 to grant business 6,000 and technology +5 (trust +5)",
            );
        }
        ActionId::EmergencyFund => {
            next.government.budget += 20_000;
            next.government.trust_rating = clamp_pct(i64::from(gs.government.trust_rating) - 10);
            next.push_log("[Government] Issued bonds for 20,000 in emergency funds (trust -10)");
        }
        ActionId::EconomicStimulus => {
            next.government.budget -= 12_000;
            next.household.money += 3_000;
            next.household.happiness = clamp_pct(i64::from(gs.household.happiness) + 8);
            next.business.capital += 4_000;
            next.business.market_share = clamp_pct(i64::from(gs.business.market_share) + 3);
            bump_gdp(&mut next, 5.0);
            cut_unemployment(&mut next, 2.0);
            next.push_log(
                "[Government] Stimulus package lifted every sector (GDP +5, unemployment -2)",
            );
        }
        _ => {}
    }
    next.government.budget = clamp_currency(next.government.budget);
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::execute;

    #[test]
    fn taxes_move_money_between_factions() {
        let gs = GameState::default();
        // 10% of 5,000 and 5% of 50,000.
        let next = execute(&gs, ActionId::CollectTaxes);
        assert_eq!(next.government.budget, gs.government.budget + 500 + 2_500);
        assert_eq!(next.household.money, gs.household.money - 500);
        assert_eq!(next.business.capital, gs.business.capital - 2_500);
        assert_eq!(next.government.trust_rating, gs.government.trust_rating - 3);
        assert_eq!(next.household.happiness, gs.household.happiness - 5);
    }

    #[test]
    fn welfare_transfers_to_household() {
        let gs = GameState::default();
        let next = execute(&gs, ActionId::WelfareProgram);
        assert_eq!(next.government.budget, gs.government.budget - 5_000);
        assert_eq!(next.household.money, gs.household.money + 2_000);
        assert_eq!(next.government.welfare, gs.government.welfare + 10);
        assert_eq!(next.government.trust_rating, gs.government.trust_rating + 8);
    }

    #[test]
    fn emergency_fund_trades_trust_for_budget() {
        let mut gs = GameState::default();
        gs.government.budget = 10_000;
        let next = execute(&gs, ActionId::EmergencyFund);
        assert_eq!(next.government.budget, 30_000);
        assert_eq!(next.government.trust_rating, gs.government.trust_rating - 10);
    }

    #[test]
    fn stimulus_touches_everything() {
        let mut gs = GameState::default();
        gs.government.reputation = 150;
        let next = execute(&gs, ActionId::EconomicStimulus);
        assert_eq!(next.government.budget, gs.government.budget - 12_000);
        assert_eq!(next.household.money, gs.household.money + 3_000);
        assert_eq!(next.business.capital, gs.business.capital + 4_000);
        assert!((next.indicators.gdp - 105.0).abs() < f64::EPSILON);
        assert!((next.indicators.unemployment - 6.0).abs() < f64::EPSILON);
        assert_eq!(next.government.reputation, 168);
    }
}
