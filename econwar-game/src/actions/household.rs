//! Household action effects.

use super::{ActionId, bump_gdp};
use crate::numbers::{clamp_currency, clamp_pct};
use crate::state::GameState;

pub(super) fn apply(gs: &GameState, id: ActionId) -> GameState {
    let mut next = gs.clone();
    match id {
        ActionId::WorkOvertime => {
            let skill_bonus = i64::from(gs.household.skills / 20) * 100;
            let income = 800 + skill_bonus;
            next.household.money += income;
            next.household.happiness = clamp_pct(i64::from(gs.household.happiness) - 5);
            next.push_log(format!(
                "[Household] Overtime earned {income} (happiness -5, skill bonus {skill_bonus})"
            ));
        }
        ActionId::BuyGoods => {
            next.household.money -= 1_200;
            next.household.happiness = clamp_pct(i64::from(gs.household.happiness) + 8);
            next.business.capital += 1_000;
            bump_gdp(&mut next, 1.0);
            next.push_log(
                "[Household] Bought goods, sending 1,000 in revenue to business (happiness +8, GDP +1)",
            );
        }
        ActionId::LuxuryConsumption => {
            next.household.money -= 3_000;
            next.household.happiness = clamp_pct(i64::from(gs.household.happiness) + 15);
            next.business.capital += 2_500;
            next.business.brand_recognition =
                clamp_pct(i64::from(gs.business.brand_recognition) + 3);
            bump_gdp(&mut next, 2.0);
            next.push_log(
                "[Household] Luxury spending sent 2,500 to business (happiness +15, brand +3)",
            );
        }
        ActionId::ApplyJob => {
            let salary = 1_500 + i64::from(gs.household.skills) * 10;
            next.household.money = gs.household.money - 500 + salary;
            next.household.happiness = clamp_pct(i64::from(gs.household.happiness) + 10);
            next.business.productivity = clamp_pct(i64::from(gs.business.productivity) + 5);
            next.push_log(format!(
                "[Household] Took a job paying {salary} (business productivity +5)"
            ));
        }
        ActionId::FreelanceWork => {
            let income = 600 + i64::from(gs.household.skills) * 8;
            next.household.money += income;
            next.household.skills = clamp_pct(i64::from(gs.household.skills) + 3);
            next.push_log(format!("[Household] Freelance gig earned {income} (skills +3)"));
        }
        ActionId::InvestStocks => {
            next.household.money -= 2_000;
            next.household.investments += 2_200;
            next.push_log("[Household] Invested 2,000 for 2,200 in investment assets");
        }
        ActionId::LiquidateInvestments => {
            let cashed = gs.household.investments * 8 / 10;
            next.household.money += cashed;
            next.household.investments = gs.household.investments * 2 / 10;
            next.push_log(format!("[Household] Liquidated investments for {cashed} in cash"));
        }
        ActionId::FamilyTime => {
            next.household.happiness = clamp_pct(i64::from(gs.household.happiness) + 15);
            next.push_log("[Household] Family time raised happiness by 15");
        }
        ActionId::SkillTraining => {
            next.household.money -= 1_500;
            next.household.skills = clamp_pct(i64::from(gs.household.skills) + 10);
            next.push_log("[Household] Training for 1,500 raised skills by 10");
        }
        ActionId::StartBusiness => {
            next.household.money = gs.household.money - 5_000 + 2_000;
            next.household.skills = clamp_pct(i64::from(gs.household.skills) + 5);
            next.business.market_share = clamp_pct(i64::from(gs.business.market_share) - 2);
            bump_gdp(&mut next, 1.0);
            next.push_log(
                "[Household] Started a venture earning 2,000 and skills +5 (business competition up)",
            );
        }
        _ => {}
    }
    next.household.money = clamp_currency(next.household.money);
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::execute;

    #[test]
    fn overtime_pays_skill_scaled_income() {
        let mut gs = GameState::default();
        gs.household.skills = 47; // bonus floor(47/20)*100 = 200
        let next = execute(&gs, ActionId::WorkOvertime);
        assert_eq!(next.household.money, gs.household.money + 1_000);
        assert_eq!(next.household.happiness, gs.household.happiness - 5);
    }

    #[test]
    fn consumption_routes_revenue_to_business() {
        let gs = GameState::default();
        let next = execute(&gs, ActionId::BuyGoods);
        assert_eq!(next.household.money, gs.household.money - 1_200);
        assert_eq!(next.business.capital, gs.business.capital + 1_000);
        assert!((next.indicators.gdp - 101.0).abs() < f64::EPSILON);
    }

    #[test]
    fn job_salary_scales_with_skills() {
        let mut gs = GameState::default();
        gs.household.skills = 60;
        let next = execute(&gs, ActionId::ApplyJob);
        // 1500 + 60*10 salary minus the 500 cost.
        assert_eq!(next.household.money, gs.household.money + 1_600);
        assert_eq!(next.business.productivity, gs.business.productivity + 5);
    }

    #[test]
    fn liquidation_uses_integer_portions() {
        let mut gs = GameState::default();
        gs.household.investments = 1_005;
        let next = execute(&gs, ActionId::LiquidateInvestments);
        assert_eq!(next.household.money, gs.household.money + 804);
        assert_eq!(next.household.investments, 201);
    }

    #[test]
    fn gdp_bump_respects_action_ceiling() {
        let mut gs = GameState::default();
        gs.indicators.gdp = 119.5;
        let next = execute(&gs, ActionId::LuxuryConsumption);
        assert!((next.indicators.gdp - 120.0).abs() < f64::EPSILON);
    }

    #[test]
    fn start_business_nets_costs_and_competition() {
        let mut gs = GameState::default();
        gs.household.reputation = 250;
        let next = execute(&gs, ActionId::StartBusiness);
        assert_eq!(next.household.money, gs.household.money - 3_000);
        assert_eq!(next.business.market_share, gs.business.market_share - 2);
        assert_eq!(next.household.reputation, 270);
    }
}
