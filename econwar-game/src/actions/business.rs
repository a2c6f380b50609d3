//! Business action effects.

use super::{ActionId, bump_gdp, cut_unemployment};
use crate::numbers::{clamp_currency, clamp_pct};
use crate::state::GameState;

pub(super) fn apply(gs: &GameState, id: ActionId) -> GameState {
    let mut next = gs.clone();
    match id {
        ActionId::HireEmployees => {
            let gain = 8 + i64::from(gs.business.technology / 10);
            next.business.capital -= 3_000;
            next.business.employees += 2;
            next.business.productivity = clamp_pct(i64::from(gs.business.productivity) + gain);
            next.household.money += 1_000;
            cut_unemployment(&mut next, 1.0);
            next.push_log(format!(
                "[Business] Hired 2 employees for 3,000 (1,000 in wages to household, productivity +{gain})"
            ));
        }
        ActionId::ProduceGoods => {
            let revenue = 5_000 + i64::from(gs.business.productivity / 10) * 500;
            next.business.capital = gs.business.capital - 4_000 + revenue;
            next.business.market_share = clamp_pct(i64::from(gs.business.market_share) + 3);
            next.household.happiness = clamp_pct(i64::from(gs.household.happiness) + 5);
            bump_gdp(&mut next, 2.0);
            next.push_log(format!(
                "[Business] Goods production earned {revenue} (household happiness +5, GDP +2)"
            ));
        }
        ActionId::PremiumProducts => {
            let revenue = 10_000 + i64::from(gs.business.brand_recognition / 20) * 1_000;
            next.business.capital = gs.business.capital - 8_000 + revenue;
            next.business.brand_recognition =
                clamp_pct(i64::from(gs.business.brand_recognition) + 8);
            next.business.market_share = clamp_pct(i64::from(gs.business.market_share) + 5);
            next.push_log(format!(
                "[Business] Premium line earned {revenue} (brand +8, market share +5)"
            ));
        }
        ActionId::MarketingCampaign => {
            next.business.capital -= 5_000;
            next.business.brand_recognition =
                clamp_pct(i64::from(gs.business.brand_recognition) + 12);
            next.business.market_share = clamp_pct(i64::from(gs.business.market_share) + 5);
            next.push_log("[Business] Marketing for 5,000: brand +12, market share +5");
        }
        ActionId::RdInvestment => {
            next.business.capital -= 8_000;
            next.business.technology = clamp_pct(i64::from(gs.business.technology) + 15);
            next.business.productivity = clamp_pct(i64::from(gs.business.productivity) + 5);
            next.push_log("[Business] R&D spend of 8,000: technology +15, productivity +5");
        }
        ActionId::ExpandProduction => {
            next.business.capital = gs.business.capital - 10_000 + 15_000;
            next.business.market_share = clamp_pct(i64::from(gs.business.market_share) + 8);
            next.push_log(
                "[Business] Expansion turned 10,000 into 15,000 of returns and market share +8",
            );
        }
        ActionId::DividendPayment => {
            next.business.capital -= 5_000;
            next.business.brand_recognition =
                clamp_pct(i64::from(gs.business.brand_recognition) + 8);
            next.household.money += 2_000;
            next.household.happiness = clamp_pct(i64::from(gs.household.happiness) + 5);
            next.push_log(
                "[Business] Paid 5,000 in dividends (2,000 to household, brand +8)",
            );
        }
        _ => {}
    }
    next.business.capital = clamp_currency(next.business.capital);
    next
}
