//! Macro indicator derivation, recomputed once per completed round.

use rand::Rng;

use crate::constants::{
    BASE_EMPLOYMENT, EMPLOYMENT_TARGET_RATIO, GDP_DIVISOR, GDP_MAX, GDP_MIN,
    INFLATION_BUDGET_DIVISOR, INFLATION_FACTOR, INFLATION_MAX, INFLATION_MIN, STOCK_MARKET_MAX,
    STOCK_MARKET_MIN, STOCK_MARKET_NOISE, UNEMPLOYMENT_MAX, UNEMPLOYMENT_MIN,
};
use crate::numbers::{clamp_f64, i64_to_f64};
use crate::rng::RngBundle;
use crate::state::{EconomicIndicators, GameState};

/// Recompute all four indicators from the current faction stats. Only the
/// stock market draws randomness, from the dedicated market stream.
#[must_use]
pub fn derive_indicators(gs: &GameState, rngs: &RngBundle) -> EconomicIndicators {
    let activity = i64_to_f64(
        gs.household.money + gs.household.investments + gs.business.capital + gs.government.budget,
    );
    let gdp = clamp_f64(activity / GDP_DIVISOR, GDP_MIN, GDP_MAX);

    let employed = f64::from(gs.business.employees + BASE_EMPLOYMENT);
    let target = f64::from(gs.household.family_size) * EMPLOYMENT_TARGET_RATIO;
    let unemployment = clamp_f64(
        (target - employed) / target * 100.0,
        UNEMPLOYMENT_MIN,
        UNEMPLOYMENT_MAX,
    );

    let inflation_factor = i64_to_f64(gs.government.budget) / INFLATION_BUDGET_DIVISOR
        + f64::from(gs.business.market_share) / 100.0;
    let inflation = clamp_f64(
        inflation_factor * INFLATION_FACTOR,
        INFLATION_MIN,
        INFLATION_MAX,
    );

    let market_base = f64::from(gs.business.technology + gs.business.productivity) / 2.0;
    let noise = rngs
        .market()
        .gen_range(-STOCK_MARKET_NOISE..STOCK_MARKET_NOISE);
    let stock_market = clamp_f64(market_base + noise, STOCK_MARKET_MIN, STOCK_MARKET_MAX);

    EconomicIndicators {
        gdp,
        inflation,
        unemployment,
        stock_market,
    }
}
