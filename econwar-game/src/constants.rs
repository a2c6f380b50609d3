//! Centralized balance and tuning constants for Econwar game logic.
//!
//! These values define the deterministic math for the core simulation.
//! Keeping them together ensures that gameplay can only be adjusted via
//! code changes reviewed in version control, rather than through external
//! assets.

// Shared field bounds -------------------------------------------------------
pub(crate) const PCT_MAX: i32 = 100;
pub(crate) const REPUTATION_MAX: i32 = 1_000;
pub(crate) const LEVEL_STEP: i32 = 100;

// Starting state ------------------------------------------------------------
pub(crate) const HOUSEHOLD_START_MONEY: i64 = 5_000;
pub(crate) const HOUSEHOLD_START_HAPPINESS: i32 = 70;
pub(crate) const HOUSEHOLD_START_FAMILY_SIZE: i32 = 4;
pub(crate) const HOUSEHOLD_START_SKILLS: i32 = 50;
pub(crate) const HOUSEHOLD_START_INVESTMENTS: i64 = 1_000;
pub(crate) const HOUSEHOLD_MAX_ACTIONS: u8 = 2;
pub(crate) const BUSINESS_START_CAPITAL: i64 = 50_000;
pub(crate) const BUSINESS_START_EMPLOYEES: i32 = 20;
pub(crate) const BUSINESS_START_MARKET_SHARE: i32 = 15;
pub(crate) const BUSINESS_START_BRAND: i32 = 30;
pub(crate) const BUSINESS_START_PRODUCTIVITY: i32 = 60;
pub(crate) const BUSINESS_START_TECHNOLOGY: i32 = 40;
pub(crate) const BUSINESS_MAX_ACTIONS: u8 = 3;
pub(crate) const GOVERNMENT_START_BUDGET: i64 = 100_000;
pub(crate) const GOVERNMENT_START_TRUST: i32 = 50;
pub(crate) const GOVERNMENT_START_INFRASTRUCTURE: i32 = 60;
pub(crate) const GOVERNMENT_START_WELFARE: i32 = 40;
pub(crate) const GOVERNMENT_MAX_ACTIONS: u8 = 3;
pub(crate) const START_REPUTATION: i32 = 50;

// Economic indicators -------------------------------------------------------
pub(crate) const GDP_MIN: f64 = 50.0;
pub(crate) const GDP_MAX: f64 = 150.0;
pub(crate) const GDP_DIVISOR: f64 = 2_000.0;
pub(crate) const ACTION_GDP_CAP: f64 = 120.0;
pub(crate) const UNEMPLOYMENT_MIN: f64 = 0.0;
pub(crate) const UNEMPLOYMENT_MAX: f64 = 30.0;
pub(crate) const BASE_EMPLOYMENT: i32 = 10;
pub(crate) const EMPLOYMENT_TARGET_RATIO: f64 = 0.6;
pub(crate) const INFLATION_MIN: f64 = 0.0;
pub(crate) const INFLATION_MAX: f64 = 10.0;
pub(crate) const INFLATION_BUDGET_DIVISOR: f64 = 100_000.0;
pub(crate) const INFLATION_FACTOR: f64 = 3.0;
pub(crate) const STOCK_MARKET_MIN: f64 = 30.0;
pub(crate) const STOCK_MARKET_MAX: f64 = 200.0;
pub(crate) const STOCK_MARKET_NOISE: f64 = 10.0;

// Action preconditions -------------------------------------------------------
pub(crate) const LIQUIDATE_MIN_INVESTMENTS: i64 = 1_000;
pub(crate) const EMERGENCY_FUND_BUDGET_CEILING: i64 = 30_000;

// Event engine --------------------------------------------------------------
pub(crate) const EVENT_TURN_PROBABILITY_SCALE: f64 = 50.0;

// Victory thresholds --------------------------------------------------------
pub(crate) const HOUSEHOLD_WIN_ASSETS: i64 = 100_000;
pub(crate) const HOUSEHOLD_WIN_HAPPINESS: i32 = 90;
pub(crate) const HOUSEHOLD_LOSS_HAPPINESS: i32 = 10;
pub(crate) const BUSINESS_WIN_MARKET_SHARE: i32 = 70;
pub(crate) const BUSINESS_WIN_CAPITAL: i64 = 500_000;
pub(crate) const BUSINESS_LOSS_MARKET_SHARE: i32 = 5;
pub(crate) const GOVERNMENT_WIN_TRUST: i32 = 85;
pub(crate) const GOVERNMENT_WIN_INFRASTRUCTURE: i32 = 95;
pub(crate) const GOVERNMENT_LOSS_TRUST: i32 = 15;
pub(crate) const SCORE_CURRENCY_DIVISOR: f64 = 1_000.0;
pub(crate) const SCORE_MARKET_SHARE_WEIGHT: f64 = 10.0;

// AI tuning -----------------------------------------------------------------
pub(crate) const AI_MEMORY_CAPACITY: usize = 10;
pub(crate) const AI_BASE_PRIORITY: f64 = 50.0;
pub(crate) const AI_MOOD_MIN: f64 = -0.5;
pub(crate) const AI_MOOD_MAX: f64 = 0.5;
pub(crate) const AI_MOOD_LIFT: f64 = 0.1;
pub(crate) const AI_MOOD_DROP: f64 = 0.2;
pub(crate) const AI_MOOD_CRISIS_DROP: f64 = 0.1;
pub(crate) const AI_MOOD_WEIGHT: f64 = 20.0;
pub(crate) const AI_RISK_COST_THRESHOLD: i64 = 5_000;
pub(crate) const AI_RISK_WEIGHT: f64 = 30.0;
pub(crate) const AI_PLANNING_BASELINE: f64 = 3.0;
pub(crate) const AI_PLANNING_WEIGHT: f64 = 10.0;
pub(crate) const AI_CRISIS_GDP: f64 = 80.0;
pub(crate) const AI_CRISIS_UNEMPLOYMENT: f64 = 20.0;
pub(crate) const AI_MOOD_GDP_FLOOR: f64 = 80.0;
pub(crate) const AI_MOOD_UNEMPLOYMENT_CEIL: f64 = 15.0;
pub(crate) const AI_CRISIS_FREE_ACTION_BONUS: f64 = 15.0;
pub(crate) const AI_CRISIS_WELFARE_BONUS: f64 = 30.0;
pub(crate) const AI_CRISIS_EMERGENCY_BONUS: f64 = 25.0;
pub(crate) const AI_AGGRESSIVE_COST_FLOOR: i64 = 3_000;
pub(crate) const AI_CHAOTIC_RANDOM_CHANCE: f64 = 0.6;
pub(crate) const AI_CHAOTIC_SPAWN_CHANCE: f64 = 0.1;
pub(crate) const AI_SAFE_SPEND_HOUSEHOLD: f64 = 0.30;
pub(crate) const AI_SAFE_SPEND_BUSINESS: f64 = 0.20;
pub(crate) const AI_SAFE_SPEND_GOVERNMENT: f64 = 0.25;
