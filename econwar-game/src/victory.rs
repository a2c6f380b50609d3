//! Victory evaluation: early win/loss checks for the human faction and the
//! final scored ranking when the turn limit is reached.

use crate::constants::{
    BUSINESS_LOSS_MARKET_SHARE, BUSINESS_WIN_CAPITAL, BUSINESS_WIN_MARKET_SHARE,
    GOVERNMENT_LOSS_TRUST, GOVERNMENT_WIN_INFRASTRUCTURE, GOVERNMENT_WIN_TRUST,
    HOUSEHOLD_LOSS_HAPPINESS, HOUSEHOLD_WIN_ASSETS, HOUSEHOLD_WIN_HAPPINESS,
    SCORE_CURRENCY_DIVISOR, SCORE_MARKET_SHARE_WEIGHT,
};
use crate::numbers::{floor_f64_to_i64, i64_to_f64};
use crate::state::{FactionId, GameState};

/// Evaluate victory conditions. Returns the end-of-game announcement, or
/// `None` while the game continues.
///
/// Early win and loss checks apply only to the human faction; AI factions
/// cannot end the game before the turn limit. Win thresholds scale with
/// difficulty, loss thresholds do not.
#[must_use]
pub fn check_victory(gs: &GameState) -> Option<String> {
    if gs.turn >= gs.settings.game_length.turns() {
        return Some(final_ranking(gs));
    }

    let player = gs.player_faction?;
    let requirement = gs.settings.difficulty.mods().victory_requirement;
    let scaled = |base: i64| floor_f64_to_i64(i64_to_f64(base) * requirement);

    match player {
        FactionId::Household => {
            let assets = gs.household.money + gs.household.investments;
            if assets >= scaled(HOUSEHOLD_WIN_ASSETS)
                && i64::from(gs.household.happiness) >= scaled(i64::from(HOUSEHOLD_WIN_HAPPINESS))
            {
                return Some("Victory: the household achieved a life of plenty!".to_string());
            }
            if gs.household.money <= 0 || gs.household.happiness <= HOUSEHOLD_LOSS_HAPPINESS {
                return Some(
                    "Defeat: the household went bankrupt or fell into despair.".to_string(),
                );
            }
        }
        FactionId::Business => {
            if i64::from(gs.business.market_share) >= scaled(i64::from(BUSINESS_WIN_MARKET_SHARE))
                && gs.business.capital >= scaled(BUSINESS_WIN_CAPITAL)
            {
                return Some("Victory: the business seized control of the market!".to_string());
            }
            if gs.business.capital <= 0 || gs.business.market_share <= BUSINESS_LOSS_MARKET_SHARE {
                return Some(
                    "Defeat: the business went bankrupt or was pushed out of the market."
                        .to_string(),
                );
            }
        }
        FactionId::Government => {
            if i64::from(gs.government.trust_rating) >= scaled(i64::from(GOVERNMENT_WIN_TRUST))
                && i64::from(gs.government.infrastructure)
                    >= scaled(i64::from(GOVERNMENT_WIN_INFRASTRUCTURE))
            {
                return Some("Victory: the government built an ideal state!".to_string());
            }
            if gs.government.trust_rating <= GOVERNMENT_LOSS_TRUST || gs.government.budget <= 0 {
                return Some(
                    "Defeat: the government lost all trust or ran out of funds.".to_string(),
                );
            }
        }
    }

    None
}

/// Score a single faction for the final ranking. The human faction's score
/// is multiplied by the difficulty bonus.
#[must_use]
pub fn faction_score(gs: &GameState, faction: FactionId) -> f64 {
    let raw = match faction {
        FactionId::Household => {
            i64_to_f64(gs.household.money + gs.household.investments) / SCORE_CURRENCY_DIVISOR
                + f64::from(gs.household.happiness)
        }
        FactionId::Business => {
            i64_to_f64(gs.business.capital) / SCORE_CURRENCY_DIVISOR
                + f64::from(gs.business.market_share) * SCORE_MARKET_SHARE_WEIGHT
                + f64::from(gs.business.technology)
        }
        FactionId::Government => {
            i64_to_f64(gs.government.budget) / SCORE_CURRENCY_DIVISOR
                + f64::from(gs.government.trust_rating)
                + f64::from(gs.government.infrastructure)
        }
    };
    if gs.player_faction == Some(faction) {
        raw * gs.settings.difficulty.mods().player_bonus
    } else {
        raw
    }
}

/// All faction scores, best first. Ties keep turn order.
#[must_use]
pub fn final_standings(gs: &GameState) -> Vec<(FactionId, f64)> {
    let mut standings: Vec<(FactionId, f64)> = FactionId::all()
        .into_iter()
        .map(|f| (f, faction_score(gs, f)))
        .collect();
    standings.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    standings
}

fn final_ranking(gs: &GameState) -> String {
    let standings = final_standings(gs);
    let (winner, score) = standings[0];
    let outcome = if gs.player_faction == Some(winner) {
        "your victory"
    } else {
        "AI victory"
    };
    format!(
        "Final ranking: {} wins with {score:.1} points ({outcome})",
        winner.label()
    )
}

/// Whether an announcement produced by [`check_victory`] is a win for the
/// human faction.
#[must_use]
pub fn is_player_victory(announcement: &str) -> bool {
    announcement.starts_with("Victory:") || announcement.contains("(your victory)")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{Difficulty, GameSettings};
    use crate::state::GameState;

    fn playing(player: FactionId) -> GameState {
        GameState::new_game(player, GameSettings::default(), 1)
    }

    #[test]
    fn fresh_game_has_no_winner() {
        assert_eq!(check_victory(&playing(FactionId::Household)), None);
    }

    #[test]
    fn household_early_win_needs_both_conditions() {
        let mut gs = playing(FactionId::Household);
        gs.household.money = 120_000;
        assert_eq!(check_victory(&gs), None);
        gs.household.happiness = 92;
        let msg = check_victory(&gs).unwrap();
        assert!(is_player_victory(&msg));
    }

    #[test]
    fn household_bankruptcy_is_a_loss() {
        let mut gs = playing(FactionId::Household);
        gs.household.money = 0;
        let msg = check_victory(&gs).unwrap();
        assert!(msg.starts_with("Defeat:"));
        assert!(!is_player_victory(&msg));
    }

    #[test]
    fn ai_factions_never_end_the_game_early() {
        let mut gs = playing(FactionId::Household);
        gs.business.capital = 0;
        gs.government.trust_rating = 0;
        assert_eq!(check_victory(&gs), None);
    }

    #[test]
    fn difficulty_scales_win_thresholds_only() {
        let mut gs = playing(FactionId::Household);
        gs.settings.difficulty = Difficulty::Easy;
        // Easy requirement: 80,000 assets and happiness 72.
        gs.household.money = 80_000;
        gs.household.happiness = 72;
        assert!(is_player_victory(&check_victory(&gs).unwrap()));

        gs.settings.difficulty = Difficulty::Hard;
        assert_eq!(check_victory(&gs), None);
    }

    #[test]
    fn turn_limit_triggers_final_ranking() {
        let mut gs = playing(FactionId::Government);
        gs.turn = gs.settings.game_length.turns();
        let msg = check_victory(&gs).unwrap();
        assert!(msg.starts_with("Final ranking:"));
    }

    #[test]
    fn final_scores_follow_the_formulas() {
        let gs = playing(FactionId::Household);
        // (5000 + 1000) / 1000 + 70 = 76.
        assert!((faction_score(&gs, FactionId::Household) - 76.0).abs() < 1e-9);
        // 50000/1000 + 15*10 + 40 = 240.
        assert!((faction_score(&gs, FactionId::Business) - 240.0).abs() < 1e-9);
        // 100000/1000 + 50 + 60 = 210.
        assert!((faction_score(&gs, FactionId::Government) - 210.0).abs() < 1e-9);
        assert_eq!(final_standings(&gs)[0].0, FactionId::Business);
    }

    #[test]
    fn player_bonus_applies_to_human_score() {
        let mut gs = playing(FactionId::Government);
        gs.settings.difficulty = Difficulty::Easy;
        // 210 * 1.5 = 315 beats business at 240.
        gs.turn = gs.settings.game_length.turns();
        let msg = check_victory(&gs).unwrap();
        assert!(msg.contains("Government"));
        assert!(is_player_victory(&msg));
    }
}
