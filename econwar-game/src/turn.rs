//! Turn controller: action application, turn rotation and the end-of-round
//! pipeline (indicators, events, victory).

use thiserror::Error;

use crate::actions::{self, ActionId};
use crate::events::process_round_events;
use crate::indicators::derive_indicators;
use crate::rng::RngBundle;
use crate::state::{FactionId, GamePhase, GameState};
use crate::victory::check_victory;

/// Rejected turn-controller requests. A rejected request leaves the state
/// untouched; hosts may surface or ignore these freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TurnError {
    #[error("the game has not been started")]
    NotStarted,
    #[error("the game has already ended")]
    GameOver,
    #[error("{action} belongs to {faction}, but it is {current}'s turn")]
    NotCurrentFaction {
        action: ActionId,
        faction: FactionId,
        current: FactionId,
    },
    #[error("{action} is not available right now")]
    Unavailable { action: ActionId },
}

/// Apply one catalog action for the faction whose turn it is.
///
/// # Errors
///
/// Returns a [`TurnError`] when the game is not in progress, the action
/// belongs to another faction, or its availability check fails.
pub fn apply_action(gs: &GameState, action: ActionId) -> Result<GameState, TurnError> {
    match gs.phase {
        GamePhase::Setup => return Err(TurnError::NotStarted),
        GamePhase::Ended => return Err(TurnError::GameOver),
        GamePhase::Playing => {}
    }
    let faction = action.faction();
    if faction != gs.current_player {
        return Err(TurnError::NotCurrentFaction {
            action,
            faction,
            current: gs.current_player,
        });
    }
    if !actions::is_available(gs, action) {
        return Err(TurnError::Unavailable { action });
    }
    Ok(actions::execute(gs, action))
}

/// Rotate to the next faction once the current one has spent its action
/// budget. A faction with budget remaining keeps the turn and the state is
/// returned unchanged.
///
/// When the rotation wraps back to the first faction a new round begins:
/// the turn counter advances, budgets reset, indicators are re-derived,
/// random events fire and victory conditions are evaluated.
#[must_use]
pub fn advance(gs: &GameState, rngs: &RngBundle) -> GameState {
    if gs.phase != GamePhase::Playing || gs.has_budget(gs.current_player) {
        return gs.clone();
    }
    rotate(gs, rngs)
}

/// Rotate regardless of remaining budget; unspent actions are forfeited.
#[must_use]
pub fn force_advance(gs: &GameState, rngs: &RngBundle) -> GameState {
    if gs.phase != GamePhase::Playing {
        return gs.clone();
    }
    rotate(gs, rngs)
}

fn rotate(gs: &GameState, rngs: &RngBundle) -> GameState {
    let mut next = gs.clone();
    next.current_player = gs.current_player.next();
    if next.current_player == FactionId::Household {
        next = begin_round(&next, rngs);
    }
    next
}

fn begin_round(gs: &GameState, rngs: &RngBundle) -> GameState {
    let mut next = gs.clone();
    next.turn += 1;
    next.push_log(format!("--- Turn {} ---", next.turn));
    next.reset_action_budgets();
    next.indicators = derive_indicators(&next, rngs);
    next = process_round_events(&next, rngs);
    if let Some(announcement) = check_victory(&next) {
        next.push_log(announcement.clone());
        next.winner = Some(announcement);
        next.phase = GamePhase::Ended;
    }
    next
}
