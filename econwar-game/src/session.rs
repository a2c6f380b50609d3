//! A running game: state, RNG streams and AI opponents bound together.
//!
//! The session owns no I/O. Hosts drive it: human actions through
//! [`GameSession::perform`], AI turns one decision at a time through
//! [`GameSession::ai_step`], pacing with the configured AI delay.

use crate::actions::ActionId;
use crate::ai::{AiPlayer, create_ai_players};
use crate::events::{EventId, resolve_choice};
use crate::rng::RngBundle;
use crate::settings::GameSettings;
use crate::state::{FactionId, GamePhase, GameState};
use crate::turn::{self, TurnError};

pub struct GameSession {
    state: GameState,
    rngs: RngBundle,
    ai_players: Vec<AiPlayer>,
}

impl GameSession {
    /// Start a new game. AI personalities are drawn from the seed and
    /// recorded in the faction records.
    #[must_use]
    pub fn new(player: FactionId, settings: GameSettings, seed: u64) -> Self {
        let rngs = RngBundle::from_user_seed(seed);
        let ai_players = create_ai_players(player, &rngs);
        let mut state = GameState::new_game(player, settings, seed);
        for ai in &ai_players {
            match ai.faction() {
                FactionId::Household => state.household.ai_personality = ai.personality(),
                FactionId::Business => state.business.ai_personality = ai.personality(),
                FactionId::Government => state.government.ai_personality = ai.personality(),
            }
        }
        Self {
            state,
            rngs,
            ai_players,
        }
    }

    /// Abandon the running game and start a fresh one in place. The old
    /// state, the AI roster and any decision queued against it are all
    /// discarded; nothing from the previous game can fire afterwards.
    pub fn reset(&mut self, player: FactionId, settings: GameSettings, seed: u64) {
        *self = Self::new(player, settings, seed);
    }

    /// Rebuild a session around a loaded state. RNG streams restart from the
    /// recorded seed and AI mood and memory start fresh.
    #[must_use]
    pub fn resume(state: GameState) -> Self {
        let rngs = RngBundle::from_user_seed(state.seed);
        let ai_players = state
            .player_faction
            .map(|player| {
                FactionId::all()
                    .into_iter()
                    .filter(|&f| f != player)
                    .map(|f| AiPlayer::new(f, state.personality(f)))
                    .collect()
            })
            .unwrap_or_default();
        Self {
            state,
            rngs,
            ai_players,
        }
    }

    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn ai_players(&self) -> &[AiPlayer] {
        &self.ai_players
    }

    /// Whether the current turn belongs to an AI faction.
    #[must_use]
    pub fn is_ai_turn(&self) -> bool {
        self.state.phase == GamePhase::Playing
            && self.state.player_faction != Some(self.state.current_player)
    }

    /// Suggested delay before the next AI step, per the game settings.
    #[must_use]
    pub const fn ai_delay_ms(&self) -> u32 {
        self.state.settings.ai_speed.delay_ms()
    }

    /// Apply a human action for the faction whose turn it is.
    ///
    /// # Errors
    ///
    /// Propagates [`TurnError`] from the turn controller; the session state
    /// is unchanged on error.
    pub fn perform(&mut self, action: ActionId) -> Result<(), TurnError> {
        self.state = turn::apply_action(&self.state, action)?;
        Ok(())
    }

    /// End the current turn once its action budget is spent; with budget
    /// remaining this is a no-op. Wraps [`turn::advance`]; for the
    /// unconditional rotation see [`GameSession::force_end_turn`].
    pub fn end_turn(&mut self) {
        self.state = turn::advance(&self.state, &self.rngs);
    }

    /// End the current turn unconditionally, forfeiting any unspent actions.
    /// Wraps [`turn::force_advance`].
    pub fn force_end_turn(&mut self) {
        self.state = turn::force_advance(&self.state, &self.rngs);
    }

    /// Run one AI decision for the faction whose turn it is.
    ///
    /// The decision is revalidated against the live state before it is
    /// applied; a stale or empty decision forfeits the rest of the AI's
    /// turn instead of wedging the game. When the AI's budget runs out the
    /// turn advances automatically. Returns the action that was applied.
    pub fn ai_step(&mut self) -> Option<ActionId> {
        if !self.is_ai_turn() {
            return None;
        }
        let current = self.state.current_player;
        let decision = self
            .ai_players
            .iter_mut()
            .find(|ai| ai.faction() == current)
            .and_then(|ai| ai.decide(&self.state, &self.rngs));

        let Some(action) = decision else {
            self.state.push_log(format!(
                "{} turn skipped: no actions available.",
                current.label()
            ));
            self.force_end_turn();
            return None;
        };
        match turn::apply_action(&self.state, action) {
            Ok(next) => {
                self.state = next;
                if !self.state.has_budget(current) {
                    self.end_turn();
                }
                Some(action)
            }
            Err(_) => {
                // Stale decision; give up the turn rather than retry.
                self.state.push_log(format!(
                    "{} turn skipped: {action} was no longer available.",
                    current.label()
                ));
                self.force_end_turn();
                None
            }
        }
    }

    /// Resolve a choice attached to an active event.
    pub fn choose_event_option(&mut self, event: EventId, choice_id: &str) {
        if self.state.phase == GamePhase::Playing {
            self.state = resolve_choice(&self.state, event, choice_id);
        }
    }
}
