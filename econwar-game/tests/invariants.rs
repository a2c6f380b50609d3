//! Structural invariants held at every observable state of a game.

use econwar_game::{
    ActionId, EVENT_CATALOG, FactionId, GameLength, GamePhase, GameSession, GameSettings,
    catalog, is_available,
};

fn assert_invariants(gs: &econwar_game::GameState) {
    // Percentage-like fields stay in [0, 100].
    for (name, value) in [
        ("happiness", gs.household.happiness),
        ("skills", gs.household.skills),
        ("market_share", gs.business.market_share),
        ("brand", gs.business.brand_recognition),
        ("productivity", gs.business.productivity),
        ("technology", gs.business.technology),
        ("trust", gs.government.trust_rating),
        ("infrastructure", gs.government.infrastructure),
        ("welfare", gs.government.welfare),
    ] {
        assert!((0..=100).contains(&value), "{name} out of range: {value}");
    }

    // Currencies never go negative.
    assert!(gs.household.money >= 0);
    assert!(gs.household.investments >= 0);
    assert!(gs.business.capital >= 0);
    assert!(gs.government.budget >= 0);

    // Reputation caps at 1,000.
    for faction in FactionId::all() {
        let rep = gs.reputation(faction);
        assert!((0..=1_000).contains(&rep), "reputation out of range: {rep}");
        assert!(gs.actions_used(faction) <= gs.max_actions(faction));
    }

    // Indicators stay in their documented bands.
    assert!(gs.indicators.gdp >= 50.0 && gs.indicators.gdp <= 150.0);
    assert!(gs.indicators.unemployment >= 0.0 && gs.indicators.unemployment <= 30.0);
    assert!(gs.indicators.inflation >= 0.0 && gs.indicators.inflation <= 10.0);
    assert!(gs.indicators.stock_market >= 30.0 && gs.indicators.stock_market <= 200.0);

    // At most one active instance per event.
    for tpl in EVENT_CATALOG {
        let count = gs.active_events.iter().filter(|e| e.id == tpl.id).count();
        assert!(count <= 1, "{} stacked", tpl.id);
    }

    // An ended game names a winner; a running one does not.
    match gs.phase {
        GamePhase::Ended => assert!(gs.winner.is_some()),
        GamePhase::Playing | GamePhase::Setup => assert!(gs.winner.is_none()),
    }
}

#[test]
fn invariants_hold_through_entire_games() {
    for seed in [3_u64, 19, 555] {
        let mut session = GameSession::new(
            FactionId::Household,
            GameSettings {
                game_length: GameLength::Short,
                ..GameSettings::default()
            },
            seed,
        );
        assert_invariants(session.state());

        let mut guard = 0;
        while session.state().phase == GamePhase::Playing && guard < 3_000 {
            if session.is_ai_turn() {
                session.ai_step();
            } else {
                // Greedy human: take the first available action until the
                // budget is gone.
                let pick = catalog(FactionId::Household)
                    .iter()
                    .map(|spec| spec.id)
                    .find(|&id| is_available(session.state(), id));
                match pick {
                    Some(id) => session.perform(id).unwrap(),
                    None => session.force_end_turn(),
                }
                session.end_turn();
            }
            assert_invariants(session.state());
            guard += 1;
        }
        assert_eq!(session.state().phase, GamePhase::Ended);
    }
}

#[test]
fn rejected_requests_never_mutate_state() {
    let mut session = GameSession::new(FactionId::Household, GameSettings::default(), 9);
    let before = session.state().clone();

    // Wrong faction.
    assert!(session.perform(ActionId::ProduceGoods).is_err());
    assert_eq!(session.state(), &before);

    // Too expensive after draining money.
    let mut broke = session.state().clone();
    broke.household.money = 0;
    let mut broke_session = GameSession::resume(broke.clone());
    assert!(broke_session.perform(ActionId::BuyGoods).is_err());
    assert_eq!(broke_session.state(), &broke);
}

#[test]
fn action_budgets_reset_every_round() {
    let mut session = GameSession::new(FactionId::Household, GameSettings::default(), 13);
    session.perform(ActionId::FamilyTime).unwrap();
    session.perform(ActionId::WorkOvertime).unwrap();
    assert_eq!(session.state().actions_used(FactionId::Household), 2);
    assert!(session.perform(ActionId::FamilyTime).is_err());

    session.end_turn();
    let mut guard = 0;
    while session.is_ai_turn() && guard < 20 {
        session.ai_step();
        guard += 1;
    }
    assert_eq!(session.state().turn, 2);
    for faction in FactionId::all() {
        assert_eq!(session.state().actions_used(faction), 0);
    }
}

#[test]
fn experience_accrues_and_levels_unlock_actions() {
    let mut session = GameSession::new(FactionId::Household, GameSettings::default(), 17);
    assert!(session.perform(ActionId::FreelanceWork).is_err());

    // Reputation 50 + SkillTraining's 12 experience is still level 1.
    session.perform(ActionId::SkillTraining).unwrap();
    assert_eq!(session.state().household.reputation, 62);
    assert_eq!(econwar_game::level(62), 1);
    assert!(session.perform(ActionId::FreelanceWork).is_err());
}
