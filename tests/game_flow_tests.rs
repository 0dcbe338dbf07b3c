//! Full-game flow tests.
//!
//! These drive matches end to end through `apply_action`, the same way
//! an external UI or AI collaborator would, and check that the global
//! invariants hold along the way.

use duelcore::cards::Card;
use duelcore::core::{Action, AttackTarget, GameEvent, PlayerId, TurnPhase};
use duelcore::engine::{apply_action, new_game};

fn deck(size: usize) -> Vec<Card> {
    (0..size)
        .map(|i| Card::new(format!("Card {i}"), 1, 2, 2))
        .collect()
}

#[test]
fn test_opening_position() {
    let state = new_game(deck(10), deck(10), 42).unwrap();

    assert_eq!(state.current_turn, PlayerId::One);
    assert_eq!(state.turn_number, 1);
    assert_eq!(state.phase, TurnPhase::Main);
    assert!(state.winner.is_none());
    for seat in PlayerId::both() {
        assert_eq!(state.players[seat].hand.len(), 3);
        assert_eq!(state.players[seat].deck.len(), 7);
        assert_eq!(state.players[seat].health, 30);
        assert_eq!(state.players[seat].mana, 1);
    }
}

#[test]
fn test_play_attack_across_turns() {
    let mut state = new_game(deck(10), deck(10), 42).unwrap();

    // Player one summons; the minion has summoning sickness.
    let card = state.players[PlayerId::One].hand[0].id;
    apply_action(&mut state, PlayerId::One, &Action::PlayCard { card }).unwrap();
    apply_action(&mut state, PlayerId::One, &Action::EndTurn).unwrap();

    // Player two passes straight back.
    apply_action(&mut state, PlayerId::Two, &Action::EndTurn).unwrap();

    // Back on player one's turn the minion is ready and goes face.
    let events = apply_action(
        &mut state,
        PlayerId::One,
        &Action::Attack {
            attacker: card,
            target: AttackTarget::Hero,
        },
    )
    .unwrap();

    assert_eq!(state.players[PlayerId::Two].health, 28);
    assert!(events.contains(&GameEvent::HeroDamaged {
        player: PlayerId::Two,
        damage: 2
    }));

    // One attack per turn: a second swing is rejected.
    let err = apply_action(
        &mut state,
        PlayerId::One,
        &Action::Attack {
            attacker: card,
            target: AttackTarget::Hero,
        },
    )
    .unwrap_err();
    assert_eq!(err, duelcore::ActionError::CannotAttack(card));
}

#[test]
fn test_mana_growth_over_rounds() {
    let mut state = new_game(deck(30), deck(30), 42).unwrap();

    for round in 2..=12u32 {
        apply_action(&mut state, PlayerId::One, &Action::EndTurn).unwrap();
        apply_action(&mut state, PlayerId::Two, &Action::EndTurn).unwrap();

        let expected = round.min(10);
        assert_eq!(state.turn_number, round);
        assert_eq!(state.players[PlayerId::One].max_mana, expected);
        assert_eq!(state.players[PlayerId::One].mana, expected);
    }
}

#[test]
fn test_game_played_to_a_win() {
    // Both decks are all 2/2s; a scripted aggressive policy must
    // eventually kill a 30-health hero.
    let mut state = new_game(deck(30), deck(30), 7).unwrap();

    let mut steps = 0;
    while state.winner.is_none() {
        steps += 1;
        assert!(steps < 10_000, "game did not terminate");

        let seat = state.current_turn;

        // Play everything affordable.
        while let Some(card) = state.players[seat]
            .hand
            .iter()
            .find(|c| c.card.cost <= state.players[seat].mana)
            .map(|c| c.id)
        {
            if apply_action(&mut state, seat, &Action::PlayCard { card }).is_err() {
                break;
            }
        }

        // Attack the hero with every ready minion.
        let ready: Vec<_> = state.players[seat]
            .board
            .iter()
            .filter(|m| m.can_attack)
            .map(|m| m.id)
            .collect();
        for attacker in ready {
            if state.winner.is_some() {
                break;
            }
            let _ = apply_action(
                &mut state,
                seat,
                &Action::Attack {
                    attacker,
                    target: AttackTarget::Hero,
                },
            );
        }

        if state.winner.is_none() {
            apply_action(&mut state, seat, &Action::EndTurn).unwrap();
        }
    }

    let winner = state.winner.unwrap();
    let loser = winner.opponent();
    assert!(state.players[loser].health <= 0);
    assert!(state.players[winner].health > 0);
}

#[test]
fn test_zone_conservation() {
    // Every dealt card stays traceable to exactly one zone, with burned
    // cards accounted separately (they leave play entirely).
    let mut state = new_game(deck(12), deck(12), 11).unwrap();
    let mut burned = 0usize;

    for _ in 0..60 {
        if state.winner.is_some() {
            break;
        }
        let seat = state.current_turn;

        if let Some(card) = state.players[seat]
            .hand
            .iter()
            .find(|c| c.card.cost <= state.players[seat].mana)
            .map(|c| c.id)
        {
            let _ = apply_action(&mut state, seat, &Action::PlayCard { card });
        }
        if let Some(attacker) = state.players[seat]
            .board
            .iter()
            .find(|m| m.can_attack)
            .map(|m| m.id)
        {
            let target = state.players[seat.opponent()]
                .board
                .first()
                .map(|m| AttackTarget::Minion(m.id))
                .unwrap_or(AttackTarget::Hero);
            let _ = apply_action(&mut state, seat, &Action::Attack { attacker, target });
        }
        if state.winner.is_none() {
            let events = apply_action(&mut state, seat, &Action::EndTurn).unwrap();
            burned += events
                .iter()
                .filter(|e| matches!(e, GameEvent::CardBurned { .. }))
                .count();
        }
    }

    let mut accounted = burned;
    for seat in PlayerId::both() {
        let p = &state.players[seat];
        accounted += p.deck.len() + p.hand.len() + p.board.len() + p.graveyard.len();
    }
    assert_eq!(accounted, 24);
}

#[test]
fn test_determinism_same_seed_same_script() {
    let script = |state: &mut duelcore::GameState| {
        for _ in 0..6 {
            let seat = state.current_turn;
            if let Some(card) = state.players[seat]
                .hand
                .iter()
                .find(|c| c.card.cost <= state.players[seat].mana)
                .map(|c| c.id)
            {
                let _ = apply_action(state, seat, &Action::PlayCard { card });
            }
            apply_action(state, seat, &Action::EndTurn).unwrap();
        }
    };

    let mut a = new_game(deck(20), deck(20), 99).unwrap();
    let mut b = new_game(deck(20), deck(20), 99).unwrap();
    script(&mut a);
    script(&mut b);

    assert_eq!(a, b);
}

#[test]
fn test_history_records_the_whole_match() {
    let mut state = new_game(deck(10), deck(10), 42).unwrap();

    apply_action(&mut state, PlayerId::One, &Action::EndTurn).unwrap();
    apply_action(&mut state, PlayerId::Two, &Action::EndTurn).unwrap();
    apply_action(&mut state, PlayerId::One, &Action::Concede).unwrap();

    assert_eq!(state.history.len(), 3);
    assert_eq!(state.history[2].action, Action::Concede);
    assert_eq!(state.winner, Some(PlayerId::Two));
}
