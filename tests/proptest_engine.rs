// Property-based tests for the engine's hard guarantees.
use duelcore::cards::{Card, CardId};
use duelcore::core::{Action, AttackTarget, GameConfig, PlayerId, PlayerState};
use duelcore::engine::{apply_action, draw::draw, new_game, DrawOutcome};
use proptest::prelude::*;

fn deck(size: usize) -> Vec<Card> {
    (0..size)
        .map(|i| Card::new(format!("Card {i}"), 1 + (i as u32 % 3), 2, 2))
        .collect()
}

proptest! {
    #[test]
    fn proptest_fatigue_kth_draw_deals_k(n in 1usize..30) {
        let config = GameConfig::default();
        let mut player = PlayerState::new(PlayerId::One, &config);
        let start_health = player.health;

        for k in 1..=n {
            let outcome = draw(&mut player, config.hand_limit);
            prop_assert_eq!(outcome, DrawOutcome::Fatigue(k as i32));
        }

        prop_assert_eq!(player.fatigue_counter, n as u32);
        let total: i32 = (1..=n as i32).sum();
        prop_assert_eq!(player.health, start_health - total);
    }

    #[test]
    fn proptest_invalid_actions_never_mutate(raw_id in 1000u32..2000, seed in 0u64..500) {
        let mut state = new_game(deck(10), deck(10), seed).expect("setup failed");
        let ghost = CardId::new(raw_id);
        let before = state.clone();

        // None of these ids exist anywhere in the match.
        prop_assert!(apply_action(
            &mut state,
            PlayerId::One,
            &Action::PlayCard { card: ghost }
        ).is_err(), "playing a ghost card should error");
        prop_assert!(apply_action(
            &mut state,
            PlayerId::One,
            &Action::Attack { attacker: ghost, target: AttackTarget::Hero }
        ).is_err(), "attacking with a ghost minion should error");
        prop_assert!(apply_action(
            &mut state,
            PlayerId::Two,
            &Action::EndTurn
        ).is_err());

        prop_assert_eq!(state, before);
    }

    #[test]
    fn proptest_same_seed_replays_identically(seed in proptest::num::u64::ANY) {
        let mut a = new_game(deck(12), deck(12), seed).expect("setup failed");
        let mut b = new_game(deck(12), deck(12), seed).expect("setup failed");

        for _ in 0..8 {
            let seat = a.current_turn;
            if a.winner.is_some() {
                break;
            }
            if let Some(card) = a.players[seat]
                .hand
                .iter()
                .find(|c| c.card.cost <= a.players[seat].mana)
                .map(|c| c.id)
            {
                let _ = apply_action(&mut a, seat, &Action::PlayCard { card });
                let _ = apply_action(&mut b, seat, &Action::PlayCard { card });
            }
            let _ = apply_action(&mut a, seat, &Action::EndTurn);
            let _ = apply_action(&mut b, seat, &Action::EndTurn);
        }

        prop_assert_eq!(a, b);
    }

    #[test]
    fn proptest_heal_never_exceeds_max(start in 1i32..30, amount in 0i32..100) {
        let config = GameConfig::default();
        let mut player = PlayerState::new(PlayerId::One, &config);
        player.health = start;

        let healed = player.heal(amount);

        prop_assert!(player.health <= player.max_health);
        prop_assert_eq!(healed, player.health - start);
    }
}
