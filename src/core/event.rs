//! Game events: what happened during a state transition.
//!
//! `apply_action` returns events alongside the mutated state instead of
//! parking notifications in shared fields. The rendering collaborator
//! consumes them (damage numbers, burn toasts, the winner screen); the
//! engine itself never reads them back.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::cards::CardId;

/// A notification produced while resolving an action.
///
/// Events carry display names where the renderer needs them (burned and
/// dead cards are gone from the state by the time the event is seen).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A new turn began for `player`.
    TurnStarted { player: PlayerId, turn_number: u32 },

    /// `player` drew a card into hand.
    CardDrawn { player: PlayerId, card: CardId },

    /// `player` drew with a full hand; the card was discarded unused.
    CardBurned { player: PlayerId, card_name: String },

    /// `player` drew from an empty deck and took escalating damage.
    FatigueDamage { player: PlayerId, damage: i32 },

    /// `player` summoned a minion from hand.
    MinionPlayed {
        player: PlayerId,
        minion: CardId,
        name: String,
    },

    /// A minion took damage (combat or effect).
    MinionDamaged { minion: CardId, damage: i32 },

    /// A hero took damage (combat, fatigue is reported separately).
    HeroDamaged { player: PlayerId, damage: i32 },

    /// A hero was healed (lifesteal); `amount` is post-clamp.
    HeroHealed { player: PlayerId, amount: i32 },

    /// A minion died and its card moved to `player`'s graveyard.
    MinionDied {
        player: PlayerId,
        minion: CardId,
        name: String,
    },

    /// The match is over.
    GameWon { winner: PlayerId },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_serialization() {
        let event = GameEvent::CardBurned {
            player: PlayerId::Two,
            card_name: "Rare Pepe".to_string(),
        };
        let json = serde_json::to_string(&event).unwrap();
        let deserialized: GameEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, deserialized);
    }

    #[test]
    fn test_event_equality() {
        let a = GameEvent::GameWon {
            winner: PlayerId::One,
        };
        let b = GameEvent::GameWon {
            winner: PlayerId::One,
        };
        let c = GameEvent::GameWon {
            winner: PlayerId::Two,
        };

        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
