//! Game configuration: the rule constants of a match.
//!
//! The engine never hardcodes rule numbers; everything a match needs
//! (starting health, mana growth cap, zone limits, opening hand size)
//! lives in `GameConfig`. Defaults mirror the standard ruleset.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// Rule constants for one match.
///
/// Built with the `with_*` methods; construction asserts the invariants
/// between the constants, so an inconsistent config is a programmer
/// error caught immediately rather than a mid-game surprise.
///
/// ## Example
///
/// ```
/// use duelcore::core::GameConfig;
///
/// let config = GameConfig::default()
///     .with_starting_health(20)
///     .with_mana_cap(8);
///
/// assert_eq!(config.starting_health, 20);
/// assert_eq!(config.mana_cap, 8);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Hero health both seats start (and are capped) at.
    pub starting_health: i32,

    /// Mana available on the first turn.
    pub starting_mana: u32,

    /// Maximum value `max_mana` grows to.
    pub mana_cap: u32,

    /// Cards a hand may hold; a draw past this burns the card.
    pub hand_limit: usize,

    /// Minions a board may hold.
    pub board_limit: usize,

    /// Cards dealt to each seat before the first turn.
    pub opening_hand_size: usize,

    /// The seat that takes the first turn.
    pub first_player: PlayerId,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_health: 30,
            starting_mana: 1,
            mana_cap: 10,
            hand_limit: 10,
            board_limit: 7,
            opening_hand_size: 3,
            first_player: PlayerId::One,
        }
    }
}

impl GameConfig {
    /// Set the starting (and maximum) hero health.
    #[must_use]
    pub fn with_starting_health(mut self, health: i32) -> Self {
        assert!(health > 0, "Starting health must be positive");
        self.starting_health = health;
        self
    }

    /// Set the first-turn mana.
    #[must_use]
    pub fn with_starting_mana(mut self, mana: u32) -> Self {
        self.starting_mana = mana;
        self
    }

    /// Set the mana growth cap.
    #[must_use]
    pub fn with_mana_cap(mut self, cap: u32) -> Self {
        assert!(cap >= self.starting_mana, "Mana cap below starting mana");
        self.mana_cap = cap;
        self
    }

    /// Set the hand limit.
    #[must_use]
    pub fn with_hand_limit(mut self, limit: usize) -> Self {
        assert!(
            limit >= self.opening_hand_size,
            "Hand limit below opening hand size"
        );
        self.hand_limit = limit;
        self
    }

    /// Set the board limit.
    #[must_use]
    pub fn with_board_limit(mut self, limit: usize) -> Self {
        assert!(limit > 0, "Board limit must be positive");
        self.board_limit = limit;
        self
    }

    /// Set the opening hand size.
    #[must_use]
    pub fn with_opening_hand_size(mut self, size: usize) -> Self {
        assert!(size <= self.hand_limit, "Opening hand exceeds hand limit");
        self.opening_hand_size = size;
        self
    }

    /// Set the seat that moves first.
    #[must_use]
    pub fn with_first_player(mut self, player: PlayerId) -> Self {
        self.first_player = player;
        self
    }
}
