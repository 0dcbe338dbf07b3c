//! Game setup: deck validation, shuffling, and the opening deal.
//!
//! The external catalog/deck loader supplies plain `Card` lists; the
//! builder validates them BEFORE any `GameState` exists, so a malformed
//! deck is a `SetupError` at creation time, never a mid-game surprise.

use log::debug;

use crate::cards::{Card, CardInstance};
use crate::core::{GameConfig, GameState, PlayerId, PlayerMap, SetupError};

/// Builder for a new match.
///
/// ## Example
///
/// ```
/// use duelcore::cards::Card;
/// use duelcore::engine::GameBuilder;
///
/// let deck: Vec<Card> = (0..10).map(|i| Card::new(format!("C{i}"), 1, 1, 1)).collect();
/// let state = GameBuilder::new()
///     .deck(duelcore::core::PlayerId::One, deck.clone())
///     .deck(duelcore::core::PlayerId::Two, deck)
///     .seed(42)
///     .build()
///     .unwrap();
///
/// assert_eq!(state.players[duelcore::core::PlayerId::One].hand.len(), 3);
/// ```
pub struct GameBuilder {
    config: GameConfig,
    seed: u64,
    decks: PlayerMap<Vec<Card>>,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GameBuilder {
    /// Create a builder with the default ruleset and empty decks.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: GameConfig::default(),
            seed: 0,
            decks: PlayerMap::with_default(),
        }
    }

    /// Use a custom ruleset.
    #[must_use]
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Set a seat's deck (ordered card list from the external loader).
    #[must_use]
    pub fn deck(mut self, player: PlayerId, deck: Vec<Card>) -> Self {
        self.decks[player] = deck;
        self
    }

    /// Set the RNG seed for shuffling and random effects.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Validate the decks and create a live match.
    ///
    /// Shuffles each deck, assigns instance ids, deals the opening
    /// hands, and leaves the first player mid-turn in `Main` with
    /// starting mana - the start-of-turn pipeline first runs on the
    /// first handoff.
    pub fn build(self) -> Result<GameState, SetupError> {
        for (player, deck) in self.decks.iter() {
            validate_deck(player, deck, &self.config)?;
        }

        let mut state = GameState::new(self.config, self.seed);

        for player in PlayerId::both() {
            let mut deck = self.decks[player].clone();
            state.rng.shuffle(&mut deck);

            for card in deck {
                let id = state.alloc_card_id();
                state.players[player]
                    .deck
                    .push_back(CardInstance::new(id, card));
            }

            for _ in 0..state.config.opening_hand_size {
                if let Some(instance) = state.players[player].deck.pop_front() {
                    state.players[player].hand.push(instance);
                }
            }
        }

        debug!(
            "match created: seed {}, {} starts",
            self.seed, state.current_turn
        );
        Ok(state)
    }
}

/// Create a match from two decks with the default ruleset.
///
/// Convenience wrapper over `GameBuilder` for the common case.
pub fn new_game(
    p1_deck: Vec<Card>,
    p2_deck: Vec<Card>,
    seed: u64,
) -> Result<GameState, SetupError> {
    GameBuilder::new()
        .deck(PlayerId::One, p1_deck)
        .deck(PlayerId::Two, p2_deck)
        .seed(seed)
        .build()
}

fn validate_deck(player: PlayerId, deck: &[Card], config: &GameConfig) -> Result<(), SetupError> {
    if deck.is_empty() {
        return Err(SetupError::EmptyDeck(player));
    }
    if deck.len() < config.opening_hand_size {
        return Err(SetupError::DeckTooSmall {
            player,
            got: deck.len(),
            need: config.opening_hand_size,
        });
    }
    for card in deck {
        if card.health <= 0 {
            return Err(SetupError::InvalidCard {
                name: card.name.clone(),
                reason: format!("health must be positive, got {}", card.health),
            });
        }
        if card.attack < 0 {
            return Err(SetupError::InvalidCard {
                name: card.name.clone(),
                reason: format!("attack must be non-negative, got {}", card.attack),
            });
        }
        if card.cost > config.mana_cap {
            return Err(SetupError::InvalidCard {
                name: card.name.clone(),
                reason: format!(
                    "cost {} exceeds the mana cap of {}",
                    card.cost, config.mana_cap
                ),
            });
        }
    }
    Ok(())
}
