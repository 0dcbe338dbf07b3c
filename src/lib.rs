//! # duelcore
//!
//! A two-player turn-based card battle engine.
//!
//! ## Design Principles
//!
//! 1. **Pure core, impure shell**: the engine is a set of synchronous
//!    state-transition functions over an owned `GameState`. Rendering,
//!    AI decision-making, persistence, and networking are external
//!    collaborators that feed actions in and consume events out.
//!
//! 2. **Validate, then mutate**: every action either resolves
//!    completely or is rejected with an `ActionError` and the state
//!    unchanged. No partial application, ever.
//!
//! 3. **Deterministic**: all randomness (deck shuffles, random effect
//!    targets) flows through a seeded `GameRng`, so a match replays
//!    identically from its seed and action history.
//!
//! ## The rules in brief
//!
//! Each seat has a hero (30 health), a deck, a hand, and a board of up
//! to 7 minions. A turn grants one more maximum mana (up to 10), a full
//! refill, and one draw; drawing with a full hand burns the card, and
//! drawing from an empty deck deals escalating fatigue damage. Minions
//! attack minions (simultaneous damage) or the enemy hero; a closed set
//! of effects - charge, taunt, lifesteal, battlecry, deathrattle -
//! hooks into summoning, targeting, damage, and death. The first hero
//! at or below zero health loses.
//!
//! ## Modules
//!
//! - `core`: players, state, actions, events, errors, RNG, config
//! - `cards`: card templates and in-play instances
//! - `engine`: setup, draw, turn, combat, and effect hooks
//!
//! ## Example
//!
//! ```
//! use duelcore::cards::Card;
//! use duelcore::core::{Action, PlayerId};
//! use duelcore::engine::{apply_action, new_game};
//!
//! let deck: Vec<Card> = (0..10).map(|i| Card::new(format!("C{i}"), 1, 2, 2)).collect();
//! let mut state = new_game(deck.clone(), deck, 42).unwrap();
//!
//! let card = state.players[PlayerId::One].hand[0].id;
//! let events = apply_action(&mut state, PlayerId::One, &Action::PlayCard { card }).unwrap();
//! assert!(!events.is_empty());
//! ```

pub mod cards;
pub mod core;
pub mod engine;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionError, ActionRecord, AttackTarget, GameConfig, GameEvent, GameRng, GameRngState,
    GameState, PlayerId, PlayerMap, PlayerState, SetupError, TurnPhase,
};

pub use crate::cards::{Card, CardEffect, CardId, CardInstance, Minion};

pub use crate::engine::{apply_action, new_game, DrawOutcome, GameBuilder};
