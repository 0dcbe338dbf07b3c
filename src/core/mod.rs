//! Core engine types: players, state, actions, events, errors, RNG,
//! configuration.
//!
//! Everything here is data; the rules that mutate it live in `engine`.

pub mod action;
pub mod config;
pub mod error;
pub mod event;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{Action, ActionRecord, AttackTarget};
pub use config::GameConfig;
pub use error::{ActionError, SetupError};
pub use event::GameEvent;
pub use player::{PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState};
pub use state::{GameState, PlayerState, TurnPhase};
