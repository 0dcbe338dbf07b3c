//! Game state: the complete description of one match.
//!
//! ## PlayerState
//!
//! One seat's zones and scalar resources:
//! - `deck` (ordered, front = next draw), `hand`, `board`, `graveyard`
//! - health, mana, and the fatigue counter
//!
//! ## GameState
//!
//! Both seats plus turn progression, the winner slot, the action
//! history, and the deterministic RNG. The graveyard and history use
//! `im` persistent vectors, so cloning a `GameState` for a snapshot or
//! a search branch shares structure instead of copying the logs.
//!
//! All mutation goes through the `engine` module; the state types only
//! offer zone bookkeeping that cannot violate an invariant on its own.

use std::collections::VecDeque;

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::action::ActionRecord;
use super::config::GameConfig;
use super::player::{PlayerId, PlayerMap};
use super::rng::GameRng;
use crate::cards::{Card, CardId, CardInstance, Minion};

/// Phases of one turn.
///
/// The steady state between actions is `Main`; the other phases exist
/// transiently while the turn controller runs the handoff pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnPhase {
    /// Control has just arrived at this seat.
    Start,
    /// Mana refresh.
    Mana,
    /// The once-per-turn draw.
    Draw,
    /// Accepting actions.
    Main,
    /// The turn is being handed over.
    End,
}

impl TurnPhase {
    /// The next phase in turn order, or `None` after `End`.
    #[must_use]
    pub fn next(self) -> Option<TurnPhase> {
        match self {
            TurnPhase::Start => Some(TurnPhase::Mana),
            TurnPhase::Mana => Some(TurnPhase::Draw),
            TurnPhase::Draw => Some(TurnPhase::Main),
            TurnPhase::Main => Some(TurnPhase::End),
            TurnPhase::End => None,
        }
    }
}

/// One seat's complete state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    /// Which seat this is.
    pub id: PlayerId,

    /// Hero health. May go negative transiently during resolution; a
    /// death check follows every damage step.
    pub health: i32,

    /// Healing clamp.
    pub max_health: i32,

    /// Mana available this turn.
    pub mana: u32,

    /// Refill value; grows by one per turn up to the configured cap.
    pub max_mana: u32,

    /// Ordered draw pile. Front is the next draw; shrinks only by
    /// drawing.
    pub deck: VecDeque<CardInstance>,

    /// Cards held, bounded by the configured hand limit.
    pub hand: Vec<CardInstance>,

    /// Minions in play, in play order (display order only, no ranking
    /// invariant). Inline capacity matches the standard board limit.
    pub board: SmallVec<[Minion; 7]>,

    /// Append-only log of cards that died in play. Burned cards do NOT
    /// land here.
    pub graveyard: Vector<Card>,

    /// Number of empty-deck draw attempts so far. Never resets.
    pub fatigue_counter: u32,
}

impl PlayerState {
    /// Create an empty seat with the configured starting resources.
    #[must_use]
    pub fn new(id: PlayerId, config: &GameConfig) -> Self {
        Self {
            id,
            health: config.starting_health,
            max_health: config.starting_health,
            mana: config.starting_mana,
            max_mana: config.starting_mana,
            deck: VecDeque::new(),
            hand: Vec::new(),
            board: SmallVec::new(),
            graveyard: Vector::new(),
            fatigue_counter: 0,
        }
    }

    // === Hand ===

    /// Find a hand card by instance id.
    #[must_use]
    pub fn hand_card(&self, id: CardId) -> Option<&CardInstance> {
        self.hand.iter().find(|c| c.id == id)
    }

    /// Remove and return a hand card by instance id.
    pub fn take_hand_card(&mut self, id: CardId) -> Option<CardInstance> {
        let pos = self.hand.iter().position(|c| c.id == id)?;
        Some(self.hand.remove(pos))
    }

    // === Board ===

    /// Find a board minion by instance id.
    #[must_use]
    pub fn minion(&self, id: CardId) -> Option<&Minion> {
        self.board.iter().find(|m| m.id == id)
    }

    /// Find a board minion mutably by instance id.
    pub fn minion_mut(&mut self, id: CardId) -> Option<&mut Minion> {
        self.board.iter_mut().find(|m| m.id == id)
    }

    /// Remove and return a board minion by instance id.
    pub fn remove_minion(&mut self, id: CardId) -> Option<Minion> {
        let pos = self.board.iter().position(|m| m.id == id)?;
        Some(self.board.remove(pos))
    }

    // === Health ===

    /// Heal the hero, clamped to `max_health`.
    ///
    /// Returns the amount actually restored.
    pub fn heal(&mut self, amount: i32) -> i32 {
        let before = self.health;
        self.health = (self.health + amount).min(self.max_health);
        self.health - before
    }

    /// Whether this hero has fallen.
    #[must_use]
    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }
}

/// Complete state of one match.
///
/// `Clone` is cheap on the log zones thanks to `im` structural sharing;
/// hosts running many matches keep one `GameState` per match with no
/// shared mutable data between them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// The rule constants this match was created with.
    pub config: GameConfig,

    /// Both seats.
    pub players: PlayerMap<PlayerState>,

    /// Whose turn it is.
    pub current_turn: PlayerId,

    /// Starts at 1; increments when control returns to the first
    /// player, so one turn number covers a full round.
    pub turn_number: u32,

    /// Where in the turn lifecycle the match is. `Main` whenever the
    /// engine is waiting for an action.
    pub phase: TurnPhase,

    /// Set exactly once; all further actions are rejected after.
    pub winner: Option<PlayerId>,

    /// Append-only log of resolved actions.
    pub history: Vector<ActionRecord>,

    /// Deterministic RNG for shuffles and random effect targets.
    pub rng: GameRng,

    /// Next card instance id to allocate.
    next_card_id: u32,
}

impl GameState {
    /// Create a match with empty zones.
    ///
    /// Use `GameBuilder` to create a playable match; this constructor
    /// exists for the builder and for tests that assemble states by
    /// hand.
    #[must_use]
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let players = PlayerMap::new(|id| PlayerState::new(id, &config));
        let current_turn = config.first_player;
        Self {
            config,
            players,
            current_turn,
            turn_number: 1,
            phase: TurnPhase::Main,
            winner: None,
            history: Vector::new(),
            rng: GameRng::new(seed),
            next_card_id: 0,
        }
    }

    /// Allocate a new card instance id.
    pub fn alloc_card_id(&mut self) -> CardId {
        let id = CardId::new(self.next_card_id);
        self.next_card_id += 1;
        id
    }

    /// The seat whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> &PlayerState {
        &self.players[self.current_turn]
    }

    /// The seat waiting for its turn.
    #[must_use]
    pub fn opponent(&self) -> &PlayerState {
        &self.players[self.current_turn.opponent()]
    }

    /// Whether the match has a winner.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Record a resolved action in the history log.
    pub fn record_action(&mut self, record: ActionRecord) {
        self.history.push_back(record);
    }
}
