//! Error types for the battle engine.
//!
//! There are exactly two failure surfaces: a deck that fails validation
//! at game creation (`SetupError`, no `GameState` is produced), and an
//! action whose preconditions do not hold (`ActionError`, the state is
//! left untouched). Nothing inside a running game is fatal.

use thiserror::Error;

use super::player::PlayerId;
use crate::cards::CardId;

/// A rejected action. Always recoverable; the state is unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("the game is already over")]
    GameOver,

    #[error("it is not {0}'s turn")]
    NotYourTurn(PlayerId),

    #[error("actions are only accepted during the main phase")]
    WrongPhase,

    #[error("{0} is not in the acting player's hand")]
    CardNotInHand(CardId),

    #[error("insufficient mana: need {need}, have {have}")]
    InsufficientMana { need: u32, have: u32 },

    #[error("the board is full")]
    BoardFull,

    #[error("{0} is not on the acting player's board")]
    MinionNotOnBoard(CardId),

    #[error("{0} cannot attack")]
    CannotAttack(CardId),

    #[error("{0} is not on the defending board")]
    TargetNotFound(CardId),

    #[error("a taunt minion must be attacked first")]
    TauntInTheWay,
}

/// A deck rejected at game creation, before any state exists.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("{0}'s deck is empty")]
    EmptyDeck(PlayerId),

    #[error("{player}'s deck has {got} cards but the opening hand needs {need}")]
    DeckTooSmall {
        player: PlayerId,
        got: usize,
        need: usize,
    },

    #[error("invalid card {name:?}: {reason}")]
    InvalidCard { name: String, reason: String },
}
