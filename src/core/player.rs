//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! The engine is a strict duel: exactly two seats, symmetric in the
//! rules. `PlayerId` is a two-variant enum so seat handling is
//! exhaustive at compile time and `opponent()` is total.
//!
//! ## PlayerMap
//!
//! Per-seat data storage backed by a fixed two-element array for O(1)
//! access. Supports iteration and indexing by `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two seats in a duel.
///
/// The engine treats both seats identically; "player one" is merely the
/// seat configured to move first by default.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    /// The other seat.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }

    /// Both seats, in seat order.
    ///
    /// ```
    /// use duelcore::core::PlayerId;
    ///
    /// let seats = PlayerId::both();
    /// assert_eq!(seats, [PlayerId::One, PlayerId::Two]);
    /// ```
    #[must_use]
    pub const fn both() -> [PlayerId; 2] {
        [PlayerId::One, PlayerId::Two]
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerId::One => write!(f, "player 1"),
            PlayerId::Two => write!(f, "player 2"),
        }
    }
}

/// Per-seat data storage with O(1) access.
///
/// Backed by a `[T; 2]` with one entry per seat.
/// Use `PlayerMap::new()` to create with a factory function,
/// or `PlayerMap::with_value()` to initialize both entries to the
/// same value.
///
/// ## Example
///
/// ```
/// use duelcore::core::{PlayerId, PlayerMap};
///
/// let mut life: PlayerMap<i32> = PlayerMap::with_value(30);
///
/// assert_eq!(life[PlayerId::One], 30);
///
/// life[PlayerId::Two] = 25;
/// assert_eq!(life[PlayerId::Two], 25);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    ///
    /// The factory receives the `PlayerId` for each seat.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: [factory(PlayerId::One), factory(PlayerId::Two)],
        }
    }

    /// Create a new PlayerMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Create a new PlayerMap with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    /// Get a reference to a seat's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a seat's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::both().into_iter().zip(self.data.iter())
    }

    /// Iterate over (PlayerId, &mut T) pairs in seat order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        PlayerId::both().into_iter().zip(self.data.iter_mut())
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}
