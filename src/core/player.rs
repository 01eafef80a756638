//! Player identities and per-color data storage.
//!
//! ## Player
//!
//! Opaque identity supplied by the collaborator (sign-in layer). Two
//! players are the same player when their names match.
//!
//! ## ColorMap
//!
//! Fixed two-entry storage indexed by [`Color`]. Used for seats and for
//! the running piece counts on the board.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::piece::Color;

/// A seated player.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    name: String,
}

impl Player {
    /// Create a player with the given display name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The player's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

/// Per-color data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use checkers_engine::core::{Color, ColorMap};
///
/// let mut counts: ColorMap<u8> = ColorMap::with_value(12);
/// counts[Color::White] -= 1;
///
/// assert_eq!(counts[Color::Red], 12);
/// assert_eq!(counts[Color::White], 11);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorMap<T> {
    data: [T; 2],
}

impl<T> ColorMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(Color) -> T) -> Self {
        Self {
            data: [factory(Color::Red), factory(Color::White)],
        }
    }

    /// Create a map from explicit red and white values.
    pub fn from_pair(red: T, white: T) -> Self {
        Self { data: [red, white] }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a color's data.
    #[must_use]
    pub fn get(&self, color: Color) -> &T {
        &self.data[color.index()]
    }

    /// Get a mutable reference to a color's data.
    pub fn get_mut(&mut self, color: Color) -> &mut T {
        &mut self.data[color.index()]
    }

    /// Iterate over (Color, &T) pairs, red first.
    pub fn iter(&self) -> impl Iterator<Item = (Color, &T)> {
        Color::ALL.into_iter().zip(self.data.iter())
    }

    /// The first color whose entry satisfies `pred`.
    pub fn find(&self, pred: impl Fn(&T) -> bool) -> Option<Color> {
        self.iter().find(|(_, v)| pred(v)).map(|(c, _)| c)
    }
}

impl<T> Index<Color> for ColorMap<T> {
    type Output = T;

    fn index(&self, color: Color) -> &Self::Output {
        self.get(color)
    }
}

impl<T> IndexMut<Color> for ColorMap<T> {
    fn index_mut(&mut self, color: Color) -> &mut Self::Output {
        self.get_mut(color)
    }
}
