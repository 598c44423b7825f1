//! Seats and per-seat data storage.
//!
//! ## PlayerOrder
//!
//! Which of the two seats a player occupies. The seat fixes the player's
//! marker for the lifetime of the match.
//!
//! ## SeatMap
//!
//! Fixed two-entry storage indexed by `PlayerOrder`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::marker::Marker;

/// The seat a player was created in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerOrder {
    /// Created first; plays `X` and opens odd-numbered games.
    First,
    /// Created second; plays `O` and opens even-numbered games.
    Second,
}

impl PlayerOrder {
    /// Both seats, first to second.
    pub const BOTH: [PlayerOrder; 2] = [PlayerOrder::First, PlayerOrder::Second];

    /// 0-based seat index.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            PlayerOrder::First => 0,
            PlayerOrder::Second => 1,
        }
    }

    /// The other seat.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            PlayerOrder::First => PlayerOrder::Second,
            PlayerOrder::Second => PlayerOrder::First,
        }
    }

    /// Marker owned by this seat.
    #[must_use]
    pub const fn marker(self) -> Marker {
        marker_for(self)
    }

    /// The seat owning a marker, if any.
    #[must_use]
    pub const fn from_marker(marker: Marker) -> Option<Self> {
        match marker {
            Marker::PlayerOne => Some(PlayerOrder::First),
            Marker::PlayerTwo => Some(PlayerOrder::Second),
            Marker::Empty => None,
        }
    }
}

impl std::fmt::Display for PlayerOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.index() + 1)
    }
}

/// Marker assigned to a seat: first seat plays `X`, second plays `O`.
#[must_use]
pub const fn marker_for(order: PlayerOrder) -> Marker {
    match order {
        PlayerOrder::First => Marker::PlayerOne,
        PlayerOrder::Second => Marker::PlayerTwo,
    }
}

/// One value per seat.
///
/// ```
/// use ttt_series::core::{PlayerOrder, SeatMap};
///
/// let mut scores: SeatMap<u32> = SeatMap::with_value(0);
/// scores[PlayerOrder::Second] += 1;
/// assert_eq!(scores[PlayerOrder::First], 0);
/// assert_eq!(scores[PlayerOrder::Second], 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeatMap<T> {
    data: [T; 2],
}

impl<T> SeatMap<T> {
    /// Create from a factory called once per seat.
    pub fn new(factory: impl Fn(PlayerOrder) -> T) -> Self {
        Self {
            data: [factory(PlayerOrder::First), factory(PlayerOrder::Second)],
        }
    }

    /// Create from explicit first and second values.
    pub fn from_pair(first: T, second: T) -> Self {
        Self {
            data: [first, second],
        }
    }

    /// Create with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::from_pair(value.clone(), value)
    }

    #[must_use]
    pub fn get(&self, order: PlayerOrder) -> &T {
        &self.data[order.index()]
    }

    pub fn get_mut(&mut self, order: PlayerOrder) -> &mut T {
        &mut self.data[order.index()]
    }

    /// Iterate over (PlayerOrder, &T) pairs, first seat first.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerOrder, &T)> {
        PlayerOrder::BOTH.into_iter().zip(self.data.iter())
    }

    /// Iterate over (PlayerOrder, &mut T) pairs, first seat first.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerOrder, &mut T)> {
        PlayerOrder::BOTH.into_iter().zip(self.data.iter_mut())
    }

    /// Map each entry to a new value, keeping seats.
    pub fn map<U>(&self, f: impl Fn(&T) -> U) -> SeatMap<U> {
        SeatMap::from_pair(f(&self.data[0]), f(&self.data[1]))
    }
}

impl<T> Index<PlayerOrder> for SeatMap<T> {
    type Output = T;

    fn index(&self, order: PlayerOrder) -> &Self::Output {
        self.get(order)
    }
}

impl<T> IndexMut<PlayerOrder> for SeatMap<T> {
    fn index_mut(&mut self, order: PlayerOrder) -> &mut Self::Output {
        self.get_mut(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_basics() {
        assert_eq!(PlayerOrder::First.index(), 0);
        assert_eq!(PlayerOrder::Second.index(), 1);
        assert_eq!(PlayerOrder::First.other(), PlayerOrder::Second);
        assert_eq!(format!("{}", PlayerOrder::Second), "Player 2");
    }

    #[test]
    fn test_marker_for_order() {
        assert_eq!(marker_for(PlayerOrder::First), Marker::PlayerOne);
        assert_eq!(marker_for(PlayerOrder::Second), Marker::PlayerTwo);
        assert_eq!(PlayerOrder::from_marker(Marker::PlayerTwo), Some(PlayerOrder::Second));
        assert_eq!(PlayerOrder::from_marker(Marker::Empty), None);
    }

    #[test]
    fn test_seat_map_new() {
        let map: SeatMap<usize> = SeatMap::new(|o| o.index() * 10);
        assert_eq!(map[PlayerOrder::First], 0);
        assert_eq!(map[PlayerOrder::Second], 10);
    }

    #[test]
    fn test_seat_map_mutation() {
        let mut map: SeatMap<i32> = SeatMap::with_value(0);
        map[PlayerOrder::First] = 3;
        for (_, v) in map.iter_mut() {
            *v += 1;
        }
        assert_eq!(map[PlayerOrder::First], 4);
        assert_eq!(map[PlayerOrder::Second], 1);
    }

    #[test]
    fn test_seat_map_iter_and_map() {
        let map = SeatMap::from_pair("a", "bb");
        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(PlayerOrder::First, &"a"), (PlayerOrder::Second, &"bb")]);

        let lens = map.map(|s| s.len());
        assert_eq!(lens, SeatMap::from_pair(1, 2));
    }

    #[test]
    fn test_seat_map_serialization() {
        let map = SeatMap::from_pair(1u32, 2u32);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: SeatMap<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
