//! The six wire directions and direction-keyed tables.
//!
//! Directions are numbered so that the opposite of `d` is `(d + 3) mod 6`:
//! North pairs with South, NorthEast with SouthWest, East with West. Wiring
//! in the three principal directions (North, East, SouthWest) determines the
//! other three by symmetry, so analyses only ever walk the principal set.

/// One of the six sides of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum Direction {
    East,
    NorthEast,
    North,
    West,
    SouthWest,
    South,
}

impl Direction {
    /// All six directions, in discriminant order.
    pub const ALL: [Direction; 6] = [
        Direction::East,
        Direction::NorthEast,
        Direction::North,
        Direction::West,
        Direction::SouthWest,
        Direction::South,
    ];

    /// The three directions whose wires are actually installed; the rest are
    /// the same cables seen from the other end.
    pub const PRINCIPAL: [Direction; 3] =
        [Direction::North, Direction::East, Direction::SouthWest];

    /// The direction pointing the other way along the same wire.
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::East => Direction::West,
            Direction::NorthEast => Direction::SouthWest,
            Direction::North => Direction::South,
            Direction::West => Direction::East,
            Direction::SouthWest => Direction::NorthEast,
            Direction::South => Direction::North,
        }
    }

    /// Axial lattice step for this direction.
    pub const fn offset(self) -> (i64, i64) {
        match self {
            Direction::East => (1, 0),
            Direction::NorthEast => (1, 1),
            Direction::North => (0, 1),
            Direction::West => (-1, 0),
            Direction::SouthWest => (-1, -1),
            Direction::South => (0, -1),
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::East => "East",
            Direction::NorthEast => "North East",
            Direction::North => "North",
            Direction::West => "West",
            Direction::SouthWest => "South West",
            Direction::South => "South",
        };
        write!(f, "{name}")
    }
}

/// A total table keyed by [`Direction`].
///
/// Replaces string- or constant-keyed lookups with a structure the compiler
/// can check for exhaustiveness: every direction always has an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectionMap<T> {
    values: [T; 6],
}

impl<T> DirectionMap<T> {
    /// Build a table by evaluating `f` for every direction.
    pub fn from_fn(mut f: impl FnMut(Direction) -> T) -> Self {
        Self {
            values: Direction::ALL.map(&mut f),
        }
    }

    /// Look up the entry for a direction.
    pub fn get(&self, direction: Direction) -> &T {
        &self.values[direction.index()]
    }

    /// Iterate entries in direction order.
    pub fn iter(&self) -> impl Iterator<Item = (Direction, &T)> {
        Direction::ALL.iter().map(move |&d| (d, self.get(d)))
    }

    /// Build a new table by transforming every entry.
    pub fn map<U>(&self, mut f: impl FnMut(Direction, &T) -> U) -> DirectionMap<U> {
        DirectionMap::from_fn(|d| f(d, self.get(d)))
    }
}

impl<T> std::ops::Index<Direction> for DirectionMap<T> {
    type Output = T;

    fn index(&self, direction: Direction) -> &T {
        self.get(direction)
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for DirectionMap<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(6))?;
        for (direction, value) in self.iter() {
            map.serialize_entry(&direction, value)?;
        }
        map.end()
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for DirectionMap<T> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use serde::de::Error;
        let mut entries = std::collections::BTreeMap::<Direction, T>::deserialize(deserializer)?;
        let mut take = |d: Direction| {
            entries
                .remove(&d)
                .ok_or_else(|| D::Error::custom(format!("missing entry for direction {d}")))
        };
        Ok(Self {
            values: [
                take(Direction::East)?,
                take(Direction::NorthEast)?,
                take(Direction::North)?,
                take(Direction::West)?,
                take(Direction::SouthWest)?,
                take(Direction::South)?,
            ],
        })
    }
}
