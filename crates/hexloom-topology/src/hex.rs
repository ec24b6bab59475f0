//! Axial hexagonal coordinates.
//!
//! Boards sit on an integer lattice with two axes; the six wire directions
//! map to the unit steps East `(1, 0)`, North `(0, 1)`, NorthEast `(1, 1)`
//! and their negations. NorthEast is the sum of East and North, which is what
//! makes the lattice hexagonal rather than square.

use std::ops::{Add, Neg, Sub};

use crate::Direction;

/// A board position in axial hexagonal space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HexCoord {
    /// First axial coordinate (increases going East)
    pub q: i64,
    /// Second axial coordinate (increases going North)
    pub r: i64,
}

impl HexCoord {
    /// Origin of the coordinate system.
    pub const ORIGIN: Self = Self { q: 0, r: 0 };

    /// Create a new coordinate.
    pub const fn new(q: i64, r: i64) -> Self {
        Self { q, r }
    }

    /// The coordinate one wire-hop away in the given direction.
    pub const fn step(self, direction: Direction) -> Self {
        let (dq, dr) = direction.offset();
        Self {
            q: self.q + dq,
            r: self.r + dr,
        }
    }

    /// All six unit neighbours.
    pub fn neighbours(self) -> [Self; 6] {
        Direction::ALL.map(|d| self.step(d))
    }
}

impl Add for HexCoord {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self {
            q: self.q + other.q,
            r: self.r + other.r,
        }
    }
}

impl Sub for HexCoord {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self {
            q: self.q - other.q,
            r: self.r - other.r,
        }
    }
}

impl Neg for HexCoord {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            q: -self.q,
            r: -self.r,
        }
    }
}

impl std::fmt::Display for HexCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.q, self.r)
    }
}
