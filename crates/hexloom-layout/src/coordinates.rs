//! The coordinate spaces the pipeline moves boards through.
//!
//! [`GridCoord`] serves the Cartesian, rectangular, compressed and folded
//! stages; [`CabinetCoord`] is the installed position and [`Vec3`] the
//! real-valued physical space used only for length metrics.

use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

/// An integer position on the skewed Cartesian grid.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct GridCoord {
    pub x: i64,
    pub y: i64,
}

impl GridCoord {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for GridCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// An installed board position: cabinet, rack within it, slot within that.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct CabinetCoord {
    pub cabinet: u32,
    pub rack: u32,
    pub slot: u32,
}

impl CabinetCoord {
    pub const fn new(cabinet: u32, rack: u32, slot: u32) -> Self {
        Self {
            cabinet,
            rack,
            slot,
        }
    }
}

impl Sub for CabinetCoord {
    type Output = CabinetDelta;

    fn sub(self, other: Self) -> CabinetDelta {
        CabinetDelta {
            cabinets: self.cabinet as i64 - other.cabinet as i64,
            racks: self.rack as i64 - other.rack as i64,
            slots: self.slot as i64 - other.slot as i64,
        }
    }
}

impl std::fmt::Display for CabinetCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "C{}R{}S{}", self.cabinet, self.rack, self.slot)
    }
}

/// The difference between two cabinet positions: a wire's "shape".
///
/// Two wires with the same delta run between the same relative positions and
/// can therefore be made from the same cable pattern.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct CabinetDelta {
    pub cabinets: i64,
    pub racks: i64,
    pub slots: i64,
}

/// A physical position or displacement in metres.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Euclidean length of the displacement.
    pub fn length(self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }
}

impl Add for Vec3 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl Sub for Vec3 {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}
