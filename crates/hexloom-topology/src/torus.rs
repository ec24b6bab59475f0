//! The interlinked board graph.
//!
//! Boards are stored in a fixed array and neighbour relationships are
//! `BoardId` indices into that array, so the whole model is immutable and
//! trivially copyable once built. Adjacency is a property of this graph
//! alone; the coordinate relabelling pipeline never touches it.

use thiserror::Error;

use crate::{Direction, HexCoord, BOARDS_PER_TRIAD, WIRES_PER_BOARD};

/// Result type for topology operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building a torus.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The torus must contain at least one triad in each axis.
    #[error("torus dimensions must be positive, got {width}x{height} triads")]
    EmptyTorus { width: u32, height: u32 },
}

/// Identity of a board: an index into the torus board array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardId(pub usize);

/// Axial offsets of the three boards within a triad: bottom-left, top, right.
const TRIAD_OFFSETS: [HexCoord; BOARDS_PER_TRIAD] = [
    HexCoord { q: 0, r: 0 },
    HexCoord { q: 0, r: 1 },
    HexCoord { q: 1, r: 1 },
];

/// A `width x height` triad torus of boards with wraparound adjacency.
#[derive(Debug, Clone)]
pub struct Torus {
    width: u32,
    height: u32,
    /// One entry per board: the neighbour reached along each direction.
    neighbours: Vec<[BoardId; WIRES_PER_BOARD]>,
    /// Canonical axial coordinate per board.
    coords: Vec<HexCoord>,
}

impl Torus {
    /// Build the fully wired torus for the given size in triads.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::EmptyTorus { width, height });
        }

        let count = BOARDS_PER_TRIAD * width as usize * height as usize;
        let mut coords = Vec::with_capacity(count);
        for ty in 0..height as i64 {
            for tx in 0..width as i64 {
                let base = HexCoord::new(2 * tx + ty, tx + 2 * ty);
                for offset in TRIAD_OFFSETS {
                    coords.push(base + offset);
                }
            }
        }

        let neighbours = coords
            .iter()
            .map(|&coord| Direction::ALL.map(|d| canonical_board(coord.step(d), width, height)))
            .collect();
        Ok(Self {
            width,
            height,
            neighbours,
            coords,
        })
    }

    /// Width in triads.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in triads.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of boards (`3 * width * height`).
    pub fn board_count(&self) -> usize {
        self.coords.len()
    }

    /// All board identities in canonical order.
    pub fn boards(&self) -> impl Iterator<Item = BoardId> {
        (0..self.board_count()).map(BoardId)
    }

    /// Canonical axial coordinate of a board.
    pub fn hex_coord(&self, board: BoardId) -> HexCoord {
        self.coords[board.0]
    }

    /// The board occupying an axial coordinate, reducing modulo the torus.
    ///
    /// Total over the whole lattice: the triad cosets partition the plane,
    /// so every integer coordinate names exactly one board.
    pub fn board_at(&self, coord: HexCoord) -> BoardId {
        canonical_board(coord, self.width, self.height)
    }

    /// Follow the wire leaving `board` on the given side.
    pub fn follow_wire(&self, board: BoardId, direction: Direction) -> BoardId {
        self.neighbours[board.0][direction as usize]
    }

    /// Follow a packet that entered `board` through the wire on
    /// `entry` while travelling in `heading`.
    ///
    /// Returns the side of the next board the packet arrives through and
    /// that board's identity, or `None` if the router never emits packets
    /// with this side/heading combination.
    pub fn follow_packet(
        &self,
        board: BoardId,
        entry: Direction,
        heading: Direction,
    ) -> Option<(Direction, BoardId)> {
        let exit = crate::packet_exit_side(entry, heading)?;
        Some((exit.opposite(), self.follow_wire(board, exit)))
    }
}

/// Reduce an axial coordinate to the board occupying it on the torus.
fn canonical_board(coord: HexCoord, width: u32, height: u32) -> BoardId {
    let width = width as i64;
    let height = height as i64;
    for (z, offset) in TRIAD_OFFSETS.iter().enumerate() {
        let q = coord.q - offset.q;
        let r = coord.r - offset.r;
        // The triad basis (2,1)/(1,2) has determinant 3; (q, r) belongs to
        // this coset exactly when the solved triad index is integral.
        if (2 * q - r).rem_euclid(3) != 0 {
            continue;
        }
        let tx = ((2 * q - r) / 3).rem_euclid(width);
        let ty = ((2 * r - q) / 3).rem_euclid(height);
        return BoardId(((ty * width + tx) as usize) * BOARDS_PER_TRIAD + z);
    }
    // The three triad cosets partition the plane, so one always matches.
    unreachable!("coordinate {coord} matched no triad coset")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_dimensions() {
        let err = Torus::new(0, 3).unwrap_err();
        assert_eq!(
            err,
            Error::EmptyTorus {
                width: 0,
                height: 3
            }
        );
        assert!(Torus::new(3, 0).is_err());
    }

    #[test]
    fn every_board_has_six_distinct_neighbours() {
        let torus = Torus::new(2, 3).unwrap();
        for board in torus.boards() {
            let mut seen: Vec<_> = Direction::ALL
                .iter()
                .map(|&d| torus.follow_wire(board, d))
                .collect();
            seen.sort();
            seen.dedup();
            assert_eq!(seen.len(), 6, "board {board:?} has duplicate neighbours");
        }
    }

    #[test]
    fn wires_are_symmetric() {
        let torus = Torus::new(3, 2).unwrap();
        for board in torus.boards() {
            for d in Direction::ALL {
                let there = torus.follow_wire(board, d);
                assert_eq!(torus.follow_wire(there, d.opposite()), board);
            }
        }
    }

    #[test]
    fn board_at_inverts_hex_coord() {
        let torus = Torus::new(2, 2).unwrap();
        for board in torus.boards() {
            assert_eq!(torus.board_at(torus.hex_coord(board)), board);
        }
    }

    #[test]
    fn wraparound_reduces_far_coordinates() {
        let torus = Torus::new(2, 2).unwrap();
        // The torus lattice is spanned by (4, 2) and (2, 4).
        let origin = torus.board_at(HexCoord::ORIGIN);
        assert_eq!(torus.board_at(HexCoord::new(4, 2)), origin);
        assert_eq!(torus.board_at(HexCoord::new(2, 4)), origin);
        assert_eq!(torus.board_at(HexCoord::new(-6, -6)), origin);
    }

    #[test]
    fn smallest_torus_is_fully_wired() {
        let torus = Torus::new(1, 1).unwrap();
        assert_eq!(torus.board_count(), 3);
        for board in torus.boards() {
            for d in Direction::ALL {
                // With three boards everything is adjacent to everything,
                // including itself through the wraparound.
                let n = torus.follow_wire(board, d);
                assert!(n.0 < 3);
            }
        }
    }
}
