//! Ordered board-to-coordinate mappings.

use std::collections::HashSet;
use std::hash::Hash;

use hexloom_topology::BoardId;
use serde::Serialize;

/// One coordinate per board, indexed by [`BoardId`] in canonical order.
///
/// The output of every pipeline stage. Stages never mutate their input: each
/// produces a fresh placement, so intermediate stages stay available to
/// renderers after the pipeline has finished.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Placement<C> {
    coords: Vec<C>,
}

impl<C> Placement<C> {
    /// Wrap a coordinate-per-board vector.
    pub fn new(coords: Vec<C>) -> Self {
        Self { coords }
    }

    /// Number of placed boards.
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    /// True when no boards are placed.
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Coordinate of one board.
    pub fn coord(&self, board: BoardId) -> &C {
        &self.coords[board.0]
    }

    /// Iterate `(board, coordinate)` pairs in board order.
    pub fn iter(&self) -> impl Iterator<Item = (BoardId, &C)> {
        self.coords.iter().enumerate().map(|(i, c)| (BoardId(i), c))
    }

    /// Relabel every board's coordinate, preserving board identity.
    pub fn map<D>(&self, mut f: impl FnMut(BoardId, &C) -> D) -> Placement<D> {
        Placement::new(
            self.coords
                .iter()
                .enumerate()
                .map(|(i, c)| f(BoardId(i), c))
                .collect(),
        )
    }
}

impl<C: Eq + Hash> Placement<C> {
    /// True when no coordinate is used twice.
    ///
    /// Together with the one-coordinate-per-board representation this is the
    /// full bijectivity invariant every stage must preserve.
    pub fn is_bijective(&self) -> bool {
        let mut seen = HashSet::with_capacity(self.coords.len());
        self.coords.iter().all(|c| seen.insert(c))
    }

    /// Find the board placed at a coordinate.
    pub fn board_at(&self, coord: &C) -> Option<BoardId> {
        self.coords
            .iter()
            .position(|c| c == coord)
            .map(BoardId)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_preserves_board_order() {
        let placement = Placement::new(vec![10, 20, 30]);
        let doubled = placement.map(|_, v| v * 2);
        assert_eq!(*doubled.coord(BoardId(1)), 40);
        let pairs: Vec<_> = doubled.iter().collect();
        assert_eq!(pairs[2], (BoardId(2), &60));
    }

    #[test]
    fn bijectivity_detects_reuse() {
        assert!(Placement::new(vec![1, 2, 3]).is_bijective());
        assert!(!Placement::new(vec![1, 2, 2]).is_bijective());
        assert!(Placement::<i32>::new(vec![]).is_bijective());
    }

    #[test]
    fn board_lookup() {
        let placement = Placement::new(vec!["a", "b"]);
        assert_eq!(placement.board_at(&"b"), Some(BoardId(1)));
        assert_eq!(placement.board_at(&"c"), None);
    }
}
