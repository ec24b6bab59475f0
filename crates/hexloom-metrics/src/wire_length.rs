//! Physical cable lengths and their distribution.

use hexloom_layout::{CabinetSystem, Placements};
use hexloom_topology::{BoardId, Direction};
use serde::Serialize;

/// Straight-line distance between the two sockets of one wire.
///
/// Measured socket to socket, not slot to slot: each end adds the configured
/// offset of the socket it plugs into.
pub fn wire_length(
    placements: &Placements,
    system: &CabinetSystem,
    board: BoardId,
    direction: Direction,
) -> f64 {
    let neighbour = placements.torus().follow_wire(board, direction);
    let source = *placements.physical().coord(board) + system.wire_offset(direction);
    let target =
        *placements.physical().coord(neighbour) + system.wire_offset(direction.opposite());
    (target - source).length()
}

/// Lengths of every wire leaving every board in one direction.
pub fn direction_lengths(
    placements: &Placements,
    system: &CabinetSystem,
    direction: Direction,
) -> Vec<f64> {
    placements
        .torus()
        .boards()
        .map(|board| wire_length(placements, system, board, direction))
        .collect()
}

/// One histogram bucket, counting lengths in the half-open span `(start, end]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

/// Bucket lengths into `bins` equal spans of the observed range.
///
/// The first bin stretches down to zero so the open lower bound cannot drop
/// the shortest wires, and the last bin ends exactly at the maximum. When
/// every length is identical a single full bin is returned; no lengths or
/// zero bins yields no buckets.
pub fn length_histogram(lengths: &[f64], bins: u32) -> Vec<HistogramBin> {
    if lengths.is_empty() || bins == 0 {
        return Vec::new();
    }
    let min = lengths.iter().copied().fold(f64::INFINITY, f64::min);
    let max = lengths.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if min == max {
        return vec![HistogramBin {
            start: 0.0,
            end: max,
            count: lengths.len(),
        }];
    }

    let width = (max - min) / bins as f64;
    (0..bins)
        .map(|i| {
            let start = if i == 0 { 0.0 } else { min + i as f64 * width };
            let end = if i == bins - 1 {
                max
            } else {
                min + (i + 1) as f64 * width
            };
            let count = lengths.iter().filter(|&&l| l > start && l <= end).count();
            HistogramBin { start, end, count }
        })
        .collect()
}

/// One length histogram per principal direction.
pub fn direction_histograms(
    placements: &Placements,
    system: &CabinetSystem,
    bins: u32,
) -> Vec<(Direction, Vec<HistogramBin>)> {
    Direction::PRINCIPAL
        .into_iter()
        .map(|direction| {
            let lengths = direction_lengths(placements, system, direction);
            (direction, length_histogram(&lengths, bins))
        })
        .collect()
}
