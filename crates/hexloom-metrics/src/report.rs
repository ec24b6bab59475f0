//! The assembled installation report.

use hexloom_layout::{Config, Placements};
use hexloom_topology::{packet_loop, packet_loop_chips, wiring_loop, Direction, HexCoord};
use serde::Serialize;
use tracing::debug;

use crate::classification::{classify_wires, total_counts, WireCounts};
use crate::patterns::{rack_pattern_count, scope_patterns, PatternSummary};
use crate::wire_length::{direction_histograms, HistogramBin};
use crate::wiring_list::{build_wiring_list, WiringList};

/// Loop measurements for one principal direction.
#[derive(Debug, Clone, Serialize)]
pub struct LoopSummary {
    pub direction: Direction,
    /// Boards visited by following the wires on this side until they close.
    pub wiring_boards: usize,
    /// Board hops made by a through-routed packet before its path closes.
    pub packet_hops: usize,
    /// Chips traversed along that packet path.
    pub packet_chips: usize,
}

/// Scope counts and length distribution for one principal direction.
#[derive(Debug, Clone, Serialize)]
pub struct DirectionStats {
    pub direction: Direction,
    /// Socket label used in the printed instructions.
    pub socket: String,
    pub counts: WireCounts,
    pub histogram: Vec<HistogramBin>,
}

/// Everything an installation team needs about one configuration.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub width: u32,
    pub height: u32,
    pub num_boards: usize,
    pub num_cabinets: u32,
    pub loops: Vec<LoopSummary>,
    pub directions: Vec<DirectionStats>,
    pub totals: WireCounts,
    /// Distinct per-rack cable patterns across the whole machine.
    pub num_patterns: usize,
    /// Cable-shape colourings, one per scope family and principal direction.
    pub patterns: Vec<PatternSummary>,
    pub wiring: WiringList,
}

/// Canonical seed boards for the three loop walks.
///
/// One representative per triad position, so the three walks start on three
/// distinct board roles.
const LOOP_SEEDS: [(Direction, HexCoord); 3] = [
    (Direction::North, HexCoord { q: 0, r: 1 }),
    (Direction::East, HexCoord { q: 1, r: 1 }),
    (Direction::SouthWest, HexCoord { q: 0, r: 0 }),
];

/// Derive the full report from a finished layout.
pub fn build_report(placements: &Placements, config: &Config) -> Report {
    let torus = placements.torus();

    let loops = LOOP_SEEDS
        .into_iter()
        .map(|(heading, seed)| {
            let start = torus.board_at(seed);
            let wiring_boards = wiring_loop(torus, start, heading).len();
            // A packet heading `d` always arrives through the opposite side,
            // which the router table accepts for every direction.
            let packet_hops = packet_loop(torus, start, heading.opposite(), heading)
                .map_or(0, |hops| hops.len());
            LoopSummary {
                direction: heading,
                wiring_boards,
                packet_hops,
                packet_chips: packet_loop_chips(packet_hops),
            }
        })
        .collect();

    let per_direction = classify_wires(placements);
    let histograms =
        direction_histograms(placements, &config.cabinets, config.report.histogram_bins);
    let totals = total_counts(&per_direction);
    let directions = per_direction
        .into_iter()
        .zip(histograms)
        .map(|((direction, counts), (_, histogram))| DirectionStats {
            direction,
            socket: config.report.socket_names[direction].clone(),
            counts,
            histogram,
        })
        .collect();

    let num_patterns = rack_pattern_count(placements);
    let patterns = scope_patterns(placements);
    let wiring = build_wiring_list(placements, &config.cabinets);
    debug!(
        wires = wiring.len(),
        patterns = num_patterns,
        "report assembled"
    );

    Report {
        width: config.machine.width,
        height: config.machine.height,
        num_boards: torus.board_count(),
        num_cabinets: config.cabinets.num_cabinets,
        loops,
        directions,
        totals,
        num_patterns,
        patterns,
        wiring,
    }
}
