//! Sorting wires by how far their cables have to travel.

use hexloom_layout::{CabinetCoord, CabinetDelta, Placements};
use hexloom_topology::Direction;
use serde::Serialize;

/// The reach of one cable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum WireScope {
    /// Both ends in the same rack.
    WithinRack,
    /// Different racks of the same cabinet.
    BetweenRacks,
    /// Different cabinets.
    BetweenCabinets,
}

impl WireScope {
    /// All three scopes, nearest first.
    pub const ALL: [WireScope; 3] = [
        WireScope::WithinRack,
        WireScope::BetweenRacks,
        WireScope::BetweenCabinets,
    ];

    /// Scope of a wire between two installed positions.
    pub fn of(a: CabinetCoord, b: CabinetCoord) -> Self {
        Self::of_delta(a - b)
    }

    /// Scope of a relative wire shape.
    pub fn of_delta(delta: CabinetDelta) -> Self {
        if delta.cabinets != 0 {
            WireScope::BetweenCabinets
        } else if delta.racks != 0 {
            WireScope::BetweenRacks
        } else {
            WireScope::WithinRack
        }
    }
}

/// Wire tallies split by scope.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WireCounts {
    pub within_rack: usize,
    pub between_racks: usize,
    pub between_cabinets: usize,
}

impl WireCounts {
    fn record(&mut self, scope: WireScope) {
        match scope {
            WireScope::WithinRack => self.within_rack += 1,
            WireScope::BetweenRacks => self.between_racks += 1,
            WireScope::BetweenCabinets => self.between_cabinets += 1,
        }
    }

    /// Wires counted in total.
    pub fn total(&self) -> usize {
        self.within_rack + self.between_racks + self.between_cabinets
    }
}

/// Count every installed wire once, under its principal direction.
///
/// Walking only the principal set counts each physical cable exactly once;
/// its appearance from the far end is the opposite direction and is skipped.
pub fn classify_wires(placements: &Placements) -> Vec<(Direction, WireCounts)> {
    Direction::PRINCIPAL
        .into_iter()
        .map(|direction| {
            let mut counts = WireCounts::default();
            for (board, &here) in placements.cabinets().iter() {
                let neighbour = placements.torus().follow_wire(board, direction);
                let there = *placements.cabinets().coord(neighbour);
                counts.record(WireScope::of(here, there));
            }
            (direction, counts)
        })
        .collect()
}

/// Sum a set of per-direction tallies.
pub fn total_counts(per_direction: &[(Direction, WireCounts)]) -> WireCounts {
    let mut totals = WireCounts::default();
    for (_, counts) in per_direction {
        totals.within_rack += counts.within_rack;
        totals.between_racks += counts.between_racks;
        totals.between_cabinets += counts.between_cabinets;
    }
    totals
}
