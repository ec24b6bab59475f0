//! The ordered cable-run list an installer works through.

use std::collections::BTreeMap;

use hexloom_layout::{CabinetCoord, CabinetSystem, Placements};
use hexloom_topology::Direction;
use serde::Serialize;

use crate::classification::WireScope;
use crate::wire_length::wire_length;

/// One end of a cable: the installed position and the socket it plugs into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct WireEnd {
    pub position: CabinetCoord,
    pub socket: Direction,
}

/// One cable to install. Ends are ordered so `source <= target`, which makes
/// the run independent of which end the traversal happened to reach first.
#[derive(Debug, Clone, Serialize)]
pub struct WireRun {
    pub source: WireEnd,
    pub target: WireEnd,
    /// Socket-to-socket distance in metres.
    pub length: f64,
}

/// Cable runs confined to one rack.
#[derive(Debug, Clone, Serialize)]
pub struct RackWiring {
    pub cabinet: u32,
    pub rack: u32,
    pub runs: Vec<WireRun>,
}

/// Cable runs between racks of one cabinet.
#[derive(Debug, Clone, Serialize)]
pub struct CabinetWiring {
    pub cabinet: u32,
    pub runs: Vec<WireRun>,
}

/// Every cable in the machine, grouped the way installers work: rack by
/// rack, then the rack-to-rack runs cabinet by cabinet, then the trunk runs
/// between cabinets. Deterministically ordered throughout.
#[derive(Debug, Clone, Serialize)]
pub struct WiringList {
    pub within_rack: Vec<RackWiring>,
    pub within_cabinet: Vec<CabinetWiring>,
    pub between_cabinets: Vec<WireRun>,
}

impl WiringList {
    /// Cables listed in total.
    pub fn len(&self) -> usize {
        self.within_rack.iter().map(|r| r.runs.len()).sum::<usize>()
            + self
                .within_cabinet
                .iter()
                .map(|c| c.runs.len())
                .sum::<usize>()
            + self.between_cabinets.len()
    }

    /// True when the machine has no cables at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Assemble the full wiring list for an installed machine.
pub fn build_wiring_list(placements: &Placements, system: &CabinetSystem) -> WiringList {
    let mut within_rack: BTreeMap<(u32, u32), Vec<WireRun>> = BTreeMap::new();
    let mut within_cabinet: BTreeMap<u32, Vec<WireRun>> = BTreeMap::new();
    let mut between_cabinets = Vec::new();

    for (board, &here) in placements.cabinets().iter() {
        for direction in Direction::PRINCIPAL {
            let neighbour = placements.torus().follow_wire(board, direction);
            let there = *placements.cabinets().coord(neighbour);
            let mut source = WireEnd {
                position: here,
                socket: direction,
            };
            let mut target = WireEnd {
                position: there,
                socket: direction.opposite(),
            };
            if target < source {
                std::mem::swap(&mut source, &mut target);
            }
            let run = WireRun {
                source,
                target,
                length: wire_length(placements, system, board, direction),
            };
            match WireScope::of(here, there) {
                WireScope::WithinRack => within_rack
                    .entry((here.cabinet, here.rack))
                    .or_default()
                    .push(run),
                WireScope::BetweenRacks => {
                    within_cabinet.entry(here.cabinet).or_default().push(run)
                }
                WireScope::BetweenCabinets => between_cabinets.push(run),
            }
        }
    }

    let sorted = |mut runs: Vec<WireRun>| {
        runs.sort_by_key(|run| (run.source, run.target));
        runs
    };
    WiringList {
        within_rack: within_rack
            .into_iter()
            .map(|((cabinet, rack), runs)| RackWiring {
                cabinet,
                rack,
                runs: sorted(runs),
            })
            .collect(),
        within_cabinet: within_cabinet
            .into_iter()
            .map(|(cabinet, runs)| CabinetWiring {
                cabinet,
                runs: sorted(runs),
            })
            .collect(),
        between_cabinets: sorted(between_cabinets),
    }
}
