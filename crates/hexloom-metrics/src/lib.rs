//! Wiring statistics over a finished layout.
//!
//! Everything in this crate is a pure function of a completed
//! [`hexloom_layout::Placements`] bundle and its configuration: scope counts
//! per direction, physical cable-length histograms, cable pattern grouping,
//! the ordered wiring list an installer follows, and the assembled report.

pub mod classification;
pub mod patterns;
pub mod report;
pub mod wire_length;
pub mod wiring_list;

pub use classification::{classify_wires, total_counts, WireCounts, WireScope};
pub use patterns::{
    assign_pattern_ids, group_patterns, rack_pattern_count, relative_wires, scope_patterns,
    PatternAssignment, PatternSummary,
};
pub use report::{build_report, DirectionStats, LoopSummary, Report};
pub use wire_length::{
    direction_histograms, direction_lengths, length_histogram, wire_length, HistogramBin,
};
pub use wiring_list::{
    build_wiring_list, CabinetWiring, RackWiring, WireEnd, WireRun, WiringList,
};

#[cfg(test)]
pub(crate) mod testing {
    use hexloom_layout::{
        pipeline, CabinetSpec, CabinetSystem, CompressAxis, Config, MachineConfig, Placements,
        RackSpec, ReportConfig, SlotSpec, Vec3,
    };
    use hexloom_topology::DirectionMap;

    /// A 2x2-triad machine in a single 12-slot rack.
    pub fn small_config() -> Config {
        Config {
            machine: MachineConfig {
                width: 2,
                height: 2,
                compress: CompressAxis::Rows,
                folds_x: 2,
                folds_y: 1,
            },
            cabinets: CabinetSystem {
                cabinet: CabinetSpec {
                    rack: RackSpec {
                        slot: SlotSpec {
                            dimensions: Vec3::new(0.015, 0.233, 0.240),
                            wire_offsets: DirectionMap::from_fn(|_| Vec3::ZERO),
                        },
                        dimensions: Vec3::new(0.480, 0.266, 0.250),
                        num_slots: 12,
                        slot_spacing: 0.001,
                        slot_offset: Vec3::new(0.010, 0.010, 0.0),
                    },
                    dimensions: Vec3::new(0.600, 1.822, 0.250),
                    num_racks: 1,
                    rack_spacing: 0.089,
                    rack_offset: Vec3::new(0.060, 0.122, 0.0),
                },
                num_cabinets: 1,
                cabinet_spacing: 0.150,
            },
            report: ReportConfig {
                histogram_bins: 5,
                socket_names: DirectionMap::from_fn(|d| d.to_string()),
            },
        }
    }

    pub fn small_placements() -> Placements {
        pipeline::run(&small_config()).unwrap()
    }

    /// The same 12 boards split across two 6-slot racks, so rack-crossing
    /// wires exist.
    pub fn two_rack_config() -> Config {
        let mut config = small_config();
        config.machine.compress = CompressAxis::Columns;
        config.machine.folds_x = 1;
        config.cabinets.cabinet.num_racks = 2;
        config.cabinets.cabinet.rack.num_slots = 6;
        config
    }

    pub fn two_rack_placements() -> Placements {
        pipeline::run(&two_rack_config()).unwrap()
    }
}
