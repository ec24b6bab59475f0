//! Drives the transform chain end to end.
//!
//! [`run`] validates the configuration, builds the torus and evaluates every
//! stage once, returning the complete [`Placements`] bundle. All stage
//! outputs are retained because downstream consumers need different ones:
//! diagrams draw the spaced grid, wiring instructions read the cabinet
//! placement, length metrics read the physical one.

use hexloom_topology::{HexCoord, Torus};
use tracing::debug;

use crate::config::{CompressAxis, Config};
use crate::coordinates::{CabinetCoord, GridCoord, Vec3};
use crate::error::{Error, Result};
use crate::placement::Placement;
use crate::transforms;

/// The torus plus every stage's output, in pipeline order.
#[derive(Debug, Clone)]
pub struct Placements {
    torus: Torus,
    hex: Placement<HexCoord>,
    cartesian: Placement<GridCoord>,
    rectangle: Placement<GridCoord>,
    compressed: Placement<GridCoord>,
    spaced: Placement<GridCoord>,
    folded: Placement<GridCoord>,
    cabinets: Placement<CabinetCoord>,
    physical: Placement<Vec3>,
}

impl Placements {
    /// The board graph all placements describe.
    pub fn torus(&self) -> &Torus {
        &self.torus
    }

    /// Canonical axial coordinates.
    pub fn hex(&self) -> &Placement<HexCoord> {
        &self.hex
    }

    /// Skewed Cartesian coordinates, still rhombus-shaped.
    pub fn cartesian(&self) -> &Placement<GridCoord> {
        &self.cartesian
    }

    /// Rectangular coordinates after the seam slide.
    pub fn rectangle(&self) -> &Placement<GridCoord> {
        &self.rectangle
    }

    /// Dense grid after wobble removal.
    pub fn compressed(&self) -> &Placement<GridCoord> {
        &self.compressed
    }

    /// The compressed grid with diagram gaps at fold boundaries.
    pub fn spaced(&self) -> &Placement<GridCoord> {
        &self.spaced
    }

    /// The accordion-folded grid.
    pub fn folded(&self) -> &Placement<GridCoord> {
        &self.folded
    }

    /// Installed cabinet, rack and slot of every board.
    pub fn cabinets(&self) -> &Placement<CabinetCoord> {
        &self.cabinets
    }

    /// Physical slot positions in metres.
    pub fn physical(&self) -> &Placement<Vec3> {
        &self.physical
    }
}

/// Reject configurations the stages cannot place.
///
/// Everything checked here would otherwise surface as a mid-pipeline error;
/// checking up front means `run` either fails before producing anything or
/// completes entirely.
pub fn validate(config: &Config) -> Result<()> {
    let machine = &config.machine;
    let cabinets = &config.cabinets;
    let rack = &cabinets.cabinet.rack;
    let counts: [(&'static str, u32); 8] = [
        ("machine width", machine.width),
        ("machine height", machine.height),
        ("x fold count", machine.folds_x),
        ("y fold count", machine.folds_y),
        ("cabinet count", cabinets.num_cabinets),
        ("rack count", cabinets.cabinet.num_racks),
        ("slot count", rack.num_slots),
        ("histogram bin count", config.report.histogram_bins),
    ];
    for (what, value) in counts {
        if value == 0 {
            return Err(Error::NonPositiveCount { what });
        }
    }

    let dimensions = [
        ("slot", rack.slot.dimensions),
        ("rack", rack.dimensions),
        ("cabinet", cabinets.cabinet.dimensions),
    ];
    for (what, dims) in dimensions {
        if dims.x <= 0.0 || dims.y <= 0.0 || dims.z <= 0.0 {
            return Err(Error::NonPositiveDimension { what });
        }
    }
    let spacings = [
        ("slot spacing", rack.slot_spacing),
        ("rack spacing", cabinets.cabinet.rack_spacing),
        ("cabinet spacing", cabinets.cabinet_spacing),
    ];
    for (what, value) in spacings {
        if value < 0.0 {
            return Err(Error::NegativeSpacing { what });
        }
    }

    // Row compression halves a 3 * height extent, so height must be even.
    if machine.compress == CompressAxis::Rows && machine.height % 2 != 0 {
        return Err(Error::UnevenCompression {
            axis: "y",
            extent: 3 * machine.height as i64,
        });
    }

    let boards = 3 * machine.width as usize * machine.height as usize;
    if boards != config.cabinets.capacity() {
        return Err(Error::CabinetCapacityMismatch {
            boards,
            cabinets: config.cabinets.num_cabinets,
            racks: config.cabinets.cabinet.num_racks,
            slots: config.cabinets.cabinet.rack.num_slots,
        });
    }
    Ok(())
}

/// Evaluate the whole pipeline for one configuration.
pub fn run(config: &Config) -> Result<Placements> {
    validate(config)?;
    let machine = &config.machine;
    let folds = (machine.folds_x, machine.folds_y);

    let torus = Torus::new(machine.width, machine.height)?;
    debug!(
        width = machine.width,
        height = machine.height,
        boards = torus.board_count(),
        "torus built"
    );

    let hex = transforms::hex_placement(&torus);
    let cartesian = transforms::hex_to_cartesian(&hex);
    let rectangle = transforms::rhombus_to_rect(&cartesian, &torus);
    let compressed = transforms::compress(&rectangle, machine.compress);
    let (grid_w, grid_h) = transforms::grid_extent(&compressed);
    debug!(grid_w, grid_h, "grid compressed");

    let spaced = transforms::space_folds(&compressed, folds)?;
    let folded = transforms::fold(&compressed, folds)?;
    let cabinets = transforms::cabinetise(&folded, &config.cabinets)?;
    let physical = transforms::cabinet_to_physical(&cabinets, &config.cabinets);
    debug!(
        cabinets = config.cabinets.num_cabinets,
        racks = config.cabinets.cabinet.num_racks,
        "boards installed"
    );

    Ok(Placements {
        torus,
        hex,
        cartesian,
        rectangle,
        compressed,
        spaced,
        folded,
        cabinets,
        physical,
    })
}
