//! Physical description of the cabinet system.
//!
//! Dimensions and spacings are in metres, in a right-handed frame: x runs
//! along the cabinet row, y upward, z into the cabinet. Slots stand
//! side-by-side along x inside a rack, racks stack along y inside a cabinet,
//! cabinets line up along x.

use hexloom_topology::{Direction, DirectionMap};
use serde::{Deserialize, Serialize};

use crate::coordinates::{CabinetCoord, Vec3};

/// One board slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotSpec {
    /// Width, height and depth of the slot.
    pub dimensions: Vec3,
    /// Where each socket sits on the board face, relative to the slot origin.
    pub wire_offsets: DirectionMap<Vec3>,
}

/// A rack holding a row of slots.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RackSpec {
    pub slot: SlotSpec,
    pub dimensions: Vec3,
    pub num_slots: u32,
    /// Gap between adjacent slots.
    pub slot_spacing: f64,
    /// Position of slot 0 relative to the rack origin.
    pub slot_offset: Vec3,
}

/// A cabinet holding a stack of racks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CabinetSpec {
    pub rack: RackSpec,
    pub dimensions: Vec3,
    pub num_racks: u32,
    /// Vertical gap between adjacent racks.
    pub rack_spacing: f64,
    /// Position of rack 0 relative to the cabinet origin.
    pub rack_offset: Vec3,
}

/// The whole installation: a row of identical cabinets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CabinetSystem {
    pub cabinet: CabinetSpec,
    pub num_cabinets: u32,
    /// Gap between adjacent cabinets.
    pub cabinet_spacing: f64,
}

impl CabinetSystem {
    /// Physical position of a slot origin.
    ///
    /// Pure arithmetic over the configured dimensions; adjacency plays no
    /// part here.
    pub fn position(&self, coord: CabinetCoord) -> Vec3 {
        let cabinet = &self.cabinet;
        let rack = &cabinet.rack;

        let cabinet_x =
            coord.cabinet as f64 * (cabinet.dimensions.x + self.cabinet_spacing);
        let rack_y = coord.rack as f64 * (rack.dimensions.y + cabinet.rack_spacing);
        let slot_x = coord.slot as f64 * (rack.slot.dimensions.x + rack.slot_spacing);

        Vec3::new(cabinet_x, 0.0, 0.0)
            + cabinet.rack_offset
            + Vec3::new(0.0, rack_y, 0.0)
            + rack.slot_offset
            + Vec3::new(slot_x, 0.0, 0.0)
    }

    /// Where the socket for a direction sits, relative to its slot origin.
    pub fn wire_offset(&self, direction: Direction) -> Vec3 {
        *self.cabinet.rack.slot.wire_offsets.get(direction)
    }

    /// Slots the system can hold in total.
    pub fn capacity(&self) -> usize {
        self.num_cabinets as usize
            * self.cabinet.num_racks as usize
            * self.cabinet.rack.num_slots as usize
    }
}
