//! Hexloom Torus Topology
//!
//! Board-level model of a hexagonal toroidal machine: a closed grid of
//! boards, three per hexagonal cell ("triad"), where every board has exactly
//! six wired neighbours and wraparound adjacency on both axes.
//!
//! # Mathematical Foundation
//!
//! Boards live on the axial integer lattice with unit steps East `(1, 0)`,
//! North `(0, 1)` and NorthEast `(1, 1)`. A `width x height` machine is the
//! quotient of that lattice by the triad lattice spanned by
//! `width * (2, 1)` and `height * (1, 2)`; the three boards of triad
//! `(tx, ty)` sit at `base`, `base + North` and `base + NorthEast` with
//! `base = (2*tx + ty, tx + 2*ty)`. These three offsets are distinct modulo
//! the lattice, so the boards partition the plane and every unit step from a
//! board lands on a board.
//!
//! # Wires and Packets
//!
//! [`Torus::follow_wire`] walks the physical cabling graph. Packets do not
//! follow single wires: the router inside each board re-emits a through-going
//! packet on a side given by a fixed substitution table over the six
//! directions (see [`packet_exit_side`]), so a packet heading North
//! alternates between North and West wires at board granularity.
//! [`wiring_loop`] and [`packet_loop`] trace both kinds of cycle.

mod direction;
mod hex;
mod routing;
mod torus;

pub use direction::{Direction, DirectionMap};
pub use hex::HexCoord;
pub use routing::{
    packet_exit_side, packet_loop, packet_loop_chips, wiring_loop, CHIPS_PER_BOARD_CROSSED,
};
pub use torus::{BoardId, Error, Result, Torus};

/// Boards in one hexagonal cell of the topology.
pub const BOARDS_PER_TRIAD: usize = 3;

/// Wired connections per board (invariant: always 6, one per direction).
pub const WIRES_PER_BOARD: usize = 6;
