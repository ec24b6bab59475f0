//! Hexloom Layout Pipeline
//!
//! Turns the logical board torus into a physical installation plan through a
//! chain of pure coordinate relabellings:
//!
//! ```text
//! hex -> cartesian -> rectangle -> compressed -> folded -> cabinets -> physical
//! ```
//!
//! Every stage consumes a whole board-to-coordinate [`Placement`] and
//! produces a new one; board identity and wire adjacency are never touched.
//! Each stage is a bijection between the board set and its coordinate
//! codomain, so a board is never lost and a position never reused.
//!
//! The chain is driven by [`pipeline::run`] from one immutable [`Config`];
//! invalid configurations (fold counts that do not divide the grid, cabinet
//! capacity that does not match the board count, zero sizes) are rejected
//! before any stage output is produced.

pub mod cabinet;
pub mod config;
mod coordinates;
mod error;
pub mod pipeline;
mod placement;
pub mod transforms;

pub use cabinet::{CabinetSpec, CabinetSystem, RackSpec, SlotSpec};
pub use config::{CompressAxis, Config, MachineConfig, ReportConfig};
pub use coordinates::{CabinetCoord, CabinetDelta, GridCoord, Vec3};
pub use error::{Error, Result};
pub use pipeline::Placements;
pub use placement::Placement;
