//! The immutable configuration driving one pipeline evaluation.
//!
//! Assembled once (typically from a JSON file) and threaded explicitly
//! through every stage; nothing reads ambient state.

use hexloom_topology::DirectionMap;
use serde::{Deserialize, Serialize};

use crate::cabinet::CabinetSystem;

/// Which axis the wobble-removing compression halves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CompressAxis {
    /// Merge row pairs: `(x, y) -> (x, y/2)`.
    Rows,
    /// Merge column pairs: `(x, y) -> (x/2, y)`.
    Columns,
}

/// Logical shape of the machine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MachineConfig {
    /// Torus width in triads.
    pub width: u32,
    /// Torus height in triads.
    pub height: u32,
    /// Compression orientation.
    pub compress: CompressAxis,
    /// Accordion folds along the x axis.
    pub folds_x: u32,
    /// Accordion folds along the y axis.
    pub folds_y: u32,
}

/// Presentation parameters for the derived metrics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Number of equal-width bins in each wire-length histogram.
    pub histogram_bins: u32,
    /// Label printed for each socket in cable-run instructions.
    pub socket_names: DirectionMap<String>,
}

/// Everything one pipeline run needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub machine: MachineConfig,
    pub cabinets: CabinetSystem,
    pub report: ReportConfig,
}
