//! Error types for hexloom-layout.

use thiserror::Error;

/// Result type for layout operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Fatal configuration errors.
///
/// Every variant is detected before any pipeline output is produced; there
/// are no partial-failure semantics past validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The underlying torus could not be built.
    #[error(transparent)]
    Topology(#[from] hexloom_topology::Error),

    /// A count that must be at least one was zero.
    #[error("{what} must be positive")]
    NonPositiveCount { what: &'static str },

    /// A physical dimension that must be positive was zero or negative.
    #[error("{what} dimensions must be positive lengths in metres")]
    NonPositiveDimension { what: &'static str },

    /// A gap between physical units was negative.
    #[error("{what} must not be negative")]
    NegativeSpacing { what: &'static str },

    /// Compressing the chosen axis does not yield a full rectangle.
    #[error("compressing {axis} needs an even {axis} extent, got {extent}")]
    UnevenCompression { axis: &'static str, extent: i64 },

    /// A fold count does not evenly divide the grid.
    #[error("{folds} folds do not evenly divide the {axis} extent of {extent} boards")]
    UnevenFold {
        axis: &'static str,
        folds: u32,
        extent: i64,
    },

    /// The folded grid cannot be cut evenly into cabinets and racks.
    #[error("grid of {extent} columns/rows does not divide into {parts} {what}")]
    UnevenCabinetCut {
        what: &'static str,
        parts: u32,
        extent: i64,
    },

    /// The machine does not exactly fill the cabinets.
    #[error(
        "{boards} boards do not fill {cabinets} cabinets x {racks} racks x {slots} slots exactly"
    )]
    CabinetCapacityMismatch {
        boards: usize,
        cabinets: u32,
        racks: u32,
        slots: u32,
    },
}
