//! Errors that abort construction of a single slider curve.

use super::constants::{MAX_COORDINATE, MAX_PATH_SAMPLES};

/// Error type for curve construction failures.
///
/// Malformed sections, degenerate arcs and unconverged trace steps are
/// recovered inside the engine and never show up here.
#[derive(Debug, Clone, PartialEq)]
pub enum CurveError {
    /// The chart-declared length is zero, negative or not finite.
    InvalidNominalLength(f64),
    /// The slider has no anchor points at all.
    NoAnchors,
    /// The engine configuration is unusable.
    InvalidSettings(String),
    /// The nominal length needs more equal-distance samples than allowed.
    PathTooLong { length: f64, spacing: f64 },
    /// A control point lies outside the supported coordinate range.
    CoordinateOutOfRange { x: f64, y: f64 },
    /// Building panicked on a worker thread.
    BuildPanicked(String),
}

impl std::fmt::Display for CurveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CurveError::InvalidNominalLength(length) => {
                write!(f, "Invalid nominal length: {} (must be finite and > 0)", length)
            }
            CurveError::NoAnchors => write!(f, "Slider has no anchor points"),
            CurveError::InvalidSettings(msg) => write!(f, "Invalid curve settings: {}", msg),
            CurveError::PathTooLong { length, spacing } => write!(
                f,
                "Path of length {} needs more than {} samples at spacing {}",
                length, MAX_PATH_SAMPLES, spacing
            ),
            CurveError::CoordinateOutOfRange { x, y } => write!(
                f,
                "Control point ({}, {}) is outside +/-{}",
                x, y, MAX_COORDINATE
            ),
            CurveError::BuildPanicked(msg) => write!(f, "Curve build panicked: {}", msg),
        }
    }
}

impl std::error::Error for CurveError {}
