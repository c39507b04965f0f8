//! Numeric defaults shared by the curve engine.

/// Default distance (chart units) between trace points and equal-distance points.
pub const DEFAULT_TRACE_SPACING: f64 = 2.0;

/// Default accepted error on a single trace step.
pub const DEFAULT_TOLERANCE: f64 = 0.01;

/// Default coarse step in `t` used while probing a section.
pub const DEFAULT_PROBE_STEP: f64 = 0.01;

/// Default cap on a single bisection.
pub const DEFAULT_MAX_BISECT_ITERATIONS: u32 = 64;

/// Default cap on probe/emit steps within one section.
pub const DEFAULT_MAX_TRACE_STEPS: u32 = 100_000;

/// Lengths closer than this are considered equal by the reconciler.
pub const LENGTH_EPSILON: f64 = 1e-9;

/// Determinant magnitude under which three points are treated as collinear.
pub const COLLINEAR_EPSILON: f64 = 1e-6;

/// Most equal-distance samples a single curve may hold.
pub const MAX_PATH_SAMPLES: usize = 1_000_000;

/// Largest accepted absolute control point coordinate.
pub const MAX_COORDINATE: f64 = 1e7;
