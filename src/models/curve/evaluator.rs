//! Point evaluation for prepared sections.

use super::arc::CircularArc;
use super::point::AnchorPoint;

/// A section ready for evaluation.
///
/// Circular arcs carry their fitted circle; arcs that cannot be fitted never
/// reach this type (see [`super::degenerate`]).
#[derive(Debug, Clone, PartialEq)]
pub enum Section {
    Linear { start: AnchorPoint, end: AnchorPoint },
    Bezier(Vec<AnchorPoint>),
    Arc {
        arc: CircularArc,
        control_points: [AnchorPoint; 3],
    },
}

impl Section {
    /// Point on the section for `t` in `[0, 1]`.
    pub fn evaluate(&self, t: f64) -> AnchorPoint {
        match self {
            Section::Linear { start, end } => start.lerp(*end, t),
            Section::Bezier(points) => bezier_point(points, t),
            Section::Arc { arc, .. } => arc.point_at(t),
        }
    }

    /// First point, `None` only for a Bézier without control points.
    pub fn start(&self) -> Option<AnchorPoint> {
        match self {
            Section::Linear { start, .. } => Some(*start),
            Section::Bezier(points) => points.first().copied(),
            Section::Arc { control_points, .. } => Some(control_points[0]),
        }
    }

    /// Exact end point. For arcs this is the authored control point, not `evaluate(1.0)`.
    pub fn end(&self) -> Option<AnchorPoint> {
        match self {
            Section::Linear { end, .. } => Some(*end),
            Section::Bezier(points) => points.last().copied(),
            Section::Arc { control_points, .. } => Some(control_points[2]),
        }
    }

    pub fn as_arc(&self) -> Option<&CircularArc> {
        match self {
            Section::Arc { arc, .. } => Some(arc),
            _ => None,
        }
    }
}

/// Evaluates a Bézier curve of any degree.
///
/// Degrees up to 3 use the closed-form polynomials; higher degrees run De
/// Casteljau, which stays stable where the Bernstein sum loses precision.
pub fn bezier_point(points: &[AnchorPoint], t: f64) -> AnchorPoint {
    match points {
        [] => AnchorPoint::default(),
        [p0] => *p0,
        [p0, p1] => p0.lerp(*p1, t),
        [p0, p1, p2] => {
            let mt = 1.0 - t;
            *p0 * (mt * mt) + *p1 * (2.0 * mt * t) + *p2 * (t * t)
        }
        [p0, p1, p2, p3] => {
            let mt = 1.0 - t;
            let mt2 = mt * mt;
            let t2 = t * t;
            *p0 * (mt2 * mt) + *p1 * (3.0 * mt2 * t) + *p2 * (3.0 * mt * t2) + *p3 * (t2 * t)
        }
        _ => de_casteljau(points, t),
    }
}

fn de_casteljau(points: &[AnchorPoint], t: f64) -> AnchorPoint {
    let mut work = points.to_vec();
    for level in (1..work.len()).rev() {
        for i in 0..level {
            work[i] = work[i].lerp(work[i + 1], t);
        }
    }
    work[0]
}
