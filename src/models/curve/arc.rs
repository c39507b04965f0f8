//! Circular arcs through three points.

use super::constants::COLLINEAR_EPSILON;
use super::point::AnchorPoint;
use std::f64::consts::{FRAC_PI_2, TAU};

/// A circular arc starting at `start_angle` and sweeping `sweep` radians.
///
/// Positive sweep turns towards increasing `atan2` angles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircularArc {
    pub center: AnchorPoint,
    pub radius: f64,
    pub start_angle: f64,
    pub sweep: f64,
}

impl CircularArc {
    /// Fits the arc that starts at `start`, passes through `through` and ends at `end`.
    ///
    /// Returns `None` when the points are collinear (including repeated
    /// points), since no finite circle exists.
    pub fn from_points(start: AnchorPoint, through: AnchorPoint, end: AnchorPoint) -> Option<Self> {
        let center = circumcenter(start, through, end)?;
        let radius = start.distance(center);
        if !radius.is_finite() || radius <= 0.0 {
            return None;
        }

        let a0 = angle_of(start - center);
        let a1 = angle_of(through - center);
        let a2 = angle_of(end - center);

        // Go whichever way reaches `end` from `start` while passing `through`.
        let to_end = (a2 - a0).rem_euclid(TAU);
        let to_through = (a1 - a0).rem_euclid(TAU);
        let sweep = if to_through <= to_end {
            to_end
        } else {
            to_end - TAU
        };

        Some(Self {
            center,
            radius,
            start_angle: a0,
            sweep,
        })
    }

    pub fn point_at(&self, t: f64) -> AnchorPoint {
        let angle = self.start_angle + t * self.sweep;
        AnchorPoint::new(
            self.center.x + self.radius * angle.cos(),
            self.center.y + self.radius * angle.sin(),
        )
    }

    pub fn length(&self) -> f64 {
        self.radius * self.sweep.abs()
    }

    /// Points at multiples of 90° inside the swept range, paired with their `t`.
    ///
    /// These are the extremes a min/max over sampled points can miss.
    pub fn cardinal_extremes(&self) -> Vec<(f64, AnchorPoint)> {
        let mut extremes = Vec::new();
        if self.sweep == 0.0 {
            return extremes;
        }

        let (lo, hi) = if self.sweep > 0.0 {
            (self.start_angle, self.start_angle + self.sweep)
        } else {
            (self.start_angle + self.sweep, self.start_angle)
        };

        let mut k = (lo / FRAC_PI_2).ceil();
        while k * FRAC_PI_2 <= hi {
            let angle = k * FRAC_PI_2;
            let t = (angle - self.start_angle) / self.sweep;
            extremes.push((t, self.point_at(t)));
            k += 1.0;
        }
        extremes
    }
}

fn angle_of(v: AnchorPoint) -> f64 {
    v.y.atan2(v.x)
}

/// Center of the circle through `a`, `b` and `c`.
///
/// Uses the determinant form of the perpendicular-bisector intersection, so
/// axis-aligned chords need no slope special-casing.
pub fn circumcenter(a: AnchorPoint, b: AnchorPoint, c: AnchorPoint) -> Option<AnchorPoint> {
    let d = 2.0 * (a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y));

    // Scale-aware collinearity check.
    let scale = (b - a).length() * (c - a).length();
    if d.abs() <= COLLINEAR_EPSILON * scale.max(1.0) {
        return None;
    }

    let a2 = a.length_squared();
    let b2 = b.length_squared();
    let c2 = c.length_squared();

    let center = AnchorPoint::new(
        (a2 * (b.y - c.y) + b2 * (c.y - a.y) + c2 * (a.y - b.y)) / d,
        (a2 * (c.x - b.x) + b2 * (a.x - c.x) + c2 * (b.x - a.x)) / d,
    );

    center.is_finite().then_some(center)
}
