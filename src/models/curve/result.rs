//! The built curve and the queries rendering and gameplay use.

use super::constants::{MAX_COORDINATE, MAX_PATH_SAMPLES};
use super::degenerate::prepare_sections;
use super::error::CurveError;
use super::evaluator::Section;
use super::point::{AnchorPoint, BoundingBox};
use super::reconcile::reconcile_length;
use super::resample::resample;
use super::slider::SliderSpec;
use super::tracer::trace_sections;
use crate::models::settings::CurveSettings;
use serde::{Deserialize, Serialize};

/// Equal-distance samples of a slider path reconciled to its nominal length.
///
/// Immutable once built; safe to share between threads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveResult {
    equal_distance_points: Vec<AnchorPoint>,
    length: f64,
    bounding_box: BoundingBox,
}

impl CurveResult {
    /// Runs the whole pipeline for one slider.
    ///
    /// Fails on bad input only: an unusable or oversized nominal length,
    /// out-of-range or missing anchors, or invalid settings. Geometric
    /// irregularities are corrected on the way.
    pub fn build(spec: &SliderSpec, settings: &CurveSettings) -> Result<Self, CurveError> {
        settings.validate()?;

        let nominal_length = spec.nominal_length;
        if !nominal_length.is_finite() || nominal_length <= 0.0 {
            return Err(CurveError::InvalidNominalLength(nominal_length));
        }
        if nominal_length / settings.trace_spacing >= MAX_PATH_SAMPLES as f64 {
            return Err(CurveError::PathTooLong {
                length: nominal_length,
                spacing: settings.trace_spacing,
            });
        }
        let out_of_range = spec
            .sections
            .iter()
            .flat_map(|s| &s.control_points)
            .find(|p| !p.is_finite() || p.abs().max_element() > MAX_COORDINATE);
        if let Some(p) = out_of_range {
            return Err(CurveError::CoordinateOutOfRange { x: p.x, y: p.y });
        }

        let mut sections = prepare_sections(&spec.sections);
        if sections.is_empty() {
            let origin = spec
                .sections
                .iter()
                .find_map(|s| s.first_point())
                .ok_or(CurveError::NoAnchors)?;
            log::debug!("CURVE: no usable section, using a zero-length path at {:?}", origin);
            sections.push(Section::Linear {
                start: origin,
                end: origin,
            });
        }

        // Anything traced past one step beyond the nominal length would be cut anyway.
        let stop_after = nominal_length + settings.trace_spacing;
        let mut trace = trace_sections(&sections, settings, stop_after);
        let traced_length = trace.length();
        reconcile_length(&mut trace.points, nominal_length, settings.trace_spacing);

        let resampled = resample(&trace.points, settings.trace_spacing)?;
        let mut bounding_box = resampled.bounds;

        // Sampled points can cut across the outermost part of an arc.
        for (section, span) in sections.iter().zip(&trace.spans) {
            let Some(arc) = section.as_arc() else {
                continue;
            };
            for (t, point) in arc.cardinal_extremes() {
                if span.start_distance + t * arc.length() <= nominal_length {
                    bounding_box.include(point);
                }
            }
        }

        log::trace!(
            "CURVE: traced {:.3} -> nominal {:.3}, {} points",
            traced_length,
            nominal_length,
            resampled.points.len()
        );

        Ok(Self {
            equal_distance_points: resampled.points,
            length: nominal_length,
            bounding_box,
        })
    }

    /// Point at completion `c` in `[0, 1]`, interpolated between the bracketing samples.
    ///
    /// `c` must already be mapped through the repeat reflection
    /// (see [`SliderSpec::completion_at`]); values outside the range are clamped.
    pub fn position_at_completion(&self, completion: f64) -> AnchorPoint {
        let points = &self.equal_distance_points;
        let c = if completion.is_nan() { 0.0 } else { completion };
        if c <= 0.0 {
            return points[0];
        }
        if c >= 1.0 {
            return points[points.len() - 1];
        }

        let (index, fraction) = self.bracket(c);
        points[index].lerp(points[index + 1], fraction)
    }

    /// Unit direction of travel at completion `c`, `None` on a zero-length path.
    pub fn direction_at_completion(&self, completion: f64) -> Option<AnchorPoint> {
        let c = if completion.is_nan() { 0.0 } else { completion.clamp(0.0, 1.0) };
        let (index, _) = self.bracket(c);
        let points = &self.equal_distance_points;
        (points[index + 1] - points[index]).try_normalize()
    }

    fn bracket(&self, c: f64) -> (usize, f64) {
        let last_segment = self.equal_distance_points.len() - 2;
        let scaled = c * (last_segment + 1) as f64;
        let index = (scaled.floor() as usize).min(last_segment);
        (index, scaled - index as f64)
    }

    pub fn start_point(&self) -> AnchorPoint {
        self.equal_distance_points[0]
    }

    pub fn end_point(&self) -> AnchorPoint {
        self.equal_distance_points[self.equal_distance_points.len() - 1]
    }

    /// Reconciled length, always equal to the slider's nominal length.
    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn bounding_box(&self) -> BoundingBox {
        self.bounding_box
    }

    pub fn equal_distance_points(&self) -> &[AnchorPoint] {
        &self.equal_distance_points
    }
}
