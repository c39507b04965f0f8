//! Resampling a traced polyline into exactly equidistant points.

use super::constants::MAX_PATH_SAMPLES;
use super::error::CurveError;
use super::point::{AnchorPoint, BoundingBox};
use super::tracer::TracePoint;

/// Equal-distance samples of a polyline plus their bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct Resampled {
    pub points: Vec<AnchorPoint>,
    pub segment_length: f64,
    pub bounds: BoundingBox,
}

/// Resamples `trace` into `floor(L / spacing) + 2` points spaced `L / (floor(L / spacing) + 1)`
/// apart along the polyline, `L` being the distance of the last trace point.
///
/// The first and last points are the trace's own endpoints. Fails when the
/// sample count would exceed [`MAX_PATH_SAMPLES`].
pub fn resample(trace: &[TracePoint], spacing: f64) -> Result<Resampled, CurveError> {
    let (Some(first), Some(last)) = (trace.first(), trace.last()) else {
        let origin = AnchorPoint::default();
        return Ok(Resampled {
            points: vec![origin, origin],
            segment_length: 0.0,
            bounds: BoundingBox::at(origin),
        });
    };

    let length = last.distance;
    let too_long = CurveError::PathTooLong { length, spacing };
    let whole_steps = (length / spacing).floor();
    if !(0.0..MAX_PATH_SAMPLES as f64).contains(&whole_steps) {
        return Err(too_long);
    }
    let segment_count = (whole_steps as usize).checked_add(1).ok_or(too_long)?;
    let segment_length = length / segment_count as f64;

    let mut points = Vec::with_capacity(segment_count + 1);
    let mut bounds = BoundingBox::at(first.position);
    points.push(first.position);

    let mut index = 0;
    for step in 1..segment_count {
        let target = segment_length * step as f64;
        while index + 2 < trace.len() && trace[index + 1].distance < target {
            index += 1;
        }

        let a = trace[index];
        let b = trace[(index + 1).min(trace.len() - 1)];
        let span = b.distance - a.distance;
        let point = if span > 0.0 {
            a.position.lerp(b.position, ((target - a.distance) / span).clamp(0.0, 1.0))
        } else {
            b.position
        };

        bounds.include(point);
        points.push(point);
    }

    bounds.include(last.position);
    points.push(last.position);

    Ok(Resampled {
        points,
        segment_length,
        bounds,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn polyline(raw: &[(f64, f64)]) -> Vec<TracePoint> {
        let mut distance = 0.0;
        let mut previous: Option<AnchorPoint> = None;
        raw.iter()
            .map(|&p| {
                let position = AnchorPoint::from(p);
                if let Some(prev) = previous {
                    distance += prev.distance(position);
                }
                previous = Some(position);
                TracePoint { position, distance }
            })
            .collect()
    }

    #[test]
    fn test_uniform_spacing_covers_full_length() {
        let trace = polyline(&[(0.0, 0.0), (3.0, 0.0), (10.0, 0.0)]);
        let resampled = resample(&trace, 2.0).unwrap();

        // floor(10 / 2) + 1 = 6 segments.
        assert_eq!(resampled.points.len(), 7);
        assert!((resampled.segment_length - 10.0 / 6.0).abs() < 1e-12);
        for pair in resampled.points.windows(2) {
            assert!((pair[0].distance(pair[1]) - resampled.segment_length).abs() < 1e-9);
        }
        assert_eq!(resampled.points[6], AnchorPoint::new(10.0, 0.0));
    }

    #[test]
    fn test_resample_follows_corners() {
        let trace = polyline(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0)]);
        let resampled = resample(&trace, 1.0).unwrap();

        assert_eq!(resampled.points.len(), 10);
        // Every sample lies on one of the two legs.
        assert!(resampled
            .points
            .iter()
            .all(|p| p.y.abs() < 1e-9 || (p.x - 4.0).abs() < 1e-9));
        assert_eq!(resampled.bounds.max_x, 4.0);
        assert_eq!(resampled.bounds.max_y, 4.0);
    }

    #[test]
    fn test_short_trace_keeps_both_endpoints() {
        let trace = polyline(&[(1.0, 1.0), (1.5, 1.0)]);
        let resampled = resample(&trace, 2.0).unwrap();
        assert_eq!(
            resampled.points,
            vec![AnchorPoint::new(1.0, 1.0), AnchorPoint::new(1.5, 1.0)]
        );
    }

    #[test]
    fn test_oversized_trace_is_rejected() {
        let trace = polyline(&[(0.0, 0.0), (1e20, 0.0)]);
        assert_eq!(
            resample(&trace, 2.0),
            Err(CurveError::PathTooLong {
                length: 1e20,
                spacing: 2.0,
            })
        );

        let trace = polyline(&[(0.0, 0.0), (f64::MAX, 0.0)]);
        assert!(resample(&trace, 1e-300).is_err());
    }
}
