//! Matches a traced path to the chart-declared nominal length.

use super::constants::LENGTH_EPSILON;
use super::point::AnchorPoint;
use super::tracer::TracePoint;

/// Direction used to extend a path whose trace has no extent at all.
const FALLBACK_DIRECTION: AnchorPoint = AnchorPoint::new(1.0, 0.0);

/// Truncates or extends `points` so the polyline ends exactly at `nominal_length`.
///
/// A longer trace is cut at the interpolated point lying at `nominal_length`.
/// A shorter one continues straight along its final segment, with extra
/// points every `spacing` and a last point exactly at the nominal length.
pub fn reconcile_length(points: &mut Vec<TracePoint>, nominal_length: f64, spacing: f64) {
    let Some(last) = points.last().copied() else {
        return;
    };
    let traced = last.distance;

    if (traced - nominal_length).abs() <= LENGTH_EPSILON {
        if let Some(end) = points.last_mut() {
            end.distance = nominal_length;
        }
        return;
    }

    if traced > nominal_length {
        truncate(points, nominal_length);
    } else {
        extend(points, nominal_length, spacing);
    }
}

fn truncate(points: &mut Vec<TracePoint>, nominal_length: f64) {
    // First point at or beyond the cut; index 0 sits at distance 0 < nominal_length.
    let beyond = points.partition_point(|p| p.distance < nominal_length);
    if beyond == 0 || beyond >= points.len() {
        return;
    }

    let before = points[beyond - 1];
    let after = points[beyond];
    let span = after.distance - before.distance;
    let fraction = if span > 0.0 {
        (nominal_length - before.distance) / span
    } else {
        1.0
    };

    points.truncate(beyond);
    points.push(TracePoint {
        position: before.position.lerp(after.position, fraction),
        distance: nominal_length,
    });
}

fn extend(points: &mut Vec<TracePoint>, nominal_length: f64, spacing: f64) {
    let Some(last) = points.last().copied() else {
        return;
    };

    let direction = points
        .iter()
        .rev()
        .find(|p| p.position != last.position)
        .and_then(|p| (last.position - p.position).try_normalize())
        .unwrap_or_else(|| {
            log::debug!("CURVE: path has no extent, extending along +x");
            FALLBACK_DIRECTION
        });

    let deficit = nominal_length - last.distance;
    let mut covered = spacing;
    while covered < deficit {
        points.push(TracePoint {
            position: last.position + direction * covered,
            distance: last.distance + covered,
        });
        covered += spacing;
    }

    points.push(TracePoint {
        position: last.position + direction * deficit,
        distance: nominal_length,
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn straight(length: f64, spacing: f64) -> Vec<TracePoint> {
        let mut points = Vec::new();
        let mut d = 0.0;
        while d < length {
            points.push(TracePoint {
                position: AnchorPoint::new(d, 0.0),
                distance: d,
            });
            d += spacing;
        }
        points.push(TracePoint {
            position: AnchorPoint::new(length, 0.0),
            distance: length,
        });
        points
    }

    #[test]
    fn test_truncates_at_nominal_length() {
        let mut points = straight(100.0, 2.0);
        reconcile_length(&mut points, 61.0, 2.0);

        let last = points.last().unwrap();
        assert_eq!(last.distance, 61.0);
        assert!((last.position.x - 61.0).abs() < 1e-9);
        assert!(points.windows(2).all(|w| w[0].distance < w[1].distance));
    }

    #[test]
    fn test_extends_along_last_segment() {
        let mut points = vec![
            TracePoint {
                position: AnchorPoint::new(0.0, 0.0),
                distance: 0.0,
            },
            TracePoint {
                position: AnchorPoint::new(0.0, 10.0),
                distance: 10.0,
            },
        ];
        reconcile_length(&mut points, 15.0, 2.0);

        let last = points.last().unwrap();
        assert_eq!(last.distance, 15.0);
        assert!((last.position.y - 15.0).abs() < 1e-9);
        assert_eq!(last.position.x, 0.0);
        // 12, 14 and the final 15.
        assert_eq!(points.len(), 5);
    }

    #[test]
    fn test_equal_length_is_unchanged() {
        let mut points = straight(50.0, 2.0);
        let before = points.clone();
        reconcile_length(&mut points, 50.0, 2.0);
        assert_eq!(points, before);
    }

    #[test]
    fn test_zero_extent_extends_along_x() {
        let mut points = vec![TracePoint {
            position: AnchorPoint::new(7.0, 7.0),
            distance: 0.0,
        }];
        reconcile_length(&mut points, 5.0, 2.0);
        assert_eq!(points.last().unwrap().position, AnchorPoint::new(12.0, 7.0));
        assert_eq!(points.last().unwrap().distance, 5.0);
    }
}
