//! Walks prepared sections and emits points at an approximately fixed spacing.

use super::evaluator::Section;
use super::point::AnchorPoint;
use crate::models::settings::CurveSettings;

/// A sample along the traced path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TracePoint {
    pub position: AnchorPoint,
    /// Polyline distance from the first trace point.
    pub distance: f64,
}

/// Traced distance covered by one section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionSpan {
    pub start_distance: f64,
    pub end_distance: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Trace {
    pub points: Vec<TracePoint>,
    /// One span per section, in section order.
    pub spans: Vec<SectionSpan>,
}

impl Trace {
    pub fn length(&self) -> f64 {
        self.points.last().map(|p| p.distance).unwrap_or(0.0)
    }
}

/// Traces all sections end to end.
///
/// The distance accumulates across sections. Every section's exact end
/// point is emitted, even when closer than one spacing step, so sections
/// join without gaps. Tracing stops early once the distance exceeds
/// `stop_after`; pass `f64::INFINITY` to walk the whole path.
pub fn trace_sections(sections: &[Section], settings: &CurveSettings, stop_after: f64) -> Trace {
    let mut points: Vec<TracePoint> = Vec::new();
    let mut spans = Vec::with_capacity(sections.len());

    for section in sections {
        let (Some(start), Some(end)) = (section.start(), section.end()) else {
            log::debug!("CURVE: skipping a section without control points");
            let at = points.last().map(|p| p.distance).unwrap_or(0.0);
            spans.push(SectionSpan {
                start_distance: at,
                end_distance: at,
            });
            continue;
        };
        match points.last().copied() {
            None => points.push(TracePoint {
                position: start,
                distance: 0.0,
            }),
            Some(last) if last.position != start => {
                // Sections come from one anchor list, so this only bridges rounding gaps.
                let distance = last.distance + last.position.distance(start);
                points.push(TracePoint {
                    position: start,
                    distance,
                });
            }
            Some(_) => {}
        }

        let start_distance = points.last().map(|p| p.distance).unwrap_or(0.0);
        let finished = trace_section(section, end, settings, stop_after, &mut points);
        let end_distance = points.last().map(|p| p.distance).unwrap_or(start_distance);

        spans.push(SectionSpan {
            start_distance,
            end_distance,
        });

        if !finished {
            break;
        }
    }

    Trace { points, spans }
}

/// Returns `false` when tracing stopped at `stop_after` before the section end.
fn trace_section(
    section: &Section,
    end: AnchorPoint,
    settings: &CurveSettings,
    stop_after: f64,
    points: &mut Vec<TracePoint>,
) -> bool {
    let spacing = settings.trace_spacing;
    let step = settings.probe_step;

    let Some(&origin) = points.last() else {
        return true;
    };
    let mut p1 = origin.position;
    let mut distance = origin.distance;
    let mut left_t = 0.0;
    let mut steps = 0u32;

    while left_t < 1.0 {
        let mut right_t = (left_t + step).min(1.0);
        let mut probe = section.evaluate(right_t);

        // Coarse probing until the spacing is exceeded or the section ends.
        while right_t < 1.0 && p1.distance(probe) < spacing && steps < settings.max_trace_steps {
            right_t = (right_t + step).min(1.0);
            probe = section.evaluate(right_t);
            steps += 1;
        }

        if steps >= settings.max_trace_steps {
            log::warn!(
                "CURVE: step cap ({}) reached at t={:.4}, jumping to section end",
                settings.max_trace_steps,
                left_t
            );
            break;
        }
        steps += 1;

        if right_t >= 1.0 && p1.distance(end) < spacing {
            break;
        }

        let (t, position, d) = bisect(section, p1, left_t, right_t, settings);
        distance += d;
        points.push(TracePoint { position, distance });
        if distance > stop_after {
            return false;
        }
        p1 = position;
        left_t = t;
    }

    let remaining = p1.distance(end);
    if remaining > 0.0 {
        points.push(TracePoint {
            position: end,
            distance: distance + remaining,
        });
    }
    distance + remaining <= stop_after
}

/// Searches `[lo, hi]` for the parameter whose point lies `trace_spacing` from `from`.
///
/// Falls back to the closest candidate seen when the iteration cap is reached.
fn bisect(
    section: &Section,
    from: AnchorPoint,
    mut lo: f64,
    mut hi: f64,
    settings: &CurveSettings,
) -> (f64, AnchorPoint, f64) {
    let spacing = settings.trace_spacing;
    let mut best: Option<(f64, AnchorPoint, f64)> = None;

    for _ in 0..settings.max_bisect_iterations {
        let mid = 0.5 * (lo + hi);
        let point = section.evaluate(mid);
        let d = from.distance(point);
        let error = (d - spacing).abs();

        if error <= settings.tolerance {
            return (mid, point, d);
        }

        let improves = best.is_none_or(|(_, _, best_d)| error < (best_d - spacing).abs());
        if improves {
            best = Some((mid, point, d));
        }

        if d < spacing {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    let (t, point, d) = best.unwrap_or_else(|| {
        let point = section.evaluate(hi);
        (hi, point, from.distance(point))
    });
    log::trace!(
        "CURVE: bisection did not converge, accepting t={:.6} (off by {:.4})",
        t,
        (d - spacing).abs()
    );
    (t, point, d)
}
