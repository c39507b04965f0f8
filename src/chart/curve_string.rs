//! Packed slider curve strings (`B|x:y|x:y|...`).

use crate::models::curve::{AnchorPoint, PathTypeHint};

/// Maps a curve type letter to a path type hint.
///
/// Catmull paths are approximated as Bézier; unknown letters fall back to Bézier.
pub fn hint_from_letter(letter: &str) -> PathTypeHint {
    match letter.trim() {
        "L" => PathTypeHint::Linear,
        "P" => PathTypeHint::PerfectCircle,
        "B" | "C" => PathTypeHint::Bezier,
        other => {
            log::warn!("CHART: unknown curve type {:?}, using Bezier", other);
            PathTypeHint::Bezier
        }
    }
}

/// Parses a packed curve string. `head` is the slider position and becomes the first anchor.
///
/// Points that do not parse are skipped with a warning.
pub fn parse_curve_string(head: AnchorPoint, curve: &str) -> (PathTypeHint, Vec<AnchorPoint>) {
    let mut parts = curve.split('|');
    let hint = parts.next().map(hint_from_letter).unwrap_or(PathTypeHint::Bezier);

    let mut anchors = vec![head];
    for part in parts {
        match parse_point(part) {
            Some(point) => anchors.push(point),
            None => log::warn!("CHART: skipping malformed curve point {:?}", part),
        }
    }

    (hint, expand_linear(hint, anchors))
}

fn parse_point(part: &str) -> Option<AnchorPoint> {
    let (x, y) = part.split_once(':')?;
    let x: f64 = x.trim().parse().ok()?;
    let y: f64 = y.trim().parse().ok()?;
    let point = AnchorPoint::new(x, y);
    point.is_finite().then_some(point)
}

/// Duplicates interior anchors of a linear path so every leg becomes its own section.
///
/// Without this, a linear path with more than two anchors would be read as a
/// single Bézier section.
pub fn expand_linear(hint: PathTypeHint, anchors: Vec<AnchorPoint>) -> Vec<AnchorPoint> {
    if hint != PathTypeHint::Linear || anchors.len() <= 2 {
        return anchors;
    }

    let last = anchors.len() - 1;
    let mut expanded = Vec::with_capacity(anchors.len() * 2);
    for (i, &anchor) in anchors.iter().enumerate() {
        expanded.push(anchor);
        let interior = i != 0 && i != last;
        if interior && anchors[i - 1] != anchor && anchors[i + 1] != anchor {
            expanded.push(anchor);
        }
    }
    expanded
}
