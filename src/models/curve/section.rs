//! Splitting raw anchor lists into typed sections.
//!
//! A chart encodes segment boundaries by repeating an anchor: `a b b c`
//! describes the two sections `a b` and `b c`.

use super::point::AnchorPoint;
use serde::{Deserialize, Serialize};

/// Path type declared by the chart for a whole slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PathTypeHint {
    Linear,
    PerfectCircle,
    Bezier,
}

/// Curve family of one section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SectionKind {
    /// Exactly 2 control points.
    Linear,
    /// 2 or more control points.
    Bezier,
    /// Exactly 3 control points.
    CircularArc,
}

/// A contiguous sub-curve between two anchor-duplication boundaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawSection {
    pub kind: SectionKind,
    pub control_points: Vec<AnchorPoint>,
}

impl RawSection {
    pub fn linear(start: AnchorPoint, end: AnchorPoint) -> Self {
        Self {
            kind: SectionKind::Linear,
            control_points: vec![start, end],
        }
    }

    pub fn first_point(&self) -> Option<AnchorPoint> {
        self.control_points.first().copied()
    }

    pub fn last_point(&self) -> Option<AnchorPoint> {
        self.control_points.last().copied()
    }

    fn classify(points: Vec<AnchorPoint>, hint: PathTypeHint) -> Self {
        let kind = match points.len() {
            3 if hint == PathTypeHint::PerfectCircle => SectionKind::CircularArc,
            2 => SectionKind::Linear,
            _ => SectionKind::Bezier,
        };
        Self {
            kind,
            control_points: points,
        }
    }
}

/// Splits `anchors` into order-preserving sections.
///
/// Buffers shorter than 2 points cannot form a segment and are dropped.
pub fn sectionize(anchors: &[AnchorPoint], hint: PathTypeHint) -> Vec<RawSection> {
    let mut sections = Vec::new();
    let Some(&first) = anchors.first() else {
        return sections;
    };

    let last_index = anchors.len() - 1;
    let mut buffer = vec![first];

    for (i, &anchor) in anchors.iter().enumerate().skip(1) {
        let repeats_previous = anchor == anchors[i - 1];

        if repeats_previous && i == last_index {
            // Trailing duplicate: the section already ends here.
            break;
        }

        if repeats_previous {
            let finished = std::mem::replace(&mut buffer, vec![anchor]);
            close_buffer(finished, hint, &mut sections);
        } else {
            buffer.push(anchor);
        }
    }

    close_buffer(buffer, hint, &mut sections);
    sections
}

fn close_buffer(buffer: Vec<AnchorPoint>, hint: PathTypeHint, sections: &mut Vec<RawSection>) {
    if buffer.len() < 2 {
        log::debug!("CURVE: dropping malformed section with {} point(s)", buffer.len());
        return;
    }
    sections.push(RawSection::classify(buffer, hint));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(raw: &[(f64, f64)]) -> Vec<AnchorPoint> {
        raw.iter().map(|&p| AnchorPoint::from(p)).collect()
    }

    #[test]
    fn test_two_points_is_linear() {
        let sections = sectionize(&pts(&[(0.0, 0.0), (100.0, 0.0)]), PathTypeHint::Bezier);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].kind, SectionKind::Linear);
    }

    #[test]
    fn test_three_points_perfect_circle_is_arc() {
        let anchors = pts(&[(0.0, 0.0), (10.0, 10.0), (20.0, 0.0)]);
        let sections = sectionize(&anchors, PathTypeHint::PerfectCircle);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].kind, SectionKind::CircularArc);

        let sections = sectionize(&anchors, PathTypeHint::Bezier);
        assert_eq!(sections[0].kind, SectionKind::Bezier);
    }

    #[test]
    fn test_perfect_circle_with_four_points_degrades_to_bezier() {
        let anchors = pts(&[(0.0, 0.0), (10.0, 10.0), (20.0, 0.0), (30.0, 5.0)]);
        let sections = sectionize(&anchors, PathTypeHint::PerfectCircle);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].kind, SectionKind::Bezier);
    }

    #[test]
    fn test_duplicate_anchor_splits_sections() {
        let anchors = pts(&[(0.0, 0.0), (10.0, 10.0), (20.0, 0.0), (20.0, 0.0), (40.0, 0.0)]);
        let sections = sectionize(&anchors, PathTypeHint::Bezier);
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].kind, SectionKind::Bezier);
        assert_eq!(sections[0].control_points.len(), 3);
        assert_eq!(sections[1].kind, SectionKind::Linear);
        assert_eq!(sections[1].control_points, pts(&[(20.0, 0.0), (40.0, 0.0)]));
    }

    #[test]
    fn test_trailing_duplicate_is_absorbed() {
        let anchors = pts(&[(0.0, 0.0), (50.0, 0.0), (50.0, 0.0)]);
        let sections = sectionize(&anchors, PathTypeHint::Bezier);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].kind, SectionKind::Linear);
        assert_eq!(sections[0].control_points.len(), 2);
    }

    #[test]
    fn test_leading_duplicate_drops_single_point_buffer() {
        let anchors = pts(&[(0.0, 0.0), (0.0, 0.0), (30.0, 0.0)]);
        let sections = sectionize(&anchors, PathTypeHint::Bezier);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].control_points, pts(&[(0.0, 0.0), (30.0, 0.0)]));
    }

    #[test]
    fn test_identical_anchors_produce_no_section() {
        let anchors = pts(&[(5.0, 5.0), (5.0, 5.0)]);
        assert!(sectionize(&anchors, PathTypeHint::Linear).is_empty());
        assert!(sectionize(&[], PathTypeHint::Linear).is_empty());
    }
}
