//! Turns raw sections into evaluable ones, correcting arcs that have no circle.

use super::arc::CircularArc;
use super::evaluator::Section;
use super::section::{RawSection, SectionKind};

/// Prepares every section for evaluation.
///
/// A `CircularArc` whose first and last points coincide becomes two linear
/// sections through the middle point; a collinear one becomes a single
/// linear section between its endpoints. Sections with fewer than 2 points
/// are dropped.
pub fn prepare_sections(raw: &[RawSection]) -> Vec<Section> {
    let mut prepared = Vec::with_capacity(raw.len());

    for section in raw {
        let points = &section.control_points;
        if points.len() < 2 {
            log::debug!("CURVE: skipping section with {} point(s)", points.len());
            continue;
        }

        match section.kind {
            SectionKind::Linear => prepared.push(Section::Linear {
                start: points[0],
                end: points[points.len() - 1],
            }),
            SectionKind::Bezier => prepared.push(Section::Bezier(points.clone())),
            SectionKind::CircularArc if points.len() == 3 => {
                let [p0, p1, p2] = [points[0], points[1], points[2]];

                if p0 == p2 {
                    log::debug!("CURVE: closed arc at {:?}, splitting into lines", p0);
                    prepared.push(Section::Linear { start: p0, end: p1 });
                    prepared.push(Section::Linear { start: p1, end: p2 });
                    continue;
                }

                match CircularArc::from_points(p0, p1, p2) {
                    Some(arc) => prepared.push(Section::Arc {
                        arc,
                        control_points: [p0, p1, p2],
                    }),
                    None => {
                        log::debug!("CURVE: collinear arc from {:?} to {:?}, using a line", p0, p2);
                        prepared.push(Section::Linear { start: p0, end: p2 });
                    }
                }
            }
            SectionKind::CircularArc => prepared.push(Section::Bezier(points.clone())),
        }
    }

    prepared
}
