//! Conversion of `rosu-map` sliders into curve engine input.

use super::curve_string::expand_linear;
use crate::models::curve::{AnchorPoint, CurveError, PathTypeHint, SliderSpec};
use rosu_map::Beatmap;
use rosu_map::section::hit_objects::{HitObjectKind, HitObjectSlider, SplineType};
use std::path::Path;

/// A slider of a loaded beatmap, ready for curve building.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSlider {
    /// Index of the slider among all hit objects of the map.
    pub object_index: usize,
    /// Start time in milliseconds.
    pub start_time: f64,
    pub spec: SliderSpec,
}

pub fn hint_from_spline(kind: SplineType) -> PathTypeHint {
    match kind {
        SplineType::Linear => PathTypeHint::Linear,
        SplineType::PerfectCurve => PathTypeHint::PerfectCircle,
        _ => PathTypeHint::Bezier,
    }
}

/// Converts a parsed slider into a [`SliderSpec`].
///
/// `rosu-map` stores control points relative to the slider head and marks
/// each new segment with a path type on its first point. Those boundaries
/// are turned back into repeated anchors, which is what the sectionizer reads.
/// A missing expected distance becomes a zero nominal length, which the
/// engine reports as an error for this slider only.
pub fn slider_from_rosu(slider: &HitObjectSlider) -> Result<SliderSpec, CurveError> {
    let head = AnchorPoint::new(slider.pos.x as f64, slider.pos.y as f64);
    let control_points = slider.path.control_points();

    let hint = control_points
        .first()
        .and_then(|point| point.path_type.as_ref())
        .map(|path_type| hint_from_spline(path_type.kind))
        .unwrap_or(PathTypeHint::Bezier);

    let last = control_points.len().saturating_sub(1);
    let mut anchors = Vec::with_capacity(control_points.len() + 4);
    for (i, point) in control_points.iter().enumerate() {
        let anchor = head + AnchorPoint::new(point.pos.x as f64, point.pos.y as f64);
        anchors.push(anchor);
        if i > 0 && i < last && point.path_type.is_some() {
            anchors.push(anchor);
        }
    }
    if anchors.is_empty() {
        anchors.push(head);
    }

    let anchors = expand_linear(hint, anchors);
    let nominal_length = slider.path.expected_dist().unwrap_or(0.0);
    let repeat_count = u32::try_from(slider.repeat_count + 1).unwrap_or(1);

    SliderSpec::from_anchors(&anchors, hint, repeat_count, nominal_length)
}

/// Collects every slider of `map`.
pub fn sliders_from_beatmap(map: &Beatmap) -> Vec<ChartSlider> {
    let mut sliders = Vec::new();

    for (object_index, hit_object) in map.hit_objects.iter().enumerate() {
        let HitObjectKind::Slider(slider) = &hit_object.kind else {
            continue;
        };

        match slider_from_rosu(slider) {
            Ok(spec) => sliders.push(ChartSlider {
                object_index,
                start_time: hit_object.start_time,
                spec,
            }),
            Err(e) => log::warn!(
                "CHART: skipping slider #{} at {}ms: {}",
                object_index,
                hit_object.start_time,
                e
            ),
        }
    }

    sliders
}

/// Loads a beatmap file and returns its sliders.
pub fn load_sliders(path: &Path) -> Result<Vec<ChartSlider>, String> {
    let map = Beatmap::from_path(path)
        .map_err(|e| format!("Failed to load beatmap {:?}: {}", path, e))?;
    let sliders = sliders_from_beatmap(&map);
    log::info!("CHART: {} slider(s) in {:?}", sliders.len(), path);
    Ok(sliders)
}

/// Parses beatmap content already in memory and returns its sliders.
pub fn sliders_from_bytes(bytes: &[u8]) -> Result<Vec<ChartSlider>, String> {
    let map = Beatmap::from_bytes(bytes).map_err(|e| format!("Failed to parse beatmap: {}", e))?;
    Ok(sliders_from_beatmap(&map))
}
