//! Slider input data and repeat mapping.

use super::error::CurveError;
use super::point::AnchorPoint;
use super::result::CurveResult;
use super::section::{PathTypeHint, RawSection, sectionize};
use crate::models::settings::CurveSettings;
use serde::{Deserialize, Serialize};

/// Everything the curve engine needs to know about one slider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderSpec {
    /// Ordered, produced once by [`sectionize`].
    pub sections: Vec<RawSection>,
    /// Number of times the ball travels the path (1 = no repeat).
    pub repeat_count: u32,
    /// Chart-declared path length. Authoritative over the traced geometry.
    pub nominal_length: f64,
}

impl SliderSpec {
    pub fn new(sections: Vec<RawSection>, repeat_count: u32, nominal_length: f64) -> Self {
        Self {
            sections,
            repeat_count: repeat_count.max(1),
            nominal_length,
        }
    }

    /// Sectionizes `anchors` and wraps the result.
    ///
    /// Anchors that collapse into no section at all (e.g. all identical)
    /// yield a single zero-length linear section at the first anchor.
    pub fn from_anchors(
        anchors: &[AnchorPoint],
        hint: PathTypeHint,
        repeat_count: u32,
        nominal_length: f64,
    ) -> Result<Self, CurveError> {
        let first = *anchors.first().ok_or(CurveError::NoAnchors)?;

        let mut sections = sectionize(anchors, hint);
        if sections.is_empty() {
            sections.push(RawSection::linear(first, first));
        }

        Ok(Self::new(sections, repeat_count, nominal_length))
    }

    /// Builds the curve for this slider.
    pub fn build_curve(&self, settings: &CurveSettings) -> Result<CurveResult, CurveError> {
        CurveResult::build(self, settings)
    }

    /// Maps progress over the whole slider (all repeats) to a completion along the path.
    ///
    /// Odd spans run backwards. Progress is clamped to `[0, 1]`; at exactly 1
    /// the ball rests on the end for an odd number of spans and on the start otherwise.
    pub fn completion_at(&self, progress: f64) -> f64 {
        let spans = self.repeat_count.max(1);
        let progress = if progress.is_nan() { 0.0 } else { progress.clamp(0.0, 1.0) };

        if progress >= 1.0 {
            return if spans % 2 == 1 { 1.0 } else { 0.0 };
        }

        let scaled = progress * spans as f64;
        let span = scaled.floor();
        let fraction = scaled - span;
        if span as u32 % 2 == 1 { 1.0 - fraction } else { fraction }
    }
}
