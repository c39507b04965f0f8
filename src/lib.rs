//! Slider curve geometry for osu!-style charts.
//!
//! Turns a slider's authored anchors into evenly spaced path samples whose
//! total length matches the chart-declared length, plus the queries the
//! renderer and gameplay clock need.

pub mod chart;
pub mod models;
pub mod system;

pub use models::curve::{
    AnchorPoint, BoundingBox, CurveError, CurveResult, PathTypeHint, SliderSpec,
};
pub use models::settings::CurveSettings;
pub use system::pool::{CurvePool, build_all};
