//! Chart adapter: turns chart data into [`SliderSpec`](crate::models::curve::SliderSpec)s.
//!
//! The curve engine never reads chart text; everything format-specific lives here.

pub mod beatmap;
pub mod curve_string;

pub use beatmap::{
    ChartSlider, load_sliders, slider_from_rosu, sliders_from_beatmap, sliders_from_bytes,
};
pub use curve_string::{expand_linear, hint_from_letter, parse_curve_string};
