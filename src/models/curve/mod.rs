//! Slider curve geometry.
//!
//! Pipeline: anchors → [`section::sectionize`] → [`degenerate::prepare_sections`]
//! → [`tracer::trace_sections`] → [`reconcile::reconcile_length`]
//! → [`resample::resample`] → [`CurveResult`].
//!
//! Building a curve is a pure function of a [`SliderSpec`] and the
//! [`CurveSettings`](crate::models::settings::CurveSettings), so many sliders
//! can be built in parallel (see [`crate::system::pool`]).

pub mod arc;
pub mod constants;
pub mod degenerate;
pub mod error;
pub mod evaluator;
pub mod point;
pub mod reconcile;
pub mod resample;
pub mod result;
pub mod section;
pub mod slider;
pub mod tracer;

pub use error::CurveError;
pub use point::{AnchorPoint, BoundingBox};
pub use result::CurveResult;
pub use section::{PathTypeHint, RawSection, SectionKind, sectionize};
pub use slider::SliderSpec;
