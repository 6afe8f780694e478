//! Scene primitives for markups-rs.
//!
//! This crate provides the CPU-side building blocks that markup
//! representations compose: a camera with world-to-display projection,
//! poly data, an arc source, tube parameters, actors and text actors,
//! control point pipelines and a [`Viewport`] that records draw submissions
//! for the host renderer.

#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]

pub mod actor;
pub mod arc_source;
pub mod camera;
pub mod pipeline;
pub mod poly_data;
pub mod tube_filter;
pub mod viewport;

pub use actor::{Actor, Property, TextActor, TextProperty};
pub use arc_source::ArcSource;
pub use camera::{Camera, ProjectionMode};
pub use pipeline::{ControlPointType, ControlPointsPipeline};
pub use poly_data::{bounds_of, union_bounds, PolyData};
pub use tube_filter::TubeFilter;
pub use viewport::Viewport;
