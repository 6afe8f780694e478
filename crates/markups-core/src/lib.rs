//! Core abstractions for markups-rs.
//!
//! This crate provides the fundamental types used throughout markups-rs:
//! - [`AngleGeometryCalculator`] for angle measurement geometry
//! - [`MarkupsNode`] and [`DisplayNode`] for markup data and style
//! - [`Representation3D`] trait for markups drawn in a 3-D view
//! - [`RepresentationRegistry`] mapping markup kinds to representations
//! - Configuration [`Options`] and printf-style [`LabelFormat`]

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]

pub mod angle;
pub mod display;
pub mod error;
pub mod label_format;
pub mod markup;
pub mod options;
pub mod pick;
pub mod registry;
pub mod render;
pub mod representation;
pub mod view;

pub use angle::{
    passes_stability_gate, project_to_display_anchor, AngleGeometryCalculator, AngleInput, AngleOutcome,
    AngleResult,
};
pub use display::{ComponentType, DisplayNode};
pub use error::{MarkupsError, Result};
pub use label_format::LabelFormat;
pub use markup::{ControlPoint, Markup, MarkupsNode, ANGLE_MARKUP_KIND};
pub use options::{CoincidentTopologyParameters, Options};
pub use pick::InteractionHit;
pub use registry::{RepresentationFactory, RepresentationRegistry};
pub use render::{CoincidentOffset, DrawItem, RenderContext, RenderPass};
pub use representation::Representation3D;
pub use view::{ViewContext, ViewTransform};

// Re-export glam types for convenience
pub use glam::{DMat4, DVec2, DVec3, DVec4, IVec2};
