//! markups-rs: Rust-native 3D markup representations for medical image viewers.
//!
//! A markup is a set of user-placed control points (an angle, a line, a curve).
//! Each markup kind has a representation that turns the control points into
//! renderable props for a 3-D view and answers picking queries against them.
//!
//! # Quick Start
//!
//! ```no_run
//! use markups::*;
//!
//! fn main() -> Result<()> {
//!     init();
//!
//!     let registry = default_registry()?;
//!     let mut representation = registry.create(ANGLE_MARKUP_KIND)?;
//!
//!     let markup = Markup::angle(
//!         DVec3::new(10.0, 0.0, 0.0),
//!         DVec3::ZERO,
//!         DVec3::new(10.0, 10.0, 0.0),
//!     );
//!     let display = DisplayNode::new();
//!     let mut viewport = Viewport::new("View1", Camera::new(800.0, 600.0));
//!
//!     representation.update_from_model(&markup, Some(&display), &viewport);
//!     representation.render(&mut viewport);
//!
//!     for (pass, item) in viewport.take_submissions() {
//!         println!("{pass:?}: {item:?}");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - [`AngleGeometryCalculator`] measures the angle and places the arc and label
//! - [`Representation3D`] is implemented per markup kind, e.g. [`AngleRepresentation3D`]
//! - [`RepresentationRegistry`] creates representations by markup kind
//! - [`Viewport`] records the draw items a representation submits

use std::path::Path;

pub use markups_core::{
    angle::{
        passes_stability_gate, project_to_display_anchor, AngleGeometryCalculator, AngleInput, AngleOutcome,
        AngleResult, ARC_PLACEMENT_RATIO, DEFAULT_ARC_RESOLUTION, DEGENERATE_TOLERANCE, LABEL_PLACEMENT_RATIO,
    },
    error::{MarkupsError, Result},
    label_format::{LabelFormat, DEFAULT_LABEL_FORMAT},
    CoincidentOffset, CoincidentTopologyParameters, ComponentType, ControlPoint, DisplayNode, DrawItem,
    InteractionHit, Markup, MarkupsNode, Options, RenderContext, RenderPass, Representation3D,
    RepresentationFactory, RepresentationRegistry, ViewContext, ViewTransform, ANGLE_MARKUP_KIND,
};
pub use markups_core::{DMat4, DVec2, DVec3, DVec4, IVec2};

pub use markups_render::{
    Actor, ArcSource, Camera, ControlPointType, ControlPointsPipeline, PolyData, ProjectionMode, Property,
    TextActor, TextProperty, TubeFilter, Viewport,
};

pub use markups_widgets::{AngleRepresentation3D, MarkupsRepresentation3D};

/// Initializes logging.
///
/// Safe to call more than once; later calls leave the installed logger alone.
pub fn init() {
    let _ = env_logger::try_init();
    log::info!("markups-rs initialized");
}

/// Creates a registry with every built-in representation and default options.
///
/// # Errors
///
/// Only fails if a built-in markup kind is registered twice.
pub fn default_registry() -> Result<RepresentationRegistry> {
    default_registry_with_options(Options::default())
}

/// Creates a registry with every built-in representation.
///
/// # Errors
///
/// Only fails if a built-in markup kind is registered twice.
pub fn default_registry_with_options(options: Options) -> Result<RepresentationRegistry> {
    let mut registry = RepresentationRegistry::with_options(options);
    registry.register(ANGLE_MARKUP_KIND, |options| Box::new(AngleRepresentation3D::new(options)))?;
    Ok(registry)
}

/// Creates a registry with every built-in representation, reading options from a JSON file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid options JSON.
pub fn load_registry(options_path: impl AsRef<Path>) -> Result<RepresentationRegistry> {
    default_registry_with_options(Options::load(options_path)?)
}
