//! Markup representations for markups-rs.
//!
//! This crate provides the concrete [`Representation3D`](markups_core::Representation3D)
//! implementations:
//! - [`MarkupsRepresentation3D`], control point glyphs, labels and picking
//!   shared by every markup kind
//! - [`AngleRepresentation3D`], the angle measurement (rays, arc and label)

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]

pub mod angle;
pub mod base;

pub use angle::AngleRepresentation3D;
pub use base::MarkupsRepresentation3D;
