//! Registry of representation factories keyed by markup kind.

use std::collections::HashMap;

use crate::error::{MarkupsError, Result};
use crate::options::Options;
use crate::representation::Representation3D;

/// Builds a fresh representation from the shared options.
pub type RepresentationFactory = Box<dyn Fn(&Options) -> Box<dyn Representation3D> + Send + Sync>;

/// Registry mapping markup kinds to representation factories.
///
/// Populated once at start-up; views then ask it for a representation per markup.
#[derive(Default)]
pub struct RepresentationRegistry {
    factories: HashMap<String, RepresentationFactory>,
    options: Options,
}

impl RepresentationRegistry {
    /// Creates a new empty registry with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new empty registry with the given options.
    pub fn with_options(options: Options) -> Self {
        Self {
            factories: HashMap::new(),
            options,
        }
    }

    /// Returns the options passed to every factory.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Replaces the options used for representations created from now on.
    pub fn set_options(&mut self, options: Options) {
        self.options = options;
    }

    /// Registers a factory for a markup kind.
    ///
    /// Returns an error if the kind already has a factory.
    pub fn register<F>(&mut self, markup_kind: impl Into<String>, factory: F) -> Result<()>
    where
        F: Fn(&Options) -> Box<dyn Representation3D> + Send + Sync + 'static,
    {
        let markup_kind = markup_kind.into();
        if self.factories.contains_key(&markup_kind) {
            return Err(MarkupsError::RepresentationExists(markup_kind));
        }
        log::debug!("registered representation for markup kind '{markup_kind}'");
        self.factories.insert(markup_kind, Box::new(factory));
        Ok(())
    }

    /// Creates a representation for a markup kind.
    pub fn create(&self, markup_kind: &str) -> Result<Box<dyn Representation3D>> {
        self.factories
            .get(markup_kind)
            .map(|factory| factory(&self.options))
            .ok_or_else(|| MarkupsError::UnknownMarkupKind(markup_kind.to_string()))
    }

    /// Checks if a factory is registered for the markup kind.
    pub fn contains(&self, markup_kind: &str) -> bool {
        self.factories.contains_key(markup_kind)
    }

    /// Removes a factory; returns whether one was registered.
    pub fn unregister(&mut self, markup_kind: &str) -> bool {
        self.factories.remove(markup_kind).is_some()
    }

    /// Returns the registered markup kinds, sorted.
    pub fn markup_kinds(&self) -> Vec<&str> {
        let mut kinds: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        kinds.sort_unstable();
        kinds
    }

    /// Returns the number of registered factories.
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// Returns true if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::any::Any;

    use glam::{DVec3, IVec2};

    use super::*;
    use crate::display::DisplayNode;
    use crate::markup::MarkupsNode;
    use crate::pick::InteractionHit;
    use crate::render::RenderContext;
    use crate::view::ViewContext;

    struct Dummy {
        need_to_render: bool,
    }

    impl Representation3D for Dummy {
        fn as_any(&self) -> &dyn Any {
            self
        }
        fn as_any_mut(&mut self) -> &mut dyn Any {
            self
        }
        fn markup_kind(&self) -> &'static str {
            "Dummy"
        }
        fn update_from_model(&mut self, _: &dyn MarkupsNode, _: Option<&DisplayNode>, _: &dyn ViewContext) {}
        fn bounds(&self) -> Option<(DVec3, DVec3)> {
            None
        }
        fn can_interact(&self, _: &dyn MarkupsNode, _: IVec2, _: DVec3, _: &dyn ViewContext) -> Option<InteractionHit> {
            None
        }
        fn render_opaque_geometry(&self, _: &mut dyn RenderContext) -> u32 {
            1
        }
        fn render_translucent_polygonal_geometry(&self, _: &mut dyn RenderContext) -> u32 {
            0
        }
        fn render_overlay(&self, _: &mut dyn RenderContext) -> u32 {
            0
        }
        fn has_translucent_polygonal_geometry(&self) -> bool {
            false
        }
        fn release_graphics_resources(&mut self) {}
        fn transformation_reference_point(&self, _: &dyn MarkupsNode) -> Option<DVec3> {
            None
        }
        fn is_visible(&self) -> bool {
            true
        }
        fn need_to_render(&self) -> bool {
            self.need_to_render
        }
        fn set_need_to_render(&mut self, need: bool) {
            self.need_to_render = need;
        }
    }

    fn dummy(_: &Options) -> Box<dyn Representation3D> {
        Box::new(Dummy { need_to_render: false })
    }

    #[test]
    fn test_register_and_create() {
        let mut registry = RepresentationRegistry::new();
        assert!(registry.is_empty());
        registry.register("Dummy", dummy).unwrap();

        assert!(registry.contains("Dummy"));
        assert_eq!(registry.len(), 1);
        let rep = registry.create("Dummy").unwrap();
        assert_eq!(rep.markup_kind(), "Dummy");
        assert!(rep.as_any().downcast_ref::<Dummy>().is_some());
    }

    #[test]
    fn test_duplicate_registration_fails() {
        let mut registry = RepresentationRegistry::new();
        registry.register("Dummy", dummy).unwrap();
        let err = registry.register("Dummy", dummy).unwrap_err();
        assert!(matches!(err, MarkupsError::RepresentationExists(kind) if kind == "Dummy"));
    }

    #[test]
    fn test_unknown_kind() {
        let registry = RepresentationRegistry::new();
        assert!(matches!(
            registry.create("Curve"),
            Err(MarkupsError::UnknownMarkupKind(kind)) if kind == "Curve"
        ));
    }

    #[test]
    fn test_unregister_and_kinds() {
        let mut registry = RepresentationRegistry::new();
        registry.register("B", dummy).unwrap();
        registry.register("A", dummy).unwrap();
        assert_eq!(registry.markup_kinds(), vec!["A", "B"]);
        assert!(registry.unregister("A"));
        assert!(!registry.unregister("A"));
        assert_eq!(registry.markup_kinds(), vec!["B"]);
    }
}
