//! End-to-end tests: markup -> registry -> representation -> viewport.

use markups::*;
use proptest::prelude::*;

fn angle_markup() -> Markup {
    Markup::angle(DVec3::new(1.0, 0.0, 0.0), DVec3::ZERO, DVec3::new(1.0, 1.0, 0.0))
}

fn angle_representation() -> Box<dyn Representation3D> {
    default_registry()
        .expect("default registry")
        .create(ANGLE_MARKUP_KIND)
        .expect("angle representation")
}

fn label_of(viewport: &Viewport) -> Option<(String, IVec2)> {
    viewport.submissions().iter().find_map(|(pass, item)| match item {
        DrawItem::Text {
            text, display_position, ..
        } if *pass == RenderPass::Overlay => Some((text.clone(), *display_position)),
        _ => None,
    })
}

#[test]
fn test_render_angle_in_viewport() {
    init();
    let markup = angle_markup();
    let display = DisplayNode::new();
    let mut viewport = Viewport::new("View1", Camera::default());
    let mut representation = angle_representation();

    representation.update_from_model(&markup, Some(&display), &viewport);
    assert!(representation.is_visible());
    assert!(representation.need_to_render());

    let rendered = representation.render(&mut viewport);
    // Glyphs, line, arc and label.
    assert_eq!(rendered, 4);
    assert_eq!(viewport.count(RenderPass::Opaque), 3);
    assert_eq!(viewport.count(RenderPass::Overlay), 1);

    let angle = representation
        .as_any()
        .downcast_ref::<AngleRepresentation3D>()
        .expect("angle representation");
    let result = angle.angle_result().expect("measured");
    assert!((result.angle_degrees() - 45.0).abs() < 1e-9);

    let expected_position = project_to_display_anchor(result.label_anchor, &viewport);
    assert_eq!(label_of(&viewport), Some(("45.0  ".to_string(), expected_position)));
}

#[test]
fn test_view_filtering() {
    let markup = angle_markup();
    let mut display = DisplayNode::new();
    display.add_view_id("View1");

    let mut representation = angle_representation();
    let mut other = Viewport::new("View2", Camera::default());
    representation.update_from_model(&markup, Some(&display), &other);
    assert!(!representation.is_visible());
    assert_eq!(representation.render(&mut other), 0);
    assert!(representation.bounds().is_none());

    let viewport = Viewport::new("View1", Camera::default());
    representation.update_from_model(&markup, Some(&display), &viewport);
    assert!(representation.is_visible());
}

#[test]
fn test_pick_vertex_and_line() {
    let markup = angle_markup();
    let display = DisplayNode::new();
    let viewport = Viewport::new("View1", Camera::default());
    let mut representation = angle_representation();
    representation.update_from_model(&markup, Some(&display), &viewport);

    let vertex = project_to_display_anchor(DVec3::ZERO, &viewport);
    let hit = representation
        .can_interact(&markup, vertex, DVec3::ZERO, &viewport)
        .expect("vertex hit");
    assert_eq!(hit.component_type, ComponentType::ControlPoint);
    assert_eq!(hit.component_index, 1);

    // Halfway along the second ray, clear of every control point.
    let midpoint = project_to_display_anchor(DVec3::new(0.5, 0.5, 0.0), &viewport);
    let hit = representation
        .can_interact(&markup, midpoint, DVec3::ZERO, &viewport)
        .expect("line hit");
    assert_eq!(hit.component_type, ComponentType::Line);
    assert_eq!(hit.component_index, 1);
}

#[test]
fn test_bounds_and_camera_framing() {
    let markup = angle_markup();
    let display = DisplayNode::new();
    let mut viewport = Viewport::new("View1", Camera::default());
    let mut representation = angle_representation();
    representation.update_from_model(&markup, Some(&display), &viewport);

    let (min, max) = representation.bounds().expect("bounds");
    assert!(min.cmple(DVec3::ZERO).all());
    assert!(max.cmpge(DVec3::new(1.0, 1.0, 0.0)).all());

    viewport.camera_mut().look_at_box(min, max);
    let center = viewport.world_to_display((min + max) * 0.5);
    assert!((center.x - 400.0).abs() < 1e-6);
    assert!((center.y - 300.0).abs() < 1e-6);
}

#[test]
fn test_options_round_trip_through_registry() {
    let options = Options {
        label_format: LabelFormat::parse("%.1f°").expect("format"),
        arc_resolution: 8,
        ..Options::default()
    };
    let json = options.to_json().expect("serialize");
    let registry = default_registry_with_options(Options::from_json(&json).expect("parse")).expect("registry");

    let mut representation = registry.create(ANGLE_MARKUP_KIND).expect("angle representation");
    let viewport = Viewport::new("View1", Camera::default());
    representation.update_from_model(&angle_markup(), Some(&DisplayNode::new()), &viewport);

    let angle = representation
        .as_any()
        .downcast_ref::<AngleRepresentation3D>()
        .expect("angle representation");
    assert_eq!(angle.text_actor().input(), "45.0°");
    assert_eq!(angle.arc_source().output().num_points(), 9);
}

#[test]
fn test_unknown_kind() {
    let registry = default_registry().expect("registry");
    assert!(matches!(
        registry.create("Curve"),
        Err(MarkupsError::UnknownMarkupKind(kind)) if kind == "Curve"
    ));
}

proptest! {
    #[test]
    fn prop_label_tracks_anchor(
        vertex in (-0.5f64..0.5, -0.5f64..0.5, -0.5f64..0.5),
        dx1 in 0.1f64..1.0,
        dx2 in -1.0f64..-0.1,
        y1 in -1.0f64..1.0,
        y2 in -1.0f64..1.0,
    ) {
        let vertex = DVec3::new(vertex.0, vertex.1, vertex.2);
        let markup = Markup::angle(vertex + DVec3::new(dx1, y1, 0.0), vertex, vertex + DVec3::new(dx2, y2, 0.0));
        let mut viewport = Viewport::new("View1", Camera::default());
        let mut representation = angle_representation();
        representation.update_from_model(&markup, Some(&DisplayNode::new()), &viewport);
        representation.render(&mut viewport);

        let angle = representation.as_any().downcast_ref::<AngleRepresentation3D>().unwrap();
        let result = angle.angle_result().unwrap();
        prop_assert!((0.0..=std::f64::consts::PI).contains(&result.angle_radians));

        let (text, position) = label_of(&viewport).unwrap();
        prop_assert_eq!(text, result.label_text.clone());
        prop_assert_eq!(position, project_to_display_anchor(result.label_anchor, &viewport));
    }
}
