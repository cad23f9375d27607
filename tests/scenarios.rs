//! End-to-end editor scenarios: tick lists, both drag modes, and the
//! binding layer driving the reducer from pointer and keyboard events.

#![cfg(feature = "alloc")]

use focalcrop::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

// ---- Tick list ----

#[test]
fn square_image_replaces_one_to_one_preset() {
    let list = build_aspect_ratio_list(Some(1.0));
    assert_eq!(list.len(), 14);
    assert!(list.iter().all(|e| e.name != "1:1"));

    let original = list.iter().find(|e| e.is_original()).unwrap();
    assert_eq!(original.value, 1.0);
    assert!(approx(original.position, to_log_position(1.0, 9.0 / 16.0, 4.0)));

    let values: Vec<f64> = list.iter().map(|e| e.value).collect();
    assert!(values.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn panorama_widens_the_track() {
    let list = build_aspect_ratio_list(Some(6.0));
    let last = list.last().unwrap();
    assert!(last.is_original());
    assert_eq!(last.position, 1.0);
    assert_eq!(list[0].name, "9:16");
    assert_eq!(list[0].position, 0.0);

    let four_one = list.iter().find(|e| e.name == "4:1").unwrap();
    assert!(four_one.position < 1.0);
    assert!(list.iter().all(|e| (0.0..=1.0).contains(&e.position)));
}

#[test]
fn no_image_lists_presets_only() {
    let list = build_aspect_ratio_list(None);
    assert_eq!(list.len(), 14);
    assert!(list.iter().all(|e| !e.is_original()));
    assert_eq!(list[0].position, 0.0);
    assert_eq!(list[13].position, 1.0);
}

// ---- Drag modes ----

fn wide_session(mode: DragMode) -> DragSession {
    // 3:1 image in a 300x200 crop window: 600x200 painted, 300px of x slack.
    DragSession::new(
        mode,
        Point::new(250.0, 150.0),
        ObjectPosition::CENTER,
        Rect::new(100.0, 50.0, 300.0, 200.0),
        Size::new(1200.0, 400.0),
        false,
    )
}

#[test]
fn image_drag_moves_opposite_to_pointer() {
    let session = wide_session(DragMode::Image);
    assert_eq!(session.rendered_image_size(), Size::new(600.0, 200.0));

    let p = session.update(Point::new(280.0, 170.0)).unwrap();
    assert_eq!(p.x(), 40.0);
    // No vertical slack.
    assert_eq!(p.y(), 50.0);

    let p = session.update(Point::new(220.0, 150.0)).unwrap();
    assert_eq!(p.x(), 60.0);
}

#[test]
fn image_drag_clamps_at_edges() {
    let session = wide_session(DragMode::Image);
    assert_eq!(session.update(Point::new(10_000.0, 150.0)).unwrap().x(), 0.0);
    assert_eq!(session.update(Point::new(-10_000.0, 150.0)).unwrap().x(), 100.0);
}

#[test]
fn marker_drag_is_absolute() {
    let session = wide_session(DragMode::FocalMarker);
    let p = session.update(Point::new(175.0, 100.0)).unwrap();
    assert_eq!(p, ObjectPosition::new(25.0, 25.0));

    // Outside the container the marker pins to the edge.
    let p = session.update(Point::new(0.0, 400.0)).unwrap();
    assert_eq!(p, ObjectPosition::new(0.0, 100.0));
}

#[test]
fn stationary_pointer_returns_start_exactly() {
    let start = ObjectPosition::new(33.33, 66.67);
    let mut session = wide_session(DragMode::Image);
    session.start_position = start;
    assert_eq!(session.update(session.start_pointer).unwrap(), start);
    assert_eq!(session.update(Point::new(250.4, 149.6)).unwrap(), start);
}

#[test]
fn collapsed_layout_skips_the_update() {
    let mut session = wide_session(DragMode::Image);
    session.set_geometry(Rect::new(100.0, 50.0, 0.0, 0.0), Size::new(1200.0, 400.0));
    assert_eq!(session.update(Point::new(280.0, 150.0)), None);

    // Once layout is back, the original anchor still applies.
    session.set_geometry(Rect::new(100.0, 50.0, 300.0, 200.0), Size::new(1200.0, 400.0));
    assert_eq!(session.update(Point::new(280.0, 150.0)).unwrap().x(), 40.0);
}

#[test]
fn overflow_view_uses_measured_ghost() {
    let session = DragSession::new(
        DragMode::Image,
        Point::new(0.0, 0.0),
        ObjectPosition::CENTER,
        Rect::new(0.0, 0.0, 300.0, 200.0),
        Size::new(900.0, 300.0),
        true,
    );
    let p = session.update(Point::new(-60.0, 10.0)).unwrap();
    assert_eq!(p, ObjectPosition::new(60.0, 40.0));
}

// ---- Editor ----

fn geometry() -> DragGeometry {
    DragGeometry {
        container: Rect::new(100.0, 50.0, 300.0, 200.0),
        image: Size::new(1200.0, 400.0),
    }
}

#[test]
fn editor_image_drag_then_release() {
    let mut editor = Editor::default();
    editor.image_loaded(3.0).unwrap();

    let g = geometry();
    editor.handle_pointer(PointerEvent::down(Point::new(250.0, 150.0), PointerTarget::Image), g);
    assert!(editor.is_dragging());
    let moved = editor.handle_pointer(PointerEvent::moved(Point::new(280.0, 150.0)), g);
    assert_eq!(moved, Some(ObjectPosition::new(40.0, 50.0)));
    editor.handle_pointer(PointerEvent::up(Point::new(280.0, 150.0)), g);

    assert!(!editor.is_dragging());
    assert_eq!(editor.object_position(), Some(ObjectPosition::new(40.0, 50.0)));

    // Moves after release do nothing.
    let after = editor.handle_pointer(PointerEvent::moved(Point::new(400.0, 150.0)), g);
    assert_eq!(after, None);
    assert_eq!(editor.object_position(), Some(ObjectPosition::new(40.0, 50.0)));
}

#[test]
fn marker_needs_focal_point_shown() {
    let mut editor = Editor::default();
    editor.image_loaded(3.0).unwrap();
    let g = geometry();

    assert!(!editor.begin_drag(Point::new(175.0, 100.0), PointerTarget::FocalMarker, g));

    assert_eq!(
        editor.handle_shortcut('a', Modifiers::default()),
        Some(EditorAction::ToggleShowFocalPoint)
    );
    assert!(editor.begin_drag(Point::new(250.0, 150.0), PointerTarget::FocalMarker, g));
    editor.drag_to(Point::new(175.0, 100.0), g);
    editor.end_drag();
    assert_eq!(editor.object_position(), Some(ObjectPosition::new(25.0, 25.0)));
}

#[test]
fn second_pointer_down_is_ignored() {
    let mut editor = Editor::default();
    editor.image_loaded(3.0).unwrap();
    let g = geometry();
    assert!(editor.begin_drag(Point::new(250.0, 150.0), PointerTarget::Image, g));
    assert!(!editor.begin_drag(Point::new(0.0, 0.0), PointerTarget::Image, g));
    assert_eq!(editor.drag_session().unwrap().start_pointer, Point::new(250.0, 150.0));
}

#[test]
fn slider_keys_walk_the_log_scale() {
    let mut editor = Editor::default();
    editor.image_loaded(1.0).unwrap();

    let wider = editor.handle_slider_key(SliderKey::ArrowRight).unwrap();
    assert!(wider > 1.0);
    let back = editor.handle_slider_key(SliderKey::ArrowLeft).unwrap();
    assert!(approx(back, 1.0));
    assert!(approx(editor.aspect_ratio().unwrap(), 1.0));
}

#[test]
fn new_image_resets_position_and_keeps_toggles() {
    let mut editor = Editor::default();
    editor.image_loaded(1.5).unwrap();
    editor.dispatch(EditorAction::SetObjectPosition(ObjectPosition::new(10.0, 90.0)));
    editor.dispatch(EditorAction::ToggleShowOverflow);
    let before = editor.aspect_ratio_list();

    editor.image_loaded(0.75).unwrap();
    let state = editor.state().unwrap();
    assert_eq!(state.object_position, ObjectPosition::CENTER);
    assert_eq!(state.aspect_ratio, 0.75);
    assert!(state.show_overflow);

    let after = editor.aspect_ratio_list();
    assert!(!std::sync::Arc::ptr_eq(&before, &after));
    assert!(std::sync::Arc::ptr_eq(&after, &editor.aspect_ratio_list()));
}

#[test]
fn persisted_position_round_trips() {
    let mut editor = Editor::default();
    editor.image_loaded(3.0).unwrap();
    let g = geometry();
    editor.begin_drag(Point::new(250.0, 150.0), PointerTarget::Image, g);
    editor.drag_to(Point::new(257.0, 150.0), g);
    editor.end_drag();

    let saved = editor.object_position().unwrap().to_string();
    let restored: ObjectPosition = saved.parse().unwrap();
    assert_eq!(Some(restored), editor.object_position());
}

fn describe_parse_error(err: ParseObjectPositionError) -> &'static str {
    match err {
        ParseObjectPositionError::MissingPercentSign => "add a % sign",
        ParseObjectPositionError::OutOfRange => "use 0% to 100%",
        _ => "expected something like 50% 50%",
    }
}

#[test]
fn persisted_garbage_reports_a_reason() {
    let err = "50 50%".parse::<ObjectPosition>().unwrap_err();
    assert_eq!(describe_parse_error(err), "add a % sign");
    let err = "150% 50%".parse::<ObjectPosition>().unwrap_err();
    assert_eq!(describe_parse_error(err), "use 0% to 100%");
    let err = "left top".parse::<ObjectPosition>().unwrap_err();
    assert_eq!(describe_parse_error(err), "add a % sign");
    let err = "".parse::<ObjectPosition>().unwrap_err();
    assert_eq!(describe_parse_error(err), "expected something like 50% 50%");
}
