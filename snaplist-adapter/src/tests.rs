use crate::*;

use alloc::vec::Vec;
use snaplist::{
    BorderOffsets, Borders, ErrorKind, LayoutBackend, Owner, Size, SnapError, SnapPhase, Vec2,
};

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

fn y(c: &Controller, id: NodeId) -> f32 {
    c.scene().position(id).y
}

/// 200x100 viewport at the origin holding A(50), B(80), C(60).
fn abc() -> (Controller, [NodeId; 3]) {
    let mut c = Controller::new(
        ScrollViewOptions::new(Size::new(200.0, 100.0)),
        BorderOffsets::default(),
    );
    let a = c.push_item("A", 50.0).unwrap();
    let b = c.push_item("B", 80.0).unwrap();
    let d = c.push_item("C", 60.0).unwrap();
    (c, [a, b, d])
}

#[test]
fn scene_reparent_keeps_world_position() {
    let mut s = Scene::new();
    let root = s.spawn_rect("root", Size::new(10.0, 10.0), None);
    s.set_position(root, Vec2::new(5.0, 100.0));
    let other = s.spawn_rect("other", Size::new(10.0, 10.0), None);
    s.set_position(other, Vec2::new(-20.0, -30.0));

    let child = s.spawn_rect("child", Size::new(4.0, 4.0), Some(root));
    assert_eq!(s.position(child), Vec2::new(5.0, 100.0));

    s.set_position(child, Vec2::new(7.0, 90.0));
    assert_eq!(s.local_position(child), Vec2::new(2.0, -10.0));

    s.set_parent(child, Some(other));
    assert_eq!(s.position(child), Vec2::new(7.0, 90.0));
    assert_eq!(s.local_position(child), Vec2::new(27.0, 120.0));
    assert!(s.children(root).is_empty());

    // Moving the parent carries the child along.
    s.set_position(other, Vec2::new(-20.0, -20.0));
    assert_eq!(s.position(child), Vec2::new(7.0, 100.0));

    s.set_parent(child, None);
    assert_eq!(s.parent(child), None);
    assert_eq!(s.position(child), Vec2::new(7.0, 100.0));
}

#[test]
fn scene_destroy_removes_the_subtree() {
    let mut s = Scene::new();
    let root = s.spawn_rect("root", Size::ZERO, None);
    let mid = s.spawn_rect("mid", Size::ZERO, Some(root));
    let leaf = s.spawn_object("leaf", Some(mid));
    assert_eq!(s.len(), 3);
    assert!(!s.is_rect(leaf));
    assert_eq!(s.name(leaf), Some("leaf"));

    s.destroy(mid);
    assert!(s.is_alive(root));
    assert!(!s.is_alive(mid));
    assert!(!s.is_alive(leaf));
    assert!(s.children(root).is_empty());
    assert_eq!(s.len(), 1);

    // Dead handles answer with neutral values and ignore writes.
    s.set_size(mid, Size::new(5.0, 5.0));
    assert_eq!(s.size(mid), Size::ZERO);
    assert_eq!(s.name(mid), None);

    // Handles are slot indexes and are not reused.
    let fresh = s.spawn_rect("fresh", Size::ZERO, None);
    assert_eq!(fresh.index(), 3);
    assert!(!s.is_alive(mid));
}

#[test]
fn scene_refuses_cycles() {
    let mut s = Scene::new();
    let a = s.spawn_rect("a", Size::ZERO, None);
    let b = s.spawn_rect("b", Size::ZERO, Some(a));
    let c = s.spawn_rect("c", Size::ZERO, Some(b));

    s.set_parent(a, Some(c));
    s.set_parent(a, Some(a));
    assert_eq!(s.parent(a), None);
    assert!(s.is_ancestor(a, c));
    assert!(!s.is_ancestor(c, a));
}

#[test]
fn scene_sibling_index_moves_and_clamps() {
    let mut s = Scene::new();
    let p = s.spawn_rect("p", Size::ZERO, None);
    let kids: Vec<NodeId> = (0..4)
        .map(|_| s.spawn_rect("k", Size::ZERO, Some(p)))
        .collect();

    s.set_sibling_index(kids[3], 1);
    assert_eq!(s.children(p), [kids[0], kids[3], kids[1], kids[2]].to_vec());
    assert_eq!(s.sibling_index(kids[1]), 2);

    s.set_sibling_index(kids[0], 99);
    assert_eq!(s.sibling_index(kids[0]), 3);

    // Roots have no siblings to reorder.
    s.set_sibling_index(p, 3);
    assert_eq!(s.sibling_index(p), 0);
}

#[test]
fn scene_stacks_children_from_the_top_edge() {
    let mut s = Scene::new();
    let p = s.spawn_rect("p", Size::new(100.0, 90.0), None);
    s.set_position(p, Vec2::new(10.0, 0.0));
    let a = s.spawn_rect("a", Size::new(100.0, 30.0), Some(p));
    let b = s.spawn_rect("b", Size::new(100.0, 20.0), Some(p));

    assert_eq!(s.stack_children(p), 50.0);
    assert_eq!(s.position(a), Vec2::new(10.0, 30.0));
    assert_eq!(s.position(b), Vec2::new(10.0, 5.0));
}

#[test]
fn scroll_view_clamps_and_reports_changes_once() {
    let mut s = Scene::new();
    let mut view = ScrollView::new(&mut s, ScrollViewOptions::new(Size::new(200.0, 100.0)));
    assert_eq!(s.parent(view.content()), Some(view.viewport()));

    // Nothing to scroll yet.
    assert_eq!(view.scroll_to(&mut s, 30.0), None);
    assert_eq!(view.normalized(&s), 0.0);

    s.set_size(view.content(), Size::new(200.0, 300.0));
    view.layout(&mut s);
    assert_eq!(view.max_offset(&s), 200.0);

    assert_eq!(view.scroll_to(&mut s, 50.0), Some(0.25));
    assert_eq!(view.scroll_to(&mut s, 50.0), None);
    assert_eq!(view.scroll_by(&mut s, 500.0), Some(1.0));
    assert_eq!(view.offset(), 200.0);
    assert_eq!(view.set_normalized(&mut s, 0.5), Some(0.5));
    assert_eq!(view.offset(), 100.0);
    assert_eq!(view.scroll_to(&mut s, f32::NAN), None);

    // Content top sits `offset` above the viewport top.
    let top = s.position(view.content()).y + 150.0;
    assert_eq!(top, 50.0 + 100.0);
}

#[test]
fn scroll_view_layout_reclamps_after_the_content_shrinks() {
    let mut s = Scene::new();
    let mut view = ScrollView::new(
        &mut s,
        ScrollViewOptions::new(Size::new(200.0, 100.0)).with_position(Vec2::new(0.0, 40.0)),
    );
    s.set_size(view.content(), Size::new(200.0, 400.0));
    view.layout(&mut s);
    view.scroll_to(&mut s, 250.0);

    s.set_size(view.content(), Size::new(200.0, 180.0));
    assert!(view.layout(&mut s));
    assert_eq!(view.offset(), 80.0);
    assert!(!view.layout(&mut s));
}

#[test]
fn controller_stacks_pushed_items() {
    let (c, [a, b, d]) = abc();
    let list = c.snap_list();
    assert_eq!(list.items(), &[a, b, d]);
    assert_eq!(list.content_height(), 190.0);
    assert_eq!(c.scene().size(c.scroll_view().content()).height, 190.0);
    assert!(approx(y(&c, a), 25.0));
    assert!(approx(y(&c, b), -40.0));
    assert!(approx(y(&c, d), -110.0));
    assert_eq!(c.scroll_view().max_offset(c.scene()), 90.0);
}

#[test]
fn controller_pin_unpin_scenario() {
    let (mut c, [_, b, _]) = abc();
    assert_eq!(c.scroll_to(40.0), 40.0);
    assert!(approx(y(&c, b), 0.0));

    c.snap(1).unwrap();
    let list = c.snap_list();
    assert_eq!(list.borders(), Some(Borders { upper: 10.0, lower: -10.0 }));
    assert_eq!(list.phase(), SnapPhase::Idle);
    let holder = list.placeholder();
    let viewport = c.scroll_view().viewport();
    let content = c.scroll_view().content();

    c.scroll_to(25.0);
    assert_eq!(c.snap_list().pinned_item(), Some(b));
    assert_eq!(c.snap_list().owner(), Some(Owner::Viewport));
    assert_eq!(c.scene().parent(b), Some(viewport));
    assert!(approx(y(&c, b), -10.0));
    assert_eq!(c.scene().parent(holder), Some(content));
    assert_eq!(c.scene().sibling_index(holder), 1);
    assert_eq!(c.scene().size(holder).height, 80.0);
    assert!(approx(y(&c, holder), -15.0));

    c.scroll_by(-25.0);
    assert!(approx(y(&c, b), -10.0));
    assert!(approx(y(&c, holder), -40.0));

    c.scroll_to(45.0);
    assert_eq!(c.snap_list().phase(), SnapPhase::Idle);
    assert_eq!(c.scene().parent(b), Some(content));
    assert_eq!(c.scene().sibling_index(b), 1);
    assert!(approx(y(&c, b), 5.0));

    c.scroll_to(40.0);
    assert!(approx(y(&c, b), 0.0));
}

#[test]
fn controller_round_trip_over_many_scroll_deltas() {
    let (mut c, [_, b, _]) = abc();
    c.scroll_to(40.0);
    c.snap(1).unwrap();

    let deltas = [-7.0, -13.0, -30.0, 12.5, 60.0, 11.0, -3.0, 25.0, -80.0, 44.0];
    for delta in deltas {
        c.scroll_by(delta);
        let borders = c.snap_list().borders().unwrap();
        let slot = if c.snap_list().is_pinned() {
            c.snap_list().placeholder()
        } else {
            b
        };
        let tracked = y(&c, slot);
        assert_eq!(
            c.snap_list().is_pinned(),
            !borders.contains(tracked),
            "offset={}",
            c.scroll_view().offset()
        );
    }

    c.scroll_to(40.0);
    assert!(!c.snap_list().is_pinned());
    assert_eq!(c.scene().sibling_index(b), 1);
    assert!(approx(y(&c, b), 0.0));
}

#[test]
fn controller_adopts_a_prebuilt_scene() {
    let mut scene = Scene::new();
    let scroll = ScrollView::new(&mut scene, ScrollViewOptions::new(Size::new(120.0, 60.0)));
    let content = scroll.content();
    let rows: Vec<NodeId> = [20.0, 30.0, 40.0]
        .iter()
        .map(|&h| scene.spawn_rect("row", Size::new(120.0, h), Some(content)))
        .collect();
    scene.spawn_object("decoration", Some(content));

    let c = Controller::from_parts(scene, scroll, BorderOffsets::new(2.0, 2.0));
    assert_eq!(c.snap_list().items(), rows.as_slice());
    assert_eq!(c.snap_list().content_height(), 90.0);
    assert_eq!(c.snap_list().options().offsets(), BorderOffsets::new(2.0, 2.0));
    // Viewport top is at 30: rows are centered at 20, -5, -40.
    assert!(approx(y(&c, rows[0]), 20.0));
    assert!(approx(y(&c, rows[1]), -5.0));
    assert!(approx(y(&c, rows[2]), -40.0));
}

#[test]
fn controller_reports_misuse_without_changing_state() {
    let (mut c, [a, ..]) = abc();
    c.scroll_to(25.0);
    c.snap(1).unwrap();
    let state = c.snap_list().state();

    assert_eq!(c.snap(-1), Err(SnapError::NegativeIndex(-1)));
    assert_eq!(c.snap_str("1.5").unwrap_err().kind(), ErrorKind::InvalidArgument);
    assert!(c.snap(7).unwrap_err().is_precondition());
    assert_eq!(c.snap_list().state(), state);

    let stranger = c.scene_mut().spawn_rect("stranger", Size::new(200.0, 10.0), None);
    let err = c.remove_handle(stranger, true).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(c.snap_list().len(), 3);
    assert_eq!(c.snap_list().content_height(), 190.0);

    let object = c.scene_mut().spawn_object("object", None);
    assert!(matches!(c.add_item(object), Err(SnapError::NotRect(_))));
    assert!(matches!(c.add_item(a), Err(SnapError::DuplicateItem(_))));

    let viewport = c.scroll_view().viewport();
    let content = c.scroll_view().content();
    let holder = c.snap_list().placeholder();
    for reserved in [viewport, content, holder] {
        assert!(matches!(c.add_item(reserved), Err(SnapError::ReservedItem(_))));
    }
    assert_eq!(c.snap_list().len(), 3);
    assert_eq!(c.snap_list().content_height(), 190.0);
    assert_eq!(c.scene().size(content).height, 190.0);
    assert_eq!(c.scene().children(content).len(), 3);
    assert_eq!(c.scene().parent(viewport), None);
    assert_eq!(c.snap_list().state(), state);
}

#[test]
fn controller_restacks_after_removing_the_pinned_item() {
    let (mut c, [a, b, d]) = abc();
    c.scroll_to(25.0);
    c.snap(1).unwrap();
    assert!(c.snap_list().is_pinned());
    let holder = c.snap_list().placeholder();

    assert_eq!(c.remove_handle(b, true), Ok(1));
    assert!(!c.scene().is_alive(b));
    assert_eq!(c.snap_list().snap_index(), None);
    assert_eq!(c.snap_list().content_height(), 110.0);
    assert_eq!(c.scene().parent(holder), Some(c.scroll_view().viewport()));
    assert_eq!(c.scene().children(c.scroll_view().content()), [a, d].to_vec());

    // Content is only 10 taller than the viewport now.
    assert_eq!(c.scroll_view().offset(), 10.0);
    assert!(approx(y(&c, a), 35.0));
    assert!(approx(y(&c, d), -20.0));
}

#[test]
fn controller_keeps_the_pin_when_items_are_appended() {
    let (mut c, [_, b, _]) = abc();
    c.scroll_to(25.0);
    c.snap(1).unwrap();
    assert!(c.snap_list().is_pinned());

    let e = c.push_item("E", 40.0).unwrap();
    assert!(c.snap_list().is_pinned());
    assert!(approx(y(&c, b), -10.0));
    assert_eq!(c.scene().sibling_index(e), 3);
    assert_eq!(c.snap_list().content_height(), 230.0);
}

#[test]
fn controller_resize_viewport_rederives_borders() {
    let (mut c, [_, b, _]) = abc();
    c.scroll_to(40.0);
    c.snap(1).unwrap();
    assert!(!c.snap_list().is_pinned());

    c.resize_viewport(Size::new(200.0, 80.0));
    assert_eq!(
        c.snap_list().borders(),
        Some(Borders { upper: 0.0, lower: 0.0 })
    );
    assert!(c.snap_list().is_pinned());
    assert!(approx(y(&c, b), 0.0));
    assert_eq!(
        c.scene().size(c.scroll_view().content()).width,
        200.0
    );
}

#[test]
fn example_basic_smoke() {
    let mut c = Controller::new(
        ScrollViewOptions::new(Size::new(320.0, 240.0)),
        BorderOffsets::new(10.0, 10.0),
    );
    for i in 0..30 {
        c.push_item("row", 24.0 + (i % 3) as f32 * 8.0).unwrap();
    }
    c.snap_str("12").unwrap();
    let target = c.snap_list().snap_item().unwrap();

    let mut transitions = 0usize;
    let mut was_pinned = c.snap_list().is_pinned();
    while c.scroll_view().offset() < c.scroll_view().max_offset(c.scene()) {
        c.scroll_by(16.0);
        let pinned = c.snap_list().is_pinned();
        if pinned != was_pinned {
            transitions += 1;
            was_pinned = pinned;
        }
        if pinned {
            let borders = c.snap_list().borders().unwrap();
            let at = y(&c, target);
            assert!(approx(at, borders.upper) || approx(at, borders.lower));
        }
    }
    assert!(transitions >= 2);
}

#[test]
fn example_prebuilt_scene_smoke() {
    let mut scene = Scene::new();
    let scroll = ScrollView::new(
        &mut scene,
        ScrollViewOptions::new(Size::new(200.0, 120.0)).with_position(Vec2::new(0.0, 300.0)),
    );
    for h in [40.0, 60.0, 30.0, 50.0, 70.0, 45.0] {
        scene.spawn_rect("card", Size::new(200.0, h), Some(scroll.content()));
    }
    let mut c = Controller::from_parts(scene, scroll, BorderOffsets::default());
    c.snap(3).unwrap();
    c.set_normalized(1.0);
    assert!(c.snap_list().is_pinned());
    c.set_normalized(0.0);
    let state = c.snap_list().state();
    assert_eq!(state.index, Some(3));
    assert!(state.borders.is_some());
}
