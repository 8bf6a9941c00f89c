use snaplist::{BorderOffsets, LayoutBackend, Size, Vec2};
use snaplist_adapter::{Controller, Scene, ScrollView, ScrollViewOptions};

fn main() {
    // Example: adopt cards that already live under the content element, then drive the scroll
    // with normalized values (0 = top, 1 = bottom) as a scrollbar would.
    let mut scene = Scene::new();
    let scroll = ScrollView::new(
        &mut scene,
        ScrollViewOptions::new(Size::new(200.0, 120.0)).with_position(Vec2::new(0.0, 300.0)),
    );
    for h in [40.0, 60.0, 30.0, 50.0, 70.0, 45.0] {
        scene.spawn_rect("card", Size::new(200.0, h), Some(scroll.content()));
    }

    let mut c = Controller::from_parts(scene, scroll, BorderOffsets::default());
    println!(
        "items={} content_height={}",
        c.snap_list().len(),
        c.snap_list().content_height()
    );

    if let Err(err) = c.snap(-1) {
        println!("rejected: {err} ({:?})", err.kind());
    }
    c.snap(3).expect("card 3 exists");

    for step in 0..=10 {
        let v = step as f32 / 10.0;
        c.set_normalized(v);
        let state = c.snap_list().state();
        let card = c.snap_list().snap_item().expect("snap target is set");
        println!(
            "v={v:.1} pinned={} card_y={:.1}",
            state.is_pinned(),
            c.scene().position(card).y
        );
    }
}
