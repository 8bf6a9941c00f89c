use snaplist::{BorderOffsets, LayoutBackend, Size};
use snaplist_adapter::{Controller, ScrollViewOptions};

fn main() {
    // Example: a 30-row list with row 12 pinned while the user scrolls through it.
    //
    // An adapter would:
    // - forward wheel/drag deltas to scroll_by/scroll_to
    // - call snap(index) when the user picks a row
    // - render every element of the scene at its world position
    let mut c = Controller::new(
        ScrollViewOptions::new(Size::new(320.0, 240.0)),
        BorderOffsets::new(10.0, 10.0),
    );
    for i in 0..30 {
        c.push_item("row", 24.0 + (i % 3) as f32 * 8.0)
            .expect("fresh rows are valid items");
    }

    c.snap_str("12").expect("12 is a valid row");
    let target = c.snap_list().snap_item().expect("snap target is set");
    println!("borders={:?}", c.snap_list().borders());

    while c.scroll_view().offset() < c.scroll_view().max_offset(c.scene()) {
        let offset = c.scroll_by(16.0);
        println!(
            "offset={offset:>5.1} phase={:?} target_y={:>7.1}",
            c.snap_list().phase(),
            c.scene().position(target).y,
        );
    }
}
