use snaplist::{BorderOffsets, LayoutBackend, Size, SnapError, SnapList, SnapListOptions};

use crate::{NodeId, Scene, ScrollView, ScrollViewOptions};

/// A framework-neutral controller that owns a [`Scene`], a [`ScrollView`] and the
/// `snaplist::SnapList` living in it.
///
/// Adapters drive it by calling:
/// - `scroll_to` / `scroll_by` / `set_normalized` when the user scrolls;
/// - `snap` / `snap_str` to choose the pinned item;
/// - `push_item` / `add_item` / `remove_item` / `remove_handle` to edit the list.
///
/// Each scroll change is forwarded to the snap list exactly once; list edits re-stack the
/// content and re-run the border test.
#[derive(Clone, Debug)]
pub struct Controller {
    scene: Scene,
    scroll: ScrollView,
    list: SnapList<NodeId>,
}

impl Controller {
    /// Creates an empty scroll view and snap list in a fresh scene.
    pub fn new(options: ScrollViewOptions, offsets: BorderOffsets) -> Self {
        let mut scene = Scene::new();
        let scroll = ScrollView::new(&mut scene, options);
        Self::from_parts(scene, scroll, offsets)
    }

    /// Builds a controller around a scroll view whose content may already hold items; those are
    /// adopted in sibling order.
    pub fn from_parts(mut scene: Scene, mut scroll: ScrollView, offsets: BorderOffsets) -> Self {
        let options =
            SnapListOptions::new(scroll.viewport(), scroll.content()).with_offsets(offsets);
        let list = SnapList::new(&mut scene, options);
        scroll.layout(&mut scene);
        vdebug!(items = list.len(), "Controller::from_parts");
        Self {
            scene,
            scroll,
            list,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Mutable access to the scene, e.g. to restyle elements.
    ///
    /// Reparenting or moving list elements behind the controller's back breaks the pin.
    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    pub fn scroll_view(&self) -> &ScrollView {
        &self.scroll
    }

    pub fn snap_list(&self) -> &SnapList<NodeId> {
        &self.list
    }

    pub fn into_parts(self) -> (Scene, ScrollView, SnapList<NodeId>) {
        (self.scene, self.scroll, self.list)
    }

    /// Creates a content-wide item of `height` and appends it.
    pub fn push_item(&mut self, name: &str, height: f32) -> Result<NodeId, SnapError> {
        let width = self.scene.size(self.scroll.content()).width;
        let item = self.scene.spawn_rect(name, Size::new(width, height), None);
        if let Err(err) = self.add_item(item) {
            self.scene.destroy(item);
            return Err(err);
        }
        Ok(item)
    }

    pub fn add_item(&mut self, item: NodeId) -> Result<(), SnapError> {
        self.list.add_item(&mut self.scene, item)?;
        self.relayout();
        Ok(())
    }

    pub fn remove_item(&mut self, index: usize, destroy: bool) -> Result<NodeId, SnapError> {
        let item = self.list.remove_item(&mut self.scene, index, destroy)?;
        self.relayout();
        Ok(item)
    }

    pub fn remove_handle(&mut self, item: NodeId, destroy: bool) -> Result<usize, SnapError> {
        let index = self.list.remove_handle(&mut self.scene, item, destroy)?;
        self.relayout();
        Ok(index)
    }

    pub fn snap(&mut self, index: isize) -> Result<(), SnapError> {
        self.list.snap(&mut self.scene, index)
    }

    pub fn snap_str(&mut self, text: &str) -> Result<(), SnapError> {
        self.list.snap_str(&mut self.scene, text)
    }

    /// Scrolls to `offset` (clamped). Returns the applied offset.
    pub fn scroll_to(&mut self, offset: f32) -> f32 {
        let changed = self.scroll.scroll_to(&mut self.scene, offset);
        self.forward(changed)
    }

    pub fn scroll_by(&mut self, delta: f32) -> f32 {
        let changed = self.scroll.scroll_by(&mut self.scene, delta);
        self.forward(changed)
    }

    pub fn set_normalized(&mut self, value: f32) -> f32 {
        let changed = self.scroll.set_normalized(&mut self.scene, value);
        self.forward(changed)
    }

    /// Resizes the viewport and re-derives the snap borders for it.
    pub fn resize_viewport(&mut self, size: Size) {
        let viewport = self.scroll.viewport();
        let content = self.scroll.content();
        self.scene.set_size(viewport, size);
        let height = self.scene.size(content).height;
        self.scene.set_size(content, Size::new(size.width, height));
        self.scroll.layout(&mut self.scene);
        self.list.refresh(&mut self.scene);
    }

    fn forward(&mut self, changed: Option<f32>) -> f32 {
        if let Some(normalized) = changed {
            self.list.on_scroll(&mut self.scene, normalized);
        }
        self.scroll.offset()
    }

    fn relayout(&mut self) {
        self.scroll.layout(&mut self.scene);
        let normalized = self.scroll.normalized(&self.scene);
        self.list.on_scroll(&mut self.scene, normalized);
    }
}
