use snaplist::{LayoutBackend, Size, Vec2};

use crate::{NodeId, Scene};

/// Geometry of a [`ScrollView`]'s viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollViewOptions {
    /// Viewport center in world space.
    pub position: Vec2,
    pub size: Size,
}

impl ScrollViewOptions {
    pub fn new(size: Size) -> Self {
        Self {
            position: Vec2::ZERO,
            size,
        }
    }

    pub fn with_position(mut self, position: Vec2) -> Self {
        self.position = position;
        self
    }
}

/// A vertical scroll container living in a [`Scene`].
///
/// The viewport is a fixed element; the content element hangs off it and is moved up by the
/// scroll offset, so `offset = 0` shows the top of the content. Offsets are clamped to
/// `[0, max_offset]`.
///
/// Every call that moves the content returns the new normalized value when the offset actually
/// changed. That return value is the scroll-changed notification.
#[derive(Clone, Debug)]
pub struct ScrollView {
    viewport: NodeId,
    content: NodeId,
    offset: f32,
}

impl ScrollView {
    pub fn new(scene: &mut Scene, options: ScrollViewOptions) -> Self {
        let viewport = scene.spawn_rect("Viewport", options.size, None);
        scene.set_position(viewport, options.position);
        let content = scene.spawn_rect(
            "Content",
            Size::new(options.size.width, 0.0),
            Some(viewport),
        );
        let view = Self {
            viewport,
            content,
            offset: 0.0,
        };
        view.place_content(scene);
        view
    }

    pub fn viewport(&self) -> NodeId {
        self.viewport
    }

    pub fn content(&self) -> NodeId {
        self.content
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn max_offset(&self, scene: &Scene) -> f32 {
        let content = scene.size(self.content).height;
        let view = scene.size(self.viewport).height;
        (content - view).max(0.0)
    }

    /// Scroll position in `[0, 1]`: 0 at the top, 1 at the bottom. 0 when nothing can scroll.
    pub fn normalized(&self, scene: &Scene) -> f32 {
        let max = self.max_offset(scene);
        if max > 0.0 { self.offset / max } else { 0.0 }
    }

    pub fn scroll_to(&mut self, scene: &mut Scene, offset: f32) -> Option<f32> {
        let max = self.max_offset(scene);
        let next = if offset.is_nan() {
            self.offset
        } else {
            offset.clamp(0.0, max)
        };
        if next == self.offset {
            return None;
        }
        self.offset = next;
        self.place_content(scene);
        let normalized = self.normalized(scene);
        vtrace!(offset = next, normalized, "scroll_to");
        Some(normalized)
    }

    pub fn scroll_by(&mut self, scene: &mut Scene, delta: f32) -> Option<f32> {
        self.scroll_to(scene, self.offset + delta)
    }

    pub fn set_normalized(&mut self, scene: &mut Scene, value: f32) -> Option<f32> {
        let max = self.max_offset(scene);
        self.scroll_to(scene, value.clamp(0.0, 1.0) * max)
    }

    /// Re-clamps the offset after the content or viewport changed size, re-places the content
    /// and stacks its children. Returns `true` when the offset had to move.
    pub fn layout(&mut self, scene: &mut Scene) -> bool {
        let max = self.max_offset(scene);
        let clamped = self.offset.min(max);
        let moved = clamped != self.offset;
        self.offset = clamped;
        self.place_content(scene);
        scene.stack_children(self.content);
        moved
    }

    fn place_content(&self, scene: &mut Scene) {
        let view = scene.position(self.viewport);
        let top = view.y + scene.size(self.viewport).height / 2.0;
        let height = scene.size(self.content).height;
        scene.set_position(
            self.content,
            Vec2::new(view.x, top + self.offset - height / 2.0),
        );
    }
}
