use alloc::string::String;
use alloc::vec::Vec;

use snaplist::{LayoutBackend, Size, Vec2};

/// Handle to an element of a [`Scene`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Clone, Debug)]
struct Node {
    name: String,
    rect: bool,
    /// Center, relative to the parent's center.
    local: Vec2,
    size: Size,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// An in-memory retained element tree implementing [`LayoutBackend`].
///
/// Elements store their position relative to their parent, so moving a parent moves its whole
/// subtree. Reparenting keeps world positions. Handles are never reused.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    nodes: Vec<Option<Node>>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index()).and_then(Option::as_ref)
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index()).and_then(Option::as_mut)
    }

    fn spawn(&mut self, name: &str, rect: bool, size: Size, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Some(Node {
            name: String::from(name),
            rect,
            local: Vec2::ZERO,
            size,
            parent: None,
            children: Vec::new(),
        }));
        if let Some(p) = parent.filter(|&p| self.is_alive(p)) {
            if let Some(pn) = self.node_mut(p) {
                pn.children.push(id);
            }
            if let Some(n) = self.node_mut(id) {
                n.parent = Some(p);
            }
        }
        id
    }

    /// Creates a rectangular element, optionally attached to `parent` at its center.
    pub fn spawn_rect(&mut self, name: &str, size: Size, parent: Option<NodeId>) -> NodeId {
        self.spawn(name, true, size, parent)
    }

    /// Creates a plain (non-rect) element. Snap lists refuse these as items.
    pub fn spawn_object(&mut self, name: &str, parent: Option<NodeId>) -> NodeId {
        self.spawn(name, false, Size::ZERO, parent)
    }

    pub fn is_alive(&self, id: NodeId) -> bool {
        self.node(id).is_some()
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn name(&self, id: NodeId) -> Option<&str> {
        self.node(id).map(|n| n.name.as_str())
    }

    pub fn local_position(&self, id: NodeId) -> Vec2 {
        self.node(id).map(|n| n.local).unwrap_or_default()
    }

    pub fn is_ancestor(&self, ancestor: NodeId, id: NodeId) -> bool {
        let mut cur = self.node(id).and_then(|n| n.parent);
        while let Some(p) = cur {
            if p == ancestor {
                return true;
            }
            cur = self.node(p).and_then(|n| n.parent);
        }
        false
    }

    /// Stacks the children of `parent` top-down from its top edge, centered horizontally.
    ///
    /// Returns the summed height of the stacked children.
    pub fn stack_children(&mut self, parent: NodeId) -> f32 {
        let Some(node) = self.node(parent) else {
            return 0.0;
        };
        let mut top = node.size.height / 2.0;
        let children = node.children.clone();
        for child in children {
            if let Some(c) = self.node_mut(child) {
                let height = c.size.height;
                c.local = Vec2::new(0.0, top - height / 2.0);
                top -= height;
            }
        }
        let half = self.node(parent).map_or(0.0, |n| n.size.height / 2.0);
        half - top
    }

    fn detach(&mut self, id: NodeId) {
        let Some(parent) = self.node(id).and_then(|n| n.parent) else {
            return;
        };
        if let Some(p) = self.node_mut(parent) {
            p.children.retain(|&c| c != id);
        }
        if let Some(n) = self.node_mut(id) {
            n.parent = None;
        }
    }
}

impl LayoutBackend for Scene {
    type Handle = NodeId;

    fn create_rect(&mut self, name: &str) -> NodeId {
        self.spawn(name, true, Size::ZERO, None)
    }

    fn destroy(&mut self, handle: NodeId) {
        if !self.is_alive(handle) {
            return;
        }
        self.detach(handle);
        let mut stack = Vec::from([handle]);
        while let Some(id) = stack.pop() {
            if let Some(node) = self.nodes.get_mut(id.index()).and_then(Option::take) {
                stack.extend(node.children);
            }
        }
    }

    fn is_rect(&self, handle: NodeId) -> bool {
        self.node(handle).is_some_and(|n| n.rect)
    }

    fn position(&self, handle: NodeId) -> Vec2 {
        let mut world = Vec2::ZERO;
        let mut cur = Some(handle);
        while let Some(id) = cur {
            let Some(node) = self.node(id) else {
                break;
            };
            world = world + node.local;
            cur = node.parent;
        }
        world
    }

    fn set_position(&mut self, handle: NodeId, position: Vec2) {
        let origin = match self.node(handle).and_then(|n| n.parent) {
            Some(parent) => self.position(parent),
            None => Vec2::ZERO,
        };
        if let Some(n) = self.node_mut(handle) {
            n.local = position - origin;
        }
    }

    fn size(&self, handle: NodeId) -> Size {
        self.node(handle).map(|n| n.size).unwrap_or_default()
    }

    fn set_size(&mut self, handle: NodeId, size: Size) {
        if let Some(n) = self.node_mut(handle) {
            n.size = size;
        }
    }

    fn parent(&self, handle: NodeId) -> Option<NodeId> {
        self.node(handle).and_then(|n| n.parent)
    }

    fn set_parent(&mut self, handle: NodeId, parent: Option<NodeId>) {
        if !self.is_alive(handle) {
            return;
        }
        if let Some(p) = parent {
            if !self.is_alive(p) || p == handle || self.is_ancestor(handle, p) {
                vwarn!(node = ?handle, parent = ?p, "refusing to reparent");
                return;
            }
        }

        let world = self.position(handle);
        self.detach(handle);
        if let Some(p) = parent {
            if let Some(pn) = self.node_mut(p) {
                pn.children.push(handle);
            }
            if let Some(n) = self.node_mut(handle) {
                n.parent = Some(p);
            }
        }
        self.set_position(handle, world);
    }

    fn sibling_index(&self, handle: NodeId) -> usize {
        self.parent(handle)
            .and_then(|p| self.node(p))
            .and_then(|p| p.children.iter().position(|&c| c == handle))
            .unwrap_or(0)
    }

    fn set_sibling_index(&mut self, handle: NodeId, index: usize) {
        let Some(parent) = self.parent(handle) else {
            return;
        };
        if let Some(p) = self.node_mut(parent) {
            p.children.retain(|&c| c != handle);
            let index = index.min(p.children.len());
            p.children.insert(index, handle);
        }
    }

    fn children(&self, parent: NodeId) -> Vec<NodeId> {
        self.node(parent)
            .map(|n| n.children.clone())
            .unwrap_or_default()
    }
}
