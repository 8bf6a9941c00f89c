use alloc::vec::Vec;
use core::fmt;

use crate::{Size, Vec2};

/// The layout/rendering system a snap list drives.
///
/// A backend owns rectangular elements addressed by cheap `Copy` handles. All positions are
/// element centers in one shared coordinate space, so they stay comparable across parents.
///
/// Contract:
/// - `set_parent` keeps the element's world position (only the local offset changes). A backend
///   may refuse a reparent that would form a cycle; it must then leave the element untouched.
/// - Attaching to a parent appends the element as that parent's last child.
/// - `set_sibling_index` clamps to the parent's child count.
/// - Queries on a handle the backend does not know return neutral values (`Vec2::ZERO`,
///   `Size::ZERO`, `None`, `0`, empty); mutations on such handles are ignored.
pub trait LayoutBackend {
    type Handle: Copy + Eq + fmt::Debug;

    /// Creates a detached rectangular element.
    fn create_rect(&mut self, name: &str) -> Self::Handle;

    /// Destroys the element together with its children.
    fn destroy(&mut self, handle: Self::Handle);

    /// Whether `handle` refers to a live rectangular layout element.
    fn is_rect(&self, handle: Self::Handle) -> bool;

    fn position(&self, handle: Self::Handle) -> Vec2;

    fn set_position(&mut self, handle: Self::Handle, position: Vec2);

    fn size(&self, handle: Self::Handle) -> Size;

    fn set_size(&mut self, handle: Self::Handle, size: Size);

    fn parent(&self, handle: Self::Handle) -> Option<Self::Handle>;

    fn set_parent(&mut self, handle: Self::Handle, parent: Option<Self::Handle>);

    fn sibling_index(&self, handle: Self::Handle) -> usize;

    fn set_sibling_index(&mut self, handle: Self::Handle, index: usize);

    /// Direct children of `parent`, in sibling order.
    fn children(&self, parent: Self::Handle) -> Vec<Self::Handle>;
}
