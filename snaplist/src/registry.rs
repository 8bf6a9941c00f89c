use alloc::format;
use alloc::vec::Vec;
use core::fmt;

use crate::{LayoutBackend, Size, SnapError};

/// The ordered items of a snap list plus the aggregate content height.
///
/// Order is visual stacking order (first item on top). The aggregate height grows by an item's
/// height when it is added and shrinks by its height at the time it is removed, so it equals the
/// sum of the member heights as long as listed items are not resized in between. It is mirrored
/// onto the content element's size.
#[derive(Clone, Debug)]
pub struct ItemRegistry<H> {
    content: H,
    items: Vec<H>,
    content_height: f32,
}

impl<H: Copy + Eq + fmt::Debug> ItemRegistry<H> {
    pub fn new(content: H) -> Self {
        Self {
            content,
            items: Vec::new(),
            content_height: 0.0,
        }
    }

    /// Resets the content height and adopts every rectangular child already under the content
    /// element, in sibling order. Returns the number of adopted items.
    pub fn adopt_children<B>(&mut self, backend: &mut B) -> usize
    where
        B: LayoutBackend<Handle = H>,
    {
        self.content_height = 0.0;
        self.sync_content_size(backend);

        let mut adopted = 0usize;
        for child in backend.children(self.content) {
            if !backend.is_rect(child) {
                continue;
            }
            if self.add_item(backend, child).is_ok() {
                adopted = adopted.saturating_add(1);
            }
        }

        if adopted == 0 {
            vwarn!(content = ?self.content, "content element has no child elements");
        } else {
            vdebug!(adopted, content_height = self.content_height, "adopted content children");
        }
        adopted
    }

    pub fn content(&self) -> H {
        self.content
    }

    pub fn items(&self) -> &[H] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<H> {
        self.items.get(index).copied()
    }

    pub fn position_of(&self, item: H) -> Option<usize> {
        self.items.iter().position(|&it| it == item)
    }

    pub fn contains(&self, item: H) -> bool {
        self.position_of(item).is_some()
    }

    pub fn content_height(&self) -> f32 {
        self.content_height
    }

    /// Appends `item`, reparents it under the content element and grows the content height.
    ///
    /// Non-rect handles, handles already in the list and the content element itself are rejected
    /// with a warning. So is an item the backend refuses to attach under the content element;
    /// nothing is recorded for it.
    pub fn add_item<B>(&mut self, backend: &mut B, item: H) -> Result<(), SnapError>
    where
        B: LayoutBackend<Handle = H>,
    {
        if !backend.is_rect(item) {
            vwarn!(item = ?item, "item is not a rect layout element");
            return Err(SnapError::NotRect(format!("{item:?}")));
        }
        if item == self.content {
            vwarn!(item = ?item, "the content element can't be listed in itself");
            return Err(SnapError::ReservedItem(format!("{item:?}")));
        }
        if self.contains(item) {
            vwarn!(item = ?item, "item is already in the list");
            return Err(SnapError::DuplicateItem(format!("{item:?}")));
        }

        backend.set_parent(item, Some(self.content));
        if backend.parent(item) != Some(self.content) {
            vwarn!(item = ?item, content = ?self.content, "item was not attached to the content");
            return Err(SnapError::NotAttached(format!("{item:?}")));
        }

        self.content_height += backend.size(item).height;
        self.sync_content_size(backend);
        self.items.push(item);
        vtrace!(item = ?item, len = self.items.len(), "add_item");
        Ok(())
    }

    /// Removes the item at `index`: shrinks the content height, detaches the element and
    /// destroys it when `destroy` is set. Returns the removed handle.
    pub fn remove_item<B>(
        &mut self,
        backend: &mut B,
        index: usize,
        destroy: bool,
    ) -> Result<H, SnapError>
    where
        B: LayoutBackend<Handle = H>,
    {
        let item = self.checked(index)?;

        self.content_height -= backend.size(item).height;
        self.sync_content_size(backend);
        backend.set_parent(item, None);
        if destroy {
            backend.destroy(item);
        }
        self.items.remove(index);
        vtrace!(item = ?item, index, destroy, len = self.items.len(), "remove_item");
        Ok(item)
    }

    /// Removes `item` by handle. Returns the index it occupied.
    pub fn remove_handle<B>(
        &mut self,
        backend: &mut B,
        item: H,
        destroy: bool,
    ) -> Result<usize, SnapError>
    where
        B: LayoutBackend<Handle = H>,
    {
        let index = self.find(item)?;
        self.remove_item(backend, index, destroy)?;
        Ok(index)
    }

    pub(crate) fn checked(&self, index: usize) -> Result<H, SnapError> {
        self.get(index).ok_or_else(|| {
            let len = self.items.len();
            verror!(index, len, "item index out of range");
            SnapError::IndexOutOfRange { index, len }
        })
    }

    pub(crate) fn find(&self, item: H) -> Result<usize, SnapError> {
        self.position_of(item).ok_or_else(|| {
            vwarn!(item = ?item, "item does not exist in the list");
            SnapError::ItemNotFound(format!("{item:?}"))
        })
    }

    fn sync_content_size<B>(&self, backend: &mut B)
    where
        B: LayoutBackend<Handle = H>,
    {
        let width = backend.size(self.content).width;
        backend.set_size(self.content, Size::new(width, self.content_height));
    }
}
