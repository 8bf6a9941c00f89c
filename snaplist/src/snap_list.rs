use alloc::format;
use alloc::string::ToString;
use core::fmt;

use crate::{
    Borders, ItemRegistry, LayoutBackend, Owner, SnapError, SnapListOptions, SnapPhase,
    SnapState, Vec2,
};

/// A list in which one item can be pinned while the rest keeps scrolling.
///
/// The snap list does not own any UI objects beyond handles: every operation receives the
/// [`LayoutBackend`] that owns the elements. Your adapter drives it by:
/// - calling [`SnapList::snap`] to choose the target;
/// - calling [`SnapList::on_scroll`] whenever the scroll position changes.
///
/// While the target's flow position stays strictly between the borders it scrolls normally.
/// Once it crosses a border the item is moved under the viewport and held at that border, and a
/// placeholder of the same size takes its slot in the content flow. When the placeholder
/// scrolls back inside the borders the two swap back.
#[derive(Clone, Debug)]
pub struct SnapList<H> {
    options: SnapListOptions<H>,
    registry: ItemRegistry<H>,
    placeholder: H,
    target: Option<usize>,
    phase: SnapPhase,
    borders: Borders,
}

impl<H: Copy + Eq + fmt::Debug> SnapList<H> {
    /// Creates a snap list over the children already under `options.content`.
    ///
    /// This is the only initialization step: the content height is reset, existing children are
    /// adopted in sibling order and the placeholder is created under the viewport.
    ///
    /// `options.offsets` is clamped into `[0, BORDER_OFFSET_MAX]` here as well, so offsets set
    /// through the public fields or deserialized ones are bounded too.
    ///
    /// [`BORDER_OFFSET_MAX`]: crate::BORDER_OFFSET_MAX
    pub fn new<B>(backend: &mut B, mut options: SnapListOptions<H>) -> Self
    where
        B: LayoutBackend<Handle = H>,
    {
        let offsets = options.offsets.clamped();
        if offsets != options.offsets {
            vwarn!(
                upper = options.offsets.upper,
                lower = options.offsets.lower,
                "border offsets out of range, clamping"
            );
            options.offsets = offsets;
        }

        let mut registry = ItemRegistry::new(options.content);
        registry.adopt_children(backend);

        let placeholder = backend.create_rect(options.placeholder_name);
        backend.set_parent(placeholder, Some(options.viewport));

        vdebug!(
            items = registry.len(),
            upper_offset = options.offsets.upper,
            lower_offset = options.offsets.lower,
            "SnapList::new"
        );
        Self {
            options,
            registry,
            placeholder,
            target: None,
            phase: SnapPhase::Idle,
            borders: Borders::default(),
        }
    }

    pub fn options(&self) -> &SnapListOptions<H> {
        &self.options
    }

    pub fn registry(&self) -> &ItemRegistry<H> {
        &self.registry
    }

    pub fn items(&self) -> &[H] {
        self.registry.items()
    }

    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    pub fn content_height(&self) -> f32 {
        self.registry.content_height()
    }

    pub fn placeholder(&self) -> H {
        self.placeholder
    }

    pub fn phase(&self) -> SnapPhase {
        self.phase
    }

    pub fn is_pinned(&self) -> bool {
        self.phase.is_pinned()
    }

    /// Who owns the snap target right now, `None` without a target.
    pub fn owner(&self) -> Option<Owner> {
        self.target.map(|_| self.phase.owner())
    }

    pub fn snap_index(&self) -> Option<usize> {
        self.target
    }

    pub fn snap_item(&self) -> Option<H> {
        self.target.and_then(|index| self.registry.get(index))
    }

    /// The item currently held at a border, `None` while idle.
    pub fn pinned_item(&self) -> Option<H> {
        if self.phase.is_pinned() {
            self.snap_item()
        } else {
            None
        }
    }

    pub fn borders(&self) -> Option<Borders> {
        self.target.map(|_| self.borders)
    }

    pub fn state(&self) -> SnapState {
        SnapState {
            index: self.target,
            phase: self.phase,
            borders: self.borders(),
        }
    }

    /// Makes the item at `index` the snap target.
    ///
    /// A previous pin is released first. Borders are derived from the current viewport geometry
    /// and the target's size, then the border test runs once, so the item may be pinned right
    /// away.
    ///
    /// Negative indexes are rejected with [`SnapError::NegativeIndex`]; indexes past the end with
    /// [`SnapError::IndexOutOfRange`]. Neither changes any state.
    pub fn snap<B>(&mut self, backend: &mut B, index: isize) -> Result<(), SnapError>
    where
        B: LayoutBackend<Handle = H>,
    {
        let Ok(index) = usize::try_from(index) else {
            vwarn!(index, "snap index can't be less than zero");
            return Err(SnapError::NegativeIndex(index));
        };
        let item = self.registry.checked(index)?;

        if self.phase.is_pinned() {
            self.unpin(backend);
        }

        self.target = Some(index);
        let size = backend.size(item);
        backend.set_size(self.placeholder, size);
        self.calculate_borders(backend);
        vdebug!(
            index,
            item = ?item,
            upper = self.borders.upper,
            lower = self.borders.lower,
            "snap"
        );

        self.update(backend);
        Ok(())
    }

    /// Parses `text` as an index and delegates to [`SnapList::snap`].
    pub fn snap_str<B>(&mut self, backend: &mut B, text: &str) -> Result<(), SnapError>
    where
        B: LayoutBackend<Handle = H>,
    {
        let index = text.trim().parse::<isize>().map_err(|source| {
            vwarn!(text, error = %source, "snap index is not an integer");
            SnapError::Parse {
                text: text.to_string(),
                source,
            }
        })?;
        self.snap(backend, index)
    }

    /// Call this when the scroll container reports a new scroll position.
    ///
    /// `normalized` is the container's normalized scroll value; it is only logged.
    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    pub fn on_scroll<B>(&mut self, backend: &mut B, normalized: f32)
    where
        B: LayoutBackend<Handle = H>,
    {
        vtrace!(normalized, "on_scroll");
        self.update(backend);
    }

    /// Re-derives the borders from the current viewport geometry and target size, then runs the
    /// border test. Use this after the viewport was moved or resized.
    pub fn refresh<B>(&mut self, backend: &mut B)
    where
        B: LayoutBackend<Handle = H>,
    {
        let Some(item) = self.snap_item() else {
            return;
        };
        let size = backend.size(item);
        backend.set_size(self.placeholder, size);
        self.calculate_borders(backend);
        self.update(backend);
    }

    /// Appends `item` to the list (see [`ItemRegistry::add_item`]).
    ///
    /// The placeholder, the viewport and the content element are rejected with
    /// [`SnapError::ReservedItem`].
    pub fn add_item<B>(&mut self, backend: &mut B, item: H) -> Result<(), SnapError>
    where
        B: LayoutBackend<Handle = H>,
    {
        let reserved = [self.placeholder, self.options.viewport, self.options.content];
        if reserved.contains(&item) {
            vwarn!(item = ?item, "placeholder, viewport and content can't be added to the list");
            return Err(SnapError::ReservedItem(format!("{item:?}")));
        }
        self.registry.add_item(backend, item)
    }

    /// Removes the item at `index` (see [`ItemRegistry::remove_item`]).
    ///
    /// Removing the snap target releases its pin and clears the target. Removing an item in
    /// front of the target keeps the same item targeted.
    pub fn remove_item<B>(
        &mut self,
        backend: &mut B,
        index: usize,
        destroy: bool,
    ) -> Result<H, SnapError>
    where
        B: LayoutBackend<Handle = H>,
    {
        self.registry.checked(index)?;
        self.release_for_removal(backend, index);
        self.registry.remove_item(backend, index, destroy)
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
        let index = self.registry.find(item)?;
        self.remove_item(backend, index, destroy)?;
        Ok(index)
    }

    fn release_for_removal<B>(&mut self, backend: &mut B, index: usize)
    where
        B: LayoutBackend<Handle = H>,
    {
        let Some(target) = self.target else {
            return;
        };
        if index == target {
            if self.phase.is_pinned() {
                self.unpin(backend);
            }
            self.target = None;
            self.borders = Borders::default();
            vdebug!(index, "snap target removed");
        } else if index < target {
            self.target = Some(target - 1);
        }
    }

    fn calculate_borders<B>(&mut self, backend: &B)
    where
        B: LayoutBackend<Handle = H>,
    {
        let position = backend.position(self.options.viewport);
        let size = backend.size(self.options.viewport);
        let holder = backend.size(self.placeholder);
        self.borders =
            Borders::compute(position.y, size.height, holder.height, self.options.offsets);
        vtrace!(
            upper = self.borders.upper,
            lower = self.borders.lower,
            inverted = self.borders.is_inverted(),
            "calculate_borders"
        );
    }

    /// The border test.
    ///
    /// The tracked position is the target's slot in the flow: the item itself while idle, the
    /// placeholder while pinned.
    fn update<B>(&mut self, backend: &mut B)
    where
        B: LayoutBackend<Handle = H>,
    {
        let Some(item) = self.snap_item() else {
            return;
        };
        let tracked = match self.phase {
            SnapPhase::Idle => backend.position(item),
            SnapPhase::Pinned => backend.position(self.placeholder),
        };

        if let Some(border) = self.borders.crossed(tracked.y) {
            let pin_at = Vec2::new(tracked.x, border);
            match self.phase {
                SnapPhase::Idle => self.pin(backend, item, pin_at),
                SnapPhase::Pinned => {
                    if backend.position(item) != pin_at {
                        backend.set_position(item, pin_at);
                    }
                }
            }
        } else if self.phase.is_pinned() && self.borders.contains(tracked.y) {
            self.unpin(backend);
        }
    }

    /// `Idle -> Pinned`: the placeholder takes the item's slot, the item moves under the
    /// viewport and is held at `pin_at`.
    fn pin<B>(&mut self, backend: &mut B, item: H, pin_at: Vec2)
    where
        B: LayoutBackend<Handle = H>,
    {
        let slot = backend.sibling_index(item);
        let slot_position = backend.position(item);
        let viewport = backend.parent(self.placeholder);

        backend.set_parent(item, viewport);
        backend.set_parent(self.placeholder, Some(self.options.content));
        backend.set_sibling_index(self.placeholder, slot);

        backend.set_position(self.placeholder, slot_position);
        backend.set_position(item, pin_at);

        self.phase = SnapPhase::Pinned;
        vdebug!(item = ?item, slot, y = pin_at.y, "pin");
    }

    /// `Pinned -> Idle`: the item returns to the placeholder's slot and position.
    fn unpin<B>(&mut self, backend: &mut B)
    where
        B: LayoutBackend<Handle = H>,
    {
        self.phase = SnapPhase::Idle;
        let Some(item) = self.snap_item() else {
            return;
        };

        let slot = backend.sibling_index(self.placeholder);
        let slot_position = backend.position(self.placeholder);
        let viewport = backend.parent(item);

        backend.set_parent(self.placeholder, viewport);
        backend.set_parent(item, Some(self.options.content));
        backend.set_sibling_index(item, slot);
        backend.set_position(item, slot_position);

        vdebug!(item = ?item, slot, y = slot_position.y, "unpin");
    }
}
