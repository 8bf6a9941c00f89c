/// Largest accepted border offset.
pub const BORDER_OFFSET_MAX: f32 = 50.0;

fn clamp_offset(value: f32) -> f32 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, BORDER_OFFSET_MAX)
}

/// Soft margins pulling the borders inward from the viewport edges.
///
/// Both values live in `[0, BORDER_OFFSET_MAX]`; constructors clamp out-of-range input.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BorderOffsets {
    pub upper: f32,
    pub lower: f32,
}

impl BorderOffsets {
    pub fn new(upper: f32, lower: f32) -> Self {
        Self {
            upper: clamp_offset(upper),
            lower: clamp_offset(lower),
        }
    }

    /// Re-applies the `[0, BORDER_OFFSET_MAX]` range, e.g. after deserializing.
    pub fn clamped(self) -> Self {
        Self::new(self.upper, self.lower)
    }
}

/// Configuration for [`crate::SnapList`].
///
/// `viewport` is the scroll container's root element: its position and size feed the border
/// math and it becomes the parent of the pinned item. `content` is the element holding the
/// items in flow order.
#[derive(Clone, Debug)]
pub struct SnapListOptions<H> {
    pub viewport: H,
    pub content: H,
    pub offsets: BorderOffsets,
    /// Name given to the placeholder element when it is created.
    pub placeholder_name: &'static str,
}

impl<H> SnapListOptions<H> {
    pub fn new(viewport: H, content: H) -> Self {
        Self {
            viewport,
            content,
            offsets: BorderOffsets::default(),
            placeholder_name: "Holder",
        }
    }

    pub fn with_offsets(mut self, offsets: BorderOffsets) -> Self {
        let clamped = offsets.clamped();
        if clamped != offsets {
            vwarn!(
                upper = offsets.upper,
                lower = offsets.lower,
                "border offsets out of range, clamping"
            );
        }
        self.offsets = clamped;
        self
    }

    pub fn with_upper_offset(self, upper: f32) -> Self {
        let lower = self.offsets.lower;
        self.with_offsets(BorderOffsets { upper, lower })
    }

    pub fn with_lower_offset(self, lower: f32) -> Self {
        let upper = self.offsets.upper;
        self.with_offsets(BorderOffsets { upper, lower })
    }

    pub fn with_placeholder_name(mut self, name: &'static str) -> Self {
        self.placeholder_name = name;
        self
    }

    pub fn offsets(&self) -> BorderOffsets {
        self.offsets
    }
}
