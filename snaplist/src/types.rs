use crate::BorderOffsets;

/// A point in the shared (world) coordinate space. `y` grows upwards.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl core::ops::Add for Vec2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl core::ops::Sub for Vec2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// The window, in viewport space, inside which a snap target moves with the scroll.
///
/// Positions are element centers. `upper` is where an item scrolling up gets pinned, `lower`
/// is where an item scrolling down gets pinned.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Borders {
    pub upper: f32,
    pub lower: f32,
}

impl Borders {
    /// Computes borders for an item of `item_height` inside a viewport centered at `viewport_y`.
    ///
    /// When the item plus both offsets is taller than the viewport the borders come out inverted
    /// (`upper < lower`) and every position counts as crossed.
    pub fn compute(
        viewport_y: f32,
        viewport_height: f32,
        item_height: f32,
        offsets: BorderOffsets,
    ) -> Self {
        let half_view = viewport_height / 2.0;
        let half_item = item_height / 2.0;
        Self {
            upper: viewport_y + half_view - half_item - offsets.upper,
            lower: viewport_y - half_view + half_item + offsets.lower,
        }
    }

    /// Returns the border `y` has crossed, if any.
    ///
    /// Lower wins over upper, so inverted borders still resolve to a single value.
    pub fn crossed(&self, y: f32) -> Option<f32> {
        if y < self.lower {
            Some(self.lower)
        } else if y > self.upper {
            Some(self.upper)
        } else {
            None
        }
    }

    /// Open-interval test: `lower < y < upper`.
    pub fn contains(&self, y: f32) -> bool {
        y > self.lower && y < self.upper
    }

    pub fn is_inverted(&self) -> bool {
        self.upper < self.lower
    }
}

/// Which element currently owns the snap target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Owner {
    /// The item sits in the content flow and scrolls with it.
    Content,
    /// The item hangs off the viewport and is held at a border.
    Viewport,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SnapPhase {
    #[default]
    Idle,
    Pinned,
}

impl SnapPhase {
    pub fn owner(self) -> Owner {
        match self {
            Self::Idle => Owner::Content,
            Self::Pinned => Owner::Viewport,
        }
    }

    pub fn is_pinned(self) -> bool {
        self == Self::Pinned
    }
}
