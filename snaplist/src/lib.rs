//! A headless snap list.
//!
//! A snap list is a vertically stacked, scrollable list of variable-height items in which one
//! item can be pinned: once it scrolls past an upper or lower border it is held at that border
//! while the rest of the list keeps scrolling, and it drops back into the flow when its slot
//! scrolls back between the borders.
//!
//! For an in-memory scene and scroll view to drive it with, see the `snaplist-adapter` crate.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - a [`LayoutBackend`] for the rectangular elements (position, size, parent, sibling order)
//! - the viewport and content elements of its scroll container
//! - scroll-changed notifications, forwarded to [`SnapList::on_scroll`]
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod error;
mod layout;
mod options;
mod registry;
mod snap_list;
mod state;
mod types;


pub use error::{ErrorKind, SnapError};
pub use layout::LayoutBackend;
pub use options::{BORDER_OFFSET_MAX, BorderOffsets, SnapListOptions};
pub use registry::ItemRegistry;
pub use snap_list::SnapList;
pub use state::SnapState;
pub use types::{Borders, Owner, Size, SnapPhase, Vec2};
