//! Adapter utilities for the `snaplist` crate.
//!
//! The `snaplist` crate is UI-agnostic and only talks to a [`snaplist::LayoutBackend`]. This
//! crate provides small, framework-neutral pieces an adapter needs around it:
//!
//! - [`Scene`]: an in-memory retained element tree implementing `LayoutBackend`
//! - [`ScrollView`]: a vertical scroll container living in a scene
//! - [`Controller`]: owns all three and forwards scroll changes to the snap list
//!
//! This crate is intentionally framework-agnostic (no ratatui/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod scene;
mod scroll;

#[cfg(test)]
mod tests;

pub use controller::Controller;
pub use scene::{NodeId, Scene};
pub use scroll::{ScrollView, ScrollViewOptions};
