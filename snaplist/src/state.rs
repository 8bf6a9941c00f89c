use crate::{Borders, SnapPhase};

/// A lightweight, serializable snapshot of the snap state machine.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SnapState {
    /// Registry index of the snap target, `None` until the first successful `snap`.
    pub index: Option<usize>,
    pub phase: SnapPhase,
    /// Borders derived by the last `snap` (or `refresh`).
    pub borders: Option<Borders>,
}

impl SnapState {
    pub fn is_pinned(&self) -> bool {
        self.phase.is_pinned()
    }
}
