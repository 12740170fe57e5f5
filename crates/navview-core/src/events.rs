#![forbid(unsafe_code)]

//! Event vocabulary shared by the pane state machine and the view facade.
//!
//! Transitions are synchronous, so a single call can emit several events in
//! order (e.g. `PaneOpening` then `PaneOpened`). Callers receive them as a
//! `Vec<NavEvent>` and decide what to surface.

use crate::menu::ItemId;

/// Why a close was requested. Cancellability is decided per reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum CloseReason {
    /// The pane toggle button was invoked.
    UserToggle,
    /// An implicit dismissal gesture (outside tap, Alt+Left, back).
    LightDismiss,
    /// A menu item was selected while the pane overlays content.
    SelectionMade,
    /// The display mode shrank out from under an open pane.
    DisplayModeForced,
}

impl CloseReason {
    /// Whether closing handlers may veto a close with this reason.
    ///
    /// Forced closes still raise `PaneClosing`/`PaneClosed` but never consult
    /// handlers.
    #[must_use]
    pub const fn is_cancellable(self) -> bool {
        !matches!(self, Self::DisplayModeForced)
    }
}

/// A closing handler's verdict. Multiple handlers fold: any veto wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClosePermission {
    Proceed,
    Vetoed,
}

impl ClosePermission {
    /// Combine two verdicts; `Vetoed` is absorbing.
    #[must_use]
    pub const fn and(self, other: Self) -> Self {
        match (self, other) {
            (Self::Proceed, Self::Proceed) => Self::Proceed,
            _ => Self::Vetoed,
        }
    }
}

/// Observable output of the view facade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEvent {
    /// The effective display mode changed.
    DisplayModeChanged(crate::display_mode::DisplayMode),
    /// The pane began opening.
    PaneOpening,
    /// The pane finished opening.
    PaneOpened,
    /// The pane began closing. For cancellable reasons this precedes the
    /// handler consultation; a veto means no matching `PaneClosed` follows.
    PaneClosing {
        reason: CloseReason,
    },
    /// The pane finished closing.
    PaneClosed {
        reason: CloseReason,
    },
    /// The selected item changed (or cleared).
    SelectionChanged(Option<ItemId>),
    /// An item was invoked via gesture.
    ItemInvoked(ItemId),
    /// A back gesture was not consumed by light dismiss.
    BackRequested,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_forced_close_is_uncancellable() {
        assert!(CloseReason::UserToggle.is_cancellable());
        assert!(CloseReason::LightDismiss.is_cancellable());
        assert!(CloseReason::SelectionMade.is_cancellable());
        assert!(!CloseReason::DisplayModeForced.is_cancellable());
    }

    #[test]
    fn veto_is_absorbing() {
        use ClosePermission::*;
        assert_eq!(Proceed.and(Proceed), Proceed);
        assert_eq!(Proceed.and(Vetoed), Vetoed);
        assert_eq!(Vetoed.and(Proceed), Vetoed);
        assert_eq!(Vetoed.and(Vetoed), Vetoed);
    }
}
