#![forbid(unsafe_code)]

//! Pane open/close state machine.
//!
//! # State machine
//!
//! `Closed → Opening → Opened → Closing → Closed`. Transitions run
//! synchronously: a single request emits both edge events (`PaneOpening` then
//! `PaneOpened`, or `PaneClosing` then `PaneClosed`) and leaves the machine in
//! a resting state. `Opening`/`Closing` are observable only through the event
//! stream, never as a resting [`PaneState`].
//!
//! # Invariants
//!
//! 1. A close request while `Closed` is a no-op: no events, no state change.
//! 2. An open request while `Opened` is a no-op.
//! 3. A vetoed close leaves the machine `Opened`; `PaneClosing` fired but no
//!    `PaneClosed` follows.
//! 4. Closes with a non-cancellable [`CloseReason`] never consult the gate.

use crate::events::{ClosePermission, CloseReason, NavEvent};

/// Resting (and transient) pane states.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum PaneState {
    #[default]
    Closed,
    Opening,
    Opened,
    Closing,
}

impl PaneState {
    /// Status label matching the host's observable text.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Closed => "Closed",
            Self::Opening => "Opening",
            Self::Opened => "Opened",
            Self::Closing => "Closing",
        }
    }
}

/// Outcome of a close request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseOutcome {
    /// The pane closed.
    Closed,
    /// A closing handler vetoed; the pane stays open.
    Vetoed,
    /// The pane was already closed; nothing happened.
    AlreadyClosed,
}

/// The pane open/close state machine.
///
/// The machine owns no handlers itself; close requests take a `gate` the
/// caller builds by folding its registered closing handlers (any veto wins).
#[derive(Debug, Default)]
pub struct PaneController {
    state: PaneState,
    // Set when the user explicitly closed the pane; blocks auto-reopen on
    // entering Expanded until the user opens it again.
    explicitly_closed: bool,
}

impl PaneController {
    /// Create a controller in the `Closed` state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current resting state.
    #[must_use]
    pub const fn state(&self) -> PaneState {
        self.state
    }

    /// Whether the pane is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self.state, PaneState::Opened)
    }

    /// Whether the user explicitly closed the pane (blocks auto-reopen).
    #[must_use]
    pub const fn is_explicitly_closed(&self) -> bool {
        self.explicitly_closed
    }

    /// Record that the user explicitly closed (or reopened) the pane.
    pub fn set_explicitly_closed(&mut self, value: bool) {
        self.explicitly_closed = value;
    }

    /// Open the pane. No-op when already open.
    ///
    /// Returns `true` if the state changed; events are appended to `events`.
    pub fn request_open(&mut self, events: &mut Vec<NavEvent>) -> bool {
        if self.is_open() {
            return false;
        }
        self.state = PaneState::Opening;
        events.push(NavEvent::PaneOpening);
        self.state = PaneState::Opened;
        events.push(NavEvent::PaneOpened);
        #[cfg(feature = "tracing")]
        Self::log_transition("open", self.state);
        true
    }

    /// Close the pane for `reason`. Idempotent when already closed.
    ///
    /// For cancellable reasons the `gate` is consulted after `PaneClosing`
    /// is emitted; a veto reverts to `Opened` and suppresses `PaneClosed`.
    pub fn request_close(
        &mut self,
        reason: CloseReason,
        gate: &mut dyn FnMut(CloseReason) -> ClosePermission,
        events: &mut Vec<NavEvent>,
    ) -> CloseOutcome {
        if matches!(self.state, PaneState::Closed) {
            return CloseOutcome::AlreadyClosed;
        }
        self.state = PaneState::Closing;
        events.push(NavEvent::PaneClosing { reason });
        if reason.is_cancellable() && gate(reason) == ClosePermission::Vetoed {
            self.state = PaneState::Opened;
            #[cfg(feature = "tracing")]
            Self::log_veto(reason);
            return CloseOutcome::Vetoed;
        }
        self.state = PaneState::Closed;
        events.push(NavEvent::PaneClosed { reason });
        #[cfg(feature = "tracing")]
        Self::log_transition("close", self.state);
        CloseOutcome::Closed
    }

    #[cfg(feature = "tracing")]
    fn log_transition(action: &str, state: PaneState) {
        tracing::debug!(message = "pane.transition", action, state = state.as_str());
    }

    #[cfg(feature = "tracing")]
    fn log_veto(reason: CloseReason) {
        tracing::debug!(message = "pane.close_vetoed", reason = ?reason);
    }
}
