#![forbid(unsafe_code)]

//! View facade: owns the configuration, the pane state machine, and the menu
//! model, and recomputes the effective display mode on every input change.
//!
//! Every mutating operation returns the [`NavEvent`]s it emitted, in order.
//! All recomputation is synchronous; there is no queue and no deferred work.
//!
//! # Pane policy
//!
//! Applied when the effective display mode *changes*, and reapplied on any
//! pane-intent change even if the resolved mode stays put:
//!
//! - entering `Expanded`: auto-open the pane unless the user explicitly
//!   closed it earlier,
//! - leaving `Expanded` for `Minimal`/`Compact` with the pane open:
//!   force-close (`DisplayModeForced`, never vetoable).
//!
//! A pane the user opened as an overlay (e.g. in `Minimal`) stays open until
//! a gesture, a display-mode change, or a switch to `Top` closes it.

use crate::display_mode::{
    BackButtonVisible, DisplayMode, PaneDisplayMode, PaneLengths, VisualStateDisplayMode,
    WidthThresholds, resolve, visual_state,
};
use crate::events::{ClosePermission, CloseReason, NavEvent};
use crate::menu::{ItemId, MenuItem, MenuItems};
use crate::pane::{CloseOutcome, PaneController, PaneState};

/// User-gesture signals routed into the facade by the host's input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    /// The pane toggle button was invoked.
    ToggleInvoked,
    /// Alt+Left pressed.
    AltLeft,
    /// Back navigation requested (hardware/system back).
    Back,
    /// Tap or click outside the pane.
    OutsideTap,
    /// A menu item was invoked.
    ItemInvoked(ItemId),
}

type ClosingHandler = Box<dyn FnMut(CloseReason) -> ClosePermission>;

/// The NavView model.
///
/// Construction leaves the pane `Closed`, the width at `0.0`, and the
/// display mode at `Minimal` (the adaptive result for zero width under the
/// default thresholds).
#[derive(Default)]
pub struct NavView {
    pane_display_mode: PaneDisplayMode,
    thresholds: WidthThresholds,
    pane_lengths: PaneLengths,
    pane_title: String,
    back_button_visible: BackButtonVisible,
    width: f64,
    display_mode: Option<DisplayMode>,
    pane: PaneController,
    items: MenuItems,
    selected: Option<ItemId>,
    closing_handlers: Vec<ClosingHandler>,
}

impl NavView {
    /// Create a view with default configuration.
    #[must_use]
    pub fn new() -> Self {
        let mut view = Self::default();
        let mut events = Vec::new();
        view.recompute(&mut events, false);
        view
    }

    // -----------------------------------------------------------------------
    // Observable state
    // -----------------------------------------------------------------------

    /// Effective display mode.
    #[must_use]
    pub fn display_mode(&self) -> DisplayMode {
        // Set by the constructor's recompute; the Option only exists so the
        // first resolution registers as a change.
        self.display_mode.unwrap_or(DisplayMode::Minimal)
    }

    /// Configured pane intent.
    #[must_use]
    pub const fn pane_display_mode(&self) -> PaneDisplayMode {
        self.pane_display_mode
    }

    /// Whether the pane is open.
    #[must_use]
    pub const fn is_pane_open(&self) -> bool {
        self.pane.is_open()
    }

    /// Resting pane state.
    #[must_use]
    pub const fn pane_state(&self) -> PaneState {
        self.pane.state()
    }

    /// Measured control width.
    #[must_use]
    pub const fn width(&self) -> f64 {
        self.width
    }

    /// Adaptive width thresholds.
    #[must_use]
    pub const fn thresholds(&self) -> &WidthThresholds {
        &self.thresholds
    }

    /// Compact/open pane lengths.
    #[must_use]
    pub const fn pane_lengths(&self) -> &PaneLengths {
        &self.pane_lengths
    }

    /// Pane title text.
    #[must_use]
    pub fn pane_title(&self) -> &str {
        &self.pane_title
    }

    /// Back-button visibility intent.
    #[must_use]
    pub const fn back_button_visible(&self) -> BackButtonVisible {
        self.back_button_visible
    }

    /// Currently selected item, if any.
    #[must_use]
    pub const fn selected(&self) -> Option<ItemId> {
        self.selected
    }

    /// Selected item resolved against the collection.
    #[must_use]
    pub fn selected_item(&self) -> Option<&MenuItem> {
        self.items.get(self.selected?)
    }

    /// Menu items in display order.
    #[must_use]
    pub const fn items(&self) -> &MenuItems {
        &self.items
    }

    /// Whether an implicit gesture may close the pane: only overlay layouts
    /// (anything but `Expanded`) are light-dismissible.
    #[must_use]
    pub fn is_light_dismissible(&self) -> bool {
        self.display_mode() != DisplayMode::Expanded
    }

    /// Whether the host should show the chrome back button. Suppressed while
    /// the pane overlays the content in `Minimal`.
    #[must_use]
    pub fn should_show_back_button(&self) -> bool {
        if self.display_mode() == DisplayMode::Minimal && self.is_pane_open() {
            return false;
        }
        match self.back_button_visible {
            BackButtonVisible::Visible | BackButtonVisible::Auto => true,
            BackButtonVisible::Collapsed => false,
        }
    }

    /// Visual-state group for the host's state manager.
    #[must_use]
    pub fn visual_state(&self) -> VisualStateDisplayMode {
        visual_state(
            self.pane_display_mode,
            self.display_mode(),
            self.should_show_back_button(),
        )
    }

    // -----------------------------------------------------------------------
    // Configuration writes
    // -----------------------------------------------------------------------

    /// Set the measured width and recompute.
    pub fn set_width(&mut self, width: f64) -> Vec<NavEvent> {
        let mut events = Vec::new();
        self.width = width;
        self.recompute(&mut events, false);
        events
    }

    /// Set the configured pane intent and recompute.
    pub fn set_pane_display_mode(&mut self, mode: PaneDisplayMode) -> Vec<NavEvent> {
        let mut events = Vec::new();
        if self.pane_display_mode != mode {
            self.pane_display_mode = mode;
            #[cfg(feature = "tracing")]
            tracing::debug!(message = "navview.pane_display_mode", mode = ?mode);
            self.recompute(&mut events, true);
        }
        events
    }

    /// Set the compact threshold (negative coerces to `0.0`) and recompute.
    pub fn set_compact_threshold(&mut self, value: f64) -> Vec<NavEvent> {
        let mut events = Vec::new();
        self.thresholds.set_compact(value);
        self.recompute(&mut events, false);
        events
    }

    /// Set the expanded threshold (negative coerces to `0.0`) and recompute.
    pub fn set_expanded_threshold(&mut self, value: f64) -> Vec<NavEvent> {
        let mut events = Vec::new();
        self.thresholds.set_expanded(value);
        self.recompute(&mut events, false);
        events
    }

    /// Set the compact rail width (negative coerces to `0.0`).
    pub fn set_compact_pane_length(&mut self, value: f64) {
        self.pane_lengths.set_compact(value);
    }

    /// Set the open pane width (negative coerces to `0.0`).
    pub fn set_open_pane_length(&mut self, value: f64) {
        self.pane_lengths.set_open(value);
    }

    /// Set the pane title.
    pub fn set_pane_title(&mut self, title: impl Into<String>) {
        self.pane_title = title.into();
    }

    /// Set the back-button visibility intent.
    pub fn set_back_button_visible(&mut self, visible: BackButtonVisible) {
        self.back_button_visible = visible;
    }

    /// Write the `IsPaneOpen` observable. Opening clears the explicit-close
    /// mark; closing runs the cancellable `UserToggle` protocol, so a veto
    /// leaves the value unchanged. The top strip has no pane surface, so
    /// open requests are ignored in `Top` mode.
    pub fn set_is_pane_open(&mut self, open: bool) -> Vec<NavEvent> {
        let mut events = Vec::new();
        if open {
            if self.pane_display_mode.is_left() {
                self.pane.set_explicitly_closed(false);
                self.pane.request_open(&mut events);
            }
        } else {
            self.close_pane(CloseReason::UserToggle, &mut events);
        }
        events
    }

    /// Register a closing handler. Handlers run for every cancellable close;
    /// any veto wins.
    pub fn on_pane_closing(
        &mut self,
        handler: impl FnMut(CloseReason) -> ClosePermission + 'static,
    ) {
        self.closing_handlers.push(Box::new(handler));
    }

    // -----------------------------------------------------------------------
    // Menu + selection
    // -----------------------------------------------------------------------

    /// Append a menu item.
    pub fn push_item(&mut self, label: impl Into<String>) -> ItemId {
        self.items.push(label)
    }

    /// Append a tagged menu item.
    pub fn push_item_tagged(&mut self, label: impl Into<String>, tag: impl Into<String>) -> ItemId {
        self.items.push_tagged(label, tag)
    }

    /// Insert a menu item at `index` (clamped).
    pub fn insert_item(&mut self, index: usize, label: impl Into<String>) -> ItemId {
        self.items.insert(index, label)
    }

    /// Remove a menu item. If it was selected, selection clears and a
    /// `SelectionChanged(None)` fires; other items are untouched.
    pub fn remove_item(&mut self, id: ItemId) -> Vec<NavEvent> {
        let mut events = Vec::new();
        if self.items.remove(id).is_some() && self.selected == Some(id) {
            self.selected = None;
            events.push(NavEvent::SelectionChanged(None));
        }
        events
    }

    /// Remove every menu item; selection clears if it was set.
    pub fn clear_items(&mut self) -> Vec<NavEvent> {
        let mut events = Vec::new();
        self.items.clear();
        if self.selected.take().is_some() {
            events.push(NavEvent::SelectionChanged(None));
        }
        events
    }

    /// Set the selected item. An id absent from the collection resolves to
    /// no selection rather than an error. Selecting an item while the pane
    /// overlays content closes the pane (cancellable).
    pub fn set_selected(&mut self, id: Option<ItemId>) -> Vec<NavEvent> {
        let mut events = Vec::new();
        self.apply_selection(id, &mut events);
        events
    }

    // -----------------------------------------------------------------------
    // Gestures
    // -----------------------------------------------------------------------

    /// Route a user gesture.
    pub fn handle_gesture(&mut self, gesture: Gesture) -> Vec<NavEvent> {
        let mut events = Vec::new();
        match gesture {
            Gesture::ToggleInvoked => {
                if self.pane.is_open() {
                    if self.close_pane(CloseReason::UserToggle, &mut events)
                        == CloseOutcome::Closed
                    {
                        self.pane.set_explicitly_closed(true);
                    }
                } else if self.pane_display_mode.is_left() {
                    self.pane.set_explicitly_closed(false);
                    self.pane.request_open(&mut events);
                }
            }
            Gesture::AltLeft | Gesture::OutsideTap => {
                self.light_dismiss(&mut events);
            }
            Gesture::Back => {
                // A dismissible open pane consumes back; otherwise the host
                // gets a navigation request.
                if !self.light_dismiss(&mut events) {
                    events.push(NavEvent::BackRequested);
                }
            }
            Gesture::ItemInvoked(id) => {
                if self.items.contains(id) {
                    events.push(NavEvent::ItemInvoked(id));
                }
                self.apply_selection(Some(id), &mut events);
            }
        }
        events
    }

    // -----------------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------------

    /// Attempt a light dismiss. Returns `true` when the gesture was consumed
    /// by the pane (including a vetoed close).
    fn light_dismiss(&mut self, events: &mut Vec<NavEvent>) -> bool {
        if !self.pane.is_open() || !self.is_light_dismissible() {
            return false;
        }
        self.close_pane(CloseReason::LightDismiss, events);
        true
    }

    fn apply_selection(&mut self, id: Option<ItemId>, events: &mut Vec<NavEvent>) {
        let resolved = id.filter(|id| self.items.contains(*id));
        if resolved != self.selected {
            self.selected = resolved;
            events.push(NavEvent::SelectionChanged(resolved));
            #[cfg(feature = "tracing")]
            tracing::debug!(message = "navview.selection", selected = ?resolved);
        }
        // Navigation implies dismissal in overlay layouts.
        if resolved.is_some() && self.pane.is_open() && self.display_mode() != DisplayMode::Expanded
        {
            self.close_pane(CloseReason::SelectionMade, events);
        }
    }

    fn close_pane(&mut self, reason: CloseReason, events: &mut Vec<NavEvent>) -> CloseOutcome {
        let handlers = &mut self.closing_handlers;
        let mut gate = |reason: CloseReason| {
            handlers
                .iter_mut()
                .fold(ClosePermission::Proceed, |acc, handler| {
                    acc.and(handler(reason))
                })
        };
        self.pane.request_close(reason, &mut gate, events)
    }

    /// Resolve the display mode and apply the pane policy.
    ///
    /// The policy normally runs only when the resolved mode changes, so
    /// resizing within a band leaves a user-opened overlay alone. A pane
    /// intent change (`force_policy`) reapplies it even for an unchanged
    /// mode: switching to `Top` while an overlay pane is open in `Minimal`
    /// must still close it, since the top strip has no pane surface.
    fn recompute(&mut self, events: &mut Vec<NavEvent>, force_policy: bool) {
        let next = resolve(self.pane_display_mode, self.width, &self.thresholds);
        let changed = self.display_mode != Some(next);
        if changed {
            self.display_mode = Some(next);
            events.push(NavEvent::DisplayModeChanged(next));
            #[cfg(feature = "tracing")]
            tracing::debug!(message = "navview.display_mode", mode = next.as_str());
        }
        if !changed && !force_policy {
            return;
        }

        match next {
            DisplayMode::Expanded => {
                if !self.pane.is_explicitly_closed() {
                    self.pane.request_open(events);
                }
            }
            DisplayMode::Minimal | DisplayMode::Compact => {
                if self.pane.is_open() {
                    self.close_pane(CloseReason::DisplayModeForced, events);
                }
            }
        }
    }
}
