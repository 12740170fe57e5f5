#![forbid(unsafe_code)]

//! Scripted test host for the NavView state machine.
//!
//! [`TestHost`] plays the role the live test page plays for the real control:
//! it applies named width and threshold presets, routes gestures, records
//! every emitted event in order, and exposes the observable state as the
//! plain status strings the scenarios assert on. Scenario scripts never touch
//! the model directly; everything flows through the host so the event log is
//! complete.

use std::cell::Cell;
use std::rc::Rc;

use navview_core::{
    BackButtonVisible, ClosePermission, CloseReason, Gesture, ItemId, NavEvent, NavView,
    PaneDisplayMode,
};

/// Named control widths matching the interaction scenarios.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlWidth {
    Narrow,
    Medium,
    Wide,
}

impl ControlWidth {
    /// Width in device-independent pixels.
    #[must_use]
    pub const fn pixels(self) -> f64 {
        match self {
            Self::Narrow => 400.0,
            Self::Medium => 800.0,
            Self::Wide => 1200.0,
        }
    }
}

/// Named threshold presets. `Low` sits between Narrow and Medium, `High`
/// between Medium and Wide, so every preset pair partitions the named widths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThresholdPreset {
    Low,
    High,
}

impl ThresholdPreset {
    /// Threshold value in device-independent pixels.
    #[must_use]
    pub const fn pixels(self) -> f64 {
        match self {
            Self::Low => 600.0,
            Self::High => 1000.0,
        }
    }
}

/// Ordered record of emitted events with query helpers.
#[derive(Debug, Default)]
pub struct EventLog {
    events: Vec<NavEvent>,
}

impl EventLog {
    fn record(&mut self, batch: Vec<NavEvent>) {
        for event in &batch {
            tracing::debug!(message = "harness.event", event = ?event);
        }
        self.events.extend(batch);
    }

    /// All recorded events in emission order.
    #[must_use]
    pub fn events(&self) -> &[NavEvent] {
        &self.events
    }

    /// Most recent event, if any.
    #[must_use]
    pub fn last(&self) -> Option<&NavEvent> {
        self.events.last()
    }

    /// Number of `PaneClosing` events recorded.
    #[must_use]
    pub fn closing_count(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, NavEvent::PaneClosing { .. }))
            .count()
    }

    /// Number of `PaneClosed` events recorded.
    #[must_use]
    pub fn closed_count(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, NavEvent::PaneClosed { .. }))
            .count()
    }

    /// Number of `PaneOpened` events recorded.
    #[must_use]
    pub fn opened_count(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, NavEvent::PaneOpened))
            .count()
    }

    /// Reason of the most recent `PaneClosed`, if any.
    #[must_use]
    pub fn last_close_reason(&self) -> Option<CloseReason> {
        self.events.iter().rev().find_map(|event| match event {
            NavEvent::PaneClosed { reason } => Some(*reason),
            _ => None,
        })
    }

    /// Forget everything recorded so far.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

/// Scripted driver around a [`NavView`].
pub struct TestHost {
    view: NavView,
    log: EventLog,
    armed_vetoes: Rc<Cell<usize>>,
}

impl TestHost {
    /// Create a host with a fresh view and a wired veto hook.
    #[must_use]
    pub fn new() -> Self {
        let armed_vetoes = Rc::new(Cell::new(0));
        let mut view = NavView::new();
        let counter = Rc::clone(&armed_vetoes);
        view.on_pane_closing(move |_reason| {
            let remaining = counter.get();
            if remaining > 0 {
                counter.set(remaining - 1);
                ClosePermission::Vetoed
            } else {
                ClosePermission::Proceed
            }
        });
        Self {
            view,
            log: EventLog::default(),
            armed_vetoes,
        }
    }

    /// Veto the next `count` cancellable closes.
    pub fn arm_veto(&self, count: usize) {
        self.armed_vetoes.set(count);
    }

    /// Direct access to the model for assertions the host does not wrap.
    #[must_use]
    pub fn view(&self) -> &NavView {
        &self.view
    }

    /// Recorded event log.
    #[must_use]
    pub fn log(&self) -> &EventLog {
        &self.log
    }

    /// Clear the recorded event log.
    pub fn clear_log(&mut self) {
        self.log.clear();
    }

    // -----------------------------------------------------------------------
    // Scripted inputs
    // -----------------------------------------------------------------------

    /// Resize the control to a named width.
    pub fn set_width(&mut self, width: ControlWidth) {
        let batch = self.view.set_width(width.pixels());
        self.log.record(batch);
    }

    /// Resize the control to an exact width.
    pub fn set_width_px(&mut self, width: f64) {
        let batch = self.view.set_width(width);
        self.log.record(batch);
    }

    /// Pick a compact-threshold preset.
    pub fn set_compact_threshold(&mut self, preset: ThresholdPreset) {
        let batch = self.view.set_compact_threshold(preset.pixels());
        self.log.record(batch);
    }

    /// Pick an expanded-threshold preset.
    pub fn set_expanded_threshold(&mut self, preset: ThresholdPreset) {
        let batch = self.view.set_expanded_threshold(preset.pixels());
        self.log.record(batch);
    }

    /// Select a pane display mode, as the test page's combo box does.
    pub fn select_pane_display_mode(&mut self, mode: PaneDisplayMode) {
        let batch = self.view.set_pane_display_mode(mode);
        self.log.record(batch);
    }

    /// Write the `IsPaneOpen` observable.
    pub fn set_is_pane_open(&mut self, open: bool) {
        let batch = self.view.set_is_pane_open(open);
        self.log.record(batch);
    }

    /// Set the back-button visibility intent.
    pub fn set_back_button_visible(&mut self, visible: BackButtonVisible) {
        self.view.set_back_button_visible(visible);
    }

    /// Click the pane toggle button.
    pub fn invoke_toggle(&mut self) {
        self.gesture(Gesture::ToggleInvoked);
    }

    /// Press Alt+Left.
    pub fn press_alt_left(&mut self) {
        self.gesture(Gesture::AltLeft);
    }

    /// Request system back.
    pub fn press_back(&mut self) {
        self.gesture(Gesture::Back);
    }

    /// Tap outside the pane.
    pub fn tap_outside(&mut self) {
        self.gesture(Gesture::OutsideTap);
    }

    /// Invoke a menu item.
    pub fn invoke_item(&mut self, id: ItemId) {
        self.gesture(Gesture::ItemInvoked(id));
    }

    /// Add a menu item.
    pub fn add_item(&mut self, label: &str) -> ItemId {
        self.view.push_item(label)
    }

    /// Remove a menu item.
    pub fn remove_item(&mut self, id: ItemId) {
        let batch = self.view.remove_item(id);
        self.log.record(batch);
    }

    /// Clear the menu collection.
    pub fn clear_items(&mut self) {
        let batch = self.view.clear_items();
        self.log.record(batch);
    }

    /// Set the selection programmatically.
    pub fn select(&mut self, id: Option<ItemId>) {
        let batch = self.view.set_selected(id);
        self.log.record(batch);
    }

    fn gesture(&mut self, gesture: Gesture) {
        let batch = self.view.handle_gesture(gesture);
        self.log.record(batch);
    }

    // -----------------------------------------------------------------------
    // Status readback
    // -----------------------------------------------------------------------

    /// Display-mode status text, as the test page's `DisplayModeTextBox`.
    #[must_use]
    pub fn display_mode_text(&self) -> &'static str {
        self.view.display_mode().as_str()
    }

    /// Pane status text (`"Opened"` / `"Closed"`).
    #[must_use]
    pub fn pane_status(&self) -> &'static str {
        self.view.pane_state().as_str()
    }
}

impl Default for TestHost {
    fn default() -> Self {
        Self::new()
    }
}
