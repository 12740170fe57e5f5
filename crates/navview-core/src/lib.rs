#![forbid(unsafe_code)]

//! Display-mode and pane state machine for the NavView control.
//!
//! This crate models the control's adaptive behavior without any rendering,
//! accessibility, or input-dispatch machinery: the host feeds it measured
//! width, configuration writes, and user-gesture signals; it answers with the
//! effective [`DisplayMode`], the pane open state, and an ordered stream of
//! [`NavEvent`]s.
//!
//! Everything is single-threaded and synchronous. A `Closing` transition can
//! be vetoed by registered handlers (see [`NavView::on_pane_closing`]);
//! whether a given close consults handlers is decided by its
//! [`CloseReason`].

pub mod display_mode;
pub mod events;
pub mod menu;
pub mod pane;
pub mod view;

pub use display_mode::{
    BackButtonVisible, DisplayMode, PaneDisplayMode, PaneLengths, VisualStateDisplayMode,
    WidthThresholds, resolve, visual_state,
};
pub use events::{ClosePermission, CloseReason, NavEvent};
pub use menu::{ItemId, MenuItem, MenuItems};
pub use pane::{CloseOutcome, PaneController, PaneState};
pub use view::{Gesture, NavView};
