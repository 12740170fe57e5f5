#![forbid(unsafe_code)]

//! Display-mode resolution: configured pane intent + measured width → layout mode.
//!
//! [`resolve`] is the single adaptive decision point. It is a pure function so
//! the view facade can recompute it on every input change without tracking
//! which input moved.
//!
//! # Invariants
//!
//! 1. A fixed [`PaneDisplayMode`] (anything but `Auto`) maps to exactly one
//!    [`DisplayMode`] and ignores width and thresholds entirely.
//! 2. In `Auto` mode the expanded threshold is checked first (inclusive), then
//!    the compact threshold (exclusive). With equal thresholds the compact
//!    band is empty and a width at the shared boundary resolves to `Expanded`.
//! 3. Threshold and pane-length setters coerce negative values to `0.0`;
//!    stored configuration is never negative.

/// Configured pane intent.
///
/// `Auto` enables adaptive layout; the remaining variants pin the display
/// mode regardless of the measured width.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum PaneDisplayMode {
    /// Adaptive: pick the display mode from width and thresholds.
    #[default]
    Auto,
    /// Pane always expanded on the left.
    Left,
    /// Pane always compact on the left.
    LeftCompact,
    /// Pane always minimal on the left.
    LeftMinimal,
    /// Pane rendered as a top strip; no adaptive pane layout.
    Top,
}

impl PaneDisplayMode {
    /// Whether this mode lays the pane out on the left edge.
    #[must_use]
    pub const fn is_left(self) -> bool {
        !matches!(self, Self::Top)
    }
}

/// Effective layout mode, derived from [`PaneDisplayMode`] and width.
///
/// Read-only from the host's perspective; only
/// [`resolve`] produces values of this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum DisplayMode {
    /// Pane hidden behind a toggle; opens as an overlay.
    Minimal,
    /// Icon-width rail; opens as a wider overlay.
    Compact,
    /// Pane inline and fully visible.
    Expanded,
}

impl DisplayMode {
    /// Status label matching the host's observable text.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Minimal => "Minimal",
            Self::Compact => "Compact",
            Self::Expanded => "Expanded",
        }
    }
}

/// Visual-state group the host should drive, decoupled from [`DisplayMode`]
/// so the top strip and the back button can override the plain mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum VisualStateDisplayMode {
    Minimal,
    MinimalWithBackButton,
    Compact,
    Expanded,
}

/// Back-button visibility intent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum BackButtonVisible {
    /// Visible where the platform shows chrome back buttons.
    #[default]
    Auto,
    Visible,
    Collapsed,
}

/// Width thresholds for adaptive layout, in device-independent pixels.
///
/// Negative writes coerce to `0.0`. No ordering between the two values is
/// enforced; [`resolve`] is total for any configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct WidthThresholds {
    compact: f64,
    expanded: f64,
}

impl WidthThresholds {
    /// Create thresholds, coercing negative values to `0.0`.
    #[must_use]
    pub fn new(compact: f64, expanded: f64) -> Self {
        Self {
            compact: coerce_non_negative(compact),
            expanded: coerce_non_negative(expanded),
        }
    }

    /// Width below which `Auto` resolves to `Minimal`.
    #[must_use]
    pub const fn compact(&self) -> f64 {
        self.compact
    }

    /// Width at or above which `Auto` resolves to `Expanded`.
    #[must_use]
    pub const fn expanded(&self) -> f64 {
        self.expanded
    }

    /// Set the compact threshold (negative coerces to `0.0`).
    pub fn set_compact(&mut self, value: f64) {
        self.compact = coerce_non_negative(value);
    }

    /// Set the expanded threshold (negative coerces to `0.0`).
    pub fn set_expanded(&mut self, value: f64) {
        self.expanded = coerce_non_negative(value);
    }
}

impl Default for WidthThresholds {
    fn default() -> Self {
        Self {
            compact: 641.0,
            expanded: 1008.0,
        }
    }
}

/// Pane lengths in device-independent pixels (compact rail width and the
/// width of the open pane). Negative writes coerce to `0.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct PaneLengths {
    compact: f64,
    open: f64,
}

impl PaneLengths {
    /// Create pane lengths, coercing negative values to `0.0`.
    #[must_use]
    pub fn new(compact: f64, open: f64) -> Self {
        Self {
            compact: coerce_non_negative(compact),
            open: coerce_non_negative(open),
        }
    }

    /// Width of the closed compact rail.
    #[must_use]
    pub const fn compact(&self) -> f64 {
        self.compact
    }

    /// Width of the open pane.
    #[must_use]
    pub const fn open(&self) -> f64 {
        self.open
    }

    /// Set the compact rail width (negative coerces to `0.0`).
    pub fn set_compact(&mut self, value: f64) {
        self.compact = coerce_non_negative(value);
    }

    /// Set the open pane width (negative coerces to `0.0`).
    pub fn set_open(&mut self, value: f64) {
        self.open = coerce_non_negative(value);
    }
}

impl Default for PaneLengths {
    fn default() -> Self {
        Self {
            compact: 48.0,
            open: 320.0,
        }
    }
}

fn coerce_non_negative(value: f64) -> f64 {
    if value < 0.0 { 0.0 } else { value }
}

/// Resolve the effective display mode.
///
/// Fixed modes ignore `width` and `thresholds`. In `Auto` mode the expanded
/// check runs first: `width >= expanded` wins even when the compact threshold
/// is configured above the expanded one, so inverted thresholds collapse the
/// compact band toward `Expanded` rather than producing a dead zone.
#[must_use]
pub fn resolve(mode: PaneDisplayMode, width: f64, thresholds: &WidthThresholds) -> DisplayMode {
    match mode {
        PaneDisplayMode::Auto => {
            if width >= thresholds.expanded() {
                DisplayMode::Expanded
            } else if width < thresholds.compact() {
                DisplayMode::Minimal
            } else {
                DisplayMode::Compact
            }
        }
        PaneDisplayMode::Left => DisplayMode::Expanded,
        PaneDisplayMode::LeftCompact => DisplayMode::Compact,
        PaneDisplayMode::LeftMinimal => DisplayMode::Minimal,
        PaneDisplayMode::Top => DisplayMode::Minimal,
    }
}

/// Map the mode pair to the visual-state group.
///
/// The top strip always reports `Minimal`. In left layouts the configured
/// intent wins over the adaptive result where they disagree, and a visible
/// back button upgrades `Minimal` to `MinimalWithBackButton`.
#[must_use]
pub fn visual_state(
    pane_mode: PaneDisplayMode,
    display_mode: DisplayMode,
    back_button_shown: bool,
) -> VisualStateDisplayMode {
    if pane_mode == PaneDisplayMode::Top {
        return VisualStateDisplayMode::Minimal;
    }
    let base = match pane_mode {
        PaneDisplayMode::Left => VisualStateDisplayMode::Expanded,
        PaneDisplayMode::LeftCompact => VisualStateDisplayMode::Compact,
        PaneDisplayMode::LeftMinimal => VisualStateDisplayMode::Minimal,
        PaneDisplayMode::Auto | PaneDisplayMode::Top => match display_mode {
            DisplayMode::Expanded => VisualStateDisplayMode::Expanded,
            DisplayMode::Compact => VisualStateDisplayMode::Compact,
            DisplayMode::Minimal => VisualStateDisplayMode::Minimal,
        },
    };
    if base == VisualStateDisplayMode::Minimal && back_button_shown {
        VisualStateDisplayMode::MinimalWithBackButton
    } else {
        base
    }
}
