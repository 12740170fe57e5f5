//! End-to-end scenarios driven through the scripted host, mirroring the
//! control's interaction-test suite: adaptive display mode, pane open/close
//! protocol, light dismiss, and selection safety.

use navview_core::{CloseReason, DisplayMode, NavEvent, PaneDisplayMode};
use navview_harness::{ControlWidth, TestHost, ThresholdPreset};

#[test]
fn display_mode_adapts_with_default_thresholds() {
    let mut host = TestHost::new();

    host.set_width(ControlWidth::Narrow);
    assert_eq!(host.display_mode_text(), "Minimal");

    host.set_width(ControlWidth::Medium);
    assert_eq!(host.display_mode_text(), "Compact");

    host.set_width(ControlWidth::Wide);
    assert_eq!(host.display_mode_text(), "Expanded");
}

#[test]
fn display_mode_with_compact_threshold_above_expanded() {
    let mut host = TestHost::new();
    host.set_compact_threshold(ThresholdPreset::High);
    host.set_expanded_threshold(ThresholdPreset::Low);

    host.set_width(ControlWidth::Narrow);
    assert_eq!(host.display_mode_text(), "Minimal");

    // Between the two thresholds the expanded check wins; there is no
    // compact band when the thresholds are inverted.
    host.set_width(ControlWidth::Medium);
    assert_eq!(host.display_mode_text(), "Expanded");

    host.set_width(ControlWidth::Wide);
    assert_eq!(host.display_mode_text(), "Expanded");
}

#[test]
fn display_mode_with_equal_thresholds() {
    let mut host = TestHost::new();
    host.set_compact_threshold(ThresholdPreset::Low);
    host.set_expanded_threshold(ThresholdPreset::Low);

    host.set_width(ControlWidth::Narrow);
    assert_eq!(host.display_mode_text(), "Minimal");

    host.set_width(ControlWidth::Medium);
    assert_eq!(host.display_mode_text(), "Expanded");

    // A width exactly at the shared boundary resolves Expanded, not Compact.
    host.set_width_px(ThresholdPreset::Low.pixels());
    assert_eq!(host.display_mode_text(), "Expanded");
}

#[test]
fn fixed_pane_display_modes_ignore_width() {
    let cases = [
        (PaneDisplayMode::Left, "Expanded"),
        (PaneDisplayMode::LeftCompact, "Compact"),
        (PaneDisplayMode::LeftMinimal, "Minimal"),
        (PaneDisplayMode::Top, "Minimal"),
    ];
    for (mode, expected) in cases {
        let mut host = TestHost::new();
        host.select_pane_display_mode(mode);
        for width in [ControlWidth::Narrow, ControlWidth::Medium, ControlWidth::Wide] {
            host.set_width(width);
            assert_eq!(host.display_mode_text(), expected, "mode {mode:?}");
        }
    }
}

#[test]
fn switching_fixed_modes_drives_pane_open_state() {
    let mut host = TestHost::new();
    for (mode, open) in [
        (PaneDisplayMode::Left, true),
        (PaneDisplayMode::LeftCompact, false),
        (PaneDisplayMode::LeftMinimal, false),
        (PaneDisplayMode::Top, false),
        (PaneDisplayMode::Left, true),
    ] {
        host.select_pane_display_mode(mode);
        assert_eq!(host.view().is_pane_open(), open, "mode {mode:?}");
    }
}

#[test]
fn pane_force_closes_when_mode_drops_to_minimal() {
    let mut host = TestHost::new();
    host.set_width(ControlWidth::Wide);
    assert_eq!(host.pane_status(), "Opened");
    host.clear_log();

    host.set_width(ControlWidth::Narrow);
    assert_eq!(host.pane_status(), "Closed");
    assert_eq!(host.log().closing_count(), 1);
    assert_eq!(host.log().closed_count(), 1);
    assert_eq!(
        host.log().last_close_reason(),
        Some(CloseReason::DisplayModeForced)
    );
}

#[test]
fn forced_close_cannot_be_vetoed() {
    let mut host = TestHost::new();
    host.set_width(ControlWidth::Wide);
    host.arm_veto(5);
    host.set_width(ControlWidth::Narrow);
    assert_eq!(host.pane_status(), "Closed");
}

#[test]
fn pane_reopens_on_widen_unless_user_closed_it() {
    let mut host = TestHost::new();
    host.set_width(ControlWidth::Wide);
    host.set_width(ControlWidth::Narrow);
    host.set_width(ControlWidth::Wide);
    assert_eq!(host.pane_status(), "Opened");

    host.invoke_toggle();
    assert_eq!(host.pane_status(), "Closed");
    host.set_width(ControlWidth::Narrow);
    host.set_width(ControlWidth::Wide);
    assert_eq!(host.pane_status(), "Closed");

    host.invoke_toggle();
    assert_eq!(host.pane_status(), "Opened");
}

#[test]
fn toggle_close_respects_veto() {
    let mut host = TestHost::new();
    host.set_width(ControlWidth::Wide);
    host.clear_log();

    host.arm_veto(1);
    host.invoke_toggle();
    assert_eq!(host.pane_status(), "Opened");
    assert_eq!(host.log().closing_count(), 1);
    assert_eq!(host.log().closed_count(), 0);
}

#[test]
fn selecting_item_in_minimal_overlay_closes_pane() {
    let mut host = TestHost::new();
    host.select_pane_display_mode(PaneDisplayMode::LeftMinimal);
    let games = host.add_item("Games");
    host.set_is_pane_open(true);
    assert_eq!(host.pane_status(), "Opened");
    host.clear_log();

    host.invoke_item(games);
    assert_eq!(host.pane_status(), "Closed");
    assert_eq!(
        host.log().last_close_reason(),
        Some(CloseReason::SelectionMade)
    );
    assert_eq!(host.view().selected(), Some(games));
}

#[test]
fn selection_close_can_be_vetoed() {
    let mut host = TestHost::new();
    host.select_pane_display_mode(PaneDisplayMode::LeftMinimal);
    let games = host.add_item("Games");
    host.set_is_pane_open(true);

    host.arm_veto(1);
    host.invoke_item(games);
    assert_eq!(host.pane_status(), "Opened");
    assert_eq!(host.view().selected(), Some(games));
}

#[test]
fn switching_to_top_with_open_overlay_closes_pane() {
    let mut host = TestHost::new();
    host.set_width(ControlWidth::Narrow);
    host.set_is_pane_open(true);
    assert_eq!(host.pane_status(), "Opened");

    host.select_pane_display_mode(PaneDisplayMode::Top);
    assert_eq!(host.pane_status(), "Closed");
    assert_eq!(
        host.log().last_close_reason(),
        Some(CloseReason::DisplayModeForced)
    );

    // Open requests stay no-ops while the pane surface is the top strip.
    host.set_is_pane_open(true);
    assert_eq!(host.pane_status(), "Closed");
}

#[test]
fn invoking_already_selected_item_closes_pane() {
    let mut host = TestHost::new();
    host.select_pane_display_mode(PaneDisplayMode::LeftMinimal);
    let games = host.add_item("Games");
    host.invoke_item(games);
    assert_eq!(host.view().selected(), Some(games));

    host.set_is_pane_open(true);
    host.clear_log();
    host.invoke_item(games);
    assert_eq!(host.pane_status(), "Closed");
    assert_eq!(
        host.log().last_close_reason(),
        Some(CloseReason::SelectionMade)
    );
    // The selection itself did not change.
    assert_eq!(host.view().selected(), Some(games));
    assert!(
        !host
            .log()
            .events()
            .iter()
            .any(|event| matches!(event, NavEvent::SelectionChanged(_)))
    );
}

#[test]
fn selecting_item_in_expanded_keeps_pane_open() {
    let mut host = TestHost::new();
    let games = host.add_item("Games");
    host.set_width(ControlWidth::Wide);
    host.invoke_item(games);
    assert_eq!(host.pane_status(), "Opened");
}

#[test]
fn light_dismiss_is_idempotent_when_closed() {
    let mut host = TestHost::new();
    host.set_width(ControlWidth::Narrow);

    host.tap_outside();
    host.press_alt_left();
    assert_eq!(host.log().closing_count(), 0);
    assert_eq!(host.log().closed_count(), 0);

    host.set_is_pane_open(true);
    host.clear_log();
    host.tap_outside();
    assert_eq!(host.pane_status(), "Closed");
    assert_eq!(host.log().closed_count(), 1);

    // Further dismiss gestures raise nothing more.
    host.tap_outside();
    host.press_alt_left();
    assert_eq!(host.log().closing_count(), 1);
    assert_eq!(host.log().closed_count(), 1);
}

#[test]
fn back_gesture_dismisses_overlay_or_bubbles() {
    let mut host = TestHost::new();
    host.set_width(ControlWidth::Narrow);

    host.press_back();
    assert_eq!(host.log().last(), Some(&NavEvent::BackRequested));

    host.set_is_pane_open(true);
    host.clear_log();
    host.press_back();
    assert_eq!(host.pane_status(), "Closed");
    assert_eq!(
        host.log().last_close_reason(),
        Some(CloseReason::LightDismiss)
    );
    assert!(
        !host
            .log()
            .events()
            .contains(&NavEvent::BackRequested)
    );
}

#[test]
fn clearing_list_is_safe() {
    let mut host = TestHost::new();
    host.add_item("Home");
    let games = host.add_item("Games");
    host.add_item("Music");
    host.select(Some(games));
    host.clear_log();

    host.clear_items();
    assert_eq!(
        host.log().events(),
        &[NavEvent::SelectionChanged(None)]
    );
    assert_eq!(host.view().selected(), None);
    assert!(host.view().items().is_empty());
}

#[test]
fn selecting_invalid_item_resolves_to_no_selection() {
    let mut host = TestHost::new();
    let home = host.add_item("Home");
    host.select(Some(home));

    // A stale id: allocated, then removed from the collection.
    let stale = host.add_item("Transient");
    host.remove_item(stale);
    host.select(Some(stale));
    assert_eq!(host.view().selected(), None);

    // Invoking a stale id is tolerated the same way.
    host.select(Some(home));
    host.invoke_item(stale);
    assert_eq!(host.view().selected(), None);
}

#[test]
fn removing_selected_item_keeps_others() {
    let mut host = TestHost::new();
    let home = host.add_item("Home");
    let games = host.add_item("Games");
    host.select(Some(games));

    host.remove_item(games);
    assert_eq!(host.view().selected(), None);
    assert!(host.view().items().contains(home));
    assert_eq!(host.view().items().len(), 1);
}

#[test]
fn selection_survives_left_top_left_round_trip() {
    let mut host = TestHost::new();
    host.select_pane_display_mode(PaneDisplayMode::Left);
    let games = host.add_item("Games");
    host.select(Some(games));

    host.select_pane_display_mode(PaneDisplayMode::Top);
    assert_eq!(host.view().selected(), Some(games));
    assert_eq!(host.display_mode_text(), "Minimal");

    host.select_pane_display_mode(PaneDisplayMode::Left);
    assert_eq!(host.view().selected(), Some(games));
    assert_eq!(host.display_mode_text(), "Expanded");
}

#[test]
fn display_mode_changed_events_fire_once_per_transition() {
    let mut host = TestHost::new();
    host.set_width(ControlWidth::Narrow);
    host.clear_log();

    host.set_width(ControlWidth::Wide);
    let changes: Vec<_> = host
        .log()
        .events()
        .iter()
        .filter_map(|event| match event {
            NavEvent::DisplayModeChanged(mode) => Some(*mode),
            _ => None,
        })
        .collect();
    assert_eq!(changes, vec![DisplayMode::Expanded]);

    // Resizing within the same band emits nothing.
    host.clear_log();
    host.set_width_px(ControlWidth::Wide.pixels() + 50.0);
    assert!(host.log().events().is_empty());
}

#[test]
fn scenario_runs_under_a_subscriber() {
    // The host logs every event through tracing; make sure a full scenario
    // runs cleanly with a subscriber installed.
    let subscriber = tracing_subscriber::registry();
    tracing::subscriber::with_default(subscriber, || {
        let mut host = TestHost::new();
        let games = host.add_item("Games");
        host.set_width(ControlWidth::Wide);
        host.invoke_item(games);
        host.invoke_toggle();
        assert_eq!(host.pane_status(), "Closed");
    });
}
