mod common;

use std::time::Duration;

use common::init_logging;
use match_core::{
    stack_offset, update, AppState, Msg, Severity, ToastPhase, ToastQueue, TOAST_FADE_FOR,
    TOAST_VISIBLE_FOR,
};

fn tick(state: AppState, millis: u64) -> AppState {
    update(
        state,
        Msg::Tick {
            elapsed: Duration::from_millis(millis),
        },
    )
    .0
}

#[test]
fn toast_fades_after_three_seconds_and_is_removed_after_fade() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::RefineClicked);
    assert_eq!(state.view().toasts[0].phase, ToastPhase::Visible);

    let state = tick(state, 2999);
    assert_eq!(state.view().toasts[0].phase, ToastPhase::Visible);

    let state = tick(state, 1);
    assert_eq!(state.view().toasts[0].phase, ToastPhase::Fading);

    let state = tick(state, 299);
    assert_eq!(state.view().toasts.len(), 1);

    let state = tick(state, 1);
    assert!(state.view().toasts.is_empty());
}

#[test]
fn toasts_stack_in_order_with_fixed_offsets() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::RefineClicked);
    let state = tick(state, 1000);
    let (state, _) = update(state, Msg::RefineClicked);

    let toasts = state.view().toasts;
    assert_eq!(toasts.len(), 2);
    assert!(toasts[0].id < toasts[1].id);
    assert_eq!(toasts[0].top_px, 20);
    assert_eq!(toasts[1].top_px, 88);

    // The older toast expires first and the survivor moves to the top slot.
    let state = tick(state, 2300);
    let toasts = state.view().toasts;
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].top_px, stack_offset(0));
}

#[test]
fn queue_reports_only_visible_changes() {
    let mut queue = ToastQueue::default();
    assert!(!queue.advance(Duration::from_secs(10)));

    queue.push("saved", Severity::Success);
    assert!(!queue.advance(Duration::from_millis(10)));
    assert!(queue.advance(TOAST_VISIBLE_FOR));
    assert!(queue.advance(TOAST_FADE_FOR));
    assert!(queue.is_empty());
}

#[test]
fn severity_colors() {
    assert_eq!(Severity::Error.color(), "#ef4444");
    assert_eq!(Severity::Info.color(), "#10b981");
    assert_eq!(Severity::Success.color(), "#10b981");
}
