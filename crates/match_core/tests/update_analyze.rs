mod common;

use std::time::Duration;

use common::{init_logging, long_description, match_result, pdf, ready_state, select};
use match_core::{
    update, AppState, Effect, Msg, Panel, RequestFailure, RequestPhase, ANALYZE_BUSY_LABEL,
    ANALYZE_LABEL,
};
use pretty_assertions::assert_eq;

fn submit(state: AppState) -> (AppState, u64) {
    let (state, effects) = update(state, Msg::AnalyzeClicked);
    match effects.as_slice() {
        [Effect::SubmitAnalyze { request_id, .. }] => (state, *request_id),
        other => panic!("unexpected effects {other:?}"),
    }
}

#[test]
fn analyze_emits_request_with_trimmed_description() {
    init_logging();
    let (state, _) = select(AppState::new(), pdf(2048));
    let padded = format!("   {}   ", long_description());
    let (state, _) = update(state, Msg::JobDescriptionChanged(padded));

    let (state, effects) = update(state, Msg::AnalyzeClicked);

    assert_eq!(
        effects,
        vec![Effect::SubmitAnalyze {
            request_id: 1,
            file: pdf(2048),
            job_description: long_description(),
        }]
    );
    let view = state.view();
    assert!(view.analyze.busy);
    assert!(!view.analyze.enabled);
    assert_eq!(view.analyze.label, ANALYZE_BUSY_LABEL);
    assert!(view.results.is_none());
}

#[test]
fn analyze_ignored_when_form_invalid() {
    init_logging();
    let (state, _) = select(AppState::new(), pdf(2048));
    let (state, effects) = update(state, Msg::AnalyzeClicked);

    assert!(effects.is_empty());
    assert_eq!(state.analyze_phase(), RequestPhase::Idle);
}

#[test]
fn second_click_while_in_flight_is_rejected() {
    init_logging();
    let (state, _) = submit(ready_state());
    let (state, effects) = update(state, Msg::AnalyzeClicked);

    assert!(effects.is_empty());
    assert_eq!(state.analyze_phase(), RequestPhase::InFlight(1));
}

#[test]
fn success_renders_results_and_scrolls() {
    init_logging();
    let (state, request_id) = submit(ready_state());

    let (state, effects) = update(
        state,
        Msg::AnalyzeCompleted {
            request_id,
            result: Ok(match_result("resume body")),
        },
    );

    assert_eq!(
        effects,
        vec![Effect::ScrollIntoView {
            panel: Panel::Results,
            delay: Duration::from_millis(100),
        }]
    );
    let view = state.view();
    let results = view.results.expect("results shown");
    assert_eq!(results.overall_label, "83%");
    assert_eq!(state.extracted_resume_text(), "resume body");
    assert!(!view.analyze.busy);
    assert!(view.analyze.enabled);
    assert_eq!(view.analyze.label, ANALYZE_LABEL);
}

#[test]
fn server_error_detail_becomes_toast() {
    init_logging();
    let (state, request_id) = submit(ready_state());

    let (state, effects) = update(
        state,
        Msg::AnalyzeCompleted {
            request_id,
            result: Err(RequestFailure::Server {
                status: 400,
                detail: Some("Bad file".to_string()),
            }),
        },
    );

    assert!(effects.is_empty());
    let view = state.view();
    assert_eq!(view.toasts.len(), 1);
    assert_eq!(view.toasts[0].message, "Bad file");
    assert!(view.results.is_none());
    assert!(view.analyze.enabled);
    assert!(state.extracted_resume_text().is_empty());
}

#[test]
fn transport_error_restores_form() {
    init_logging();
    let (state, request_id) = submit(ready_state());

    let (state, _) = update(
        state,
        Msg::AnalyzeCompleted {
            request_id,
            result: Err(RequestFailure::Transport("connection refused".to_string())),
        },
    );

    let view = state.view();
    assert_eq!(view.toasts[0].message, "connection refused");
    assert!(!view.analyze.busy);
    assert!(view.analyze.enabled);
}

#[test]
fn completion_rechecks_gate() {
    init_logging();
    let (state, request_id) = submit(ready_state());
    let (state, _) = update(state, Msg::JobDescriptionChanged("too short".to_string()));

    let (state, _) = update(
        state,
        Msg::AnalyzeCompleted {
            request_id,
            result: Err(RequestFailure::Transport(String::new())),
        },
    );

    let view = state.view();
    assert_eq!(
        view.toasts[0].message,
        "Failed to analyze resume. Please try again."
    );
    assert!(!view.analyze.enabled);
}

#[test]
fn stale_completion_is_ignored() {
    init_logging();
    let (mut state, _request_id) = submit(ready_state());
    state.consume_dirty();

    let (mut state, effects) = update(
        state,
        Msg::AnalyzeCompleted {
            request_id: 99,
            result: Ok(match_result("other")),
        },
    );

    assert!(effects.is_empty());
    assert!(!state.consume_dirty());
    assert_eq!(state.analyze_phase(), RequestPhase::InFlight(1));
    assert!(state.extracted_resume_text().is_empty());
}

#[test]
fn new_analyze_hides_previous_results() {
    init_logging();
    let (state, request_id) = submit(ready_state());
    let (state, _) = update(
        state,
        Msg::AnalyzeCompleted {
            request_id,
            result: Ok(match_result("first")),
        },
    );
    assert!(state.view().results.is_some());

    let (state, request_id) = submit(state);

    assert_eq!(request_id, 2);
    assert!(state.view().results.is_none());
}
