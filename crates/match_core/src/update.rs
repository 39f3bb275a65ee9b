use match_logging::{match_debug, match_info, match_warn};

use crate::effect::Panel;
use crate::file::{validate_file, FileSource};
use crate::notify::Severity;
use crate::render::{render_match, render_refine, SCORE_BAR_DELAY};
use crate::{AppState, Effect, Msg};

pub const MISSING_REFINE_INPUT: &str = "Missing resume text or job description";

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::FileSelected { file, source } => {
            if source == FileSource::Drop {
                state.set_drag_active(false);
            }
            match validate_file(&file) {
                Ok(()) => {
                    match_info!(
                        "File selected via {:?}: name={} size={} type={}",
                        source,
                        file.name,
                        file.size,
                        file.mime_type
                    );
                    state.set_selected_file(Some(file));
                }
                Err(rejection) => {
                    match_info!("File {} rejected: {:?}", file.name, rejection);
                    state.notify(rejection.to_string(), Severity::Error);
                }
            }
            Vec::new()
        }
        Msg::FileRemoved => {
            state.set_selected_file(None);
            vec![Effect::ResetFileInput]
        }
        Msg::DragEntered => {
            state.set_drag_active(true);
            Vec::new()
        }
        Msg::DragLeft => {
            state.set_drag_active(false);
            Vec::new()
        }
        Msg::JobDescriptionChanged(text) => {
            state.set_job_description(text);
            Vec::new()
        }
        Msg::AnalyzeClicked => start_analyze(&mut state),
        Msg::AnalyzeCompleted { request_id, result } => {
            if !state.finish_analyze(request_id) {
                match_warn!("Ignoring stale analyze completion request_id={}", request_id);
                return (state, Vec::new());
            }
            match result {
                Ok(result) => {
                    match_info!(
                        "Analyze request_id={} succeeded: overall={}",
                        request_id,
                        result.match_score.overall_match
                    );
                    state.set_extracted_resume_text(result.resume_text.clone());
                    state.show_match(render_match(&result));
                    vec![Effect::ScrollIntoView {
                        panel: Panel::Results,
                        delay: SCORE_BAR_DELAY,
                    }]
                }
                Err(failure) => {
                    match_warn!("Analyze request_id={} failed: {:?}", request_id, failure);
                    state.notify(failure.analyze_message(), Severity::Error);
                    Vec::new()
                }
            }
        }
        Msg::RefineClicked => start_refine(&mut state),
        Msg::RefineCompleted { request_id, result } => {
            if !state.finish_refine(request_id) {
                match_warn!("Ignoring stale refine completion request_id={}", request_id);
                return (state, Vec::new());
            }
            match result {
                Ok(result) => {
                    match_info!("Refine request_id={} succeeded", request_id);
                    state.show_refined(render_refine(&result));
                    vec![Effect::ScrollIntoView {
                        panel: Panel::Refined,
                        delay: std::time::Duration::ZERO,
                    }]
                }
                Err(failure) => {
                    match_warn!("Refine request_id={} failed: {:?}", request_id, failure);
                    state.notify(failure.refine_message(), Severity::Error);
                    Vec::new()
                }
            }
        }
        Msg::Tick { elapsed } => {
            state.advance_toasts(elapsed);
            Vec::new()
        }
    };

    (state, effects)
}

fn start_analyze(state: &mut AppState) -> Vec<Effect> {
    if state.analyze_phase().is_in_flight() {
        match_debug!("Analyze clicked while a request is in flight; ignored");
        return Vec::new();
    }
    if !state.is_form_valid() {
        match_debug!("Analyze clicked with an invalid form; ignored");
        return Vec::new();
    }
    let Some(file) = state.selected_file().cloned() else {
        return Vec::new();
    };
    let job_description = state.job_description().trim().to_string();
    let request_id = state.begin_analyze();
    match_info!(
        "Submitting analyze request_id={} file={} job_description_len={}",
        request_id,
        file.name,
        job_description.len()
    );
    vec![Effect::SubmitAnalyze {
        request_id,
        file,
        job_description,
    }]
}

fn start_refine(state: &mut AppState) -> Vec<Effect> {
    let resume_text = state.extracted_resume_text().to_string();
    let job_description = state.job_description().trim().to_string();
    if resume_text.is_empty() || job_description.is_empty() {
        state.notify(MISSING_REFINE_INPUT, Severity::Error);
        return Vec::new();
    }
    if state.refine_phase().is_in_flight() {
        match_debug!("Refine clicked while a request is in flight; ignored");
        return Vec::new();
    }
    let request_id = state.begin_refine();
    match_info!(
        "Submitting refine request_id={} resume_text_len={}",
        request_id,
        resume_text.len()
    );
    vec![Effect::SubmitRefine {
        request_id,
        resume_text,
        job_description,
    }]
}
