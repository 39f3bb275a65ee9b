#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Once;

use match_core::{
    update, AppState, ComponentScores, Effect, FileSource, MatchResult, MatchScore, Msg,
    SelectedFile, Suggestion, MIME_PDF,
};

pub fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(match_logging::initialize_for_tests);
}

pub fn pdf(size: u64) -> SelectedFile {
    SelectedFile {
        name: "resume.pdf".to_string(),
        size,
        mime_type: MIME_PDF.to_string(),
        path: PathBuf::from("/tmp/resume.pdf"),
    }
}

pub fn long_description() -> String {
    "Senior Rust engineer with experience in async networking and distributed storage.".to_string()
}

pub fn select(state: AppState, file: SelectedFile) -> (AppState, Vec<Effect>) {
    update(
        state,
        Msg::FileSelected {
            file,
            source: FileSource::Browse,
        },
    )
}

/// A state with a valid file and job description, ready to analyze.
pub fn ready_state() -> AppState {
    let (state, _) = select(AppState::new(), pdf(2048));
    let (mut state, _) = update(state, Msg::JobDescriptionChanged(long_description()));
    state.consume_dirty();
    state
}

pub fn match_result(resume_text: &str) -> MatchResult {
    MatchResult {
        match_score: MatchScore {
            overall_match: 82.6,
            components: ComponentScores {
                skill_match: 75.0,
                experience_match: 90.2,
                keyword_match: 60.5,
            },
        },
        missing_skills: vec!["SQL".to_string()],
        suggestions: vec![Suggestion {
            section: "Skills".to_string(),
            suggestion: "Add SQL".to_string(),
            justification: "Listed as required".to_string(),
        }],
        resume_text: resume_text.to_string(),
    }
}

/// Runs a full successful analyze so refine becomes available.
pub fn analyzed_state() -> AppState {
    let (state, effects) = update(ready_state(), Msg::AnalyzeClicked);
    let request_id = match effects.as_slice() {
        [Effect::SubmitAnalyze { request_id, .. }] => *request_id,
        other => panic!("unexpected effects {other:?}"),
    };
    let (mut state, _) = update(
        state,
        Msg::AnalyzeCompleted {
            request_id,
            result: Ok(match_result("Jane Doe\n- Built things")),
        },
    );
    state.consume_dirty();
    state
}
