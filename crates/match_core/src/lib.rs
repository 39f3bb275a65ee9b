//! Resume match core: pure controller state machine, validation and view-model helpers.
mod api;
mod effect;
mod escape;
mod file;
mod msg;
mod notify;
mod render;
mod state;
mod update;
mod view_model;

pub use api::{ComponentScores, MatchResult, MatchScore, RefineResult, RequestFailure, Suggestion};
pub use effect::{Effect, Panel};
pub use escape::escape_html;
pub use file::{
    format_file_size, is_form_valid, validate_file, FileRejection, FileSource, SelectedFile,
    ACCEPTED_MIME_TYPES, MAX_UPLOAD_BYTES, MIME_DOCX, MIME_PDF, MIN_JOB_DESCRIPTION_CHARS,
};
pub use msg::Msg;
pub use notify::{
    stack_offset, Severity, Toast, ToastId, ToastPhase, ToastQueue, TOAST_FADE_FOR,
    TOAST_VISIBLE_FOR,
};
pub use render::{
    experience_bullets, percent_label, render_match, render_refine, MatchResultView, RefinedView,
    ScoreBarView, ScoreKind, NO_EXPERIENCE_TEXT, NO_SUMMARY_TEXT, SCORE_BAR_DELAY,
};
pub use state::{AppState, RequestId, RequestPhase};
pub use update::{update, MISSING_REFINE_INPUT};
pub use view_model::{
    ActionView, AppViewModel, FileInfoView, ToastView, ANALYZE_BUSY_LABEL, ANALYZE_LABEL,
    REFINE_BUSY_LABEL, REFINE_LABEL,
};
