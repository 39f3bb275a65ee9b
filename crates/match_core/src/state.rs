use crate::file::{format_file_size, is_form_valid};
use crate::notify::{stack_offset, Severity, ToastQueue};
use crate::render::{MatchResultView, RefinedView};
use crate::view_model::{
    ActionView, AppViewModel, FileInfoView, ToastView, ANALYZE_BUSY_LABEL, ANALYZE_LABEL,
    REFINE_BUSY_LABEL, REFINE_LABEL,
};
use crate::SelectedFile;

pub type RequestId = u64;

/// Lifecycle of one request kind. At most one request of each kind is in
/// flight; its id identifies the completion that ends it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestPhase {
    #[default]
    Idle,
    InFlight(RequestId),
}

impl RequestPhase {
    pub fn is_in_flight(self) -> bool {
        matches!(self, RequestPhase::InFlight(_))
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    selected_file: Option<SelectedFile>,
    job_description: String,
    extracted_resume_text: String,
    drag_active: bool,
    analyze: RequestPhase,
    refine: RequestPhase,
    last_request_id: RequestId,
    match_view: Option<MatchResultView>,
    refined_view: Option<RefinedView>,
    toasts: ToastQueue,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        let analyze_busy = self.analyze.is_in_flight();
        let refine_busy = self.refine.is_in_flight();
        AppViewModel {
            file: self.selected_file.as_ref().map(|file| FileInfoView {
                name: file.name.clone(),
                size_label: format_file_size(file.size),
            }),
            drop_zone_active: self.drag_active,
            job_description: self.job_description.clone(),
            analyze: ActionView {
                enabled: !analyze_busy && self.is_form_valid(),
                busy: analyze_busy,
                label: if analyze_busy {
                    ANALYZE_BUSY_LABEL
                } else {
                    ANALYZE_LABEL
                },
            },
            refine: ActionView {
                enabled: !refine_busy,
                busy: refine_busy,
                label: if refine_busy {
                    REFINE_BUSY_LABEL
                } else {
                    REFINE_LABEL
                },
            },
            results: self.match_view.clone(),
            refined: self.refined_view.clone(),
            toasts: self
                .toasts
                .iter()
                .enumerate()
                .map(|(index, toast)| ToastView {
                    id: toast.id,
                    message: toast.message.clone(),
                    severity: toast.severity,
                    color: toast.severity.color(),
                    phase: toast.phase(),
                    top_px: stack_offset(index),
                })
                .collect(),
            dirty: self.dirty,
        }
    }

    pub fn selected_file(&self) -> Option<&SelectedFile> {
        self.selected_file.as_ref()
    }

    pub fn job_description(&self) -> &str {
        &self.job_description
    }

    pub fn extracted_resume_text(&self) -> &str {
        &self.extracted_resume_text
    }

    pub fn analyze_phase(&self) -> RequestPhase {
        self.analyze
    }

    pub fn refine_phase(&self) -> RequestPhase {
        self.refine
    }

    pub fn is_form_valid(&self) -> bool {
        is_form_valid(self.selected_file.as_ref(), &self.job_description)
    }

    /// Returns whether the view changed since the last call and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn set_selected_file(&mut self, file: Option<SelectedFile>) {
        self.selected_file = file;
        self.mark_dirty();
    }

    pub(crate) fn set_job_description(&mut self, text: String) {
        if self.job_description != text {
            self.job_description = text;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_drag_active(&mut self, active: bool) {
        if self.drag_active != active {
            self.drag_active = active;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_extracted_resume_text(&mut self, text: String) {
        self.extracted_resume_text = text;
    }

    pub(crate) fn begin_analyze(&mut self) -> RequestId {
        let id = self.allocate_request_id();
        self.analyze = RequestPhase::InFlight(id);
        self.match_view = None;
        self.mark_dirty();
        id
    }

    /// Ends the analyze request if `request_id` is the one in flight.
    pub(crate) fn finish_analyze(&mut self, request_id: RequestId) -> bool {
        if self.analyze != RequestPhase::InFlight(request_id) {
            return false;
        }
        self.analyze = RequestPhase::Idle;
        self.mark_dirty();
        true
    }

    pub(crate) fn begin_refine(&mut self) -> RequestId {
        let id = self.allocate_request_id();
        self.refine = RequestPhase::InFlight(id);
        self.refined_view = None;
        self.mark_dirty();
        id
    }

    /// Ends the refine request if `request_id` is the one in flight.
    pub(crate) fn finish_refine(&mut self, request_id: RequestId) -> bool {
        if self.refine != RequestPhase::InFlight(request_id) {
            return false;
        }
        self.refine = RequestPhase::Idle;
        self.mark_dirty();
        true
    }

    pub(crate) fn show_match(&mut self, view: MatchResultView) {
        self.match_view = Some(view);
        self.mark_dirty();
    }

    pub(crate) fn show_refined(&mut self, view: RefinedView) {
        self.refined_view = Some(view);
        self.mark_dirty();
    }

    pub(crate) fn notify(&mut self, message: impl Into<String>, severity: Severity) {
        self.toasts.push(message, severity);
        self.mark_dirty();
    }

    pub(crate) fn advance_toasts(&mut self, elapsed: std::time::Duration) {
        if self.toasts.advance(elapsed) {
            self.mark_dirty();
        }
    }

    fn allocate_request_id(&mut self) -> RequestId {
        self.last_request_id += 1;
        self.last_request_id
    }
}
