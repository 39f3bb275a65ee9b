use crate::notify::{Severity, ToastId, ToastPhase};
use crate::render::{MatchResultView, RefinedView};

pub const ANALYZE_LABEL: &str = "Analyze Resume";
pub const ANALYZE_BUSY_LABEL: &str = "Analyzing...";
pub const REFINE_LABEL: &str = "Refine Resume";
pub const REFINE_BUSY_LABEL: &str = "Refining...";

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppViewModel {
    /// `None` shows the upload placeholder instead of the file-info panel.
    pub file: Option<FileInfoView>,
    pub drop_zone_active: bool,
    pub job_description: String,
    pub analyze: ActionView,
    pub refine: ActionView,
    /// `None` hides the results panel.
    pub results: Option<MatchResultView>,
    /// `None` hides the refined-content panel.
    pub refined: Option<RefinedView>,
    pub toasts: Vec<ToastView>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInfoView {
    pub name: String,
    pub size_label: String,
}

/// A trigger button together with its spinner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActionView {
    pub enabled: bool,
    pub busy: bool,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastView {
    pub id: ToastId,
    pub message: String,
    pub severity: Severity,
    pub color: &'static str,
    pub phase: ToastPhase,
    pub top_px: u32,
}
