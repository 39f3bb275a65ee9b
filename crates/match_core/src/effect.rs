use std::time::Duration;

use crate::{RequestId, SelectedFile};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Clear the native file input so the same file can be picked again.
    ResetFileInput,
    /// `POST /match/` with the resume file and the trimmed job description.
    SubmitAnalyze {
        request_id: RequestId,
        file: SelectedFile,
        job_description: String,
    },
    /// `POST /refine/` with the extracted resume text and the job description.
    SubmitRefine {
        request_id: RequestId,
        resume_text: String,
        job_description: String,
    },
    ScrollIntoView { panel: Panel, delay: Duration },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Results,
    Refined,
}
