use std::time::Duration;

use crate::{FileSource, MatchResult, RefineResult, RequestFailure, RequestId, SelectedFile};

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// User picked, dropped or changed the resume file.
    FileSelected {
        file: SelectedFile,
        source: FileSource,
    },
    /// User clicked the remove button on the file-info panel.
    FileRemoved,
    /// A drag entered the drop zone.
    DragEntered,
    /// A drag left the drop zone without dropping.
    DragLeft,
    /// User edited the job description.
    JobDescriptionChanged(String),
    /// User clicked Analyze.
    AnalyzeClicked,
    /// Engine completion for an analyze request.
    AnalyzeCompleted {
        request_id: RequestId,
        result: Result<MatchResult, RequestFailure>,
    },
    /// User clicked Refine.
    RefineClicked,
    /// Engine completion for a refine request.
    RefineCompleted {
        request_id: RequestId,
        result: Result<RefineResult, RequestFailure>,
    },
    /// Wall-clock time passed; drives notification ageing.
    Tick { elapsed: Duration },
}
