use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use match_core::{Effect, Msg, Panel, RequestFailure, RequestId};
use match_engine::{ApiSettings, EngineError, EngineEvent, EngineHandle};
use match_logging::{match_debug, match_warn};

use super::ui::{ElementId, Page, PageCommand};

/// Slack on top of the HTTP timeouts before a request counts as lost.
const RESPONSE_GRACE: Duration = Duration::from_secs(5);

/// Executes effects from `update` against the engine and the page, and turns
/// engine completions back into messages.
pub struct EffectRunner {
    engine: EngineHandle,
    scrolls: Vec<(Instant, Panel)>,
    response_window: Duration,
    outstanding: BTreeMap<RequestId, Instant>,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle, response_window: Duration) -> Self {
        Self {
            engine,
            scrolls: Vec::new(),
            response_window,
            outstanding: BTreeMap::new(),
        }
    }

    /// Longest a request may go without a completion: both HTTP timeouts
    /// plus a grace period.
    pub fn response_window_for(settings: &ApiSettings) -> Duration {
        settings.connect_timeout + settings.request_timeout + RESPONSE_GRACE
    }

    pub fn enqueue(&mut self, effects: Vec<Effect>, page: &mut Page) -> Result<(), EngineError> {
        for effect in effects {
            match effect {
                Effect::ResetFileInput => {
                    page.apply(vec![PageCommand::ClearValue {
                        id: ElementId::ResumeFile,
                    }]);
                }
                Effect::SubmitAnalyze {
                    request_id,
                    file,
                    job_description,
                } => {
                    match_debug!(
                        "SubmitAnalyze request_id={} file={} description_len={}",
                        request_id,
                        file.name,
                        job_description.len()
                    );
                    self.engine.analyze(request_id, file, job_description)?;
                    self.track(request_id);
                }
                Effect::SubmitRefine {
                    request_id,
                    resume_text,
                    job_description,
                } => {
                    match_debug!(
                        "SubmitRefine request_id={} resume_len={}",
                        request_id,
                        resume_text.len()
                    );
                    self.engine.refine(request_id, resume_text, job_description)?;
                    self.track(request_id);
                }
                Effect::ScrollIntoView { panel, delay } => {
                    self.scrolls.push((Instant::now() + delay, panel));
                }
            }
        }
        Ok(())
    }

    fn track(&mut self, request_id: RequestId) {
        self.outstanding
            .insert(request_id, Instant::now() + self.response_window);
    }

    /// Waits up to `timeout` for the next engine completion.
    pub fn next_msg(&mut self, timeout: Duration) -> Option<Msg> {
        let event = self.engine.recv_timeout(timeout)?;
        let request_id = match &event {
            EngineEvent::AnalyzeCompleted { request_id, .. }
            | EngineEvent::RefineCompleted { request_id, .. } => *request_id,
        };
        self.outstanding.remove(&request_id);
        Some(match event {
            EngineEvent::AnalyzeCompleted { request_id, result } => {
                if let Err(err) = &result {
                    match_warn!("Analyze request_id={} failed: {}", request_id, err);
                }
                Msg::AnalyzeCompleted {
                    request_id,
                    result: result.map_err(RequestFailure::from),
                }
            }
            EngineEvent::RefineCompleted { request_id, result } => {
                if let Err(err) = &result {
                    match_warn!("Refine request_id={} failed: {}", request_id, err);
                }
                Msg::RefineCompleted {
                    request_id,
                    result: result.map_err(RequestFailure::from),
                }
            }
        })
    }

    /// Removes and returns the scrolls whose delay has elapsed.
    pub fn due_scrolls(&mut self, now: Instant) -> Vec<Panel> {
        let (due, pending): (Vec<_>, Vec<_>) =
            self.scrolls.drain(..).partition(|(at, _)| *at <= now);
        self.scrolls = pending;
        due.into_iter().map(|(_, panel)| panel).collect()
    }

    pub fn has_pending_scrolls(&self) -> bool {
        !self.scrolls.is_empty()
    }

    /// A submitted request whose completion is past its deadline.
    pub fn overdue_request(&self, now: Instant) -> Option<RequestId> {
        self.outstanding
            .iter()
            .find(|(_, deadline)| **deadline <= now)
            .map(|(request_id, _)| *request_id)
    }
}

pub fn panel_element(panel: Panel) -> ElementId {
    match panel {
        Panel::Results => ElementId::Results,
        Panel::Refined => ElementId::RefinedContent,
    }
}
