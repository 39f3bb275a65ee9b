use std::io::{self, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use chrono::Utc;
use match_core::{update, AppState, FileSource, Msg, MIN_JOB_DESCRIPTION_CHARS};
use match_engine::EngineHandle;
use match_logging::{match_debug, match_info};

use super::config::{AppConfig, Cli};
use super::effects::{panel_element, EffectRunner};
use super::ui::console::Console;
use super::ui::render::render;
use super::ui::{ElementId, Page, PageBindings, PAGE_TEMPLATE};
use super::{logging, report};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// True when match results were rendered.
    pub analyzed: bool,
    pub report: Option<PathBuf>,
}

pub fn run_app(cli: Cli) -> Result<Outcome> {
    logging::initialize(cli.verbose);

    let config = AppConfig::from_cli(&cli)?;
    match_info!(
        "Starting resume-match: resume={:?} api={} refine={}",
        config.resume.path,
        config.api.base_url,
        config.refine
    );

    let bindings =
        PageBindings::from_template(PAGE_TEMPLATE).context("Failed to bind page template")?;
    let engine = EngineHandle::new(config.api.clone()).context("Failed to start request engine")?;
    let runner = EffectRunner::new(engine, EffectRunner::response_window_for(&config.api));
    let mut session = Session::new(Page::new(bindings), runner);

    session.dispatch(Msg::JobDescriptionChanged(config.job_description.clone()))?;
    session.dispatch(Msg::FileSelected {
        file: config.resume.clone(),
        source: FileSource::Browse,
    })?;
    if session.state.selected_file().is_none() {
        return session.finish(&config);
    }
    if !session.state.is_form_valid() {
        bail!(
            "Job description must be longer than {} characters",
            MIN_JOB_DESCRIPTION_CHARS
        );
    }
    session.dispatch(Msg::AnalyzeClicked)?;

    let mut refine_requested = false;
    let mut last_tick = Instant::now();
    loop {
        session.show_due_panels()?;

        if session.is_idle() {
            let can_refine = !session.state.extracted_resume_text().is_empty();
            if config.refine && !refine_requested && can_refine {
                refine_requested = true;
                session.dispatch(Msg::RefineClicked)?;
                continue;
            }
            break;
        }

        if let Some(request_id) = session.runner.overdue_request(Instant::now()) {
            bail!(
                "No response for request {} from the request engine; giving up",
                request_id
            );
        }
        if let Some(msg) = session.runner.next_msg(POLL_INTERVAL) {
            session.dispatch(msg)?;
        }
        let now = Instant::now();
        session.dispatch(Msg::Tick {
            elapsed: now - last_tick,
        })?;
        last_tick = now;
    }

    session.finish(&config)
}

struct Session {
    state: AppState,
    page: Page,
    runner: EffectRunner,
    console: Console,
}

impl Session {
    fn new(page: Page, runner: EffectRunner) -> Self {
        Self {
            state: AppState::new(),
            page,
            runner,
            console: Console::default(),
        }
    }

    fn dispatch(&mut self, msg: Msg) -> Result<()> {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        self.runner
            .enqueue(effects, &mut self.page)
            .context("Failed to submit request")?;

        if state.consume_dirty() {
            let view = state.view();
            self.page.apply(render(&view));
            self.console.present(&mut io::stdout().lock(), &view)?;
        }
        self.state = state;
        Ok(())
    }

    fn show_due_panels(&mut self) -> io::Result<()> {
        let due = self.runner.due_scrolls(Instant::now());
        if due.is_empty() {
            return Ok(());
        }
        let view = self.state.view();
        let mut out = io::stdout().lock();
        for panel in due {
            match_debug!("Scrolling {:?} into view", panel);
            self.page.scroll_to(panel_element(panel));
            self.console.show_panel(&mut out, panel, &view)?;
        }
        out.flush()
    }

    fn is_idle(&self) -> bool {
        !self.state.analyze_phase().is_in_flight()
            && !self.state.refine_phase().is_in_flight()
            && !self.runner.has_pending_scrolls()
    }

    fn finish(self, config: &AppConfig) -> Result<Outcome> {
        let analyzed = self.state.view().results.is_some();
        match_debug!(
            "Final page: overall={:?} results_visible={} refined_visible={} scroll_target={:?}",
            self.page.content(ElementId::OverallScore),
            self.page.is_visible(ElementId::Results),
            self.page.is_visible(ElementId::RefinedContent),
            self.page.scroll_target()
        );
        let report = match &config.report {
            Some(target) => Some(
                report::save_report(target, &self.page.to_html(), Utc::now())
                    .with_context(|| format!("Failed to write report {}", target.display()))?,
            ),
            None => None,
        };
        if let Some(path) = &report {
            println!("Report written to {}", path.display());
        }
        match_info!("Run finished: analyzed={}", analyzed);
        Ok(Outcome { analyzed, report })
    }
}
