use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use match_core::{RequestId, SelectedFile};
use match_logging::{match_debug, match_warn};

use crate::client::{ApiSettings, MatchApi, ReqwestApi};
use crate::{EngineError, EngineEvent};

enum EngineCommand {
    Analyze {
        request_id: RequestId,
        file: SelectedFile,
        job_description: String,
    },
    Refine {
        request_id: RequestId,
        resume_text: String,
        job_description: String,
    },
}

/// Runs backend requests on a background Tokio runtime. Commands go in over
/// one channel, completions come back over another.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: ApiSettings) -> Result<Self, EngineError> {
        let api = ReqwestApi::new(settings)?;
        Self::with_api(Arc::new(api))
    }

    pub fn with_api(api: Arc<dyn MatchApi>) -> Result<Self, EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Runtime::new()?;

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let api = api.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(api.as_ref(), command, event_tx).await;
                });
            }
            match_debug!("Engine command channel closed");
        });

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn analyze(
        &self,
        request_id: RequestId,
        file: SelectedFile,
        job_description: String,
    ) -> Result<(), EngineError> {
        self.send(EngineCommand::Analyze {
            request_id,
            file,
            job_description,
        })
    }

    pub fn refine(
        &self,
        request_id: RequestId,
        resume_text: String,
        job_description: String,
    ) -> Result<(), EngineError> {
        self.send(EngineCommand::Refine {
            request_id,
            resume_text,
            job_description,
        })
    }

    /// Fails once the engine thread has exited, so the caller never waits
    /// for a completion that cannot arrive.
    fn send(&self, command: EngineCommand) -> Result<(), EngineError> {
        self.cmd_tx.send(command).map_err(|_| EngineError::Stopped)
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    api: &dyn MatchApi,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    let event = match command {
        EngineCommand::Analyze {
            request_id,
            file,
            job_description,
        } => EngineEvent::AnalyzeCompleted {
            request_id,
            result: api.analyze(&file, &job_description).await,
        },
        EngineCommand::Refine {
            request_id,
            resume_text,
            job_description,
        } => EngineEvent::RefineCompleted {
            request_id,
            result: api.refine(&resume_text, &job_description).await,
        },
    };
    if event_tx.send(event).is_err() {
        match_warn!("Engine event receiver dropped; completion discarded");
    }
}
