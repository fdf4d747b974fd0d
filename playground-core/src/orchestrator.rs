use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, error, info};

use crate::{
    client::ExecutionBackend,
    error::Error,
    session::SessionState,
    types::{RunRequest, RunResult},
};

/// Shown instead of an empty output region after a successful run
pub const NO_OUTPUT_PLACEHOLDER: &str = "No output returned.";

/// Shown when a failure carries no message of its own
pub const GENERIC_FAILURE_MESSAGE: &str = "An unexpected error occurred.";

/// Issues at most one outstanding run per session and reconciles the
/// result back into session state.
#[derive(Clone)]
pub struct RunOrchestrator {
    session: Arc<Mutex<SessionState>>,
    backend: Arc<dyn ExecutionBackend>,
}

impl RunOrchestrator {
    pub fn new(session: Arc<Mutex<SessionState>>, backend: Arc<dyn ExecutionBackend>) -> Self {
        Self { session, backend }
    }

    /// Handle to the session this orchestrator drives
    pub fn session(&self) -> Arc<Mutex<SessionState>> {
        self.session.clone()
    }

    /// Runs the current session code against the execution service.
    ///
    /// A trigger while a run is already in flight is ignored. Every failure
    /// settles into the `Failed` outcome; nothing propagates to the caller,
    /// and the `Running` state is cleared on every exit path.
    pub async fn run(&self) {
        let Some(request) = self.try_begin().await else {
            return;
        };
        self.settle(request).await;
    }

    /// Overlap guard, transition to `Running`, and request snapshot as one
    /// step under the session lock. `None` when a run is already in flight.
    pub(crate) async fn try_begin(&self) -> Option<RunRequest> {
        let mut session = self.session.lock().await;
        if session.outcome().is_running() {
            debug!("run already in flight, ignoring trigger");
            return None;
        }

        session.begin_run();
        Some(RunRequest::new(
            session.language(),
            session.code().to_owned(),
        ))
    }

    /// Dispatches a snapshot and writes the settled outcome back
    pub(crate) async fn settle(&self, request: RunRequest) {
        let result = self.backend.execute(&request).await;

        let mut session = self.session.lock().await;
        match result {
            Ok(RunResult { output }) => {
                info!(run_id = %request.id, "run succeeded");
                let output = if output.is_empty() {
                    NO_OUTPUT_PLACEHOLDER.to_string()
                } else {
                    output
                };
                session.complete_run(output);
            }
            Err(err) => {
                error!(run_id = %request.id, error = %err, "run failed");
                session.fail_run(failure_message(&err));
            }
        }
    }
}

fn failure_message(err: &Error) -> String {
    let message = err.to_string();
    if message.is_empty() {
        GENERIC_FAILURE_MESSAGE.to_string()
    } else {
        message
    }
}
