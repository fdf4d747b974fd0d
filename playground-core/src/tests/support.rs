use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::{
    client::ExecutionBackend,
    error::Error,
    orchestrator::RunOrchestrator,
    session::SessionState,
    types::{RunRequest, RunResult},
};

/// Canned service behavior for [`StubBackend`]
#[derive(Debug, Clone, Copy)]
pub enum StubResponse {
    Output(&'static str),
    Rejected(u16),
    Malformed,
}

/// Backend double that replies with a canned response after a delay and
/// records every request it sees
pub struct StubBackend {
    response: StubResponse,
    delay: Duration,
    calls: AtomicUsize,
    seen: Mutex<Vec<RunRequest>>,
}

impl StubBackend {
    pub fn new(response: StubResponse) -> Arc<Self> {
        Self::with_delay(response, Duration::ZERO)
    }

    pub fn with_delay(response: StubResponse, delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            response,
            delay,
            calls: AtomicUsize::new(0),
            seen: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub async fn seen(&self) -> Vec<RunRequest> {
        self.seen.lock().await.clone()
    }
}

#[async_trait]
impl ExecutionBackend for StubBackend {
    async fn execute(&self, request: &RunRequest) -> Result<RunResult, Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen.lock().await.push(request.clone());
        tokio::time::sleep(self.delay).await;

        match self.response {
            StubResponse::Output(output) => Ok(RunResult {
                output: output.to_string(),
            }),
            StubResponse::Rejected(status_code) => Err(Error::Rejected { status_code }),
            StubResponse::Malformed => Err(Error::MalformedResponse(
                "expected value at line 1 column 1".to_string(),
            )),
        }
    }
}

pub fn session() -> Arc<Mutex<SessionState>> {
    Arc::new(Mutex::new(SessionState::default()))
}

pub fn orchestrator_with(backend: Arc<StubBackend>) -> RunOrchestrator {
    RunOrchestrator::new(session(), backend)
}
