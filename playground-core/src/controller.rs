use std::sync::Arc;
use tokio::sync::{mpsc, watch, Mutex};
use tracing::debug;

use crate::{
    orchestrator::RunOrchestrator,
    session::{RunOutcome, SessionState},
    types::{LanguageId, SyntaxMode},
};

/// What a frontend may ask of the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionIntent {
    SelectLanguage(LanguageId),
    EditCode(String),
    TriggerRun,
}

/// What the session renders back to a frontend. A pure projection of the
/// session state; `running` doubles as the disable flag for run triggers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub language: LanguageId,
    pub syntax_mode: SyntaxMode,
    pub code: String,
    pub running: bool,
    pub output: Option<String>,
    pub error: Option<String>,
}

impl SessionSnapshot {
    fn of(session: &SessionState) -> Self {
        let (running, output, error) = match session.outcome() {
            RunOutcome::Idle => (false, None, None),
            RunOutcome::Running => (true, None, None),
            RunOutcome::Succeeded(output) => (false, Some(output.clone()), None),
            RunOutcome::Failed(message) => (false, None, Some(message.clone())),
        };

        Self {
            language: session.language(),
            syntax_mode: session.language().into(),
            code: session.code().to_owned(),
            running,
            output,
            error,
        }
    }
}

const INTENT_CHANNEL_CAPACITY: usize = 32;

/// Bridges a frontend to the session: intents in, snapshots out. Keeps the
/// core free of any UI toolkit coupling.
pub struct SessionController {
    orchestrator: RunOrchestrator,
    session: Arc<Mutex<SessionState>>,
    snapshots: Arc<watch::Sender<SessionSnapshot>>,
}

impl SessionController {
    /// Spawns the controller task. The task applies intents in arrival
    /// order and ends once every intent sender is dropped.
    pub async fn spawn(
        orchestrator: RunOrchestrator,
    ) -> (mpsc::Sender<SessionIntent>, watch::Receiver<SessionSnapshot>) {
        let session = orchestrator.session();
        let initial = SessionSnapshot::of(&*session.lock().await);
        let (snapshot_tx, snapshot_rx) = watch::channel(initial);
        let (intent_tx, intent_rx) = mpsc::channel(INTENT_CHANNEL_CAPACITY);

        let controller = Self {
            orchestrator,
            session,
            snapshots: Arc::new(snapshot_tx),
        };
        tokio::spawn(controller.serve(intent_rx));

        (intent_tx, snapshot_rx)
    }

    async fn serve(self, mut intents: mpsc::Receiver<SessionIntent>) {
        while let Some(intent) = intents.recv().await {
            self.apply(intent).await;
        }
        debug!("all intent senders dropped, session controller stopping");
    }

    async fn apply(&self, intent: SessionIntent) {
        match intent {
            SessionIntent::SelectLanguage(language) => {
                self.session.lock().await.set_language(language);
                self.publish().await;
            }
            SessionIntent::EditCode(code) => {
                self.session.lock().await.set_code(code);
                self.publish().await;
            }
            SessionIntent::TriggerRun => {
                let Some(request) = self.orchestrator.try_begin().await else {
                    return;
                };
                // The running snapshot must go out before the settled one
                self.publish().await;

                let orchestrator = self.orchestrator.clone();
                let session = self.session.clone();
                let snapshots = self.snapshots.clone();
                tokio::spawn(async move {
                    orchestrator.settle(request).await;
                    let snapshot = SessionSnapshot::of(&*session.lock().await);
                    let _ = snapshots.send(snapshot);
                });
            }
        }
    }

    async fn publish(&self) {
        let snapshot = SessionSnapshot::of(&*self.session.lock().await);
        let _ = self.snapshots.send(snapshot);
    }
}
