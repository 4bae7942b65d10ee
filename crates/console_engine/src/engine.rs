use std::sync::{mpsc, Arc, Mutex};
use std::thread;
use std::time::Duration;

use console_logging::{console_debug, console_error, console_info, console_warn};

use crate::client::{ClientSettings, PredictionClient, ReqwestClient};
use crate::{ClientError, EngineEvent, UploadFile};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineCommand {
    ProbeHealth,
    Predict { file: UploadFile },
    TriggerRetrain { epochs: u32 },
}

/// Runs commands on a background tokio runtime. Each command becomes an
/// independent task; completions arrive in whatever order they resolve.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: Arc<Mutex<mpsc::Receiver<EngineEvent>>>,
}

impl EngineHandle {
    pub fn new(settings: ClientSettings) -> Result<Self, ClientError> {
        let client = ReqwestClient::new(settings)?;
        Ok(Self::with_client(Arc::new(client)))
    }

    pub fn with_client(client: Arc<dyn PredictionClient>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    console_error!("Failed to start engine runtime: {}", err);
                    return;
                }
            };
            while let Ok(command) = cmd_rx.recv() {
                let client = client.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(client.as_ref(), command, event_tx).await;
                });
            }
        });

        Self {
            cmd_tx,
            event_rx: Arc::new(Mutex::new(event_rx)),
        }
    }

    /// Fire-and-forget; there is no way to cancel or join a submitted command.
    pub fn submit(&self, command: EngineCommand) {
        if self.cmd_tx.send(command).is_err() {
            console_warn!("Engine thread is gone; command dropped");
        }
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.lock().ok()?.try_recv().ok()
    }

    /// Blocks until the next event. Returns `None` once the engine has shut down.
    pub fn recv(&self) -> Option<EngineEvent> {
        self.event_rx.lock().ok()?.recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.lock().ok()?.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    client: &dyn PredictionClient,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::ProbeHealth => match client.probe_health().await {
            Ok(report) => console_info!(
                "Health probe: status={:?} model_loaded={}",
                report.status,
                report.model_loaded
            ),
            Err(err) => console_debug!("Health probe failed (ignored): {} {:?}", err, err.detail),
        },
        EngineCommand::Predict { file } => {
            let result = client.predict(&file).await;
            if let Err(err) = &result {
                console_warn!("Predict for {} failed: {} ({})", file.name, err, err.kind);
            }
            let _ = event_tx.send(EngineEvent::PredictCompleted(result));
        }
        EngineCommand::TriggerRetrain { epochs } => {
            let result = client.trigger_retrain(epochs).await;
            if let Err(err) = &result {
                console_warn!("Retrain ({} epochs) failed: {} ({})", epochs, err, err.kind);
            }
            let _ = event_tx.send(EngineEvent::RetrainCompleted(result));
        }
    }
}
