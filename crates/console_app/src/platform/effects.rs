use std::sync::mpsc;
use std::thread;

use console_core::{Effect, Msg, PredictionEntry, SelectedFile};
use console_engine::{
    ClientError, ClientSettings, EngineCommand, EngineEvent, EngineHandle, UploadFile,
};
use console_logging::{console_debug, console_info};

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(
        settings: ClientSettings,
        msg_tx: mpsc::Sender<Msg>,
        ctx: egui::Context,
    ) -> Result<Self, ClientError> {
        let engine = EngineHandle::new(settings)?;
        let runner = Self { engine };
        runner.spawn_event_loop(msg_tx, ctx);
        Ok(runner)
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            self.engine.submit(to_command(effect));
        }
    }

    fn spawn_event_loop(&self, msg_tx: mpsc::Sender<Msg>, ctx: egui::Context) {
        let engine = self.engine.clone();
        thread::spawn(move || {
            while let Some(event) = engine.recv() {
                if msg_tx.send(to_msg(event)).is_err() {
                    console_debug!("UI gone; stopping engine event loop");
                    break;
                }
                ctx.request_repaint();
            }
        });
    }
}

fn to_command(effect: Effect) -> EngineCommand {
    match effect {
        Effect::ProbeHealth => EngineCommand::ProbeHealth,
        Effect::Predict { file } => {
            console_info!("Predict file={} len={}", file.name, file.bytes.len());
            EngineCommand::Predict {
                file: to_upload(file),
            }
        }
        Effect::TriggerRetrain { epochs } => {
            console_info!("TriggerRetrain epochs={}", epochs);
            EngineCommand::TriggerRetrain { epochs }
        }
    }
}

fn to_upload(file: SelectedFile) -> UploadFile {
    UploadFile {
        name: file.name,
        mime: file.mime,
        bytes: file.bytes,
    }
}

fn to_msg(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::PredictCompleted(Ok(predictions)) => Msg::PredictSucceeded(
            predictions
                .into_iter()
                .map(|p| PredictionEntry {
                    class: p.class,
                    probability: p.probability,
                })
                .collect(),
        ),
        EngineEvent::PredictCompleted(Err(err)) => Msg::PredictFailed {
            message: err.message,
        },
        // Value's Display is compact JSON with keys in response order.
        EngineEvent::RetrainCompleted(Ok(payload)) => Msg::RetrainSucceeded {
            payload: payload.to_string(),
        },
        EngineEvent::RetrainCompleted(Err(err)) => Msg::RetrainFailed {
            message: err.message,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use console_engine::{FailureKind, Prediction};

    fn network_error() -> ClientError {
        ClientError {
            kind: FailureKind::Network,
            message: "Network Error".to_string(),
            detail: Some("connection refused".to_string()),
        }
    }

    #[test]
    fn predict_effect_carries_the_file() {
        let command = to_command(Effect::Predict {
            file: SelectedFile {
                name: "x.png".to_string(),
                mime: "image/png".to_string(),
                bytes: vec![9, 9],
            },
        });

        assert_eq!(
            command,
            EngineCommand::Predict {
                file: UploadFile {
                    name: "x.png".to_string(),
                    mime: "image/png".to_string(),
                    bytes: vec![9, 9],
                }
            }
        );
    }

    #[test]
    fn retrain_and_health_map_directly() {
        assert_eq!(
            to_command(Effect::TriggerRetrain { epochs: 3 }),
            EngineCommand::TriggerRetrain { epochs: 3 }
        );
        assert_eq!(to_command(Effect::ProbeHealth), EngineCommand::ProbeHealth);
    }

    #[test]
    fn predictions_become_entries() {
        let msg = to_msg(EngineEvent::PredictCompleted(Ok(vec![Prediction {
            class: "Industrial".to_string(),
            probability: 0.42,
        }])));

        assert_eq!(
            msg,
            Msg::PredictSucceeded(vec![PredictionEntry {
                class: "Industrial".to_string(),
                probability: 0.42,
            }])
        );
    }

    #[test]
    fn failures_forward_the_user_message() {
        assert_eq!(
            to_msg(EngineEvent::PredictCompleted(Err(network_error()))),
            Msg::PredictFailed {
                message: "Network Error".to_string()
            }
        );
        assert_eq!(
            to_msg(EngineEvent::RetrainCompleted(Err(network_error()))),
            Msg::RetrainFailed {
                message: "Network Error".to_string()
            }
        );
    }

    #[test]
    fn retrain_payload_is_compact_json_in_order() {
        let payload: serde_json::Value =
            serde_json::from_str(r#"{ "status": "retrained", "duration_seconds": 3.5 }"#).unwrap();

        assert_eq!(
            to_msg(EngineEvent::RetrainCompleted(Ok(payload))),
            Msg::RetrainSucceeded {
                payload: r#"{"status":"retrained","duration_seconds":3.5}"#.to_string()
            }
        );
    }

    #[test]
    fn ok_payload_matches_status_format() {
        let msg = to_msg(EngineEvent::RetrainCompleted(Ok(serde_json::json!({"ok": true}))));
        assert_eq!(
            msg,
            Msg::RetrainSucceeded {
                payload: "{\"ok\":true}".to_string()
            }
        );
    }

    #[test]
    fn empty_retrain_body_shows_as_empty_json_string() {
        let msg = to_msg(EngineEvent::RetrainCompleted(Ok(serde_json::json!(""))));
        assert_eq!(
            msg,
            Msg::RetrainSucceeded {
                payload: r#""""#.to_string()
            }
        );
    }
}
