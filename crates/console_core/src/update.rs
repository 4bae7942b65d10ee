use crate::{AppState, Effect, Msg, RetrainStatus, RETRAIN_EPOCHS};

/// Alert shown when Predict is clicked before any file was chosen.
pub const CHOOSE_FILE_ALERT: &str = "Choose a file first";

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Started => vec![Effect::ProbeHealth],
        Msg::FileSelected(file) => {
            // Predictions from an earlier file stay visible until a new predict succeeds.
            state.select_file(file);
            Vec::new()
        }
        Msg::PredictClicked => match state.selected_file() {
            Some(file) => vec![Effect::Predict { file: file.clone() }],
            None => {
                state.raise_alert(CHOOSE_FILE_ALERT.to_string());
                Vec::new()
            }
        },
        Msg::PredictSucceeded(entries) => {
            state.replace_predictions(entries);
            Vec::new()
        }
        Msg::PredictFailed { message } => {
            state.raise_alert(format!("Prediction error: {message}"));
            Vec::new()
        }
        Msg::RetrainClicked => {
            // No in-flight guard: every click issues a request, last to resolve wins.
            state.set_retrain_status(RetrainStatus::InFlight);
            vec![Effect::TriggerRetrain {
                epochs: RETRAIN_EPOCHS,
            }]
        }
        Msg::RetrainSucceeded { payload } => {
            state.set_retrain_status(RetrainStatus::Done(payload));
            Vec::new()
        }
        Msg::RetrainFailed { message } => {
            state.set_retrain_status(RetrainStatus::Failed(message));
            Vec::new()
        }
        Msg::AlertDismissed => {
            state.dismiss_alert();
            Vec::new()
        }
    };

    (state, effects)
}
