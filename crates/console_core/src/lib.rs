//! Prediction console core: pure state, messages, effects and view model.
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::{Effect, RETRAIN_EPOCHS};
pub use msg::Msg;
pub use state::{AppState, PredictionEntry, RetrainStatus, SelectedFile};
pub use update::{update, CHOOSE_FILE_ALERT};
pub use view_model::{format_prediction, AppViewModel, NO_PREDICTIONS_TEXT};
