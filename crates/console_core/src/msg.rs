#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Window finished its initial setup.
    Started,
    /// User picked a file in the native dialog.
    FileSelected(crate::SelectedFile),
    /// User clicked Predict.
    PredictClicked,
    /// Prediction service answered with a list of entries.
    PredictSucceeded(Vec<crate::PredictionEntry>),
    /// Prediction request failed (transport or non-2xx).
    PredictFailed { message: String },
    /// User clicked Trigger Retrain.
    RetrainClicked,
    /// Retrain endpoint answered; `payload` is the compact JSON body.
    RetrainSucceeded { payload: String },
    /// Retrain request failed (transport or non-2xx).
    RetrainFailed { message: String },
    /// User closed the alert dialog.
    AlertDismissed,
}
