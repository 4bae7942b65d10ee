use console_core::RETRAIN_EPOCHS;

pub const WINDOW_TITLE: &str = "EuroSAT Image Classifier";
pub const CHOOSE_FILE_LABEL: &str = "Choose file…";
pub const NO_FILE_LABEL: &str = "No file chosen";
pub const PREDICT_LABEL: &str = "Predict";
pub const PREDICTIONS_HEADING: &str = "Predictions";
pub const ALERT_OK_LABEL: &str = "OK";
pub const ALERT_MODAL_ID: &str = "alert_modal";

pub fn retrain_label() -> String {
    format!("Trigger Retrain ({RETRAIN_EPOCHS} epochs)")
}
