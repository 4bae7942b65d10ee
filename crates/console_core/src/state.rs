use std::fmt;

use crate::view_model::{format_prediction, AppViewModel};

/// A file chosen by the user, held in memory until the next selection.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct SelectedFile {
    pub name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl fmt::Debug for SelectedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectedFile")
            .field("name", &self.name)
            .field("mime", &self.mime)
            .field("len", &self.bytes.len())
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PredictionEntry {
    pub class: String,
    pub probability: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RetrainStatus {
    #[default]
    Idle,
    InFlight,
    Done(String),
    Failed(String),
}

impl fmt::Display for RetrainStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RetrainStatus::Idle => Ok(()),
            RetrainStatus::InFlight => write!(f, "Retraining..."),
            RetrainStatus::Done(payload) => write!(f, "Retrain done: {payload}"),
            RetrainStatus::Failed(message) => write!(f, "Retrain failed: {message}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    selected_file: Option<SelectedFile>,
    predictions: Option<Vec<PredictionEntry>>,
    retrain_status: RetrainStatus,
    alert: Option<String>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            selected_file: self.selected_file.as_ref().map(|file| file.name.clone()),
            predictions: self
                .predictions
                .as_ref()
                .map(|entries| entries.iter().map(format_prediction).collect()),
            retrain_status: self.retrain_status.to_string(),
            alert: self.alert.clone(),
            dirty: self.dirty,
        }
    }

    pub fn selected_file(&self) -> Option<&SelectedFile> {
        self.selected_file.as_ref()
    }

    pub fn predictions(&self) -> Option<&[PredictionEntry]> {
        self.predictions.as_deref()
    }

    pub fn retrain_status(&self) -> &RetrainStatus {
        &self.retrain_status
    }

    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    /// Returns whether anything changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn select_file(&mut self, file: SelectedFile) {
        self.selected_file = Some(file);
        self.dirty = true;
    }

    pub(crate) fn replace_predictions(&mut self, entries: Vec<PredictionEntry>) {
        self.predictions = Some(entries);
        self.dirty = true;
    }

    pub(crate) fn set_retrain_status(&mut self, status: RetrainStatus) {
        self.retrain_status = status;
        self.dirty = true;
    }

    pub(crate) fn raise_alert(&mut self, message: String) {
        self.alert = Some(message);
        self.dirty = true;
    }

    pub(crate) fn dismiss_alert(&mut self) {
        if self.alert.take().is_some() {
            self.dirty = true;
        }
    }
}
