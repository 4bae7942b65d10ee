use console_core::{AppViewModel, NO_PREDICTIONS_TEXT};
use eframe::egui;

use super::constants::*;

/// What the user did during this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    ChooseFile,
    Predict,
    TriggerRetrain,
    DismissAlert,
}

/// Draws the whole window from the view model. Never mutates state itself.
pub fn render(ctx: &egui::Context, view: &AppViewModel) -> Vec<UiAction> {
    let mut actions = Vec::new();

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading(WINDOW_TITLE);
        ui.add_space(12.0);

        ui.horizontal(|ui| {
            if ui.button(CHOOSE_FILE_LABEL).clicked() {
                actions.push(UiAction::ChooseFile);
            }
            ui.label(view.selected_file.as_deref().unwrap_or(NO_FILE_LABEL));
            if ui.button(PREDICT_LABEL).clicked() {
                actions.push(UiAction::Predict);
            }
        });
        ui.add_space(18.0);

        if ui.button(retrain_label()).clicked() {
            actions.push(UiAction::TriggerRetrain);
        }
        ui.label(view.retrain_status.as_str());
        ui.add_space(18.0);

        ui.heading(PREDICTIONS_HEADING);
        for row in prediction_rows(view) {
            ui.label(row);
        }
    });

    if let Some(message) = &view.alert {
        let modal = egui::Modal::new(egui::Id::new(ALERT_MODAL_ID)).show(ctx, |ui| {
            ui.set_width(280.0);
            ui.label(message.as_str());
            ui.add_space(8.0);
            if ui.button(ALERT_OK_LABEL).clicked() {
                actions.push(UiAction::DismissAlert);
            }
        });
        if modal.should_close() && !actions.contains(&UiAction::DismissAlert) {
            actions.push(UiAction::DismissAlert);
        }
    }

    actions
}

/// Text of each label under the Predictions heading.
fn prediction_rows(view: &AppViewModel) -> Vec<&str> {
    match &view.predictions {
        Some(lines) => lines.iter().map(String::as_str).collect(),
        None => vec![NO_PREDICTIONS_TEXT],
    }
}
