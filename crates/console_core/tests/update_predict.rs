use std::sync::Once;

use console_core::{
    update, AppState, Effect, Msg, PredictionEntry, SelectedFile, CHOOSE_FILE_ALERT,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(console_logging::initialize_for_tests);
}

fn image(name: &str) -> SelectedFile {
    SelectedFile {
        name: name.to_string(),
        mime: "image/jpeg".to_string(),
        bytes: vec![0xff, 0xd8, 0xff, 0xe0],
    }
}

fn entry(class: &str, probability: f64) -> PredictionEntry {
    PredictionEntry {
        class: class.to_string(),
        probability,
    }
}

fn predicted(entries: Vec<PredictionEntry>) -> AppState {
    let (state, _) = update(AppState::new(), Msg::FileSelected(image("forest.jpg")));
    let (state, _) = update(state, Msg::PredictClicked);
    let (state, _) = update(state, Msg::PredictSucceeded(entries));
    state
}

#[test]
fn started_probes_health_without_touching_state() {
    init_logging();
    let (mut next, effects) = update(AppState::new(), Msg::Started);

    assert_eq!(effects, vec![Effect::ProbeHealth]);
    assert!(!next.consume_dirty());
}

#[test]
fn predict_without_file_alerts_and_sends_nothing() {
    init_logging();
    let (mut next, effects) = update(AppState::new(), Msg::PredictClicked);

    assert!(effects.is_empty());
    assert_eq!(next.alert(), Some(CHOOSE_FILE_ALERT));
    assert_eq!(next.view().alert.as_deref(), Some("Choose a file first"));
    assert!(next.consume_dirty());
}

#[test]
fn predict_with_file_emits_request_for_that_file() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::FileSelected(image("river.png")));
    assert!(effects.is_empty());

    let (next, effects) = update(state, Msg::PredictClicked);

    assert_eq!(
        effects,
        vec![Effect::Predict {
            file: image("river.png")
        }]
    );
    assert_eq!(next.alert(), None);
    assert_eq!(next.predictions(), None);
}

#[test]
fn selecting_again_replaces_the_file() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::FileSelected(image("a.png")));
    let (state, _) = update(state, Msg::FileSelected(image("b.png")));

    assert_eq!(state.selected_file().map(|f| f.name.as_str()), Some("b.png"));
    assert_eq!(state.view().selected_file.as_deref(), Some("b.png"));
}

#[test]
fn success_replaces_prediction_list() {
    init_logging();
    let state = predicted(vec![entry("Forest", 0.9), entry("River", 0.1)]);
    let (state, _) = update(state, Msg::PredictClicked);
    let (state, _) = update(state, Msg::PredictSucceeded(vec![entry("Highway", 0.5)]));

    assert_eq!(state.predictions(), Some(&[entry("Highway", 0.5)][..]));
}

#[test]
fn failure_alerts_and_keeps_previous_predictions() {
    init_logging();
    let state = predicted(vec![entry("Forest", 0.9)]);
    let before = state.predictions().map(<[PredictionEntry]>::to_vec);

    let (next, effects) = update(
        state,
        Msg::PredictFailed {
            message: "Request failed with status code 503".to_string(),
        },
    );

    assert!(effects.is_empty());
    assert_eq!(next.predictions().map(<[PredictionEntry]>::to_vec), before);
    assert_eq!(
        next.alert(),
        Some("Prediction error: Request failed with status code 503")
    );
}

#[test]
fn failure_before_any_success_leaves_list_absent() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::FileSelected(image("x.jpg")));
    let (next, _) = update(
        state,
        Msg::PredictFailed {
            message: "Network Error".to_string(),
        },
    );

    assert_eq!(next.predictions(), None);
    assert_eq!(next.view().predictions, None);
}

#[test]
fn new_selection_keeps_displayed_predictions() {
    init_logging();
    let state = predicted(vec![entry("SeaLake", 0.8657)]);
    let before = state.view().predictions;

    let (next, effects) = update(state, Msg::FileSelected(image("other.png")));

    assert!(effects.is_empty());
    assert_eq!(next.view().predictions, before);
    assert_eq!(
        next.view().predictions,
        Some(vec!["SeaLake: 86.57%".to_string()])
    );
}

#[test]
fn overlapping_predicts_are_not_guarded() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::FileSelected(image("a.png")));
    let (state, first) = update(state, Msg::PredictClicked);
    let (state, second) = update(state, Msg::PredictClicked);
    assert_eq!(first, second);

    let (state, _) = update(state, Msg::PredictSucceeded(vec![entry("Forest", 0.7)]));
    let (state, _) = update(state, Msg::PredictSucceeded(vec![entry("River", 0.6)]));

    assert_eq!(state.predictions(), Some(&[entry("River", 0.6)][..]));
}

#[test]
fn dismissing_alert_clears_it() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::PredictClicked);
    let (mut state, _) = update(state, Msg::AlertDismissed);
    assert_eq!(state.alert(), None);
    assert!(state.consume_dirty());

    let (mut state, _) = update(state, Msg::AlertDismissed);
    assert!(!state.consume_dirty());
}
