use std::path::Path;
use std::sync::mpsc;

use console_core::{update, AppState, Msg};
use console_engine::{ClientError, ClientSettings};
use console_logging::{console_info, console_warn};
use eframe::egui;

use super::effects::EffectRunner;
use super::logging;
use super::settings::{self, ConsoleSettings, SETTINGS_FILENAME};
use super::ui::render::UiAction;
use super::{files, ui};

pub fn run_app() -> eframe::Result<()> {
    let (settings, load_error) = match settings::load(Path::new(".")) {
        Ok(loaded) => (loaded.unwrap_or_default(), None),
        Err(err) => (ConsoleSettings::default(), Some(err)),
    };

    logging::initialize(console_logging::parse_level(&settings.log_level));
    if let Some(err) = load_error {
        console_warn!("Ignoring {}: {}; using defaults", SETTINGS_FILENAME, err);
    }

    let client_settings = settings.client_settings().unwrap_or_else(|err| {
        console_warn!("{}; falling back to {}", err, ClientSettings::default().base_url);
        ClientSettings::default()
    });
    console_info!(
        "Prediction console starting against {}",
        client_settings.base_url
    );

    eframe::run_native(
        ui::constants::WINDOW_TITLE,
        ui::layout::native_options(),
        Box::new(move |cc| {
            let app = ConsoleApp::new(cc, client_settings)?;
            Ok(Box::new(app))
        }),
    )
}

/// Owns the only copy of the state; everything else talks to it through `Msg`.
struct ConsoleApp {
    state: AppState,
    msg_tx: mpsc::Sender<Msg>,
    msg_rx: mpsc::Receiver<Msg>,
    effects: EffectRunner,
}

impl ConsoleApp {
    fn new(cc: &eframe::CreationContext<'_>, settings: ClientSettings) -> Result<Self, ClientError> {
        let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
        let effects = EffectRunner::new(settings, msg_tx.clone(), cc.egui_ctx.clone())?;
        let _ = msg_tx.send(Msg::Started);

        Ok(Self {
            state: AppState::new(),
            msg_tx,
            msg_rx,
            effects,
        })
    }

    fn process_pending_messages(&mut self, ctx: &egui::Context) {
        let inbox: Vec<Msg> = self.msg_rx.try_iter().collect();
        for msg in inbox {
            self.dispatch_msg(ctx, msg);
        }
    }

    fn dispatch_msg(&mut self, ctx: &egui::Context, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let was_dirty = state.consume_dirty();
        self.state = state;

        self.effects.enqueue(effects);
        if was_dirty {
            ctx.request_repaint();
        }
    }

    fn handle_action(&mut self, action: UiAction) {
        let msg = match action {
            UiAction::ChooseFile => {
                let Some(path) = files::pick_file() else {
                    return;
                };
                match files::read_selected_file(&path) {
                    Ok(file) => {
                        console_info!("Selected {} ({} bytes)", file.name, file.bytes.len());
                        Msg::FileSelected(file)
                    }
                    Err(err) => {
                        console_warn!("Could not read {:?}: {}", path, err);
                        return;
                    }
                }
            }
            UiAction::Predict => Msg::PredictClicked,
            UiAction::TriggerRetrain => Msg::RetrainClicked,
            UiAction::DismissAlert => Msg::AlertDismissed,
        };
        let _ = self.msg_tx.send(msg);
    }
}

impl eframe::App for ConsoleApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_pending_messages(ctx);

        let view = self.state.view();
        for action in ui::render::render(ctx, &view) {
            self.handle_action(action);
        }

        // Messages posted by this frame's actions are applied right away.
        self.process_pending_messages(ctx);
    }
}
