use std::sync::Arc;

use catview_core::{update, AppState, AppViewModel, Effect, Msg, RequestId};
use catview_engine::ReqwestClient;
use catview_logging::catview_info;
use iced::widget::image::Handle;
use iced::{Element, Size, Task, Theme};

use super::config::AppConfig;
use super::effects::EffectRunner;
use super::error::AppError;
use super::logging;
use super::ui;
use super::ui::constants::{WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH};

pub fn run_app() -> Result<(), AppError> {
    let config = AppConfig::from_env()?;
    logging::initialize(config.log_destination);
    config.report_rejected();
    catview_info!("Using API base {}", config.client.api_base);

    iced::application(WINDOW_TITLE, CatViewer::update, CatViewer::view)
        .theme(CatViewer::theme)
        .window_size(Size::new(WINDOW_WIDTH, WINDOW_HEIGHT))
        .centered()
        .run_with(move || CatViewer::new(config))?;
    Ok(())
}

#[derive(Debug, Clone)]
pub enum Message {
    /// Anything the core state machine understands.
    Core(Msg),
    /// Decoded and resized bitmap for a delivered image.
    PreviewReady { request_id: RequestId, handle: Handle },
    PreviewFailed { request_id: RequestId, message: String },
}

struct CatViewer {
    state: AppState,
    view: AppViewModel,
    effects: EffectRunner,
    preview: Option<Handle>,
    preview_error: Option<String>,
}

impl CatViewer {
    fn new(config: AppConfig) -> (Self, Task<Message>) {
        let api_base = config.client.api_base.clone();
        let client = Arc::new(ReqwestClient::new(config.client));
        let (mut state, effects) = AppState::boot(api_base);
        state.consume_dirty();

        let mut viewer = Self {
            view: state.view(),
            state,
            effects: EffectRunner::new(client),
            preview: None,
            preview_error: None,
        };
        let task = viewer.run_effects(effects);
        (viewer, task)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Core(msg) => self.dispatch(msg),
            Message::PreviewReady { request_id, handle } => {
                if self.is_current_image(request_id) {
                    self.preview = Some(handle);
                    self.preview_error = None;
                }
                Task::none()
            }
            Message::PreviewFailed {
                request_id,
                message,
            } => {
                if self.is_current_image(request_id) {
                    self.preview = None;
                    self.preview_error = Some(format!("Could not display image: {message}"));
                }
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        ui::render::render(
            &self.view,
            self.preview.as_ref(),
            self.preview_error.as_deref(),
        )
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn dispatch(&mut self, msg: Msg) -> Task<Message> {
        let (mut state, effects) = update(self.state.clone(), msg);
        if state.consume_dirty() {
            self.view = state.view();
        }
        self.state = state;
        self.run_effects(effects)
    }

    fn run_effects(&mut self, effects: Vec<Effect>) -> Task<Message> {
        let mut tasks = Vec::with_capacity(effects.len());
        for effect in effects {
            match effect {
                Effect::PresentImage(payload) => {
                    self.preview_error = None;
                    tasks.push(self.effects.spawn(Effect::PresentImage(payload)));
                }
                Effect::ClearImage => {
                    self.preview = None;
                    self.preview_error = None;
                }
                Effect::Quit => {
                    catview_info!("Close requested");
                    tasks.push(iced::exit());
                }
                other => tasks.push(self.effects.spawn(other)),
            }
        }
        Task::batch(tasks)
    }

    fn is_current_image(&self, request_id: RequestId) -> bool {
        self.view
            .image
            .as_ref()
            .is_some_and(|payload| payload.request_id == request_id)
    }
}
