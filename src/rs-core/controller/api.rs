use crate::{
    bindings::{
        jsAnnounceFinish, jsAnnounceProgress, jsAnnounceReady, CallbackId, ContainerId,
        JsHost, LogLevel,
    },
    provider::{FinishInfo, ReadyHandle},
    runtime::VideoState,
    session::SessionController,
    utils::logger::{Logger, LoggerLevel},
    wasm_bindgen,
};

use super::EmbedController;

/// Methods exposed to the JavaScript-side.
///
/// Note that these are not the only methods callable by JavaScript. There's
/// also "event_listeners" which as its name point at, should be called when particular
/// events happen. Such "event_listeners" are defined in its own file.
#[wasm_bindgen]
impl EmbedController {
    /// Create a new `EmbedController`, knowing every supported provider.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        EmbedController {
            session: SessionController::new(Box::new(JsHost)),
        }
    }

    /// Embed the video described by the container's attributes in it.
    pub fn load_video(&mut self, container: ContainerId) {
        self.session.load_video(container);
    }

    /// Play the video embedded in the container, as soon as its player allows it.
    pub fn play_video(&mut self, container: ContainerId) {
        self.session.play_video(container);
    }

    /// Pause the videos embedded in the given containers. Containers without an
    /// embedded video are ignored.
    pub fn pause_video(&mut self, containers: Vec<ContainerId>) {
        self.session.pause_video(&containers);
    }

    /// Have `jsAnnounceReady` called with `callback_id` once the container's
    /// provider API is available.
    pub fn when_ready(&mut self, container: ContainerId, callback_id: CallbackId) {
        self.session.when_ready(
            container,
            Box::new(move |handle: ReadyHandle| {
                jsAnnounceReady(callback_id, handle.container, handle.player)
            }),
        );
    }

    /// Have `jsAnnounceProgress` called with `callback_id` each time the
    /// container's playback progress is known.
    pub fn watch_progress(&mut self, container: ContainerId, callback_id: CallbackId) {
        self.session.watch_progress(
            container,
            Box::new(move |percent: f64| jsAnnounceProgress(callback_id, container, percent)),
        );
    }

    /// Have `jsAnnounceFinish` called with `callback_id` each time the
    /// container's video ends.
    pub fn watch_finish(&mut self, container: ContainerId, callback_id: CallbackId) {
        self.session.watch_finish(
            container,
            Box::new(move |info: FinishInfo| jsAnnounceFinish(callback_id, info.container)),
        );
    }

    pub fn video_state(&self, container: ContainerId) -> VideoState {
        self.session.video_state(container)
    }

    pub fn set_readiness_poll_interval(&mut self, interval: f64) {
        self.session.runtime_mut().config_mut().readiness_poll_interval = interval;
    }

    /// Set the maximum time in milliseconds to wait for a provider API or
    /// player. `None` to wait forever, which is the default.
    pub fn set_readiness_timeout(&mut self, timeout: Option<f64>) {
        self.session.runtime_mut().config_mut().readiness_timeout = timeout;
    }

    pub fn set_progress_poll_interval(&mut self, interval: f64) {
        self.session.runtime_mut().config_mut().progress_poll_interval = interval;
    }

    pub fn set_log_level(&mut self, level: LogLevel) {
        Logger::set_logger_level(match level {
            LogLevel::Error => LoggerLevel::Error,
            LogLevel::Warn => LoggerLevel::Warn,
            LogLevel::Info => LoggerLevel::Info,
            LogLevel::Debug => LoggerLevel::Debug,
        });
    }

    pub fn disable_logs(&mut self) {
        Logger::set_logger_level(LoggerLevel::None);
    }
}

impl Default for EmbedController {
    fn default() -> Self {
        Self::new()
    }
}
