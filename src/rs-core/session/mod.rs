//! Container-level orchestration: reads which video a container holds and
//! dispatches to the right `Provider`.

use thiserror::Error;

use crate::{
    bindings::{ContainerId, PlayerEventKind, PlayerId, ProviderName, TimerId, TimerReason},
    host::Host,
    provider::{
        FinishCallback, ProgressCallback, Provider, ProviderRegistry, ReadyCallback,
        UnknownProviderError,
    },
    runtime::{Runtime, VideoState},
    utils::logger::{Logger, LOG_SOURCE},
};

/// Container attribute naming the video's provider.
pub const PROVIDER_ATTRIBUTE: &str = "data-video-provider";

/// Container attribute holding the provider-specific video id or URL.
pub const VIDEO_ID_ATTRIBUTE: &str = "data-video-id";

/// What a container asks to embed, as read from its attributes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VideoRef {
    /// Raw provider name. Empty if the attribute is missing.
    pub provider: String,
    pub video_id: Option<String>,
}

impl VideoRef {
    pub fn read(rt: &Runtime, container: ContainerId) -> Self {
        Self {
            provider: rt
                .container_attribute(container, PROVIDER_ATTRIBUTE)
                .unwrap_or_default(),
            video_id: rt.container_attribute(container, VIDEO_ID_ATTRIBUTE),
        }
    }
}

/// Errors aborting an operation on a container.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error(transparent)]
    UnknownProvider(#[from] UnknownProviderError),
    #[error("Container {0} has no video id.")]
    MissingVideoId(ContainerId),
}

/// Embeds videos in containers and controls them, whatever their provider.
///
/// Failures are never returned: they are logged as warnings and the operation is
/// aborted.
pub struct SessionController {
    runtime: Runtime,
    registry: ProviderRegistry,
}

impl SessionController {
    /// Create a `SessionController` knowing every supported provider.
    pub fn new(host: Box<dyn Host>) -> Self {
        Self::with_registry(host, ProviderRegistry::with_defaults())
    }

    pub fn with_registry(host: Box<dyn Host>, registry: ProviderRegistry) -> Self {
        Self {
            runtime: Runtime::new(host),
            registry,
        }
    }

    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    pub fn runtime_mut(&mut self) -> &mut Runtime {
        &mut self.runtime
    }

    /// Embed the video described by the container's attributes.
    ///
    /// Logs a warning and leaves the container untouched if its provider is
    /// unknown or its video id missing.
    pub fn load_video(&mut self, container: ContainerId) {
        if let Err(err) = self.try_load_video(container) {
            self.warn(&err);
        }
    }

    fn try_load_video(&mut self, container: ContainerId) -> Result<(), SessionError> {
        let video_ref = VideoRef::read(&self.runtime, container);
        let provider = self.registry.resolve(&video_ref.provider)?;
        let video_id = video_ref
            .video_id
            .ok_or(SessionError::MissingVideoId(container))?;
        Logger::lazy_info(self.runtime.host(), LOG_SOURCE, &|| {
            format!("Loading {} video {} in container {}", provider.name(), video_id, container)
        });
        self.runtime.set_video_state(container, VideoState::Embedding);
        provider.embed(&mut self.runtime, container, &video_id);
        self.runtime.set_video_state(container, VideoState::Embedded);
        Ok(())
    }

    /// Start playback, once possible, of the video embedded in the container.
    pub fn play_video(&mut self, container: ContainerId) {
        self.with_provider(container, |provider, rt| provider.play(rt, container));
    }

    /// Pause every given container actually holding an embedded video.
    ///
    /// Containers with an unknown provider, no video id or no frame are skipped
    /// silently.
    pub fn pause_video(&mut self, containers: &[ContainerId]) {
        for &container in containers {
            let video_ref = VideoRef::read(&self.runtime, container);
            let provider = match self.registry.resolve(&video_ref.provider) {
                Ok(provider) => provider,
                Err(_) => continue,
            };
            if video_ref.video_id.is_none() || self.runtime.iframe_count(container) == 0 {
                continue;
            }
            provider.pause(&mut self.runtime, container);
        }
    }

    /// Call `callback` once the container's provider API is available.
    pub fn when_ready(&mut self, container: ContainerId, callback: ReadyCallback) {
        self.with_provider(container, move |provider, rt| {
            provider.ready(rt, container, callback)
        });
    }

    /// Regularly report the container's playback progress, in percent.
    pub fn watch_progress(&mut self, container: ContainerId, callback: ProgressCallback) {
        self.with_provider(container, move |provider, rt| {
            provider.progress(rt, container, callback)
        });
    }

    /// Report each time the container's video reaches its end.
    pub fn watch_finish(&mut self, container: ContainerId, callback: FinishCallback) {
        self.with_provider(container, move |provider, rt| {
            provider.finish(rt, container, callback)
        });
    }

    pub fn video_state(&self, container: ContainerId) -> VideoState {
        self.runtime.video_state(container)
    }

    pub fn on_timer_ended(&mut self, id: TimerId, reason: TimerReason) {
        match reason {
            TimerReason::ReadinessPoll => self.runtime.on_readiness_timer(id),
            TimerReason::ProgressPoll => self.runtime.on_progress_timer(id),
        }
    }

    pub fn on_player_event(&mut self, player: PlayerId, kind: PlayerEventKind, value: f64) {
        self.runtime.on_player_event(player, kind, value);
    }

    /// Check pending readiness predicates right away, e.g. because a provider's
    /// script just finished loading.
    pub fn on_api_loaded(&mut self, provider: ProviderName) {
        Logger::lazy_debug(self.runtime.host(), LOG_SOURCE, &|| {
            format!("{} API announced as loaded", provider)
        });
        self.runtime.poll_readiness(0.);
    }

    /// Resolve the container's provider and call `f` with it, logging a warning
    /// instead if it cannot be resolved.
    fn with_provider<F>(&mut self, container: ContainerId, f: F)
    where
        F: FnOnce(&dyn Provider, &mut Runtime),
    {
        let video_ref = VideoRef::read(&self.runtime, container);
        match self.registry.resolve(&video_ref.provider) {
            Ok(provider) => f(provider, &mut self.runtime),
            Err(err) => {
                let err = SessionError::from(err);
                self.warn(&err);
            }
        }
    }

    fn warn(&self, err: &SessionError) {
        Logger::warn(self.runtime.host(), LOG_SOURCE, &err.to_string());
    }
}
