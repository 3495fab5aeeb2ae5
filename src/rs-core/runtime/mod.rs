use std::collections::{HashMap, HashSet};

use crate::{
    bindings::{
        ContainerId, PlayerCommand, PlayerEventKind, PlayerId, ProviderName, TimerId,
        TimerReason,
    },
    config::EmbedConfiguration,
    host::Host,
    provider::FrameDescriptor,
    utils::logger::{Logger, LOG_SOURCE},
    waiter::{self, ReadinessWaiter, Waiting},
    wasm_bindgen,
};

mod listeners;
mod progress;

pub(crate) use listeners::ListenerStatus;

use listeners::PlayerListener;
use progress::{PollerId, ProgressPoller};

/// Playback-related state a container is in.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VideoState {
    /// Nothing was embedded in the container.
    Empty,
    /// The container's frame is being created.
    Embedding,
    /// The frame is in the container. Its native player may not be loaded yet.
    Embedded,
    Playing,
    Paused,
    /// Playback reached the end. Play and pause commands can still be sent.
    Finished,
}

/// Execution context shared by all providers.
///
/// Owns the `Host`, the pending readiness registrations, the native players bound
/// to each container, native event listeners and progress pollers.
pub struct Runtime {
    host: Box<dyn Host>,

    config: EmbedConfiguration,

    waiter: ReadinessWaiter<Runtime>,

    /// Timer after which pending readiness predicates will be checked again.
    /// `None` when no such check is scheduled.
    readiness_timer: Option<TimerId>,

    /// Native player bound to each container.
    players: HashMap<ContainerId, PlayerId>,

    /// Native events for which `Host::listen` was already called.
    native_listens: HashSet<(PlayerId, PlayerEventKind)>,

    listeners: Vec<PlayerListener>,

    progress_pollers: Vec<ProgressPoller>,

    next_poller_id: PollerId,

    states: HashMap<ContainerId, VideoState>,
}

impl Waiting for Runtime {
    fn waiter_mut(&mut self) -> &mut ReadinessWaiter<Self> {
        &mut self.waiter
    }
}

impl Runtime {
    pub fn new(host: Box<dyn Host>) -> Self {
        Self {
            host,
            config: EmbedConfiguration::default(),
            waiter: ReadinessWaiter::new(),
            readiness_timer: None,
            players: HashMap::new(),
            native_listens: HashSet::new(),
            listeners: vec![],
            progress_pollers: vec![],
            next_poller_id: 0,
            states: HashMap::new(),
        }
    }

    pub fn host(&self) -> &dyn Host {
        self.host.as_ref()
    }

    pub(crate) fn config_mut(&mut self) -> &mut EmbedConfiguration {
        &mut self.config
    }

    /// Value of the container's `name` attribute, empty values being considered
    /// absent.
    pub fn container_attribute(&self, container: ContainerId, name: &str) -> Option<String> {
        self.host
            .container_attribute(container, name)
            .filter(|v| !v.is_empty())
    }

    pub fn iframe_count(&self, container: ContainerId) -> u32 {
        self.host.iframe_count(container)
    }

    pub fn append_iframe(&mut self, container: ContainerId, frame: &FrameDescriptor) {
        Logger::lazy_debug(self.host(), LOG_SOURCE, &|| {
            format!("Appending frame to container {}: {}", container, frame.src())
        });
        self.host.append_iframe(container, frame);
    }

    pub fn is_api_loaded(&self, provider: ProviderName) -> bool {
        self.host.is_api_loaded(provider)
    }

    /// Returns the native player bound to the container, binding one to its
    /// first `<iframe>` if that was not done yet.
    ///
    /// Returns `None` if no player could be bound, e.g. because the container
    /// has no `<iframe>`.
    pub fn bind_player(&mut self, provider: ProviderName, container: ContainerId) -> Option<PlayerId> {
        if let Some(player) = self.players.get(&container) {
            return Some(*player);
        }
        let player = self.host.bind_player(provider, container)?;
        Logger::lazy_debug(self.host(), LOG_SOURCE, &|| {
            format!("Bound {} player {} to container {}", provider, player, container)
        });
        self.players.insert(container, player);
        Some(player)
    }

    /// Native player already bound to the container, if any.
    pub fn player_of(&self, container: ContainerId) -> Option<PlayerId> {
        self.players.get(&container).copied()
    }

    pub fn is_player_ready(&self, player: PlayerId) -> bool {
        self.host.is_player_ready(player)
    }

    /// Send `command` to the native player of `container`, updating that
    /// container's `VideoState` accordingly.
    pub fn send_command(&mut self, container: ContainerId, player: PlayerId, command: PlayerCommand) {
        self.host.send_command(player, command);
        let state = match command {
            PlayerCommand::Play => VideoState::Playing,
            PlayerCommand::Pause => VideoState::Paused,
        };
        self.set_video_state(container, state);
    }

    pub fn video_state(&self, container: ContainerId) -> VideoState {
        self.states
            .get(&container)
            .copied()
            .unwrap_or(VideoState::Empty)
    }

    pub fn set_video_state(&mut self, container: ContainerId, state: VideoState) {
        self.states.insert(container, state);
    }

    /// Register `continuation` to be called once `predicate` returns `Some`.
    ///
    /// Never calls `continuation` synchronously. There is no way to cancel it
    /// afterwards: if the container disappears in the meantime, the
    /// continuation still runs and its operations end up doing nothing.
    pub fn loaded<T, P, F>(&mut self, label: impl Into<String>, predicate: P, continuation: F)
    where
        T: 'static,
        P: Fn(&Runtime) -> Option<T> + 'static,
        F: FnOnce(&mut Runtime, T) + 'static,
    {
        self.waiter.loaded(label, predicate, continuation);
        self.schedule_readiness_poll();
    }

    /// Call `continuation` once the global control API of `provider` is loaded.
    pub fn wait_for_api<F>(&mut self, provider: ProviderName, continuation: F)
    where
        F: FnOnce(&mut Runtime) + 'static,
    {
        self.loaded(
            format!("the {} API", provider),
            move |rt: &Runtime| rt.is_api_loaded(provider).then_some(()),
            move |rt: &mut Runtime, _: ()| continuation(rt),
        );
    }

    /// Number of readiness registrations still waiting.
    pub fn pending_readiness(&self) -> usize {
        self.waiter.pending_len()
    }

    /// Check pending readiness predicates now.
    ///
    /// `elapsed` is the time in milliseconds spent waiting since the last check.
    pub fn poll_readiness(&mut self, elapsed: f64) {
        let timeout = self.config.readiness_timeout;
        let errors = waiter::poll(self, elapsed, timeout);
        for err in errors {
            Logger::warn(self.host(), LOG_SOURCE, &err.to_string());
        }
        self.schedule_readiness_poll();
    }

    pub fn on_readiness_timer(&mut self, id: TimerId) {
        if self.readiness_timer != Some(id) {
            return;
        }
        self.readiness_timer = None;
        let elapsed = self.config.readiness_poll_interval;
        self.poll_readiness(elapsed);
    }

    fn schedule_readiness_poll(&mut self) {
        if self.readiness_timer.is_none() && self.waiter.has_pending() {
            let interval = self.config.readiness_poll_interval;
            self.readiness_timer = Some(self.host.start_timer(interval, TimerReason::ReadinessPoll));
        }
    }
}
