//! In-memory `Host` standing in for the JavaScript side in tests.

use std::{
    cell::RefCell,
    collections::{HashMap, HashSet},
    rc::Rc,
};

use super::Host;
use crate::{
    bindings::{
        ContainerId, LogLevel, PlayerCommand, PlayerEventKind, PlayerId, ProviderName,
        TimerId, TimerReason,
    },
    provider::FrameDescriptor,
};

#[derive(Default)]
struct NativePlayer {
    container: ContainerId,
    ready: bool,
    current_time: f64,
    duration: f64,
}

#[derive(Default)]
struct FakeState {
    logs: Vec<(LogLevel, String, String)>,
    timers: Vec<(TimerId, f64, TimerReason)>,
    next_timer: TimerId,
    attributes: HashMap<(ContainerId, String), String>,
    iframes: HashMap<ContainerId, Vec<FrameDescriptor>>,
    loaded_apis: HashSet<ProviderName>,
    players: HashMap<PlayerId, NativePlayer>,
    next_player: PlayerId,
    commands: Vec<(PlayerId, PlayerCommand)>,
    listens: Vec<(PlayerId, PlayerEventKind)>,
}

/// Cloning a `FakeHost` gives another handle on the same page.
#[derive(Clone, Default)]
pub(crate) struct FakeHost {
    state: Rc<RefCell<FakeState>>,
}

impl FakeHost {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn set_attribute(&self, container: ContainerId, name: &str, value: &str) {
        self.state
            .borrow_mut()
            .attributes
            .insert((container, name.to_owned()), value.to_owned());
    }

    /// Declare a container holding a video.
    pub(crate) fn add_container(&self, container: ContainerId, provider: &str, video_id: &str) {
        self.set_attribute(container, "data-video-provider", provider);
        self.set_attribute(container, "data-video-id", video_id);
    }

    /// Add an `<iframe>` which wasn't created through `append_iframe`.
    pub(crate) fn add_iframe(&self, container: ContainerId) {
        self.state
            .borrow_mut()
            .iframes
            .entry(container)
            .or_default()
            .push(FrameDescriptor::new("about:blank".to_owned()));
    }

    pub(crate) fn iframes(&self, container: ContainerId) -> Vec<FrameDescriptor> {
        self.state
            .borrow()
            .iframes
            .get(&container)
            .cloned()
            .unwrap_or_default()
    }

    pub(crate) fn load_api(&self, provider: ProviderName) {
        self.state.borrow_mut().loaded_apis.insert(provider);
    }

    pub(crate) fn player_of(&self, container: ContainerId) -> Option<PlayerId> {
        self.state
            .borrow()
            .players
            .iter()
            .find(|(_, p)| p.container == container)
            .map(|(id, _)| *id)
    }

    pub(crate) fn bound_players(&self) -> usize {
        self.state.borrow().players.len()
    }

    pub(crate) fn set_player_ready(&self, player: PlayerId) {
        if let Some(p) = self.state.borrow_mut().players.get_mut(&player) {
            p.ready = true;
        }
    }

    pub(crate) fn set_position(&self, player: PlayerId, current_time: f64, duration: f64) {
        let mut state = self.state.borrow_mut();
        let p = state.players.entry(player).or_default();
        p.current_time = current_time;
        p.duration = duration;
    }

    pub(crate) fn commands(&self) -> Vec<(PlayerId, PlayerCommand)> {
        self.state.borrow().commands.clone()
    }

    pub(crate) fn listens(&self) -> Vec<(PlayerId, PlayerEventKind)> {
        self.state.borrow().listens.clone()
    }

    pub(crate) fn warnings(&self) -> Vec<String> {
        self.state
            .borrow()
            .logs
            .iter()
            .filter(|(level, _, _)| *level == LogLevel::Warn)
            .map(|(_, source, message)| format!("[{}] {}", source, message))
            .collect()
    }

    pub(crate) fn active_timers(&self, reason: TimerReason) -> Vec<TimerId> {
        self.state
            .borrow()
            .timers
            .iter()
            .filter(|(_, _, r)| *r == reason)
            .map(|(id, _, _)| *id)
            .collect()
    }

    pub(crate) fn timer_duration(&self, id: TimerId) -> Option<f64> {
        self.state
            .borrow()
            .timers
            .iter()
            .find(|(t, _, _)| *t == id)
            .map(|(_, duration, _)| *duration)
    }

    /// Mark the timer as elapsed, returning `false` if it was not active.
    pub(crate) fn take_timer(&self, id: TimerId) -> bool {
        let mut state = self.state.borrow_mut();
        let len = state.timers.len();
        state.timers.retain(|(t, _, _)| *t != id);
        state.timers.len() != len
    }
}

impl Host for FakeHost {
    fn log(&self, level: LogLevel, source: &str, message: &str) {
        self.state
            .borrow_mut()
            .logs
            .push((level, source.to_owned(), message.to_owned()));
    }

    fn start_timer(&mut self, duration: f64, reason: TimerReason) -> TimerId {
        let mut state = self.state.borrow_mut();
        state.next_timer += 1.;
        let id = state.next_timer;
        state.timers.push((id, duration, reason));
        id
    }

    fn clear_timer(&mut self, id: TimerId) {
        self.take_timer(id);
    }

    fn container_attribute(&self, container: ContainerId, name: &str) -> Option<String> {
        self.state
            .borrow()
            .attributes
            .get(&(container, name.to_owned()))
            .cloned()
    }

    fn iframe_count(&self, container: ContainerId) -> u32 {
        self.state
            .borrow()
            .iframes
            .get(&container)
            .map_or(0, |f| f.len() as u32)
    }

    fn append_iframe(&mut self, container: ContainerId, frame: &FrameDescriptor) {
        self.state
            .borrow_mut()
            .iframes
            .entry(container)
            .or_default()
            .push(frame.clone());
    }

    fn is_api_loaded(&self, provider: ProviderName) -> bool {
        self.state.borrow().loaded_apis.contains(&provider)
    }

    fn bind_player(
        &mut self,
        provider: ProviderName,
        container: ContainerId,
    ) -> Option<PlayerId> {
        if !self.is_api_loaded(provider) || self.iframe_count(container) == 0 {
            return None;
        }
        if let Some(player) = self.player_of(container) {
            return Some(player);
        }
        let mut state = self.state.borrow_mut();
        state.next_player += 1;
        let id = state.next_player;
        state.players.insert(
            id,
            NativePlayer {
                container,
                ..Default::default()
            },
        );
        Some(id)
    }

    fn is_player_ready(&self, player: PlayerId) -> bool {
        self.state
            .borrow()
            .players
            .get(&player)
            .map_or(false, |p| p.ready)
    }

    fn send_command(&mut self, player: PlayerId, command: PlayerCommand) {
        self.state.borrow_mut().commands.push((player, command));
    }

    fn listen(&mut self, player: PlayerId, event: PlayerEventKind) {
        self.state.borrow_mut().listens.push((player, event));
    }

    fn current_time(&self, player: PlayerId) -> f64 {
        self.state
            .borrow()
            .players
            .get(&player)
            .map_or(0., |p| p.current_time)
    }

    fn duration(&self, player: PlayerId) -> f64 {
        self.state
            .borrow()
            .players
            .get(&player)
            .map_or(0., |p| p.duration)
    }
}
