use crate::{
    bindings::{
        ContainerId, LogLevel, PlayerCommand, PlayerEventKind, PlayerId, ProviderName,
        TimerId, TimerReason,
    },
    provider::FrameDescriptor,
};

#[cfg(test)]
pub(crate) mod fake;

/// Everything the Rust code needs from the page it runs in: container elements,
/// native player globals, timers and the console.
///
/// On the web, this is implemented by `JsHost`, which forwards each call to the
/// corresponding `js*` function.
pub trait Host {
    fn log(&self, level: LogLevel, source: &str, message: &str);

    fn start_timer(&mut self, duration: f64, reason: TimerReason) -> TimerId;

    fn clear_timer(&mut self, id: TimerId);

    /// Value of the `name` attribute on the container, `None` if unset.
    fn container_attribute(&self, container: ContainerId, name: &str) -> Option<String>;

    /// Number of `<iframe>` elements inside the container.
    fn iframe_count(&self, container: ContainerId) -> u32;

    fn append_iframe(&mut self, container: ContainerId, frame: &FrameDescriptor);

    /// Returns `true` once the provider's global control API is defined.
    fn is_api_loaded(&self, provider: ProviderName) -> bool;

    /// Obtain the native player bound to the container's first `<iframe>`.
    ///
    /// `None` if there's no `<iframe>` or the API is not loaded yet.
    fn bind_player(&mut self, provider: ProviderName, container: ContainerId)
        -> Option<PlayerId>;

    fn is_player_ready(&self, player: PlayerId) -> bool;

    fn send_command(&mut self, player: PlayerId, command: PlayerCommand);

    fn listen(&mut self, player: PlayerId, event: PlayerEventKind);

    fn current_time(&self, player: PlayerId) -> f64;

    fn duration(&self, player: PlayerId) -> f64;
}
