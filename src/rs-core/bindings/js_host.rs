use super::js_functions::{
    jsAppendIframe, jsBindNativePlayer, jsClearTimer, jsCountContainerIframes,
    jsGetContainerAttribute, jsGetPlayerCurrentTime, jsGetPlayerDuration,
    jsIsNativePlayerReady, jsIsProviderApiLoaded, jsListenPlayerEvent, jsLog,
    jsSendPlayerCommand, jsTimer, ContainerId, LogLevel, PlayerCommand, PlayerEventKind,
    PlayerId, ProviderName, TimerId, TimerReason,
};
use crate::{host::Host, provider::FrameDescriptor};

/// `Host` implementation relying on the JavaScript functions imported by this
/// module.
pub struct JsHost;

impl Host for JsHost {
    fn log(&self, level: LogLevel, source: &str, message: &str) {
        jsLog(level, source, message);
    }

    fn start_timer(&mut self, duration: f64, reason: TimerReason) -> TimerId {
        jsTimer(duration, reason)
    }

    fn clear_timer(&mut self, id: TimerId) {
        jsClearTimer(id);
    }

    fn container_attribute(&self, container: ContainerId, name: &str) -> Option<String> {
        jsGetContainerAttribute(container, name)
    }

    fn iframe_count(&self, container: ContainerId) -> u32 {
        jsCountContainerIframes(container)
    }

    fn append_iframe(&mut self, container: ContainerId, frame: &FrameDescriptor) {
        let (names, values): (Vec<String>, Vec<String>) = frame
            .attributes()
            .iter()
            .map(|(n, v)| (n.clone(), v.clone()))
            .unzip();
        jsAppendIframe(container, frame.src(), names, values);
    }

    fn is_api_loaded(&self, provider: ProviderName) -> bool {
        jsIsProviderApiLoaded(provider)
    }

    fn bind_player(
        &mut self,
        provider: ProviderName,
        container: ContainerId,
    ) -> Option<PlayerId> {
        jsBindNativePlayer(provider, container)
    }

    fn is_player_ready(&self, player: PlayerId) -> bool {
        jsIsNativePlayerReady(player)
    }

    fn send_command(&mut self, player: PlayerId, command: PlayerCommand) {
        jsSendPlayerCommand(player, command);
    }

    fn listen(&mut self, player: PlayerId, event: PlayerEventKind) {
        jsListenPlayerEvent(player, event);
    }

    fn current_time(&self, player: PlayerId) -> f64 {
        jsGetPlayerCurrentTime(player)
    }

    fn duration(&self, player: PlayerId) -> f64 {
        jsGetPlayerDuration(player)
    }
}
