use crate::{
    bindings::{PlayerEventKind, PlayerId, ProviderName, TimerId, TimerReason},
    wasm_bindgen,
};

use super::EmbedController;

/// Methods triggered on JavaScript events by the JavaScript code.
#[wasm_bindgen]
impl EmbedController {
    /// The JS code should call this method each time a timer started with the `jsTimer`
    /// function finished.
    ///
    /// # Arguments
    ///
    /// * `id` - The `TimerId` given by `jsTimer` when the timer was
    ///   started. This allows the `EmbedController` to identify which timer
    ///   actually finished.
    ///
    /// * `reason` - The `TimerReason` given by the Rust code when that timer
    ///   was started.
    pub fn on_timer_ended(&mut self, id: TimerId, reason: TimerReason) {
        self.session.on_timer_ended(id, reason);
    }

    /// The JS code should call this method each time a native player emits an
    /// event it was asked to listen to through `jsListenPlayerEvent`.
    ///
    /// # Arguments
    ///
    /// * `player` - The `PlayerId` given to `jsListenPlayerEvent`.
    ///
    /// * `event` - The `PlayerEventKind` given to `jsListenPlayerEvent`.
    ///
    /// * `value` - Value linked to that event, see `PlayerEventKind`. `0` for
    ///   events without a value.
    pub fn on_player_event(&mut self, player: PlayerId, event: PlayerEventKind, value: f64) {
        self.session.on_player_event(player, event, value);
    }

    /// The JS code may call this method as soon as the global API of a provider
    /// becomes available (e.g. from `onYouTubeIframeAPIReady`), so operations
    /// waiting for it don't have to wait for the next check.
    pub fn on_api_loaded(&mut self, provider: ProviderName) {
        self.session.on_api_loaded(provider);
    }
}
