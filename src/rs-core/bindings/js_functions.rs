use crate::wasm_bindgen;
use std::fmt;

/// # js_functions
///
/// This file lists all JavaScript functions that are callable from Rust as well as
/// struct and enumeration used by those functions.

#[wasm_bindgen]
extern "C" {
    // Log the given text in the JavaScript console, with the log level given.
    //
    // `source` is the name of the module emitting that log.
    pub fn jsLog(log_level: LogLevel, source: &str, log: &str);

    // Starts a timer for the number of milliseconds indicated by the `duration` argument.
    //
    // Once this timer has elapsed, and unless `jsClearTimer` has been called since with
    // the `TimerId` returned by this function, the `on_timer_ended` of this
    // `EmbedController` will be called with both the corresponding `TimerId` and `reason`,
    // which you can use on your side to better categorize timer categories.
    pub fn jsTimer(duration: f64, reason: TimerReason) -> TimerId;

    // Clear a timer started with `jsTimer`.
    pub fn jsClearTimer(id: TimerId);

    // Returns the value of the attribute `name` on the container element linked to
    // `container`.
    //
    // Returns `None` if the attribute is not set or if that `ContainerId` is not
    // linked to any element.
    pub fn jsGetContainerAttribute(container: ContainerId, name: &str) -> Option<String>;

    // Returns the number of `<iframe>` elements currently found inside the
    // container.
    pub fn jsCountContainerIframes(container: ContainerId) -> u32;

    // Create an `<iframe>` element with the given `src` and attributes and append
    // it to the container.
    //
    // `attribute_names` and `attribute_values` always have the same length, the
    // n-th value corresponding to the n-th name.
    pub fn jsAppendIframe(
        container: ContainerId,
        src: &str,
        attribute_names: Vec<String>,
        attribute_values: Vec<String>,
    );

    // Returns `true` if the global control API of the given provider (e.g.
    // `window.$f` for Vimeo, `window.YT.Player` for YouTube) is currently
    // defined.
    pub fn jsIsProviderApiLoaded(provider: ProviderName) -> bool;

    // Obtain the native player controlling the first `<iframe>` of the
    // container, constructing it through the provider's global API if needed.
    //
    // Calling it again for the same iframe should return the same `PlayerId`.
    //
    // Returns `None` if the container has no `<iframe>` or if the provider's API is
    // not loaded.
    pub fn jsBindNativePlayer(provider: ProviderName, container: ContainerId) -> Option<PlayerId>;

    // Returns `true` once the native player is able to receive commands.
    pub fn jsIsNativePlayerReady(player: PlayerId) -> bool;

    // Send a playback command to the native player.
    pub fn jsSendPlayerCommand(player: PlayerId, command: PlayerCommand);

    // Start listening to the given event on the native player.
    //
    // Each time it happens, the `on_player_event` method of this
    // `EmbedController` should be called with the same `PlayerId` and
    // `PlayerEventKind`.
    pub fn jsListenPlayerEvent(player: PlayerId, event: PlayerEventKind);

    // Returns the current playback position of the native player, in seconds.
    pub fn jsGetPlayerCurrentTime(player: PlayerId) -> f64;

    // Returns the duration of the content played by the native player, in seconds.
    pub fn jsGetPlayerDuration(player: PlayerId) -> f64;

    // Announce that the native API linked to a `when_ready` call is available.
    pub fn jsAnnounceReady(callback_id: CallbackId, container: ContainerId, player: Option<PlayerId>);

    // Announce a new playback progress percentage, from `0` to `100`, for a
    // `watch_progress` call.
    pub fn jsAnnounceProgress(callback_id: CallbackId, container: ContainerId, percent: f64);

    // Announce that playback finished for a `watch_finish` call.
    pub fn jsAnnounceFinish(callback_id: CallbackId, container: ContainerId);
}

/// Platforms whose players can be embedded.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProviderName {
    Vimeo = 0,
    YouTube = 1,
}

impl ProviderName {
    /// Every `ProviderName` known, in declaration order.
    pub const ALL: [ProviderName; 2] = [ProviderName::Vimeo, ProviderName::YouTube];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderName::Vimeo => "Vimeo",
            ProviderName::YouTube => "YouTube",
        }
    }
}

impl fmt::Display for ProviderName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Command that can be sent to a native player.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerCommand {
    Play = 0,
    Pause = 1,
}

/// Events emitted by native players that the Rust code may listen to.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlayerEventKind {
    /// The native player is ready to receive commands. No value.
    Ready = 0,

    /// Playback progressed. The value is the played fraction, from `0` to `1`.
    PlayProgress = 1,

    /// Playback reached the end of the content. No value.
    Finish = 2,

    /// The native player's state changed. The value is the new state's numeric code,
    /// as defined by that native player (e.g. `YT.PlayerState`).
    StateChange = 3,
}

/// "Reason" associated to a timer started by the `EmbedController`.
///
/// This can then help to identify what the timer was for once resolved.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerReason {
    /// The timer is linked to the readiness polling mechanism: pending readiness
    /// predicates have to be checked again.
    ReadinessPoll = 0,

    /// The timer is linked to a progress poller which has to report the current
    /// playback progress.
    ProgressPoll = 1,
}

/// Levels with which a log can be emitted.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd)]
pub enum LogLevel {
    /// Log level reserved for very important errors and highly unexpected events.
    Error = 0,

    /// Log level reserved for less important errors and unexpected events.
    Warn = 1,

    /// Log level reserved for important events
    Info = 2,

    /// Log level used when debugging. Small-ish yet impactful events should be logged with it.
    Debug = 3,
}

/// Identify a container element on the page, as allocated by the JavaScript side.
pub type ContainerId = u32;

/// Identify a native player instance living on the JavaScript side.
pub type PlayerId = u32;

/// Identify a callback registered on the JavaScript side.
pub type CallbackId = u32;

/// Identify a pending timer.
pub type TimerId = f64;
