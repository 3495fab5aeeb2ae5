const DEFAULT_READINESS_POLL_INTERVAL: f64 = 100.;
const DEFAULT_PROGRESS_POLL_INTERVAL: f64 = 2000.;

/// Configuration on which the `Runtime` relies.
/// Can be updated at any time through the `set_*` `EmbedController`'s methods.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct EmbedConfiguration {
    /// Delay, in milliseconds, between two checks of pending readiness predicates
    /// (e.g. "is the YouTube API loaded yet?").
    pub(crate) readiness_poll_interval: f64,

    /// Maximum time, in milliseconds, a readiness predicate may stay unfulfilled
    /// before its continuation is dropped and a warning is logged.
    ///
    /// `None` to wait forever.
    pub(crate) readiness_timeout: Option<f64>,

    /// Interval, in milliseconds, at which playback progress is reported for
    /// providers without a native progress event.
    pub(crate) progress_poll_interval: f64,
}

impl Default for EmbedConfiguration {
    fn default() -> Self {
        Self {
            readiness_poll_interval: DEFAULT_READINESS_POLL_INTERVAL,
            readiness_timeout: None,
            progress_poll_interval: DEFAULT_PROGRESS_POLL_INTERVAL,
        }
    }
}
