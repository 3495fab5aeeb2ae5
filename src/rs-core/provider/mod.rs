//! Platform-specific implementations of the embed and control capabilities.
//!
//! Each supported platform implements `Provider`. Providers are stateless: the
//! native player instances they drive are stored per container in the
//! `Runtime`.

mod registry;
mod vimeo;
mod youtube;

pub use registry::{ProviderRegistry, UnknownProviderError};
pub use vimeo::VimeoProvider;
pub use youtube::YouTubeProvider;

use crate::{
    bindings::{ContainerId, PlayerId, ProviderName},
    runtime::Runtime,
};

/// Container attribute whose value is the autoplay flag, parsed as an integer.
pub const AUTOPLAY_ATTRIBUTE: &str = "data-autoplay";

/// Container attribute enabling related videos when exactly `"1"`.
pub const RELATED_ATTRIBUTE: &str = "data-rel";

/// Container attribute appended verbatim to the frame's URL.
pub const EXTRA_ATTRIBUTE: &str = "data-extra";

/// Description of an `<iframe>` element to create.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameDescriptor {
    src: String,
    attributes: Vec<(String, String)>,
}

impl FrameDescriptor {
    /// Creates a `FrameDescriptor` for the given source URL, allowed to go
    /// fullscreen.
    pub fn new(src: String) -> Self {
        Self {
            src,
            attributes: vec![("allowfullscreen".to_owned(), String::new())],
        }
    }

    /// Set an attribute, replacing its previous value if already set.
    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        match self.attributes.iter_mut().find(|(n, _)| n == name) {
            Some(attr) => attr.1 = value.to_owned(),
            None => self.attributes.push((name.to_owned(), value.to_owned())),
        }
        self
    }

    /// Make the frame take all the room available in its container, without
    /// border.
    pub fn fill_container(self) -> Self {
        self.with_attribute("width", "100%")
            .with_attribute("height", "100%")
            .with_attribute("frameborder", "0")
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Options read from the container when embedding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmbedOptions {
    pub autoplay: bool,
    pub show_related: bool,

    /// Raw string appended to the frame's URL. The container is responsible for
    /// its `&` separators.
    pub extra: Option<String>,
}

impl Default for EmbedOptions {
    fn default() -> Self {
        Self {
            autoplay: true,
            show_related: false,
            extra: None,
        }
    }
}

impl EmbedOptions {
    /// Build `EmbedOptions` from the raw container attribute values.
    ///
    /// `autoplay` is parsed as a leading integer (`"0"`, `"1"`, `" 0px"`...),
    /// defaulting to enabled when absent or unparsable.
    pub fn from_attributes(autoplay: Option<&str>, related: Option<&str>, extra: Option<&str>) -> Self {
        Self {
            autoplay: autoplay.and_then(parse_leading_integer).map_or(true, |v| v != 0),
            show_related: related == Some("1"),
            extra: extra.filter(|e| !e.is_empty()).map(str::to_owned),
        }
    }

    pub(crate) fn read(rt: &Runtime, container: ContainerId) -> Self {
        Self::from_attributes(
            rt.container_attribute(container, AUTOPLAY_ATTRIBUTE).as_deref(),
            rt.container_attribute(container, RELATED_ATTRIBUTE).as_deref(),
            rt.container_attribute(container, EXTRA_ATTRIBUTE).as_deref(),
        )
    }

    pub fn autoplay_flag(&self) -> u8 {
        u8::from(self.autoplay)
    }

    pub fn related_flag(&self) -> u8 {
        u8::from(self.show_related)
    }

    pub fn extra(&self) -> &str {
        self.extra.as_deref().unwrap_or("")
    }
}

/// Parse the integer at the start of `input`, ignoring leading whitespace and
/// anything after the digits.
fn parse_leading_integer(input: &str) -> Option<i64> {
    let trimmed = input.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    let value: i64 = digits[..end].parse().ok()?;
    Some(if negative { -value } else { value })
}

/// Handle given to `ready` callbacks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReadyHandle {
    pub provider: ProviderName,
    pub container: ContainerId,

    /// Native player bound to the container, if one exists at that time.
    pub player: Option<PlayerId>,
}

/// Payload of `finish` callbacks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FinishInfo {
    pub container: ContainerId,
}

pub type ReadyCallback = Box<dyn FnOnce(ReadyHandle)>;
pub type ProgressCallback = Box<dyn FnMut(f64)>;
pub type FinishCallback = Box<dyn FnMut(FinishInfo)>;

/// Clamp a percentage to `[0, 100]`, non-finite values becoming `0`.
pub fn clamp_percent(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0., 100.)
    } else {
        0.
    }
}

/// Percentage of `duration` that `played` represents, always in `[0, 100]`.
pub fn playback_percent(played: f64, duration: f64) -> f64 {
    clamp_percent(played / duration * 100.)
}

/// Embed and control capabilities for one video platform.
///
/// Control methods may be called at any time, even before `embed` or before the
/// platform's API is loaded: they defer themselves through the `Runtime` and
/// silently do nothing if the container ends up having no native player.
pub trait Provider {
    fn name(&self) -> ProviderName;

    /// Construct the frame embedding the given video. Performs no I/O and never
    /// fails, malformed ids or URLs being used as best as possible.
    fn frame(&self, id_or_url: &str, options: &EmbedOptions) -> FrameDescriptor;

    /// Append the video's frame to the container.
    ///
    /// Calling it twice on the same container appends two frames.
    fn embed(&self, rt: &mut Runtime, container: ContainerId, id_or_url: &str) {
        append_frame(self, rt, container, id_or_url);
    }

    /// Call `callback` once the platform's control API is available.
    fn ready(&self, rt: &mut Runtime, container: ContainerId, callback: ReadyCallback);

    fn play(&self, rt: &mut Runtime, container: ContainerId);

    fn pause(&self, rt: &mut Runtime, container: ContainerId);

    /// Regularly call `callback` with the playback progress, in percent, while
    /// the video plays.
    fn progress(&self, rt: &mut Runtime, container: ContainerId, callback: ProgressCallback);

    /// Call `callback` each time playback completes.
    fn finish(&self, rt: &mut Runtime, container: ContainerId, callback: FinishCallback);
}

/// Build the provider's frame from the container's options and append it.
pub(crate) fn append_frame<P: Provider + ?Sized>(
    provider: &P,
    rt: &mut Runtime,
    container: ContainerId,
    id_or_url: &str,
) {
    let options = EmbedOptions::read(rt, container);
    let frame = provider.frame(id_or_url, &options).fill_container();
    rt.append_iframe(container, &frame);
}
