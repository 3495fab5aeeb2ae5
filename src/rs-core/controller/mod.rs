use crate::{session::SessionController, wasm_bindgen};

mod api;
mod event_listeners;

/// The `EmbedController` is the interface exported to the JavaScript-side,
/// providing an API to embed videos in containers and control them.
///
/// Containers are identified by a `ContainerId` allocated by the JavaScript-side;
/// everything describing the video to embed is read from that container's
/// attributes:
///   - `data-video-provider`: `"Vimeo"` or `"YouTube"`
///   - `data-video-id`: the video's id, or for YouTube its URL
///   - `data-autoplay`: `0` to disable autoplay
///   - `data-rel`: `1` to enable related videos
///   - `data-extra`: string appended to the frame's URL
#[wasm_bindgen]
pub struct EmbedController {
    session: SessionController,
}
