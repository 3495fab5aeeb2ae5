use crate::{
    bindings::{ContainerId, PlayerCommand, PlayerEventKind, PlayerId, ProviderName},
    runtime::{ListenerStatus, Runtime, VideoState},
    utils::{
        logger::{Logger, LOG_SOURCE},
        url::Url,
    },
};

use super::{
    append_frame, clamp_percent, EmbedOptions, FinishCallback, FinishInfo, FrameDescriptor,
    ProgressCallback, Provider, ReadyCallback, ReadyHandle,
};

/// Vimeo player, controlled through the Froogaloop API (`window.$f`).
///
/// Froogaloop queues commands sent before the player inside the frame is ready,
/// so commands only wait for the API itself.
pub struct VimeoProvider;

impl VimeoProvider {
    /// Call `f` with the container's native player once the API is loaded.
    /// Does nothing if the container has no frame at that time.
    fn with_player<F>(rt: &mut Runtime, container: ContainerId, f: F)
    where
        F: FnOnce(&mut Runtime, PlayerId) + 'static,
    {
        rt.wait_for_api(ProviderName::Vimeo, move |rt| {
            match rt.bind_player(ProviderName::Vimeo, container) {
                Some(player) => f(rt, player),
                None => Logger::lazy_debug(rt.host(), LOG_SOURCE, &|| {
                    format!("No Vimeo player in container {}", container)
                }),
            }
        });
    }
}

/// Numeric id of a Vimeo video, given either that id or a URL ending with it.
pub(super) fn vimeo_video_id(id_or_url: &str) -> String {
    let url = Url::new(id_or_url.trim().to_owned());
    match url.filename() {
        "" => id_or_url.to_owned(),
        id => id.to_owned(),
    }
}

impl Provider for VimeoProvider {
    fn name(&self) -> ProviderName {
        ProviderName::Vimeo
    }

    fn frame(&self, id_or_url: &str, options: &EmbedOptions) -> FrameDescriptor {
        FrameDescriptor::new(format!(
            "//player.vimeo.com/video/{}?autoplay={}&api=1&html5=1&rel={}{}",
            vimeo_video_id(id_or_url),
            options.autoplay_flag(),
            options.related_flag(),
            options.extra()
        ))
    }

    fn embed(&self, rt: &mut Runtime, container: ContainerId, id_or_url: &str) {
        append_frame(self, rt, container, id_or_url);
        Self::with_player(rt, container, move |rt, player| {
            rt.listen(player, PlayerEventKind::Finish, move |rt, _| {
                rt.set_video_state(container, VideoState::Finished);
                ListenerStatus::Keep
            });
        });
    }

    fn ready(&self, rt: &mut Runtime, container: ContainerId, callback: ReadyCallback) {
        Self::with_player(rt, container, move |rt, player| {
            let mut callback = Some(callback);
            rt.listen(player, PlayerEventKind::Ready, move |_, _| {
                if let Some(callback) = callback.take() {
                    callback(ReadyHandle {
                        provider: ProviderName::Vimeo,
                        container,
                        player: Some(player),
                    });
                }
                ListenerStatus::Remove
            });
        });
    }

    fn play(&self, rt: &mut Runtime, container: ContainerId) {
        Self::with_player(rt, container, move |rt, player| {
            rt.send_command(container, player, PlayerCommand::Play);
        });
    }

    fn pause(&self, rt: &mut Runtime, container: ContainerId) {
        Self::with_player(rt, container, move |rt, player| {
            rt.send_command(container, player, PlayerCommand::Pause);
        });
    }

    fn progress(&self, rt: &mut Runtime, container: ContainerId, mut callback: ProgressCallback) {
        Self::with_player(rt, container, move |rt, player| {
            rt.listen(player, PlayerEventKind::PlayProgress, move |_, fraction| {
                callback(clamp_percent(fraction * 100.));
                ListenerStatus::Keep
            });
        });
    }

    fn finish(&self, rt: &mut Runtime, container: ContainerId, mut callback: FinishCallback) {
        Self::with_player(rt, container, move |rt, player| {
            rt.listen(player, PlayerEventKind::Finish, move |_, _| {
                callback(FinishInfo { container });
                ListenerStatus::Keep
            });
        });
    }
}
