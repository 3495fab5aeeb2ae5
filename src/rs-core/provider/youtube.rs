use crate::{
    bindings::{ContainerId, PlayerCommand, PlayerEventKind, PlayerId, ProviderName},
    runtime::{ListenerStatus, Runtime, VideoState},
    utils::{
        logger::{Logger, LOG_SOURCE},
        url::Url,
    },
};

use super::{
    append_frame, EmbedOptions, FinishCallback, FinishInfo, FrameDescriptor, ProgressCallback,
    Provider, ReadyCallback, ReadyHandle,
};

/// YouTube player, controlled through the IFrame API (`window.YT.Player`).
///
/// A native player is constructed for each embedded frame as soon as the API
/// is loaded, yet it only accepts commands once it is ready on its own. It has no
/// progress event, so progress is polled while it plays.
pub struct YouTubeProvider;

/// `YT.PlayerState` values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum YouTubePlayerState {
    Unstarted,
    Ended,
    Playing,
    Paused,
    Buffering,
    Cued,
    Unknown,
}

impl YouTubePlayerState {
    pub(crate) fn from_code(code: f64) -> Self {
        match code as i32 {
            -1 => YouTubePlayerState::Unstarted,
            0 => YouTubePlayerState::Ended,
            1 => YouTubePlayerState::Playing,
            2 => YouTubePlayerState::Paused,
            3 => YouTubePlayerState::Buffering,
            5 => YouTubePlayerState::Cued,
            _ => YouTubePlayerState::Unknown,
        }
    }
}

impl YouTubeProvider {
    /// Call `f` with the container's native player once it can receive commands.
    /// Does nothing if the container has no frame once the API is loaded.
    fn with_ready_player<F>(rt: &mut Runtime, container: ContainerId, f: F)
    where
        F: FnOnce(&mut Runtime, PlayerId) + 'static,
    {
        rt.wait_for_api(ProviderName::YouTube, move |rt| {
            let player = match rt.bind_player(ProviderName::YouTube, container) {
                Some(player) => player,
                None => {
                    Logger::lazy_debug(rt.host(), LOG_SOURCE, &|| {
                        format!("No YouTube player in container {}", container)
                    });
                    return;
                }
            };
            rt.loaded(
                format!("YouTube player {}", player),
                move |rt: &Runtime| rt.is_player_ready(player).then_some(player),
                f,
            );
        });
    }
}

/// YouTube video id, given either that id or a watch, embed or short URL.
///
/// The `v` query parameter is preferred, then the last path segment, then the
/// input as is.
pub(super) fn youtube_video_id(id_or_url: &str) -> String {
    let url = Url::new(id_or_url.trim().to_owned());
    if let Some(id) = url.query_param("v") {
        return id.to_owned();
    }
    match url.filename() {
        "" => id_or_url.to_owned(),
        id => id.to_owned(),
    }
}

impl Provider for YouTubeProvider {
    fn name(&self) -> ProviderName {
        ProviderName::YouTube
    }

    fn frame(&self, id_or_url: &str, options: &EmbedOptions) -> FrameDescriptor {
        let id = youtube_video_id(id_or_url);
        FrameDescriptor::new(format!(
            "//www.youtube.com/embed/{}?feature=oembed&autoplay={}&enablejsapi=1&version=3&html5=1&rel={}{}",
            id,
            options.autoplay_flag(),
            options.related_flag(),
            options.extra()
        ))
        .with_attribute("id", &format!("youtube-player-{}", id))
    }

    fn embed(&self, rt: &mut Runtime, container: ContainerId, id_or_url: &str) {
        append_frame(self, rt, container, id_or_url);

        // The native player has to be constructed by us, the API does not do it
        // for existing frames.
        Self::with_ready_player(rt, container, move |rt, player| {
            rt.listen(player, PlayerEventKind::StateChange, move |rt, code| {
                match YouTubePlayerState::from_code(code) {
                    YouTubePlayerState::Playing => {
                        rt.set_video_state(container, VideoState::Playing)
                    }
                    YouTubePlayerState::Paused => {
                        rt.set_video_state(container, VideoState::Paused)
                    }
                    YouTubePlayerState::Ended => {
                        rt.set_video_state(container, VideoState::Finished)
                    }
                    _ => {}
                }
                ListenerStatus::Keep
            });
        });
    }

    fn ready(&self, rt: &mut Runtime, container: ContainerId, callback: ReadyCallback) {
        rt.wait_for_api(ProviderName::YouTube, move |rt| {
            callback(ReadyHandle {
                provider: ProviderName::YouTube,
                container,
                player: rt.player_of(container),
            });
        });
    }

    fn play(&self, rt: &mut Runtime, container: ContainerId) {
        Self::with_ready_player(rt, container, move |rt, player| {
            rt.send_command(container, player, PlayerCommand::Play);
        });
    }

    fn pause(&self, rt: &mut Runtime, container: ContainerId) {
        Self::with_ready_player(rt, container, move |rt, player| {
            rt.send_command(container, player, PlayerCommand::Pause);
        });
    }

    fn progress(&self, rt: &mut Runtime, container: ContainerId, callback: ProgressCallback) {
        Self::with_ready_player(rt, container, move |rt, player| {
            let poller = rt.add_progress_poller(container, player, callback);
            rt.listen(player, PlayerEventKind::StateChange, move |rt, code| {
                if YouTubePlayerState::from_code(code) == YouTubePlayerState::Playing {
                    rt.resume_progress_poller(poller);
                } else {
                    rt.suspend_progress_poller(poller);
                }
                ListenerStatus::Keep
            });
        });
    }

    fn finish(&self, rt: &mut Runtime, container: ContainerId, mut callback: FinishCallback) {
        Self::with_ready_player(rt, container, move |rt, player| {
            let mut has_ended = false;
            rt.listen(player, PlayerEventKind::StateChange, move |_, code| {
                match YouTubePlayerState::from_code(code) {
                    YouTubePlayerState::Ended if !has_ended => {
                        has_ended = true;
                        callback(FinishInfo { container });
                    }
                    YouTubePlayerState::Playing => has_ended = false,
                    _ => {}
                }
                ListenerStatus::Keep
            });
        });
    }
}
