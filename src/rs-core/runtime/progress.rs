use crate::{
    bindings::{ContainerId, PlayerId, TimerId, TimerReason},
    provider::{playback_percent, ProgressCallback},
    utils::logger::{Logger, LOG_SOURCE},
};

use super::Runtime;

/// Identify a `ProgressPoller`.
pub(crate) type PollerId = u32;

/// Reports playback progress at a regular interval for native players without
/// any progress event.
///
/// A poller is only active (has a timer) while its player is playing.
pub(super) struct ProgressPoller {
    id: PollerId,
    container: ContainerId,
    player: PlayerId,
    timer: Option<TimerId>,
    callback: ProgressCallback,
}

impl Runtime {
    /// Create an inactive `ProgressPoller` for the given player.
    pub(crate) fn add_progress_poller(
        &mut self,
        container: ContainerId,
        player: PlayerId,
        callback: ProgressCallback,
    ) -> PollerId {
        let id = self.next_poller_id;
        self.next_poller_id = self.next_poller_id.wrapping_add(1);
        self.progress_pollers.push(ProgressPoller {
            id,
            container,
            player,
            timer: None,
            callback,
        });
        id
    }

    /// Report the current progress right away, then at each
    /// `progress_poll_interval` until `suspend_progress_poller` is called.
    pub(crate) fn resume_progress_poller(&mut self, id: PollerId) {
        let interval = self.config.progress_poll_interval;
        let poller = match self.progress_pollers.iter_mut().find(|p| p.id == id) {
            Some(poller) => poller,
            None => return,
        };
        if let Some(timer) = poller.timer.take() {
            self.host.clear_timer(timer);
        }
        let percent = playback_percent(
            self.host.current_time(poller.player),
            self.host.duration(poller.player),
        );
        let container = poller.container;
        Logger::lazy_debug(self.host.as_ref(), LOG_SOURCE, &|| {
            format!("Progress of container {}: {}%", container, percent)
        });
        (poller.callback)(percent);
        poller.timer = Some(self.host.start_timer(interval, TimerReason::ProgressPoll));
    }

    /// Stop reporting progress, clearing the pending timer if one.
    pub(crate) fn suspend_progress_poller(&mut self, id: PollerId) {
        if let Some(poller) = self.progress_pollers.iter_mut().find(|p| p.id == id) {
            if let Some(timer) = poller.timer.take() {
                self.host.clear_timer(timer);
            }
        }
    }

    pub fn on_progress_timer(&mut self, id: TimerId) {
        let poller = self
            .progress_pollers
            .iter_mut()
            .find(|p| p.timer == Some(id));
        if let Some(poller) = poller {
            poller.timer = None;
            let poller_id = poller.id;
            self.resume_progress_poller(poller_id);
        }
    }

    /// Returns `true` if the poller currently has a pending timer.
    #[cfg(test)]
    pub(crate) fn is_progress_poller_active(&self, id: PollerId) -> bool {
        self.progress_pollers
            .iter()
            .any(|p| p.id == id && p.timer.is_some())
    }
}
