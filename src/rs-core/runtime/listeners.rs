use crate::bindings::{PlayerEventKind, PlayerId};

use super::Runtime;

/// Whether a native event listener should keep receiving events.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ListenerStatus {
    Keep,
    Remove,
}

type ListenerHandler = Box<dyn FnMut(&mut Runtime, f64) -> ListenerStatus>;

pub(super) struct PlayerListener {
    player: PlayerId,
    kind: PlayerEventKind,
    handler: ListenerHandler,
}

impl Runtime {
    /// Call `handler` with the event's value each time the native player emits
    /// an event of type `kind`, until it returns `ListenerStatus::Remove`.
    pub(crate) fn listen<F>(&mut self, player: PlayerId, kind: PlayerEventKind, handler: F)
    where
        F: FnMut(&mut Runtime, f64) -> ListenerStatus + 'static,
    {
        if self.native_listens.insert((player, kind)) {
            self.host.listen(player, kind);
        }
        self.listeners.push(PlayerListener {
            player,
            kind,
            handler: Box::new(handler),
        });
    }

    /// Route an event emitted by a native player to its listeners, in
    /// registration order.
    pub fn on_player_event(&mut self, player: PlayerId, kind: PlayerEventKind, value: f64) {
        let listeners = std::mem::take(&mut self.listeners);
        let mut kept = Vec::with_capacity(listeners.len());
        for mut listener in listeners {
            if listener.player == player
                && listener.kind == kind
                && (listener.handler)(self, value) == ListenerStatus::Remove
            {
                continue;
            }
            kept.push(listener);
        }
        kept.append(&mut self.listeners);
        self.listeners = kept;
    }

    #[cfg(test)]
    pub(crate) fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;
    use crate::host::fake::FakeHost;

    #[test]
    fn test_event_routing() {
        let host = FakeHost::new();
        let mut rt = Runtime::new(Box::new(host.clone()));
        let received = Rc::new(RefCell::new(vec![]));

        let r = received.clone();
        rt.listen(1, PlayerEventKind::PlayProgress, move |_, v| {
            r.borrow_mut().push(("progress", v));
            ListenerStatus::Keep
        });
        let r = received.clone();
        rt.listen(1, PlayerEventKind::Ready, move |_, v| {
            r.borrow_mut().push(("ready", v));
            ListenerStatus::Remove
        });
        let r = received.clone();
        rt.listen(2, PlayerEventKind::PlayProgress, move |_, v| {
            r.borrow_mut().push(("other", v));
            ListenerStatus::Keep
        });

        rt.on_player_event(1, PlayerEventKind::PlayProgress, 0.5);
        rt.on_player_event(1, PlayerEventKind::Ready, 0.);
        rt.on_player_event(1, PlayerEventKind::Ready, 0.);
        rt.on_player_event(3, PlayerEventKind::PlayProgress, 0.1);
        assert_eq!(
            *received.borrow(),
            vec![("progress", 0.5), ("ready", 0.)]
        );
        assert_eq!(rt.listener_count(), 2);
    }

    #[test]
    fn test_native_listen_requested_once() {
        let host = FakeHost::new();
        let mut rt = Runtime::new(Box::new(host.clone()));
        rt.listen(1, PlayerEventKind::StateChange, |_, _| ListenerStatus::Keep);
        rt.listen(1, PlayerEventKind::StateChange, |_, _| ListenerStatus::Keep);
        rt.listen(1, PlayerEventKind::Finish, |_, _| ListenerStatus::Keep);
        assert_eq!(
            host.listens(),
            vec![
                (1, PlayerEventKind::StateChange),
                (1, PlayerEventKind::Finish)
            ]
        );
    }

    #[test]
    fn test_listener_registered_during_dispatch() {
        let host = FakeHost::new();
        let mut rt = Runtime::new(Box::new(host.clone()));
        let count = Rc::new(RefCell::new(0));
        let c = count.clone();
        rt.listen(1, PlayerEventKind::Finish, move |rt, _| {
            let c = c.clone();
            rt.listen(1, PlayerEventKind::Finish, move |_, _| {
                *c.borrow_mut() += 1;
                ListenerStatus::Keep
            });
            ListenerStatus::Remove
        });
        rt.on_player_event(1, PlayerEventKind::Finish, 0.);
        assert_eq!(*count.borrow(), 0);
        rt.on_player_event(1, PlayerEventKind::Finish, 0.);
        assert_eq!(*count.borrow(), 1);
        assert_eq!(rt.listener_count(), 1);
    }
}
