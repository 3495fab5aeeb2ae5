//! Deferred execution of continuations until a predicate becomes truthy.
//!
//! Native player APIs are injected in the page by external scripts, at an unknown
//! time. Code needing them registers a predicate ("is the API there?") and a
//! continuation through `ReadinessWaiter::loaded`, then returns right away. Pending
//! registrations are checked each time `poll` is called.

use thiserror::Error;

type Attempt<C> = Box<dyn FnMut(&mut C) -> bool>;

struct Registration<C> {
    /// Describes what is awaited, for logs.
    label: String,

    /// Time, in milliseconds, this registration has been waiting for.
    waited: f64,

    /// Checks the predicate and, if truthy, runs the continuation.
    /// Returns `true` once the continuation ran.
    attempt: Attempt<C>,
}

/// Stores continuations waiting for their predicate to become truthy.
///
/// The context `C` is what both predicates and continuations are given access
/// to. It owns the `ReadinessWaiter` itself (see `Waiting`) so continuations may
/// register new waits.
pub struct ReadinessWaiter<C> {
    pending: Vec<Registration<C>>,
}

/// Implemented by contexts owning a `ReadinessWaiter` of themselves.
pub trait Waiting: Sized {
    fn waiter_mut(&mut self) -> &mut ReadinessWaiter<Self>;
}

impl<C> ReadinessWaiter<C> {
    pub fn new() -> Self {
        Self { pending: vec![] }
    }

    /// Register `continuation` to be called exactly once, with the value
    /// returned by `predicate`, the first time `predicate` returns `Some` during
    /// a `poll`.
    ///
    /// The continuation is never called synchronously by this method, even if
    /// the predicate is already truthy.
    pub fn loaded<T, P, F>(&mut self, label: impl Into<String>, predicate: P, continuation: F)
    where
        C: 'static,
        T: 'static,
        P: Fn(&C) -> Option<T> + 'static,
        F: FnOnce(&mut C, T) + 'static,
    {
        let mut continuation = Some(continuation);
        let attempt = move |ctx: &mut C| match predicate(&*ctx) {
            Some(value) => {
                if let Some(continuation) = continuation.take() {
                    continuation(ctx, value);
                }
                true
            }
            None => false,
        };
        self.pending.push(Registration {
            label: label.into(),
            waited: 0.,
            attempt: Box::new(attempt),
        });
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }
}

impl<C> Default for ReadinessWaiter<C> {
    fn default() -> Self {
        Self::new()
    }
}

/// Check every pending registration of `ctx`'s `ReadinessWaiter`, in
/// registration order, running the continuations whose predicate is now truthy.
///
/// `elapsed` is the time in milliseconds since the previous poll. Registrations
/// still unfulfilled after `timeout` milliseconds (if set) are dropped and
/// returned as errors.
///
/// Registrations made by continuations during this call are only checked at
/// the next poll.
pub fn poll<C: Waiting>(ctx: &mut C, elapsed: f64, timeout: Option<f64>) -> Vec<ReadinessError> {
    let pending = std::mem::take(&mut ctx.waiter_mut().pending);
    let mut kept = Vec::with_capacity(pending.len());
    let mut errors = vec![];
    for mut registration in pending {
        if (registration.attempt)(ctx) {
            continue;
        }
        registration.waited += elapsed;
        match timeout {
            Some(max) if registration.waited >= max => {
                errors.push(ReadinessError::Timeout {
                    label: registration.label,
                    waited: registration.waited,
                });
            }
            _ => kept.push(registration),
        }
    }
    let waiter = ctx.waiter_mut();
    kept.append(&mut waiter.pending);
    waiter.pending = kept;
    errors
}

/// Error returned when a readiness predicate could not be fulfilled.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ReadinessError {
    #[error("Gave up waiting for {label} after {waited}ms.")]
    Timeout { label: String, waited: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Ctx {
        waiter: ReadinessWaiter<Ctx>,
        value: Option<u32>,
        fired: Vec<(&'static str, u32)>,
    }

    impl Waiting for Ctx {
        fn waiter_mut(&mut self) -> &mut ReadinessWaiter<Self> {
            &mut self.waiter
        }
    }

    fn new_ctx() -> Ctx {
        Ctx {
            waiter: ReadinessWaiter::new(),
            value: None,
            fired: vec![],
        }
    }

    #[test]
    fn test_fires_once_when_truthy() {
        let mut ctx = new_ctx();
        ctx.waiter.loaded("value", |c: &Ctx| c.value, |c: &mut Ctx, v| c.fired.push(("a", v)));
        assert!(ctx.fired.is_empty());

        poll(&mut ctx, 100., None);
        assert!(ctx.fired.is_empty());
        assert_eq!(ctx.waiter.pending_len(), 1);

        ctx.value = Some(7);
        poll(&mut ctx, 100., None);
        assert_eq!(ctx.fired, vec![("a", 7)]);
        assert!(!ctx.waiter.has_pending());

        ctx.value = Some(8);
        poll(&mut ctx, 100., None);
        assert_eq!(ctx.fired, vec![("a", 7)]);
    }

    #[test]
    fn test_never_fires_synchronously() {
        let mut ctx = new_ctx();
        ctx.value = Some(1);
        ctx.waiter.loaded("value", |c: &Ctx| c.value, |c: &mut Ctx, v| c.fired.push(("a", v)));
        assert!(ctx.fired.is_empty());
        poll(&mut ctx, 0., None);
        assert_eq!(ctx.fired, vec![("a", 1)]);
    }

    #[test]
    fn test_overlapping_registrations() {
        let mut ctx = new_ctx();
        ctx.waiter.loaded("value", |c: &Ctx| c.value, |c: &mut Ctx, v| c.fired.push(("a", v)));
        ctx.waiter.loaded(
            "big value",
            |c: &Ctx| c.value.filter(|v| *v > 10),
            |c: &mut Ctx, v| c.fired.push(("b", v)),
        );
        ctx.waiter.loaded("value", |c: &Ctx| c.value, |c: &mut Ctx, v| c.fired.push(("c", v)));

        ctx.value = Some(3);
        poll(&mut ctx, 100., None);
        assert_eq!(ctx.fired, vec![("a", 3), ("c", 3)]);
        assert_eq!(ctx.waiter.pending_len(), 1);

        ctx.value = Some(12);
        poll(&mut ctx, 100., None);
        assert_eq!(ctx.fired, vec![("a", 3), ("c", 3), ("b", 12)]);
    }

    #[test]
    fn test_nested_registration_waits_next_poll() {
        let mut ctx = new_ctx();
        ctx.value = Some(2);
        ctx.waiter.loaded("value", |c: &Ctx| c.value, |c: &mut Ctx, v| {
            c.fired.push(("outer", v));
            c.waiter
                .loaded("value", |c: &Ctx| c.value, |c: &mut Ctx, v| c.fired.push(("inner", v)));
        });
        poll(&mut ctx, 100., None);
        assert_eq!(ctx.fired, vec![("outer", 2)]);
        assert_eq!(ctx.waiter.pending_len(), 1);
        poll(&mut ctx, 100., None);
        assert_eq!(ctx.fired, vec![("outer", 2), ("inner", 2)]);
    }

    #[test]
    fn test_timeout() {
        let mut ctx = new_ctx();
        ctx.waiter.loaded("some API", |c: &Ctx| c.value, |c: &mut Ctx, v| c.fired.push(("a", v)));
        assert!(poll(&mut ctx, 100., Some(250.)).is_empty());
        assert!(poll(&mut ctx, 100., Some(250.)).is_empty());
        let errors = poll(&mut ctx, 100., Some(250.));
        assert_eq!(
            errors,
            vec![ReadinessError::Timeout {
                label: "some API".to_owned(),
                waited: 300.
            }]
        );
        assert!(!ctx.waiter.has_pending());
        ctx.value = Some(1);
        poll(&mut ctx, 100., Some(250.));
        assert!(ctx.fired.is_empty());
    }

    #[test]
    fn test_waits_forever_without_timeout() {
        let mut ctx = new_ctx();
        ctx.waiter.loaded("some API", |c: &Ctx| c.value, |c: &mut Ctx, v| c.fired.push(("a", v)));
        for _ in 0..1000 {
            assert!(poll(&mut ctx, 100., None).is_empty());
        }
        ctx.value = Some(5);
        poll(&mut ctx, 100., None);
        assert_eq!(ctx.fired, vec![("a", 5)]);
    }
}
