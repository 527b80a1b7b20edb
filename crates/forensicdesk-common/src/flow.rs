//! Async driver for one sign-in attempt.
//!
//! [`LoginFlow::submit`] strings the synchronous [`LoginForm`] transitions
//! together with the two suspension points: the authenticator call and the
//! toast display time. The form itself lives behind a [`FormStore`] so the
//! browser build can keep it in a reactive signal.

use std::cell::RefCell;
use std::time::Duration;

use crate::auth::{Authenticator, Timer};
use crate::form::{Completion, LoginForm, SubmitRejected};

/// Shared, mutable home of a [`LoginForm`].
pub trait FormStore {
    /// Runs `f` against the form. `None` means the form is gone (unmounted).
    fn update<R>(&self, f: impl FnOnce(&mut LoginForm) -> R) -> Option<R>;
}

impl FormStore for RefCell<LoginForm> {
    fn update<R>(&self, f: impl FnOnce(&mut LoginForm) -> R) -> Option<R> {
        let mut form = self.borrow_mut();
        Some(f(&mut *form))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowOutcome {
    Rejected(SubmitRejected),
    /// The toast has been shown and has expired.
    Completed(Completion),
    /// The form disappeared or left `Pending` while the attempt was running.
    Detached,
}

pub struct LoginFlow<A, T> {
    authenticator: A,
    timer: T,
    toast_duration: Duration,
}

impl<A: Authenticator, T: Timer> LoginFlow<A, T> {
    pub fn new(authenticator: A, timer: T, toast_duration: Duration) -> Self {
        Self {
            authenticator,
            timer,
            toast_duration,
        }
    }

    /// Runs one submission to the end of its toast.
    ///
    /// `on_complete` fires as soon as the toast is raised, before the toast
    /// timer starts, so callers can schedule navigation alongside it.
    pub async fn submit<S: FormStore>(
        &self,
        store: &S,
        on_complete: impl FnOnce(&Completion),
    ) -> FlowOutcome {
        let pending = match store.update(|form| form.submit()) {
            None => return FlowOutcome::Detached,
            Some(Err(rejected)) => return FlowOutcome::Rejected(rejected),
            Some(Ok(pending)) => pending,
        };

        let result = self.authenticator.authenticate(&pending).await;

        let Some(completion) = store.update(|form| form.complete(result)).flatten() else {
            return FlowOutcome::Detached;
        };
        on_complete(&completion);

        self.timer.sleep(self.toast_duration).await;
        store.update(|form| form.expire_toast(completion.toast_id));
        FlowOutcome::Completed(completion)
    }
}
