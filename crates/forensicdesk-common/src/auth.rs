//! Authentication boundary.
//!
//! The form controller never talks to a backend directly. A submission that
//! passes validation is handed to an [`Authenticator`]; today that is the
//! [`SimulatedAuthenticator`], which waits a fixed delay and accepts every
//! request. A networked implementation can replace it without touching
//! [`crate::form`].

use std::convert::Infallible;
use std::fmt;
use std::future::Future;
use std::time::Duration;

use crate::config::{DemoAccounts, LoginConfig};
use crate::form::PendingSubmission;
use crate::role::Role;

/// Outcome of a successful sign-in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub role: Role,
    pub email: String,
    /// The email matched the demo account configured for `role`.
    pub returning: bool,
}

/// Source of delays. Browser builds use `gloo-timers`, tests use tokio.
pub trait Timer {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()>;
}

impl<T: Timer + ?Sized> Timer for &T {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
        (**self).sleep(duration)
    }
}

pub trait Authenticator {
    type Error: fmt::Display;

    fn authenticate(
        &self,
        submission: &PendingSubmission,
    ) -> impl Future<Output = Result<Session, Self::Error>>;
}

/// Stand-in for a real backend: sleeps, then signs everyone in.
#[derive(Debug, Clone)]
pub struct SimulatedAuthenticator<T> {
    timer: T,
    delay: Duration,
    demo_accounts: DemoAccounts,
}

impl<T: Timer> SimulatedAuthenticator<T> {
    pub fn new(timer: T, config: &LoginConfig) -> Self {
        Self {
            timer,
            delay: config.submit_delay,
            demo_accounts: config.demo_accounts.clone(),
        }
    }

    fn is_demo_account(&self, role: Role, email: &str) -> bool {
        self.demo_accounts.account_for(role) == Some(email)
    }
}

impl<T: Timer> Authenticator for SimulatedAuthenticator<T> {
    type Error = Infallible;

    async fn authenticate(&self, submission: &PendingSubmission) -> Result<Session, Infallible> {
        log::debug!(
            "simulating sign-in for {} as {}",
            submission.email,
            submission.role.as_str()
        );
        self.timer.sleep(self.delay).await;
        Ok(Session {
            role: submission.role,
            email: submission.email.clone(),
            returning: self.is_demo_account(submission.role, &submission.email),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Records requested delays and completes immediately.
    #[derive(Default)]
    struct RecordingTimer {
        slept: RefCell<Vec<Duration>>,
    }

    impl Timer for RecordingTimer {
        fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
            self.slept.borrow_mut().push(duration);
            std::future::ready(())
        }
    }

    fn submission(role: Role, email: &str) -> PendingSubmission {
        PendingSubmission {
            role,
            email: email.into(),
            password: "abcdef".into(),
        }
    }

    #[tokio::test]
    async fn waits_configured_delay_then_succeeds() {
        let timer = RecordingTimer::default();
        let auth = SimulatedAuthenticator::new(&timer, &LoginConfig::default());

        let session = auth
            .authenticate(&submission(Role::Investigator, "a@b.com"))
            .await
            .unwrap();

        assert_eq!(session.role, Role::Investigator);
        assert_eq!(session.email, "a@b.com");
        assert!(!session.returning);
        assert_eq!(*timer.slept.borrow(), vec![Duration::from_millis(1500)]);
    }

    #[tokio::test]
    async fn demo_account_must_match_role() {
        let timer = RecordingTimer::default();
        let auth = SimulatedAuthenticator::new(&timer, &LoginConfig::default());

        let admin = auth
            .authenticate(&submission(Role::Admin, "admin@forensicdesk.com"))
            .await
            .unwrap();
        assert!(admin.returning);

        let mismatched = auth
            .authenticate(&submission(Role::Investigator, "admin@forensicdesk.com"))
            .await
            .unwrap();
        assert!(!mismatched.returning);
    }
}
