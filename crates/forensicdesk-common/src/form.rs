//! Login form controller.
//!
//! [`LoginForm`] owns every piece of mutable page state: the selected role,
//! field values and errors, the submission state and the visible toast.
//! All methods are synchronous state transitions; the asynchronous parts
//! (authentication, toast expiry) are driven from outside, see
//! [`crate::flow`].
//!
//! ```text
//!   Idle ──submit──▶ Validating ──errors──▶ Idle
//!                        │
//!                        └──ok──▶ Pending ──complete──▶ Done ──expire_toast──▶ Idle
//! ```

use std::fmt;
use std::time::Duration;

use crate::auth::Session;
use crate::config::NavigationConfig;
use crate::role::Role;
use crate::validation::{Credentials, Field, FieldErrors, validate};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Validating,
    Pending,
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
        }
    }
}

/// Transient notification. `id` increases with every toast raised by a form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
}

/// A validated submission handed to the authenticator.
#[derive(Clone, PartialEq, Eq)]
pub struct PendingSubmission {
    pub role: Role,
    /// Trimmed.
    pub email: String,
    pub password: String,
}

impl fmt::Debug for PendingSubmission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingSubmission")
            .field("role", &self.role)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitRejected {
    /// A submission is already pending.
    Busy,
    /// Validation failed; the errors are now shown on the form.
    Invalid(FieldErrors),
}

/// Browser navigation scheduled after a successful sign-in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    pub path: String,
    pub delay: Duration,
}

/// Result of [`LoginForm::complete`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub toast_id: u64,
    pub redirect: Option<Redirect>,
}

#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    role: Role,
    credentials: Credentials,
    errors: FieldErrors,
    state: SubmissionState,
    toast: Option<Toast>,
    next_toast_id: u64,
    password_visible: bool,
    remember_me: bool,
    navigation: Option<NavigationConfig>,
}

impl LoginForm {
    /// A fresh form. `navigation` of `None` keeps the user on the page after
    /// sign-in.
    pub fn new(navigation: Option<NavigationConfig>) -> Self {
        Self {
            navigation,
            ..Self::default()
        }
    }

    // ── Accessors ───────────────────────────────────────────────────

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn value(&self, field: Field) -> &str {
        self.credentials.get(field)
    }

    pub fn error(&self, field: Field) -> Option<&'static str> {
        self.errors.get(field)
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn toast(&self) -> Option<&Toast> {
        self.toast.as_ref()
    }

    pub fn is_submit_disabled(&self) -> bool {
        self.state == SubmissionState::Pending
    }

    pub fn password_visible(&self) -> bool {
        self.password_visible
    }

    pub fn remember_me(&self) -> bool {
        self.remember_me
    }

    // ── Input events ────────────────────────────────────────────────

    pub fn select_role(&mut self, role: Role) {
        if self.role != role {
            log::debug!("role selected: {}", role.as_str());
        }
        self.role = role;
    }

    /// Stores `value` and clears that field's error, whatever the new content.
    pub fn update_field(&mut self, field: Field, value: String) {
        self.credentials.set(field, value);
        self.errors.clear(field);
    }

    pub fn toggle_password_visibility(&mut self) {
        self.password_visible = !self.password_visible;
    }

    /// Cosmetic only.
    pub fn set_remember_me(&mut self, remember: bool) {
        self.remember_me = remember;
    }

    // ── Submission ──────────────────────────────────────────────────

    fn transition(&mut self, next: SubmissionState) {
        log::debug!("submission state {:?} -> {:?}", self.state, next);
        self.state = next;
    }

    /// Validates the current input and, if it passes, enters `Pending`.
    pub fn submit(&mut self) -> Result<PendingSubmission, SubmitRejected> {
        if self.state == SubmissionState::Pending {
            log::debug!("submit ignored: already pending");
            return Err(SubmitRejected::Busy);
        }

        self.transition(SubmissionState::Validating);
        self.errors.clear_all();
        let errors = validate(&self.credentials);
        if !errors.is_empty() {
            log::debug!("submit rejected: {errors:?}");
            self.errors = errors.clone();
            self.transition(SubmissionState::Idle);
            return Err(SubmitRejected::Invalid(errors));
        }

        self.toast = None;
        self.transition(SubmissionState::Pending);
        Ok(PendingSubmission {
            role: self.role,
            email: self.credentials.email.trim().to_string(),
            password: self.credentials.password.clone(),
        })
    }

    fn raise_toast(&mut self, message: String, kind: ToastKind) -> u64 {
        self.next_toast_id += 1;
        let id = self.next_toast_id;
        self.toast = Some(Toast { id, message, kind });
        id
    }

    /// Applies the authenticator's answer to a pending submission.
    ///
    /// Returns `None` if nothing was pending.
    pub fn complete<E: fmt::Display>(
        &mut self,
        outcome: Result<Session, E>,
    ) -> Option<Completion> {
        if self.state != SubmissionState::Pending {
            log::warn!("completion ignored in state {:?}", self.state);
            return None;
        }
        self.transition(SubmissionState::Done);

        match outcome {
            Ok(session) => {
                let redirect = self.navigation.as_ref().map(|nav| Redirect {
                    path: nav.path_for(session.role).to_string(),
                    delay: nav.delay,
                });
                let message = success_message(&session, redirect.is_some());
                log::info!("signed in as {}", session.role.as_str());
                let toast_id = self.raise_toast(message, ToastKind::Success);
                Some(Completion { toast_id, redirect })
            }
            Err(err) => {
                log::warn!("sign-in failed: {err}");
                let toast_id = self.raise_toast(err.to_string(), ToastKind::Error);
                Some(Completion {
                    toast_id,
                    redirect: None,
                })
            }
        }
    }

    /// Removes the toast with `id` if it is still showing.
    pub fn expire_toast(&mut self, id: u64) -> bool {
        match &self.toast {
            Some(toast) if toast.id == id => {
                self.toast = None;
                if self.state == SubmissionState::Done {
                    self.transition(SubmissionState::Idle);
                }
                true
            }
            _ => false,
        }
    }
}

fn success_message(session: &Session, redirecting: bool) -> String {
    let role = session.role.display_name();
    let mut message = if session.returning {
        format!("Welcome back, {role}!")
    } else {
        format!("Signed in as {role}.")
    };
    if redirecting {
        message.push_str(" Redirecting...");
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{EMAIL_INVALID, EMAIL_REQUIRED, PASSWORD_REQUIRED};
    use std::convert::Infallible;

    fn filled(email: &str, password: &str) -> LoginForm {
        let mut form = LoginForm::new(Some(NavigationConfig::default()));
        form.update_field(Field::Email, email.into());
        form.update_field(Field::Password, password.into());
        form
    }

    fn session(role: Role, returning: bool) -> Result<Session, Infallible> {
        Ok(Session {
            role,
            email: "a@b.com".into(),
            returning,
        })
    }

    #[test]
    fn starts_idle_as_admin() {
        let form = LoginForm::new(None);
        assert_eq!(form.role(), Role::Admin);
        assert_eq!(form.state(), SubmissionState::Idle);
        assert!(form.toast().is_none());
        assert!(!form.is_submit_disabled());
    }

    #[test]
    fn role_selection_is_exclusive() {
        let mut form = LoginForm::new(None);
        form.select_role(Role::Investigator);
        assert_eq!(form.role(), Role::Investigator);
        form.select_role(Role::Investigator);
        assert_eq!(form.role(), Role::Investigator);
        form.select_role(Role::Admin);
        assert_eq!(form.role(), Role::Admin);
    }

    #[test]
    fn empty_submit_shows_both_errors_and_stays_idle() {
        let mut form = LoginForm::new(None);
        let rejected = form.submit().unwrap_err();
        assert!(matches!(rejected, SubmitRejected::Invalid(_)));
        assert_eq!(form.error(Field::Email), Some(EMAIL_REQUIRED));
        assert_eq!(form.error(Field::Password), Some(PASSWORD_REQUIRED));
        assert_eq!(form.state(), SubmissionState::Idle);
    }

    #[test]
    fn editing_clears_only_that_field() {
        let mut form = LoginForm::new(None);
        let _ = form.submit();
        form.update_field(Field::Email, "x".into());
        assert_eq!(form.error(Field::Email), None);
        assert_eq!(form.error(Field::Password), Some(PASSWORD_REQUIRED));
    }

    #[test]
    fn bad_email_blocks_submission() {
        let mut form = filled("bademail", "abcdef");
        let rejected = form.submit().unwrap_err();
        match rejected {
            SubmitRejected::Invalid(errors) => {
                assert_eq!(errors.email, Some(EMAIL_INVALID));
                assert_eq!(errors.password, None);
            }
            other => panic!("unexpected rejection {other:?}"),
        }
        assert_eq!(form.state(), SubmissionState::Idle);
    }

    #[test]
    fn resubmitting_revalidates_from_scratch() {
        let mut form = filled("bademail", "abc");
        let _ = form.submit();
        form.update_field(Field::Email, "a@b.com".into());
        // Password error stays visible until the next submit.
        assert!(form.error(Field::Password).is_some());
        form.update_field(Field::Password, "abcdef".into());
        assert!(form.submit().is_ok());
        assert!(form.errors().is_empty());
    }

    #[test]
    fn valid_submit_enters_pending_and_locks() {
        let mut form = filled("  a@b.com ", "abcdef");
        form.select_role(Role::Investigator);
        let pending = form.submit().unwrap();
        assert_eq!(pending.role, Role::Investigator);
        assert_eq!(pending.email, "a@b.com");
        assert_eq!(form.state(), SubmissionState::Pending);
        assert!(form.is_submit_disabled());

        assert_eq!(form.submit(), Err(SubmitRejected::Busy));
        assert_eq!(form.state(), SubmissionState::Pending);
    }

    #[test]
    fn completion_raises_success_toast_and_redirect() {
        let mut form = filled("a@b.com", "abcdef");
        form.select_role(Role::Investigator);
        form.submit().unwrap();

        let completion = form.complete(session(Role::Investigator, false)).unwrap();
        assert_eq!(form.state(), SubmissionState::Done);
        assert!(!form.is_submit_disabled());

        let toast = form.toast().unwrap();
        assert_eq!(toast.kind, ToastKind::Success);
        assert_eq!(toast.message, "Signed in as Investigator. Redirecting...");
        assert_eq!(
            completion.redirect.unwrap().path,
            "investigator-dashboard.html"
        );
    }

    #[test]
    fn returning_account_is_welcomed_back() {
        let mut form = LoginForm::new(None);
        form.update_field(Field::Email, "admin@forensicdesk.com".into());
        form.update_field(Field::Password, "abcdef".into());
        form.submit().unwrap();
        let completion = form.complete(session(Role::Admin, true)).unwrap();
        assert_eq!(completion.redirect, None);
        assert_eq!(form.toast().unwrap().message, "Welcome back, Admin!");
    }

    #[test]
    fn failed_authentication_raises_error_toast() {
        let mut form = filled("a@b.com", "abcdef");
        form.submit().unwrap();
        let completion = form
            .complete::<&str>(Err("Invalid credentials"))
            .unwrap();
        assert_eq!(completion.redirect, None);
        let toast = form.toast().unwrap();
        assert_eq!(toast.kind, ToastKind::Error);
        assert_eq!(toast.message, "Invalid credentials");
    }

    #[test]
    fn completion_outside_pending_is_ignored() {
        let mut form = LoginForm::new(None);
        assert!(form.complete(session(Role::Admin, false)).is_none());
        assert_eq!(form.state(), SubmissionState::Idle);
        assert!(form.toast().is_none());
    }

    #[test]
    fn toast_expiry_returns_to_idle() {
        let mut form = filled("a@b.com", "abcdef");
        form.submit().unwrap();
        let completion = form.complete(session(Role::Admin, false)).unwrap();
        assert!(form.expire_toast(completion.toast_id));
        assert!(form.toast().is_none());
        assert_eq!(form.state(), SubmissionState::Idle);
    }

    #[test]
    fn stale_expiry_keeps_newer_toast() {
        let mut form = filled("a@b.com", "abcdef");
        form.submit().unwrap();
        let first = form.complete(session(Role::Admin, false)).unwrap();

        // Resubmitting while the first toast is up replaces it.
        form.submit().unwrap();
        assert!(form.toast().is_none());
        let second = form.complete(session(Role::Admin, false)).unwrap();
        assert_ne!(first.toast_id, second.toast_id);

        assert!(!form.expire_toast(first.toast_id));
        assert_eq!(form.toast().unwrap().id, second.toast_id);
        assert_eq!(form.state(), SubmissionState::Done);
    }

    #[test]
    fn view_flags_do_not_touch_submission() {
        let mut form = LoginForm::new(None);
        form.toggle_password_visibility();
        form.set_remember_me(true);
        assert!(form.password_visible());
        assert!(form.remember_me());
        form.toggle_password_visibility();
        assert!(!form.password_visible());
        assert_eq!(form.state(), SubmissionState::Idle);
    }

    #[test]
    fn pending_submission_debug_hides_password() {
        let mut form = filled("a@b.com", "hunter22");
        let pending = form.submit().unwrap();
        let debug = format!("{pending:?}");
        assert!(!debug.contains("hunter22"));
        assert!(debug.contains("a@b.com"));
    }
}
