//! Shared logic for the ForensicDesk login page.
//!
//! This crate contains:
//! - **Roles** — the Admin / Investigator selector values
//! - **Validation** — email and password checks with user-facing messages
//! - **Form controller** — the login form state machine (`Idle → Pending → Done`)
//! - **Auth boundary** — the injectable `Authenticator` and the simulated one
//! - **Flow** — the async driver tying the controller to timers
//! - **Config** — timings, redirect targets and demo accounts from TOML
//!
//! Nothing here touches the DOM, so it builds and tests natively; the
//! `forensicdesk-web` crate binds it to a Leptos view.

pub mod auth;
pub mod config;
pub mod flow;
pub mod form;
pub mod role;
pub mod validation;

pub use auth::{Authenticator, Session, SimulatedAuthenticator, Timer};
pub use config::{ConfigError, LoginConfig, NavigationConfig};
pub use flow::{FlowOutcome, FormStore, LoginFlow};
pub use form::{
    Completion, LoginForm, PendingSubmission, Redirect, SubmissionState, SubmitRejected, Toast,
    ToastKind,
};
pub use role::Role;
pub use validation::{Credentials, Field, FieldErrors, validate};
