//! Browser-side adapters for the login flow: timers, the reactive form
//! store and page navigation.

use std::time::Duration;

use forensicdesk_common::{FormStore, LoginForm, Redirect, Timer};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

/// `setTimeout`-backed delays.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTimer;

impl Timer for BrowserTimer {
    fn sleep(&self, duration: Duration) -> impl std::future::Future<Output = ()> {
        let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
        TimeoutFuture::new(millis)
    }
}

/// The login form held in a signal, so every transition re-renders the view.
#[derive(Clone, Copy)]
pub struct SignalStore(pub RwSignal<LoginForm>);

impl FormStore for SignalStore {
    fn update<R>(&self, f: impl FnOnce(&mut LoginForm) -> R) -> Option<R> {
        // Fails once the page has been unmounted and the signal disposed.
        self.0.try_update(f)
    }
}

/// Sends the browser to `redirect.path` after `redirect.delay`.
pub fn schedule_redirect(redirect: Redirect) {
    leptos::task::spawn_local(async move {
        BrowserTimer.sleep(redirect.delay).await;
        let Some(window) = web_sys::window() else {
            log::error!("No window to navigate from");
            return;
        };
        log::info!("Redirecting to {}", redirect.path);
        if let Err(e) = window.location().set_href(&redirect.path) {
            log::error!("Navigation to {} failed: {e:?}", redirect.path);
        }
    });
}
