//! Login page component.

use forensicdesk_common::{
    Field, LoginConfig, LoginFlow, LoginForm, Role, SimulatedAuthenticator, Toast, ToastKind,
};
use leptos::ev;
use leptos::prelude::*;

use crate::browser::{schedule_redirect, BrowserTimer, SignalStore};

/// Login page — role selector plus email/password form.
#[component]
pub fn LoginPage() -> impl IntoView {
    let config = expect_context::<LoginConfig>();
    let form = RwSignal::new(LoginForm::new(config.navigation.clone()));
    let store = SignalStore(form);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let flow = LoginFlow::new(
            SimulatedAuthenticator::new(BrowserTimer, &config),
            BrowserTimer,
            config.toast_duration,
        );
        leptos::task::spawn_local(async move {
            let outcome = flow
                .submit(&store, |completion| {
                    if let Some(redirect) = completion.redirect.clone() {
                        schedule_redirect(redirect);
                    }
                })
                .await;
            log::debug!("Sign-in attempt finished: {outcome:?}");
        });
    };

    let pending = move || form.with(LoginForm::is_submit_disabled);
    let password_visible = move || form.with(LoginForm::password_visible);

    view! {
        {move || form.with(|f| f.toast().cloned()).map(|toast| view! { <ToastMessage toast=toast /> })}

        <div class="flex items-center justify-center min-h-screen bg-base-100">
            <div class="card bg-base-200 border border-base-300 w-full max-w-md">
                <div class="card-body">
                    <h1 class="text-3xl font-bold text-center">"ForensicDesk"</h1>
                    <p class="text-center text-sm text-base-content/60 mb-4">"Sign in to your account"</p>

                    <RoleSelector form=form />

                    <form on:submit=on_submit novalidate>
                        <fieldset class="fieldset">
                            <label class="fieldset-label" for="email">"Email"</label>
                            <input
                                id="email"
                                class="input input-bordered w-full"
                                class:input-error=move || form.with(|f| f.error(Field::Email).is_some())
                                type="email"
                                autocomplete="email"
                                placeholder="Enter your email"
                                prop:value=move || form.with(|f| f.value(Field::Email).to_string())
                                on:input=move |ev| {
                                    form.update(|f| f.update_field(Field::Email, event_target_value(&ev)))
                                }
                            />
                            <span class="text-error text-xs min-h-4">
                                {move || form.with(|f| f.error(Field::Email))}
                            </span>
                        </fieldset>

                        <fieldset class="fieldset">
                            <label class="fieldset-label" for="password">"Password"</label>
                            <div class="join w-full">
                                <input
                                    id="password"
                                    class="input input-bordered join-item w-full"
                                    class:input-error=move || form.with(|f| f.error(Field::Password).is_some())
                                    type=move || if password_visible() { "text" } else { "password" }
                                    autocomplete="current-password"
                                    placeholder="Enter your password"
                                    prop:value=move || form.with(|f| f.value(Field::Password).to_string())
                                    on:input=move |ev| {
                                        form.update(|f| f.update_field(Field::Password, event_target_value(&ev)))
                                    }
                                />
                                <button
                                    class="btn join-item"
                                    type="button"
                                    aria-label=move || if password_visible() { "Hide password" } else { "Show password" }
                                    on:click=move |_| form.update(LoginForm::toggle_password_visibility)
                                >
                                    {move || if password_visible() { "Hide" } else { "Show" }}
                                </button>
                            </div>
                            <span class="text-error text-xs min-h-4">
                                {move || form.with(|f| f.error(Field::Password))}
                            </span>
                        </fieldset>

                        <div class="flex justify-between items-center text-sm my-4">
                            <label class="label cursor-pointer gap-2">
                                <input
                                    type="checkbox"
                                    class="checkbox checkbox-sm"
                                    prop:checked=move || form.with(LoginForm::remember_me)
                                    on:change=move |ev| {
                                        form.update(|f| f.set_remember_me(event_target_checked(&ev)))
                                    }
                                />
                                "Remember me"
                            </label>
                            <a href="#" class="link link-primary">"Forgot password?"</a>
                        </div>

                        <button
                            class="btn btn-primary w-full"
                            type="submit"
                            disabled=pending
                        >
                            {move || pending().then(|| view! { <span class="loading loading-spinner loading-sm"></span> })}
                            {move || if pending() { "Signing in..." } else { "Sign In" }}
                        </button>
                    </form>

                    <p class="text-center text-xs text-base-content/40 mt-4">
                        "Protected by enterprise-grade security"
                    </p>
                </div>
            </div>
        </div>
    }
}

/// Two-way Admin / Investigator toggle; exactly one button is active.
#[component]
fn RoleSelector(form: RwSignal<LoginForm>) -> impl IntoView {
    view! {
        <div class="join w-full mb-4" role="group" aria-label="Sign in as">
            {Role::ALL
                .into_iter()
                .map(|role| {
                    let active = move || form.with(|f| f.role() == role);
                    view! {
                        <button
                            id=format!("{}Btn", role.as_str())
                            type="button"
                            class="btn join-item flex-1"
                            class:btn-primary=active
                            class:btn-outline=move || !active()
                            aria-pressed=move || active().to_string()
                            on:click=move |_| form.update(|f| f.select_role(role))
                        >
                            {role.display_name()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Transient notification in the top-right corner.
#[component]
fn ToastMessage(toast: Toast) -> impl IntoView {
    let class = match toast.kind {
        ToastKind::Success => "alert alert-success",
        ToastKind::Error => "alert alert-error",
    };

    view! {
        <div class="toast toast-top toast-end z-50">
            <div class=class role="status" data-kind=toast.kind.as_str()>
                {toast.message}
            </div>
        </div>
    }
}
