//! Login page, parameterized by principal kind.
//!
//! The three entry points (customer, merchant, admin) share one form and
//! one controller code path; only the endpoint and the landing path
//! differ, both derived from `kind`.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::Credentials;
use crate::state::auth::{AuthPhase, AuthState};
use crate::state::session::Role;

fn heading(kind: Role) -> &'static str {
    match kind {
        Role::Customer => "Login",
        Role::Merchant => "Merchant Login",
        Role::Admin => "Admin Login",
    }
}

fn signup_href(kind: Role) -> &'static str {
    match kind {
        Role::Customer => "/signup",
        Role::Merchant => "/merchant/signup",
        Role::Admin => "/admin/signup",
    }
}

/// Email/password login form for one principal kind.
#[component]
pub fn LoginPage(kind: Role) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    // Already logged in as this kind: straight to its home page.
    {
        let navigate = navigate.clone();
        Effect::new(move || {
            if auth.get().current_role() == Some(kind) {
                navigate(kind.home_path(), NavigateOptions::default());
            }
        });
    }

    let busy = move || auth.get().phase == AuthPhase::Authenticating;
    let error = move || auth.get().error;

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let creds = Credentials {
            email: email.get(),
            password: password.get(),
        };
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            if crate::state::auth::login(auth, kind, creds).await.is_ok() {
                navigate(kind.home_path(), NavigateOptions::default());
            }
        });
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h1>{heading(kind)}</h1>

                <Show when=move || error().is_some()>
                    <div class="auth-card__error" role="alert">
                        {move || error().unwrap_or_default()}
                    </div>
                </Show>

                <label class="auth-card__label">
                    "Email"
                    <input
                        type="email"
                        required
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="auth-card__label">
                    "Password"
                    <input
                        type="password"
                        required
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>

                <button class="btn btn--primary" type="submit" disabled=busy>
                    {move || if busy() { "Logging in..." } else { "Login" }}
                </button>

                <p class="auth-card__alt">
                    "Need an account? " <a href=signup_href(kind)>"Sign Up"</a>
                </p>
            </form>
        </div>
    }
}
