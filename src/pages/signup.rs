//! Signup page, parameterized by principal kind.
//!
//! Signup authenticates on success, exactly like login. Validation
//! failures are shown inline at the form; transport and server failures
//! get the generic banner.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::SignupForm;
use crate::state::auth::{AuthPhase, AuthState};
use crate::state::session::Role;

fn heading(kind: Role) -> &'static str {
    match kind {
        Role::Customer => "Create Account",
        Role::Merchant => "Merchant Sign Up",
        Role::Admin => "Admin Sign Up",
    }
}

/// Account creation form for one principal kind. Merchants additionally
/// provide their business name and category.
#[component]
pub fn SignupPage(kind: Role) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let business_name = RwSignal::new(String::new());
    let business_category = RwSignal::new(String::new());

    // Inline message for validation rejections; banner for the rest.
    let field_error = RwSignal::new(None::<String>);
    let banner_error = RwSignal::new(None::<String>);

    let busy = move || auth.get().phase == AuthPhase::Authenticating;

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        field_error.set(None);
        banner_error.set(None);

        let mut form = SignupForm {
            name: name.get(),
            email: email.get(),
            password: password.get(),
            ..SignupForm::default()
        };
        if kind == Role::Merchant {
            form.business_name = Some(business_name.get());
            let category = business_category.get();
            if !category.is_empty() {
                form.business_category = Some(category);
            }
        }

        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match crate::state::auth::signup(auth, kind, form).await {
                Ok(()) => navigate(kind.home_path(), NavigateOptions::default()),
                Err(err) if err.is_validation() => field_error.set(Some(err.detail)),
                Err(err) => banner_error.set(Some(err.detail)),
            }
        });
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h1>{heading(kind)}</h1>

                <Show when=move || banner_error.get().is_some()>
                    <div class="auth-card__error" role="alert">
                        {move || banner_error.get().unwrap_or_default()}
                    </div>
                </Show>

                <label class="auth-card__label">
                    "Name"
                    <input
                        type="text"
                        required
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
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

                <Show when=move || kind == Role::Merchant>
                    <label class="auth-card__label">
                        "Business Name"
                        <input
                            type="text"
                            required
                            prop:value=move || business_name.get()
                            on:input=move |ev| business_name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-card__label">
                        "Business Category"
                        <input
                            type="text"
                            prop:value=move || business_category.get()
                            on:input=move |ev| business_category.set(event_target_value(&ev))
                        />
                    </label>
                </Show>

                <Show when=move || field_error.get().is_some()>
                    <p class="auth-card__field-error">
                        {move || field_error.get().unwrap_or_default()}
                    </p>
                </Show>

                <button class="btn btn--primary" type="submit" disabled=busy>
                    {move || if busy() { "Creating account..." } else { "Sign Up" }}
                </button>

                <p class="auth-card__alt">
                    "Already registered? " <a href=kind.login_path()>"Login"</a>
                </p>
            </form>
        </div>
    }
}
