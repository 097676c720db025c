//! Top navigation bar with role-aware links and the logout action.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::state::session::Role;

/// Navigation bar shown on every page.
///
/// Links depend on the session's role; logout clears the session and
/// returns to the general login page.
#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let on_logout = move |_| {
        crate::state::auth::logout(auth);
        navigate("/login", NavigateOptions::default());
    };

    let links = move || match auth.get().current_role() {
        Some(Role::Customer) => view! {
            <a href="/">"Products"</a>
            <a href="/cart">"Cart"</a>
            <a href="/orders">"Orders"</a>
            <a href="/wallet">"Wallet"</a>
        }
        .into_any(),
        Some(Role::Merchant) => view! {
            <a href="/">"Products"</a>
            <a href="/merchant">"Dashboard"</a>
        }
        .into_any(),
        Some(Role::Admin) => view! {
            <a href="/">"Products"</a>
            <a href="/admin">"Dashboard"</a>
        }
        .into_any(),
        None => view! {
            <a href="/login">"Login"</a>
            <a href="/signup">"Sign Up"</a>
        }
        .into_any(),
    };

    let identity = move || {
        auth.get()
            .session
            .map(|s| if s.name.is_empty() { s.email } else { s.name })
            .unwrap_or_default()
    };

    view! {
        <nav class="navbar">
            <a class="navbar__brand" href="/">"Storefront"</a>
            <div class="navbar__links">{links}</div>
            <div class="navbar__session">
                <span class="navbar__identity">{identity}</span>
                <Show when=move || auth.get().is_authenticated()>
                    <button class="btn btn--ghost" on:click=on_logout.clone()>
                        "Logout"
                    </button>
                </Show>
            </div>
        </nav>
    }
}
