//! Page-level error banner for failed loads and rejected actions.

use leptos::prelude::*;

/// A dismissable-looking banner; callers re-render without it once the
/// failed action is retried.
#[component]
pub fn ErrorBanner(message: String) -> impl IntoView {
    view! {
        <div class="error-banner" role="alert">
            {message}
        </div>
    }
}
