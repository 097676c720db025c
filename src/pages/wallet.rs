//! Wallet page: balance, reward points, and point-to-balance conversion.
//!
//! Conversion is entirely server-computed; the form only previews the
//! value at the fixed rate and re-fetches totals once the server
//! confirms.

use leptos::prelude::*;

use crate::components::error_banner::ErrorBanner;
use crate::net::api;
use crate::net::error::ApiError;
use crate::net::types::{Balance, RewardSummary};
use crate::state::auth::AuthState;
use crate::state::wallet::{POINT_VALUE, conversion_value, remaining_points, validate_conversion};
use crate::util::money;

type WalletData = (Result<Balance, ApiError>, Result<RewardSummary, ApiError>);

/// Wallet page for customers.
#[component]
pub fn WalletPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let data = LocalResource::new(move || {
        let token = auth.get().token().unwrap_or_default();
        async move {
            #[cfg(feature = "hydrate")]
            {
                futures::join!(
                    crate::state::auth::watch(auth, api::fetch_balance(&token)),
                    crate::state::auth::watch(auth, api::fetch_rewards(&token)),
                )
            }
            #[cfg(not(feature = "hydrate"))]
            {
                (
                    crate::state::auth::watch(auth, api::fetch_balance(&token)).await,
                    crate::state::auth::watch(auth, api::fetch_rewards(&token)).await,
                )
            }
        }
    });

    let points_input = RwSignal::new(String::new());
    let converting = RwSignal::new(false);
    let form_error = RwSignal::new(None::<String>);
    let success = RwSignal::new(None::<String>);

    let requested_points = move || points_input.get().parse::<i64>().unwrap_or(0);

    let on_convert = Callback::new(move |available: i64| {
        let points = requested_points();
        if let Err(msg) = validate_conversion(points, available) {
            form_error.set(Some(msg));
            return;
        }
        let Some(token) = auth.get_untracked().token() else {
            return;
        };
        converting.set(true);
        form_error.set(None);
        success.set(None);
        leptos::task::spawn_local(async move {
            match crate::state::auth::watch(auth, api::redeem_points(&token, points)).await {
                Ok(outcome) => {
                    converting.set(false);
                    points_input.set(String::new());
                    let left = outcome
                        .remaining_points
                        .unwrap_or_else(|| remaining_points(available, points));
                    success.set(Some(format!(
                        "Converted {points} points to {}. New balance: {}. {left} points remaining.",
                        money::display(conversion_value(points)),
                        money::display(outcome.new_balance),
                    )));
                    data.refetch();
                }
                Err(err) => {
                    converting.set(false);
                    form_error.set(Some(err.detail));
                }
            }
        });
    });

    view! {
        <div class="wallet-page">
            <h1>"Wallet"</h1>

            <Suspense fallback=move || view! { <p>"Loading wallet..."</p> }>
                {move || {
                    data.get().map(|(balance_res, rewards_res)| {
                        let (balance, rewards) = match (balance_res, rewards_res) {
                            (Ok(b), Ok(r)) => (b, r),
                            (Err(e), _) | (_, Err(e)) => {
                                return view! { <ErrorBanner message=e.to_string()/> }.into_any();
                            }
                        };
                        let available = rewards.total_points;

                        view! {
                            <div class="wallet-page__cards">
                                <div class="wallet-card">
                                    <h2>"Balance"</h2>
                                    <p class="wallet-card__amount">{money::display(balance.balance)}</p>
                                </div>
                                <div class="wallet-card">
                                    <h2>"Reward Points"</h2>
                                    <p class="wallet-card__amount">{format!("{available} points")}</p>
                                    <p class="wallet-card__hint">
                                        {format!("Worth {}", money::display(rewards.points_value))}
                                    </p>
                                </div>
                            </div>

                            <div class="wallet-page__convert">
                                <h2>"Convert Points to Balance"</h2>

                                <Show when=move || form_error.get().is_some()>
                                    <p class="wallet-page__error">
                                        {move || form_error.get().unwrap_or_default()}
                                    </p>
                                </Show>
                                <Show when=move || success.get().is_some()>
                                    <p class="wallet-page__success">
                                        {move || success.get().unwrap_or_default()}
                                    </p>
                                </Show>

                                <div class="wallet-page__input">
                                    <input
                                        type="text"
                                        inputmode="numeric"
                                        prop:value=move || points_input.get()
                                        on:input=move |ev| {
                                            let value = event_target_value(&ev);
                                            if value.is_empty() || value.chars().all(|c| c.is_ascii_digit()) {
                                                points_input.set(value);
                                            }
                                        }
                                    />
                                    <button on:click=move |_| points_input.set(available.to_string())>
                                        "MAX"
                                    </button>
                                </div>

                                <p class="wallet-page__preview">
                                    {move || {
                                        format!(
                                            "You will receive {}",
                                            money::display(conversion_value(requested_points()))
                                        )
                                    }}
                                </p>
                                <p class="wallet-page__rate">
                                    {format!("Conversion rate: 1 point = {}", money::display(POINT_VALUE))}
                                </p>

                                <button
                                    class="btn btn--primary"
                                    disabled=move || converting.get() || available <= 0
                                    on:click=move |_| on_convert.run(available)
                                >
                                    {move || if converting.get() { "Converting..." } else { "Convert Points" }}
                                </button>
                            </div>

                            <div class="wallet-page__history">
                                <h2>"Recent Reward Activity"</h2>
                                {if rewards.rewards.is_empty() {
                                    view! { <p>"No recent reward point activity."</p> }.into_any()
                                } else {
                                    rewards
                                        .rewards
                                        .iter()
                                        .map(|entry| {
                                            view! {
                                                <div class="reward-entry">
                                                    <span>{format!("{} points", entry.points)}</span>
                                                    <span>{entry.created_at.clone()}</span>
                                                    <span>{money::display(conversion_value(entry.points))}</span>
                                                </div>
                                            }
                                            .into_any()
                                        })
                                        .collect::<Vec<_>>()
                                        .into_any()
                                }}
                            </div>
                        }
                        .into_any()
                    })
                }}
            </Suspense>
        </div>
    }
}
