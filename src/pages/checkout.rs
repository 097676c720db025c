//! Checkout page: order review, wallet balance, and reward preview.
//!
//! Cart, balance, and reward summary are fetched together and joined
//! before anything renders, so the review never shows partial figures.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::error_banner::ErrorBanner;
use crate::net::api;
use crate::net::error::ApiError;
use crate::net::types::{Balance, Cart, CheckoutRequest, RewardSummary};
use crate::state::auth::AuthState;
use crate::state::{cart, wallet};
use crate::util::money;

type Review = (
    Result<Cart, ApiError>,
    Result<Balance, ApiError>,
    Result<RewardSummary, ApiError>,
);

/// Checkout page. Placing the order navigates to its confirmation in
/// the order history.
#[component]
pub fn CheckoutPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let review = LocalResource::new(move || {
        let token = auth.get().token().unwrap_or_default();
        async move {
            #[cfg(feature = "hydrate")]
            {
                let (cart, balance, rewards) = futures::join!(
                    crate::state::auth::watch(auth, api::fetch_cart(&token)),
                    crate::state::auth::watch(auth, api::fetch_balance(&token)),
                    crate::state::auth::watch(auth, api::fetch_rewards(&token)),
                );
                (cart, balance, rewards)
            }
            #[cfg(not(feature = "hydrate"))]
            {
                (
                    crate::state::auth::watch(auth, api::fetch_cart(&token)).await,
                    crate::state::auth::watch(auth, api::fetch_balance(&token)).await,
                    crate::state::auth::watch(auth, api::fetch_rewards(&token)).await,
                )
            }
        }
    });

    let placing = RwSignal::new(false);
    let action_error = RwSignal::new(None::<String>);

    let on_place = move |()| {
        let Some(token) = auth.get_untracked().token() else {
            return;
        };
        let navigate = navigate.clone();
        placing.set(true);
        action_error.set(None);
        leptos::task::spawn_local(async move {
            let request = CheckoutRequest { payment_method: "wallet".to_owned() };
            match crate::state::auth::watch(auth, api::place_order(&token, &request)).await {
                Ok(outcome) => {
                    navigate(&format!("/orders/{}", outcome.order_id), NavigateOptions::default());
                }
                Err(err) => {
                    placing.set(false);
                    action_error.set(Some(err.detail));
                }
            }
        });
    };

    view! {
        <div class="checkout-page">
            <h1>"Checkout"</h1>

            <Show when=move || action_error.get().is_some()>
                <ErrorBanner message=action_error.get().unwrap_or_default()/>
            </Show>

            <Suspense fallback=move || view! { <p>"Loading checkout..."</p> }>
                {move || {
                    review.get().map(|joined| {
                        render_review(joined, placing, Callback::new(on_place.clone()))
                    })
                }}
            </Suspense>
        </div>
    }
}

fn render_review(joined: Review, placing: RwSignal<bool>, on_place: Callback<()>) -> AnyView {
    let (cart_res, balance_res, rewards_res) = joined;

    // All three must be in hand before the review renders.
    let (c, balance, rewards) = match (cart_res, balance_res, rewards_res) {
        (Ok(c), Ok(b), Ok(r)) => (c, b, r),
        (Err(e), _, _) | (_, Err(e), _) | (_, _, Err(e)) => {
            return view! { <ErrorBanner message=e.to_string()/> }.into_any();
        }
    };

    if c.items.is_empty() {
        return view! {
            <p>"Nothing to check out. "<a href="/">"Browse products"</a></p>
        }
        .into_any();
    }

    let totals = cart::totals(&c.items);
    let earned = wallet::points_earned(totals.subtotal);
    let sufficient = balance.balance >= totals.subtotal;

    view! {
        <div class="checkout-page__review">
            <section class="checkout-page__items">
                {c.items
                    .iter()
                    .map(|item| {
                        view! {
                            <div class="checkout-row">
                                <span>{item.name.clone()}</span>
                                <span>{format!("x{}", item.quantity)}</span>
                                <span>{money::display(cart::line_total(item))}</span>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </section>

            <section class="checkout-page__summary">
                <p>{format!("Order total: {}", money::display(totals.subtotal))}</p>
                <p>{format!("Wallet balance: {}", money::display(balance.balance))}</p>
                <p>{format!("Reward points available: {}", rewards.total_points)}</p>
                <p class="checkout-page__earn">
                    {format!("You will earn {earned} points on this order")}
                </p>

                <Show when=move || !sufficient>
                    <p class="checkout-page__shortfall">
                        "Insufficient wallet balance. " <a href="/wallet">"Convert points"</a>
                    </p>
                </Show>

                <button
                    class="btn btn--primary"
                    disabled=move || placing.get() || !sufficient
                    on:click=move |_| on_place.run(())
                >
                    {move || if placing.get() { "Placing order..." } else { "Pay with Wallet" }}
                </button>
            </section>
        </div>
    }
    .into_any()
}
