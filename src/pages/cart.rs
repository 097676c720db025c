//! Shopping cart page: quantity edits, removal, and totals.

use leptos::prelude::*;

use crate::components::error_banner::ErrorBanner;
use crate::net::api;
use crate::net::types::CartItem;
use crate::state::auth::AuthState;
use crate::state::cart::{self, MAX_QUANTITY};
use crate::util::money;

/// Cart page. Totals are computed from the full item list before
/// rendering, never incrementally.
#[component]
pub fn CartPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let cart = LocalResource::new(move || {
        let token = auth.get().token().unwrap_or_default();
        async move { crate::state::auth::watch(auth, api::fetch_cart(&token)).await }
    });

    let action_error = RwSignal::new(None::<String>);

    let mutate = Callback::new(move |op: CartOp| {
        let Some(token) = auth.get_untracked().token() else {
            return;
        };
        leptos::task::spawn_local(async move {
            let res = match &op {
                CartOp::SetQuantity(id, qty) => {
                    crate::state::auth::watch(auth, api::update_cart_item(&token, id, *qty)).await
                }
                CartOp::Remove(id) => {
                    crate::state::auth::watch(auth, api::remove_cart_item(&token, id)).await
                }
            };
            match res {
                Ok(()) => {
                    action_error.set(None);
                    cart.refetch();
                }
                Err(err) => action_error.set(Some(err.detail)),
            }
        });
    });

    view! {
        <div class="cart-page">
            <h1>"Your Cart"</h1>

            <Show when=move || action_error.get().is_some()>
                <ErrorBanner message=action_error.get().unwrap_or_default()/>
            </Show>

            <Suspense fallback=move || view! { <p>"Loading cart..."</p> }>
                {move || {
                    cart.get().map(|res| match res {
                        Ok(c) if c.items.is_empty() => view! {
                            <div class="cart-page__empty">
                                <p>"Your cart is empty."</p>
                                <a class="btn btn--primary" href="/">"Browse products"</a>
                            </div>
                        }
                        .into_any(),
                        Ok(c) => {
                            let t = cart::totals(&c.items);
                            view! {
                                <div class="cart-page__items">
                                    {c.items
                                        .into_iter()
                                        .map(|item| cart_row(item, mutate))
                                        .collect::<Vec<_>>()}
                                </div>
                                <div class="cart-page__summary">
                                    <span>{format!("{} items", t.item_count)}</span>
                                    <span class="cart-page__subtotal">
                                        {format!("Subtotal: {}", money::display(t.subtotal))}
                                    </span>
                                    <a class="btn btn--primary" href="/checkout">"Checkout"</a>
                                </div>
                            }
                            .into_any()
                        }
                        Err(err) => view! { <ErrorBanner message=err.to_string()/> }.into_any(),
                    })
                }}
            </Suspense>
        </div>
    }
}

#[derive(Clone, Debug)]
enum CartOp {
    SetQuantity(String, u32),
    Remove(String),
}

fn cart_row(item: CartItem, mutate: Callback<CartOp>) -> AnyView {
    let id = item.product_id.clone();
    let qty = item.quantity;
    let dec_id = id.clone();
    let inc_id = id.clone();
    let line = cart::line_total(&item);

    view! {
        <div class="cart-row">
            <a class="cart-row__name" href=format!("/product/{id}")>{item.name}</a>
            <span class="cart-row__price">{money::display(item.price)}</span>
            <div class="cart-row__quantity">
                <button
                    disabled=qty <= 1
                    on:click=move |_| mutate.run(CartOp::SetQuantity(dec_id.clone(), qty - 1))
                >
                    "-"
                </button>
                <span>{qty}</span>
                <button
                    disabled=qty >= MAX_QUANTITY
                    on:click=move |_| mutate.run(CartOp::SetQuantity(inc_id.clone(), qty + 1))
                >
                    "+"
                </button>
            </div>
            <span class="cart-row__line-total">{money::display(line)}</span>
            <button class="btn btn--ghost" on:click=move |_| mutate.run(CartOp::Remove(id.clone()))>
                "Remove"
            </button>
        </div>
    }
    .into_any()
}
