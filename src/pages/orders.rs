//! Order history list and single-order detail.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::error_banner::ErrorBanner;
use crate::net::api;
use crate::net::error::ErrorKind;
use crate::net::types::Order;
use crate::state::auth::AuthState;
use crate::util::money;

/// Order history page.
#[component]
pub fn OrdersPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let orders = LocalResource::new(move || {
        let token = auth.get().token().unwrap_or_default();
        async move { crate::state::auth::watch(auth, api::fetch_orders(&token)).await }
    });

    view! {
        <div class="orders-page">
            <h1>"My Orders"</h1>
            <Suspense fallback=move || view! { <p>"Loading orders..."</p> }>
                {move || {
                    orders.get().map(|res| match res {
                        Ok(list) if list.is_empty() => {
                            view! { <p class="orders-page__empty">"No orders yet."</p> }.into_any()
                        }
                        Ok(list) => view! {
                            <div class="orders-page__list">
                                {list.into_iter().map(order_row).collect::<Vec<_>>()}
                            </div>
                        }
                        .into_any(),
                        Err(err) => view! { <ErrorBanner message=err.to_string()/> }.into_any(),
                    })
                }}
            </Suspense>
        </div>
    }
}

fn order_row(order: Order) -> AnyView {
    let href = format!("/orders/{}", order.order_id);
    view! {
        <a class="order-row" href=href>
            <span class="order-row__id">{format!("Order #{}", order.order_id)}</span>
            <span class="order-row__date">{order.created_at}</span>
            <span class="order-row__status">{order.status}</span>
            <span class="order-row__total">{money::display(order.total)}</span>
        </a>
    }
    .into_any()
}

/// Single order page. A missing order renders an empty state rather
/// than an error banner.
#[component]
pub fn OrderDetailPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let params = use_params_map();

    let order = LocalResource::new(move || {
        let token = auth.get().token().unwrap_or_default();
        let id = params.read().get("id").unwrap_or_default();
        async move { crate::state::auth::watch(auth, api::fetch_order(&token, &id)).await }
    });

    view! {
        <div class="order-page">
            <Suspense fallback=move || view! { <p>"Loading order..."</p> }>
                {move || {
                    order.get().map(|res| match res {
                        Ok(o) => view! {
                            <div class="order-page__detail">
                                <h1>{format!("Order #{}", o.order_id)}</h1>
                                <p class="order-page__meta">
                                    {format!("{} · {}", o.created_at, o.status)}
                                </p>
                                <div class="order-page__items">
                                    {o.items
                                        .into_iter()
                                        .map(|item| {
                                            view! {
                                                <div class="order-page__item">
                                                    <span>{item.name}</span>
                                                    <span>{format!("x{}", item.quantity)}</span>
                                                    <span>{money::display(item.price)}</span>
                                                </div>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </div>
                                <p class="order-page__total">
                                    {format!("Total: {}", money::display(o.total))}
                                </p>
                                <a href="/orders">"Back to orders"</a>
                            </div>
                        }
                        .into_any(),
                        Err(err) if err.kind == ErrorKind::NotFound => {
                            view! { <p class="order-page__missing">"Order not found."</p> }
                                .into_any()
                        }
                        Err(err) => view! { <ErrorBanner message=err.to_string()/> }.into_any(),
                    })
                }}
            </Suspense>
        </div>
    }
}
