//! Product detail page with an add-to-cart action.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::error_banner::ErrorBanner;
use crate::net::api;
use crate::net::error::ErrorKind;
use crate::state::auth::AuthState;
use crate::state::cart::{MAX_QUANTITY, MIN_QUANTITY, clamp_quantity};
use crate::state::session::Role;
use crate::util::money;

/// Product detail page. Reads the product ID from the route parameter.
#[component]
pub fn ProductPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let params = use_params_map();
    let navigate = use_navigate();

    let product_id = move || params.read().get("id").unwrap_or_default();

    let product = LocalResource::new(move || {
        let id = product_id();
        let token = auth.get().token();
        async move {
            crate::state::auth::watch(auth, api::fetch_product(token.as_deref(), &id)).await
        }
    });

    let quantity = RwSignal::new(1_u32);
    let action_error = RwSignal::new(None::<String>);

    let is_customer = move || auth.get().current_role() == Some(Role::Customer);

    let on_add = move |_| {
        let Some(token) = auth.get_untracked().token() else {
            return;
        };
        let id = product_id();
        let qty = quantity.get();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match crate::state::auth::watch(auth, api::add_to_cart(&token, &id, qty)).await {
                Ok(()) => navigate("/cart", NavigateOptions::default()),
                Err(err) => action_error.set(Some(err.detail)),
            }
        });
    };

    view! {
        <div class="product-page">
            <Suspense fallback=move || view! { <p>"Loading product..."</p> }>
                {move || {
                    product.get().map(|res| match res {
                        Ok(p) => view! {
                            <div class="product-page__detail">
                                {p.image_url.map(|url| {
                                    view! { <img class="product-page__image" src=url alt=p.name.clone()/> }
                                })}
                                <h1>{p.name}</h1>
                                <p class="product-page__category">{p.category}</p>
                                <p class="product-page__price">{money::display(p.price)}</p>
                                <p class="product-page__description">{p.description}</p>
                                {p.stock.map(|s| view! { <p class="product-page__stock">{format!("{s} in stock")}</p> })}
                            </div>
                        }
                        .into_any(),
                        // A missing product is an empty state, not an error.
                        Err(err) if err.kind == ErrorKind::NotFound => {
                            view! { <p class="product-page__missing">"Product not found."</p> }
                                .into_any()
                        }
                        Err(err) => view! { <ErrorBanner message=err.to_string()/> }.into_any(),
                    })
                }}
            </Suspense>

            <Show when=is_customer>
                <div class="product-page__actions">
                    <Show when=move || action_error.get().is_some()>
                        <ErrorBanner message=action_error.get().unwrap_or_default()/>
                    </Show>
                    <label>
                        "Quantity"
                        <input
                            type="number"
                            min=MIN_QUANTITY
                            max=MAX_QUANTITY
                            prop:value=move || quantity.get().to_string()
                            on:input=move |ev| {
                                let parsed = event_target_value(&ev).parse::<i64>().unwrap_or(1);
                                quantity.set(clamp_quantity(parsed));
                            }
                        />
                    </label>
                    <button class="btn btn--primary" on:click=on_add.clone()>
                        "Add to Cart"
                    </button>
                </div>
            </Show>
        </div>
    }
}
