//! Merchant dashboard: stats, business profile, product listings, and
//! activity logs.

use leptos::prelude::*;

use crate::components::error_banner::ErrorBanner;
use crate::net::api;
use crate::net::error::ApiError;
use crate::net::types::{MerchantProfile, MerchantStats, NewProduct, Product};
use crate::state::auth::AuthState;
use crate::util::money;

type DashboardData = (
    Result<MerchantProfile, ApiError>,
    Result<MerchantStats, ApiError>,
    Result<Vec<Product>, ApiError>,
);

/// Merchant dashboard page.
///
/// Profile, stats, and the product list are joined before the dashboard
/// body renders; logs load independently below it.
#[component]
pub fn MerchantDashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let dashboard = LocalResource::new(move || {
        let token = auth.get().token().unwrap_or_default();
        async move {
            #[cfg(feature = "hydrate")]
            {
                futures::join!(
                    crate::state::auth::watch(auth, api::fetch_merchant_profile(&token)),
                    crate::state::auth::watch(auth, api::fetch_merchant_stats(&token)),
                    crate::state::auth::watch(auth, api::fetch_merchant_products(&token)),
                )
            }
            #[cfg(not(feature = "hydrate"))]
            {
                (
                    crate::state::auth::watch(auth, api::fetch_merchant_profile(&token)).await,
                    crate::state::auth::watch(auth, api::fetch_merchant_stats(&token)).await,
                    crate::state::auth::watch(auth, api::fetch_merchant_products(&token)).await,
                )
            }
        }
    });

    let logs = LocalResource::new(move || {
        let state = auth.get();
        let token = state.token().unwrap_or_default();
        let merchant_id = state.session.map(|s| s.user_id).unwrap_or_default();
        async move {
            crate::state::auth::watch(auth, api::fetch_merchant_logs(&token, &merchant_id)).await
        }
    });

    let show_create = RwSignal::new(false);

    view! {
        <div class="merchant-page">
            <header class="merchant-page__header">
                <h1>"Merchant Dashboard"</h1>
                <button class="btn btn--primary" on:click=move |_| show_create.set(true)>
                    "+ New Product"
                </button>
            </header>

            <Suspense fallback=move || view! { <p>"Loading dashboard..."</p> }>
                {move || dashboard.get().map(|joined| render_dashboard(joined, auth))}
            </Suspense>

            <section class="merchant-page__logs">
                <h2>"Activity"</h2>
                <Suspense fallback=move || view! { <p>"Loading activity..."</p> }>
                    {move || {
                        logs.get().map(|res| match res {
                            Ok(list) if list.is_empty() => {
                                view! { <p>"No activity yet."</p> }.into_any()
                            }
                            Ok(list) => list
                                .into_iter()
                                .map(|log| {
                                    view! {
                                        <div class="log-entry">
                                            <span>{log.created_at}</span>
                                            <span>{log.action}</span>
                                        </div>
                                    }
                                    .into_any()
                                })
                                .collect::<Vec<_>>()
                                .into_any(),
                            Err(err) => {
                                view! { <ErrorBanner message=err.to_string()/> }.into_any()
                            }
                        })
                    }}
                </Suspense>
            </section>

            <Show when=move || show_create.get()>
                <CreateProductDialog
                    on_close=Callback::new(move |()| show_create.set(false))
                    dashboard=dashboard
                />
            </Show>
        </div>
    }
}

fn render_dashboard(joined: DashboardData, auth: RwSignal<AuthState>) -> AnyView {
    let (profile_res, stats_res, products_res) = joined;
    let (profile, stats, products) = match (profile_res, stats_res, products_res) {
        (Ok(p), Ok(s), Ok(pr)) => (p, s, pr),
        (Err(e), _, _) | (_, Err(e), _) | (_, _, Err(e)) => {
            return view! { <ErrorBanner message=e.to_string()/> }.into_any();
        }
    };

    view! {
        <section class="merchant-page__stats">
            <div class="stat-card">
                <span class="stat-card__value">{stats.total_products}</span>
                <span class="stat-card__label">"Products"</span>
            </div>
            <div class="stat-card">
                <span class="stat-card__value">{stats.total_orders}</span>
                <span class="stat-card__label">"Orders"</span>
            </div>
            <div class="stat-card">
                <span class="stat-card__value">{money::display(stats.total_revenue)}</span>
                <span class="stat-card__label">"Revenue"</span>
            </div>
        </section>

        <ProfileSection profile=profile auth=auth/>

        <section class="merchant-page__products">
            <h2>"Your Products"</h2>
            {if products.is_empty() {
                view! { <p>"No products listed yet."</p> }.into_any()
            } else {
                products
                    .into_iter()
                    .map(|p| {
                        view! {
                            <a class="merchant-product" href=format!("/product/{}", p.product_id)>
                                <span>{p.name}</span>
                                <span>{p.category}</span>
                                <span>{money::display(p.price)}</span>
                                <span>{p.stock.map_or(String::new(), |s| format!("{s} in stock"))}</span>
                            </a>
                        }
                        .into_any()
                    })
                    .collect::<Vec<_>>()
                    .into_any()
            }}
        </section>
    }
    .into_any()
}

/// Business profile with an inline edit form.
#[component]
fn ProfileSection(profile: MerchantProfile, auth: RwSignal<AuthState>) -> impl IntoView {
    let editing = RwSignal::new(false);
    let business_name = RwSignal::new(profile.business_name.clone());
    let business_category = RwSignal::new(profile.business_category.clone().unwrap_or_default());
    let saved_name = RwSignal::new(profile.business_name.clone());
    let save_error = RwSignal::new(None::<String>);

    let on_save = move |_| {
        let Some(token) = auth.get_untracked().token() else {
            return;
        };
        let updated = MerchantProfile {
            business_name: business_name.get(),
            business_category: {
                let c = business_category.get();
                if c.is_empty() { None } else { Some(c) }
            },
            email: profile.email.clone(),
        };
        leptos::task::spawn_local(async move {
            match crate::state::auth::watch(auth, api::update_merchant_profile(&token, &updated))
                .await
            {
                Ok(saved) => {
                    saved_name.set(saved.business_name);
                    save_error.set(None);
                    editing.set(false);
                }
                Err(err) => save_error.set(Some(err.detail)),
            }
        });
    };

    view! {
        <section class="merchant-page__profile">
            <h2>"Business Profile"</h2>

            <Show when=move || save_error.get().is_some()>
                <ErrorBanner message=save_error.get().unwrap_or_default()/>
            </Show>

            <Show
                when=move || editing.get()
                fallback=move || {
                    view! {
                        <p>{move || saved_name.get()}</p>
                        <button class="btn" on:click=move |_| editing.set(true)>"Edit"</button>
                    }
                }
            >
                <label>
                    "Business Name"
                    <input
                        type="text"
                        prop:value=move || business_name.get()
                        on:input=move |ev| business_name.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Category"
                    <input
                        type="text"
                        prop:value=move || business_category.get()
                        on:input=move |ev| business_category.set(event_target_value(&ev))
                    />
                </label>
                <button class="btn btn--primary" on:click=on_save.clone()>"Save"</button>
                <button class="btn" on:click=move |_| editing.set(false)>"Cancel"</button>
            </Show>
        </section>
    }
}

/// Modal dialog for listing a new product.
#[component]
fn CreateProductDialog(
    on_close: Callback<()>,
    dashboard: LocalResource<DashboardData>,
) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let category = RwSignal::new(String::new());
    let price = RwSignal::new(String::new());
    let stock = RwSignal::new(String::new());
    let form_error = RwSignal::new(None::<String>);

    let submit = move |_| {
        let Some(token) = auth.get_untracked().token() else {
            return;
        };
        let Ok(price) = price.get().parse::<f64>() else {
            form_error.set(Some("Enter a valid price.".to_owned()));
            return;
        };
        let stock = stock.get().parse::<i64>().unwrap_or(0);
        let product = NewProduct {
            name: name.get(),
            description: description.get(),
            price,
            category: category.get(),
            image_url: None,
            stock,
        };
        if product.name.trim().is_empty() {
            form_error.set(Some("Enter a product name.".to_owned()));
            return;
        }
        leptos::task::spawn_local(async move {
            match crate::state::auth::watch(auth, api::create_product(&token, &product)).await {
                Ok(_) => {
                    dashboard.refetch();
                    on_close.run(());
                }
                Err(err) => form_error.set(Some(err.detail)),
            }
        });
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"New Product"</h2>

                <Show when=move || form_error.get().is_some()>
                    <p class="dialog__error">{move || form_error.get().unwrap_or_default()}</p>
                </Show>

                <label class="dialog__label">
                    "Name"
                    <input
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Description"
                    <input
                        type="text"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Category"
                    <input
                        type="text"
                        prop:value=move || category.get()
                        on:input=move |ev| category.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Price"
                    <input
                        type="text"
                        inputmode="decimal"
                        prop:value=move || price.get()
                        on:input=move |ev| price.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Stock"
                    <input
                        type="text"
                        inputmode="numeric"
                        prop:value=move || stock.get()
                        on:input=move |ev| stock.set(event_target_value(&ev))
                    />
                </label>

                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>"Cancel"</button>
                    <button class="btn btn--primary" on:click=submit>"Create"</button>
                </div>
            </div>
        </div>
    }
}
