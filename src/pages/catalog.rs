//! Product catalog page with category chips and a featured filter.

use leptos::prelude::*;

use crate::components::error_banner::ErrorBanner;
use crate::components::product_card::ProductCard;
use crate::net::api;
use crate::net::error::ApiError;
use crate::net::types::Product;
use crate::state::auth::AuthState;

/// Which slice of the catalog is being shown.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
enum CatalogFilter {
    #[default]
    All,
    Featured,
    Category(String),
}

/// Catalog page — the landing page for every authenticated role.
#[component]
pub fn CatalogPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let filter = RwSignal::new(CatalogFilter::default());

    let categories = LocalResource::new(move || {
        let token = auth.get().token();
        async move { api::fetch_categories(token.as_deref()).await }
    });

    let products = LocalResource::new(move || {
        let filter = filter.get();
        let token = auth.get().token();
        async move {
            crate::state::auth::watch(auth, async {
                let token = token.as_deref();
                match filter {
                    CatalogFilter::All => api::fetch_products(token).await,
                    CatalogFilter::Featured => api::fetch_featured_products(token).await,
                    CatalogFilter::Category(c) => {
                        api::fetch_products_by_category(token, &c).await
                    }
                }
            })
            .await
        }
    });

    let chip_class = move |active: bool| {
        if active { "chip chip--active" } else { "chip" }
    };

    view! {
        <div class="catalog-page">
            <header class="catalog-page__header">
                <h1>"Products"</h1>
            </header>

            <div class="catalog-page__filters">
                <button
                    class=move || chip_class(filter.get() == CatalogFilter::All)
                    on:click=move |_| filter.set(CatalogFilter::All)
                >
                    "All"
                </button>
                <button
                    class=move || chip_class(filter.get() == CatalogFilter::Featured)
                    on:click=move |_| filter.set(CatalogFilter::Featured)
                >
                    "Featured"
                </button>
                <Suspense fallback=|| ()>
                    {move || {
                        categories.get().map(|res| match res {
                            Ok(list) => list
                                .into_iter()
                                .map(|c| {
                                    let selected = CatalogFilter::Category(c.clone());
                                    let is_active = {
                                        let selected = selected.clone();
                                        move || filter.get() == selected
                                    };
                                    view! {
                                        <button
                                            class=move || chip_class(is_active())
                                            on:click=move |_| filter.set(selected.clone())
                                        >
                                            {c}
                                        </button>
                                    }
                                    .into_any()
                                })
                                .collect::<Vec<_>>()
                                .into_any(),
                            // Category chips failing to load is not fatal;
                            // the grid still works.
                            Err(_) => ().into_any(),
                        })
                    }}
                </Suspense>
            </div>

            <Suspense fallback=move || view! { <p>"Loading products..."</p> }>
                {move || products.get().map(render_grid)}
            </Suspense>
        </div>
    }
}

fn render_grid(res: Result<Vec<Product>, ApiError>) -> AnyView {
    match res {
        Ok(list) if list.is_empty() => {
            view! { <p class="catalog-page__empty">"No products found."</p> }.into_any()
        }
        Ok(list) => view! {
            <div class="catalog-page__grid">
                {list
                    .into_iter()
                    .map(|p| view! { <ProductCard product=p/> })
                    .collect::<Vec<_>>()}
            </div>
        }
        .into_any(),
        Err(err) => view! { <ErrorBanner message=err.to_string()/> }.into_any(),
    }
}
