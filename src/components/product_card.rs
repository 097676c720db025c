//! Card component for catalog grid items.

use leptos::prelude::*;

use crate::net::types::Product;
use crate::util::money;

/// A clickable card linking to the product's detail page.
#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let href = format!("/product/{}", product.product_id);

    view! {
        <a class="product-card" href=href>
            {product.image_url.map(|url| {
                view! { <img class="product-card__image" src=url alt=product.name.clone()/> }
            })}
            <span class="product-card__name">{product.name}</span>
            <span class="product-card__category">{product.category}</span>
            <span class="product-card__price">{money::display(product.price)}</span>
        </a>
    }
}
