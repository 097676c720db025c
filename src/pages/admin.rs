//! Admin dashboard: platform-wide stats, recent orders, and activity
//! logs.

use leptos::prelude::*;

use crate::components::error_banner::ErrorBanner;
use crate::net::api;
use crate::net::error::ApiError;
use crate::net::types::{ActivityLog, AdminStats, Order};
use crate::state::auth::AuthState;
use crate::util::money;

type DashboardData = (
    Result<AdminStats, ApiError>,
    Result<Vec<Order>, ApiError>,
    Result<Vec<ActivityLog>, ApiError>,
);

/// Admin dashboard page.
#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let dashboard = LocalResource::new(move || {
        let token = auth.get().token().unwrap_or_default();
        async move {
            #[cfg(feature = "hydrate")]
            {
                futures::join!(
                    crate::state::auth::watch(auth, api::fetch_admin_stats(&token)),
                    crate::state::auth::watch(auth, api::fetch_admin_orders(&token)),
                    crate::state::auth::watch(auth, api::fetch_admin_logs(&token)),
                )
            }
            #[cfg(not(feature = "hydrate"))]
            {
                (
                    crate::state::auth::watch(auth, api::fetch_admin_stats(&token)).await,
                    crate::state::auth::watch(auth, api::fetch_admin_orders(&token)).await,
                    crate::state::auth::watch(auth, api::fetch_admin_logs(&token)).await,
                )
            }
        }
    });

    view! {
        <div class="admin-page">
            <h1>"Admin Dashboard"</h1>

            <Suspense fallback=move || view! { <p>"Loading dashboard..."</p> }>
                {move || dashboard.get().map(render_dashboard)}
            </Suspense>
        </div>
    }
}

fn render_dashboard(joined: DashboardData) -> AnyView {
    let (stats_res, orders_res, logs_res) = joined;
    let (stats, orders, logs) = match (stats_res, orders_res, logs_res) {
        (Ok(s), Ok(o), Ok(l)) => (s, o, l),
        (Err(e), _, _) | (_, Err(e), _) | (_, _, Err(e)) => {
            return view! { <ErrorBanner message=e.to_string()/> }.into_any();
        }
    };

    view! {
        <section class="admin-page__stats">
            <div class="stat-card">
                <span class="stat-card__value">{stats.total_users}</span>
                <span class="stat-card__label">"Customers"</span>
            </div>
            <div class="stat-card">
                <span class="stat-card__value">{stats.total_merchants}</span>
                <span class="stat-card__label">"Merchants"</span>
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

        <section class="admin-page__orders">
            <h2>"Recent Orders"</h2>
            {if orders.is_empty() {
                view! { <p>"No orders yet."</p> }.into_any()
            } else {
                view! {
                    <table class="admin-page__table">
                        <thead>
                            <tr>
                                <th>"Order"</th>
                                <th>"Date"</th>
                                <th>"Status"</th>
                                <th>"Total"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {orders
                                .into_iter()
                                .map(|o| {
                                    view! {
                                        <tr>
                                            <td>{format!("#{}", o.order_id)}</td>
                                            <td>{o.created_at}</td>
                                            <td>{o.status}</td>
                                            <td>{money::display(o.total)}</td>
                                        </tr>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </tbody>
                    </table>
                }
                .into_any()
            }}
        </section>

        <section class="admin-page__logs">
            <h2>"Activity"</h2>
            {if logs.is_empty() {
                view! { <p>"No activity yet."</p> }.into_any()
            } else {
                logs.into_iter()
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
                    .into_any()
            }}
        </section>
    }
    .into_any()
}
