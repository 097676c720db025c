//! Root application component with routing, the route guard, and
//! context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    NavigateOptions, ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
    hooks::{use_location, use_navigate},
};

use crate::components::navbar::Navbar;
use crate::pages::admin::AdminDashboardPage;
use crate::pages::cart::CartPage;
use crate::pages::catalog::CatalogPage;
use crate::pages::checkout::CheckoutPage;
use crate::pages::login::LoginPage;
use crate::pages::merchant::MerchantDashboardPage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::orders::{OrderDetailPage, OrdersPage};
use crate::pages::product::ProductPage;
use crate::pages::signup::SignupPage;
use crate::pages::wallet::WalletPage;
use crate::routes::Access;
use crate::state::auth::{AuthPhase, AuthState};
use crate::state::session::Role;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared auth context, restores any persisted session,
/// and sets up client-side routing behind the route guard.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    provide_context(auth);

    crate::state::auth::restore(auth);

    view! {
        <Stylesheet id="leptos" href="/pkg/storefront-client.css"/>
        <Title text="Storefront"/>

        <Router>
            <Navbar/>
            <main class="app-main">
                <Guarded>
                    <Routes fallback=NotFoundPage>
                        <Route path=StaticSegment("") view=CatalogPage/>
                        <Route
                            path=StaticSegment("login")
                            view=|| view! { <LoginPage kind=Role::Customer/> }
                        />
                        <Route
                            path=StaticSegment("signup")
                            view=|| view! { <SignupPage kind=Role::Customer/> }
                        />
                        <Route
                            path=(StaticSegment("merchant"), StaticSegment("login"))
                            view=|| view! { <LoginPage kind=Role::Merchant/> }
                        />
                        <Route
                            path=(StaticSegment("merchant"), StaticSegment("signup"))
                            view=|| view! { <SignupPage kind=Role::Merchant/> }
                        />
                        <Route
                            path=(StaticSegment("admin"), StaticSegment("login"))
                            view=|| view! { <LoginPage kind=Role::Admin/> }
                        />
                        <Route
                            path=(StaticSegment("admin"), StaticSegment("signup"))
                            view=|| view! { <SignupPage kind=Role::Admin/> }
                        />
                        <Route
                            path=(StaticSegment("product"), ParamSegment("id"))
                            view=ProductPage
                        />
                        <Route path=StaticSegment("cart") view=CartPage/>
                        <Route path=StaticSegment("checkout") view=CheckoutPage/>
                        <Route path=StaticSegment("orders") view=OrdersPage/>
                        <Route
                            path=(StaticSegment("orders"), ParamSegment("id"))
                            view=OrderDetailPage
                        />
                        <Route path=StaticSegment("wallet") view=WalletPage/>
                        <Route path=StaticSegment("merchant") view=MerchantDashboardPage/>
                        <Route path=StaticSegment("admin") view=AdminDashboardPage/>
                    </Routes>
                </Guarded>
            </main>
        </Router>
    }
}

/// Route guard wrapper. Re-evaluates access on every navigation and
/// auth change; redirects away from anything the current session may
/// not see.
///
/// While a persisted session is still being restored the guard holds
/// its verdict, so a reload of a protected page does not bounce
/// through the login screen.
#[component]
fn Guarded(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let location = use_location();
    let navigate = use_navigate();

    let verdict = Memo::new(move |_| {
        let state = auth.get();
        if state.phase == AuthPhase::Authenticating {
            return None;
        }
        Some(crate::routes::can_access(
            state.current_role(),
            &location.pathname.get(),
        ))
    });

    Effect::new(move |_| {
        if let Some(Access::RedirectTo(target)) = verdict.get() {
            navigate(target, NavigateOptions::default());
        }
    });

    move || match verdict.get() {
        Some(Access::Allow) => children().into_any(),
        // Redirect pending, or restore still in flight.
        _ => ().into_any(),
    }
}
