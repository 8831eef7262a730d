use crate::layout::Shell;
use crate::routes::pages::{AboutPage, ContactPage, HomePage, NotFoundPage, ProductsPage};
use contracts::navigation::HeaderConfig;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes(config: RwSignal<HeaderConfig>) -> impl IntoView {
    view! {
        <Router>
            <Shell config=config>
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/about") view=AboutPage />
                    <Route path=path!("/products") view=ProductsPage />
                    <Route path=path!("/contact") view=ContactPage />
                </Routes>
            </Shell>
        </Router>
    }
}
