//! Placeholder pages so the header has somewhere to navigate to.

use crate::shared::query::parse_selection;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="page page--home">
            <h1 class="page__title">"Industrial Supply"</h1>
        </section>
    }
}

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <section class="page page--about">
            <h1 class="page__title">"About"</h1>
        </section>
    }
}

/// Shows the category and item picked in the header, if any.
#[component]
pub fn ProductsPage() -> impl IntoView {
    let location = use_location();
    let selection = Memo::new(move |_| location.search.with(|search| parse_selection(search)));

    view! {
        <section class="page page--products">
            <h1 class="page__title">"Products"</h1>
            {move || match selection.get() {
                Some(selection) => view! {
                    <p class="page__selection">
                        <span class="page__category">{selection.category}</span>
                        " / "
                        <span class="page__item">{selection.item}</span>
                    </p>
                }.into_any(),
                None => view! { <p class="page__selection">"All products"</p> }.into_any(),
            }}
        </section>
    }
}

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <section class="page page--contact">
            <h1 class="page__title">"Contact"</h1>
        </section>
    }
}

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="page page--not-found">
            <h1 class="page__title">"Page not found"</h1>
        </section>
    }
}
