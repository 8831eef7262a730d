use crate::layout::header::context::use_header;
use crate::shared::icons::{icon, icon_sized};
use contracts::navigation::{NavLink, ProductGroup};
use leptos::prelude::*;
use leptos_router::hooks::use_location;

/// Catalog shortcut and hamburger shown on small screens.
#[component]
pub fn MobileActions() -> impl IntoView {
    let ctx = use_header();
    let catalog_path = ctx.config.with_value(|c| c.catalog_asset_path.clone());
    let menu_open = move || ctx.mobile.with(|m| m.is_menu_open());

    view! {
        <div class="mobile-actions">
            <a
                href=catalog_path
                target="_blank"
                rel="noreferrer"
                class="mobile-actions__catalog"
                aria-label="Open catalog"
            >
                {icon_sized("file-text", 22)}
            </a>

            <button
                type="button"
                class="mobile-actions__toggle"
                aria-label=move || if menu_open() { "Close menu" } else { "Open menu" }
                aria-expanded=move || menu_open().to_string()
                on:click=move |_| ctx.toggle_mobile_menu()
            >
                {move || if menu_open() { icon_sized("x", 28) } else { icon_sized("menu", 28) }}
            </button>
        </div>
    }
}

/// Slide-down menu: top-level links, products accordion and contact button.
#[component]
pub fn MobileMenu() -> impl IntoView {
    let ctx = use_header();

    view! {
        <Show when=move || ctx.mobile.with(|m| m.is_menu_open())>
            <MobileMenuPanel />
        </Show>
    }
}

#[component]
fn MobileMenuPanel() -> impl IntoView {
    let ctx = use_header();
    let location = use_location();
    let highlighter = ctx.highlighter();
    let (links, catalog_path, contact_path) = ctx.config.with_value(|c| {
        (
            c.nav_links.clone(),
            c.catalog_asset_path.clone(),
            c.contact_path.clone(),
        )
    });

    let products_active = Memo::new(move |_| {
        location
            .pathname
            .with(|current| highlighter.products_active(current))
    });
    let expanded = move || ctx.mobile.with(|m| m.products_expanded());

    view! {
        <div class="mobile-menu">
            <nav class="mobile-menu__nav">
                {links
                    .into_iter()
                    .map(|link| view! { <MobileLink link=link /> })
                    .collect_view()}

                <div class="mobile-products">
                    <button
                        type="button"
                        class="mobile-products__trigger"
                        class:mobile-products__trigger--active=move || products_active.get()
                        aria-expanded=move || expanded().to_string()
                        on:click=move |_| ctx.toggle_mobile_products()
                    >
                        "Products"
                        {move || if expanded() { icon("chevron-up") } else { icon("chevron-down") }}
                    </button>

                    <div
                        class="mobile-products__body"
                        class:mobile-products__body--expanded=expanded
                    >
                        <div class="mobile-products__groups">
                            {ctx
                                .product_groups()
                                .into_iter()
                                .map(|group| view! { <MobileProductGroup group=group /> })
                                .collect_view()}

                            <a href=catalog_path download="" class="mobile-products__catalog">
                                "Download Catalog"
                            </a>
                        </div>
                    </div>
                </div>

                <a
                    href=contact_path
                    class="button button--primary mobile-menu__cta"
                    on:click=move |_| ctx.select_mobile_item()
                >
                    "Contact"
                </a>
            </nav>
        </div>
    }
}

#[component]
fn MobileLink(link: NavLink) -> impl IntoView {
    let ctx = use_header();
    let location = use_location();
    let highlighter = ctx.highlighter();
    let path = link.path.clone();
    let is_active = Memo::new(move |_| {
        location
            .pathname
            .with(|current| highlighter.link_active(current, &path))
    });

    view! {
        <a
            href=link.path
            class="mobile-menu__link"
            class:mobile-menu__link--active=move || is_active.get()
            on:click=move |_| ctx.select_mobile_item()
        >
            {link.label}
        </a>
    }
}

#[component]
fn MobileProductGroup(group: ProductGroup) -> impl IntoView {
    let ctx = use_header();

    let items = group
        .items
        .iter()
        .map(|item| {
            let selection = group.select(item);
            let href = ctx.product_href(&selection);
            let label = item.clone();
            view! {
                <li>
                    <a
                        href=href
                        class="mobile-products__item"
                        on:click=move |_| {
                            log::debug!("product selected: {:?}", selection);
                            ctx.select_mobile_item();
                        }
                    >
                        {label}
                    </a>
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="mobile-products__group">
            <h5 class="mobile-products__title">{group.title.clone()}</h5>
            <ul class="mobile-products__items">{items}</ul>
        </div>
    }
}
