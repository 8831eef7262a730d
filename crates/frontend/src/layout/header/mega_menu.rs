use crate::layout::header::context::use_header;
use crate::shared::icons::icon;
use contracts::navigation::{NavLink, ProductGroup};
use leptos::prelude::*;
use leptos_router::hooks::use_location;

/// Desktop navigation: top-level links, the Products mega-menu and the
/// contact button.
#[component]
pub fn DesktopNav() -> impl IntoView {
    let ctx = use_header();
    let (links, contact_path) = ctx
        .config
        .with_value(|c| (c.nav_links.clone(), c.contact_path.clone()));

    view! {
        <nav class="site-nav">
            {links
                .into_iter()
                .map(|link| view! { <DesktopLink link=link /> })
                .collect_view()}

            <ProductsDropdown />

            <a href=contact_path class="button button--primary site-nav__cta">
                "Contact"
            </a>
        </nav>
    }
}

#[component]
fn DesktopLink(link: NavLink) -> impl IntoView {
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
            class="site-nav__link"
            class:site-nav__link--active=move || is_active.get()
        >
            {link.label}
            <Show when=move || is_active.get()>
                <span class="site-nav__underline"></span>
            </Show>
        </a>
    }
}

/// Hover/click driven mega-menu. The wrapper element is the dropdown region:
/// pointer enter/leave and outside clicks are measured against it.
#[component]
pub fn ProductsDropdown() -> impl IntoView {
    let ctx = use_header();
    let location = use_location();
    let highlighter = ctx.highlighter();
    let trigger_active = Memo::new(move |_| {
        location
            .pathname
            .with(|current| highlighter.products_active(current))
    });
    let is_open = move || ctx.desktop_open.get();

    view! {
        <div
            node_ref=ctx.region.node_ref()
            class="products-dropdown"
            on:mouseenter=move |_| ctx.open_dropdown()
            on:mouseleave=move |_| ctx.schedule_close()
        >
            <button
                type="button"
                class="products-dropdown__trigger"
                class:products-dropdown__trigger--active=move || trigger_active.get()
                aria-haspopup="true"
                aria-expanded=move || is_open().to_string()
                on:click=move |_| ctx.toggle_dropdown()
            >
                "Products"
                {move || if is_open() { icon("chevron-up") } else { icon("chevron-down") }}
            </button>

            <Show when=is_open>
                <MegaMenuPanel />
            </Show>
        </div>
    }
}

#[component]
fn MegaMenuPanel() -> impl IntoView {
    let ctx = use_header();
    let (products_path, catalog_path, contact_path) = ctx.config.with_value(|c| {
        (
            c.products_path.clone(),
            c.catalog_asset_path.clone(),
            c.contact_path.clone(),
        )
    });

    view! {
        <div class="mega-menu-panel">
            <div class="mega-menu-grid">
                {ctx
                    .product_groups()
                    .into_iter()
                    .map(|group| view! { <ProductColumn group=group /> })
                    .collect_view()}

                <div class="mega-menu-column">
                    <h4 class="mega-menu-column__title">"Quick Links"</h4>
                    <ul class="mega-menu-quick-links">
                        <li>
                            <a
                                href=products_path
                                class="mega-menu-link mega-menu-link--primary"
                                on:click=move |_| ctx.select_desktop_item()
                            >
                                "View All Products"
                            </a>
                        </li>
                        <li>
                            <a href=catalog_path download="" class="mega-menu-link mega-menu-link--catalog">
                                {icon("file-text")}
                                "Download Catalog"
                            </a>
                        </li>
                        <li>
                            <a
                                href=contact_path
                                class="mega-menu-link"
                                on:click=move |_| ctx.select_desktop_item()
                            >
                                "Contact"
                            </a>
                        </li>
                    </ul>
                </div>
            </div>
        </div>
    }
}

#[component]
fn ProductColumn(group: ProductGroup) -> impl IntoView {
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
                        class="mega-menu-link"
                        on:click=move |_| {
                            log::debug!("product selected: {:?}", selection);
                            ctx.select_desktop_item();
                        }
                    >
                        {label}
                    </a>
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="mega-menu-column">
            <h4 class="mega-menu-column__title">{group.title.clone()}</h4>
            <ul class="mega-menu-items">{items}</ul>
        </div>
    }
}
