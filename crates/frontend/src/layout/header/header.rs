use crate::layout::header::context::HeaderContext;
use crate::layout::header::mega_menu::DesktopNav;
use crate::layout::header::mobile_menu::{MobileActions, MobileMenu};
use contracts::navigation::HeaderConfig;
use leptos::prelude::*;

/// Sticky site header: logo, desktop mega-menu and the mobile menu.
///
/// All UI state lives in a [`HeaderContext`] owned by this component and is
/// dropped with it, together with its window listeners.
#[component]
pub fn NavigationHeader(config: HeaderConfig) -> impl IntoView {
    let ctx = HeaderContext::new(config);
    provide_context(ctx);
    ctx.attach_window_listeners();

    let brand = ctx.config.with_value(|c| c.brand.clone());
    let is_scrolled = move || ctx.scroll.with(|s| s.is_scrolled());

    view! {
        <header class="site-header" class:site-header--scrolled=is_scrolled>
            <div class="site-header__container">
                <div class="site-header__bar">
                    <a href=brand.home_path class="site-header__brand">
                        <img
                            src=brand.logo_src
                            alt=brand.logo_alt
                            class="site-header__logo"
                            class:site-header__logo--compact=is_scrolled
                        />
                    </a>

                    <DesktopNav />
                    <MobileActions />
                </div>
            </div>

            <MobileMenu />
        </header>
    }
}
