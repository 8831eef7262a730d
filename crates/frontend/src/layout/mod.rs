pub mod header;

use contracts::navigation::HeaderConfig;
use header::NavigationHeader;
use leptos::prelude::*;

/// Page frame: the navigation header above the routed content.
///
/// The header is rebuilt whenever `config` changes, which tears down the old
/// instance's listeners and timer.
#[component]
pub fn Shell(config: RwSignal<HeaderConfig>, children: Children) -> impl IntoView {
    view! {
        <div class="site-layout">
            {move || view! { <NavigationHeader config=config.get() /> }}
            <main class="site-main">
                {children()}
            </main>
        </div>
    }
}
