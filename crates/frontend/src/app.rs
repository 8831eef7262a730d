use crate::layout::header::api::fetch_header_config;
use crate::routes::routes::AppRoutes;
use contracts::navigation::HeaderConfig;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn App() -> impl IntoView {
    // Start from the embedded preset; the server may override it.
    let config = RwSignal::new(HeaderConfig::default());

    spawn_local(async move {
        match fetch_header_config().await {
            Ok(served) => {
                if served != config.get_untracked() {
                    log::info!("using header configuration served by the backend");
                    config.set(served);
                }
            }
            Err(e) => log::warn!("header configuration unavailable, keeping preset: {}", e),
        }
    });

    view! {
        <AppRoutes config=config />
    }
}
