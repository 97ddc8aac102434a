use dioxus::prelude::*;
use shared_types::FeatureFlags;

mod auth;
pub mod format_helpers;
pub mod notify;
mod components;
mod routes;
use auth::AuthState;
use routes::Route;

const THEME_BASE: Asset = asset!("/assets/theme-base.css");
const THEME_CLINIC: Asset = asset!("/assets/themes/clinic.css");
const THEME_SLATE: Asset = asset!("/assets/themes/slate.css");
const THEME_HIGH_CONTRAST: Asset = asset!("/assets/themes/high-contrast.css");

fn main() {
    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        server::config::load_feature_flags();
        let flags = server::config::feature_flags();

        if flags.telemetry {
            server::telemetry::init_telemetry();
        }
        server::health::record_start_time();

        let pool = server::db::create_pool();
        server::db::run_migrations(&pool).await;

        // Background task: purge expired refresh tokens every hour
        let cleanup_pool = pool.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(std::time::Duration::from_secs(60 * 60));
            loop {
                interval.tick().await;
                let _ = sqlx::query!("DELETE FROM refresh_tokens WHERE expires_at < NOW()")
                    .execute(&cleanup_pool)
                    .await;
            }
        });

        let state = server::db::AppState { pool: pool.clone() };

        let router = dioxus::server::router(App)
            .merge(server::openapi::api_router(pool))
            .layer(axum::middleware::from_fn_with_state(
                state,
                server::auth::middleware::auth_middleware,
            ))
            .layer(tower_http::request_id::PropagateRequestIdLayer::x_request_id())
            .layer(tower_http::request_id::SetRequestIdLayer::x_request_id(
                tower_http::request_id::MakeRequestUuid,
            ));
        Ok(router)
    });

    #[cfg(not(feature = "server"))]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Fetch feature flags once and provide via context (defaults all-off on error)
    let flags_resource =
        use_server_future(move || async move { server::api::get_feature_flags().await })?;

    let flags = flags_resource
        .read()
        .as_ref()
        .cloned()
        .unwrap_or(Ok(FeatureFlags::default()))
        .unwrap_or_default();

    use_context_provider(|| flags);
    use_context_provider(AuthState::new);

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_BASE }
        document::Link { rel: "stylesheet", href: THEME_CLINIC }
        document::Link { rel: "stylesheet", href: THEME_SLATE }
        document::Link { rel: "stylesheet", href: THEME_HIGH_CONTRAST }
        shared_ui::theme::ThemeSeed {}
        shared_ui::ToastProvider {
            SuspenseBoundary {
                fallback: |_| rsx! {
                    div { class: "portal-loading",
                        div { class: "portal-spinner" }
                    }
                },
                Router::<Route> {}
            }
        }
    }
}
