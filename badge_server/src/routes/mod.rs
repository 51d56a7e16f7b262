//! Badge service HTTP routes — badge endpoint and health.

use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::badge::Badge;
use crate::config::BadgeConfig;
use crate::services::buildbot_service::{self, ServiceError};

/// Shared state for badge route handlers.
#[derive(Clone)]
pub struct BadgeRouterState {
    pub client: reqwest::Client,
    pub config: BadgeConfig,
}

/// Build the service's Axum router.
pub fn badge_router(state: BadgeRouterState) -> Router {
    Router::new()
        .route(
            "/buildbot/builder/{domain}/{builder}",
            get(builder_badge_handler),
        )
        .route("/healthz", get(health_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ── Badge ──

#[derive(serde::Deserialize)]
pub struct BadgeQuery {
    pub format: Option<String>,
}

async fn builder_badge_handler(
    State(state): State<BadgeRouterState>,
    Path((domain, builder)): Path<(String, String)>,
    Query(query): Query<BadgeQuery>,
) -> Response {
    let as_json = query.format.as_deref() == Some("json");
    let origin = format!("{}://{}", state.config.upstream_scheme, domain);

    match buildbot_service::builder_status(&state.client, &origin, &builder).await {
        Ok(status) => {
            crate::metrics::badge_served(status.as_str());
            let badge = Badge::build_status(&builder, status);
            badge_response(StatusCode::OK, badge, as_json, &state.config)
        }
        Err(ServiceError::NotFound) => {
            crate::metrics::builder_not_found();
            tracing::debug!(domain = %domain, builder = %builder, "Builder has no builds");
            let badge = Badge::new(&builder, "no such builder", "red");
            badge_response(StatusCode::NOT_FOUND, badge, as_json, &state.config)
        }
        Err(ServiceError::Fetch(e)) => {
            crate::metrics::upstream_fetch_failed();
            tracing::warn!(domain = %domain, builder = %builder, "Upstream fetch failed: {e}");
            let badge = Badge::new(&builder, "inaccessible", "lightgrey");
            badge_response(StatusCode::BAD_GATEWAY, badge, as_json, &state.config)
        }
        Err(ServiceError::InvalidResultCode(code)) => {
            crate::metrics::invalid_result_code();
            tracing::warn!(
                domain = %domain,
                builder = %builder,
                code,
                "Result code outside the documented range"
            );
            let badge = Badge::new(&builder, "invalid response data", "lightgrey");
            badge_response(StatusCode::INTERNAL_SERVER_ERROR, badge, as_json, &state.config)
        }
    }
}

fn badge_response(code: StatusCode, badge: Badge, as_json: bool, config: &BadgeConfig) -> Response {
    let cache_control = format!("max-age={}", config.cache_max_age_secs);

    if as_json {
        (code, [(header::CACHE_CONTROL, cache_control)], Json(badge)).into_response()
    } else {
        (
            code,
            [
                (
                    header::CONTENT_TYPE,
                    "image/svg+xml; charset=utf-8".to_string(),
                ),
                (header::CACHE_CONTROL, cache_control),
            ],
            badge.to_svg(),
        )
            .into_response()
    }
}

// ── Health ──

#[derive(serde::Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
