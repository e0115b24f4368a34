//! Route table and handlers.
//!
//! Failures are logged and answered with a fixed message; callers get no
//! finer-grained error codes.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{Method, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::AppState;
use crate::models::SearchCriteria;
use crate::report::{ReportEmail, ReportRequest};

const SEARCH_FAILED: &str = "Failed to fetch college data";
const REPORT_SENT: &str = "Report submitted successfully.";
const REPORT_FAILED: &str = "Failed to send email.";

/// Create the HTTP router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health_check))
        .route("/health", get(health_check))
        .route("/api/colleges", post(handle_search))
        .route("/api/report-inaccuracy", post(handle_report).fallback(method_not_allowed))
        .route("/api/colleges/report", post(handle_report).fallback(method_not_allowed))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "college-search",
        "version": env!("CARGO_PKG_VERSION"),
        "has_api_key": state.client.has_api_key()
    }))
}

/// POST /api/colleges
async fn handle_search(
    State(state): State<AppState>,
    payload: Result<Json<SearchCriteria>, JsonRejection>,
) -> Response {
    let criteria = match payload {
        Ok(Json(criteria)) => criteria,
        Err(e) => {
            tracing::error!(error = %e.body_text(), "Invalid search criteria");
            return search_failed();
        }
    };

    match state.client.search(&criteria).await {
        Ok(results) => {
            tracing::info!(count = results.len(), "Search completed");
            Json(json!({ "results": results })).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Search failed");
            search_failed()
        }
    }
}

fn search_failed() -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "error": SEARCH_FAILED }))).into_response()
}

/// POST /api/report-inaccuracy and /api/colleges/report
async fn handle_report(
    State(state): State<AppState>,
    payload: Result<Json<ReportRequest>, JsonRejection>,
) -> Response {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(e) => {
            tracing::error!(error = %e.body_text(), "Invalid report body");
            return report_failed();
        }
    };

    let email = ReportEmail::compose(&request.description);
    match state.mailer.send(&email).await {
        Ok(()) => (StatusCode::OK, Json(json!({ "message": REPORT_SENT }))).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Error sending email");
            report_failed()
        }
    }
}

fn report_failed() -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "message": REPORT_FAILED }))).into_response()
}

async fn method_not_allowed(method: Method) -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        [(header::ALLOW, "POST")],
        Json(json!({ "message": format!("Method {method} Not Allowed") })),
    )
        .into_response()
}
