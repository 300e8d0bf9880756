//! HTTP surface of the dashboards
//!
//! Each dashboard gets its own router: the page at `/`, JSON callbacks
//! under `/api` and a `/health` probe. State is loaded once and shared
//! read-only between requests.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

use crate::app::{DashboardKind, QuarterOption, SummaryDashboard, TopicsDashboard};
use crate::core::error::{DashError, Result};
use crate::reporting::dashboard::{HtmlDashboard, PageMode};
use crate::reporting::logging;

impl DashError {
    /// HTTP status a failed callback answers with
    pub fn status_code(&self) -> StatusCode {
        match self {
            DashError::UnknownPeriod(_) => StatusCode::NOT_FOUND,
            DashError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for DashError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            logging::log_error("Request failed", Some(&self));
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// Query string of the topics callbacks
#[derive(Debug, Deserialize)]
pub struct QuarterParams {
    pub quarter: Option<String>,
}

#[derive(Clone)]
struct TopicsState {
    dashboard: Arc<TopicsDashboard>,
    page: Arc<String>,
}

#[derive(Clone)]
struct SummaryState {
    dashboard: Arc<SummaryDashboard>,
    page: Arc<String>,
}

/// Router for the topics dashboard
pub fn topics_router(dashboard: Arc<TopicsDashboard>) -> Result<Router> {
    let page = HtmlDashboard::topics_page(&dashboard, PageMode::Live)?;
    let state = TopicsState {
        dashboard,
        page: Arc::new(page),
    };

    Ok(Router::new()
        .route("/", get(topics_page))
        .route("/api/options", get(quarter_options))
        .route("/api/treemap", get(treemap))
        .route("/api/trends", get(trends))
        .route("/health", get(health))
        .with_state(state))
}

/// Router for the summary dashboard
pub fn summary_router(dashboard: Arc<SummaryDashboard>) -> Result<Router> {
    let page = HtmlDashboard::summary_page(&dashboard)?;
    let state = SummaryState {
        dashboard,
        page: Arc::new(page),
    };

    Ok(Router::new()
        .route("/", get(summary_page))
        .route("/api/figures", get(summary_figures))
        .route("/health", get(health))
        .with_state(state))
}

/// Bind `host:port` and serve until the process stops
pub async fn serve(router: Router, dashboard: DashboardKind, host: &str, port: u16) -> Result<()> {
    let address = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .map_err(|e| DashError::Server(format!("Could not bind {address}: {e}")))?;
    let local = listener
        .local_addr()
        .map(|addr| addr.to_string())
        .unwrap_or(address);
    logging::log_listening(dashboard, &local);

    axum::serve(listener, router)
        .await
        .map_err(|e| DashError::Server(e.to_string()))
}

async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

async fn topics_page(State(state): State<TopicsState>) -> Html<String> {
    Html(state.page.as_str().to_owned())
}

async fn quarter_options(State(state): State<TopicsState>) -> Json<Vec<QuarterOption>> {
    Json(state.dashboard.options().to_vec())
}

fn selected_value(state: &TopicsState, params: QuarterParams) -> String {
    params
        .quarter
        .unwrap_or_else(|| state.dashboard.default_value().to_string())
}

async fn treemap(
    State(state): State<TopicsState>,
    Query(params): Query<QuarterParams>,
) -> std::result::Result<Response, DashError> {
    let value = selected_value(&state, params);
    let result = state.dashboard.treemap(&value);
    logging::log_callback("/api/treemap", &value, result.is_ok());
    Ok(Json(result?).into_response())
}

async fn trends(
    State(state): State<TopicsState>,
    Query(params): Query<QuarterParams>,
) -> std::result::Result<Response, DashError> {
    let value = selected_value(&state, params);
    let result = state.dashboard.trends(&value);
    logging::log_callback("/api/trends", &value, result.is_ok());
    Ok(Json(result?).into_response())
}

async fn summary_page(State(state): State<SummaryState>) -> Html<String> {
    Html(state.page.as_str().to_owned())
}

async fn summary_figures(State(state): State<SummaryState>) -> impl IntoResponse {
    Json(state.dashboard.figures().clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::summary::{IpcCount, SectionCount, YearlyCount};
    use crate::data::table::TimeTable;
    use axum::body::{Body, to_bytes};
    use axum::http::Request;
    use chrono::NaiveDate;
    use serde_json::Value;
    use tower::ServiceExt;

    fn topics() -> Router {
        let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
        let table = TimeTable::new(
            "registration date",
            vec![date(2021, 1, 31), date(2021, 2, 28), date(2021, 4, 30)],
            vec!["AI".to_string(), "Batteries".to_string()],
            vec![vec![1.0, 2.0], vec![3.0, 0.0], vec![5.0, 5.0]],
        )
        .unwrap();
        let dashboard = TopicsDashboard::from_table(table).unwrap();
        topics_router(Arc::new(dashboard)).unwrap()
    }

    fn summary() -> Router {
        let dashboard = SummaryDashboard::from_tables(
            vec![SectionCount {
                section: "G".to_string(),
                count: 9.0,
            }],
            vec![
                IpcCount {
                    subclass: "G06F".to_string(),
                    count: 12.0,
                },
                IpcCount {
                    subclass: "A61K".to_string(),
                    count: 3.0,
                },
            ],
            vec![YearlyCount {
                year: 2021,
                count: 14.0,
            }],
            vec![],
            1,
        );
        summary_router(Arc::new(dashboard)).unwrap()
    }

    async fn fetch(router: Router, uri: &str) -> (StatusCode, Vec<u8>) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, body.to_vec())
    }

    async fn get_json(router: Router, uri: &str) -> (StatusCode, Value) {
        let (status, body) = fetch(router, uri).await;
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            DashError::UnknownPeriod("x".to_string()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            DashError::InvalidArgument("x".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            DashError::Data("x".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_topics_page() {
        let (status, body) = fetch(topics(), "/").await;
        let html = String::from_utf8(body).unwrap();

        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("quartal-selector"));
        assert!(html.contains(r#"<option value="2021-06-30" selected>2021Q2</option>"#));
    }

    #[tokio::test]
    async fn test_options() {
        let (status, body) = get_json(topics(), "/api/options").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!([
                {"label": "2021Q1", "value": "2021-03-31"},
                {"label": "2021Q2", "value": "2021-06-30"}
            ])
        );
    }

    #[tokio::test]
    async fn test_treemap_for_quarter() {
        let (status, body) = get_json(topics(), "/api/treemap?quarter=2021-03-31").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"][0]["type"], "treemap");
        assert_eq!(body["data"][0]["values"], json!([4.0, 2.0]));
    }

    #[tokio::test]
    async fn test_treemap_defaults_to_latest_quarter() {
        let (status, body) = get_json(topics(), "/api/treemap").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"][0]["values"], json!([5.0, 5.0]));
    }

    #[tokio::test]
    async fn test_trends_for_quarter() {
        let (status, body) = get_json(topics(), "/api/trends?quarter=2021-06-30").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["line"]["layout"]["shapes"][0]["x0"], "2021-06-30");
        assert_eq!(body["cumulative"]["data"][0]["y"], json!([1.0, 4.0, 9.0]));
    }

    #[tokio::test]
    async fn test_unknown_quarter_is_not_found() {
        let (status, body) = get_json(topics(), "/api/treemap?quarter=2030-03-31").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["error"].as_str().unwrap().contains("2030-03-31"));
    }

    #[tokio::test]
    async fn test_malformed_quarter_is_bad_request() {
        let (status, body) = get_json(topics(), "/api/trends?quarter=yesterday").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get_json(topics(), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");

        let (status, _) = get_json(summary(), "/health").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_summary_routes() {
        let (status, body) = fetch(summary(), "/").await;
        let html = String::from_utf8(body).unwrap();
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("mpk-pie"));

        let (status, body) = get_json(summary(), "/api/figures").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["ipc_bars"]["data"][0]["y"], json!(["G06F"]));
        assert_eq!(body["section_pie"]["data"][0]["type"], "pie");
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let (status, _) = fetch(summary(), "/api/treemap").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
