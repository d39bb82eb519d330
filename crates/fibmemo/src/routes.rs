//! HTTP routes: `GET /fib` and `GET /health`.

use std::sync::Arc;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use fibmemo_core::MemoizedCalculator;

use crate::errors::ApiError;
use crate::version;

/// Shared state for all handlers.
#[derive(Clone)]
pub struct AppState {
    /// The single, fully built calculator.
    pub calculator: Arc<MemoizedCalculator>,
}

impl AppState {
    #[must_use]
    pub fn new(calculator: Arc<MemoizedCalculator>) -> Self {
        Self { calculator }
    }
}

/// Query string of `GET /fib`. Both fields arrive as raw text so that bad
/// input gets the service's own messages.
#[derive(Debug, Default, Deserialize)]
pub struct FibQuery {
    /// Requested index.
    pub n: Option<String>,
    /// `text` (default) or `json`.
    pub format: Option<String>,
}

/// Body of a JSON response. The value is a string to keep every digit.
#[derive(Debug, Serialize)]
struct FibBody {
    n: u64,
    value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ResponseFormat {
    Text,
    Json,
}

impl ResponseFormat {
    fn parse(raw: Option<&str>) -> Result<Self, ApiError> {
        match raw.map(str::trim) {
            None | Some("" | "text") => Ok(Self::Text),
            Some("json") => Ok(Self::Json),
            Some(other) => Err(ApiError::BadRequest(format!("Unsupported format: {other}"))),
        }
    }
}

/// Decode the raw `n` parameter. Blank counts as absent.
fn parse_index(raw: Option<&str>) -> Result<Option<i64>, ApiError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) => text.parse::<i64>().map(Some).map_err(|_| {
            ApiError::BadRequest(format!("Argument must be an integer, but is: {text}"))
        }),
    }
}

/// Build the router with all routes.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/fib", get(get_fibonacci))
        .route("/health", get(get_health))
        .with_state(state)
}

/// GET /fib?n=<index>[&format=json]
async fn get_fibonacci(
    State(state): State<AppState>,
    query: Result<Query<FibQuery>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(query) =
        query.map_err(|e| ApiError::BadRequest(format!("Invalid query: {}", e.body_text())))?;
    let n = fibmemo_core::validate(parse_index(query.n.as_deref())?)?;
    let format = ResponseFormat::parse(query.format.as_deref())?;

    // Extensions beyond the eager limit are linear in n; keep them off the reactor.
    let calculator = Arc::clone(&state.calculator);
    let value = tokio::task::spawn_blocking(move || calculator.fibonacci_at(n).to_string())
        .await
        .map_err(|e| ApiError::Internal(format!("lookup task failed: {e}")))?;

    Ok(match format {
        ResponseFormat::Text => value.into_response(),
        ResponseFormat::Json => Json(FibBody { n, value }).into_response(),
    })
}

/// GET /health
async fn get_health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": version::version(),
        "eager_limit": state.calculator.eager_limit(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_index_values() {
        assert!(matches!(parse_index(None), Ok(None)));
        assert!(matches!(parse_index(Some("  ")), Ok(None)));
        assert!(matches!(parse_index(Some("42")), Ok(Some(42))));
        assert!(matches!(parse_index(Some("-3")), Ok(Some(-3))));
    }

    #[test]
    fn parse_index_rejects_non_integers() {
        for raw in ["abc", "1.5", "99999999999999999999"] {
            let err = parse_index(Some(raw)).unwrap_err();
            assert_eq!(
                err.to_string(),
                format!("Argument must be an integer, but is: {raw}")
            );
        }
    }

    #[test]
    fn response_format_values() {
        assert_eq!(ResponseFormat::parse(None).unwrap(), ResponseFormat::Text);
        assert_eq!(
            ResponseFormat::parse(Some("text")).unwrap(),
            ResponseFormat::Text
        );
        assert_eq!(
            ResponseFormat::parse(Some("json")).unwrap(),
            ResponseFormat::Json
        );
        assert!(ResponseFormat::parse(Some("xml")).is_err());
    }

    #[tokio::test]
    async fn health_reports_eager_limit() {
        let calc = MemoizedCalculator::with_options(
            &fibmemo_core::CalculatorOptions::with_eager_limit(10),
        )
        .unwrap();
        let state = AppState::new(Arc::new(calc));
        let Json(body) = get_health(State(state)).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["eager_limit"], 10);
        assert!(body["version"].is_string());
    }
}
