//! Routes and handlers for the quotes API.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use std::sync::Arc;
use tracing::debug;

use crate::domain::error::ApiError;
use crate::domain::types::{QuoteDto, SubmitQuoteRequest};
use qv_01_quote_ledger::{LedgerError, QuoteLedgerApi};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub ledger: Arc<dyn QuoteLedgerApi>,
}

/// Build the quotes router over the given state.
///
/// Middleware (CORS, timeout, trace) is layered on by
/// [`crate::service::ApiGatewayService`]; tests drive the bare router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/quotes", get(list_quotes).post(submit_quote))
        .route("/health", get(health_check))
        .with_state(state)
}

/// Run a ledger call on the blocking pool.
///
/// The inbound port is synchronous; keeping its calls off the async
/// workers stops a slow storage statement from stalling the accept loop.
async fn run_ledger<T, F>(state: &AppState, op: F) -> Result<T, ApiError>
where
    T: Send + 'static,
    F: FnOnce(&dyn QuoteLedgerApi) -> Result<T, LedgerError> + Send + 'static,
{
    let ledger = Arc::clone(&state.ledger);
    tokio::task::spawn_blocking(move || op(ledger.as_ref()))
        .await
        .map_err(|e| ApiError::internal(format!("ledger task failed: {e}")))?
        .map_err(ApiError::from)
}

/// `GET /api/quotes` - all retained quotes, newest first.
async fn list_quotes(State(state): State<AppState>) -> Result<Json<Vec<QuoteDto>>, ApiError> {
    let quotes = run_ledger(&state, |ledger| ledger.list()).await?;
    debug!("[qv-02] served {} quote(s)", quotes.len());
    Ok(Json(quotes.into_iter().map(QuoteDto::from).collect()))
}

/// `POST /api/quotes` - append a quote, answer with the post-prune list.
async fn submit_quote(
    State(state): State<AppState>,
    Json(body): Json<SubmitQuoteRequest>,
) -> Result<(StatusCode, Json<Vec<QuoteDto>>), ApiError> {
    let (Some(text), Some(author)) = (body.text, body.author) else {
        return Err(ApiError::bad_request("text and author are required"));
    };

    let quotes = run_ledger(&state, move |ledger| {
        let appended = ledger.append(&text, &author)?;
        debug!("[qv-02] accepted quote #{}", appended.id);
        ledger.list()
    })
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(quotes.into_iter().map(QuoteDto::from).collect()),
    ))
}

/// `GET /health` - liveness probe target; deliberately does not touch
/// storage, so resolvers can find the service even while the store is
/// down and surface the storage failure as a 500 instead of "no server".
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(serde_json::json!({ "status": "ok" })))
}
