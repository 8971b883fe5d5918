//! Browser dashboard: one HTML page plus the JSON endpoints it calls

mod page;

use crate::api::{CoinlayerClient, FetchError};
use crate::config::DashboardConfig;
use crate::dashboard::{
    load_default, load_names, load_random, load_search, CardGrid, CryptoSummary, DashboardMode,
    LoadError,
};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use tracing::{error, info};

pub struct WebState {
    pub client: CoinlayerClient,
    pub dashboard: DashboardConfig,
}

#[derive(Debug, Deserialize)]
struct DashboardQuery {
    mode: Option<DashboardMode>,
}

#[derive(Debug, Deserialize)]
struct CryptoQuery {
    symbol: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DashboardResponse {
    pub mode: DashboardMode,
    pub updated_at: String,
    pub rows: Vec<Vec<CryptoSummary>>,
}

/// Error body returned to the page as `{"error": "..."}`
struct ApiError {
    status: StatusCode,
    message: String,
}

impl From<LoadError> for ApiError {
    fn from(err: LoadError) -> Self {
        let status = match &err {
            LoadError::Fetch(FetchError::InvalidSymbol(_)) => StatusCode::BAD_REQUEST,
            LoadError::Fetch(FetchError::MissingSymbol(_)) | LoadError::NoSymbols => {
                StatusCode::NOT_FOUND
            }
            LoadError::Fetch(FetchError::Timeout(_)) => StatusCode::GATEWAY_TIMEOUT,
            LoadError::Fetch(_) => StatusCode::BAD_GATEWAY,
            LoadError::Data(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!("{} - {}", self.status, self.message);
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

pub fn router(state: Arc<WebState>) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/api/names", get(list_names))
        .route("/api/dashboard", get(get_dashboard))
        .route("/api/crypto", get(get_crypto))
        .with_state(state)
}

async fn index_page() -> Html<&'static str> {
    Html(page::INDEX_HTML)
}

async fn list_names(State(state): State<Arc<WebState>>) -> Result<Json<Vec<String>>, ApiError> {
    let names = load_names(&state.client).await?;
    Ok(Json(names.names().to_vec()))
}

async fn get_dashboard(
    State(state): State<Arc<WebState>>,
    Query(query): Query<DashboardQuery>,
) -> Result<Json<DashboardResponse>, ApiError> {
    let mode = query.mode.unwrap_or_default();
    let grid = CardGrid::new(state.dashboard.cards_per_row).map_err(LoadError::from)?;

    let cryptos = match mode {
        DashboardMode::Default => load_default(&state.client, &state.dashboard.default_symbols).await?,
        DashboardMode::Random => {
            let names = load_names(&state.client).await?;
            let mut rng = StdRng::from_entropy();
            load_random(&state.client, &names, state.dashboard.random_count, &mut rng).await?
        }
    };

    let rows = grid
        .rows(&cryptos)
        .map_err(LoadError::from)?
        .into_iter()
        .map(|row| row.iter().map(CryptoSummary::from).collect())
        .collect();

    info!("Served {} dashboard", mode.label());
    Ok(Json(DashboardResponse {
        mode,
        updated_at: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        rows,
    }))
}

async fn get_crypto(
    State(state): State<Arc<WebState>>,
    Query(query): Query<CryptoQuery>,
) -> Result<Json<CryptoSummary>, ApiError> {
    let symbol = query.symbol.trim().to_uppercase();
    let crypto = load_search(&state.client, &symbol, state.dashboard.history_days).await?;
    Ok(Json(CryptoSummary::from(&crypto)))
}
