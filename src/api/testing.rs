//! In-process stand-in for the coinlayer API, used by tests across the crate

use crate::api::CoinlayerClient;
use crate::config::CoinlayerConfig;
use axum::extract::Query;
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Redirect};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::time::Duration;
use tokio::net::TcpListener;

pub const TEST_KEY: &str = "test-key";

pub struct FakeCoinlayer {
    base_url: String,
}

impl FakeCoinlayer {
    pub async fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router()).await.unwrap();
        });

        Self {
            base_url: format!("http://{}", addr),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn config(&self) -> CoinlayerConfig {
        CoinlayerConfig {
            api_key: TEST_KEY.to_string(),
            base_url: self.base_url.clone(),
            timeout_secs: 5,
        }
    }

    pub fn client(&self) -> CoinlayerClient {
        client_for(&self.base_url, TEST_KEY)
    }

    pub fn client_with_key(&self, key: &str) -> CoinlayerClient {
        client_for(&self.base_url, key)
    }
}

pub fn client_for(base_url: &str, key: &str) -> CoinlayerClient {
    let config = CoinlayerConfig {
        api_key: key.to_string(),
        base_url: base_url.to_string(),
        timeout_secs: 5,
    };
    CoinlayerClient::new(&config).unwrap()
}

pub fn client_with_timeout(base_url: &str, timeout: Duration) -> CoinlayerClient {
    let config = CoinlayerConfig {
        api_key: TEST_KEY.to_string(),
        base_url: base_url.to_string(),
        timeout_secs: 1,
    };
    CoinlayerClient::with_timeout(&config, timeout).unwrap()
}

/// URL of a port nothing listens on
pub async fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

fn router() -> Router {
    Router::new()
        .route("/list", get(list))
        .route("/live", get(live))
        .route("/status500/list", get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }))
        .route(
            "/slow/list",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(2)).await;
                Json(json!({"success": true, "crypto": {}}))
            }),
        )
        .route("/loop/list", get(|| async { Redirect::temporary("/loop/list") }))
        .route("/bare/list", get(|| async { Json(json!({"crypto": {}})) }))
        .fallback(historical)
}

type Params = Query<HashMap<String, String>>;

fn authorized(params: &HashMap<String, String>) -> Result<(), Json<Value>> {
    if params.get("access_key").map(String::as_str) == Some(TEST_KEY) {
        Ok(())
    } else {
        Err(Json(json!({
            "success": false,
            "error": {"code": 101, "type": "invalid_access_key", "info": "You have not supplied a valid API Access Key."}
        })))
    }
}

async fn list(Query(params): Params) -> Json<Value> {
    if let Err(denied) = authorized(&params) {
        return denied;
    }
    Json(json!({
        "success": true,
        "crypto": {
            "BTC": {"symbol": "BTC", "name": "Bitcoin", "name_full": "Bitcoin (BTC)", "max_supply": 21000000},
            "ETH": {"symbol": "ETH", "name": "Ethereum", "name_full": "Ethereum (ETH)", "max_supply": "N/A"},
            "DOGE": {"symbol": "DOGE", "name": "Dogecoin", "name_full": "Dogecoin (DOGE)"},
            "XYZ": {"symbol": "XYZ", "name": "Obscure"}
        },
        "fiat": {"USD": "United States Dollar"}
    }))
}

fn live_rate(symbol: &str) -> Option<Value> {
    match symbol {
        "BTC" => Some(json!({
            "rate": 37000.5, "high": 38000, "low": 36500.25, "vol": 1250000,
            "cap": 720000000000u64, "sup": 19500000, "change": 456.5, "change_pct": 1.25
        })),
        "ETH" => Some(json!({
            "rate": 2000.25, "high": 2100, "low": 1950.5, "vol": 800000,
            "cap": 240000000000u64, "sup": 120000000, "change": -10.5, "change_pct": -0.5
        })),
        "DOGE" => Some(json!({
            "rate": 0.0625, "high": 0.07, "low": 0.06, "vol": 90000,
            "cap": 9000000000u64, "sup": 140000000000u64, "change": 0.001, "change_pct": 2.5
        })),
        "XYZ" => Some(json!({"rate": 0.5})),
        _ => None,
    }
}

async fn live(Query(params): Params) -> Json<Value> {
    if let Err(denied) = authorized(&params) {
        return denied;
    }
    let symbol = params.get("symbols").cloned().unwrap_or_default();
    let mut rates = serde_json::Map::new();
    if let Some(rate) = live_rate(&symbol) {
        rates.insert(symbol, rate);
    }
    Json(json!({"success": true, "target": "USD", "timestamp": 1701302400, "rates": rates}))
}

/// Day for which `/YYYY-MM-DD` answers `success: false`
const NO_RATES_DATE: &str = "2023-06-15";

/// `/YYYY-MM-DD`: the rate is the day of month, so tests can check ordering
async fn historical(uri: Uri, Query(params): Params) -> impl IntoResponse {
    if let Err(denied) = authorized(&params) {
        return (StatusCode::OK, denied);
    }
    let date = uri.path().trim_start_matches('/');
    let Ok(date) = chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d") else {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({"success": false, "error": {"code": 103, "type": "invalid_api_function"}})),
        );
    };

    if date.to_string() == NO_RATES_DATE {
        return (
            StatusCode::OK,
            Json(json!({
                "success": false,
                "error": {"code": 106, "type": "no_rates_available", "info": "No rates for this date"}
            })),
        );
    }

    let symbol = params.get("symbols").cloned().unwrap_or_default();
    let mut rates = serde_json::Map::new();
    if live_rate(&symbol).is_some() {
        rates.insert(symbol, json!(chrono::Datelike::day(&date)));
    }
    (
        StatusCode::OK,
        Json(json!({"success": true, "historical": true, "date": date.to_string(), "rates": rates})),
    )
}
