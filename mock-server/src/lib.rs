use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub image: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Feed {
    pub items: Vec<Item>,
}

pub type Db = Arc<Vec<Item>>;

pub fn app() -> Router {
    app_with(Vec::new())
}

pub fn app_with(items: Vec<Item>) -> Router {
    let db: Db = Arc::new(items);
    Router::new()
        .route("/feed", get(list_items))
        .route("/status/{code}", get(with_status))
        .route("/malformed", get(malformed))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

pub async fn run_with(listener: TcpListener, items: Vec<Item>) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(items)).await
}

async fn list_items(State(db): State<Db>) -> Json<Feed> {
    Json(Feed { items: db.to_vec() })
}

async fn with_status(Path(code): Path<u16>) -> Result<(StatusCode, Json<Feed>), StatusCode> {
    let status = StatusCode::from_u16(code)
        .map_err(|_| StatusCode::BAD_REQUEST)?;
    Ok((status, Json(Feed { items: Vec::new() })))
}

async fn malformed() -> &'static str {
    "Invalid JSON"
}
