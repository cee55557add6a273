use std::collections::HashMap;

use axum::{
    body::Bytes,
    extract::Query,
    http::{header, HeaderMap, Method},
    response::IntoResponse,
    routing::any,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

/// Fixed plaintext body served at `/` for every method.
pub const HELLO_BODY: &str = "Hello, World!\n";

/// What `/echo` reports back about the request it received.
#[derive(Debug, Serialize, Deserialize)]
pub struct Echo {
    pub method: String,
    pub headers: Vec<(String, String)>,
    pub query: HashMap<String, String>,
    pub body: String,
}

pub fn app() -> Router {
    Router::new()
        .route("/", any(hello))
        .route("/echo", any(echo))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn hello() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        HELLO_BODY,
    )
}

async fn echo(
    method: Method,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
    body: Bytes,
) -> Json<Echo> {
    let headers = headers
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|value| (name.as_str().to_string(), value.to_string()))
        })
        .collect();

    Json(Echo {
        method: method.to_string(),
        headers,
        query,
        body: String::from_utf8_lossy(&body).into_owned(),
    })
}
