//! HTTP transport — maps routes to catalog operations.
//!
//! Uses axum for routing. All state is a shared `Arc<Catalog>`.
//!
//! ## Routes
//!
//! - `GET    /health` — health check returning `{ "ok": true }`.
//! - `GET    /movie` — list every record (200, `[]` when none).
//! - `GET    /movie/:id` — lookup by identifier (404 when absent).
//! - `GET    /movie/title/:title` — lookup by exact title (404 when absent).
//! - `GET    /movie/category/:category` — filter by category (200, `[]` when none).
//! - `POST   /movie/:id` — create from the JSON body (409 on duplicate id).
//! - `PUT    /movie/:id` — merge the JSON body into the record (404 when absent).
//! - `DELETE /movie/:id` — delete; answers 200 with a message either way.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use filmstore::{http, Catalog, FileStore};
//!
//! let catalog = Arc::new(Catalog::new(FileStore::new("db.json")));
//!
//! // Get the router to compose with other axum routes
//! let app = http::router(catalog.clone());
//!
//! // Or serve directly
//! http::serve(catalog, "0.0.0.0:3000").await?;
//! ```

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Map, Value};
use tracing::{info, warn};

use crate::catalog::{Catalog, CatalogError};

/// Build an axum `Router` over the given catalog.
pub fn router(catalog: Arc<Catalog>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/movie", get(list_handler))
        .route(
            "/movie/:id",
            get(get_handler)
                .post(create_handler)
                .put(update_handler)
                .delete(delete_handler),
        )
        .route("/movie/title/:title", get(title_handler))
        .route("/movie/category/:category", get(category_handler))
        .with_state(catalog)
}

/// Serve the catalog over HTTP at the given address (e.g. `"0.0.0.0:3000"`).
pub async fn serve(catalog: Arc<Catalog>, addr: &str) -> Result<(), std::io::Error> {
    let app = router(catalog);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr, "filmstore listening");
    axum::serve(listener, app).await
}

/// Translate a catalog error to a transport response.
///
/// Not-found → 404, conflict → 409, everything else (invalid argument,
/// store failure) is a server-side 500.
fn error_response(err: CatalogError) -> Response {
    let status = match &err {
        CatalogError::NotFound(_) => StatusCode::NOT_FOUND,
        CatalogError::Conflict(_) => StatusCode::CONFLICT,
        CatalogError::InvalidArgument(_) | CatalogError::Store(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    let body = json!({ "error": err.to_string() });
    (status, Json(body)).into_response()
}

/// `GET /health`
async fn health_handler() -> impl IntoResponse {
    Json(json!({ "ok": true }))
}

/// `GET /movie`
async fn list_handler(State(catalog): State<Arc<Catalog>>) -> Response {
    match catalog.list_all() {
        Ok(movies) => (StatusCode::OK, Json(movies)).into_response(),
        Err(e) => error_response(e),
    }
}

/// `GET /movie/:id`
async fn get_handler(State(catalog): State<Arc<Catalog>>, Path(id): Path<String>) -> Response {
    match catalog.find_by_id(&id) {
        Ok(Some(movie)) => {
            info!(id = %id, "movie found");
            (StatusCode::OK, Json(movie)).into_response()
        }
        Ok(None) => {
            info!(id = %id, "movie not found");
            error_response(CatalogError::NotFound(id))
        }
        Err(e) => error_response(e),
    }
}

/// `GET /movie/title/:title`
async fn title_handler(
    State(catalog): State<Arc<Catalog>>,
    Path(title): Path<String>,
) -> Response {
    match catalog.find_by_title(&title) {
        Ok(Some(movie)) => (StatusCode::OK, Json(movie)).into_response(),
        Ok(None) => {
            info!(title = %title, "no movie with this title");
            let body = json!({ "error": format!("movie with title '{}' not found", title) });
            (StatusCode::NOT_FOUND, Json(body)).into_response()
        }
        Err(e) => error_response(e),
    }
}

/// `GET /movie/category/:category` — empty result is 200, not 404.
async fn category_handler(
    State(catalog): State<Arc<Catalog>>,
    Path(category): Path<String>,
) -> Response {
    match catalog.find_by_category(&category) {
        Ok(movies) => (StatusCode::OK, Json(movies)).into_response(),
        Err(e) => error_response(e),
    }
}

/// `POST /movie/:id`
async fn create_handler(
    State(catalog): State<Arc<Catalog>>,
    Path(id): Path<String>,
    Json(payload): Json<Map<String, Value>>,
) -> Response {
    match catalog.create(&id, payload) {
        Ok(movie) => (StatusCode::OK, Json(movie)).into_response(),
        Err(e) => error_response(e),
    }
}

/// `PUT /movie/:id`
async fn update_handler(
    State(catalog): State<Arc<Catalog>>,
    Path(id): Path<String>,
    Json(patch): Json<Map<String, Value>>,
) -> Response {
    match catalog.update(&id, patch) {
        Ok(movie) => (StatusCode::OK, Json(movie)).into_response(),
        Err(e) => error_response(e),
    }
}

/// `DELETE /movie/:id` — the response message is the same whether or not
/// the record existed; only the log tells them apart.
async fn delete_handler(State(catalog): State<Arc<Catalog>>, Path(id): Path<String>) -> Response {
    match catalog.delete(&id) {
        Ok(removed) => {
            if !removed {
                warn!(id = %id, "delete of a movie that does not exist");
            }
            let body = json!({ "message": format!("movie with id '{}' has been deleted", id) });
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => error_response(e),
    }
}
