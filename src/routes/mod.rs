pub mod authors;
pub mod books;
pub mod health;

use std::sync::Arc;

use axum::http::{Method, Uri};
use axum::routing::{get, post};
use axum::Router;

use crate::error::ApiError;
use crate::models::storage::LibraryStore;

type Store = Arc<dyn LibraryStore + Send + Sync>;

pub fn router(store: Store) -> Router {
    // Unmatched methods on known paths get the same generic response as
    // unknown paths, so each method router carries the fallback too.
    Router::new()
        .route("/status", get(health::health_check).fallback(no_endpoint))
        .route("/libros", get(books::list_books).fallback(no_endpoint))
        .route(
            "/libro",
            get(books::get_book)
                .post(books::create_book)
                .put(books::update_book)
                .delete(books::delete_book)
                .fallback(no_endpoint),
        )
        .route("/autor", post(authors::create_author).fallback(no_endpoint))
        .fallback(no_endpoint)
        .with_state(store)
}

async fn no_endpoint(method: Method, uri: Uri) -> ApiError {
    ApiError::NoEndpoint {
        method: method.to_string(),
        path: uri.path().to_string(),
    }
}
