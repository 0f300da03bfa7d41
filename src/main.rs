use std::sync::Arc;

use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use biblioteca_service::models::storage::{LibraryStore, MongoStore};
use biblioteca_service::routes;

type Store = Arc<dyn LibraryStore + Send + Sync>;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("biblioteca_service=info,tower_http=info")
        .init();

    let mongo_url = match std::env::var("MONGO_URL") {
        Ok(url) => url,
        Err(_) => {
            error!("MONGO_URL not defined");
            std::process::exit(1);
        }
    };

    let store = MongoStore::new(&mongo_url)
        .await
        .expect("Failed to connect to MongoDB");

    if let Err(e) = store.ping().await {
        error!("Failed to reach MongoDB: {}", e);
        std::process::exit(1);
    }
    info!("Connected to MongoDB");

    let store: Store = Arc::new(store);
    let app = routes::router(store)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let port = std::env::var("PORT").unwrap_or_else(|_| "4000".to_string());
    let addr = format!("0.0.0.0:{}", port);

    info!("Biblioteca service starting on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
