use axum::{
    routing::get,
    Router,
    http::{header, HeaderValue, Method},
};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use crate::storage::SqliteStore;

pub mod routes;

/// Server state
///
/// Handlers open their own connection from this path per request, so the
/// state itself holds no live storage handle.
pub struct AppState {
    pub database_path: PathBuf,
}

/// Build the router with all five to-do endpoints
///
/// Both `/todos` and `/todos/` are registered since clients were written
/// against the trailing-slash form.
pub fn app(state: Arc<AppState>, cors_origin: &str) -> anyhow::Result<Router> {
    let origin: HeaderValue = cors_origin.parse()?;
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    let router = Router::new()
        .route("/todos", get(routes::list_todos).post(routes::create_todo))
        .route("/todos/", get(routes::list_todos).post(routes::create_todo))
        .route(
            "/todos/{id}",
            get(routes::get_todo)
                .put(routes::update_todo)
                .delete(routes::delete_todo),
        )
        .layer(cors)
        .with_state(state);

    Ok(router)
}

pub async fn start_server(port: u16, database_path: PathBuf, cors_origin: &str) -> anyhow::Result<()> {
    // Create the todos table up front so the first request never races
    // schema creation
    SqliteStore::open(&database_path)?;

    let state = Arc::new(AppState {
        database_path: database_path.clone(),
    });

    let app = app(state, cors_origin)?;

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Starting server on {}", addr);
    println!("🌍 Server running at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
