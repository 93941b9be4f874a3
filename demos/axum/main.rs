mod protection;
mod routes;

use std::net::SocketAddr;

use axum::{
    Router,
    routing::{get, post},
};
use protection::middleware::cross_origin_middleware;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,cross_origin_protection=debug")),
        )
        .init();

    let app_state = protection::build_state().expect("valid cross-origin configuration");

    let app = Router::new()
        .route("/greet", get(routes::greet))
        .route("/transfer", post(routes::transfer))
        .route("/webhooks/{provider}", post(routes::webhook))
        .route_layer(axum::middleware::from_fn_with_state(
            app_state.clone(),
            cross_origin_middleware,
        ))
        .with_state(app_state);

    let addr: SocketAddr = "127.0.0.1:5001".parse().unwrap();
    tracing::info!(%addr, "axum demo listening");

    axum::serve(tokio::net::TcpListener::bind(addr).await.unwrap(), app)
        .await
        .unwrap();
}
