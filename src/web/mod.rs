// web/mod.rs — HTTP server for the task list UI.
//
// Endpoints:
//   GET  /               task list page
//   POST /               create a task (form field: description)
//   GET  /complete/{id}  toggle completion
//   GET  /delete/{id}    delete a task
//   GET  /health         liveness JSON

pub mod flash;
pub mod pages;
pub mod routes;

use anyhow::Result;
use axum::{routing::get, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::AppContext;

pub async fn start_server(ctx: Arc<AppContext>) -> Result<()> {
    let bind = format!("{}:{}", ctx.config.bind_address, ctx.config.port);
    let addr: SocketAddr = bind.parse()?;

    let router = build_router(ctx);

    info!("task list on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}

pub fn build_router(ctx: Arc<AppContext>) -> Router {
    Router::new()
        .route("/", get(routes::tasks::index).post(routes::tasks::create))
        .route("/complete/{id}", get(routes::tasks::toggle))
        .route("/delete/{id}", get(routes::tasks::delete))
        .route("/health", get(routes::health::health))
        .layer(TraceLayer::new_for_http())
        .with_state(ctx)
}
