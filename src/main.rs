use std::{any::Any, env, net::SocketAddr, sync::Arc, time::Duration};

use axum::{
    error_handling::HandleErrorLayer,
    extract::DefaultBodyLimit,
    http::header::CONTENT_TYPE,
    http::Method,
    response::{IntoResponse, Response},
    routing::{get, post},
    BoxError, Router,
};
use tower::{buffer::BufferLayer, limit::RateLimitLayer, ServiceBuilder};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any as AnyOrigin, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use tracing_subscriber::EnvFilter;

use crate::app::{config, env::Envy, errors::DefaultApiError};

mod app;
mod prompts;

#[derive(Clone)]
pub struct AppState {
    pub envy: Arc<Envy>,
}

#[tokio::main]
async fn main() {
    // tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // environment
    let app_env = env::var("APP_ENV").unwrap_or("development".to_string());
    let _ = dotenvy::from_filename(format!(".env.{}", app_env));
    let envy = match envy::from_env::<Envy>() {
        Ok(config) => config,
        Err(e) => panic!("{:#?}", e),
    };

    let port = envy.port();
    let state = AppState {
        envy: Arc::new(envy),
    };

    let app = with_layers(routes(state));

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Anti classifier prompt server running on http://localhost:{}", port);

    if let Err(e) = axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
    {
        tracing::error!(%e);
    }
}

fn routes(state: AppState) -> Router {
    let public_dir = state.envy.public_dir().to_string();

    Router::new()
        .route("/", get(app::controller::get_root))
        .route("/health", get(app::controller::get_health))
        // prompts
        .route(
            "/api/generate-prompt",
            post(prompts::controller::generate_prompt),
        )
        // static assets
        .fallback_service(ServeDir::new(public_dir))
        .with_state(state)
}

fn with_layers(router: Router) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_headers([CONTENT_TYPE])
        .allow_methods([Method::POST, Method::GET]);

    router
        .layer(DefaultBodyLimit::max(config::MAX_BODY_BYTES))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(|err: BoxError| async move {
                    tracing::error!(%err);
                    DefaultApiError::InternalServerError.value()
                }))
                .layer(BufferLayer::new(1024))
                .layer(RateLimitLayer::new(50, Duration::from_secs(1))),
        )
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic"
    };
    tracing::error!("handler panicked: {}", detail);

    DefaultApiError::InternalServerError.value().into_response()
}
