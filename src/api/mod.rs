use crate::common::context::Context;
use crate::common::init;
use crate::common::state::AppState;
use crate::repositories::Database;
use crate::settings::AppSettings;
use axum::Router;
use axum::extract::FromRequestParts;
use axum::http::HeaderValue;
use axum::http::request::Parts;
use axum::routing::{delete, get, post, put};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

pub mod complaints;
pub mod login;
pub mod users;

pub struct RequestContext {
    pub db: Arc<dyn Database>,
    pub bcrypt_cost: u32,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/complaints",
            post(complaints::create)
                .get(complaints::fetch_page)
                .delete(complaints::delete_many),
        )
        .route(
            "/api/complaints/{id}/response",
            put(complaints::set_admin_response),
        )
        .route("/api/login", post(login::login))
        .route("/api/users", get(users::fetch_all).post(users::create))
        .route("/api/users/{id}", delete(users::delete))
}

/// The full application: routes, CORS and request tracing.
/// An empty `cors_allowed_origins` allows every origin.
pub fn app(state: AppState, cors_allowed_origins: &[String]) -> Router {
    router()
        .layer(cors_layer(cors_allowed_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if allowed_origins.is_empty() {
        return cors.allow_origin(Any);
    }
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(origin) => Some(origin),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {origin}");
                None
            }
        })
        .collect();
    cors.allow_origin(AllowOrigin::list(origins))
}

pub async fn serve(settings: &AppSettings) -> anyhow::Result<()> {
    let state = init::initialize_state(settings).await?;
    info!("Connected to database");

    let app = app(state, &settings.cors_allowed_origins);
    let addr = SocketAddr::new(settings.app_host, settings.app_port);
    let listener = TcpListener::bind(addr).await?;
    info!("Server running on {addr}");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}

impl FromRequestParts<AppState> for RequestContext {
    type Rejection = Infallible;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(Self {
            db: state.db.clone(),
            bcrypt_cost: state.bcrypt_cost,
        })
    }
}

impl Context for RequestContext {
    fn db(&self) -> &dyn Database {
        self.db.as_ref()
    }

    fn bcrypt_cost(&self) -> u32 {
        self.bcrypt_cost
    }
}
