//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (request ID, tracing, timeout, language selection)
//! - Bind server to listener
//! - Swap in recompiled variables when the config changes
//!
//! # Routes
//! - `GET /health`: liveness
//! - `GET /`: every variable as a JSON object
//! - `GET /{variable}`: one variable as text, with `Content-Language`

use std::sync::Arc;
use std::time::Duration;

use arc_swap::ArcSwap;
use axum::{
    extract::Path,
    http::{header::CONTENT_LANGUAGE, HeaderValue, StatusCode},
    middleware,
    response::{IntoResponse, Response},
    routing::get,
    Extension, Json, Router,
};
use tokio::net::TcpListener;
use tokio::sync::{broadcast, mpsc};
use tower::ServiceBuilder;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::AppConfig;
use crate::http::middleware::select_lang_middleware;
use crate::http::request::UuidRequestId;
use crate::observability::metrics;
use crate::variables::{LanguageVariables, SelectedLanguages, VariableError};

/// Names served by fixed routes, which would shadow `/{variable}`.
pub const RESERVED_VARIABLES: &[&str] = &["health"];

/// Application state injected into handlers and middleware.
#[derive(Clone)]
pub struct AppState {
    pub variables: Arc<ArcSwap<LanguageVariables>>,
}

/// HTTP server exposing the selected languages.
pub struct HttpServer {
    router: Router,
    config: AppConfig,
    state: AppState,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: AppConfig) -> Result<Self, Vec<VariableError>> {
        let variables = LanguageVariables::from_config(&config.select_lang)?;
        tracing::info!(variables = variables.len(), "Language variables compiled");

        let state = AppState {
            variables: Arc::new(ArcSwap::from_pointee(variables)),
        };

        let router = Self::build_router(&config, state.clone());
        Ok(Self {
            router,
            config,
            state,
        })
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &AppConfig, state: AppState) -> Router {
        Router::new()
            .route("/health", get(health_handler))
            .route("/", get(all_handler))
            .route("/{variable}", get(variable_handler))
            .layer(middleware::from_fn_with_state(
                state.clone(),
                select_lang_middleware,
            ))
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::x_request_id(UuidRequestId))
                    .layer(TraceLayer::new_for_http())
                    .layer(TimeoutLayer::new(Duration::from_secs(
                        config.timeouts.request_secs,
                    )))
                    .layer(PropagateRequestIdLayer::x_request_id()),
            )
    }

    /// Run the server until `shutdown` fires.
    ///
    /// Every config received on `config_updates` is compiled and swapped in;
    /// a config that fails to compile leaves the current variables active.
    pub async fn run(
        self,
        listener: TcpListener,
        mut config_updates: mpsc::UnboundedReceiver<AppConfig>,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        let state = self.state.clone();
        let bind_address = self.config.listener.bind_address.clone();
        tokio::spawn(async move {
            while let Some(new_config) = config_updates.recv().await {
                if new_config.listener.bind_address != bind_address {
                    tracing::warn!(
                        bind_address = %new_config.listener.bind_address,
                        "Listener changes require a restart; ignoring"
                    );
                }
                state.apply(&new_config);
            }
        });

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Shared state, for swapping variables from outside the server.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// The router, for driving requests without a listener.
    pub fn router(&self) -> Router {
        self.router.clone()
    }
}

impl AppState {
    /// Compile `config` and atomically replace the active variables.
    ///
    /// Returns false, keeping the current variables, if compilation fails.
    pub fn apply(&self, config: &AppConfig) -> bool {
        match LanguageVariables::from_config(&config.select_lang) {
            Ok(variables) => {
                tracing::info!(variables = variables.len(), "Configuration reloaded");
                self.variables.store(Arc::new(variables));
                metrics::record_reload(true);
                true
            }
            Err(errors) => {
                for error in &errors {
                    tracing::error!(error = %error, "Rejected reloaded configuration");
                }
                metrics::record_reload(false);
                false
            }
        }
    }
}

async fn health_handler() -> &'static str {
    "ok"
}

async fn all_handler(Extension(selected): Extension<SelectedLanguages>) -> impl IntoResponse {
    Json(selected.as_map().clone())
}

async fn variable_handler(
    Path(variable): Path<String>,
    Extension(selected): Extension<SelectedLanguages>,
) -> Response {
    match selected.get(&variable) {
        Some(lang) => {
            let mut response = lang.to_string().into_response();
            if let Ok(value) = HeaderValue::from_str(lang) {
                response.headers_mut().insert(CONTENT_LANGUAGE, value);
            }
            response
        }
        None => (StatusCode::NOT_FOUND, format!("unknown variable: {variable}")).into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SelectLangConfig;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request};
    use tower::ServiceExt;

    fn config(groups: &[&str]) -> AppConfig {
        AppConfig {
            select_lang: vec![SelectLangConfig {
                variable: "$lang".to_string(),
                groups: groups.iter().map(|g| g.to_string()).collect(),
            }],
            ..AppConfig::default()
        }
    }

    async fn get_body(router: Router, request: Request<Body>) -> (StatusCode, String) {
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), 1024).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_variable_from_cookie() {
        let server = HttpServer::new(config(&["en", "fr"])).unwrap();
        let request = Request::builder()
            .uri("/lang")
            .header(header::COOKIE, "lang=FR")
            .header(header::ACCEPT_LANGUAGE, "en")
            .body(Body::empty())
            .unwrap();

        let response = server.router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[CONTENT_LANGUAGE], "fr");
        assert!(response.headers().contains_key("x-request-id"));
    }

    #[tokio::test]
    async fn test_unknown_variable_is_not_found() {
        let server = HttpServer::new(config(&["en"])).unwrap();
        let request = Request::builder().uri("/nope").body(Body::empty()).unwrap();

        let (status, _) = get_body(server.router(), request).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_apply_swaps_and_rejects() {
        let server = HttpServer::new(config(&["en", "fr"])).unwrap();
        let router = server.router();

        assert!(server.state().apply(&config(&["ja", "en"])));
        let request = Request::builder().uri("/lang").body(Body::empty()).unwrap();
        let (_, body) = get_body(router.clone(), request).await;
        assert_eq!(body, "ja");

        assert!(!server.state().apply(&config(&[":"])));
        let request = Request::builder().uri("/lang").body(Body::empty()).unwrap();
        let (_, body) = get_body(router, request).await;
        assert_eq!(body, "ja");
    }

    #[test]
    fn test_new_rejects_invalid_groups() {
        assert!(HttpServer::new(config(&[])).is_err());
    }
}
