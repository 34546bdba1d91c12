//! Web server implementation

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use vdrive_common::{mup1cc, Error, InputFile, Invocation, ToolConfig, ToolOutput};

use crate::static_page;

/// Web server configuration, constructed at startup and handed to the router
#[derive(Clone, Debug, Default)]
pub struct WebServerConfig {
    /// mup1cc invocation settings
    pub tool: ToolConfig,
}

/// Web server state
#[derive(Clone)]
pub struct WebServer {
    state: Arc<WebServerState>,
}

struct WebServerState {
    cfg: WebServerConfig,
}

pub async fn serve(addr: SocketAddr, cfg: WebServerConfig) -> anyhow::Result<()> {
    let server = WebServer::new(cfg);
    server.serve(addr).await
}

impl WebServer {
    /// Create a new web server
    pub fn new(cfg: WebServerConfig) -> Self {
        Self {
            state: Arc::new(WebServerState { cfg }),
        }
    }

    /// Create router
    pub fn router(&self) -> Router {
        Router::new()
            .route("/", get(index_handler))
            .route("/api/health", get(health_handler))
            .route("/api/run-mup1cc", post(run_mup1cc_handler))
            .fallback(not_found_handler)
            .layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            )
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    /// Start the web server
    pub async fn serve(self, addr: SocketAddr) -> anyhow::Result<()> {
        info!("mup1cc gateway starting on http://{}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, self.router()).await?;

        Ok(())
    }
}

impl Default for WebServer {
    fn default() -> Self {
        Self::new(WebServerConfig::default())
    }
}

// ============================================================================
// Handlers
// ============================================================================

async fn index_handler() -> Html<&'static str> {
    Html(static_page::INDEX_HTML)
}

async fn health_handler() -> Json<serde_json::Value> {
    Json(json!({"status": "ok"}))
}

async fn not_found_handler() -> Response {
    error_response(StatusCode::NOT_FOUND, "not found")
}

/// `POST /api/run-mup1cc`: forward the form to the tool, map the result.
async fn run_mup1cc_handler(
    State(state): State<Arc<WebServerState>>,
    multipart: Multipart,
) -> Response {
    let invocation = match read_form(multipart).await {
        Ok(inv) => inv,
        Err(msg) => return error_response(StatusCode::INTERNAL_SERVER_ERROR, &msg),
    };

    match mup1cc::run(&state.cfg.tool, &invocation).await {
        Ok(ToolOutput::Structured(value)) => Json(json!({"output": value})).into_response(),
        Ok(ToolOutput::Raw(text)) => Json(json!({"output_raw": text})).into_response(),
        Err(Error::Timeout) => error_response(StatusCode::GATEWAY_TIMEOUT, "mup1cc timeout"),
        Err(err) => error_response(StatusCode::INTERNAL_SERVER_ERROR, &err.to_string()),
    }
}

fn error_response(status: StatusCode, msg: &str) -> Response {
    (status, Json(json!({"error": msg}))).into_response()
}

/// Pull `method`, `device`, and the optional `input_file` out of the form.
async fn read_form(mut multipart: Multipart) -> Result<Invocation, String> {
    let mut method = None;
    let mut device = None;
    let mut input = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| e.to_string())?
    {
        match field.name() {
            Some("method") => method = Some(field.text().await.map_err(|e| e.to_string())?),
            Some("device") => device = Some(field.text().await.map_err(|e| e.to_string())?),
            Some("input_file") => {
                let filename = field
                    .file_name()
                    .map(String::from)
                    .filter(|name| !name.is_empty());
                let bytes = field.bytes().await.map_err(|e| e.to_string())?;
                // Browsers submit an empty part when no file was chosen.
                if filename.is_some() || !bytes.is_empty() {
                    input = Some(InputFile {
                        filename,
                        bytes: bytes.to_vec(),
                    });
                }
            }
            _ => {}
        }
    }

    Ok(Invocation {
        method: method.ok_or("missing required field: method")?,
        device: device.ok_or("missing required field: device")?,
        input,
    })
}
