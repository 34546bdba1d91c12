use std::net::SocketAddr;
use std::time::Duration;

use tracing::info;

use vdrive_common::mup1cc::DEFAULT_TIMEOUT_SECS;
use vdrive_common::ToolConfig;
use vdrive_web::server::WebServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let web_addr: SocketAddr = std::env::var("VDRIVE_WEB_ADDR")
        .unwrap_or_else(|_| "0.0.0.0:8000".to_string())
        .parse()?;

    let program = std::env::var("VDRIVE_TOOL_BIN").unwrap_or_else(|_| "dr".to_string());

    let timeout_secs: u64 = match std::env::var("VDRIVE_TOOL_TIMEOUT_SECS") {
        Ok(v) => v.parse()?,
        Err(_) => DEFAULT_TIMEOUT_SECS,
    };

    let cfg = WebServerConfig {
        tool: ToolConfig {
            program,
            timeout: Duration::from_secs(timeout_secs),
        },
    };

    info!(
        "Starting VelocityDRIVE web gateway on http://{} (tool: {})",
        web_addr, cfg.tool.program
    );

    vdrive_web::server::serve(web_addr, cfg).await
}
