//! mup1cc tool invocation.
//!
//! Wraps the external `dr mup1cc` device-configuration CLI: materializes an
//! optional uploaded input as a temp file, runs the tool with a hard timeout,
//! and decodes its stdout (YAML first, raw text otherwise).

use std::io::Write;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tempfile::Builder;
use tokio::process::Command;
use tracing::{debug, warn};

use crate::error::{Error, Result};

/// Hard cap on a single tool invocation
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Tool invocation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolConfig {
    /// Wrapper binary providing the `mup1cc` subcommand
    pub program: String,

    /// Per-invocation timeout
    pub timeout: Duration,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            program: "dr".to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// One request to the tool. `method` and `device` are forwarded verbatim.
#[derive(Debug, Clone)]
pub struct Invocation {
    pub method: String,
    pub device: String,
    pub input: Option<InputFile>,
}

/// Optional uploaded input passed to the tool via `-i <path>`
#[derive(Debug, Clone)]
pub struct InputFile {
    pub filename: Option<String>,
    pub bytes: Vec<u8>,
}

impl InputFile {
    /// Temp-file suffix derived from the upload's extension, `.yaml` when absent
    fn suffix(&self) -> String {
        self.filename
            .as_deref()
            .and_then(|name| Path::new(name).extension())
            .and_then(|ext| ext.to_str())
            .map(|ext| format!(".{ext}"))
            .unwrap_or_else(|| ".yaml".to_string())
    }
}

/// Decoded tool stdout
#[derive(Debug, Clone, PartialEq)]
pub enum ToolOutput {
    /// stdout parsed as YAML (a superset of JSON)
    Structured(serde_json::Value),
    /// stdout that did not parse; returned verbatim
    Raw(String),
}

/// Two-stage decode: try YAML, fall back to the raw string.
pub fn decode_stdout(stdout: &str) -> ToolOutput {
    match serde_yaml::from_str::<serde_json::Value>(stdout) {
        Ok(value) => ToolOutput::Structured(value),
        Err(_) => ToolOutput::Raw(stdout.to_string()),
    }
}

/// Run `<program> mup1cc -d <device> -m <method> [-i <temp-file>]`.
///
/// The temp file (when an upload is present) is owned by this call and
/// unlinked on every return path, including timeout.
pub async fn run(cfg: &ToolConfig, inv: &Invocation) -> Result<ToolOutput> {
    let input_tmp = match &inv.input {
        Some(input) => {
            let mut tmp = Builder::new()
                .prefix("mup1cc-")
                .suffix(&input.suffix())
                .tempfile()?;
            tmp.write_all(&input.bytes)?;
            tmp.flush()?;
            Some(tmp)
        }
        None => None,
    };

    let mut cmd = Command::new(&cfg.program);
    cmd.arg("mup1cc")
        .args(["-d", &inv.device, "-m", &inv.method])
        .kill_on_drop(true);
    if let Some(tmp) = &input_tmp {
        cmd.arg("-i").arg(tmp.path());
    }

    debug!(device = %inv.device, method = %inv.method, "running mup1cc");

    let output = match tokio::time::timeout(cfg.timeout, cmd.output()).await {
        Ok(result) => result?,
        Err(_) => {
            warn!(
                device = %inv.device,
                "mup1cc did not finish within {}s",
                cfg.timeout.as_secs()
            );
            return Err(Error::Timeout);
        }
    };

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::tool_failure(&stderr));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    Ok(decode_stdout(stdout.trim()))
}
