use crate::components::PipelineComponents;
use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr};
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level service configuration.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfigInner {
    pub server: ServerConfig,
    pub pipeline: PipelineConfig,
    pub semantic: SemanticConfig,
    pub logging: LoggingConfig,
}

/// Arc-wrapped config, cheap to clone into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(flatten, default)]
    inner: Arc<ApiConfigInner>,
}

impl Deref for ApiConfig {
    type Target = ApiConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for ApiConfig {
    fn deref_mut(&mut self) -> &mut ApiConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// HTTP listener configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub address: IpAddr,
    pub port: u16,
    pub ssl: Option<SslConfig>,
    /// Allow cross-origin requests (the mobile WebView client needs this).
    pub cors: bool,
}

/// TLS certificate/key paths.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SslConfig {
    pub cert: PathBuf,
    pub key: PathBuf,
}

/// Remote linguistic pipeline (tagger, parser, lemmatizer).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Base URL; the service calls `<endpoint>/parse` and `<endpoint>/health`.
    pub endpoint: String,
    pub timeout_ms: u64,
    pub components: PipelineComponents,
}

/// Primary semantic tagger settings.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SemanticConfig {
    /// USAS single-word lexicon (TSV). Without it only the fallback classifier runs.
    pub lexicon: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// Directory for rolling log files; console only when unset.
    pub directory: Option<PathBuf>,
    pub json: bool,
    /// Filter directives (`corbas_analysis=debug`); overrides `RUST_LOG`.
    pub filter: Option<String>,
}

// --- Default ---

impl Default for ServerConfig {
    fn default() -> Self {
        Self { address: IpAddr::V4(Ipv4Addr::LOCALHOST), port: 5000, ssl: None, cors: true }
    }
}

impl Default for SslConfig {
    fn default() -> Self {
        Self { cert: PathBuf::from("cert.pem"), key: PathBuf::from("key.pem") }
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:8090".to_owned(),
            timeout_ms: 30_000,
            components: PipelineComponents::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), directory: None, json: false, filter: None }
    }
}
