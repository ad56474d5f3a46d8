use crate::error::{AnalysisError, AnalysisErrorExt};
use crate::pipeline::{LinguisticPipeline, PipelineToken};
use async_trait::async_trait;
use corbas_domain::components::PipelineComponents;
use corbas_domain::config::PipelineConfig;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

const PARSE_PATH: &str = "parse";
const HEALTH_PATH: &str = "health";

#[derive(Debug, Serialize)]
struct ParseRequest<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct ParseResponse {
    tokens: Vec<PipelineToken>,
}

/// Pipeline served over HTTP.
///
/// `POST <endpoint>/parse` with `{"text": ...}` answers `{"tokens": [...]}`;
/// `GET <endpoint>/health` answers any 2xx when the service is up.
#[derive(Debug, Clone)]
pub struct RemotePipeline {
    client: Client,
    endpoint: String,
    components: PipelineComponents,
}

impl RemotePipeline {
    /// # Errors
    /// Returns [`AnalysisError::Transport`] when the HTTP client cannot be built.
    pub fn new(config: &PipelineConfig) -> Result<Self, AnalysisError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .context("Building pipeline HTTP client")?;

        Ok(Self {
            client,
            endpoint: config.endpoint.trim_end_matches('/').to_owned(),
            components: config.components,
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{path}", self.endpoint)
    }
}

#[async_trait]
impl LinguisticPipeline for RemotePipeline {
    async fn parse(&self, text: &str) -> Result<Vec<PipelineToken>, AnalysisError> {
        let response = self
            .client
            .post(self.url(PARSE_PATH))
            .json(&ParseRequest { text })
            .send()
            .await
            .context("Sending text to the pipeline")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AnalysisError::Upstream {
                status: status.as_u16(),
                body: body.into(),
                context: None,
            });
        }

        let parsed: ParseResponse =
            response.json().await.context("Decoding pipeline response")?;
        debug!(tokens = parsed.tokens.len(), "Pipeline parsed text");
        Ok(parsed.tokens)
    }

    fn components(&self) -> PipelineComponents {
        self.components
    }

    async fn probe(&self) -> bool {
        match self.client.get(self.url(HEALTH_PATH)).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                debug!(endpoint = %self.endpoint, "Pipeline probe failed: {e}");
                false
            }
        }
    }
}
