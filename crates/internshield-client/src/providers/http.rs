use internshield_core::RiskResult;
use log::{debug, warn};
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};

use crate::config::HttpScoringConfig;
use crate::error::ScoringError;
use crate::traits::ScoringClient;
use crate::types::{ScoreRequest, ServiceHealth};

#[derive(Clone)]
pub struct HttpScoringClient {
    client: Client,
    endpoint: Url,
}

impl HttpScoringClient {
    pub fn new(config: HttpScoringConfig) -> Result<Self, ScoringError> {
        let endpoint = Url::parse(config.endpoint.trim()).map_err(|err| {
            ScoringError::Config(format!("invalid endpoint {:?}: {err}", config.endpoint))
        })?;
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, endpoint })
    }

    fn health_url(&self) -> Result<Url, ScoringError> {
        self.endpoint
            .join("/")
            .map_err(|err| ScoringError::Config(format!("cannot derive service root: {err}")))
    }

    async fn read_success_body(res: reqwest::Response) -> Result<String, ScoringError> {
        if !res.status().is_success() {
            let status = res.status().as_u16();
            let body = res.text().await.unwrap_or_default();
            return Err(ScoringError::Api { status, body });
        }
        Ok(res.text().await?)
    }
}

#[async_trait::async_trait]
impl ScoringClient for HttpScoringClient {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn analyze(&self, request: ScoreRequest) -> Result<RiskResult, ScoringError> {
        let payload = AnalyzeRequest {
            message: &request.message,
            domain: &request.domain,
        };
        debug!("posting score request to {}", self.endpoint);

        let res = self
            .client
            .post(self.endpoint.clone())
            .json(&payload)
            .send()
            .await?;
        let body = Self::read_success_body(res).await?;
        parse_analyze_response(&body)
    }

    async fn health(&self) -> Result<ServiceHealth, ScoringError> {
        let res = self.client.get(self.health_url()?).send().await?;
        let body = Self::read_success_body(res).await?;
        let parsed: HealthResponse = serde_json::from_str(&body)?;
        Ok(ServiceHealth {
            provider: self.name().to_string(),
            message: parsed.message,
        })
    }
}

fn parse_analyze_response(body: &str) -> Result<RiskResult, ScoringError> {
    let parsed: AnalyzeResponse = serde_json::from_str(body)?;
    if !parsed.risk_score.is_finite() {
        return Err(ScoringError::InvalidResponse(format!(
            "risk_score is not finite: {}",
            parsed.risk_score
        )));
    }

    let result = RiskResult {
        risk_score: parsed.risk_score,
        verdict: parsed.verdict,
        reasons: parsed.reasons,
    };
    if !result.is_in_display_range() {
        warn!(
            "risk_score {} is outside the 0-100 display range; gauge will clamp",
            result.risk_score
        );
    }
    Ok(result)
}

#[derive(Debug, Serialize)]
struct AnalyzeRequest<'a> {
    message: &'a str,
    domain: &'a str,
}

#[derive(Debug, Deserialize)]
struct AnalyzeResponse {
    risk_score: f64,
    verdict: String,
    #[serde(default)]
    reasons: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct HealthResponse {
    message: String,
}
