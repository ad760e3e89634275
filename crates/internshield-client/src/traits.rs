use async_trait::async_trait;
use internshield_core::RiskResult;

use crate::error::ScoringError;
use crate::types::{ScoreRequest, ServiceHealth};

#[async_trait]
pub trait ScoringClient: Send + Sync {
    fn name(&self) -> &'static str;

    async fn analyze(&self, request: ScoreRequest) -> Result<RiskResult, ScoringError>;

    async fn health(&self) -> Result<ServiceHealth, ScoringError>;
}
