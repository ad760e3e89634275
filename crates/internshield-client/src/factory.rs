use std::sync::Arc;

use crate::config::ScoringClientConfig;
use crate::error::ScoringError;
use crate::providers::HttpScoringClient;
use crate::traits::ScoringClient;

pub fn build_scoring_client(
    cfg: ScoringClientConfig,
) -> Result<Arc<dyn ScoringClient>, ScoringError> {
    match cfg {
        ScoringClientConfig::Http(c) => Ok(Arc::new(HttpScoringClient::new(c)?)),
    }
}
