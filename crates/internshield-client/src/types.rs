#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreRequest {
    pub message: String,
    pub domain: String,
}

impl ScoreRequest {
    pub fn new(message: impl Into<String>, domain: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            domain: domain.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.message.is_empty() && self.domain.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceHealth {
    pub provider: String,
    pub message: String,
}
