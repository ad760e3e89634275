use internshield_client::ScoreRequest;
use internshield_core::RiskResult;
use log::{debug, info, warn};
use thiserror::Error;

pub const EMPTY_INPUT_NOTICE: &str = "Please enter a domain or message to verify";
pub const NETWORK_NOTICE: &str = "Backend not running or network error";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Generation(u64);

impl Generation {
    pub fn value(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Backend not running or network error: {detail}")]
pub struct NetworkError {
    pub detail: String,
}

impl NetworkError {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("Please enter a domain or message to verify")]
    EmptyInput,

    #[error("a notice is open and must be dismissed first")]
    NoticeOpen,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Pending,
    Settled(RiskResult),
    Failed(NetworkError),
}

impl SubmissionState {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Pending => "pending",
            Self::Settled(_) => "settled",
            Self::Failed(_) => "failed",
        }
    }

    pub fn result(&self) -> Option<&RiskResult> {
        match self {
            Self::Settled(result) => Some(result),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub enum ControllerEvent {
    Submit {
        message: String,
        domain: String,
    },
    Completed {
        generation: Generation,
        outcome: Result<RiskResult, NetworkError>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ticket {
    pub generation: Generation,
    pub request: ScoreRequest,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    Rejected(SubmitError),
    Issued(Ticket),
    Settled(Generation),
    Failed(Generation, NetworkError),
    Discarded {
        generation: Generation,
        latest: Generation,
    },
}

#[derive(Debug, Default)]
pub struct RequestController {
    state: SubmissionState,
    latest_issued: u64,
    settled_through: u64,
}

impl RequestController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, SubmissionState::Pending)
    }

    pub fn apply(&mut self, event: ControllerEvent) -> Transition {
        match event {
            ControllerEvent::Submit { message, domain } => match self.begin(message, domain) {
                Ok(ticket) => Transition::Issued(ticket),
                Err(err) => Transition::Rejected(err),
            },
            ControllerEvent::Completed {
                generation,
                outcome,
            } => self.complete(generation, outcome),
        }
    }

    pub fn begin(
        &mut self,
        message: impl Into<String>,
        domain: impl Into<String>,
    ) -> Result<Ticket, SubmitError> {
        let request = ScoreRequest::new(message, domain);
        if request.is_empty() {
            return Err(SubmitError::EmptyInput);
        }

        self.latest_issued = self.latest_issued.saturating_add(1);
        let generation = Generation(self.latest_issued);
        self.state = SubmissionState::Pending;
        debug!("issued scoring request generation {}", generation.value());
        Ok(Ticket {
            generation,
            request,
        })
    }

    pub fn complete(
        &mut self,
        generation: Generation,
        outcome: Result<RiskResult, NetworkError>,
    ) -> Transition {
        if generation.0 != self.latest_issued || self.settled_through >= generation.0 {
            let latest = Generation(self.latest_issued);
            info!(
                "discarding completion for generation {} (latest is {})",
                generation.0, latest.0
            );
            return Transition::Discarded { generation, latest };
        }

        self.settled_through = generation.0;
        match outcome {
            Ok(result) => {
                debug!(
                    "generation {} settled with score {} ({})",
                    generation.0, result.risk_score, result.verdict
                );
                self.state = SubmissionState::Settled(result);
                Transition::Settled(generation)
            }
            Err(err) => {
                warn!("generation {} failed: {}", generation.0, err.detail);
                self.state = SubmissionState::Failed(err.clone());
                Transition::Failed(generation, err)
            }
        }
    }
}
