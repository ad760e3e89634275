use std::sync::Arc;

use internshield_client::{ScoringClient, ScoringError};
use internshield_core::{Clock, FrameOutcome, FrameQueue, GaugeAnimator, RiskResult};
use log::debug;
use tokio::sync::mpsc;

use crate::controller::{
    Generation, NetworkError, RequestController, SubmissionState, SubmitError, Transition,
};
use crate::notice::{Notice, NoticeChannel};
use crate::view::{DashboardView, derive_view};

struct Completion {
    generation: Generation,
    outcome: Result<RiskResult, ScoringError>,
}

// `submit` spawns onto the current tokio runtime.
pub struct Dashboard {
    controller: RequestController,
    animator: GaugeAnimator,
    frames: FrameQueue,
    notices: NoticeChannel,
    client: Arc<dyn ScoringClient>,
    clock: Box<dyn Clock>,
    completions_tx: mpsc::UnboundedSender<Completion>,
    completions_rx: mpsc::UnboundedReceiver<Completion>,
}

impl Dashboard {
    pub fn new(client: Arc<dyn ScoringClient>, clock: Box<dyn Clock>) -> Self {
        Self::with_animator(client, clock, GaugeAnimator::new())
    }

    pub fn with_animator(
        client: Arc<dyn ScoringClient>,
        clock: Box<dyn Clock>,
        animator: GaugeAnimator,
    ) -> Self {
        let (completions_tx, completions_rx) = mpsc::unbounded_channel();
        Self {
            controller: RequestController::new(),
            animator,
            frames: FrameQueue::new(),
            notices: NoticeChannel::new(),
            client,
            clock,
            completions_tx,
            completions_rx,
        }
    }

    pub fn submit(&mut self, message: &str, domain: &str) -> Result<Generation, SubmitError> {
        if self.notices.is_blocking() {
            return Err(SubmitError::NoticeOpen);
        }

        let ticket = self.controller.begin(message, domain).inspect_err(|err| {
            if *err == SubmitError::EmptyInput {
                self.notices.raise(Notice::empty_input());
            }
        })?;

        // Hide the previous gauge while the new request is in flight.
        self.animator.reset();

        let client = Arc::clone(&self.client);
        let tx = self.completions_tx.clone();
        let generation = ticket.generation;
        tokio::spawn(async move {
            let outcome = client.analyze(ticket.request).await;
            // The receiver lives as long as the dashboard; a send error only
            // means the dashboard is gone.
            let _ = tx.send(Completion {
                generation,
                outcome,
            });
        });
        Ok(generation)
    }

    pub fn poll_io(&mut self) -> Vec<Transition> {
        let mut applied = Vec::new();
        while let Ok(completion) = self.completions_rx.try_recv() {
            applied.push(self.apply_completion(completion));
        }
        applied
    }

    pub async fn next_completion(&mut self) -> Option<Transition> {
        let completion = self.completions_rx.recv().await?;
        Some(self.apply_completion(completion))
    }

    fn apply_completion(&mut self, completion: Completion) -> Transition {
        let outcome = completion
            .outcome
            .map_err(|err| NetworkError::new(err.to_string()));
        let transition = self.controller.complete(completion.generation, outcome);
        match &transition {
            Transition::Settled(_) => {
                if let Some(result) = self.controller.state().result() {
                    let token = self.animator.start_run(result.risk_score, self.clock.now());
                    self.frames.request(token);
                }
            }
            Transition::Failed(_, _) => {
                self.notices.raise(Notice::network());
            }
            Transition::Discarded { .. } | Transition::Issued(_) | Transition::Rejected(_) => {}
        }
        transition
    }

    pub fn on_frame(&mut self) -> Option<i64> {
        let now = self.clock.now();
        let mut produced = None;
        for token in self.frames.take_due() {
            match self.animator.on_frame(token, now) {
                FrameOutcome::Continue(value) => {
                    self.frames.request(token);
                    produced = Some(value);
                }
                FrameOutcome::Finished(value) => produced = Some(value),
                FrameOutcome::Stale => {
                    debug!("dropped frame for superseded run {}", token.value());
                }
            }
        }
        produced
    }

    pub fn is_animating(&self) -> bool {
        !self.frames.is_empty()
    }

    pub fn state(&self) -> &SubmissionState {
        self.controller.state()
    }

    pub fn is_pending(&self) -> bool {
        self.controller.is_pending()
    }

    pub fn displayed_score(&self) -> i64 {
        self.animator.displayed()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notices.current()
    }

    pub fn dismiss_notice(&mut self) -> Option<Notice> {
        self.notices.dismiss()
    }

    pub fn view(&self) -> DashboardView {
        derive_view(
            self.controller.state(),
            self.animator.displayed(),
            self.notices.current(),
        )
    }
}
