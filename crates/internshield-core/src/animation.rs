use std::time::Duration;

pub const ANIMATION_DURATION: Duration = Duration::from_millis(1000);

pub fn ease_out_cubic(progress: f64) -> f64 {
    let p = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(3)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RunToken(u64);

impl RunToken {
    pub fn value(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnimationRun {
    pub token: RunToken,
    pub start_value: f64,
    pub target_value: f64,
    pub started_at: Duration,
    pub duration: Duration,
}

impl AnimationRun {
    pub fn progress(&self, now: Duration) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_sub(self.started_at);
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    #[allow(clippy::cast_possible_truncation)]
    pub fn value_at(&self, now: Duration) -> i64 {
        let ease = ease_out_cubic(self.progress(now));
        (self.start_value + (self.target_value - self.start_value) * ease).floor() as i64
    }

    pub fn is_complete(&self, now: Duration) -> bool {
        self.progress(now) >= 1.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Continue(i64),
    Finished(i64),
    Stale,
}

#[derive(Debug)]
pub struct GaugeAnimator {
    active: Option<AnimationRun>,
    next_token: u64,
    displayed: i64,
    duration: Duration,
}

impl Default for GaugeAnimator {
    fn default() -> Self {
        Self::new()
    }
}

impl GaugeAnimator {
    pub fn new() -> Self {
        Self::with_duration(ANIMATION_DURATION)
    }

    pub fn with_duration(duration: Duration) -> Self {
        Self {
            active: None,
            next_token: 0,
            displayed: 0,
            duration,
        }
    }

    pub fn start_run(&mut self, target: f64, now: Duration) -> RunToken {
        self.next_token = self.next_token.wrapping_add(1);
        let token = RunToken(self.next_token);
        self.active = Some(AnimationRun {
            token,
            start_value: 0.0,
            target_value: target,
            started_at: now,
            duration: self.duration,
        });
        self.displayed = 0;
        token
    }

    pub fn on_frame(&mut self, token: RunToken, now: Duration) -> FrameOutcome {
        let Some(run) = self.active.as_ref().filter(|run| run.token == token) else {
            return FrameOutcome::Stale;
        };

        let value = run.value_at(now);
        let done = run.is_complete(now);
        self.displayed = value;
        if done {
            self.active = None;
            FrameOutcome::Finished(value)
        } else {
            FrameOutcome::Continue(value)
        }
    }

    pub fn reset(&mut self) {
        self.active = None;
        self.displayed = 0;
    }

    pub fn displayed(&self) -> i64 {
        self.displayed
    }
}
