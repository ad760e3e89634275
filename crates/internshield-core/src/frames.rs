use std::collections::VecDeque;

use crate::animation::RunToken;

#[derive(Debug, Default)]
pub struct FrameQueue {
    pending: VecDeque<RunToken>,
}

impl FrameQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&mut self, token: RunToken) {
        self.pending.push_back(token);
    }

    // Callbacks requested while these run wait for the following frame.
    pub fn take_due(&mut self) -> Vec<RunToken> {
        self.pending.drain(..).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
