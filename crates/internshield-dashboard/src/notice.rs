use crate::controller::{EMPTY_INPUT_NOTICE, NETWORK_NOTICE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    EmptyInput,
    Network,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn empty_input() -> Self {
        Self {
            kind: NoticeKind::EmptyInput,
            message: EMPTY_INPUT_NOTICE.to_string(),
        }
    }

    pub fn network() -> Self {
        Self {
            kind: NoticeKind::Network,
            message: NETWORK_NOTICE.to_string(),
        }
    }
}

#[derive(Debug, Default)]
pub struct NoticeChannel {
    open: Option<Notice>,
}

impl NoticeChannel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raise(&mut self, notice: Notice) {
        self.open = Some(notice);
    }

    pub fn current(&self) -> Option<&Notice> {
        self.open.as_ref()
    }

    pub fn is_blocking(&self) -> bool {
        self.open.is_some()
    }

    pub fn dismiss(&mut self) -> Option<Notice> {
        self.open.take()
    }
}
