#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

/// Outcome flavor of a notice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Failure,
}

/// A user-facing notice produced by a form submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

/// Shared notice state; at most one notice is visible at a time.
///
/// Each submit handler produces exactly one notice, replacing whatever
/// was shown before.
#[derive(Clone, Debug, Default)]
pub struct NoticeState {
    pub current: Option<Notice>,
}

impl NoticeState {
    /// Show a success notice, replacing the current one.
    pub fn success(&mut self, text: impl Into<String>) {
        self.current = Some(Notice {
            kind: NoticeKind::Success,
            text: text.into(),
        });
    }

    /// Show a failure notice, replacing the current one.
    pub fn failure(&mut self, text: impl Into<String>) {
        self.current = Some(Notice {
            kind: NoticeKind::Failure,
            text: text.into(),
        });
    }

    /// Dismiss the visible notice.
    pub fn clear(&mut self) {
        self.current = None;
    }
}
