use std::collections::VecDeque;
use std::time::Duration;

/// Pollable source of raw input codes.
///
/// Implementations wrap whatever the terminal layer provides (a curses
/// `getch` in non-blocking mode, a PTY reader, a test script). A code is
/// either a byte (0..=0xFF), a curses special key, or a pre-decoded Unicode
/// codepoint; the classifier tells them apart by range.
pub trait PollSource {
    /// Return the next available code, waiting at most `timeout` for one.
    ///
    /// `None` means no input arrived within the timeout and the current
    /// burst is complete.
    fn poll(&mut self, timeout: Duration) -> Option<u32>;
}

/// In-memory source serving codes from a queue.
///
/// Used by the examples and by tests; `poll` returns immediately regardless
/// of the timeout.
#[derive(Debug, Default)]
pub struct QueueSource {
    codes: VecDeque<u32>,
}

impl QueueSource {
    #[must_use]
    pub fn new<I: IntoIterator<Item = u32>>(codes: I) -> Self {
        Self { codes: codes.into_iter().collect() }
    }

    pub fn push(&mut self, code: u32) {
        self.codes.push_back(code);
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

impl PollSource for QueueSource {
    fn poll(&mut self, _timeout: Duration) -> Option<u32> {
        self.codes.pop_front()
    }
}
