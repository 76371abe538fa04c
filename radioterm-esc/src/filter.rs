use std::time::Duration;

use log::warn;

use crate::actor::Actor;
use crate::enums::{Action, FilterMode, SeqFamily, State};
use crate::transitions;

/// The escape byte as an input code.
pub const ESC: u32 = 0x1b;

/// Escape-sequence noise filter.
///
/// One instance is driven code-by-code through [`Filter::advance`]. Byte-range
/// codes (0..=0xFF) run through the transition table; anything larger is a
/// curses special key or a pre-decoded codepoint and passes through verbatim
/// without disturbing an in-flight sequence.
///
/// A standalone Escape keypress is told apart from a sequence introducer by
/// timing: terminals deliver the bytes of a sequence back to back, while a
/// human's next keystroke arrives tens of milliseconds later. The caller
/// supplies a monotonic `now` with every code so the comparison is
/// deterministic under test.
pub struct Filter {
    mode: FilterMode,
    state: State,
    buffer: Vec<u8>,
    esc_seen: Option<Duration>,
    esc_threshold: Duration,
}

impl Filter {
    #[must_use]
    pub fn new(mode: FilterMode, esc_threshold: Duration) -> Self {
        Self {
            mode,
            state: State::default(),
            buffer: Vec::with_capacity(64),
            esc_seen: None,
            esc_threshold,
        }
    }

    pub fn mode(&self) -> FilterMode {
        self.mode
    }

    /// Switch the filtering strategy, dropping any pending sequence.
    pub fn set_mode(&mut self, mode: FilterMode) {
        self.mode = mode;
        self.state = State::Normal;
        self.buffer.clear();
        self.esc_seen = None;
    }

    /// Reset parse state ahead of a new burst.
    ///
    /// The escape timestamp deliberately survives: standalone-ESC detection
    /// compares against the moment the most recent ESC byte was seen, which
    /// may predate the reset.
    pub fn reset(&mut self) {
        self.state = State::Normal;
        self.buffer.clear();
    }

    /// Whether the filter is in its ground state with nothing buffered.
    pub fn is_idle(&self) -> bool {
        self.state == State::Normal && self.buffer.is_empty()
    }

    /// Run one input code through the transducer.
    ///
    /// Emits zero, one, or (when a pending ESC is flushed by the timing
    /// check) two codes to the actor.
    pub fn advance<A: Actor>(&mut self, code: u32, now: Duration, actor: &mut A) {
        if code > 0xff {
            actor.emit(code);
            return;
        }
        let byte = code as u8;

        if self.state == State::Escape {
            self.flush_stale_escape(now, actor);
        }

        let (next, action) = match self.mode {
            FilterMode::Full => transitions::transit(self.state, byte),
            FilterMode::Light => transitions::light_transit(self.state, byte),
        };

        if self.state == State::Normal && next == State::Escape {
            self.esc_seen = Some(now);
        }

        match action {
            Action::Emit => actor.emit(code),
            Action::Buffer => self.buffer.push(byte),
            Action::Discard(family) => {
                self.buffer.push(byte);
                actor.discard(family, &self.buffer);
                self.buffer.clear();
            },
            Action::Resume => {
                actor.discard(SeqFamily::UnknownEscape, &self.buffer);
                self.buffer.clear();
                actor.emit(code);
            },
            Action::Abort => {
                warn!("invalid filter state {:?}, resetting", self.state);
                self.buffer.clear();
            },
        }

        self.state = next;
    }

    /// Close out a burst: anything still buffered is a truncated sequence
    /// and is discarded, never re-emitted.
    pub fn finish<A: Actor>(&mut self, actor: &mut A) {
        if !self.buffer.is_empty() {
            actor.discard(SeqFamily::Incomplete, &self.buffer);
        }
        self.reset();
    }

    /// Emit a pending ESC as a real keypress if it has gone stale.
    fn flush_stale_escape<A: Actor>(&mut self, now: Duration, actor: &mut A) {
        let Some(seen) = self.esc_seen else {
            return;
        };

        if now.saturating_sub(seen) > self.esc_threshold {
            actor.emit(ESC);
            self.state = State::Normal;
            self.buffer.clear();
            self.esc_seen = None;
        }
    }
}
