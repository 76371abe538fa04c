use std::time::Duration;

use log::debug;
use radioterm_esc::{Actor, ESC, Filter, FilterMode, SeqFamily, decode_single};

use crate::clock::{Clock, MonotonicClock};
use crate::config::FilterConfig;
use crate::patterns::PatternTable;
use crate::poll::PollSource;

/// First code of the curses special-key range (`KEY_MIN`).
pub const SPECIAL_KEY_MIN: u32 = 0x100;

/// Last code of the curses special-key range.
pub const SPECIAL_KEY_MAX: u32 = 0x1ff;

/// What kind of input a classified code represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    /// A plain byte: ASCII or a surviving single byte.
    RawByte,
    /// A full Unicode scalar value, either decoded from a UTF-8 burst or
    /// pre-decoded by a lower layer.
    Unicode,
    /// A curses special key (arrows, function keys, resize, ...).
    SpecialKey,
}

/// One key event produced from a burst.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifiedKey {
    pub code: u32,
    pub kind: KeyKind,
}

impl ClassifiedKey {
    fn tag(code: u32) -> Self {
        let kind = match code {
            0..=0xff => KeyKind::RawByte,
            SPECIAL_KEY_MIN..=SPECIAL_KEY_MAX => KeyKind::SpecialKey,
            _ => KeyKind::Unicode,
        };
        Self { code, kind }
    }
}

/// Sink for the state-machine pass.
///
/// Emitted codes are collected for the caller; discarded sequences are run
/// through the diagnostic pattern table and logged. The pattern result never
/// feeds back into what is emitted.
struct Performer<'a> {
    outputs: Vec<u32>,
    patterns: &'a PatternTable,
}

impl Actor for Performer<'_> {
    fn emit(&mut self, code: u32) {
        self.outputs.push(code);
    }

    fn discard(&mut self, family: SeqFamily, bytes: &[u8]) {
        match self.patterns.classify(bytes) {
            Some(tag) => debug!("discarded {family} sequence ({tag}): {bytes:02x?}"),
            None => debug!("discarded {family} sequence: {bytes:02x?}"),
        }
    }
}

/// Reduces one polled burst of raw input codes to at most one key event.
///
/// Owned exclusively by the UI polling loop and invoked synchronously once
/// per iteration; reentrant or concurrent use is not supported.
pub struct InputClassifier<C: Clock = MonotonicClock> {
    filter: Filter,
    patterns: PatternTable,
    clock: C,
    poll_timeout: Duration,
}

impl InputClassifier<MonotonicClock> {
    #[must_use]
    pub fn new(config: FilterConfig) -> Self {
        Self::with_clock(config, MonotonicClock::default())
    }
}

impl<C: Clock> InputClassifier<C> {
    /// Build a classifier with an injected clock, mainly for deterministic
    /// timing in tests.
    #[must_use]
    pub fn with_clock(config: FilterConfig, clock: C) -> Self {
        let mode = mode_for(config.full_mode);
        Self {
            filter: Filter::new(mode, config.esc_threshold()),
            patterns: patterns_for(mode),
            clock,
            poll_timeout: config.poll_timeout,
        }
    }

    /// Select full or light filtering.
    ///
    /// Resets the state machine, drops any pending sequence, and swaps in
    /// the pattern set for the new mode. Calling this with the current mode
    /// is a no-op apart from the reset.
    pub fn configure(&mut self, full_mode: bool) {
        let mode = mode_for(full_mode);
        self.filter.set_mode(mode);
        self.patterns = patterns_for(mode);
    }

    /// Adjust the bounded wait used when collecting a burst.
    pub fn set_timeout(&mut self, timeout: Duration) {
        self.poll_timeout = timeout;
    }

    /// Drain the current burst and reduce it to at most one key event.
    ///
    /// Safe to call with no pending input; returns `None` for an empty
    /// burst or for a burst consumed entirely as noise. On return the state
    /// machine is back in its ground state with an empty buffer.
    pub fn drain_and_classify<S: PollSource>(&mut self, source: &mut S) -> Option<ClassifiedKey> {
        let burst = self.collect_burst(source);
        self.filter.reset();

        if burst.is_empty() {
            return None;
        }

        // A lone ESC with nothing behind it is a deliberate Escape press.
        if burst == [ESC] {
            return Some(ClassifiedKey { code: ESC, kind: KeyKind::RawByte });
        }

        // Raw-byte subsequence: special keys and pre-decoded codepoints are
        // excluded so they cannot corrupt the UTF-8 candidate.
        let raw: Vec<u8> = burst
            .iter()
            .filter(|&&code| code <= 0xff)
            .map(|&code| code as u8)
            .collect();

        // Fast path for one typed multi-byte character.
        if let Some(c) = decode_single(&raw) {
            return Some(ClassifiedKey { code: c as u32, kind: KeyKind::Unicode });
        }

        // Pattern pass, diagnostics only.
        if let Some(tag) = self.patterns.classify(&raw) {
            debug!("burst matches noise family {tag}");
        }

        // State-machine pass, the sole authority on what is emitted.
        let mut performer = Performer { outputs: Vec::new(), patterns: &self.patterns };
        for &code in &burst {
            let now = self.clock.now();
            self.filter.advance(code, now, &mut performer);
        }
        self.filter.finish(&mut performer);

        performer.outputs.first().map(|&code| ClassifiedKey::tag(code))
    }

    /// Throw away everything currently buffered, without classification.
    ///
    /// Used to resynchronize after a disruptive event such as a terminal
    /// resize.
    pub fn quick_drain<S: PollSource>(&mut self, source: &mut S) {
        while source.poll(Duration::ZERO).is_some() {}
        self.filter.reset();
    }

    fn collect_burst<S: PollSource>(&mut self, source: &mut S) -> Vec<u32> {
        let mut burst = Vec::new();
        while let Some(code) = source.poll(self.poll_timeout) {
            burst.push(code);
        }
        burst
    }
}

fn mode_for(full_mode: bool) -> FilterMode {
    if full_mode { FilterMode::Full } else { FilterMode::Light }
}

fn patterns_for(mode: FilterMode) -> PatternTable {
    match mode {
        FilterMode::Full => PatternTable::full(),
        FilterMode::Light => PatternTable::light(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::poll::QueueSource;

    /// Clock advancing by a fixed step on every read.
    struct ManualClock {
        now: Duration,
        step: Duration,
    }

    impl ManualClock {
        fn instant() -> Self {
            Self { now: Duration::ZERO, step: Duration::ZERO }
        }

        fn stepping(step: Duration) -> Self {
            Self { now: Duration::ZERO, step }
        }
    }

    impl Clock for ManualClock {
        fn now(&mut self) -> Duration {
            let now = self.now;
            self.now += self.step;
            now
        }
    }

    fn classifier() -> InputClassifier<ManualClock> {
        InputClassifier::with_clock(FilterConfig::default(), ManualClock::instant())
    }

    fn classify(
        classifier: &mut InputClassifier<ManualClock>,
        codes: &[u32],
    ) -> Option<ClassifiedKey> {
        let mut source = QueueSource::new(codes.iter().copied());
        classifier.drain_and_classify(&mut source)
    }

    fn bytes(s: &[u8]) -> Vec<u32> {
        s.iter().map(|&b| u32::from(b)).collect()
    }

    #[test]
    fn empty_burst_is_no_input() {
        let mut c = classifier();
        assert_eq!(classify(&mut c, &[]), None);
    }

    #[test]
    fn standalone_esc_is_a_keypress() {
        let mut c = classifier();
        assert_eq!(
            classify(&mut c, &[ESC]),
            Some(ClassifiedKey { code: ESC, kind: KeyKind::RawByte })
        );
    }

    #[test]
    fn ordinary_character_passes_through() {
        let mut c = classifier();
        assert_eq!(
            classify(&mut c, &bytes(b"q")),
            Some(ClassifiedKey { code: u32::from(b'q'), kind: KeyKind::RawByte })
        );
    }

    #[test]
    fn alt_key_is_absorbed_in_both_modes() {
        let mut c = classifier();
        assert_eq!(classify(&mut c, &bytes(b"\x1ba")), None);

        c.configure(false);
        assert_eq!(classify(&mut c, &bytes(b"\x1ba")), None);
    }

    #[test]
    fn csi_burst_is_absorbed() {
        let mut c = classifier();
        assert_eq!(classify(&mut c, &bytes(b"\x1b[1;5A")), None);
    }

    #[test]
    fn osc_burst_is_absorbed() {
        let mut c = classifier();
        assert_eq!(classify(&mut c, &bytes(b"\x1b]0;title\x07")), None);
    }

    #[test]
    fn kitty_graphics_response_is_absorbed() {
        let mut c = classifier();
        assert_eq!(classify(&mut c, &bytes(b"\x1b_Gi=31;OK\x1b\\")), None);
    }

    #[test]
    fn utf8_burst_decodes_to_one_codepoint() {
        let mut c = classifier();
        assert_eq!(
            classify(&mut c, &[0xe2, 0x82, 0xac]),
            Some(ClassifiedKey { code: 0x20ac, kind: KeyKind::Unicode })
        );
    }

    #[test]
    fn special_key_is_tagged() {
        let mut c = classifier();
        // Curses KEY_NPAGE.
        assert_eq!(
            classify(&mut c, &[0x152]),
            Some(ClassifiedKey { code: 0x152, kind: KeyKind::SpecialKey })
        );
    }

    #[test]
    fn special_key_does_not_corrupt_utf8_candidate() {
        let mut c = classifier();
        assert_eq!(
            classify(&mut c, &[0xe2, 0x82, 0xac, 0x152]),
            Some(ClassifiedKey { code: 0x20ac, kind: KeyKind::Unicode })
        );
    }

    #[test]
    fn predecoded_codepoint_is_tagged_unicode() {
        let mut c = classifier();
        assert_eq!(
            classify(&mut c, &[0x263a]),
            Some(ClassifiedKey { code: 0x263a, kind: KeyKind::Unicode })
        );
    }

    #[test]
    fn slow_esc_is_a_keypress_not_a_prefix() {
        // 40 ms between codes, against a 25 + 5 ms threshold: the ESC was a
        // deliberate press, the letter a separate keystroke.
        let mut c = InputClassifier::with_clock(
            FilterConfig::default(),
            ManualClock::stepping(Duration::from_millis(40)),
        );
        assert_eq!(
            classify(&mut c, &bytes(b"\x1ba")),
            Some(ClassifiedKey { code: ESC, kind: KeyKind::RawByte })
        );
    }

    #[test]
    fn light_mode_lets_high_bytes_survive_an_esc() {
        let mut c = classifier();
        c.configure(false);
        assert_eq!(
            classify(&mut c, &[0x1b, 0xc3, 0xa9]),
            Some(ClassifiedKey { code: 0xc3, kind: KeyKind::RawByte })
        );
    }

    #[test]
    fn configure_is_idempotent() {
        let mut once = classifier();
        once.configure(true);

        let mut twice = classifier();
        twice.configure(true);
        twice.configure(true);

        for burst in [&bytes(b"\x1b[1;5A")[..], &bytes(b"q")[..], &[ESC][..]] {
            assert_eq!(classify(&mut once, burst), classify(&mut twice, burst));
        }
    }

    #[test]
    fn mode_toggling_round_trips() {
        let mut toggled = classifier();
        toggled.configure(true);
        toggled.configure(false);
        toggled.configure(true);

        let mut fresh = classifier();

        for burst in [
            &bytes(b"\x1b[1;5A")[..],
            &bytes(b"\x1b]0;x\x07")[..],
            &bytes(b"\x1ba")[..],
            &bytes(b"q")[..],
            &[0xe2, 0x82, 0xac][..],
        ] {
            assert_eq!(classify(&mut toggled, burst), classify(&mut fresh, burst));
        }
    }

    #[test]
    fn quick_drain_discards_everything() {
        let mut c = classifier();
        let mut source = QueueSource::new(bytes(b"\x1b[1;5Aqrs"));
        c.quick_drain(&mut source);
        assert!(source.is_empty());
        assert_eq!(c.drain_and_classify(&mut source), None);
    }

    #[test]
    fn truncated_sequence_yields_no_input() {
        let mut c = classifier();
        assert_eq!(classify(&mut c, &bytes(b"\x1b[12")), None);
    }
}
