//! Diagnostic pattern table for discarded sequences.
//!
//! These matchers exist purely so the log can name the noise family being
//! thrown away; they never decide what is emitted. The state machine in
//! `radioterm-esc` is the sole authority on accept/reject.

use log::warn;
use regex::bytes::Regex;

/// Empirical patterns for the sequences image-capable terminals are known to
/// leak: kitty icat transfer acknowledgements, kitty numeric status reports,
/// CSI key/position reports, and CSI fragments whose leading ESC was eaten
/// elsewhere.
const FULL_PATTERNS: &[(&str, &str)] = &[
    ("kitty_graphics_status", r"(?-u)^\x1b_Gi=\d+(?:,\w+=\w+)*;[^\x1b]*\x1b\\$"),
    ("kitty_graphics_response", r"(?s-u)^\x1b_G.*\x1b\\$"),
    ("csi_report", r"(?-u)^\x1b\[\??\d+(?:;\d+)*[A-Za-z~]$"),
    ("bare_csi_fragment", r"(?-u)^\[\??\d*(?:;\d+)*[A-Za-z~]$"),
    ("alt_key", r"(?-u)^\x1b[\x20-\x7e]$"),
];

/// Light mode only ever absorbs Alt+key pairs.
const LIGHT_PATTERNS: &[(&str, &str)] = &[("alt_key", r"(?-u)^\x1b[\x20-\x7e]$")];

/// Instance-owned, precompiled matcher set. Built once per `configure`; no
/// process-wide caches.
pub(crate) struct PatternTable {
    entries: Vec<(&'static str, Regex)>,
}

impl PatternTable {
    pub(crate) fn full() -> Self {
        Self::compile(FULL_PATTERNS)
    }

    pub(crate) fn light() -> Self {
        Self::compile(LIGHT_PATTERNS)
    }

    fn compile(patterns: &[(&'static str, &str)]) -> Self {
        let entries = patterns
            .iter()
            .filter_map(|&(tag, pattern)| match Regex::new(pattern) {
                Ok(re) => Some((tag, re)),
                Err(err) => {
                    warn!("skipping unparsable noise pattern {tag}: {err}");
                    None
                },
            })
            .collect();

        Self { entries }
    }

    /// Name the first known noise family matching `bytes`, if any.
    pub(crate) fn classify(&self, bytes: &[u8]) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(_, re)| re.is_match(bytes))
            .map(|&(tag, _)| tag)
    }
}
