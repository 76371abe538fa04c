/// Filtering strategy selected by the embedding application.
///
/// `Full` is used when an image-capable terminal is driving the session and
/// graphics-protocol responses are expected on stdin. `Light` only guards
/// against Alt+key encodings and never enters the CSI/OSC/DCS states.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    #[default]
    Full,
    Light,
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum State {
    #[default]
    Normal,
    Escape,
    Csi,
    Osc,
    OscEscape,
    DcsLike,
    DcsEscape,
    /// Unreachable through normal transitions; exists so the safety-net
    /// default arm in the transition table has a concrete origin.
    Nothing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Action {
    /// Pass the byte through to the actor unchanged.
    Emit,
    /// Append the byte to the pending sequence buffer.
    Buffer,
    /// The byte terminates a noise sequence: report it and clear the buffer.
    Discard(SeqFamily),
    /// Abandon the pending escape, then pass the byte through. Light mode
    /// uses this so UTF-8 continuation bytes survive a preceding ESC.
    Resume,
    /// Safety net for a corrupted state value: drop everything.
    Abort,
}

/// Family of a discarded escape sequence, used as the log tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeqFamily {
    AltKey,
    UnknownEscape,
    Csi,
    OscBel,
    OscEsc,
    DcsPmApc,
    Incomplete,
}

impl std::fmt::Display for SeqFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::AltKey => "alt_key",
            Self::UnknownEscape => "unknown_escape",
            Self::Csi => "csi",
            Self::OscBel => "osc_bel",
            Self::OscEsc => "osc_esc",
            Self::DcsPmApc => "dcs_pm_apc",
            Self::Incomplete => "incomplete",
        };
        f.write_str(name)
    }
}
