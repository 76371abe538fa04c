//! Transition tables for the escape-sequence noise filter.
//!
//! Each function covers one parser state: given an input byte it returns the
//! next [`State`] and the [`Action`] the filter should perform. Keeping the
//! tables as `const fn`s makes it straightforward to audit coverage for the
//! sequence families that terminals leak onto stdin (Alt+key encodings, CSI
//! reports, OSC replies, DCS/PM/APC strings).

use crate::enums::{Action, SeqFamily, State};

pub(crate) const ESC_BYTE: u8 = 0x1b;
const BEL: u8 = 0x07;
const ST_FINAL: u8 = b'\\';

/// Ground state: everything except ESC is a legitimate keystroke.
#[inline(always)]
const fn normal(byte: u8) -> (State, Action) {
    use Action::*;
    use State::*;

    match byte {
        ESC_BYTE => (Escape, Buffer),
        _ => (Normal, Emit),
    }
}

/// ESC seen, waiting for the byte that identifies the sequence family.
#[inline(always)]
const fn escape(byte: u8) -> (State, Action) {
    use Action::*;
    use State::*;

    match byte {
        0x5b => (Csi, Buffer),
        0x5d => (Osc, Buffer),
        // DCS / PM / APC introducers. `P` must be routed before the
        // alphabetic Alt+key check below.
        0x50 | 0x5e | 0x5f => (DcsLike, Buffer),
        b'a'..=b'z' | b'A'..=b'Z' => (Normal, Discard(SeqFamily::AltKey)),
        _ => (Normal, Discard(SeqFamily::UnknownEscape)),
    }
}

/// CSI parameter collection until a final byte arrives.
///
/// The final-byte range 0x40..=0x7E also covers `u`, the kitty keyboard
/// protocol terminator, so extended key reports are absorbed here too.
#[inline(always)]
const fn csi(byte: u8) -> (State, Action) {
    use Action::*;
    use State::*;

    match byte {
        0x40..=0x7e => (Normal, Discard(SeqFamily::Csi)),
        _ => (Csi, Buffer),
    }
}

/// OSC payload collection until BEL or ST.
#[inline(always)]
const fn osc(byte: u8) -> (State, Action) {
    use Action::*;
    use State::*;

    match byte {
        BEL => (Normal, Discard(SeqFamily::OscBel)),
        ESC_BYTE => (OscEscape, Buffer),
        _ => (Osc, Buffer),
    }
}

/// ESC observed inside an OSC payload; only `\` completes the terminator.
#[inline(always)]
const fn osc_escape(byte: u8) -> (State, Action) {
    use Action::*;
    use State::*;

    match byte {
        ST_FINAL => (Normal, Discard(SeqFamily::OscEsc)),
        _ => (Osc, Buffer),
    }
}

/// DCS/PM/APC payload collection; these families terminate on ST only.
#[inline(always)]
const fn dcs_like(byte: u8) -> (State, Action) {
    use Action::*;
    use State::*;

    match byte {
        ESC_BYTE => (DcsEscape, Buffer),
        _ => (DcsLike, Buffer),
    }
}

/// ESC observed inside a DCS-like payload.
#[inline(always)]
const fn dcs_escape(byte: u8) -> (State, Action) {
    use Action::*;
    use State::*;

    match byte {
        ST_FINAL => (Normal, Discard(SeqFamily::DcsPmApc)),
        _ => (DcsLike, Buffer),
    }
}

/// Full-mode transition table.
#[inline(always)]
pub(crate) const fn transit(state: State, byte: u8) -> (State, Action) {
    use State::*;

    match state {
        Normal => normal(byte),
        Escape => escape(byte),
        Csi => csi(byte),
        Osc => osc(byte),
        OscEscape => osc_escape(byte),
        DcsLike => dcs_like(byte),
        DcsEscape => dcs_escape(byte),
        _ => (Normal, Action::Abort),
    }
}

/// Light-mode ESC follower handling.
///
/// Printable ASCII after ESC is an Alt+key combination and is dropped with
/// the ESC. Anything else keeps the byte alive: high bytes would otherwise
/// corrupt an in-flight UTF-8 sequence, and control bytes are passed through
/// as a best-effort fallback.
#[inline(always)]
const fn light_escape(byte: u8) -> (State, Action) {
    use Action::*;
    use State::*;

    match byte {
        0x20..=0x7e => (Normal, Discard(SeqFamily::AltKey)),
        _ => (Normal, Resume),
    }
}

/// Light-mode transition table: two states, no CSI/OSC/DCS tracking.
#[inline(always)]
pub(crate) const fn light_transit(state: State, byte: u8) -> (State, Action) {
    use State::*;

    match state {
        Normal => normal(byte),
        Escape => light_escape(byte),
        _ => (Normal, Action::Abort),
    }
}
