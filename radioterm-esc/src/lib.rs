//! Byte-level noise filter for terminal input streams.
//!
//! Terminal emulators and image-display helpers answer capability queries by
//! writing escape sequences back onto the input stream (kitty graphics
//! responses, OSC title replies, DCS/PM/APC reports, stray CSI fragments).
//! When those land in the keyboard buffer of a full-screen application they
//! show up as garbage keystrokes. This crate implements the finite-state
//! transducer that absorbs those sequences while passing legitimate key
//! presses through untouched: bytes are fed in one at a time and emitted,
//! buffered, or discarded according to a table of per-state transitions.
//!
//! The transducer is deliberately policy-free: it reports every emitted code
//! and every discarded sequence to an [`Actor`] supplied by the caller, which
//! owns logging and diagnostics. The higher level burst classifier lives in
//! `radioterm-input`.

mod actor;
mod enums;
mod filter;
mod transitions;
mod utf8;

pub use actor::Actor;
pub use enums::{FilterMode, SeqFamily};
pub use filter::{ESC, Filter};
pub use utf8::decode_single;
