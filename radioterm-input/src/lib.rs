//! Burst classification of raw terminal input.
//!
//! The UI event loop of the player polls the terminal once per iteration and
//! receives a burst of raw codes: ASCII bytes, UTF-8 fragments, curses
//! special keys, or whole escape sequences leaked onto stdin by the terminal
//! or by image helpers. [`InputClassifier`] drains one burst per call and
//! reduces it to at most one key event, delegating byte-level sequence
//! absorption to the `radioterm-esc` state machine.
//!
//! The classifier is single-threaded by design: one instance, owned by the
//! polling loop, invoked synchronously. The only suspension point is the
//! bounded wait on the [`PollSource`].

mod classifier;
mod clock;
mod config;
mod patterns;
mod poll;

pub use classifier::{
    ClassifiedKey, InputClassifier, KeyKind, SPECIAL_KEY_MAX, SPECIAL_KEY_MIN,
};
pub use clock::{Clock, MonotonicClock};
pub use config::{ConfigError, ESC_DELAY_SLACK, FilterConfig};
pub use poll::{PollSource, QueueSource};
