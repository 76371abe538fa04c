//! Callbacks invoked by the noise filter.
//!
//! The [`Filter`](crate::filter::Filter) walks through a stream of input
//! codes and either lets them through or swallows them as part of an escape
//! sequence. Both outcomes are reported to an [`Actor`] implementation owned
//! by the embedding application, which decides what emitted codes mean and
//! how discarded sequences are logged. Implementations must not perform
//! additional sequence parsing themselves; the filter is the sole authority
//! on what is emitted.

use crate::enums::SeqFamily;

pub trait Actor {
    /// A code survived filtering and should be treated as real input.
    ///
    /// Codes above 0xFF (curses special keys, pre-decoded codepoints) are
    /// always emitted verbatim; byte-range codes are emitted when they are
    /// not part of an escape sequence.
    fn emit(&mut self, code: u32);

    /// A complete noise sequence was absorbed.
    ///
    /// `bytes` holds the full sequence including its introducer and
    /// terminator. The bytes are gone for good; this callback exists for
    /// diagnostics only.
    fn discard(&mut self, family: SeqFamily, bytes: &[u8]);
}
