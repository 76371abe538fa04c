use utf8parse::Receiver;

#[derive(Default)]
struct Decoder {
    codepoints: usize,
    last: Option<char>,
    invalid: bool,
}

impl Receiver for Decoder {
    fn codepoint(&mut self, c: char) {
        self.codepoints += 1;
        self.last = Some(c);
    }

    fn invalid_sequence(&mut self) {
        self.invalid = true;
    }
}

/// Try to read a burst prefix as the encoding of one multi-byte codepoint.
///
/// This is the fast path for ordinary typed characters outside ASCII: the
/// terminal delivers their UTF-8 bytes in a single burst, each byte
/// individually in the raw range. Returns `None` for anything that is not
/// exactly one multi-byte scalar value (ASCII, multiple characters, invalid
/// or overlong encodings), in which case the caller falls back to the state
/// machine.
pub fn decode_single(bytes: &[u8]) -> Option<char> {
    if bytes.len() < 2 {
        return None;
    }

    let mut parser = utf8parse::Parser::new();
    let mut decoder = Decoder::default();
    for &byte in bytes {
        parser.advance(&mut decoder, byte);
    }

    if decoder.invalid || decoder.codepoints != 1 {
        return None;
    }

    decoder.last.filter(|c| c.len_utf8() >= 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_two_byte_codepoint() {
        assert_eq!(decode_single(&[0xc3, 0xa9]), Some('\u{e9}'));
    }

    #[test]
    fn decodes_three_byte_codepoint() {
        assert_eq!(decode_single(&[0xe2, 0x82, 0xac]), Some('\u{20ac}'));
    }

    #[test]
    fn rejects_ascii_pairs() {
        assert_eq!(decode_single(b"ab"), None);
        assert_eq!(decode_single(b"\x1ba"), None);
    }

    #[test]
    fn rejects_multiple_codepoints() {
        assert_eq!(decode_single("\u{e9}\u{e9}".as_bytes()), None);
    }

    #[test]
    fn rejects_invalid_sequences() {
        assert_eq!(decode_single(&[0xff, 0x41]), None);
        assert_eq!(decode_single(&[0x82, 0xac]), None);
    }

    #[test]
    fn rejects_single_byte() {
        assert_eq!(decode_single(&[0x1b]), None);
    }
}
