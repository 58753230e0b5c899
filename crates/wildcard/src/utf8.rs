/// Returns the width in bytes of the UTF-8 encoded character starting with the given byte.
///
/// Continuation bytes and invalid leading bytes are reported as a single byte.
#[inline]
pub(crate) fn utf8_char_width(b: u8) -> usize {
    match b {
        0x00..=0x7F => 1,
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF7 => 4,
        _ => 1,
    }
}
