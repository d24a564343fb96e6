//! Byte classification for the normalizer
//!
//! Classification is fixed and locale-independent. Input is treated as
//! arbitrary bytes: the ASCII range follows the C locale, and every byte with
//! the high bit set counts as part of a visible glyph without case.

/// Classification of a single input byte
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ByteClass {
    /// Space, tab, newline, vertical tab, form feed or carriage return
    Whitespace,
    /// Byte with a visible glyph: ASCII punctuation, digits, letters, or any
    /// byte of a multi-byte / 8-bit sequence
    Graphic,
    /// Remaining control bytes
    Other,
}

impl ByteClass {
    /// Classify a byte
    pub const fn of(byte: u8) -> Self {
        match byte {
            b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r' => ByteClass::Whitespace,
            0x21..=0x7E | 0x80..=0xFF => ByteClass::Graphic,
            _ => ByteClass::Other,
        }
    }
}

/// Check if byte is a lowercase ASCII letter
#[inline]
pub const fn is_lower(byte: u8) -> bool {
    byte.is_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_graphic(byte: u8) -> bool {
        ByteClass::of(byte) == ByteClass::Graphic
    }

    #[test]
    fn test_whitespace_set() {
        for byte in [b' ', b'\t', b'\n', 0x0B, 0x0C, b'\r'] {
            assert_eq!(ByteClass::of(byte), ByteClass::Whitespace, "{byte:#04x}");
        }
        // Not part of the set even though some tables treat it as blank
        assert_eq!(ByteClass::of(0x00), ByteClass::Other);
    }

    #[test]
    fn test_graphic_ascii() {
        assert!(is_graphic(b'a'));
        assert!(is_graphic(b'Z'));
        assert!(is_graphic(b'0'));
        assert!(is_graphic(b'.'));
        assert!(is_graphic(b'~'));
        assert!(is_graphic(b'!'));
        assert!(!is_graphic(b' '));
    }

    #[test]
    fn test_high_bytes_are_graphic() {
        for byte in 0x80..=0xFFu8 {
            assert!(is_graphic(byte), "{byte:#04x}");
            assert!(!is_lower(byte));
        }
    }

    #[test]
    fn test_control_bytes() {
        for byte in (0x00..=0x08u8).chain(0x0E..=0x1F).chain([0x7F]) {
            assert_eq!(ByteClass::of(byte), ByteClass::Other, "{byte:#04x}");
            assert!(!is_graphic(byte));
        }
    }

    #[test]
    fn test_every_byte_has_exactly_one_class() {
        let mut counts = [0usize; 3];
        for byte in 0..=u8::MAX {
            match ByteClass::of(byte) {
                ByteClass::Whitespace => counts[0] += 1,
                ByteClass::Graphic => counts[1] += 1,
                ByteClass::Other => counts[2] += 1,
            }
        }
        assert_eq!(counts, [6, 94 + 128, 28]);
    }

    #[test]
    fn test_lowercase_is_ascii_only() {
        assert!(is_lower(b'a'));
        assert!(is_lower(b'z'));
        assert!(!is_lower(b'A'));
        assert!(!is_lower(b'.'));
    }
}
