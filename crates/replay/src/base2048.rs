//! Eleven bits per code point from a 2048-character Hangul block, with
//! a small IPA block for a short final group.

const FULL_BASE: u32 = 0xAC00;
const SHORT_BASE: u32 = 0x0250;
const FULL_BITS: u32 = 11;
const SHORT_BITS: u32 = 3;

/// Code points per line in the wrapped form.
pub const WRAP_WIDTH: usize = 32;
const ZERO_WIDTH_SPACE: char = '\u{200B}';

/// Big-endian bit writer that flushes 11-bit groups as characters.
pub fn encode(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    let mut acc: u32 = 0;
    let mut bits: u32 = 0;

    for &b in bytes {
        acc = (acc << 8) | b as u32;
        bits += 8;
        while bits >= FULL_BITS {
            bits -= FULL_BITS;
            out.extend(char::from_u32(FULL_BASE + (acc >> bits)));
            acc &= (1 << bits) - 1;
        }
    }

    // pad a trailing group with 1 bits
    if bits > 0 {
        let (base, width) = if bits > SHORT_BITS {
            (FULL_BASE, FULL_BITS)
        } else {
            (SHORT_BASE, SHORT_BITS)
        };
        let pad = width - bits;
        let value = (acc << pad) | ((1 << pad) - 1);
        out.extend(char::from_u32(base + value));
    }
    out
}

/// Insert a zero-width space after every [`WRAP_WIDTH`] characters.
pub fn wrap(encoded: &str) -> String {
    let chars: Vec<char> = encoded.chars().collect();
    let mut out = String::with_capacity(encoded.len() + encoded.len() / WRAP_WIDTH * 3);
    for (i, line) in chars.chunks(WRAP_WIDTH).enumerate() {
        if i > 0 {
            out.push(ZERO_WIDTH_SPACE);
        }
        out.extend(line);
    }
    out
}

fn is_filler(c: char) -> bool {
    c.is_whitespace() || c == ZERO_WIDTH_SPACE
}

fn decode_char(c: char) -> Option<(u32, u32)> {
    let cp = c as u32;
    if (FULL_BASE..FULL_BASE + (1 << FULL_BITS)).contains(&cp) {
        Some((cp - FULL_BASE, FULL_BITS))
    } else if (SHORT_BASE..SHORT_BASE + (1 << SHORT_BITS)).contains(&cp) {
        Some((cp - SHORT_BASE, SHORT_BITS))
    } else {
        None
    }
}

pub fn matches(s: &str) -> bool {
    let mut chars = s.chars().filter(|&c| !is_filler(c)).peekable();
    chars.peek().is_some() && chars.all(|c| decode_char(c).is_some())
}

/// Whole bytes only: the padding never adds up to eight bits.
pub fn decode(s: &str) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(s.len());
    let mut acc: u32 = 0;
    let mut bits: u32 = 0;

    for (value, width) in s.chars().filter(|&c| !is_filler(c)).filter_map(decode_char) {
        acc = (acc << width) | value;
        bits += width;
        while bits >= 8 {
            bits -= 8;
            bytes.push((acc >> bits) as u8);
            acc &= (1 << bits) - 1;
        }
    }
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_strings() {
        assert_eq!(encode(&[0xA4, 0xC8]), "\u{B126}\u{AE3F}");
        assert_eq!(encode(&[0xA4, 0xC8, 0xD0]), "\u{B126}\u{AE34}\u{251}");
        assert_eq!(encode(&[0xBB, 0x90]), "\u{B1DC}\u{B03F}");
        assert_eq!(encode(&[0xF0]), "\u{B387}");
        assert_eq!(
            encode(&[1, 2, 3, 4, 5, 6, 7]),
            "\u{AC08}\u{AC80}\u{B208}\u{AC50}\u{AF03}\u{257}"
        );
    }

    #[test]
    fn test_decode_truncates_padding() {
        assert_eq!(decode("\u{B126}\u{AE3F}"), vec![0xA4, 0xC8]);
        assert_eq!(decode("\u{B126}\u{AE34}\u{251}"), vec![0xA4, 0xC8, 0xD0]);
        assert_eq!(decode("\u{B387}"), vec![0xF0]);
        assert_eq!(
            decode("\u{AC08}\u{AC80}\u{B208}\u{AC50}\u{AF03}\u{257}"),
            vec![1, 2, 3, 4, 5, 6, 7]
        );
    }

    #[test]
    fn test_wrap() {
        let long = encode(&[0x5A; 100]);
        let wrapped = wrap(&long);
        assert_eq!(
            wrapped.chars().filter(|&c| c == ZERO_WIDTH_SPACE).count(),
            (long.chars().count() - 1) / WRAP_WIDTH
        );
        assert!(matches(&wrapped));
        assert_eq!(decode(&wrapped), vec![0x5A; 100]);
        assert_eq!(wrap("\u{B387}"), "\u{B387}");
    }
}
