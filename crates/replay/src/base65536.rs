//! qntm's base65536: two bytes per code point, a trailing odd byte in the
//! U+1500 block. The alphabet itself comes from the `base65536` crate.

use ::base65536::WrapOptions;

fn compact(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

pub fn encode(bytes: &[u8]) -> String {
    ::base65536::encode(bytes, WrapOptions::NoWrap)
}

pub fn matches(s: &str) -> bool {
    let s = compact(s);
    !s.is_empty() && ::base65536::decode(&s, false).is_ok()
}

/// Whitespace is skipped. Anything else outside the alphabet, or a code
/// point after the lone-byte terminator, is an error.
pub fn decode(s: &str) -> Result<Vec<u8>, ::base65536::Error> {
    ::base65536::decode(&compact(s), false)
}
