//! Legacy rendering: one uppercase hex digit per unit, in groups of four.

const GROUP: usize = 4;

pub fn encode(bytes: &[u8]) -> String {
    let digits: Vec<char> = bytes
        .iter()
        .flat_map(|&b| [b >> 4, b & 0xF])
        .filter_map(|unit| char::from_digit(unit as u32, 16))
        .map(|c| c.to_ascii_uppercase())
        .collect();
    digits
        .chunks(GROUP)
        .map(|group| group.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_filler(c: char) -> bool {
    c.is_whitespace() || c == '#'
}

/// Only hex digits, whitespace and `#`. The empty string qualifies.
pub fn matches(s: &str) -> bool {
    s.chars().all(|c| c.is_ascii_hexdigit() || is_filler(c))
}

/// Units straight from the digits; an odd digit count is fine.
pub fn decode_units(s: &str) -> Vec<u8> {
    s.chars()
        .filter(|&c| !is_filler(c))
        .filter_map(|c| c.to_digit(16))
        .map(|d| d as u8)
        .collect()
}
