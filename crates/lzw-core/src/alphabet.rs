//! The seeded alphabet shared by encoder and decoder.
//!
//! Ranges are inclusive and seeded in this order; a character that appears
//! in more than one range keeps its first code.

use std::sync::OnceLock;

pub const SEED_RANGES: [(u8, u8); 7] = [
    // punctuation, backslash included
    (32, 47),
    (58, 64),
    (91, 96),
    (123, 126),
    // digits
    (48, 57),
    // latin
    (65, 90),
    (97, 122),
];

/// Number of distinct symbols in the seeded alphabet.
pub const SIZE: usize = 95;

/// Seeded symbols in code order: `symbols()[code]` is the symbol for `code`.
pub fn symbols() -> &'static [u8] {
    static SYMBOLS: OnceLock<Vec<u8>> = OnceLock::new();
    SYMBOLS.get_or_init(|| {
        let mut seen = [false; 256];
        let mut out = Vec::with_capacity(SIZE);
        for &(start, end) in SEED_RANGES.iter() {
            for b in start..=end {
                if !seen[b as usize] {
                    seen[b as usize] = true;
                    out.push(b);
                }
            }
        }
        out
    })
}

pub fn contains(symbol: u8) -> bool {
    SEED_RANGES
        .iter()
        .any(|&(start, end)| (start..=end).contains(&symbol))
}
