//! Text normalization shared by every matching strategy.
//!
//! Guesses and answers are compared in a reduced alphabet: lower-case ASCII
//! letters, digits and single spaces. Anything else (punctuation, accents,
//! emoji) is dropped rather than transliterated.

/// Normalize free text for comparison.
///
/// Lower-cases, removes every character outside `[a-z0-9 ]`, collapses runs of
/// whitespace into a single space and trims both ends.
pub fn normalize(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut pending_space = false;

    for c in input.chars() {
        if c.is_whitespace() {
            pending_space = !out.is_empty();
            continue;
        }

        let c = c.to_ascii_lowercase();
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_space {
                out.push(' ');
                pending_space = false;
            }
            out.push(c);
        }
    }

    out
}

/// Split normalized text into whitespace-separated tokens.
pub fn tokens(normalized: &str) -> impl Iterator<Item = &str> {
    normalized.split_whitespace()
}
