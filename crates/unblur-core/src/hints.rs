//! Static hint text used when no generator answers in time.

/// One fallback per hint level, from vague to specific.
const FALLBACK_HINTS: [&str; 5] = [
    "Take a close look at the overall shapes and colors.",
    "Think about where a scene like this could be found.",
    "Focus on the largest object in the picture.",
    "Consider what this thing is commonly used for or known for.",
    "Try another guess, you are running out of attempts.",
];

/// Fallback hint for `level`; levels past the table reuse the last entry.
pub fn fallback_hint(level: u32) -> &'static str {
    let idx = (level as usize).min(FALLBACK_HINTS.len() - 1);
    FALLBACK_HINTS[idx]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_level_has_text() {
        for level in 0..=4 {
            assert!(!fallback_hint(level).is_empty());
        }
    }

    #[test]
    fn test_levels_past_the_table_clamp() {
        assert_eq!(fallback_hint(9), fallback_hint(4));
    }
}
