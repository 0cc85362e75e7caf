//! Similarity primitives over normalized text.
//!
//! All scores are in `[0.0, 1.0]`. Degenerate inputs (both sides empty) score
//! 0.0 so that nothing can be accepted on the strength of two blanks.

use std::collections::HashSet;

use strsim::levenshtein;

use crate::normalize::tokens;

/// Levenshtein distance with unit insertion/deletion/substitution costs.
///
/// The distance to an empty string is the length of the other string.
pub fn edit_distance(a: &str, b: &str) -> usize {
    levenshtein(a, b)
}

/// `1 - distance / max(len)`, or 0.0 when both strings are empty.
pub fn edit_similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 0.0;
    }
    1.0 - edit_distance(a, b) as f64 / max_len as f64
}

/// `min(len) / max(len)` in characters.
pub fn length_ratio(a: &str, b: &str) -> f64 {
    ratio(a.chars().count(), b.chars().count())
}

/// Jaccard index of the whitespace token sets of two normalized strings.
pub fn jaccard(a: &str, b: &str) -> f64 {
    let a_set: HashSet<&str> = tokens(a).collect();
    let b_set: HashSet<&str> = tokens(b).collect();

    let union = a_set.union(&b_set).count();
    if union == 0 {
        return 0.0;
    }
    let intersection = a_set.intersection(&b_set).count();
    intersection as f64 / union as f64
}

/// `min(tokens) / max(tokens)`, counting every token (not just distinct ones).
pub fn token_count_ratio(a: &str, b: &str) -> f64 {
    ratio(tokens(a).count(), tokens(b).count())
}

fn ratio(x: usize, y: usize) -> f64 {
    let max = x.max(y);
    if max == 0 {
        return 0.0;
    }
    x.min(y) as f64 / max as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_distance_basics() {
        assert_eq!(edit_distance("kitten", "sitting"), 3);
        assert_eq!(edit_distance("cat", "bat"), 1);
        assert_eq!(edit_distance("", "abc"), 3);
        assert_eq!(edit_distance("abc", ""), 3);
        assert_eq!(edit_distance("", ""), 0);
    }

    #[test]
    fn test_edit_similarity_scales_by_longer_string() {
        let sim = edit_similarity("cat", "bat");
        assert!(
            (sim - 2.0 / 3.0).abs() < 1e-9,
            "one substitution in three chars should be ~0.667, got {}",
            sim
        );
        assert_eq!(edit_similarity("", ""), 0.0);
        assert_eq!(edit_similarity("abc", ""), 0.0);
    }

    #[test]
    fn test_jaccard_identical_sets() {
        assert_eq!(jaccard("red fox", "fox red"), 1.0);
    }

    #[test]
    fn test_jaccard_partial_overlap() {
        // {golden, retriever} vs {retriever} -> 1/2
        assert_eq!(jaccard("golden retriever", "retriever"), 0.5);
    }

    #[test]
    fn test_jaccard_empty_is_zero() {
        assert_eq!(jaccard("", ""), 0.0);
        assert_eq!(jaccard("dog", ""), 0.0);
    }

    #[test]
    fn test_token_count_ratio_counts_duplicates() {
        assert_eq!(token_count_ratio("new new york", "new york"), 2.0 / 3.0);
        assert_eq!(token_count_ratio("", ""), 0.0);
    }

    #[test]
    fn test_length_ratio_basics() {
        assert_eq!(length_ratio("dog", "golden retriever"), 3.0 / 16.0);
        assert_eq!(length_ratio("", ""), 0.0);
    }
}
