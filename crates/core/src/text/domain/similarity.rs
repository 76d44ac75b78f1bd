/// Levenshtein edit distance over Unicode scalar values.
///
/// Fills the full dynamic-programming matrix: `b.len() + 1` rows by
/// `a.len() + 1` columns, unit cost for insertion, deletion and substitution.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let mut matrix = vec![vec![0usize; a.len() + 1]; b.len() + 1];
    for (i, cell) in matrix[0].iter_mut().enumerate() {
        *cell = i;
    }
    for (j, row) in matrix.iter_mut().enumerate() {
        row[0] = j;
    }

    for j in 1..=b.len() {
        for i in 1..=a.len() {
            let substitution_cost = usize::from(a[i - 1] != b[j - 1]);
            matrix[j][i] = (matrix[j][i - 1] + 1)
                .min(matrix[j - 1][i] + 1)
                .min(matrix[j - 1][i - 1] + substitution_cost);
        }
    }

    matrix[b.len()][a.len()]
}

/// Normalized similarity in `[0, 1]`: `(max_len - distance) / max_len`.
///
/// Equal strings (including two empty strings) are 1. A single empty side is 0.
pub fn similarity(a: &str, b: &str) -> f64 {
    if a == b {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let max_len = a.chars().count().max(b.chars().count());
    let distance = edit_distance(a, b);
    (max_len - distance) as f64 / max_len as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[rstest]
    #[case::identical("kitten", "kitten", 0)]
    #[case::classic("kitten", "sitting", 3)]
    #[case::insertion("cat", "cats", 1)]
    #[case::empty_left("", "abc", 3)]
    #[case::empty_right("abc", "", 3)]
    #[case::disjoint("abc", "xyz", 3)]
    fn test_edit_distance(#[case] a: &str, #[case] b: &str, #[case] expected: usize) {
        assert_eq!(edit_distance(a, b), expected);
    }

    #[test]
    fn test_identity() {
        assert_relative_eq!(similarity("pronunciation", "pronunciation"), 1.0);
        assert_relative_eq!(similarity("", ""), 1.0);
    }

    #[test]
    fn test_single_empty_side_is_zero() {
        assert_relative_eq!(similarity("", "x"), 0.0);
        assert_relative_eq!(similarity("x", ""), 0.0);
    }

    #[test]
    fn test_one_substitution_in_three_letters() {
        assert_relative_eq!(similarity("mat", "bat"), 2.0 / 3.0);
    }

    #[test]
    fn test_length_difference_uses_longer_word() {
        // distance 3, longer word has 7 chars
        assert_relative_eq!(similarity("kitten", "sitting"), 4.0 / 7.0);
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        // one substitution in a four-character word
        assert_relative_eq!(similarity("café", "cafe"), 0.75);
    }

    #[rstest]
    #[case("the", "thee")]
    #[case("world", "word")]
    #[case("schedule", "shedule")]
    #[case("a", "xyz")]
    #[case("naïve", "naive")]
    fn test_symmetric_and_bounded(#[case] a: &str, #[case] b: &str) {
        let ab = similarity(a, b);
        let ba = similarity(b, a);
        assert_relative_eq!(ab, ba);
        assert!((0.0..=1.0).contains(&ab));
    }
}
