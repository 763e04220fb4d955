//! Case-weighted Levenshtein distance.
//!
//! Insertions and deletions cost `1`. A substitution costs `1`, unless the
//! two characters only differ by case, in which case it costs `0.5`. Every
//! distance is therefore a multiple of one half, which `f64` holds exactly.

/// Cost of a substitution between characters that are equal ignoring case.
const CASE_MISMATCH_COST: f64 = 0.5;

/// Computes the weighted edit distance needed to turn `source` into `target`.
///
/// Comparison is done on Unicode scalar values. An empty string is at a
/// distance equal to the character count of the other one.
pub fn calculate_distance(source: &str, target: &str) -> f64 {
    let source: Vec<char> = source.chars().collect();
    let target: Vec<char> = target.chars().collect();
    let n = source.len();
    let m = target.len();

    if n == 0 {
        return m as f64;
    }
    if m == 0 {
        return n as f64;
    }

    // Full (n+1) x (m+1) table, row-major.
    let width = m + 1;
    let mut table = vec![0.0_f64; (n + 1) * width];
    for i in 0..=n {
        table[i * width] = i as f64;
    }
    for j in 0..=m {
        table[j] = j as f64;
    }

    for i in 1..=n {
        for j in 1..=m {
            let cost = substitution_cost(source[i - 1], target[j - 1]);
            let deletion = table[(i - 1) * width + j] + 1.0;
            let insertion = table[i * width + j - 1] + 1.0;
            let substitution = table[(i - 1) * width + j - 1] + cost;
            table[i * width + j] = deletion.min(insertion).min(substitution);
        }
    }

    table[n * width + m]
}

fn substitution_cost(a: char, b: char) -> f64 {
    if a == b {
        0.0
    } else if a.to_uppercase().eq(b.to_uppercase()) {
        CASE_MISMATCH_COST
    } else {
        1.0
    }
}

/// Returns the candidate closest to `source`, if it is within `max_distance`.
///
/// Ties keep the candidate that comes first in `candidates`.
pub fn find_best_match<'a, I>(source: &str, candidates: I, max_distance: f64) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut best: Option<(&'a str, f64)> = None;
    for candidate in candidates {
        let distance = calculate_distance(source, candidate);
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((candidate, distance)),
        }
    }

    let (candidate, distance) = best?;
    if distance <= max_distance {
        tracing::debug!(source, candidate, distance, "best match found");
        Some(candidate)
    } else {
        tracing::debug!(
            source,
            candidate,
            distance,
            max_distance,
            "closest candidate is beyond the maximum distance"
        );
        None
    }
}

/// [`find_best_match`] without a distance limit.
pub fn find_best_match_unbounded<'a, I>(source: &str, candidates: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    find_best_match(source, candidates, f64::INFINITY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_mismatch_is_half_a_substitution() {
        assert_eq!(substitution_cost('a', 'a'), 0.0);
        assert_eq!(substitution_cost('a', 'A'), 0.5);
        assert_eq!(substitution_cost('a', 'b'), 1.0);
    }

    #[test]
    fn non_ascii_case_folding() {
        assert_eq!(calculate_distance("été", "ÉTÉ"), 1.5);
        // 'ß' uppercases to "SS", which is not a single-char case match.
        assert_eq!(calculate_distance("ß", "S"), 1.0);
    }

    #[test]
    fn empty_strings() {
        assert_eq!(calculate_distance("", ""), 0.0);
        assert_eq!(calculate_distance("", "abc"), 3.0);
        assert_eq!(calculate_distance("abcd", ""), 4.0);
    }
}
