//! "Did you mean" suggestions for near-miss trailer keys.

/// Maximum edit distance for a suggestion to be offered.
const SUGGESTION_THRESHOLD: usize = 3;

/// Computes the Levenshtein distance between two strings, case-insensitively.
fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.to_lowercase().chars().collect();
    let b: Vec<char> = b.to_lowercase().chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut column: Vec<usize> = (0..=b.len()).collect();

    for (i, &ca) in a.iter().enumerate() {
        let mut previous = column[0];
        column[0] = i + 1;

        for (j, &cb) in b.iter().enumerate() {
            let next = column[j + 1];
            column[j + 1] = if ca == cb {
                previous
            } else {
                previous.min(next).min(column[j]) + 1
            };
            previous = next;
        }
    }

    column[b.len()]
}

/// Returns the candidate closest to `wanted`, if any is close enough.
///
/// Candidates are truncated to the length of `wanted` before measuring, so
/// suffix variants ("Commit-types" for "Commit-type") still match.
pub fn did_you_mean<'a, I>(wanted: &str, candidates: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    candidates
        .into_iter()
        .map(|candidate| {
            let truncated: String = candidate.chars().take(wanted.chars().count()).collect();
            (levenshtein(wanted, &truncated), candidate)
        })
        .filter(|&(distance, _)| distance <= SUGGESTION_THRESHOLD)
        .min_by_key(|&(distance, _)| distance)
        .map(|(_, candidate)| candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein_identical() {
        assert_eq!(levenshtein("abc", "abc"), 0);
    }

    #[test]
    fn test_levenshtein_empty() {
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("abc", ""), 3);
    }

    #[test]
    fn test_levenshtein_substitution() {
        assert_eq!(levenshtein("kitten", "sitten"), 1);
        assert_eq!(levenshtein("kitten", "sitting"), 3);
    }

    #[test]
    fn test_levenshtein_case_insensitive() {
        assert_eq!(levenshtein("ABC", "abc"), 0);
    }

    #[test]
    fn test_did_you_mean_close_match() {
        let suggestion = did_you_mean("Commit-type", ["Commit-typo", "Reviewed-by"]);
        assert_eq!(suggestion, Some("Commit-typo"));
    }

    #[test]
    fn test_did_you_mean_suffix_variant() {
        let suggestion = did_you_mean("Commit-type", ["Commit-types"]);
        assert_eq!(suggestion, Some("Commit-types"));
    }

    #[test]
    fn test_did_you_mean_nothing_close() {
        let suggestion = did_you_mean("Commit-type", ["Reviewed-by", "Signed-off-by"]);
        assert_eq!(suggestion, None);
    }

    #[test]
    fn test_did_you_mean_no_candidates() {
        assert_eq!(did_you_mean("Commit-type", Vec::new()), None);
    }
}
