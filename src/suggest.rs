//! "Did you mean" hints for mistyped demo names

/// Largest edit distance still offered as a suggestion
pub const MAX_SUGGESTION_DISTANCE: usize = 3;

/// Number of single-character insertions, deletions or substitutions
/// turning `a` into `b`.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let b_chars: Vec<char> = b.chars().collect();
    // row[j] = distance between the processed prefix of `a` and b[..j]
    let mut row: Vec<usize> = (0..=b_chars.len()).collect();

    for (i, ca) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, cb) in b_chars.iter().enumerate() {
            let above = row[j + 1];
            let substitution = diagonal + usize::from(ca != *cb);
            row[j + 1] = substitution.min(above + 1).min(row[j] + 1);
            diagonal = above;
        }
    }

    row[b_chars.len()]
}

/// Up to three candidates closest to `query`, nearest first.
///
/// Matching ignores case. A candidate containing the query as a substring
/// (e.g. "docking" for "demo_docking") is kept even when its edit distance
/// is large.
pub fn suggest<'a>(query: &str, candidates: &'a [String]) -> Vec<&'a str> {
    let query = query.to_lowercase();
    let mut scored: Vec<(usize, &str)> = candidates
        .iter()
        .filter_map(|candidate| {
            let lower = candidate.to_lowercase();
            let distance = edit_distance(&query, &lower);
            if distance <= MAX_SUGGESTION_DISTANCE {
                Some((distance, candidate.as_str()))
            } else if !query.is_empty() && lower.contains(&query) {
                Some((MAX_SUGGESTION_DISTANCE + 1, candidate.as_str()))
            } else {
                None
            }
        })
        .collect();

    scored.sort();
    scored.into_iter().take(3).map(|(_, name)| name).collect()
}

/// Hint line for the given suggestions, if any.
pub fn format_suggestion(suggestions: &[&str]) -> Option<String> {
    match suggestions {
        [] => None,
        [only] => Some(format!("Did you mean '{}'?", only)),
        [first, second] => Some(format!("Did you mean '{}' or '{}'?", first, second)),
        [first, second, third, ..] => {
            Some(format!("Did you mean '{}', '{}', or '{}'?", first, second, third))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_edit_distance() {
        assert_eq!(edit_distance("", ""), 0);
        assert_eq!(edit_distance("", "abc"), 3);
        assert_eq!(edit_distance("abc", ""), 3);
        assert_eq!(edit_distance("demo", "demo"), 0);
        assert_eq!(edit_distance("demo", "dema"), 1);
        assert_eq!(edit_distance("kitten", "sitting"), 3);
    }

    #[test]
    fn test_suggest_typo() {
        let candidates = names(&["demo_docking", "demo_implot", "demo_themes"]);
        assert_eq!(suggest("demo_dockign", &candidates), vec!["demo_docking"]);
    }

    #[test]
    fn test_suggest_substring() {
        let candidates = names(&["demo_docking", "demo_implot", "demo_themes"]);
        assert_eq!(suggest("implot", &candidates), vec!["demo_implot"]);
    }

    #[test]
    fn test_suggest_case_insensitive_and_ordered() {
        let candidates = names(&["Demo_Hello", "demo_help", "other"]);
        assert_eq!(suggest("demo_hello", &candidates), vec!["Demo_Hello", "demo_help"]);
    }

    #[test]
    fn test_suggest_nothing_close() {
        let candidates = names(&["demo_docking"]);
        assert!(suggest("zzz", &candidates).is_empty());
    }

    #[test]
    fn test_suggest_at_most_three() {
        let candidates = names(&["demo_a", "demo_b", "demo_c", "demo_d"]);
        assert_eq!(suggest("demo_x", &candidates).len(), 3);
    }

    #[test]
    fn test_format_suggestion() {
        assert_eq!(format_suggestion(&[]), None);
        assert_eq!(format_suggestion(&["a"]), Some("Did you mean 'a'?".to_string()));
        assert_eq!(format_suggestion(&["a", "b"]), Some("Did you mean 'a' or 'b'?".to_string()));
        assert_eq!(
            format_suggestion(&["a", "b", "c"]),
            Some("Did you mean 'a', 'b', or 'c'?".to_string())
        );
    }
}
