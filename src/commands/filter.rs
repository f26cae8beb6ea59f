// Fuzzy filtering for result lists.
// A query matches when its characters appear in order anywhere in the target.

use regex::{Regex, RegexBuilder};

use crate::error::Result;

/// Build a pattern joining each query character with `.*`.
pub fn fuzzy_regex(query: &str, case_insensitive: bool) -> Result<Regex> {
    let pattern = query
        .chars()
        .map(|c| regex::escape(c.encode_utf8(&mut [0; 4])))
        .collect::<Vec<_>>()
        .join(".*");

    Ok(RegexBuilder::new(&pattern)
        .case_insensitive(case_insensitive)
        .build()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_characters_in_order() {
        let re = fuzzy_regex("fobz", false).unwrap();
        assert!(re.is_match("foo bar-baz"));
        assert!(!re.is_match("hello-world"));
        assert!(!re.is_match("zbof"));
    }

    #[test]
    fn test_case_sensitivity() {
        assert!(fuzzy_regex("HW", true).unwrap().is_match("octocat/hello-world"));
        assert!(!fuzzy_regex("HW", false).unwrap().is_match("octocat/hello-world"));
    }

    #[test]
    fn test_metacharacters_are_literal() {
        let re = fuzzy_regex("c++", false).unwrap();
        assert!(re.is_match("lang/c++-tools"));
        assert!(!re.is_match("lang/cpp"));
    }
}
