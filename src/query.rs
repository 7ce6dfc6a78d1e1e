/// Search-query validation against the Slack modifier grammar.
///
/// Slack search supports `modifier:value` filter tokens (`from:@alice`,
/// `before:2024-01-01`, …). This module checks a free-text query against the
/// fixed grammar documented at <https://docs.slack.dev/reference/>. Free text
/// without a colon is never inspected; only `key:value` shaped tokens are.
use std::sync::LazyLock;

use regex::Regex;

/// Modifier name → value pattern, as documented by Slack.
///
/// Patterns are written un-anchored (they appear verbatim in error messages)
/// and compiled with `^(?:…)$` anchors so a value must match in full, not as
/// a prefix. Date patterns are purely syntactic: `2024-13-40` passes.
const MODIFIERS: &[(&str, &str)] = &[
    ("from", r"@?[\w.]+"),
    ("in", r"#?[\w-]+"),
    ("to", r"@?[\w.]+"),
    ("has", r"(link|emoji|pin|reaction|star|attachment)"),
    ("is", r"(thread|saved|starred)"),
    ("before", r"\d{4}-\d{2}-\d{2}"),
    ("after", r"\d{4}-\d{2}-\d{2}"),
    ("on", r"\d{4}-\d{2}-\d{2}"),
    (
        "during",
        r"(today|yesterday|week|month|year|january|february|march|april|may|june|july|august|september|october|november|december)",
    ),
];

/// Compiled grammar table. Built once; read-only afterwards.
static GRAMMAR: LazyLock<Vec<(&'static str, &'static str, Regex)>> = LazyLock::new(|| {
    MODIFIERS
        .iter()
        .map(|&(name, pattern)| {
            let anchored = Regex::new(&format!("^(?:{pattern})$"))
                .expect("grammar patterns are fixed and known to compile");
            (name, pattern, anchored)
        })
        .collect()
});

/// Scan for `key:value` tokens: word characters, a colon, then at least one
/// non-whitespace character. A bare `from:` has no value and is not a token.
static TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\w+):(\S+)").expect("token pattern is fixed and known to compile")
});

/// Outcome of validating a query: an ordered list of problems.
#[derive(Debug, Clone, Default)]
pub struct Validation {
    /// Errors in token-discovery order (left to right).
    pub errors: Vec<String>,
}

impl Validation {
    /// A query is valid iff no errors were collected.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Validate a search query against the modifier grammar.
///
/// Each `key:value` token is checked: an unknown key yields one error and its
/// value is not inspected; a known key whose value does not fully match the
/// grammar pattern yields one error naming the expected pattern. Plain terms
/// are always valid.
#[must_use]
pub fn validate(query: &str) -> Validation {
    let mut errors = Vec::new();

    for caps in TOKEN.captures_iter(query) {
        let key = &caps[1];
        let value = &caps[2];

        let Some((_, pattern, re)) = GRAMMAR.iter().find(|(name, _, _)| *name == key) else {
            errors.push(format!("Unknown modifier: {key}"));
            continue;
        };

        if !re.is_match(value) {
            errors.push(format!(
                "Invalid value for {key}: {value} (expected: {pattern})"
            ));
        }
    }

    Validation { errors }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_terms_always_valid() {
        let result = validate("deployment rollout notes");
        assert!(result.is_valid());
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_empty_query_valid() {
        assert!(validate("").is_valid());
    }

    #[test]
    fn test_unknown_modifier_single_error() {
        let result = validate("foo:bar");
        assert!(!result.is_valid());
        assert_eq!(result.errors, vec!["Unknown modifier: foo".to_owned()]);
    }

    #[test]
    fn test_unknown_modifier_value_not_checked() {
        // Value would fail every grammar pattern, but only the key is reported.
        let result = validate("foo:!!!");
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0], "Unknown modifier: foo");
    }

    #[test]
    fn test_date_modifiers_accept_iso_shape() {
        for query in ["before:2024-01-01", "after:2024-01-01", "on:2024-01-15"] {
            let result = validate(query);
            assert!(result.is_valid(), "{query} should be valid");
        }
    }

    #[test]
    fn test_date_check_is_syntactic_not_calendar() {
        // Digit-shaped but not a real date; the grammar only checks digits.
        assert!(validate("on:2024-13-40").is_valid());
    }

    #[test]
    fn test_date_rejects_wrong_shape() {
        let result = validate("on:jan-1");
        assert!(!result.is_valid());
        assert_eq!(
            result.errors,
            vec![r"Invalid value for on: jan-1 (expected: \d{4}-\d{2}-\d{2})".to_owned()]
        );
    }

    #[test]
    fn test_during_months_and_relative_periods() {
        assert!(validate("during:january").is_valid());
        assert!(validate("during:yesterday").is_valid());
        assert!(!validate("during:13thmonth").is_valid());
    }

    #[test]
    fn test_full_match_not_prefix() {
        // "linkedin" starts with "link" but must not pass has:.
        assert!(!validate("has:linkedin").is_valid());
        assert!(validate("has:link").is_valid());
    }

    #[test]
    fn test_mixed_modifiers_and_free_text() {
        let result = validate("from:@alice in:#general has:link before:2024-01-01");
        assert!(result.is_valid());
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_valid_modifier_then_unknown() {
        let result = validate("from:@bob foo:bar");
        assert!(!result.is_valid());
        assert_eq!(result.errors, vec!["Unknown modifier: foo".to_owned()]);
    }

    #[test]
    fn test_errors_in_discovery_order() {
        let result = validate("zzz:1 is:nope aaa:2");
        assert_eq!(
            result.errors,
            vec![
                "Unknown modifier: zzz".to_owned(),
                "Invalid value for is: nope (expected: (thread|saved|starred))".to_owned(),
                "Unknown modifier: aaa".to_owned(),
            ]
        );
    }

    #[test]
    fn test_trailing_colon_not_a_token() {
        // The scan requires a non-empty value, so "from:" is skipped silently.
        assert!(validate("from: hello").is_valid());
        assert!(validate("from:").is_valid());
    }

    #[test]
    fn test_user_and_channel_shapes() {
        assert!(validate("from:@user.name").is_valid());
        assert!(validate("from:plainname").is_valid());
        assert!(validate("in:#release-train").is_valid());
        assert!(validate("in:release-train").is_valid());
        assert!(validate("to:@me").is_valid());
    }

    #[test]
    fn test_is_and_has_enumerations() {
        for value in ["thread", "saved", "starred"] {
            assert!(validate(&format!("is:{value}")).is_valid());
        }
        for value in ["link", "emoji", "pin", "reaction", "star", "attachment"] {
            assert!(validate(&format!("has:{value}")).is_valid());
        }
        assert!(!validate("is:pinned").is_valid());
    }
}
