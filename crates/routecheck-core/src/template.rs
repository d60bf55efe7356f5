//! Route template normalization.
//!
//! Declared templates name their placeholders (`repos/:owner/:repo`), while
//! the path literal built in the method body is positional
//! (`repos/{0}/{1}`). Normalizing the declared side lets the two be compared
//! as plain text.

use regex::Regex;
use std::sync::LazyLock;

/// `:` followed by one or more lowercase ASCII letters.
static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(":[a-z]+").expect("placeholder pattern is valid"));

/// Replace every `:name` placeholder in `template` with `{i}`, where `i` is
/// the 0-based position of that occurrence in left-to-right order.
///
/// Matches are collected first and spliced back in reverse, so each splice
/// leaves the byte ranges of the matches before it untouched. Splicing by
/// range (rather than replacing by value) keeps numbering positional when a
/// name repeats or is a prefix of a later one.
///
/// The template is taken as written, quote characters included; they pass
/// through unchanged.
pub fn normalize(template: &str) -> String {
    let ranges: Vec<_> = PLACEHOLDER.find_iter(template).map(|m| m.range()).collect();

    let mut out = template.to_string();
    for (index, range) in ranges.into_iter().enumerate().rev() {
        out.replace_range(range, &format!("{{{index}}}"));
    }
    out
}

/// Number of placeholders `normalize` would rewrite.
pub fn placeholder_count(template: &str) -> usize {
    PLACEHOLDER.find_iter(template).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rewrites_named_placeholders_in_order() {
        assert_eq!(
            normalize("\"repos/:owner/:repo/issues/events\""),
            "\"repos/{0}/{1}/issues/events\""
        );
    }

    #[test]
    fn template_without_placeholders_is_unchanged() {
        let t = "\"user/repos\"";
        assert_eq!(normalize(t), t);
        assert_eq!(normalize(""), "");
        assert_eq!(placeholder_count(t), 0);
    }

    #[test]
    fn repeated_names_still_number_positionally() {
        assert_eq!(normalize("a/:id/b/:id/c/:id"), "a/{0}/b/{1}/c/{2}");
    }

    #[test]
    fn prefix_names_do_not_clobber_each_other() {
        assert_eq!(
            normalize("\"repos/:repository/:repo\""),
            "\"repos/{0}/{1}\""
        );
        assert_eq!(normalize(":a/:abc/:ab"), "{0}/{1}/{2}");
    }

    #[test]
    fn numbering_independent_of_name_length() {
        assert_eq!(normalize("/:x/:verylongname/:y"), "/{0}/{1}/{2}");
        assert_eq!(normalize("/:very_long/:y"), "/{0}_long/{1}");
    }

    #[test]
    fn uppercase_and_digits_are_not_placeholder_characters() {
        assert_eq!(normalize("orgs/:Org/teams"), "orgs/:Org/teams");
        assert_eq!(normalize("teams/:team2/x"), "teams/{0}2/x");
        assert_eq!(normalize("a/:/b"), "a/:/b");
    }

    #[test]
    fn ten_or_more_placeholders() {
        let template: String = (0..12).map(|_| "/:p").collect();
        let expected: String = (0..12).map(|i| format!("/{{{i}}}")).collect();
        assert_eq!(normalize(&template), expected);
        assert_eq!(placeholder_count(&template), 12);
    }
}
