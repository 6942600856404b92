//! Variable substitution for skeleton paths and file contents.
//! Replaces `${name}` placeholders with collected values and records any
//! placeholder left over after all replacements.

use indexmap::IndexMap;
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::OnceLock;

/// Matches a `${...}` placeholder. The name part stops at the first `}`, so
/// adjacent placeholders like `${a}${b}` are two independent matches.
fn placeholder_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{[^}]+\}").expect("placeholder pattern is valid"))
}

/// Replaces every `${key}` occurrence in `input` with the mapped value.
///
/// Values are substituted once per mapping entry, in the mapping's insertion
/// order; a substituted value is never re-scanned, so values containing
/// placeholder-like text cannot trigger further substitution.
///
/// After all replacements the result is scanned for any remaining `${...}`
/// pattern. The first match, if any, is added to `unresolved`; the literal
/// placeholder text stays in the returned string.
///
/// # Arguments
/// * `input` - Text to substitute into
/// * `values` - Key to value mapping; keys appear in the text as `${key}`
/// * `unresolved` - Accumulator for placeholders with no matching key
///
/// # Returns
/// * `String` - The substituted text
pub fn substitute(
    input: &str,
    values: &IndexMap<String, String>,
    unresolved: &mut BTreeSet<String>,
) -> String {
    let mut result = input.to_string();
    for (key, value) in values {
        let needle = format!("${{{}}}", key);
        if result.contains(&needle) {
            result = result.replace(&needle, value);
        }
    }

    if let Some(found) = placeholder_pattern().find(&result) {
        unresolved.insert(found.as_str().to_string());
    }

    result
}
