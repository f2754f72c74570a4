//! Placeholder engine for clause text.
//!
//! Clause content marks the slots a user has to fill with square brackets:
//!
//! ```text
//! Dear [Candidate Name], we are pleased to offer you the role of [Position].
//! ```
//!
//! The engine has two halves that must agree on the marker rule:
//!
//! - [`extract_placeholders`] finds the distinct names, in first-occurrence
//!   order, so a form can ask for each value once.
//! - [`fill_placeholders`] substitutes supplied values back into the text.
//!
//! # Unresolved markers
//!
//! Filling never deletes a marker it cannot resolve. A name with no value, or
//! with an empty value, stays in the output as `[Name]` so the reader of the
//! generated document can see what is still missing.

use crate::model::Clause;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::collections::HashSet;
use std::sync::LazyLock;

/// A `[`, one or more characters that are not `]`, then `]`.
static MARKER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]").expect("Invalid placeholder regex"));

/// Render a placeholder name back into its marker form.
pub fn marker(name: &str) -> String {
    format!("[{}]", name)
}

/// Extract the distinct placeholder names from a text.
///
/// Names are trimmed and returned in the order they first appear. Absent or
/// empty text yields an empty list.
///
/// # Examples
///
/// ```
/// use bdm_client::placeholder::extract_placeholders;
///
/// let names = extract_placeholders(Some("Dear [Name], welcome to [Company]. Bye [Name]."));
/// assert_eq!(names, vec!["Name", "Company"]);
///
/// assert!(extract_placeholders(None).is_empty());
/// ```
pub fn extract_placeholders(text: Option<&str>) -> Vec<String> {
    let Some(text) = text else {
        return Vec::new();
    };

    let mut seen = HashSet::new();
    let mut names = Vec::new();

    for caps in MARKER_REGEX.captures_iter(text) {
        let name = caps[1].trim();
        if seen.insert(name.to_string()) {
            names.push(name.to_string());
        }
    }

    names
}

/// Extract the union of placeholder names across clauses.
///
/// Order is first occurrence, scanning clauses in sequence.
pub fn extract_from_clauses(clauses: &[Clause]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut names = Vec::new();

    for clause in clauses {
        for name in extract_placeholders(Some(&clause.content)) {
            if seen.insert(name.clone()) {
                names.push(name);
            }
        }
    }

    names
}

/// Substitute placeholder values into a text.
///
/// Every occurrence of `[key]` is replaced for each key in `values`. Keys are
/// matched literally, so names containing `.`, `*`, `(` and the like need no
/// escaping. An empty value leaves the marker in place. Markers whose name is
/// not a key are left untouched, and absent text yields an empty string.
///
/// Keys are applied in sorted order, so the result does not depend on how the
/// map was built.
///
/// # Examples
///
/// ```
/// use bdm_client::placeholder::{PlaceholderValues, fill_placeholders};
///
/// let values = PlaceholderValues::from_pairs([("A", "x")]);
/// assert_eq!(fill_placeholders(Some("[A][B]"), &values), "x[B]");
/// ```
pub fn fill_placeholders(text: Option<&str>, values: &PlaceholderValues) -> String {
    let Some(text) = text else {
        return String::new();
    };

    let mut result = text.to_string();

    for (name, value) in values.iter() {
        // An empty value puts the marker itself back.
        if value.is_empty() {
            continue;
        }
        let needle = marker(name);
        if result.contains(&needle) {
            result = result.replace(&needle, value);
        }
    }

    result
}

/// Fill every clause's content, keeping all other clause fields.
pub fn fill_clauses(clauses: &[Clause], values: &PlaceholderValues) -> Vec<Clause> {
    clauses
        .iter()
        .map(|clause| Clause {
            content: fill_placeholders(Some(&clause.content), values),
            ..clause.clone()
        })
        .collect()
}

/// User-supplied values keyed by placeholder name.
///
/// An absent or empty value is a valid pending state, not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlaceholderValues(BTreeMap<String, String>);

impl PlaceholderValues {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a map with an empty value for every name.
    pub fn pending_for<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(
            names
                .into_iter()
                .map(|name| (name.into(), String::new()))
                .collect(),
        )
    }

    /// Helper to build a map from key-value pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Set the value for a name, replacing any previous value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    /// Get the value for a name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Whether a name has a non-empty value.
    pub fn is_filled(&self, name: &str) -> bool {
        self.get(name).is_some_and(|v| !v.is_empty())
    }

    /// Names among `names` that have no value or an empty one.
    pub fn pending<'a>(&self, names: &'a [String]) -> Vec<&'a str> {
        names
            .iter()
            .filter(|name| !self.is_filled(name))
            .map(String::as_str)
            .collect()
    }

    /// Iterate over entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
