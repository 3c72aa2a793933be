use std::{fmt, ops::Index};

use super::errors::PatternCompileError;

/// Outcome of a single successful match: element 0 is the full match,
/// elements 1..n are the capture groups in order of their opening parenthesis.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MatchResult {
    groups: Vec<String>,
}

impl MatchResult {
    pub fn new(groups: Vec<String>) -> Self {
        Self { groups }
    }

    /// Returns the capture group at `index`.
    ///
    /// # Panics
    /// Panics if the pattern has no group with this index.
    pub fn group(&self, index: usize) -> &str {
        match self.groups.get(index) {
            Some(group) => group,
            None => panic!(
                "capture group index {} out of range, match has {} groups",
                index,
                self.groups.len()
            ),
        }
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.groups.get(index).map(String::as_str)
    }

    /// The whole matched text, same as `group(0)`.
    pub fn full(&self) -> &str {
        self.group(0)
    }

    /// Number of groups including the full match.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn groups(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(String::as_str)
    }

    pub fn into_groups(self) -> Vec<String> {
        self.groups
    }
}

impl FromIterator<String> for MatchResult {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl Index<usize> for MatchResult {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        self.group(index)
    }
}

impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.get(0).unwrap_or_default())
    }
}

/// Result of a forgiving operation: the value it would return plus the
/// compile error that was swallowed to produce it, if any.
#[must_use]
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome<T> {
    value: T,
    error: Option<PatternCompileError>,
}

impl<T> Outcome<T> {
    pub(crate) fn ok(value: T) -> Self {
        Self { value, error: None }
    }

    pub(crate) fn degraded(value: T, error: PatternCompileError) -> Self {
        Self { value, error: Some(error) }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn into_value(self) -> T {
        self.value
    }

    pub fn error(&self) -> Option<&PatternCompileError> {
        self.error.as_ref()
    }

    /// `true` if the value is a fallback produced because the pattern failed
    /// to compile.
    pub fn is_degraded(&self) -> bool {
        self.error.is_some()
    }

    pub fn into_result(self) -> Result<T, PatternCompileError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::MatchResult;

    fn sample() -> MatchResult {
        ["42-abc", "42", "abc"].into_iter().map(String::from).collect()
    }

    #[test]
    fn test_group_access() {
        let found = sample();
        assert_eq!(found.full(), "42-abc");
        assert_eq!(&found[1], "42");
        assert_eq!(found.get(2), Some("abc"));
        assert_eq!(found.get(3), None);
        assert_eq!(found.to_string(), "42-abc");
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_group_out_of_range_panics() {
        sample().group(3);
    }
}
