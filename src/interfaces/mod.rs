use std::{borrow::Cow, fmt::Display};

use crate::re::MatchResult;

/// Pattern engine API used to isolate the underlying regular expression
/// implementation from the cache and the facade, so a different engine
/// (or a test double) can be swapped in easily.
pub trait PatternEngine: Send + Sync {
    /// Compiled, immutable representation of a pattern.
    type Pattern: Send + Sync;
    /// Diagnostic produced when a pattern can't be compiled.
    type Error: Display;

    fn compile(&self, source: &str) -> Result<Self::Pattern, Self::Error>;

    /// Returns the leftmost-first match together with its capture groups.
    fn match_first(&self, pattern: &Self::Pattern, text: &str) -> Option<MatchResult>;

    /// Returns all non-overlapping matches in left-to-right order.
    fn match_all(&self, pattern: &Self::Pattern, text: &str) -> Vec<MatchResult>;

    /// Replaces every match with `template`. Groups are referenced as `$1` or `${name}`.
    ///
    /// `Cow::Borrowed` means nothing was replaced.
    fn replace<'t>(&self, pattern: &Self::Pattern, text: &'t str, template: &str) -> Cow<'t, str>;

    /// Replaces every match with the value `replacer` returns for the full match text.
    fn replace_with<'t>(
        &self,
        pattern: &Self::Pattern,
        text: &'t str,
        replacer: &mut dyn FnMut(&str) -> String,
    ) -> Cow<'t, str>;

    fn split(&self, pattern: &Self::Pattern, text: &str) -> Vec<String>;

    /// Escapes every meta character so the result matches `text` literally.
    fn escape(&self, text: &str) -> String;

    fn is_match(&self, pattern: &Self::Pattern, text: &str) -> bool {
        self.match_first(pattern, text).is_some()
    }
}
