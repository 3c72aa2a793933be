pub mod errors;
mod match_result;
pub mod re;

use std::sync::LazyLock;

use regex::Regex;

pub use errors::PatternCompileError;
pub use match_result::{MatchResult, Outcome};
use crate::{pattern_cache::PatternRef, re::re::Re};

/// Process-wide facade with the default engine and caching enabled.
pub static RE: LazyLock<Re> = LazyLock::new(|| {
    Re::new()
});

/// [`Re::search`] on the process-wide [`RE`].
pub fn search<'p>(pattern: impl Into<PatternRef<'p, Regex>>, text: &str) -> Option<MatchResult> {
    RE.search(pattern, text)
}

pub fn find_all<'p>(pattern: impl Into<PatternRef<'p, Regex>>, text: &str) -> Vec<MatchResult> {
    RE.find_all(pattern, text)
}

pub fn substitute<'p>(pattern: impl Into<PatternRef<'p, Regex>>, template: &str, text: &str) -> String {
    RE.substitute(pattern, template, text)
}

pub fn substitute_by_fn<'p, F>(pattern: impl Into<PatternRef<'p, Regex>>, replacer: F, text: &str) -> String
where
    F: FnMut(&str) -> String,
{
    RE.substitute_by_fn(pattern, replacer, text)
}

pub fn split<'p>(pattern: impl Into<PatternRef<'p, Regex>>, text: &str) -> Vec<String> {
    RE.split(pattern, text)
}

pub fn is_match<'p>(pattern: impl Into<PatternRef<'p, Regex>>, text: &str) -> bool {
    RE.is_match(pattern, text)
}

pub fn quote(text: &str) -> String {
    RE.quote(text)
}

/// Turns caching on or off for the process-wide [`RE`]. Cached patterns are
/// kept either way.
pub fn set_cache_enabled(enabled: bool) {
    RE.set_cache_enabled(enabled)
}
