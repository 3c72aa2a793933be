// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::sync::Arc;

use log::error;

use super::{MatchResult, Outcome};
use crate::{
    interfaces::PatternEngine,
    macros::resolve_or_degrade,
    pattern_cache::{PatternCache, PatternRef},
    regex_engine::RegexEngine,
};

/// Forgiving search/replace/split API on top of a [`PatternCache`].
///
/// Every operation accepts either a pattern source string or an already
/// compiled pattern. Operations never fail: an invalid pattern yields the
/// neutral result documented on each method (no match, the text unchanged,
/// etc.) and is logged. The `*_checked` variants return the same value
/// wrapped in an [`Outcome`] which also carries the swallowed error.
pub struct Re<E: PatternEngine = RegexEngine> {
    cache: Arc<PatternCache<E>>,
}

impl Re<RegexEngine> {
    pub fn new() -> Self {
        Self::with_engine(RegexEngine::new())
    }
}

impl Default for Re<RegexEngine> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: PatternEngine> Clone for Re<E> {
    fn clone(&self) -> Self {
        Self { cache: Arc::clone(&self.cache) }
    }
}

impl<E: PatternEngine> Re<E> {
    pub fn with_engine(engine: E) -> Self {
        Self::with_cache(Arc::new(PatternCache::new(engine)))
    }

    /// Creates a facade over an existing, possibly shared cache.
    pub fn with_cache(cache: Arc<PatternCache<E>>) -> Self {
        Self { cache }
    }

    pub fn cache(&self) -> &Arc<PatternCache<E>> {
        &self.cache
    }

    pub fn set_cache_enabled(&self, enabled: bool) {
        self.cache.set_enabled(enabled)
    }

    /// Escapes `text` so that it matches itself literally when used as a pattern.
    pub fn quote(&self, text: &str) -> String {
        self.cache.engine().escape(text)
    }

    /// Returns the first match, or `None` if there is no match or the
    /// pattern is invalid.
    pub fn search<'p>(
        &self,
        pattern: impl Into<PatternRef<'p, E::Pattern>>,
        text: &str,
    ) -> Option<MatchResult> {
        swallow(self.search_checked(pattern, text))
    }

    pub fn search_checked<'p>(
        &self,
        pattern: impl Into<PatternRef<'p, E::Pattern>>,
        text: &str,
    ) -> Outcome<Option<MatchResult>> {
        let compiled = resolve_or_degrade!(self.cache, pattern, None);
        Outcome::ok(self.cache.engine().match_first(&compiled, text))
    }

    /// Returns all non-overlapping matches from left to right. Empty if
    /// nothing matched or the pattern is invalid.
    pub fn find_all<'p>(
        &self,
        pattern: impl Into<PatternRef<'p, E::Pattern>>,
        text: &str,
    ) -> Vec<MatchResult> {
        swallow(self.find_all_checked(pattern, text))
    }

    pub fn find_all_checked<'p>(
        &self,
        pattern: impl Into<PatternRef<'p, E::Pattern>>,
        text: &str,
    ) -> Outcome<Vec<MatchResult>> {
        let compiled = resolve_or_degrade!(self.cache, pattern, Vec::new());
        Outcome::ok(self.cache.engine().match_all(&compiled, text))
    }

    /// Replaces every match with `template`, where `$1` or `${name}` refer to
    /// capture groups. Returns `text` unchanged if the pattern is invalid.
    pub fn substitute<'p>(
        &self,
        pattern: impl Into<PatternRef<'p, E::Pattern>>,
        template: &str,
        text: &str,
    ) -> String {
        swallow(self.substitute_checked(pattern, template, text))
    }

    pub fn substitute_checked<'p>(
        &self,
        pattern: impl Into<PatternRef<'p, E::Pattern>>,
        template: &str,
        text: &str,
    ) -> Outcome<String> {
        let compiled = resolve_or_degrade!(self.cache, pattern, text.to_owned());
        Outcome::ok(self.cache.engine().replace(&compiled, text, template).into_owned())
    }

    /// Replaces every match with `replacer(full_match)`. The function is
    /// called once per match, in match order. Returns `text` unchanged if
    /// the pattern is invalid.
    pub fn substitute_by_fn<'p, F>(
        &self,
        pattern: impl Into<PatternRef<'p, E::Pattern>>,
        replacer: F,
        text: &str,
    ) -> String
    where
        F: FnMut(&str) -> String,
    {
        swallow(self.substitute_by_fn_checked(pattern, replacer, text))
    }

    pub fn substitute_by_fn_checked<'p, F>(
        &self,
        pattern: impl Into<PatternRef<'p, E::Pattern>>,
        mut replacer: F,
        text: &str,
    ) -> Outcome<String>
    where
        F: FnMut(&str) -> String,
    {
        let compiled = resolve_or_degrade!(self.cache, pattern, text.to_owned());
        let replaced = self.cache.engine().replace_with(&compiled, text, &mut replacer);
        Outcome::ok(replaced.into_owned())
    }

    /// Splits `text` around every match. Returns `[text]` if the pattern is
    /// invalid.
    pub fn split<'p>(
        &self,
        pattern: impl Into<PatternRef<'p, E::Pattern>>,
        text: &str,
    ) -> Vec<String> {
        swallow(self.split_checked(pattern, text))
    }

    pub fn split_checked<'p>(
        &self,
        pattern: impl Into<PatternRef<'p, E::Pattern>>,
        text: &str,
    ) -> Outcome<Vec<String>> {
        let compiled = resolve_or_degrade!(self.cache, pattern, vec![text.to_owned()]);
        Outcome::ok(self.cache.engine().split(&compiled, text))
    }

    /// `false` if there is no match or the pattern is invalid.
    pub fn is_match<'p>(
        &self,
        pattern: impl Into<PatternRef<'p, E::Pattern>>,
        text: &str,
    ) -> bool {
        swallow(self.is_match_checked(pattern, text))
    }

    pub fn is_match_checked<'p>(
        &self,
        pattern: impl Into<PatternRef<'p, E::Pattern>>,
        text: &str,
    ) -> Outcome<bool> {
        let compiled = resolve_or_degrade!(self.cache, pattern, false);
        Outcome::ok(self.cache.engine().is_match(&compiled, text))
    }
}

fn swallow<T>(outcome: Outcome<T>) -> T {
    if let Some(err) = outcome.error() {
        error!("Invalid regex! {}", err);
    }
    outcome.into_value()
}
