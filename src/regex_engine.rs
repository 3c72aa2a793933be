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

use std::borrow::Cow;

use regex::{Captures, Regex};

use crate::{interfaces::PatternEngine, re::MatchResult};

/// Default engine backed by the `regex` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct RegexEngine;

impl RegexEngine {
    pub fn new() -> Self {
        Self
    }
}

/// Non-participating groups are reported as empty strings.
fn captures_to_match(captures: &Captures<'_>) -> MatchResult {
    captures
        .iter()
        .map(|group| group.map_or_else(String::new, |m| m.as_str().to_owned()))
        .collect()
}

impl PatternEngine for RegexEngine {
    type Pattern = Regex;
    type Error = regex::Error;

    fn compile(&self, source: &str) -> Result<Regex, regex::Error> {
        Regex::new(source)
    }

    fn match_first(&self, pattern: &Regex, text: &str) -> Option<MatchResult> {
        let captures = pattern.captures(text)?;
        Some(captures_to_match(&captures))
    }

    fn match_all(&self, pattern: &Regex, text: &str) -> Vec<MatchResult> {
        pattern
            .captures_iter(text)
            .map(|captures| captures_to_match(&captures))
            .collect()
    }

    fn replace<'t>(&self, pattern: &Regex, text: &'t str, template: &str) -> Cow<'t, str> {
        pattern.replace_all(text, template)
    }

    fn replace_with<'t>(
        &self,
        pattern: &Regex,
        text: &'t str,
        replacer: &mut dyn FnMut(&str) -> String,
    ) -> Cow<'t, str> {
        pattern.replace_all(text, |captures: &Captures<'_>| replacer(&captures[0]))
    }

    fn split(&self, pattern: &Regex, text: &str) -> Vec<String> {
        pattern.split(text).map(str::to_owned).collect()
    }

    fn escape(&self, text: &str) -> String {
        regex::escape(text)
    }

    fn is_match(&self, pattern: &Regex, text: &str) -> bool {
        pattern.is_match(text)
    }
}
