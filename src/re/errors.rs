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

use std::fmt::Display;

use thiserror::Error;

/// The pattern source is not valid in the engine's grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid pattern {pattern:?}: {message}")]
pub struct PatternCompileError {
    pattern: String,
    message: String,
}

impl PatternCompileError {
    pub fn new(pattern: &str, diagnostic: impl Display) -> Self {
        Self {
            pattern: pattern.to_owned(),
            message: diagnostic.to_string(),
        }
    }

    /// The offending pattern source.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The engine's diagnostic message.
    pub fn message(&self) -> &str {
        &self.message
    }
}
