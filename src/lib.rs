mod interfaces;
mod pattern_cache;
mod regex_engine;
pub mod re;

/// Repeated boilerplate of the facade operations lives here as
/// macros, named after what they do, so every operation reads
/// as "resolve, then delegate".
mod macros;

#[cfg(test)]
mod tests;

pub use interfaces::PatternEngine;
pub use pattern_cache::{PatternCache, PatternRef};
pub use re::{
    MatchResult, Outcome, PatternCompileError, RE,
    find_all, is_match, quote, re::Re, search, set_cache_enabled, split, substitute,
    substitute_by_fn,
};
pub use regex_engine::RegexEngine;
