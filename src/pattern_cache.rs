use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use dashmap::DashMap;
use log::{debug, trace};
use regex::Regex;

use crate::{interfaces::PatternEngine, re::errors::PatternCompileError};

/// Either a pattern source string or a pattern that was already compiled
/// elsewhere.
#[derive(Debug)]
pub enum PatternRef<'a, P> {
    Source(&'a str),
    Precompiled(Arc<P>),
}

impl<P> Clone for PatternRef<'_, P> {
    fn clone(&self) -> Self {
        match self {
            Self::Source(source) => Self::Source(source),
            Self::Precompiled(pattern) => Self::Precompiled(Arc::clone(pattern)),
        }
    }
}

impl<'a, P> From<&'a str> for PatternRef<'a, P> {
    fn from(source: &'a str) -> Self {
        Self::Source(source)
    }
}

impl<'a, P> From<&'a String> for PatternRef<'a, P> {
    fn from(source: &'a String) -> Self {
        Self::Source(source.as_str())
    }
}

impl<P> From<Arc<P>> for PatternRef<'_, P> {
    fn from(pattern: Arc<P>) -> Self {
        Self::Precompiled(pattern)
    }
}

impl<P> From<&Arc<P>> for PatternRef<'_, P> {
    fn from(pattern: &Arc<P>) -> Self {
        Self::Precompiled(Arc::clone(pattern))
    }
}

impl From<Regex> for PatternRef<'_, Regex> {
    fn from(pattern: Regex) -> Self {
        Self::Precompiled(Arc::new(pattern))
    }
}

// `Regex` clones share the compiled program, so this is cheap.
impl From<&Regex> for PatternRef<'_, Regex> {
    fn from(pattern: &Regex) -> Self {
        Self::Precompiled(Arc::new(pattern.clone()))
    }
}

/// Concurrent map from pattern source text to its compiled form.
///
/// Lookups take a shared shard lock, inserts an exclusive one. Compilation
/// on a miss happens outside of any lock, so concurrent misses on the same
/// source may compile independently; the last insert wins. Entries are never
/// evicted.
pub struct PatternCache<E: PatternEngine> {
    engine: E,
    cache: DashMap<String, Arc<E::Pattern>>,
    // Read and written without the map's locks.
    enabled: AtomicBool,
}

impl<E: PatternEngine> PatternCache<E> {
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            cache: DashMap::new(),
            enabled: AtomicBool::new(true),
        }
    }

    pub fn with_capacity(engine: E, capacity: usize) -> Self {
        Self {
            engine,
            cache: DashMap::with_capacity(capacity),
            enabled: AtomicBool::new(true),
        }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Turns the cache on or off for subsequent lookups. Existing entries
    /// are kept in both directions.
    pub fn set_enabled(&self, enabled: bool) {
        debug!("Pattern cache {}", if enabled { "enabled" } else { "disabled" });
        self.enabled.store(enabled, Ordering::Relaxed);
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    pub fn contains(&self, source: &str) -> bool {
        self.cache.contains_key(source)
    }

    /// Resolves a pattern reference to a compiled pattern. Precompiled
    /// patterns are returned as is and never touch the cache.
    pub fn resolve(&self, pattern: PatternRef<'_, E::Pattern>) -> Result<Arc<E::Pattern>, PatternCompileError> {
        match pattern {
            PatternRef::Precompiled(pattern) => Ok(pattern),
            PatternRef::Source(source) => self.compile(source),
        }
    }

    /// Returns the compiled form of `source`, compiling it on a cache miss
    /// or every time if the cache is disabled.
    pub fn compile(&self, source: &str) -> Result<Arc<E::Pattern>, PatternCompileError> {
        if !self.is_enabled() {
            return self.compile_uncached(source);
        }

        if let Some(pattern) = self.cache.get(source) {
            trace!("Pattern cache hit: {source:?}");
            return Ok(Arc::clone(pattern.value()));
        }

        trace!("Pattern cache miss: {source:?}");
        let pattern = self.compile_uncached(source)?;
        self.cache.insert(source.to_owned(), Arc::clone(&pattern));
        trace!("Pattern cached: {source:?} ({} entries)", self.cache.len());
        Ok(pattern)
    }

    fn compile_uncached(&self, source: &str) -> Result<Arc<E::Pattern>, PatternCompileError> {
        self.engine
            .compile(source)
            .map(Arc::new)
            .map_err(|err| PatternCompileError::new(source, err))
    }
}

impl<E: PatternEngine + Default> Default for PatternCache<E> {
    fn default() -> Self {
        Self::new(E::default())
    }
}
