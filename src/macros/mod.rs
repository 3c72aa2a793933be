// crate::re::Outcome

/// Resolves a pattern reference through the cache or returns early
/// from the enclosing function with `Outcome::degraded($neutral, err)`.
///
/// Every forgiving operation of the facade starts with the same
/// resolve-or-fallback step; `$neutral` is only evaluated on failure,
/// so it may allocate (e.g. copy the subject text).
macro_rules! resolve_or_degrade {
    ($cache:expr, $pattern:expr, $neutral:expr) => {{
        match $cache.resolve($pattern.into()) {
            Ok(compiled) => compiled,
            Err(err) => return $crate::re::Outcome::degraded($neutral, err),
        }
    }};
}

pub(crate) use resolve_or_degrade;
