use std::sync::{Arc, Barrier};

use crate::{
    pattern_cache::{PatternCache, PatternRef},
    re::re::Re,
};

use super::counting_engine::CountingEngine;

fn init_logger() {
    let _ = env_logger::builder()
        .is_test(true)
        .filter_level(log::LevelFilter::Trace)
        .try_init();
}

fn counting_cache() -> (CountingEngine, Arc<PatternCache<CountingEngine>>) {
    let engine = CountingEngine::new();
    let cache = Arc::new(PatternCache::new(engine.clone()));
    (engine, cache)
}

#[test]
fn compiles_each_source_once() {
    init_logger();
    let (engine, cache) = counting_cache();
    let re = Re::with_cache(cache.clone());

    assert!(cache.is_enabled());
    for _ in 0..5 {
        assert_eq!(re.search(r"\d+", "abc 123").unwrap().full(), "123");
        assert_eq!(re.split(r"\s+", "a b  c"), vec!["a", "b", "c"]);
    }
    assert_eq!(engine.compiles(), 2);
    assert_eq!(cache.len(), 2);
    assert!(cache.contains(r"\d+"));
    assert!(cache.contains(r"\s+"));
}

#[test]
fn cached_pattern_behaves_like_fresh_one() {
    let (_, cache) = counting_cache();
    let first = cache.compile(r"(\w+)@(\w+)").unwrap();
    let second = cache.compile(r"(\w+)@(\w+)").unwrap();
    assert!(Arc::ptr_eq(&first, &second));

    let fresh = regex::Regex::new(r"(\w+)@(\w+)").unwrap();
    let text = "mail me at user@host or admin@example";
    let cached: Vec<_> = first.find_iter(text).map(|m| m.as_str()).collect();
    let uncached: Vec<_> = fresh.find_iter(text).map(|m| m.as_str()).collect();
    assert_eq!(cached, uncached);
}

#[test]
fn disabled_cache_compiles_every_call() {
    init_logger();
    let (engine, cache) = counting_cache();
    let re = Re::with_cache(cache.clone());
    re.set_cache_enabled(false);
    assert!(!cache.is_enabled());

    re.search(r"\d", "1");
    re.find_all(r"\d", "1 2");
    re.substitute(r"\d", "x", "1");
    re.substitute_by_fn(r"\d", |s| s.repeat(2), "1");
    re.split(r"\d", "a1b");
    re.is_match(r"\d", "1");

    assert_eq!(engine.compiles(), 6);
    assert!(cache.is_empty());
}

#[test]
fn toggling_keeps_existing_entries() {
    let (engine, cache) = counting_cache();
    cache.compile("abc").unwrap();
    assert_eq!(engine.compiles(), 1);

    cache.set_enabled(false);
    assert_eq!(cache.len(), 1);
    cache.compile("abc").unwrap();
    assert_eq!(engine.compiles(), 2);

    cache.set_enabled(true);
    cache.compile("abc").unwrap();
    assert_eq!(engine.compiles(), 2);
    assert_eq!(cache.len(), 1);
}

#[test]
fn precompiled_pattern_skips_cache() {
    let (engine, cache) = counting_cache();
    let re = Re::with_cache(cache.clone());
    let regex = regex::Regex::new(r"[aeiou]").unwrap();

    assert_eq!(re.substitute(&regex, "*", "banana"), "b*n*n*");
    let shared = Arc::new(regex);
    assert_eq!(re.find_all(&shared, "audio").len(), 4);
    assert_eq!(re.find_all(PatternRef::Precompiled(shared), "xyz").len(), 0);

    assert_eq!(engine.compiles(), 0);
    assert!(cache.is_empty());
}

#[test]
fn invalid_pattern_is_compiled_again_on_retry() {
    let (engine, cache) = counting_cache();
    assert!(cache.compile("a{2,1}").is_err());
    assert!(cache.compile("a{2,1}").is_err());
    assert_eq!(engine.compiles(), 2);
    assert!(cache.is_empty());
}

#[test]
fn concurrent_resolve_of_novel_pattern() {
    const THREADS: usize = 256;

    init_logger();
    let (engine, cache) = counting_cache();
    let re = Re::with_cache(cache.clone());
    let barrier = Barrier::new(THREADS);

    std::thread::scope(|scope| {
        for i in 0..THREADS {
            let re = re.clone();
            let barrier = &barrier;
            scope.spawn(move || {
                barrier.wait();
                let text = format!("id-{i}-end");
                let found = re.search(r"id-(\d+)-end", &text).expect("pattern must match");
                assert_eq!(found.group(1), i.to_string());
            });
        }
    });

    assert_eq!(cache.len(), 1);
    let compiles = engine.compiles();
    assert!(compiles >= 1 && compiles <= THREADS, "unexpected compile count {compiles}");
}

#[test]
fn concurrent_toggle_and_resolve() {
    let (_, cache) = counting_cache();
    let re = Re::with_cache(cache.clone());

    std::thread::scope(|scope| {
        for worker in 0..8 {
            let re = re.clone();
            scope.spawn(move || {
                for i in 0..200 {
                    if worker == 0 {
                        re.set_cache_enabled(i % 2 == 0);
                    }
                    let pattern = format!("w{}", i % 10);
                    assert!(re.is_match(&pattern, &format!("xw{}y", i % 10)));
                }
            });
        }
    });

    assert!(cache.len() <= 10);
}
