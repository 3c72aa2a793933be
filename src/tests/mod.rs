mod pattern_cache_tests;
