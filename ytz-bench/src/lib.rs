//! Criterion benchmarks for `ytz-core` (see `benches/`).
