//! Built-in settings presets
//!
//! Each preset pairs a base tree of defaults with the merge engine, so
//! callers customize only the keys they care about:
//! 1. Toolchain: compilers, networks, reporter/exporter tooling, paths
//! 2. Coverage: instrumentation skip list
//! 3. Formatter: per-file-type rule overrides

pub mod coverage;
pub mod formatter;
pub mod toolchain;
