// Library target exists for the integration tests and criterion benchmarks.
// The binary entry point is main.rs; this file re-declares the module tree so
// that test harnesses can import types via `cwdr::engine::*` / `cwdr::store::*`.
// Most code is only exercised through the binary, so suppress dead_code warnings.
#![allow(dead_code)]

// Public: used directly by integration tests and benches
pub mod engine;
pub mod generator;
pub mod morse;
pub mod session;
pub mod store;

// Private: only the binary reads it, declared so its unit tests run with
// the library target
mod config;
