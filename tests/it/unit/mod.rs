//! Unit tests for pillsplit.

mod perf_tests;
mod store_tests;
