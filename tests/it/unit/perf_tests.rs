//! Unit tests for perf module.

use pillsplit::perf::ScopedTimer;

#[test]
fn test_scoped_timer_creation() {
    // High threshold, so dropping does not log
    let timer = ScopedTimer::new("test_op", 1000.0);
    assert_eq!(timer.name(), "test_op");
    assert!(timer.elapsed_ms() >= 0.0);
}

#[test]
fn test_profiling_timer_uses_handler_threshold() {
    let timer = ScopedTimer::for_profiling("handle_pointer_up");
    assert_eq!(timer.name(), "handle_pointer_up");
}

#[test]
fn test_profile_scope_macro_compiles_in_any_build() {
    fn handler() -> u32 {
        pillsplit::profile_scope!("handler");
        pillsplit::profile_scope!("handler_custom", 5.0);
        7
    }
    assert_eq!(handler(), 7);
}
