/// Number of cursors the explicit traversal stack holds inline before spilling (`smallvec`) or overflowing (no allocator).
#[allow(dead_code)] // unused when the stack is a plain Vec
pub(crate) const INLINE_STACK_SIZE: usize = 128;

#[cfg(feature = "smallvec")]
pub(crate) type Stack<T> = smallvec::SmallVec<[T; INLINE_STACK_SIZE]>;
#[cfg(all(feature = "alloc", not(feature = "smallvec")))]
pub(crate) type Stack<T> = alloc::vec::Vec<T>;
#[cfg(all(
    not(feature = "smallvec"),
    not(feature = "alloc"),
))]
pub(crate) type Stack<T> = arrayvec::ArrayVec<[T; INLINE_STACK_SIZE]>;

/// Marks a branch which a broken storage invariant would be the only way to reach. Panics in debug builds and is undefined behavior otherwise.
#[inline]
#[cfg_attr(debug_assertions, track_caller)]
pub(crate) unsafe fn unreachable_debugchecked(msg: &str) -> ! {
    #[cfg(debug_assertions)]
    {
        unreachable!("{}", msg)
    }
    #[cfg(not(debug_assertions))]
    {
        core::hint::unreachable_unchecked()
    }
}

/// Runs `f`, aborting the process instead of unwinding if it panics.
#[inline]
pub(crate) fn abort_on_panic<R>(f: impl FnOnce() -> R) -> R {
    #[cfg(feature = "unwind_safety")]
    {
        std::panic::catch_unwind(
            std::panic::AssertUnwindSafe(f)
        ).unwrap_or_else(|_| std::process::abort())
    }
    #[cfg(not(feature = "unwind_safety"))]
    {
        f()
    }
}

/// Routes `log` output of the code under test to the test harness, which captures it per test.
#[cfg(test)]
pub(crate) fn init_test_logging() {
    // Fails for every test but the first one to get here, which is fine
    let _ = simplelog::TestLogger::init(simplelog::LevelFilter::Trace, simplelog::Config::default());
}
