//! Stack growth for the recursive grammar rules.
//!
//! Expressions and blocks nest without limit (`((((x))))`, `IF` inside `IF`
//! inside `WHILE`, ...), and each level is a few parser frames. The
//! recursive entry points wrap themselves in [`ensure_sufficient_stack`] so
//! that deep nesting grows the stack instead of overflowing it.

/// Grow the stack when less than this remains.
const RED_ZONE: usize = 100 * 1024;

/// Size of each new stack segment.
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first growing the stack if it is close to running out.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
