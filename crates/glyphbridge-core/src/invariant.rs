// this_file: crates/glyphbridge-core/src/invariant.rs

//! Fail-fast handling for internal invariant violations
//!
//! A null engine handle, a face that lost its frozen state, parallel arrays
//! of different lengths: none of these can be caused by bad input. They mean
//! the resource graph is already corrupt, so the process stops here instead
//! of drawing garbage.

use std::fmt;

/// Log the violated invariant and abort the process.
#[cold]
#[inline(never)]
pub fn violated(what: fmt::Arguments<'_>) -> ! {
    log::error!("glyphbridge invariant violated: {}", what);
    std::process::abort()
}

/// Abort via [`violated`] unless `cond` holds.
///
/// ```ignore
/// ensure_invariant!(infos.len() == positions.len(), "{} infos vs {} positions", a, b);
/// ```
#[macro_export]
macro_rules! ensure_invariant {
    ($cond:expr $(,)?) => {
        if !$cond {
            $crate::invariant::violated(format_args!("{}", stringify!($cond)));
        }
    };
    ($cond:expr, $($arg:tt)+) => {
        if !$cond {
            $crate::invariant::violated(format_args!($($arg)+));
        }
    };
}
