// this_file: crates/glyphbridge-core/src/narrow.rs

//! Checked numeric narrowing at the shaping-engine boundary
//!
//! The engine's C API speaks `unsigned int`, `int` and fixed integer
//! positions while Rust hands out `usize` lengths and floating sizes. Every
//! crossing goes through here. The `try_` forms report failure; the plain
//! forms treat failure as a broken invariant.

use crate::invariant;

/// Integer to integer, `None` when `value` does not fit in `T`.
pub fn try_narrow<T, V>(value: V) -> Option<T>
where
    T: TryFrom<V>,
{
    T::try_from(value).ok()
}

/// Integer to integer, aborting when `value` does not fit in `T`.
pub fn narrow<T, V>(value: V) -> T
where
    T: TryFrom<V>,
    V: Copy + std::fmt::Display,
{
    match try_narrow(value) {
        Some(narrowed) => narrowed,
        None => invariant::violated(format_args!(
            "{} does not fit in {}",
            value,
            std::any::type_name::<T>()
        )),
    }
}

/// Integers that a float can convert into without loss.
pub trait ExactFromF64: Sized {
    fn exact_from_f64(value: f64) -> Option<Self>;
}

macro_rules! impl_exact_from_f64 {
    ($($t:ty),*) => {
        $(
            impl ExactFromF64 for $t {
                fn exact_from_f64(value: f64) -> Option<Self> {
                    let cast = value as $t;
                    (cast as f64 == value).then_some(cast)
                }
            }
        )*
    };
}

impl_exact_from_f64!(u8, u16, u32, i8, i16, i32);

/// Float to integer, `None` unless the conversion is exact.
///
/// Fractional values, NaN, infinities and out-of-range values all fail.
pub fn try_narrow_f64<T: ExactFromF64>(value: f64) -> Option<T> {
    T::exact_from_f64(value)
}

/// Float to integer, aborting unless the conversion is exact.
pub fn narrow_f64<T: ExactFromF64>(value: f64) -> T {
    match try_narrow_f64(value) {
        Some(narrowed) => narrowed,
        None => invariant::violated(format_args!(
            "{} is not exactly representable as {}",
            value,
            std::any::type_name::<T>()
        )),
    }
}
