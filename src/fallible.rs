//! Callables that declare failure through their return type.
//!
//! These traits name the shape of a `Result`-returning closure so the lifting
//! adapters in [`crate::ops`] can accept one. Every closure or function item
//! with a matching signature implements them automatically.
//!
//! ```
//! use either_ops::{Either, FallibleFunction};
//!
//! fn run<F: FallibleFunction<&'static str, u8, std::num::ParseIntError>>(f: F) -> Either<std::num::ParseIntError, u8> {
//!     f.attempt("12")
//! }
//!
//! assert_eq!(run(|s: &str| s.parse::<u8>()), Either::right(12));
//! ```

use crate::Either;

/// A zero-argument callable that may fail with `E`.
pub trait FallibleSupplier<V, E>: Fn() -> Result<V, E> {
    /// Invoke the supplier, placing the outcome in an [`Either`].
    fn attempt(&self) -> Either<E, V> {
        self().into()
    }
}

impl<F, V, E> FallibleSupplier<V, E> for F where F: Fn() -> Result<V, E> {}

/// A one-argument callable that may fail with `E`.
pub trait FallibleFunction<T, R, E>: Fn(T) -> Result<R, E> {
    /// Invoke the function on `input`, placing the outcome in an [`Either`].
    fn attempt(&self, input: T) -> Either<E, R> {
        self(input).into()
    }
}

impl<F, T, R, E> FallibleFunction<T, R, E> for F where F: Fn(T) -> Result<R, E> {}

/// A two-argument callable that may fail with `E`.
pub trait FallibleBiFunction<T, U, R, E>: Fn(T, U) -> Result<R, E> {
    /// Invoke the function on both inputs, placing the outcome in an [`Either`].
    fn attempt(&self, first: T, second: U) -> Either<E, R> {
        self(first, second).into()
    }
}

impl<F, T, U, R, E> FallibleBiFunction<T, U, R, E> for F where F: Fn(T, U) -> Result<R, E> {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::num::ParseIntError;

    fn checked_div(a: i32, b: i32) -> Result<i32, String> {
        if b == 0 {
            Err("division by zero".to_string())
        } else {
            Ok(a / b)
        }
    }

    #[test]
    fn test_supplier_attempt() {
        let ok = || Ok::<_, String>(5);
        assert_eq!(FallibleSupplier::attempt(&ok), Either::right(5));

        let err = || Err::<i32, _>("empty".to_string());
        assert_eq!(
            FallibleSupplier::attempt(&err),
            Either::left("empty".to_string())
        );
    }

    #[test]
    fn test_function_attempt() {
        let parse = |s: &str| s.parse::<i32>();
        assert_eq!(FallibleFunction::attempt(&parse, "17"), Either::right(17));
        assert!(FallibleFunction::<&str, i32, ParseIntError>::attempt(&parse, "x").is_left());
    }

    #[test]
    fn test_bi_function_attempt_with_fn_item() {
        assert_eq!(
            FallibleBiFunction::attempt(&checked_div, 9, 3),
            Either::right(3)
        );
        assert_eq!(
            FallibleBiFunction::attempt(&checked_div, 1, 0),
            Either::left("division by zero".to_string())
        );
    }
}
