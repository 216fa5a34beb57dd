//! Adapters that produce [`Either`] values, and combinators in point-free form.
//!
//! # Two failure channels
//!
//! A Rust callable can fail in two ways, and each has its own adapter family:
//!
//! | callable returns | adapter                                   | `Left` holds            |
//! |------------------|-------------------------------------------|-------------------------|
//! | `Result<V, E>`   | `from_supplier`, `from_function`, `from_bi_function` | the original `E` |
//! | `V` (may panic)  | `catch_supplier`, `catch_function`, `catch_bi_function` | a [`Panic`] with the original payload |
//!
//! Each adapter comes in two forms. The associated functions on [`Either`]
//! run the callable once, right away. The free functions in this module wrap
//! the callable into a reusable closure that returns an `Either` on every
//! call, which plugs straight into iterator pipelines:
//!
//! ```rust
//! use either_ops::{ops, Either};
//!
//! let parsed: Vec<i32> = ["0", "1", "2", "Fnord"]
//!     .into_iter()
//!     .map(ops::from_function(|s: &str| s.parse::<i32>()))
//!     .map(ops::or(-1))
//!     .collect();
//!
//! assert_eq!(parsed, vec![0, 1, 2, -1]);
//! ```
//!
//! Only the wrapped callable is guarded. Functions handed to later
//! combinators (`map`, `fold`, ...) run unguarded, and so does the fallback of
//! [`from_option_else`].
//!
//! # Point-free combinators
//!
//! Every [`Either`] method that takes a function has a counterpart here that
//! takes the same function(s) and returns `impl Fn(Either<L, R>) -> ...`.
//! Methods without arguments need no wrapper; name them directly, as in
//! `.map(Either::swap)`.

use crate::fallible::{FallibleBiFunction, FallibleFunction, FallibleSupplier};
use crate::{Either, Panic};

// ========== Immediate adapters ==========

impl<E, V> Either<E, V> {
    /// Run a fallible supplier once: `Ok(v)` becomes `Right(v)`, `Err(e)` becomes `Left(e)`.
    ///
    /// ```rust
    /// use either_ops::Either;
    ///
    /// let e = Either::from_supplier(|| "7".parse::<u8>());
    /// assert_eq!(e, Either::right(7));
    /// ```
    pub fn from_supplier<F>(supplier: F) -> Self
    where
        F: FnOnce() -> Result<V, E>,
    {
        captured_err(supplier())
    }

    /// Run a fallible one-argument function once on `input`.
    ///
    /// ```rust
    /// use either_ops::Either;
    ///
    /// let bad = Either::from_function(|s: &str| s.parse::<i32>(), "not a number");
    /// let err = bad.unwrap_left();
    /// assert_eq!(err.kind(), &std::num::IntErrorKind::InvalidDigit);
    /// ```
    pub fn from_function<T, F>(function: F, input: T) -> Self
    where
        F: FnOnce(T) -> Result<V, E>,
    {
        captured_err(function(input))
    }

    /// Run a fallible two-argument function once.
    pub fn from_bi_function<T, U, F>(function: F, first: T, second: U) -> Self
    where
        F: FnOnce(T, U) -> Result<V, E>,
    {
        captured_err(function(first, second))
    }
}

impl<V> Either<Panic, V> {
    /// Run `supplier` once, turning a panic into `Left(Panic)`.
    ///
    /// ```rust
    /// use either_ops::Either;
    ///
    /// let values = vec![1, 2, 3];
    /// let out_of_bounds = Either::catch_supplier(|| values[10]);
    ///
    /// assert!(out_of_bounds.is_left());
    /// assert_eq!(Either::catch_supplier(|| values[0]).unwrap_right(), 1);
    /// ```
    pub fn catch_supplier<F>(supplier: F) -> Self
    where
        F: FnOnce() -> V,
    {
        captured_panic(Panic::catch(supplier))
    }

    /// Run `function` once on `input`, turning a panic into `Left(Panic)`.
    pub fn catch_function<T, F>(function: F, input: T) -> Self
    where
        F: FnOnce(T) -> V,
    {
        captured_panic(Panic::catch(move || function(input)))
    }

    /// Run a two-argument `function` once, turning a panic into `Left(Panic)`.
    pub fn catch_bi_function<T, U, F>(function: F, first: T, second: U) -> Self
    where
        F: FnOnce(T, U) -> V,
    {
        captured_panic(Panic::catch(move || function(first, second)))
    }
}

fn captured_err<E, V>(result: Result<V, E>) -> Either<E, V> {
    #[cfg(feature = "tracing")]
    if result.is_err() {
        tracing::trace!(
            error_type = std::any::type_name::<E>(),
            "fallible call returned an error, captured as Left"
        );
    }
    Either::from_result(result)
}

fn captured_panic<V>(result: Result<V, Panic>) -> Either<Panic, V> {
    #[cfg(feature = "tracing")]
    if let Err(panic) = &result {
        tracing::debug!(panic_message = ?panic.message(), "caught panic, captured as Left");
    }
    Either::from_result(result)
}

// ========== Lifting adapters ==========

/// Wrap a fallible supplier so each call yields an [`Either`].
pub fn from_supplier<V, E, F>(supplier: F) -> impl Fn() -> Either<E, V>
where
    F: FallibleSupplier<V, E>,
{
    move || captured_err(supplier())
}

/// Wrap a fallible function so each call yields an [`Either`].
///
/// ```rust
/// use either_ops::{ops, Either};
///
/// let parse = ops::from_function(|s: &str| s.parse::<u16>());
///
/// assert_eq!(parse("8080"), Either::right(8080));
/// assert!(parse("http").is_left());
/// ```
pub fn from_function<T, R, E, F>(function: F) -> impl Fn(T) -> Either<E, R>
where
    F: FallibleFunction<T, R, E>,
{
    move |input| captured_err(function(input))
}

/// Wrap a fallible two-argument function so each call yields an [`Either`].
pub fn from_bi_function<T, U, R, E, F>(function: F) -> impl Fn(T, U) -> Either<E, R>
where
    F: FallibleBiFunction<T, U, R, E>,
{
    move |first, second| captured_err(function(first, second))
}

/// Wrap a supplier so a panic on any call yields `Left(Panic)`.
pub fn catch_supplier<V, F>(supplier: F) -> impl Fn() -> Either<Panic, V>
where
    F: Fn() -> V,
{
    move || captured_panic(Panic::catch(&supplier))
}

/// Wrap a function so a panic on any call yields `Left(Panic)`.
///
/// ```rust
/// use either_ops::ops;
///
/// let first_char = ops::catch_function(|s: &str| s.chars().next().map(|c| c.len_utf8()).unwrap());
///
/// assert!(first_char("abc").is_right());
/// assert!(first_char("").is_left());
/// ```
pub fn catch_function<T, R, F>(function: F) -> impl Fn(T) -> Either<Panic, R>
where
    F: Fn(T) -> R,
{
    move |input| captured_panic(Panic::catch(|| function(input)))
}

/// Wrap a two-argument function so a panic on any call yields `Left(Panic)`.
pub fn catch_bi_function<T, U, R, F>(function: F) -> impl Fn(T, U) -> Either<Panic, R>
where
    F: Fn(T, U) -> R,
{
    move |first, second| captured_panic(Panic::catch(|| function(first, second)))
}

/// Turn an `Option` into an [`Either`], using a clone of `fallback` as the
/// `Left` for `None`.
pub fn from_option<L, R>(fallback: L) -> impl Fn(Option<R>) -> Either<L, R>
where
    L: Clone,
{
    move |value| Either::from_option(value, fallback.clone())
}

/// Turn an `Option` into an [`Either`], calling `fallback` for the `Left` on
/// `None`. A panicking `fallback` is not caught.
pub fn from_option_else<L, R, F>(fallback: F) -> impl Fn(Option<R>) -> Either<L, R>
where
    F: Fn() -> L,
{
    move |value| Either::from_option_else(value, &fallback)
}

// ========== Point-free combinators ==========

/// Point-free [`Either::map`].
pub fn map<L, R, R2, F>(f: F) -> impl Fn(Either<L, R>) -> Either<L, R2>
where
    F: Fn(R) -> R2,
{
    move |e| e.map(&f)
}

/// Point-free [`Either::right_map`].
pub fn right_map<L, R, R2, F>(f: F) -> impl Fn(Either<L, R>) -> Either<L, R2>
where
    F: Fn(R) -> R2,
{
    move |e| e.right_map(&f)
}

/// Point-free [`Either::left_map`].
pub fn left_map<L, R, L2, F>(f: F) -> impl Fn(Either<L, R>) -> Either<L2, R>
where
    F: Fn(L) -> L2,
{
    move |e| e.left_map(&f)
}

/// Point-free [`Either::bimap`].
///
/// ```rust
/// use either_ops::{ops, Either};
///
/// let tag = ops::bimap(|l: &str| format!("{}L", l), |r: &str| format!("{}R", r));
///
/// assert_eq!(tag(Either::left("L")), Either::left("LL".to_string()));
/// assert_eq!(tag(Either::right("R")), Either::right("RR".to_string()));
/// ```
pub fn bimap<L, R, L2, R2, FL, FR>(
    on_left: FL,
    on_right: FR,
) -> impl Fn(Either<L, R>) -> Either<L2, R2>
where
    FL: Fn(L) -> L2,
    FR: Fn(R) -> R2,
{
    move |e| e.bimap(&on_left, &on_right)
}

/// Point-free [`Either::flat_map`].
pub fn flat_map<L, R, R2, F>(f: F) -> impl Fn(Either<L, R>) -> Either<L, R2>
where
    F: Fn(R) -> Either<L, R2>,
{
    move |e| e.flat_map(&f)
}

/// Point-free [`Either::right_flat_map`].
pub fn right_flat_map<L, R, R2, F>(f: F) -> impl Fn(Either<L, R>) -> Either<L, R2>
where
    F: Fn(R) -> Either<L, R2>,
{
    move |e| e.right_flat_map(&f)
}

/// Point-free [`Either::left_flat_map`].
pub fn left_flat_map<L, R, L2, F>(f: F) -> impl Fn(Either<L, R>) -> Either<L2, R>
where
    F: Fn(L) -> Either<L2, R>,
{
    move |e| e.left_flat_map(&f)
}

/// Point-free [`Either::bi_flat_map`].
pub fn bi_flat_map<L, R, L2, R2, FL, FR>(
    on_left: FL,
    on_right: FR,
) -> impl Fn(Either<L, R>) -> Either<L2, R2>
where
    FL: Fn(L) -> Either<L2, R2>,
    FR: Fn(R) -> Either<L2, R2>,
{
    move |e| e.bi_flat_map(&on_left, &on_right)
}

/// Point-free [`Either::fold`].
pub fn fold<L, R, V, FL, FR>(on_left: FL, on_right: FR) -> impl Fn(Either<L, R>) -> V
where
    FL: Fn(L) -> V,
    FR: Fn(R) -> V,
{
    move |e| e.fold(&on_left, &on_right)
}

/// Point-free [`Either::or_else`].
pub fn or_else<L, R, F>(fallback: F) -> impl Fn(Either<L, R>) -> R
where
    F: Fn(L) -> R,
{
    move |e| e.or_else(&fallback)
}

/// Point-free [`Either::or`]. Each `Left` is replaced by a clone of `fallback`.
pub fn or<L, R>(fallback: R) -> impl Fn(Either<L, R>) -> R
where
    R: Clone,
{
    move |e| match e {
        Either::Left(_) => fallback.clone(),
        Either::Right(r) => r,
    }
}
