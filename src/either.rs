//! A value holding exactly one of two alternatives.
//!
//! [`Either<L, R>`] is a closed sum type: every value is a `Left(L)` or a
//! `Right(R)`, never both and never neither. The type itself gives the sides no
//! meaning. By convention `Right` is the primary outcome and `Left` the
//! alternative, so the right-biased operations ([`Either::map`],
//! [`Either::flat_map`], iteration) act on `Right` and pass a `Left` along
//! untouched.
//!
//! # Short-circuiting
//!
//! Once a value is `Left`, a chain of right-biased steps stops doing work and
//! carries the `Left` through to the end:
//!
//! ```rust
//! use either_ops::Either;
//!
//! let parsed: Either<&str, i32> = Either::left("not a number");
//!
//! let doubled = parsed
//!     .map(|n| n * 2)
//!     .flat_map(|n| if n > 0 { Either::right(n) } else { Either::left("negative") });
//!
//! assert_eq!(doubled, Either::left("not a number"));
//! ```
//!
//! Only the left-biased and two-sided operations ([`Either::left_map`],
//! [`Either::left_flat_map`], [`Either::bimap`], [`Either::bi_flat_map`],
//! [`Either::swap`], [`Either::fold`], [`Either::or_else`]) look at a `Left`.
//!
//! Panics raised by a function handed to any of these combinators are not
//! caught. Use the adapters in [`crate::ops`] to turn a failing computation
//! into a `Left` in the first place.

use std::fmt;

/// Either a `Left(L)` or a `Right(R)`.
///
/// Equality, ordering and hashing are structural and include the variant, so
/// `Left(x)` and `Right(x)` never compare equal.
///
/// ```rust
/// use either_ops::Either;
///
/// fn classify(n: i32) -> Either<String, u32> {
///     if n < 0 {
///         Either::left(format!("{} is negative", n))
///     } else {
///         Either::right(n as u32)
///     }
/// }
///
/// assert_eq!(classify(4), Either::Right(4));
/// assert_eq!(classify(-1).to_string(), "left<-1 is negative>");
///
/// let described = classify(9).fold(|msg| msg, |n| format!("ok: {}", n));
/// assert_eq!(described, "ok: 9");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Either<L, R> {
    /// The alternative outcome
    Left(L),
    /// The primary outcome
    Right(R),
}

impl<L, R> Either<L, R> {
    // ========== Construction ==========

    /// Wrap `value` as a `Left`.
    #[inline]
    pub fn left(value: L) -> Self {
        Either::Left(value)
    }

    /// Wrap `value` as a `Right`.
    #[inline]
    pub fn right(value: R) -> Self {
        Either::Right(value)
    }

    /// `Right` with the contents of `value`, or `Left(fallback)` when it is `None`.
    ///
    /// ```rust
    /// use either_ops::Either;
    ///
    /// assert_eq!(Either::from_option(Some(3), "missing"), Either::right(3));
    /// assert_eq!(Either::<_, i32>::from_option(None, "missing"), Either::left("missing"));
    /// ```
    #[inline]
    pub fn from_option(value: Option<R>, fallback: L) -> Self {
        match value {
            Some(r) => Either::Right(r),
            None => Either::Left(fallback),
        }
    }

    /// Like [`Either::from_option`], computing the `Left` only when needed.
    ///
    /// `fallback` runs outside of any panic guard; a panicking fallback
    /// propagates to the caller.
    #[inline]
    pub fn from_option_else<F>(value: Option<R>, fallback: F) -> Self
    where
        F: FnOnce() -> L,
    {
        match value {
            Some(r) => Either::Right(r),
            None => Either::Left(fallback()),
        }
    }

    /// `Ok` becomes `Right`, `Err` becomes `Left`.
    #[inline]
    pub fn from_result(result: Result<R, L>) -> Self {
        match result {
            Ok(r) => Either::Right(r),
            Err(l) => Either::Left(l),
        }
    }

    // ========== Inspection ==========

    /// `true` for a `Left`.
    #[inline]
    pub fn is_left(&self) -> bool {
        matches!(self, Either::Left(_))
    }

    /// `true` for a `Right`. Always the opposite of [`Either::is_left`].
    #[inline]
    pub fn is_right(&self) -> bool {
        matches!(self, Either::Right(_))
    }

    /// Borrow the payload in place.
    ///
    /// ```rust
    /// use either_ops::Either;
    ///
    /// let owned: Either<String, Vec<u8>> = Either::left("abc".to_string());
    /// let len = owned.as_ref().fold(|s| s.len(), |v| v.len());
    ///
    /// assert_eq!(len, 3);
    /// assert!(owned.is_left());
    /// ```
    #[inline]
    pub fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Right(r),
        }
    }

    /// Mutably borrow the payload in place.
    #[inline]
    pub fn as_mut(&mut self) -> Either<&mut L, &mut R> {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Right(r),
        }
    }

    // ========== Mapping ==========

    /// Apply `on_left` to a `Left` payload or `on_right` to a `Right` payload,
    /// keeping the variant.
    ///
    /// Exactly one of the two functions runs.
    ///
    /// ```rust
    /// use either_ops::Either;
    ///
    /// let l: Either<&str, &str> = Either::left("L");
    /// let r: Either<&str, &str> = Either::right("R");
    ///
    /// assert_eq!(l.bimap(|s| s.to_lowercase(), |s| s.len()), Either::left("l".to_string()));
    /// assert_eq!(r.bimap(|s| s.to_lowercase(), |s| s.len()), Either::right(1));
    /// ```
    #[inline]
    pub fn bimap<L2, R2, FL, FR>(self, on_left: FL, on_right: FR) -> Either<L2, R2>
    where
        FL: FnOnce(L) -> L2,
        FR: FnOnce(R) -> R2,
    {
        match self {
            Either::Left(l) => Either::Left(on_left(l)),
            Either::Right(r) => Either::Right(on_right(r)),
        }
    }

    /// Transform a `Right` payload. A `Left` is returned as is and `f` is not
    /// called.
    ///
    /// ```rust
    /// use either_ops::Either;
    ///
    /// let r: Either<(), i32> = Either::right(20);
    /// assert_eq!(r.right_map(|n| n + 1), Either::right(21));
    /// ```
    #[inline]
    pub fn right_map<R2, F>(self, f: F) -> Either<L, R2>
    where
        F: FnOnce(R) -> R2,
    {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Right(f(r)),
        }
    }

    /// Right-biased map, the same as [`Either::right_map`].
    #[inline]
    pub fn map<R2, F>(self, f: F) -> Either<L, R2>
    where
        F: FnOnce(R) -> R2,
    {
        self.right_map(f)
    }

    /// Transform a `Left` payload. A `Right` is returned as is and `f` is not
    /// called.
    ///
    /// Also the way to widen the left type before chaining:
    ///
    /// ```rust
    /// use either_ops::Either;
    ///
    /// let narrow: Either<u8, &str> = Either::left(7);
    /// let wide: Either<u64, &str> = narrow.left_map(Into::into);
    /// assert_eq!(wide, Either::left(7u64));
    /// ```
    #[inline]
    pub fn left_map<L2, F>(self, f: F) -> Either<L2, R>
    where
        F: FnOnce(L) -> L2,
    {
        match self {
            Either::Left(l) => Either::Left(f(l)),
            Either::Right(r) => Either::Right(r),
        }
    }

    // ========== Chaining ==========

    /// Replace a `Right` with the `Either` returned by `f`.
    ///
    /// `f` may produce either variant. A `Left` is passed through without
    /// calling `f`.
    ///
    /// ```rust
    /// use either_ops::Either;
    ///
    /// fn half(n: i32) -> Either<String, i32> {
    ///     if n % 2 == 0 {
    ///         Either::right(n / 2)
    ///     } else {
    ///         Either::left(format!("{} is odd", n))
    ///     }
    /// }
    ///
    /// assert_eq!(Either::right(12).right_flat_map(half).right_flat_map(half), Either::right(3));
    /// assert_eq!(
    ///     Either::right(6).right_flat_map(half).right_flat_map(half),
    ///     Either::left("3 is odd".to_string())
    /// );
    /// ```
    #[inline]
    pub fn right_flat_map<R2, F>(self, f: F) -> Either<L, R2>
    where
        F: FnOnce(R) -> Either<L, R2>,
    {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => f(r),
        }
    }

    /// Right-biased flat-map, the same as [`Either::right_flat_map`].
    #[inline]
    pub fn flat_map<R2, F>(self, f: F) -> Either<L, R2>
    where
        F: FnOnce(R) -> Either<L, R2>,
    {
        self.right_flat_map(f)
    }

    /// Replace a `Left` with the `Either` returned by `f`, which may recover
    /// into a `Right`. A `Right` is passed through without calling `f`.
    ///
    /// ```rust
    /// use either_ops::Either;
    ///
    /// let missing: Either<&str, u16> = Either::left("no port given");
    /// assert_eq!(missing.left_flat_map(|_| Either::<&str, u16>::right(8080)), Either::right(8080));
    /// ```
    #[inline]
    pub fn left_flat_map<L2, F>(self, f: F) -> Either<L2, R>
    where
        F: FnOnce(L) -> Either<L2, R>,
    {
        match self {
            Either::Left(l) => f(l),
            Either::Right(r) => Either::Right(r),
        }
    }

    /// Replace the whole value with the result of whichever function matches
    /// the current variant. Unlike the one-sided flat-maps, both the variant
    /// and the payload types may change.
    #[inline]
    pub fn bi_flat_map<L2, R2, FL, FR>(self, on_left: FL, on_right: FR) -> Either<L2, R2>
    where
        FL: FnOnce(L) -> Either<L2, R2>,
        FR: FnOnce(R) -> Either<L2, R2>,
    {
        match self {
            Either::Left(l) => on_left(l),
            Either::Right(r) => on_right(r),
        }
    }

    /// Exchange the sides, keeping the payload. `e.swap().swap() == e`.
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Either::Left(l) => Either::Right(l),
            Either::Right(r) => Either::Left(r),
        }
    }

    // ========== Elimination ==========

    /// Collapse into a single value by running the function for the current
    /// variant.
    ///
    /// Every other operation can be written with `fold` and the two
    /// constructors:
    ///
    /// ```rust
    /// use either_ops::Either;
    ///
    /// let e: Either<&str, &str> = Either::right("R");
    /// let swapped = e.fold(Either::<&str, &str>::right, Either::left);
    /// assert_eq!(swapped, e.swap());
    /// ```
    #[inline]
    pub fn fold<V, FL, FR>(self, on_left: FL, on_right: FR) -> V
    where
        FL: FnOnce(L) -> V,
        FR: FnOnce(R) -> V,
    {
        match self {
            Either::Left(l) => on_left(l),
            Either::Right(r) => on_right(r),
        }
    }

    /// The `Right` payload, or `fallback` applied to the `Left` payload.
    ///
    /// `fallback` is never called for a `Right`.
    ///
    /// ```rust
    /// use either_ops::Either;
    ///
    /// let ok: Either<String, i32> = Either::right(1);
    /// assert_eq!(ok.or_else(|_| unreachable!()), 1);
    ///
    /// let bad: Either<String, i32> = Either::left("oops".to_string());
    /// assert_eq!(bad.or_else(|msg| msg.len() as i32), 4);
    /// ```
    #[inline]
    pub fn or_else<F>(self, fallback: F) -> R
    where
        F: FnOnce(L) -> R,
    {
        match self {
            Either::Left(l) => fallback(l),
            Either::Right(r) => r,
        }
    }

    /// The `Right` payload, or `fallback` for a `Left`.
    #[inline]
    pub fn or(self, fallback: R) -> R {
        match self {
            Either::Left(_) => fallback,
            Either::Right(r) => r,
        }
    }

    /// The `Left` payload.
    ///
    /// # Panics
    ///
    /// Panics on a `Right`.
    #[inline]
    pub fn unwrap_left(self) -> L {
        match self {
            Either::Left(l) => l,
            Either::Right(_) => panic!("called `Either::unwrap_left()` on a Right"),
        }
    }

    /// The `Right` payload.
    ///
    /// # Panics
    ///
    /// Panics on a `Left`.
    #[inline]
    pub fn unwrap_right(self) -> R {
        match self {
            Either::Left(_) => panic!("called `Either::unwrap_right()` on a Left"),
            Either::Right(r) => r,
        }
    }

    /// `Right` becomes `Ok`, `Left` becomes `Err`.
    #[inline]
    pub fn into_result(self) -> Result<R, L> {
        self.fold(Err, Ok)
    }

    // ========== Projections ==========

    /// `Some` with the `Right` payload, `None` for a `Left`.
    #[inline]
    pub fn right_option(self) -> Option<R> {
        match self {
            Either::Left(_) => None,
            Either::Right(r) => Some(r),
        }
    }

    /// Right-biased projection, the same as [`Either::right_option`].
    #[inline]
    pub fn option(self) -> Option<R> {
        self.right_option()
    }

    /// `Some` with the `Left` payload, `None` for a `Right`.
    #[inline]
    pub fn left_option(self) -> Option<L> {
        match self {
            Either::Left(l) => Some(l),
            Either::Right(_) => None,
        }
    }

    /// An iterator yielding the `Right` payload once, or nothing for a `Left`.
    ///
    /// Handy with [`Iterator::flat_map`] to keep only the right values of a
    /// sequence:
    ///
    /// ```rust
    /// use either_ops::Either;
    ///
    /// let mixed = vec![Either::right(1), Either::left("skip"), Either::right(3)];
    /// let kept: Vec<i32> = mixed.into_iter().flat_map(Either::right_stream).collect();
    /// assert_eq!(kept, vec![1, 3]);
    /// ```
    #[inline]
    pub fn right_stream(self) -> std::option::IntoIter<R> {
        self.right_option().into_iter()
    }

    /// Right-biased stream, the same as [`Either::right_stream`].
    #[inline]
    pub fn stream(self) -> std::option::IntoIter<R> {
        self.right_stream()
    }

    /// An iterator yielding the `Left` payload once, or nothing for a `Right`.
    #[inline]
    pub fn left_stream(self) -> std::option::IntoIter<L> {
        self.left_option().into_iter()
    }

    /// Borrowing form of [`Either::right_stream`]. Each call starts a fresh
    /// iterator over the same payload.
    #[inline]
    pub fn iter(&self) -> std::option::IntoIter<&R> {
        self.as_ref().right_stream()
    }

    /// Borrowing form of [`Either::left_stream`].
    #[inline]
    pub fn left_iter(&self) -> std::option::IntoIter<&L> {
        self.as_ref().left_stream()
    }
}

impl<L, R> Either<L, Either<L, R>> {
    /// Remove one level of nesting from a `Right` holding another `Either`.
    ///
    /// ```rust
    /// use either_ops::Either;
    ///
    /// let inner_left: Either<&str, Either<&str, i32>> = Either::right(Either::left("inner"));
    /// assert_eq!(inner_left.flatten(), Either::left("inner"));
    /// ```
    #[inline]
    pub fn flatten(self) -> Either<L, R> {
        self.right_flat_map(|inner| inner)
    }
}

// ========== Trait Implementations ==========

/// Renders as `left<payload>` or `right<payload>`.
impl<L: fmt::Display, R: fmt::Display> fmt::Display for Either<L, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Either::Left(l) => write!(f, "left<{}>", l),
            Either::Right(r) => write!(f, "right<{}>", r),
        }
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    fn from(result: Result<R, L>) -> Self {
        Either::from_result(result)
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    fn from(either: Either<L, R>) -> Self {
        either.into_result()
    }
}

impl<L, R: Default> Default for Either<L, R> {
    /// `Right(R::default())`
    fn default() -> Self {
        Either::Right(R::default())
    }
}

impl<L, R> IntoIterator for Either<L, R> {
    type Item = R;
    type IntoIter = std::option::IntoIter<R>;

    fn into_iter(self) -> Self::IntoIter {
        self.right_stream()
    }
}

impl<'a, L, R> IntoIterator for &'a Either<L, R> {
    type Item = &'a R;
    type IntoIter = std::option::IntoIter<&'a R>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(feature = "try_trait")]
mod try_impl {
    use super::Either;
    use std::convert::Infallible;
    use std::ops::{ControlFlow, FromResidual, Try};

    // `?` unwraps a Right and returns early with a Left. The early-return side
    // converts through `From`, which is how the left type widens across `?`.
    impl<L, R> Try for Either<L, R> {
        type Output = R;
        type Residual = Either<L, Infallible>;

        fn from_output(output: R) -> Self {
            Either::Right(output)
        }

        fn branch(self) -> ControlFlow<Self::Residual, R> {
            match self {
                Either::Left(l) => ControlFlow::Break(Either::Left(l)),
                Either::Right(r) => ControlFlow::Continue(r),
            }
        }
    }

    impl<L, L2, R> FromResidual<Either<L, Infallible>> for Either<L2, R>
    where
        L2: From<L>,
    {
        fn from_residual(residual: Either<L, Infallible>) -> Self {
            match residual {
                Either::Left(l) => Either::Left(L2::from(l)),
                Either::Right(never) => match never {},
            }
        }
    }

    impl<L, L2, R> FromResidual<Result<Infallible, L>> for Either<L2, R>
    where
        L2: From<L>,
    {
        fn from_residual(residual: Result<Infallible, L>) -> Self {
            match residual {
                Err(l) => Either::Left(L2::from(l)),
                Ok(never) => match never {},
            }
        }
    }
}

// ========== Iterators of Either ==========

/// Split a sequence into its left payloads and its right payloads, keeping
/// the order within each side.
///
/// ```rust
/// use either_ops::either::{partition, Either};
///
/// let (errors, values) = partition(vec![
///     Either::left("a"),
///     Either::right(1),
///     Either::right(2),
///     Either::left("b"),
/// ]);
/// assert_eq!(errors, vec!["a", "b"]);
/// assert_eq!(values, vec![1, 2]);
/// ```
pub fn partition<L, R, I>(items: I) -> (Vec<L>, Vec<R>)
where
    I: IntoIterator<Item = Either<L, R>>,
{
    items
        .into_iter()
        .fold((Vec::new(), Vec::new()), |(mut ls, mut rs), item| {
            match item {
                Either::Left(l) => ls.push(l),
                Either::Right(r) => rs.push(r),
            }
            (ls, rs)
        })
}

/// The left payloads of a sequence, lazily.
pub fn lefts<L, R, I>(items: I) -> impl Iterator<Item = L>
where
    I: IntoIterator<Item = Either<L, R>>,
{
    items.into_iter().flat_map(Either::left_stream)
}

/// The right payloads of a sequence, lazily.
pub fn rights<L, R, I>(items: I) -> impl Iterator<Item = R>
where
    I: IntoIterator<Item = Either<L, R>>,
{
    items.into_iter().flat_map(Either::right_stream)
}
