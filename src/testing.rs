//! Helpers for testing code that produces [`Either`] values.
//!
//! # Assertion macros
//!
//! ```rust
//! use either_ops::{assert_left, assert_right, Either};
//!
//! let parsed: Either<String, u8> = Either::right(8);
//! assert_right!(parsed, 8);
//!
//! let failed: Either<&str, u8> = Either::left("empty");
//! assert_left!(failed);
//! ```
//!
//! # Call probes
//!
//! [`CallProbe`] counts how often a callback ran, which is how the
//! short-circuiting guarantees are checked:
//!
//! ```rust
//! use either_ops::testing::CallProbe;
//! use either_ops::Either;
//!
//! let probe = CallProbe::new();
//! let skipped: Either<&str, i32> = Either::left("stop");
//!
//! let _ = skipped.map(probe.track(|n: i32| n + 1));
//! assert_eq!(probe.count(), 0);
//! ```

use std::cell::Cell;

#[cfg(doc)]
use crate::Either;

/// Counts invocations of the callbacks it wraps.
#[derive(Debug, Default)]
pub struct CallProbe {
    calls: Cell<usize>,
}

impl CallProbe {
    /// A probe with a count of zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one invocation.
    pub fn hit(&self) {
        self.calls.set(self.calls.get() + 1);
    }

    /// The number of invocations recorded so far.
    pub fn count(&self) -> usize {
        self.calls.get()
    }

    /// Wrap `f` so that each call is recorded before `f` runs.
    pub fn track<'a, A, B, F>(&'a self, f: F) -> impl Fn(A) -> B + 'a
    where
        F: Fn(A) -> B + 'a,
    {
        move |arg| {
            self.hit();
            f(arg)
        }
    }
}

/// Assert that an [`Either`] is a `Left`, optionally comparing its payload.
///
/// ```rust
/// use either_ops::{assert_left, Either};
///
/// let e: Either<i32, &str> = Either::left(3);
/// assert_left!(e, 3);
/// ```
#[macro_export]
macro_rules! assert_left {
    ($either:expr) => {
        match $either {
            $crate::Either::Left(_) => {}
            $crate::Either::Right(r) => {
                panic!("Expected Left, got Right: {:?}", r);
            }
        }
    };
    ($either:expr, $expected:expr) => {
        match $either {
            $crate::Either::Left(l) => {
                assert_eq!(l, $expected);
            }
            $crate::Either::Right(r) => {
                panic!("Expected Left({:?}), got Right: {:?}", $expected, r);
            }
        }
    };
}

/// Assert that an [`Either`] is a `Right`, optionally comparing its payload.
///
/// ```rust
/// use either_ops::{assert_right, Either};
///
/// let e: Either<i32, &str> = Either::right("ok");
/// assert_right!(e, "ok");
/// ```
#[macro_export]
macro_rules! assert_right {
    ($either:expr) => {
        match $either {
            $crate::Either::Right(_) => {}
            $crate::Either::Left(l) => {
                panic!("Expected Right, got Left: {:?}", l);
            }
        }
    };
    ($either:expr, $expected:expr) => {
        match $either {
            $crate::Either::Right(r) => {
                assert_eq!(r, $expected);
            }
            $crate::Either::Left(l) => {
                panic!("Expected Right({:?}), got Left: {:?}", $expected, l);
            }
        }
    };
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

/// Generates `Left` and `Right` with equal weight.
#[cfg(feature = "proptest")]
impl<L, R> Arbitrary for crate::Either<L, R>
where
    L: Arbitrary + 'static,
    R: Arbitrary + 'static,
{
    type Parameters = (L::Parameters, R::Parameters);
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        let (left_params, right_params) = args;
        prop_oneof![
            any_with::<L>(left_params).prop_map(crate::Either::left),
            any_with::<R>(right_params).prop_map(crate::Either::right),
        ]
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Either;

    #[test]
    fn probe_starts_at_zero() {
        assert_eq!(CallProbe::new().count(), 0);
    }

    #[test]
    fn probe_counts_tracked_calls() {
        let probe = CallProbe::new();
        let double = probe.track(|n: i32| n * 2);

        assert_eq!(double(2), 4);
        assert_eq!(double(5), 10);
        assert_eq!(probe.count(), 2);

        probe.hit();
        assert_eq!(probe.count(), 3);
    }

    #[test]
    fn assert_left_macro() {
        assert_left!(Either::<_, ()>::left(1));
        assert_left!(Either::<_, ()>::left("L"), "L");
    }

    #[test]
    fn assert_right_macro() {
        assert_right!(Either::<(), _>::right(1));
        assert_right!(Either::<(), _>::right("R"), "R");
    }

    #[test]
    #[should_panic(expected = "Expected Left, got Right")]
    fn assert_left_panics_on_right() {
        assert_left!(Either::<(), _>::right(1));
    }

    #[test]
    #[should_panic(expected = "Expected Right(\"R\"), got Left")]
    fn assert_right_with_value_panics_on_left() {
        assert_right!(Either::<_, &str>::left(0), "R");
    }

    #[test]
    #[should_panic(expected = "assertion `left == right` failed")]
    fn assert_left_panics_on_payload_mismatch() {
        assert_left!(Either::<_, ()>::left(1), 2);
    }

    #[cfg(feature = "proptest")]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn arbitrary_either_has_one_side(e in any::<Either<i32, String>>()) {
                prop_assert!(e.is_left() != e.is_right());
            }
        }
    }
}
