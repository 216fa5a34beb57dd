//! # either-ops
//!
//! A value that is one of two things, and the operations to work with it.
//!
//! [`Either<L, R>`](Either) holds exactly one of a `Left(L)` or a `Right(R)`.
//! It is right-biased: `map`, `flat_map` and iteration act on `Right` and
//! carry a `Left` through untouched, so a chain of steps stops doing work at
//! the first `Left`.
//!
//! The [`ops`] module lifts computations that fail into functions returning
//! `Either`, so the failure becomes a value you can inspect:
//!
//! ```rust
//! use either_ops::{ops, Either};
//!
//! let parse = ops::from_function(|s: &str| s.parse::<i32>());
//!
//! // Keep only successful parses
//! let ints: Vec<i32> = ["0", "1", "2", "Fnord"]
//!     .into_iter()
//!     .map(&parse)
//!     .flat_map(Either::stream)
//!     .collect();
//! assert_eq!(ints, vec![0, 1, 2]);
//!
//! // Or substitute a default for each failure
//! let ints: Vec<i32> = ["0", "1", "2", "Fnord"]
//!     .into_iter()
//!     .map(&parse)
//!     .map(ops::or_else(|_| -1))
//!     .collect();
//! assert_eq!(ints, vec![0, 1, 2, -1]);
//! ```
//!
//! ## Features
//!
//! - `tracing`: adapters emit events when they capture a failure as `Left`
//! - `proptest`: `Arbitrary` for `Either`
//! - `try_trait` (nightly): `?` on `Either`, returning early with the `Left`

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![cfg_attr(feature = "try_trait", feature(try_trait_v2))]

pub mod either;
pub mod fallible;
pub mod ops;
pub mod panic;
pub mod testing;

// Re-exports
pub use either::Either;
pub use fallible::{FallibleBiFunction, FallibleFunction, FallibleSupplier};
pub use panic::Panic;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::either::Either;
    pub use crate::fallible::{FallibleBiFunction, FallibleFunction, FallibleSupplier};
    pub use crate::ops;
    pub use crate::panic::Panic;
}
