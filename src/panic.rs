//! Caught panics as values.
//!
//! The `catch_*` adapters run a callable under [`std::panic::catch_unwind`] and
//! hand back the payload wrapped in a [`Panic`] instead of unwinding further.
//! The payload is kept as the original boxed object so callers can downcast it
//! or re-raise it with [`Panic::resume`].
//!
//! # Example
//!
//! ```
//! use either_ops::Either;
//!
//! let caught = Either::catch_supplier(|| -> i32 { panic!("boom") });
//!
//! let panic = caught.unwrap_left();
//! assert_eq!(panic.message(), Some("boom"));
//! ```

use std::any::Any;
use std::error::Error as StdError;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

/// The payload of a panic caught by one of the `catch_*` adapters.
///
/// Unwinding only happens under the default `panic = "unwind"` strategy. With
/// `panic = "abort"` nothing is caught and the process aborts.
pub struct Panic {
    payload: Box<dyn Any + Send + 'static>,
}

impl Panic {
    /// Wrap a raw payload as returned by [`std::panic::catch_unwind`].
    pub fn new(payload: Box<dyn Any + Send + 'static>) -> Self {
        Panic { payload }
    }

    /// Run `f`, capturing a panic instead of letting it unwind past the caller.
    ///
    /// ```
    /// use either_ops::Panic;
    ///
    /// assert_eq!(Panic::catch(|| 7).ok(), Some(7));
    /// assert!(Panic::catch(|| -> u8 { panic!("nope") }).is_err());
    /// ```
    pub fn catch<V, F>(f: F) -> Result<V, Panic>
    where
        F: FnOnce() -> V,
    {
        // `f` is consumed here and never observed after an unwind.
        panic::catch_unwind(AssertUnwindSafe(f)).map_err(Panic::new)
    }

    /// The panic message, if the payload was a `&'static str` or a `String`.
    ///
    /// `panic!` with a literal or with format arguments produces one of those
    /// two; `std::panic::panic_any` can produce anything.
    ///
    /// ```
    /// use either_ops::Panic;
    ///
    /// let caught = Panic::catch(|| -> () { panic!("code {}", 7) }).unwrap_err();
    /// assert_eq!(caught.message(), Some("code 7"));
    /// ```
    pub fn message(&self) -> Option<&str> {
        if let Some(s) = self.payload.downcast_ref::<&'static str>() {
            Some(*s)
        } else {
            self.payload.downcast_ref::<String>().map(String::as_str)
        }
    }

    /// Borrow the original payload.
    pub fn payload(&self) -> &(dyn Any + Send + 'static) {
        &*self.payload
    }

    /// Consume and return the original payload.
    pub fn into_payload(self) -> Box<dyn Any + Send + 'static> {
        self.payload
    }

    /// Continue unwinding with the original payload.
    pub fn resume(self) -> ! {
        panic::resume_unwind(self.payload)
    }
}

impl fmt::Debug for Panic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Panic")
            .field("message", &self.message())
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Panic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.message() {
            Some(msg) => write!(f, "panicked: {}", msg),
            None => write!(f, "panicked with non-string payload"),
        }
    }
}

impl StdError for Panic {}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Code(u32);

    #[test]
    fn test_catch_returns_value() {
        assert_eq!(Panic::catch(|| "fine").ok(), Some("fine"));
    }

    #[test]
    fn test_message_from_literal() {
        let caught = Panic::catch(|| -> () { panic!("literal") }).unwrap_err();
        assert_eq!(caught.message(), Some("literal"));
    }

    #[test]
    fn test_message_from_format() {
        let n = 3;
        let caught = Panic::catch(|| -> () { panic!("formatted {}", n) }).unwrap_err();
        assert_eq!(caught.message(), Some("formatted 3"));
    }

    #[test]
    fn test_custom_payload_is_preserved() {
        let caught = Panic::catch(|| -> () { std::panic::panic_any(Code(404)) }).unwrap_err();

        assert_eq!(caught.message(), None);
        assert_eq!(caught.payload().downcast_ref::<Code>(), Some(&Code(404)));

        let payload = caught.into_payload();
        assert_eq!(*payload.downcast::<Code>().unwrap(), Code(404));
    }

    #[test]
    fn test_display() {
        let caught = Panic::catch(|| -> () { panic!("bad input") }).unwrap_err();
        assert_eq!(caught.to_string(), "panicked: bad input");

        let caught = Panic::catch(|| -> () { std::panic::panic_any(1u8) }).unwrap_err();
        assert_eq!(caught.to_string(), "panicked with non-string payload");
    }

    #[test]
    fn test_debug_shows_message() {
        let caught = Panic::catch(|| -> () { panic!("dbg") }).unwrap_err();
        assert_eq!(
            format!("{:?}", caught),
            "Panic { message: Some(\"dbg\"), .. }"
        );
    }

    #[test]
    #[should_panic(expected = "again")]
    fn test_resume_reraises() {
        let caught = Panic::catch(|| -> () { panic!("again") }).unwrap_err();
        caught.resume();
    }

    #[test]
    fn test_is_std_error() {
        let caught = Panic::catch(|| -> () { panic!("err") }).unwrap_err();
        let boxed: Box<dyn StdError + Send> = Box::new(caught);
        assert_eq!(boxed.to_string(), "panicked: err");
    }
}
