//! This microcrate contains a [`ResultExt`] trait that adds side-effect
//! and fallible-chaining combinators to [`Result`], used by the
//! [`tee`](https://github.com/clov-coffee/tee) combinator ecosystem.

// docs
#![doc(html_root_url = "https://docs.rs/tee-result/0.1.0")]
#![cfg_attr(any(docsrs, feature = "docs"), feature(doc_cfg))]
// -
// style
#![allow(clippy::unused_unit)]
// -
// deny
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]
#![deny(missing_copy_implementations)]
#![cfg_attr(not(test), deny(unsafe_code))]
// -
// warnings
#![cfg_attr(not(test), warn(unreachable_pub))]
// -
// features
#![cfg_attr(not(feature = "std"), no_std)]

use core::fmt;

/// Alias for [`Result`] with a boxed error.
///
/// This is the frictionless home for [`ResultExt::of_pair`], since
/// `Box<dyn Error>` already satisfies the `From<EmptyPairError>` bound.
#[cfg(feature = "std")]
#[cfg_attr(any(docsrs, feature = "docs"), doc(cfg(feature = "std")))]
pub type DynResult<T> = Result<T, std::boxed::Box<dyn std::error::Error>>;

/// Produced by [`ResultExt::of_pair`] when neither a value nor an
/// error was supplied.
#[derive(Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash, Debug, Default)]
pub struct EmptyPairError;

impl fmt::Display for EmptyPairError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("no value or error supplied")
  }
}

#[cfg(feature = "std")]
#[cfg_attr(any(docsrs, feature = "docs"), doc(cfg(feature = "std")))]
impl std::error::Error for EmptyPairError {}

/// Extensions to Result
///
/// Every combinator consumes `self` and yields a fresh value; a callback
/// bound to one variant is guaranteed never to run on the other.
pub trait ResultExt<T, E>: Sized {
  /// Wrap a value in [`Ok`], pinning the error type to `E`
  fn of(value: T) -> Result<T, E> {
    Ok(value)
  }

  /// Wrap an error in [`Err`], pinning the success type to `T`
  fn of_err(error: E) -> Result<T, E> {
    Err(error)
  }

  /// Resolve two optional inputs into a single `Result`
  ///
  /// A present `error` always wins, even when `value` is present too.
  /// When both inputs are `None` the result is an [`Err`] wrapping
  /// [`EmptyPairError`].
  ///
  /// ```
  /// use tee_result::{DynResult, ResultExt};
  ///
  /// let found: DynResult<u32> = DynResult::of_pair(Some(5), None);
  /// assert_eq!(found.unwrap(), 5);
  ///
  /// let empty: DynResult<u32> = DynResult::of_pair(None, None);
  /// assert_eq!(empty.unwrap_err().to_string(), "no value or error supplied");
  /// ```
  fn of_pair(value: Option<T>, error: Option<E>) -> Result<T, E>
    where E: From<EmptyPairError>
  {
    match (value, error) {
      | (_, Some(e)) => Err(e),
      | (Some(v), None) => Ok(v),
      | (None, None) => Err(EmptyPairError.into()),
    }
  }

  /// Perform some IO when this Result is Ok
  ///
  /// ```
  /// use tee_result::ResultExt;
  ///
  /// fn next_port() -> Result<u16, core::num::ParseIntError> {
  ///   "5683".parse()
  /// }
  ///
  /// let port = next_port().perform(|p| println!("binding to {p}"))
  ///                       .map(|p| p + 1);
  /// assert_eq!(port, Ok(5684));
  /// ```
  fn perform(self, f: impl FnOnce(&T)) -> Result<T, E>;

  /// Perform some IO when this Result is Err
  fn perform_err(self, f: impl FnOnce(&E)) -> Result<T, E>;

  /// Hand the whole Result to `f`, unconditionally
  ///
  /// Terminal end of a combinator chain; useful for feeding a completion
  /// callback that wants the `Result` itself rather than either payload.
  fn sink(self, f: impl FnOnce(Result<T, E>));

  /// Map the Ok value through a fallible transform
  ///
  /// An [`Err`] returned by `f` becomes the new state of the chain.
  /// An `Err` input propagates unchanged and `f` is never invoked.
  fn try_map<R>(self, f: impl FnOnce(T) -> Result<R, E>) -> Result<R, E>;

  /// Map the Ok value through a fallible transform that itself
  /// produces a `Result`, flattening both layers
  ///
  /// The outer `Err` is `f` failing outright; the inner `Result` is the
  /// value `f` resolved to. Either error becomes the state of the chain.
  ///
  /// ```
  /// use tee_result::ResultExt;
  ///
  /// let ok: Result<u32, &str> = Ok(10);
  /// let shown = ok.try_flat_map(|n| Ok(Ok(n.to_string())));
  /// assert_eq!(shown, Ok("10".to_string()));
  /// ```
  fn try_flat_map<R>(self, f: impl FnOnce(T) -> Result<Result<R, E>, E>) -> Result<R, E>;

  /// Attempt to perform some fallible IO with the Ok value
  ///
  /// If `f` fails, the whole chain is demoted to its error; otherwise the
  /// original Ok flows through untouched.
  fn try_perform(self, f: impl FnOnce(&T) -> Result<(), E>) -> Result<T, E>;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
  fn perform(self, f: impl FnOnce(&T)) -> Result<T, E> {
    self.map(|t| {
          f(&t);
          t
        })
  }

  fn perform_err(self, f: impl FnOnce(&E)) -> Result<T, E> {
    self.map_err(|e| {
          f(&e);
          e
        })
  }

  fn sink(self, f: impl FnOnce(Result<T, E>)) {
    f(self)
  }

  fn try_map<R>(self, f: impl FnOnce(T) -> Result<R, E>) -> Result<R, E> {
    self.and_then(f)
  }

  fn try_flat_map<R>(self, f: impl FnOnce(T) -> Result<Result<R, E>, E>) -> Result<R, E> {
    match self {
      | Ok(t) => match f(t) {
        | Ok(inner) => inner,
        | Err(e) => Err(e),
      },
      | Err(e) => Err(e),
    }
  }

  fn try_perform(self, f: impl FnOnce(&T) -> Result<(), E>) -> Result<T, E> {
    self.and_then(|t| f(&t).map(|_| t))
  }
}

#[cfg(test)]
mod test {
  use super::*;

  #[derive(Clone, Copy, PartialEq, Eq, Debug)]
  enum MockError {
    NotFound,
    Empty,
  }

  impl From<EmptyPairError> for MockError {
    fn from(_: EmptyPairError) -> Self {
      MockError::Empty
    }
  }

  type MockResult<T> = Result<T, MockError>;

  #[test]
  fn perform_invokes_once_on_ok() {
    let mut seen = 0;
    let out = MockResult::of(10).perform(|n| seen += *n);

    assert_eq!(seen, 10);
    assert_eq!(out, Ok(10));
  }

  #[test]
  fn perform_not_invoked_on_err() {
    let out = MockResult::<u32>::of_err(MockError::NotFound).perform(|_| {
                                                              panic!("should not be called")
                                                            });

    assert_eq!(out, Err(MockError::NotFound));
  }

  #[test]
  fn perform_err_invokes_on_err() {
    let mut seen = None;
    let out = MockResult::<u32>::of_err(MockError::NotFound).perform_err(|e| seen = Some(*e));

    assert_eq!(seen, Some(MockError::NotFound));
    assert_eq!(out, Err(MockError::NotFound));
  }

  #[test]
  fn perform_err_not_invoked_on_ok() {
    let out = MockResult::of(10).perform_err(|_| panic!("should not be called"));

    assert_eq!(out, Ok(10));
  }

  #[test]
  fn sink_receives_whole_ok() {
    let mut calls = 0;
    MockResult::of(10).sink(|r| {
                        calls += 1;
                        assert_eq!(r, Ok(10));
                      });

    assert_eq!(calls, 1);
  }

  #[test]
  fn sink_receives_whole_err() {
    let mut calls = 0;
    MockResult::<u32>::of_err(MockError::NotFound).sink(|r| {
                                                    calls += 1;
                                                    assert_eq!(r, Err(MockError::NotFound));
                                                  });

    assert_eq!(calls, 1);
  }

  #[test]
  fn try_map_maps_ok() {
    let out: MockResult<u32> = MockResult::of(10).try_map(|n| Ok(n * 2));

    assert_eq!(out, Ok(20));
  }

  #[test]
  fn try_map_failure_becomes_err() {
    let out: MockResult<u32> = MockResult::of(10).try_map(|_| Err(MockError::NotFound));

    assert_eq!(out, Err(MockError::NotFound));
  }

  #[test]
  fn try_map_not_invoked_on_err() {
    let out: MockResult<u32> =
      MockResult::<u32>::of_err(MockError::NotFound).try_map(|_| panic!("should not be called"));

    assert_eq!(out, Err(MockError::NotFound));
  }

  #[test]
  fn try_flat_map_flattens_inner_ok() {
    let shown = MockResult::of(10).try_flat_map(|n| Ok(Ok(n.to_string())));

    assert_eq!(shown, Ok("10".to_string()));
  }

  #[test]
  fn try_flat_map_flattens_inner_err() {
    let out: MockResult<u32> = MockResult::of(10).try_flat_map(|_| Ok(Err(MockError::NotFound)));

    assert_eq!(out, Err(MockError::NotFound));
  }

  #[test]
  fn try_flat_map_failure_becomes_err() {
    let out: MockResult<u32> = MockResult::of(10).try_flat_map(|_| Err(MockError::NotFound));

    assert_eq!(out, Err(MockError::NotFound));
  }

  #[test]
  fn try_flat_map_not_invoked_on_err() {
    let out: MockResult<u32> =
      MockResult::<u32>::of_err(MockError::NotFound).try_flat_map(|_| {
                                                       panic!("should not be called")
                                                     });

    assert_eq!(out, Err(MockError::NotFound));
  }

  #[test]
  fn try_perform_keeps_ok_when_work_succeeds() {
    let mut seen = 0;
    let out = MockResult::of(10).try_perform(|n| {
                                  seen = *n;
                                  Ok(())
                                });

    assert_eq!(seen, 10);
    assert_eq!(out, Ok(10));
  }

  #[test]
  fn try_perform_demotes_ok_when_work_fails() {
    let out = MockResult::of(10).try_perform(|_| Err(MockError::NotFound));

    assert_eq!(out, Err(MockError::NotFound));
  }

  #[test]
  fn try_perform_not_invoked_on_err() {
    let out =
      MockResult::<u32>::of_err(MockError::NotFound).try_perform(|_| {
                                                       panic!("should not be called")
                                                     });

    assert_eq!(out, Err(MockError::NotFound));
  }

  #[test]
  fn of_pair_prefers_error_when_both_present() {
    let out = MockResult::of_pair(Some(5), Some(MockError::NotFound));

    assert_eq!(out, Err(MockError::NotFound));
  }

  #[test]
  fn of_pair_uses_value_when_no_error() {
    let out: MockResult<_> = MockResult::of_pair(Some("hello"), None);

    assert_eq!(out, Ok("hello"));
  }

  #[test]
  fn of_pair_of_nothing_is_empty_pair_error() {
    let out: MockResult<u32> = MockResult::of_pair(None, None);

    assert_eq!(out, Err(MockError::Empty));
  }

  #[test]
  fn of_pair_boxes_empty_pair_error() {
    let out: DynResult<u32> = DynResult::of_pair(None, None);

    assert_eq!(out.unwrap_err().to_string(), "no value or error supplied");
  }

  #[test]
  fn constructors_pick_the_right_variant() {
    assert_eq!(MockResult::of(1), Ok(1));
    assert_eq!(MockResult::<u32>::of_err(MockError::NotFound),
               Err(MockError::NotFound));
  }
}
