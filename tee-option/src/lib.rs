//! This microcrate contains an [`OptionExt`] trait that adds side-effect
//! and filtering combinators to [`Option`], used by the
//! [`tee`](https://github.com/clov-coffee/tee) combinator ecosystem.

// docs
#![doc(html_root_url = "https://docs.rs/tee-option/0.1.0")]
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

/// Extensions to Option
///
/// Plain predicate filtering is already covered by [`Option::filter`]
/// with the same never-invoke-on-`None` guarantee these methods give,
/// so this trait only adds what the standard library lacks.
pub trait OptionExt<T>: Sized {
  /// Test the value against a predicate, substituting `default` when
  /// the test fails
  ///
  /// `None` input stays `None` and the predicate is never invoked; the
  /// default only replaces a present value that failed the test.
  ///
  /// ```
  /// use tee_option::OptionExt;
  ///
  /// assert_eq!(Some(10).filter_or(1, |n| *n == 10), Some(10));
  /// assert_eq!(Some(10).filter_or(1, |n| *n == 20), Some(1));
  /// assert_eq!(None.filter_or(1, |n| *n == 10), None);
  /// ```
  fn filter_or(self, default: T, pred: impl FnOnce(&T) -> bool) -> Option<T>;

  /// Perform some IO when this Option is Some
  ///
  /// ```
  /// use tee_option::OptionExt;
  ///
  /// let port = Some(5683).perform(|p| println!("using port {p}"))
  ///                      .map(|p| p + 1);
  /// assert_eq!(port, Some(5684));
  /// ```
  fn perform(self, f: impl FnOnce(&T)) -> Option<T>;

  /// Perform some IO when this Option is None
  fn perform_none(self, f: impl FnOnce()) -> Option<T>;
}

impl<T> OptionExt<T> for Option<T> {
  fn filter_or(self, default: T, pred: impl FnOnce(&T) -> bool) -> Option<T> {
    match self {
      | Some(t) if pred(&t) => Some(t),
      | Some(_) => Some(default),
      | None => None,
    }
  }

  fn perform(self, f: impl FnOnce(&T)) -> Option<T> {
    self.map(|t| {
          f(&t);
          t
        })
  }

  fn perform_none(self, f: impl FnOnce()) -> Option<T> {
    if self.is_none() {
      f();
    }

    self
  }
}
