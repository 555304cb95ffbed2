//! This microcrate contains a blanket [`Pipe`] trait for left-to-right
//! function application, plus small function utilities used by the
//! [`tee`](https://github.com/clov-coffee/tee) combinator ecosystem.

// docs
#![doc(html_root_url = "https://docs.rs/tee-fns/0.1.0")]
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

/// Left-to-right function application for any value
///
/// Reads a transformation chain in the order it runs, instead of
/// inside-out nested calls.
pub trait Pipe: Sized {
  /// Apply `f` to `self`
  ///
  /// ```
  /// use tee_fns::Pipe;
  ///
  /// fn double(n: u32) -> u32 {
  ///   n * 2
  /// }
  ///
  /// assert_eq!(2.pipe(double).pipe(|n| n + 1), 5);
  /// ```
  fn pipe<R>(self, f: impl FnOnce(Self) -> R) -> R {
    f(self)
  }
}

impl<T> Pipe for T {}

/// Returns a function that discards its argument and always returns `r`.
///
/// ```
/// use tee_fns::const_;
///
/// fn try_get_string() -> Result<String, std::io::Error> {
///   # Ok("".into())
/// }
///
/// fn do_stuff() -> Result<&'static str, std::io::Error> {
///   try_get_string().map(const_("it worked!")) // equivalent to: .map(|_| "it worked!")
/// }
/// ```
pub fn const_<T, R>(r: R) -> impl FnOnce(T) -> R {
  |_| r
}

/// A function that discards its argument and always returns unit `()`
///
/// ```
/// use tee_fns::ignore;
///
/// fn try_get_string() -> Result<String, std::io::Error> {
///   # Ok("".into())
/// }
///
/// fn do_stuff() -> Result<(), std::io::Error> {
///   try_get_string().map(ignore) // equivalent to: .map(|_| ())
/// }
/// ```
pub fn ignore<T>(_: T) {
  ()
}
