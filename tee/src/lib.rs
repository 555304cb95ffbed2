//! Chainable side-effect & fallible-computation combinators for
//! [`Option`] and [`Result`].
//!
//! The extension traits here let a pipeline observe, test and transform
//! optional or fallible values without unpacking them at every step;
//! callbacks bound to one variant are guaranteed never to run on the
//! other.
//!
//! ```
//! use tee::prelude::*;
//!
//! #[derive(Debug, PartialEq)]
//! enum Error {
//!   TooShort,
//! }
//!
//! fn read_name() -> Result<String, Error> {
//!   Ok("jason".to_string())
//! }
//!
//! let mut greeted = None;
//! read_name().try_map(|name| if name.len() > 2 { Ok(name) } else { Err(Error::TooShort) })
//!            .perform(|name| greeted = Some(format!("hello, {name}!")))
//!            .sink(|r| assert_eq!(r, Ok("jason".to_string())));
//!
//! assert_eq!(greeted, Some("hello, jason!".to_string()));
//! ```

// docs
#![doc(html_root_url = "https://docs.rs/tee/0.1.0")]
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

pub use tee_fns::{const_, ignore, Pipe};
pub use tee_option::OptionExt;
#[cfg(feature = "std")]
#[cfg_attr(any(docsrs, feature = "docs"), doc(cfg(feature = "std")))]
pub use tee_result::DynResult;
pub use tee_result::{EmptyPairError, ResultExt};

/// Glob-import for the whole combinator surface
///
/// ```
/// use tee::prelude::*;
/// ```
pub mod prelude {
  pub use tee_fns::{const_, ignore, Pipe};
  pub use tee_option::OptionExt;
  #[cfg(feature = "std")]
  #[cfg_attr(any(docsrs, feature = "docs"), doc(cfg(feature = "std")))]
  pub use tee_result::DynResult;
  pub use tee_result::{EmptyPairError, ResultExt};
}
