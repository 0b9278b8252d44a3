//! # nextsem
//!
//! A library for parsing, comparing, and incrementing semantic versions.
//!
//! Versions follow the [SemVer](https://semver.org/) grammar
//! `MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]`. This crate validates version
//! strings against that grammar, orders them per the published precedence
//! rules, and computes the "next" version for a given release intent.
//!
//! ## Examples
//!
//! Quickly get a next version:
//!
//! ```
//! use nextsem::prelude::*;
//!
//! let version = Version::parse("1.2.3").unwrap();
//! let next = version.next(ReleaseType::Minor, None, false);
//! assert_eq!("1.3.0", next.to_string());
//! assert!(version < next);
//! ```
//!
//! Drive a pre-release cycle with a tag:
//!
//! ```
//! use nextsem::prelude::*;
//!
//! let version = Version::parse("1.2.3").unwrap();
//!
//! let alpha = version.next(ReleaseType::PreMinor, Some("alpha"), false);
//! assert_eq!("1.3.0-alpha.0", alpha.to_string());
//!
//! let alpha = alpha.next(ReleaseType::PreRelease, Some("alpha"), false);
//! assert_eq!("1.3.0-alpha.1", alpha.to_string());
//!
//! let released = alpha.next(ReleaseType::Minor, None, false);
//! assert_eq!("1.3.0", released.to_string());
//! ```
//!
//! ## Important Terms
//!
//! - **Version**: The five-field value object — major, minor, patch, a
//!   pre-release identifier sequence, and a build identifier sequence. It's
//!   modeled by the [`Version`] struct.
//! - **Identifier**: A single dot-separated token of a pre-release or build
//!   string, like `alpha` or `1`. It's modeled by the [`Identifier`] struct.
//! - **Release type**: The intent for an increment — major/minor/patch, with
//!   or without pre-release tagging. It's modeled by the [`ReleaseType`]
//!   enum.
//!
//! ## Ordering
//!
//! [`Version`] implements a build-ignoring total order per SemVer precedence:
//! a release outranks any of its pre-releases, and `1.2.3+a` equals
//! `1.2.3+b`. When build metadata should break ties, use
//! [`Version::compare_with_build_metadata`].
//!
//! ## Prelude
//!
//! nextsem provides a prelude module for convenience. It contains everything
//! needed to interact with the library.
//!
//! Use it with:
//!
//! ```
//! use nextsem::prelude::*;
//! ```
#![warn(missing_docs)]

mod error;
mod identifier;
mod release;
mod version;

pub use crate::error::VersionError;
pub use crate::identifier::Identifier;
pub use crate::release::ReleaseType;
pub use crate::version::Version;

/// A convenience module appropriate for glob imports (`use nextsem::prelude::*;`).
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::Identifier;
    #[doc(no_inline)]
    pub use crate::ReleaseType;
    #[doc(no_inline)]
    pub use crate::Version;
    #[doc(no_inline)]
    pub use crate::VersionError;
}
