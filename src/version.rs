use crate::{error::VersionError, identifier::Identifier};
use core::{
    cmp::Ordering,
    fmt::{self, Display},
    str::FromStr,
};
use once_cell::sync::Lazy;
use regex::Regex;

/// The published semver.org grammar. Capture groups, in order: major, minor,
/// patch, pre-release, build.
static VERSION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(0|[1-9]\d*)\.(0|[1-9]\d*)\.(0|[1-9]\d*)(?:-((?:0|[1-9]\d*|\d*[a-zA-Z-][0-9a-zA-Z-]*)(?:\.(?:0|[1-9]\d*|\d*[a-zA-Z-][0-9a-zA-Z-]*))*))?(?:\+([0-9a-zA-Z-]+(?:\.[0-9a-zA-Z-]+)*))?$",
    )
    .unwrap()
});

/// A Version represents a specific point in a project's development, in the
/// semantic-versioning form `MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]`.
/// Versions can be [displayed](Version::to_string),
/// [incremented](Version::next), and [compared](Version::cmp).
///
/// Equality and ordering ignore build metadata, per the semantic-versioning
/// precedence rules: `1.2.3+a` equals `1.2.3+b`. Use
/// [`Version::compare_with_build_metadata`] when build metadata should break
/// ties.
///
/// # Examples
///
/// ```
/// use nextsem::prelude::*;
///
/// let version: Version = "1.2.3-alpha.1".parse().unwrap();
/// assert_eq!(1, version.major());
/// assert!(version.is_pre_release());
///
/// let next = version.next(ReleaseType::PreRelease, Some("alpha"), false);
/// assert_eq!("1.2.3-alpha.2", next.to_string());
/// assert!(version < next);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Version {
    pub(crate) major: u64,
    pub(crate) minor: u64,
    pub(crate) patch: u64,
    pub(crate) pre_release: Vec<Identifier>,
    pub(crate) build: Vec<Identifier>,
}

fn parse_identifiers(s: &str) -> Vec<Identifier> {
    s.split('.').map(Identifier::new).collect()
}

impl Version {
    /// Parses a version string, returning a [`Version`] if it matches the
    /// semantic-versioning grammar and a [`VersionError`] otherwise.
    ///
    /// # Errors
    ///
    /// - [`VersionError::InvalidVersion`] if the string does not match the
    ///   grammar, or if major, minor, or patch overflows 64 bits.
    pub fn parse(input: &str) -> Result<Self, VersionError> {
        let captures = VERSION_RE
            .captures(input)
            .ok_or_else(|| VersionError::InvalidVersion {
                input: input.to_owned(),
            })?;

        // the grammar guarantees digit runs for groups 1-3, so a parse
        // failure here can only be overflow
        let number = |group: usize| {
            captures[group]
                .parse::<u64>()
                .map_err(|_| VersionError::InvalidVersion {
                    input: input.to_owned(),
                })
        };

        Ok(Self {
            major: number(1)?,
            minor: number(2)?,
            patch: number(3)?,
            pre_release: captures
                .get(4)
                .map(|m| parse_identifiers(m.as_str()))
                .unwrap_or_default(),
            build: captures
                .get(5)
                .map(|m| parse_identifiers(m.as_str()))
                .unwrap_or_default(),
        })
    }

    /// Parses a version string leniently: on failure, logs a diagnostic and
    /// returns the zero version `0.0.0` instead of an error.
    ///
    /// Note that the zero version is indistinguishable from a legitimately
    /// parsed `"0.0.0"`. Prefer [`Version::parse`] when the caller needs to
    /// react to bad input.
    pub fn lenient(input: &str) -> Self {
        Self::parse(input).unwrap_or_else(|_| {
            tracing::error!(
                "version `{}` does not match the semantic versioning grammar, see https://semver.org",
                input
            );
            Self::default()
        })
    }

    /// The major version number.
    pub fn major(&self) -> u64 {
        self.major
    }

    /// The minor version number.
    pub fn minor(&self) -> u64 {
        self.minor
    }

    /// The patch version number.
    pub fn patch(&self) -> u64 {
        self.patch
    }

    /// The pre-release identifiers. Empty for a release version.
    pub fn pre_release(&self) -> &[Identifier] {
        &self.pre_release
    }

    /// The build-metadata identifiers. Empty when no build metadata exists.
    pub fn build(&self) -> &[Identifier] {
        &self.build
    }

    /// Whether this version has pre-release identifiers.
    pub fn is_pre_release(&self) -> bool {
        !self.pre_release.is_empty()
    }

    /// Renders only `major.minor.patch`, discarding pre-release and build
    /// metadata.
    ///
    /// ```
    /// use nextsem::Version;
    ///
    /// let version = Version::parse("1.2.3-alpha.1+build.5").unwrap();
    /// assert_eq!("1.2.3", version.finalize_version());
    /// ```
    pub fn finalize_version(&self) -> String {
        format!("{}.{}.{}", self.major, self.minor, self.patch)
    }

    /// Compares two versions like [`Ord::cmp`], but when they are otherwise
    /// equal, additionally orders by build metadata: element-wise identifier
    /// comparison, with the shorter sequence lesser as the final tiebreak.
    pub fn compare_with_build_metadata(&self, other: &Self) -> Ordering {
        self.cmp(other).then_with(|| self.build.cmp(&other.build))
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl PartialEq for Version {
    /// Build metadata is ignored, consistent with [`Ord`].
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl Ord for Version {
    /// Semantic-versioning precedence: major, minor, patch numerically; a
    /// release outranks any of its pre-releases; pre-release sequences
    /// compare element-wise with a strict prefix lesser. Build metadata does
    /// not participate.
    fn cmp(&self, other: &Self) -> Ordering {
        self.major
            .cmp(&other.major)
            .then_with(|| self.minor.cmp(&other.minor))
            .then_with(|| self.patch.cmp(&other.patch))
            .then_with(
                || match (self.pre_release.is_empty(), other.pre_release.is_empty()) {
                    (true, true) => Ordering::Equal,
                    (true, false) => Ordering::Greater,
                    (false, true) => Ordering::Less,
                    (false, false) => self.pre_release.cmp(&other.pre_release),
                },
            )
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for Version {
    /// Returns the rendered version string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;

        if let Some((first, rest)) = self.pre_release.split_first() {
            write!(f, "-{first}")?;
            for identifier in rest {
                write!(f, ".{identifier}")?;
            }
        }

        if let Some((first, rest)) = self.build.split_first() {
            write!(f, "+{first}")?;
            for identifier in rest {
                write!(f, ".{identifier}")?;
            }
        }

        Ok(())
    }
}
