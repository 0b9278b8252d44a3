use crate::{identifier::Identifier, version::Version};

/// The kind of release to produce when incrementing a [`Version`].
///
/// The `Pre*` kinds produce pre-release versions; the plain kinds produce
/// release versions, finalizing an existing pre-release instead of bumping
/// past it. See [`Version::next`] for the exact transition rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseType {
    /// Increment the major version and zero the rest.
    Major,
    /// Increment the minor version and zero the patch.
    Minor,
    /// Increment the patch version.
    Patch,
    /// Increment the major version and start a new pre-release on it.
    PreMajor,
    /// Increment the minor version and start a new pre-release on it.
    PreMinor,
    /// Increment the patch version and start a new pre-release on it.
    PrePatch,
    /// Continue an existing pre-release, or start one on the next patch.
    PreRelease,
}

impl Version {
    /// Returns the next version for the requested release kind. The receiver
    /// is not modified.
    ///
    /// `identifier` steers the pre-release toward `<tag>.<n>` for the `Pre*`
    /// kinds (an empty or absent tag just bumps the last numeric component).
    /// `identifier_base` selects the starting number for a freshly introduced
    /// pre-release component: `1` when true, `0` when false.
    ///
    /// A plain [`ReleaseType::Major`]/[`Minor`](ReleaseType::Minor)/
    /// [`Patch`](ReleaseType::Patch) on a pre-release of that level finalizes
    /// it rather than double-incrementing: `1.0.0-5` bumped by `Major` is
    /// `1.0.0`, not `2.0.0`.
    ///
    /// Build metadata is carried over untouched; use
    /// [`finalize_version`](Version::finalize_version) to drop it.
    ///
    /// # Examples
    ///
    /// ```
    /// use nextsem::prelude::*;
    ///
    /// let version = Version::parse("1.2.3").unwrap();
    /// let next = version.next(ReleaseType::PreMinor, Some("alpha"), false);
    /// assert_eq!("1.3.0-alpha.0", next.to_string());
    /// ```
    pub fn next(
        &self,
        release: ReleaseType,
        identifier: Option<&str>,
        identifier_base: bool,
    ) -> Version {
        let mut next = self.clone();
        // empty tags behave as no tag at all
        let tag = identifier.filter(|tag| !tag.is_empty());

        match release {
            ReleaseType::PreMajor => {
                next.pre_release.clear();
                next.patch = 0;
                next.minor = 0;
                next.major += 1;
                bump_pre(&mut next, tag, identifier_base);
            }
            ReleaseType::PreMinor => {
                next.pre_release.clear();
                next.patch = 0;
                next.minor += 1;
                bump_pre(&mut next, tag, identifier_base);
            }
            ReleaseType::PrePatch => {
                // any existing pre-release is irrelevant for the next patch,
                // so drop it before bumping
                next.pre_release.clear();
                bump_patch(&mut next);
                bump_pre(&mut next, tag, identifier_base);
            }
            ReleaseType::PreRelease => {
                // on a non-pre-release input this acts like PrePatch
                if !next.is_pre_release() {
                    bump_patch(&mut next);
                }
                bump_pre(&mut next, tag, identifier_base);
            }
            ReleaseType::Major => {
                // a pre-major like 1.0.0-5 finalizes to 1.0.0; anything else
                // increments major
                if next.minor != 0 || next.patch != 0 || !next.is_pre_release() {
                    next.major += 1;
                }
                next.minor = 0;
                next.patch = 0;
                next.pre_release.clear();
            }
            ReleaseType::Minor => {
                // a pre-minor like 1.2.0-5 finalizes to 1.2.0
                if next.patch != 0 || !next.is_pre_release() {
                    next.minor += 1;
                }
                next.patch = 0;
                next.pre_release.clear();
            }
            ReleaseType::Patch => {
                bump_patch(&mut next);
            }
        }

        next
    }
}

/// A pre-release like 1.2.3-5 finalizes to 1.2.3; anything else increments
/// patch. Clears the pre-release either way.
fn bump_patch(version: &mut Version) {
    if !version.is_pre_release() {
        version.patch += 1;
    }
    version.pre_release.clear();
}

/// Bumps only the pre-release sequence, leaving major/minor/patch alone.
fn bump_pre(version: &mut Version, tag: Option<&str>, identifier_base: bool) {
    let base = if identifier_base { "1" } else { "0" };

    if !version.is_pre_release() {
        version.pre_release = vec![Identifier::new(base)];
    } else {
        // replace the last numeric identifier with its successor, or append
        // base when there is none
        let last_numeric = version
            .pre_release
            .iter()
            .rposition(|identifier| identifier.is_numeric());
        match last_numeric {
            Some(index) => {
                let value = version.pre_release[index]
                    .numeric_value()
                    .unwrap_or_default();
                version.pre_release[index] = Identifier::new((value + 1).to_string());
            }
            None => version.pre_release.push(Identifier::new(base)),
        }
    }

    if let Some(tag) = tag {
        // steer toward `<tag>.<base>`: keep the bump above only when it
        // already has the form `<tag>.<number>[...]`
        let keep = version.pre_release[0].raw() == tag
            && version
                .pre_release
                .get(1)
                .is_some_and(|identifier| identifier.is_numeric());
        if !keep {
            version.pre_release = vec![Identifier::new(tag), Identifier::new(base)];
        }
    }
}
