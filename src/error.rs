/// Errors that can occur when parsing a version string.
#[derive(thiserror::Error, Debug, PartialEq, Eq, Clone)]
pub enum VersionError {
    /// The input did not match the semantic versioning grammar. This also
    /// covers major/minor/patch numbers too large for 64 bits.
    #[error("version `{input}` does not match the semantic versioning grammar, see https://semver.org")]
    InvalidVersion {
        /// The offending input string.
        input: String,
    },
}
