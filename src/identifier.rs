use core::{
    cmp::Ordering,
    fmt::{self, Display},
};

/// A single dot-separated token of a pre-release or build-metadata string.
///
/// An identifier is *numeric* if it consists only of ASCII digits (and its
/// value fits in 64 bits), and *alphanumeric* otherwise. The distinction
/// matters for ordering: numeric identifiers compare by magnitude and always
/// sort before alphanumeric ones, which compare byte-wise.
///
/// ```
/// use nextsem::Identifier;
///
/// assert!(Identifier::new("10") > Identifier::new("9"));
/// assert!(Identifier::new("9") < Identifier::new("alpha"));
/// assert!(Identifier::new("alpha") < Identifier::new("beta"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    raw: String,
    numeric: Option<u64>,
}

impl Identifier {
    /// Classifies `token` and stores its raw form. The raw form is rendered
    /// verbatim, so build identifiers with leading zeros keep them.
    pub fn new(token: impl Into<String>) -> Self {
        let raw = token.into();
        let numeric = if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) {
            raw.parse().ok()
        } else {
            None
        };
        Self { raw, numeric }
    }

    /// The original token text.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Whether this identifier is purely numeric.
    pub fn is_numeric(&self) -> bool {
        self.numeric.is_some()
    }

    /// The parsed magnitude, if this identifier is numeric.
    pub fn numeric_value(&self) -> Option<u64> {
        self.numeric
    }
}

impl Ord for Identifier {
    /// Semantic-versioning precedence: numeric by value, numeric before
    /// alphanumeric, alphanumeric byte-wise.
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.numeric, other.numeric) {
            (Some(a), Some(b)) => a.cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.raw.as_bytes().cmp(other.raw.as_bytes()),
        }
    }
}

impl PartialOrd for Identifier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
