use crate::MatrixError;

/// Number of fractional digits used when rendering
/// cell values as text.
///
/// This is a newtype wrapper for [`u16`](std::primitive::u16),
/// which bounds the number of digits the standard formatter accepts.
/// The default is 6.
///
/// # Examples
///
/// ```
/// let p = labeled_matrix::Precision::default();
/// assert_eq!(p, 6);
/// let p = labeled_matrix::Precision::from(2);
/// assert_eq!(usize::from(p), 2);
/// ```
///
/// A `usize` must be checked:
///
/// ```
/// use labeled_matrix::Precision;
/// assert!(Precision::try_from(12_usize).is_ok());
/// assert!(Precision::try_from(70_000_usize).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Precision(u16);

impl Precision {
    /// The largest supported number of digits.
    pub const MAX: Precision = Precision(u16::MAX);

    /// Number of fractional digits.
    pub fn digits(&self) -> u16 {
        self.0
    }
}

impl Default for Precision {
    fn default() -> Self {
        Self(6)
    }
}

impl From<u16> for Precision {
    fn from(value: u16) -> Self {
        Self(value)
    }
}

impl TryFrom<usize> for Precision {
    type Error = MatrixError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match u16::try_from(value) {
            Ok(digits) => Ok(Self(digits)),
            Err(_) => Err(MatrixError::InvalidPrecision(value)),
        }
    }
}

impl From<Precision> for usize {
    fn from(value: Precision) -> Self {
        usize::from(value.0)
    }
}

impl PartialEq<u16> for Precision {
    fn eq(&self, other: &u16) -> bool {
        self.0.eq(other)
    }
}

impl PartialEq<Precision> for u16 {
    fn eq(&self, other: &Precision) -> bool {
        self.eq(&other.0)
    }
}

impl std::fmt::Display for Precision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
