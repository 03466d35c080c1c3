use crate::Axis;
use thiserror::Error;

/// Error type for this crate.
///
/// Every failure is local to the call that produced it.
/// A call that returns an error leaves the cell values
/// of the matrix unchanged.
///
/// # Example
///
/// Looking up a label that is not attached to the matrix
/// gives [`MatrixError::LabelNotFound`](crate::MatrixError::LabelNotFound).
///
/// ```
/// let m = labeled_matrix::LabeledMatrix::with_labels(["A", "B"], ["X", "Y"]).unwrap();
/// assert!(matches!(
///     m.get("C", "X"),
///     Err(labeled_matrix::MatrixError::LabelNotFound { .. })
/// ));
/// ```
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum MatrixError {
    /// A label array or a caller-supplied buffer
    /// does not match the size of an axis.
    #[error("{axis} dimension mismatch: expected {expected}, got {found}")]
    DimensionMismatch {
        /// The axis whose size was expected
        axis: Axis,
        /// The size of that axis
        expected: usize,
        /// The size that was supplied
        found: usize,
    },
    /// A label is not attached to the given axis.
    #[error("{axis} label {label:?} not found")]
    LabelNotFound {
        /// The axis that was searched
        axis: Axis,
        /// The label that was requested
        label: String,
    },
    /// An index falls outside `[0, count)`.
    #[error("{axis} index {index} out of range for {count} {axis}s")]
    IndexOutOfRange {
        /// The axis being addressed
        axis: Axis,
        /// The requested index
        index: usize,
        /// The number of rows or columns
        count: usize,
    },
    /// Delimited text could not be assigned to cells.
    #[error("malformed serialization: {0}")]
    MalformedSerialization(String),
    /// Zero rows or zero columns were requested.
    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),
    /// A precision larger than [`Precision::MAX`](crate::Precision::MAX).
    #[error("invalid precision: {0} digits exceeds {max}", max = u16::MAX)]
    InvalidPrecision(usize),
    /// A value, or the result of an update, is not finite.
    #[error("invalid cell value: {0:?}")]
    InvalidValue(f64),
    #[error(transparent)]
    /// Errors coming from `serde_yaml`.
    YamlError(#[from] serde_yaml::Error),
    #[cfg(feature = "json")]
    #[cfg_attr(doc_cfg, doc(cfg(feature = "json")))]
    #[error(transparent)]
    /// Errors coming from `serde_json`.
    JsonError(#[from] serde_json::Error),
}
