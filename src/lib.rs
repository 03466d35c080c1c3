//! A dense, labeled, in-memory matrix of `f64` cells
//! for accumulating counts and sums, such as contingency tables
//! keyed by category pairs.
//!
//! Cells are addressed by index or by label, updated in place,
//! summed by row or column, and written to (or read from)
//! comma-delimited text with a caller-chosen [`Precision`].
//!
//! ```
//! use labeled_matrix::LabeledMatrix;
//!
//! let mut m = LabeledMatrix::with_labels(["A", "B"], ["X", "Y"]).unwrap();
//! m.set("A", "X", 1.5).unwrap();
//! m.set("A", "Y", 2.5).unwrap();
//! m.set("B", "X", 3.0).unwrap();
//! m.set("B", "Y", 4.0).unwrap();
//! assert_eq!(m.serialize(6), "1.500000,2.500000,3.000000,4.000000");
//! assert_eq!(m.row_sum("A").unwrap(), 4.0);
//! assert_eq!(m.column_sum("Y").unwrap(), 6.5);
//! ```
//!
//! ## Optional features
//!
//! * `json`: load and write matrices as JSON.

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![cfg_attr(doc_cfg, feature(doc_cfg))]

mod axis;
mod delimited;
mod error;
mod matrix;
mod precision;
pub mod util;

pub use axis::{Axis, AxisId};
pub use delimited::{DELIMITER, LINE_SEPARATOR};
pub use error::MatrixError;
pub use matrix::LabeledMatrix;
pub use precision::Precision;

/// Build a [`LabeledMatrix`] from a YAML string.
///
/// # Examples
///
/// ```
/// let yaml = "
/// nrows: 2
/// ncols: 2
/// row_labels: [A, B]
/// column_labels: [X, Y]
/// data: [1.5, 2.5, 3.0, 4.0]
/// ";
/// let m = labeled_matrix::loads(yaml).unwrap();
/// assert_eq!(m.get("B", "X").unwrap(), 3.0);
/// ```
///
/// # Errors
///
/// Returns [`MatrixError`] if the input is not valid YAML
/// or describes an invalid matrix.
pub fn loads(yaml: &str) -> Result<LabeledMatrix, MatrixError> {
    LabeledMatrix::new_from_str(yaml)
}

/// Build a [`LabeledMatrix`] from a type implementing [`Read`](std::io::Read).
/// The input must be YAML.
///
/// # Errors
///
/// Returns [`MatrixError`] if the input is not valid YAML
/// or describes an invalid matrix.
pub fn load<T: std::io::Read>(reader: T) -> Result<LabeledMatrix, MatrixError> {
    LabeledMatrix::new_from_reader(reader)
}

/// Build a [`LabeledMatrix`] from a JSON string.
///
/// # Errors
///
/// Returns [`MatrixError`] if the input is not valid JSON
/// or describes an invalid matrix.
#[cfg(feature = "json")]
#[cfg_attr(doc_cfg, doc(cfg(feature = "json")))]
pub fn loads_json(json: &str) -> Result<LabeledMatrix, MatrixError> {
    LabeledMatrix::new_from_json_str(json)
}

/// Build a [`LabeledMatrix`] from a type implementing [`Read`](std::io::Read).
/// The input must be JSON.
///
/// # Errors
///
/// Returns [`MatrixError`] if the input is not valid JSON
/// or describes an invalid matrix.
#[cfg(feature = "json")]
#[cfg_attr(doc_cfg, doc(cfg(feature = "json")))]
pub fn load_json<T: std::io::Read>(reader: T) -> Result<LabeledMatrix, MatrixError> {
    LabeledMatrix::new_from_json_reader(reader)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yaml_round_trip() {
        let mut m = LabeledMatrix::with_labels(["A", "B"], ["X", "Y", "Z"]).unwrap();
        m.add("B", "Z", 7.25).unwrap();
        let yaml = m.as_string().unwrap();
        let back = loads(&yaml).unwrap();
        assert_eq!(m, back);
    }

    #[test]
    fn yaml_without_labels_omits_them() {
        let m = LabeledMatrix::zeros(1, 1).unwrap();
        let yaml = m.as_string().unwrap();
        assert!(!yaml.contains("row_labels"));
        assert!(!yaml.contains("column_labels"));
        assert_eq!(loads(&yaml).unwrap(), m);
    }

    #[test]
    fn load_from_reader() {
        let yaml = "nrows: 1\nncols: 2\ndata: [1, 2]\n";
        let m = load(yaml.as_bytes()).unwrap();
        assert_eq!(m.row(0).unwrap(), [1.0, 2.0]);
    }

    #[cfg(feature = "json")]
    #[test]
    fn json_round_trip() {
        let mut m = LabeledMatrix::with_labels(["A"], ["X", "Y"]).unwrap();
        m.set("A", "Y", -0.5).unwrap();
        let json = m.as_json_string().unwrap();
        assert_eq!(loads_json(&json).unwrap(), m);
        assert_eq!(load_json(json.as_bytes()).unwrap(), m);
    }
}
