//! Flat delimited text form of a [`LabeledMatrix`].
//!
//! Values are written in row-major order, rendered with
//! [`format_number`] and separated by [`DELIMITER`].
//! The tabular form puts one row per line.
//! Labels are not part of either form.

use crate::util::format_number;
use crate::AxisId;
use crate::LabeledMatrix;
use crate::MatrixError;
use crate::Precision;

/// Separates values in the delimited text form.
pub const DELIMITER: char = ',';

/// Separates rows in the tabular text form.
pub const LINE_SEPARATOR: &str = "\n";

fn join_values(values: &[f64], precision: Precision) -> String {
    let mut rv = String::new();
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            rv.push(DELIMITER);
        }
        rv.push_str(&format_number(*value, precision.digits()));
    }
    rv
}

fn parse_token(position: usize, token: &str) -> Result<f64, MatrixError> {
    match token.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        Ok(_) => Err(MatrixError::MalformedSerialization(format!(
            "non-finite value {token:?} at position {position}"
        ))),
        Err(e) => Err(MatrixError::MalformedSerialization(format!(
            "invalid number {token:?} at position {position}: {e}"
        ))),
    }
}

// All tokens are parsed before anything is written,
// so a bad token leaves the matrix untouched.
fn parse_values(text: &str, expected: usize) -> Result<Vec<f64>, MatrixError> {
    let tokens = text.split(DELIMITER).collect::<Vec<_>>();
    if tokens.len() != expected {
        return Err(MatrixError::MalformedSerialization(format!(
            "expected {expected} values, got {}",
            tokens.len()
        )));
    }
    tokens
        .iter()
        .enumerate()
        .map(|(position, token)| parse_token(position, token.trim()))
        .collect()
}

impl LabeledMatrix {
    /// Render every cell in row-major order as one delimited line.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut m = labeled_matrix::LabeledMatrix::zeros(2, 2).unwrap();
    /// m.set(0, 0, 1.5).unwrap();
    /// m.set(1, 1, 4.0).unwrap();
    /// assert_eq!(m.serialize(2), "1.50,0.00,0.00,4.00");
    /// assert_eq!(m.serialize(labeled_matrix::Precision::default()),
    ///            "1.500000,0.000000,0.000000,4.000000");
    /// ```
    pub fn serialize<P: Into<Precision>>(&self, precision: P) -> String {
        let precision = precision.into();
        join_values(self.as_slice(), precision)
    }

    /// Render one row as a delimited line.
    pub fn serialize_row<'r, R, P>(&self, row: R, precision: P) -> Result<String, MatrixError>
    where
        R: Into<AxisId<'r>>,
        P: Into<Precision>,
    {
        Ok(join_values(self.row(row)?, precision.into()))
    }

    /// Render the matrix with one delimited line per row.
    ///
    /// There is no line separator after the last row.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut m = labeled_matrix::LabeledMatrix::zeros(2, 2).unwrap();
    /// m.fill(1.0).unwrap();
    /// assert_eq!(m.serialize_tabular(1), "1.0,1.0\n1.0,1.0");
    /// ```
    pub fn serialize_tabular<P: Into<Precision>>(&self, precision: P) -> String {
        let precision = precision.into();
        self.rows()
            .map(|row| join_values(row, precision))
            .collect::<Vec<_>>()
            .join(LINE_SEPARATOR)
    }

    /// Assign cells in row-major order from delimited text.
    ///
    /// Whitespace around each value is ignored.
    ///
    /// # Errors
    ///
    /// [`MatrixError::MalformedSerialization`] unless the text holds
    /// exactly `nrows * ncols` finite numbers.
    /// The matrix is unchanged on error.
    pub fn deserialize(&mut self, text: &str) -> Result<(), MatrixError> {
        let values = parse_values(text, self.as_slice().len())?;
        self.cells_mut().copy_from_slice(&values);
        log::trace!("deserialized {} cells", values.len());
        Ok(())
    }

    /// Assign one row from delimited text.
    ///
    /// # Errors
    ///
    /// [`MatrixError::MalformedSerialization`] unless the text holds
    /// exactly `ncols` finite numbers, plus the addressing
    /// errors of [`LabeledMatrix::row_index`].
    /// The matrix is unchanged on error.
    pub fn deserialize_row<'r, R: Into<AxisId<'r>>>(
        &mut self,
        text: &str,
        row: R,
    ) -> Result<(), MatrixError> {
        let row = self.row_index(row)?;
        let values = parse_values(text, self.ncols())?;
        self.row_cells_mut(row).copy_from_slice(&values);
        Ok(())
    }
}

/// Writes the flat delimited form.
///
/// The formatter's precision is used when given,
/// otherwise [`Precision::default`]. A formatter precision
/// above [`Precision::MAX`] is capped at that value.
///
/// ```
/// let mut m = labeled_matrix::LabeledMatrix::zeros(1, 2).unwrap();
/// m.set(0, 1, 0.3).unwrap();
/// assert_eq!(format!("{m}"), "0.000000,0.300000");
/// assert_eq!(format!("{m:.1}"), "0.0,0.3");
/// ```
impl std::fmt::Display for LabeledMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let precision = f
            .precision()
            .map(|digits| Precision::try_from(digits).unwrap_or(Precision::MAX))
            .unwrap_or_default();
        write!(f, "{}", self.serialize(precision))
    }
}
