use crate::util::find_index;
use crate::Axis;
use crate::AxisId;
use crate::MatrixError;
use serde::{Deserialize, Serialize};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::io::Read;

fn checked_len(nrows: usize, ncols: usize) -> Result<usize, MatrixError> {
    if nrows == 0 || ncols == 0 {
        return Err(MatrixError::InvalidDimensions(format!(
            "a matrix needs at least one row and one column, got {nrows}x{ncols}"
        )));
    }
    nrows.checked_mul(ncols).ok_or_else(|| {
        MatrixError::InvalidDimensions(format!("{nrows}x{ncols} cells overflows usize"))
    })
}

fn check_value(value: f64) -> Result<f64, MatrixError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(MatrixError::InvalidValue(value))
    }
}

fn collect_labels<L>(labels: L) -> Vec<String>
where
    L: IntoIterator,
    L::Item: Into<String>,
{
    labels.into_iter().map(|label| label.into()).collect()
}

fn check_label_count(axis: Axis, count: usize, labels: &[String]) -> Result<(), MatrixError> {
    if labels.len() == count {
        Ok(())
    } else {
        Err(MatrixError::DimensionMismatch {
            axis,
            expected: count,
            found: labels.len(),
        })
    }
}

/// Pairs of (duplicate index, first index), in one pass.
fn duplicate_labels(labels: &[String]) -> Vec<(usize, usize)> {
    let mut first = HashMap::with_capacity(labels.len());
    let mut duplicates = vec![];
    for (index, label) in labels.iter().enumerate() {
        match first.entry(label.as_str()) {
            Entry::Occupied(seen) => duplicates.push((index, *seen.get())),
            Entry::Vacant(slot) => {
                slot.insert(index);
            }
        }
    }
    duplicates
}

fn warn_on_duplicate_labels(axis: Axis, labels: &[String]) {
    for (index, first) in duplicate_labels(labels) {
        log::warn!(
            "duplicate {axis} label {:?} at index {index} is unreachable by label (first at {first})",
            labels[index]
        );
    }
}

fn check_scaled<'a, I>(cells: I, factor: f64) -> Result<(), MatrixError>
where
    I: Iterator<Item = &'a f64>,
{
    check_value(factor)?;
    match cells.map(|value| value * factor).find(|value| !value.is_finite()) {
        Some(bad) => Err(MatrixError::InvalidValue(bad)),
        None => Ok(()),
    }
}

/// A dense, row-major table of `f64` cells with optional
/// row and column labels.
///
/// Cells start at zero and are addressed either by index or
/// by label (see [`AxisId`](crate::AxisId)).
/// Cell values are always finite: operations that would
/// store a non-finite value fail with
/// [`MatrixError::InvalidValue`](crate::MatrixError::InvalidValue)
/// and leave the matrix unchanged.
///
/// # Examples
///
/// Building a contingency table:
///
/// ```
/// use labeled_matrix::LabeledMatrix;
///
/// let mut table = LabeledMatrix::with_labels(["smoker", "non-smoker"], ["sick", "healthy"]).unwrap();
/// for (status, outcome) in [("smoker", "sick"), ("smoker", "healthy"), ("non-smoker", "healthy")] {
///     table.increment(status, outcome).unwrap();
/// }
/// assert_eq!(table.row_sum("smoker").unwrap(), 2.0);
/// assert_eq!(table.column_sum("healthy").unwrap(), 2.0);
/// ```
///
/// # Thread safety
///
/// There is no internal locking. Share an instance across
/// threads only behind external synchronization such as a
/// [`Mutex`](std::sync::Mutex).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MatrixRecord")]
pub struct LabeledMatrix {
    nrows: usize,
    ncols: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    row_labels: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    column_labels: Option<Vec<String>>,
    data: Vec<f64>,
}

// Unvalidated input. Every invariant is checked
// in the conversion to LabeledMatrix.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct MatrixRecord {
    nrows: usize,
    ncols: usize,
    #[serde(default)]
    row_labels: Option<Vec<String>>,
    #[serde(default)]
    column_labels: Option<Vec<String>>,
    data: Vec<f64>,
}

impl TryFrom<MatrixRecord> for LabeledMatrix {
    type Error = MatrixError;

    fn try_from(value: MatrixRecord) -> Result<Self, Self::Error> {
        let len = checked_len(value.nrows, value.ncols)?;
        if value.data.len() != len {
            return Err(MatrixError::MalformedSerialization(format!(
                "a {}x{} matrix needs {len} values, got {}",
                value.nrows,
                value.ncols,
                value.data.len()
            )));
        }
        if let Some(bad) = value.data.iter().find(|v| !v.is_finite()) {
            return Err(MatrixError::InvalidValue(*bad));
        }
        let mut matrix = Self {
            nrows: value.nrows,
            ncols: value.ncols,
            row_labels: None,
            column_labels: None,
            data: value.data,
        };
        match (value.row_labels, value.column_labels) {
            (Some(row_labels), Some(column_labels)) => {
                matrix.set_labels(row_labels, column_labels)?
            }
            (None, None) => (),
            _ => {
                return Err(MatrixError::MalformedSerialization(
                    "row_labels and column_labels must be given together".to_string(),
                ))
            }
        }
        Ok(matrix)
    }
}

impl LabeledMatrix {
    /// Create a matrix of `nrows` by `ncols` zeros with no labels.
    ///
    /// # Errors
    ///
    /// [`MatrixError::InvalidDimensions`] if either count is zero.
    pub fn zeros(nrows: usize, ncols: usize) -> Result<Self, MatrixError> {
        let len = checked_len(nrows, ncols)?;
        Ok(Self {
            nrows,
            ncols,
            row_labels: None,
            column_labels: None,
            data: vec![0.0; len],
        })
    }

    /// Create a matrix of zeros whose dimensions are
    /// given by the number of labels.
    ///
    /// # Examples
    ///
    /// ```
    /// let rows = vec!["A".to_string(), "B".to_string()];
    /// let m = labeled_matrix::LabeledMatrix::with_labels(rows, ["X", "Y", "Z"]).unwrap();
    /// assert_eq!(m.shape(), (2, 3));
    /// assert_eq!(m.column_labels().unwrap()[2], "Z");
    /// ```
    ///
    /// # Errors
    ///
    /// [`MatrixError::InvalidDimensions`] if either label sequence is empty.
    pub fn with_labels<R, C>(row_labels: R, column_labels: C) -> Result<Self, MatrixError>
    where
        R: IntoIterator,
        R::Item: Into<String>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        let row_labels = collect_labels(row_labels);
        let column_labels = collect_labels(column_labels);
        let mut matrix = Self::zeros(row_labels.len(), column_labels.len())?;
        matrix.set_labels(row_labels, column_labels)?;
        Ok(matrix)
    }

    /// Reallocate storage to `nrows` by `ncols` and set every cell to zero.
    ///
    /// Labels are left untouched.
    /// If their lengths no longer match the new dimensions, call
    /// [`LabeledMatrix::set_labels`] before addressing by label.
    /// Until then, a label that resolves past the new dimensions
    /// gives [`MatrixError::IndexOutOfRange`].
    pub fn initialize(&mut self, nrows: usize, ncols: usize) -> Result<(), MatrixError> {
        let len = checked_len(nrows, ncols)?;
        self.data = vec![0.0; len];
        self.nrows = nrows;
        self.ncols = ncols;
        log::debug!("reallocated matrix storage to {nrows}x{ncols}");
        if self.has_stale_labels() {
            log::warn!("labels no longer match the {nrows}x{ncols} dimensions");
        }
        Ok(())
    }

    fn has_stale_labels(&self) -> bool {
        let stale = |labels: &Option<Vec<String>>, count: usize| {
            labels.as_ref().map_or(false, |labels| labels.len() != count)
        };
        stale(&self.row_labels, self.nrows) || stale(&self.column_labels, self.ncols)
    }

    /// Replace both label sequences.
    ///
    /// Both sequences are checked before either is stored.
    /// When a label occurs more than once, label lookup
    /// finds the first occurrence.
    ///
    /// # Errors
    ///
    /// [`MatrixError::DimensionMismatch`] if a sequence's length
    /// differs from the matching dimension.
    pub fn set_labels<R, C>(&mut self, row_labels: R, column_labels: C) -> Result<(), MatrixError>
    where
        R: IntoIterator,
        R::Item: Into<String>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        let row_labels = collect_labels(row_labels);
        let column_labels = collect_labels(column_labels);
        check_label_count(Axis::Row, self.nrows, &row_labels)?;
        check_label_count(Axis::Column, self.ncols, &column_labels)?;
        warn_on_duplicate_labels(Axis::Row, &row_labels);
        warn_on_duplicate_labels(Axis::Column, &column_labels);
        self.row_labels = Some(row_labels);
        self.column_labels = Some(column_labels);
        Ok(())
    }

    /// Remove both label sequences.
    pub fn clear_labels(&mut self) {
        self.row_labels = None;
        self.column_labels = None;
    }

    /// The row labels, if set.
    pub fn row_labels(&self) -> Option<&[String]> {
        self.row_labels.as_deref()
    }

    /// The column labels, if set.
    pub fn column_labels(&self) -> Option<&[String]> {
        self.column_labels.as_deref()
    }

    /// Number of rows.
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns.
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// `(nrows, ncols)`
    pub fn shape(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    /// All cells in row-major order.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Iterate over rows as slices.
    pub fn rows(&self) -> std::slice::ChunksExact<'_, f64> {
        self.data.chunks_exact(self.ncols)
    }

    fn resolve(&self, axis: Axis, id: AxisId<'_>) -> Result<usize, MatrixError> {
        let (count, labels) = match axis {
            Axis::Row => (self.nrows, self.row_labels.as_deref()),
            Axis::Column => (self.ncols, self.column_labels.as_deref()),
        };
        let index = match id {
            AxisId::Index(index) => index,
            AxisId::Label(label) => labels
                .and_then(|labels| find_index(labels, label))
                .ok_or_else(|| MatrixError::LabelNotFound {
                    axis,
                    label: label.to_string(),
                })?,
        };
        if index < count {
            Ok(index)
        } else {
            Err(MatrixError::IndexOutOfRange { axis, index, count })
        }
    }

    /// Resolve a row index or label to a checked index.
    ///
    /// # Errors
    ///
    /// * [`MatrixError::LabelNotFound`] for an unknown label
    /// * [`MatrixError::IndexOutOfRange`] for an index `>= nrows`
    pub fn row_index<'r, R: Into<AxisId<'r>>>(&self, row: R) -> Result<usize, MatrixError> {
        self.resolve(Axis::Row, row.into())
    }

    /// Resolve a column index or label to a checked index.
    ///
    /// # Errors
    ///
    /// * [`MatrixError::LabelNotFound`] for an unknown label
    /// * [`MatrixError::IndexOutOfRange`] for an index `>= ncols`
    pub fn column_index<'c, C: Into<AxisId<'c>>>(&self, column: C) -> Result<usize, MatrixError> {
        self.resolve(Axis::Column, column.into())
    }

    fn offset<'r, 'c, R, C>(&self, row: R, column: C) -> Result<usize, MatrixError>
    where
        R: Into<AxisId<'r>>,
        C: Into<AxisId<'c>>,
    {
        let row = self.row_index(row)?;
        let column = self.column_index(column)?;
        Ok(row * self.ncols + column)
    }

    fn row_range(&self, row: usize) -> std::ops::Range<usize> {
        let start = row * self.ncols;
        start..start + self.ncols
    }

    fn column_cells(&self, column: usize) -> impl Iterator<Item = &f64> + '_ {
        self.data.iter().skip(column).step_by(self.ncols)
    }

    /// The value of a cell.
    pub fn get<'r, 'c, R, C>(&self, row: R, column: C) -> Result<f64, MatrixError>
    where
        R: Into<AxisId<'r>>,
        C: Into<AxisId<'c>>,
    {
        let offset = self.offset(row, column)?;
        Ok(self.data[offset])
    }

    /// Overwrite a cell.
    ///
    /// # Errors
    ///
    /// [`MatrixError::InvalidValue`] if `value` is not finite,
    /// plus the addressing errors of [`LabeledMatrix::row_index`].
    pub fn set<'r, 'c, R, C>(&mut self, row: R, column: C, value: f64) -> Result<(), MatrixError>
    where
        R: Into<AxisId<'r>>,
        C: Into<AxisId<'c>>,
    {
        let offset = self.offset(row, column)?;
        self.data[offset] = check_value(value)?;
        Ok(())
    }

    /// Add `delta` to a cell.
    ///
    /// # Errors
    ///
    /// [`MatrixError::InvalidValue`] if `delta` or the sum is not finite.
    pub fn add<'r, 'c, R, C>(&mut self, row: R, column: C, delta: f64) -> Result<(), MatrixError>
    where
        R: Into<AxisId<'r>>,
        C: Into<AxisId<'c>>,
    {
        let offset = self.offset(row, column)?;
        check_value(delta)?;
        let cell = &mut self.data[offset];
        *cell = check_value(*cell + delta)?;
        Ok(())
    }

    /// Add exactly 1.0 to a cell.
    pub fn increment<'r, 'c, R, C>(&mut self, row: R, column: C) -> Result<(), MatrixError>
    where
        R: Into<AxisId<'r>>,
        C: Into<AxisId<'c>>,
    {
        self.add(row, column, 1.0)
    }

    /// Multiply every cell of a row by `factor`.
    ///
    /// No cell is written unless every product is finite.
    pub fn scale_row<'r, R: Into<AxisId<'r>>>(
        &mut self,
        row: R,
        factor: f64,
    ) -> Result<(), MatrixError> {
        let range = self.row_range(self.row_index(row)?);
        check_scaled(self.data[range.clone()].iter(), factor)?;
        self.data[range].iter_mut().for_each(|value| *value *= factor);
        Ok(())
    }

    /// Multiply every cell of a column by `factor`.
    ///
    /// No cell is written unless every product is finite.
    pub fn scale_column<'c, C: Into<AxisId<'c>>>(
        &mut self,
        column: C,
        factor: f64,
    ) -> Result<(), MatrixError> {
        let column = self.column_index(column)?;
        check_scaled(self.column_cells(column), factor)?;
        let ncols = self.ncols;
        self.data
            .iter_mut()
            .skip(column)
            .step_by(ncols)
            .for_each(|value| *value *= factor);
        Ok(())
    }

    /// Set every cell to `value`.
    pub fn fill(&mut self, value: f64) -> Result<(), MatrixError> {
        self.data.fill(check_value(value)?);
        Ok(())
    }

    /// Borrow a row.
    ///
    /// The slice is read-only. Use [`LabeledMatrix::set`],
    /// [`LabeledMatrix::add`] or [`LabeledMatrix::deserialize_row`]
    /// to change cells.
    pub fn row<'r, R: Into<AxisId<'r>>>(&self, row: R) -> Result<&[f64], MatrixError> {
        let range = self.row_range(self.row_index(row)?);
        Ok(&self.data[range])
    }

    /// Copy a row into a new `Vec`.
    pub fn row_to_vec<'r, R: Into<AxisId<'r>>>(&self, row: R) -> Result<Vec<f64>, MatrixError> {
        Ok(self.row(row)?.to_vec())
    }

    /// Copy a row into `buffer`, which must hold exactly `ncols` values.
    ///
    /// # Errors
    ///
    /// [`MatrixError::DimensionMismatch`] if `buffer.len() != ncols`.
    pub fn copy_row_into<'r, R: Into<AxisId<'r>>>(
        &self,
        row: R,
        buffer: &mut [f64],
    ) -> Result<(), MatrixError> {
        let values = self.row(row)?;
        if buffer.len() != values.len() {
            return Err(MatrixError::DimensionMismatch {
                axis: Axis::Column,
                expected: values.len(),
                found: buffer.len(),
            });
        }
        buffer.copy_from_slice(values);
        Ok(())
    }

    /// Copy a column into a new `Vec`.
    pub fn column<'c, C: Into<AxisId<'c>>>(&self, column: C) -> Result<Vec<f64>, MatrixError> {
        let column = self.column_index(column)?;
        Ok(self.column_cells(column).copied().collect())
    }

    /// Copy a column into `buffer`, which must hold exactly `nrows` values.
    ///
    /// # Errors
    ///
    /// [`MatrixError::DimensionMismatch`] if `buffer.len() != nrows`.
    pub fn copy_column_into<'c, C: Into<AxisId<'c>>>(
        &self,
        column: C,
        buffer: &mut [f64],
    ) -> Result<(), MatrixError> {
        let column = self.column_index(column)?;
        if buffer.len() != self.nrows {
            return Err(MatrixError::DimensionMismatch {
                axis: Axis::Row,
                expected: self.nrows,
                found: buffer.len(),
            });
        }
        buffer
            .iter_mut()
            .zip(self.column_cells(column))
            .for_each(|(dest, value)| *dest = *value);
        Ok(())
    }

    /// Sum of the cells in a row.
    pub fn row_sum<'r, R: Into<AxisId<'r>>>(&self, row: R) -> Result<f64, MatrixError> {
        Ok(self.row(row)?.iter().sum())
    }

    /// Sum of the cells in a column.
    pub fn column_sum<'c, C: Into<AxisId<'c>>>(&self, column: C) -> Result<f64, MatrixError> {
        let column = self.column_index(column)?;
        Ok(self.column_cells(column).sum())
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [f64] {
        &mut self.data
    }

    pub(crate) fn row_cells_mut(&mut self, row: usize) -> &mut [f64] {
        let range = self.row_range(row);
        &mut self.data[range]
    }

    pub(crate) fn new_from_str(yaml: &'_ str) -> Result<Self, MatrixError> {
        let matrix: Self = serde_yaml::from_str(yaml)?;
        log::trace!("loaded {}x{} matrix from YAML", matrix.nrows, matrix.ncols);
        Ok(matrix)
    }

    pub(crate) fn new_from_reader<T: Read>(reader: T) -> Result<Self, MatrixError> {
        let matrix: Self = serde_yaml::from_reader(reader)?;
        log::trace!("loaded {}x{} matrix from YAML", matrix.nrows, matrix.ncols);
        Ok(matrix)
    }

    #[cfg(feature = "json")]
    pub(crate) fn new_from_json_str(json: &'_ str) -> Result<Self, MatrixError> {
        let matrix: Self = serde_json::from_str(json)?;
        log::trace!("loaded {}x{} matrix from JSON", matrix.nrows, matrix.ncols);
        Ok(matrix)
    }

    #[cfg(feature = "json")]
    pub(crate) fn new_from_json_reader<T: Read>(reader: T) -> Result<Self, MatrixError> {
        let matrix: Self = serde_json::from_reader(reader)?;
        log::trace!("loaded {}x{} matrix from JSON", matrix.nrows, matrix.ncols);
        Ok(matrix)
    }

    /// Return a representation of the matrix as a string.
    ///
    /// The format is YAML, with the cells stored
    /// in row-major order under `data`.
    ///
    /// # Error
    ///
    /// Will return an error if `serde_yaml::to_string`
    /// returns an error.
    pub fn as_string(&self) -> Result<String, MatrixError> {
        match serde_yaml::to_string(self) {
            Ok(string) => Ok(string),
            Err(e) => Err(e.into()),
        }
    }

    /// Return a representation of the matrix as a string.
    ///
    /// The format is JSON, with the same fields
    /// as [`LabeledMatrix::as_string`].
    ///
    /// # Error
    ///
    /// Will return an error if `serde_json::to_string`
    /// returns an error.
    #[cfg(feature = "json")]
    #[cfg_attr(doc_cfg, doc(cfg(feature = "json")))]
    pub fn as_json_string(&self) -> Result<String, MatrixError> {
        match serde_json::to_string(self) {
            Ok(string) => Ok(string),
            Err(e) => Err(e.into()),
        }
    }
}
