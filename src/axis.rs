/// One of the two dimensions of a [`LabeledMatrix`](crate::LabeledMatrix).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Rows, indexed by the first coordinate
    Row,
    /// Columns, indexed by the second coordinate
    Column,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let value = match self {
            Axis::Row => "row",
            Axis::Column => "column",
        };
        write!(f, "{value}")
    }
}

/// A row or column can be identified as an index
/// or as a label.
///
/// Methods of [`LabeledMatrix`](crate::LabeledMatrix) accept
/// anything that converts into an `AxisId`, so the
/// same method handles both forms:
///
/// ```
/// let mut m = labeled_matrix::LabeledMatrix::with_labels(["A", "B"], ["X", "Y"]).unwrap();
/// m.set("B", "Y", 4.0).unwrap();
/// assert_eq!(m.get(1, 1).unwrap(), 4.0);
/// assert_eq!(m.get("B", 1).unwrap(), 4.0);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AxisId<'label> {
    /// The index of a row or column
    Index(usize),
    /// The label of a row or column
    Label(&'label str),
}

impl<'label> From<usize> for AxisId<'label> {
    fn from(value: usize) -> Self {
        Self::Index(value)
    }
}

impl<'label> From<&'label str> for AxisId<'label> {
    fn from(value: &'label str) -> Self {
        Self::Label(value)
    }
}

impl<'label> From<&'label String> for AxisId<'label> {
    fn from(value: &'label String) -> Self {
        Self::Label(value.as_str())
    }
}

impl std::fmt::Display for AxisId<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AxisId::Index(index) => write!(f, "{index}"),
            AxisId::Label(label) => write!(f, "{label:?}"),
        }
    }
}
