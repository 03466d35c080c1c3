use labeled_matrix::Axis;
use labeled_matrix::LabeledMatrix;
use labeled_matrix::MatrixError;

fn scenario() -> LabeledMatrix {
    let mut m = LabeledMatrix::with_labels(["A", "B"], ["X", "Y"]).unwrap();
    m.set("A", "X", 1.5).unwrap();
    m.set("A", "Y", 2.5).unwrap();
    m.set("B", "X", 3.0).unwrap();
    m.set("B", "Y", 4.0).unwrap();
    m
}

#[test]
fn two_by_two_scenario() {
    let m = scenario();
    assert_eq!(m.serialize(6), "1.500000,2.500000,3.000000,4.000000");
    assert_eq!(m.row_sum("A").unwrap(), 4.0);
    assert_eq!(m.column_sum("Y").unwrap(), 6.5);
    assert_eq!(m.row_sum(1).unwrap(), 7.0);
    assert_eq!(m.column_sum(0).unwrap(), 4.5);
}

#[test]
fn construct_from_owned_label_lists() {
    let rows: Vec<String> = vec!["r0".into(), "r1".into(), "r2".into()];
    let cols: Vec<String> = vec!["c0".into()];
    let m = LabeledMatrix::with_labels(rows.clone(), cols.clone()).unwrap();
    assert_eq!(m.shape(), (3, 1));
    assert_eq!(m.row_labels().unwrap(), rows.as_slice());
    assert_eq!(m.column_labels().unwrap(), cols.as_slice());
    assert_eq!(m.get(&rows[2], &cols[0]).unwrap(), 0.0);
}

#[test]
fn labels_attached_after_counts_only_construction() -> anyhow::Result<()> {
    let mut m = LabeledMatrix::zeros(2, 3)?;
    m.set(1, 2, 9.0)?;
    m.set_labels(["A", "B"], ["X", "Y", "Z"])?;
    assert_eq!(m.get("B", "Z")?, 9.0);
    m.clear_labels();
    assert!(m.row_labels().is_none());
    assert!(matches!(
        m.get("B", "Z"),
        Err(MatrixError::LabelNotFound { .. })
    ));
    Ok(())
}

#[test]
fn set_labels_with_wrong_lengths() {
    let mut m = LabeledMatrix::zeros(2, 2).unwrap();
    assert!(matches!(
        m.set_labels(["A"], ["X", "Y"]),
        Err(MatrixError::DimensionMismatch {
            axis: Axis::Row,
            expected: 2,
            found: 1
        })
    ));
    assert!(m.row_labels().is_none());
    assert!(m.column_labels().is_none());
}

#[test]
fn initialize_zeroes_and_resizes() -> anyhow::Result<()> {
    let mut m = scenario();
    m.initialize(3, 1)?;
    assert_eq!(m.shape(), (3, 1));
    assert!(m.as_slice().iter().all(|v| *v == 0.0));
    // labels are kept as-is until replaced
    assert_eq!(m.row_labels().unwrap().len(), 2);
    m.set_labels(["P", "Q", "R"], ["only"])?;
    m.increment("R", "only")?;
    assert_eq!(m.column(0)?, vec![0.0, 0.0, 1.0]);
    assert!(matches!(
        m.initialize(0, 1),
        Err(MatrixError::InvalidDimensions(_))
    ));
    assert_eq!(m.shape(), (3, 1));
    Ok(())
}

#[test]
fn add_and_increment() -> anyhow::Result<()> {
    let mut m = LabeledMatrix::with_labels(["a", "b"], ["x", "y"])?;
    m.add("a", "y", 2.5)?;
    m.add(0, 1, -0.5)?;
    m.increment("a", "y")?;
    m.increment(0, "y")?;
    assert_eq!(m.get("a", "y")?, 4.0);
    assert_eq!(m.get(0, 1)?, 4.0);
    Ok(())
}

#[test]
fn scaling_rows_and_columns() -> anyhow::Result<()> {
    let mut m = scenario();
    m.scale_row("A", 2.0)?;
    assert_eq!(m.row("A")?, [3.0, 5.0]);
    m.scale_column("X", 0.5)?;
    assert_eq!(m.column("X")?, vec![1.5, 1.5]);
    assert_eq!(m.row(1)?, [1.5, 4.0]);
    m.scale_row(1, 0.0)?;
    assert_eq!(m.row_sum(1)?, 0.0);
    Ok(())
}

#[test]
fn row_access_returns_copies() -> anyhow::Result<()> {
    let mut m = scenario();
    let mut copy = m.row_to_vec("A")?;
    copy[0] = 100.0;
    assert_eq!(m.get("A", "X")?, 1.5);

    let mut buffer = [0.0; 2];
    m.copy_row_into("B", &mut buffer)?;
    assert_eq!(buffer, [3.0, 4.0]);
    m.set("B", "X", -1.0)?;
    assert_eq!(buffer, [3.0, 4.0]);
    Ok(())
}

#[test]
fn column_access() -> anyhow::Result<()> {
    let m = scenario();
    assert_eq!(m.column("Y")?, vec![2.5, 4.0]);
    let mut buffer = vec![0.0; 2];
    m.copy_column_into(0, &mut buffer)?;
    assert_eq!(buffer, vec![1.5, 3.0]);
    Ok(())
}

#[test]
fn buffers_must_match_dimensions() {
    let m = LabeledMatrix::zeros(2, 3).unwrap();
    let mut short = [0.0; 2];
    assert!(matches!(
        m.copy_row_into(0, &mut short),
        Err(MatrixError::DimensionMismatch {
            axis: Axis::Column,
            expected: 3,
            found: 2
        })
    ));
    let mut long = [0.0; 3];
    assert!(matches!(
        m.copy_column_into(0, &mut long),
        Err(MatrixError::DimensionMismatch {
            axis: Axis::Row,
            expected: 2,
            found: 3
        })
    ));
}

#[test]
fn indices_out_of_range() {
    let mut m = LabeledMatrix::zeros(2, 3).unwrap();
    assert!(matches!(
        m.get(2, 0),
        Err(MatrixError::IndexOutOfRange {
            axis: Axis::Row,
            index: 2,
            count: 2
        })
    ));
    assert!(matches!(
        m.set(0, 3, 1.0),
        Err(MatrixError::IndexOutOfRange {
            axis: Axis::Column,
            index: 3,
            count: 3
        })
    ));
    assert!(m.row(5).is_err());
    assert!(m.column(5).is_err());
    assert!(m.row_sum(2).is_err());
    assert!(m.column_sum(3).is_err());
    assert!(m.scale_row(2, 1.0).is_err());
    assert!(m.scale_column(3, 1.0).is_err());
}

#[test]
fn unknown_labels_fail_everywhere() {
    let mut m = scenario();
    let before = m.clone();
    let is_missing = |rv: Result<(), MatrixError>| {
        matches!(rv, Err(MatrixError::LabelNotFound { .. }))
    };
    assert!(is_missing(m.set("C", "X", 1.0)));
    assert!(is_missing(m.set("A", "Z", 1.0)));
    assert!(is_missing(m.add("C", "X", 1.0)));
    assert!(is_missing(m.increment("A", "Z")));
    assert!(is_missing(m.scale_row("C", 2.0)));
    assert!(is_missing(m.scale_column("Z", 2.0)));
    assert!(is_missing(m.get("C", "X").map(|_| ())));
    assert!(is_missing(m.row_sum("C").map(|_| ())));
    assert!(is_missing(m.column_sum("Z").map(|_| ())));
    assert!(is_missing(m.row("C").map(|_| ())));
    assert!(is_missing(m.column("Z").map(|_| ())));
    let mut buffer = [-1.0; 2];
    assert!(is_missing(m.copy_row_into("C", &mut buffer)));
    assert!(is_missing(m.copy_column_into("Z", &mut buffer)));
    assert_eq!(buffer, [-1.0; 2]);
    assert!(is_missing(m.deserialize_row("9,9", "C")));
    assert_eq!(m, before);
}

#[test]
fn error_messages() {
    let m = scenario();
    let e = m.get("A", "nope").unwrap_err();
    assert_eq!(e.to_string(), "column label \"nope\" not found");
    let e = m.get(4, 0).unwrap_err();
    assert_eq!(e.to_string(), "row index 4 out of range for 2 rows");
}

#[test]
fn rows_iterator_is_row_major() {
    let m = scenario();
    let rows = m.rows().map(|r| r.to_vec()).collect::<Vec<_>>();
    assert_eq!(rows, vec![vec![1.5, 2.5], vec![3.0, 4.0]]);
}
