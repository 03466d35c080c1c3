use labeled_matrix::LabeledMatrix;
use labeled_matrix::MatrixError;

// (region, answer) pairs as they might arrive from a batch job
const RECORDS: &[(&str, &str)] = &[
    ("north", "yes"),
    ("north", "no"),
    ("south", "yes"),
    ("north", "yes"),
    ("west", "no"),
    ("south", "yes"),
    ("east", "yes"),
    ("west", "yes"),
];

fn main() -> Result<(), MatrixError> {
    let mut table = LabeledMatrix::with_labels(["north", "south", "west"], ["yes", "no"])?;

    for (region, answer) in RECORDS {
        match table.increment(*region, *answer) {
            Ok(()) => (),
            Err(MatrixError::LabelNotFound { axis, label }) => {
                eprintln!("skipping record with unknown {axis} {label:?}")
            }
            Err(e) => return Err(e),
        }
    }

    println!("counts:\n{}", table.serialize_tabular(0));

    // Convert each row to proportions of the row total.
    let regions = table.row_labels().unwrap_or_default().to_vec();
    for region in regions.iter() {
        let total = table.row_sum(region)?;
        if total > 0.0 {
            table.scale_row(region, 1.0 / total)?;
        }
    }

    println!("row proportions:\n{}", table.serialize_tabular(3));
    println!("flat: {table:.2}");
    println!("as YAML:\n{}", table.as_string()?);
    Ok(())
}
