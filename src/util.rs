//! Formatting and lookup helpers.
//!
//! These are pure functions. [`LabeledMatrix`](crate::LabeledMatrix)
//! uses them for number rendering and label search, but they
//! are usable on their own.

/// Render `value` in fixed-decimal notation with exactly
/// `precision` digits after the decimal point.
///
/// Rounding follows the standard formatter: the decimal
/// expansion of `value` is rounded to nearest, and an exact tie
/// goes to the even digit. So `2.5` with zero digits is `"2"`
/// and `0.125` with two digits is `"0.12"`, where a half-up
/// formatter would give `"3"` and `"0.13"`.
/// Most decimal literals such as `0.35` are not exact ties,
/// because their binary value lies slightly above or below.
///
/// # Examples
///
/// ```
/// use labeled_matrix::util::format_number;
/// assert_eq!(format_number(1.5, 6), "1.500000");
/// assert_eq!(format_number(2.0 / 3.0, 2), "0.67");
/// assert_eq!(format_number(7.0, 0), "7");
/// ```
///
/// Exact ties round to even:
///
/// ```
/// use labeled_matrix::util::format_number;
/// assert_eq!(format_number(2.5, 0), "2");
/// assert_eq!(format_number(3.5, 0), "4");
/// ```
pub fn format_number(value: f64, precision: u16) -> String {
    let precision = usize::from(precision);
    format!("{value:.precision$}")
}

/// Position of the first label equal to `target`.
///
/// # Returns
///
/// * `Some(index)` of the first exact match
/// * `None` if no label matches
///
/// # Examples
///
/// ```
/// use labeled_matrix::util::find_index;
/// let labels = ["A", "B", "A"];
/// assert_eq!(find_index(&labels, "A"), Some(0));
/// assert_eq!(find_index(&labels, "B"), Some(1));
/// assert_eq!(find_index(&labels, "a"), None);
/// ```
pub fn find_index<S: AsRef<str>>(labels: &[S], target: &str) -> Option<usize> {
    labels.iter().position(|label| label.as_ref() == target)
}
