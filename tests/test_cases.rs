use glob::glob;

fn process_path(path: &str) -> (Vec<String>, Vec<String>) {
    let paths = glob(path).unwrap();
    let mut failures = vec![];
    let mut successes = vec![];
    for path in paths {
        let name = path.unwrap();
        let file = std::fs::File::open(name.clone()).unwrap();
        match labeled_matrix::load(file) {
            Ok(_) => successes.push(name.to_str().unwrap().to_owned()),
            Err(_) => failures.push(name.to_str().unwrap().to_owned()),
        }
    }
    (successes, failures)
}

#[test]
fn load_valid_matrices() {
    let rv = process_path("tests/test-cases/valid/*.yaml");
    assert!(!rv.0.is_empty());
    assert!(rv.1.is_empty(), "{:?}", rv.1);
}

#[test]
fn load_invalid_matrices() {
    let rv = process_path("tests/test-cases/invalid/*.yaml");
    assert!(!rv.1.is_empty());
    assert!(rv.0.is_empty(), "{:?}", rv.0);
}

#[test]
fn valid_matrices_survive_yaml_round_trip() {
    for path in glob("tests/test-cases/valid/*.yaml").unwrap() {
        let file = std::fs::File::open(path.unwrap()).unwrap();
        let m = labeled_matrix::load(file).unwrap();
        let yaml = m.as_string().unwrap();
        assert_eq!(labeled_matrix::loads(&yaml).unwrap(), m);
    }
}

#[test]
fn contingency_counts_margins() {
    let file = std::fs::File::open("tests/test-cases/valid/contingency_counts.yaml").unwrap();
    let m = labeled_matrix::load(file).unwrap();
    assert_eq!(m.shape(), (3, 2));
    assert_eq!(m.row_sum("south").unwrap(), 16.0);
    assert_eq!(m.column_sum("yes").unwrap(), 19.0);
    assert_eq!(m.serialize_tabular(0), "12,3\n7,9\n0,4");
}

#[test]
fn duplicate_labels_address_first_match() {
    let file = std::fs::File::open("tests/test-cases/valid/duplicate_labels.yaml").unwrap();
    let m = labeled_matrix::load(file).unwrap();
    assert_eq!(m.get("same", "value").unwrap(), 1.0);
    assert_eq!(m.get(1, "value").unwrap(), 2.0);
}
