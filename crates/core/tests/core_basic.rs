use analyzer_core::model::{Dataset, DatasetError, DOMAIN_SIZE};
use analyzer_core::version;

#[test]
fn version_is_non_empty() {
    let v = version();
    assert!(!v.is_empty());
}

#[test]
fn dataset_reports_length_and_distinct_values() {
    let dataset = Dataset::from(vec![5, 1, 5, 9, 1, 1]);
    assert_eq!(dataset.len(), 6);
    assert!(!dataset.is_empty());
    assert_eq!(dataset.distinct_count(), 3);
    assert_eq!(dataset.values(), &[5, 1, 5, 9, 1, 1]);
}

#[test]
fn empty_dataset_has_no_values() {
    let dataset = Dataset::empty();
    assert!(dataset.is_empty());
    assert_eq!(dataset.distinct_count(), 0);
    assert!(dataset.check_domain(DOMAIN_SIZE).is_ok());
}

#[test]
fn check_domain_reports_first_offending_value() {
    let dataset: Dataset = vec![0, 999, 1000, -1].into_iter().collect();
    let err = dataset.check_domain(DOMAIN_SIZE).unwrap_err();
    assert_eq!(err, DatasetError::OutOfDomain { index: 2, value: 1000, domain: DOMAIN_SIZE });
    assert!(err.to_string().contains("outside the domain"));
}

#[test]
fn check_domain_rejects_negative_values() {
    let dataset = Dataset::from(vec![3, -7]);
    assert!(matches!(
        dataset.check_domain(DOMAIN_SIZE),
        Err(DatasetError::OutOfDomain { index: 1, value: -7, .. })
    ));
}
