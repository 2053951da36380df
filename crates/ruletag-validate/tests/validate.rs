//! Unit tests for the matrix builder and the record evaluator.

use std::collections::BTreeMap;

use ruletag_model::{RuleTagError, TaggedRecord};
use ruletag_validate::{build_matrix, validate_record};

/// Bank-account style record with declaratively registered rule tags.
struct Account {
    country: String,
    bank_id: String,
    iban: String,
}

impl TaggedRecord for Account {
    fn rule_tags(&self) -> BTreeMap<String, String> {
        BTreeMap::from([
            ("Country".to_string(), String::new()),
            (
                "BankId".to_string(),
                "[GB:7-10,required | PT:5]".to_string(),
            ),
            (
                "IBAN".to_string(),
                "[GB:8 | AU:4,required | PT:7-9,required]".to_string(),
            ),
        ])
    }

    fn field_values(&self) -> BTreeMap<String, String> {
        BTreeMap::from([
            ("Country".to_string(), self.country.clone()),
            ("BankId".to_string(), self.bank_id.clone()),
            ("IBAN".to_string(), self.iban.clone()),
        ])
    }
}

fn account(bank_id: &str, iban: &str) -> Account {
    Account {
        country: "GB".to_string(),
        bank_id: bank_id.to_string(),
        iban: iban.to_string(),
    }
}

struct BadRecord;

impl TaggedRecord for BadRecord {
    fn rule_tags(&self) -> BTreeMap<String, String> {
        BTreeMap::from([
            ("Good".to_string(), "[GB:1-5]".to_string()),
            ("Broken".to_string(), ":GB:1-5]".to_string()),
        ])
    }

    fn field_values(&self) -> BTreeMap<String, String> {
        BTreeMap::new()
    }
}

#[test]
fn matrix_covers_tagged_fields_only() {
    let matrix = build_matrix(&account("123344", "asdf")).expect("matrix builds");
    assert_eq!(matrix.len(), 2);
    assert!(matrix.contains_key("BankId"));
    assert!(matrix.contains_key("IBAN"));
    // The untagged Country field is omitted, not inserted with an empty map.
    assert!(!matrix.contains_key("Country"));
}

#[test]
fn matrix_records_parsed_bounds() {
    let matrix = build_matrix(&account("123344", "asdf")).expect("matrix builds");
    assert_eq!(matrix["IBAN"]["AU"].max_len, 4);
    assert!(matrix["IBAN"]["AU"].required);
    assert_eq!(matrix["BankId"]["GB"].min_len, 7);
    assert_eq!(matrix["BankId"]["GB"].max_len, 10);
}

#[test]
fn matrix_build_aborts_on_first_bad_tag() {
    let error = build_matrix(&BadRecord).expect_err("broken tag aborts the build");
    assert_eq!(
        error,
        RuleTagError::UnexpectedSymbol {
            symbol: ':',
            position: 0,
        }
    );
}

#[test]
fn out_of_range_value_produces_one_violation() {
    let violations =
        validate_record(&account("asdfasdfasdfasfasdfasdf", "12345678"), "GB").expect("evaluates");
    assert_eq!(violations.len(), 1);
    assert_eq!(
        violations[0],
        "field BankId is expected to have between 7 and 10 characters for country GB, got 23"
    );
}

#[test]
fn in_range_record_has_no_violations() {
    let violations = validate_record(&account("12334455", "12345678"), "GB").expect("evaluates");
    assert!(violations.is_empty());
}

#[test]
fn bounds_are_inclusive() {
    for bank_id in ["1234567", "1234567890"] {
        let violations = validate_record(&account(bank_id, ""), "GB").expect("evaluates");
        assert!(violations.is_empty(), "{bank_id} is within 7-10");
    }
    let violations = validate_record(&account("123456", ""), "GB").expect("evaluates");
    assert_eq!(violations.len(), 1);
}

#[test]
fn only_ranged_rules_are_enforced_per_country() {
    let violations = validate_record(&account("12", "123"), "PT").expect("evaluates");
    // BankId's PT rule is fixed-size (5), so only IBAN (7-9) is enforced.
    assert_eq!(violations.len(), 1);
    assert!(violations[0].starts_with("field IBAN "));
}

#[test]
fn violations_accumulate_across_fields_in_field_order() {
    struct Payment;
    impl TaggedRecord for Payment {
        fn rule_tags(&self) -> BTreeMap<String, String> {
            BTreeMap::from([
                ("Beneficiary".to_string(), "[GB:2-20]".to_string()),
                ("Reference".to_string(), "[GB:4-18]".to_string()),
            ])
        }
        fn field_values(&self) -> BTreeMap<String, String> {
            BTreeMap::from([
                ("Beneficiary".to_string(), "x".to_string()),
                ("Reference".to_string(), "ab".to_string()),
            ])
        }
    }
    let violations = validate_record(&Payment, "GB").expect("evaluates");
    assert_eq!(violations.len(), 2);
    assert!(violations[0].starts_with("field Beneficiary "));
    assert!(violations[1].starts_with("field Reference "));
}

#[test]
fn unconstrained_country_is_skipped() {
    let violations = validate_record(&account("x", "x"), "US").expect("evaluates");
    assert!(violations.is_empty());
}

#[test]
fn fixed_size_rule_is_not_enforced() {
    // IBAN's GB rule is the fixed-size shorthand `8`; the evaluator only
    // checks ranges with distinct bounds, so any length passes.
    let violations = validate_record(&account("12334455", "way too long for eight"), "GB")
        .expect("evaluates");
    assert!(violations.is_empty());
}

#[test]
fn required_flag_is_not_enforced() {
    // BankId is required for GB, but an empty value only trips the length
    // range, not a presence check.
    let violations = validate_record(&account("", ""), "GB").expect("evaluates");
    assert_eq!(violations.len(), 1);
    assert!(violations[0].contains("got 0"));
}

#[test]
fn evaluator_propagates_parse_errors_verbatim() {
    let error = validate_record(&BadRecord, "GB").expect_err("broken tag propagates");
    assert_eq!(
        error,
        RuleTagError::UnexpectedSymbol {
            symbol: ':',
            position: 0,
        }
    );
}

#[test]
fn missing_value_is_evaluated_as_empty() {
    struct Sparse;
    impl TaggedRecord for Sparse {
        fn rule_tags(&self) -> BTreeMap<String, String> {
            BTreeMap::from([("Reference".to_string(), "[GB:2-4]".to_string())])
        }
        fn field_values(&self) -> BTreeMap<String, String> {
            BTreeMap::new()
        }
    }
    let violations = validate_record(&Sparse, "GB").expect("evaluates");
    assert_eq!(violations.len(), 1);
    assert!(violations[0].contains("got 0"));
}

#[test]
fn length_is_counted_in_characters_not_bytes() {
    struct Unicode;
    impl TaggedRecord for Unicode {
        fn rule_tags(&self) -> BTreeMap<String, String> {
            BTreeMap::from([("Name".to_string(), "[PT:1-4]".to_string())])
        }
        fn field_values(&self) -> BTreeMap<String, String> {
            BTreeMap::from([("Name".to_string(), "Joõo".to_string())])
        }
    }
    let violations = validate_record(&Unicode, "PT").expect("evaluates");
    assert!(violations.is_empty());
}
