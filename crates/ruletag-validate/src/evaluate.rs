//! Applies a constraint matrix to a record's current values.
//!
//! Two declared properties are recorded in the model but not enforced here,
//! matching the behavior of the tag format's reference interpreter: a
//! fixed-size rule (`min_len == max_len`) never reaches the length check,
//! and the `required` flag is never consulted. The test suite documents
//! both gaps.

use tracing::trace;

use ruletag_model::{Result, TaggedRecord};

use crate::matrix::build_matrix;

/// Validate `record` against the constraints declared for `country`.
///
/// Returns one human-readable violation per offending field, ordered by
/// field name. An empty vector means the record is valid for that country.
/// Fields with no constraint for `country` are skipped, never reported.
pub fn validate_record(record: &impl TaggedRecord, country: &str) -> Result<Vec<String>> {
    let matrix = build_matrix(record)?;
    let values = record.field_values();

    let mut violations = Vec::new();
    for (field, constraints) in &matrix {
        let Some(constraint) = constraints.get(country) else {
            continue;
        };
        // Fixed-size rules fall through here unenforced; see module docs.
        if !constraint.has_bounds() || constraint.is_fixed_size() {
            continue;
        }
        let value = values.get(field).map(String::as_str).unwrap_or("");
        let actual = value.chars().count();
        if actual < constraint.min_len || actual > constraint.max_len {
            trace!(field = %field, country = %country, actual, "length out of bounds");
            violations.push(format!(
                "field {field} is expected to have between {} and {} characters for country {country}, got {actual}",
                constraint.min_len, constraint.max_len
            ));
        }
    }
    Ok(violations)
}
