//! Builds the field -> country -> constraint matrix for a record type.

use tracing::debug;

use ruletag_core::parse_rule_tag;
use ruletag_model::{ConstraintMatrix, Result, TaggedRecord};

/// Compile every tagged field of `record` into a constraint matrix.
///
/// The first malformed tag aborts the whole build and its error is
/// propagated verbatim; no partial matrix is returned. Fields without a tag
/// are left out of the matrix entirely.
pub fn build_matrix(record: &impl TaggedRecord) -> Result<ConstraintMatrix> {
    let mut matrix = ConstraintMatrix::new();
    for (field, tag) in record.rule_tags() {
        if tag.is_empty() {
            continue;
        }
        let constraints = parse_rule_tag(&tag)?;
        matrix.insert(field, constraints);
    }
    debug!(fields = matrix.len(), "compiled rule-tag matrix");
    Ok(matrix)
}
