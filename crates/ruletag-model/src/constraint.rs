use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Length and presence constraints for one (field, country) pair.
///
/// A length bound of zero means "unset". Well-formed tags keep
/// `min_len <= max_len` when both bounds carry a value; a reversed pair is
/// accepted silently rather than rejected at parse time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryConstraint {
    pub min_len: usize,
    pub max_len: usize,
    pub required: bool,
}

impl CountryConstraint {
    /// True when both length bounds carry a value.
    pub fn has_bounds(&self) -> bool {
        self.min_len > 0 && self.max_len > 0
    }

    /// True for the single-number shorthand (`[GB:10]`), which pins both
    /// bounds to the same value.
    pub fn is_fixed_size(&self) -> bool {
        self.has_bounds() && self.min_len == self.max_len
    }
}

/// Country code -> constraint, for a single field.
///
/// Country codes are case-sensitive, uppercase by convention.
pub type ConstraintMap = BTreeMap<String, CountryConstraint>;

/// Field name -> per-country constraints, for a whole record type.
pub type ConstraintMatrix = BTreeMap<String, ConstraintMap>;
