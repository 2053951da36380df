pub mod constraint;
pub mod error;
pub mod record;

pub use constraint::{ConstraintMap, ConstraintMatrix, CountryConstraint};
pub use error::{Result, RuleTagError};
pub use record::TaggedRecord;
