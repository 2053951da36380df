use std::collections::BTreeMap;

/// Capability supplied by record types whose fields carry rule tags.
///
/// Rust has no struct-tag reflection, so discovery is declarative: a record
/// type lists its tagged fields and renders its current values as text. The
/// parser and evaluator stay fully decoupled from how an implementation
/// produces these mappings.
pub trait TaggedRecord {
    /// Field name -> raw rule tag. Untagged fields may be omitted or mapped
    /// to the empty string; either way they stay out of the constraint
    /// matrix.
    fn rule_tags(&self) -> BTreeMap<String, String>;

    /// Field name -> the field's current value rendered as text.
    fn field_values(&self) -> BTreeMap<String, String>;
}
