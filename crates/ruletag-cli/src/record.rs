//! JSON-backed record input.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use ruletag_model::TaggedRecord;

/// A record assembled from two flat JSON objects: field name -> rule tag
/// and field name -> value. Lets arbitrary records be validated without
/// writing a `TaggedRecord` implementation.
#[derive(Debug, Default)]
pub struct JsonRecord {
    tags: BTreeMap<String, String>,
    values: BTreeMap<String, String>,
}

impl JsonRecord {
    pub fn from_files(tags: &Path, values: &Path) -> Result<Self> {
        Ok(Self {
            tags: read_string_map(tags)?,
            values: read_string_map(values)?,
        })
    }
}

impl TaggedRecord for JsonRecord {
    fn rule_tags(&self) -> BTreeMap<String, String> {
        self.tags.clone()
    }

    fn field_values(&self) -> BTreeMap<String, String> {
        self.values.clone()
    }
}

fn read_string_map(path: &Path) -> Result<BTreeMap<String, String>> {
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    serde_json::from_str(&contents).with_context(|| format!("parse {}", path.display()))
}
