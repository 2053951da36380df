//! Command implementations.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use ruletag_core::parse_rule_tag;
use ruletag_validate::validate_record;

use crate::cli::{CheckArgs, ValidateArgs};
use crate::record::JsonRecord;
use crate::summary::{print_constraints, print_violations};

const PAYLOAD_SCHEMA: &str = "ruletag.validation-report";
const PAYLOAD_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Serialize)]
struct ValidationPayload<'a> {
    schema: &'static str,
    schema_version: u32,
    country: &'a str,
    valid: bool,
    violations: &'a [String],
}

pub fn run_check(args: &CheckArgs) -> Result<()> {
    let constraints = parse_rule_tag(&args.tag).context("parse rule tag")?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&constraints)?);
    } else {
        print_constraints(&constraints);
    }
    Ok(())
}

/// Returns the number of violations so the caller can set the exit code.
pub fn run_validate(args: &ValidateArgs) -> Result<usize> {
    let record = JsonRecord::from_files(&args.tags, &args.values)?;
    let violations = validate_record(&record, &args.country).context("validate record")?;
    info!(
        country = %args.country,
        violations = violations.len(),
        "record evaluated"
    );
    if args.json {
        let payload = ValidationPayload {
            schema: PAYLOAD_SCHEMA,
            schema_version: PAYLOAD_SCHEMA_VERSION,
            country: &args.country,
            valid: violations.is_empty(),
            violations: &violations,
        };
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        print_violations(&args.country, &violations);
    }
    Ok(violations.len())
}
