//! CLI library components for the rule-tag toolchain.

pub mod logging;
