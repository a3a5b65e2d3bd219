//! Integration tests across the toolkit's crates.

pub mod deploy_pipeline;
pub mod funding_flow;
