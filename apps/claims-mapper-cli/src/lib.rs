//! Claims Mapper CLI
//!
//! Wires the registered claim contributors into the claims mapper and exposes
//! them on the command line:
//!
//! - `evaluate` runs the email-domain role rule on a standalone request
//! - `describe` prints mapper descriptors
//! - `issue` runs the configured mapper instances over a fresh token
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
pub mod registered_mappers;
