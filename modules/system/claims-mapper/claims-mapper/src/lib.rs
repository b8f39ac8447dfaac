//! Claims Mapper Module
//!
//! Keeps the registry of claim contributors and the configured mapper
//! instances, and runs the instances enabled for a token kind over the claims
//! of every token being issued.
//!
//! Provides the `ClaimsMapperClient` trait implementation consumed by token
//! issuance.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
pub mod domain;

pub use config::{ClaimsMapperConfig, MapperInstanceConfig};
pub use domain::{ClaimsMapperLocalClient, DomainError, Service};
