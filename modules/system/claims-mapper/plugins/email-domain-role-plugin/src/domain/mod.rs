//! Domain layer for the email-domain role mapper.

pub mod client;
pub mod rule;
pub mod service;

pub use rule::{TARGET_DOMAIN_SUFFIX, TARGET_ROLE_NAME, apply, evaluate};
pub use service::{EmailDomainRoleService, PROVIDER_ID};
