#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Email Domain Role Mapper Plugin
//!
//! Grants the `PARTNER` realm role to every user whose email address ends in
//! `@fortiumpartners.com`, provided the realm defines that role.
//!
//! ## Behavior
//!
//! - The suffix comparison is exact and case-sensitive; no domain parsing.
//! - Missing email, foreign domain and undefined role all leave the token
//!   untouched. None of them is an error.
//! - Only realm roles are written; no other claim is read or changed.
//! - Applying the mapper twice yields the same claims as applying it once.
//!
//! The domain and role are fixed. Per-instance settings (which tokens the
//! mapper writes into, its priority) belong to the `claims_mapper` config:
//!
//! ```yaml
//! claims_mapper:
//!   mappers:
//!     - provider_id: "oidc-email-domain-role-mapper"
//!       priority: 100
//!       include_in_tokens:
//!         access: true
//!         lightweight: false
//! ```

pub mod domain;
pub mod models;

pub use domain::{
    EmailDomainRoleService, PROVIDER_ID, TARGET_DOMAIN_SUFFIX, TARGET_ROLE_NAME, apply, evaluate,
};
pub use models::{EvaluateRequest, EvaluateResponse};
