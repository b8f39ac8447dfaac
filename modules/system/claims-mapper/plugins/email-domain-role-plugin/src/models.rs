//! Standalone request/response models.
//!
//! Lets the rule be exercised outside token issuance: the caller supplies the
//! email and the realm's role names, and gets back the roles to add.

use serde::{Deserialize, Serialize};

use crate::domain::rule;

/// Input of a standalone evaluation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct EvaluateRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub known_roles: Vec<String>,
}

/// Output of a standalone evaluation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluateResponse {
    pub roles_to_add: Vec<String>,
}

impl EvaluateRequest {
    #[must_use]
    pub fn evaluate(&self) -> EvaluateResponse {
        let roles_to_add = rule::evaluate(self.email.as_deref(), &self.known_roles)
            .map(str::to_owned)
            .into_iter()
            .collect();
        EvaluateResponse { roles_to_add }
    }
}
