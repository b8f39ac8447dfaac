// Every claim contributor the binary ships with is listed here. Config can only
// refer to provider ids registered by this function.

use std::sync::Arc;

use claims_mapper_sdk::AccessTokenClaimContributor;
use email_domain_role_plugin::EmailDomainRoleService;

/// Contributors registered with the claims mapper, in registration order.
#[must_use]
pub fn contributors() -> Vec<Arc<dyn AccessTokenClaimContributor>> {
    vec![Arc::new(EmailDomainRoleService::new())]
}
