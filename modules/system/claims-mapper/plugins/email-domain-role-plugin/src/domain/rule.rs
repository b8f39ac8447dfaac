//! The email-domain role rule.
//!
//! A linear predicate chain with four exits: no email, foreign domain, role not
//! defined in the realm, or grant. Only the last one has an effect.

use tracing::{debug, trace};

/// Email suffix that qualifies a user for [`TARGET_ROLE_NAME`].
pub const TARGET_DOMAIN_SUFFIX: &str = "@fortiumpartners.com";

/// Realm role granted to qualifying users.
pub const TARGET_ROLE_NAME: &str = "PARTNER";

fn select_role(email: Option<&str>, role_exists: impl Fn(&str) -> bool) -> Option<&'static str> {
    let Some(email) = email else {
        trace!("user has no email");
        return None;
    };

    // Exact, case-sensitive suffix. `user@FortiumPartners.com` does not qualify.
    if !email.ends_with(TARGET_DOMAIN_SUFFIX) {
        trace!("email domain does not qualify");
        return None;
    }

    if !role_exists(TARGET_ROLE_NAME) {
        debug!(role = TARGET_ROLE_NAME, "role is not defined in realm");
        return None;
    }

    Some(TARGET_ROLE_NAME)
}

/// Decide which role, if any, `email` earns given the role names known to the realm.
#[must_use]
pub fn evaluate<S: AsRef<str>>(email: Option<&str>, available_roles: &[S]) -> Option<&'static str> {
    select_role(email, |name| {
        available_roles.iter().any(|role| role.as_ref() == name)
    })
}

/// Run the rule against host-provided role lookup and grant callbacks.
///
/// `add_role` is called at most once, with [`TARGET_ROLE_NAME`].
pub fn apply(
    email: Option<&str>,
    role_exists: impl Fn(&str) -> bool,
    mut add_role: impl FnMut(&str),
) {
    if let Some(role) = select_role(email, role_exists) {
        debug!(role, "granting realm role");
        add_role(role);
    }
}
