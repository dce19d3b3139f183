//! Role Guard Component
//!
//! Capability check gating a renderable subtree by the signed-in user's role.

use leptos::prelude::*;

use crate::auth::{has_role, is_admin, is_broker};
use crate::models::{Role, User};
use crate::store::{use_app_store, AppStateStoreFields};

/// Evaluate the guard requirements against the current user.
///
/// Checks apply in a fixed order: `admin_only`, then `broker_only`, then
/// `required_role`; the first failing check denies and names the role it
/// requires.
pub fn guard_decision(
    user: Option<&User>,
    admin_only: bool,
    broker_only: bool,
    required_role: Option<Role>,
) -> Result<(), Role> {
    if admin_only && !is_admin(user) {
        return Err(Role::Admin);
    }
    if broker_only && !is_broker(user) {
        return Err(Role::Broker);
    }
    if let Some(role) = required_role {
        if !has_role(user, role) {
            return Err(role);
        }
    }
    Ok(())
}

/// Renders children only when the current user satisfies the requirement;
/// otherwise renders the fallback (default: a notice naming the required role).
#[component]
pub fn RoleGuard(
    #[prop(optional)] admin_only: bool,
    #[prop(optional)] broker_only: bool,
    #[prop(optional)] required_role: Option<Role>,
    #[prop(optional)] fallback: Option<ViewFn>,
    children: ChildrenFn,
) -> impl IntoView {
    let store = use_app_store();

    move || {
        let user = store.user().get();
        match guard_decision(user.as_ref(), admin_only, broker_only, required_role) {
            Ok(()) => children(),
            Err(role) => match &fallback {
                Some(fallback) => fallback.run(),
                None => view! {
                    <div class="alert alert-denied">
                        <span class="alert-icon">"⛔"</span>
                        <span>
                            "You don't have permission to access this feature. Required role: "
                            {role.as_str()}
                        </span>
                    </div>
                }
                .into_any(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::authenticate;

    fn admin() -> User {
        authenticate("admin", "admin123").unwrap()
    }

    fn broker() -> User {
        authenticate("broker", "broker123").unwrap()
    }

    #[test]
    fn test_admin_only() {
        assert_eq!(guard_decision(Some(&admin()), true, false, None), Ok(()));
        assert_eq!(
            guard_decision(Some(&broker()), true, false, None),
            Err(Role::Admin)
        );
        assert_eq!(guard_decision(None, true, false, None), Err(Role::Admin));
    }

    #[test]
    fn test_broker_only() {
        assert_eq!(guard_decision(Some(&broker()), false, true, None), Ok(()));
        assert_eq!(
            guard_decision(Some(&admin()), false, true, None),
            Err(Role::Broker)
        );
    }

    #[test]
    fn test_explicit_role() {
        assert_eq!(
            guard_decision(Some(&admin()), false, false, Some(Role::Admin)),
            Ok(())
        );
        assert_eq!(
            guard_decision(Some(&broker()), false, false, Some(Role::Admin)),
            Err(Role::Admin)
        );
        assert_eq!(
            guard_decision(None, false, false, Some(Role::Broker)),
            Err(Role::Broker)
        );
    }

    #[test]
    fn test_no_requirement_allows_everyone() {
        assert_eq!(guard_decision(None, false, false, None), Ok(()));
        assert_eq!(guard_decision(Some(&broker()), false, false, None), Ok(()));
    }

    #[test]
    fn test_precedence_admin_only_checked_first() {
        // Broker fails admin_only before the explicit Broker role is consulted
        assert_eq!(
            guard_decision(Some(&broker()), true, false, Some(Role::Broker)),
            Err(Role::Admin)
        );
        // Admin fails broker_only before the explicit Admin role is consulted
        assert_eq!(
            guard_decision(Some(&admin()), false, true, Some(Role::Admin)),
            Err(Role::Broker)
        );
        // All three set: admin passes admin_only but fails broker_only next
        assert_eq!(
            guard_decision(Some(&admin()), true, true, Some(Role::Admin)),
            Err(Role::Broker)
        );
    }
}
