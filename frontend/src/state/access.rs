use crate::api::Role;

use super::session::Session;

pub const LOGIN_PATH: &str = "/login";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessState {
    Anonymous,
    AuthenticatedEmployee,
    AuthenticatedManager,
}

impl AccessState {
    pub fn from_session(session: &Session) -> Self {
        if !session.is_authenticated() {
            return AccessState::Anonymous;
        }
        match session.user.as_ref().map(|user| user.role) {
            Some(Role::Employee) => AccessState::AuthenticatedEmployee,
            Some(Role::Manager) => AccessState::AuthenticatedManager,
            None => AccessState::Anonymous,
        }
    }

    pub fn role(&self) -> Option<Role> {
        match self {
            AccessState::Anonymous => None,
            AccessState::AuthenticatedEmployee => Some(Role::Employee),
            AccessState::AuthenticatedManager => Some(Role::Manager),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationOutcome {
    Render,
    Redirect(&'static str),
}

/// Decides what a navigation to a protected view yields. Missing session wins
/// over a role mismatch.
pub fn resolve_navigation(state: AccessState, required: Option<Role>) -> NavigationOutcome {
    let Some(role) = state.role() else {
        return NavigationOutcome::Redirect(LOGIN_PATH);
    };
    match required {
        Some(required) if required != role => NavigationOutcome::Redirect(role.home_path()),
        _ => NavigationOutcome::Render,
    }
}

/// Where `/` should land.
pub fn landing_path(state: AccessState) -> &'static str {
    state.role().map(|role| role.home_path()).unwrap_or(LOGIN_PATH)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    SubmitLeave,
    ViewOwnBalance,
    ViewPayrollSummary,
    ReviewLeave,
    ViewLeaveHistory,
    ConfigureLeavePolicy,
    ManagePayroll,
    EditProfile,
}

const EMPLOYEE_CAPABILITIES: &[Capability] = &[
    Capability::SubmitLeave,
    Capability::ViewOwnBalance,
    Capability::ViewPayrollSummary,
    Capability::EditProfile,
];

const MANAGER_CAPABILITIES: &[Capability] = &[
    Capability::ReviewLeave,
    Capability::ViewLeaveHistory,
    Capability::ConfigureLeavePolicy,
    Capability::ManagePayroll,
    Capability::EditProfile,
];

pub fn capabilities(role: Role) -> &'static [Capability] {
    match role {
        Role::Employee => EMPLOYEE_CAPABILITIES,
        Role::Manager => MANAGER_CAPABILITIES,
    }
}

pub fn has_capability(role: Option<Role>, capability: Capability) -> bool {
    role.map(|role| capabilities(role).contains(&capability))
        .unwrap_or(false)
}

/// Keeps table rows whose capability the role holds, preserving order.
pub fn select_by_capability<T: Clone>(role: Option<Role>, table: &[(Capability, T)]) -> Vec<T> {
    table
        .iter()
        .filter(|(capability, _)| has_capability(role, *capability))
        .map(|(_, entry)| entry.clone())
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

pub const NAV_LINKS: &[(Capability, NavLink)] = &[
    (
        Capability::ViewPayrollSummary,
        NavLink {
            href: "/employee",
            label: "Dashboard",
        },
    ),
    (
        Capability::SubmitLeave,
        NavLink {
            href: "/leave-application",
            label: "Apply for Leave",
        },
    ),
    (
        Capability::ViewOwnBalance,
        NavLink {
            href: "/leave-balance",
            label: "Leave Balance",
        },
    ),
    (
        Capability::ReviewLeave,
        NavLink {
            href: "/manager",
            label: "Manager Dashboard",
        },
    ),
    (
        Capability::EditProfile,
        NavLink {
            href: "/profile",
            label: "Profile",
        },
    ),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{employee_user, manager_user};

    fn session_for(role: Option<Role>) -> Session {
        match role {
            None => Session::default(),
            Some(Role::Employee) => Session {
                user: Some(employee_user()),
                token: Some("t".into()),
            },
            Some(Role::Manager) => Session {
                user: Some(manager_user()),
                token: Some("t".into()),
            },
        }
    }

    #[test]
    fn access_state_follows_session() {
        assert_eq!(
            AccessState::from_session(&session_for(None)),
            AccessState::Anonymous
        );
        assert_eq!(
            AccessState::from_session(&session_for(Some(Role::Employee))),
            AccessState::AuthenticatedEmployee
        );
        assert_eq!(
            AccessState::from_session(&session_for(Some(Role::Manager))),
            AccessState::AuthenticatedManager
        );
    }

    #[test]
    fn user_without_token_is_anonymous() {
        let session = Session {
            user: Some(manager_user()),
            token: None,
        };
        assert_eq!(AccessState::from_session(&session), AccessState::Anonymous);
    }

    #[test]
    fn anonymous_is_sent_to_login_for_every_requirement() {
        for required in [None, Some(Role::Employee), Some(Role::Manager)] {
            assert_eq!(
                resolve_navigation(AccessState::Anonymous, required),
                NavigationOutcome::Redirect(LOGIN_PATH)
            );
        }
    }

    #[test]
    fn mismatched_role_goes_to_own_home() {
        for role in Role::ALL {
            let state = AccessState::from_session(&session_for(Some(role)));
            for required in Role::ALL {
                let outcome = resolve_navigation(state, Some(required));
                if required == role {
                    assert_eq!(outcome, NavigationOutcome::Render);
                } else {
                    assert_eq!(outcome, NavigationOutcome::Redirect(role.home_path()));
                }
            }
            assert_eq!(resolve_navigation(state, None), NavigationOutcome::Render);
        }
    }

    #[test]
    fn landing_path_depends_on_role() {
        assert_eq!(landing_path(AccessState::Anonymous), "/login");
        assert_eq!(landing_path(AccessState::AuthenticatedEmployee), "/employee");
        assert_eq!(landing_path(AccessState::AuthenticatedManager), "/manager");
    }

    #[test]
    fn review_is_manager_only() {
        assert!(has_capability(Some(Role::Manager), Capability::ReviewLeave));
        assert!(!has_capability(Some(Role::Employee), Capability::ReviewLeave));
        assert!(!has_capability(None, Capability::ReviewLeave));
        assert!(has_capability(Some(Role::Employee), Capability::SubmitLeave));
        assert!(!has_capability(Some(Role::Manager), Capability::SubmitLeave));
    }

    #[test]
    fn nav_links_are_filtered_by_role() {
        let employee: Vec<&str> = select_by_capability(Some(Role::Employee), NAV_LINKS)
            .into_iter()
            .map(|link| link.href)
            .collect();
        assert_eq!(
            employee,
            vec!["/employee", "/leave-application", "/leave-balance", "/profile"]
        );
        let manager: Vec<&str> = select_by_capability(Some(Role::Manager), NAV_LINKS)
            .into_iter()
            .map(|link| link.href)
            .collect();
        assert_eq!(manager, vec!["/manager", "/profile"]);
        assert!(select_by_capability(None, NAV_LINKS).is_empty());
    }
}
