use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

use crate::{
    api::{ApiClient, Role},
    components::{guard::RequireAuth, layout::APP_NAME},
    pages::{
        EmployeeDashboardPage, HomePage, LeaveApplicationPage, LeaveBalancePage, LoginPage,
        ManagerDashboardPage, NotFoundPage, ProfilePage, RegisterPage,
    },
    state::{
        session::{provide_session, SessionStore},
        theme::ThemeState,
    },
};

pub const ROUTE_PATHS: &[&str] = &[
    "/",
    "/login",
    "/register",
    "/employee",
    "/manager",
    "/leave-application",
    "/leave-balance",
    "/profile",
];

/// Protected paths and the role each requires (`None`: any signed-in user).
pub const PROTECTED_ROUTES: &[(&str, Option<Role>)] = &[
    ("/employee", Some(Role::Employee)),
    ("/manager", Some(Role::Manager)),
    ("/leave-application", Some(Role::Employee)),
    ("/leave-balance", Some(Role::Employee)),
    ("/profile", None),
];

pub const PUBLIC_ROUTE_PATHS: &[&str] = &["/", "/login", "/register"];

pub fn mount_app() {
    mount_to_body(app_root);
}

/// Wires the shared contexts (session, API client, theme) and the route table.
pub fn app_root() -> impl IntoView {
    let session = SessionStore::browser();
    provide_session(session.clone());
    provide_context(ApiClient::new().with_session(session));
    provide_context(ThemeState::new());
    provide_meta_context();

    view! {
        <Title text=APP_NAME/>
        <Router>
            <Routes>
                <Route path="/" view=HomePage/>
                <Route path="/login" view=LoginPage/>
                <Route path="/register" view=RegisterPage/>
                <Route path="/employee" view=ProtectedEmployeeDashboard/>
                <Route path="/manager" view=ProtectedManagerDashboard/>
                <Route path="/leave-application" view=ProtectedLeaveApplication/>
                <Route path="/leave-balance" view=ProtectedLeaveBalance/>
                <Route path="/profile" view=ProtectedProfile/>
                <Route path="/*any" view=NotFoundPage/>
            </Routes>
        </Router>
    }
}

#[component]
fn ProtectedEmployeeDashboard() -> impl IntoView {
    view! { <RequireAuth role=Some(Role::Employee)><EmployeeDashboardPage/></RequireAuth> }
}

#[component]
fn ProtectedManagerDashboard() -> impl IntoView {
    view! { <RequireAuth role=Some(Role::Manager)><ManagerDashboardPage/></RequireAuth> }
}

#[component]
fn ProtectedLeaveApplication() -> impl IntoView {
    view! { <RequireAuth role=Some(Role::Employee)><LeaveApplicationPage/></RequireAuth> }
}

#[component]
fn ProtectedLeaveBalance() -> impl IntoView {
    view! { <RequireAuth role=Some(Role::Employee)><LeaveBalancePage/></RequireAuth> }
}

#[component]
fn ProtectedProfile() -> impl IntoView {
    view! { <RequireAuth role=None><ProfilePage/></RequireAuth> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::access::NAV_LINKS;
    use std::collections::HashSet;

    #[test]
    fn protected_routes_are_subset_of_all() {
        let all: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        for (path, _) in PROTECTED_ROUTES {
            assert!(
                all.contains(path),
                "protected path missing from ROUTE_PATHS: {}",
                path
            );
        }
    }

    #[test]
    fn every_route_is_public_or_protected() {
        let protected: HashSet<&str> = PROTECTED_ROUTES.iter().map(|(path, _)| *path).collect();
        let public: HashSet<&str> = PUBLIC_ROUTE_PATHS.iter().copied().collect();
        assert!(protected.is_disjoint(&public));
        assert_eq!(protected.len() + public.len(), ROUTE_PATHS.len());
    }

    #[test]
    fn role_homes_are_routed() {
        for role in Role::ALL {
            assert!(PROTECTED_ROUTES.contains(&(role.home_path(), Some(role))));
        }
    }

    #[test]
    fn nav_links_point_at_routes() {
        for (_, link) in NAV_LINKS {
            assert!(ROUTE_PATHS.contains(&link.href), "unrouted nav link {}", link.href);
        }
    }

    #[test]
    fn no_duplicate_routes() {
        let unique: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        assert_eq!(unique.len(), ROUTE_PATHS.len());
    }
}
