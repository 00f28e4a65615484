use super::{
    components::{LeaveHistorySection, LeavePolicySection, PayrollSection, PendingRequestsSection},
    utils::{ManagerSection, MANAGER_SECTIONS},
    view_model::ManagerDashboardViewModel,
};
use crate::{
    components::layout::Layout,
    state::{access::select_by_capability, session::use_session},
};
use leptos::*;

#[component]
pub fn ManagerDashboardPage() -> impl IntoView {
    view! {
        <Layout>
            <ManagerDashboardPanel />
        </Layout>
    }
}

#[component]
pub fn ManagerDashboardPanel() -> impl IntoView {
    let vm = ManagerDashboardViewModel::new();
    let session = use_session();
    let sections =
        move || select_by_capability(session.current_user().map(|u| u.role), MANAGER_SECTIONS);

    view! {
        <div class="space-y-6">
            <h2 class="text-2xl font-bold text-fg">"Manager Dashboard"</h2>
            {move || {
                sections()
                    .into_iter()
                    .map(|section| match section {
                        ManagerSection::PendingRequests => {
                            view! { <PendingRequestsSection vm=vm /> }.into_view()
                        }
                        ManagerSection::LeaveHistory => {
                            view! { <LeaveHistorySection vm=vm /> }.into_view()
                        }
                        ManagerSection::LeavePolicy => {
                            view! { <LeavePolicySection vm=vm /> }.into_view()
                        }
                        ManagerSection::Payroll => view! { <PayrollSection vm=vm /> }.into_view(),
                    })
                    .collect_view()
            }}
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{employee_user, manager_user, provide_session_with};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn manager_sees_every_section() {
        let html = render_to_string(move || {
            provide_session_with(Some(manager_user()));
            view! { <ManagerDashboardPanel /> }
        });
        assert!(html.contains("Pending Requests"));
        assert!(html.contains("Leave History"));
        assert!(html.contains("Leave Policy"));
        assert!(html.contains("Run Payroll"));
    }

    #[test]
    fn employee_session_renders_no_manager_controls() {
        let html = render_to_string(move || {
            provide_session_with(Some(employee_user()));
            view! { <ManagerDashboardPanel /> }
        });
        assert!(!html.contains("Pending Requests"));
        assert!(!html.contains("Run Payroll"));
    }
}
