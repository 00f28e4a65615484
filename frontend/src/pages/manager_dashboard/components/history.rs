use crate::pages::manager_dashboard::{
    utils::{decided_requests, history_line},
    view_model::ManagerDashboardViewModel,
};
use leptos::*;

#[component]
pub fn LeaveHistorySection(vm: ManagerDashboardViewModel) -> impl IntoView {
    let lines = move || {
        vm.requests.with(|all| {
            decided_requests(all)
                .iter()
                .map(|request| (request.id.clone(), history_line(request)))
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <h3 class="text-lg font-semibold text-fg">"Leave History"</h3>
            <Show
                when=move || !lines().is_empty()
                fallback=|| view! { <p class="text-sm text-fg-muted">"No decided leave requests yet."</p> }
            >
                <ul class="list-disc pl-5 space-y-1 text-sm text-fg">
                    <For
                        each=lines
                        key=|(id, line)| (id.clone(), line.clone())
                        children=|(_, line)| view! { <li>{line}</li> }
                    />
                </ul>
            </Show>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::LeaveStatus;
    use crate::test_support::helpers::{leave, manager_user, provide_session_with};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn history_lists_decided_requests_only() {
        let html = render_to_string(move || {
            provide_session_with(Some(manager_user()));
            let vm = ManagerDashboardViewModel::new();
            vm.requests.set(vec![
                leave("l1", "u-employee", LeaveStatus::Pending),
                leave("l2", "u-employee", LeaveStatus::Rejected),
            ]);
            view! { <LeaveHistorySection vm=vm /> }
        });
        assert!(html.contains("Abdur took annual leave from 2024-03-20 to 2024-03-22 (rejected)"));
        assert!(!html.contains("(pending)"));
    }
}
