use crate::{
    api::{LeaveDecision, LeaveRequest},
    components::{error::MessageBanners, layout::LoadingSpinner, leave_table::StatusBadge},
    pages::manager_dashboard::{utils::pending_requests, view_model::ManagerDashboardViewModel},
};
use leptos::*;

#[component]
pub fn PendingRequestsSection(vm: ManagerDashboardViewModel) -> impl IntoView {
    let pending_rows = Signal::derive(move || vm.requests.with(|all| pending_requests(all)));
    let busy = vm.decision_action.pending();
    let loading = move || vm.requests_resource.loading().get();

    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <h3 class="text-lg font-semibold text-fg">"Pending Requests"</h3>
            <MessageBanners message=vm.requests_message />
            <Show when=loading fallback=|| ()>
                <LoadingSpinner />
            </Show>
            <Show
                when=move || pending_rows.with(|rows| !rows.is_empty())
                fallback=|| view! { <p class="text-sm text-fg-muted">"No pending leave requests."</p> }
            >
                <ul class="divide-y divide-border">
                    <For
                        each=move || pending_rows.get()
                        key=|request| (request.id.clone(), request.status)
                        children=move |request| {
                            view! { <PendingRow request=request vm=vm busy=busy.into() /> }
                        }
                    />
                </ul>
            </Show>
        </div>
    }
}

#[component]
fn PendingRow(
    request: LeaveRequest,
    vm: ManagerDashboardViewModel,
    busy: Signal<bool>,
) -> impl IntoView {
    let approve_id = request.id.clone();
    let reject_id = request.id.clone();
    let reason = request.reason.clone().unwrap_or_default();

    view! {
        <li class="py-3 flex flex-col gap-2 sm:flex-row sm:items-center sm:justify-between">
            <div class="space-y-1">
                <p class="text-sm font-medium text-fg">
                    {request.employee_name.clone()} " · " {request.leave_type.label()}
                </p>
                <p class="text-xs text-fg-muted">{request.date_range_label()}</p>
                <p class="text-xs text-fg-muted">{reason}</p>
                <StatusBadge status=request.status />
            </div>
            <div class="flex gap-2">
                <button
                    type="button"
                    class="px-3 py-1 rounded-md text-sm font-medium text-white bg-status-success-text disabled:opacity-50"
                    disabled=move || busy.get()
                    on:click=move |_| vm.decide(approve_id.clone(), LeaveDecision::Approved)
                >
                    "Approve"
                </button>
                <button
                    type="button"
                    class="px-3 py-1 rounded-md text-sm font-medium text-white bg-status-error-text disabled:opacity-50"
                    disabled=move || busy.get()
                    on:click=move |_| vm.decide(reject_id.clone(), LeaveDecision::Rejected)
                >
                    "Reject"
                </button>
            </div>
        </li>
    }
}
