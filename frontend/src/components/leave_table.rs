use crate::api::{LeaveRequest, LeaveStatus};
use leptos::*;

pub fn status_badge_class(status: LeaveStatus) -> &'static str {
    match status {
        LeaveStatus::Pending => "bg-status-warning-bg text-status-warning-text",
        LeaveStatus::Approved => "bg-status-success-bg text-status-success-text",
        LeaveStatus::Rejected => "bg-status-error-bg text-status-error-text",
    }
}

#[component]
pub fn StatusBadge(status: LeaveStatus) -> impl IntoView {
    let class = format!(
        "px-2 inline-flex text-xs leading-5 font-semibold rounded-full {}",
        status_badge_class(status)
    );
    view! { <span class=class>{status.as_str()}</span> }
}

/// Read-only list of requests in the order given.
#[component]
pub fn LeaveTable(
    requests: Signal<Vec<LeaveRequest>>,
    #[prop(optional)] show_employee: bool,
    #[prop(into, default = "No leave applications yet.".into())] empty_text: String,
) -> impl IntoView {
    view! {
        <Show
            when=move || requests.with(|list| !list.is_empty())
            fallback=move || view! { <p class="text-sm text-fg-muted">{empty_text.clone()}</p> }
        >
            <table class="min-w-full divide-y divide-border">
                <thead>
                    <tr>
                        <Show when=move || show_employee>
                            <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase">"Employee"</th>
                        </Show>
                        <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase">"Type"</th>
                        <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase">"Dates"</th>
                        <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase">"Reason"</th>
                        <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase">"Status"</th>
                    </tr>
                </thead>
                <tbody class="divide-y divide-border">
                    <For
                        each=move || requests.get()
                        key=|request| (request.id.clone(), request.status)
                        children=move |request| {
                            let employee = request.employee_name.clone();
                            view! {
                                <tr>
                                    <Show when=move || show_employee>
                                        <td class="px-4 py-2 text-sm">{employee.clone()}</td>
                                    </Show>
                                    <td class="px-4 py-2 text-sm">{request.leave_type.label()}</td>
                                    <td class="px-4 py-2 text-sm">{request.date_range_label()}</td>
                                    <td class="px-4 py-2 text-sm">{request.reason.clone().unwrap_or_default()}</td>
                                    <td class="px-4 py-2 text-sm"><StatusBadge status=request.status /></td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </Show>
    }
}
