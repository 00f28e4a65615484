use crate::{
    api::LeaveType,
    components::error::MessageBanners,
    pages::manager_dashboard::view_model::ManagerDashboardViewModel,
};
use leptos::*;

/// One number input per leave type; a value is committed on change.
#[component]
pub fn LeavePolicySection(vm: ManagerDashboardViewModel) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <h3 class="text-lg font-semibold text-fg">"Leave Policy"</h3>
            <div class="grid grid-cols-1 gap-4 sm:grid-cols-3">
                {LeaveType::ALL
                    .iter()
                    .copied()
                    .map(|leave_type| {
                        view! {
                            <label class="block text-sm font-medium text-fg">
                                {leave_type.label()} " (days per year)"
                                <input
                                    type="number"
                                    min="0"
                                    class="mt-1 block w-full px-3 py-2 border border-border rounded-md"
                                    prop:value=move || vm.policy.get().limit(leave_type).to_string()
                                    on:change=move |ev| {
                                        vm.set_policy_limit(leave_type, &event_target_value(&ev))
                                    }
                                />
                            </label>
                        }
                    })
                    .collect_view()}
            </div>
            <MessageBanners message=vm.policy_message />
        </div>
    }
}
