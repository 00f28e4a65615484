use super::view_model::LeaveApplicationViewModel;
use crate::{
    api::LeaveType,
    components::{error::MessageBanners, layout::Layout, leave_table::LeaveTable},
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn LeaveApplicationPage() -> impl IntoView {
    view! {
        <Layout>
            <LeaveApplicationPanel />
        </Layout>
    }
}

#[component]
pub fn LeaveApplicationPanel() -> impl IntoView {
    let vm = LeaveApplicationViewModel::new();
    let pending = vm.submit_action.pending();
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };
    let input_class = "mt-1 block w-full px-3 py-2 border border-border rounded-md";

    view! {
        <div class="space-y-6">
            <div class="bg-surface-elevated shadow rounded-lg p-6">
                <h2 class="text-2xl font-bold text-fg mb-4">"Apply for Leave"</h2>
                <form class="space-y-4" on:submit=on_submit>
                    <label class="block text-sm font-medium text-fg">
                        "Leave Type"
                        <select
                            class=input_class
                            prop:value=move || vm.form.leave_type.get().as_str()
                            on:change=move |ev| {
                                if let Some(leave_type) = LeaveType::parse(&event_target_value(&ev)) {
                                    vm.form.leave_type.set(leave_type);
                                }
                            }
                        >
                            {LeaveType::ALL
                                .iter()
                                .map(|leave_type| {
                                    view! { <option value=leave_type.as_str()>{leave_type.label()}</option> }
                                })
                                .collect_view()}
                        </select>
                    </label>
                    <div class="grid grid-cols-1 gap-4 sm:grid-cols-2">
                        <label class="block text-sm font-medium text-fg">
                            "Start Date"
                            <input
                                type="date"
                                required
                                class=input_class
                                prop:value=move || vm.form.start_date.get()
                                on:input=move |ev| vm.form.start_date.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="block text-sm font-medium text-fg">
                            "End Date"
                            <input
                                type="date"
                                required
                                class=input_class
                                prop:value=move || vm.form.end_date.get()
                                on:input=move |ev| vm.form.end_date.set(event_target_value(&ev))
                            />
                        </label>
                    </div>
                    <label class="block text-sm font-medium text-fg">
                        "Reason"
                        <textarea
                            rows="4"
                            required
                            class=input_class
                            prop:value=move || vm.form.reason.get()
                            on:input=move |ev| vm.form.reason.set(event_target_value(&ev))
                        ></textarea>
                    </label>

                    <MessageBanners message=vm.message />

                    <button
                        type="submit"
                        disabled=move || pending.get()
                        class="w-full py-2 px-4 rounded-md text-sm font-medium text-white bg-action-primary-bg disabled:opacity-50"
                    >
                        {move || if pending.get() { "Submitting..." } else { "Submit Application" }}
                    </button>
                </form>
            </div>
            <div class="bg-surface-elevated shadow rounded-lg p-6">
                <h3 class="text-lg font-semibold text-fg mb-4">"My Applications"</h3>
                <LeaveTable requests=vm.applications.into() />
            </div>
        </div>
    }
}
