use crate::{
    components::error::MessageBanners,
    pages::{
        employee_dashboard::utils::format_currency,
        manager_dashboard::view_model::ManagerDashboardViewModel,
    },
};
use leptos::*;

#[component]
pub fn PayrollSection(vm: ManagerDashboardViewModel) -> impl IntoView {
    let cell = "px-4 py-2 text-sm";
    let head = "px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase";

    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-6">
            <div class="flex items-center justify-between">
                <h3 class="text-lg font-semibold text-fg">"Payroll"</h3>
                <button
                    type="button"
                    class="px-4 py-2 rounded-md text-sm font-medium text-white bg-action-primary-bg"
                    on:click=move |_| vm.process_payroll()
                >
                    "Run Payroll"
                </button>
            </div>
            <MessageBanners message=vm.payroll_message />

            <div class="space-y-2">
                <h4 class="text-sm font-semibold text-fg">"Salary Structures"</h4>
                <For
                    each=move || vm.salaries.get()
                    key=|structure| structure.title.clone()
                    children=move |structure| {
                        let title = structure.title.clone();
                        view! {
                            <label class="flex items-center justify-between gap-4 text-sm text-fg">
                                <span>{structure.title.clone()}</span>
                                <input
                                    type="number"
                                    min="0"
                                    class="w-32 px-3 py-1 border border-border rounded-md"
                                    prop:value=structure.base_salary.to_string()
                                    on:change=move |ev| vm.set_salary(&title, &event_target_value(&ev))
                                />
                            </label>
                        }
                    }
                />
            </div>

            <table class="min-w-full divide-y divide-border">
                <thead>
                    <tr>
                        <th class=head>"Employee"</th>
                        <th class=head>"Base"</th>
                        <th class=head>"Overtime"</th>
                        <th class=head>"Deductions"</th>
                        <th class=head>"Net"</th>
                    </tr>
                </thead>
                <tbody class="divide-y divide-border">
                    {move || {
                        vm.payroll
                            .get()
                            .into_iter()
                            .map(|record| {
                                view! {
                                    <tr>
                                        <td class=cell>{record.employee_name.clone()}</td>
                                        <td class=cell>{format_currency(record.base_salary)}</td>
                                        <td class=cell>{format_currency(record.overtime)}</td>
                                        <td class=cell>{format_currency(record.deductions)}</td>
                                        <td class=cell>{format_currency(record.net_salary())}</td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{manager_user, provide_session_with};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn report_shows_net_per_employee() {
        let html = render_to_string(move || {
            provide_session_with(Some(manager_user()));
            let vm = ManagerDashboardViewModel::new();
            view! { <PayrollSection vm=vm /> }
        });
        assert!(html.contains("John Doe"));
        assert!(html.contains("$4,900"));
        assert!(html.contains("$5,300"));
        assert!(html.contains("Software Engineer"));
        assert!(html.contains("Run Payroll"));
    }
}
