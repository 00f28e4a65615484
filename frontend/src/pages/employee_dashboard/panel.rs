use super::{
    utils::{format_currency, DashboardSection, PayrollSummary, DASHBOARD_SECTIONS},
    view_model::EmployeeDashboardViewModel,
};
use crate::{
    components::{error::MessageBanners, layout::Layout, leave_table::LeaveTable},
    pages::leave_balance::BalanceCards,
    state::{access::select_by_capability, session::use_session},
};
use leptos::*;

#[component]
pub fn EmployeeDashboardPage() -> impl IntoView {
    view! {
        <Layout>
            <EmployeeDashboardPanel />
        </Layout>
    }
}

#[component]
pub fn EmployeeDashboardPanel() -> impl IntoView {
    let vm = EmployeeDashboardViewModel::new();
    let session = use_session();
    let sections = move || select_by_capability(session.current_user().map(|u| u.role), DASHBOARD_SECTIONS);

    view! {
        <div class="space-y-6">
            <h2 class="text-2xl font-bold text-fg">"Employee Dashboard"</h2>
            <MessageBanners message=vm.message />
            {move || {
                sections()
                    .into_iter()
                    .map(|section| match section {
                        DashboardSection::Balances => {
                            view! { <BalanceCards balances=vm.balances.into() /> }.into_view()
                        }
                        DashboardSection::Payroll => {
                            view! { <PayrollSummaryCard summary=vm.payroll.into() /> }.into_view()
                        }
                        DashboardSection::Applications => {
                            view! {
                                <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
                                    <div class="flex items-center justify-between">
                                        <h3 class="text-lg font-semibold text-fg">"My Applications"</h3>
                                        <a
                                            href="/leave-application"
                                            class="px-4 py-2 rounded-md text-sm font-medium text-white bg-action-primary-bg"
                                        >
                                            "Apply for Leave"
                                        </a>
                                    </div>
                                    <LeaveTable requests=vm.applications.into() />
                                </div>
                            }
                            .into_view()
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

#[component]
pub fn PayrollSummaryCard(summary: Signal<PayrollSummary>) -> impl IntoView {
    let row = |label: &'static str, value: String| {
        view! {
            <div class="flex justify-between text-sm">
                <span class="text-fg-muted">{label}</span>
                <span class="font-medium">{value}</span>
            </div>
        }
    };
    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-2">
            <h3 class="text-lg font-semibold text-fg">"Payroll Summary"</h3>
            {move || {
                let s = summary.get();
                view! {
                    {row("Base Salary", format_currency(s.base_salary))}
                    {row("Bonuses", format_currency(s.bonuses))}
                    {row("Deductions", format_currency(s.deductions))}
                    {row("Net Salary", format_currency(s.net_salary()))}
                    <p class="text-xs text-fg-muted">"Last updated: " {s.last_updated.clone()}</p>
                }
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
    fn employee_sees_payroll_and_apply_link() {
        let html = render_to_string(move || {
            provide_session_with(Some(employee_user()));
            view! { <EmployeeDashboardPanel /> }
        });
        assert!(html.contains("Payroll Summary"));
        assert!(html.contains("$5,200"));
        assert!(html.contains("March 2025"));
        assert!(html.contains("/leave-application"));
    }

    #[test]
    fn manager_session_gets_no_employee_sections() {
        let html = render_to_string(move || {
            provide_session_with(Some(manager_user()));
            view! { <EmployeeDashboardPanel /> }
        });
        assert!(!html.contains("Payroll Summary"));
        assert!(!html.contains("/leave-application"));
    }
}
