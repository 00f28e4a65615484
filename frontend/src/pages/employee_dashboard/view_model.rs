use super::{repository::EmployeeDashboardRepository, utils::PayrollSummary};
use crate::api::{use_api_client, ApiError, LeaveBalance, LeaveRequest};
use crate::state::{
    message::{apply_load_result, MessageState},
    session::use_session,
};
use leptos::*;

#[derive(Clone, Copy)]
pub struct EmployeeDashboardViewModel {
    pub balances: RwSignal<Vec<LeaveBalance>>,
    pub applications: RwSignal<Vec<LeaveRequest>>,
    pub payroll: RwSignal<PayrollSummary>,
    pub message: RwSignal<MessageState>,
    pub balance_resource: Resource<String, Result<Vec<LeaveBalance>, ApiError>>,
    pub applications_resource: Resource<String, Result<Vec<LeaveRequest>, ApiError>>,
}

impl EmployeeDashboardViewModel {
    pub fn new() -> Self {
        let repository = store_value(EmployeeDashboardRepository::new(use_api_client()));
        let session = use_session();
        let employee_id = create_memo(move |_| {
            session
                .current_user()
                .map(|user| user.id)
                .unwrap_or_default()
        });
        let balances = create_rw_signal(Vec::<LeaveBalance>::new());
        let applications = create_rw_signal(Vec::<LeaveRequest>::new());
        let payroll = create_rw_signal(PayrollSummary::sample());
        let message = create_rw_signal(MessageState::default());

        let balance_resource = create_resource(
            move || employee_id.get(),
            move |employee_id| {
                let repo = repository.get_value();
                async move { repo.balances(&employee_id).await }
            },
        );
        let applications_resource = create_resource(
            move || employee_id.get(),
            move |employee_id| {
                let repo = repository.get_value();
                async move { repo.own_applications(&employee_id).await }
            },
        );

        create_effect(move |_| apply_load_result(balance_resource.get(), balances, message));
        create_effect(move |_| {
            apply_load_result(applications_resource.get(), applications, message)
        });

        Self {
            balances,
            applications,
            payroll,
            message,
            balance_resource,
            applications_resource,
        }
    }
}

impl Default for EmployeeDashboardViewModel {
    fn default() -> Self {
        Self::new()
    }
}
