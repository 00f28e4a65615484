use super::{
    repository::ManagerDashboardRepository,
    utils::{
        default_salary_structures, run_payroll, sample_payroll_report, update_salary, LeavePolicy,
        PayrollRecord, SalaryStructure,
    },
};
use crate::api::{use_api_client, ApiError, LeaveDecision, LeaveRequest, LeaveStatus, LeaveType};
use crate::pages::employee_dashboard::utils::format_currency;
use crate::state::message::{apply_load_result, MessageState};
use leptos::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecisionPayload {
    pub leave_id: String,
    pub decision: LeaveDecision,
}

#[derive(Clone, Copy)]
pub struct ManagerDashboardViewModel {
    pub requests: RwSignal<Vec<LeaveRequest>>,
    pub requests_message: RwSignal<MessageState>,
    pub requests_resource: Resource<u32, Result<Vec<LeaveRequest>, ApiError>>,
    pub decision_action: Action<DecisionPayload, Result<LeaveStatus, ApiError>>,
    pub policy: RwSignal<LeavePolicy>,
    pub policy_message: RwSignal<MessageState>,
    pub salaries: RwSignal<Vec<SalaryStructure>>,
    pub payroll: RwSignal<Vec<PayrollRecord>>,
    pub payroll_message: RwSignal<MessageState>,
}

fn decision_message(status: LeaveStatus) -> &'static str {
    match status {
        LeaveStatus::Approved => "Leave request approved",
        LeaveStatus::Rejected => "Leave request rejected",
        LeaveStatus::Pending => "Leave request updated",
    }
}

fn apply_optional_decision_result(
    result: Option<Result<LeaveStatus, ApiError>>,
    message: RwSignal<MessageState>,
    reload: RwSignal<u32>,
) {
    if let Some(result) = result {
        match result {
            Ok(status) => {
                message.update(|msg| msg.set_success(decision_message(status)));
                reload.update(|value| *value = value.wrapping_add(1));
            }
            Err(err) => message.update(|msg| msg.set_error(err)),
        }
    }
}

/// Checks the decision against the currently shown row before any request.
fn validate_decision(
    requests: &[LeaveRequest],
    payload: &DecisionPayload,
) -> Result<(), ApiError> {
    let request = requests
        .iter()
        .find(|request| request.id == payload.leave_id)
        .ok_or_else(|| ApiError::validation("That leave request is no longer listed"))?;
    if !request.status.can_transition_to(payload.decision) {
        return Err(ApiError::validation(format!(
            "Leave request is already {}",
            request.status.as_str()
        )));
    }
    Ok(())
}

impl ManagerDashboardViewModel {
    pub fn new() -> Self {
        let repository = store_value(ManagerDashboardRepository::new(use_api_client()));
        let requests = create_rw_signal(Vec::<LeaveRequest>::new());
        let requests_message = create_rw_signal(MessageState::default());
        let reload = create_rw_signal(0u32);

        let requests_resource = create_resource(
            move || reload.get(),
            move |_| {
                let repo = repository.get_value();
                async move { repo.list_requests().await }
            },
        );

        let decision_action = create_action(move |payload: &DecisionPayload| {
            let repo = repository.get_value();
            let payload = payload.clone();
            async move { repo.decide(&payload.leave_id, payload.decision).await }
        });

        create_effect(move |_| {
            apply_load_result(requests_resource.get(), requests, requests_message);
        });
        create_effect(move |_| {
            apply_optional_decision_result(decision_action.value().get(), requests_message, reload);
        });

        Self {
            requests,
            requests_message,
            requests_resource,
            decision_action,
            policy: create_rw_signal(LeavePolicy::default()),
            policy_message: create_rw_signal(MessageState::default()),
            salaries: create_rw_signal(default_salary_structures()),
            payroll: create_rw_signal(sample_payroll_report()),
            payroll_message: create_rw_signal(MessageState::default()),
        }
    }

    pub fn decide(&self, leave_id: String, decision: LeaveDecision) {
        if self.decision_action.pending().get_untracked() {
            return;
        }
        let payload = DecisionPayload { leave_id, decision };
        let checked = self
            .requests
            .with_untracked(|requests| validate_decision(requests, &payload));
        match checked {
            Ok(()) => {
                self.requests_message.update(|msg| msg.clear());
                self.decision_action.dispatch(payload);
            }
            Err(err) => self.requests_message.update(|msg| msg.set_error(err)),
        }
    }

    pub fn set_policy_limit(&self, leave_type: LeaveType, raw: &str) {
        match self.policy.get_untracked().with_limit(leave_type, raw) {
            Ok(updated) => {
                self.policy.set(updated);
                self.policy_message
                    .update(|msg| msg.set_success(format!("{} limit updated", leave_type.label())));
            }
            Err(err) => self.policy_message.update(|msg| msg.set_error(err)),
        }
    }

    pub fn set_salary(&self, title: &str, raw: &str) {
        let mut structures = self.salaries.get_untracked();
        match update_salary(&mut structures, title, raw) {
            Ok(()) => {
                self.salaries.set(structures);
                self.payroll_message
                    .update(|msg| msg.set_success(format!("{} salary updated", title)));
            }
            Err(err) => self.payroll_message.update(|msg| msg.set_error(err)),
        }
    }

    pub fn process_payroll(&self) {
        let run = self.payroll.with_untracked(|records| run_payroll(records));
        log::info!("payroll processed for {} employees", run.employees);
        self.payroll_message.update(|msg| {
            msg.set_success(format!(
                "Payroll processed for {} employees (net total {})",
                run.employees,
                format_currency(run.total_net)
            ))
        });
    }
}

impl Default for ManagerDashboardViewModel {
    fn default() -> Self {
        Self::new()
    }
}
