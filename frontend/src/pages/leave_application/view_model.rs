use super::{repository::LeaveApplicationRepository, utils::LeaveFormState};
use crate::api::{use_api_client, ApiError, LeaveApplicationInput, LeaveRequest};
use crate::state::{
    message::{apply_load_result, MessageState},
    session::use_session,
};
use leptos::*;

pub const SUBMITTED_MESSAGE: &str = "Leave application submitted successfully!";

#[derive(Clone, Copy)]
pub struct LeaveApplicationViewModel {
    pub form: LeaveFormState,
    pub message: RwSignal<MessageState>,
    pub applications: RwSignal<Vec<LeaveRequest>>,
    pub applications_resource: Resource<u32, Result<Vec<LeaveRequest>, ApiError>>,
    pub submit_action: Action<LeaveApplicationInput, Result<LeaveRequest, ApiError>>,
    employee_id: Signal<String>,
}

fn apply_optional_submit_result(
    result: Option<Result<LeaveRequest, ApiError>>,
    message: RwSignal<MessageState>,
    form: LeaveFormState,
    reload: RwSignal<u32>,
) {
    if let Some(result) = result {
        match result {
            Ok(_) => {
                message.update(|msg| msg.set_success(SUBMITTED_MESSAGE));
                form.reset();
                reload.update(|value| *value = value.wrapping_add(1));
            }
            Err(err) => message.update(|msg| msg.set_error(err)),
        }
    }
}

impl LeaveApplicationViewModel {
    pub fn new() -> Self {
        let repository = store_value(LeaveApplicationRepository::new(use_api_client()));
        let session = use_session();
        let employee_id = Signal::derive(move || {
            session
                .current_user()
                .map(|user| user.id)
                .unwrap_or_default()
        });
        let form = LeaveFormState::default();
        let message = create_rw_signal(MessageState::default());
        let applications = create_rw_signal(Vec::<LeaveRequest>::new());
        let reload = create_rw_signal(0u32);

        let applications_resource = create_resource(
            move || reload.get(),
            move |_| {
                let repo = repository.get_value();
                let employee_id = employee_id.get_untracked();
                async move { repo.list_own(&employee_id).await }
            },
        );

        let submit_action = create_action(move |input: &LeaveApplicationInput| {
            let repo = repository.get_value();
            let input = input.clone();
            async move { repo.submit(input).await }
        });

        create_effect(move |_| {
            apply_load_result(applications_resource.get(), applications, message);
        });
        create_effect(move |_| {
            apply_optional_submit_result(submit_action.value().get(), message, form, reload);
        });

        Self {
            form,
            message,
            applications,
            applications_resource,
            submit_action,
            employee_id,
        }
    }

    pub fn submit(&self) {
        if self.submit_action.pending().get_untracked() {
            return;
        }
        match self.form.to_input(&self.employee_id.get_untracked()) {
            Ok(input) => {
                self.message.update(|msg| msg.clear());
                self.submit_action.dispatch(input);
            }
            Err(err) => self.message.update(|msg| msg.set_error(err)),
        }
    }
}

impl Default for LeaveApplicationViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::{LeaveStatus, LeaveType};
    use crate::test_support::helpers::{employee_user, leave, provide_session_with};
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn successful_submit_resets_form_and_reloads() {
        with_runtime(|| {
            let form = LeaveFormState::default();
            form.leave_type.set(LeaveType::Casual);
            form.reason.set("trip".into());
            let message = create_rw_signal(MessageState::default());
            let reload = create_rw_signal(0u32);
            apply_optional_submit_result(
                Some(Ok(leave("l1", "u-employee", LeaveStatus::Pending))),
                message,
                form,
                reload,
            );
            assert_eq!(reload.get(), 1);
            assert_eq!(form.leave_type.get(), LeaveType::Annual);
            assert!(form.reason.get().is_empty());
            assert_eq!(message.get().success.as_deref(), Some(SUBMITTED_MESSAGE));
        });
    }

    #[test]
    fn failed_submit_keeps_form_and_does_not_reload() {
        with_runtime(|| {
            let form = LeaveFormState::default();
            form.reason.set("trip".into());
            let message = create_rw_signal(MessageState::default());
            let reload = create_rw_signal(0u32);
            apply_optional_submit_result(
                Some(Err(ApiError::server("Failed to apply for leave"))),
                message,
                form,
                reload,
            );
            assert_eq!(reload.get(), 0);
            assert_eq!(form.reason.get(), "trip");
            assert!(message.get().error.is_some());
        });
    }

    #[test]
    fn submit_validates_before_dispatch() {
        with_runtime(|| {
            provide_session_with(Some(employee_user()));
            let vm = LeaveApplicationViewModel::new();
            vm.form.start_date.set("2024-03-22".into());
            vm.form.end_date.set("2024-03-20".into());
            vm.form.reason.set("trip".into());
            vm.submit();
            assert_eq!(
                vm.message.get().error.map(|e| e.message),
                Some("End date cannot be before start date".into())
            );
            assert_eq!(vm.submit_action.version().get(), 0);
        });
    }
}
