use super::repository::LeaveBalanceRepository;
use crate::api::{use_api_client, ApiError, LeaveBalance};
use crate::state::{
    message::{apply_load_result, MessageState},
    session::use_session,
};
use leptos::*;

#[derive(Clone, Copy)]
pub struct LeaveBalanceViewModel {
    pub balances: RwSignal<Vec<LeaveBalance>>,
    pub message: RwSignal<MessageState>,
    pub balance_resource: Resource<u32, Result<Vec<LeaveBalance>, ApiError>>,
    pub reload: RwSignal<u32>,
}

impl LeaveBalanceViewModel {
    pub fn new() -> Self {
        let repository = store_value(LeaveBalanceRepository::new(use_api_client()));
        let session = use_session();
        let employee_id = Signal::derive(move || {
            session
                .current_user()
                .map(|user| user.id)
                .unwrap_or_default()
        });
        let balances = create_rw_signal(Vec::<LeaveBalance>::new());
        let message = create_rw_signal(MessageState::default());
        let reload = create_rw_signal(0u32);

        let balance_resource = create_resource(
            move || reload.get(),
            move |_| {
                let repo = repository.get_value();
                let employee_id = employee_id.get_untracked();
                async move { repo.load(&employee_id).await }
            },
        );
        create_effect(move |_| {
            apply_load_result(balance_resource.get(), balances, message);
        });

        Self {
            balances,
            message,
            balance_resource,
            reload,
        }
    }

    pub fn refresh(&self) {
        self.message.update(|msg| msg.clear());
        self.reload.update(|value| *value = value.wrapping_add(1));
    }
}

impl Default for LeaveBalanceViewModel {
    fn default() -> Self {
        Self::new()
    }
}
