use super::{repository::RegisterRepository, utils::RegisterFormState};
use crate::api::{use_api_client, ApiError, RegisterRequest, User};
use crate::state::{access::LOGIN_PATH, message::MessageState};
use crate::utils::navigation::use_redirect;
use leptos::*;

pub const REGISTERED_MESSAGE: &str = "Registration successful! Please log in.";

#[derive(Clone, Copy)]
pub struct RegisterViewModel {
    pub form: RegisterFormState,
    pub message: RwSignal<MessageState>,
    pub register_action: Action<RegisterRequest, Result<User, ApiError>>,
}

/// True when registration went through and the user should move on to login.
fn apply_optional_register_result(
    result: Option<Result<User, ApiError>>,
    message: RwSignal<MessageState>,
    form: RegisterFormState,
) -> bool {
    match result {
        Some(Ok(_)) => {
            message.update(|msg| msg.set_success(REGISTERED_MESSAGE));
            form.reset();
            true
        }
        Some(Err(err)) => {
            message.update(|msg| msg.set_error(err));
            false
        }
        None => false,
    }
}

impl RegisterViewModel {
    pub fn new() -> Self {
        let repository = store_value(RegisterRepository::new(use_api_client()));
        let form = RegisterFormState::default();
        let message = create_rw_signal(MessageState::default());
        let redirect = use_redirect();

        let register_action = create_action(move |request: &RegisterRequest| {
            let repo = repository.get_value();
            let request = request.clone();
            async move { repo.register(request).await }
        });

        create_effect(move |_| {
            if apply_optional_register_result(register_action.value().get(), message, form) {
                redirect.call(LOGIN_PATH.to_string());
            }
        });

        Self {
            form,
            message,
            register_action,
        }
    }

    pub fn submit(&self) {
        if self.register_action.pending().get_untracked() {
            return;
        }
        match self.form.to_request() {
            Ok(request) => {
                self.message.update(|msg| msg.clear());
                self.register_action.dispatch(request);
            }
            Err(err) => self.message.update(|msg| msg.set_error(err)),
        }
    }
}

impl Default for RegisterViewModel {
    fn default() -> Self {
        Self::new()
    }
}
