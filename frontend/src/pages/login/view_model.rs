use super::{repository::LoginRepository, utils::LoginFormState};
use crate::api::{use_api_client, ApiError, LoginRequest, User};
use crate::utils::navigation::use_redirect;
use leptos::*;

#[derive(Clone, Copy)]
pub struct LoginViewModel {
    pub form: LoginFormState,
    pub error: RwSignal<Option<ApiError>>,
    pub login_action: Action<LoginRequest, Result<User, ApiError>>,
}

/// Records the outcome and returns where to go next.
fn apply_optional_login_result(
    result: Option<Result<User, ApiError>>,
    error: RwSignal<Option<ApiError>>,
) -> Option<&'static str> {
    match result? {
        Ok(user) => {
            error.set(None);
            Some(user.role.home_path())
        }
        Err(err) => {
            error.set(Some(err));
            None
        }
    }
}

impl LoginViewModel {
    pub fn new() -> Self {
        let repository = store_value(LoginRepository::new(use_api_client()));
        let form = LoginFormState::default();
        let error = create_rw_signal(None::<ApiError>);
        let redirect = use_redirect();

        let login_action = create_action(move |request: &LoginRequest| {
            let repo = repository.get_value();
            let request = request.clone();
            async move { repo.login(request).await }
        });

        create_effect(move |_| {
            if let Some(target) = apply_optional_login_result(login_action.value().get(), error) {
                form.password.set(String::new());
                redirect.call(target.to_string());
            }
        });

        Self {
            form,
            error,
            login_action,
        }
    }

    pub fn submit(&self) {
        if self.login_action.pending().get_untracked() {
            return;
        }
        match self.form.to_request() {
            Ok(request) => {
                self.error.set(None);
                self.login_action.dispatch(request);
            }
            Err(err) => self.error.set(Some(err)),
        }
    }
}

impl Default for LoginViewModel {
    fn default() -> Self {
        Self::new()
    }
}
