use crate::api::{ApiError, RegisterRequest, Role};
use leptos::*;

#[derive(Clone, Copy)]
pub struct RegisterFormState {
    pub name: RwSignal<String>,
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
    pub role: RwSignal<Role>,
}

impl Default for RegisterFormState {
    fn default() -> Self {
        Self {
            name: create_rw_signal(String::new()),
            email: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
            role: create_rw_signal(Role::Employee),
        }
    }
}

impl RegisterFormState {
    pub fn to_request(&self) -> Result<RegisterRequest, ApiError> {
        build_request(
            &self.name.get_untracked(),
            &self.email.get_untracked(),
            &self.password.get_untracked(),
            self.role.get_untracked(),
        )
    }

    pub fn reset(&self) {
        self.name.set(String::new());
        self.email.set(String::new());
        self.password.set(String::new());
        self.role.set(Role::Employee);
    }
}

pub fn build_request(
    name: &str,
    email: &str,
    password: &str,
    role: Role,
) -> Result<RegisterRequest, ApiError> {
    let name = name.trim();
    let email = email.trim();
    if name.is_empty() {
        return Err(ApiError::validation("Full name is required"));
    }
    if email.is_empty() {
        return Err(ApiError::validation("Email is required"));
    }
    if !email.contains('@') {
        return Err(ApiError::validation("Enter a valid email address"));
    }
    if password.is_empty() {
        return Err(ApiError::validation("Password is required"));
    }
    Ok(RegisterRequest {
        name: name.to_string(),
        email: email.to_string(),
        password: password.to_string(),
        role,
    })
}
