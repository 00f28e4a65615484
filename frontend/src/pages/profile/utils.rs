use crate::api::{ApiError, UpdateUserRequest, User};
use leptos::*;

#[derive(Clone, Copy)]
pub struct ProfileFormState {
    pub name: RwSignal<String>,
    pub email: RwSignal<String>,
}

impl Default for ProfileFormState {
    fn default() -> Self {
        Self {
            name: create_rw_signal(String::new()),
            email: create_rw_signal(String::new()),
        }
    }
}

impl ProfileFormState {
    pub fn fill(&self, user: &User) {
        self.name.set(user.name.clone());
        self.email.set(user.email.clone());
    }

    pub fn to_request(&self, current: &User) -> Result<UpdateUserRequest, ApiError> {
        build_update(
            current,
            &self.name.get_untracked(),
            &self.email.get_untracked(),
        )
    }
}

/// Only fields that differ from `current` are sent.
pub fn build_update(current: &User, name: &str, email: &str) -> Result<UpdateUserRequest, ApiError> {
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
    let request = UpdateUserRequest {
        name: (name != current.name).then(|| name.to_string()),
        email: (email != current.email).then(|| email.to_string()),
    };
    if request == UpdateUserRequest::default() {
        return Err(ApiError::validation("No changes to save"));
    }
    Ok(request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::employee_user;

    #[test]
    fn unchanged_fields_are_left_out() {
        let user = employee_user();
        let request = build_update(&user, " Abdur Rahman ", "abdur@gmail.com").unwrap();
        assert_eq!(request.name.as_deref(), Some("Abdur Rahman"));
        assert_eq!(request.email, None);
    }

    #[test]
    fn nothing_changed_is_rejected() {
        let user = employee_user();
        let err = build_update(&user, "Abdur", "abdur@gmail.com").unwrap_err();
        assert_eq!(err.message, "No changes to save");
    }

    #[test]
    fn name_and_email_are_validated() {
        let user = employee_user();
        assert_eq!(
            build_update(&user, " ", "a@b.c").unwrap_err().message,
            "Full name is required"
        );
        assert_eq!(
            build_update(&user, "Abdur", "").unwrap_err().message,
            "Email is required"
        );
        assert_eq!(
            build_update(&user, "Abdur", "abdur").unwrap_err().message,
            "Enter a valid email address"
        );
    }
}
