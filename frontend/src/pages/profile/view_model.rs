use super::{repository::ProfileRepository, utils::ProfileFormState};
use crate::api::{use_api_client, ApiError, UpdateUserRequest, User};
use crate::state::{
    message::MessageState,
    session::{use_session, SessionStore},
};
use leptos::*;

pub const PROFILE_SAVED_MESSAGE: &str = "Profile updated successfully";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub user_id: String,
    pub request: UpdateUserRequest,
}

#[derive(Clone, Copy)]
pub struct ProfileViewModel {
    pub form: ProfileFormState,
    pub profile: RwSignal<Option<User>>,
    pub message: RwSignal<MessageState>,
    pub profile_resource: Resource<String, Result<User, ApiError>>,
    pub save_action: Action<ProfileUpdate, Result<User, ApiError>>,
}

fn apply_optional_profile_result(
    result: Option<Result<User, ApiError>>,
    profile: RwSignal<Option<User>>,
    form: ProfileFormState,
    message: RwSignal<MessageState>,
) {
    match result {
        Some(Ok(user)) => {
            form.fill(&user);
            profile.set(Some(user));
        }
        Some(Err(err)) => message.update(|msg| msg.set_error(err)),
        None => {}
    }
}

/// A saved profile replaces the cached session user so the header follows.
fn apply_optional_save_result(
    result: Option<Result<User, ApiError>>,
    session: &SessionStore,
    profile: RwSignal<Option<User>>,
    form: ProfileFormState,
    message: RwSignal<MessageState>,
) {
    match result {
        Some(Ok(user)) => {
            if let Err(err) = session.update_user(user.clone()) {
                log::error!("profile saved but session update failed: {}", err);
                message.update(|msg| msg.set_error(ApiError::storage(err.to_string())));
                return;
            }
            form.fill(&user);
            profile.set(Some(user));
            message.update(|msg| msg.set_success(PROFILE_SAVED_MESSAGE));
        }
        Some(Err(err)) => message.update(|msg| msg.set_error(err)),
        None => {}
    }
}

impl ProfileViewModel {
    pub fn new() -> Self {
        let repository = store_value(ProfileRepository::new(use_api_client()));
        let session = use_session();
        let user_id = {
            let session = session.clone();
            create_memo(move |_| {
                session
                    .current_user()
                    .map(|user| user.id)
                    .unwrap_or_default()
            })
        };
        let form = ProfileFormState::default();
        let profile = create_rw_signal(session.current_user());
        let message = create_rw_signal(MessageState::default());
        if let Some(user) = profile.get_untracked() {
            form.fill(&user);
        }

        let profile_resource = create_resource(
            move || user_id.get(),
            move |user_id| {
                let repo = repository.get_value();
                async move { repo.load(&user_id).await }
            },
        );
        let save_action = create_action(move |update: &ProfileUpdate| {
            let repo = repository.get_value();
            let update = update.clone();
            async move { repo.save(&update.user_id, update.request).await }
        });

        create_effect(move |_| {
            apply_optional_profile_result(profile_resource.get(), profile, form, message);
        });
        create_effect(move |_| {
            apply_optional_save_result(save_action.value().get(), &session, profile, form, message);
        });

        Self {
            form,
            profile,
            message,
            profile_resource,
            save_action,
        }
    }

    pub fn submit(&self) {
        if self.save_action.pending().get_untracked() {
            return;
        }
        let Some(current) = self.profile.get_untracked() else {
            self.message
                .update(|msg| msg.set_error(ApiError::auth("Sign in to edit your profile")));
            return;
        };
        match self.form.to_request(&current) {
            Ok(request) => {
                self.message.update(|msg| msg.clear());
                self.save_action.dispatch(ProfileUpdate {
                    user_id: current.id,
                    request,
                });
            }
            Err(err) => self.message.update(|msg| msg.set_error(err)),
        }
    }
}

impl Default for ProfileViewModel {
    fn default() -> Self {
        Self::new()
    }
}
