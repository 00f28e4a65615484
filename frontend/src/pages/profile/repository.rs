use crate::api::{ApiClient, ApiError, UpdateUserRequest, User};
use std::rc::Rc;

#[derive(Clone)]
pub struct ProfileRepository {
    client: Rc<ApiClient>,
}

impl ProfileRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn load(&self, user_id: &str) -> Result<User, ApiError> {
        if user_id.is_empty() {
            return Err(ApiError::auth("Sign in to view your profile"));
        }
        self.client.get_user_details(user_id).await
    }

    pub async fn save(&self, user_id: &str, request: UpdateUserRequest) -> Result<User, ApiError> {
        self.client.update_user_details(user_id, &request).await
    }
}
