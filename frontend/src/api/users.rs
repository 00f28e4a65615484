use reqwest::Method;

use super::{
    client::{encode_segment, ApiClient, ApiOperation},
    types::{ApiError, UpdateUserRequest, User},
};

impl ApiClient {
    pub async fn get_user_details(&self, user_id: &str) -> Result<User, ApiError> {
        let path = format!("/users/{}", encode_segment(user_id));
        self.send_json::<(), User>(ApiOperation::GetUser, Method::GET, &path, None)
            .await
    }

    pub async fn update_user_details(
        &self,
        user_id: &str,
        request: &UpdateUserRequest,
    ) -> Result<User, ApiError> {
        let path = format!("/users/{}", encode_segment(user_id));
        self.send_json(ApiOperation::UpdateUser, Method::PUT, &path, Some(request))
            .await
    }
}
