use reqwest::Method;

use super::{
    client::{encode_segment, ApiClient, ApiOperation},
    types::{ApiError, LoginRequest, LoginResponse, RegisterRequest, User},
};

impl ApiClient {
    pub async fn register(&self, request: &RegisterRequest) -> Result<User, ApiError> {
        self.send_json(ApiOperation::Register, Method::POST, "/register", Some(request))
            .await
    }

    /// Authenticates and, when the client is bound to a session, starts it.
    /// The user record always comes from the backend.
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let mut response: LoginResponse = self
            .send_json(ApiOperation::Login, Method::POST, "/login", Some(request))
            .await?;
        let user = match (response.user.clone(), response.user_id.clone()) {
            (Some(user), _) => user,
            (None, Some(user_id)) => {
                self.fetch_user_with_token(&user_id, &response.access_token)
                    .await?
            }
            (None, None) => {
                return Err(ApiError::server("Login response did not identify the user"));
            }
        };
        if let Some(session) = self.session() {
            session
                .login(user.clone(), response.access_token.clone())
                .map_err(|err| ApiError::storage(err.to_string()))?;
        }
        response.user = Some(user);
        Ok(response)
    }

    async fn fetch_user_with_token(&self, user_id: &str, token: &str) -> Result<User, ApiError> {
        let path = format!("/users/{}", encode_segment(user_id));
        self.with_bearer(token)
            .send_json::<(), User>(ApiOperation::GetUser, Method::GET, &path, None)
            .await
    }
}
