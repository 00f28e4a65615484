use crate::api::{ApiClient, ApiError, LoginRequest, User};
use std::rc::Rc;

#[derive(Clone)]
pub struct LoginRepository {
    client: Rc<ApiClient>,
}

impl LoginRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    /// Signs in and returns the backend's user record. The session is
    /// started by the client.
    pub async fn login(&self, request: LoginRequest) -> Result<User, ApiError> {
        let response = self.client.login(&request).await?;
        response
            .user
            .ok_or_else(|| ApiError::server("Login response did not identify the user"))
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use crate::api::Role;
    use crate::state::session::SessionStore;
    use serde_json::json;

    fn mock_login(server: &MockServer, user_id: &str, role: &str) {
        server.mock(|when, then| {
            when.method(POST).path("/login");
            then.status(200).json_body(json!({"access_token": "tok", "user_id": user_id}));
        });
        let path = format!("/users/{}", user_id);
        server.mock(|when, then| {
            when.method(GET).path(&path);
            then.status(200).json_body(json!({
                "id": user_id,
                "name": "Someone",
                "email": "someone@example.com",
                "role": role
            }));
        });
    }

    async fn login_as(email: &str, role: &str) -> (User, SessionStore) {
        let server = MockServer::start();
        mock_login(&server, "u1", role);
        let session = SessionStore::in_memory();
        let repo = LoginRepository::new(
            ApiClient::new_with_base_url(server.base_url()).with_session(session.clone()),
        );
        let user = repo
            .login(LoginRequest {
                email: email.into(),
                password: "123".into(),
            })
            .await
            .unwrap();
        (user, session)
    }

    #[tokio::test]
    async fn backend_role_decides_landing_page() {
        let runtime = leptos::create_runtime();
        let (manager, session) = login_as("manager@x.com", "manager").await;
        assert_eq!(manager.role, Role::Manager);
        assert_eq!(manager.role.home_path(), "/manager");
        assert!(session.is_authenticated());

        let (employee, _) = login_as("abdur@gmail.com", "employee").await;
        assert_eq!(employee.role.home_path(), "/employee");

        // The email never decides the role.
        let (employee, _) = login_as("manager.assistant@x.com", "employee").await;
        assert_eq!(employee.role, Role::Employee);
        runtime.dispose();
    }
}
