use crate::api::{ApiClient, ApiError, RegisterRequest, User};
use std::rc::Rc;

#[derive(Clone)]
pub struct RegisterRepository {
    client: Rc<ApiClient>,
}

impl RegisterRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn register(&self, request: RegisterRequest) -> Result<User, ApiError> {
        self.client.register(&request).await
    }
}
