use crate::api::{ApiClient, ApiError, LeaveApplicationInput, LeaveRequest};
use std::rc::Rc;

use super::utils::own_applications;

#[derive(Clone)]
pub struct LeaveApplicationRepository {
    client: Rc<ApiClient>,
}

impl LeaveApplicationRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn submit(&self, input: LeaveApplicationInput) -> Result<LeaveRequest, ApiError> {
        self.client.apply_leave(input).await
    }

    pub async fn list_own(&self, employee_id: &str) -> Result<Vec<LeaveRequest>, ApiError> {
        let all = self.client.get_leave_applications().await?;
        Ok(own_applications(all, employee_id))
    }
}
