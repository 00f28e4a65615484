use crate::api::{ApiClient, ApiError, LeaveBalance};
use std::rc::Rc;

#[derive(Clone)]
pub struct LeaveBalanceRepository {
    client: Rc<ApiClient>,
}

impl LeaveBalanceRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn load(&self, employee_id: &str) -> Result<Vec<LeaveBalance>, ApiError> {
        if employee_id.is_empty() {
            return Err(ApiError::auth("Sign in to view your leave balance"));
        }
        self.client.get_leave_balance(employee_id).await
    }
}
