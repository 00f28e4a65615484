use crate::api::{ApiClient, ApiError, LeaveBalance, LeaveRequest};
use crate::pages::leave_application::utils::own_applications;
use std::rc::Rc;

#[derive(Clone)]
pub struct EmployeeDashboardRepository {
    client: Rc<ApiClient>,
}

impl EmployeeDashboardRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn balances(&self, employee_id: &str) -> Result<Vec<LeaveBalance>, ApiError> {
        self.client.get_leave_balance(employee_id).await
    }

    pub async fn own_applications(&self, employee_id: &str) -> Result<Vec<LeaveRequest>, ApiError> {
        let all = self.client.get_leave_applications().await?;
        Ok(own_applications(all, employee_id))
    }
}
