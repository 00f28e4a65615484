use crate::api::{ApiClient, ApiError, LeaveDecision, LeaveRequest, LeaveStatus};
use std::rc::Rc;

#[derive(Clone)]
pub struct ManagerDashboardRepository {
    client: Rc<ApiClient>,
}

impl ManagerDashboardRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn list_requests(&self) -> Result<Vec<LeaveRequest>, ApiError> {
        self.client.get_leave_applications().await
    }

    /// Status the request holds after the decision. Falls back to the
    /// decision itself when the backend only acknowledges.
    pub async fn decide(
        &self,
        leave_id: &str,
        decision: LeaveDecision,
    ) -> Result<LeaveStatus, ApiError> {
        let updated = self.client.update_leave_status(leave_id, decision).await?;
        Ok(updated
            .map(|request| request.status)
            .unwrap_or_else(|| decision.status()))
    }
}
