use reqwest::Method;
use serde_json::Value;

use super::{
    client::{encode_segment, ApiClient, ApiOperation},
    types::{
        ApiError, CreateLeavePayload, LeaveApplicationInput, LeaveBalance, LeaveBalancePayload,
        LeaveDecision, LeaveRequest, LeaveStatus, Role, UpdateLeaveStatusRequest,
    },
};

impl ApiClient {
    /// Submits a new request. It is sent and returned as pending whatever
    /// the backend echoes.
    pub async fn apply_leave(&self, input: LeaveApplicationInput) -> Result<LeaveRequest, ApiError> {
        let payload = CreateLeavePayload::from(input);
        let mut created: LeaveRequest = self
            .send_json(
                ApiOperation::ApplyLeave,
                Method::POST,
                "/leave-application",
                Some(&payload),
            )
            .await?;
        if created.status != LeaveStatus::Pending {
            log::warn!(
                "leave {} came back as {}; treating it as pending",
                created.id,
                created.status.as_str()
            );
            created.status = LeaveStatus::Pending;
        }
        Ok(created)
    }

    /// Server order is kept. Rows that do not decode are dropped with a
    /// warning instead of failing the whole list.
    pub async fn get_leave_applications(&self) -> Result<Vec<LeaveRequest>, ApiError> {
        let rows: Vec<Value> = self
            .send_json::<(), _>(
                ApiOperation::ListLeave,
                Method::GET,
                "/leave-applications",
                None,
            )
            .await?;
        Ok(rows
            .into_iter()
            .filter_map(|row| match serde_json::from_value::<LeaveRequest>(row) {
                Ok(request) => Some(request),
                Err(err) => {
                    log::warn!("skipping unreadable leave application: {}", err);
                    None
                }
            })
            .collect())
    }

    /// Sends a decision. Backends that only acknowledge (`{"message": ..}`)
    /// yield `None`; callers re-read the list either way.
    pub async fn update_leave_status(
        &self,
        leave_id: &str,
        decision: LeaveDecision,
    ) -> Result<Option<LeaveRequest>, ApiError> {
        let acting_role = self
            .session()
            .and_then(|session| session.snapshot().user)
            .map(|user| user.role);
        if matches!(acting_role, Some(role) if role != Role::Manager) {
            return Err(ApiError::auth("Only managers can approve or reject leave"));
        }
        let path = format!("/leave-application/{}", encode_segment(leave_id));
        let request = UpdateLeaveStatusRequest { status: decision };
        let reply: Value = self
            .send_json(
                ApiOperation::UpdateLeaveStatus,
                Method::PUT,
                &path,
                Some(&request),
            )
            .await?;
        match serde_json::from_value::<LeaveRequest>(reply) {
            Ok(updated) => Ok(Some(updated)),
            Err(err) => {
                log::debug!("leave {} decision acknowledged without a record: {}", leave_id, err);
                Ok(None)
            }
        }
    }

    pub async fn get_leave_balance(&self, employee_id: &str) -> Result<Vec<LeaveBalance>, ApiError> {
        let path = format!("/leave-balance/{}", encode_segment(employee_id));
        let payload: LeaveBalancePayload = self
            .send_json::<(), _>(ApiOperation::LeaveBalance, Method::GET, &path, None)
            .await?;
        Ok(payload.into_balances())
    }
}
