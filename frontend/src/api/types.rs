use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Employee,
    Manager,
}

impl Role {
    pub const ALL: [Role; 2] = [Role::Employee, Role::Manager];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Employee => "employee",
            Role::Manager => "manager",
        }
    }

    /// Landing page a user of this role is sent to after login or when
    /// hitting a route reserved for the other role.
    pub fn home_path(&self) -> &'static str {
        match self {
            Role::Employee => "/employee",
            Role::Manager => "/manager",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "employee" => Some(Role::Employee),
            "manager" => Some(Role::Manager),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub user_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaveType {
    #[default]
    Annual,
    Sick,
    Casual,
}

impl LeaveType {
    pub const ALL: [LeaveType; 3] = [LeaveType::Annual, LeaveType::Sick, LeaveType::Casual];

    pub fn as_str(&self) -> &'static str {
        match self {
            LeaveType::Annual => "annual",
            LeaveType::Sick => "sick",
            LeaveType::Casual => "casual",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LeaveType::Annual => "Annual Leave",
            LeaveType::Sick => "Sick Leave",
            LeaveType::Casual => "Casual Leave",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "annual" => Some(LeaveType::Annual),
            "sick" => Some(LeaveType::Sick),
            "casual" => Some(LeaveType::Casual),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaveStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl LeaveStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeaveStatus::Pending => "pending",
            LeaveStatus::Approved => "approved",
            LeaveStatus::Rejected => "rejected",
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, LeaveStatus::Pending)
    }

    /// Decisions are final: only a pending request can be approved or rejected.
    pub fn can_transition_to(&self, decision: LeaveDecision) -> bool {
        self.is_pending() && decision.status() != *self
    }
}

/// The statuses a manager is allowed to set on a pending request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaveDecision {
    Approved,
    Rejected,
}

impl LeaveDecision {
    pub fn status(&self) -> LeaveStatus {
        match self {
            LeaveDecision::Approved => LeaveStatus::Approved,
            LeaveDecision::Rejected => LeaveStatus::Rejected,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRequest {
    pub id: String,
    #[serde(alias = "employeeId")]
    pub employee_id: String,
    #[serde(default, alias = "employeeName")]
    pub employee_name: String,
    #[serde(default, rename = "type", alias = "leave_type")]
    pub leave_type: LeaveType,
    #[serde(alias = "startDate")]
    pub start_date: NaiveDate,
    #[serde(alias = "endDate")]
    pub end_date: NaiveDate,
    #[serde(default)]
    pub status: LeaveStatus,
    #[serde(default)]
    pub reason: Option<String>,
}

impl LeaveRequest {
    pub fn date_range_label(&self) -> String {
        format!(
            "{} to {}",
            self.start_date.format("%Y-%m-%d"),
            self.end_date.format("%Y-%m-%d")
        )
    }
}

/// What an employee fills in; the status is never part of the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaveApplicationInput {
    pub employee_id: String,
    pub leave_type: LeaveType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateLeavePayload {
    pub employee_id: String,
    #[serde(rename = "type")]
    pub leave_type: LeaveType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
    pub status: LeaveStatus,
}

impl From<LeaveApplicationInput> for CreateLeavePayload {
    fn from(input: LeaveApplicationInput) -> Self {
        Self {
            employee_id: input.employee_id,
            leave_type: input.leave_type,
            start_date: input.start_date,
            end_date: input.end_date,
            reason: input.reason,
            status: LeaveStatus::Pending,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct UpdateLeaveStatusRequest {
    pub status: LeaveDecision,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LeaveBalance {
    pub leave_type: LeaveType,
    pub total: i32,
    pub used: i32,
    pub remaining: i32,
}

impl LeaveBalance {
    pub fn new(leave_type: LeaveType, total: i32, used: i32) -> Self {
        Self {
            leave_type,
            total,
            used,
            remaining: total.saturating_sub(used),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct LeaveBalanceEntry {
    #[serde(rename = "type", alias = "leave_type")]
    pub leave_type: LeaveType,
    pub total: i32,
    pub used: i32,
    #[serde(default)]
    pub remaining: Option<i32>,
}

/// Balance payloads come either per leave type or as the older single
/// aggregate record.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum LeaveBalancePayload {
    PerType(Vec<LeaveBalanceEntry>),
    Aggregate {
        available_leaves: i32,
        used_leaves: i32,
    },
}

impl LeaveBalancePayload {
    pub fn into_balances(self) -> Vec<LeaveBalance> {
        match self {
            LeaveBalancePayload::PerType(entries) => entries
                .into_iter()
                .map(|entry| {
                    let balance = LeaveBalance::new(entry.leave_type, entry.total, entry.used);
                    if let Some(reported) = entry.remaining {
                        if reported != balance.remaining {
                            log::warn!(
                                "{} balance reported remaining={} but total-used={}",
                                entry.leave_type.as_str(),
                                reported,
                                balance.remaining
                            );
                        }
                    }
                    balance
                })
                .collect(),
            LeaveBalancePayload::Aggregate {
                available_leaves,
                used_leaves,
            } => vec![LeaveBalance::new(
                LeaveType::Annual,
                available_leaves.saturating_add(used_leaves),
                used_leaves,
            )],
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApiErrorKind {
    Network,
    Auth,
    Validation,
    NotFound,
    #[default]
    Server,
    Storage,
}

impl ApiErrorKind {
    pub fn from_status(status: u16) -> Self {
        match status {
            401 | 403 => ApiErrorKind::Auth,
            404 => ApiErrorKind::NotFound,
            400 | 409 | 422 => ApiErrorKind::Validation,
            _ => ApiErrorKind::Server,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ApiErrorKind::Network => "NETWORK_ERROR",
            ApiErrorKind::Auth => "AUTH_ERROR",
            ApiErrorKind::Validation => "VALIDATION_ERROR",
            ApiErrorKind::NotFound => "NOT_FOUND",
            ApiErrorKind::Server => "SERVER_ERROR",
            ApiErrorKind::Storage => "STORAGE_ERROR",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    pub message: String,
    pub kind: ApiErrorKind,
}

impl ApiError {
    pub fn new(kind: ApiErrorKind, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind,
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Validation, msg)
    }

    pub fn network(msg: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Network, msg)
    }

    pub fn auth(msg: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Auth, msg)
    }

    pub fn server(msg: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Server, msg)
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Storage, msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn leave_request_reads_snake_and_camel_case() {
        let snake: LeaveRequest = serde_json::from_value(json!({
            "id": "l1",
            "employee_id": "e1",
            "employee_name": "John Doe",
            "type": "sick",
            "start_date": "2024-03-25",
            "end_date": "2024-03-26",
            "status": "approved",
            "reason": "Medical appointment"
        }))
        .unwrap();
        let camel: LeaveRequest = serde_json::from_value(json!({
            "id": "l1",
            "employeeId": "e1",
            "employeeName": "John Doe",
            "type": "sick",
            "startDate": "2024-03-25",
            "endDate": "2024-03-26",
            "status": "approved",
            "reason": "Medical appointment"
        }))
        .unwrap();
        assert_eq!(snake, camel);
        assert_eq!(snake.status, LeaveStatus::Approved);
    }

    #[test]
    fn leave_request_defaults_missing_type_and_name() {
        let request: LeaveRequest = serde_json::from_value(json!({
            "id": "l2",
            "employee_id": "e1",
            "start_date": "2024-03-20",
            "end_date": "2024-03-22",
            "status": "pending"
        }))
        .unwrap();
        assert_eq!(request.leave_type, LeaveType::Annual);
        assert!(request.employee_name.is_empty());
        assert!(request.reason.is_none());
    }

    #[test]
    fn create_payload_always_pending() {
        let payload = CreateLeavePayload::from(LeaveApplicationInput {
            employee_id: "e1".into(),
            leave_type: LeaveType::Casual,
            start_date: NaiveDate::from_ymd_opt(2024, 3, 20).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 3, 22).unwrap(),
            reason: "trip".into(),
        });
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["status"], "pending");
        assert_eq!(value["type"], "casual");
        assert_eq!(value["start_date"], "2024-03-20");
    }

    #[test]
    fn only_pending_requests_accept_decisions() {
        assert!(LeaveStatus::Pending.can_transition_to(LeaveDecision::Approved));
        assert!(LeaveStatus::Pending.can_transition_to(LeaveDecision::Rejected));
        assert!(!LeaveStatus::Approved.can_transition_to(LeaveDecision::Rejected));
        assert!(!LeaveStatus::Rejected.can_transition_to(LeaveDecision::Approved));
    }

    #[test]
    fn balance_remaining_is_derived() {
        let payload: LeaveBalancePayload = serde_json::from_value(json!([
            { "type": "annual", "total": 20, "used": 5, "remaining": 15 },
            { "type": "sick", "total": 10, "used": 2, "remaining": 99 },
            { "type": "casual", "total": 5, "used": 1 }
        ]))
        .unwrap();
        let balances = payload.into_balances();
        assert_eq!(balances.len(), 3);
        for balance in &balances {
            assert_eq!(balance.remaining, balance.total - balance.used);
        }
        assert_eq!(balances[1].remaining, 8);
    }

    #[test]
    fn aggregate_balance_maps_to_annual_entry() {
        let payload: LeaveBalancePayload = serde_json::from_value(json!({
            "employee_id": "e1",
            "available_leaves": 12,
            "used_leaves": 3
        }))
        .unwrap();
        let balances = payload.into_balances();
        assert_eq!(
            balances,
            vec![LeaveBalance {
                leave_type: LeaveType::Annual,
                total: 15,
                used: 3,
                remaining: 12,
            }]
        );
    }

    #[test]
    fn extreme_balance_values_saturate() {
        let balance = LeaveBalance::new(LeaveType::Annual, i32::MIN, 1);
        assert_eq!(balance.remaining, i32::MIN);

        let payload: LeaveBalancePayload = serde_json::from_value(json!({
            "available_leaves": i32::MAX,
            "used_leaves": 5
        }))
        .unwrap();
        let balances = payload.into_balances();
        assert_eq!(balances[0].total, i32::MAX);
        assert_eq!(balances[0].remaining, i32::MAX - 5);
    }

    #[test]
    fn error_kind_follows_status() {
        assert_eq!(ApiErrorKind::from_status(401), ApiErrorKind::Auth);
        assert_eq!(ApiErrorKind::from_status(404), ApiErrorKind::NotFound);
        assert_eq!(ApiErrorKind::from_status(422), ApiErrorKind::Validation);
        assert_eq!(ApiErrorKind::from_status(500), ApiErrorKind::Server);
    }

    #[test]
    fn role_round_trips_through_strings() {
        for role in Role::ALL {
            assert_eq!(Role::parse(role.as_str()), Some(role));
        }
        assert_eq!(Role::parse("Manager"), Some(Role::Manager));
        assert_eq!(Role::parse("admin"), None);
    }
}
