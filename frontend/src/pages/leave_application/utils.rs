use crate::api::{ApiError, LeaveApplicationInput, LeaveRequest, LeaveType};
use chrono::NaiveDate;
use leptos::*;

#[derive(Clone, Copy)]
pub struct LeaveFormState {
    pub leave_type: RwSignal<LeaveType>,
    pub start_date: RwSignal<String>,
    pub end_date: RwSignal<String>,
    pub reason: RwSignal<String>,
}

impl Default for LeaveFormState {
    fn default() -> Self {
        Self {
            leave_type: create_rw_signal(LeaveType::Annual),
            start_date: create_rw_signal(String::new()),
            end_date: create_rw_signal(String::new()),
            reason: create_rw_signal(String::new()),
        }
    }
}

impl LeaveFormState {
    pub fn to_input(&self, employee_id: &str) -> Result<LeaveApplicationInput, ApiError> {
        build_input(
            employee_id,
            self.leave_type.get_untracked(),
            &self.start_date.get_untracked(),
            &self.end_date.get_untracked(),
            &self.reason.get_untracked(),
        )
    }

    pub fn reset(&self) {
        self.leave_type.set(LeaveType::Annual);
        self.start_date.set(String::new());
        self.end_date.set(String::new());
        self.reason.set(String::new());
    }
}

fn parse_date(input: &str, err: &str) -> Result<NaiveDate, ApiError> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| ApiError::validation(err))
}

pub fn build_input(
    employee_id: &str,
    leave_type: LeaveType,
    start: &str,
    end: &str,
    reason: &str,
) -> Result<LeaveApplicationInput, ApiError> {
    if employee_id.is_empty() {
        return Err(ApiError::auth("Sign in to apply for leave"));
    }
    let start_date = parse_date(start, "Start date is required")?;
    let end_date = parse_date(end, "End date is required")?;
    if end_date < start_date {
        return Err(ApiError::validation("End date cannot be before start date"));
    }
    let reason = reason.trim();
    if reason.is_empty() {
        return Err(ApiError::validation("Reason is required"));
    }
    Ok(LeaveApplicationInput {
        employee_id: employee_id.to_string(),
        leave_type,
        start_date,
        end_date,
        reason: reason.to_string(),
    })
}

/// Requests belonging to `employee_id`, in server order.
pub fn own_applications(all: Vec<LeaveRequest>, employee_id: &str) -> Vec<LeaveRequest> {
    all.into_iter()
        .filter(|request| request.employee_id == employee_id)
        .collect()
}
