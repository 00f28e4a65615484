use crate::api::{ApiError, ApiErrorKind, LeaveRequest, LeaveType};
use crate::state::access::Capability;

/// Per-type yearly limits. Kept client-side; no backend endpoint exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeavePolicy {
    pub annual: u32,
    pub sick: u32,
    pub casual: u32,
}

impl Default for LeavePolicy {
    fn default() -> Self {
        Self {
            annual: 20,
            sick: 10,
            casual: 5,
        }
    }
}

impl LeavePolicy {
    pub fn limit(&self, leave_type: LeaveType) -> u32 {
        match leave_type {
            LeaveType::Annual => self.annual,
            LeaveType::Sick => self.sick,
            LeaveType::Casual => self.casual,
        }
    }

    pub fn with_limit(mut self, leave_type: LeaveType, raw: &str) -> Result<Self, ApiError> {
        let value = parse_non_negative(raw, leave_type.label())?;
        let value = u32::try_from(value)
            .map_err(|_| ApiError::validation(format!("{} limit is too large", leave_type.label())))?;
        match leave_type {
            LeaveType::Annual => self.annual = value,
            LeaveType::Sick => self.sick = value,
            LeaveType::Casual => self.casual = value,
        }
        Ok(self)
    }
}

fn parse_non_negative(raw: &str, field: &str) -> Result<i64, ApiError> {
    let value: i64 = raw
        .trim()
        .parse()
        .map_err(|_| ApiError::validation(format!("{} must be a whole number", field)))?;
    if value < 0 {
        return Err(ApiError::validation(format!("{} cannot be negative", field)));
    }
    Ok(value)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalaryStructure {
    pub title: String,
    pub base_salary: i64,
}

pub fn default_salary_structures() -> Vec<SalaryStructure> {
    [
        ("Software Engineer", 5000),
        ("Project Manager", 5500),
        ("HR Manager", 4800),
    ]
    .into_iter()
    .map(|(title, base_salary)| SalaryStructure {
        title: title.to_string(),
        base_salary,
    })
    .collect()
}

pub fn update_salary(
    structures: &mut [SalaryStructure],
    title: &str,
    raw: &str,
) -> Result<(), ApiError> {
    let value = parse_non_negative(raw, title)?;
    let entry = structures
        .iter_mut()
        .find(|structure| structure.title == title)
        .ok_or_else(|| ApiError::new(ApiErrorKind::NotFound, format!("Unknown role {}", title)))?;
    entry.base_salary = value;
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayrollRecord {
    pub employee_name: String,
    pub base_salary: i64,
    pub overtime: i64,
    pub deductions: i64,
}

impl PayrollRecord {
    pub fn net_salary(&self) -> i64 {
        self.base_salary + self.overtime - self.deductions
    }
}

pub fn sample_payroll_report() -> Vec<PayrollRecord> {
    vec![
        PayrollRecord {
            employee_name: "John Doe".into(),
            base_salary: 5000,
            overtime: 200,
            deductions: 300,
        },
        PayrollRecord {
            employee_name: "Jane Smith".into(),
            base_salary: 5500,
            overtime: 150,
            deductions: 350,
        },
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayrollRun {
    pub employees: usize,
    pub total_net: i64,
}

pub fn run_payroll(records: &[PayrollRecord]) -> PayrollRun {
    PayrollRun {
        employees: records.len(),
        total_net: records.iter().map(PayrollRecord::net_salary).sum(),
    }
}

pub fn pending_requests(all: &[LeaveRequest]) -> Vec<LeaveRequest> {
    all.iter()
        .filter(|request| request.status.is_pending())
        .cloned()
        .collect()
}

pub fn decided_requests(all: &[LeaveRequest]) -> Vec<LeaveRequest> {
    all.iter()
        .filter(|request| !request.status.is_pending())
        .cloned()
        .collect()
}

pub fn history_line(request: &LeaveRequest) -> String {
    format!(
        "{} took {} leave from {} to {} ({})",
        request.employee_name,
        request.leave_type.as_str(),
        request.start_date.format("%Y-%m-%d"),
        request.end_date.format("%Y-%m-%d"),
        request.status.as_str()
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManagerSection {
    PendingRequests,
    LeaveHistory,
    LeavePolicy,
    Payroll,
}

pub const MANAGER_SECTIONS: &[(Capability, ManagerSection)] = &[
    (Capability::ReviewLeave, ManagerSection::PendingRequests),
    (Capability::ViewLeaveHistory, ManagerSection::LeaveHistory),
    (Capability::ConfigureLeavePolicy, ManagerSection::LeavePolicy),
    (Capability::ManagePayroll, ManagerSection::Payroll),
];
