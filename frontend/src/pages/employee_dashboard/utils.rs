use crate::state::access::Capability;

/// Monthly pay breakdown shown to employees. There is no payroll endpoint,
/// so the figures are local sample data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayrollSummary {
    pub base_salary: i64,
    pub bonuses: i64,
    pub deductions: i64,
    pub last_updated: String,
}

impl PayrollSummary {
    pub fn sample() -> Self {
        Self {
            base_salary: 5000,
            bonuses: 500,
            deductions: 300,
            last_updated: "March 2025".into(),
        }
    }

    pub fn net_salary(&self) -> i64 {
        self.base_salary + self.bonuses - self.deductions
    }
}

/// Whole-dollar amount with thousands separators, e.g. `$5,200`.
pub fn format_currency(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if amount < 0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardSection {
    Balances,
    Payroll,
    Applications,
}

pub const DASHBOARD_SECTIONS: &[(Capability, DashboardSection)] = &[
    (Capability::ViewOwnBalance, DashboardSection::Balances),
    (Capability::ViewPayrollSummary, DashboardSection::Payroll),
    (Capability::SubmitLeave, DashboardSection::Applications),
];
