pub mod history;
pub mod payroll;
pub mod pending;
pub mod policy;

pub use history::LeaveHistorySection;
pub use payroll::PayrollSection;
pub use pending::PendingRequestsSection;
pub use policy::LeavePolicySection;
