pub mod employee_dashboard;
pub mod home;
pub mod leave_application;
pub mod leave_balance;
pub mod login;
pub mod manager_dashboard;
pub mod not_found;
pub mod profile;
pub mod register;

pub use employee_dashboard::EmployeeDashboardPage;
pub use home::HomePage;
pub use leave_application::LeaveApplicationPage;
pub use leave_balance::LeaveBalancePage;
pub use login::LoginPage;
pub use manager_dashboard::ManagerDashboardPage;
pub use not_found::NotFoundPage;
pub use profile::ProfilePage;
pub use register::RegisterPage;
