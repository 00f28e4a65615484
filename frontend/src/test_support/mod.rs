#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{LeaveRequest, LeaveStatus, LeaveType, Role, User};
    use crate::state::session::{provide_session, SessionStore};
    use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
    use chrono::NaiveDate;

    pub const TEST_TOKEN: &str = "test-token";

    pub fn employee_user() -> User {
        User {
            id: "u-employee".into(),
            name: "Abdur".into(),
            email: "abdur@gmail.com".into(),
            role: Role::Employee,
        }
    }

    pub fn manager_user() -> User {
        User {
            id: "u-manager".into(),
            name: "Morgan Manager".into(),
            email: "manager@x.com".into(),
            role: Role::Manager,
        }
    }

    /// Unsigned JWT carrying only an `exp` claim.
    pub fn jwt_with_exp(exp: i64) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let payload = URL_SAFE_NO_PAD.encode(format!(r#"{{"sub":"u","exp":{}}}"#, exp));
        format!("{}.{}.signature", header, payload)
    }

    /// Provides an in-memory session, signed in as `user` when given.
    pub fn provide_session_with(user: Option<User>) -> SessionStore {
        let store = SessionStore::in_memory();
        if let Some(user) = user {
            store
                .login(user, TEST_TOKEN.into())
                .expect("memory persistence never fails");
        }
        provide_session(store.clone());
        store
    }

    pub fn leave(id: &str, employee_id: &str, status: LeaveStatus) -> LeaveRequest {
        LeaveRequest {
            id: id.into(),
            employee_id: employee_id.into(),
            employee_name: "Abdur".into(),
            leave_type: LeaveType::Annual,
            start_date: NaiveDate::from_ymd_opt(2024, 3, 20).expect("valid date"),
            end_date: NaiveDate::from_ymd_opt(2024, 3, 22).expect("valid date"),
            status,
            reason: Some("trip".into()),
        }
    }
}
